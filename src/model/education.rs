//! Education entries.

use serde::{Deserialize, Serialize};

use super::{overlay, Merge, Record};

/// A degree or course of study.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// Partial update for [`Education`]. Setting `id` moves the entry to a new id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationPatch {
    pub id: Option<String>,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<Option<String>>,
}

impl EducationPatch {
    /// Check whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Merge for Education {
    type Patch = EducationPatch;

    fn merged(&self, patch: &EducationPatch) -> Self {
        let mut next = self.clone();
        overlay(&mut next.id, &patch.id);
        overlay(&mut next.school, &patch.school);
        overlay(&mut next.degree, &patch.degree);
        overlay(&mut next.field, &patch.field);
        overlay(&mut next.start_date, &patch.start_date);
        overlay(&mut next.end_date, &patch.end_date);
        overlay(&mut next.gpa, &patch.gpa);
        next
    }
}

impl Record for Education {
    fn id(&self) -> &str {
        &self.id
    }
}
