//! Work experience entries.

use serde::{Deserialize, Serialize};

use super::{overlay, Merge, Record};

/// One position held at a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Still working here; `end_date` is usually empty in that case.
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

/// Partial update for [`Experience`]. Setting `id` moves the entry to a new id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperiencePatch {
    pub id: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
}

impl ExperiencePatch {
    /// Check whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Merge for Experience {
    type Patch = ExperiencePatch;

    fn merged(&self, patch: &ExperiencePatch) -> Self {
        let mut next = self.clone();
        overlay(&mut next.id, &patch.id);
        overlay(&mut next.company, &patch.company);
        overlay(&mut next.position, &patch.position);
        overlay(&mut next.start_date, &patch.start_date);
        overlay(&mut next.end_date, &patch.end_date);
        overlay(&mut next.current, &patch.current);
        overlay(&mut next.description, &patch.description);
        overlay(&mut next.achievements, &patch.achievements);
        next
    }
}

impl Record for Experience {
    fn id(&self) -> &str {
        &self.id
    }
}
