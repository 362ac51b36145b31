//! Side and portfolio projects.

use serde::{Deserialize, Serialize};

use super::{overlay, Merge, Record};

/// A project listed on the resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Partial update for [`Project`]. Setting `id` moves the entry to a new id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub link: Option<Option<String>>,
    pub github: Option<Option<String>>,
}

impl ProjectPatch {
    /// Check whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Merge for Project {
    type Patch = ProjectPatch;

    fn merged(&self, patch: &ProjectPatch) -> Self {
        let mut next = self.clone();
        overlay(&mut next.id, &patch.id);
        overlay(&mut next.name, &patch.name);
        overlay(&mut next.description, &patch.description);
        overlay(&mut next.technologies, &patch.technologies);
        overlay(&mut next.link, &patch.link);
        overlay(&mut next.github, &patch.github);
        next
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}
