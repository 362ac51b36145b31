//! Personal details shown at the top of a resume.

use serde::{Deserialize, Serialize};

use super::{overlay, Merge};

/// Contact and headline information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Professional headline, e.g. "Backend Engineer".
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Partial update for [`PersonalInfo`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub website: Option<Option<String>>,
    pub linkedin: Option<Option<String>>,
    pub github: Option<Option<String>>,
}

impl PersonalInfoPatch {
    /// Check whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Merge for PersonalInfo {
    type Patch = PersonalInfoPatch;

    fn merged(&self, patch: &PersonalInfoPatch) -> Self {
        let mut next = self.clone();
        overlay(&mut next.first_name, &patch.first_name);
        overlay(&mut next.last_name, &patch.last_name);
        overlay(&mut next.email, &patch.email);
        overlay(&mut next.phone, &patch.phone);
        overlay(&mut next.location, &patch.location);
        overlay(&mut next.title, &patch.title);
        overlay(&mut next.summary, &patch.summary);
        overlay(&mut next.website, &patch.website);
        overlay(&mut next.linkedin, &patch.linkedin);
        overlay(&mut next.github, &patch.github);
        next
    }
}
