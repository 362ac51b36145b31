//! The resume aggregate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Education, Experience, PersonalInfo, Project};

/// An ordered list of shared records; insertion order is display order.
pub type RecordList<T> = Arc<Vec<Arc<T>>>;

/// The root document.
///
/// Cloning a `Resume` is cheap: every sub-structure is reference counted,
/// and an updated resume shares the parts it did not change with the
/// resume it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub personal_info: Arc<PersonalInfo>,
    pub experience: RecordList<Experience>,
    pub education: RecordList<Education>,
    pub skills: Arc<Vec<String>>,
    pub projects: RecordList<Project>,
    /// Carried through persistence; no store operation sets it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Carried through persistence; no store operation sets it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resume {
    /// The all-empty initial resume.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Check whether the resume holds no user data at all.
    pub fn is_blank(&self) -> bool {
        *self == Self::initial()
    }

    /// Find an experience entry by id.
    pub fn find_experience(&self, id: &str) -> Option<&Arc<Experience>> {
        self.experience.iter().find(|e| e.id == id)
    }

    /// Find an education entry by id.
    pub fn find_education(&self, id: &str) -> Option<&Arc<Education>> {
        self.education.iter().find(|e| e.id == id)
    }

    /// Find a project by id.
    pub fn find_project(&self, id: &str) -> Option<&Arc<Project>> {
        self.projects.iter().find(|p| p.id == id)
    }
}
