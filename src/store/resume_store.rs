//! The observable resume store.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{
    Education, EducationPatch, Experience, ExperiencePatch, Merge, PersonalInfoPatch, Project,
    ProjectPatch, Resume,
};
use crate::storage::{MemoryStorage, Storage};

use super::envelope::{self, Decoded, PersistOptions};
use super::list;
use super::listeners::{Listeners, Subscription};

/// Holder of the single live [`Resume`].
///
/// Every mutation builds a new resume that shares untouched parts with the
/// previous one, notifies subscribers with the new and previous snapshot,
/// and then writes the resume through to storage.
///
/// The in-memory change always happens. The returned `Result` only reports
/// a failure of the storage write that follows it. Ids that match nothing
/// are not errors: the affected list is left as it was.
///
/// # Example
///
/// ```
/// use resumekit::model::{Experience, ExperiencePatch};
/// use resumekit::store::ResumeStore;
///
/// let mut store = ResumeStore::in_memory();
/// store.add_experience(Experience {
///     id: "1".into(),
///     company: "Acme".into(),
///     ..Default::default()
/// })?;
/// store.update_experience("1", ExperiencePatch {
///     company: Some("Beta".into()),
///     ..Default::default()
/// })?;
/// assert_eq!(store.resume().experience[0].company, "Beta");
///
/// store.remove_experience("1")?;
/// assert!(store.resume().experience.is_empty());
/// # Ok::<(), resumekit::ResumeError>(())
/// ```
pub struct ResumeStore {
    resume: Arc<Resume>,
    storage: Box<dyn Storage>,
    options: PersistOptions,
    listeners: Listeners,
    hydrated: bool,
}

impl ResumeStore {
    /// Open a store over `storage`.
    ///
    /// Unless `options.skip_hydration` is set, the persisted resume is
    /// restored. A slot that is missing, unreadable or written at an
    /// unsupported version leaves the store at the initial resume; the
    /// latter two are logged.
    pub fn open(storage: impl Storage + 'static, options: PersistOptions) -> Self {
        let mut store = Self {
            resume: Arc::new(Resume::initial()),
            storage: Box::new(storage),
            options,
            listeners: Listeners::default(),
            hydrated: false,
        };

        if !store.options.skip_hydration {
            if let Err(e) = store.rehydrate() {
                warn!(
                    key = %store.options.name,
                    error = %e,
                    "Ignoring persisted resume that could not be restored"
                );
            }
        }

        store
    }

    /// Open a store over fresh in-memory storage with default options.
    pub fn in_memory() -> Self {
        Self::open(MemoryStorage::new(), PersistOptions::default())
    }

    /// The current resume.
    pub fn resume(&self) -> &Arc<Resume> {
        &self.resume
    }

    /// A handle to the current resume that outlives later mutations.
    pub fn snapshot(&self) -> Arc<Resume> {
        Arc::clone(&self.resume)
    }

    /// The persistence options in effect.
    pub fn options(&self) -> &PersistOptions {
        &self.options
    }

    /// Whether a hydration from storage has completed.
    pub fn has_hydrated(&self) -> bool {
        self.hydrated
    }

    // --- Subscriptions ---

    /// Register a listener called with `(next, previous)` after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&Arc<Resume>, &Arc<Resume>) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.listeners.remove(subscription)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // --- Personal info ---

    /// Merge `patch` into the personal info.
    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) -> Result<()> {
        let next = Resume {
            personal_info: Arc::new(self.resume.personal_info.merged(&patch)),
            ..Resume::clone(&self.resume)
        };
        self.commit("update_personal_info", next)
    }

    // --- Experience ---

    /// Append an experience entry.
    pub fn add_experience(&mut self, item: Experience) -> Result<()> {
        let next = Resume {
            experience: list::appended(&self.resume.experience, item),
            ..Resume::clone(&self.resume)
        };
        self.commit("add_experience", next)
    }

    /// Merge `patch` into the experience entries with id `id`.
    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) -> Result<()> {
        let next = Resume {
            experience: list::updated(&self.resume.experience, id, &patch),
            ..Resume::clone(&self.resume)
        };
        self.commit("update_experience", next)
    }

    /// Remove the experience entries with id `id`.
    pub fn remove_experience(&mut self, id: &str) -> Result<()> {
        let next = Resume {
            experience: list::removed(&self.resume.experience, id),
            ..Resume::clone(&self.resume)
        };
        self.commit("remove_experience", next)
    }

    // --- Education ---

    /// Append an education entry.
    pub fn add_education(&mut self, item: Education) -> Result<()> {
        let next = Resume {
            education: list::appended(&self.resume.education, item),
            ..Resume::clone(&self.resume)
        };
        self.commit("add_education", next)
    }

    /// Merge `patch` into the education entries with id `id`.
    pub fn update_education(&mut self, id: &str, patch: EducationPatch) -> Result<()> {
        let next = Resume {
            education: list::updated(&self.resume.education, id, &patch),
            ..Resume::clone(&self.resume)
        };
        self.commit("update_education", next)
    }

    /// Remove the education entries with id `id`.
    pub fn remove_education(&mut self, id: &str) -> Result<()> {
        let next = Resume {
            education: list::removed(&self.resume.education, id),
            ..Resume::clone(&self.resume)
        };
        self.commit("remove_education", next)
    }

    // --- Projects ---

    /// Append a project.
    pub fn add_project(&mut self, item: Project) -> Result<()> {
        let next = Resume {
            projects: list::appended(&self.resume.projects, item),
            ..Resume::clone(&self.resume)
        };
        self.commit("add_project", next)
    }

    /// Merge `patch` into the projects with id `id`.
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> Result<()> {
        let next = Resume {
            projects: list::updated(&self.resume.projects, id, &patch),
            ..Resume::clone(&self.resume)
        };
        self.commit("update_project", next)
    }

    /// Remove the projects with id `id`.
    pub fn remove_project(&mut self, id: &str) -> Result<()> {
        let next = Resume {
            projects: list::removed(&self.resume.projects, id),
            ..Resume::clone(&self.resume)
        };
        self.commit("remove_project", next)
    }

    // --- Skills ---

    /// Replace the skills list.
    pub fn set_skills(&mut self, skills: Vec<String>) -> Result<()> {
        let next = Resume {
            skills: Arc::new(skills),
            ..Resume::clone(&self.resume)
        };
        self.commit("set_skills", next)
    }

    /// Replace the whole resume with the initial, empty one.
    pub fn reset_resume(&mut self) -> Result<()> {
        self.commit("reset_resume", Resume::initial())
    }

    // --- Persistence ---

    /// Re-read the persisted resume and make it current.
    ///
    /// A missing slot, or one written at an unsupported version, keeps the
    /// current resume. A migrated resume is written back at the current
    /// version. On error the current resume is left untouched.
    pub fn rehydrate(&mut self) -> Result<()> {
        let key = self.options.name.clone();
        let Some(raw) = self.storage.get_item(&key)? else {
            debug!(key = %key, "No persisted resume found");
            self.hydrated = true;
            return Ok(());
        };

        match envelope::decode(&raw, &self.options)? {
            Decoded::Current(resume) => {
                debug!(key = %key, "Restored persisted resume");
                self.replace(Arc::new(resume));
            }
            Decoded::Migrated { resume, from } => {
                debug!(key = %key, from, to = self.options.version, "Migrated persisted resume");
                self.replace(Arc::new(resume));
                self.persist()?;
            }
            Decoded::Discarded { stored_version } => {
                warn!(
                    key = %key,
                    stored_version,
                    version = self.options.version,
                    "Persisted resume has a different version and no migration; ignoring it"
                );
            }
        }

        self.hydrated = true;
        Ok(())
    }

    /// Remove the persisted resume. The in-memory resume is unchanged.
    pub fn clear_storage(&self) -> Result<()> {
        self.storage.remove_item(&self.options.name)
    }

    /// Make `next` current, notify listeners, then write it through.
    fn commit(&mut self, operation: &'static str, next: Resume) -> Result<()> {
        self.replace(Arc::new(next));
        debug!(
            operation,
            experience = self.resume.experience.len(),
            education = self.resume.education.len(),
            projects = self.resume.projects.len(),
            skills = self.resume.skills.len(),
            "Applied resume operation"
        );
        self.persist()
    }

    fn replace(&mut self, next: Arc<Resume>) {
        let prev = std::mem::replace(&mut self.resume, next);
        self.listeners.notify(&self.resume, &prev);
    }

    fn persist(&self) -> Result<()> {
        let payload = envelope::encode(&self.resume, self.options.version)?;
        self.storage.set_item(&self.options.name, &payload)
    }
}
