//! Resume data model.
//!
//! The [`Resume`] aggregate owns one [`PersonalInfo`] and ordered lists of
//! [`Experience`], [`Education`] and [`Project`] records plus a skills list.
//! Every sub-structure sits behind an [`Arc`](std::sync::Arc) so that an
//! updated resume can share untouched parts with its predecessor.
//!
//! Partial updates are expressed with patch types (`*Patch`): a `None`
//! field keeps the prior value. Optional record fields use a nested
//! `Option` in the patch so that a value can be cleared explicitly.

pub mod education;
pub mod experience;
pub mod personal_info;
pub mod project;
pub mod resume;

pub use education::{Education, EducationPatch};
pub use experience::{Experience, ExperiencePatch};
pub use personal_info::{PersonalInfo, PersonalInfoPatch};
pub use project::{Project, ProjectPatch};
pub use resume::{RecordList, Resume};

/// A value that can absorb a partial update.
pub trait Merge {
    /// The partial-update type for this value.
    type Patch;

    /// Return a copy of `self` with every field present in `patch` replaced.
    fn merged(&self, patch: &Self::Patch) -> Self;
}

/// A list entry addressed by a caller-supplied id.
pub trait Record: Merge {
    /// The entry's id.
    fn id(&self) -> &str;
}

/// Overwrite `slot` when the patch carries a value for it.
pub(crate) fn overlay<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}
