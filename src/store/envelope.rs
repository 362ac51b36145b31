//! Persisted envelope and persistence options.
//!
//! The stored value is a JSON envelope around the resume:
//!
//! ```json
//! {"state":{"resume":{...}},"version":0}
//! ```
//!
//! `version` lets a later release migrate state written by an older one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ResumeError, Result};
use crate::model::Resume;

/// Default storage key for the resume.
pub const DEFAULT_STORAGE_KEY: &str = "resume-storage";

/// Upgrade a stored `state` object written at an older version.
///
/// Receives the raw `state` JSON and the version it was written with, and
/// returns the `state` JSON for the current version.
pub type MigrateFn = fn(Value, u32) -> anyhow::Result<Value>;

/// How the store persists its state.
#[derive(Debug, Clone)]
pub struct PersistOptions {
    /// Storage key the envelope is written under.
    pub name: String,
    /// Version written into the envelope.
    pub version: u32,
    /// Migration for envelopes with a different version.
    pub migrate: Option<MigrateFn>,
    /// Do not read storage when the store is opened.
    pub skip_hydration: bool,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_STORAGE_KEY.to_string(),
            version: 0,
            migrate: None,
            skip_hydration: false,
        }
    }
}

impl PersistOptions {
    /// Options for a custom storage key.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the envelope version.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Set the migration used for envelopes with another version.
    pub fn with_migrate(mut self, migrate: MigrateFn) -> Self {
        self.migrate = Some(migrate);
        self
    }

    /// Open the store without reading storage.
    pub fn skip_hydration(mut self) -> Self {
        self.skip_hydration = true;
        self
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: StateRef<'a>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a> {
    resume: &'a Resume,
}

#[derive(Deserialize)]
struct StoredEnvelope {
    #[serde(default)]
    state: Value,
    /// Absent in envelopes written without a version; read as current.
    #[serde(default)]
    version: Option<u32>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct StoredState {
    resume: Resume,
}

/// Outcome of decoding a stored envelope.
#[derive(Debug)]
pub(crate) enum Decoded {
    /// Written at the current version.
    Current(Resume),
    /// Written at another version and migrated; should be written back.
    Migrated { resume: Resume, from: u32 },
    /// Written at another version with no migration available.
    Discarded { stored_version: u32 },
}

/// Serialize `resume` into an envelope string.
pub(crate) fn encode(resume: &Resume, version: u32) -> Result<String> {
    let envelope = EnvelopeRef {
        state: StateRef { resume },
        version,
    };
    serde_json::to_string(&envelope).map_err(|e| ResumeError::Serialize {
        message: e.to_string(),
    })
}

/// Decode a stored envelope according to `options`.
pub(crate) fn decode(raw: &str, options: &PersistOptions) -> Result<Decoded> {
    let parse_error = |e: serde_json::Error| ResumeError::StorageParse {
        key: options.name.clone(),
        message: e.to_string(),
    };

    let envelope: StoredEnvelope = serde_json::from_str(raw).map_err(parse_error)?;
    let stored_version = envelope.version.unwrap_or(options.version);

    if stored_version == options.version {
        let state = state_from_value(envelope.state).map_err(parse_error)?;
        return Ok(Decoded::Current(state.resume));
    }

    let Some(migrate) = options.migrate else {
        return Ok(Decoded::Discarded { stored_version });
    };

    let migration_error = |message: String| ResumeError::Migration {
        from: stored_version,
        to: options.version,
        message,
    };
    let migrated = migrate(envelope.state, stored_version)
        .map_err(|e| migration_error(format!("{:#}", e)))?;
    let state = state_from_value(migrated).map_err(|e| migration_error(e.to_string()))?;

    Ok(Decoded::Migrated {
        resume: state.resume,
        from: stored_version,
    })
}

fn state_from_value(value: Value) -> serde_json::Result<StoredState> {
    if value.is_null() {
        return Ok(StoredState::default());
    }
    serde_json::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonalInfo;
    use serde_json::json;
    use std::sync::Arc;

    fn named(first: &str) -> Resume {
        Resume {
            personal_info: Arc::new(PersonalInfo {
                first_name: first.into(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn default_options_use_fixed_key() {
        let options = PersistOptions::default();
        assert_eq!(options.name, "resume-storage");
        assert_eq!(options.version, 0);
        assert!(options.migrate.is_none());
        assert!(!options.skip_hydration);
    }

    #[test]
    fn encode_wraps_resume_in_state() {
        let raw = encode(&named("Ada"), 3).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 3);
        assert_eq!(value["state"]["resume"]["personalInfo"]["firstName"], "Ada");
    }

    #[test]
    fn initial_envelope_layout() {
        let raw = encode(&Resume::initial(), 0).unwrap();
        insta::assert_snapshot!(raw, @r#"{"state":{"resume":{"personalInfo":{"firstName":"","lastName":"","email":"","phone":"","location":"","title":"","summary":""},"experience":[],"education":[],"skills":[],"projects":[]}},"version":0}"#);
    }

    #[test]
    fn decode_current_version_restores_resume() {
        let options = PersistOptions::default();
        let raw = encode(&named("Ada"), 0).unwrap();
        match decode(&raw, &options).unwrap() {
            Decoded::Current(resume) => assert_eq!(resume, named("Ada")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn decode_tolerates_missing_state() {
        let options = PersistOptions::default();
        match decode(r#"{"version":0}"#, &options).unwrap() {
            Decoded::Current(resume) => assert!(resume.is_blank()),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn decode_missing_version_counts_as_current() {
        let options = PersistOptions::default().with_version(1);
        let raw = r#"{"state":{"resume":{"skills":["Rust"]}}}"#;
        match decode(raw, &options).unwrap() {
            Decoded::Current(resume) => assert_eq!(*resume.skills, vec!["Rust"]),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn decode_other_version_without_migrate_is_discarded() {
        let options = PersistOptions::default().with_version(2);
        let raw = encode(&named("Ada"), 1).unwrap();
        assert!(matches!(
            decode(&raw, &options).unwrap(),
            Decoded::Discarded { stored_version: 1 }
        ));
    }

    #[test]
    fn decode_runs_migration() {
        fn rename_first(mut state: Value, from: u32) -> anyhow::Result<Value> {
            assert_eq!(from, 0);
            state["resume"]["personalInfo"]["firstName"] = json!("Migrated");
            Ok(state)
        }

        let options = PersistOptions::default()
            .with_version(1)
            .with_migrate(rename_first);
        let raw = encode(&named("Ada"), 0).unwrap();

        match decode(&raw, &options).unwrap() {
            Decoded::Migrated { resume, from } => {
                assert_eq!(from, 0);
                assert_eq!(resume.personal_info.first_name, "Migrated");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn decode_reports_failed_migration() {
        fn refuse(_state: Value, _from: u32) -> anyhow::Result<Value> {
            anyhow::bail!("unsupported layout")
        }

        let options = PersistOptions::default().with_version(5).with_migrate(refuse);
        let raw = encode(&named("Ada"), 4).unwrap();
        let err = decode(&raw, &options).unwrap_err();
        assert!(matches!(err, ResumeError::Migration { from: 4, to: 5, .. }));
        assert!(err.to_string().contains("unsupported layout"));
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode("not json", &PersistOptions::default()).unwrap_err();
        assert!(matches!(err, ResumeError::StorageParse { .. }));
    }
}
