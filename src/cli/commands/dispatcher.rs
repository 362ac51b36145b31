//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::storage::FileStorage;
use crate::store::{PersistOptions, ResumeStore};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Open the file-backed store described by `config`.
pub fn open_store(config: &StoreConfig) -> ResumeStore {
    ResumeStore::open(
        FileStorage::new(&config.storage_dir),
        PersistOptions::new(&config.storage_key),
    )
}

/// Open the store and warn when the persisted resume could not be read.
pub(crate) fn open_store_reporting(
    config: &StoreConfig,
    ui: &mut dyn UserInterface,
) -> ResumeStore {
    let store = open_store(config);
    if !store.has_hydrated() {
        ui.warning(&format!(
            "Stored resume '{}' could not be read; starting from a blank resume",
            config.storage_key
        ));
    }
    store
}

/// Use the given id, or generate a random one.
pub(crate) fn entry_id(id: Option<&str>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => uuid::Uuid::new_v4().to_string(),
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: StoreConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the given storage settings.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Get the storage settings.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config.clone();
        match &cli.command {
            Commands::Show(args) => {
                super::show::ShowCommand::new(config, args.clone()).execute(ui)
            }
            Commands::Personal(args) => {
                super::personal::PersonalCommand::new(config, args.clone()).execute(ui)
            }
            Commands::Experience(args) => {
                super::experience::ExperienceCommand::new(config, args.clone()).execute(ui)
            }
            Commands::Education(args) => {
                super::education::EducationCommand::new(config, args.clone()).execute(ui)
            }
            Commands::Project(args) => {
                super::project::ProjectCommand::new(config, args.clone()).execute(ui)
            }
            Commands::Skills(args) => {
                super::skills::SkillsCommand::new(config, args.clone()).execute(ui)
            }
            Commands::Reset => super::reset::ResetCommand::new(config).execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> StoreConfig {
        StoreConfig::default().with_storage_dir(Some(temp.path().to_path_buf()))
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn entry_id_prefers_given_id() {
        assert_eq!(entry_id(Some("exp-1")), "exp-1");
        let generated = entry_id(None);
        assert_eq!(generated.len(), 36);
        assert_ne!(generated, entry_id(None));
    }

    #[test]
    fn dispatcher_keeps_config() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(config_in(&temp));
        assert_eq!(dispatcher.config().storage_dir, temp.path());
    }

    #[test]
    fn dispatch_routes_to_skills() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(config_in(&temp));
        let cli = Cli::parse_from(["resumekit", "skills", "Rust,Go"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        let store = open_store(dispatcher.config());
        assert_eq!(*store.resume().skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn open_store_reporting_warns_on_unreadable_slot() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        std::fs::write(temp.path().join("resume-storage.json"), "not json").unwrap();
        let mut ui = MockUI::new();

        let store = open_store_reporting(&config, &mut ui);

        assert!(store.resume().is_blank());
        assert!(ui.has_warning("could not be read"));
    }

    #[test]
    fn open_store_reporting_is_quiet_for_missing_slot() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let store = open_store_reporting(&config_in(&temp), &mut ui);

        assert!(store.has_hydrated());
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn open_store_uses_configured_key() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(&temp);
        config.storage_key = "other-slot".to_string();

        let mut store = open_store(&config);
        store.set_skills(vec!["Rust".to_string()]).unwrap();

        assert!(temp.path().join("other-slot.json").exists());
    }
}
