//! Show command implementation.
//!
//! The `resumekit show` command prints the stored resume, either as
//! styled sections or as JSON.

use crate::cli::args::ShowArgs;
use crate::config::StoreConfig;
use crate::error::{ResumeError, Result};
use crate::storage::FileStorage;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{open_store_reporting, Command, CommandResult};
use super::display::show_resume;

/// The show command implementation.
pub struct ShowCommand {
    config: StoreConfig,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(config: StoreConfig, args: ShowArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ShowArgs {
        &self.args
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store_reporting(&self.config, ui);
        let resume = store.resume();

        if self.args.json {
            let json = serde_json::to_string_pretty(resume.as_ref()).map_err(|e| {
                ResumeError::Serialize {
                    message: e.to_string(),
                }
            })?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if resume.is_blank() {
            ui.message("Resume is empty.");
            ui.show_hint("Run `resumekit personal --first-name <NAME>` to get started.");
            return Ok(CommandResult::success());
        }

        show_resume(ui, resume);

        if ui.output_mode() == OutputMode::Verbose {
            let path = FileStorage::new(&self.config.storage_dir)
                .slot_path(&self.config.storage_key)?;
            ui.show_hint(&format!("Stored in {}", path.display()));
        }
        Ok(CommandResult::success())
    }
}
