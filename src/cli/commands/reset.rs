//! Reset command implementation.
//!
//! The `resumekit reset` command replaces the stored resume with the
//! initial, blank one.

use crate::config::StoreConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    config: StoreConfig,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = open_store(&self.config);
        store.reset_resume()?;
        ui.success("Resume reset");
        Ok(CommandResult::success())
    }
}
