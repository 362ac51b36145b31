//! Skills command implementation.

use crate::cli::args::SkillsArgs;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{open_store_reporting, Command, CommandResult};

/// The skills command implementation.
pub struct SkillsCommand {
    config: StoreConfig,
    args: SkillsArgs,
}

impl SkillsCommand {
    /// Create a new skills command.
    pub fn new(config: StoreConfig, args: SkillsArgs) -> Self {
        Self { config, args }
    }

    /// The skills list to store, trimmed and without blanks.
    pub fn skills(&self) -> Vec<String> {
        if self.args.clear {
            return Vec::new();
        }
        self.args
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Command for SkillsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let skills = self.skills();
        let count = skills.len();

        let mut store = open_store_reporting(&self.config, ui);
        store.set_skills(skills)?;

        if count == 0 {
            ui.success("Cleared skills");
        } else {
            ui.success(&format!("Saved {} skill(s)", count));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::open_store;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> StoreConfig {
        StoreConfig::default().with_storage_dir(Some(temp.path().to_path_buf()))
    }

    fn args(skills: &[&str], clear: bool) -> SkillsArgs {
        SkillsArgs {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            clear,
        }
    }

    #[test]
    fn skills_are_trimmed() {
        let temp = TempDir::new().unwrap();
        let cmd = SkillsCommand::new(config_in(&temp), args(&[" Rust", "", "Go "], false));
        assert_eq!(cmd.skills(), vec!["Rust", "Go"]);
    }

    #[test]
    fn skills_replace_existing_list() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();

        SkillsCommand::new(config.clone(), args(&["Rust", "Go"], false))
            .execute(&mut ui)
            .unwrap();
        SkillsCommand::new(config.clone(), args(&["Python"], false))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(*open_store(&config).resume().skills, vec!["Python"]);
        assert!(ui.has_success("Saved 1 skill(s)"));
    }

    #[test]
    fn clear_empties_list() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();
        SkillsCommand::new(config.clone(), args(&["Rust"], false))
            .execute(&mut ui)
            .unwrap();

        SkillsCommand::new(config.clone(), args(&[], true))
            .execute(&mut ui)
            .unwrap();

        assert!(open_store(&config).resume().skills.is_empty());
        assert!(ui.has_success("Cleared skills"));
    }
}
