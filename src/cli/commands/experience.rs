//! Experience command implementation.
//!
//! `resumekit experience add|update|remove` manages work history entries.

use crate::cli::args::{ExperienceAction, ExperienceAddArgs, ExperienceArgs, ExperienceUpdateArgs};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{Experience, ExperiencePatch};
use crate::ui::UserInterface;

use super::dispatcher::{entry_id, open_store_reporting, Command, CommandResult};
use super::display::describe_experience;

/// The experience command implementation.
pub struct ExperienceCommand {
    config: StoreConfig,
    args: ExperienceArgs,
}

impl ExperienceCommand {
    /// Create a new experience command.
    pub fn new(config: StoreConfig, args: ExperienceArgs) -> Self {
        Self { config, args }
    }

    fn record(args: &ExperienceAddArgs) -> Experience {
        Experience {
            id: entry_id(args.id.as_deref()),
            company: args.company.clone(),
            position: args.position.clone(),
            start_date: args.start_date.clone(),
            end_date: args.end_date.clone(),
            current: args.current,
            description: args.description.clone(),
            achievements: args.achievements.clone(),
        }
    }

    fn patch(args: &ExperienceUpdateArgs) -> ExperiencePatch {
        let achievements = if args.clear_achievements {
            Some(Vec::new())
        } else if args.achievements.is_empty() {
            None
        } else {
            Some(args.achievements.clone())
        };

        ExperiencePatch {
            id: args.new_id.clone(),
            company: args.company.clone(),
            position: args.position.clone(),
            start_date: args.start_date.clone(),
            end_date: args.end_date.clone(),
            current: args.current,
            description: args.description.clone(),
            achievements,
        }
    }
}

impl Command for ExperienceCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = open_store_reporting(&self.config, ui);

        match &self.args.action {
            ExperienceAction::Add(args) => {
                let item = Self::record(args);
                let id = item.id.clone();
                let summary = describe_experience(&item);
                store.add_experience(item)?;
                ui.success(&format!("Added experience {}: {}", id, summary));
            }
            ExperienceAction::Update(args) => {
                let patch = Self::patch(args);
                if patch.is_empty() {
                    ui.warning("Nothing to update");
                    return Ok(CommandResult::success());
                }
                if store.resume().find_experience(&args.id).is_none() {
                    ui.warning(&format!("No experience entry with id '{}'", args.id));
                    return Ok(CommandResult::success());
                }
                store.update_experience(&args.id, patch)?;
                let id = args.new_id.as_deref().unwrap_or(&args.id);
                if let Some(item) = store.resume().find_experience(id) {
                    ui.success(&format!(
                        "Updated experience {}: {}",
                        id,
                        describe_experience(item)
                    ));
                }
            }
            ExperienceAction::Remove(args) => {
                if store.resume().find_experience(&args.id).is_none() {
                    ui.warning(&format!("No experience entry with id '{}'", args.id));
                    return Ok(CommandResult::success());
                }
                store.remove_experience(&args.id)?;
                ui.success(&format!("Removed experience {}", args.id));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::open_store;
    use crate::cli::args::RemoveArgs;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> StoreConfig {
        StoreConfig::default().with_storage_dir(Some(temp.path().to_path_buf()))
    }

    fn add_args(id: &str, company: &str) -> ExperienceAddArgs {
        ExperienceAddArgs {
            id: Some(id.to_string()),
            company: company.to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: String::new(),
            current: true,
            description: String::new(),
            achievements: vec!["Shipped v1".to_string()],
        }
    }

    fn update_args(id: &str) -> ExperienceUpdateArgs {
        ExperienceUpdateArgs {
            id: id.to_string(),
            new_id: None,
            company: None,
            position: None,
            start_date: None,
            end_date: None,
            current: None,
            description: None,
            achievements: Vec::new(),
            clear_achievements: false,
        }
    }

    fn run(config: &StoreConfig, action: ExperienceAction, ui: &mut MockUI) -> CommandResult {
        ExperienceCommand::new(config.clone(), ExperienceArgs { action })
            .execute(ui)
            .unwrap()
    }

    #[test]
    fn add_persists_entry() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();

        run(&config, ExperienceAction::Add(add_args("1", "Acme")), &mut ui);

        let store = open_store(&config);
        let item = store.resume().find_experience("1").unwrap();
        assert_eq!(item.company, "Acme");
        assert!(item.current);
        assert!(ui.has_success("Added experience 1"));
    }

    #[test]
    fn add_generates_id_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();
        let mut args = add_args("unused", "Acme");
        args.id = None;

        run(&config, ExperienceAction::Add(args), &mut ui);

        let store = open_store(&config);
        assert_eq!(store.resume().experience.len(), 1);
        assert!(!store.resume().experience[0].id.is_empty());
    }

    #[test]
    fn update_merges_fields() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();
        run(&config, ExperienceAction::Add(add_args("1", "Acme")), &mut ui);

        let mut args = update_args("1");
        args.company = Some("Beta".to_string());
        args.current = Some(false);
        args.end_date = Some("2023-06".to_string());
        run(&config, ExperienceAction::Update(args), &mut ui);

        let store = open_store(&config);
        let item = store.resume().find_experience("1").unwrap();
        assert_eq!(item.company, "Beta");
        assert_eq!(item.position, "Engineer");
        assert!(!item.current);
        assert_eq!(item.end_date, "2023-06");
        assert_eq!(item.achievements, vec!["Shipped v1"]);
    }

    #[test]
    fn update_moves_entry_to_new_id() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();
        run(&config, ExperienceAction::Add(add_args("1", "Acme")), &mut ui);

        let mut args = update_args("1");
        args.new_id = Some("acme-2020".to_string());
        run(&config, ExperienceAction::Update(args), &mut ui);

        let store = open_store(&config);
        assert!(store.resume().find_experience("1").is_none());
        assert_eq!(
            store.resume().find_experience("acme-2020").unwrap().company,
            "Acme"
        );
        assert!(ui.has_success("Updated experience acme-2020"));
    }

    #[test]
    fn update_can_clear_achievements() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();
        run(&config, ExperienceAction::Add(add_args("1", "Acme")), &mut ui);

        let mut args = update_args("1");
        args.clear_achievements = true;
        run(&config, ExperienceAction::Update(args), &mut ui);

        let store = open_store(&config);
        assert!(store.resume().experience[0].achievements.is_empty());
    }

    #[test]
    fn update_unknown_id_warns() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();
        let mut args = update_args("missing");
        args.company = Some("Beta".to_string());

        let result = run(&config, ExperienceAction::Update(args), &mut ui);

        assert!(result.success);
        assert!(ui.has_warning("No experience entry with id 'missing'"));
    }

    #[test]
    fn update_without_fields_warns() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();

        run(&config, ExperienceAction::Update(update_args("1")), &mut ui);

        assert!(ui.has_warning("Nothing to update"));
    }

    #[test]
    fn remove_deletes_entry() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();
        run(&config, ExperienceAction::Add(add_args("1", "Acme")), &mut ui);
        run(&config, ExperienceAction::Add(add_args("2", "Beta")), &mut ui);

        run(
            &config,
            ExperienceAction::Remove(RemoveArgs {
                id: "1".to_string(),
            }),
            &mut ui,
        );

        let store = open_store(&config);
        assert_eq!(store.resume().experience.len(), 1);
        assert_eq!(store.resume().experience[0].id, "2");
        assert!(ui.has_success("Removed experience 1"));
    }
}
