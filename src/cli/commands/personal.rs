//! Personal command implementation.
//!
//! The `resumekit personal` command merges the given fields into the
//! stored personal information.

use crate::cli::args::PersonalArgs;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::PersonalInfoPatch;
use crate::ui::UserInterface;

use super::dispatcher::{open_store_reporting, Command, CommandResult};
use super::display::full_name;

/// Map an optional-field argument to a patch slot: an empty value clears.
pub(crate) fn clearable(value: &Option<String>) -> Option<Option<String>> {
    value
        .as_ref()
        .map(|v| if v.is_empty() { None } else { Some(v.clone()) })
}

/// The personal command implementation.
pub struct PersonalCommand {
    config: StoreConfig,
    args: PersonalArgs,
}

impl PersonalCommand {
    /// Create a new personal command.
    pub fn new(config: StoreConfig, args: PersonalArgs) -> Self {
        Self { config, args }
    }

    /// Build the patch described by the arguments.
    pub fn patch(&self) -> PersonalInfoPatch {
        let args = &self.args;
        PersonalInfoPatch {
            first_name: args.first_name.clone(),
            last_name: args.last_name.clone(),
            email: args.email.clone(),
            phone: args.phone.clone(),
            location: args.location.clone(),
            title: args.title.clone(),
            summary: args.summary.clone(),
            website: clearable(&args.website),
            linkedin: clearable(&args.linkedin),
            github: clearable(&args.github),
        }
    }
}

impl Command for PersonalCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let patch = self.patch();
        if patch.is_empty() {
            ui.warning("Nothing to update");
            ui.show_hint("Pass at least one field, e.g. `--email you@example.com`.");
            return Ok(CommandResult::success());
        }

        let mut store = open_store_reporting(&self.config, ui);
        store.update_personal_info(patch)?;

        let name = full_name(&store.resume().personal_info);
        if name.is_empty() {
            ui.success("Updated personal information");
        } else {
            ui.success(&format!("Updated personal information for {}", name));
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

    #[test]
    fn clearable_maps_empty_to_clear() {
        assert_eq!(clearable(&None), None);
        assert_eq!(clearable(&Some(String::new())), Some(None));
        assert_eq!(
            clearable(&Some("x".to_string())),
            Some(Some("x".to_string()))
        );
    }

    #[test]
    fn personal_merges_fields() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let first = PersonalArgs {
            first_name: Some("Ada".to_string()),
            website: Some("https://ada.dev".to_string()),
            ..Default::default()
        };
        let second = PersonalArgs {
            last_name: Some("Lovelace".to_string()),
            ..Default::default()
        };

        let mut ui = MockUI::new();
        PersonalCommand::new(config.clone(), first)
            .execute(&mut ui)
            .unwrap();
        PersonalCommand::new(config.clone(), second)
            .execute(&mut ui)
            .unwrap();

        let store = open_store(&config);
        let info = &store.resume().personal_info;
        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.last_name, "Lovelace");
        assert_eq!(info.website.as_deref(), Some("https://ada.dev"));
        assert!(ui.has_success("Ada Lovelace"));
    }

    #[test]
    fn personal_clears_link_with_empty_value() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();
        let set = PersonalArgs {
            github: Some("ada".to_string()),
            ..Default::default()
        };
        let clear = PersonalArgs {
            github: Some(String::new()),
            ..Default::default()
        };

        PersonalCommand::new(config.clone(), set)
            .execute(&mut ui)
            .unwrap();
        PersonalCommand::new(config.clone(), clear)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(open_store(&config).resume().personal_info.github, None);
    }

    #[test]
    fn personal_without_fields_warns() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let mut ui = MockUI::new();

        let result = PersonalCommand::new(config, PersonalArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Nothing to update"));
        assert!(!temp.path().join("resume-storage.json").exists());
    }
}
