//! Education command implementation.

use crate::cli::args::{EducationAction, EducationAddArgs, EducationArgs, EducationUpdateArgs};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{Education, EducationPatch};
use crate::ui::UserInterface;

use super::dispatcher::{entry_id, open_store_reporting, Command, CommandResult};
use super::display::describe_education;
use super::personal::clearable;

/// The education command implementation.
pub struct EducationCommand {
    config: StoreConfig,
    args: EducationArgs,
}

impl EducationCommand {
    /// Create a new education command.
    pub fn new(config: StoreConfig, args: EducationArgs) -> Self {
        Self { config, args }
    }

    fn record(args: &EducationAddArgs) -> Education {
        Education {
            id: entry_id(args.id.as_deref()),
            school: args.school.clone(),
            degree: args.degree.clone(),
            field: args.field.clone(),
            start_date: args.start_date.clone(),
            end_date: args.end_date.clone(),
            gpa: args.gpa.clone().filter(|gpa| !gpa.is_empty()),
        }
    }

    fn patch(args: &EducationUpdateArgs) -> EducationPatch {
        EducationPatch {
            id: args.new_id.clone(),
            school: args.school.clone(),
            degree: args.degree.clone(),
            field: args.field.clone(),
            start_date: args.start_date.clone(),
            end_date: args.end_date.clone(),
            gpa: clearable(&args.gpa),
        }
    }
}

impl Command for EducationCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = open_store_reporting(&self.config, ui);

        match &self.args.action {
            EducationAction::Add(args) => {
                let item = Self::record(args);
                let id = item.id.clone();
                let summary = describe_education(&item);
                store.add_education(item)?;
                ui.success(&format!("Added education {}: {}", id, summary));
            }
            EducationAction::Update(args) => {
                let patch = Self::patch(args);
                if patch.is_empty() {
                    ui.warning("Nothing to update");
                    return Ok(CommandResult::success());
                }
                if store.resume().find_education(&args.id).is_none() {
                    ui.warning(&format!("No education entry with id '{}'", args.id));
                    return Ok(CommandResult::success());
                }
                store.update_education(&args.id, patch)?;
                let id = args.new_id.as_deref().unwrap_or(&args.id);
                if let Some(item) = store.resume().find_education(id) {
                    ui.success(&format!(
                        "Updated education {}: {}",
                        id,
                        describe_education(item)
                    ));
                }
            }
            EducationAction::Remove(args) => {
                if store.resume().find_education(&args.id).is_none() {
                    ui.warning(&format!("No education entry with id '{}'", args.id));
                    return Ok(CommandResult::success());
                }
                store.remove_education(&args.id)?;
                ui.success(&format!("Removed education {}", args.id));
            }
        }

        Ok(CommandResult::success())
    }
}
