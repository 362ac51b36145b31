//! Project command implementation.

use crate::cli::args::{ProjectAction, ProjectAddArgs, ProjectArgs, ProjectUpdateArgs};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{Project, ProjectPatch};
use crate::ui::UserInterface;

use super::dispatcher::{entry_id, open_store_reporting, Command, CommandResult};
use super::display::describe_project;
use super::personal::clearable;

/// The project command implementation.
pub struct ProjectCommand {
    config: StoreConfig,
    args: ProjectArgs,
}

impl ProjectCommand {
    /// Create a new project command.
    pub fn new(config: StoreConfig, args: ProjectArgs) -> Self {
        Self { config, args }
    }

    fn record(args: &ProjectAddArgs) -> Project {
        Project {
            id: entry_id(args.id.as_deref()),
            name: args.name.clone(),
            description: args.description.clone(),
            technologies: args.technologies.clone(),
            link: args.link.clone().filter(|link| !link.is_empty()),
            github: args.github.clone().filter(|github| !github.is_empty()),
        }
    }

    fn patch(args: &ProjectUpdateArgs) -> ProjectPatch {
        ProjectPatch {
            id: args.new_id.clone(),
            name: args.name.clone(),
            description: args.description.clone(),
            technologies: args.technologies.clone(),
            link: clearable(&args.link),
            github: clearable(&args.github),
        }
    }
}

impl Command for ProjectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = open_store_reporting(&self.config, ui);

        match &self.args.action {
            ProjectAction::Add(args) => {
                let item = Self::record(args);
                let id = item.id.clone();
                let summary = describe_project(&item);
                store.add_project(item)?;
                ui.success(&format!("Added project {}: {}", id, summary));
            }
            ProjectAction::Update(args) => {
                let patch = Self::patch(args);
                if patch.is_empty() {
                    ui.warning("Nothing to update");
                    return Ok(CommandResult::success());
                }
                if store.resume().find_project(&args.id).is_none() {
                    ui.warning(&format!("No project with id '{}'", args.id));
                    return Ok(CommandResult::success());
                }
                store.update_project(&args.id, patch)?;
                let id = args.new_id.as_deref().unwrap_or(&args.id);
                if let Some(item) = store.resume().find_project(id) {
                    ui.success(&format!(
                        "Updated project {}: {}",
                        id,
                        describe_project(item)
                    ));
                }
            }
            ProjectAction::Remove(args) => {
                if store.resume().find_project(&args.id).is_none() {
                    ui.warning(&format!("No project with id '{}'", args.id));
                    return Ok(CommandResult::success());
                }
                store.remove_project(&args.id)?;
                ui.success(&format!("Removed project {}", args.id));
            }
        }

        Ok(CommandResult::success())
    }
}
