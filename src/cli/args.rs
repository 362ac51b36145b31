//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// resumekit - Keep your resume in a persistent local store.
#[derive(Debug, Parser)]
#[command(name = "resumekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.resumekit/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted resume
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print data and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the current resume
    Show(ShowArgs),

    /// Update personal information
    Personal(PersonalArgs),

    /// Manage work experience entries
    Experience(ExperienceArgs),

    /// Manage education entries
    Education(EducationArgs),

    /// Manage projects
    Project(ProjectArgs),

    /// Replace the skills list
    Skills(SkillsArgs),

    /// Discard the resume and start over
    Reset,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output the resume as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `personal` command.
///
/// Optional links are cleared by passing an empty value, e.g. `--website ""`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PersonalArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Professional headline
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub summary: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    #[arg(long)]
    pub linkedin: Option<String>,

    #[arg(long)]
    pub github: Option<String>,
}

/// Arguments for the `experience` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExperienceArgs {
    #[command(subcommand)]
    pub action: ExperienceAction,
}

/// Experience subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ExperienceAction {
    /// Append an experience entry
    Add(ExperienceAddArgs),
    /// Update fields of an experience entry
    Update(ExperienceUpdateArgs),
    /// Remove an experience entry
    Remove(RemoveArgs),
}

/// Arguments for `experience add`.
#[derive(Debug, Clone, clap::Args)]
pub struct ExperienceAddArgs {
    /// Entry id (a random id is generated when omitted)
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub company: String,

    #[arg(long, default_value = "")]
    pub position: String,

    #[arg(long, default_value = "")]
    pub start_date: String,

    #[arg(long, default_value = "")]
    pub end_date: String,

    /// Currently working here
    #[arg(long)]
    pub current: bool,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Achievement (repeatable)
    #[arg(long = "achievement")]
    pub achievements: Vec<String>,
}

/// Arguments for `experience update`.
#[derive(Debug, Clone, clap::Args)]
pub struct ExperienceUpdateArgs {
    /// Id of the entry to update
    pub id: String,

    /// Move the entry to a new id
    #[arg(long)]
    pub new_id: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub start_date: Option<String>,

    #[arg(long)]
    pub end_date: Option<String>,

    /// Currently working here (true/false)
    #[arg(long)]
    pub current: Option<bool>,

    #[arg(long)]
    pub description: Option<String>,

    /// Replace achievements (repeatable)
    #[arg(long = "achievement")]
    pub achievements: Vec<String>,

    /// Remove all achievements
    #[arg(long, conflicts_with = "achievements")]
    pub clear_achievements: bool,
}

/// Arguments for the `education` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EducationArgs {
    #[command(subcommand)]
    pub action: EducationAction,
}

/// Education subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum EducationAction {
    /// Append an education entry
    Add(EducationAddArgs),
    /// Update fields of an education entry
    Update(EducationUpdateArgs),
    /// Remove an education entry
    Remove(RemoveArgs),
}

/// Arguments for `education add`.
#[derive(Debug, Clone, clap::Args)]
pub struct EducationAddArgs {
    /// Entry id (a random id is generated when omitted)
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub school: String,

    #[arg(long, default_value = "")]
    pub degree: String,

    #[arg(long, default_value = "")]
    pub field: String,

    #[arg(long, default_value = "")]
    pub start_date: String,

    #[arg(long, default_value = "")]
    pub end_date: String,

    #[arg(long)]
    pub gpa: Option<String>,
}

/// Arguments for `education update`.
///
/// The GPA is cleared by passing an empty value: `--gpa ""`.
#[derive(Debug, Clone, clap::Args)]
pub struct EducationUpdateArgs {
    /// Id of the entry to update
    pub id: String,

    /// Move the entry to a new id
    #[arg(long)]
    pub new_id: Option<String>,

    #[arg(long)]
    pub school: Option<String>,

    #[arg(long)]
    pub degree: Option<String>,

    #[arg(long)]
    pub field: Option<String>,

    #[arg(long)]
    pub start_date: Option<String>,

    #[arg(long)]
    pub end_date: Option<String>,

    #[arg(long)]
    pub gpa: Option<String>,
}

/// Arguments for the `project` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub action: ProjectAction,
}

/// Project subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ProjectAction {
    /// Append a project
    Add(ProjectAddArgs),
    /// Update fields of a project
    Update(ProjectUpdateArgs),
    /// Remove a project
    Remove(RemoveArgs),
}

/// Arguments for `project add`.
#[derive(Debug, Clone, clap::Args)]
pub struct ProjectAddArgs {
    /// Project id (a random id is generated when omitted)
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Technologies used (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub technologies: Vec<String>,

    #[arg(long)]
    pub link: Option<String>,

    #[arg(long)]
    pub github: Option<String>,
}

/// Arguments for `project update`.
///
/// Links are cleared by passing an empty value, e.g. `--link ""`.
#[derive(Debug, Clone, clap::Args)]
pub struct ProjectUpdateArgs {
    /// Id of the project to update
    pub id: String,

    /// Move the project to a new id
    #[arg(long)]
    pub new_id: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Replace technologies (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub technologies: Option<Vec<String>>,

    #[arg(long)]
    pub link: Option<String>,

    #[arg(long)]
    pub github: Option<String>,
}

/// Arguments shared by every `remove` subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Id of the entry to remove
    pub id: String,
}

/// Arguments for the `skills` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SkillsArgs {
    /// The complete skills list (comma- or space-separated)
    #[arg(value_delimiter = ',', required_unless_present = "clear")]
    pub skills: Vec<String>,

    /// Remove all skills
    #[arg(long, conflicts_with = "skills")]
    pub clear: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
