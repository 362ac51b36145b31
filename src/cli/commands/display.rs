//! Shared display helpers for rendering a resume.
//!
//! Used by `show` and by the mutating commands when they echo the entry
//! they touched.

use crate::model::{Education, Experience, PersonalInfo, Project, Resume};
use crate::ui::UserInterface;

/// First and last name joined, or an empty string.
pub fn full_name(info: &PersonalInfo) -> String {
    [info.first_name.as_str(), info.last_name.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a start/end pair, e.g. `2020-01 - Present`.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current { "Present" } else { end };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (false, false) => format!("{} - {}", start, end),
    }
}

fn with_dates(label: String, dates: String) -> String {
    if dates.is_empty() {
        label
    } else {
        format!("{} ({})", label, dates)
    }
}

/// One-line summary of an experience entry.
pub fn describe_experience(item: &Experience) -> String {
    let label = if item.position.is_empty() {
        item.company.clone()
    } else {
        format!("{} at {}", item.position, item.company)
    };
    with_dates(
        label,
        date_range(&item.start_date, &item.end_date, item.current),
    )
}

/// One-line summary of an education entry.
pub fn describe_education(item: &Education) -> String {
    let study = match (item.degree.is_empty(), item.field.is_empty()) {
        (true, true) => String::new(),
        (false, true) => item.degree.clone(),
        (true, false) => item.field.clone(),
        (false, false) => format!("{} in {}", item.degree, item.field),
    };
    let label = if study.is_empty() {
        item.school.clone()
    } else {
        format!("{}, {}", study, item.school)
    };
    with_dates(label, date_range(&item.start_date, &item.end_date, false))
}

/// One-line summary of a project.
pub fn describe_project(item: &Project) -> String {
    if item.technologies.is_empty() {
        item.name.clone()
    } else {
        format!("{} [{}]", item.name, item.technologies.join(", "))
    }
}

fn show_optional(ui: &mut dyn UserInterface, key: &str, value: &str) {
    if !value.is_empty() {
        ui.show_field(key, value);
    }
}

fn show_personal_info(ui: &mut dyn UserInterface, info: &PersonalInfo) {
    show_optional(ui, "Name", &full_name(info));
    show_optional(ui, "Title", &info.title);
    show_optional(ui, "Email", &info.email);
    show_optional(ui, "Phone", &info.phone);
    show_optional(ui, "Location", &info.location);
    show_optional(ui, "Website", info.website.as_deref().unwrap_or_default());
    show_optional(ui, "LinkedIn", info.linkedin.as_deref().unwrap_or_default());
    show_optional(ui, "GitHub", info.github.as_deref().unwrap_or_default());
    show_optional(ui, "Summary", &info.summary);
}

/// Render the whole resume as sections of fields.
pub fn show_resume(ui: &mut dyn UserInterface, resume: &Resume) {
    ui.show_header("Personal");
    show_personal_info(ui, &resume.personal_info);

    if !resume.experience.is_empty() {
        ui.show_header("Experience");
        for item in resume.experience.iter() {
            ui.show_field(&item.id, &describe_experience(item));
            for achievement in &item.achievements {
                ui.message(&format!("    - {}", achievement));
            }
        }
    }

    if !resume.education.is_empty() {
        ui.show_header("Education");
        for item in resume.education.iter() {
            ui.show_field(&item.id, &describe_education(item));
        }
    }

    if !resume.projects.is_empty() {
        ui.show_header("Projects");
        for item in resume.projects.iter() {
            ui.show_field(&item.id, &describe_project(item));
        }
    }

    if !resume.skills.is_empty() {
        ui.show_header("Skills");
        ui.message(&format!("  {}", resume.skills.join(", ")));
    }
}
