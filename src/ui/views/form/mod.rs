//! Form View - the commit message generator
//!
//! Four creatable selectors (project, lifecycle, action, type) and a
//! description. Submitting composes the header and hands a [`NewCommit`]
//! back to the App; a missing field never leaves this view.

mod input;
mod render;
pub mod selector;

pub use render::FORM_HEIGHT;
pub use selector::{SelectOption, Selector, slugify};

use thiserror::Error;
use tui_textarea::{CursorMove, TextArea};

use crate::model::{CommitRecord, NewCommit, compose_header};

/// Built-in lifecycle options
pub const LIFECYCLE_OPTIONS: &[&str] = &[
    "planning",
    "development",
    "testing",
    "release",
    "maintenance",
];

/// Built-in action options
pub const ACTION_OPTIONS: &[&str] = &["add", "update", "fix", "remove", "refactor"];

/// Built-in type options (conventional commit types)
pub const TYPE_OPTIONS: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "build", "ci",
];

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Project,
    Lifecycle,
    Action,
    Type,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Project,
        FormField::Lifecycle,
        FormField::Action,
        FormField::Type,
        FormField::Description,
    ];

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Name used in validation messages
    pub fn name(self) -> &'static str {
        match self {
            FormField::Project => "project",
            FormField::Lifecycle => "lifecycle",
            FormField::Action => "action",
            FormField::Type => "type",
            FormField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Actions that FormView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// No action needed
    None,
    /// Send `POST /commits`
    Submit(NewCommit),
    /// Submission refused; nothing was sent
    Invalid(ValidationError),
    /// Hand focus back to the table
    FocusTable,
}

/// Form View state
#[derive(Debug)]
pub struct FormView {
    pub project: Selector,
    pub lifecycle: Selector,
    pub action: Selector,
    pub commit_type: Selector,
    pub(crate) description: TextArea<'static>,
    pub focused: FormField,
    /// Last refused submission, shown under the description
    pub validation_error: Option<ValidationError>,
}

impl Default for FormView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView {
    pub fn new() -> Self {
        Self {
            project: Selector::new("Project", &[]),
            lifecycle: Selector::new("Lifecycle", LIFECYCLE_OPTIONS),
            action: Selector::new("Action", ACTION_OPTIONS),
            commit_type: Selector::new("Type", TYPE_OPTIONS),
            description: TextArea::default(),
            focused: FormField::default(),
            validation_error: None,
        }
    }

    pub fn selector(&self, field: FormField) -> Option<&Selector> {
        match field {
            FormField::Project => Some(&self.project),
            FormField::Lifecycle => Some(&self.lifecycle),
            FormField::Action => Some(&self.action),
            FormField::Type => Some(&self.commit_type),
            FormField::Description => None,
        }
    }

    pub fn selector_mut(&mut self, field: FormField) -> Option<&mut Selector> {
        match field {
            FormField::Project => Some(&mut self.project),
            FormField::Lifecycle => Some(&mut self.lifecycle),
            FormField::Action => Some(&mut self.action),
            FormField::Type => Some(&mut self.commit_type),
            FormField::Description => None,
        }
    }

    pub fn description_text(&self) -> String {
        self.description.lines().join("\n")
    }

    pub fn set_description(&mut self, text: &str) {
        if text.is_empty() {
            self.description = TextArea::default();
            return;
        }
        self.description = TextArea::new(text.lines().map(str::to_string).collect());
        self.description.move_cursor(CursorMove::Bottom);
        self.description.move_cursor(CursorMove::End);
    }

    /// Header the current fields would produce, with `?` for blanks
    pub fn preview_header(&self) -> String {
        compose_header(
            self.commit_type.value().unwrap_or("?"),
            self.project.value().unwrap_or("?"),
            &self.description_text(),
        )
    }

    /// Build the create request, or name every missing field
    pub fn validate(&self) -> Result<NewCommit, ValidationError> {
        let description = self.description_text();
        let description = description.trim();

        let missing: Vec<&'static str> = FormField::ALL
            .iter()
            .filter(|&&field| match self.selector(field) {
                Some(selector) => selector.value().is_none(),
                None => description.is_empty(),
            })
            .map(|field| field.name())
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let project = self.project.value().unwrap_or_default().to_string();
        let commit_type = self.commit_type.value().unwrap_or_default().to_string();
        Ok(NewCommit {
            header: compose_header(&commit_type, &project, description),
            project,
            lifecycle: self.lifecycle.value().unwrap_or_default().to_string(),
            action: self.action.value().unwrap_or_default().to_string(),
            commit_type,
            description: description.to_string(),
        })
    }

    /// Validate and turn the outcome into an action
    pub fn submit(&mut self) -> FormAction {
        match self.validate() {
            Ok(commit) => {
                self.validation_error = None;
                FormAction::Submit(commit)
            }
            Err(error) => {
                tracing::debug!(%error, "commit form refused");
                self.validation_error = Some(error.clone());
                FormAction::Invalid(error)
            }
        }
    }

    /// Clear the description after a successful create. Selectors keep
    /// their values so related commits are quick to enter.
    pub fn reset_description(&mut self) {
        self.description = TextArea::default();
        self.validation_error = None;
    }

    /// Offer the projects of loaded records as options
    pub fn absorb_projects(&mut self, records: &[CommitRecord]) {
        self.project
            .absorb(records.iter().map(|r| r.project.as_str()));
    }

    pub fn focus(&mut self, field: FormField) {
        if let Some(selector) = self.selector_mut(self.focused) {
            selector.clear_query();
        }
        self.focused = field;
        if let Some(selector) = self.selector_mut(field) {
            selector.sync_cursor();
        }
    }
}

#[cfg(test)]
mod tests;
