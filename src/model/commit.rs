//! Commit record model
//!
//! Mirrors the JSON shape served by the commit API (`_id`, camelCase
//! timestamps, `type` as a field name).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for display (first 8 chars)
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommitId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CommitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A structured commit message as stored by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    /// Absent until the server has created the record
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<CommitId>,
    pub project: String,
    pub lifecycle: String,
    pub action: String,
    #[serde(rename = "type")]
    pub commit_type: String,
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CommitRecord {
    /// The six text fields that search runs against
    pub fn searchable_fields(&self) -> [&str; 6] {
        [
            &self.project,
            &self.lifecycle,
            &self.action,
            &self.commit_type,
            &self.header,
            self.description.as_deref().unwrap_or(""),
        ]
    }

    /// Case-insensitive substring match over the searchable fields.
    ///
    /// `needle_lower` must already be lower-cased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }

    /// String value of a sortable field (missing optional values read as "")
    pub fn field(&self, field: SortField) -> &str {
        match field {
            SortField::Project => &self.project,
            SortField::Lifecycle => &self.lifecycle,
            SortField::Action => &self.action,
            SortField::Type => &self.commit_type,
            SortField::Header => &self.header,
            SortField::Description => self.description.as_deref().unwrap_or(""),
            SortField::CreatedAt => self.created_at.as_deref().unwrap_or(""),
            SortField::UpdatedAt => self.updated_at.as_deref().unwrap_or(""),
        }
    }

    /// Merge a partial record into this one.
    ///
    /// Only fields present in the patch change. `id` and `created_at` are
    /// never touched.
    pub fn apply_patch(&mut self, patch: &CommitPatch) {
        if let Some(ref project) = patch.project {
            self.project = project.clone();
        }
        if let Some(ref lifecycle) = patch.lifecycle {
            self.lifecycle = lifecycle.clone();
        }
        if let Some(ref action) = patch.action {
            self.action = action.clone();
        }
        if let Some(ref commit_type) = patch.commit_type {
            self.commit_type = commit_type.clone();
        }
        if let Some(ref header) = patch.header {
            self.header = header.clone();
        }
        if let Some(ref description) = patch.description {
            self.description = Some(description.clone());
        }
        if let Some(ref updated_at) = patch.updated_at {
            self.updated_at = Some(updated_at.clone());
        }
    }

    /// Full commit message: header, blank line, description body
    pub fn message(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(body) if !body.is_empty() => format!("{}\n\n{}", self.header, body),
            _ => self.header.clone(),
        }
    }
}

/// Partial record sent with `PUT /commits/{id}`.
///
/// Also used to read the server's answer: unknown fields such as `_id` and
/// `createdAt` are ignored on purpose, so merging it can never rewrite them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub commit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CommitPatch {
    pub fn header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            ..Self::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Body of `POST /commits`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCommit {
    pub project: String,
    pub lifecycle: String,
    pub action: String,
    #[serde(rename = "type")]
    pub commit_type: String,
    pub header: String,
    pub description: String,
}

/// Compose a conventional header: `type(project): summary`.
///
/// The summary is the first non-blank line of the description.
pub fn compose_header(commit_type: &str, project: &str, description: &str) -> String {
    let summary = description
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");
    format!("{}({}): {}", commit_type.trim(), project.trim(), summary)
}

/// Record fields the table can sort by. All of them are strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    Project,
    Lifecycle,
    Action,
    Type,
    Header,
    Description,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::Project,
        SortField::Lifecycle,
        SortField::Action,
        SortField::Type,
        SortField::Header,
        SortField::Description,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortField::Project => "Project",
            SortField::Lifecycle => "Lifecycle",
            SortField::Action => "Action",
            SortField::Type => "Type",
            SortField::Header => "Header",
            SortField::Description => "Description",
            SortField::CreatedAt => "Created",
            SortField::UpdatedAt => "Updated",
        }
    }

    /// Field bound to a digit key (1-based)
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction.
///
/// Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Same field flips direction; another field starts ascending.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Ascending)
        }
    }
}
