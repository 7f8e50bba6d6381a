//! Record domain model.
//!
//! # Responsibility
//! - Define the canonical issue/task/event record consumed by every view.
//! - Derive completion and scheduling from stored fields.
//!
//! # Invariants
//! - `id` and `title` are non-blank for records admitted to a store.
//! - `is_completed()` is true iff `status == Status::Done`.
//! - A missing or malformed `due_date` means "unscheduled", never an error.

use super::{normalize_token, ParseEnumError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Opaque record identifier supplied by the record source.
pub type RecordId = String;

/// Workflow status. Board columns are exactly these values, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    /// Terminal status; records here count as completed.
    Done,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::ToDo,
        Status::InProgress,
        Status::Review,
        Status::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Position of this status in [`Status::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Done => 3,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Done
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "todo" => Ok(Self::ToDo),
            "inprogress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseEnumError {
                kind: "status",
                value: value.to_string(),
            }),
        }
    }
}

/// Record priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Numeric weight used by descending priority sorts (higher is more urgent).
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseEnumError {
                kind: "priority",
                value: value.to_string(),
            }),
        }
    }
}

/// Record type as shown by the type icon/badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Task,
    Bug,
    Story,
    /// Calendar-only entries such as stand-ups and reviews.
    Meeting,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Task,
        RecordKind::Bug,
        RecordKind::Story,
        RecordKind::Meeting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Bug => "Bug",
            Self::Story => "Story",
            Self::Meeting => "Meeting",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "task" | "tasks" => Ok(Self::Task),
            "bug" | "bugs" => Ok(Self::Bug),
            "story" | "stories" => Ok(Self::Story),
            "meeting" | "meetings" => Ok(Self::Meeting),
            _ => Err(ParseEnumError {
                kind: "type",
                value: value.to_string(),
            }),
        }
    }
}

/// Lightweight reference from a record to its owning project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

impl ProjectRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Validation failures for records entering a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    BlankId,
    BlankTitle { id: RecordId },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "record id must not be blank"),
            Self::BlankTitle { id } => write!(f, "record `{id}` has a blank title"),
        }
    }
}

impl Error for RecordValidationError {}

/// Canonical record for issues, tasks and calendar events.
///
/// Task- and event-specific fields are optional so one shape serves every
/// view without copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Summary line; accepted as `summary` on input as well.
    #[serde(alias = "summary")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Serialized as `type` to match the record source schema.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub status: Status,
    pub priority: Priority,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    /// Raw `YYYY-MM-DD` (or RFC 3339) date as supplied by the source.
    #[serde(default, alias = "dueDate", alias = "date")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Creates an open, medium-priority task with no project or date.
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            kind: RecordKind::Task,
            status: Status::ToDo,
            priority: Priority::Medium,
            project: None,
            due_date: None,
            assignee: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_project(mut self, project: ProjectRef) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Checks the fields a store relies on.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.id.trim().is_empty() {
            return Err(RecordValidationError::BlankId);
        }
        if self.title.trim().is_empty() {
            return Err(RecordValidationError::BlankTitle {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Whether the record sits in the terminal status.
    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Writes completion through to status: `true -> Done`, `false -> To Do`.
    pub fn set_completed(&mut self, completed: bool) {
        self.status = if completed { Status::Done } else { Status::ToDo };
    }

    /// Project id, when the record belongs to one.
    pub fn project_id(&self) -> Option<&str> {
        self.project.as_ref().map(|project| project.id.as_str())
    }

    /// Calendar date of the record, or `None` when unscheduled.
    ///
    /// RFC 3339 timestamps are reduced to their UTC calendar date.
    pub fn scheduled_on(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_calendar_date)
    }

    /// True when a date string is present but cannot be read.
    pub fn has_malformed_date(&self) -> bool {
        self.due_date.is_some() && self.scheduled_on().is_none()
    }
}

/// Parses `YYYY-MM-DD`, falling back to RFC 3339 timestamps in UTC.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|ts| ts.with_timezone(&Utc).date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_calendar_date, Priority, Record, RecordKind, Status};
    use chrono::NaiveDate;

    #[test]
    fn status_parses_display_and_snake_forms() {
        assert_eq!("To Do".parse::<Status>().unwrap(), Status::ToDo);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("DONE".parse::<Status>().unwrap(), Status::Done);
        assert!("Blocked".parse::<Status>().is_err());
    }

    #[test]
    fn status_index_matches_all_order() {
        for (position, status) in Status::ALL.iter().enumerate() {
            assert_eq!(status.index(), position);
        }
    }

    #[test]
    fn kind_accepts_plural_filter_labels() {
        assert_eq!("Stories".parse::<RecordKind>().unwrap(), RecordKind::Story);
        assert_eq!("meetings".parse::<RecordKind>().unwrap(), RecordKind::Meeting);
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn calendar_date_parsing_handles_plain_and_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(parse_calendar_date("2025-03-15"), Some(expected));
        assert_eq!(parse_calendar_date("2025-03-15T23:30:00Z"), Some(expected));
        assert_eq!(parse_calendar_date("2025-03-15T23:30:00-05:00"), expected.succ_opt());
        assert_eq!(parse_calendar_date("15/03/2025"), None);
        assert_eq!(parse_calendar_date("  "), None);
    }

    #[test]
    fn malformed_date_is_unscheduled() {
        let record = Record::new("1", "broken").with_due_date("2025-02-30");
        assert_eq!(record.scheduled_on(), None);
        assert!(record.has_malformed_date());
    }
}
