//! Recent-activity feed.
//!
//! # Invariants
//! - Entries are append-only; the feed never rewrites history.
//! - `from`/`to` are set only for `StatusChanged` entries.

use crate::model::record::{Record, Status};
use crate::service::dashboard::format_relative_time;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries shown on the dashboard feed.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    IssueCreated,
    IssueUpdated,
    StatusChanged,
    ProjectCreated,
}

impl ActivityKind {
    /// Verb phrase used by the feed line.
    pub fn action(self) -> &'static str {
        match self {
            Self::IssueCreated => "created issue",
            Self::IssueUpdated => "updated",
            Self::StatusChanged => "updated status of",
            Self::ProjectCreated => "created project",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    /// Record id, or the project id for `ProjectCreated`.
    pub target_id: String,
    /// Record title or project name when the entry was written.
    pub target: String,
    /// Owning project name, if any.
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub from: Option<Status>,
    #[serde(default)]
    pub to: Option<Status>,
    pub at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn for_record(kind: ActivityKind, record: &Record, at: DateTime<Utc>) -> Self {
        Self {
            kind,
            target_id: record.id.clone(),
            target: record.title.clone(),
            project: record.project.as_ref().map(|project| project.name.clone()),
            from: None,
            to: None,
            at,
        }
    }

    pub fn status_change(record: &Record, from: Status, at: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(record.status),
            ..Self::for_record(ActivityKind::StatusChanged, record, at)
        }
    }

    /// Label such as `2 hours ago`, relative to `now`.
    pub fn relative_time(&self, now: DateTime<Utc>) -> String {
        format_relative_time(self.at, now)
    }
}

/// Newest entries first, at most `limit`.
///
/// Entries sharing a timestamp list the later-appended one first.
pub fn recent_activity(entries: &[ActivityEntry], limit: usize) -> Vec<&ActivityEntry> {
    let mut recent: Vec<&ActivityEntry> = entries.iter().rev().collect();
    recent.sort_by(|left, right| right.at.cmp(&left.at));
    recent.truncate(limit);
    recent
}
