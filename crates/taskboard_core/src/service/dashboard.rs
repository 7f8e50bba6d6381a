//! Dashboard aggregates and relative-time labels.

use crate::model::project::Project;
use crate::model::record::{Record, Status};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Completion figures for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectProgress {
    pub project_id: String,
    pub name: String,
    pub total: usize,
    pub completed: usize,
    /// Whole percent, 0 when the project has no records.
    pub percent: u8,
}

/// Counters shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_records: usize,
    pub open_records: usize,
    pub completed_records: usize,
    pub total_projects: usize,
    pub completion_rate: u8,
    /// Every status is present, zero counts included.
    pub by_status: BTreeMap<Status, usize>,
    /// In project input order.
    pub projects: Vec<ProjectProgress>,
}

impl DashboardSummary {
    pub fn compute(records: &[Record], projects: &[Project]) -> Self {
        let mut by_status: BTreeMap<Status, usize> =
            Status::ALL.iter().map(|&status| (status, 0)).collect();
        for record in records {
            *by_status.entry(record.status).or_default() += 1;
        }

        let completed_records = records.iter().filter(|record| record.is_completed()).count();
        let project_progress = projects
            .iter()
            .map(|project| {
                let owned = records
                    .iter()
                    .filter(|record| record.project_id() == Some(project.id.as_str()));
                let (total, completed) = owned.fold((0, 0), |(total, completed), record| {
                    (total + 1, completed + usize::from(record.is_completed()))
                });
                ProjectProgress {
                    project_id: project.id.clone(),
                    name: project.name.clone(),
                    total,
                    completed,
                    percent: percent(completed, total),
                }
            })
            .collect();

        Self {
            total_records: records.len(),
            open_records: records.len() - completed_records,
            completed_records,
            total_projects: projects.len(),
            completion_rate: percent(completed_records, records.len()),
            by_status,
            projects: project_progress,
        }
    }
}

/// `round(part / whole * 100)`, or 0 for an empty whole.
fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part * 100 + whole / 2) / whole;
    rounded.min(100) as u8
}

/// Activity-feed label such as `3 hours ago`.
///
/// Falls back to the `YYYY-MM-DD` date after a week. Future timestamps read
/// as `just now`.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    if seconds < 3_600 {
        return plural(seconds / 60, "minute");
    }
    if seconds < 86_400 {
        return plural(seconds / 3_600, "hour");
    }
    if seconds < 604_800 {
        return plural(seconds / 86_400, "day");
    }
    then.format("%Y-%m-%d").to_string()
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
