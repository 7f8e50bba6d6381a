//! List view ordering.

use crate::model::record::Record;
use crate::model::ParseEnumError;
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort key for the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Record store order.
    #[default]
    Insertion,
    /// Title, case-insensitive ascending.
    Title,
    /// Due date ascending; unscheduled records last.
    DueDate,
    /// Priority rank descending.
    Priority,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Title => "title",
            Self::DueDate => "due",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "insertion" | "none" | "default" => Ok(Self::Insertion),
            "title" => Ok(Self::Title),
            "due" | "date" | "due_date" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            _ => Err(ParseEnumError {
                kind: "sort key",
                value: value.to_string(),
            }),
        }
    }
}

/// Orders `records` by `key`. Ties keep their input order.
pub fn project_list(mut records: Vec<&Record>, key: SortKey) -> Vec<&Record> {
    match key {
        SortKey::Insertion => {}
        SortKey::Title => {
            records.sort_by_cached_key(|record| record.title.to_lowercase());
        }
        SortKey::DueDate => {
            records.sort_by(|left, right| compare_due(left, right));
        }
        SortKey::Priority => {
            records.sort_by(|left, right| right.priority.rank().cmp(&left.priority.rank()));
        }
    }
    records
}

fn compare_due(left: &Record, right: &Record) -> Ordering {
    match (left.scheduled_on(), right.scheduled_on()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
