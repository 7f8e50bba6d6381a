//! Conjunctive record predicates.
//!
//! # Invariants
//! - Every active predicate must pass (AND); there is no OR/NOT composition.
//! - Unscheduled records never match `Today`, `Upcoming` or `Overdue`.

use super::selection::{DateTab, FilterSelection};
use crate::model::record::Record;
use chrono::{Days, NaiveDate};

/// Default length of the `Upcoming` window in days.
pub const DEFAULT_UPCOMING_WINDOW_DAYS: u32 = 7;

/// A selection bound to a reference date, ready to test records.
#[derive(Debug, Clone)]
pub struct RecordFilter<'s> {
    selection: &'s FilterSelection,
    needle: String,
    today: NaiveDate,
    upcoming_window_days: u32,
}

impl<'s> RecordFilter<'s> {
    pub fn new(selection: &'s FilterSelection, today: NaiveDate) -> Self {
        Self {
            selection,
            needle: selection.text.to_lowercase(),
            today,
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }

    pub fn with_upcoming_window(mut self, days: u32) -> Self {
        self.upcoming_window_days = days;
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_text(record)
            && self.selection.status.matches(&record.status)
            && self.selection.priority.matches(&record.priority)
            && self.selection.kind.matches(&record.kind)
            && self
                .selection
                .project
                .matches_option(record.project.as_ref().map(|project| &project.id))
            && matches_tab(
                record,
                self.selection.tab,
                self.today,
                self.upcoming_window_days,
            )
    }

    /// Keeps matching records in their original order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }

    fn matches_text(&self, record: &Record) -> bool {
        self.needle.is_empty() || record.title.to_lowercase().contains(&self.needle)
    }
}

/// Filters `records` with the default upcoming window.
pub fn filter_records<'a, I>(records: I, selection: &FilterSelection, today: NaiveDate) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    RecordFilter::new(selection, today).apply(records)
}

/// Date-bucket membership for a single record.
pub fn matches_tab(record: &Record, tab: DateTab, today: NaiveDate, window_days: u32) -> bool {
    match tab {
        DateTab::All => true,
        DateTab::Completed => record.is_completed(),
        DateTab::Today => record.scheduled_on() == Some(today),
        DateTab::Upcoming => record
            .scheduled_on()
            .is_some_and(|date| is_upcoming(date, today, window_days)),
        DateTab::Overdue => {
            !record.is_completed() && record.scheduled_on().is_some_and(|date| date < today)
        }
    }
}

/// `today < date <= today + window_days`.
pub fn is_upcoming(date: NaiveDate, today: NaiveDate, window_days: u32) -> bool {
    let Some(horizon) = today.checked_add_days(Days::new(u64::from(window_days))) else {
        return date > today;
    };
    date > today && date <= horizon
}

#[cfg(test)]
mod tests {
    use super::{is_upcoming, matches_tab, DEFAULT_UPCOMING_WINDOW_DAYS};
    use crate::filter::selection::DateTab;
    use crate::model::record::{Record, Status};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn upcoming_window_is_exclusive_of_today_and_inclusive_of_horizon() {
        let today = date(12);
        assert!(!is_upcoming(date(12), today, 7));
        assert!(is_upcoming(date(13), today, 7));
        assert!(is_upcoming(date(19), today, 7));
        assert!(!is_upcoming(date(20), today, 7));
    }

    #[test]
    fn overdue_requires_open_record_with_past_date() {
        let today = date(12);
        let open = Record::new("1", "late").with_due_date("2025-03-05");
        let done = open.clone().with_status(Status::Done);
        let undated = Record::new("2", "someday");

        assert!(matches_tab(&open, DateTab::Overdue, today, DEFAULT_UPCOMING_WINDOW_DAYS));
        assert!(!matches_tab(&done, DateTab::Overdue, today, DEFAULT_UPCOMING_WINDOW_DAYS));
        assert!(!matches_tab(&undated, DateTab::Overdue, today, DEFAULT_UPCOMING_WINDOW_DAYS));
    }

    #[test]
    fn completed_tab_ignores_dates() {
        let record = Record::new("1", "shipped")
            .with_status(Status::Done)
            .with_due_date("not a date");
        assert!(matches_tab(&record, DateTab::Completed, date(12), 7));
        assert!(!matches_tab(&record, DateTab::Today, date(12), 7));
    }
}
