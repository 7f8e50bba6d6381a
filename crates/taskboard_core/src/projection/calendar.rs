//! Calendar month projection.
//!
//! # Invariants
//! - Bucket keys are `YYYY-MM-DD` strings for dates inside the displayed month.
//! - Buckets keep every matching record; display caps only affect
//!   [`DayBucket::visible`], never [`DayBucket::count`].

use crate::model::record::Record;
use chrono::{Datelike, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Default number of records rendered inside one day cell.
pub const DEFAULT_DISPLAY_CAP: usize = 3;

static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{4})-(\d{1,2})\s*$").expect("valid month regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    Malformed(String),
    OutOfRange { year: i32, month: u32 },
}

impl Display for MonthParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => write!(f, "expected `YYYY-MM`, got `{value}`"),
            Self::OutOfRange { year, month } => {
                write!(f, "month {year}-{month:02} is out of range")
            }
        }
    }
}

impl Error for MonthParseError {}

/// A displayed `(year, month)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

impl CalendarMonth {
    /// Returns `None` for months chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    pub fn month(self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first_day
    }

    pub fn days_in_month(self) -> u32 {
        match self.first_day.checked_add_months(Months::new(1)) {
            Some(next) => next.signed_duration_since(self.first_day).num_days() as u32,
            // December of the last representable year.
            None => 31,
        }
    }

    /// Blank cells before day 1 in a Sunday-first week grid.
    pub fn leading_blanks(self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Previous month; stays put at the lower bound of the date range.
    pub fn previous(self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(self)
    }

    /// Next month; stays put at the upper bound of the date range.
    pub fn next(self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(self)
    }

    /// The month `delta` months away, or `None` past the date range.
    pub fn shifted(self, delta: i64) -> Option<Self> {
        let step = Months::new(u32::try_from(delta.unsigned_abs()).ok()?);
        let first_day = if delta >= 0 {
            self.first_day.checked_add_months(step)
        } else {
            self.first_day.checked_sub_months(step)
        }?;
        Some(Self { first_day })
    }

    /// Every date of the month, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month();
        self.first_day
            .iter_days()
            .take_while(move |date| date.month() == month)
    }
}

impl Display for CalendarMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first_day.format("%B %Y"))
    }
}

impl FromStr for CalendarMonth {
    type Err = MonthParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let captures = MONTH_RE
            .captures(value)
            .ok_or_else(|| MonthParseError::Malformed(value.to_string()))?;
        let year: i32 = captures[1]
            .parse()
            .map_err(|_| MonthParseError::Malformed(value.to_string()))?;
        let month: u32 = captures[2]
            .parse()
            .map_err(|_| MonthParseError::Malformed(value.to_string()))?;
        Self::new(year, month).ok_or(MonthParseError::OutOfRange { year, month })
    }
}

/// Records scheduled on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub records: Vec<&'a Record>,
}

impl<'a> DayBucket<'a> {
    /// ISO key, `YYYY-MM-DD`.
    pub fn key(&self) -> String {
        iso_key(self.date)
    }

    /// True number of records, regardless of display cap.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// The first `cap` records, for rendering.
    pub fn visible(&self, cap: usize) -> &[&'a Record] {
        &self.records[..self.records.len().min(cap)]
    }

    /// How many records the "+N more" indicator reports.
    pub fn overflow(&self, cap: usize) -> usize {
        self.records.len().saturating_sub(cap)
    }
}

/// One cell of the Sunday-first month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell<'p> {
    /// Padding before day 1.
    Blank,
    Day {
        date: NaiveDate,
        is_today: bool,
        bucket: Option<&'p DayBucket<'p>>,
    },
}

/// Buckets for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarProjection<'a> {
    pub month: CalendarMonth,
    pub buckets: BTreeMap<String, DayBucket<'a>>,
}

impl<'a> CalendarProjection<'a> {
    pub fn bucket(&self, date: NaiveDate) -> Option<&DayBucket<'a>> {
        self.buckets.get(&iso_key(date))
    }

    /// Records placed in the month.
    pub fn total(&self) -> usize {
        self.buckets.values().map(DayBucket::count).sum()
    }

    /// Grid cells: leading blanks, then one cell per day.
    pub fn cells(&self, today: NaiveDate) -> Vec<CalendarCell<'_>> {
        let blanks = self.month.leading_blanks() as usize;
        let mut cells = Vec::with_capacity(blanks + self.month.days_in_month() as usize);
        cells.extend(std::iter::repeat(CalendarCell::Blank).take(blanks));
        for date in self.month.days() {
            let bucket: Option<&DayBucket<'_>> = self.buckets.get(&iso_key(date));
            cells.push(CalendarCell::Day {
                date,
                is_today: date == today,
                bucket,
            });
        }
        cells
    }
}

/// Groups scheduled records of `month` by date, keeping input order per day.
pub fn project_calendar<'a, I>(records: I, month: CalendarMonth) -> CalendarProjection<'a>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut buckets: BTreeMap<String, DayBucket<'a>> = BTreeMap::new();
    for record in records {
        let Some(date) = record.scheduled_on() else {
            continue;
        };
        if !month.contains(date) {
            continue;
        }
        buckets
            .entry(iso_key(date))
            .or_insert_with(|| DayBucket {
                date,
                records: Vec::new(),
            })
            .records
            .push(record);
    }
    CalendarProjection { month, buckets }
}

pub fn iso_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::{CalendarCell, CalendarMonth, MonthParseError};
    use chrono::NaiveDate;

    #[test]
    fn month_geometry_matches_calendar() {
        let march = CalendarMonth::new(2025, 3).unwrap();
        assert_eq!(march.days_in_month(), 31);
        // 2025-03-01 is a Saturday.
        assert_eq!(march.leading_blanks(), 6);
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(march.days().count(), 31);
    }

    #[test]
    fn navigation_wraps_years() {
        let january = CalendarMonth::new(2025, 1).unwrap();
        assert_eq!(january.previous(), CalendarMonth::new(2024, 12).unwrap());
        assert_eq!(
            CalendarMonth::new(2024, 12).unwrap().next(),
            CalendarMonth::new(2025, 1).unwrap()
        );
    }

    #[test]
    fn shifting_jumps_many_months_at_once() {
        let march = CalendarMonth::new(2025, 3).unwrap();
        assert_eq!(march.shifted(0), Some(march));
        assert_eq!(march.shifted(-3), CalendarMonth::new(2024, 12));
        assert_eq!(march.shifted(22), CalendarMonth::new(2027, 1));
        assert_eq!(march.shifted(i64::from(u32::MAX)), None);
        assert_eq!(march.shifted(-i64::from(u32::MAX)), None);
    }

    #[test]
    fn month_parsing_validates_range() {
        assert_eq!(
            "2025-03".parse::<CalendarMonth>().unwrap(),
            CalendarMonth::new(2025, 3).unwrap()
        );
        assert_eq!(
            "2025-13".parse::<CalendarMonth>(),
            Err(MonthParseError::OutOfRange {
                year: 2025,
                month: 13
            })
        );
        assert!(matches!(
            "March".parse::<CalendarMonth>(),
            Err(MonthParseError::Malformed(_))
        ));
    }

    #[test]
    fn empty_month_grid_has_blanks_then_days() {
        let projection = super::project_calendar(std::iter::empty(), CalendarMonth::new(2025, 3).unwrap());
        let today = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let cells = projection.cells(today);
        assert_eq!(cells.len(), 6 + 31);
        assert_eq!(cells[0], CalendarCell::Blank);
        assert!(matches!(
            cells[6 + 11],
            CalendarCell::Day { is_today: true, bucket: None, .. }
        ));
    }
}
