//! Per-page view state.
//!
//! # Responsibility
//! - Hold the filter selection, view mode, list sort key and displayed month.
//! - Derive the current projection from a record sequence on demand.
//!
//! # Invariants
//! - Every mutator replaces exactly one field.
//! - Month navigation never touches the filter selection.
//! - Any combination of values is valid, including ones with no results.

use crate::config::BoardConfig;
use crate::filter::predicate::RecordFilter;
use crate::filter::selection::{CategoryFilter, DateTab, FilterSelection};
use crate::model::record::Record;
use crate::model::ParseEnumError;
use crate::projection::board::{project_board, BoardProjection};
use crate::projection::calendar::{project_calendar, CalendarMonth, CalendarProjection};
use crate::projection::list::{project_list, SortKey};
use chrono::NaiveDate;
use log::debug;
use std::str::FromStr;

/// Presentation strategy for the filtered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Board,
    Calendar,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Board => "board",
            Self::Calendar => "calendar",
        }
    }
}

impl FromStr for ViewMode {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "board" | "kanban" => Ok(Self::Board),
            "calendar" | "month" => Ok(Self::Calendar),
            _ => Err(ParseEnumError {
                kind: "view mode",
                value: value.to_string(),
            }),
        }
    }
}

/// Output of [`ViewState::project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewProjection<'a> {
    List(Vec<&'a Record>),
    Board(BoardProjection<'a>),
    Calendar(CalendarProjection<'a>),
}

impl ViewProjection<'_> {
    /// Number of records the projection carries.
    pub fn record_count(&self) -> usize {
        match self {
            Self::List(records) => records.len(),
            Self::Board(board) => board.total(),
            Self::Calendar(calendar) => calendar.total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selection: FilterSelection,
    mode: ViewMode,
    sort: SortKey,
    month: CalendarMonth,
}

impl ViewState {
    /// Default filters, list mode, and the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selection: FilterSelection::default(),
            mode: ViewMode::default(),
            sort: SortKey::default(),
            month: CalendarMonth::containing(today),
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn set_text_query(&mut self, query: impl Into<String>) {
        self.selection.text = query.into();
        debug!(
            "event=view_update module=view field=text chars={}",
            self.selection.text.chars().count()
        );
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        let dimension = filter.dimension();
        self.selection.apply(filter);
        debug!(
            "event=view_update module=view field={}",
            dimension.as_str()
        );
    }

    pub fn set_active_tab(&mut self, tab: DateTab) {
        self.selection.tab = tab;
        debug!("event=view_update module=view field=tab value={}", tab.as_str());
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        debug!("event=view_update module=view field=mode value={}", mode.as_str());
    }

    pub fn set_sort_key(&mut self, sort: SortKey) {
        self.sort = sort;
        debug!("event=view_update module=view field=sort value={}", sort.as_str());
    }

    /// Restores the default selection; mode, sort and month are kept.
    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::default();
        debug!("event=view_update module=view field=selection value=default");
    }

    /// Jumps to a specific month without touching filters.
    pub fn set_month(&mut self, month: CalendarMonth) {
        self.month = month;
    }

    pub fn go_to_previous_month(&mut self) {
        self.month = self.month.previous();
    }

    pub fn go_to_next_month(&mut self) {
        self.month = self.month.next();
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.month = CalendarMonth::containing(today);
    }

    /// Filters `records` and arranges them for the active view mode.
    pub fn project<'a, I>(&self, records: I, today: NaiveDate, config: &BoardConfig) -> ViewProjection<'a>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let filtered = RecordFilter::new(&self.selection, today)
            .with_upcoming_window(config.upcoming_window_days)
            .apply(records);

        match self.mode {
            ViewMode::List => ViewProjection::List(project_list(filtered, self.sort)),
            ViewMode::Board => ViewProjection::Board(project_board(filtered)),
            ViewMode::Calendar => ViewProjection::Calendar(project_calendar(filtered, self.month)),
        }
    }
}
