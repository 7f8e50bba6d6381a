//! Core domain logic for the taskboard dashboard.
//! Filtering and view projection live here; rendering does not.

pub mod clock;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod projection;
pub mod service;
pub mod store;
pub mod view_state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BoardConfig, ConfigError};
pub use filter::predicate::{filter_records, matches_tab, RecordFilter};
pub use filter::project::filter_projects;
pub use filter::selection::{
    parse_filter_assignment, CategoryFilter, Choice, DateTab, FilterDimension, FilterParseError,
    FilterSelection,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectStatus, ProjectValidationError};
pub use model::record::{
    Priority, ProjectRef, Record, RecordId, RecordKind, RecordValidationError, Status,
};
pub use model::ParseEnumError;
pub use projection::agenda::upcoming_agenda;
pub use projection::board::{project_board, BoardColumn, BoardProjection};
pub use projection::calendar::{
    project_calendar, CalendarCell, CalendarMonth, CalendarProjection, DayBucket, MonthParseError,
};
pub use projection::list::{project_list, SortKey};
pub use service::activity::{recent_activity, ActivityEntry, ActivityKind, DEFAULT_ACTIVITY_LIMIT};
pub use service::board_service::{
    BoardService, BoardServiceError, IssueDraft, IssueEdit, ProjectDraft,
};
pub use service::dashboard::{format_relative_time, DashboardSummary, ProjectProgress};
pub use store::dataset::{load_dataset, parse_dataset, Dataset, DatasetError};
pub use store::demo::demo_dataset;
pub use store::record_store::{InMemoryRecordStore, RecordStore, StoreError, StoreResult};
pub use view_state::{ViewMode, ViewProjection, ViewState};

/// Health-check probe used by the CLI.
pub fn ping() -> &'static str {
    "pong"
}

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
