//! Filter selection state and parsing of `dimension=value` assignments.

use crate::model::record::{Priority, RecordKind, Status};
use crate::model::ParseEnumError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static ASSIGNMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z_]+)\s*[=:]\s*(\S(?:.*\S)?)\s*$").expect("valid assignment regex")
});

/// One categorical filter value, or the "all" wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Matches optional fields; a missing value only passes the wildcard.
    pub fn matches_option(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Self::All, _) => true,
            (Self::Only(expected), Some(actual)) => expected == actual,
            (Self::Only(_), None) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.trim().parse().map(Self::Only)
    }
}

/// Tab selector on the task page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateTab {
    #[default]
    All,
    /// Due on the current calendar day.
    Today,
    /// Due after today and within the upcoming window (inclusive).
    Upcoming,
    /// Not completed and due before today.
    Overdue,
    Completed,
}

impl DateTab {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Upcoming => "upcoming",
            Self::Overdue => "overdue",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for DateTab {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            "overdue" => Ok(Self::Overdue),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(ParseEnumError {
                kind: "tab",
                value: value.to_string(),
            }),
        }
    }
}

/// Categorical dimensions a selection can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    Status,
    Priority,
    Kind,
    Project,
}

impl FilterDimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Kind => "type",
            Self::Project => "project",
        }
    }

    /// Accepted values besides `all`; empty for free-form project ids.
    pub fn allowed_values(self) -> Vec<&'static str> {
        match self {
            Self::Status => Status::ALL.iter().map(|status| status.as_str()).collect(),
            Self::Priority => Priority::ALL.iter().map(|priority| priority.as_str()).collect(),
            Self::Kind => RecordKind::ALL.iter().map(|kind| kind.as_str()).collect(),
            Self::Project => Vec::new(),
        }
    }
}

impl FromStr for FilterDimension {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "priority" => Ok(Self::Priority),
            "type" | "kind" => Ok(Self::Kind),
            "project" => Ok(Self::Project),
            other => Err(FilterParseError::UnknownDimension(other.to_string())),
        }
    }
}

/// A single categorical assignment, ready to apply to a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Status(Choice<Status>),
    Priority(Choice<Priority>),
    Kind(Choice<RecordKind>),
    /// Matches on project id.
    Project(Choice<String>),
}

impl CategoryFilter {
    pub fn dimension(&self) -> FilterDimension {
        match self {
            Self::Status(_) => FilterDimension::Status,
            Self::Priority(_) => FilterDimension::Priority,
            Self::Kind(_) => FilterDimension::Kind,
            Self::Project(_) => FilterDimension::Project,
        }
    }

    /// Builds a filter for `dimension` from its textual value.
    pub fn parse(dimension: FilterDimension, value: &str) -> Result<Self, FilterParseError> {
        let invalid = |source: ParseEnumError| FilterParseError::InvalidValue { dimension, source };
        Ok(match dimension {
            FilterDimension::Status => Self::Status(value.parse().map_err(invalid)?),
            FilterDimension::Priority => Self::Priority(value.parse().map_err(invalid)?),
            FilterDimension::Kind => Self::Kind(value.parse().map_err(invalid)?),
            FilterDimension::Project => match value.parse::<Choice<String>>() {
                Ok(choice) => Self::Project(choice),
                Err(never) => match never {},
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    /// Input is not of the form `dimension=value`.
    Malformed(String),
    UnknownDimension(String),
    InvalidValue {
        dimension: FilterDimension,
        source: ParseEnumError,
    },
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(input) => {
                write!(f, "expected `dimension=value`, got `{input}`")
            }
            Self::UnknownDimension(name) => write!(
                f,
                "unknown filter dimension `{name}`; expected status|priority|type|project"
            ),
            Self::InvalidValue { dimension, source } => write!(
                f,
                "invalid {} filter: {source}; expected one of {}",
                dimension.as_str(),
                dimension.allowed_values().join(", ")
            ),
        }
    }
}

impl Error for FilterParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parses `status=Done`, `priority: high`, `project=all` and similar.
pub fn parse_filter_assignment(input: &str) -> Result<CategoryFilter, FilterParseError> {
    let captures = ASSIGNMENT_RE
        .captures(input)
        .ok_or_else(|| FilterParseError::Malformed(input.to_string()))?;
    let dimension: FilterDimension = captures[1].parse()?;
    CategoryFilter::parse(dimension, &captures[2])
}

/// Current value of every filter dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    /// Case-insensitive substring matched against record titles.
    pub text: String,
    pub status: Choice<Status>,
    pub priority: Choice<Priority>,
    pub kind: Choice<RecordKind>,
    pub project: Choice<String>,
    pub tab: DateTab,
}

impl FilterSelection {
    /// Whether this selection lets every record through.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Replaces exactly one categorical dimension.
    pub fn apply(&mut self, filter: CategoryFilter) {
        match filter {
            CategoryFilter::Status(choice) => self.status = choice,
            CategoryFilter::Priority(choice) => self.priority = choice,
            CategoryFilter::Kind(choice) => self.kind = choice,
            CategoryFilter::Project(choice) => self.project = choice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        parse_filter_assignment, CategoryFilter, Choice, DateTab, FilterDimension,
        FilterParseError, FilterSelection,
    };
    use crate::model::record::{Priority, RecordKind, Status};

    #[test]
    fn assignment_parses_known_dimensions() {
        assert_eq!(
            parse_filter_assignment("status=In Progress").unwrap(),
            CategoryFilter::Status(Choice::Only(Status::InProgress))
        );
        assert_eq!(
            parse_filter_assignment(" priority : high ").unwrap(),
            CategoryFilter::Priority(Choice::Only(Priority::High))
        );
        assert_eq!(
            parse_filter_assignment("type=Bug").unwrap(),
            CategoryFilter::Kind(Choice::Only(RecordKind::Bug))
        );
        assert_eq!(
            parse_filter_assignment("project=2").unwrap(),
            CategoryFilter::Project(Choice::Only("2".to_string()))
        );
    }

    #[test]
    fn assignment_all_selects_wildcard() {
        assert_eq!(
            parse_filter_assignment("status=ALL").unwrap(),
            CategoryFilter::Status(Choice::All)
        );
    }

    #[test]
    fn assignment_rejects_bad_input() {
        assert!(matches!(
            parse_filter_assignment("status"),
            Err(FilterParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_filter_assignment("owner=me"),
            Err(FilterParseError::UnknownDimension(_))
        ));
        let err = parse_filter_assignment("status=Blocked").unwrap_err();
        assert!(matches!(
            err,
            FilterParseError::InvalidValue {
                dimension: FilterDimension::Status,
                ..
            }
        ));
        assert!(err.to_string().contains("Blocked"));
        assert!(err
            .to_string()
            .ends_with("expected one of To Do, In Progress, Review, Done"));
    }

    #[test]
    fn allowed_values_list_every_variant() {
        assert_eq!(
            FilterDimension::Priority.allowed_values(),
            vec!["High", "Medium", "Low"]
        );
        assert_eq!(FilterDimension::Kind.allowed_values().len(), 4);
        assert!(FilterDimension::Project.allowed_values().is_empty());
    }

    #[test]
    fn apply_replaces_only_one_dimension() {
        let mut selection = FilterSelection {
            text: "menu".to_string(),
            ..FilterSelection::default()
        };
        selection.apply(CategoryFilter::Priority(Choice::Only(Priority::Low)));
        assert_eq!(selection.text, "menu");
        assert_eq!(selection.priority, Choice::Only(Priority::Low));
        assert!(selection.status.is_all());
        assert_eq!(selection.tab, DateTab::All);
    }

    #[test]
    fn choice_option_matching_excludes_missing_values() {
        let choice = Choice::Only("1".to_string());
        assert!(!choice.matches_option(None));
        assert!(Choice::<String>::All.matches_option(None));
    }
}
