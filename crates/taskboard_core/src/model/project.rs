//! Project domain model.
//!
//! # Invariants
//! - `progress` is a percentage in `0..=100`.
//! - When both dates parse, `end_date` is not before `start_date`.

use super::record::parse_calendar_date;
use super::{normalize_token, ParseEnumError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Project lifecycle as shown on the project card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "active" => Ok(Self::Active),
            "onhold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseEnumError {
                kind: "project status",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    BlankId,
    BlankName { id: String },
    ProgressOutOfRange { id: String, progress: u8 },
    EndBeforeStart { id: String },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "project id must not be blank"),
            Self::BlankName { id } => write!(f, "project `{id}` has a blank name"),
            Self::ProgressOutOfRange { id, progress } => {
                write!(f, "project `{id}` progress {progress} is outside 0..=100")
            }
            Self::EndBeforeStart { id } => {
                write!(f, "project `{id}` ends before it starts")
            }
        }
    }
}

impl Error for ProjectValidationError {}

/// Project card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub lead: Option<String>,
    #[serde(default)]
    pub members: u32,
    #[serde(default)]
    pub progress: u8,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            status: ProjectStatus::Active,
            lead: None,
            members: 0,
            progress: 0,
            start_date: None,
            end_date: None,
        }
    }

    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.trim().is_empty() {
            return Err(ProjectValidationError::BlankId);
        }
        if self.name.trim().is_empty() {
            return Err(ProjectValidationError::BlankName {
                id: self.id.clone(),
            });
        }
        if self.progress > 100 {
            return Err(ProjectValidationError::ProgressOutOfRange {
                id: self.id.clone(),
                progress: self.progress,
            });
        }
        let start = self.start_date.as_deref().and_then(parse_calendar_date);
        let end = self.end_date.as_deref().and_then(parse_calendar_date);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(ProjectValidationError::EndBeforeStart {
                    id: self.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus, ProjectValidationError};

    #[test]
    fn status_parses_display_and_token_forms() {
        assert_eq!("On Hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        assert_eq!("on-hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        assert_eq!("ACTIVE".parse::<ProjectStatus>().unwrap(), ProjectStatus::Active);
        assert!("archived".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn validate_rejects_inverted_date_range() {
        let mut project = Project::new("9", "Launch");
        project.start_date = Some("2025-04-01".to_string());
        project.end_date = Some("2025-03-01".to_string());
        assert_eq!(
            project.validate(),
            Err(ProjectValidationError::EndBeforeStart {
                id: "9".to_string()
            })
        );

        project.end_date = Some("2025-06-30".to_string());
        assert!(project.validate().is_ok());
    }
}
