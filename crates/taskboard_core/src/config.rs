//! Board presentation settings.
//!
//! # Invariants
//! - `calendar_display_cap` and `agenda_limit` are at least 1.
//! - `upcoming_window_days` is within `1..=366`.

use crate::filter::predicate::DEFAULT_UPCOMING_WINDOW_DAYS;
use crate::projection::agenda::DEFAULT_AGENDA_LIMIT;
use crate::projection::calendar::DEFAULT_DISPLAY_CAP;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const MAX_UPCOMING_WINDOW_DAYS: u32 = 366;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Tunables shared by the filter and projection layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Records shown per calendar day before "+N more".
    pub calendar_display_cap: usize,
    /// Length of the `Upcoming` tab window.
    pub upcoming_window_days: u32,
    /// Entries in the upcoming agenda panel.
    pub agenda_limit: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            calendar_display_cap: DEFAULT_DISPLAY_CAP,
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            agenda_limit: DEFAULT_AGENDA_LIMIT,
        }
    }
}

impl BoardConfig {
    /// Parses JSON; absent keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calendar_display_cap == 0 {
            return Err(ConfigError::Invalid(
                "calendar_display_cap must be at least 1".to_string(),
            ));
        }
        if self.agenda_limit == 0 {
            return Err(ConfigError::Invalid(
                "agenda_limit must be at least 1".to_string(),
            ));
        }
        if self.upcoming_window_days == 0 || self.upcoming_window_days > MAX_UPCOMING_WINDOW_DAYS {
            return Err(ConfigError::Invalid(format!(
                "upcoming_window_days must be within 1..={MAX_UPCOMING_WINDOW_DAYS}, got {}",
                self.upcoming_window_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError};

    #[test]
    fn defaults_match_dashboard_layout() {
        let config = BoardConfig::default();
        assert_eq!(config.calendar_display_cap, 3);
        assert_eq!(config.upcoming_window_days, 7);
        assert_eq!(config.agenda_limit, 5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = BoardConfig::from_json_str(r#"{"calendar_display_cap": 2}"#).unwrap();
        assert_eq!(config.calendar_display_cap, 2);
        assert_eq!(config.upcoming_window_days, 7);
    }

    #[test]
    fn zero_cap_is_rejected() {
        let err = BoardConfig::from_json_str(r#"{"calendar_display_cap": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, r#"{"agenda_limit": 8, "upcoming_window_days": 14}"#).unwrap();
        let config = BoardConfig::load(&path).unwrap();
        assert_eq!(config.agenda_limit, 8);
        assert_eq!(config.upcoming_window_days, 14);
    }
}
