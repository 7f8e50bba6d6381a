//! Canonical domain model for dashboard records and projects.
//!
//! # Responsibility
//! - Define the single record shape shared by list, board and calendar views.
//! - Define closed enumerations for every categorical filter dimension.
//!
//! # Invariants
//! - A record's `id` is stable and unique within its store.
//! - Completion is derived from `status`; there is no second source of truth.

pub mod project;
pub mod record;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for text that does not name a known enumeration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    /// Human-readable name of the enumeration (`status`, `priority`, ...).
    pub kind: &'static str,
    /// Raw input as received.
    pub value: String,
}

impl Display for ParseEnumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl Error for ParseEnumError {}

/// Lowercases and strips separators so `In Progress`, `in_progress` and
/// `in-progress` compare equal.
pub(crate) fn normalize_token(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
