//! Filter predicate set.
//!
//! # Responsibility
//! - Hold the user's filter selection (text, categorical choices, date tab).
//! - Reduce a record sequence to the matching, order-preserving subsequence.
//!
//! # Invariants
//! - Filtering is stable: output keeps input relative order.
//! - The default selection is the identity filter.
//! - Filtering never fails; unreadable dates simply do not match date tabs.

pub mod predicate;
pub mod project;
pub mod selection;
