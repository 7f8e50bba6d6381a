//! Sort/group projections from a filtered record set to a view shape.
//!
//! # Responsibility
//! - List: optional stable sort.
//! - Board: one column per status, exhaustive over `Status`.
//! - Calendar: ISO-date buckets for one displayed month.
//!
//! # Invariants
//! - Projections are pure; identical inputs yield identical outputs.
//! - No projection drops or duplicates an input record it is responsible for.

pub mod agenda;
pub mod board;
pub mod calendar;
pub mod list;
