//! Record store and record sources.
//!
//! # Responsibility
//! - Hold records in insertion order behind a storage-agnostic trait.
//! - Decode JSON datasets and provide the built-in demo dataset.
//!
//! # Invariants
//! - Store writes call `Record::validate()` first.
//! - Record ids are unique per store and never change after insert.

pub mod dataset;
pub mod demo;
pub mod record_store;
