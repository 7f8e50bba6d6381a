//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate store access, filtering and projection behind stable APIs.
//! - Keep callers (CLI, UI bridges) decoupled from store details.

pub mod activity;
pub mod board_service;
pub mod dashboard;
