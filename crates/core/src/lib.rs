//! Domain types and seed data for the fortunes application.
//!
//! This crate is free of I/O: it holds the shared id/timestamp aliases, the
//! error taxonomy, fortune text validation, and the static fixture table
//! used by the database seed loader.

pub mod error;
pub mod fixtures;
pub mod fortunes;
pub mod types;
