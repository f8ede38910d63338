//! Request handlers.
//!
//! Handlers delegate to the repositories in `fortunes_db` and map errors via
//! [`crate::error::AppError`].

pub mod pages;
