//! Application middleware.
//!
//! - [`request_hook::before_request`] -- pre-request extension point, runs
//!   on every route.

pub mod request_hook;
