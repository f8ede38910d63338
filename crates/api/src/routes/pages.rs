//! Route definitions for the fortune pages.
//!
//! ```text
//! GET /                 -> homepage (all categories)
//! GET /category/{id}    -> show_category (one category + its fortunes)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::homepage))
        .route("/category/{id}", get(pages::show_category))
}
