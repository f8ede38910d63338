//! Handlers for the two fortune pages.

use axum::extract::{Path, State};
use axum::response::Html;

use fortunes_core::error::CoreError;
use fortunes_core::types::DbId;
use fortunes_db::repositories::{CategoryRepo, FortuneCookieRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Homepage listing every category. An empty store renders an empty page;
/// there is no error branch.
pub async fn homepage(State(state): State<AppState>) -> AppResult<Html<String>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Html(views::render_homepage(&categories)))
}

/// GET /category/{id}
///
/// Detail page for one category and all its fortunes. Returns a bare 404 if
/// the id does not exist. A non-numeric id is rejected by the `Path<DbId>`
/// extractor before this handler runs.
pub async fn show_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let fortunes = FortuneCookieRepo::list_by_category(&state.pool, category.id).await?;

    Ok(Html(views::render_category(&category, &fortunes)))
}
