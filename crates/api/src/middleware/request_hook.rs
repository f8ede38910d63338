//! Pre-request hook.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Runs once before every request, ahead of routing-level handlers.
///
/// Currently a pass-through. It receives [`AppState`] so a future
/// implementation (auth checks, per-request store setup) has access to the
/// pool without a signature change.
pub async fn before_request(
    State(_state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    next.run(request).await
}
