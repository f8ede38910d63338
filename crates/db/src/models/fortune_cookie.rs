//! Fortune cookie model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fortunes_core::types::{DbId, Timestamp};

/// A row from the `fortune_cookie` table. Every fortune belongs to exactly
/// one category (`category_id` is NOT NULL).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FortuneCookie {
    pub id: DbId,
    pub category_id: DbId,
    pub fortune: String,
    pub created_at: Timestamp,
    pub number_printed: i32,
    pub discontinued: bool,
}

/// DTO for creating a new fortune cookie.
///
/// `created_at`, `number_printed`, and `discontinued` fall back to their
/// store-level defaults (insertion time, 0, false) when not set.
#[derive(Debug, Deserialize)]
pub struct CreateFortuneCookie {
    pub category_id: DbId,
    pub fortune: String,
    pub created_at: Option<Timestamp>,
    pub number_printed: Option<i32>,
    pub discontinued: Option<bool>,
}
