//! Category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fortunes_core::types::DbId;

/// A row from the `category` table.
///
/// Associated fortunes are reached by query
/// ([`crate::repositories::FortuneCookieRepo::list_by_category`]), not held
/// in memory on the category itself.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub icon_key: String,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub icon_key: String,
}
