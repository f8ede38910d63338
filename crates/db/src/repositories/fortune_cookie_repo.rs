//! Repository for the `fortune_cookie` table.

use sqlx::PgPool;

use fortunes_core::types::DbId;

use crate::models::fortune_cookie::{CreateFortuneCookie, FortuneCookie};

/// Column list for fortune_cookie queries.
const COLUMNS: &str = "id, category_id, fortune, created_at, number_printed, discontinued";

/// Read and seed-time write operations for fortune cookies.
pub struct FortuneCookieRepo;

impl FortuneCookieRepo {
    /// List all fortunes in a category, oldest first. Discontinued fortunes
    /// are included; the display layer shows them all.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<FortuneCookie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fortune_cookie
             WHERE category_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, FortuneCookie>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Find a fortune cookie by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FortuneCookie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fortune_cookie WHERE id = $1");
        sqlx::query_as::<_, FortuneCookie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new fortune cookie, returning the created row.
    ///
    /// Unset optional fields take the store defaults: `created_at` is the
    /// insertion time, `number_printed` is 0, `discontinued` is false.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFortuneCookie,
    ) -> Result<FortuneCookie, sqlx::Error> {
        let query = format!(
            "INSERT INTO fortune_cookie (category_id, fortune, created_at, number_printed, discontinued)
             VALUES ($1, $2, COALESCE($3, now()), COALESCE($4, 0), COALESCE($5, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FortuneCookie>(&query)
            .bind(input.category_id)
            .bind(&input.fortune)
            .bind(input.created_at)
            .bind(input.number_printed)
            .bind(input.discontinued)
            .fetch_one(pool)
            .await
    }
}
