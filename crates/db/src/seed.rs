//! Fixture seed loader.
//!
//! Populates the store from the static tables in `fortunes_core::fixtures`
//! before the application serves traffic. Administrative only; never invoked
//! by a live endpoint.

use rand::Rng;

use fortunes_core::error::CoreError;
use fortunes_core::fixtures::{self, FixtureError, FixtureValue, SEED_CATEGORIES, SEED_FORTUNES};
use fortunes_core::fortunes::{validate_fortune_text, validate_icon_key};
use fortunes_core::types::DbId;

use crate::models::category::CreateCategory;
use crate::models::fortune_cookie::CreateFortuneCookie;
use crate::repositories::{CategoryRepo, FortuneCookieRepo};
use crate::DbPool;

/// How many fortunes to insert per seeded category.
const FORTUNES_PER_CATEGORY: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Validate a seed category and build its insert DTO.
pub fn category_input(name: &str, icon_key: &str) -> Result<CreateCategory, CoreError> {
    validate_icon_key(icon_key).map_err(CoreError::Validation)?;
    Ok(CreateCategory {
        name: name.to_string(),
        icon_key: icon_key.to_string(),
    })
}

/// Validate a candidate fortune and build its insert DTO.
///
/// Rejects empty or over-length fortune text before it reaches the store,
/// so a bad candidate fails as [`CoreError::Validation`] rather than a raw
/// database error.
pub fn fortune_input(
    category_id: DbId,
    value: &FixtureValue,
    number_printed: i32,
) -> Result<CreateFortuneCookie, CoreError> {
    let fortune = value.to_string();
    validate_fortune_text(&fortune).map_err(CoreError::Validation)?;
    Ok(CreateFortuneCookie {
        category_id,
        fortune,
        created_at: None,
        number_printed: Some(number_printed),
        discontinued: None,
    })
}

/// Load the fixture categories and fortunes into the store.
///
/// Idempotent at the granularity of a whole run: does nothing if any
/// category already exists.
pub async fn load_fixtures(pool: &DbPool) -> Result<(), SeedError> {
    if CategoryRepo::count(pool).await? > 0 {
        tracing::info!("Store already seeded, skipping fixture load");
        return Ok(());
    }

    for seed in SEED_CATEGORIES {
        let input = category_input(seed.name, seed.icon_key)?;
        let category = CategoryRepo::create(pool, &input).await?;

        for _ in 0..FORTUNES_PER_CATEGORY {
            let value = fixtures::random_fortune(SEED_FORTUNES, seed.key)?;
            let number_printed = rand::rng().random_range(0..=1000);

            let input = fortune_input(category.id, value, number_printed)?;
            FortuneCookieRepo::create(pool, &input).await?;
        }

        tracing::info!(
            category_id = category.id,
            name = %category.name,
            "Seeded category with {FORTUNES_PER_CATEGORY} fortunes"
        );
    }

    Ok(())
}
