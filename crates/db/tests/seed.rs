//! Integration tests for the fixture seed loader.

use sqlx::PgPool;

use fortunes_core::error::CoreError;
use fortunes_core::fixtures::{FixtureValue, SEED_CATEGORIES, SEED_FORTUNES};
use fortunes_core::fortunes::MAX_FORTUNE_LENGTH;
use fortunes_db::repositories::{CategoryRepo, FortuneCookieRepo};
use fortunes_db::seed;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_creates_every_fixture_category(pool: PgPool) {
    seed::load_fixtures(&pool).await.unwrap();

    let categories = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories.len(), SEED_CATEGORIES.len());

    for expected in SEED_CATEGORIES {
        let category = categories
            .iter()
            .find(|c| c.name == expected.name)
            .unwrap_or_else(|| panic!("missing seeded category {}", expected.name));
        assert_eq!(category.icon_key, expected.icon_key);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_fortunes_come_from_fixture_table(pool: PgPool) {
    seed::load_fixtures(&pool).await.unwrap();

    let categories = CategoryRepo::list(&pool).await.unwrap();

    for seed_cat in SEED_CATEGORIES {
        let stored = categories
            .iter()
            .find(|c| c.name == seed_cat.name)
            .unwrap();

        let candidates: Vec<String> = SEED_FORTUNES
            .iter()
            .find(|(k, _)| *k == seed_cat.key)
            .map(|(_, values)| values.iter().map(|v| v.to_string()).collect())
            .unwrap();

        let fortunes = FortuneCookieRepo::list_by_category(&pool, stored.id)
            .await
            .unwrap();
        assert!(!fortunes.is_empty());
        for fortune in &fortunes {
            assert!(
                candidates.contains(&fortune.fortune),
                "seeded fortune {:?} is not a fixture candidate for {}",
                fortune.fortune,
                seed_cat.key
            );
            assert!(!fortune.discontinued);
        }
    }
}

#[test]
fn test_seed_input_rejects_over_length_fortune() {
    let long: &'static str = Box::leak("a".repeat(MAX_FORTUNE_LENGTH + 1).into_boxed_str());
    let result = seed::fortune_input(1, &FixtureValue::Text(long), 0);
    assert!(
        matches!(result, Err(CoreError::Validation(_))),
        "over-length fortune must fail validation before reaching the store"
    );
}

#[test]
fn test_seed_input_rejects_empty_fortune() {
    let result = seed::fortune_input(1, &FixtureValue::Text(""), 0);
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[test]
fn test_seed_input_rejects_bad_icon_key() {
    let result = seed::category_input("Job", "Not An Icon Key");
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[test]
fn test_seed_input_accepts_valid_candidates() {
    let input = seed::fortune_input(1, &FixtureValue::Text("Work hard."), 7).unwrap();
    assert_eq!(input.fortune, "Work hard.");
    assert_eq!(input.number_printed, Some(7));

    let numeric = seed::fortune_input(1, &FixtureValue::Number(42), 0).unwrap();
    assert_eq!(numeric.fortune, "42");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    seed::load_fixtures(&pool).await.unwrap();
    let first = CategoryRepo::list(&pool).await.unwrap().len();

    seed::load_fixtures(&pool).await.unwrap();
    let second = CategoryRepo::list(&pool).await.unwrap().len();

    assert_eq!(first, second, "re-seeding must not duplicate categories");
}
