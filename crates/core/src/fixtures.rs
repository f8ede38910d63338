//! Static seed data for the fortunes store.
//!
//! The tables below are declarative seed-time data only; they are loaded
//! into the database once at startup by `fortunes-db` and are never touched
//! by the live endpoints.

use std::fmt;

use rand::seq::IndexedRandom;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A candidate seed fortune. The seed data mixes plain text with bare
/// numbers (the lucky-number category), so both are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureValue {
    Text(&'static str),
    Number(i64),
}

impl fmt::Display for FixtureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureValue::Text(s) => f.write_str(s),
            FixtureValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A category to seed: lookup key, display name, icon key.
#[derive(Debug, Clone, Copy)]
pub struct SeedCategory {
    pub key: &'static str,
    pub name: &'static str,
    pub icon_key: &'static str,
}

/// Mapping from category key to candidate seed fortunes.
pub type FixtureTable = [(&'static str, &'static [FixtureValue])];

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("No seed fortunes for category key: {0}")]
    UnknownCategory(String),
}

// ---------------------------------------------------------------------------
// Seed tables
// ---------------------------------------------------------------------------

/// Categories seeded at startup.
pub const SEED_CATEGORIES: &[SeedCategory] = &[
    SeedCategory { key: "job", name: "Job", icon_key: "briefcase" },
    SeedCategory { key: "lunch", name: "Lunch", icon_key: "cutlery" },
    SeedCategory { key: "proverb", name: "Proverb", icon_key: "leaf" },
    SeedCategory { key: "pets", name: "Pets", icon_key: "paw" },
    SeedCategory { key: "love", name: "Love", icon_key: "heart" },
    SeedCategory { key: "lucky_number", name: "Lucky Number", icon_key: "hash" },
];

use FixtureValue::{Number, Text};

/// Candidate fortunes per category key.
pub const SEED_FORTUNES: &FixtureTable = &[
    (
        "job",
        &[
            Text("It would be best to maintain a low profile for now."),
            Text("404 Fortune not found. Abort, Retry, Ignore?"),
            Text("You laugh now, wait til you get home."),
            Text("If your work is not finished, blame it on the computer."),
        ],
    ),
    (
        "lunch",
        &[
            Text("You will be hungry again in one hour."),
            Text("Vampires will soon strike you if you do not order again"),
            Text("A nice cake is waiting for you"),
            Text("Warning: Do not eat your fortune"),
        ],
    ),
    (
        "proverb",
        &[
            Text("A conclusion is simply the place where you got tired of thinking."),
            Text("Cookie said: \"You really crack me up\""),
            Text("When you squeeze an orange, orange juice comes out. Because that's what's inside."),
        ],
    ),
    (
        "pets",
        &[
            Text("There's no such thing as an ordinary cat"),
            Text("That wasn't chicken"),
        ],
    ),
    (
        "love",
        &[
            Text("An alien of some sort will be appearing to you shortly!"),
            Text("Are your legs tired? You've been running through someone's mind all day long."),
            Text("run"),
        ],
    ),
    (
        "lucky_number",
        &[
            Number(42),
            Number(12),
            Text("10^2"),
            Text("Jar Jar Binks"),
            Text("Pi"),
        ],
    ),
];

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Uniformly pick one candidate fortune for `key` from `table`.
///
/// Fails if `key` has no entry; an empty candidate list is treated the same
/// way since there is nothing to pick.
pub fn random_fortune(
    table: &'static FixtureTable,
    key: &str,
) -> Result<&'static FixtureValue, FixtureError> {
    let candidates = table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, values)| *values)
        .ok_or_else(|| FixtureError::UnknownCategory(key.to_string()))?;

    candidates
        .choose(&mut rand::rng())
        .ok_or_else(|| FixtureError::UnknownCategory(key.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
