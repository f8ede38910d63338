//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read/write methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod fortune_cookie_repo;

pub use category_repo::CategoryRepo;
pub use fortune_cookie_repo::FortuneCookieRepo;
