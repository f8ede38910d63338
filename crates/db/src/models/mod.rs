pub mod category;
pub mod fortune_cookie;
