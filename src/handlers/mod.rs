//! HTTP handlers for bakeries and baked goods.

pub mod baked_good;
pub mod bakery;

use crate::error::AppError;

/// Path ids are taken as text so a segment that is not an integer resolves like an unknown id.
fn parse_id(raw: &str, not_found: fn() -> AppError) -> Result<i64, AppError> {
    raw.parse().map_err(|_| not_found())
}
