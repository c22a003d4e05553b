//! Presence and type checks for create input.

use crate::error::AppError;
use crate::models::NewBakedGood;

pub struct RequestValidator;

impl RequestValidator {
    /// Build a `NewBakedGood` from form fields `name`, `price`, `bakery_id`.
    /// Missing or blank fields are reported in that order, before any value is parsed.
    pub fn new_baked_good(form: &[(String, String)]) -> Result<NewBakedGood, AppError> {
        let name = required(form, "name")?;
        let price = required(form, "price")?;
        let bakery_id = required(form, "bakery_id")?;

        let price: f64 = price
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| invalid("price"))?;
        let bakery_id: i64 = bakery_id.parse().map_err(|_| invalid("bakery_id"))?;

        Ok(NewBakedGood {
            name: name.to_string(),
            price,
            bakery_id,
        })
    }
}

fn required<'a>(form: &'a [(String, String)], field: &str) -> Result<&'a str, AppError> {
    form.iter()
        .find(|(k, _)| k == field)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing required field {}.", field)))
}

fn invalid(field: &str) -> AppError {
    AppError::BadRequest(format!("Invalid value for {}.", field))
}
