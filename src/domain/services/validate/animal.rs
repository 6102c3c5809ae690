//! Registry-side date checks for animals
//!
//! Animal CRUD lives outside the engine, but the registry shares the same
//! temporal rules: an animal cannot enter the herd before it was born, and
//! neither date may sit in the future.

use chrono::NaiveDate;

use super::{not_in_future, ValidationContext};
use crate::error::ValidationErrors;

pub fn validate_animal_dates(
    birth_date: Option<NaiveDate>,
    entry_date: Option<NaiveDate>,
    ctx: &ValidationContext,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if let Some(birth) = birth_date {
        not_in_future(&mut errors, "birth_date", birth, ctx);
    }
    if let Some(entry) = entry_date {
        not_in_future(&mut errors, "entry_date", entry, ctx);
        if let Some(birth) = birth_date {
            if entry < birth {
                errors.add("entry_date", format!("must not be before birth_date ({birth})"));
            }
        }
    }
    errors
}
