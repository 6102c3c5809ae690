//! Birth validator
//!
//! Holds the two invariants the rest of the herd math leans on: the litter
//! arithmetic and the viable gestation window. The total is asserted
//! strictly; any auto-filling from the three sub-counts is a UI convenience
//! upstream, never a substitute for this check.

use super::{not_in_future, ValidationContext};
use crate::domain::entities::Birth;
use crate::domain::services::gestation::BIRTH_GESTATION_RANGE;
use crate::error::ValidationErrors;

/// Acceptable post-partum sow temperature range in degrees Celsius
const SOW_TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = 35.0..=42.0;

pub fn validate_birth(birth: &Birth, ctx: &ValidationContext) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    not_in_future(&mut errors, "birth_date", birth.birth_date, ctx);

    if !BIRTH_GESTATION_RANGE.contains(&birth.gestation_days) {
        errors.add(
            "gestation_days",
            format!(
                "must lie between {} and {} days (got {})",
                BIRTH_GESTATION_RANGE.start(),
                BIRTH_GESTATION_RANGE.end(),
                birth.gestation_days
            ),
        );
    }

    let component_sum = birth.born_alive + birth.born_dead + birth.mummified;
    if birth.total_born != component_sum {
        errors.add(
            "total_born",
            format!(
                "must equal born_alive + born_dead + mummified ({} != {component_sum})",
                birth.total_born
            ),
        );
    }
    if birth.malformed > birth.total_born {
        errors.add("malformed", "cannot exceed total_born");
    }

    if let (Some(start), Some(end)) = (birth.birth_start_time, birth.birth_end_time) {
        if end < start {
            errors.add(
                "birth_end_time",
                format!("must not be before birth_start_time ({start})"),
            );
        }
    }

    if let Some(temperature) = birth.sow_temperature {
        if !SOW_TEMPERATURE_RANGE.contains(&temperature) {
            errors.add(
                "sow_temperature",
                format!("must lie between 35.0 and 42.0 degrees (got {temperature})"),
            );
        }
    }

    if let Some(weight) = birth.total_litter_weight {
        if weight < 0.0 {
            errors.add("total_litter_weight", "must not be negative");
        }
    }

    errors
}
