//! Abortion validator

use super::{not_in_future, ValidationContext};
use crate::domain::entities::Abortion;
use crate::domain::services::gestation::ABORTION_GESTATION_RANGE;
use crate::error::ValidationErrors;

pub fn validate_abortion(abortion: &Abortion, ctx: &ValidationContext) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    not_in_future(&mut errors, "abortion_date", abortion.abortion_date, ctx);
    if !ABORTION_GESTATION_RANGE.contains(&abortion.gestation_days) {
        errors.add(
            "gestation_days",
            format!(
                "must lie between {} and {} days (got {})",
                ABORTION_GESTATION_RANGE.start(),
                ABORTION_GESTATION_RANGE.end(),
                abortion.gestation_days
            ),
        );
    }
    errors
}
