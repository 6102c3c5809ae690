//! Piglet validator
//!
//! Besides the field checks, this is where each terminal outcome demands its
//! companion fields: weaning needs a date and weight, a transfer needs the
//! adoptive sow and a reason, a death needs a date and cause.

use super::{not_in_future, ValidationContext};
use crate::domain::entities::{Piglet, PigletVitality};
use crate::domain::value_objects::PigletStatus;
use crate::error::ValidationErrors;

pub fn validate_piglet(piglet: &Piglet, ctx: &ValidationContext) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if piglet.birth_order == 0 {
        errors.add("birth_order", "must start at 1");
    }
    if let Some(weight) = piglet.birth_weight {
        if weight <= 0.0 {
            errors.add("birth_weight", "must be positive");
        }
    }
    if piglet.birth_status != PigletVitality::Alive && piglet.status != PigletStatus::Dead {
        errors.add(
            "status",
            format!(
                "a piglet born {} can only be registered as dead",
                match piglet.birth_status {
                    PigletVitality::Dead => "dead",
                    PigletVitality::Mummified => "mummified",
                    PigletVitality::Alive => "alive",
                }
            ),
        );
    }

    match piglet.status {
        PigletStatus::Nursing | PigletStatus::Sold => {}
        PigletStatus::Weaned => {
            if piglet.weaning_date.is_none() {
                errors.add("weaning_date", "is required for a weaned piglet");
            }
            if piglet.weaning_weight.is_none() {
                errors.add("weaning_weight", "is required for a weaned piglet");
            }
        }
        PigletStatus::Transferred => {
            if piglet.adoptive_sow.is_none() {
                errors.add("adoptive_sow", "is required for a transferred piglet");
            }
            if piglet.transfer_reason.is_none() {
                errors.add("transfer_reason", "is required for a transferred piglet");
            }
        }
        PigletStatus::Dead => {
            // Dead-born piglets carry no death record beyond the birth status.
            if piglet.birth_status == PigletVitality::Alive {
                if piglet.death_date.is_none() {
                    errors.add("death_date", "is required for a dead piglet");
                }
                if piglet.death_cause.is_none() {
                    errors.add("death_cause", "is required for a dead piglet");
                }
            }
        }
    }

    if let Some(weight) = piglet.weaning_weight {
        if weight <= 0.0 {
            errors.add("weaning_weight", "must be positive");
        }
    }
    if let Some(date) = piglet.weaning_date {
        not_in_future(&mut errors, "weaning_date", date, ctx);
    }
    if let Some(date) = piglet.death_date {
        not_in_future(&mut errors, "death_date", date, ctx);
    }

    errors
}
