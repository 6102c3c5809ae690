//! Heat validator

use super::{not_before, not_in_future, ValidationContext};
use crate::domain::entities::Heat;
use crate::error::ValidationErrors;

/// Field-level and cross-field checks for a heat record.
pub fn validate_heat(heat: &Heat, ctx: &ValidationContext) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    not_in_future(&mut errors, "heat_date", heat.heat_date, ctx);
    not_before(
        &mut errors,
        "end_date",
        heat.end_date,
        "heat_date",
        heat.heat_date,
    );
    not_before(
        &mut errors,
        "peak_date",
        heat.peak_date,
        "heat_date",
        heat.heat_date,
    );
    if let (Some(peak), Some(end)) = (heat.peak_date, heat.end_date) {
        if peak > end {
            errors.add("peak_date", format!("must not be after end_date ({end})"));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::HeatDraft;
    use crate::domain::value_objects::{HeatId, SowId};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn ctx() -> ValidationContext {
        ValidationContext::new(date("2024-06-01"))
    }

    fn heat(draft: HeatDraft) -> Heat {
        Heat::from_draft(
            HeatId(1),
            &HeatDraft {
                sow: Some(SowId(1)),
                heat_date: Some(date("2024-05-20")),
                ..draft
            },
        )
        .unwrap()
    }

    #[test]
    fn well_formed_heat_passes() {
        let errors = validate_heat(&heat(HeatDraft::default()), &ctx());
        assert!(errors.is_empty());
    }

    #[test]
    fn future_heat_date_is_rejected() {
        let mut record = heat(HeatDraft::default());
        record.heat_date = date("2024-06-05");
        let errors = validate_heat(&record, &ctx());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let record = heat(HeatDraft {
            end_date: Some(date("2024-05-18")),
            ..HeatDraft::default()
        });
        let errors = validate_heat(&record, &ctx());
        assert_eq!(errors.to_string(), "end_date: must not be before heat_date (2024-05-20)");
    }

    #[test]
    fn peak_after_end_is_rejected() {
        let record = heat(HeatDraft {
            end_date: Some(date("2024-05-21")),
            peak_date: Some(date("2024-05-22")),
            ..HeatDraft::default()
        });
        let errors = validate_heat(&record, &ctx());
        assert_eq!(errors.len(), 1);
    }
}
