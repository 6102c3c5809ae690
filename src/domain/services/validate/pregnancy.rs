//! Pregnancy validator

use super::{not_before, not_in_future, ValidationContext};
use crate::domain::entities::{ConfirmationMethod, Pregnancy};
use crate::error::ValidationErrors;

pub fn validate_pregnancy(pregnancy: &Pregnancy, ctx: &ValidationContext) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    not_in_future(&mut errors, "conception_date", pregnancy.conception_date, ctx);
    not_before(
        &mut errors,
        "confirmation_date",
        pregnancy.confirmation_date,
        "conception_date",
        pregnancy.conception_date,
    );
    if pregnancy.expected_farrowing_date <= pregnancy.conception_date {
        errors.add(
            "expected_farrowing_date",
            format!(
                "must be after conception_date ({})",
                pregnancy.conception_date
            ),
        );
    }
    if pregnancy.confirmation_method == Some(ConfirmationMethod::Ultrasound)
        && pregnancy.ultrasound_count == 0
    {
        errors.add(
            "ultrasound_count",
            "ultrasound confirmation requires at least one scan",
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PregnancyDraft;
    use crate::domain::value_objects::{PregnancyId, ServiceId, SowId};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn ctx() -> ValidationContext {
        ValidationContext::new(date("2024-06-01"))
    }

    fn pregnancy(draft: PregnancyDraft) -> Pregnancy {
        Pregnancy::from_draft(
            PregnancyId(1),
            &PregnancyDraft {
                sow: Some(SowId(1)),
                service: Some(ServiceId(1)),
                conception_date: Some(date("2024-01-01")),
                ..draft
            },
        )
        .unwrap()
    }

    #[test]
    fn derived_pregnancy_passes() {
        assert!(validate_pregnancy(&pregnancy(PregnancyDraft::default()), &ctx()).is_empty());
    }

    #[test]
    fn confirmation_before_conception_is_rejected() {
        let record = pregnancy(PregnancyDraft {
            confirmation_date: Some(date("2023-12-15")),
            ..PregnancyDraft::default()
        });
        let errors = validate_pregnancy(&record, &ctx());
        assert_eq!(errors.len(), 1);
        assert!(errors.to_string().contains("confirmation_date"));
    }

    #[test]
    fn expected_farrowing_at_or_before_conception_is_rejected() {
        let record = pregnancy(PregnancyDraft {
            expected_farrowing_date: Some(date("2024-01-01")),
            ..PregnancyDraft::default()
        });
        assert_eq!(validate_pregnancy(&record, &ctx()).len(), 1);
    }

    #[test]
    fn ultrasound_confirmation_needs_a_scan() {
        let record = pregnancy(PregnancyDraft {
            confirmation_date: Some(date("2024-01-25")),
            confirmation_method: Some(ConfirmationMethod::Ultrasound),
            ..PregnancyDraft::default()
        });
        let errors = validate_pregnancy(&record, &ctx());
        assert_eq!(errors.to_string(), "ultrasound_count: ultrasound confirmation requires at least one scan");
    }

    #[test]
    fn future_conception_is_rejected() {
        let record = pregnancy(PregnancyDraft {
            conception_date: Some(date("2024-08-01")),
            ..PregnancyDraft::default()
        });
        assert_eq!(validate_pregnancy(&record, &ctx()).len(), 1);
    }
}
