//! Entity validators
//!
//! One validator per record kind, each a pure function over the fully-merged
//! record. Validators accumulate every failing field instead of stopping at
//! the first, never mutate anything, and never touch storage; the "today"
//! used for future-date checks comes in through the context so tests stay
//! deterministic.

mod abortion;
mod animal;
mod birth;
mod heat;
mod piglet;
mod pregnancy;
mod service;

pub use abortion::validate_abortion;
pub use animal::validate_animal_dates;
pub use birth::validate_birth;
pub use heat::validate_heat;
pub use piglet::validate_piglet;
pub use pregnancy::validate_pregnancy;
pub use service::validate_service;

use chrono::NaiveDate;

use crate::domain::entities::Record;
use crate::error::ValidationErrors;

/// Ambient facts the validators need but must not read themselves
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    /// The system clock's calendar date, captured once per gateway call
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Capture the local calendar date
    pub fn from_clock() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

/// Dispatch to the kind-specific validator.
pub fn validate_record(record: &Record, ctx: &ValidationContext) -> ValidationErrors {
    match record {
        Record::Heat(heat) => validate_heat(heat, ctx),
        Record::Service(service) => validate_service(service, ctx),
        Record::Pregnancy(pregnancy) => validate_pregnancy(pregnancy, ctx),
        Record::Birth(birth) => validate_birth(birth, ctx),
        Record::Abortion(abortion) => validate_abortion(abortion, ctx),
        Record::Piglet(piglet) => validate_piglet(piglet, ctx),
    }
}

/// Event dates cannot sit in the future.
pub(crate) fn not_in_future(
    errors: &mut ValidationErrors,
    field: &'static str,
    date: NaiveDate,
    ctx: &ValidationContext,
) {
    if date > ctx.today {
        errors.add(field, format!("must not be in the future (today is {})", ctx.today));
    }
}

/// An optional date must not precede its anchor.
pub(crate) fn not_before(
    errors: &mut ValidationErrors,
    field: &'static str,
    date: Option<NaiveDate>,
    anchor_field: &'static str,
    anchor: NaiveDate,
) {
    if let Some(date) = date {
        if date < anchor {
            errors.add(field, format!("must not be before {anchor_field} ({anchor})"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn future_dates_are_flagged() {
        let ctx = ValidationContext::new(date("2024-06-01"));
        let mut errors = ValidationErrors::new();
        not_in_future(&mut errors, "heat_date", date("2024-06-02"), &ctx);
        assert_eq!(errors.len(), 1);

        let mut errors = ValidationErrors::new();
        not_in_future(&mut errors, "heat_date", date("2024-06-01"), &ctx);
        assert!(errors.is_empty());
    }

    #[test]
    fn not_before_only_checks_present_dates() {
        let mut errors = ValidationErrors::new();
        not_before(&mut errors, "end_date", None, "heat_date", date("2024-06-01"));
        assert!(errors.is_empty());

        not_before(
            &mut errors,
            "end_date",
            Some(date("2024-05-30")),
            "heat_date",
            date("2024-06-01"),
        );
        assert_eq!(errors.len(), 1);
    }
}
