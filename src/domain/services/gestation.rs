//! Date derivation engine
//!
//! Pure calendar-day arithmetic over `NaiveDate`. All gestation math works
//! on whole days; clock times on birth events are display-only and never
//! enter these computations. Keeping the arithmetic timezone-naive avoids
//! the off-by-one drift that timestamp-based offsetting produces across
//! locales.

use chrono::{Days, NaiveDate};

/// Standard swine gestation length in days
pub const GESTATION_DAYS: u64 = 114;

/// Standard nursing period in days
pub const NURSING_DAYS: u64 = 21;

/// Viable farrowing window, in whole gestation days
pub const BIRTH_GESTATION_RANGE: std::ops::RangeInclusive<i64> = 110..=120;

/// Gestation-day window within which an abortion can be recorded
pub const ABORTION_GESTATION_RANGE: std::ops::RangeInclusive<i64> = 1..=113;

/// Expected farrowing date: conception plus the standard gestation length.
pub fn expected_farrowing(conception: NaiveDate) -> NaiveDate {
    add_days(conception, GESTATION_DAYS)
}

/// Whole calendar days from conception to the anchor event (birth or
/// abortion). Negative when the anchor precedes conception; the validators
/// reject such records through the window checks.
pub fn gestation_days(anchor: NaiveDate, conception: NaiveDate) -> i64 {
    (anchor - conception).num_days()
}

/// Lactation starts on the birth date unless overridden.
pub fn lactation_start(birth_date: NaiveDate) -> NaiveDate {
    birth_date
}

/// Expected weaning date: birth plus the standard nursing period.
pub fn expected_weaning(birth_date: NaiveDate) -> NaiveDate {
    add_days(birth_date, NURSING_DAYS)
}

/// Average piglet weight over the live-born count.
///
/// Undefined when nothing was born alive; the field stays unset rather than
/// dividing by zero.
pub fn avg_piglet_weight(total_litter_weight: f64, born_alive: u32) -> Option<f64> {
    if born_alive == 0 {
        None
    } else {
        Some(total_litter_weight / f64::from(born_alive))
    }
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    // Days::new only overflows near the representable date boundary, where
    // the original date is returned unchanged; herd dates never live there.
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn expected_farrowing_adds_114_days() {
        assert_eq!(
            expected_farrowing(date("2024-01-01")),
            date("2024-04-24")
        );
    }

    #[test]
    fn expected_farrowing_crosses_year_boundary() {
        assert_eq!(
            expected_farrowing(date("2023-10-15")),
            date("2024-02-06")
        );
    }

    #[test]
    fn gestation_days_counts_whole_days() {
        assert_eq!(gestation_days(date("2024-04-24"), date("2024-01-01")), 114);
        assert_eq!(gestation_days(date("2024-01-02"), date("2024-01-01")), 1);
    }

    #[test]
    fn gestation_days_is_negative_for_inverted_dates() {
        assert_eq!(gestation_days(date("2024-01-01"), date("2024-01-05")), -4);
    }

    #[test]
    fn lactation_starts_on_birth_date() {
        assert_eq!(lactation_start(date("2024-04-24")), date("2024-04-24"));
    }

    #[test]
    fn expected_weaning_adds_21_days() {
        assert_eq!(expected_weaning(date("2024-04-24")), date("2024-05-15"));
    }

    #[test]
    fn avg_weight_divides_by_live_count() {
        assert_eq!(avg_piglet_weight(12.0, 8), Some(1.5));
    }

    #[test]
    fn avg_weight_undefined_for_zero_live() {
        assert_eq!(avg_piglet_weight(12.0, 0), None);
    }

    #[test]
    fn birth_window_covers_the_viable_range() {
        assert!(BIRTH_GESTATION_RANGE.contains(&110));
        assert!(BIRTH_GESTATION_RANGE.contains(&120));
        assert!(!BIRTH_GESTATION_RANGE.contains(&109));
        assert!(!ABORTION_GESTATION_RANGE.contains(&114));
        assert!(ABORTION_GESTATION_RANGE.contains(&1));
    }
}
