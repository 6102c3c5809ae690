//! Property tests for the date derivation engine.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use farrow::domain::services::gestation;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // Roughly 1945..2055; herd dates never leave this window.
    (0u64..40_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1945, 1, 1)
            .expect("valid base date")
            .checked_add_days(Days::new(offset))
            .expect("offset stays representable")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The derived farrowing date is always exactly 114 days out.
    #[test]
    fn farrowing_is_exactly_114_days_out(conception in any_date()) {
        let due = gestation::expected_farrowing(conception);
        prop_assert_eq!(gestation::gestation_days(due, conception), 114);
    }

    /// PROPERTY: The derived weaning date is always exactly 21 days after birth.
    #[test]
    fn weaning_is_exactly_21_days_after_birth(birth in any_date()) {
        let weaning = gestation::expected_weaning(birth);
        prop_assert_eq!((weaning - birth).num_days(), 21);
    }

    /// PROPERTY: Swapping anchor and conception flips the sign.
    #[test]
    fn gestation_days_is_antisymmetric(a in any_date(), b in any_date()) {
        prop_assert_eq!(
            gestation::gestation_days(a, b),
            -gestation::gestation_days(b, a)
        );
    }

    /// PROPERTY: The average piglet weight scales back to the litter total,
    /// and is undefined exactly when nothing was born alive.
    #[test]
    fn avg_weight_scales_back_to_the_total(total in 0.0f64..500.0, alive in 0u32..30) {
        match gestation::avg_piglet_weight(total, alive) {
            None => prop_assert_eq!(alive, 0),
            Some(avg) => {
                prop_assert!(alive > 0);
                prop_assert!((avg * f64::from(alive) - total).abs() < 1e-9);
            }
        }
    }
}
