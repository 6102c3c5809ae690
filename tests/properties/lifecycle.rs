//! Property tests for the lifecycle transition tables.

use proptest::prelude::*;

use farrow::domain::services::Lifecycle;
use farrow::domain::value_objects::{HeatStatus, PigletStatus, PregnancyStatus};

const HEAT_STATES: [HeatStatus; 4] = [
    HeatStatus::Detected,
    HeatStatus::Serviced,
    HeatStatus::NotServiced,
    HeatStatus::Cancelled,
];
const PREGNANCY_STATES: [PregnancyStatus; 4] = [
    PregnancyStatus::InProgress,
    PregnancyStatus::Unconfirmed,
    PregnancyStatus::EndedBirth,
    PregnancyStatus::EndedAbortion,
];
const PIGLET_STATES: [PigletStatus; 5] = [
    PigletStatus::Nursing,
    PigletStatus::Weaned,
    PigletStatus::Transferred,
    PigletStatus::Sold,
    PigletStatus::Dead,
];

fn heat_status() -> impl Strategy<Value = HeatStatus> {
    (0..HEAT_STATES.len()).prop_map(|index| HEAT_STATES[index])
}

fn pregnancy_status() -> impl Strategy<Value = PregnancyStatus> {
    (0..PREGNANCY_STATES.len()).prop_map(|index| PREGNANCY_STATES[index])
}

fn piglet_status() -> impl Strategy<Value = PigletStatus> {
    (0..PIGLET_STATES.len()).prop_map(|index| PIGLET_STATES[index])
}

proptest! {
    /// PROPERTY: `can_transition_to` agrees with the table, and terminal
    /// states never exit.
    #[test]
    fn heat_transitions_match_the_table(from in heat_status(), to in heat_status()) {
        prop_assert_eq!(from.can_transition_to(to), from.next_states().contains(&to));
        if from.is_terminal() {
            prop_assert!(!from.can_transition_to(to));
        }
    }

    #[test]
    fn pregnancy_transitions_match_the_table(
        from in pregnancy_status(),
        to in pregnancy_status(),
    ) {
        prop_assert_eq!(from.can_transition_to(to), from.next_states().contains(&to));
        if from.is_terminal() {
            prop_assert!(!from.can_transition_to(to));
        }
    }

    #[test]
    fn piglet_transitions_match_the_table(from in piglet_status(), to in piglet_status()) {
        prop_assert_eq!(from.can_transition_to(to), from.next_states().contains(&to));
        if from.is_terminal() {
            prop_assert!(!from.can_transition_to(to));
        }
    }
}
