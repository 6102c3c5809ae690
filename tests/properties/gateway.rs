//! Property tests for the mutation gateway.

use chrono::NaiveDate;
use proptest::prelude::*;

use farrow::domain::entities::{
    BirthDraft, Boar, HeatDraft, PigletDraft, PregnancyDraft, RecordDraft, ServiceDraft, Sex, Sow,
};
use farrow::domain::value_objects::{BirthId, BoarId, HeatId, PregnancyId, ServiceId, SowId};
use farrow::{BreedingGateway, EngineError, MemoryStore, RecordKind, SubmitMode};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn seeded_gateway() -> BreedingGateway<MemoryStore> {
    let mut store = MemoryStore::new();
    store.add_sow(Sow::new(SowId(1), "S-1"));
    store.add_boar(Boar::new(BoarId(2), "B-1"));
    BreedingGateway::with_today(store, date("2024-06-01"))
}

/// Seed the chain up to an open pregnancy conceived on 2024-01-01.
fn gateway_with_open_pregnancy() -> (BreedingGateway<MemoryStore>, u64) {
    let mut gateway = seeded_gateway();
    let service = gateway
        .submit(
            RecordDraft::Service(ServiceDraft {
                sow: Some(SowId(1)),
                boar: Some(BoarId(2)),
                service_date: Some(date("2024-01-01")),
                ..ServiceDraft::default()
            }),
            SubmitMode::Create,
        )
        .expect("seed service")
        .record
        .id();
    let pregnancy = gateway
        .submit(
            RecordDraft::Pregnancy(PregnancyDraft {
                sow: Some(SowId(1)),
                service: Some(ServiceId(service)),
                conception_date: Some(date("2024-01-01")),
                ..PregnancyDraft::default()
            }),
            SubmitMode::Create,
        )
        .expect("seed pregnancy")
        .record
        .id();
    (gateway, pregnancy)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A birth persists exactly when the claimed total matches the
    /// three sub-counts.
    #[test]
    fn births_persist_iff_the_litter_adds_up(
        alive in 0u32..=15,
        dead in 0u32..=15,
        mummified in 0u32..=15,
        claimed in 0u32..=45,
    ) {
        let (mut gateway, pregnancy) = gateway_with_open_pregnancy();
        let result = gateway.submit(
            RecordDraft::Birth(BirthDraft {
                pregnancy: Some(PregnancyId(pregnancy)),
                birth_date: Some(date("2024-04-24")),
                total_born: Some(claimed),
                born_alive: Some(alive),
                born_dead: Some(dead),
                mummified: Some(mummified),
                ..BirthDraft::default()
            }),
            SubmitMode::Create,
        );
        if claimed == alive + dead + mummified {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(EngineError::Validation(_))));
            prop_assert!(gateway.store().records(RecordKind::Birth).is_empty());
        }
    }

    /// PROPERTY: Submitting an identical update twice leaves the same
    /// stored state as submitting it once.
    #[test]
    fn identical_heat_updates_are_idempotent(method in "[a-z][a-z ]{0,15}") {
        let mut gateway = seeded_gateway();
        let heat = gateway
            .submit(
                RecordDraft::Heat(HeatDraft {
                    sow: Some(SowId(1)),
                    heat_date: Some(date("2024-01-01")),
                    ..HeatDraft::default()
                }),
                SubmitMode::Create,
            )
            .expect("seed heat")
            .record
            .id();
        let update = RecordDraft::Heat(HeatDraft {
            id: Some(HeatId(heat)),
            detection_method: Some(method),
            ..HeatDraft::default()
        });
        let first = gateway.submit(update.clone(), SubmitMode::Update).expect("first update");
        let second = gateway.submit(update, SubmitMode::Update).expect("second update");
        prop_assert_eq!(first.record, second.record);
    }

    /// PROPERTY: Exactly `total_born` piglets fit; the next one hits the
    /// capacity ceiling.
    #[test]
    fn the_litter_ceiling_is_exact(total in 1u32..=10) {
        let (mut gateway, pregnancy) = gateway_with_open_pregnancy();
        let birth = gateway
            .submit(
                RecordDraft::Birth(BirthDraft {
                    pregnancy: Some(PregnancyId(pregnancy)),
                    birth_date: Some(date("2024-04-24")),
                    total_born: Some(total),
                    born_alive: Some(total),
                    born_dead: Some(0),
                    mummified: Some(0),
                    ..BirthDraft::default()
                }),
                SubmitMode::Create,
            )
            .expect("seed birth")
            .record
            .id();

        for order in 1..=total {
            let result = gateway.submit(
                RecordDraft::Piglet(PigletDraft {
                    birth: Some(BirthId(birth)),
                    birth_order: Some(order),
                    sex: Some(Sex::Female),
                    ..PigletDraft::default()
                }),
                SubmitMode::Create,
            );
            prop_assert!(result.is_ok(), "piglet {order} of {total} should fit");
        }
        let overflow = gateway.submit(
            RecordDraft::Piglet(PigletDraft {
                birth: Some(BirthId(birth)),
                birth_order: Some(total + 1),
                sex: Some(Sex::Male),
                ..PigletDraft::default()
            }),
            SubmitMode::Create,
        );
        let is_capacity_err = matches!(overflow, Err(EngineError::Capacity { .. }));
        prop_assert!(is_capacity_err);
    }
}
