//! Cross-record consistency checks
//!
//! These run after field-level validation because they need sibling records
//! from the store; the caller's transaction keeps the count-then-write
//! sequence consistent. Sow mutations are never performed here: the engine
//! emits instructions and the herd registry applies them.

use serde::Serialize;

use crate::domain::entities::Birth;
use crate::domain::ports::BreedingStore;
use crate::domain::value_objects::{PregnancyId, PregnancyStatus, ServiceId, SowId};
use crate::error::{EngineError, EngineResult};

/// An effect the engine asks the herd registry to apply after a successful
/// write, instead of mutating animal records itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "instruction", rename_all = "kebab-case")]
pub enum HerdInstruction {
    /// The sow farrowed: her parity counter goes up by one
    IncrementParity { sow: SowId },
}

/// Litter ceiling: a birth can never hold more piglet records than its
/// total-born count.
pub fn litter_has_room<S: BreedingStore + ?Sized>(store: &S, birth: &Birth) -> EngineResult<()> {
    let count = store.piglet_count_for_birth(birth.id)?;
    let limit = birth.total_born as usize;
    if count >= limit {
        return Err(EngineError::Capacity {
            message: format!("litter for birth {} is full", birth.id),
            count,
            limit,
        });
    }
    Ok(())
}

/// A service yields at most one live pregnancy lineage.
///
/// Any pregnancy not ended by abortion claims the service: an in-progress or
/// unconfirmed lineage is active, and an ended-birth lineage is the
/// service's one completed lineage. Only an aborted lineage frees the
/// service for another attempt.
pub fn service_lineage_free<S: BreedingStore + ?Sized>(
    store: &S,
    service: ServiceId,
    exclude: Option<PregnancyId>,
) -> EngineResult<()> {
    let claiming = store
        .pregnancies_for_service(service)?
        .into_iter()
        .filter(|pregnancy| Some(pregnancy.id) != exclude)
        .filter(|pregnancy| pregnancy.status != PregnancyStatus::EndedAbortion)
        .count();
    if claiming > 0 {
        return Err(EngineError::Capacity {
            message: format!("service {service} already carries a pregnancy lineage"),
            count: claiming,
            limit: 1,
        });
    }
    Ok(())
}
