//! BreedingStore port - abstraction over the persistence collaborator
//!
//! The engine assumes a relational store with transactional semantics is
//! supplied externally; the caller wraps each gateway invocation in one
//! atomic transaction so the read-then-write sequences here (litter counts,
//! lineage checks, the final persist) stay consistent under concurrent
//! requests. Implementations must provide either serializable transactions
//! or a row-level lock on the parent record for the duration of a call.

use crate::domain::entities::{
    Abortion, Birth, Boar, Heat, Piglet, Pregnancy, Record, RecordKind, Service, Sow,
};
use crate::domain::value_objects::{
    AbortionId, BirthId, BoarId, HeatId, PigletId, PregnancyId, ServiceId, SowId,
};
use crate::error::StorageError;

/// Abstract store for herd and breeding records
///
/// Lookups return `Ok(None)` for absent records; the gateway turns that into
/// a referential error. Only `persist`, `remove` and `next_id` may write.
pub trait BreedingStore {
    fn sow(&self, id: SowId) -> Result<Option<Sow>, StorageError>;
    fn boar(&self, id: BoarId) -> Result<Option<Boar>, StorageError>;
    fn heat(&self, id: HeatId) -> Result<Option<Heat>, StorageError>;
    fn service(&self, id: ServiceId) -> Result<Option<Service>, StorageError>;
    fn pregnancy(&self, id: PregnancyId) -> Result<Option<Pregnancy>, StorageError>;
    fn birth(&self, id: BirthId) -> Result<Option<Birth>, StorageError>;
    fn abortion(&self, id: AbortionId) -> Result<Option<Abortion>, StorageError>;
    fn piglet(&self, id: PigletId) -> Result<Option<Piglet>, StorageError>;

    /// Every pregnancy referencing the given service, any status
    fn pregnancies_for_service(
        &self,
        id: ServiceId,
    ) -> Result<Vec<Pregnancy>, StorageError>;

    /// Services of a sow still eligible for a new pregnancy, i.e. not yet
    /// carrying a confirmed one
    fn active_services_for_sow(&self, id: SowId) -> Result<Vec<Service>, StorageError>;

    /// Number of piglet records registered against the given birth
    fn piglet_count_for_birth(&self, id: BirthId) -> Result<usize, StorageError>;

    /// Allocate an identifier for a new record of the given kind
    fn next_id(&mut self, kind: RecordKind) -> Result<u64, StorageError>;

    /// Insert or update a record, returning the stored form
    fn persist(&mut self, record: Record) -> Result<Record, StorageError>;

    /// Delete a record; missing records are not an error at this layer
    fn remove(&mut self, kind: RecordKind, id: u64) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breeding_store_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn BreedingStore) {}
    }
}
