//! In-memory breeding store
//!
//! Implements the `BreedingStore` port over plain ordered maps. Used as the
//! test double and as the CLI's working set; the whole store serializes to
//! one JSON document (see `herd_file`). Identifier allocation runs off a
//! single sequence so ids stay unique across the file's lifetime even after
//! deletions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Abortion, Birth, Boar, Heat, Piglet, Pregnancy, Record, RecordKind, Service, Sow,
};
use crate::domain::ports::BreedingStore;
use crate::domain::services::HerdInstruction;
use crate::domain::value_objects::{
    AbortionId, BirthId, BoarId, HeatId, PigletId, PregnancyId, ServiceId, SowId,
};
use crate::error::StorageError;

/// Ordered-map store for a whole herd
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    sequence: u64,
    #[serde(default)]
    sows: BTreeMap<u64, Sow>,
    #[serde(default)]
    boars: BTreeMap<u64, Boar>,
    #[serde(default)]
    heats: BTreeMap<u64, Heat>,
    #[serde(default)]
    services: BTreeMap<u64, Service>,
    #[serde(default)]
    pregnancies: BTreeMap<u64, Pregnancy>,
    #[serde(default)]
    births: BTreeMap<u64, Birth>,
    #[serde(default)]
    abortions: BTreeMap<u64, Abortion>,
    #[serde(default)]
    piglets: BTreeMap<u64, Piglet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- herd registry ---

    /// Register a new sow and return her id
    pub fn add_sow(&mut self, sow: Sow) -> SowId {
        let id = sow.id;
        self.sows.insert(id.0, sow);
        id
    }

    /// Register a new boar and return his id
    pub fn add_boar(&mut self, boar: Boar) -> BoarId {
        let id = boar.id;
        self.boars.insert(id.0, boar);
        id
    }

    /// Allocate an id from the shared sequence (also used for animals)
    pub fn allocate_id(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Apply a herd instruction emitted by the gateway.
    ///
    /// Stands in for the external sow service: the engine emits the intent,
    /// the registry applies it.
    pub fn apply_instruction(&mut self, instruction: &HerdInstruction) {
        match instruction {
            HerdInstruction::IncrementParity { sow } => {
                if let Some(sow) = self.sows.get_mut(&sow.0) {
                    sow.parity += 1;
                }
            }
        }
    }

    pub fn sows(&self) -> impl Iterator<Item = &Sow> {
        self.sows.values()
    }

    pub fn boars(&self) -> impl Iterator<Item = &Boar> {
        self.boars.values()
    }

    // --- direct insertion, for seeding tests and fixtures ---

    pub fn insert_heat(&mut self, heat: Heat) {
        self.heats.insert(heat.id.0, heat);
    }

    pub fn insert_service(&mut self, service: Service) {
        self.services.insert(service.id.0, service);
    }

    pub fn insert_pregnancy(&mut self, pregnancy: Pregnancy) {
        self.pregnancies.insert(pregnancy.id.0, pregnancy);
    }

    pub fn insert_birth(&mut self, birth: Birth) {
        self.births.insert(birth.id.0, birth);
    }

    pub fn insert_piglet(&mut self, piglet: Piglet) {
        self.piglets.insert(piglet.id.0, piglet);
    }

    // --- read-side views for callers ---

    /// Fetch one record, kind-dispatched
    pub fn get_record(&self, kind: RecordKind, id: u64) -> Option<Record> {
        match kind {
            RecordKind::Heat => self.heats.get(&id).cloned().map(Record::Heat),
            RecordKind::Service => self.services.get(&id).cloned().map(Record::Service),
            RecordKind::Pregnancy => self.pregnancies.get(&id).cloned().map(Record::Pregnancy),
            RecordKind::Birth => self.births.get(&id).cloned().map(Record::Birth),
            RecordKind::Abortion => self.abortions.get(&id).cloned().map(Record::Abortion),
            RecordKind::Piglet => self.piglets.get(&id).cloned().map(Record::Piglet),
        }
    }

    /// All records of a kind, in id order
    pub fn records(&self, kind: RecordKind) -> Vec<Record> {
        match kind {
            RecordKind::Heat => self.heats.values().cloned().map(Record::Heat).collect(),
            RecordKind::Service => self
                .services
                .values()
                .cloned()
                .map(Record::Service)
                .collect(),
            RecordKind::Pregnancy => self
                .pregnancies
                .values()
                .cloned()
                .map(Record::Pregnancy)
                .collect(),
            RecordKind::Birth => self.births.values().cloned().map(Record::Birth).collect(),
            RecordKind::Abortion => self
                .abortions
                .values()
                .cloned()
                .map(Record::Abortion)
                .collect(),
            RecordKind::Piglet => self.piglets.values().cloned().map(Record::Piglet).collect(),
        }
    }
}

impl BreedingStore for MemoryStore {
    fn sow(&self, id: SowId) -> Result<Option<Sow>, StorageError> {
        Ok(self.sows.get(&id.0).cloned())
    }

    fn boar(&self, id: BoarId) -> Result<Option<Boar>, StorageError> {
        Ok(self.boars.get(&id.0).cloned())
    }

    fn heat(&self, id: HeatId) -> Result<Option<Heat>, StorageError> {
        Ok(self.heats.get(&id.0).cloned())
    }

    fn service(&self, id: ServiceId) -> Result<Option<Service>, StorageError> {
        Ok(self.services.get(&id.0).cloned())
    }

    fn pregnancy(&self, id: PregnancyId) -> Result<Option<Pregnancy>, StorageError> {
        Ok(self.pregnancies.get(&id.0).cloned())
    }

    fn birth(&self, id: BirthId) -> Result<Option<Birth>, StorageError> {
        Ok(self.births.get(&id.0).cloned())
    }

    fn abortion(&self, id: AbortionId) -> Result<Option<Abortion>, StorageError> {
        Ok(self.abortions.get(&id.0).cloned())
    }

    fn piglet(&self, id: PigletId) -> Result<Option<Piglet>, StorageError> {
        Ok(self.piglets.get(&id.0).cloned())
    }

    fn pregnancies_for_service(
        &self,
        id: ServiceId,
    ) -> Result<Vec<Pregnancy>, StorageError> {
        Ok(self
            .pregnancies
            .values()
            .filter(|pregnancy| pregnancy.service == id)
            .cloned()
            .collect())
    }

    fn active_services_for_sow(&self, id: SowId) -> Result<Vec<Service>, StorageError> {
        Ok(self
            .services
            .values()
            .filter(|service| service.sow == id && !service.has_confirmed_pregnancy)
            .cloned()
            .collect())
    }

    fn piglet_count_for_birth(&self, id: BirthId) -> Result<usize, StorageError> {
        Ok(self
            .piglets
            .values()
            .filter(|piglet| piglet.birth == id)
            .count())
    }

    fn next_id(&mut self, _kind: RecordKind) -> Result<u64, StorageError> {
        Ok(self.allocate_id())
    }

    fn persist(&mut self, record: Record) -> Result<Record, StorageError> {
        match &record {
            Record::Heat(heat) => {
                self.heats.insert(heat.id.0, heat.clone());
            }
            Record::Service(service) => {
                self.services.insert(service.id.0, service.clone());
            }
            Record::Pregnancy(pregnancy) => {
                self.pregnancies.insert(pregnancy.id.0, pregnancy.clone());
            }
            Record::Birth(birth) => {
                self.births.insert(birth.id.0, birth.clone());
            }
            Record::Abortion(abortion) => {
                self.abortions.insert(abortion.id.0, abortion.clone());
            }
            Record::Piglet(piglet) => {
                self.piglets.insert(piglet.id.0, piglet.clone());
            }
        }
        Ok(record)
    }

    fn remove(&mut self, kind: RecordKind, id: u64) -> Result<(), StorageError> {
        match kind {
            RecordKind::Heat => {
                self.heats.remove(&id);
            }
            RecordKind::Service => {
                self.services.remove(&id);
            }
            RecordKind::Pregnancy => {
                self.pregnancies.remove(&id);
            }
            RecordKind::Birth => {
                self.births.remove(&id);
            }
            RecordKind::Abortion => {
                self.abortions.remove(&id);
            }
            RecordKind::Piglet => {
                self.piglets.remove(&id);
            }
        }
        Ok(())
    }
}
