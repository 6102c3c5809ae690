//! Breeding gateway use case
//!
//! Generic over the store port so tests and the CLI can run against the
//! in-memory implementation while production plugs in a transactional
//! store. The gateway never logs and never retries; every failure returns
//! as data and the caller's transaction rolls back.

use chrono::NaiveDate;

use crate::domain::entities::{
    push_note, Abortion, AbortionDraft, Birth, BirthDraft, Boar, Heat, HeatDraft, Piglet,
    PigletDraft, Pregnancy, PregnancyDraft, Record, RecordDraft, RecordKind, Service,
    ServiceDraft, Sow,
};
use crate::domain::ports::BreedingStore;
use crate::domain::services::consistency::{litter_has_room, service_lineage_free};
use crate::domain::services::gestation;
use crate::domain::services::lifecycle::{can_mutate, deletion_warning, Lifecycle};
use crate::domain::services::validate::{self, ValidationContext};
use crate::domain::services::HerdInstruction;
use crate::domain::value_objects::{
    AbortionId, BirthId, BoarId, HeatId, HeatStatus, PigletId, PregnancyId, PregnancyStatus,
    ServiceId, SowId,
};
use crate::error::{EngineError, EngineResult};

use super::result::{Deletion, SubmitMode, SubmitOutcome};

/// Orchestrates every create, update, status change and deletion
pub struct BreedingGateway<S: BreedingStore> {
    store: S,
    ctx: ValidationContext,
}

impl<S: BreedingStore> BreedingGateway<S> {
    /// Create a gateway reading "today" from the local clock
    pub fn new(store: S) -> Self {
        Self {
            store,
            ctx: ValidationContext::from_clock(),
        }
    }

    /// Create a gateway with a pinned calendar date (deterministic tests)
    pub fn with_today(store: S, today: NaiveDate) -> Self {
        Self {
            store,
            ctx: ValidationContext::new(today),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Advisory editability hint for UIs.
    ///
    /// The gateway re-checks authoritatively on every write; this only
    /// exists so callers can disable controls up front.
    pub fn can_edit(&self, record: &Record) -> bool {
        match record {
            Record::Heat(heat) => can_mutate(heat.status),
            Record::Pregnancy(pregnancy) => can_mutate(pregnancy.status),
            Record::Piglet(piglet) => can_mutate(piglet.status),
            Record::Service(_) | Record::Birth(_) | Record::Abortion(_) => true,
        }
    }

    /// Services of a sow still eligible to anchor a new pregnancy
    pub fn eligible_services(&self, sow: SowId) -> EngineResult<Vec<Service>> {
        Ok(self.store.active_services_for_sow(sow)?)
    }

    /// Create or update a breeding record.
    pub fn submit(&mut self, draft: RecordDraft, mode: SubmitMode) -> EngineResult<SubmitOutcome> {
        match draft {
            RecordDraft::Heat(draft) => self.submit_heat(draft, mode),
            RecordDraft::Service(draft) => self.submit_service(draft, mode),
            RecordDraft::Pregnancy(draft) => self.submit_pregnancy(draft, mode),
            RecordDraft::Birth(draft) => self.submit_birth(draft, mode),
            RecordDraft::Abortion(draft) => self.submit_abortion(draft, mode),
            RecordDraft::Piglet(draft) => self.submit_piglet(draft, mode),
        }
    }

    /// Move a heat, pregnancy or piglet to a new status.
    pub fn change_status(
        &mut self,
        kind: RecordKind,
        id: u64,
        new_status: &str,
        note: Option<String>,
    ) -> EngineResult<SubmitOutcome> {
        match kind {
            RecordKind::Heat => {
                let mut heat = self.load_heat(HeatId(id))?;
                ensure_mutable("heat", heat.status)?;
                let next = parse_status::<HeatStatus>(new_status)?;
                ensure_transition("heat", heat.status, next)?;
                heat.status = next;
                if let Some(note) = note {
                    push_note(&mut heat.note, note);
                }
                let record = self.store.persist(Record::Heat(heat))?;
                Ok(SubmitOutcome::new(record))
            }
            RecordKind::Pregnancy => {
                let mut pregnancy = self.load_pregnancy(PregnancyId(id))?;
                ensure_mutable("pregnancy", pregnancy.status)?;
                let next = parse_status::<PregnancyStatus>(new_status)?;
                ensure_transition("pregnancy", pregnancy.status, next)?;
                pregnancy.status = next;
                if next == PregnancyStatus::InProgress {
                    pregnancy.confirmed = true;
                }
                if let Some(note) = note {
                    push_note(&mut pregnancy.note, note);
                }
                let cascades = self.confirm_service_cascade(&pregnancy)?;
                let record = self.store.persist(Record::Pregnancy(pregnancy))?;
                let cascades = self.persist_all(cascades)?;
                Ok(SubmitOutcome::new(record).with_cascades(cascades))
            }
            RecordKind::Piglet => {
                let mut piglet = self.load_piglet(PigletId(id))?;
                ensure_mutable("piglet", piglet.status)?;
                let next = parse_status(new_status)?;
                ensure_transition("piglet", piglet.status, next)?;
                piglet.status = next;
                if let Some(note) = note {
                    push_note(&mut piglet.note, note);
                }
                // Terminal outcomes demand their companion fields.
                validate::validate_piglet(&piglet, &self.ctx).into_result()?;
                let record = self.store.persist(Record::Piglet(piglet))?;
                Ok(SubmitOutcome::new(record))
            }
            RecordKind::Service | RecordKind::Birth | RecordKind::Abortion => Err(
                EngineError::invalid("status", format!("{kind} records have no status lifecycle")),
            ),
        }
    }

    /// Delete a record.
    ///
    /// Heats, pregnancies and piglets obey the terminal lock; births and
    /// abortions are deletable but the outcome carries an audit warning the
    /// caller must surface. A service with linked pregnancies cannot go.
    pub fn delete(&mut self, kind: RecordKind, id: u64) -> EngineResult<Deletion> {
        match kind {
            RecordKind::Heat => {
                let heat = self.load_heat(HeatId(id))?;
                ensure_mutable("heat", heat.status)?;
            }
            RecordKind::Pregnancy => {
                let pregnancy = self.load_pregnancy(PregnancyId(id))?;
                ensure_mutable("pregnancy", pregnancy.status)?;
            }
            RecordKind::Piglet => {
                let piglet = self.load_piglet(PigletId(id))?;
                ensure_mutable("piglet", piglet.status)?;
            }
            RecordKind::Service => {
                self.load_service(ServiceId(id))?;
                let linked = self.store.pregnancies_for_service(ServiceId(id))?.len();
                if linked > 0 {
                    return Err(EngineError::invalid(
                        "id",
                        format!("service {id} has {linked} linked pregnancy record(s)"),
                    ));
                }
            }
            RecordKind::Birth => {
                self.load_birth(BirthId(id))?;
            }
            RecordKind::Abortion => {
                self.load_abortion(AbortionId(id))?;
            }
        }
        self.store.remove(kind, id)?;
        Ok(Deletion {
            kind,
            id,
            warning: deletion_warning(kind).map(str::to_string),
        })
    }

    // --- per-kind submit orchestration ---

    fn submit_heat(&mut self, draft: HeatDraft, mode: SubmitMode) -> EngineResult<SubmitOutcome> {
        // A new heat needs an active sow; editing an old record only needs
        // the reference to resolve, unless the payload repoints it.
        let sow_must_be_active = matches!(mode, SubmitMode::Create) || draft.sow.is_some();
        let heat = match mode {
            SubmitMode::Create => {
                let id = HeatId(self.store.next_id(RecordKind::Heat)?);
                Heat::from_draft(id, &draft).map_err(EngineError::Validation)?
            }
            SubmitMode::Update => {
                let id = update_id(draft.id.map(|id| id.0)).map(HeatId)?;
                let mut existing = self.load_heat(id)?;
                ensure_mutable("heat", existing.status)?;
                existing.apply(&draft);
                existing
            }
        };
        if sow_must_be_active {
            self.breedable_sow(heat.sow)?;
        } else {
            self.load_sow(heat.sow)?;
        }
        validate::validate_heat(&heat, &self.ctx).into_result()?;
        let record = self.store.persist(Record::Heat(heat))?;
        Ok(SubmitOutcome::new(record))
    }

    fn submit_service(
        &mut self,
        draft: ServiceDraft,
        mode: SubmitMode,
    ) -> EngineResult<SubmitOutcome> {
        match mode {
            SubmitMode::Create => {
                let id = ServiceId(self.store.next_id(RecordKind::Service)?);
                let service = Service::from_draft(id, &draft).map_err(EngineError::Validation)?;
                self.breedable_sow(service.sow)?;
                self.breedable_boar(service.boar)?;
                let mut cascades = Vec::new();
                if let Some(heat_id) = service.heat {
                    let mut heat = self.load_heat(heat_id)?;
                    // A terminal heat (cancelled, already serviced, skipped)
                    // refuses the attachment.
                    ensure_mutable("heat", heat.status)?;
                    heat.status = HeatStatus::Serviced;
                    cascades.push(Record::Heat(heat));
                }
                validate::validate_service(&service, &self.ctx).into_result()?;
                let record = self.store.persist(Record::Service(service))?;
                let cascades = self.persist_all(cascades)?;
                Ok(SubmitOutcome::new(record).with_cascades(cascades))
            }
            SubmitMode::Update => {
                let id = update_id(draft.id.map(|id| id.0)).map(ServiceId)?;
                let mut existing = self.load_service(id)?;
                existing.apply(&draft);
                validate::validate_service(&existing, &self.ctx).into_result()?;
                let record = self.store.persist(Record::Service(existing))?;
                Ok(SubmitOutcome::new(record))
            }
        }
    }

    fn submit_pregnancy(
        &mut self,
        draft: PregnancyDraft,
        mode: SubmitMode,
    ) -> EngineResult<SubmitOutcome> {
        match mode {
            SubmitMode::Create => {
                let id = PregnancyId(self.store.next_id(RecordKind::Pregnancy)?);
                let pregnancy =
                    Pregnancy::from_draft(id, &draft).map_err(EngineError::Validation)?;
                self.breedable_sow(pregnancy.sow)?;
                self.load_service(pregnancy.service)?;
                validate::validate_pregnancy(&pregnancy, &self.ctx).into_result()?;
                service_lineage_free(&self.store, pregnancy.service, None)?;
                let cascades = self.confirm_service_cascade(&pregnancy)?;
                let record = self.store.persist(Record::Pregnancy(pregnancy))?;
                let cascades = self.persist_all(cascades)?;
                Ok(SubmitOutcome::new(record).with_cascades(cascades))
            }
            SubmitMode::Update => {
                let id = update_id(draft.id.map(|id| id.0)).map(PregnancyId)?;
                let mut existing = self.load_pregnancy(id)?;
                ensure_mutable("pregnancy", existing.status)?;
                existing.apply(&draft);
                validate::validate_pregnancy(&existing, &self.ctx).into_result()?;
                let cascades = self.confirm_service_cascade(&existing)?;
                let record = self.store.persist(Record::Pregnancy(existing))?;
                let cascades = self.persist_all(cascades)?;
                Ok(SubmitOutcome::new(record).with_cascades(cascades))
            }
        }
    }

    fn submit_birth(&mut self, draft: BirthDraft, mode: SubmitMode) -> EngineResult<SubmitOutcome> {
        match mode {
            SubmitMode::Create => {
                let mut draft = draft;
                let pregnancy = match draft.pregnancy {
                    Some(id) => {
                        let pregnancy = self.load_pregnancy(id)?;
                        ensure_mutable("pregnancy", pregnancy.status)?;
                        self.fill_birth_defaults(&mut draft, &pregnancy)?;
                        Some(pregnancy)
                    }
                    None => None,
                };
                let id = BirthId(self.store.next_id(RecordKind::Birth)?);
                let birth = Birth::from_draft(id, &draft).map_err(EngineError::Validation)?;
                self.load_sow(birth.sow)?;
                self.load_boar(birth.boar)?;
                validate::validate_birth(&birth, &self.ctx).into_result()?;
                let mut cascades = Vec::new();
                if let Some(mut pregnancy) = pregnancy {
                    pregnancy.status = PregnancyStatus::EndedBirth;
                    cascades.push(Record::Pregnancy(pregnancy));
                }
                let instruction = HerdInstruction::IncrementParity { sow: birth.sow };
                let record = self.store.persist(Record::Birth(birth))?;
                let cascades = self.persist_all(cascades)?;
                Ok(SubmitOutcome::new(record)
                    .with_cascades(cascades)
                    .with_instruction(instruction))
            }
            SubmitMode::Update => {
                let id = update_id(draft.id.map(|id| id.0)).map(BirthId)?;
                let mut existing = self.load_birth(id)?;
                let pregnancy = self.load_pregnancy(existing.pregnancy)?;
                let mut draft = draft;
                if let (Some(birth_date), None) = (draft.birth_date, draft.gestation_days) {
                    draft.gestation_days = Some(gestation::gestation_days(
                        birth_date,
                        pregnancy.conception_date,
                    ));
                }
                existing.apply(&draft);
                validate::validate_birth(&existing, &self.ctx).into_result()?;
                let record = self.store.persist(Record::Birth(existing))?;
                Ok(SubmitOutcome::new(record))
            }
        }
    }

    fn submit_abortion(
        &mut self,
        draft: AbortionDraft,
        mode: SubmitMode,
    ) -> EngineResult<SubmitOutcome> {
        match mode {
            SubmitMode::Create => {
                let mut draft = draft;
                let pregnancy = match draft.pregnancy {
                    Some(id) => {
                        let pregnancy = self.load_pregnancy(id)?;
                        ensure_mutable("pregnancy", pregnancy.status)?;
                        if draft.sow.is_none() {
                            draft.sow = Some(pregnancy.sow);
                        }
                        if let (Some(abortion_date), None) =
                            (draft.abortion_date, draft.gestation_days)
                        {
                            draft.gestation_days = Some(gestation::gestation_days(
                                abortion_date,
                                pregnancy.conception_date,
                            ));
                        }
                        Some(pregnancy)
                    }
                    None => None,
                };
                let id = AbortionId(self.store.next_id(RecordKind::Abortion)?);
                let abortion = Abortion::from_draft(id, &draft).map_err(EngineError::Validation)?;
                self.load_sow(abortion.sow)?;
                validate::validate_abortion(&abortion, &self.ctx).into_result()?;
                let mut cascades = Vec::new();
                if let Some(mut pregnancy) = pregnancy {
                    pregnancy.status = PregnancyStatus::EndedAbortion;
                    cascades.push(Record::Pregnancy(pregnancy));
                }
                let record = self.store.persist(Record::Abortion(abortion))?;
                let cascades = self.persist_all(cascades)?;
                Ok(SubmitOutcome::new(record).with_cascades(cascades))
            }
            SubmitMode::Update => {
                let id = update_id(draft.id.map(|id| id.0)).map(AbortionId)?;
                let mut existing = self.load_abortion(id)?;
                let pregnancy = self.load_pregnancy(existing.pregnancy)?;
                let mut draft = draft;
                if let (Some(abortion_date), None) = (draft.abortion_date, draft.gestation_days) {
                    draft.gestation_days = Some(gestation::gestation_days(
                        abortion_date,
                        pregnancy.conception_date,
                    ));
                }
                existing.apply(&draft);
                validate::validate_abortion(&existing, &self.ctx).into_result()?;
                let record = self.store.persist(Record::Abortion(existing))?;
                Ok(SubmitOutcome::new(record))
            }
        }
    }

    fn submit_piglet(
        &mut self,
        draft: PigletDraft,
        mode: SubmitMode,
    ) -> EngineResult<SubmitOutcome> {
        match mode {
            SubmitMode::Create => {
                let mut draft = draft;
                let parent = match draft.birth {
                    Some(id) => {
                        let birth = self.load_birth(id)?;
                        if draft.sow.is_none() {
                            draft.sow = Some(birth.sow);
                        }
                        if draft.sire.is_none() {
                            draft.sire = Some(birth.boar);
                        }
                        Some(birth)
                    }
                    None => None,
                };
                let id = PigletId(self.store.next_id(RecordKind::Piglet)?);
                let piglet = Piglet::from_draft(id, &draft).map_err(EngineError::Validation)?;
                self.load_sow(piglet.sow)?;
                self.load_boar(piglet.sire)?;
                if let Some(adoptive) = piglet.adoptive_sow {
                    self.breedable_sow(adoptive)?;
                }
                validate::validate_piglet(&piglet, &self.ctx).into_result()?;
                let parent = match parent {
                    Some(birth) => birth,
                    None => self.load_birth(piglet.birth)?,
                };
                litter_has_room(&self.store, &parent)?;
                let record = self.store.persist(Record::Piglet(piglet))?;
                Ok(SubmitOutcome::new(record))
            }
            SubmitMode::Update => {
                let id = update_id(draft.id.map(|id| id.0)).map(PigletId)?;
                let mut existing = self.load_piglet(id)?;
                ensure_mutable("piglet", existing.status)?;
                existing.apply(&draft);
                if draft.adoptive_sow.is_some() {
                    if let Some(adoptive) = existing.adoptive_sow {
                        self.breedable_sow(adoptive)?;
                    }
                }
                validate::validate_piglet(&existing, &self.ctx).into_result()?;
                let record = self.store.persist(Record::Piglet(existing))?;
                Ok(SubmitOutcome::new(record))
            }
        }
    }

    // --- shared helpers ---

    /// A confirmed pregnancy marks its service as carrying one.
    fn confirm_service_cascade(&self, pregnancy: &Pregnancy) -> EngineResult<Vec<Record>> {
        if !pregnancy.confirmed {
            return Ok(Vec::new());
        }
        let mut service = self.load_service(pregnancy.service)?;
        if service.has_confirmed_pregnancy {
            return Ok(Vec::new());
        }
        service.has_confirmed_pregnancy = true;
        Ok(vec![Record::Service(service)])
    }

    /// Fill the identity and gestation defaults a birth inherits from its
    /// pregnancy lineage.
    fn fill_birth_defaults(
        &self,
        draft: &mut BirthDraft,
        pregnancy: &Pregnancy,
    ) -> EngineResult<()> {
        if draft.sow.is_none() {
            draft.sow = Some(pregnancy.sow);
        }
        if draft.boar.is_none() {
            draft.boar = self
                .store
                .service(pregnancy.service)?
                .map(|service| service.boar);
        }
        if let (Some(birth_date), None) = (draft.birth_date, draft.gestation_days) {
            draft.gestation_days = Some(gestation::gestation_days(
                birth_date,
                pregnancy.conception_date,
            ));
        }
        Ok(())
    }

    fn persist_all(&mut self, records: Vec<Record>) -> EngineResult<Vec<Record>> {
        let mut stored = Vec::with_capacity(records.len());
        for record in records {
            stored.push(self.store.persist(record)?);
        }
        Ok(stored)
    }

    fn load_sow(&self, id: SowId) -> EngineResult<Sow> {
        self.store
            .sow(id)?
            .ok_or(EngineError::Referential { kind: "sow", id: id.0 })
    }

    fn load_boar(&self, id: BoarId) -> EngineResult<Boar> {
        self.store
            .boar(id)?
            .ok_or(EngineError::Referential { kind: "boar", id: id.0 })
    }

    fn load_heat(&self, id: HeatId) -> EngineResult<Heat> {
        self.store
            .heat(id)?
            .ok_or(EngineError::Referential { kind: "heat", id: id.0 })
    }

    fn load_service(&self, id: ServiceId) -> EngineResult<Service> {
        self.store
            .service(id)?
            .ok_or(EngineError::Referential { kind: "service", id: id.0 })
    }

    fn load_pregnancy(&self, id: PregnancyId) -> EngineResult<Pregnancy> {
        self.store
            .pregnancy(id)?
            .ok_or(EngineError::Referential { kind: "pregnancy", id: id.0 })
    }

    fn load_birth(&self, id: BirthId) -> EngineResult<Birth> {
        self.store
            .birth(id)?
            .ok_or(EngineError::Referential { kind: "birth", id: id.0 })
    }

    fn load_abortion(&self, id: AbortionId) -> EngineResult<Abortion> {
        self.store
            .abortion(id)?
            .ok_or(EngineError::Referential { kind: "abortion", id: id.0 })
    }

    fn load_piglet(&self, id: PigletId) -> EngineResult<Piglet> {
        self.store
            .piglet(id)?
            .ok_or(EngineError::Referential { kind: "piglet", id: id.0 })
    }

    /// New heats and services only go on animals still in the herd.
    fn breedable_sow(&self, id: SowId) -> EngineResult<Sow> {
        let sow = self.load_sow(id)?;
        if !sow.status.is_active() {
            return Err(EngineError::invalid(
                "sow",
                format!("sow {} is not active ({})", sow.id, sow.status),
            ));
        }
        Ok(sow)
    }

    fn breedable_boar(&self, id: BoarId) -> EngineResult<Boar> {
        let boar = self.load_boar(id)?;
        if !boar.status.is_active() {
            return Err(EngineError::invalid(
                "boar",
                format!("boar {} is not active ({})", boar.id, boar.status),
            ));
        }
        Ok(boar)
    }
}

/// Guard shared by updates, status changes and deletions.
fn ensure_mutable<T>(kind: &'static str, status: T) -> EngineResult<()>
where
    T: Lifecycle + std::fmt::Display,
{
    if can_mutate(status) {
        Ok(())
    } else {
        Err(EngineError::LifecycleLocked {
            kind,
            status: status.to_string(),
        })
    }
}

fn ensure_transition<T>(kind: &'static str, from: T, to: T) -> EngineResult<()>
where
    T: Lifecycle + std::fmt::Display,
{
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(EngineError::invalid(
            "status",
            format!("cannot move {kind} from '{from}' to '{to}'"),
        ))
    }
}

fn parse_status<T>(raw: &str) -> EngineResult<T>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse()
        .map_err(|message: String| EngineError::invalid("status", message))
}

fn update_id(id: Option<u64>) -> EngineResult<u64> {
    id.ok_or_else(|| EngineError::invalid("id", "is required when updating"))
}
