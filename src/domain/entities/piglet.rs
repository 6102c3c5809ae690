//! Piglet entity - an individual offspring linked to a birth
//!
//! A piglet starts nursing (or dead, when it was born dead) and reaches
//! exactly one terminal outcome. Each terminal outcome demands companion
//! fields that the piglet validator enforces.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{apply_field, apply_optional, require};
use crate::domain::value_objects::{BirthId, BoarId, PigletId, PigletStatus, SowId};
use crate::error::ValidationErrors;

/// Sex of the piglet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sex {
    Male,
    Female,
}

/// State of the piglet at birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PigletVitality {
    #[default]
    Alive,
    Dead,
    Mummified,
}

/// An individual offspring record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piglet {
    pub id: PigletId,
    pub birth: BirthId,
    /// Birth mother
    pub sow: SowId,
    pub sire: BoarId,
    /// Position in the farrowing order, starting at 1
    pub birth_order: u32,
    pub sex: Sex,
    /// Weight at birth in kg
    pub birth_weight: Option<f64>,
    pub birth_status: PigletVitality,
    pub status: PigletStatus,
    /// Set when the piglet was moved to another sow
    pub adoptive_sow: Option<SowId>,
    pub transfer_reason: Option<String>,
    pub weaning_date: Option<NaiveDate>,
    /// Weight at weaning in kg
    pub weaning_weight: Option<f64>,
    pub death_date: Option<NaiveDate>,
    pub death_cause: Option<String>,
    pub note: Option<String>,
}

/// Incoming payload for creating or updating a piglet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PigletDraft {
    pub id: Option<PigletId>,
    pub birth: Option<BirthId>,
    pub sow: Option<SowId>,
    pub sire: Option<BoarId>,
    pub birth_order: Option<u32>,
    pub sex: Option<Sex>,
    pub birth_weight: Option<f64>,
    pub birth_status: Option<PigletVitality>,
    pub status: Option<PigletStatus>,
    pub adoptive_sow: Option<SowId>,
    pub transfer_reason: Option<String>,
    pub weaning_date: Option<NaiveDate>,
    pub weaning_weight: Option<f64>,
    pub death_date: Option<NaiveDate>,
    pub death_cause: Option<String>,
    pub note: Option<String>,
}

impl Piglet {
    /// Build a new piglet from a draft, accumulating missing required fields.
    ///
    /// A piglet born dead or mummified starts in the `dead` status; anything
    /// else starts `nursing` unless the payload says otherwise.
    pub fn from_draft(id: PigletId, draft: &PigletDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let birth = require(&mut errors, "birth", draft.birth);
        let sow = require(&mut errors, "sow", draft.sow);
        let sire = require(&mut errors, "sire", draft.sire);
        let birth_order = require(&mut errors, "birth_order", draft.birth_order);
        let sex = require(&mut errors, "sex", draft.sex);
        let (Some(birth), Some(sow), Some(sire), Some(birth_order), Some(sex)) =
            (birth, sow, sire, birth_order, sex)
        else {
            return Err(errors);
        };
        let birth_status = draft.birth_status.unwrap_or_default();
        let status = draft.status.unwrap_or(match birth_status {
            PigletVitality::Alive => PigletStatus::Nursing,
            PigletVitality::Dead | PigletVitality::Mummified => PigletStatus::Dead,
        });
        Ok(Self {
            id,
            birth,
            sow,
            sire,
            birth_order,
            sex,
            birth_weight: draft.birth_weight,
            birth_status,
            status,
            adoptive_sow: draft.adoptive_sow,
            transfer_reason: draft.transfer_reason.clone(),
            weaning_date: draft.weaning_date,
            weaning_weight: draft.weaning_weight,
            death_date: draft.death_date,
            death_cause: draft.death_cause.clone(),
            note: draft.note.clone(),
        })
    }

    /// Merge an update payload over the stored record.
    ///
    /// The birth linkage is immutable and the status is not merged here;
    /// status moves flow through the lifecycle machinery so companion-field
    /// rules apply against the merged record.
    pub fn apply(&mut self, draft: &PigletDraft) {
        apply_field(&mut self.sow, &draft.sow);
        apply_field(&mut self.sire, &draft.sire);
        apply_field(&mut self.birth_order, &draft.birth_order);
        apply_field(&mut self.sex, &draft.sex);
        apply_optional(&mut self.birth_weight, &draft.birth_weight);
        apply_field(&mut self.birth_status, &draft.birth_status);
        apply_optional(&mut self.adoptive_sow, &draft.adoptive_sow);
        apply_optional(&mut self.transfer_reason, &draft.transfer_reason);
        apply_optional(&mut self.weaning_date, &draft.weaning_date);
        apply_optional(&mut self.weaning_weight, &draft.weaning_weight);
        apply_optional(&mut self.death_date, &draft.death_date);
        apply_optional(&mut self.death_cause, &draft.death_cause);
        apply_optional(&mut self.note, &draft.note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_draft() -> PigletDraft {
        PigletDraft {
            birth: Some(BirthId(1)),
            sow: Some(SowId(1)),
            sire: Some(BoarId(2)),
            birth_order: Some(1),
            sex: Some(Sex::Female),
            ..PigletDraft::default()
        }
    }

    #[test]
    fn live_born_piglet_starts_nursing() {
        let piglet = Piglet::from_draft(PigletId(1), &minimal_draft()).unwrap();
        assert_eq!(piglet.birth_status, PigletVitality::Alive);
        assert_eq!(piglet.status, PigletStatus::Nursing);
    }

    #[test]
    fn dead_born_piglet_starts_dead() {
        let draft = PigletDraft {
            birth_status: Some(PigletVitality::Mummified),
            ..minimal_draft()
        };
        let piglet = Piglet::from_draft(PigletId(1), &draft).unwrap();
        assert_eq!(piglet.status, PigletStatus::Dead);
    }

    #[test]
    fn from_draft_accumulates_all_missing_fields() {
        let err = Piglet::from_draft(PigletId(1), &PigletDraft::default()).unwrap_err();
        assert_eq!(err.len(), 5);
    }

    #[test]
    fn apply_keeps_birth_linkage_and_status() {
        let mut piglet = Piglet::from_draft(PigletId(1), &minimal_draft()).unwrap();
        piglet.apply(&PigletDraft {
            birth: Some(BirthId(50)),
            status: Some(PigletStatus::Sold),
            weaning_date: Some("2024-05-15".parse().unwrap()),
            weaning_weight: Some(6.2),
            ..PigletDraft::default()
        });
        assert_eq!(piglet.birth, BirthId(1));
        assert_eq!(piglet.status, PigletStatus::Nursing);
        assert_eq!(piglet.weaning_weight, Some(6.2));
    }
}
