//! Abortion entity - a pregnancy ending before term
//!
//! Like births, abortions are historical records that stay editable; the
//! gestation window for an abortion is anything short of a viable farrowing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{apply_field, apply_optional, require};
use crate::domain::value_objects::{AbortionId, PregnancyId, SowId};
use crate::error::ValidationErrors;

/// Condition of the expelled fetuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetusCondition {
    Fresh,
    Macerated,
    Mummified,
    Mixed,
}

/// Post-abortion state of the sow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryStatus {
    Recovering,
    Recovered,
    Complications,
}

/// A gestation that ended before term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Abortion {
    pub id: AbortionId,
    pub pregnancy: PregnancyId,
    pub sow: SowId,
    pub abortion_date: NaiveDate,
    /// Whole days from conception to the abortion
    pub gestation_days: i64,
    pub fetuses_expelled: u32,
    pub fetus_condition: Option<FetusCondition>,
    pub probable_cause: Option<String>,
    pub recovery_status: Option<RecoveryStatus>,
    pub note: Option<String>,
}

/// Incoming payload for creating or updating an abortion
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AbortionDraft {
    pub id: Option<AbortionId>,
    pub pregnancy: Option<PregnancyId>,
    pub sow: Option<SowId>,
    pub abortion_date: Option<NaiveDate>,
    /// Filled by the gateway from the pregnancy's conception date when absent
    pub gestation_days: Option<i64>,
    pub fetuses_expelled: Option<u32>,
    pub fetus_condition: Option<FetusCondition>,
    pub probable_cause: Option<String>,
    pub recovery_status: Option<RecoveryStatus>,
    pub note: Option<String>,
}

impl Abortion {
    /// Build a new abortion from a draft, accumulating missing required fields.
    pub fn from_draft(id: AbortionId, draft: &AbortionDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let pregnancy = require(&mut errors, "pregnancy", draft.pregnancy);
        let sow = require(&mut errors, "sow", draft.sow);
        let abortion_date = require(&mut errors, "abortion_date", draft.abortion_date);
        let gestation_days = require(&mut errors, "gestation_days", draft.gestation_days);
        let fetuses_expelled = require(&mut errors, "fetuses_expelled", draft.fetuses_expelled);
        let (
            Some(pregnancy),
            Some(sow),
            Some(abortion_date),
            Some(gestation_days),
            Some(fetuses_expelled),
        ) = (pregnancy, sow, abortion_date, gestation_days, fetuses_expelled)
        else {
            return Err(errors);
        };
        Ok(Self {
            id,
            pregnancy,
            sow,
            abortion_date,
            gestation_days,
            fetuses_expelled,
            fetus_condition: draft.fetus_condition,
            probable_cause: draft.probable_cause.clone(),
            recovery_status: draft.recovery_status,
            note: draft.note.clone(),
        })
    }

    /// Merge an update payload over the stored record.
    ///
    /// The pregnancy linkage is immutable.
    pub fn apply(&mut self, draft: &AbortionDraft) {
        apply_field(&mut self.sow, &draft.sow);
        apply_field(&mut self.abortion_date, &draft.abortion_date);
        apply_field(&mut self.gestation_days, &draft.gestation_days);
        apply_field(&mut self.fetuses_expelled, &draft.fetuses_expelled);
        apply_optional(&mut self.fetus_condition, &draft.fetus_condition);
        apply_optional(&mut self.probable_cause, &draft.probable_cause);
        apply_optional(&mut self.recovery_status, &draft.recovery_status);
        apply_optional(&mut self.note, &draft.note);
    }
}
