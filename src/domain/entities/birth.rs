//! Birth entity - a farrowing event
//!
//! Births are historical records: they never lock, but every write re-checks
//! the litter arithmetic and the gestation window. The average piglet weight
//! is always recomputed, never taken from a payload.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{apply_field, apply_optional, require};
use crate::domain::services::gestation;
use crate::domain::value_objects::{BirthId, BoarId, PregnancyId, SowId};
use crate::error::ValidationErrors;

/// The event of a sow delivering a litter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Birth {
    pub id: BirthId,
    pub pregnancy: PregnancyId,
    pub sow: SowId,
    pub boar: BoarId,
    pub birth_date: NaiveDate,
    /// Clock times kept verbatim, used only for duration display
    pub birth_start_time: Option<NaiveTime>,
    pub birth_end_time: Option<NaiveTime>,
    /// Whole days from conception to farrowing
    pub gestation_days: i64,
    pub total_born: u32,
    pub born_alive: u32,
    pub born_dead: u32,
    pub mummified: u32,
    pub malformed: u32,
    /// Litter weight in kg
    pub total_litter_weight: Option<f64>,
    /// Derived: total litter weight over born-alive count
    pub avg_piglet_weight: Option<f64>,
    /// Defaults to the birth date
    pub lactation_start_date: NaiveDate,
    /// Defaults to birth date + 21 days
    pub expected_weaning_date: NaiveDate,
    /// Post-partum sow temperature in degrees Celsius
    pub sow_temperature: Option<f64>,
    pub note: Option<String>,
}

/// Incoming payload for creating or updating a birth
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthDraft {
    pub id: Option<BirthId>,
    pub pregnancy: Option<PregnancyId>,
    pub sow: Option<SowId>,
    pub boar: Option<BoarId>,
    pub birth_date: Option<NaiveDate>,
    pub birth_start_time: Option<NaiveTime>,
    pub birth_end_time: Option<NaiveTime>,
    /// Filled by the gateway from the pregnancy's conception date when absent
    pub gestation_days: Option<i64>,
    pub total_born: Option<u32>,
    pub born_alive: Option<u32>,
    pub born_dead: Option<u32>,
    pub mummified: Option<u32>,
    pub malformed: Option<u32>,
    pub total_litter_weight: Option<f64>,
    pub lactation_start_date: Option<NaiveDate>,
    pub expected_weaning_date: Option<NaiveDate>,
    pub sow_temperature: Option<f64>,
    pub note: Option<String>,
}

impl Birth {
    /// Build a new birth from a draft, accumulating missing required fields
    /// and deriving lactation, weaning and average-weight defaults.
    pub fn from_draft(id: BirthId, draft: &BirthDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let pregnancy = require(&mut errors, "pregnancy", draft.pregnancy);
        let sow = require(&mut errors, "sow", draft.sow);
        let boar = require(&mut errors, "boar", draft.boar);
        let birth_date = require(&mut errors, "birth_date", draft.birth_date);
        let gestation_days = require(&mut errors, "gestation_days", draft.gestation_days);
        let total_born = require(&mut errors, "total_born", draft.total_born);
        let born_alive = require(&mut errors, "born_alive", draft.born_alive);
        let born_dead = require(&mut errors, "born_dead", draft.born_dead);
        let (
            Some(pregnancy),
            Some(sow),
            Some(boar),
            Some(birth_date),
            Some(gestation_days),
            Some(total_born),
            Some(born_alive),
            Some(born_dead),
        ) = (
            pregnancy,
            sow,
            boar,
            birth_date,
            gestation_days,
            total_born,
            born_alive,
            born_dead,
        )
        else {
            return Err(errors);
        };
        Ok(Self {
            id,
            pregnancy,
            sow,
            boar,
            birth_date,
            birth_start_time: draft.birth_start_time,
            birth_end_time: draft.birth_end_time,
            gestation_days,
            total_born,
            born_alive,
            born_dead,
            mummified: draft.mummified.unwrap_or(0),
            malformed: draft.malformed.unwrap_or(0),
            total_litter_weight: draft.total_litter_weight,
            avg_piglet_weight: draft
                .total_litter_weight
                .and_then(|total| gestation::avg_piglet_weight(total, born_alive)),
            lactation_start_date: draft
                .lactation_start_date
                .unwrap_or_else(|| gestation::lactation_start(birth_date)),
            expected_weaning_date: draft
                .expected_weaning_date
                .unwrap_or_else(|| gestation::expected_weaning(birth_date)),
            sow_temperature: draft.sow_temperature,
            note: draft.note.clone(),
        })
    }

    /// Merge an update payload over the stored record.
    ///
    /// The pregnancy linkage is immutable; the average piglet weight is
    /// recomputed from the merged weight and born-alive count.
    pub fn apply(&mut self, draft: &BirthDraft) {
        apply_field(&mut self.sow, &draft.sow);
        apply_field(&mut self.boar, &draft.boar);
        apply_field(&mut self.birth_date, &draft.birth_date);
        apply_optional(&mut self.birth_start_time, &draft.birth_start_time);
        apply_optional(&mut self.birth_end_time, &draft.birth_end_time);
        apply_field(&mut self.gestation_days, &draft.gestation_days);
        apply_field(&mut self.total_born, &draft.total_born);
        apply_field(&mut self.born_alive, &draft.born_alive);
        apply_field(&mut self.born_dead, &draft.born_dead);
        apply_field(&mut self.mummified, &draft.mummified);
        apply_field(&mut self.malformed, &draft.malformed);
        apply_optional(&mut self.total_litter_weight, &draft.total_litter_weight);
        apply_field(&mut self.lactation_start_date, &draft.lactation_start_date);
        apply_field(&mut self.expected_weaning_date, &draft.expected_weaning_date);
        apply_optional(&mut self.sow_temperature, &draft.sow_temperature);
        apply_optional(&mut self.note, &draft.note);
        self.avg_piglet_weight = self
            .total_litter_weight
            .and_then(|total| gestation::avg_piglet_weight(total, self.born_alive));
    }
}
