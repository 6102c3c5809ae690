//! Heat entity - a detected estrus event
//!
//! A heat is the entry point of the reproductive chain: it is created
//! `detected` and leaves that status exactly once, either through a service
//! or through an explicit user decision.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{apply_field, apply_optional, require};
use crate::domain::value_objects::{HeatId, HeatStatus, SowId};
use crate::error::ValidationErrors;

/// Observed intensity of the estrus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HeatIntensity {
    Weak,
    #[default]
    Medium,
    Strong,
}

/// How the heat came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HeatType {
    #[default]
    Natural,
    Induced,
}

/// A detected estrus event in a sow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heat {
    pub id: HeatId,
    pub sow: SowId,
    pub heat_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub peak_date: Option<NaiveDate>,
    pub intensity: HeatIntensity,
    pub heat_type: HeatType,
    pub detection_method: Option<String>,
    /// Clinical signs observed at detection
    pub standing_reflex: bool,
    pub vulva_swelling: bool,
    pub mucus_discharge: bool,
    pub note: Option<String>,
    pub status: HeatStatus,
}

/// Incoming payload for creating or updating a heat
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatDraft {
    /// Target record id; required for updates, ignored on create
    pub id: Option<HeatId>,
    pub sow: Option<SowId>,
    pub heat_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub peak_date: Option<NaiveDate>,
    pub intensity: Option<HeatIntensity>,
    pub heat_type: Option<HeatType>,
    pub detection_method: Option<String>,
    pub standing_reflex: Option<bool>,
    pub vulva_swelling: Option<bool>,
    pub mucus_discharge: Option<bool>,
    pub note: Option<String>,
}

impl Heat {
    /// Build a new heat from a draft, accumulating missing required fields.
    ///
    /// New heats always start `detected`; status changes go through the
    /// lifecycle machinery, never through a payload.
    pub fn from_draft(id: HeatId, draft: &HeatDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let sow = require(&mut errors, "sow", draft.sow);
        let heat_date = require(&mut errors, "heat_date", draft.heat_date);
        let (Some(sow), Some(heat_date)) = (sow, heat_date) else {
            return Err(errors);
        };
        Ok(Self {
            id,
            sow,
            heat_date,
            end_date: draft.end_date,
            peak_date: draft.peak_date,
            intensity: draft.intensity.unwrap_or_default(),
            heat_type: draft.heat_type.unwrap_or_default(),
            detection_method: draft.detection_method.clone(),
            standing_reflex: draft.standing_reflex.unwrap_or(false),
            vulva_swelling: draft.vulva_swelling.unwrap_or(false),
            mucus_discharge: draft.mucus_discharge.unwrap_or(false),
            note: draft.note.clone(),
            status: HeatStatus::Detected,
        })
    }

    /// Merge an update payload over the stored record.
    ///
    /// The status is deliberately not merged here.
    pub fn apply(&mut self, draft: &HeatDraft) {
        apply_field(&mut self.sow, &draft.sow);
        apply_field(&mut self.heat_date, &draft.heat_date);
        apply_optional(&mut self.end_date, &draft.end_date);
        apply_optional(&mut self.peak_date, &draft.peak_date);
        apply_field(&mut self.intensity, &draft.intensity);
        apply_field(&mut self.heat_type, &draft.heat_type);
        apply_optional(&mut self.detection_method, &draft.detection_method);
        apply_field(&mut self.standing_reflex, &draft.standing_reflex);
        apply_field(&mut self.vulva_swelling, &draft.vulva_swelling);
        apply_field(&mut self.mucus_discharge, &draft.mucus_discharge);
        apply_optional(&mut self.note, &draft.note);
    }
}
