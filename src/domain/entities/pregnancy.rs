//! Pregnancy entity - a gestation lineage originating from one service
//!
//! The expected farrowing date defaults to conception plus the standard
//! gestation length; a caller may override it, but the default is always
//! offered. Confirmation moves an unconfirmed lineage to in-progress.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{apply_field, apply_optional, require};
use crate::domain::services::gestation;
use crate::domain::value_objects::{PregnancyId, PregnancyStatus, ServiceId, SowId};
use crate::error::ValidationErrors;

/// How the pregnancy was confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmationMethod {
    Ultrasound,
    NoReturn,
    Palpation,
}

/// A gestation lineage running from conception until birth or abortion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pregnancy {
    pub id: PregnancyId,
    pub sow: SowId,
    pub service: ServiceId,
    pub conception_date: NaiveDate,
    /// Defaults to conception + 114 days; caller-overridable
    pub expected_farrowing_date: NaiveDate,
    pub confirmed: bool,
    pub confirmation_date: Option<NaiveDate>,
    pub confirmation_method: Option<ConfirmationMethod>,
    pub ultrasound_count: u32,
    pub estimated_piglets: Option<u32>,
    pub note: Option<String>,
    pub status: PregnancyStatus,
}

/// Incoming payload for creating or updating a pregnancy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PregnancyDraft {
    pub id: Option<PregnancyId>,
    pub sow: Option<SowId>,
    pub service: Option<ServiceId>,
    pub conception_date: Option<NaiveDate>,
    pub expected_farrowing_date: Option<NaiveDate>,
    pub confirmed: Option<bool>,
    pub confirmation_date: Option<NaiveDate>,
    pub confirmation_method: Option<ConfirmationMethod>,
    pub ultrasound_count: Option<u32>,
    pub estimated_piglets: Option<u32>,
    pub note: Option<String>,
}

impl Pregnancy {
    /// Build a new pregnancy from a draft, accumulating missing required
    /// fields and deriving the expected farrowing date when not overridden.
    pub fn from_draft(id: PregnancyId, draft: &PregnancyDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let sow = require(&mut errors, "sow", draft.sow);
        let service = require(&mut errors, "service", draft.service);
        let conception = require(&mut errors, "conception_date", draft.conception_date);
        let (Some(sow), Some(service), Some(conception)) = (sow, service, conception) else {
            return Err(errors);
        };
        let confirmed = draft
            .confirmed
            .unwrap_or(draft.confirmation_date.is_some());
        Ok(Self {
            id,
            sow,
            service,
            conception_date: conception,
            expected_farrowing_date: draft
                .expected_farrowing_date
                .unwrap_or_else(|| gestation::expected_farrowing(conception)),
            confirmed,
            confirmation_date: draft.confirmation_date,
            confirmation_method: draft.confirmation_method,
            ultrasound_count: draft.ultrasound_count.unwrap_or(0),
            estimated_piglets: draft.estimated_piglets,
            note: draft.note.clone(),
            status: if confirmed {
                PregnancyStatus::InProgress
            } else {
                PregnancyStatus::Unconfirmed
            },
        })
    }

    /// Merge an update payload over the stored record.
    ///
    /// The sow and service references are immutable. Moving the conception
    /// date re-derives the expected farrowing date unless the payload pins
    /// one explicitly; confirming an unconfirmed lineage advances its status.
    pub fn apply(&mut self, draft: &PregnancyDraft) {
        apply_field(&mut self.conception_date, &draft.conception_date);
        match (draft.expected_farrowing_date, draft.conception_date) {
            (Some(explicit), _) => self.expected_farrowing_date = explicit,
            (None, Some(conception)) => {
                self.expected_farrowing_date = gestation::expected_farrowing(conception);
            }
            (None, None) => {}
        }
        apply_field(&mut self.confirmed, &draft.confirmed);
        apply_optional(&mut self.confirmation_date, &draft.confirmation_date);
        apply_optional(&mut self.confirmation_method, &draft.confirmation_method);
        apply_field(&mut self.ultrasound_count, &draft.ultrasound_count);
        apply_optional(&mut self.estimated_piglets, &draft.estimated_piglets);
        apply_optional(&mut self.note, &draft.note);
        if self.confirmation_date.is_some() {
            self.confirmed = true;
        }
        if self.confirmed && self.status == PregnancyStatus::Unconfirmed {
            self.status = PregnancyStatus::InProgress;
        }
    }
}
