//! Service entity - a recorded mating or insemination
//!
//! Once written, the parties and the date of a service are history: updates
//! may touch the service type and note, nothing else. The
//! `has_confirmed_pregnancy` flag is derived by the gateway when a confirmed
//! pregnancy attaches, and filters the service out of the eligible list for
//! new pregnancies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{apply_field, apply_optional, require};
use crate::domain::value_objects::{BoarId, HeatId, ServiceId, SowId};
use crate::error::ValidationErrors;

/// How the mating was performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[default]
    Natural,
    ArtificialInsemination,
}

/// A recorded mating/insemination event tying a sow and boar on a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub sow: SowId,
    pub boar: BoarId,
    /// Heat this service answers, when one was recorded
    pub heat: Option<HeatId>,
    pub service_date: NaiveDate,
    pub service_type: ServiceType,
    pub note: Option<String>,
    /// Set by the gateway once a confirmed pregnancy references this service
    pub has_confirmed_pregnancy: bool,
}

/// Incoming payload for creating or updating a service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDraft {
    pub id: Option<ServiceId>,
    pub sow: Option<SowId>,
    pub boar: Option<BoarId>,
    pub heat: Option<HeatId>,
    pub service_date: Option<NaiveDate>,
    pub service_type: Option<ServiceType>,
    pub note: Option<String>,
}

impl Service {
    /// Build a new service from a draft, accumulating missing required fields.
    pub fn from_draft(id: ServiceId, draft: &ServiceDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let sow = require(&mut errors, "sow", draft.sow);
        let boar = require(&mut errors, "boar", draft.boar);
        let service_date = require(&mut errors, "service_date", draft.service_date);
        let (Some(sow), Some(boar), Some(service_date)) = (sow, boar, service_date) else {
            return Err(errors);
        };
        Ok(Self {
            id,
            sow,
            boar,
            heat: draft.heat,
            service_date,
            service_type: draft.service_type.unwrap_or_default(),
            note: draft.note.clone(),
            has_confirmed_pregnancy: false,
        })
    }

    /// Merge an update payload over the stored record.
    ///
    /// Sow, boar, heat linkage and date are immutable after creation; only
    /// the service type and note are merged. The confirmed-pregnancy flag is
    /// owned by the gateway.
    pub fn apply(&mut self, draft: &ServiceDraft) {
        apply_field(&mut self.service_type, &draft.service_type);
        apply_optional(&mut self.note, &draft.note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn minimal_draft() -> ServiceDraft {
        ServiceDraft {
            sow: Some(SowId(1)),
            boar: Some(BoarId(2)),
            service_date: Some(date("2024-03-02")),
            ..ServiceDraft::default()
        }
    }

    #[test]
    fn from_draft_starts_without_confirmed_pregnancy() {
        let service = Service::from_draft(ServiceId(1), &minimal_draft()).unwrap();
        assert!(!service.has_confirmed_pregnancy);
        assert_eq!(service.service_type, ServiceType::Natural);
        assert_eq!(service.heat, None);
    }

    #[test]
    fn from_draft_accumulates_all_missing_fields() {
        let err = Service::from_draft(ServiceId(1), &ServiceDraft::default()).unwrap_err();
        assert_eq!(err.len(), 3);
    }

    #[test]
    fn apply_only_touches_mutable_fields() {
        let mut service = Service::from_draft(ServiceId(1), &minimal_draft()).unwrap();
        service.apply(&ServiceDraft {
            sow: Some(SowId(9)),
            boar: Some(BoarId(9)),
            service_date: Some(date("2030-01-01")),
            service_type: Some(ServiceType::ArtificialInsemination),
            note: Some("second attempt".to_string()),
            ..ServiceDraft::default()
        });
        assert_eq!(service.sow, SowId(1));
        assert_eq!(service.boar, BoarId(2));
        assert_eq!(service.service_date, date("2024-03-02"));
        assert_eq!(service.service_type, ServiceType::ArtificialInsemination);
        assert_eq!(service.note.as_deref(), Some("second attempt"));
    }

    #[test]
    fn service_type_serde_kebab_case() {
        let json = serde_json::to_string(&ServiceType::ArtificialInsemination).unwrap();
        assert_eq!(json, "\"artificial-insemination\"");
    }
}
