//! Breeding record entities
//!
//! Each entity file carries the stored record, its field enums, and the
//! all-optional draft type the mutation gateway merges payloads through.
//! Drafts never reach storage; construction and merging enforce the
//! required-field contract and fill derived defaults.

mod abortion;
mod animal;
mod birth;
mod heat;
mod piglet;
mod pregnancy;
mod record;
mod service;

pub use abortion::{Abortion, AbortionDraft, FetusCondition, RecoveryStatus};
pub use animal::{AnimalStatus, Boar, Sow};
pub use birth::{Birth, BirthDraft};
pub use heat::{Heat, HeatDraft, HeatIntensity, HeatType};
pub use piglet::{Piglet, PigletDraft, PigletVitality, Sex};
pub use pregnancy::{ConfirmationMethod, Pregnancy, PregnancyDraft};
pub use record::{Record, RecordDraft, RecordKind};
pub use service::{Service, ServiceDraft, ServiceType};

use crate::error::{FieldError, ValidationErrors};

/// Record a missing-field error when a required draft value is absent.
///
/// Returns the value unchanged so callers can destructure after the
/// accumulation pass.
pub(crate) fn require<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<T>,
) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::missing(field));
    }
    value
}

/// Overwrite a concrete field when the draft provides a value.
pub(crate) fn apply_field<T: Clone>(current: &mut T, incoming: &Option<T>) {
    if let Some(value) = incoming {
        *current = value.clone();
    }
}

/// Overwrite an optional field when the draft provides a value.
///
/// Absent draft values leave the stored value untouched; clearing a stored
/// optional is not expressible through a draft.
pub(crate) fn apply_optional<T: Clone>(current: &mut Option<T>, incoming: &Option<T>) {
    if incoming.is_some() {
        *current = incoming.clone();
    }
}

/// Append a note line to an optional note field.
pub(crate) fn push_note(slot: &mut Option<String>, note: String) {
    match slot {
        Some(existing) => {
            existing.push('\n');
            existing.push_str(&note);
        }
        None => *slot = Some(note),
    }
}
