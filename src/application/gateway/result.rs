//! Gateway outcome types

use serde::Serialize;

use crate::domain::entities::{Record, RecordKind};
use crate::domain::services::HerdInstruction;

/// Whether a submit creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

/// Result of a successful submit or status change
///
/// Besides the written record this carries the sibling records the write
/// cascaded into (a heat marked serviced, a pregnancy ended, a service
/// gaining its confirmed flag) and the instructions the herd registry must
/// apply on the engine's behalf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub record: Record,
    pub cascades: Vec<Record>,
    pub instructions: Vec<HerdInstruction>,
}

impl SubmitOutcome {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            cascades: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub fn with_cascades(mut self, cascades: Vec<Record>) -> Self {
        self.cascades = cascades;
        self
    }

    pub fn with_instruction(mut self, instruction: HerdInstruction) -> Self {
        self.instructions.push(instruction);
        self
    }
}

/// Result of a successful deletion
///
/// Audit-significant kinds carry a warning the caller must surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deletion {
    pub kind: RecordKind,
    pub id: u64,
    pub warning: Option<String>,
}
