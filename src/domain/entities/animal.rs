//! Sow and boar registry records
//!
//! Animal CRUD is owned by the herd registry, not the engine. The engine
//! reads the status as a referential guard when new breeding events are
//! recorded, and emits parity increments for sows instead of mutating them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BoarId, SowId};

/// Registry status of a breeding animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnimalStatus {
    #[default]
    Active,
    Culled,
    Dead,
}

impl AnimalStatus {
    /// Only active animals may appear on new heats and services
    pub fn is_active(self) -> bool {
        matches!(self, AnimalStatus::Active)
    }
}

impl std::fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimalStatus::Active => f.write_str("active"),
            AnimalStatus::Culled => f.write_str("culled"),
            AnimalStatus::Dead => f.write_str("dead"),
        }
    }
}

/// A breeding sow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sow {
    pub id: SowId,
    /// Ear tag or house identifier
    pub tag: String,
    pub status: AnimalStatus,
    /// Number of farrowings to date, incremented per recorded birth
    pub parity: u32,
    pub birth_date: Option<NaiveDate>,
    /// Date the animal entered the herd; never before its birth date
    pub entry_date: Option<NaiveDate>,
}

impl Sow {
    pub fn new(id: SowId, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
            status: AnimalStatus::Active,
            parity: 0,
            birth_date: None,
            entry_date: None,
        }
    }
}

/// A breeding boar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boar {
    pub id: BoarId,
    pub tag: String,
    pub status: AnimalStatus,
    pub birth_date: Option<NaiveDate>,
    pub entry_date: Option<NaiveDate>,
}

impl Boar {
    pub fn new(id: BoarId, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
            status: AnimalStatus::Active,
            birth_date: None,
            entry_date: None,
        }
    }
}
