//! Record dispatch types for the mutation gateway
//!
//! One closed set of record kinds; the gateway runs the same orchestration
//! for each, parameterized by kind through these enums.

use serde::{Deserialize, Serialize};

use super::{
    Abortion, AbortionDraft, Birth, BirthDraft, Heat, HeatDraft, Piglet, PigletDraft, Pregnancy,
    PregnancyDraft, Service, ServiceDraft,
};

/// The kinds of breeding event records the engine manages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Heat,
    Service,
    Pregnancy,
    Birth,
    Abortion,
    Piglet,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Heat => "heat",
            RecordKind::Service => "service",
            RecordKind::Pregnancy => "pregnancy",
            RecordKind::Birth => "birth",
            RecordKind::Abortion => "abortion",
            RecordKind::Piglet => "piglet",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored breeding record of any kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Record {
    Heat(Heat),
    Service(Service),
    Pregnancy(Pregnancy),
    Birth(Birth),
    Abortion(Abortion),
    Piglet(Piglet),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Heat(_) => RecordKind::Heat,
            Record::Service(_) => RecordKind::Service,
            Record::Pregnancy(_) => RecordKind::Pregnancy,
            Record::Birth(_) => RecordKind::Birth,
            Record::Abortion(_) => RecordKind::Abortion,
            Record::Piglet(_) => RecordKind::Piglet,
        }
    }

    /// Raw identifier, kind-agnostic
    pub fn id(&self) -> u64 {
        match self {
            Record::Heat(heat) => heat.id.0,
            Record::Service(service) => service.id.0,
            Record::Pregnancy(pregnancy) => pregnancy.id.0,
            Record::Birth(birth) => birth.id.0,
            Record::Abortion(abortion) => abortion.id.0,
            Record::Piglet(piglet) => piglet.id.0,
        }
    }
}

/// An incoming payload of any kind, tagged the same way stored records are
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RecordDraft {
    Heat(HeatDraft),
    Service(ServiceDraft),
    Pregnancy(PregnancyDraft),
    Birth(BirthDraft),
    Abortion(AbortionDraft),
    Piglet(PigletDraft),
}

impl RecordDraft {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordDraft::Heat(_) => RecordKind::Heat,
            RecordDraft::Service(_) => RecordKind::Service,
            RecordDraft::Pregnancy(_) => RecordKind::Pregnancy,
            RecordDraft::Birth(_) => RecordKind::Birth,
            RecordDraft::Abortion(_) => RecordKind::Abortion,
            RecordDraft::Piglet(_) => RecordKind::Piglet,
        }
    }

    /// Target record id, present on update payloads
    pub fn id(&self) -> Option<u64> {
        match self {
            RecordDraft::Heat(draft) => draft.id.map(|id| id.0),
            RecordDraft::Service(draft) => draft.id.map(|id| id.0),
            RecordDraft::Pregnancy(draft) => draft.id.map(|id| id.0),
            RecordDraft::Birth(draft) => draft.id.map(|id| id.0),
            RecordDraft::Abortion(draft) => draft.id.map(|id| id.0),
            RecordDraft::Piglet(draft) => draft.id.map(|id| id.0),
        }
    }
}
