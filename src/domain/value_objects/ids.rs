//! Typed identifiers for herd records
//!
//! Plain `u64` newtypes so a service reference can never be handed a heat id
//! by accident. Serialized transparently as the raw number.

use serde::{Deserialize, Serialize};

macro_rules! herd_id {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {$(
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    )+};
}

herd_id! {
    /// Identifier of a sow in the herd registry
    SowId,
    /// Identifier of a boar in the herd registry
    BoarId,
    /// Identifier of a detected estrus event
    HeatId,
    /// Identifier of a mating/insemination event
    ServiceId,
    /// Identifier of a gestation lineage
    PregnancyId,
    /// Identifier of a farrowing event
    BirthId,
    /// Identifier of an aborted gestation
    AbortionId,
    /// Identifier of an individual offspring
    PigletId,
}
