//! Value objects - typed identifiers and status enums
//!
//! Statuses carry only their wire form and display here; the transition
//! tables that govern them live in `services::lifecycle`.

mod heat_status;
mod ids;
mod piglet_status;
mod pregnancy_status;

pub use heat_status::HeatStatus;
pub use ids::{AbortionId, BirthId, BoarId, HeatId, PigletId, PregnancyId, ServiceId, SowId};
pub use piglet_status::PigletStatus;
pub use pregnancy_status::PregnancyStatus;
