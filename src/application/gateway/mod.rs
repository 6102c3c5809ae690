//! Mutation gateway
//!
//! The single entry point for every write against breeding records. One
//! orchestration, parameterized by record kind: load the target (when
//! editing) and run the lifecycle guard, resolve references, fill derived
//! defaults, validate the merged record, run the cross-record checks, and
//! only then persist. Everything before the persist step is read-only with
//! respect to storage; the caller wraps the whole call in one transaction.

mod result;
mod use_case;

pub use result::{Deletion, SubmitMode, SubmitOutcome};
pub use use_case::BreedingGateway;
