//! Domain services - pure breeding logic
//!
//! No service here performs I/O. The consistency checks read sibling records
//! through the store port handed in by the application layer; everything
//! else is plain computation over records and dates.

pub mod consistency;
pub mod gestation;
pub mod lifecycle;
pub mod validate;

pub use consistency::{litter_has_room, service_lineage_free, HerdInstruction};
pub use lifecycle::{can_mutate, deletion_warning, Lifecycle};
pub use validate::{validate_record, ValidationContext};
