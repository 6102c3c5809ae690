//! Farrow - reproductive lifecycle engine for swine breeding operations
//!
//! Farrow tracks the reproductive chain of a breeding herd: Sow/Boar →
//! Heat → Service → Pregnancy → Birth or Abortion → Piglet. The core is a
//! mutation gateway that validates every write against the chain's
//! invariants (litter arithmetic, gestation windows, terminal-status locks,
//! capacity ceilings) before handing it to a pluggable store.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::gateway::{BreedingGateway, Deletion, SubmitMode, SubmitOutcome};
pub use domain::entities::{Record, RecordDraft, RecordKind};
pub use domain::services::{HerdInstruction, ValidationContext};
pub use error::{EngineError, EngineResult, FieldError, StorageError, ValidationErrors};
pub use infrastructure::repositories::{herd_file, MemoryStore};
