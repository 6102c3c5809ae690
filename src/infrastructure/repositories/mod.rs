//! Store implementations
//!
//! `MemoryStore` backs tests and the CLI working set; `herd_file` persists
//! it as a single JSON document. A production deployment implements the
//! `BreedingStore` port over a transactional relational store instead.

pub mod herd_file;
mod memory;

pub use memory::MemoryStore;
