//! Infrastructure layer - store implementations behind the domain ports

pub mod repositories;
