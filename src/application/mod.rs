//! Application layer - use cases orchestrating domain services through ports

pub mod gateway;
