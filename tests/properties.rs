//! Property test entry point.
//!
//! Each module holds one family of properties; wired explicitly so the
//! whole suite builds as one test binary.

#[path = "properties/dates.rs"]
mod dates;

#[path = "properties/gateway.rs"]
mod gateway;

#[path = "properties/lifecycle.rs"]
mod lifecycle;
