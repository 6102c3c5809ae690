//! CLI command handlers
//!
//! Each handler loads the herd file, runs one gateway operation, prints the
//! outcome (plain or as JSON events) and saves the herd back. Engine errors
//! are printed structured and turn into a non-zero exit; the engine itself
//! never prints.

mod delete;
mod list;
mod register;
mod status;
mod submit;

pub use delete::cmd_delete;
pub use list::{cmd_list, cmd_show};
pub use register::cmd_register;
pub use status::cmd_status;
pub use submit::cmd_submit;

use farrow::{EngineError, SubmitOutcome};

/// Print an engine error for humans or machines.
pub(crate) fn print_engine_error(error: &EngineError, json: bool) {
    if json {
        let payload = match error {
            EngineError::Validation(errors) => serde_json::json!({
                "event": "error",
                "kind": error.kind_tag(),
                "errors": errors,
            }),
            EngineError::Capacity { message, count, limit } => serde_json::json!({
                "event": "error",
                "kind": error.kind_tag(),
                "message": message,
                "count": count,
                "limit": limit,
            }),
            other => serde_json::json!({
                "event": "error",
                "kind": other.kind_tag(),
                "message": other.to_string(),
            }),
        };
        println!("{payload}");
        return;
    }
    match error {
        EngineError::Validation(errors) => {
            eprintln!("validation failed:");
            for field_error in errors.iter() {
                eprintln!("  - {field_error}");
            }
        }
        other => eprintln!("{other}"),
    }
}

/// Print a successful submit/status outcome.
pub(crate) fn print_outcome(outcome: &SubmitOutcome, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "stored",
                "record": outcome.record,
                "cascades": outcome.cascades,
                "instructions": outcome.instructions,
            })
        );
        return;
    }
    println!("stored {} {}", outcome.record.kind(), outcome.record.id());
    for cascade in &outcome.cascades {
        println!("  updated {} {}", cascade.kind(), cascade.id());
    }
    for instruction in &outcome.instructions {
        match instruction {
            farrow::HerdInstruction::IncrementParity { sow } => {
                println!("  parity +1 for sow {sow}");
            }
        }
    }
}
