//! Delete command handler

use std::path::Path;

use anyhow::Result;

use farrow::domain::services::deletion_warning;
use farrow::{herd_file, BreedingGateway, RecordKind};

use super::print_engine_error;

pub fn cmd_delete(herd: &Path, json: bool, kind: RecordKind, id: u64, force: bool) -> Result<()> {
    // Audit-significant kinds need explicit confirmation before the engine
    // is even asked.
    if let Some(warning) = deletion_warning(kind) {
        if !force {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "event": "error",
                        "kind": "confirmation-required",
                        "message": warning,
                    })
                );
            } else {
                eprintln!("{warning}");
                eprintln!("re-run with --force to delete anyway");
            }
            anyhow::bail!("deletion needs --force");
        }
    }

    let store = herd_file::load(herd)?;
    let mut gateway = BreedingGateway::new(store);
    match gateway.delete(kind, id) {
        Ok(deletion) => {
            herd_file::save(herd, gateway.store())?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "event": "deleted",
                        "kind": deletion.kind,
                        "id": deletion.id,
                        "warning": deletion.warning,
                    })
                );
            } else {
                println!("deleted {} {}", deletion.kind, deletion.id);
                if let Some(warning) = &deletion.warning {
                    println!("  note: {warning}");
                }
            }
            Ok(())
        }
        Err(error) => {
            print_engine_error(&error, json);
            anyhow::bail!("deletion rejected");
        }
    }
}
