//! Status command handler

use std::path::Path;

use anyhow::Result;

use farrow::{herd_file, BreedingGateway, RecordKind};

use super::{print_engine_error, print_outcome};

pub fn cmd_status(
    herd: &Path,
    json: bool,
    kind: RecordKind,
    id: u64,
    new_status: &str,
    note: Option<String>,
) -> Result<()> {
    let store = herd_file::load(herd)?;
    let mut gateway = BreedingGateway::new(store);

    match gateway.change_status(kind, id, new_status, note) {
        Ok(outcome) => {
            herd_file::save(herd, gateway.store())?;
            print_outcome(&outcome, json);
            Ok(())
        }
        Err(error) => {
            print_engine_error(&error, json);
            anyhow::bail!("status change rejected");
        }
    }
}
