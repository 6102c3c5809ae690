//! Submit command handler

use std::path::Path;

use anyhow::{Context, Result};

use farrow::{herd_file, BreedingGateway, RecordDraft, SubmitMode};

use super::{print_engine_error, print_outcome};

pub fn cmd_submit(herd: &Path, json: bool, file: &Path, update: bool) -> Result<()> {
    let payload = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read payload {}", file.display()))?;
    let draft: RecordDraft =
        serde_json::from_str(&payload).context("payload is not a valid record draft")?;

    let store = herd_file::load(herd)?;
    let mut gateway = BreedingGateway::new(store);
    let mode = if update {
        SubmitMode::Update
    } else {
        SubmitMode::Create
    };

    match gateway.submit(draft, mode) {
        Ok(outcome) => {
            // The herd registry applies the emitted instructions; with the
            // file store that registry is us.
            for instruction in &outcome.instructions {
                gateway.store_mut().apply_instruction(instruction);
            }
            herd_file::save(herd, gateway.store())?;
            print_outcome(&outcome, json);
            Ok(())
        }
        Err(error) => {
            print_engine_error(&error, json);
            anyhow::bail!("submit rejected");
        }
    }
}
