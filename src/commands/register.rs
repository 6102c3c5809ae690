//! Register command handler

use std::path::Path;

use anyhow::Result;

use farrow::domain::entities::{Boar, Sow};
use farrow::domain::services::validate::validate_animal_dates;
use farrow::domain::value_objects::{BoarId, SowId};
use farrow::{herd_file, EngineError, ValidationContext};

use crate::cli::RegisterAnimal;

use super::print_engine_error;

pub fn cmd_register(herd: &Path, json: bool, animal: RegisterAnimal) -> Result<()> {
    let mut store = herd_file::load(herd)?;
    let ctx = ValidationContext::from_clock();

    let (birth_date, entry_date) = match &animal {
        RegisterAnimal::Sow {
            birth_date,
            entry_date,
            ..
        }
        | RegisterAnimal::Boar {
            birth_date,
            entry_date,
            ..
        } => (*birth_date, *entry_date),
    };
    if let Err(error) = validate_animal_dates(birth_date, entry_date, &ctx).into_result() {
        print_engine_error(&error, json);
        anyhow::bail!("registration rejected");
    }
    // Referential guard the other way round: duplicate tags confuse every
    // downstream listing.
    let duplicate = match &animal {
        RegisterAnimal::Sow { tag, .. } => store.sows().any(|sow| &sow.tag == tag),
        RegisterAnimal::Boar { tag, .. } => store.boars().any(|boar| &boar.tag == tag),
    };
    if duplicate {
        let error = EngineError::invalid("tag", "is already registered");
        print_engine_error(&error, json);
        anyhow::bail!("registration rejected");
    }

    let (label, id, tag) = match animal {
        RegisterAnimal::Sow {
            tag,
            birth_date,
            entry_date,
        } => {
            let id = SowId(store.allocate_id());
            let mut sow = Sow::new(id, tag.clone());
            sow.birth_date = birth_date;
            sow.entry_date = entry_date;
            store.add_sow(sow);
            ("sow", id.0, tag)
        }
        RegisterAnimal::Boar {
            tag,
            birth_date,
            entry_date,
        } => {
            let id = BoarId(store.allocate_id());
            let mut boar = Boar::new(id, tag.clone());
            boar.birth_date = birth_date;
            boar.entry_date = entry_date;
            store.add_boar(boar);
            ("boar", id.0, tag)
        }
    };

    herd_file::save(herd, &store)?;
    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "registered",
                "animal": label,
                "id": id,
                "tag": tag,
            })
        );
    } else {
        println!("registered {label} {id} (tag {tag})");
    }
    Ok(())
}
