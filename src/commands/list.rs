//! List and show command handlers

use std::path::Path;

use anyhow::Result;

use farrow::domain::value_objects::SowId;
use farrow::{herd_file, BreedingGateway, Record, RecordKind};

use super::print_engine_error;

pub fn cmd_list(herd: &Path, json: bool, kind: RecordKind, eligible_for: Option<u64>) -> Result<()> {
    let store = herd_file::load(herd)?;

    if let Some(sow) = eligible_for {
        if kind != RecordKind::Service {
            anyhow::bail!("--eligible-for only applies to services");
        }
        let gateway = BreedingGateway::new(store);
        let services = match gateway.eligible_services(SowId(sow)) {
            Ok(services) => services,
            Err(error) => {
                print_engine_error(&error, json);
                anyhow::bail!("listing failed");
            }
        };
        let records: Vec<Record> = services.into_iter().map(Record::Service).collect();
        print_records(&records, json);
        return Ok(());
    }

    print_records(&store.records(kind), json);
    Ok(())
}

pub fn cmd_show(herd: &Path, json: bool, kind: RecordKind, id: u64) -> Result<()> {
    let store = herd_file::load(herd)?;
    let Some(record) = store.get_record(kind, id) else {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "error",
                    "kind": "referential",
                    "message": format!("{kind} {id} does not exist"),
                })
            );
        } else {
            eprintln!("{kind} {id} does not exist");
        }
        anyhow::bail!("not found");
    };
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn print_records(records: &[Record], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "records",
                "count": records.len(),
                "records": records,
            })
        );
        return;
    }
    if records.is_empty() {
        println!("no records");
        return;
    }
    for record in records {
        println!("{}", summary(record));
    }
}

/// One-line listing form per record kind.
fn summary(record: &Record) -> String {
    match record {
        Record::Heat(heat) => format!(
            "heat {}  sow {}  {}  {}",
            heat.id, heat.sow, heat.heat_date, heat.status
        ),
        Record::Service(service) => format!(
            "service {}  sow {}  boar {}  {}{}",
            service.id,
            service.sow,
            service.boar,
            service.service_date,
            if service.has_confirmed_pregnancy {
                "  (confirmed pregnancy)"
            } else {
                ""
            }
        ),
        Record::Pregnancy(pregnancy) => format!(
            "pregnancy {}  sow {}  conceived {}  due {}  {}",
            pregnancy.id,
            pregnancy.sow,
            pregnancy.conception_date,
            pregnancy.expected_farrowing_date,
            pregnancy.status
        ),
        Record::Birth(birth) => format!(
            "birth {}  sow {}  {}  litter {} ({} alive)",
            birth.id, birth.sow, birth.birth_date, birth.total_born, birth.born_alive
        ),
        Record::Abortion(abortion) => format!(
            "abortion {}  sow {}  {}  day {}",
            abortion.id, abortion.sow, abortion.abortion_date, abortion.gestation_days
        ),
        Record::Piglet(piglet) => format!(
            "piglet {}  birth {}  order {}  {}",
            piglet.id, piglet.birth, piglet.birth_order, piglet.status
        ),
    }
}
