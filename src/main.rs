//! Farrow CLI - record entry over the reproductive lifecycle engine
//!
//! Usage: farrow <COMMAND>
//!
//! Commands:
//!   register  Add sows and boars to the herd registry
//!   submit    Create or update a breeding record from a JSON payload
//!   status    Change the status of a heat, pregnancy or piglet
//!   list      List records, including the eligible-service query
//!   show      Show a single record
//!   delete    Delete a record (audit-significant kinds need --force)

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Register { animal } => commands::cmd_register(&cli.herd, cli.json, animal),
        Commands::Submit { file, update } => {
            commands::cmd_submit(&cli.herd, cli.json, &file, update)
        }
        Commands::Status {
            kind,
            id,
            new_status,
            note,
        } => commands::cmd_status(&cli.herd, cli.json, kind, id, &new_status, note),
        Commands::List { kind, eligible_for } => {
            commands::cmd_list(&cli.herd, cli.json, kind, eligible_for)
        }
        Commands::Show { kind, id } => commands::cmd_show(&cli.herd, cli.json, kind, id),
        Commands::Delete { kind, id, force } => {
            commands::cmd_delete(&cli.herd, cli.json, kind, id, force)
        }
    }
}
