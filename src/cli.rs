use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use farrow::RecordKind;

/// Farrow - breeding record entry for a swine herd
#[derive(Parser, Debug)]
#[command(name = "farrow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Herd file to operate on
    #[arg(long, global = true, default_value = "herd.json")]
    pub herd: PathBuf,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a sow or boar in the herd
    Register {
        #[command(subcommand)]
        animal: RegisterAnimal,
    },

    /// Create or update a breeding record from a JSON payload
    Submit {
        /// Path to a JSON payload carrying a "kind" tag
        file: PathBuf,

        /// Update the record named by the payload's "id" field
        #[arg(long)]
        update: bool,
    },

    /// Change the status of a heat, pregnancy or piglet
    Status {
        kind: RecordKind,
        id: u64,
        new_status: String,

        /// Note appended to the record
        #[arg(long)]
        note: Option<String>,
    },

    /// List records of one kind
    List {
        kind: RecordKind,

        /// Only services still eligible for a new pregnancy of this sow
        #[arg(long, value_name = "SOW_ID")]
        eligible_for: Option<u64>,
    },

    /// Show a single record
    Show { kind: RecordKind, id: u64 },

    /// Delete a record
    Delete {
        kind: RecordKind,
        id: u64,

        /// Confirm deletion of audit-significant records
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RegisterAnimal {
    /// Add a sow to the herd registry
    Sow {
        /// Ear tag or house identifier
        #[arg(long)]
        tag: String,

        #[arg(long)]
        birth_date: Option<NaiveDate>,

        #[arg(long)]
        entry_date: Option<NaiveDate>,
    },

    /// Add a boar to the herd registry
    Boar {
        /// Ear tag or house identifier
        #[arg(long)]
        tag: String,

        #[arg(long)]
        birth_date: Option<NaiveDate>,

        #[arg(long)]
        entry_date: Option<NaiveDate>,
    },
}
