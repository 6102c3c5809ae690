//! Common test utilities for CLI scenario tests.
//!
//! `TestEnv` gives each test an isolated temp directory with a seeded herd
//! file (sow 1, boar 2) and drives the compiled binary against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use farrow::domain::entities::{Boar, Sow};
use farrow::domain::value_objects::{BoarId, SowId};
use farrow::{herd_file, MemoryStore};

pub struct TestEnv {
    _dir: tempfile::TempDir,
    pub herd: PathBuf,
    root: PathBuf,
}

impl TestEnv {
    /// Fresh environment with a herd holding one active sow and boar.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().to_path_buf();
        let herd = root.join("herd.json");

        let mut store = MemoryStore::new();
        let sow_id = SowId(store.allocate_id());
        store.add_sow(Sow::new(sow_id, "S-101"));
        let boar_id = BoarId(store.allocate_id());
        store.add_boar(Boar::new(boar_id, "B-7"));
        herd_file::save(&herd, &store).expect("seed herd file");

        Self {
            _dir: dir,
            herd,
            root,
        }
    }

    /// Run the binary with the given args inside the environment.
    pub fn run(&self, args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_farrow");
        Command::new(bin)
            .current_dir(&self.root)
            .args(args)
            .output()
            .expect("run farrow binary")
    }

    /// Write a JSON payload file and return its path.
    pub fn write_payload(&self, name: &str, payload: &serde_json::Value) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, payload.to_string()).expect("write payload");
        path
    }

    /// Reload the herd file through the library.
    pub fn load_store(&self) -> MemoryStore {
        herd_file::load(&self.herd).expect("load herd file")
    }

    /// Submit a payload with `--json` and return the stored record's id.
    pub fn submit_json(&self, name: &str, payload: &serde_json::Value) -> u64 {
        let path = self.write_payload(name, payload);
        let output = self.run(&["--json", "submit", path_str(&path)]);
        assert!(
            output.status.success(),
            "submit of {name} failed:\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        let event = first_event(&output);
        event["record"]["id"]
            .as_u64()
            .expect("stored record carries an id")
    }
}

/// Parse the first stdout line as a JSON event.
pub fn first_event(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next().unwrap_or_default();
    serde_json::from_str(line).unwrap_or_else(|_| panic!("stdout is not a JSON event: {stdout}"))
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}
