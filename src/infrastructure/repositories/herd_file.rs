//! Herd file persistence
//!
//! The CLI keeps its working herd in a single JSON document. Saves go
//! through a temporary file in the same directory followed by a rename, so
//! a crash mid-write never truncates the herd.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::MemoryStore;

/// Load a herd file, or an empty store when the file does not exist yet.
pub fn load(path: &Path) -> Result<MemoryStore> {
    if !path.exists() {
        return Ok(MemoryStore::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read herd file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("herd file {} is not valid", path.display()))
}

/// Atomically save a herd file.
pub fn save(path: &Path, store: &MemoryStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store).context("failed to serialize herd")?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .context("failed to write herd file")?;
    tmp.persist(path)
        .with_context(|| format!("failed to replace herd file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Sow;
    use crate::domain::value_objects::SowId;

    #[test]
    fn missing_file_loads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = load(&dir.path().join("herd.json")).unwrap();
        assert_eq!(store.sows().count(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herd.json");
        let mut store = MemoryStore::new();
        store.add_sow(Sow::new(SowId(1), "S-101"));
        save(&path, &store).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.sows().count(), 1);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herd.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load(&path).is_err());
    }
}
