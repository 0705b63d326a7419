//! Key-value record stores for persisted game data.
//!
//! The game persists a single named record (the highscore table). Backends
//! implement [`RecordStore`]; a missing record reads as `None`, never as an
//! error.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// One named record per key, stored as a string payload.
pub trait RecordStore {
    /// Read the record for `key`, or `None` if it does not exist.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write (create or replace) the record for `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: each key maps to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under `$HOME/.slowtris`, falling back to the current directory
    /// when no home directory is available.
    pub fn in_home_dir() -> Self {
        let base = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(".slowtris"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl RecordStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading record {key:?}")),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating store dir {:?}", self.dir))?;
        fs::write(self.path_for(key), value)
            .with_context(|| format!("writing record {key:?}"))
    }
}

/// In-memory store for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("scores").unwrap(), None);

        store.write("scores", "[1,2,3]").unwrap();
        assert_eq!(store.read("scores").unwrap().as_deref(), Some("[1,2,3]"));

        store.write("scores", "[]").unwrap();
        assert_eq!(store.read("scores").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!(
            "slowtris-store-test-{}",
            std::process::id()
        ));
        let mut store = FileStore::new(&dir);

        assert_eq!(store.read("scores").unwrap(), None);
        store.write("scores", "{\"a\":1}").unwrap();
        assert_eq!(
            store.read("scores").unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        let _ = std::fs::remove_dir_all(&dir);
    }
}
