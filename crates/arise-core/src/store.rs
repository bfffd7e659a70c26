//! Key-value blob storage for saved state.
//!
//! The engine writes three keys after every mutation and reads them once
//! on startup. Blobs are JSON text; a store never interprets them.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AriseResult;

/// Key holding the serialized [`Stats`](crate::Stats).
pub const STATS_KEY: &str = "stats";
/// Key holding the serialized [`PlayerState`](crate::PlayerState).
pub const PLAYER_KEY: &str = "player";
/// Key holding the serialized [`QuestBoard`](crate::QuestBoard).
pub const QUESTS_KEY: &str = "quests";

/// Durable string storage addressed by key.
pub trait Store {
    /// Read the blob under `key`, or `None` if nothing was saved.
    fn read(&self, key: &str) -> AriseResult<Option<String>>;

    /// Replace the blob under `key`.
    fn write(&mut self, key: &str, blob: &str) -> AriseResult<()>;
}

/// In-process store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob, e.g. to simulate state saved by an earlier session.
    pub fn with_blob(mut self, key: &str, blob: impl Into<String>) -> Self {
        self.blobs.insert(key.to_string(), blob.into());
        self
    }

    /// Borrow the blob under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> AriseResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> AriseResult<()> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` as the data directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open the store in the per-user data directory.
    pub fn open_default() -> Self {
        Self::new(Self::default_dir())
    }

    /// The per-user data directory, e.g. `~/.local/share/arise`.
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join("arise")
    }

    /// Data directory in use.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe = key.replace(['/', '\\', ':'], "_");
        self.dir.join(format!("{safe}.json"))
    }
}

impl Store for FileStore {
    fn read(&self, key: &str) -> AriseResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, blob: &str) -> AriseResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), blob)?;
        Ok(())
    }
}
