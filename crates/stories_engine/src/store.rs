//! String key-value stores used to remember the search term across sessions.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stories_logging::stories_debug;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store path {0:?} has no file name")]
    InvalidPath(PathBuf),
    #[error("store directory {0:?} is not a directory")]
    NotADirectory(PathBuf),
    #[error("store io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse store: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] ron::Error),
}

/// Get/set a string by key. Absent keys read as `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A RON map on disk, rewritten on every `set` through a temp file that is
/// renamed over the store, so readers see either the old or the new map.
#[derive(Debug, Clone)]
pub struct RonFileStore {
    dir: PathBuf,
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl RonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if path.file_name().is_none() {
            return Err(StoreError::InvalidPath(path));
        }
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let entries = match fs::read_to_string(&path) {
            Ok(text) => ron::from_str(&text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                stories_debug!("No store at {:?}, starting empty", path);
                BTreeMap::new()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            dir,
            path,
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(&self, content: &str) -> Result<(), StoreError> {
        if self.dir.exists() {
            if !fs::metadata(&self.dir)?.is_dir() {
                return Err(StoreError::NotADirectory(self.dir.clone()));
            }
        } else {
            fs::create_dir_all(&self.dir)?;
        }

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        // Replaces the previous store in one rename.
        tmp.persist(&self.path).map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }
}

impl KeyValueStore for RonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());

        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&entries, pretty)?;
        self.write_atomically(&content)?;
        // Only adopt the new value once it is on disk.
        self.entries = entries;
        Ok(())
    }
}
