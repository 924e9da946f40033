use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{StorageError, StorageResult};

/// Key under which favorites are stored
pub const STORAGE_KEY: &str = "dog-viewer-favorites";

/// A single durable key-value slot holding the serialized favorites
pub trait FavoritesStorage: Send {
    /// Stored contents, or `None` if nothing was ever written
    fn read(&self) -> StorageResult<Option<String>>;

    /// Replace the stored contents
    fn write(&self, contents: &str) -> StorageResult<()>;
}

/// Favorites kept as a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default location:
    /// `~/.local/share/dog_viewer/dog-viewer-favorites.json` on Linux
    pub fn at_default_location() -> Self {
        Self::new(default_favorites_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Default favorites file inside the user's data directory
pub fn default_favorites_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dog_viewer")
        .join(format!("{}.json", STORAGE_KEY))
}

impl FavoritesStorage for JsonFileStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&self, contents: &str) -> StorageResult<()> {
        let to_write_error = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(to_write_error)?;
        }

        std::fs::write(&self.path, contents).map_err(to_write_error)
    }
}

/// In-memory slot for sessions without durable storage
///
/// Clones share the same slot, so a test can keep a handle to inspect
/// what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `contents`
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// Current contents of the slot
    pub fn contents(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl FavoritesStorage for MemoryStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    fn write(&self, contents: &str) -> StorageResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *slot = Some(contents.to_string());
        Ok(())
    }
}
