use gogo_common::InteractionLog;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store lock poisoned")]
    Poisoned,
}

/// Append-only interaction log storage. There is no eviction.
pub trait InteractionStore: Send + Sync {
    fn append(&self, log: &InteractionLog) -> Result<(), StoreError>;

    /// All logs in insertion order.
    fn load(&self) -> Result<Vec<InteractionLog>, StoreError>;
}

#[derive(Default)]
pub struct MemoryStore {
    logs: Mutex<Vec<InteractionLog>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InteractionStore for MemoryStore {
    fn append(&self, log: &InteractionLog) -> Result<(), StoreError> {
        let mut logs = self.logs.lock().map_err(|_| StoreError::Poisoned)?;
        logs.push(log.clone());
        Ok(())
    }

    fn load(&self) -> Result<Vec<InteractionLog>, StoreError> {
        let logs = self.logs.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(logs.clone())
    }
}

/// One JSON object per line. Lines that fail to parse are skipped on load.
pub struct JsonlStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InteractionStore for JsonlStore {
    fn append(&self, log: &InteractionLog) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(log)?;
        line.push('\n');

        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<InteractionLog>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut logs = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<InteractionLog>(line) {
                Ok(log) => logs.push(log),
                Err(e) => warn!(
                    path = %self.path.display(),
                    line = idx + 1,
                    error = %e,
                    "skipping unreadable interaction log entry"
                ),
            }
        }
        Ok(logs)
    }
}
