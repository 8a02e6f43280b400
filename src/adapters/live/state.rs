//! Board state kept in a JSON file.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::ports::ReplicatedState;

/// Stores every board key in one JSON object on disk.
///
/// Each `set` rewrites the whole file, so the last writer wins per value
/// just like the canvas host's replicated storage.
pub struct FileState {
    path: PathBuf,
}

impl FileState {
    /// Creates state backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn load(&self) -> Result<Map<String, Value>, Box<dyn Error + Send + Sync>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&text)? {
            Value::Object(map) => Ok(map),
            _ => {
                let message = format!("{} does not hold a JSON object", self.path.display());
                Err(message.into())
            }
        }
    }
}

impl ReplicatedState for FileState {
    fn get(&self, key: &str) -> Result<Option<Value>, Box<dyn Error + Send + Sync>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut document = self.load()?;
        document.insert(key.to_string(), value);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(document))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
