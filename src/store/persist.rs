//! Persistence: the blob store seam and best-effort state restoration.
//!
//! The store is persisted as one JSON document under one key, always as a
//! full overwrite. Restoring is lenient: each part of a damaged document
//! falls back to its default on its own, so valid fields survive.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::character::{CharacterMeta, LevelDraft, LevelSnapshot};
use crate::core::error::{BuilderError, Result};
use crate::core::Level;

use super::observer::{StoreEvent, StoreListener};
use super::state::{LevelHistory, StoreState};

/// Opaque key to string storage.
pub trait BlobStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// In-memory blob store. Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Rc<RefCell<FxHashMap<String, String>>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.blobs.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

/// Directory-backed blob store, one `<key>.json` file per key.
#[derive(Clone, Debug)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BuilderError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;
        std::fs::read_to_string(path).ok()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

/// Store listener that writes the whole state after every event.
#[derive(Debug)]
pub struct PersistOnChange<B> {
    blobs: B,
    key: String,
}

impl<B: BlobStore> PersistOnChange<B> {
    pub fn new(blobs: B, key: impl Into<String>) -> Self {
        Self {
            blobs,
            key: key.into(),
        }
    }
}

impl<B: BlobStore> StoreListener for PersistOnChange<B> {
    fn on_event(&mut self, event: &StoreEvent, state: &StoreState) {
        let written = state
            .to_json()
            .and_then(|blob| self.blobs.set(&self.key, blob));
        if let Err(e) = written {
            tracing::warn!(key = %self.key, ?event, error = %e, "failed to persist store");
        }
    }
}

/// Rebuild store state from a persisted blob.
///
/// An unparsable blob yields the default state. Otherwise `meta`, `build`
/// and `current` are each recovered independently.
pub(crate) fn restore_state(blob: &str) -> StoreState {
    let root: Value = match serde_json::from_str(blob) {
        Ok(root) => root,
        Err(e) => {
            tracing::debug!(error = %e, "persisted state unreadable, starting fresh");
            return StoreState::default();
        }
    };

    let meta = restore_meta(root.get("meta"));
    let history = restore_history(root.get("build"));
    let current = match root.get("current") {
        Some(value) if value.is_object() => LevelDraft::from_value(value, meta.level),
        _ => {
            tracing::debug!("persisted state has no current draft");
            match history.get(&meta.level) {
                Some(snapshot) => snapshot.thaw(),
                None => LevelDraft::template(meta.level),
            }
        }
    };

    StoreState {
        meta,
        history,
        current,
    }
}

fn restore_meta(value: Option<&Value>) -> CharacterMeta {
    let Some(obj) = value.and_then(Value::as_object) else {
        return CharacterMeta::default();
    };
    let level = match obj.get("level") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Level::new)
            .unwrap_or_default(),
        Some(Value::String(s)) => Level::parse_lenient(s),
        _ => Level::MIN,
    };
    CharacterMeta {
        name: obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        level,
    }
}

fn restore_history(value: Option<&Value>) -> LevelHistory {
    let mut history = LevelHistory::new();
    let Some(obj) = value.and_then(Value::as_object) else {
        return history;
    };
    for (key, snapshot) in obj {
        match key.trim().parse::<i64>() {
            Ok(n) if (1..=10).contains(&n) => {
                let level = Level::new(n);
                history.insert(level, LevelSnapshot::from_value(snapshot, level));
            }
            _ => tracing::debug!(key = %key, "dropping snapshot with invalid level key"),
        }
    }
    history
}
