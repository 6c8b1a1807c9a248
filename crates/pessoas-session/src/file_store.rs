use crate::{KeyValueStore, SessionError, SessionResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Store backed by a single JSON object file.
///
/// Every read goes to disk so separate processes see each other's logins.
/// Writes replace the whole file atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("session.json"))
    }

    fn read_entries(&self) -> SessionResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| SessionError::read(self.path.clone(), e))?;

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| SessionError::corrupted(self.path.clone(), e.to_string()))
    }

    /// Current entries for a read-modify-write. A corrupted file is moved
    /// aside and replaced by an empty map.
    fn entries_for_update(&self) -> SessionResult<BTreeMap<String, String>> {
        match self.read_entries() {
            Err(SessionError::Corrupted { message, .. }) => {
                warn!("Session file corrupted at {:?}: {message}", self.path);
                self.backup_corrupted()?;
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    /// Writes the map using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> SessionResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| SessionError::write(parent.to_path_buf(), e))?;
        }

        let temp_path = self
            .path
            .with_file_name(format!("{}.tmp.{}", self.file_name(), std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::replace(temp_path, self.path.clone(), e)
        })?;

        debug!("Wrote {} session entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    /// Renames the file to `<name>.corrupted.{timestamp}` for inspection.
    fn backup_corrupted(&self) -> SessionResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .path
            .with_file_name(format!("{}.corrupted.{timestamp}", self.file_name()));

        fs::rename(&self.path, &backup_path)
            .map_err(|e| SessionError::replace(self.path.clone(), backup_path.clone(), e))?;

        warn!("Backed up corrupted session file to {backup_path:?}");
        Ok(backup_path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set_all(&self, new_entries: &[(&str, &str)]) -> SessionResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut entries = self.entries_for_update()?;
        for (key, value) in new_entries {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        self.write_entries(&entries)
    }

    fn remove_all(&self, keys: &[&str]) -> SessionResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut entries = self.entries_for_update()?;
        let before = entries.len();
        for key in keys {
            entries.remove(*key);
        }

        if entries.len() == before {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
