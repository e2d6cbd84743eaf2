// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Injectable key-value backends.

The save service only needs "read a string blob by key" and "write a string
blob by key"; everything else (what the blob contains, when it is rewritten)
is the service's business. [`MemoryStorage`] keeps tests free of any real
persistence; [`FileStorage`] maps each key to a JSON file under a root
directory.
*/

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::StorageResult;

/// A key-value backend storing string blobs.
pub trait StorageBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory backend; state lives and dies with the instance.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        // A poisoned lock only means some other holder panicked mid-access;
        // the map itself is always in a consistent state.
        let blobs = self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut blobs = self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Filesystem backend: each key is a `<key>.json` file under the root
/// directory. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStorage { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_read_missing() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("nothing").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_write_then_read() {
        let storage = MemoryStorage::new();
        storage.write("slot", "blob").unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("blob"));
        storage.write("slot", "newer").unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("newer"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.read("slot").unwrap(), None);
        storage.write("slot", "{\"a\":1}").unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_file_storage_creates_root_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("saves").join("deep");
        let storage = FileStorage::new(&nested);
        storage.write("slot", "blob").unwrap();
        assert!(nested.join("slot.json").exists());
    }
}
