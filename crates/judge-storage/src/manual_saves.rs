// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
The manual-saves map.

Every user-named save is a full `{nodes, edges}` snapshot. The map is small
(a handful of named graphs) and is read and rewritten whole on each
operation, as one JSON blob under [`MANUAL_SAVES_KEY`]; a missing blob reads
as the empty map.
*/

use std::collections::BTreeMap;

use judge_structures::ArgumentationGraph;
use tracing::debug;

use crate::{StorageBackend, StorageError, StorageResult};

/// Fixed backend key the whole saves map lives under.
pub const MANUAL_SAVES_KEY: &str = "manual_saves";

/// Named graph snapshots over an injected backend.
#[derive(Debug)]
pub struct SaveStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SaveStore<B> {
    pub fn new(backend: B) -> Self {
        SaveStore { backend }
    }

    /// Returns every manual save, keyed by user-chosen name. Names are
    /// ordered so UI listings stay stable across reloads.
    pub fn all_saves(&self) -> StorageResult<BTreeMap<String, ArgumentationGraph>> {
        match self.backend.read(MANUAL_SAVES_KEY)? {
            Some(blob) => serde_json::from_str(&blob)
                .map_err(|e| StorageError::Corrupt(format!("Invalid saves map: {}", e))),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Creates or overwrites the save under `name` with a snapshot of
    /// `graph`.
    pub fn add_save(&self, name: &str, graph: &ArgumentationGraph) -> StorageResult<()> {
        let mut saves = self.all_saves()?;
        saves.insert(name.to_string(), graph.clone());
        debug!(save = %name, total = saves.len(), "stored manual save");
        self.write_saves(&saves)
    }

    /// Deletes the save under `name`; deleting a missing name is a no-op.
    pub fn delete_save(&self, name: &str) -> StorageResult<()> {
        let mut saves = self.all_saves()?;
        if saves.remove(name).is_some() {
            debug!(save = %name, "deleted manual save");
        }
        self.write_saves(&saves)
    }

    fn write_saves(&self, saves: &BTreeMap<String, ArgumentationGraph>) -> StorageResult<()> {
        let blob = serde_json::to_string(saves)
            .map_err(|e| StorageError::Corrupt(format!("Failed to serialize saves map: {}", e)))?;
        self.backend.write(MANUAL_SAVES_KEY, &blob)
    }
}
