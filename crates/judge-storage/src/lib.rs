// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Judge Storage

The "manual saves" service of the judge editor: named snapshots of the
argumentation graph a user keeps around to continue working on later.

The whole name-to-graph map is (de)serialized as one JSON blob under a
single fixed key of an injected [`StorageBackend`] - in-memory for tests,
a directory of files for a desktop deployment, whatever the embedder wires
up. Nothing here is a process-wide singleton.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod backend;
mod error;
mod manual_saves;

pub use backend::{FileStorage, MemoryStorage, StorageBackend};
pub use error::{StorageError, StorageResult};
pub use manual_saves::{SaveStore, MANUAL_SAVES_KEY};
