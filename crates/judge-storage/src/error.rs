// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Storage error types.

use thiserror::Error;

/// Errors raised by the save storage service.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backend failed to read or write a blob.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored blob exists but does not parse back into a saves map.
    #[error("Corrupt saves blob: {0}")]
    Corrupt(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
