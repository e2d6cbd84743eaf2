// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! A directed attack between two arguments.

use serde::{Deserialize, Serialize};

/// A directed edge of the argumentation graph: the source argument undermines
/// the target argument.
///
/// `source` and `target` are back-references to [`Argument`] ids, not owned
/// data. An attack never outlives its graph; dropping attacks whose endpoint
/// was removed is the editor's responsibility, the codecs serialize whatever
/// they are given.
///
/// [`Argument`]: crate::Argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    /// Unique identifier of the edge itself.
    pub id: String,
    /// Id of the attacking argument.
    pub source: String,
    /// Id of the attacked argument.
    pub target: String,
}

impl Attack {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Attack {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}
