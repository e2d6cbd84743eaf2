//! # Judge - Argumentation Graph Editor Core
//!
//! Judge is the engine behind a visual editor for argumentation graphs:
//! directed graphs whose nodes are moral-reasoning arguments and whose edges
//! are attacks between them. This umbrella crate re-exports the three
//! components:
//!
//! - [`structures`] - the in-memory graph model and its identity rules
//! - [`serialization`] - codecs between the model and the interchange
//!   formats (JSON text, generated Python code, PNG pictures with an
//!   embedded snapshot)
//! - [`storage`] - the manual-saves service over an injectable key-value
//!   backend
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! judge = "0.0.1-beta.3"
//! ```
//!
//! ```rust
//! use judge::prelude::*;
//!
//! // Build a graph the way the editor does.
//! let mut graph = ArgumentationGraph::new();
//! graph.create_argument(
//!     "welfare",
//!     Some("Basic needs matter".to_string()),
//!     Some("s.comfort > 0.5".to_string()),
//!     Some(Decision::Support),
//! );
//!
//! // Round-trip it through the JSON codec.
//! let text = export_json(&graph, false)?;
//! let restored = import_json(&text)?;
//! assert_eq!(restored, graph);
//! # Ok::<(), judge::serialization::SerializationError>(())
//! ```
//!
//! ## Import dispatch
//!
//! A dropped file's declared MIME type selects exactly one import codec via
//! [`serialization::MediaType`]; unrecognized types resolve to `None` so the
//! editor can ignore stray drops without surfacing an error. Importers
//! return a complete fresh `ArgumentationGraph` or fail - they never touch
//! live editor state, so a failed import leaves the current graph intact.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use judge_serialization as serialization;
pub use judge_storage as storage;
pub use judge_structures as structures;

/// Commonly used items, re-exported flat.
pub mod prelude {
    pub use judge_serialization::{
        export_json, export_png, export_python, import_graph, import_graph_for_mime, import_json,
        import_png, import_python, MediaType, RenderSurface, SerializationError,
    };
    pub use judge_storage::{FileStorage, MemoryStorage, SaveStore, StorageBackend};
    pub use judge_structures::{Argument, ArgumentationGraph, Attack, Decision, Position};
}
