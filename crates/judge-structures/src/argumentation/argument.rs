// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
A single argument of an argumentation graph.

Arguments carry a display name (the semantic key used by the code export),
an optional description, an optional activation expression, and a decision
flag. Absence of the decision flag IS the neutral stance, not missing data.
*/

use serde::{Deserialize, Serialize};

/// 2D layout coordinate of an argument.
///
/// Positions are layout-only: every codec carries them through verbatim and
/// none of them attaches any meaning to the values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// Declared decision flag of an argument.
///
/// An argument either supports or counters the moral value under judgment.
/// The neutral stance has no flag at all: it is represented as
/// `Option::<Decision>::None` on [`Argument`], and is a first-class valid
/// state (an argument with no declared decision is neutral, not malformed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Support,
    Counter,
}

/// A node of the argumentation graph, representing a moral-reasoning premise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// Process-unique identifier. Unique among all nodes of a graph at any
    /// instant; allocated by [`ArgumentationGraph::allocate_id`].
    ///
    /// [`ArgumentationGraph::allocate_id`]: crate::ArgumentationGraph::allocate_id
    pub id: String,

    /// Display and semantic identifier. The code export references arguments
    /// by name, so names must be unique across the graph; the editor enforces
    /// this, the codecs assume it.
    pub name: String,

    /// Optional human-readable text. `None` is a distinct state from an empty
    /// string and is preserved as "no description" through every codec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Opaque source text of a single-parameter activation predicate. Never
    /// parsed or executed here; the code export wraps it in a fixed
    /// `lambda s: ...` template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation: Option<String>,

    /// Declared decision flag; `None` is the neutral stance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,

    /// Layout coordinate, opaque pass-through for the codecs.
    pub position: Position,
}

impl Argument {
    /// Creates an argument with the given identity and data.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        activation: Option<String>,
        decision: Option<Decision>,
        position: Position,
    ) -> Self {
        Argument {
            id: id.into(),
            name: name.into(),
            description,
            activation,
            decision,
            position,
        }
    }

    /// Whether this argument has the neutral stance (no decision flag).
    pub fn is_neutral(&self) -> bool {
        self.decision.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_absent_decision() {
        let arg = Argument::new("1", "a", None, None, None, Position::default());
        assert!(arg.is_neutral());

        let arg = Argument::new(
            "2",
            "b",
            None,
            None,
            Some(Decision::Support),
            Position::default(),
        );
        assert!(!arg.is_neutral());
    }

    #[test]
    fn test_decision_serializes_lowercase() {
        let support = serde_json::to_string(&Decision::Support).unwrap();
        let counter = serde_json::to_string(&Decision::Counter).unwrap();
        assert_eq!(support, "\"support\"");
        assert_eq!(counter, "\"counter\"");
    }

    #[test]
    fn test_absent_options_are_omitted() {
        let arg = Argument::new("1", "a", None, None, None, Position::default());
        let json = serde_json::to_string(&arg).unwrap();
        assert!(!json.contains("description"));
        assert!(!json.contains("activation"));
        assert!(!json.contains("decision"));
    }
}
