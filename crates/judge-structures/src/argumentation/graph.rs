// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
The argumentation graph value and its identity rules.

The graph has no identity of its own beyond its two sets: it is serialized
and restored as a value. The identity rules live here because every codec
depends on them staying consistent:

- ids are numeric strings allocated strictly above the current maximum, so
  they never collide without a centralized counter;
- duplicated nodes get `name-i` with the smallest free positive `i`, so
  repeatedly duplicating `a` yields `a-1`, `a-2`, ... regardless of what
  other names exist.
*/

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::argument::{Argument, Decision, Position};
use super::attack::Attack;
use crate::random::random_jitter;

/// Base name used when duplicating a node that has no name of its own.
pub const DUPLICATE_BASE_NAME: &str = "argument";

/// Default anchor point for newly created nodes. The actual position gets a
/// random jitter on each axis so consecutive nodes do not cover each other.
const DEFAULT_X: f64 = 100.0;
const DEFAULT_Y: f64 = 100.0;

/// An argumentation graph: a set of arguments and a set of attacks.
///
/// Cycles and self-attacks are permitted. The editor exclusively owns the
/// live graph; codecs receive a snapshot (read) or produce a fresh
/// replacement (write) and never mutate one in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArgumentationGraph {
    pub nodes: Vec<Argument>,
    pub edges: Vec<Attack>,
}

impl ArgumentationGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        ArgumentationGraph::default()
    }

    /// Allocates a node id strictly greater than every numeric id currently
    /// in use.
    ///
    /// Ids are numeric strings. Externally-injected ids that do not parse as
    /// numbers are tolerated and simply ignored by the scan; when nothing
    /// parses the allocation starts from `"1"`.
    ///
    /// # Examples
    /// ```
    /// use judge_structures::{Argument, ArgumentationGraph, Position};
    ///
    /// let mut graph = ArgumentationGraph::new();
    /// assert_eq!(graph.allocate_id(), "1");
    ///
    /// graph.nodes.push(Argument::new("7", "a", None, None, None, Position::default()));
    /// assert_eq!(graph.allocate_id(), "8");
    /// ```
    pub fn allocate_id(&self) -> String {
        let mut max_id: u64 = 0;
        for node in &self.nodes {
            if let Ok(numeric) = node.id.parse::<u64>() {
                max_id = max_id.max(numeric);
            }
        }
        (max_id + 1).to_string()
    }

    /// Creates a new argument and appends it to the graph.
    ///
    /// The node receives a freshly allocated id and a position around the
    /// default anchor, jittered on both axes so that nodes created in
    /// sequence stay visually distinguishable.
    ///
    /// Returns a reference to the created node.
    pub fn create_argument(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        activation: Option<String>,
        decision: Option<Decision>,
    ) -> &Argument {
        let id = self.allocate_id();
        let position = Position::new(DEFAULT_X + random_jitter(), DEFAULT_Y + random_jitter());
        self.nodes.push(Argument::new(
            id,
            name,
            description,
            activation,
            decision,
            position,
        ));
        let index = self.nodes.len() - 1;
        &self.nodes[index]
    }

    /// Duplicates the node with the given id: same data, fresh id, fresh
    /// jittered position, and a `name-i` duplicate name (see
    /// [`duplicate_name`]).
    ///
    /// Returns `None` when no node carries the id.
    pub fn duplicate_argument(&mut self, id: &str) -> Option<&Argument> {
        let source = self.nodes.iter().find(|node| node.id == id)?.clone();

        let base_name = if source.name.is_empty() {
            DUPLICATE_BASE_NAME.to_string()
        } else {
            source.name.clone()
        };
        let existing_names: HashSet<String> =
            self.nodes.iter().map(|node| node.name.clone()).collect();
        let new_name = duplicate_name(&existing_names, &base_name);

        Some(self.create_argument(
            new_name,
            source.description,
            source.activation,
            source.decision,
        ))
    }
}

/// Produces `base_name-i` for the smallest positive `i` such that the
/// candidate is not already taken.
///
/// The gap-filling probe makes chained duplication behave naturally:
/// duplicating `a` yields `a-1`, duplicating `a` again (not `a-1`) yields
/// `a-2`, independent of how many unrelated names exist. When an earlier
/// suffix was freed (the node deleted), it is reused.
pub fn duplicate_name(existing_names: &HashSet<String>, base_name: &str) -> String {
    let mut i: u32 = 1;
    loop {
        let candidate = format!("{}-{}", base_name, i);
        if !existing_names.contains(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{JITTER_MAX, JITTER_MIN};

    fn graph_with_names(names: &[&str]) -> ArgumentationGraph {
        let mut graph = ArgumentationGraph::new();
        for (index, name) in names.iter().enumerate() {
            graph.nodes.push(Argument::new(
                (index + 1).to_string(),
                *name,
                None,
                None,
                None,
                Position::default(),
            ));
        }
        graph
    }

    #[test]
    fn test_allocate_id_empty_graph_starts_at_one() {
        let graph = ArgumentationGraph::new();
        assert_eq!(graph.allocate_id(), "1");
    }

    #[test]
    fn test_allocate_id_is_max_plus_one() {
        let mut graph = ArgumentationGraph::new();
        for id in ["3", "1", "7"] {
            graph
                .nodes
                .push(Argument::new(id, id, None, None, None, Position::default()));
        }
        assert_eq!(graph.allocate_id(), "8");
    }

    #[test]
    fn test_allocate_id_ignores_non_numeric_ids() {
        let mut graph = ArgumentationGraph::new();
        for id in ["imported-a", "2", "imported-b"] {
            graph
                .nodes
                .push(Argument::new(id, id, None, None, None, Position::default()));
        }
        assert_eq!(graph.allocate_id(), "3");

        let mut graph = ArgumentationGraph::new();
        graph.nodes.push(Argument::new(
            "only-text",
            "x",
            None,
            None,
            None,
            Position::default(),
        ));
        assert_eq!(graph.allocate_id(), "1");
    }

    #[test]
    fn test_duplicate_name_fills_first_gap() {
        let existing: HashSet<String> = ["a", "a-1", "a-3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(duplicate_name(&existing, "a"), "a-2");
    }

    #[test]
    fn test_duplicate_name_chained() {
        let mut existing: HashSet<String> = HashSet::new();
        existing.insert("a".to_string());
        let first = duplicate_name(&existing, "a");
        assert_eq!(first, "a-1");
        existing.insert(first);
        let second = duplicate_name(&existing, "a");
        assert_eq!(second, "a-2");
    }

    #[test]
    fn test_duplicate_argument_same_data_new_identity() {
        let mut graph = graph_with_names(&["a", "b"]);
        graph.nodes[0].description = Some("desc".to_string());
        graph.nodes[0].activation = Some("s.x > 0".to_string());
        graph.nodes[0].decision = Some(Decision::Counter);

        let duplicated = graph.duplicate_argument("1").unwrap().clone();
        assert_eq!(duplicated.name, "a-1");
        assert_eq!(duplicated.id, "3");
        assert_eq!(duplicated.description.as_deref(), Some("desc"));
        assert_eq!(duplicated.activation.as_deref(), Some("s.x > 0"));
        assert_eq!(duplicated.decision, Some(Decision::Counter));
        assert_eq!(graph.nodes.len(), 3);
    }

    #[test]
    fn test_duplicate_argument_unknown_id() {
        let mut graph = graph_with_names(&["a"]);
        assert!(graph.duplicate_argument("99").is_none());
    }

    #[test]
    fn test_duplicate_argument_unnamed_uses_placeholder() {
        let mut graph = graph_with_names(&[""]);
        let duplicated = graph.duplicate_argument("1").unwrap();
        assert_eq!(duplicated.name, "argument-1");
    }

    #[test]
    fn test_created_positions_stay_in_jitter_band() {
        let mut graph = ArgumentationGraph::new();
        for i in 0..50 {
            let node = graph.create_argument(format!("n{}", i), None, None, None);
            let dx = (node.position.x - 100.0).abs();
            let dy = (node.position.y - 100.0).abs();
            assert!(
                (JITTER_MIN as f64..=JITTER_MAX as f64).contains(&dx),
                "x jitter out of band: {}",
                dx
            );
            assert!(
                (JITTER_MIN as f64..=JITTER_MAX as f64).contains(&dy),
                "y jitter out of band: {}",
                dy
            );
        }
    }
}
