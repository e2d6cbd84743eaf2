// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
JSON codec for argumentation graphs.

The wire form is `{"nodes": [...], "edges": [...]}` with every model field
preserved verbatim. Absent optional fields are omitted from the object (the
"no value" marker); indentation is a presentation choice and never
semantically significant, so `import_json(export_json(g, s)) == g` holds for
both spacing modes.
*/

use judge_structures::ArgumentationGraph;

use crate::{SerializationError, SerializationResult};

/// Serializes a graph to JSON.
///
/// # Arguments
/// * `graph` - The graph snapshot to serialize.
/// * `spacing` - `false` for a compact representation (file download, PNG
///   chunk payload), `true` for a human-readable indented one (embedding in
///   generated Python code).
pub fn export_json(graph: &ArgumentationGraph, spacing: bool) -> SerializationResult<String> {
    let result = if spacing {
        serde_json::to_string_pretty(graph)
    } else {
        serde_json::to_string(graph)
    };
    result.map_err(|e| SerializationError::Encode(format!("Failed to serialize graph: {}", e)))
}

/// Parses a JSON text into a graph.
///
/// Fails with [`SerializationError::Parse`] when the text is not well-formed
/// JSON or the top-level `nodes`/`edges` containers are missing. No further
/// schema validation happens here.
pub fn import_json(text: &str) -> SerializationResult<ArgumentationGraph> {
    serde_json::from_str(text)
        .map_err(|e| SerializationError::Parse(format!("Invalid JSON data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use judge_structures::{Argument, Attack, Decision, Position};

    fn sample_graph() -> ArgumentationGraph {
        let mut graph = ArgumentationGraph::new();
        graph.nodes.push(Argument::new(
            "1",
            "welfare",
            Some("People deserve decent living conditions".to_string()),
            Some("s.comfort > 0.5".to_string()),
            Some(Decision::Support),
            Position::new(120.0, 87.0),
        ));
        graph.nodes.push(Argument::new(
            "2",
            "overconsumption",
            None,
            None,
            Some(Decision::Counter),
            Position::new(-40.0, 210.0),
        ));
        graph
            .nodes
            .push(Argument::new("3", "context", None, None, None, Position::new(0.0, 0.0)));
        graph.edges.push(Attack::new("e1", "2", "1"));
        graph.edges.push(Attack::new("e2", "3", "3"));
        graph
    }

    #[test]
    fn test_round_trip_compact() {
        let graph = sample_graph();
        let text = export_json(&graph, false).unwrap();
        assert!(!text.contains('\n'));
        assert_eq!(import_json(&text).unwrap(), graph);
    }

    #[test]
    fn test_round_trip_indented() {
        let graph = sample_graph();
        let text = export_json(&graph, true).unwrap();
        assert!(text.contains('\n'));
        assert_eq!(import_json(&text).unwrap(), graph);
    }

    #[test]
    fn test_absent_fields_recovered_as_absent() {
        let graph = sample_graph();
        let text = export_json(&graph, false).unwrap();
        let recovered = import_json(&text).unwrap();
        assert_eq!(recovered.nodes[1].description, None);
        assert_eq!(recovered.nodes[1].activation, None);
        assert_eq!(recovered.nodes[2].decision, None);
    }

    #[test]
    fn test_empty_description_is_not_absent() {
        let mut graph = sample_graph();
        graph.nodes[1].description = Some(String::new());
        let text = export_json(&graph, false).unwrap();
        let recovered = import_json(&text).unwrap();
        assert_eq!(recovered.nodes[1].description, Some(String::new()));
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        let result = import_json("{ not json");
        assert!(matches!(result, Err(SerializationError::Parse(_))));
    }

    #[test]
    fn test_import_rejects_missing_containers() {
        assert!(matches!(
            import_json("{\"nodes\": []}"),
            Err(SerializationError::Parse(_))
        ));
        assert!(matches!(
            import_json("{\"edges\": []}"),
            Err(SerializationError::Parse(_))
        ));
        assert!(matches!(import_json("[]"), Err(SerializationError::Parse(_))));
    }
}
