// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Python code codec for argumentation graphs.

The export produces a program that reconstructs the graph against the AFDM
runtime library: one `add_argument` call per node, one `add_attack` call per
edge. Attacks reference arguments by *name* (the semantic key), never by id.

The generated code is one-directional: it is never parsed or executed to
import a graph back. Instead, the export can append the indented JSON
snapshot between two fixed marker lines, inside a Python `"""` multiline
string so it is inert at execution; the import locates that block and hands
the JSON to the JSON codec. A file exported without the snapshot carries no
recoverable graph, and importing it fails with a parse error.
*/

use std::collections::HashMap;

use judge_structures::{ArgumentationGraph, Argument, Attack, Decision};
use tracing::warn;

use crate::json::{export_json, import_json};
use crate::{SerializationError, SerializationResult};

/// Line marking the start of the embedded JSON block. Exact and
/// line-anchored; the import matches whole lines against it.
pub const BEGIN_GRAPH_MARKER: &str = "### BEGIN ARGUMENTATION GRAPH ###";

/// Line marking the end of the embedded JSON block.
pub const END_GRAPH_MARKER: &str = "### END ARGUMENTATION GRAPH ###";

/// Python multiline-string delimiter enclosing the embedded JSON.
const RAW_STRING_DELIMITER: &str = "\"\"\"";

/// Fixed head of every exported program: AFDM import, the stance tag used by
/// the decision flags, and an empty model to fill.
const PREAMBLE: &str = "
from .lib import AFDM, Argument

dec = 'moral'

afdm = AFDM()

# Arguments
";

/// Escapes text for use inside a single-quoted Python string literal.
///
/// Backslashes are escaped before single quotes; the other order would
/// re-escape the backslash just inserted in front of a quote.
fn escape_python_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Renders one argument as an `afdm.add_argument(...)` statement.
///
/// Absent description/activation render as the `None` literal (absence is
/// not an empty string). The neutral stance renders as an empty flag slot;
/// support/counter put the stance tag into the correspondingly named
/// keyword argument.
fn export_argument(node: &Argument) -> String {
    let name = format!("'{}'", escape_python_literal(&node.name));

    let desc = match &node.description {
        Some(text) => format!("'{}'", escape_python_literal(text)),
        None => "None".to_string(),
    };

    // The activation expression is opaque source text, used outside any
    // string literal: no quoting, no escaping, just the lambda template.
    let code = match &node.activation {
        Some(expression) => format!("lambda s: {}", expression),
        None => "None".to_string(),
    };

    let decision = match node.decision {
        Some(Decision::Support) => "support=[dec]",
        Some(Decision::Counter) => "counter=[dec]",
        None => "",
    };

    format!(
        "\nafdm.add_argument(Argument(\n    {},\n    {},\n    {},\n    {}\n))",
        name, desc, code, decision
    )
}

/// Renders one attack as an `afdm.add_attack(...)` statement, resolving both
/// endpoints through the id-to-escaped-name table.
///
/// Returns `None` when an endpoint id is unknown; the editor keeps edges and
/// nodes consistent, so a dangling reference means the snapshot was corrupt
/// and the statement is skipped with a warning rather than emitting a call
/// against a nonexistent argument.
fn export_attack(edge: &Attack, names_by_id: &HashMap<&str, String>) -> Option<String> {
    let attacker = match names_by_id.get(edge.source.as_str()) {
        Some(name) => name,
        None => {
            warn!(
                edge_id = %edge.id,
                source = %edge.source,
                "attack references an unknown source argument, skipping"
            );
            return None;
        }
    };
    let attacked = match names_by_id.get(edge.target.as_str()) {
        Some(name) => name,
        None => {
            warn!(
                edge_id = %edge.id,
                target = %edge.target,
                "attack references an unknown target argument, skipping"
            );
            return None;
        }
    };
    Some(format!(
        "afdm.add_attack(attacker='{}', attacked='{}')",
        attacker, attacked
    ))
}

/// Exports a graph as Python code.
///
/// # Arguments
/// * `graph` - The graph snapshot to export.
/// * `add_json` - When `true`, append the indented JSON snapshot between the
///   graph markers so the file can be imported back; without it the file is
///   export-only.
pub fn export_python(graph: &ArgumentationGraph, add_json: bool) -> SerializationResult<String> {
    let mut code = String::from(PREAMBLE);

    // The attack statements reference arguments by name, but edges only
    // carry ids. Build the lookup while walking the nodes.
    let mut names_by_id: HashMap<&str, String> = HashMap::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        names_by_id.insert(node.id.as_str(), escape_python_literal(&node.name));
        code.push_str(&export_argument(node));
        code.push('\n');
    }

    code.push_str("\n# Attacks\n\n");

    for edge in &graph.edges {
        if let Some(statement) = export_attack(edge, &names_by_id) {
            code.push_str(&statement);
            code.push('\n');
        }
    }

    if add_json {
        let serialized = export_json(graph, true)?;
        code.push_str(&format!(
            "\n{}\n\
             # These lines represent the (JSON-serialized) argumentation graph, so that\n\
             # it can be imported back into the judge editor.\n\
             # DO NOT MODIFY.\n\
             # We use a multiline string so that it has no effect on the Python source code.\n\
             {}\n{}\n{}\n{}\n",
            BEGIN_GRAPH_MARKER,
            RAW_STRING_DELIMITER,
            serialized,
            RAW_STRING_DELIMITER,
            END_GRAPH_MARKER
        ));
    }

    Ok(code)
}

/// Imports a graph from previously exported Python code.
///
/// Only works when the code was exported with the embedded JSON snapshot
/// (see `add_json` on [`export_python`]); the code itself is never executed
/// or parsed. A missing marker line fails with [`SerializationError::Parse`]
/// before any JSON parsing happens - that is the signal distinguishing "no
/// snapshot was embedded" from "the snapshot is corrupt".
pub fn import_python(text: &str) -> SerializationResult<ArgumentationGraph> {
    let lines: Vec<&str> = text.lines().collect();

    let begin = lines
        .iter()
        .position(|line| *line == BEGIN_GRAPH_MARKER)
        .ok_or_else(|| {
            SerializationError::Parse(
                "No embedded argumentation graph: begin marker not found \
                 (was the file exported without the JSON snapshot?)"
                    .to_string(),
            )
        })?;
    let end = lines
        .iter()
        .position(|line| *line == END_GRAPH_MARKER)
        .ok_or_else(|| {
            SerializationError::Parse("No embedded argumentation graph: end marker not found".to_string())
        })?;
    if end <= begin {
        return Err(SerializationError::Parse(
            "Embedded graph markers are out of order".to_string(),
        ));
    }

    // The snapshot sits inside a multiline string: the opening delimiter
    // follows the begin marker, the closing one is the line right before the
    // end marker. Validate both instead of trusting positions.
    let open = lines[begin..end]
        .iter()
        .position(|line| *line == RAW_STRING_DELIMITER)
        .map(|offset| begin + offset)
        .ok_or_else(|| {
            SerializationError::Parse("Embedded graph block has no opening delimiter".to_string())
        })?;
    if end < 2 || open + 1 > end - 1 || lines[end - 1] != RAW_STRING_DELIMITER {
        return Err(SerializationError::Parse(
            "Embedded graph block has no closing delimiter".to_string(),
        ));
    }

    let json_lines = &lines[open + 1..end - 1];
    import_json(&json_lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use judge_structures::Position;

    fn sample_graph() -> ArgumentationGraph {
        let mut graph = ArgumentationGraph::new();
        graph.nodes.push(Argument::new(
            "1",
            "welfare",
            Some("Basic needs matter".to_string()),
            Some("s.comfort > 0.5".to_string()),
            Some(Decision::Support),
            Position::new(10.0, 20.0),
        ));
        graph.nodes.push(Argument::new(
            "2",
            "excess",
            None,
            None,
            Some(Decision::Counter),
            Position::new(30.0, 40.0),
        ));
        graph
            .nodes
            .push(Argument::new("3", "neutral-arg", None, None, None, Position::new(0.0, 0.0)));
        graph.edges.push(Attack::new("e1", "2", "1"));
        graph
    }

    #[test]
    fn test_escape_backslash_before_quote() {
        assert_eq!(escape_python_literal("O'Brien\\path"), "O\\'Brien\\\\path");
        assert_eq!(escape_python_literal("plain"), "plain");
    }

    #[test]
    fn test_export_escapes_names_in_literals() {
        let mut graph = ArgumentationGraph::new();
        graph.nodes.push(Argument::new(
            "1",
            "O'Brien\\path",
            None,
            None,
            None,
            Position::default(),
        ));
        let code = export_python(&graph, false).unwrap();
        assert!(code.contains("'O\\'Brien\\\\path'"));
    }

    #[test]
    fn test_absent_fields_render_as_none_literal() {
        let code = export_python(&sample_graph(), false).unwrap();
        // The "excess" argument has neither description nor activation.
        assert!(code.contains("    'excess',\n    None,\n    None,\n"));
    }

    #[test]
    fn test_activation_wrapped_in_lambda_template() {
        let code = export_python(&sample_graph(), false).unwrap();
        assert!(code.contains("lambda s: s.comfort > 0.5"));
    }

    #[test]
    fn test_stance_mapping() {
        let code = export_python(&sample_graph(), false).unwrap();
        assert!(code.contains("support=[dec]"));
        assert!(code.contains("counter=[dec]"));
        // Neutral: the flag slot stays empty, no tag in either keyword.
        assert!(code.contains("    'neutral-arg',\n    None,\n    None,\n    \n))"));
    }

    #[test]
    fn test_attacks_reference_names_not_ids() {
        let code = export_python(&sample_graph(), false).unwrap();
        assert!(code.contains("afdm.add_attack(attacker='excess', attacked='welfare')"));
    }

    #[test]
    fn test_dangling_attack_is_skipped() {
        let mut graph = sample_graph();
        graph.edges.push(Attack::new("e2", "404", "1"));
        let code = export_python(&graph, false).unwrap();
        assert_eq!(code.matches("afdm.add_attack").count(), 1);
    }

    #[test]
    fn test_preamble_and_sections() {
        let code = export_python(&sample_graph(), false).unwrap();
        assert!(code.starts_with("\nfrom .lib import AFDM, Argument\n"));
        assert!(code.contains("dec = 'moral'"));
        assert!(code.contains("afdm = AFDM()"));
        assert!(code.contains("# Arguments"));
        assert!(code.contains("# Attacks"));
    }

    #[test]
    fn test_embed_round_trip() {
        let graph = sample_graph();
        let code = export_python(&graph, true).unwrap();
        assert_eq!(import_python(&code).unwrap(), graph);
    }

    #[test]
    fn test_import_without_embed_fails() {
        let graph = sample_graph();
        let code = export_python(&graph, false).unwrap();
        assert!(matches!(
            import_python(&code),
            Err(SerializationError::Parse(_))
        ));
    }

    #[test]
    fn test_import_requires_both_markers() {
        let truncated = format!("{}\n\"\"\"\n{{}}\n\"\"\"\n", BEGIN_GRAPH_MARKER);
        assert!(matches!(
            import_python(&truncated),
            Err(SerializationError::Parse(_))
        ));
    }

    #[test]
    fn test_import_ignores_surrounding_code() {
        let graph = sample_graph();
        let code = export_python(&graph, true).unwrap();
        let wrapped = format!("# leading noise\n{}\n# trailing noise\n", code);
        assert_eq!(import_python(&wrapped).unwrap(), graph);
    }
}
