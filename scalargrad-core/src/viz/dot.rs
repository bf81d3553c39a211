// src/viz/dot.rs
// Graphviz rendering of the graph reachable from a node.

use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::value::{NodeId, Value};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::io;

/// Escapes characters that are structural inside a `record` label.
fn escape_record(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '{' | '}' | '|' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Renders the graph rooted at `root` in Graphviz dot syntax, left to right.
///
/// Every node becomes a record `{ label | data | grad }`; every non-leaf node also
/// gets a small op node wired as `operand -> op -> node`. Nodes and gradients are
/// only read.
///
/// # Errors
/// Returns `ScalarGradError::CycleDetected` if the graph is not acyclic.
pub fn to_dot(root: &Value) -> Result<String, ScalarGradError> {
    let order = topological_sort(root)?;
    let index: HashMap<NodeId, usize> = order.iter().enumerate().map(|(i, v)| (v.id(), i)).collect();

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "digraph G {{");
    let _ = writeln!(out, "  rankdir=\"LR\";");

    for (i, node) in order.iter().enumerate() {
        let data = node.read_data();
        let label = data.label.as_deref().map(escape_record).unwrap_or_default();
        let _ = writeln!(
            out,
            "  n{} [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];",
            i, label, data.value, data.grad
        );
        if data.operands.is_empty() {
            continue;
        }
        let _ = writeln!(out, "  n{}_op [label=\"{}\"];", i, data.op);
        let _ = writeln!(out, "  n{}_op -> n{};", i, i);
        for operand in &data.operands {
            if let Some(j) = index.get(&operand.id()) {
                let _ = writeln!(out, "  n{} -> n{}_op;", j, i);
            }
        }
    }

    let _ = writeln!(out, "}}");
    Ok(out)
}

/// Writes [`to_dot`] output to `writer`.
///
/// A cyclic graph is reported as an `InvalidData` I/O error.
pub fn write_dot(root: &Value, writer: &mut impl io::Write) -> io::Result<()> {
    let dot = to_dot(root).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writer.write_all(dot.as_bytes())
}
