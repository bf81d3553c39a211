use crate::error::ScalarGradError;
use crate::value::{NodeId, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

/// Topologically sorts the subgraph reachable from `root` through the operand relation.
///
/// Every node appears exactly once, after all of its operands; `root` is last. Walking
/// the result in reverse therefore visits each node only after every node that consumes
/// it. Identity (not value) decides whether two handles are the same node.
///
/// The depth-first traversal keeps its own stack, so deep chains do not grow the call
/// stack.
///
/// # Errors
/// Returns `ScalarGradError::CycleDetected` if a node is reached again while it is still
/// being expanded.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, ScalarGradError> {
    let mut states: HashMap<NodeId, VisitState> = HashMap::new();
    let mut sorted_nodes = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        let node_id = node.id();
        if expanded {
            states.insert(node_id, VisitState::Done);
            sorted_nodes.push(node);
            continue;
        }
        match states.get(&node_id) {
            Some(VisitState::Done) => continue,
            Some(VisitState::InProgress) => {
                log::debug!("topological_sort: node {:?} reached while in progress", node_id);
                return Err(ScalarGradError::CycleDetected);
            }
            None => {}
        }
        states.insert(node_id, VisitState::InProgress);
        let operands = node.operands();
        log::trace!("topological_sort: expanding {:?} ({} operands)", node_id, operands.len());
        stack.push((node, true));
        // Reversed so operands are finished in operand order.
        for operand in operands.into_iter().rev() {
            match states.get(&operand.id()) {
                Some(VisitState::Done) => {}
                Some(VisitState::InProgress) => return Err(ScalarGradError::CycleDetected),
                None => stack.push((operand, false)),
            }
        }
    }

    Ok(sorted_nodes)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
