use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::value::{NodeId, Value};
use std::collections::HashMap;

/// Computes the gradient of `root` with respect to every node it depends on.
///
/// The nodes reachable from `root` are processed in reverse topological order, seeded
/// with `d root / d root = 1`. Each node's gradient for this pass is final by the time
/// its rule runs, and the rule's contributions are summed into its operands, once per
/// consuming edge.
///
/// Every node's `grad` accumulator is then increased by its gradient from this pass.
/// Accumulators are never reset here: call `zero_grad` on the nodes you reuse before
/// running another pass, or the new gradients are added on top of the old ones.
///
/// # Errors
/// Returns `ScalarGradError::CycleDetected` if the graph reachable from `root` is not
/// acyclic.
pub fn backward(root: &Value) -> Result<(), ScalarGradError> {
    let sorted_nodes = topological_sort(root)?;
    log::debug!("backward: {} nodes reachable from root", sorted_nodes.len());

    // Gradients of this pass, keyed by node identity.
    let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
    grad_map.insert(root.id(), 1.0);

    for node in sorted_nodes.iter().rev() {
        let upstream = grad_map.remove(&node.id()).unwrap_or(0.0);
        node.accumulate_grad(upstream);

        let data = node.read_data();
        if data.operands.is_empty() {
            continue;
        }
        let inputs: Vec<f64> = data.operands.iter().map(Value::value).collect();
        let contributions = data.op.backward(data.value, upstream, &inputs);
        for (operand, contribution) in data.operands.iter().zip(contributions) {
            *grad_map.entry(operand.id()).or_insert(0.0) += contribution;
        }
    }

    log::debug!("backward: done");
    Ok(())
}

impl Value {
    /// Runs the backward pass from this node. See [`backward`].
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        if self.is_leaf() {
            log::debug!("backward() called on a leaf value. Only the seed gradient is added.");
        }
        backward(self)
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
