use crate::ops::Op;
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns the forward value of this node.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the value of this node.
    ///
    /// Intended for parameter updates on leaves. Nodes already built on top of this one
    /// keep the value they were computed with; rebuild the graph to see the change.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Returns the accumulated gradient of this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the gradient accumulator.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient accumulator to 0.0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    pub(crate) fn accumulate_grad(&self, grad: f64) {
        self.write_data().grad += grad;
    }

    /// Returns the rule that produced this node (`Op::Leaf` for leaves).
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Returns handles to the operands of this node, in operand order.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().operands.is_empty()
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "accessors_test.rs"]
mod tests;
