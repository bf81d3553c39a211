// src/value/mod.rs

use crate::ops::Op;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod create;
mod traits;

pub use create::IntoValue;

/// Identity of a node in the computation graph.
///
/// Two `Value` handles are the same node exactly when they share the same `ValueData`
/// allocation, regardless of the numbers they hold.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Internal state of a scalar node.
pub(crate) struct ValueData {
    /// Forward-computed result (externally supplied for leaves).
    pub(crate) value: f64,
    /// Gradient accumulator, summed across backward passes until reset.
    pub(crate) grad: f64,
    /// Rule that produced this node.
    pub(crate) op: Op,
    /// Nodes consumed to produce this one, in operand order.
    pub(crate) operands: Vec<Value>,
    pub(crate) label: Option<String>,
}

impl Drop for ValueData {
    // Unlink uniquely-owned operands iteratively so that a long chain does not
    // recurse once per node on drop.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.data) {
                let mut data = cell.into_inner();
                pending.append(&mut data.operands);
            }
        }
    }
}

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally:
/// 1.  **Shared Ownership:** a node can be the operand of any number of consumers,
///     and cloning a `Value` only clones the handle.
/// 2.  **Interior Mutability:** the gradient (and a leaf's value) can be updated through
///     a shared handle, which is what the backward pass and optimizers do.
///
/// The graph is single-threaded, so `Value` is neither `Send` nor `Sync`.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Allocates a node produced by `op` from `operands`.
    pub(crate) fn from_op(value: f64, op: Op, operands: Vec<Value>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData {
                value,
                grad: 0.0,
                op,
                operands,
                label: None,
            })),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    pub(crate) fn id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }
}
