// src/ops/mod.rs
// Forward operations of the engine. Each operation allocates a new node tagged with
// the `Op` whose gradient rule the backward pass applies (see `autograd::backward_op`).

use crate::error::ScalarGradError;
use crate::value::{IntoValue, Value};
use std::fmt;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, tanh_op};

/// The closed set of rules a node can be produced by.
///
/// Negation, subtraction and division have no tag of their own: they are built from
/// `Mul`, `Add` and `Pow` nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// No operation: an externally supplied value or a promoted literal.
    Leaf,
    Add,
    Mul,
    /// Power with a fixed real exponent that is not itself a node.
    Pow { exponent: f64 },
    Exp,
    Tanh,
    Relu,
}

impl Op {
    /// Number of operands a node produced by this rule holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow { .. } | Op::Exp | Op::Tanh | Op::Relu => 1,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow { exponent } => write!(f, "**{}", exponent),
            Op::Exp => write!(f, "exp"),
            Op::Tanh => write!(f, "tanh"),
            Op::Relu => write!(f, "relu"),
        }
    }
}

/// Promotes an operand at the boundary of `operation`, tagging promotion failures with it.
pub(crate) fn promote(operand: impl IntoValue, operation: &str) -> Result<Value, ScalarGradError> {
    operand.into_value().map_err(|e| match e {
        ScalarGradError::InvalidOperand { value, .. } => ScalarGradError::InvalidOperand {
            operation: operation.to_string(),
            value,
        },
        other => other,
    })
}
