// scalargrad-core/src/ops/arithmetic/add.rs

use crate::error::ScalarGradError;
use crate::ops::{promote, Op};
use crate::value::{IntoValue, Value};

/// Adds two nodes, promoting a numeric literal on either side to a constant leaf.
///
/// Backward: both operands receive the output gradient unchanged.
///
/// # Errors
/// Returns `ScalarGradError::InvalidOperand` if a literal is not a finite real number.
pub fn add_op(a: impl IntoValue, b: impl IntoValue) -> Result<Value, ScalarGradError> {
    let a = promote(a, "add")?;
    let b = promote(b, "add")?;
    let value = a.value() + b.value();
    Ok(Value::from_op(value, Op::Add, vec![a, b]))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
