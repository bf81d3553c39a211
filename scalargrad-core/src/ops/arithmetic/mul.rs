use crate::error::ScalarGradError;
use crate::ops::{promote, Op};
use crate::value::{IntoValue, Value};

/// Multiplies two nodes, promoting a numeric literal on either side to a constant leaf.
///
/// Backward: each operand receives the output gradient times the other operand's value.
///
/// # Errors
/// Returns `ScalarGradError::InvalidOperand` if a literal is not a finite real number.
pub fn mul_op(a: impl IntoValue, b: impl IntoValue) -> Result<Value, ScalarGradError> {
    let a = promote(a, "mul")?;
    let b = promote(b, "mul")?;
    let value = a.value() * b.value();
    Ok(Value::from_op(value, Op::Mul, vec![a, b]))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
