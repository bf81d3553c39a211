use crate::error::ScalarGradError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::promote;
use crate::value::{IntoValue, Value};

/// Subtracts `b` from `a`. Built as `a + (-b)`.
///
/// # Errors
/// Returns `ScalarGradError::InvalidOperand` if a literal is not a finite real number.
pub fn sub_op(a: impl IntoValue, b: impl IntoValue) -> Result<Value, ScalarGradError> {
    let a = promote(a, "sub")?;
    let b = promote(b, "sub")?;
    add_op(a, neg_op(b)?)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
