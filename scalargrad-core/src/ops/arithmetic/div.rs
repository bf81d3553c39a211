use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::promote;
use crate::value::{IntoValue, Value};

/// Divides `a` by `b`. Built as `a * b^-1`.
///
/// # Errors
/// * `ScalarGradError::DomainError` if the divisor's value is exactly zero.
/// * `ScalarGradError::InvalidOperand` if a literal is not a finite real number.
pub fn div_op(a: impl IntoValue, b: impl IntoValue) -> Result<Value, ScalarGradError> {
    let a = promote(a, "div")?;
    let b = promote(b, "div")?;
    if b.value() == 0.0 {
        return Err(ScalarGradError::domain("div", "division by zero"));
    }
    mul_op(a, pow_op(b, -1.0)?)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
