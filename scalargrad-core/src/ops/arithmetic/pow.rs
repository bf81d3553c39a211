use crate::error::ScalarGradError;
use crate::ops::{promote, Op};
use crate::value::{IntoValue, Value};

/// Raises a node to a fixed real `exponent`.
///
/// Backward: `a.grad += out.grad * exponent * a^(exponent - 1)`.
///
/// # Errors
/// * `ScalarGradError::InvalidOperand` if `exponent` (or a literal base) is not finite.
/// * `ScalarGradError::DomainError` if the base is negative and the exponent is not an
///   integer (no real result), or the base is zero and the exponent is negative.
pub fn pow_op(a: impl IntoValue, exponent: f64) -> Result<Value, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidOperand {
            operation: "pow".to_string(),
            value: exponent,
        });
    }
    let a = promote(a, "pow")?;
    let base = a.value();
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(ScalarGradError::domain(
            "pow",
            format!("negative base {} raised to non-integer exponent {}", base, exponent),
        ));
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(ScalarGradError::domain(
            "pow",
            format!("zero base raised to negative exponent {}", exponent),
        ));
    }
    Ok(Value::from_op(base.powf(exponent), Op::Pow { exponent }, vec![a]))
}

impl Value {
    /// Method form of [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
