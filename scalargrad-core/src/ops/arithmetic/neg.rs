use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul_op;
use crate::ops::promote;
use crate::value::{IntoValue, Value};

/// Negates a node. Built as a multiplication by the constant `-1`.
pub fn neg_op(a: impl IntoValue) -> Result<Value, ScalarGradError> {
    let a = promote(a, "neg")?;
    mul_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
