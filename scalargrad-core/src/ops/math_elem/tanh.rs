use crate::ops::Op;
use crate::value::Value;

/// Hyperbolic tangent, `(e^(2a) - 1) / (e^(2a) + 1)`.
///
/// Backward: `a.grad += out.grad * (1 - out.value^2)`.
pub fn tanh_op(a: &Value) -> Value {
    // f64::tanh saturates to ±1 where the exponential form overflows to NaN.
    Value::from_op(a.value().tanh(), Op::Tanh, vec![a.clone()])
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
