use crate::ops::Op;
use crate::value::Value;

/// Rectified linear unit, `max(0, a)`.
///
/// Backward: the output gradient passes through when `a > 0`; at `a == 0` the
/// subgradient 0 is used.
pub fn relu_op(a: &Value) -> Value {
    let value = a.value();
    let out = if value > 0.0 { value } else { 0.0 };
    Value::from_op(out, Op::Relu, vec![a.clone()])
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
