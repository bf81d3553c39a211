use crate::ops::Op;
use crate::value::Value;

/// Computes `e^a`.
///
/// Backward: `a.grad += out.grad * out.value`.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.value().exp(), Op::Exp, vec![a.clone()])
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
