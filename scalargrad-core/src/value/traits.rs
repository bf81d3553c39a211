// src/value/traits.rs

use crate::value::Value;
use std::fmt;
use std::iter::Sum;
use std::rc::Rc;

impl Clone for Value {
    /// Clones the handle. Both handles refer to the same graph node, so gradient updates
    /// through one are visible through the other.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        write!(f, "Value(data={}, grad={}", data.value, data.grad)?;
        if let Some(label) = &data.label {
            write!(f, ", label={:?}", label)?;
        }
        write!(f, ", op={})", data.op)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        write!(f, "Value(data: {}, grad: {})", data.value, data.grad)
    }
}

/// Sums nodes into a chain of additions, starting from a constant zero leaf.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| &acc + &v)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| &acc + v)
    }
}
