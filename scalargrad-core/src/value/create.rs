use crate::error::ScalarGradError;
use crate::ops::Op;
use crate::value::Value;
use num_traits::ToPrimitive;

impl Value {
    /// Creates a leaf node holding `value`, with a zero gradient and no label.
    pub fn new(value: f64) -> Self {
        Value::from_op(value, Op::Leaf, Vec::new())
    }

    /// Creates a labelled leaf node. The label is only used for diagnostics.
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        let node = Value::new(value);
        node.set_label(label);
        node
    }

    /// Promotes a numeric literal to a constant leaf node.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InvalidOperand` if the literal is not a finite real number.
    pub fn from_scalar<T: ToPrimitive>(scalar: T) -> Result<Self, ScalarGradError> {
        match scalar.to_f64() {
            Some(value) if value.is_finite() => Ok(Value::new(value)),
            Some(value) => Err(ScalarGradError::InvalidOperand {
                operation: "promote".to_string(),
                value,
            }),
            None => Err(ScalarGradError::InvalidOperand {
                operation: "promote".to_string(),
                value: f64::NAN,
            }),
        }
    }
}

/// Conversion into a graph node at an operation boundary.
///
/// Nodes pass through unchanged (sharing the same graph node); numeric literals are
/// promoted to fresh constant leaves.
pub trait IntoValue {
    fn into_value(self) -> Result<Value, ScalarGradError>;
}

impl IntoValue for Value {
    fn into_value(self) -> Result<Value, ScalarGradError> {
        Ok(self)
    }
}

impl IntoValue for &Value {
    fn into_value(self) -> Result<Value, ScalarGradError> {
        Ok(self.clone())
    }
}

macro_rules! impl_into_value_for_literal {
    ($($t:ty),*) => {
        $(
            impl IntoValue for $t {
                fn into_value(self) -> Result<Value, ScalarGradError> {
                    Value::from_scalar(self)
                }
            }
        )*
    };
}

impl_into_value_for_literal!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
