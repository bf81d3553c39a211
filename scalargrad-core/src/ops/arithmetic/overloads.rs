// Operator sugar over the fallible `*_op` functions.
//
// Every combination of `Value`, `&Value` and `f64` is supported so that expressions
// such as `&x * &w + 3.0` or `1.0 - y` read naturally.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $func:ident) => {
        impl_binary_op!(@impl $trait, $method, $func, Value, Value);
        impl_binary_op!(@impl $trait, $method, $func, Value, &Value);
        impl_binary_op!(@impl $trait, $method, $func, &Value, Value);
        impl_binary_op!(@impl $trait, $method, $func, &Value, &Value);
        impl_binary_op!(@impl $trait, $method, $func, Value, f64);
        impl_binary_op!(@impl $trait, $method, $func, &Value, f64);
        impl_binary_op!(@impl $trait, $method, $func, f64, Value);
        impl_binary_op!(@impl $trait, $method, $func, f64, &Value);
    };
    (@impl $trait:ident, $method:ident, $func:ident, $lhs:ty, $rhs:ty) => {
        impl $trait<$rhs> for $lhs {
            type Output = Value;

            /// # Panics
            /// Panics if the operation's domain check fails (e.g. a zero divisor) or a
            /// literal operand is not a finite real number. Use the `*_op` function to
            /// handle these cases as errors.
            fn $method(self, rhs: $rhs) -> Value {
                $func(self, rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self).unwrap_or_else(|e| panic!("{}", e))
    }
}
