use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul_op;
use crate::ops::Op;
use crate::value::Value;

#[test]
fn test_mul_values_ok() {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let result = mul_op(&a, &b).unwrap();
    assert_eq!(result.value(), -6.0);
    assert_eq!(result.op(), Op::Mul);
}

#[test]
fn test_mul_backward() -> Result<(), ScalarGradError> {
    let a = Value::new(2.0);
    let b = Value::new(-3.0);
    let output = mul_op(&a, &b)?;
    output.backward()?;
    assert_eq!(a.grad(), -3.0);
    assert_eq!(b.grad(), 2.0);
    Ok(())
}

#[test]
fn test_mul_literal_is_symmetric() -> Result<(), ScalarGradError> {
    let a = Value::new(5.0);
    let left = mul_op(4.0, &a)?;
    let right = mul_op(&a, 4.0)?;
    assert_eq!(left.value(), right.value());

    left.backward()?;
    let grad_left = a.grad();
    a.zero_grad();
    right.backward()?;
    assert_eq!(grad_left, 4.0);
    assert_eq!(a.grad(), 4.0);
    Ok(())
}

#[test]
fn test_square_accumulates_both_paths() -> Result<(), ScalarGradError> {
    let x = Value::new(3.0);
    let y = mul_op(&x, &x)?;
    y.backward()?;
    assert_eq!(x.grad(), 2.0 * x.value());
    Ok(())
}
