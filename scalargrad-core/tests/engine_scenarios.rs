use approx::{assert_abs_diff_eq, assert_relative_eq};
use scalargrad_core::autograd::{check_grad, topological_sort};
use scalargrad_core::ops::{div_op, pow_op};
use scalargrad_core::{Op, ScalarGradError, Value};

mod common;

#[test]
fn test_square_plus_constant() {
    let x = Value::new(2.0);
    let y = &x * &x + 3.0;
    y.backward().unwrap();
    assert_eq!(y.value(), 7.0);
    assert_eq!(x.grad(), 4.0);
}

#[test]
fn test_classic_neuron() {
    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.881_373_587_019_543, "b");

    let n = &x1 * &w1 + &x2 * &w2 + &b;
    let o = n.tanh();
    o.backward().unwrap();

    assert_relative_eq!(o.value(), 0.707_106_781_186_547_6, epsilon = 1e-12);
    assert_abs_diff_eq!(x1.grad(), -1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(w1.grad(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x2.grad(), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(w2.grad(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.grad(), 0.5, epsilon = 1e-9);
}

#[test]
fn test_neuron_with_exp_expanded_tanh_matches() {
    // tanh written out as (e^2n - 1) / (e^2n + 1) must give the same gradients.
    let x1 = Value::new(2.0);
    let w1 = Value::new(-3.0);
    let b = Value::new(6.881_373_587_019_543);
    let n = &x1 * &w1 + &b;
    let e = (&n * 2.0).exp();
    let o = div_op(&e - 1.0, &e + 1.0).unwrap();
    o.backward().unwrap();

    assert_relative_eq!(o.value(), 0.707_106_781_186_547_6, epsilon = 1e-12);
    assert_abs_diff_eq!(x1.grad(), -1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(w1.grad(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_accumulation_law() {
    for v in [-3.0, -0.5, 0.0, 1.25, 10.0] {
        let x = Value::new(v);
        let y = &x * &x;
        y.backward().unwrap();
        assert_eq!(x.grad(), 2.0 * v);
    }
}

#[test]
fn test_second_pass_doubles_every_gradient() {
    let a = Value::new(-4.0);
    let b = Value::new(2.0);
    let c = &a + &b;
    let d = &a * &b + b.pow(3.0).unwrap();
    let e = (&c * &d).tanh() + d.relu();
    let nodes = [a.clone(), b.clone(), c.clone(), d.clone(), e.clone()];

    e.backward().unwrap();
    let first: Vec<f64> = nodes.iter().map(Value::grad).collect();
    e.backward().unwrap();
    for (node, g) in nodes.iter().zip(first) {
        assert_relative_eq!(node.grad(), 2.0 * g);
    }
}

#[test]
fn test_relu_subgradient() {
    for (input, expected) in [(-1.0, 0.0), (0.0, 0.0), (2.0, 1.0)] {
        let x = Value::new(input);
        let y = x.relu();
        y.backward().unwrap();
        assert_eq!(x.grad(), expected, "relu'({})", input);
    }
}

#[test]
fn test_processing_order() {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let c = &a * &b;
    let d = &c + &a;
    let e = d.exp() * &c;

    let order = topological_sort(&e).unwrap();
    assert_eq!(order.len(), 6);
    assert!(order.last().unwrap().ptr_eq(&e));
    let position = |v: &Value| order.iter().position(|n| n.ptr_eq(v)).unwrap();
    for node in &order {
        for operand in node.operands() {
            assert!(position(&operand) < position(node));
        }
    }
}

#[test]
fn test_finite_difference_agreement() {
    let grads = check_grad(
        |v| {
            let (a, b, c) = (&v[0], &v[1], &v[2]);
            let z = div_op(a * b - c.exp(), pow_op(b, 2.0)? + 1.0)?;
            Ok((z.tanh() + (a - c).relu()) * a)
        },
        &[0.7, -1.3, 0.2],
        1e-6,
        1e-5,
    )
    .unwrap();
    assert_eq!(grads.len(), 3);
}

#[test]
fn test_domain_errors_create_no_node() {
    let zero = Value::new(0.0);
    let neg = Value::new(-2.0);
    assert!(matches!(div_op(1.0, &zero), Err(ScalarGradError::DomainError { .. })));
    assert!(matches!(pow_op(&neg, 0.5), Err(ScalarGradError::DomainError { .. })));
    assert!(matches!(pow_op(&zero, -1.0), Err(ScalarGradError::DomainError { .. })));
    assert!(matches!(
        div_op(&neg, f64::INFINITY),
        Err(ScalarGradError::InvalidOperand { .. })
    ));
    assert_eq!(pow_op(&neg, 2.0).unwrap().value(), 4.0);
}

#[test]
fn test_operation_tags_are_inspectable() {
    let x = Value::new(3.0);
    let y = -&x;
    assert_eq!(y.op(), Op::Mul);
    assert_eq!(y.operands()[1].value(), -1.0);
    assert!(y.operands()[1].is_leaf());
    let z = &x / 2.0;
    assert_eq!(z.op(), Op::Mul);
    assert_eq!(z.operands()[1].op(), Op::Pow { exponent: -1.0 });
}

#[test]
fn test_dropping_a_deep_chain() {
    let x = Value::new(0.0);
    let mut y = x.clone();
    for _ in 0..200_000 {
        y = &y + 1.0;
    }
    assert_eq!(y.value(), 200_000.0);
    drop(y);
    assert_eq!(x.value(), 0.0);
}
