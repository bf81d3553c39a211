// Local gradient rules of the operation set.

use crate::ops::Op;

impl Op {
    /// Computes the contribution of a node's gradient to each of its operands.
    ///
    /// This is the chain rule for a single node: given the node's forward value
    /// (`output_value`), the gradient flowing into it (`grad_output`) and the values of
    /// its operands (`inputs`, in operand order), it returns `dL/dInput_i` for each
    /// operand. The result has exactly `self.arity()` entries, in the same order as
    /// `inputs`.
    ///
    /// The rule is a pure function of its arguments; accumulating the contributions
    /// into the operands is the backward driver's job.
    pub(crate) fn backward(&self, output_value: f64, grad_output: f64, inputs: &[f64]) -> Vec<f64> {
        debug_assert_eq!(inputs.len(), self.arity(), "operand count mismatch for {}", self);
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add => vec![grad_output, grad_output],
            Op::Mul => vec![grad_output * inputs[1], grad_output * inputs[0]],
            Op::Pow { exponent } => vec![grad_output * power_derivative(inputs[0], exponent)],
            Op::Exp => vec![grad_output * output_value],
            Op::Tanh => vec![grad_output * (1.0 - output_value * output_value)],
            Op::Relu => {
                if inputs[0] > 0.0 {
                    vec![grad_output]
                } else {
                    vec![0.0]
                }
            }
        }
    }
}

/// `d/da a^p = p * a^(p - 1)`, with the constant case kept at 0 for a zero base.
fn power_derivative(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        0.0
    } else {
        exponent * base.powf(exponent - 1.0)
    }
}
