use crate::error::ScalarGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check parameters: {0}")]
    InvalidParameters(String),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` builds a scalar output from one fresh leaf per entry of `inputs`. For each
/// input `x_i` the numerical gradient `(f(x_i + eps) - f(x_i - eps)) / 2eps` must match the
/// gradient left on the leaf by a backward pass, within `tolerance` (absolute or relative).
///
/// Returns the analytical gradients on success.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidParameters(format!(
            "epsilon must be positive and finite, got {}",
            epsilon
        )));
    }
    if !(tolerance >= 0.0) {
        return Err(GradCheckError::InvalidParameters(format!(
            "tolerance must be non-negative, got {}",
            tolerance
        )));
    }

    // --- 1. Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients, one input at a time ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = perturbed_output(&func, inputs, input_index, epsilon)?;
        let loss_minus = perturbed_output(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let matches = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        );
        if !matches {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical_grads)
}

/// Evaluates `func` on a fresh graph where input `index` is shifted by `delta`.
fn perturbed_output<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let leaves: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| Value::new(if i == index { x + delta } else { x }))
        .collect();
    Ok(func(&leaves)?.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
