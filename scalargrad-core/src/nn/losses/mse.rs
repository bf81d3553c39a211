// src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{div_op, pow_op, sub_op};
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the per-element squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfiguration(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// The loss is built from ordinary graph nodes, so calling `backward()` on it
/// propagates into the predictions and whatever produced them.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds `reduce((p_i - t_i)^2)` over paired predictions and targets.
    ///
    /// # Errors
    /// * `InputSizeMismatch` if the slices differ in length.
    /// * `DomainError` for a mean over zero elements.
    /// * `InvalidOperand` if a target is not finite.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                context: "MseLoss::calculate (targets)".to_string(),
            });
        }

        let mut total = Value::new(0.0);
        for (p, &t) in predictions.iter().zip(targets) {
            let squared = pow_op(sub_op(p, t)?, 2.0)?;
            total = total + squared;
        }

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                if predictions.is_empty() {
                    return Err(ScalarGradError::domain("mse", "mean over zero elements"));
                }
                div_op(total, predictions.len() as f64)
            }
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
