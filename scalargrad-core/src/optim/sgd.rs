use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use log;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// For every parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d        (v starts at 0)
/// p = p - lr * v
/// ```
///
/// With `momentum == 0` this is the plain `p -= lr * g` update.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One buffer per entry of `params`.
    momentum_buffers: Vec<f64>,
}

fn check_lr(lr: f64) -> Result<(), ScalarGradError> {
    if !(lr.is_finite() && lr > 0.0) {
        return Err(ScalarGradError::InvalidConfiguration(format!(
            "learning rate must be positive and finite, got {}",
            lr
        )));
    }
    Ok(())
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameter nodes to optimize, typically `model.parameters()`.
    /// * `lr`: The learning rate, positive.
    /// * `momentum`: Momentum factor in `[0, 1)`.
    /// * `weight_decay`: L2 penalty factor, non-negative.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
    ) -> Result<Self, ScalarGradError> {
        check_lr(lr)?;
        if !(0.0..1.0).contains(&momentum) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        if !(weight_decay.is_finite() && weight_decay >= 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "weight decay must be non-negative and finite, got {}",
                weight_decay
            )));
        }

        let params: Vec<Value> = params.into_iter().collect();
        let momentum_buffers = vec![0.0; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum,
            weight_decay,
            momentum_buffers,
        })
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        for (index, param) in self.params.iter().enumerate() {
            let grad = param.grad();
            if !grad.is_finite() {
                log::warn!(
                    "Skipping SGD update of parameter {} ({:?}): gradient is {}",
                    index,
                    param.label(),
                    grad
                );
                continue;
            }

            let current = param.value();
            let mut d_p = grad;
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * current;
            }

            let update = if self.momentum != 0.0 {
                let buffer = &mut self.momentum_buffers[index];
                *buffer = self.momentum * *buffer + d_p;
                *buffer
            } else {
                d_p
            };

            param.set_value(current - self.lr * update);
        }
        log::trace!("SGD step applied to {} parameters", self.params.len());
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        check_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}
