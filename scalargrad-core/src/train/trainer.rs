use crate::error::ScalarGradError;
use crate::nn::losses::{MseLoss, Reduction};
use crate::nn::module::{to_leaves, Module};
use crate::optim::{Optimizer, SgdOptimizer};
use crate::train::config::TrainConfig;
use crate::value::Value;
use log;

/// One training example: plain inputs and the targets for each model output.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Self {
        Sample { inputs, targets }
    }
}

/// Loss recorded at every epoch, measured before that epoch's update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    pub losses: Vec<f64>,
}

impl TrainingHistory {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Builds the summed squared error of `model` over every sample as one node.
fn loss_node<M: Module + ?Sized>(model: &M, samples: &[Sample]) -> Result<Value, ScalarGradError> {
    let criterion = MseLoss::new(Reduction::Sum);
    let mut total = Value::new(0.0);
    for sample in samples {
        let outputs = model.forward(&to_leaves(&sample.inputs))?;
        let loss = criterion.calculate(&outputs, &sample.targets)?;
        total = total + loss;
    }
    Ok(total)
}

/// Evaluates the summed squared error of `model` over `samples` without touching
/// any gradient.
pub fn total_loss<M: Module + ?Sized>(model: &M, samples: &[Sample]) -> Result<f64, ScalarGradError> {
    Ok(loss_node(model, samples)?.value())
}

/// Runs `model` on plain numbers and returns the output values.
pub fn predict<M: Module + ?Sized>(model: &M, inputs: &[f64]) -> Result<Vec<f64>, ScalarGradError> {
    Ok(model
        .forward(&to_leaves(inputs))?
        .iter()
        .map(Value::value)
        .collect())
}

/// Full-batch gradient descent.
///
/// Each epoch builds one loss node summing the squared error of every sample,
/// clears the parameter gradients, runs a single backward pass and applies one
/// SGD step.
///
/// # Errors
/// * `InvalidConfiguration` if `config` is invalid or `samples` is empty.
/// * Any forward or loss error (e.g. `InputSizeMismatch` for a badly shaped sample).
pub fn fit<M: Module + ?Sized>(
    model: &M,
    samples: &[Sample],
    config: &TrainConfig,
) -> Result<TrainingHistory, ScalarGradError> {
    config.validate()?;
    if samples.is_empty() {
        return Err(ScalarGradError::InvalidConfiguration(
            "training needs at least one sample".to_string(),
        ));
    }

    let mut optimizer = SgdOptimizer::new(
        model.parameters(),
        config.learning_rate,
        config.momentum,
        config.weight_decay,
    )?;
    let mut history = TrainingHistory {
        losses: Vec::with_capacity(config.epochs),
    };

    log::debug!(
        "Training {} parameters on {} samples for {} epochs",
        model.num_parameters(),
        samples.len(),
        config.epochs
    );

    for epoch in 0..config.epochs {
        let loss = loss_node(model, samples)?;

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;

        let loss_value = loss.value();
        history.losses.push(loss_value);

        let last = epoch + 1 == config.epochs;
        if config.log_every > 0 && (epoch % config.log_every == 0 || last) {
            log::info!("epoch {:>4}: loss {:.6}", epoch, loss_value);
        }
    }

    Ok(history)
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
