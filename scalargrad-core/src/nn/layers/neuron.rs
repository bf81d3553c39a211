use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// Identity; the weighted sum is returned as is.
    Linear,
}

impl Activation {
    pub fn apply(&self, x: &Value) -> Value {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
            Activation::Linear => x.clone(),
        }
    }
}

/// A single unit: `activation(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs, weights and bias drawn from `U[-1, 1]`.
    pub fn new<R: Rng + ?Sized>(nin: usize, activation: Activation, rng: &mut R) -> Result<Self, ScalarGradError> {
        Neuron::with_init(nin, activation, &Init::default(), rng)
    }

    /// Creates a neuron with `nin` inputs whose parameters are drawn from `init`.
    pub fn with_init<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let mut values = init.sample_n(nin + 1, rng)?;
        let bias = values.pop().unwrap_or_default();
        Ok(Neuron::from_parameters(values, bias, activation))
    }

    /// Creates a neuron from explicit parameter values.
    pub fn from_parameters(weights: Vec<f64>, bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.into_iter().map(Value::new).collect(),
            bias: Value::new(bias),
            activation,
        }
    }

    /// Number of inputs.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Builds the neuron's output node for `inputs`.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.nin() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.nin(),
                actual: inputs.len(),
                context: "Neuron::forward".to_string(),
            });
        }
        let weighted: Value = self.weights.iter().zip(inputs).map(|(w, x)| w * x).sum();
        let pre_activation = weighted + &self.bias;
        Ok(self.activation.apply(&pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        named.push(("bias".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
