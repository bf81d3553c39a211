use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::layers::neuron::{Activation, Neuron};
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// `nout` neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Layer::with_init(nin, nout, activation, &Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nout == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::with_init(nin, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    /// Builds a layer from already constructed neurons.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InvalidConfiguration` if `neurons` is empty or the
    /// neurons disagree on their number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let nin = match neurons.first() {
            Some(first) => first.nin(),
            None => {
                return Err(ScalarGradError::InvalidConfiguration(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "all neurons of a layer must take {} inputs, found one taking {}",
                nin,
                odd.nin()
            )));
        }
        Ok(Layer { neurons })
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
