use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::layers::layer::Layer;
use crate::nn::layers::neuron::Activation;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// Multi-layer perceptron: layers applied one after another.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP taking `nin` inputs with one layer per entry of `nouts`, tanh
    /// everywhere and parameters drawn from `U[-1, 1]`.
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use scalargrad_core::nn::{Mlp, Module};
    ///
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let model = Mlp::new(3, &[4, 4, 1], &mut rng).unwrap();
    /// assert_eq!(model.num_parameters(), 41);
    /// ```
    pub fn new<R: Rng + ?Sized>(nin: usize, nouts: &[usize], rng: &mut R) -> Result<Self, ScalarGradError> {
        Mlp::with_activations(nin, nouts, Activation::Tanh, Activation::Tanh, &Init::default(), rng)
    }

    /// Creates an MLP with `hidden` on every layer but the last, which uses `output`.
    pub fn with_activations<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        hidden: Activation,
        output: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(nouts.len());
        let mut fan_in = nin;
        for (i, &nout) in nouts.iter().enumerate() {
            let activation = if i + 1 == nouts.len() { output } else { hidden };
            layers.push(Layer::with_init(fan_in, nout, activation, init, rng)?);
            fan_in = nout;
        }
        Ok(Mlp { layers })
    }

    /// Builds an MLP from layers whose sizes line up.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[0].nout() != pair[1].nin() {
                return Err(ScalarGradError::InvalidConfiguration(format!(
                    "layer producing {} outputs cannot feed a layer taking {} inputs",
                    pair[0].nout(),
                    pair[1].nin()
                )));
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
