use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// Parameters are ordinary leaf [`Value`]s. `parameters()` hands out shared handles to
/// them, so an optimizer updating those handles updates the module itself.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building new graph nodes on top of `inputs` and the
    /// module's parameters.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InputSizeMismatch` if `inputs` does not have the
    /// number of entries the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns all learnable parameters of the module, including those of sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. "layers.0.neurons.1.weight.2").
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient accumulator of every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Wraps plain numbers as constant leaves to feed a module.
pub fn to_leaves(inputs: &[f64]) -> Vec<Value> {
    inputs.iter().map(|&x| Value::new(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock Module pour les tests
    #[derive(Debug)]
    struct MockModule {
        param: Value,
    }

    impl Module for MockModule {
        fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
            Ok(inputs.iter().map(|x| x * &self.param).collect())
        }

        fn parameters(&self) -> Vec<Value> {
            vec![self.param.clone()]
        }

        fn named_parameters(&self) -> Vec<(String, Value)> {
            vec![("param".to_string(), self.param.clone())]
        }
    }

    #[test]
    fn test_default_zero_grad_resets_parameters() {
        let module = MockModule {
            param: Value::new(2.0),
        };
        let out = module.forward(&to_leaves(&[3.0])).unwrap();
        out[0].backward().unwrap();
        assert_eq!(module.param.grad(), 3.0);

        module.zero_grad();
        assert_eq!(module.param.grad(), 0.0);
        assert_eq!(module.num_parameters(), 1);
    }

    #[test]
    fn test_parameters_share_nodes_with_module() {
        let module = MockModule {
            param: Value::new(1.0),
        };
        module.parameters()[0].set_value(5.0);
        assert_eq!(module.param.value(), 5.0);
    }
}
