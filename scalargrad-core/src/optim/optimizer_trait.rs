use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// An optimizer holds shared handles to the parameter nodes it manages, so updating
/// them updates the model that handed them out.
pub trait Optimizer {
    /// Performs a single optimization step using the gradients currently stored on
    /// the parameters.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate across backward passes, so this is called once per
    /// iteration before the next backward pass.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError>;
}
