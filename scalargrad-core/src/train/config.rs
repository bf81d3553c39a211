use crate::error::ScalarGradError;

/// Hyper-parameters of [`fit`](crate::train::fit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub momentum: f64,
    pub weight_decay: f64,
    /// An `info` line is logged every `log_every` epochs (and for the last one).
    /// 0 disables epoch logging.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 20,
            learning_rate: 0.1,
            momentum: 0.0,
            weight_decay: 0.0,
            log_every: 1,
        }
    }
}

impl TrainConfig {
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// Checks the values before any graph is built.
    ///
    /// The optimizer hyper-parameters follow the rules of
    /// [`SgdOptimizer::new`](crate::optim::SgdOptimizer::new).
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.epochs == 0 {
            return Err(ScalarGradError::InvalidConfiguration(
                "epochs must be at least 1".to_string(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        if !(self.weight_decay.is_finite() && self.weight_decay >= 0.0) {
            return Err(ScalarGradError::InvalidConfiguration(format!(
                "weight decay must be non-negative and finite, got {}",
                self.weight_decay
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_demo() {
        let config = TrainConfig::default();
        assert_eq!(config.epochs, 20);
        assert_eq!(config.learning_rate, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = TrainConfig::default()
            .with_epochs(5)
            .with_learning_rate(0.05)
            .with_momentum(0.5)
            .with_weight_decay(1e-4)
            .with_log_every(0);
        assert_eq!(
            config,
            TrainConfig {
                epochs: 5,
                learning_rate: 0.05,
                momentum: 0.5,
                weight_decay: 1e-4,
                log_every: 0,
            }
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = TrainConfig::default();
        for config in [
            base.with_epochs(0),
            base.with_learning_rate(0.0),
            base.with_learning_rate(f64::INFINITY),
            base.with_momentum(1.0),
            base.with_weight_decay(-0.1),
        ] {
            assert!(
                matches!(config.validate(), Err(ScalarGradError::InvalidConfiguration(_))),
                "{:?} should be rejected",
                config
            );
        }
    }
}
