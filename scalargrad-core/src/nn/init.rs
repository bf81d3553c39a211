use crate::error::ScalarGradError;
use crate::value::Value;
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::Normal;

/// How fresh parameters are drawn.
///
/// The random source is always supplied by the caller; nothing here touches a global
/// RNG, so a seeded `StdRng` gives reproducible models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform in `[low, high]`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    Constant(f64),
}

impl Default for Init {
    /// Uniform in `[-1, 1]`.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks the distribution parameters.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low <= high) {
                    return Err(ScalarGradError::InvalidConfiguration(format!(
                        "uniform init requires finite low <= high, got [{}, {}]",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !(mean.is_finite() && std.is_finite() && std >= 0.0) {
                    return Err(ScalarGradError::InvalidConfiguration(format!(
                        "normal init requires finite mean and std >= 0, got mean={}, std={}",
                        mean, std
                    )));
                }
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(ScalarGradError::InvalidConfiguration(format!(
                        "constant init requires a finite value, got {}",
                        value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws `count` values.
    pub fn sample_n<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<f64>, ScalarGradError> {
        self.validate()?;
        let values = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new_inclusive(low, high);
                (0..count).map(|_| rng.sample(&dist)).collect()
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std)
                    .map_err(|e| ScalarGradError::InvalidConfiguration(e.to_string()))?;
                (0..count).map(|_| rng.sample(&dist)).collect()
            }
            Init::Constant(value) => vec![value; count],
        };
        Ok(values)
    }

    /// Draws a single value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ScalarGradError> {
        Ok(self.sample_n(1, rng)?[0])
    }
}

/// Fills every parameter in place with a draw from `init`. Gradients are left alone.
pub fn init_<R: Rng + ?Sized>(params: &[Value], init: &Init, rng: &mut R) -> Result<(), ScalarGradError> {
    let values = init.sample_n(params.len(), rng)?;
    for (param, value) in params.iter().zip(values) {
        param.set_value(value);
    }
    Ok(())
}

/// Fills every parameter in place with draws from `U[low, high]`.
pub fn uniform_<R: Rng + ?Sized>(
    params: &[Value],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), ScalarGradError> {
    init_(params, &Init::Uniform { low, high }, rng)
}

/// Fills every parameter in place with draws from `N(mean, std^2)`.
pub fn normal_<R: Rng + ?Sized>(
    params: &[Value],
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<(), ScalarGradError> {
    init_(params, &Init::Normal { mean, std }, rng)
}

/// Fills every parameter with 0.
pub fn zeros_(params: &[Value]) {
    for param in params {
        param.set_value(0.0);
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
