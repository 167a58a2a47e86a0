//! Configuration for the wet-day amount model.

use crate::error::AmountError;

/// How the normal draw of the monthly wet-day standard deviation is turned
/// into a standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdScale {
    /// Use the normal draw as the standard deviation itself.
    #[default]
    Linear,
    /// Treat the normal draw as a log-standard-deviation and exponentiate it.
    Log,
}

/// Configuration for amount estimation and sampling.
///
/// # Example
///
/// ```
/// use dhmc_amount::{AmountConfig, StdScale};
///
/// let config = AmountConfig::new()
///     .with_threshold(0.3)
///     .with_std_scale(StdScale::Log);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct AmountConfig {
    threshold: f64,
    min_sample: usize,
    std_scale: StdScale,
}

impl AmountConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `threshold = 0.3` mm, `min_sample = 2`,
    /// `std_scale = Linear`.
    pub fn new() -> Self {
        Self {
            threshold: 0.3,
            min_sample: 2,
            std_scale: StdScale::Linear,
        }
    }

    /// Sets the wet-day threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the sample size a (month, year) must exceed to yield statistics.
    pub fn with_min_sample(mut self, min_sample: usize) -> Self {
        self.min_sample = min_sample;
        self
    }

    /// Sets how the drawn standard deviation is scaled.
    pub fn with_std_scale(mut self, std_scale: StdScale) -> Self {
        self.std_scale = std_scale;
        self
    }

    /// Returns the wet-day threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the minimum sample size.
    pub fn min_sample(&self) -> usize {
        self.min_sample
    }

    /// Returns the standard deviation scale.
    pub fn std_scale(&self) -> StdScale {
        self.std_scale
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), AmountError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(AmountError::InvalidConfig {
                reason: format!(
                    "threshold must be finite and non-negative, got {}",
                    self.threshold
                ),
            });
        }
        Ok(())
    }
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AmountConfig::default();
        assert!((cfg.threshold() - 0.3).abs() < f64::EPSILON);
        assert_eq!(cfg.min_sample(), 2);
        assert_eq!(cfg.std_scale(), StdScale::Linear);
    }

    #[test]
    fn builder() {
        let cfg = AmountConfig::new()
            .with_threshold(1.0)
            .with_min_sample(4)
            .with_std_scale(StdScale::Log);
        assert!((cfg.threshold() - 1.0).abs() < f64::EPSILON);
        assert_eq!(cfg.min_sample(), 4);
        assert_eq!(cfg.std_scale(), StdScale::Log);
    }

    #[test]
    fn validate_threshold() {
        assert!(AmountConfig::new().validate().is_ok());
        assert!(AmountConfig::new().with_threshold(-0.5).validate().is_err());
        assert!(AmountConfig::new().with_threshold(f64::NAN).validate().is_err());
    }
}
