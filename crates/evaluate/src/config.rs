//! Evaluation configuration.

use crate::error::EvaluateError;

/// Longest multi-year accumulation window, in years.
pub const MULTIYEAR_WINDOWS: usize = 10;

/// Configuration for the Z-score evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    threshold: f64,
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self { threshold: 0.3 }
    }
}

impl EvaluateConfig {
    /// Set the wet-day threshold (mm). Days at or above it count as wet.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the wet-day threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::InvalidConfig`] if the threshold is negative
    /// or not finite.
    pub fn validate(&self) -> Result<(), EvaluateError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(EvaluateError::InvalidConfig {
                reason: format!(
                    "threshold must be finite and non-negative, got {}",
                    self.threshold
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = EvaluateConfig::default();
        assert_eq!(config.threshold(), 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = EvaluateConfig::default().with_threshold(1.0);
        assert_eq!(config.threshold(), 1.0);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        assert!(
            EvaluateConfig::default()
                .with_threshold(-0.1)
                .validate()
                .is_err()
        );
        assert!(
            EvaluateConfig::default()
                .with_threshold(f64::NAN)
                .validate()
                .is_err()
        );
    }
}
