//! Configuration for decadal transition estimation.

use crate::error::MarkovError;

/// Which row precedes the first row of each decade chunk when counting
/// transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryMode {
    /// The chunk's own last row (flat sequential indexing wraps around).
    ///
    /// Reproduces the reference calibration bit for bit.
    #[default]
    Wrap,
    /// The previous row of the whole record; the record's first row has no
    /// predecessor and contributes no transition.
    Contiguous,
}

/// What to do with a month whose transition probability is 0/0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Keep the cell undefined, log a warning and let it flow into the
    /// simulation (where it always leaves the state).
    #[default]
    Propagate,
    /// Abort estimation with [`MarkovError::DegenerateProbability`].
    Fail,
}

/// Configuration for Markov chain estimation.
///
/// # Example
///
/// ```
/// use dhmc_markov::{BoundaryMode, MarkovConfig};
///
/// let config = MarkovConfig::new()
///     .with_threshold(0.3)
///     .with_boundary(BoundaryMode::Contiguous);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct MarkovConfig {
    threshold: f64,
    boundary: BoundaryMode,
    degenerate: DegeneratePolicy,
}

impl MarkovConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `threshold = 0.3` mm, `boundary = Wrap`,
    /// `degenerate = Propagate`.
    pub fn new() -> Self {
        Self {
            threshold: 0.3,
            boundary: BoundaryMode::Wrap,
            degenerate: DegeneratePolicy::Propagate,
        }
    }

    /// Sets the wet/dry threshold (a day is wet if depth >= threshold).
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the decade boundary handling.
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the degenerate-probability policy.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Returns the wet/dry threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the decade boundary handling.
    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Returns the degenerate-probability policy.
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate
    }

    /// Validates this configuration.
    ///
    /// The threshold must be finite and non-negative.
    pub fn validate(&self) -> Result<(), MarkovError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(MarkovError::InvalidThreshold {
                reason: format!(
                    "threshold must be finite and non-negative, got {}",
                    self.threshold
                ),
            });
        }
        Ok(())
    }
}

impl Default for MarkovConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = MarkovConfig::new();
        assert!((cfg.threshold() - 0.3).abs() < f64::EPSILON);
        assert_eq!(cfg.boundary(), BoundaryMode::Wrap);
        assert_eq!(cfg.degenerate_policy(), DegeneratePolicy::Propagate);
    }

    #[test]
    fn builder_chaining() {
        let cfg = MarkovConfig::new()
            .with_threshold(1.0)
            .with_boundary(BoundaryMode::Contiguous)
            .with_degenerate_policy(DegeneratePolicy::Fail);
        assert!((cfg.threshold() - 1.0).abs() < f64::EPSILON);
        assert_eq!(cfg.boundary(), BoundaryMode::Contiguous);
        assert_eq!(cfg.degenerate_policy(), DegeneratePolicy::Fail);
    }

    #[test]
    fn validate_ok() {
        assert!(MarkovConfig::new().validate().is_ok());
        assert!(MarkovConfig::new().with_threshold(0.0).validate().is_ok());
    }

    #[test]
    fn validate_bad_threshold() {
        for t in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(
                MarkovConfig::new().with_threshold(t).validate().is_err(),
                "threshold {t} should be rejected"
            );
        }
    }
}
