//! Correlated monthly draw of wet-day mean/std and wet-day depth sampling.

use dhmc_stats::round_to;
use rand::Rng;
use rand_distr::{Distribution, Gamma, LogNormal, Normal};

use crate::config::StdScale;
use crate::gamma::GammaParams;
use crate::lognormal::MonthlyLogNormal;

/// Draws one month's gamma parameters from the log-normal model.
///
/// The wet-day mean is drawn from `LogNormal(mu_mean, sigma_mean)`, then
/// the standard deviation from a normal conditioned on the mean's log
/// through `corr`. The pair becomes gamma parameters by moment matching.
///
/// Returns `None` (a degenerate month) when the correlation is undefined
/// or the drawn moments cannot parameterise a gamma distribution.
pub fn draw_month_gamma<R: Rng + ?Sized>(
    params: &MonthlyLogNormal,
    std_scale: StdScale,
    rng: &mut R,
) -> Option<GammaParams> {
    let mean = LogNormal::new(params.mu_mean, params.sigma_mean)
        .ok()?
        .sample(rng);
    let corr = params.corr?;

    let shift = if params.sigma_mean > 0.0 {
        params.sigma_std * corr * (mean.ln() - params.mu_mean) / params.sigma_mean
    } else {
        0.0
    };
    let spread = (1.0 - corr * corr).max(0.0).sqrt() * params.sigma_std;
    let draw = Normal::new(params.mu_std + shift, spread).ok()?.sample(rng);
    let std = match std_scale {
        StdScale::Linear => draw,
        StdScale::Log => draw.exp(),
    };
    GammaParams::from_moments(mean, std * std)
}

/// Smallest two-decimal depth not below `threshold`.
pub fn min_wet_depth(threshold: f64) -> f64 {
    let r = round_to(threshold, 2);
    if r < threshold {
        round_to(r + 0.01, 2)
    } else {
        r
    }
}

/// Wet-day depth sampler for one month block.
///
/// Samples are `max(threshold, Gamma(shape, scale))` rounded to two
/// decimals and never below the threshold. A degenerate month yields the
/// threshold depth on every wet day.
#[derive(Debug, Clone)]
pub struct WetDayAmount {
    dist: Option<Gamma<f64>>,
    threshold: f64,
    floor: f64,
}

impl WetDayAmount {
    /// Creates a sampler; `None` parameters make it degenerate.
    pub fn new(params: Option<GammaParams>, threshold: f64) -> Self {
        Self {
            dist: params.and_then(|p| Gamma::new(p.shape(), p.scale()).ok()),
            threshold,
            floor: min_wet_depth(threshold),
        }
    }

    /// Draws gamma parameters for a month and wraps them in a sampler.
    pub fn draw<R: Rng + ?Sized>(
        params: &MonthlyLogNormal,
        std_scale: StdScale,
        threshold: f64,
        rng: &mut R,
    ) -> Self {
        Self::new(draw_month_gamma(params, std_scale, rng), threshold)
    }

    /// `true` when every wet day gets the threshold depth.
    pub fn is_degenerate(&self) -> bool {
        self.dist.is_none()
    }

    /// Samples one wet-day depth.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.dist {
            Some(dist) => round_to(dist.sample(rng).max(self.threshold), 2).max(self.floor),
            None => self.floor,
        }
    }
}
