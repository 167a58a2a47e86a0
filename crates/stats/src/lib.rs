//! Statistical helper functions for the DHMC rainfall generator.
//!
//! Spread statistics use the population (N) denominator throughout, since
//! every moment in the calibration and validation tables is a population
//! moment over a complete set of years, months or replicates.

/// Arithmetic mean of a slice. Returns NaN if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance (N denominator). Returns NaN if empty.
pub fn pop_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let nf = data.len() as f64;
    let m = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / nf
}

/// Population standard deviation (N denominator). Returns NaN if empty.
pub fn pop_sd(data: &[f64]) -> f64 {
    pop_variance(data).sqrt()
}

/// Pearson correlation coefficient.
///
/// Filters to indices where both `x[i]` and `y[i]` are finite.
/// Returns `None` if fewer than 2 finite pairs or if either series is
/// constant (zero denominator).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = (sum_xx * sum_yy).sqrt();
    if denom == 0.0 {
        return None;
    }

    // Clamp away rounding excursions past +/-1.
    Some((sum_xy / denom).clamp(-1.0, 1.0))
}

/// Rounds `x` to `decimals` decimal places (half away from zero).
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

/// Natural log of `x` when strictly positive, `0.0` otherwise.
///
/// Zero-valued monthly statistics (months without enough wet days) stay
/// zero in log space instead of becoming `-inf`.
pub fn ln_or_zero(x: f64) -> f64 {
    if x > 0.0 { x.ln() } else { 0.0 }
}
