//! Numeric utilities shared by the estimators
//!
//! Provides the small set of statistics the VaR/CVaR formulas need:
//! - Sample mean and population standard deviation
//! - Empirical quantile with linear interpolation between order statistics
//! - Standard normal quantile (inverse CDF) and density

use crate::error::{Result, RiskError};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Arithmetic mean of a slice
///
/// Returns 0.0 for an empty slice; callers validate emptiness where it matters.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation (divisor N, not N-1)
///
/// The population convention matters for reproducibility: the parametric and
/// Monte Carlo estimators fit sigma with this exact divisor.
pub fn std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mu = mean(data);
    let variance = data.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Empirical quantile with linear interpolation between order statistics
///
/// Uses the rule: position = q * (n - 1); the result is interpolated
/// linearly between the order statistics bracketing that position. This
/// matches the common "linear" quantile definition, so results are
/// reproducible across implementations.
///
/// `q` must lie in [0, 1]; the input does not need to be sorted.
pub fn quantile(data: &[f64], q: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(RiskError::InsufficientData(
            "Cannot compute a quantile of an empty series".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&q) {
        return Err(RiskError::InvalidParameter(format!(
            "Quantile level {} outside [0, 1]",
            q
        )));
    }

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;

    if lower == upper {
        return Ok(sorted[lower]);
    }

    let weight = position - lower as f64;
    Ok(sorted[lower] + weight * (sorted[upper] - sorted[lower]))
}

/// Standard normal quantile (inverse CDF) at probability `p`
pub fn normal_quantile(p: f64) -> Result<f64> {
    if p <= 0.0 || p >= 1.0 {
        return Err(RiskError::InvalidParameter(format!(
            "Probability {} outside (0, 1)",
            p
        )));
    }

    let standard_normal = Normal::new(0.0, 1.0)
        .map_err(|e| RiskError::CalculationError(e.to_string()))?;

    Ok(standard_normal.inverse_cdf(p))
}

/// Standard normal probability density at `x`
pub fn normal_pdf(x: f64) -> Result<f64> {
    let standard_normal = Normal::new(0.0, 1.0)
        .map_err(|e| RiskError::CalculationError(e.to_string()))?;

    Ok(standard_normal.pdf(x))
}
