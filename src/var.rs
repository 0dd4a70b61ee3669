//! Value at Risk (VaR) estimators
//!
//! Implements three interchangeable methodologies over a single return series:
//! - Historical VaR: empirical quantile of past returns
//! - Parametric VaR: assumes normal returns (VaR = -(mu + sigma * z) * sqrt(T))
//! - Monte Carlo VaR: quantile of returns simulated from a fitted normal
//!
//! All estimators share the same conventions: the input is a series of
//! single-period simple returns, the result is a positive loss magnitude,
//! and multi-period horizons are scaled by sqrt(time_horizon) under the
//! i.i.d. assumption.

use crate::error::{Result, RiskError};
use crate::stats;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Validate the parameters shared by every estimator
pub(crate) fn validate_params(confidence_level: f64, time_horizon: u32) -> Result<()> {
    if confidence_level <= 0.0 || confidence_level >= 1.0 {
        return Err(RiskError::InvalidConfidenceLevel(confidence_level));
    }

    if time_horizon == 0 {
        return Err(RiskError::InvalidTimeHorizon(time_horizon));
    }

    Ok(())
}

/// Calculate Historical VaR from the empirical return distribution
///
/// Formula: VaR = -quantile(returns, 1 - confidence_level) * sqrt(T)
///
/// The quantile uses linear interpolation between order statistics
/// (see [`stats::quantile`]), so the result is reproducible bit-for-bit
/// against any reference implementation using the same rule.
pub fn historical_var(returns: &[f64], confidence_level: f64, time_horizon: u32) -> Result<f64> {
    validate_params(confidence_level, time_horizon)?;

    if returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "Historical VaR requires a non-empty return series".to_string(),
        ));
    }

    let tail_return = stats::quantile(returns, 1.0 - confidence_level)?;

    Ok(-tail_return * (time_horizon as f64).sqrt())
}

/// Calculate Parametric VaR assuming normally distributed returns
///
/// Formula: VaR = -(mu + sigma * z) * sqrt(T)
/// where z is the standard normal quantile at 1 - confidence_level
/// (negative for confidence levels above 0.5).
///
/// A constant series (sigma = 0) has no tail to measure; the chosen policy
/// is to fail with [`RiskError::DegenerateDistribution`] rather than return 0.
pub fn parametric_var(returns: &[f64], confidence_level: f64, time_horizon: u32) -> Result<f64> {
    validate_params(confidence_level, time_horizon)?;

    if returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "Parametric VaR requires a non-empty return series".to_string(),
        ));
    }

    let mu = stats::mean(returns);
    let sigma = stats::std_dev(returns);

    if sigma == 0.0 {
        return Err(RiskError::DegenerateDistribution(
            "Return series has zero variance".to_string(),
        ));
    }

    let z_score = stats::normal_quantile(1.0 - confidence_level)?;
    let var_single_period = -(mu + sigma * z_score);

    Ok(var_single_period * (time_horizon as f64).sqrt())
}

/// Calculate Monte Carlo VaR from a fitted normal distribution
///
/// Fits N(mu, sigma) to the input series, draws `num_simulations` i.i.d.
/// single-period returns, and reports the negated empirical quantile of the
/// simulated distribution scaled by sqrt(T).
///
/// Returns the VaR together with the raw (unscaled, single-period) simulated
/// sample so that a CVaR computed in the same evaluation can condition on
/// exactly the same draw; see [`monte_carlo_cvar_from_sample`].
///
/// [`monte_carlo_cvar_from_sample`]: crate::monte_carlo_cvar_from_sample
///
/// `seed` makes the draw reproducible; `None` seeds from entropy.
pub fn monte_carlo_var(
    returns: &[f64],
    confidence_level: f64,
    time_horizon: u32,
    num_simulations: usize,
    seed: Option<u64>,
) -> Result<(f64, Vec<f64>)> {
    validate_params(confidence_level, time_horizon)?;

    if returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "Monte Carlo VaR requires a non-empty return series".to_string(),
        ));
    }

    if num_simulations == 0 {
        return Err(RiskError::InvalidSimulationCount(num_simulations));
    }

    let mu = stats::mean(returns);
    let sigma = stats::std_dev(returns);

    if sigma == 0.0 {
        return Err(RiskError::DegenerateDistribution(
            "Return series has zero variance".to_string(),
        ));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let normal = Normal::new(mu, sigma)
        .map_err(|e| RiskError::CalculationError(e.to_string()))?;

    let mut simulated_returns = Vec::with_capacity(num_simulations);
    for _ in 0..num_simulations {
        simulated_returns.push(normal.sample(&mut rng));
    }

    let tail_return = stats::quantile(&simulated_returns, 1.0 - confidence_level)?;
    let var = -tail_return * (time_horizon as f64).sqrt();

    Ok((var, simulated_returns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn create_test_returns() -> Vec<f64> {
        vec![
            -0.02, -0.01, 0.0, 0.01, 0.03, -0.015, 0.02, -0.03, 0.005, 0.01,
        ]
    }

    #[test]
    fn test_historical_var_reference_value() {
        let returns = create_test_returns();

        // 5th percentile interpolates between -0.03 and -0.02 at position 0.45
        let var = historical_var(&returns, 0.95, 1).unwrap();
        assert_relative_eq!(var, 0.0255, epsilon = 1e-12);
    }

    #[test]
    fn test_historical_var_time_scaling() {
        let returns = create_test_returns();

        let var_1d = historical_var(&returns, 0.95, 1).unwrap();
        let var_10d = historical_var(&returns, 0.95, 10).unwrap();
        assert_relative_eq!(var_10d, var_1d * 10.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_historical_var_monotone_in_confidence() {
        let returns = create_test_returns();

        let var_90 = historical_var(&returns, 0.90, 1).unwrap();
        let var_95 = historical_var(&returns, 0.95, 1).unwrap();
        let var_99 = historical_var(&returns, 0.99, 1).unwrap();
        assert!(var_90 <= var_95);
        assert!(var_95 <= var_99);
    }

    #[test]
    fn test_historical_var_empty_series() {
        let result = historical_var(&[], 0.95, 1);
        assert!(matches!(result, Err(RiskError::InsufficientData(_))));
    }

    #[test]
    fn test_parametric_var() {
        let returns = create_test_returns();

        let mu = stats::mean(&returns);
        let sigma = stats::std_dev(&returns);
        let z = stats::normal_quantile(0.05).unwrap();

        let var = parametric_var(&returns, 0.95, 1).unwrap();
        assert_relative_eq!(var, -(mu + sigma * z), epsilon = 1e-12);
        assert!(var > 0.0);
    }

    #[test]
    fn test_parametric_var_time_scaling() {
        let returns = create_test_returns();

        let var_1d = parametric_var(&returns, 0.95, 1).unwrap();
        let var_4d = parametric_var(&returns, 0.95, 4).unwrap();
        assert_relative_eq!(var_4d, var_1d * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parametric_var_degenerate_series() {
        let constant = vec![0.01; 50];
        let result = parametric_var(&constant, 0.95, 1);
        assert!(matches!(result, Err(RiskError::DegenerateDistribution(_))));
    }

    #[test]
    fn test_monte_carlo_var_seeded_reproducibility() {
        let returns = create_test_returns();

        let (var_a, sample_a) = monte_carlo_var(&returns, 0.95, 1, 10_000, Some(42)).unwrap();
        let (var_b, sample_b) = monte_carlo_var(&returns, 0.95, 1, 10_000, Some(42)).unwrap();

        assert_eq!(var_a, var_b);
        assert_eq!(sample_a, sample_b);
        assert_eq!(sample_a.len(), 10_000);
    }

    #[test]
    fn test_monte_carlo_var_different_seeds_differ() {
        let returns = create_test_returns();

        let (var_a, _) = monte_carlo_var(&returns, 0.95, 1, 10_000, Some(1)).unwrap();
        let (var_b, _) = monte_carlo_var(&returns, 0.95, 1, 10_000, Some(2)).unwrap();
        assert_ne!(var_a, var_b);
    }

    #[test]
    fn test_monte_carlo_var_zero_simulations() {
        let returns = create_test_returns();

        let result = monte_carlo_var(&returns, 0.95, 1, 0, Some(42));
        assert!(matches!(result, Err(RiskError::InvalidSimulationCount(0))));
    }

    #[test]
    fn test_monte_carlo_var_time_scaling_same_seed() {
        let returns = create_test_returns();

        // Same seed draws the same sample, so scaling is exact
        let (var_1d, _) = monte_carlo_var(&returns, 0.95, 1, 5_000, Some(7)).unwrap();
        let (var_9d, _) = monte_carlo_var(&returns, 0.95, 9, 5_000, Some(7)).unwrap();
        assert_relative_eq!(var_9d, var_1d * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_confidence_level() {
        let returns = create_test_returns();

        assert!(historical_var(&returns, 1.5, 1).is_err());
        assert!(historical_var(&returns, 0.0, 1).is_err());
        assert!(parametric_var(&returns, -0.1, 1).is_err());
        assert!(monte_carlo_var(&returns, 1.0, 1, 100, None).is_err());
    }

    #[test]
    fn test_invalid_time_horizon() {
        let returns = create_test_returns();

        assert!(matches!(
            historical_var(&returns, 0.95, 0),
            Err(RiskError::InvalidTimeHorizon(0))
        ));
    }
}
