//! Conditional Value at Risk (CVaR / Expected Shortfall) estimators
//!
//! CVaR is the expected loss magnitude conditional on the loss exceeding
//! VaR, so each estimator here pairs with the matching VaR estimator:
//! - Historical CVaR conditions the empirical series on the historical
//!   VaR threshold
//! - Parametric CVaR is the closed-form expected shortfall under the
//!   normal assumption
//! - Monte Carlo CVaR conditions the exact simulated sample drawn for
//!   Monte Carlo VaR, never a fresh draw, so the two stay numerically
//!   consistent within one evaluation
//!
//! Where a CVaR reuses a VaR output, the dependency is an explicit function
//! parameter ([`historical_cvar_with_var`], [`monte_carlo_cvar_from_sample`])
//! rather than an implicit call-ordering convention.

use crate::error::{Result, RiskError};
use crate::stats;
use crate::var;

/// Calculate Historical CVaR from the empirical return distribution
///
/// Computes historical VaR internally and delegates to
/// [`historical_cvar_with_var`]. Use that entry point directly when the VaR
/// for the same parameters is already in hand.
pub fn historical_cvar(returns: &[f64], confidence_level: f64, time_horizon: u32) -> Result<f64> {
    let var_value = var::historical_var(returns, confidence_level, time_horizon)?;
    historical_cvar_with_var(returns, var_value, time_horizon)
}

/// Calculate Historical CVaR given a horizon-scaled historical VaR
///
/// The single-period threshold is recovered as var / sqrt(T), which is
/// consistent only under the i.i.d. square-root-of-time scaling assumption
/// shared by every estimator in this crate. Returns at or below the negated
/// threshold form the tail; CVaR is the mean of their absolute values,
/// rescaled by sqrt(T).
pub fn historical_cvar_with_var(returns: &[f64], var: f64, time_horizon: u32) -> Result<f64> {
    if time_horizon == 0 {
        return Err(RiskError::InvalidTimeHorizon(time_horizon));
    }

    if returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "Historical CVaR requires a non-empty return series".to_string(),
        ));
    }

    let time_scaling = (time_horizon as f64).sqrt();
    let threshold = -var / time_scaling;

    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= threshold).collect();

    if tail.is_empty() {
        return Err(RiskError::InsufficientTailSamples { threshold });
    }

    let mean_tail_loss = stats::mean(&tail).abs();

    Ok(mean_tail_loss * time_scaling)
}

/// Calculate Parametric CVaR (closed-form expected shortfall)
///
/// Formula: CVaR = |mu + sigma * phi(z) / (1 - confidence_level)| * sqrt(T)
/// where phi is the standard normal density and z the same quantile used by
/// the parametric VaR.
///
/// Same degenerate-sigma policy as [`parametric_var`](crate::parametric_var): a zero-variance
/// series fails with [`RiskError::DegenerateDistribution`].
pub fn parametric_cvar(returns: &[f64], confidence_level: f64, time_horizon: u32) -> Result<f64> {
    var::validate_params(confidence_level, time_horizon)?;

    if returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "Parametric CVaR requires a non-empty return series".to_string(),
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
    let density = stats::normal_pdf(z_score)?;

    let cvar_single_period = (mu + sigma * density / (1.0 - confidence_level)).abs();

    Ok(cvar_single_period * (time_horizon as f64).sqrt())
}

/// Calculate Monte Carlo CVaR with a fresh simulation
///
/// Draws the sample via [`monte_carlo_var`](crate::monte_carlo_var) and conditions it on the
/// resulting VaR through [`monte_carlo_cvar_from_sample`], so the returned
/// CVaR and sample come from a single draw. Returns the CVaR together with
/// the simulated sample for downstream presentation.
pub fn monte_carlo_cvar(
    returns: &[f64],
    confidence_level: f64,
    time_horizon: u32,
    num_simulations: usize,
    seed: Option<u64>,
) -> Result<(f64, Vec<f64>)> {
    let (var_value, simulated_returns) =
        var::monte_carlo_var(returns, confidence_level, time_horizon, num_simulations, seed)?;

    let cvar = monte_carlo_cvar_from_sample(var_value, &simulated_returns)?;

    Ok((cvar, simulated_returns))
}

/// Calculate Monte Carlo CVaR from an existing simulated sample
///
/// `var` must be the VaR computed from this exact sample. The tail is every
/// simulated return at or below -var; CVaR is the mean of the tail's
/// absolute values.
pub fn monte_carlo_cvar_from_sample(var: f64, simulated_returns: &[f64]) -> Result<f64> {
    if simulated_returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "Monte Carlo CVaR requires a non-empty simulated sample".to_string(),
        ));
    }

    let threshold = -var;
    let tail: Vec<f64> = simulated_returns
        .iter()
        .copied()
        .filter(|r| *r <= threshold)
        .collect();

    if tail.is_empty() {
        return Err(RiskError::InsufficientTailSamples { threshold });
    }

    Ok(stats::mean(&tail).abs())
}
