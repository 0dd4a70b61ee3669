//! Return-series preprocessing
//!
//! Turns raw price series into the simple period-over-period returns the
//! estimators consume, and collapses multiple asset return series into a
//! single weighted portfolio series.

use crate::error::{Result, RiskError};
use nalgebra::DVector;
use std::collections::BTreeSet;

/// Tolerance for the portfolio-weights-sum-to-one check
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Convert a price series into simple returns: (p_t / p_{t-1}) - 1
///
/// Requires at least two strictly positive prices; the output has one fewer
/// element than the input.
pub fn simple_returns(prices: &[f64]) -> Result<Vec<f64>> {
    if prices.len() < 2 {
        return Err(RiskError::InsufficientData(format!(
            "Need at least 2 prices to compute returns, got {}",
            prices.len()
        )));
    }

    if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
        return Err(RiskError::InvalidParameter(
            "Prices must be finite and strictly positive".to_string(),
        ));
    }

    Ok(prices
        .windows(2)
        .map(|pair| pair[1] / pair[0] - 1.0)
        .collect())
}

/// Combine per-asset return series into one weighted portfolio series
///
/// Every asset series must have the same length, and the weights must sum
/// to 1.0 within a small tolerance. The portfolio return for each period is
/// the weighted sum of that period's asset returns.
pub fn portfolio_returns(asset_returns: &[Vec<f64>], weights: &[f64]) -> Result<Vec<f64>> {
    if asset_returns.is_empty() {
        return Err(RiskError::InsufficientData(
            "No asset return series provided".to_string(),
        ));
    }

    if asset_returns.len() != weights.len() {
        return Err(RiskError::InvalidParameter(format!(
            "Got {} return series but {} weights",
            asset_returns.len(),
            weights.len()
        )));
    }

    let lengths: BTreeSet<usize> = asset_returns.iter().map(|s| s.len()).collect();
    if lengths.len() > 1 {
        return Err(RiskError::InvalidParameter(
            "All asset return series must have the same length".to_string(),
        ));
    }

    let num_periods = asset_returns[0].len();
    if num_periods == 0 {
        return Err(RiskError::InsufficientData(
            "Asset return series are empty".to_string(),
        ));
    }

    let weight_sum: f64 = weights.iter().sum();
    if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(RiskError::InvalidParameter(format!(
            "Portfolio weights must sum to 1.0, got {}",
            weight_sum
        )));
    }

    let weight_vector = DVector::from_column_slice(weights);

    let portfolio = (0..num_periods)
        .map(|t| {
            let period_returns =
                DVector::from_iterator(asset_returns.len(), asset_returns.iter().map(|s| s[t]));
            period_returns.dot(&weight_vector)
        })
        .collect();

    Ok(portfolio)
}
