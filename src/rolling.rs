//! Rolling-window risk evaluation
//!
//! Re-applies an estimator over sliding sub-windows of a return series so
//! callers can see how a risk estimate evolved over time. This is
//! orchestration on top of the estimator interface: the window loop is
//! generic over any per-window computation and knows nothing about which
//! method runs inside it.

use crate::dispatch::{self, RiskEstimate, RiskMethod, RiskParams};
use crate::error::{Result, RiskError};
use tracing::debug;

/// Apply a computation to every sliding window of length `window`
///
/// Produces one output per window, `series.len() - window + 1` in total,
/// in time order. Errors from the computation propagate immediately.
pub fn rolling_apply<T, F>(series: &[f64], window: usize, mut f: F) -> Result<Vec<T>>
where
    F: FnMut(&[f64]) -> Result<T>,
{
    if window < 2 {
        return Err(RiskError::InvalidParameter(format!(
            "Rolling window size {} must be at least 2",
            window
        )));
    }

    if series.len() < window {
        return Err(RiskError::InsufficientData(format!(
            "Series length {} is shorter than the rolling window {}",
            series.len(),
            window
        )));
    }

    series.windows(window).map(|w| f(w)).collect()
}

/// Evaluate VaR and CVaR over every sliding window of the series
///
/// Each window is an independent single-shot dispatch; with a fixed
/// `random_seed` the Monte Carlo method redraws the same sample per window,
/// keeping the whole sweep reproducible.
pub fn rolling_risk(
    series: &[f64],
    window: usize,
    method: RiskMethod,
    params: &RiskParams,
) -> Result<Vec<RiskEstimate>> {
    debug!(
        window,
        method = %method,
        observations = series.len(),
        "rolling risk evaluation"
    );

    rolling_apply(series, window, |w| dispatch::estimate_risk(w, method, params))
}
