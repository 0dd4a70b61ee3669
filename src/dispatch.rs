//! Risk-calculation dispatch
//!
//! Selects the matching VaR/CVaR estimator pair by method, validates
//! parameter presence up front, and returns both scalars (plus the
//! simulated sample for Monte Carlo) from a single evaluation. Dispatch is
//! stateless and single-shot: independent calls share nothing and may run
//! concurrently.

use crate::cvar;
use crate::error::{Result, RiskError};
use crate::var;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Risk calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskMethod {
    Historical,
    Parametric,
    MonteCarlo,
}

impl RiskMethod {
    /// Human-readable name, matching the string form accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            RiskMethod::Historical => "Historical",
            RiskMethod::Parametric => "Parametric",
            RiskMethod::MonteCarlo => "Monte Carlo",
        }
    }
}

impl fmt::Display for RiskMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiskMethod {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Historical" | "historical" => Ok(RiskMethod::Historical),
            "Parametric" | "parametric" => Ok(RiskMethod::Parametric),
            "Monte Carlo" | "MonteCarlo" | "monte_carlo" => Ok(RiskMethod::MonteCarlo),
            other => Err(RiskError::UnknownMethod(other.to_string())),
        }
    }
}

/// Parameters shared by every risk evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskParams {
    /// Confidence level, strictly between 0 and 1 (e.g. 0.95)
    pub confidence_level: f64,

    /// Time horizon in periods; estimates scale by sqrt(horizon)
    pub time_horizon: u32,

    /// Number of simulations; required for Monte Carlo, ignored otherwise
    pub num_simulations: Option<usize>,

    /// Random seed for reproducible Monte Carlo (None = seed from entropy)
    pub random_seed: Option<u64>,
}

impl Default for RiskParams {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            time_horizon: 1,
            num_simulations: None,
            random_seed: None,
        }
    }
}

/// Result of a single risk evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskEstimate {
    /// VaR as a positive loss magnitude
    pub var: f64,

    /// CVaR as a positive loss magnitude
    pub cvar: f64,

    /// Method used for the calculation
    pub method: RiskMethod,

    /// Confidence level the estimate was computed at
    pub confidence_level: f64,

    /// Time horizon in periods
    pub time_horizon: u32,

    /// Simulated single-period returns (Monte Carlo only)
    pub simulated_returns: Option<Vec<f64>>,

    /// Timestamp of calculation
    pub timestamp: DateTime<Utc>,
}

/// Evaluate VaR and CVaR for a return series with the selected method
///
/// Validates parameter presence (Monte Carlo requires `num_simulations`)
/// before delegating; estimator errors propagate to the caller unchanged.
/// For Monte Carlo the CVaR conditions on the exact sample drawn for VaR,
/// so both scalars and the returned sample come from one draw.
pub fn estimate_risk(
    returns: &[f64],
    method: RiskMethod,
    params: &RiskParams,
) -> Result<RiskEstimate> {
    debug!(
        method = %method,
        confidence_level = params.confidence_level,
        time_horizon = params.time_horizon,
        observations = returns.len(),
        "evaluating risk"
    );

    let (var, cvar, simulated_returns) = match method {
        RiskMethod::Historical => {
            let var = var::historical_var(returns, params.confidence_level, params.time_horizon)?;
            let cvar = cvar::historical_cvar_with_var(returns, var, params.time_horizon)?;
            (var, cvar, None)
        }
        RiskMethod::Parametric => {
            let var = var::parametric_var(returns, params.confidence_level, params.time_horizon)?;
            let cvar = cvar::parametric_cvar(returns, params.confidence_level, params.time_horizon)?;
            (var, cvar, None)
        }
        RiskMethod::MonteCarlo => {
            let num_simulations = params.num_simulations.ok_or_else(|| {
                RiskError::MissingParameter(
                    "num_simulations is required for the Monte Carlo method".to_string(),
                )
            })?;

            let (var, sample) = var::monte_carlo_var(
                returns,
                params.confidence_level,
                params.time_horizon,
                num_simulations,
                params.random_seed,
            )?;
            let cvar = cvar::monte_carlo_cvar_from_sample(var, &sample)?;
            (var, cvar, Some(sample))
        }
    };

    Ok(RiskEstimate {
        var,
        cvar,
        method,
        confidence_level: params.confidence_level,
        time_horizon: params.time_horizon,
        simulated_returns,
        timestamp: Utc::now(),
    })
}
