//! # riskcalc: VaR and CVaR estimation for return series
//!
//! This library estimates portfolio tail risk via Value at Risk (VaR) and
//! Conditional Value at Risk (CVaR / Expected Shortfall), each computed by
//! three interchangeable methods:
//!
//! - **Historical**: empirical quantile of past returns, no distributional
//!   assumption
//! - **Parametric**: closed-form under a fitted normal distribution
//! - **Monte Carlo**: simulation from a normal fitted to the series, with a
//!   seedable random source
//!
//! Estimates are positive loss magnitudes and scale to multi-period
//! horizons by sqrt(time_horizon) under the i.i.d. assumption. All
//! estimator calls are synchronous, pure, and independent; callers may
//! evaluate windows concurrently with no coordination.
//!
//! ## Core Components
//!
//! - Estimator functions: [`historical_var`], [`parametric_var`],
//!   [`monte_carlo_var`] and the matching CVaR functions
//! - [`estimate_risk`]: single-shot dispatch producing both scalars (and
//!   the Monte Carlo sample) from one evaluation
//! - [`rolling_risk`]: sliding-window re-evaluation over a series
//! - [`series`] / [`data`]: price preprocessing and the market-data
//!   boundary with an injectable fetch cache
//! - [`RiskConfig`]: YAML/JSON-loadable run settings
//!
//! ## Example Usage
//!
//! ```rust
//! use riskcalc::{estimate_risk, RiskMethod, RiskParams};
//!
//! let returns = vec![
//!     -0.02, -0.01, 0.0, 0.01, 0.03, -0.015, 0.02, -0.03, 0.005, 0.01,
//! ];
//!
//! let params = RiskParams {
//!     confidence_level: 0.95,
//!     time_horizon: 1,
//!     ..Default::default()
//! };
//!
//! let estimate = estimate_risk(&returns, RiskMethod::Historical, &params).unwrap();
//! assert!(estimate.cvar >= estimate.var);
//! ```

mod config;
mod cvar;
mod dispatch;
mod error;
mod rolling;
mod var;

pub mod data;
pub mod series;
pub mod stats;

pub use config::RiskConfig;
pub use cvar::{
    historical_cvar, historical_cvar_with_var, monte_carlo_cvar, monte_carlo_cvar_from_sample,
    parametric_cvar,
};
pub use dispatch::{estimate_risk, RiskEstimate, RiskMethod, RiskParams};
pub use error::{Result, RiskError};
pub use rolling::{rolling_apply, rolling_risk};
pub use var::{historical_var, monte_carlo_var, parametric_var};
