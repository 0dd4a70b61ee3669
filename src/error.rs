//! Error types for risk estimation

use thiserror::Error;

/// Errors that can occur during risk estimation
#[derive(Error, Debug)]
pub enum RiskError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid confidence level: {0} (must be strictly between 0 and 1)")]
    InvalidConfidenceLevel(f64),

    #[error("Invalid time horizon: {0} (must be positive)")]
    InvalidTimeHorizon(u32),

    #[error("Invalid simulation count: {0} (must be positive)")]
    InvalidSimulationCount(usize),

    #[error("Degenerate return distribution: {0}")]
    DegenerateDistribution(String),

    #[error("No observations at or below the VaR threshold {threshold}")]
    InsufficientTailSamples { threshold: f64 },

    #[error("Unknown calculation method: {0}")]
    UnknownMethod(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Market data unavailable: {0}")]
    DataUnavailable(String),
}

pub type Result<T> = std::result::Result<T, RiskError>;
