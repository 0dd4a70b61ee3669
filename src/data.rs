//! Market-data boundary
//!
//! The estimator core never fetches anything itself; it consumes return
//! series prepared by a collaborator behind the [`PriceSource`] trait. This
//! module specifies that boundary: the trait, the tabular [`PriceHistory`]
//! it produces, and an explicit caching decorator ([`CachingSource`]) that
//! replaces the original application's process-wide memoization. The cache
//! is injected where it is wanted, never implicit global state.

use crate::error::{Result, RiskError};
use crate::series;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Tabular price history for one or more tickers over a date range
///
/// Prices are stored column-per-ticker: `closes[i]` is the series for
/// `tickers[i]`, aligned with `dates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Ticker symbols, in column order
    pub tickers: Vec<String>,

    /// Observation dates, oldest first
    pub dates: Vec<NaiveDate>,

    /// Closing prices, one column per ticker
    pub closes: Vec<Vec<f64>>,
}

impl PriceHistory {
    /// Validate internal consistency: one column per ticker, each column
    /// aligned with the date index
    pub fn validate(&self) -> Result<()> {
        if self.tickers.is_empty() || self.dates.is_empty() {
            return Err(RiskError::DataUnavailable(
                "Price history has no tickers or no dates".to_string(),
            ));
        }

        if self.closes.len() != self.tickers.len() {
            return Err(RiskError::DataUnavailable(format!(
                "Expected {} price columns, got {}",
                self.tickers.len(),
                self.closes.len()
            )));
        }

        if self.closes.iter().any(|col| col.len() != self.dates.len()) {
            return Err(RiskError::DataUnavailable(
                "Price columns are not aligned with the date index".to_string(),
            ));
        }

        Ok(())
    }

    /// Simple returns per ticker, in column order
    pub fn asset_returns(&self) -> Result<Vec<Vec<f64>>> {
        self.validate()?;
        self.closes
            .iter()
            .map(|col| series::simple_returns(col))
            .collect()
    }

    /// Weighted single-series portfolio returns, ready for the estimators
    pub fn portfolio_returns(&self, weights: &[f64]) -> Result<Vec<f64>> {
        let per_asset = self.asset_returns()?;
        series::portfolio_returns(&per_asset, weights)
    }
}

/// Source of historical market prices
///
/// Implementations may fail with [`RiskError::DataUnavailable`] when the
/// requested tickers or date range cannot be served.
pub trait PriceSource {
    fn fetch_prices(
        &self,
        tickers: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceHistory>;
}

/// In-memory price source, useful for tests and offline evaluation
///
/// Serves a fixed [`PriceHistory`] for any requested date range whose
/// tickers match.
pub struct StaticPriceSource {
    history: PriceHistory,
}

impl StaticPriceSource {
    pub fn new(history: PriceHistory) -> Result<Self> {
        history.validate()?;
        Ok(Self { history })
    }
}

impl PriceSource for StaticPriceSource {
    fn fetch_prices(
        &self,
        tickers: &[String],
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<PriceHistory> {
        if tickers != self.history.tickers.as_slice() {
            return Err(RiskError::DataUnavailable(format!(
                "No data for tickers {:?}",
                tickers
            )));
        }

        Ok(self.history.clone())
    }
}

/// Caching decorator around any [`PriceSource`]
///
/// Memoizes fetches keyed by tickers and date range so repeated evaluations
/// over the same inputs hit the network collaborator once. Failed fetches
/// are not cached.
pub struct CachingSource<S> {
    inner: S,
    cache: RwLock<HashMap<CacheKey, PriceHistory>>,
}

type CacheKey = (String, NaiveDate, NaiveDate);

impl<S: PriceSource> CachingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Number of cached fetch results
    pub fn len(&self) -> usize {
        self.cache.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached results
    pub fn clear(&self) {
        self.cache.write().unwrap().clear();
    }

    fn key(tickers: &[String], start: NaiveDate, end: NaiveDate) -> CacheKey {
        (tickers.join(","), start, end)
    }
}

impl<S: PriceSource> PriceSource for CachingSource<S> {
    fn fetch_prices(
        &self,
        tickers: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceHistory> {
        let key = Self::key(tickers, start, end);

        if let Some(hit) = self.cache.read().unwrap().get(&key) {
            debug!(tickers = %key.0, "price cache hit");
            return Ok(hit.clone());
        }

        debug!(tickers = %key.0, "price cache miss");
        let history = self.inner.fetch_prices(tickers, start, end)?;
        self.cache
            .write()
            .unwrap()
            .insert(key, history.clone());

        Ok(history)
    }
}
