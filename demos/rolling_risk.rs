//! Rolling-window risk example
//!
//! Loads a configuration file, builds a two-asset portfolio return series
//! from a static price source, and sweeps VaR/CVaR over sliding windows.
//!
//! Run with: cargo run --example rolling_risk

use chrono::NaiveDate;
use riskcalc::data::{PriceHistory, PriceSource, StaticPriceSource};
use riskcalc::{rolling_risk, RiskConfig, RiskMethod};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 1. Synthetic daily closes for two tickers over one year
    let num_days = 252;
    let history = PriceHistory {
        tickers: vec!["AAA".to_string(), "BBB".to_string()],
        dates: (0..num_days)
            .map(|i| {
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap() + chrono::Duration::days(i as i64)
            })
            .collect(),
        closes: vec![
            (0..num_days)
                .map(|i| 100.0 * (1.0 + 0.012 * (i as f64 * 0.37).sin()))
                .collect(),
            (0..num_days)
                .map(|i| 40.0 * (1.0 + 0.02 * (i as f64 * 0.11).cos()))
                .collect(),
        ],
    };

    let source = StaticPriceSource::new(history)?;
    let tickers = vec!["AAA".to_string(), "BBB".to_string()];
    let prices = source.fetch_prices(
        &tickers,
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )?;

    // 2. Weighted portfolio returns
    let portfolio = prices.portfolio_returns(&[0.5, 0.5])?;
    println!("Portfolio return observations: {}", portfolio.len());

    // 3. Rolling evaluation using the example config's parameters
    let config = RiskConfig::from_yaml(include_str!("../config/example_config.yaml"))?;
    let window = config.rolling_window.unwrap_or(126);

    let estimates = rolling_risk(&portfolio, window, RiskMethod::Historical, &config.params())?;
    println!(
        "Rolling windows evaluated: {} (window size {})",
        estimates.len(),
        window
    );

    let first = estimates.first().expect("at least one window");
    let last = estimates.last().expect("at least one window");
    println!(
        "First window:  VaR {:.4}%  CVaR {:.4}%",
        first.var * 100.0,
        first.cvar * 100.0
    );
    println!(
        "Latest window: VaR {:.4}%  CVaR {:.4}%",
        last.var * 100.0,
        last.cvar * 100.0
    );

    Ok(())
}
