//! Risk calculation example
//!
//! Demonstrates VaR and CVaR estimation with all three methods over the
//! same return series.
//!
//! Run with: cargo run --example calculate_risk

use riskcalc::{estimate_risk, RiskMethod, RiskParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== VaR / CVaR Calculation Example ===\n");

    // 1. Create sample historical returns (simulating 100 days of trading)
    let returns: Vec<f64> = (0..100)
        .map(|i| {
            let base_return = (i as f64 * 0.1).sin() * 0.01;
            let noise = ((i * 17) % 100) as f64 / 100.0 * 0.005;
            base_return + noise - 0.0025
        })
        .collect();

    let mean = riskcalc::stats::mean(&returns);
    let std_dev = riskcalc::stats::std_dev(&returns);
    println!("Sample returns statistics:");
    println!("  Mean return: {:.4}%", mean * 100.0);
    println!("  Std deviation: {:.4}%", std_dev * 100.0);
    println!("  Number of observations: {}", returns.len());
    println!();

    // 2. Evaluation parameters
    let portfolio_value = 1_000_000.0;
    let params = RiskParams {
        confidence_level: 0.95,
        time_horizon: 1,
        num_simulations: Some(10_000),
        random_seed: Some(42), // For reproducible results
    };

    println!("Portfolio: ${:.0}", portfolio_value);
    println!("Confidence Level: {}%", params.confidence_level * 100.0);
    println!("Time Horizon: {} day(s)", params.time_horizon);
    println!();

    // 3. Calculate with each method
    for method in [
        RiskMethod::Historical,
        RiskMethod::Parametric,
        RiskMethod::MonteCarlo,
    ] {
        let estimate = estimate_risk(&returns, method, &params)?;

        println!("## {} method", method);
        println!(
            "  VaR:  {:.4}% (${:.2})",
            estimate.var * 100.0,
            estimate.var * portfolio_value
        );
        println!(
            "  CVaR: {:.4}% (${:.2})",
            estimate.cvar * 100.0,
            estimate.cvar * portfolio_value
        );
        if let Some(sample) = &estimate.simulated_returns {
            println!("  Simulated sample size: {}", sample.len());
        }
        println!();
    }

    Ok(())
}
