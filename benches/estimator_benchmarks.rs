//! Benchmarks for the VaR/CVaR estimators
//!
//! Run with: cargo bench

use riskcalc::{estimate_risk, RiskMethod, RiskParams};

fn main() {
    println!("=== Risk Estimator Performance Benchmarks ===\n");

    benchmark_single_dispatch();
    benchmark_rolling_evaluation();
}

fn benchmark_single_dispatch() {
    println!("## Single dispatch");

    let returns: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.001).sin() * 0.02).collect();

    let historical = RiskParams::default();
    let start = std::time::Instant::now();
    for _ in 0..100 {
        let _ = estimate_risk(&returns, RiskMethod::Historical, &historical);
    }
    let elapsed = start.elapsed();
    println!("  Historical (100 iterations): {:?}", elapsed);
    println!("  Average: {:?}", elapsed / 100);

    let start = std::time::Instant::now();
    for _ in 0..1000 {
        let _ = estimate_risk(&returns, RiskMethod::Parametric, &historical);
    }
    let elapsed = start.elapsed();
    println!("  Parametric (1000 iterations): {:?}", elapsed);
    println!("  Average: {:?}", elapsed / 1000);

    let monte_carlo = RiskParams {
        num_simulations: Some(10_000),
        random_seed: Some(42),
        ..Default::default()
    };
    let start = std::time::Instant::now();
    let _ = estimate_risk(&returns, RiskMethod::MonteCarlo, &monte_carlo);
    let elapsed = start.elapsed();
    println!("  Monte Carlo (10,000 simulations): {:?}", elapsed);

    println!();
}

fn benchmark_rolling_evaluation() {
    println!("## Rolling evaluation");

    let returns: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.013).sin() * 0.02).collect();

    let start = std::time::Instant::now();
    let estimates =
        riskcalc::rolling_risk(&returns, 126, RiskMethod::Historical, &RiskParams::default())
            .expect("rolling evaluation");
    let elapsed = start.elapsed();
    println!(
        "  Historical over {} windows of 126: {:?}",
        estimates.len(),
        elapsed
    );

    println!();
}
