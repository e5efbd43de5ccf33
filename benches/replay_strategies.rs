//! Benchmark suite for comparing replay strategies
//!
//! This benchmark compares the performance of synchronous and asynchronous
//! replay strategies using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmark Fixtures
//!
//! Two representative CSV files are used:
//! - `benchmark_small.csv` - Small dataset (100 operations)
//! - `benchmark_medium.csv` - Medium dataset (1,000 operations)
//!
//! Each fixture includes a mix of deposits, withdrawals, buys, and sells that
//! keeps the account valid for the whole replay.

use std::path::Path;
use trading_account_engine::cli::{ReportKind, StrategyType};
use trading_account_engine::strategy::create_strategy;
use trading_account_engine::strategy::BatchConfig;

fn main() {
    divan::main();
}

fn run(strategy_type: StrategyType, config: Option<BatchConfig>, fixture: &str) {
    let strategy = create_strategy(strategy_type, config);
    let path = Path::new(fixture);
    let mut output = Vec::new();

    strategy
        .process(path, "bench", ReportKind::Statement, &mut output)
        .expect("Replay failed");
}

/// Benchmark synchronous replay strategy with small dataset (100 operations)
#[divan::bench]
fn sync_strategy_small() {
    run(
        StrategyType::Sync,
        None,
        "benches/fixtures/benchmark_small.csv",
    );
}

/// Benchmark asynchronous replay strategy with small dataset (100 operations)
#[divan::bench]
fn async_strategy_small() {
    run(
        StrategyType::Async,
        Some(BatchConfig::default()),
        "benches/fixtures/benchmark_small.csv",
    );
}

/// Benchmark synchronous replay strategy with medium dataset (1,000 operations)
#[divan::bench]
fn sync_strategy_medium() {
    run(
        StrategyType::Sync,
        None,
        "benches/fixtures/benchmark_medium.csv",
    );
}

/// Benchmark asynchronous replay strategy with medium dataset (1,000 operations)
#[divan::bench]
fn async_strategy_medium() {
    run(
        StrategyType::Async,
        Some(BatchConfig::default()),
        "benches/fixtures/benchmark_medium.csv",
    );
}
