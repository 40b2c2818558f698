//! Basic example demonstrating timeseries algebra
//!
//! Run with: cargo run --example basic -p algebra-facade
//!
//! Set `RUST_LOG=algebra_core=debug` to see alignment logs.

use algebra_facade::{
    abs, add, align, ceil, divide, exp, floor, log, multiply, power, sqrt, subtract, Aligned,
    Interpolate, NaiveDate, Operand, TimeSeries,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_series(label: &str, series: &TimeSeries) {
    println!("{}:", label);
    for (date, value) in series.iter() {
        println!("  {}  {:>10.4}", date, value);
    }
}

fn print_operand(label: &str, operand: &Operand) {
    match operand {
        Operand::Scalar(v) => println!("{}: {:.4}", label, v),
        Operand::Series(s) => print_series(label, s),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algebra_core=info".into()),
        )
        .init();

    println!("=== Timeseries Algebra Example ===\n");

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid start date")?;

    // Daily closes and a sparser benchmark
    let prices = TimeSeries::daily(start, vec![185.64, 186.89, 187.95, 184.25, 181.91, 183.12]);
    let benchmark: TimeSeries = start
        .iter_days()
        .step_by(2)
        .zip([4700.0, 4725.5, 4690.0])
        .collect();

    print_series("Prices", &prices);
    print_series("Benchmark", &benchmark);

    println!("\n--- Step alignment ---");
    if let Aligned::Series(pair) = align(prices.clone(), benchmark.clone(), Interpolate::Step)? {
        let (left, right) = pair.into_series();
        print_series("Prices (aligned)", &left);
        print_series("Benchmark (aligned)", &right);
    }

    println!("\n--- Alignment methods (prices / benchmark) ---");
    for method in Interpolate::ALL {
        let ratio = divide(prices.clone(), benchmark.clone(), method)?;
        print_operand(&format!("method = {}", method), &ratio);
    }

    println!("\n--- Binary operators ---");
    print_operand("prices + 10", &add(prices.clone(), 10.0, Interpolate::Step)?);
    print_operand(
        "prices - benchmark (zero)",
        &subtract(prices.clone(), benchmark.clone(), Interpolate::Zero)?,
    );
    print_operand("2 * 3", &multiply::<NaiveDate>(2.0, 3.0, Interpolate::Step)?);

    println!("\n--- Unary operators ---");
    let returns = log(&divide(prices.clone(), prices.values()[0], Interpolate::Step)?
        .into_series()
        .ok_or("expected a series")?);
    print_series("log(prices / first)", &returns);
    print_series("exp(log returns)", &exp(&returns));
    print_series("|log returns|", &abs(&returns));
    print_series("log returns ^ 2", &power(&returns, 2.0));
    print_operand("sqrt(2)", &sqrt::<NaiveDate>(2.0));
    print_series("floor(prices, 184)", &floor(&prices, 184.0)?);
    print_series("ceil(prices, 186)", &ceil(&prices, 186.0)?);

    println!("\n=== Example Complete ===");
    Ok(())
}
