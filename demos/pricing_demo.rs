// demos/pricing_demo.rs

//! Quote an option and print its spot × volatility heatmap as a text table.
//!
//! Usage:
//!   cargo run --example pricing_demo                 # built-in defaults
//!   cargo run --example pricing_demo -- heatmap.toml # load a HeatmapConfig
//!
//! Set `RUST_LOG=debug` to see the grid builder's diagnostics.

use anyhow::Result;
use bsm_heatmap::{build_grid, evaluate, HeatmapConfig, OptionKind, SensitivityGrid};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => HeatmapConfig::from_file(path)?,
        None => HeatmapConfig::default(),
    };
    let p = config.params;

    println!("Black-Scholes Option Pricing");
    println!("============================");
    println!("Spot:       {:>10.2}", p.spot_price);
    println!("Strike:     {:>10.2}", p.strike_price);
    println!("Maturity:   {:>10.4} years", p.time_to_maturity);
    println!("Rate:       {:>10.4}", p.risk_free_rate);
    println!("Volatility: {:>10.4}", p.volatility);

    let quote = evaluate(
        p.spot_price,
        p.strike_price,
        p.time_to_maturity,
        p.risk_free_rate,
        p.volatility,
    )?;
    println!("\nCall: {:.2}    Put: {:.2}", quote.call_price, quote.put_price);

    let grid = build_grid(&p, config.grid)?;
    print_heatmap(&grid, OptionKind::Call, "Call Values");
    print_heatmap(&grid, OptionKind::Put, "Put Values");

    Ok(())
}

fn print_heatmap(grid: &SensitivityGrid, kind: OptionKind, title: &str) {
    println!("\n{} (rows: spot, columns: volatility)", title);

    print!("{:>9}", "");
    for vol in &grid.volatility_axis {
        print!("{:>8.3}", vol);
    }
    println!();
    println!("{}", "-".repeat(9 + 8 * grid.size()));

    for (i, spot) in grid.spot_axis.iter().enumerate() {
        print!("{:>8.2}|", spot);
        if let Some(row) = grid.row(kind, i) {
            for value in row {
                print!("{:>8.2}", value);
            }
        }
        println!();
    }

    if let Some((lo, hi)) = grid.value_range(kind) {
        println!("range: {:.2} .. {:.2}", lo, hi);
    }
}
