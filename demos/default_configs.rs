use bsm_heatmap::{build_grid, default_configs, GridConfig, PricingParameters};

fn main() {
    let params = PricingParameters::default();

    println!("bsm-heatmap Default Configuration Examples\n");

    let presets: [(&str, GridConfig); 3] = [
        ("Standard", default_configs::standard()),
        ("Wide", default_configs::wide()),
        ("Fine", default_configs::fine()),
    ];

    for (name, config) in presets {
        println!("{} Configuration:", name);
        println!("   Grid size: {} x {}", config.grid_size, config.grid_size);
        println!("   Range: +/-{:.0}%", config.range_fraction * 100.0);

        match build_grid(&params, config) {
            Ok(grid) => {
                let last = grid.size() - 1;
                println!(
                    "   Spot axis: {:.2} .. {:.2}",
                    grid.spot_axis[0], grid.spot_axis[last]
                );
                println!(
                    "   Volatility axis: {:.3} .. {:.3}",
                    grid.volatility_axis[0], grid.volatility_axis[last]
                );
                println!(
                    "   Call at corners: {:.2} / {:.2}\n",
                    grid.call_values[0][0], grid.call_values[last][last]
                );
            }
            Err(e) => eprintln!("   Failed: {}\n", e),
        }
    }
}
