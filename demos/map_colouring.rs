use std::collections::BTreeMap;

use clap::Parser;
use crisp::{
    error::Result,
    problems::map_colouring::MapColouringCsp,
    solver::engine::DfsSolver,
};
use tracing_subscriber::EnvFilter;

/// Colour the map of Australia with three colours.
#[derive(Debug, Parser)]
struct Args {
    /// Print the colouring as JSON instead of one region per line.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let csp = MapColouringCsp::australia();
    let solver = DfsSolver::default();

    let (solution, _stats) = solver.solve(&csp)?;
    let Some(solution) = solution else {
        println!("Found no solution.");
        return Ok(());
    };

    let colouring: BTreeMap<String, String> = csp
        .regions()
        .iter()
        .filter_map(|region| {
            solution
                .value_of(region)
                .map(|colour| (region.to_string(), colour.to_string()))
        })
        .collect();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&colouring).expect("colouring serializes to JSON")
        );
    } else {
        for (region, colour) in &colouring {
            println!("{region} = {colour}");
        }
    }

    Ok(())
}
