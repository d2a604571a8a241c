use std::time::Instant;

use clap::{Parser, ValueEnum};
use crisp::{
    error::Result,
    problems::sudoku::{render_board, SudokuCsp},
    solver::{
        csp::Csp,
        engine::DfsSolver,
        heuristics::variable::{MinimumRemainingValues, RandomOrdering, SelectFirst, VariableOrdering},
        stats::render_stats_table,
    },
};
use tracing_subscriber::EnvFilter;

const DEFAULT_PUZZLE: &str =
    "003020600900305001001806400008102900700000008006708200002609500800203009005010300";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Ordering {
    /// First unassigned cell in identity order.
    First,
    /// Minimum remaining values (fail-first).
    Mrv,
    /// A random unassigned cell.
    Random,
}

/// Solve a Sudoku puzzle with the backtracking CSP solver.
#[derive(Debug, Parser)]
struct Args {
    /// The puzzle as 81 digits in row-major order, 0 for blanks.
    #[arg(default_value = DEFAULT_PUZZLE)]
    puzzle: String,

    /// Variable-ordering heuristic.
    #[arg(long, value_enum, default_value = "mrv")]
    ordering: Ordering,

    /// Seed for the random ordering.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after every accepted partial assignment.
    #[arg(long)]
    trace: bool,

    /// Print the per-constraint statistics table.
    #[arg(long)]
    stats: bool,

    /// Print the search statistics as JSON.
    #[arg(long)]
    stats_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let csp = SudokuCsp::parse(&args.puzzle)?;

    let ordering: Box<dyn VariableOrdering<u8>> = match args.ordering {
        Ordering::First => Box::new(SelectFirst),
        Ordering::Mrv => Box::new(MinimumRemainingValues),
        Ordering::Random => match args.seed {
            Some(seed) => Box::new(RandomOrdering::seeded(seed)),
            None => Box::new(RandomOrdering::from_entropy()),
        },
    };
    let mut solver = DfsSolver::with_variable_ordering(ordering);

    if args.trace {
        solver.add_listener(|assignment| println!("{}", render_board(assignment)));
    }

    let started = Instant::now();
    let (solution, stats) = solver.solve(&csp)?;
    let elapsed = started.elapsed();

    match solution {
        Some(solution) => {
            println!("Took {} ms.\n", elapsed.as_millis());
            println!("{}", render_board(&solution));
        }
        None => println!("Found no solution after {} ms.", elapsed.as_millis()),
    }

    if args.stats {
        let constraints = csp.constraints();
        println!("{}", render_stats_table(&stats, &constraints));
    }
    if args.stats_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).expect("statistics serialize to JSON")
        );
    }

    Ok(())
}
