//! Command-line driver for the Minescout engine.
//!
//! Plays a deduction session against a simulated mine field and reports
//! how far pure deduction got. The simulated field takes the place of the
//! perception and actuation collaborators a live deployment would supply.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin minescout -- --rows 16 --cols 30 --mines 99 --seed 7
//! ```
//!
//! Set `RUST_LOG=debug` to watch individual passes.

use std::process;

use clap::Parser;
use minescout_core::{Board, Position};
use minescout_session::{Session, sim::SimulatedGame};
use minescout_solver::{MethodSolver, method::Method as _};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Field height in cells.
    #[arg(long, value_name = "ROWS", default_value_t = 9)]
    rows: usize,

    /// Field width in cells.
    #[arg(long, value_name = "COLS", default_value_t = 9)]
    cols: usize,

    /// Number of mines to place.
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    mines: usize,

    /// Seed for mine placement; the same seed replays the same field.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.rows == 0 || args.cols == 0 {
        eprintln!("field dimensions must be non-zero");
        process::exit(2);
    }

    // The opening reveal targets the center, so mine placement keeps a
    // safe zone around it.
    let safe = Position::new(args.rows / 2, args.cols / 2);
    let reserved = Board::new(args.rows, args.cols).neighbors(safe).count() + 1;
    if args.mines > args.rows * args.cols - reserved {
        eprintln!(
            "cannot place {} mines on a {}x{} field with a safe opening zone",
            args.mines, args.rows, args.cols
        );
        process::exit(2);
    }

    log::info!(
        "solving a {}x{} field with {} mines (seed {})",
        args.rows,
        args.cols,
        args.mines,
        args.seed
    );

    let mut game = SimulatedGame::random(args.rows, args.cols, args.mines, safe, args.seed);
    let mut session = Session::new(args.rows, args.cols, MethodSolver::with_all_methods());

    let summary = match session.run(&mut game) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    println!(
        "{:?}: {} passes, {} cells revealed, {} mines flagged",
        summary.outcome(),
        summary.passes(),
        summary.revealed(),
        summary.flagged()
    );
    for (method, count) in session
        .solver()
        .methods()
        .iter()
        .zip(session.stats().applications())
    {
        println!("  {}: {count} passes", method.name());
    }
    if game.detonated() {
        // A correct engine never reveals a mine; reaching this means a
        // deduction was wrong.
        eprintln!("a reveal hit a mine");
        process::exit(1);
    }
    if summary.outcome().is_stuck() {
        process::exit(1);
    }
}
