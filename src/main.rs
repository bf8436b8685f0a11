//! F2L Pair Solver
//!
//! Command-line front end for the pair insertion step: applies a setup
//! sequence to a solved cube, then classifies and solves one slot's pair, or
//! surveys every configuration a slot's pair can be in.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use f2l::{classify_pair, solve_pair, survey, Algorithm, Cube, Frame, Slot, SolveOptions};

/// Classifies and inserts F2L pairs on a 3x3x3 cube.
#[derive(Parser)]
#[command(name = "f2l")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log classification details and every applied move.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a setup to a solved cube and solve the slot's pair.
    Solve {
        /// Slot to solve, e.g. FR.
        #[arg(long)]
        slot: Slot,
        /// Moves applied to a solved cube before solving.
        #[arg(long, default_value = "")]
        setup: Algorithm,
        /// Allow moves outside the slot instead of rejecting them.
        #[arg(long)]
        no_validate: bool,
    },
    /// Apply a setup to a solved cube and print the pair's case.
    Classify {
        #[arg(long)]
        slot: Slot,
        #[arg(long, default_value = "")]
        setup: Algorithm,
    },
    /// Solve every working-layer configuration and print per-case statistics.
    Survey {
        /// Survey a single slot instead of all four.
        #[arg(long)]
        slot: Option<Slot>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Solve {
            slot,
            setup,
            no_validate,
        } => run_solve(slot, &setup, !no_validate),
        Command::Classify { slot, setup } => run_classify(slot, &setup),
        Command::Survey { slot } => run_survey(slot),
    }
}

fn scrambled(setup: &Algorithm) -> Cube {
    let mut cube = Cube::solved();
    cube.apply(setup);
    cube
}

/// Solves one pair and prints its case and solution.
fn run_solve(slot: Slot, setup: &Algorithm, validate_moves: bool) -> Result<()> {
    let mut cube = scrambled(setup);
    let first_two_layers_intact = cube.first_two_layers_solved(Frame::STANDARD);
    let solution = solve_pair(&mut cube, slot, SolveOptions { validate_moves })?;

    println!("{}", solution.case);
    println!("{}", solution.moves);

    if first_two_layers_intact && !cube.first_two_layers_solved(Frame::STANDARD) {
        bail!("{} left slot {} unsolved", solution.case, slot);
    }
    if !first_two_layers_intact {
        tracing::warn!(
            %slot,
            "setup disturbed pieces outside the working layer; only the pair was solved"
        );
    }
    Ok(())
}

/// Prints the case of one pair.
fn run_classify(slot: Slot, setup: &Algorithm) -> Result<()> {
    let cube = scrambled(setup);
    println!("{}", classify_pair(&cube, slot)?);
    Ok(())
}

/// Surveys one or all slots and prints the per-case table.
fn run_survey(slot: Option<Slot>) -> Result<()> {
    let slots = match slot {
        Some(slot) => vec![slot],
        None => Slot::ALL.to_vec(),
    };
    let report = survey::run(&slots, SolveOptions { validate_moves: true })?;
    tracing::info!(configurations = report.total(), "survey complete");
    print!("{}", report.table());
    Ok(())
}
