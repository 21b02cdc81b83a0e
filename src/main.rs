use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use peg_tower::config::TourConfig;
use peg_tower::game::PegBoard;
use peg_tower::solver::{SplitPolicy, TransferPlanner};

/// Move a tower of disks from the first peg to the last.
#[derive(Parser)]
#[command(name = "peg-tower", about = "Solve a three- or four-peg Tower of Hanoi")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tour.toml")]
    config: PathBuf,

    /// Override number of disks
    #[arg(long)]
    disks: Option<usize>,

    /// Override number of pegs (3 or 4)
    #[arg(long)]
    pegs: Option<usize>,

    /// Four-peg split policy: fixed or frame-stewart
    #[arg(long)]
    split: Option<SplitPolicy>,

    /// Print the board after every move
    #[arg(long)]
    animate: bool,

    /// Delay between animated moves, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = TourConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(disks) = cli.disks {
        config.disks = disks;
    }
    if let Some(pegs) = cli.pegs {
        config.pegs = pegs;
    }
    if let Some(split) = cli.split {
        config.split = split;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.delay_ms = delay_ms;
    }
    config.animate |= cli.animate;
    config.validate().context("invalid settings")?;

    let mut board = PegBoard::new(config.pegs)?;
    board.fill_first_peg(config.disks)?;

    let planner = TransferPlanner::new(config.split);
    planner.tour(&mut board).context("running tour")?;

    if config.animate {
        animate(&board, &config)?;
    } else {
        println!("{board}");
    }
    println!("\nMoves: {}", board.move_count());
    Ok(())
}

/// Replay the board's history onto a fresh board, printing every frame.
fn animate(solved: &PegBoard, config: &TourConfig) -> Result<()> {
    let delay = Duration::from_millis(config.delay_ms);
    let mut board = PegBoard::new(solved.peg_count())?;
    board.fill_first_peg(solved.disk_count())?;
    println!("{board}\n");

    for (step, mv) in solved.history().into_iter().enumerate() {
        thread::sleep(delay);
        board
            .move_disk(mv.source, mv.destination)
            .with_context(|| format!("replaying move {} ({mv})", step + 1))?;
        println!("Move {}: {mv}\n{board}\n", step + 1);
    }
    Ok(())
}
