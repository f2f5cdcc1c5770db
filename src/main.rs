use std::io::{stdin, stdout};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use turn_snake::game::{Setup, SnakeGame};

#[derive(Parser)]
#[command(name = "turn_snake")]
#[command(version, about = "Turn-based snake on a fixed board")]
struct Cli {
    /// Draw the board with pictorial glyphs; a bare `1` does the same
    #[arg(long)]
    fancy: bool,

    #[arg(hide = true)]
    mode: Option<String>,

    /// Number of rows (asked for when missing)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns (asked for when missing)
    #[arg(long)]
    cols: Option<usize>,

    /// Number of foods (asked for when missing)
    #[arg(long)]
    food: Option<usize>,

    /// Seed for food and snake placement
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let setup = Setup {
        rows: cli.rows,
        cols: cli.cols,
        food_count: cli.food,
        fancy: cli.fancy || cli.mode.as_deref().map_or(false, |m| m.starts_with('1')),
        seed: cli.seed,
    };

    let stdin = stdin();
    let mut game = SnakeGame::new(stdin.lock(), stdout(), setup.fancy);
    let config = game.configure(&setup)?;
    game.play(&config)?;

    Ok(())
}
