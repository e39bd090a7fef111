//! CipherMind - CLI
//!
//! Terminal Mastermind-style code-breaking puzzle: crack a hidden symbol
//! sequence from positional and compositional feedback.

use anyhow::Result;
use ciphermind::commands::run_play;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "ciphermind",
    about = "Terminal Mastermind-style code-breaking puzzle",
    version,
    author
)]
struct Cli {
    /// Seed the code generator for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    run_play(&mut rng).map_err(|e| anyhow::anyhow!(e))
}
