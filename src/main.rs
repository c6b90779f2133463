// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line search for small coverings of the 11-bit Hamming space at radius 3.

use anyhow::Context;
use clap::Parser;
use hamming_cover::{Outcome, SearchConfig, SearchEngine, Seed, Space};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hamming")]
#[command(about = "Search for small covering codes of 11-bit words at radius 3", long_about = None)]
struct Cli {
    /// Maximal size to check for [1...2048]. Try 16.
    max_size: usize,

    /// Look for that much overlap as heuristics [0...2]. Try 2.
    overlap: usize,

    /// Stop heuristics after that level [0...maxSize]. Try 9.
    stop_overlap_level: usize,

    /// Show level if at most that large [0...maxSize]. Try 9.
    show_level: usize,

    /// Extra seed codewords as binary strings; 00000000000 is always first
    points: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let space = Space::default();
    let config = SearchConfig::new(
        &space,
        cli.max_size,
        cli.overlap,
        cli.stop_overlap_level,
        cli.show_level,
    )
    .context("invalid search parameters")?;
    let seed = Seed::parse(&space, &cli.points).context("invalid seed codeword")?;

    println!(
        "Startsize {} covers {}|{}",
        seed.len(),
        seed.covered().len(),
        space.universe_size()
    );

    let mut engine = SearchEngine::new(space, config);
    match engine.search(&seed) {
        Outcome::Covered(points) => println!("{}", space.display_sequence(&points)),
        Outcome::DepthExceeded => {
            println!("No covering of size <= {} found", config.max_size)
        }
    }

    for (counter, value) in engine.statistics().entries() {
        tracing::debug!(counter, value, "statistics");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positionals_and_points() {
        let cli = Cli::try_parse_from(["hamming", "16", "2", "9", "9", "11111110000", "1111"]).unwrap();
        assert_eq!(cli.max_size, 16);
        assert_eq!(cli.overlap, 2);
        assert_eq!(cli.stop_overlap_level, 9);
        assert_eq!(cli.show_level, 9);
        assert_eq!(cli.points, vec!["11111110000", "1111"]);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_parameters_rejected() {
        assert!(Cli::try_parse_from(["hamming", "16", "2"]).is_err());
    }
}
