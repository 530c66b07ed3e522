use anyhow::Result;
use dotenvy::dotenv;
use std::env;
use tracing::{error, info};

use word_search::config::PuzzleConfig;
use word_search::game::PuzzleSnapshot;
use word_search::puzzle_generator::PuzzleGenerator;

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting puzzle generator");

    let config = PuzzleConfig::from_env();
    let as_json = env::var("PUZZLE_OUTPUT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let generator = PuzzleGenerator::new(config);
    let puzzle = match generator.generate_puzzle() {
        Ok(puzzle) => puzzle,
        Err(e) => {
            error!("Puzzle generation failed: {}", e);
            std::process::exit(1);
        }
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&PuzzleSnapshot::from(&puzzle))?);
    } else {
        print!("{}", puzzle.grid());
        println!();
        println!("Words:");
        for entry in puzzle.legend() {
            println!("  {}", entry.word);
        }
    }

    info!("Puzzle generator finished successfully");
    Ok(())
}
