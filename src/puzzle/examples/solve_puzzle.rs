use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

use word_search::config::PuzzleConfig;
use word_search::game::{Puzzle, ReleaseOutcome};
use word_search::puzzle_generator::PuzzleGenerator;

/// Traces every hidden word the way a player would, one gesture per word.
fn solve(puzzle: &mut Puzzle) -> Result<()> {
    let words: Vec<String> = puzzle.words().iter().map(str::to_string).collect();

    for word in words {
        let path = match puzzle.grid().locate(&word).into_iter().next() {
            Some(path) => path,
            None => {
                warn!("{} is not on the grid", word);
                continue;
            }
        };

        let (first, rest) = match path.split_first() {
            Some(split) => split,
            None => continue,
        };
        puzzle.begin(first.row, first.col)?;
        for cell in rest {
            puzzle.extend(cell.row, cell.col)?;
        }

        match puzzle.release() {
            ReleaseOutcome::Found { word, path } => {
                info!("Found {} from {} to {}", word, path[0], path[path.len() - 1]);
            }
            other => warn!("Tracing {} gave {:?}", word, other),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = PuzzleConfig::from_env();
    if config.seed.is_none() {
        config.seed = Some("solve-puzzle".to_string());
    }

    let mut puzzle = PuzzleGenerator::new(config).generate_puzzle()?;
    print!("{}", puzzle.grid());

    solve(&mut puzzle)?;

    info!(
        "Found {} of {} words, complete: {}",
        puzzle.found().len(),
        puzzle.words().len(),
        puzzle.is_complete()
    );
    Ok(())
}
