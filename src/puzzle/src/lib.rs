pub mod config;
pub mod game;
pub mod puzzle_generator;

#[cfg(test)]
mod test_utils;
