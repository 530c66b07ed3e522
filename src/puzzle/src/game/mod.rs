pub mod conversion;
pub mod directions;
pub mod error;
pub mod found;
pub mod generator;
pub mod grid;
pub mod path;
pub mod projection;
pub mod puzzle;
pub mod selection;
pub mod word_list;

pub use conversion::*;
pub use directions::{Direction, Step};
pub use error::{GenerationError, GridError, WordListError};
pub use found::{FoundWord, FoundWords};
pub use generator::{generate, GridGenerator};
pub use grid::{Cell, Grid};
pub use path::Position;
pub use projection::{CellStatus, CellView};
pub use puzzle::{LegendEntry, Puzzle, ReleaseOutcome};
pub use selection::{GestureEvent, Rejection, SelectionState, Transition};
pub use word_list::WordList;
