//! Gesture state machine.
//!
//! A gesture is a `Begin` on one cell, any number of `Extend`s onto
//! neighbouring cells, and a `Release`. The second cell fixes the direction of
//! travel; every later cell has to continue that same straight line.
//! [`SelectionState::next`] is pure: it never touches the grid letters and
//! leaves word recognition to whoever receives [`Transition::Released`].

use tracing::debug;

use super::directions::Step;
use super::error::GridError;
use super::path::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    Begin(Position),
    Extend(Position),
    Release,
}

/// Why an extension was refused. The selection is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// More than one step (Chebyshev) from the last cell.
    NotAdjacent,
    /// The last cell again.
    SameCell,
    /// Leaves the straight line fixed by the first two cells.
    OffLine,
    /// Already part of the current gesture.
    AlreadyOnPath,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Started(Position),
    Extended(Position),
    Rejected(Rejection),
    /// The gesture ended; carries the cells visited, in order.
    Released(Vec<Position>),
    /// `Extend` or `Release` with no gesture in progress.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionPath {
    cells: Vec<Position>,
    locked: Option<Step>,
}

impl SelectionPath {
    pub fn start(position: Position) -> Self {
        Self {
            cells: vec![position],
            locked: None,
        }
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    /// Set once the path holds two cells.
    pub fn locked_direction(&self) -> Option<Step> {
        self.locked
    }

    /// Checks whether `candidate` may be appended, returning the direction the
    /// path is locked to afterwards.
    pub fn check_extension(&self, candidate: Position) -> Result<Step, Rejection> {
        let (first, last) = match (self.cells.first(), self.cells.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(Rejection::NotAdjacent),
        };
        if candidate == last {
            return Err(Rejection::SameCell);
        }
        if last.chebyshev_distance(&candidate) != 1 {
            return Err(Rejection::NotAdjacent);
        }
        if self.contains(candidate) {
            return Err(Rejection::AlreadyOnPath);
        }
        let direction = Step::between(first, candidate).ok_or(Rejection::OffLine)?;
        match self.locked {
            Some(locked) if locked != direction => Err(Rejection::OffLine),
            _ => Ok(direction),
        }
    }

    fn extended(&self, candidate: Position, direction: Step) -> Self {
        let mut cells = self.cells.clone();
        cells.push(candidate);
        Self {
            cells,
            locked: Some(direction),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting(SelectionPath),
}

impl SelectionState {
    /// Applies one event to a `size`x`size` grid's selection.
    ///
    /// `Begin` and `Extend` outside the grid fail with
    /// [`GridError::OutOfBounds`]; the caller keeps its current state.
    pub fn next(
        &self,
        event: GestureEvent,
        size: usize,
    ) -> Result<(SelectionState, Transition), GridError> {
        match event {
            GestureEvent::Begin(position) | GestureEvent::Extend(position) => {
                if position.row >= size || position.col >= size {
                    return Err(GridError::OutOfBounds {
                        row: position.row,
                        col: position.col,
                        size,
                    });
                }
            }
            GestureEvent::Release => {}
        }

        let result = match (self, event) {
            (_, GestureEvent::Begin(position)) => (
                SelectionState::Selecting(SelectionPath::start(position)),
                Transition::Started(position),
            ),
            (SelectionState::Idle, GestureEvent::Extend(_) | GestureEvent::Release) => {
                (SelectionState::Idle, Transition::Ignored)
            }
            (SelectionState::Selecting(path), GestureEvent::Extend(position)) => {
                match path.check_extension(position) {
                    Ok(direction) => (
                        SelectionState::Selecting(path.extended(position, direction)),
                        Transition::Extended(position),
                    ),
                    Err(rejection) => {
                        debug!("Rejected extension to {}: {:?}", position, rejection);
                        (self.clone(), Transition::Rejected(rejection))
                    }
                }
            }
            (SelectionState::Selecting(path), GestureEvent::Release) => (
                SelectionState::Idle,
                Transition::Released(path.cells().to_vec()),
            ),
        };
        Ok(result)
    }

    /// Cells of the gesture in progress; empty when idle.
    pub fn path(&self) -> &[Position] {
        match self {
            SelectionState::Idle => &[],
            SelectionState::Selecting(path) => path.cells(),
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, SelectionState::Selecting(_))
    }
}
