//! Static puzzle description
//!
//! A puzzle is fixed data supplied to the solver before the search runs:
//! the region partition of the grid, the inequality dependencies between
//! regions, the highlighted cells, and one clue predicate per row.

/// Row clue predicates
pub mod clues;
/// Puzzle definition data and validation
pub mod definition;

pub use clues::Clue;
pub use definition::PuzzleDefinition;
