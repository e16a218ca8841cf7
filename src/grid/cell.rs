//! Cell state with precomputed adjacency

/// One cell of the puzzle grid
///
/// Coordinates, adjacency and the highlight flag are fixed at setup; only
/// `digit` and `tile` mutate during search, always under the strict undo
/// discipline of the backtracking procedures.
#[derive(Clone, Debug)]
pub struct Cell {
    /// Current digit value (0 = unfilled, else 1–9)
    pub digit: u8,
    /// Whether the cell currently carries a tile marker
    pub tile: bool,
    /// Whether the cell is highlighted; highlighted cells are never tiled
    /// and never receive increments
    pub highlighted: bool,
    /// Row coordinate
    pub row: usize,
    /// Column coordinate
    pub col: usize,
    /// Orthogonal in-bounds neighbour coordinates (up, down, left, right)
    pub neighbors: Vec<(usize, usize)>,
}

impl Cell {
    /// Create an unfilled cell and precompute its neighbour list
    pub fn new(row: usize, col: usize, size: usize) -> Self {
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push((row - 1, col));
        }
        if row + 1 < size {
            neighbors.push((row + 1, col));
        }
        if col > 0 {
            neighbors.push((row, col - 1));
        }
        if col + 1 < size {
            neighbors.push((row, col + 1));
        }

        Self {
            digit: 0,
            tile: false,
            highlighted: false,
            row,
            col,
            neighbors,
        }
    }
}
