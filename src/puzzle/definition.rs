//! Puzzle definition data and validation
//!
//! A [`PuzzleDefinition`] bundles everything that is fixed before the search
//! starts. The solver core is generic over the definition; the standard
//! 11×11 instance ships embedded so the binary is runnable as-is.

use crate::io::configuration::GRID_SIZE;
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::puzzle::clues::Clue;

/// Immutable description of one puzzle instance
///
/// Holds the square grid size, the region partition with its inequality
/// dependency table, the highlighted cells and the per-row clues. All
/// coordinates are `(row, col)` pairs.
#[derive(Clone, Debug)]
pub struct PuzzleDefinition {
    size: usize,
    regions: Vec<Vec<(usize, usize)>>,
    dependencies: Vec<Vec<usize>>,
    highlighted: Vec<(usize, usize)>,
    clues: Vec<Clue>,
}

impl PuzzleDefinition {
    /// Build a definition, rejecting structurally invalid data
    ///
    /// # Errors
    ///
    /// Returns an error if the size is zero, a region is empty or reaches
    /// outside the grid, two regions share a cell, the dependency table does
    /// not match the region list, a highlighted cell is out of bounds, or
    /// the clue count differs from the row count.
    pub fn new(
        size: usize,
        regions: Vec<Vec<(usize, usize)>>,
        dependencies: Vec<Vec<usize>>,
        highlighted: Vec<(usize, usize)>,
        clues: Vec<Clue>,
    ) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter("size", &size, &"grid size must be at least 1"));
        }
        if dependencies.len() != regions.len() {
            return Err(invalid_parameter(
                "dependencies",
                &dependencies.len(),
                &format!("expected one dependency list per region ({})", regions.len()),
            ));
        }
        if clues.len() != size {
            return Err(SolverError::ClueCountMismatch {
                expected: size,
                actual: clues.len(),
            });
        }

        let mut owner = vec![false; size * size];
        for (index, coords) in regions.iter().enumerate() {
            if coords.is_empty() {
                return Err(SolverError::EmptyRegion { region: index });
            }
            for &(row, col) in coords {
                if row >= size || col >= size {
                    return Err(SolverError::CoordinateOutOfBounds {
                        context: "region",
                        coordinate: (row, col),
                        size,
                    });
                }
                let slot = owner.get_mut(row * size + col);
                match slot {
                    Some(taken) if !*taken => *taken = true,
                    _ => return Err(SolverError::RegionOverlap { coordinate: (row, col) }),
                }
            }
        }
        for (index, deps) in dependencies.iter().enumerate() {
            for &dep in deps {
                if dep >= regions.len() {
                    return Err(SolverError::DependencyOutOfRange {
                        region: index,
                        dependency: dep,
                        region_count: regions.len(),
                    });
                }
            }
        }
        for &(row, col) in &highlighted {
            if row >= size || col >= size {
                return Err(SolverError::CoordinateOutOfBounds {
                    context: "highlight",
                    coordinate: (row, col),
                    size,
                });
            }
        }

        Ok(Self {
            size,
            regions,
            dependencies,
            highlighted,
            clues,
        })
    }

    /// Side length of the square grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of regions in the partition
    pub const fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Coordinates of one region, in definition order
    pub fn region(&self, index: usize) -> &[(usize, usize)] {
        self.regions.get(index).map_or(&[], Vec::as_slice)
    }

    /// Regions whose digit must differ from the given region's digit
    pub fn dependencies_of(&self, index: usize) -> &[usize] {
        self.dependencies.get(index).map_or(&[], Vec::as_slice)
    }

    /// Highlighted cell coordinates
    pub fn highlighted(&self) -> &[(usize, usize)] {
        &self.highlighted
    }

    /// Per-row clue predicates, indexed by row
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// The embedded standard 11×11 instance
    ///
    /// Nine regions over an 11×11 grid, sixteen highlighted cells and one
    /// clue per row.
    pub fn standard() -> Self {
        let regions = vec![
            // region 0
            vec![
                (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8), (0, 9),
                (0, 10), (1, 0), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7), (1, 8), (1, 9),
                (1, 10), (2, 9),
            ],
            // region 1
            vec![
                (1, 1), (2, 0), (2, 1), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (5, 1), (5, 2),
                (5, 3), (5, 4), (3, 3), (4, 3), (6, 4), (6, 5),
            ],
            // region 2
            vec![
                (2, 2), (2, 3), (2, 4), (2, 5), (3, 1), (3, 2), (3, 4), (4, 1), (4, 2), (4, 4),
            ],
            // region 3
            vec![
                (2, 6), (2, 7), (2, 8), (3, 6), (3, 7), (3, 8), (4, 7), (4, 8), (3, 9), (2, 10),
                (3, 10), (4, 10), (5, 10),
            ],
            // region 4
            vec![
                (3, 5), (4, 5), (4, 6), (4, 9), (5, 5), (5, 6), (5, 7), (5, 8), (5, 9), (6, 6),
                (6, 7), (6, 9), (6, 10),
            ],
            // region 5
            vec![
                (6, 1), (7, 1), (8, 0), (8, 1), (8, 2), (8, 3), (8, 5), (9, 0), (9, 1), (9, 2),
                (9, 3), (9, 4), (9, 5), (9, 6), (9, 7), (9, 8), (9, 9), (9, 10), (10, 0), (10, 1),
                (10, 8), (10, 9), (10, 10),
            ],
            // region 6
            vec![
                (6, 2), (6, 3), (6, 8), (7, 2), (7, 3), (7, 4), (7, 5), (7, 6), (7, 7), (7, 8),
                (8, 4), (8, 6),
            ],
            // region 7
            vec![(7, 9), (7, 10), (8, 7), (8, 8), (8, 9), (8, 10)],
            // region 8
            vec![(10, 2), (10, 3), (10, 4), (10, 5), (10, 6), (10, 7)],
        ];
        let dependencies = vec![
            vec![],
            vec![0],
            vec![0, 1],
            vec![0, 2],
            vec![1, 2, 3],
            vec![1],
            vec![1, 4, 5],
            vec![4, 5, 6],
            vec![5],
        ];
        let highlighted = vec![
            (1, 3), (1, 4), (2, 4), (2, 9), (3, 8), (3, 9), (5, 5), (6, 1), (6, 2), (6, 5),
            (6, 6), (7, 1), (7, 5), (8, 4), (8, 5), (9, 4),
        ];
        let clues = vec![
            Clue::Square,
            Clue::DigitProductIs(20),
            Clue::MultipleOf(13),
            Clue::MultipleOf(32),
            Clue::DivisibleByEveryDigit,
            Clue::DigitProductIs(25),
            Clue::DivisibleByEveryDigit,
            Clue::OddPalindrome,
            Clue::Fibonacci,
            Clue::DigitProductIs(2025),
            Clue::Prime,
        ];

        Self {
            size: GRID_SIZE,
            regions,
            dependencies,
            highlighted,
            clues,
        }
    }
}
