//! End-to-end solver scenarios: degenerate grids, unsatisfiable region
//! graphs, validator behaviour, placement legality and budget handling

use std::collections::HashSet;

use numbercross::SolverError;
use numbercross::grid::Grid;
use numbercross::puzzle::{Clue, PuzzleDefinition};
use numbercross::solver::{Solver, tiling, validate};

/// Three single-row regions on a 3×3 grid, chained dependencies, every row
/// a multiple of 111 so tiles and increments can never help
fn three_row_puzzle() -> PuzzleDefinition {
    let regions = vec![
        vec![(0, 0), (0, 1), (0, 2)],
        vec![(1, 0), (1, 1), (1, 2)],
        vec![(2, 0), (2, 1), (2, 2)],
    ];
    let dependencies = vec![vec![], vec![0], vec![1]];
    let clues = vec![Clue::MultipleOf(111); 3];
    match PuzzleDefinition::new(3, regions, dependencies, vec![], clues) {
        Ok(definition) => definition,
        Err(err) => unreachable!("definition is valid: {err}"),
    }
}

#[test]
fn test_single_cell_puzzle_solves_immediately() {
    let definition = match PuzzleDefinition::new(
        1,
        vec![vec![(0, 0)]],
        vec![vec![]],
        vec![],
        vec![Clue::Any],
    ) {
        Ok(definition) => definition,
        Err(err) => unreachable!("definition is valid: {err}"),
    };

    let mut solver = Solver::new(definition);
    assert!(solver.solve());
    assert_eq!(solver.assignment(), vec![1]);
    assert!(solver.grid().row_tiles(0).is_empty());
    assert_eq!(solver.stats().attempts, 1);
}

#[test]
fn test_overconstrained_region_graph_fails() {
    // Ten mutually dependent single-cell regions cannot share nine digits
    let mut regions = Vec::new();
    let mut dependencies = Vec::new();
    for index in 0..10 {
        regions.push(vec![(index / 4, index % 4)]);
        dependencies.push((0..index).collect());
    }
    let definition = match PuzzleDefinition::new(
        4,
        regions,
        dependencies,
        vec![],
        vec![Clue::Any; 4],
    ) {
        Ok(definition) => definition,
        Err(err) => unreachable!("definition is valid: {err}"),
    };

    let mut solver = Solver::new(definition);
    assert!(!solver.solve());
    // The assignment level never completes, so no tiling attempt runs
    assert_eq!(solver.stats().attempts, 0);
}

#[test]
fn test_chained_puzzle_solves_on_later_assignment() {
    let mut solver = Solver::new(three_row_puzzle());
    assert!(solver.solve());

    // The first complete assignment (1, 2, 1) duplicates 111 across rows
    // and fails; the solver must recover on a fresh attempt
    assert_eq!(solver.assignment(), vec![1, 2, 3]);
    assert_eq!(solver.stats().attempts, 2);

    // Dependency inequality holds on the solved grid
    assert_ne!(solver.assignment().first(), solver.assignment().get(1));
    assert_ne!(solver.assignment().get(1), solver.assignment().get(2));

    // No tiles were needed and every row satisfies its clue
    for row in 0..3 {
        assert!(solver.grid().row_tiles(row).is_empty());
        for number in solver.grid().row_numbers(row) {
            assert_eq!(number % 111, 0);
        }
    }
}

#[test]
fn test_zero_budget_is_reported_as_truncation() {
    let mut solver = Solver::with_budget(three_row_puzzle(), 0);
    assert!(!solver.solve());
    assert!(solver.stats().budget_exhausted_attempts > 0);

    // The same puzzle solves under the default budget, so the failure above
    // is a truncated search, not a proof of unsatisfiability
    let mut unbounded = Solver::new(three_row_puzzle());
    assert!(unbounded.solve());
    assert_eq!(unbounded.stats().budget_exhausted_attempts, 0);
}

#[test]
fn test_prime_row_rejects_composite_number() {
    let mut grid = Grid::new(2, &[]);
    grid.set_digit(0, 0, 9);
    grid.set_digit(0, 1, 1);
    let clues = [Clue::Prime, Clue::Any];
    let used = HashSet::new();

    // 91 = 7 × 13 fails the clue no matter how the row is tiled
    assert!(!validate::validate_row(&grid, &clues, &used, 0));

    grid.set_digit(0, 1, 7);
    assert!(validate::validate_row(&grid, &clues, &used, 0));
}

#[test]
fn test_validator_rejects_duplicates_and_used_numbers() {
    let mut grid = Grid::new(5, &[]);
    for (col, digit) in [1, 2, 0, 1, 2].into_iter().enumerate() {
        grid.set_digit(0, col, digit);
    }
    grid.set_tile(0, 2, true);
    let clues = [Clue::Any; 5];

    // 12 | 12 is an intra-row duplicate
    let used = HashSet::new();
    assert!(!validate::validate_row(&grid, &clues, &used, 0));

    grid.set_digit(0, 4, 3);
    assert!(validate::validate_row(&grid, &clues, &used, 0));

    // A number committed by an earlier row blocks the row
    let used: HashSet<i64> = [13].into_iter().collect();
    assert!(!validate::validate_row(&grid, &clues, &used, 0));
}

#[test]
fn test_tile_placement_rules() {
    let mut grid = Grid::new(6, &[(2, 3)]);

    // Columns 1 and size−2 would cut off single-digit numbers
    assert!(!tiling::tile_allowed(&grid, 0, 1));
    assert!(!tiling::tile_allowed(&grid, 0, 4));

    // Highlighted cells are never tiled
    assert!(!tiling::tile_allowed(&grid, 2, 3));

    // Directly beneath a tile is forbidden
    grid.set_tile(0, 3, true);
    assert!(!tiling::tile_allowed(&grid, 1, 3));

    // Within two cells after a tile in the same row is forbidden
    grid.set_tile(3, 0, true);
    assert!(!tiling::tile_allowed(&grid, 3, 2));

    // Out of bounds is never legal
    assert!(!tiling::tile_allowed(&grid, 0, 99));

    // An unobstructed interior column is legal
    assert!(tiling::tile_allowed(&grid, 5, 3));
}

#[test]
fn test_definition_validation() {
    let clue = vec![Clue::Any];

    assert!(matches!(
        PuzzleDefinition::new(0, vec![], vec![], vec![], vec![]),
        Err(SolverError::InvalidParameter { .. })
    ));
    assert!(matches!(
        PuzzleDefinition::new(1, vec![vec![]], vec![vec![]], vec![], clue.clone()),
        Err(SolverError::EmptyRegion { region: 0 })
    ));
    assert!(matches!(
        PuzzleDefinition::new(1, vec![vec![(0, 5)]], vec![vec![]], vec![], clue.clone()),
        Err(SolverError::CoordinateOutOfBounds { .. })
    ));
    assert!(matches!(
        PuzzleDefinition::new(
            2,
            vec![vec![(0, 0)], vec![(0, 0)]],
            vec![vec![], vec![]],
            vec![],
            vec![Clue::Any; 2],
        ),
        Err(SolverError::RegionOverlap {
            coordinate: (0, 0)
        })
    ));
    assert!(matches!(
        PuzzleDefinition::new(1, vec![vec![(0, 0)]], vec![vec![7]], vec![], clue.clone()),
        Err(SolverError::DependencyOutOfRange { dependency: 7, .. })
    ));
    assert!(matches!(
        PuzzleDefinition::new(1, vec![vec![(0, 0)]], vec![vec![]], vec![(3, 3)], clue.clone()),
        Err(SolverError::CoordinateOutOfBounds { .. })
    ));
    assert!(matches!(
        PuzzleDefinition::new(1, vec![vec![(0, 0)]], vec![vec![]], vec![], vec![]),
        Err(SolverError::ClueCountMismatch {
            expected: 1,
            actual: 0
        })
    ));
}

#[test]
fn test_standard_definition_is_well_formed() {
    let definition = PuzzleDefinition::standard();
    assert_eq!(definition.size(), 11);
    assert_eq!(definition.region_count(), 9);
    assert_eq!(definition.clues().len(), 11);

    // The nine regions partition the full board
    let cells: usize = (0..definition.region_count())
        .map(|region| definition.region(region).len())
        .sum();
    assert_eq!(cells, 121);
    assert_eq!(definition.highlighted().len(), 16);

    // Rebuilding from the same tables passes validation
    let rebuilt = PuzzleDefinition::new(
        definition.size(),
        (0..definition.region_count())
            .map(|region| definition.region(region).to_vec())
            .collect(),
        (0..definition.region_count())
            .map(|region| definition.dependencies_of(region).to_vec())
            .collect(),
        definition.highlighted().to_vec(),
        definition.clues().to_vec(),
    );
    assert!(rebuilt.is_ok());
}
