//! Solver constants and runtime configuration defaults

/// Side length of the standard puzzle grid
pub const GRID_SIZE: usize = 11;

// Soft cap per tiling attempt; exceeding it abandons the attempt as failed
// without proving unsatisfiability
/// Default work budget for one tiling attempt
pub const WORK_BUDGET: usize = 60_000;

/// Highest digit a cell can hold after increments
pub const MAX_DIGIT: u8 = 9;

// Output settings
/// Glyph used for tiled cells in rendered grids
pub const TILE_GLYPH: char = 'X';
/// ANSI sequence for highlighted digits
pub const HIGHLIGHT_COLOR: &str = "\u{1b}[32m";
/// ANSI reset sequence
pub const COLOR_RESET: &str = "\u{1b}[0m";

// Progress display settings
/// Spinner tick interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 100;
