//! Text rendering of grids
//!
//! Tiles render as a marker glyph, highlighted digits in ANSI green when
//! colour is on, plain digits otherwise. The library never prints; callers
//! decide where the string goes.

use crate::grid::Grid;
use crate::io::configuration::{COLOR_RESET, HIGHLIGHT_COLOR, TILE_GLYPH};

/// Render a grid as bordered rows of space-separated cells
pub fn render_grid(grid: &Grid, colored: bool) -> String {
    let border = "-".repeat(grid.size() * 2);
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if grid.is_tile(row, col) {
                out.push(TILE_GLYPH);
                out.push(' ');
            } else if colored && grid.is_highlighted(row, col) {
                out.push_str(&format!(
                    "{HIGHLIGHT_COLOR}{}{COLOR_RESET} ",
                    grid.digit(row, col)
                ));
            } else {
                out.push_str(&format!("{} ", grid.digit(row, col)));
            }
        }
        out.push('\n');
    }

    out.push_str(&border);
    out.push('\n');
    out
}
