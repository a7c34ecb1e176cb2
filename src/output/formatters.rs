//! Formatting utilities for terminal output

use crate::core::{Cell, Grid};
use rustc_hash::{FxHashMap, FxHashSet};

/// Render a board as ASCII from the solver's point of view
///
/// Revealed cells show their clue digit, deduced mines show a flag, and
/// everything else stays blank.
#[must_use]
pub fn render_board(grid: Grid, clues: &FxHashMap<Cell, i32>, flags: &FxHashSet<Cell>) -> String {
    let border = format!("{}-\n", "--".repeat(grid.width()));
    let mut out = String::new();

    for row in 0..grid.height() {
        out.push_str(&border);
        for col in 0..grid.width() {
            let cell = Cell::new(row, col);
            out.push('|');
            if let Some(clue) = clues.get(&cell) {
                out.push(char::from_digit(*clue as u32, 10).unwrap_or('?'));
            } else if flags.contains(&cell) {
                out.push('X');
            } else {
                out.push(' ');
            }
        }
        out.push_str("|\n");
    }
    out.push_str(&border);

    out
}

/// Format a ratio as a percentage string
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_empty_board() {
        let grid = Grid::new(2, 2).unwrap();
        let rendered = render_board(grid, &FxHashMap::default(), &FxHashSet::default());
        assert_eq!(rendered, "-----\n| | |\n-----\n| | |\n-----\n");
    }

    #[test]
    fn render_shows_clues_and_flags() {
        let grid = Grid::new(2, 2).unwrap();
        let mut clues = FxHashMap::default();
        clues.insert(Cell::new(0, 0), 1);
        let mut flags = FxHashSet::default();
        flags.insert(Cell::new(1, 1));

        let rendered = render_board(grid, &clues, &flags);
        assert_eq!(rendered, "-----\n|1| |\n-----\n| |X|\n-----\n");
    }

    #[test]
    fn percent_formats_one_decimal() {
        assert_eq!(percent(0.5), "50.0%");
        assert_eq!(percent(1.0), "100.0%");
        assert_eq!(percent(0.123), "12.3%");
    }
}
