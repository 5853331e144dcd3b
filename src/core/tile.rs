//! Tile colors and the fixed wall layout.
//!
//! ## Wall pattern
//!
//! Every wall cell accepts exactly one color. Row `r` of the wall is the base
//! palette (`ALL_COLORS`) rotated left by `r`, which makes the wall a Latin
//! square: each color appears once per row and once per column.
//!
//! Both lookup directions are tables built at compile time, and a `const`
//! assertion rejects any edit to the palette that would break the Latin-square
//! property.

use serde::{Deserialize, Serialize};

/// Side length of the square wall (and number of pattern lines).
pub const BOARD_SIZE: usize = 5;

/// Number of distinct tile colors.
pub const TILE_COLORS: usize = 5;

/// Tile color.
///
/// The discriminant order is the base palette used by the wall pattern.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    Blue = 0,
    Yellow = 1,
    Red = 2,
    Black = 3,
    White = 4,
}

/// The base palette, in discriminant order.
pub const ALL_COLORS: [TileColor; TILE_COLORS] = [
    TileColor::Blue,
    TileColor::Yellow,
    TileColor::Red,
    TileColor::Black,
    TileColor::White,
];

impl TileColor {
    /// Get the palette index of this color.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert a palette index back into a color.
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < TILE_COLORS {
            Some(ALL_COLORS[idx])
        } else {
            None
        }
    }
}

impl std::fmt::Display for TileColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TileColor::Blue => "blue",
            TileColor::Yellow => "yellow",
            TileColor::Red => "red",
            TileColor::Black => "black",
            TileColor::White => "white",
        };
        f.write_str(name)
    }
}

/// `WALL_PATTERN[row][col]` is the only color that cell may ever hold.
pub const WALL_PATTERN: [[TileColor; BOARD_SIZE]; BOARD_SIZE] = build_wall_pattern();

/// `WALL_COLUMN[row][color]` is the column that color occupies in that row.
pub const WALL_COLUMN: [[u8; TILE_COLORS]; BOARD_SIZE] = build_wall_columns();

const fn build_wall_pattern() -> [[TileColor; BOARD_SIZE]; BOARD_SIZE] {
    let mut pattern = [[TileColor::Blue; BOARD_SIZE]; BOARD_SIZE];
    let mut row = 0;
    while row < BOARD_SIZE {
        let mut col = 0;
        while col < BOARD_SIZE {
            pattern[row][col] = ALL_COLORS[(col + row) % TILE_COLORS];
            col += 1;
        }
        row += 1;
    }
    pattern
}

const fn build_wall_columns() -> [[u8; TILE_COLORS]; BOARD_SIZE] {
    let mut columns = [[0u8; TILE_COLORS]; BOARD_SIZE];
    let mut row = 0;
    while row < BOARD_SIZE {
        let mut col = 0;
        while col < BOARD_SIZE {
            columns[row][WALL_PATTERN[row][col] as usize] = col as u8;
            col += 1;
        }
        row += 1;
    }
    columns
}

const fn is_latin_square() -> bool {
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut row_seen = [false; TILE_COLORS];
        let mut col_seen = [false; TILE_COLORS];
        let mut j = 0;
        while j < BOARD_SIZE {
            let in_row = WALL_PATTERN[i][j] as usize;
            let in_col = WALL_PATTERN[j][i] as usize;
            if row_seen[in_row] || col_seen[in_col] {
                return false;
            }
            row_seen[in_row] = true;
            col_seen[in_col] = true;
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_latin_square(), "wall pattern must be a Latin square");

/// Column where `color` goes on wall row `row`.
#[must_use]
pub const fn wall_column(row: usize, color: TileColor) -> usize {
    WALL_COLUMN[row][color as usize] as usize
}

/// Color dictated for wall cell `(row, col)`.
#[must_use]
pub const fn wall_color(row: usize, col: usize) -> TileColor {
    WALL_PATTERN[row][col]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_is_base_palette() {
        assert_eq!(WALL_PATTERN[0], ALL_COLORS);
    }

    #[test]
    fn test_rows_rotate_left() {
        assert_eq!(
            WALL_PATTERN[1],
            [TileColor::Yellow, TileColor::Red, TileColor::Black, TileColor::White, TileColor::Blue]
        );
        assert_eq!(wall_color(4, 0), TileColor::White);
    }

    #[test]
    fn test_column_lookup_inverts_pattern() {
        for row in 0..BOARD_SIZE {
            for color in ALL_COLORS {
                assert_eq!(wall_color(row, wall_column(row, color)), color);
            }
        }
    }

    #[test]
    fn test_from_index() {
        assert_eq!(TileColor::from_index(2), Some(TileColor::Red));
        assert_eq!(TileColor::from_index(5), None);
        assert_eq!(TileColor::Black.index(), 3);
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&TileColor::White).unwrap();
        assert_eq!(json, "\"white\"");
        let back: TileColor = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(back, TileColor::Red);
    }
}
