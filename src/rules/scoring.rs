//! Wall scoring.
//!
//! - `score_adjacency`: points for one tile just placed on a wall
//! - `end_game_bonus`: row, column and color bonuses for a finished wall
//! - `floor_penalty`: round-end penalty for occupied floor positions

use crate::core::{PlayerState, RulesConfig, Wall, BOARD_SIZE};

/// Score the tile at `(row, col)`, which must already be on `wall`.
///
/// Counts the contiguous run through the tile in its row and in its column.
/// An isolated tile scores 1. Otherwise each axis with at least one neighbor
/// scores its run length (neighbors + the tile itself).
///
/// # Panics
///
/// Panics if `(row, col)` is outside the wall.
#[must_use]
pub fn score_adjacency(wall: &Wall, row: usize, col: usize) -> u32 {
    assert!(
        row < BOARD_SIZE && col < BOARD_SIZE,
        "cell ({row}, {col}) is outside the wall"
    );
    let occupied = |r: usize, c: usize| wall[r][c].is_some();

    let left = (0..col).rev().take_while(|&c| occupied(row, c)).count();
    let right = (col + 1..BOARD_SIZE).take_while(|&c| occupied(row, c)).count();
    let up = (0..row).rev().take_while(|&r| occupied(r, col)).count();
    let down = (row + 1..BOARD_SIZE).take_while(|&r| occupied(r, col)).count();

    let horizontal = left + right;
    let vertical = up + down;

    if horizontal == 0 && vertical == 0 {
        return 1;
    }

    let mut score = 0;
    if horizontal > 0 {
        score += horizontal + 1;
    }
    if vertical > 0 {
        score += vertical + 1;
    }
    score as u32
}

/// End-game bonus for one board. Saturates at `u32::MAX`.
#[must_use]
pub fn end_game_bonus(board: &PlayerState, config: &RulesConfig) -> u32 {
    let per = |count: usize, bonus: u32| (count as u32).saturating_mul(bonus);
    per(board.completed_rows(), config.row_bonus)
        .saturating_add(per(board.completed_columns(), config.column_bonus))
        .saturating_add(per(board.completed_colors(), config.color_bonus))
}

/// Penalty (zero or negative) for `slots_used` occupied floor positions.
///
/// Positions past the end of the table cost nothing.
#[must_use]
pub fn floor_penalty(slots_used: usize, config: &RulesConfig) -> i64 {
    config
        .floor_penalties
        .iter()
        .take(slots_used)
        .map(|&p| i64::from(p))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{wall_color, PlayerState};

    fn place(wall: &mut Wall, row: usize, col: usize) -> u32 {
        wall[row][col] = Some(wall_color(row, col));
        score_adjacency(wall, row, col)
    }

    #[test]
    fn test_isolated_tile_scores_one() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let mut wall: Wall = Default::default();
                assert_eq!(place(&mut wall, row, col), 1);
            }
        }
    }

    #[test]
    fn test_horizontal_run() {
        let mut wall: Wall = Default::default();
        assert_eq!(place(&mut wall, 0, 0), 1);
        assert_eq!(place(&mut wall, 0, 1), 2);
        assert_eq!(place(&mut wall, 0, 2), 3);
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut wall: Wall = Default::default();
        place(&mut wall, 2, 0);
        place(&mut wall, 2, 4);
        assert_eq!(place(&mut wall, 2, 2), 1);
        assert_eq!(place(&mut wall, 2, 3), 3);
    }

    #[test]
    fn test_both_axes_count_placed_tile_twice() {
        let mut wall: Wall = Default::default();
        place(&mut wall, 1, 0);
        place(&mut wall, 1, 2);
        place(&mut wall, 0, 1);
        place(&mut wall, 2, 1);
        place(&mut wall, 3, 1);
        // Row run 3, column run 4.
        assert_eq!(place(&mut wall, 1, 1), 7);
    }

    #[test]
    fn test_full_wall_bonus() {
        let mut board = PlayerState::new("a");
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                board.wall[row][col] = Some(wall_color(row, col));
            }
        }
        assert_eq!(end_game_bonus(&board, &RulesConfig::default()), 95);
    }

    #[test]
    fn test_empty_wall_bonus() {
        let board = PlayerState::new("a");
        assert_eq!(end_game_bonus(&board, &RulesConfig::default()), 0);
    }

    #[test]
    #[should_panic(expected = "outside the wall")]
    fn test_cell_outside_wall_panics() {
        let wall: Wall = Default::default();
        let _ = score_adjacency(&wall, 0, BOARD_SIZE);
    }

    #[test]
    fn test_huge_bonuses_saturate() {
        let config = RulesConfig::default().with_bonuses(u32::MAX, u32::MAX, u32::MAX);
        let mut board = PlayerState::new("a");
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                board.wall[row][col] = Some(wall_color(row, col));
            }
        }
        assert_eq!(end_game_bonus(&board, &config), u32::MAX);
    }

    #[test]
    fn test_floor_penalty_table() {
        let config = RulesConfig::default();
        assert_eq!(floor_penalty(0, &config), 0);
        assert_eq!(floor_penalty(1, &config), -1);
        assert_eq!(floor_penalty(3, &config), -4);
        assert_eq!(floor_penalty(7, &config), -14);
        assert_eq!(floor_penalty(9, &config), -14);
    }
}
