//! Static evaluation of non-terminal positions

use crate::{board::*, win::*, COLUMNS, CONNECT, ROWS};

/// Bonus per piece in the centre column
pub const CENTER_BONUS: i32 = 3;
/// Bonus per piece in the columns either side of the centre
pub const NEAR_CENTER_BONUS: i32 = 2;
/// A completed line
pub const FOUR_SCORE: i32 = 99999;
/// Three pieces and one empty cell
pub const THREE_SCORE: i32 = 100;
/// Two pieces and two empty cells
pub const TWO_SCORE: i32 = 10;

const CENTER: usize = COLUMNS / 2;

/// Scores a single window for `player`
///
/// A window holding any opponent piece scores nothing.
pub fn evaluate_window(cells: &[Cell; CONNECT], player: Player) -> i32 {
    let own = player.cell();
    let mut player_pieces = 0;
    let mut empty = 0;

    for cell in cells.iter() {
        if *cell == own {
            player_pieces += 1;
        } else if cell.is_empty() {
            empty += 1;
        }
    }

    match (player_pieces, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => THREE_SCORE,
        (2, 2) => TWO_SCORE,
        _ => 0,
    }
}

/// Bonus for `player`'s pieces in the three middle columns
pub fn center_score(board: &Board, player: Player) -> i32 {
    let own = player.cell();
    (CENTER - 1..=CENTER + 1)
        .map(|column| {
            let bonus = if column == CENTER {
                CENTER_BONUS
            } else {
                NEAR_CENTER_BONUS
            };
            (0..ROWS).filter(|&row| board.cell(row, column) == own).count() as i32 * bonus
        })
        .sum()
}

/// Heuristic value of a position from `player`'s point of view
///
/// The sum of the centre bonus and the pattern score of every window.
/// The search always calls this for the maximizing side.
pub fn score(board: &Board, player: Player) -> i32 {
    let windows: i32 = WINDOWS
        .iter()
        .map(|window| evaluate_window(&window_cells(board, window), player))
        .sum();
    center_score(board, player) + windows
}
