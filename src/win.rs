//! Four-in-a-row detection and the window table shared with the evaluator

use crate::{board::*, COLUMNS, CONNECT, ROWS};

/// A line of `CONNECT` cells as 0-indexed (row, column) pairs
pub type Window = [(usize, usize); CONNECT];

/// The number of distinct lines of `CONNECT` cells on the board
pub const NUM_WINDOWS: usize = ROWS * (COLUMNS - CONNECT + 1)
    + (ROWS - CONNECT + 1) * COLUMNS
    + 2 * (ROWS - CONNECT + 1) * (COLUMNS - CONNECT + 1);

/// Every horizontal, vertical and diagonal line of `CONNECT` cells
pub static WINDOWS: [Window; NUM_WINDOWS] = windows();

const fn windows() -> [Window; NUM_WINDOWS] {
    let mut windows = [[(0, 0); CONNECT]; NUM_WINDOWS];
    let mut n = 0;

    // (row step, column step, first row, last row, last column) per direction:
    // horizontal, vertical, diagonal down-right, diagonal up-right
    let directions: [(isize, isize, usize, usize, usize); 4] = [
        (0, 1, 0, ROWS, COLUMNS - CONNECT + 1),
        (1, 0, 0, ROWS - CONNECT + 1, COLUMNS),
        (1, 1, 0, ROWS - CONNECT + 1, COLUMNS - CONNECT + 1),
        (-1, 1, CONNECT - 1, ROWS, COLUMNS - CONNECT + 1),
    ];

    let mut d = 0;
    while d < 4 {
        let (dy, dx, first_row, end_row, end_column) = directions[d];
        let mut column = 0;
        while column < end_column {
            let mut row = first_row;
            while row < end_row {
                let mut i = 0;
                while i < CONNECT {
                    windows[n][i] = (
                        (row as isize + dy * i as isize) as usize,
                        (column as isize + dx * i as isize) as usize,
                    );
                    i += 1;
                }
                n += 1;
                row += 1;
            }
            column += 1;
        }
        d += 1;
    }
    windows
}

/// Reads the cells of a window
pub fn window_cells(board: &Board, window: &Window) -> [Cell; CONNECT] {
    let mut cells = [Cell::Empty; CONNECT];
    for (cell, &(row, column)) in cells.iter_mut().zip(window.iter()) {
        *cell = board.cell(row, column);
    }
    cells
}

/// True iff `player` has four in a row anywhere on the board
pub fn detect_win(board: &Board, player: Player) -> bool {
    let target = player.cell();
    WINDOWS
        .iter()
        .any(|window| window.iter().all(|&(row, column)| board.cell(row, column) == target))
}

/// True iff either player has won or no column is playable
pub fn is_terminal_board(board: &Board) -> bool {
    detect_win(board, Player::Human) || detect_win(board, Player::Ai) || board.is_full()
}

/// The player with four in a row, if any
///
/// The human is checked first, matching the order the search uses.
pub fn winner(board: &Board) -> Option<Player> {
    if detect_win(board, Player::Human) {
        Some(Player::Human)
    } else if detect_win(board, Player::Ai) {
        Some(Player::Ai)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_table_covers_every_line() {
        assert_eq!(NUM_WINDOWS, 69);

        let mut unique = WINDOWS.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), NUM_WINDOWS);

        for window in WINDOWS.iter() {
            for &(row, column) in window.iter() {
                assert!(row < ROWS && column < COLUMNS);
            }
        }
    }

    #[test]
    fn window_cells_follow_the_line() {
        let mut board = Board::new();
        board.place_piece(Player::Ai, 1);

        // the first window is the horizontal line starting in the top-left corner
        assert_eq!(WINDOWS[0], [(0, 0), (0, 1), (0, 2), (0, 3)]);
        let bottom_left = WINDOWS
            .iter()
            .find(|window| window[0] == (ROWS - 1, 0) && window[1] == (ROWS - 1, 1))
            .copied()
            .unwrap();
        assert_eq!(
            window_cells(&board, &bottom_left),
            [Cell::Ai, Cell::Empty, Cell::Empty, Cell::Empty]
        );
    }
}
