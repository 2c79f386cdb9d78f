use anyhow::{anyhow, Result};

use crate::{COLUMNS, ROWS};

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Ai => Cell::Ai,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Human,
    Ai,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// A Connect 4 grid
///
/// Rows are stored top-to-bottom, so pieces fall towards row `ROWS - 1`.
/// Columns are 1-indexed in every public method apart from [`Board::cell`].
///
/// `Board` is `Copy`: the search explores hypothetical positions on private
/// copies and never touches the board owned by the game loop.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLUMNS]; ROWS],
        }
    }

    /// Builds a board by alternately dropping pieces into the given 1-indexed
    /// columns, starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Player) -> Result<Self> {
        let mut board = Self::new();
        let mut player = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    board.play_checked(player, column as usize)?;
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Parses a picture of the board, top row first
    ///
    /// `.` is an empty cell, `X` an AI piece and `O` a human piece. Whitespace
    /// is ignored, so cells may be separated by spaces for readability.
    pub fn from_grid<S: AsRef<str>>(grid: S) -> Result<Self> {
        let mut board = Self::new();

        let rows: Vec<&str> = grid
            .as_ref()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != ROWS {
            return Err(anyhow!("expected {} rows, found {}", ROWS, rows.len()));
        }

        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != COLUMNS {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    row + 1,
                    cells.len(),
                    COLUMNS
                ));
            }
            for (column, symbol) in cells.into_iter().enumerate() {
                board.cells[row][column] = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::Ai,
                    'O' | 'o' => Cell::Human,
                    _ => return Err(anyhow!("unknown cell '{}' in row {}", symbol, row + 1)),
                };
            }
        }

        // pieces must rest on the bottom or on another piece
        for column in 0..COLUMNS {
            for row in 1..ROWS {
                if !board.cells[row - 1][column].is_empty() && board.cells[row][column].is_empty() {
                    return Err(anyhow!("floating piece in column {}", column + 1));
                }
            }
        }
        Ok(board)
    }

    /// Returns the cell at a 0-indexed position, row 0 being the top
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// True iff the column exists and its top cell is empty
    pub fn is_valid_column(&self, column: usize) -> bool {
        (1..=COLUMNS).contains(&column) && self.cells[0][column - 1].is_empty()
    }

    /// All playable columns in ascending order
    pub fn valid_locations(&self) -> Vec<usize> {
        (1..=COLUMNS)
            .filter(|&column| self.is_valid_column(column))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    pub fn num_pieces(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Drops a piece into the lowest empty cell of a column
    ///
    /// The column must be valid; dropping into a full column leaves the board
    /// unchanged.
    pub fn place_piece(&mut self, player: Player, column: usize) {
        debug_assert!(self.is_valid_column(column), "column {} is not playable", column);
        let index = column - 1;
        for row in (0..ROWS).rev() {
            if self.cells[row][index].is_empty() {
                self.cells[row][index] = player.cell();
                return;
            }
        }
    }

    /// Returns a copy of this board with the move applied
    pub fn clone_and_place_piece(&self, player: Player, column: usize) -> Self {
        let mut next = *self;
        next.place_piece(player, column);
        next
    }

    /// Drops a piece after checking that the move is legal
    pub fn play_checked(&mut self, player: Player, column: usize) -> Result<()> {
        if column < 1 || column > COLUMNS {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column,
                COLUMNS
            ));
        }
        if !self.is_valid_column(column) {
            return Err(anyhow!("Invalid move, column {} full", column));
        }
        self.place_piece(player, column);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
