use super::Player;

/// Default board height.
pub const ROWS: usize = 6;
/// Default board width.
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// The piece grid, indexed by `(column, row)` with row 0 at the bottom.
/// Gravity fills each column upward from row 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position. Row 0 is the bottom of the column.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[col * self.rows + row]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(col, self.rows - 1) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Occupied cells in a column are contiguous from row 0, so the first
        // empty cell from the bottom is where the piece lands.
        for row in 0..self.rows {
            if self.get(col, row) == Cell::Empty {
                self.cells[col * self.rows + row] = Cell::Occupied(player);
                return Ok(row);
            }
        }

        unreachable!("column cannot be full if is_column_full returned false");
    }

    /// Clear every cell back to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check whether the piece just placed at `(col, row)` completes a
    /// four-in-a-row for `player`.
    ///
    /// Walks a ray in each of the eight compass directions, counting
    /// consecutive neighbors of the same color. The placed piece itself is the
    /// fourth member of any qualifying run, so each axis needs three connected
    /// neighbors. The vertical axis checks only South: at drop time the placed
    /// piece is the top of its column, so an upward walk can never match.
    pub fn is_winning_placement(&self, col: usize, row: usize, player: Player) -> bool {
        let run = |d_col: isize, d_row: isize| self.run_length(col, row, d_col, d_row, player);

        run(0, -1) >= 3
            || run(-1, 0) + run(1, 0) >= 3
            || run(-1, 1) + run(1, -1) >= 3
            || run(1, 1) + run(-1, -1) >= 3
    }

    /// Count consecutive cells occupied by `player` along one direction,
    /// starting from the neighbor of `(col, row)` and stopping at the first
    /// mismatch or board edge.
    fn run_length(
        &self,
        col: usize,
        row: usize,
        d_col: isize,
        d_row: isize,
        player: Player,
    ) -> usize {
        let mut count = 0;
        let mut c = col as isize + d_col;
        let mut r = row as isize + d_row;

        while c >= 0 && c < self.cols as isize && r >= 0 && r < self.rows as isize {
            if self.get(c as usize, r as usize) != Cell::Occupied(player) {
                break;
            }
            count += 1;
            c += d_col;
            r += d_row;
        }

        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ROWS, COLS)
    }
}
