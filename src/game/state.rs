use super::{board, Board, Cell, Player};

/// How a finished game ended. There is no draw variant: a full board without
/// a winner never becomes terminal, it just rejects every further drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// Result of a legal drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Continue,
    Win(Player),
}

/// The engine's state machine: `InProgress` until a drop completes a
/// four-in-a-row, then `Won` until an explicit [`reset`](GameState::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create an in-progress game on an empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only cell query for rendering. Row 0 is the bottom.
    pub fn cell_at(&self, col: usize, row: usize) -> Cell {
        self.board.get(col, row)
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On a non-winning placement the turn passes to the other player. On a
    /// winning placement the game becomes terminal and the turn does not
    /// change. Every rejection leaves board and turn untouched.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player)
            .map_err(|e| match e {
                board::MoveError::ColumnFull => MoveError::ColumnFull,
                board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        if self
            .board
            .is_winning_placement(column, row, self.current_player)
        {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
            return Ok(DropOutcome::Win(self.current_player));
        }

        self.current_player = self.current_player.other();
        Ok(DropOutcome::Continue)
    }

    /// Start over: every cell empty, Red to move, terminal flag cleared.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::Red;
        self.outcome = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(board::ROWS, board::COLS)
    }
}
