use anyhow::{anyhow, Result};

use crate::board::{Board, Player};
use crate::COLS;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    InProgress,
    Won(Player),
}

/// One game in play: the board plus the turn tracking and last-move
/// position the win check needs. All move validation happens here so
/// the board primitives can assume legal inputs.
pub struct GameSession {
    board: Board,
    active: Player,
    last_move: Option<(usize, usize)>,
    status: Status,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Player::One,
            last_move: None,
            status: Status::InProgress,
        }
    }

    /// Replays a game from a string of 1-indexed column digits.
    pub fn from_moves(moves: &str) -> Result<Self> {
        let mut session = Self::new();

        for column_char in moves.chars() {
            match column_char.to_digit(10) {
                Some(column) if column >= 1 => {
                    session.try_move(column as usize - 1)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Row and column of the most recent accepted move.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Attempts a move in `column` (0-indexed) for the active player.
    ///
    /// A rejected move leaves the session untouched: the board, turn
    /// and status are only updated once the move is known to be legal.
    /// Once a player has won, every further attempt is rejected.
    pub fn try_move(&mut self, column: usize) -> Result<Status> {
        if let Status::Won(player) = self.status {
            return Err(anyhow!("The game is over, player {} already won", player));
        }
        if column >= COLS {
            return Err(anyhow!(
                "Invalid move, column out of range. Columns must be between 1 and {}",
                COLS
            ));
        }
        if self.board.column_full(column) {
            return Err(anyhow!("Invalid move, column {} full", column + 1));
        }

        let (board, row) = self.board.with_move(column, self.active);
        self.board = board;
        self.last_move = Some((row, column));

        if self.board.winning_move(self.active, row, column) {
            self.status = Status::Won(self.active);
        } else {
            self.active = self.active.other();
        }
        Ok(self.status)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
