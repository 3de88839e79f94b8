use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::fmt;
use std::io::{stdout, Write};

use crate::{COLS, ROWS, WIN_LENGTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

/// The full grid of tiles, row-major with row 0 at the top.
///
/// A board is never mutated in place: dropping a token produces a new
/// board value, so callers can compare before and after freely.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; COLS * ROWS], // cells are stored left-to-right, top-to-bottom
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; COLS * ROWS],
        }
    }

    fn index(row: usize, column: usize) -> usize {
        column + row * COLS
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[Self::index(row, column)]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The row a token dropped into `column` would land on, scanning
    /// from the bottom row upward. `None` means the column is full.
    ///
    /// `column` is not bounds-checked here, callers supply 0..[`COLS`].
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        (0..ROWS)
            .rev()
            .find(|&row| self.cell(row, column).is_empty())
    }

    pub fn column_full(&self, column: usize) -> bool {
        !self.cell(0, column).is_empty()
    }

    /// Drops a token for `player` into `column`, returning the new
    /// board and the landing row.
    ///
    /// The caller must have already checked the column is playable;
    /// dropping into a full column is a contract violation and panics
    /// rather than corrupting the position.
    pub fn with_move(&self, column: usize, player: Player) -> (Board, usize) {
        let row = match self.lowest_empty_row(column) {
            Some(row) => row,
            None => panic!("move applied to full column {}", column),
        };
        let mut board = self.clone();
        board.cells[Self::index(row, column)] = player.cell();
        (board, row)
    }

    /// Streak scan across `row`, left to right. The running count
    /// resets on any cell not owned by `player`, empty included.
    pub fn row_win(&self, row: usize, player: Player) -> bool {
        let mut streak = 0;
        for column in 0..COLS {
            if self.cell(row, column) == player.cell() {
                streak += 1;
                if streak >= WIN_LENGTH {
                    return true;
                }
            } else {
                streak = 0;
            }
        }
        false
    }

    /// Streak scan down `column`, top to bottom.
    pub fn column_win(&self, column: usize, player: Player) -> bool {
        let mut streak = 0;
        for row in 0..ROWS {
            if self.cell(row, column) == player.cell() {
                streak += 1;
                if streak >= WIN_LENGTH {
                    return true;
                }
            } else {
                streak = 0;
            }
        }
        false
    }

    /// Win test scoped to the row and column of the last move. Only
    /// the just-placed token can start a new streak, so scanning the
    /// rest of the board is unnecessary. Diagonal streaks do not win.
    pub fn winning_move(&self, player: Player, row: usize, column: usize) -> bool {
        self.row_win(row, player) || self.column_win(column, player)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=COLS).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in 0..ROWS {
            for column in 0..COLS {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match self.cell(row, column) {
                            Cell::PlayerOne => Color::Blue,
                            Cell::PlayerTwo => Color::Red,
                            Cell::Empty => Color::White,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
