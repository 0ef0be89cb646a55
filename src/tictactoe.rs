//! Tic-tac-toe board with win-line checking.

use std::fmt;

use tracing::instrument;

use crate::errors::{LabError, LabResult};

/// The eight winning lines on a 3x3 board.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won { mark: Mark, line: [usize; 3] },
    Draw,
}

#[derive(Debug)]
pub struct TicTacToe {
    board: [Option<Mark>; 9],
    next: Mark,
    status: Status,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            next: Mark::X,
            status: Status::InProgress,
        }
    }

    /// Places the next player's mark on `square` (0..9, row-major).
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, square: usize) -> LabResult<Status> {
        if self.status != Status::InProgress {
            return Err(LabError::GameOver);
        }
        if square >= self.board.len() {
            return Err(LabError::OutOfBoard(square));
        }
        if self.board[square].is_some() {
            return Err(LabError::SquareTaken(square));
        }

        self.board[square] = Some(self.next);

        if let Some((mark, line)) = self.check_winner() {
            self.status = Status::Won { mark, line };
        } else if self.board.iter().all(Option::is_some) {
            self.status = Status::Draw;
        } else {
            self.next = self.next.other();
        }
        Ok(self.status)
    }

    fn check_winner(&self) -> Option<(Mark, [usize; 3])> {
        for line in WIN_LINES {
            let [a, b, c] = line;
            if let Some(mark) = self.board[a] {
                if self.board[b] == Some(mark) && self.board[c] == Some(mark) {
                    return Some((mark, line));
                }
            }
        }
        None
    }

    pub fn cell(&self, square: usize) -> Option<Mark> {
        self.board.get(square).copied().flatten()
    }

    pub fn board(&self) -> &[Option<Mark>; 9] {
        &self.board
    }

    pub fn next_player(&self) -> Mark {
        self.next
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Simple 3x3 rendering with `.` for empty squares.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                match self.board[row * 3 + col] {
                    Some(mark) => out.push_str(&mark.to_string()),
                    None => out.push('.'),
                }
                if col < 2 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}
