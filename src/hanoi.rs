//! Towers of Hanoi with legal-move checking.
//!
//! Disks are numbered 1 (smallest) to n; pegs hold them bottom-up. A move is
//! legal when the source peg is non-empty and the destination is empty or
//! topped by a larger disk. The puzzle is solved when every disk sits on the
//! last peg.

use tracing::instrument;

use crate::errors::{LabError, LabResult};

pub const MIN_DISKS: u8 = 3;
pub const MAX_DISKS: u8 = 5;
pub const PEGS: usize = 3;

#[derive(Debug)]
pub struct Hanoi {
    pegs: [Vec<u8>; PEGS],
    disks: u8,
    moves: usize,
}

impl Hanoi {
    /// Sets up `disks` disks on the first peg, largest at the bottom.
    #[instrument(level = "debug")]
    pub fn new(disks: u8) -> LabResult<Self> {
        if !(MIN_DISKS..=MAX_DISKS).contains(&disks) {
            return Err(LabError::InvalidDiskCount {
                min: MIN_DISKS,
                max: MAX_DISKS,
                got: disks,
            });
        }
        Ok(Self {
            pegs: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
            disks,
            moves: 0,
        })
    }

    /// Moves the top disk from `from` to `to`, counting the move.
    ///
    /// Returns the disk that was moved.
    #[instrument(level = "debug", skip(self))]
    pub fn move_disk(&mut self, from: usize, to: usize) -> LabResult<u8> {
        if from >= PEGS {
            return Err(LabError::InvalidPeg(from));
        }
        if to >= PEGS {
            return Err(LabError::InvalidPeg(to));
        }
        if from == to {
            return Err(LabError::SamePeg);
        }
        let disk = *self.pegs[from].last().ok_or(LabError::EmptyPeg(from))?;
        if let Some(&top) = self.pegs[to].last() {
            if top < disk {
                return Err(LabError::LargerOnSmaller { disk, onto: top });
            }
        }
        self.pegs[from].pop();
        self.pegs[to].push(disk);
        self.moves += 1;
        Ok(disk)
    }

    pub fn is_solved(&self) -> bool {
        self.pegs[PEGS - 1].len() == self.disks as usize
    }

    /// Optimal solution length: 2^n - 1.
    pub fn min_moves(&self) -> usize {
        (1 << self.disks) - 1
    }

    pub fn exceeded_min(&self) -> bool {
        self.moves > self.min_moves()
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn disks(&self) -> u8 {
        self.disks
    }

    /// Disks on peg `peg`, bottom first. Out-of-range pegs read as empty.
    pub fn peg(&self, peg: usize) -> &[u8] {
        self.pegs.get(peg).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Back to the initial position, move count reset.
    pub fn reset(&mut self) {
        self.pegs = [(1..=self.disks).rev().collect(), Vec::new(), Vec::new()];
        self.moves = 0;
    }

    /// One line per peg, e.g. `peg 0: 3 2 1`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, peg) in self.pegs.iter().enumerate() {
            let disks: Vec<String> = peg.iter().map(|d| d.to_string()).collect();
            out.push_str(&format!("peg {}: {}\n", i, disks.join(" ")));
        }
        out
    }
}
