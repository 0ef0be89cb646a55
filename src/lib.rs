//! dsalab: terminal playground for classic data structures.
//!
//! Engines are plain in-memory simulations sized for teaching, not load:
//! a binary search tree with path-id assignment and the three depth-first
//! traversal orders, a stepwise traversal playback machine, parking-garage
//! queue/stack simulations, tic-tac-toe, and Towers of Hanoi. The CLI in
//! [`cli`] is the only consumer; everything else is presentation-free.

pub mod bst;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod garage;
pub mod hanoi;
pub mod layout;
pub mod playback;
pub mod tictactoe;
pub mod tree_display;
pub mod util;
pub mod values;

pub use bst::{BstArena, BstNode, Order, Visit};
pub use errors::{LabError, LabResult};
pub use playback::{Playback, PlaybackState};
pub use values::ValueLog;
