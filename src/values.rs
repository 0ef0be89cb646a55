//! Insertion history with the input-validation boundary in front of the
//! BST engine.
//!
//! The engine is stateless between calls: whenever the history changes the
//! whole tree is rebuilt from scratch, so the displayed tree always matches
//! exactly one canonical shape for a given insertion order.

use tracing::instrument;

use crate::bst::BstArena;
use crate::errors::{LabError, LabResult};

/// Default cap on stored values. A display policy, not an engine invariant.
pub const DEFAULT_MAX_VALUES: usize = 30;

#[derive(Debug)]
pub struct ValueLog {
    values: Vec<i64>,
    capacity: usize,
}

impl Default for ValueLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VALUES)
    }
}

impl ValueLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::new(),
            capacity,
        }
    }

    /// Appends a validated integer to the history.
    #[instrument(level = "debug", skip(self))]
    pub fn push(&mut self, value: i64) -> LabResult<()> {
        if self.values.len() >= self.capacity {
            return Err(LabError::CapacityExceeded(self.capacity));
        }
        self.values.push(value);
        Ok(())
    }

    /// Parses a textual field and appends it. Non-integer text never reaches
    /// the engine.
    #[instrument(level = "debug", skip(self))]
    pub fn push_str(&mut self, raw: &str) -> LabResult<i64> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| LabError::InvalidInteger(raw.to_string()))?;
        self.push(value)?;
        Ok(value)
    }

    /// Discards the history; subsequent trees are empty.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rebuilds the tree by replaying the full history.
    #[instrument(level = "debug", skip(self))]
    pub fn tree(&self) -> BstArena {
        BstArena::from_sequence(&self.values)
    }
}
