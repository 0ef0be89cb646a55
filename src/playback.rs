//! Stepwise playback of a precomputed traversal sequence.
//!
//! Explicit state machine with states Idle, Playing(index), Done. A tick
//! reveals the next element in strict sequence order; cancel returns to Idle
//! and discards progress. The machine never sleeps: the caller owns the
//! timer and drives ticks at whatever interval it likes.

use itertools::Itertools;
use tracing::instrument;

use crate::bst::Visit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing(usize),
    Done,
}

#[derive(Debug)]
pub struct Playback {
    steps: Vec<Visit>,
    state: PlaybackState,
}

impl Playback {
    pub fn new(steps: Vec<Visit>) -> Self {
        Self {
            steps,
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn steps(&self) -> &[Visit] {
        &self.steps
    }

    /// Advances one step and returns the newly revealed visit.
    ///
    /// Returns None once every step has been revealed (or immediately for an
    /// empty sequence), leaving the machine in Done.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self) -> Option<&Visit> {
        let next = match self.state {
            PlaybackState::Idle => 0,
            PlaybackState::Playing(index) => index + 1,
            PlaybackState::Done => return None,
        };
        if next >= self.steps.len() {
            self.state = PlaybackState::Done;
            return None;
        }
        self.state = PlaybackState::Playing(next);
        self.steps.get(next)
    }

    /// Tears the playback down: back to Idle, nothing revealed.
    #[instrument(level = "trace", skip(self))]
    pub fn cancel(&mut self) {
        self.state = PlaybackState::Idle;
    }

    /// The visit currently highlighted, if any.
    pub fn current(&self) -> Option<&Visit> {
        match self.state {
            PlaybackState::Playing(index) => self.steps.get(index),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state == PlaybackState::Done
    }

    /// Steps revealed so far, in reveal order.
    pub fn revealed(&self) -> &[Visit] {
        match self.state {
            PlaybackState::Idle => &[],
            PlaybackState::Playing(index) => &self.steps[..=index],
            PlaybackState::Done => &self.steps,
        }
    }

    /// Display strip of the revealed values, e.g. `5 -> 3 -> 1`.
    pub fn transcript(&self) -> String {
        self.revealed().iter().map(|v| v.value.to_string()).join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Vec<Visit> {
        vec![
            Visit {
                path_id: "1".into(),
                value: 5,
            },
            Visit {
                path_id: "1L".into(),
                value: 3,
            },
        ]
    }

    #[test]
    fn given_idle_playback_when_ticking_then_reveals_first_step() {
        let mut playback = Playback::new(steps());
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert!(playback.revealed().is_empty());

        let visit = playback.tick().cloned().unwrap();
        assert_eq!(visit.value, 5);
        assert_eq!(playback.state(), PlaybackState::Playing(0));
        assert_eq!(playback.current().unwrap().path_id, "1");
    }

    #[test]
    fn given_running_playback_when_exhausted_then_reaches_done_once() {
        let mut playback = Playback::new(steps());
        assert!(playback.tick().is_some());
        assert!(playback.tick().is_some());

        assert!(playback.tick().is_none());
        assert!(playback.is_done());
        assert_eq!(playback.transcript(), "5 -> 3");

        // Further ticks stay Done
        assert!(playback.tick().is_none());
        assert_eq!(playback.state(), PlaybackState::Done);
    }

    #[test]
    fn given_running_playback_when_cancelled_then_progress_is_discarded() {
        let mut playback = Playback::new(steps());
        playback.tick();
        playback.cancel();

        assert_eq!(playback.state(), PlaybackState::Idle);
        assert!(playback.current().is_none());
        assert_eq!(playback.transcript(), "");
    }

    #[test]
    fn given_empty_sequence_when_ticking_then_immediately_done() {
        let mut playback = Playback::new(Vec::new());
        assert!(playback.tick().is_none());
        assert!(playback.is_done());
    }
}
