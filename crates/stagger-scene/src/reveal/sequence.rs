//! Runtime state for one staggered reveal run.

use super::timer::StepTimer;
use super::types::{RevealId, RevealState};

/// One staggered run over a captured element collection.
///
/// The sequence owns the capture (ordered element ids), a cursor, and
/// a [`StepTimer`]. It is a two-state machine: `Pending` while the
/// cursor is inside the capture, `Done` once it runs past the end. An
/// empty capture is `Done` from the start.
///
/// The sequence only decides *when* an element is due and *which* one
/// it is; applying the style mutation is the coordinator's job.
#[derive(Debug, Clone)]
pub struct RevealSequence {
    /// Unique identifier for this sequence.
    pub id: RevealId,
    /// Captured element ids, in document order at capture time.
    targets: Vec<String>,
    /// Zero-based cursor into `targets`.
    cursor: usize,
    /// Timer gating the gap between consecutive steps.
    timer: StepTimer,
    /// Current state.
    pub state: RevealState,
}

impl RevealSequence {
    /// Create a sequence over the given capture.
    pub fn new(targets: Vec<String>, delay_ms: f32) -> Self {
        let state = if targets.is_empty() {
            RevealState::Done
        } else {
            RevealState::Pending
        };
        Self {
            id: RevealId::new(),
            targets,
            cursor: 0,
            timer: StepTimer::new(delay_ms),
            state,
        }
    }

    /// Take the step at the cursor immediately, without consulting the
    /// timer. Used for the synchronous first step at start time.
    ///
    /// Returns the position and element id of the step, or `None` if
    /// the sequence is already `Done`.
    pub fn next_step(&mut self) -> Option<(usize, String)> {
        if self.state == RevealState::Done {
            return None;
        }
        let position = self.cursor;
        let element_id = self.targets[position].clone();
        self.cursor += 1;
        if self.cursor >= self.targets.len() {
            self.state = RevealState::Done;
        }
        Some((position, element_id))
    }

    /// Advance time by `delta_ms` and take the next step if its delay
    /// has elapsed.
    ///
    /// At most one step fires per call, and the timer restarts on
    /// fire, so consecutive steps are always separated by at least the
    /// configured delay. Updating a `Done` sequence does nothing.
    pub fn update(&mut self, delta_ms: f32) -> Option<(usize, String)> {
        if self.state == RevealState::Done {
            return None;
        }
        if self.timer.advance(delta_ms) {
            self.next_step()
        } else {
            None
        }
    }

    /// Check if this sequence still has elements to reveal.
    pub fn is_active(&self) -> bool {
        self.state == RevealState::Pending
    }

    /// Number of elements captured by this sequence.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of elements not yet revealed.
    pub fn remaining(&self) -> usize {
        self.targets.len() - self.cursor
    }

    /// The configured delay between steps in milliseconds.
    pub fn delay_ms(&self) -> f32 {
        self.timer.interval_ms()
    }
}
