//! Reveal lifecycle events.
//!
//! Events are pushed onto an [`EventQueue`] as sequences start, step,
//! and finish, and can be drained by the host after each update to
//! react to reveal progress.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::types::RevealId;

/// Event emitted when a reveal sequence changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevealEvent {
    /// A sequence was started.
    Started {
        /// The sequence instance ID.
        reveal_id: RevealId,
        /// The selector string the capture was made from.
        selector: String,
        /// Number of elements captured.
        target_count: usize,
    },
    /// One element was revealed.
    Step {
        /// The sequence instance ID.
        reveal_id: RevealId,
        /// Id of the element that was revealed.
        element_id: String,
        /// Zero-based position of the element in the capture.
        position: usize,
    },
    /// A sequence ran past the end of its capture.
    Finished {
        /// The sequence instance ID.
        reveal_id: RevealId,
    },
}

impl RevealEvent {
    /// Get the sequence ID for this event.
    pub fn reveal_id(&self) -> RevealId {
        match self {
            Self::Started { reveal_id, .. }
            | Self::Step { reveal_id, .. }
            | Self::Finished { reveal_id } => *reveal_id,
        }
    }
}

/// FIFO queue of reveal events.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<RevealEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the queue.
    pub fn push(&mut self, event: RevealEvent) {
        self.events.push_back(event);
    }

    /// Drain all queued events in emission order.
    pub fn drain(&mut self) -> Vec<RevealEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
