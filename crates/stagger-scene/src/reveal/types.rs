//! Core reveal types and constants.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Opacity written to an element when it is revealed.
pub const REVEALED_OPACITY: f64 = 1.0;

/// Vertical translation written to an element when it is revealed.
pub const REVEALED_TRANSLATE_Y: f64 = 0.0;

/// Default delay between reveal steps in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: f32 = 100.0;

/// Unique identifier for a reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealId(pub u64);

impl RevealId {
    /// Generate a new unique reveal ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RevealId {
    fn default() -> Self {
        Self::new()
    }
}

/// Current state of a reveal sequence.
///
/// A sequence is `Pending` while elements remain to be revealed and
/// `Done` once the cursor has run past the end of its capture. `Done`
/// is terminal; there are no transitions out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// More elements remain to be revealed.
    Pending,
    /// Every captured element has been revealed (or the capture was empty).
    Done,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_id_uniqueness() {
        let id1 = RevealId::new();
        let id2 = RevealId::new();
        let id3 = RevealId::new();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_reveal_state_default() {
        assert_eq!(RevealState::default(), RevealState::Pending);
    }
}
