//! Reveal coordinator: entry point and registry for reveal sequences.
//!
//! The `RevealCoordinator` owns all in-flight sequences. Starting a
//! reveal is an explicit call, not a load-time side effect, and each
//! sequence carries its own id and cursor, so overlapping reveals
//! interleave without sharing state.
//!
//! # Usage
//!
//! ```ignore
//! use stagger_scene::reveal::RevealCoordinator;
//!
//! let mut coordinator = RevealCoordinator::new();
//! let id = coordinator.start_reveal(&mut scene, ".product", 100.0)?;
//!
//! // Each frame, advance by the elapsed time and drain events.
//! coordinator.update(&mut scene, delta_ms);
//! for event in coordinator.drain_events() {
//!     // React to Started / Step / Finished
//! }
//! ```

use std::collections::HashMap;

use thiserror::Error;

use super::events::{EventQueue, RevealEvent};
use super::sequence::RevealSequence;
use super::types::{RevealId, REVEALED_OPACITY, REVEALED_TRANSLATE_Y};
use crate::scene::Scene;
use crate::selector::{Selector, SelectorError};

/// Error returned when a reveal cannot be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("invalid selector `{selector}`")]
    InvalidSelector {
        selector: String,
        #[source]
        source: SelectorError,
    },
}

/// Central registry for all active reveal sequences.
#[derive(Debug, Default)]
pub struct RevealCoordinator {
    /// Active sequences indexed by their ID.
    sequences: HashMap<RevealId, RevealSequence>,

    /// Queue of lifecycle events emitted during starts and updates.
    event_queue: EventQueue,
}

static_assertions::assert_impl_all!(RevealCoordinator: Send);

impl RevealCoordinator {
    /// Create a new coordinator with no active sequences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a staggered reveal over every element currently matching
    /// `selector`, in document order.
    ///
    /// The element at position 0 is revealed immediately; each
    /// subsequent element follows after `delay_ms`. A selector that
    /// matches nothing yields a sequence that finishes immediately
    /// with zero mutations.
    ///
    /// # Errors
    /// Returns [`RevealError::InvalidSelector`] if the selector fails
    /// to parse. A valid selector never fails, whatever it matches.
    pub fn start_reveal(
        &mut self,
        scene: &mut Scene,
        selector: &str,
        delay_ms: f32,
    ) -> Result<RevealId, RevealError> {
        let parsed: Selector = selector.parse().map_err(|source| {
            RevealError::InvalidSelector {
                selector: selector.to_string(),
                source,
            }
        })?;

        let targets = scene.query(&parsed);
        let mut sequence = RevealSequence::new(targets, delay_ms);
        let id = sequence.id;

        tracing::debug!(
            reveal_id = id.0,
            selector,
            target_count = sequence.target_count(),
            "starting reveal"
        );
        self.event_queue.push(RevealEvent::Started {
            reveal_id: id,
            selector: selector.to_string(),
            target_count: sequence.target_count(),
        });

        // The first element is revealed synchronously at start time;
        // the delay only separates consecutive steps.
        if let Some((position, element_id)) = sequence.next_step() {
            self.apply_step(scene, id, position, element_id);
        }

        if sequence.is_active() {
            self.sequences.insert(id, sequence);
        } else {
            self.event_queue.push(RevealEvent::Finished { reveal_id: id });
        }

        Ok(id)
    }

    /// Advance all active sequences by the given delta time.
    ///
    /// This should be called once per tick with the elapsed time in
    /// milliseconds. Sequences whose delay has elapsed take exactly
    /// one step; finished sequences are retired with a `Finished`
    /// event.
    pub fn update(&mut self, scene: &mut Scene, delta_ms: f32) {
        if self.sequences.is_empty() {
            return;
        }

        let mut due_steps = Vec::new();
        let mut finished_ids = Vec::new();
        for (id, sequence) in self.sequences.iter_mut() {
            if let Some((position, element_id)) = sequence.update(delta_ms) {
                due_steps.push((*id, position, element_id));
            }
            if !sequence.is_active() {
                finished_ids.push(*id);
            }
        }

        for (id, position, element_id) in due_steps {
            self.apply_step(scene, id, position, element_id);
        }

        for id in finished_ids {
            self.sequences.remove(&id);
            self.event_queue.push(RevealEvent::Finished { reveal_id: id });
        }
    }

    /// Drain all pending lifecycle events in emission order.
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        self.event_queue.drain()
    }

    /// Check if a sequence is still running.
    pub fn is_active(&self, id: RevealId) -> bool {
        self.sequences.contains_key(&id)
    }

    /// Get a reference to an active sequence by ID.
    pub fn sequence(&self, id: RevealId) -> Option<&RevealSequence> {
        self.sequences.get(&id)
    }

    /// Number of sequences still running.
    pub fn active_count(&self) -> usize {
        self.sequences.len()
    }

    /// Reveal one element and record the step event.
    ///
    /// An id that no longer resolves in the scene is skipped; the
    /// cursor has already advanced, so order and count guarantees hold
    /// for the surviving elements.
    fn apply_step(&mut self, scene: &mut Scene, id: RevealId, position: usize, element_id: String) {
        match scene.element_mut(&element_id) {
            Some(element) => {
                element.style.opacity = REVEALED_OPACITY;
                element.style.translate_y = REVEALED_TRANSLATE_Y;
            }
            None => {
                tracing::warn!(
                    reveal_id = id.0,
                    element_id = %element_id,
                    "captured element no longer in scene, skipping"
                );
            }
        }
        self.event_queue.push(RevealEvent::Step {
            reveal_id: id,
            element_id,
            position,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Element, ElementStyle};

    fn hidden_products(n: usize) -> Scene {
        let mut scene = Scene::new();
        for i in 0..n {
            scene.add(
                Element::new(format!("product-{i}"), "li")
                    .with_class("product")
                    .with_style(ElementStyle::hidden(24.0)),
            );
        }
        scene
    }

    fn revealed_ids(events: &[RevealEvent]) -> Vec<String> {
        events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::Step { element_id, .. } => Some(element_id.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let mut scene = hidden_products(2);
        let mut coordinator = RevealCoordinator::new();
        let err = coordinator
            .start_reveal(&mut scene, ".product > li", 100.0)
            .unwrap_err();
        assert!(matches!(err, RevealError::InvalidSelector { .. }));
        assert_eq!(coordinator.active_count(), 0);
    }

    #[test]
    fn test_first_element_revealed_at_start() {
        let mut scene = hidden_products(3);
        let mut coordinator = RevealCoordinator::new();
        let id = coordinator.start_reveal(&mut scene, ".product", 100.0).unwrap();

        assert!(coordinator.is_active(id));
        let first = scene.element("product-0").unwrap();
        assert_eq!(first.style.opacity, REVEALED_OPACITY);
        assert_eq!(first.style.translate_y, REVEALED_TRANSLATE_Y);
        // The rest are still hidden.
        assert_eq!(scene.element("product-1").unwrap().style.opacity, 0.0);

        let events = coordinator.drain_events();
        assert!(matches!(
            events[0],
            RevealEvent::Started { target_count: 3, .. }
        ));
        assert!(matches!(events[1], RevealEvent::Step { position: 0, .. }));
    }

    #[test]
    fn test_full_run_reveals_all_in_order() {
        let mut scene = hidden_products(3);
        let mut coordinator = RevealCoordinator::new();
        let id = coordinator.start_reveal(&mut scene, ".product", 100.0).unwrap();

        // Tick in 50ms slices: steps land at t=100 and t=200.
        for _ in 0..4 {
            coordinator.update(&mut scene, 50.0);
        }

        assert!(!coordinator.is_active(id));
        for i in 0..3 {
            let element = scene.element(&format!("product-{i}")).unwrap();
            assert_eq!(element.style.opacity, REVEALED_OPACITY);
            assert_eq!(element.style.translate_y, REVEALED_TRANSLATE_Y);
        }

        let events = coordinator.drain_events();
        assert_eq!(
            revealed_ids(&events),
            vec!["product-0", "product-1", "product-2"]
        );
        assert!(matches!(events.last(), Some(RevealEvent::Finished { .. })));
    }

    #[test]
    fn test_empty_capture_finishes_immediately() {
        let mut scene = hidden_products(2);
        let mut coordinator = RevealCoordinator::new();
        let id = coordinator.start_reveal(&mut scene, ".missing", 100.0).unwrap();

        assert!(!coordinator.is_active(id));
        let events = coordinator.drain_events();
        assert!(matches!(
            events.as_slice(),
            [
                RevealEvent::Started { target_count: 0, .. },
                RevealEvent::Finished { .. }
            ]
        ));
        // No mutations happened.
        assert_eq!(scene.element("product-0").unwrap().style.opacity, 0.0);
    }

    #[test]
    fn test_update_without_sequences_is_a_no_op() {
        let mut scene = hidden_products(1);
        let mut coordinator = RevealCoordinator::new();
        coordinator.update(&mut scene, 1000.0);
        assert!(coordinator.drain_events().is_empty());
        assert_eq!(scene.element("product-0").unwrap().style.opacity, 0.0);
    }

    #[test]
    fn test_element_removed_between_capture_and_step() {
        let mut scene = hidden_products(3);
        let mut coordinator = RevealCoordinator::new();
        let id = coordinator.start_reveal(&mut scene, ".product", 100.0).unwrap();

        // product-1 disappears before its step comes due. Its step is
        // skipped; the sequence keeps going and still finishes.
        scene.remove("product-1").unwrap();
        coordinator.update(&mut scene, 100.0);
        coordinator.update(&mut scene, 100.0);

        assert!(!coordinator.is_active(id));
        assert_eq!(scene.element("product-2").unwrap().style.opacity, 1.0);
        // The skipped step is still reported, in capture order.
        let events = coordinator.drain_events();
        assert_eq!(
            revealed_ids(&events),
            vec!["product-0", "product-1", "product-2"]
        );
    }

    #[test]
    fn test_overlapping_sequences_keep_independent_cursors() {
        let mut scene = hidden_products(4);
        let mut coordinator = RevealCoordinator::new();

        let slow = coordinator.start_reveal(&mut scene, ".product", 200.0).unwrap();
        let fast = coordinator.start_reveal(&mut scene, "#product-2", 50.0).unwrap();
        // fast captured a single element and finished at start.
        assert!(!coordinator.is_active(fast));
        assert!(coordinator.is_active(slow));
        assert_eq!(coordinator.active_count(), 1);

        assert_eq!(coordinator.sequence(slow).unwrap().remaining(), 3);
        coordinator.update(&mut scene, 200.0);
        assert_eq!(coordinator.sequence(slow).unwrap().remaining(), 2);
    }
}
