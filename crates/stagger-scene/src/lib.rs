//! Scene model and staggered reveal engine.
//!
//! A [`Scene`] holds visual elements in document order. The [`reveal`]
//! module drives the staggered reveal effect: elements matching a
//! selector are captured once and made visible one at a time, with a
//! fixed delay between steps.

pub mod reveal;
pub mod scene;
pub mod selector;

pub use reveal::{
    EventQueue, RevealCoordinator, RevealError, RevealEvent, RevealId, RevealSequence,
    RevealState, StepTimer, DEFAULT_STEP_DELAY_MS, REVEALED_OPACITY, REVEALED_TRANSLATE_Y,
};
pub use scene::{Element, ElementStyle, Scene};
pub use selector::{Selector, SelectorError, SimpleSelector};
