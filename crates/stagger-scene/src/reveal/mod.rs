//! Staggered reveal engine.
//!
//! This module provides:
//! - **Sequences**: One staggered run over a captured element collection
//! - **Step Timer**: Reusable fixed-interval primitive driving each step
//! - **Coordinator**: Entry point and registry for concurrent sequences
//! - **Events**: Callbacks for sequence lifecycle
//!
//! # Architecture
//!
//! ```text
//! RevealCoordinator
//!   ├── Active RevealSequences (cursor + StepTimer, Pending → Done)
//!   └── EventQueue (Started / Step / Finished)
//! ```

pub mod coordinator;
pub mod events;
pub mod sequence;
pub mod timer;
pub mod types;

pub use coordinator::{RevealCoordinator, RevealError};
pub use events::{EventQueue, RevealEvent};
pub use sequence::RevealSequence;
pub use timer::StepTimer;
pub use types::{
    RevealId, RevealState, DEFAULT_STEP_DELAY_MS, REVEALED_OPACITY, REVEALED_TRANSLATE_Y,
};
