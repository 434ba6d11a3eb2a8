//! Animation playback.
//!
//! Time is measured in draw requests ("ticks"), not wall-clock seconds: each
//! call to [`AnimationState::advance`] is one tick, and `speed` ticks make one
//! frame step. This keeps playback deterministic and independent of the
//! platform frame clock.

mod range;
mod state;

pub use range::FrameRange;
pub use state::{Advance, AnimationState, Playback};
