//! Renderer boundary.
//!
//! The crate never talks to a graphics API directly. Textures hand a
//! `(image, source rect, destination)` triple to a [`Renderer`]; the embedding
//! code decides what a draw means. [`DrawList`] is the in-process
//! implementation: it records draws for later playback, inspection and tests.

mod list;

pub use list::{DrawItem, DrawList};

use crate::assets::ImageId;
use crate::coords::{Point, Rect};

/// Consumer of sprite blits.
pub trait Renderer {
    /// Copies `source` (pixels of `image`) to the screen with its top-left at `dest`.
    fn draw(&mut self, image: ImageId, source: Rect, dest: Point);

    /// Reports and clears a pending draw failure.
    ///
    /// Draw failures are out-of-band: `draw` never returns an error and is never
    /// retried. The engine loop polls this once per frame.
    fn take_failure(&mut self) -> bool {
        false
    }
}
