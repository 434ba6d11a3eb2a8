//! Integer pixel geometry shared by sprite sheets and renderers.
//!
//! Canonical space:
//! - Physical image/screen pixels
//! - Origin top-left
//! - +X right, +Y down

mod point;
mod rect;

pub use point::{Point, Size};
pub use rect::Rect;
