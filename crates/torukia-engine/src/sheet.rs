//! Sprite-sheet geometry.
//!
//! Frames are laid out row-major: frame `i` sits at column `i % columns`,
//! row `i / columns`. Pixels to the right of the last full column or below the
//! last full row are not addressable as frames.

use crate::coords::{Point, Rect, Size};
use crate::error::{Error, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    image: Size,
    frame: Size,
}

impl SpriteSheet {
    /// Fails with [`Error::InvalidFrameSize`] when a frame dimension is zero or
    /// the frame does not fit inside the image.
    pub fn new(image: Size, frame: Size) -> Result<Self> {
        if frame.is_empty() || !frame.fits_in(image) {
            return Err(Error::InvalidFrameSize {
                width: frame.w,
                height: frame.h,
            });
        }
        Ok(Self { image, frame })
    }

    #[inline]
    pub fn image_size(&self) -> Size {
        self.image
    }

    #[inline]
    pub fn frame_size(&self) -> Size {
        self.frame
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.image.w / self.frame.w
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.image.h / self.frame.h
    }

    /// Number of addressable frames. At least 1.
    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.columns() * self.rows()
    }

    /// Source rectangle of `frame` inside the image.
    ///
    /// Indices past the last frame wrap around the sheet.
    pub fn source_rect(&self, frame: u32) -> Rect {
        let frame = frame % self.frame_count();
        let col = frame % self.columns();
        let row = frame / self.columns();
        let rect = Rect::new(
            (col * self.frame.w) as i32,
            (row * self.frame.h) as i32,
            self.frame.w,
            self.frame.h,
        );
        debug_assert!(Rect::from_origin_size(Point::zero(), self.image).contains_rect(rect));
        rect
    }
}
