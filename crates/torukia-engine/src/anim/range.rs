use crate::error::{Error, Result};

/// Inclusive `[start, end]` bounds on playable frame indices.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FrameRange {
    start: u32,
    end: u32,
}

impl FrameRange {
    /// Fails with [`Error::InvalidRange`] when `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub const fn start(self) -> u32 {
        self.start
    }

    #[inline]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Number of frames covered. Never zero.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start + 1
    }

    #[inline]
    pub const fn contains(self, frame: u32) -> bool {
        frame >= self.start && frame <= self.end
    }
}
