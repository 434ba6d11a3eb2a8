use crate::assets::ImageId;
use crate::coords::{Point, Rect};

use super::Renderer;

/// One recorded blit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawItem {
    pub image: ImageId,
    pub source: Rect,
    pub dest: Point,
}

/// Recording renderer. Items are kept in draw-call order.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded items. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Renderer for DrawList {
    fn draw(&mut self, image: ImageId, source: Rect, dest: Point) {
        self.items.push(DrawItem { image, source, dest });
    }
}
