use crate::assets::{ImageId, LoadedImage};
use crate::coords::{Point, Rect, Size};
use crate::render::Renderer;

/// Static texture: the whole image, drawn as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    id: String,
    image: LoadedImage,
}

impl Texture {
    pub fn new(id: impl Into<String>, image: LoadedImage) -> Self {
        Self { id: id.into(), image }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn image(&self) -> ImageId {
        self.image.id
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.image.size
    }

    pub fn print(&self, renderer: &mut dyn Renderer, pos: Point) {
        let source = Rect::from_origin_size(Point::zero(), self.image.size);
        renderer.draw(self.image.id, source, pos);
    }
}
