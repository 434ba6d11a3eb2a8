use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::assets::{AssetLoader, LoadedImage};
use crate::coords::Size;
use crate::error::{Error, Result};
use crate::observer::Observer;

use super::{AnimatedTexture, Texture};

/// Loads one image and builds [`Texture`]s on it.
///
/// A load failure does not fail construction; it is kept and reported as
/// [`Error::AssetNotLoaded`] by every `make` call.
#[derive(Debug, Clone)]
pub struct TextureFactory {
    asset_path: PathBuf,
    image: std::result::Result<LoadedImage, String>,
}

impl TextureFactory {
    pub fn new(loader: &mut dyn AssetLoader, path: impl AsRef<Path>) -> Self {
        let asset_path = path.as_ref().to_path_buf();
        let image = loader.load_image(&asset_path).map_err(|e| {
            log::warn!("texture asset {} failed to load: {e:#}", asset_path.display());
            format!("{e:#}")
        });
        Self { asset_path, image }
    }

    #[inline]
    pub fn asset_path(&self) -> &Path {
        &self.asset_path
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.image.is_ok()
    }

    /// Image dimensions, if the image loaded.
    pub fn asset_dimensions(&self) -> Option<Size> {
        self.image.as_ref().ok().map(|img| img.size)
    }

    /// The backing image, or [`Error::AssetNotLoaded`].
    pub fn image(&self) -> Result<LoadedImage> {
        self.image.clone().map_err(|reason| Error::AssetNotLoaded {
            path: self.asset_path.clone(),
            reason,
        })
    }

    pub fn make(&self, id: impl Into<String>) -> Result<Texture> {
        Ok(Texture::new(id, self.image()?))
    }
}

/// Builds [`AnimatedTexture`]s that share one sprite sheet and default speed.
#[derive(Debug, Clone)]
pub struct AnimationFactory {
    texture: TextureFactory,
    frame: Size,
    default_speed: u32,
}

impl AnimationFactory {
    /// Loads the sheet at `path`.
    ///
    /// Fails right away on a zero frame dimension or a zero speed. A failed
    /// image load is deferred to [`make`](Self::make).
    pub fn new(
        loader: &mut dyn AssetLoader,
        path: impl AsRef<Path>,
        frame: Size,
        default_speed: u32,
    ) -> Result<Self> {
        if frame.is_empty() {
            return Err(Error::InvalidFrameSize {
                width: frame.w,
                height: frame.h,
            });
        }
        if default_speed < 1 {
            return Err(Error::InvalidSpeed { speed: default_speed });
        }

        Ok(Self {
            texture: TextureFactory::new(loader, path),
            frame,
            default_speed,
        })
    }

    #[inline]
    pub fn texture(&self) -> &TextureFactory {
        &self.texture
    }

    #[inline]
    pub fn frame_size(&self) -> Size {
        self.frame
    }

    #[inline]
    pub fn default_speed(&self) -> u32 {
        self.default_speed
    }

    /// Builds a new texture with `manager` as its only subscriber.
    ///
    /// The caller owns the returned texture outright.
    pub fn make<M>(&self, id: impl Into<String>, manager: &Rc<RefCell<M>>) -> Result<AnimatedTexture>
    where
        M: Observer<str> + 'static,
    {
        let image = self.texture.image()?;
        let texture = AnimatedTexture::new(id, image, self.frame, self.default_speed)?;
        texture.subscribe(manager);
        Ok(texture)
    }
}
