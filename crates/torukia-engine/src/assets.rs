//! Asset loading boundary.
//!
//! Image pixels belong to whoever renders them; this crate only needs a stable
//! handle and the image dimensions to lay out sprite sheets.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::coords::Size;

/// Opaque handle to an image owned by the renderer / asset cache.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u32);

/// A loaded image: its handle plus its pixel dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub id: ImageId,
    pub size: Size,
}

/// Loads images from paths.
pub trait AssetLoader {
    fn load_image(&mut self, path: &Path) -> Result<LoadedImage>;
}

/// Path-keyed image registry.
///
/// Reads only the image header (via `image::image_dimensions`); loading the
/// same path twice returns the cached handle.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<PathBuf, LoadedImage>,
    next_id: u32,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<LoadedImage> {
        self.entries.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetLoader for ImageCache {
    fn load_image(&mut self, path: &Path) -> Result<LoadedImage> {
        if let Some(hit) = self.get(path) {
            return Ok(hit);
        }

        let (w, h) = image::image_dimensions(path)
            .with_context(|| format!("failed to read image header: {}", path.display()))?;

        let loaded = LoadedImage {
            id: ImageId(self.next_id),
            size: Size::new(w, h),
        };
        self.next_id += 1;
        self.entries.insert(path.to_path_buf(), loaded);

        log::debug!("loaded {} ({w}x{h}) as {:?}", path.display(), loaded.id);
        Ok(loaded)
    }
}
