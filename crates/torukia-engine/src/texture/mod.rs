//! Drawable textures and the factories that build them.
//!
//! - [`Texture`] blits a whole image.
//! - [`AnimatedTexture`] plays frames of a sprite sheet and notifies its
//!   subscribers with its id when a play-once clip finishes.
//! - [`TextureFactory`] / [`AnimationFactory`] load the backing image once and
//!   stamp out textures that share it.

mod animated;
mod base;
mod factory;

pub use animated::AnimatedTexture;
pub use base::Texture;
pub use factory::{AnimationFactory, TextureFactory};
