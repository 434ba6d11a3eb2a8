//! Torukia engine crate.
//!
//! A small 2D prototype core: a typed observer mechanism and sprite-sheet
//! animation playback, with thin boundaries to the renderer, the asset loader
//! and the platform loop.

pub mod anim;
pub mod assets;
pub mod coords;
pub mod engine;
pub mod manager;
pub mod observer;
pub mod render;
pub mod sheet;
pub mod texture;

pub mod logging;

mod error;

pub use error::{Error, Result};
