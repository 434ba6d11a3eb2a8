//! Engine shell: configuration flags and the platform loop.
//!
//! This module defines the contract between the platform (window, event queue,
//! renderer) and user code. The loop is single-threaded and cooperative: every
//! frame runs `App::logic` then `App::view` to completion before the platform
//! is asked again whether to quit.

mod app;
mod ctx;
mod flags;
mod headless;
mod runtime;

pub use app::{App, AppControl, Platform};
pub use ctx::FrameCtx;
pub use flags::{ContextFlag, ContextFlags, InitFlags};
pub use headless::HeadlessPlatform;
pub use runtime::{Engine, EngineConfig};
