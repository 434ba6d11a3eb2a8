use anyhow::Result;

use crate::engine::EngineConfig;
use crate::render::Renderer;

use super::ctx::FrameCtx;

/// Control directive returned by [`App::logic`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// User code driven by [`Engine::run`](super::Engine::run).
pub trait App {
    /// Game logic for one frame. Skipped when `no_logic` is set.
    ///
    /// An error raises `ContextFlag::ErrorUserCode`; the loop keeps running.
    fn logic(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl> {
        let _ = ctx;
        Ok(AppControl::Continue)
    }

    /// Draws one frame. Skipped when `no_video` is set.
    fn view(&mut self, ctx: &mut FrameCtx<'_>, renderer: &mut dyn Renderer);
}

/// Window, event queue and renderer owner.
pub trait Platform {
    /// Brings up the subsystems enabled by `config.init_flags`.
    fn init(&mut self, config: &EngineConfig) -> Result<()>;

    /// Polled once per frame, before anything else runs.
    fn quit_requested(&mut self) -> bool;

    /// Called at the start of every frame that will run.
    fn begin_frame(&mut self) {}

    fn renderer(&mut self) -> &mut dyn Renderer;

    /// Tears down whatever `init` brought up. Also called after a failed `init`.
    fn shutdown(&mut self);
}
