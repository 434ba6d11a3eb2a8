use super::flags::{ContextFlag, ContextFlags, InitFlags};

/// Per-frame context passed to [`App`](super::App) callbacks.
pub struct FrameCtx<'a> {
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
    pub init_flags: InitFlags,
    pub context_flags: &'a mut ContextFlags,
}

impl<'a> FrameCtx<'a> {
    /// Raises or lowers a runtime flag on the engine.
    #[inline]
    pub fn set_flag(&mut self, flag: ContextFlag, value: bool) {
        self.context_flags.set(flag, value);
    }
}
