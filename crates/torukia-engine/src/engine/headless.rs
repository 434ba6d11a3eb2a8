use anyhow::{bail, Result};

use crate::engine::EngineConfig;
use crate::render::{DrawList, Renderer};

use super::app::Platform;

/// Window-less platform that records draws into a [`DrawList`].
///
/// Quits after a fixed number of frames. The draw list holds the draws of the
/// most recent frame only; it is cleared at the start of each frame.
#[derive(Debug)]
pub struct HeadlessPlatform {
    draw_list: DrawList,
    frame_budget: u64,
    frames: u64,
    earlier_draws: usize,
    running: bool,
}

impl HeadlessPlatform {
    pub fn new(frame_budget: u64) -> Self {
        Self {
            draw_list: DrawList::new(),
            frame_budget,
            frames: 0,
            earlier_draws: 0,
            running: false,
        }
    }

    /// Draws recorded during the last frame.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draws recorded over the whole run.
    #[inline]
    pub fn total_draws(&self) -> usize {
        self.earlier_draws + self.draw_list.len()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Platform for HeadlessPlatform {
    fn init(&mut self, config: &EngineConfig) -> Result<()> {
        if self.running {
            bail!("headless platform already initialized");
        }
        if config.init_flags.opengl_context {
            log::warn!("'{}': OpenGL context requested on a headless platform; ignored", config.name);
        }
        log::info!(
            "'{}': headless {}x{}, {} frame budget",
            config.name,
            config.window_width,
            config.window_height,
            self.frame_budget
        );
        self.running = true;
        Ok(())
    }

    fn quit_requested(&mut self) -> bool {
        self.frames >= self.frame_budget
    }

    fn begin_frame(&mut self) {
        self.earlier_draws += self.draw_list.len();
        self.draw_list.clear();
        self.frames += 1;
    }

    fn renderer(&mut self) -> &mut dyn Renderer {
        &mut self.draw_list
    }

    fn shutdown(&mut self) {
        self.running = false;
    }
}
