use std::fmt;

use anyhow::{Context, Result};

use super::app::{App, AppControl, Platform};
use super::ctx::FrameCtx;
use super::flags::{ContextFlag, ContextFlags, InitFlags};

/// Engine construction parameters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub name: String,
    pub window_x: i32,
    pub window_y: i32,
    pub window_width: u32,
    pub window_height: u32,
    pub init_flags: InitFlags,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: "torukia".to_string(),
            window_x: 0,
            window_y: 0,
            window_width: 1280,
            window_height: 720,
            init_flags: InitFlags::empty(),
        }
    }
}

/// Engine instance: immutable configuration plus runtime flags.
///
/// Construction does not touch the platform; [`run`](Self::run) does.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    context_flags: ContextFlags,
    frame_index: u64,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            context_flags: ContextFlags::default(),
            frame_index: 0,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn init_flags(&self) -> InitFlags {
        self.config.init_flags
    }

    #[inline]
    pub fn context_flags(&self) -> ContextFlags {
        self.context_flags
    }

    #[inline]
    pub fn set_context_flag(&mut self, flag: ContextFlag, value: bool) {
        self.context_flags.set(flag, value);
    }

    #[inline]
    pub fn set_context_bits(&mut self, bits: u32) {
        self.context_flags.set_bits(bits);
    }

    /// Frames completed across every `run` call.
    #[inline]
    pub fn frames_run(&self) -> u64 {
        self.frame_index
    }

    /// Runs `app` on `platform` until the platform requests quit or the app
    /// returns [`AppControl::Exit`].
    ///
    /// Fails only if the platform cannot initialize. User-code and draw
    /// failures are recorded in the context flags and do not stop the loop.
    pub fn run<P, A>(&mut self, platform: &mut P, app: &mut A) -> Result<()>
    where
        P: Platform + ?Sized,
        A: App + ?Sized,
    {
        log::info!("running '{}'", self.config.name);

        if let Err(e) = platform
            .init(&self.config)
            .with_context(|| format!("'{}' aborted: platform init failed", self.config.name))
        {
            platform.shutdown();
            return Err(e);
        }

        let flags = self.config.init_flags;
        let started_at = self.frame_index;

        while !platform.quit_requested() {
            platform.begin_frame();

            let mut ctx = FrameCtx {
                frame_index: self.frame_index,
                init_flags: flags,
                context_flags: &mut self.context_flags,
            };

            if !flags.no_logic {
                match app.logic(&mut ctx) {
                    Ok(AppControl::Continue) => {}
                    Ok(AppControl::Exit) => {
                        log::info!("'{}' exit requested by app", self.config.name);
                        break;
                    }
                    Err(e) => {
                        log::error!("user logic failed on frame {}: {e:#}", ctx.frame_index);
                        ctx.set_flag(ContextFlag::ErrorUserCode, true);
                    }
                }
            }

            if !flags.no_video {
                app.view(&mut ctx, platform.renderer());
                if platform.renderer().take_failure() {
                    log::error!("renderer reported a failed draw on frame {}", ctx.frame_index);
                    ctx.set_flag(ContextFlag::ErrorGeneral, true);
                }
            }

            self.frame_index += 1;
        }

        platform.shutdown();
        log::info!(
            "'{}' stopped after {} frame(s)",
            self.config.name,
            self.frame_index - started_at
        );
        Ok(())
    }
}

/// Name, then both flag dumps.
impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} engine instance", self.config.name)?;
        writeln!(f, "   Init flags set ->")?;
        write!(f, "{}", self.config.init_flags)?;
        writeln!(f, "   Context flags set ->")?;
        write!(f, "{}", self.context_flags)
    }
}
