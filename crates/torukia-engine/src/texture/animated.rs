use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::anim::{Advance, AnimationState};
use crate::assets::{ImageId, LoadedImage};
use crate::coords::{Point, Rect, Size};
use crate::error::{Error, Result};
use crate::observer::{Observer, Subject};
use crate::render::Renderer;
use crate::sheet::SpriteSheet;

/// Sprite-sheet texture with frame playback.
///
/// Each [`print`](Self::print) is one animation tick: the state advances, the
/// resulting frame is drawn, and if a play-once clip just ran out, subscribers
/// are notified with the texture id after the draw.
pub struct AnimatedTexture {
    id: String,
    image: ImageId,
    sheet: SpriteSheet,
    state: AnimationState,
    subject: Subject<str>,
}

impl AnimatedTexture {
    /// Builds an idle texture on frame 0 with no subscribers.
    pub fn new(id: impl Into<String>, image: LoadedImage, frame: Size, speed: u32) -> Result<Self> {
        let sheet = SpriteSheet::new(image.size, frame)?;
        let state = AnimationState::new(speed)?;
        Ok(Self {
            id: id.into(),
            image: image.id,
            sheet,
            state,
            subject: Subject::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn image(&self) -> ImageId {
        self.image
    }

    #[inline]
    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[inline]
    pub fn subject(&self) -> &Subject<str> {
        &self.subject
    }

    pub fn subscribe<O>(&self, observer: &Rc<RefCell<O>>)
    where
        O: Observer<str> + 'static,
    {
        self.subject.subscribe(observer);
    }

    pub fn unsubscribe<O>(&self, observer: &Rc<RefCell<O>>)
    where
        O: Observer<str> + ?Sized + 'static,
    {
        self.subject.unsubscribe(observer);
    }

    /// Sets the clip range. Both bounds must address frames on the sheet.
    pub fn set_range(&mut self, start: u32, end: u32) -> Result<()> {
        if start > end || end >= self.sheet.frame_count() {
            return Err(Error::InvalidRange { start, end });
        }
        self.state.set_range(start, end)
    }

    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        self.state.set_speed(speed)
    }

    pub fn seek(&mut self, frame: u32) -> Result<()> {
        self.state.seek(frame)
    }

    pub fn play(&mut self, looping: bool) {
        self.state.play(looping);
    }

    pub fn stop(&mut self) {
        self.state.stop();
    }

    /// Sheet rectangle of the current frame.
    #[inline]
    pub fn source_rect(&self) -> Rect {
        self.sheet.source_rect(self.state.current_frame())
    }

    /// Advances one tick, draws the current frame at `pos`, then notifies
    /// subscribers if the clip finished on this tick.
    pub fn print(&mut self, renderer: &mut dyn Renderer, pos: Point) -> Advance {
        let step = self.state.advance();
        renderer.draw(self.image, self.source_rect(), pos);

        if step.is_finished() {
            log::debug!("animation '{}' finished on frame {}", self.id, self.state.current_frame());
            self.subject.notify(&self.id);
        }
        step
    }
}

impl fmt::Debug for AnimatedTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedTexture")
            .field("id", &self.id)
            .field("image", &self.image)
            .field("sheet", &self.sheet)
            .field("state", &self.state)
            .field("subscribers", &self.subject.len())
            .finish()
    }
}
