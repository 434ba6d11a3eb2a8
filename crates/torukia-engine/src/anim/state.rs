use crate::error::{Error, Result};

use super::FrameRange;

/// Observable playback mode, derived from the state flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Playback {
    /// Time does not advance; the current frame is drawn on every request.
    Idle,
    /// Advancing, wrapping to `range.start` after `range.end`.
    PlayingLoop,
    /// Advancing, stopping on `range.end`.
    PlayingOnce,
    /// A play-once clip ran past its last frame. Time no longer advances.
    Finished,
}

/// Result of a single [`AnimationState::advance`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Advance {
    /// Not animated; nothing changed.
    Idle,
    /// Tick counted, frame unchanged.
    Held,
    /// Moved to the next frame.
    Stepped,
    /// Moved past `range.end` and wrapped to `range.start`.
    Wrapped,
    /// Moved past `range.end` in play-once mode; playback stopped on `range.end`.
    Finished,
}

impl Advance {
    #[inline]
    pub fn is_finished(self) -> bool {
        self == Advance::Finished
    }

    #[inline]
    pub fn frame_changed(self) -> bool {
        matches!(self, Advance::Stepped | Advance::Wrapped)
    }
}

/// Frame-range playback state for one sprite sheet.
///
/// # Invariants
///
/// - `range.start <= current_frame <= range.end`
/// - `0 <= tick < speed`, `speed >= 1`
///
/// Every mutator validates its input first and leaves the state untouched on
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    current_frame: u32,
    range: FrameRange,
    speed: u32,
    tick: u32,
    is_animated: bool,
    looping: bool,
    finished: bool,
}

impl AnimationState {
    /// Creates an idle state on the zero range `[0, 0]`.
    pub fn new(speed: u32) -> Result<Self> {
        check_speed(speed)?;
        Ok(Self {
            current_frame: 0,
            range: FrameRange::default(),
            speed,
            tick: 0,
            is_animated: false,
            looping: false,
            finished: false,
        })
    }

    #[inline]
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    #[inline]
    pub fn range(&self) -> FrameRange {
        self.range
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[inline]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        self.is_animated
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn playback(&self) -> Playback {
        match (self.is_animated, self.looping) {
            (true, true) => Playback::PlayingLoop,
            (true, false) => Playback::PlayingOnce,
            (false, _) if self.finished => Playback::Finished,
            (false, _) => Playback::Idle,
        }
    }

    /// Replaces the range and rewinds to its first frame.
    ///
    /// Playback mode is left as is.
    pub fn set_range(&mut self, start: u32, end: u32) -> Result<()> {
        let range = FrameRange::new(start, end)?;
        self.range = range;
        self.current_frame = range.start();
        self.tick = 0;
        self.finished = false;
        Ok(())
    }

    /// Changes the number of ticks per frame. Restarts the current frame's tick count.
    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        check_speed(speed)?;
        self.speed = speed;
        self.tick = 0;
        Ok(())
    }

    /// Jumps to `frame`, which must lie inside the current range.
    pub fn seek(&mut self, frame: u32) -> Result<()> {
        if !self.range.contains(frame) {
            return Err(Error::InvalidFrame {
                frame,
                start: self.range.start(),
                end: self.range.end(),
            });
        }
        self.current_frame = frame;
        self.tick = 0;
        self.finished = false;
        Ok(())
    }

    /// Starts advancing from the current frame.
    pub fn play(&mut self, looping: bool) {
        self.is_animated = true;
        self.looping = looping;
        self.finished = false;
    }

    /// Freezes on the current frame.
    pub fn stop(&mut self) {
        self.is_animated = false;
    }

    /// Counts one tick and steps the frame once `speed` ticks have elapsed.
    pub fn advance(&mut self) -> Advance {
        if !self.is_animated {
            return Advance::Idle;
        }

        self.tick += 1;
        if self.tick < self.speed {
            return Advance::Held;
        }
        self.tick = 0;

        if self.current_frame < self.range.end() {
            self.current_frame += 1;
            return Advance::Stepped;
        }

        if self.looping {
            self.current_frame = self.range.start();
            Advance::Wrapped
        } else {
            self.current_frame = self.range.end();
            self.is_animated = false;
            self.finished = true;
            Advance::Finished
        }
    }
}

#[inline]
fn check_speed(speed: u32) -> Result<()> {
    if speed < 1 {
        return Err(Error::InvalidSpeed { speed });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looping(speed: u32, start: u32, end: u32) -> AnimationState {
        let mut s = AnimationState::new(speed).unwrap();
        s.set_range(start, end).unwrap();
        s.play(true);
        s
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_state_is_idle_on_zero_range() {
        let s = AnimationState::new(4).unwrap();
        assert_eq!(s.current_frame(), 0);
        assert_eq!(s.range(), FrameRange::default());
        assert_eq!(s.tick(), 0);
        assert_eq!(s.playback(), Playback::Idle);
    }

    #[test]
    fn zero_speed_is_rejected() {
        assert_eq!(AnimationState::new(0), Err(Error::InvalidSpeed { speed: 0 }));

        let mut s = AnimationState::new(2).unwrap();
        assert_eq!(s.set_speed(0), Err(Error::InvalidSpeed { speed: 0 }));
        assert_eq!(s.speed(), 2);
    }

    // ── set_range ─────────────────────────────────────────────────────────

    #[test]
    fn set_range_rewinds_and_keeps_mode() {
        let mut s = looping(3, 0, 5);
        s.advance();
        s.advance();
        s.advance();
        s.advance();

        s.set_range(2, 4).unwrap();
        assert_eq!(s.current_frame(), 2);
        assert_eq!(s.tick(), 0);
        assert_eq!(s.playback(), Playback::PlayingLoop);
    }

    #[test]
    fn reversed_range_leaves_state_unchanged() {
        let mut s = looping(3, 0, 5);
        s.advance();
        let before = s.clone();

        assert_eq!(s.set_range(5, 2), Err(Error::InvalidRange { start: 5, end: 2 }));
        assert_eq!(s, before);
    }

    // ── advance ───────────────────────────────────────────────────────────

    #[test]
    fn sub_threshold_ticks_hold_the_frame() {
        let mut s = looping(3, 0, 5);
        assert_eq!(s.advance(), Advance::Held);
        assert_eq!(s.advance(), Advance::Held);
        assert_eq!(s.current_frame(), 0);
        assert_eq!(s.tick(), 2);
    }

    #[test]
    fn third_tick_steps_and_resets() {
        let mut s = looping(3, 0, 5);
        s.advance();
        s.advance();
        assert_eq!(s.advance(), Advance::Stepped);
        assert_eq!(s.current_frame(), 1);
        assert_eq!(s.tick(), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut s = looping(3, 0, 5);
        let mut wraps = 0;
        for _ in 0..18 {
            if s.advance() == Advance::Wrapped {
                wraps += 1;
            }
        }
        assert_eq!(wraps, 1);
        assert_eq!(s.current_frame(), 0);
        assert_eq!(s.tick(), 0);
        assert_eq!(s.playback(), Playback::PlayingLoop);
    }

    #[test]
    fn wrap_lands_on_range_start_not_zero() {
        let mut s = looping(1, 4, 6);
        let frames: Vec<u32> = (0..4)
            .map(|_| {
                s.advance();
                s.current_frame()
            })
            .collect();
        assert_eq!(frames, vec![5, 6, 4, 5]);
    }

    #[test]
    fn play_once_stops_on_last_frame() {
        let mut s = AnimationState::new(1).unwrap();
        s.set_range(0, 2).unwrap();
        s.seek(2).unwrap();
        s.play(false);

        assert_eq!(s.advance(), Advance::Finished);
        assert_eq!(s.current_frame(), 2);
        assert!(!s.is_animated());
        assert_eq!(s.playback(), Playback::Finished);

        // Finished is terminal until replayed.
        assert_eq!(s.advance(), Advance::Idle);
        assert_eq!(s.current_frame(), 2);
    }

    #[test]
    fn play_once_reports_finish_exactly_once() {
        let mut s = AnimationState::new(2).unwrap();
        s.set_range(1, 3).unwrap();
        s.play(false);

        let finishes = (0..20).filter(|_| s.advance().is_finished()).count();
        assert_eq!(finishes, 1);
        assert_eq!(s.current_frame(), 3);
    }

    #[test]
    fn idle_advance_changes_nothing() {
        let mut s = AnimationState::new(1).unwrap();
        s.set_range(0, 9).unwrap();
        s.seek(4).unwrap();
        let before = s.clone();

        for _ in 0..50 {
            assert_eq!(s.advance(), Advance::Idle);
        }
        assert_eq!(s, before);
    }

    #[test]
    fn stop_freezes_mid_clip() {
        let mut s = looping(1, 0, 5);
        s.advance();
        s.stop();
        s.advance();
        assert_eq!(s.current_frame(), 1);
        assert_eq!(s.playback(), Playback::Idle);
    }

    // ── seek ──────────────────────────────────────────────────────────────

    #[test]
    fn seek_outside_range_is_rejected() {
        let mut s = looping(1, 2, 4);
        let before = s.clone();
        assert_eq!(
            s.seek(7),
            Err(Error::InvalidFrame { frame: 7, start: 2, end: 4 })
        );
        assert_eq!(s, before);
    }

    #[test]
    fn replay_after_finish_restarts_from_seek() {
        let mut s = AnimationState::new(1).unwrap();
        s.set_range(0, 1).unwrap();
        s.play(false);
        s.advance();
        assert_eq!(s.advance(), Advance::Finished);

        s.seek(0).unwrap();
        s.play(false);
        assert_eq!(s.playback(), Playback::PlayingOnce);
        assert_eq!(s.advance(), Advance::Stepped);
        assert_eq!(s.current_frame(), 1);
    }
}
