//! Review carousel state machine.
//!
//! The controller never touches the DOM. Every operation mutates the
//! carousel state and returns the [`Effect`]s the view has to carry out:
//! moving the track, arming or dropping the autoplay timer. The view calls
//! [`Carousel::finish_animation`] once a commit's transition has run.

use thiserror::Error;

use crate::animation::easing::Ease;

pub const CARD_WIDTH_PX: f64 = 380.0; // card width + gap
pub const COMMIT_DURATION_MS: u32 = 800;
pub const SNAP_BACK_DURATION_MS: u32 = 300;
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const DRAG_DAMPING: f64 = 0.3;

#[derive(Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("card width must be positive, got {0}")]
    InvalidCardWidth(f64),
    #[error("swipe threshold must be positive, got {0}")]
    InvalidSwipeThreshold(f64),
    #[error("drag damping must be in (0, 1], got {0}")]
    InvalidDamping(f64),
    #[error("autoplay interval must be non-zero")]
    ZeroAutoplayInterval,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub card_width: f64,
    pub commit_duration_ms: u32,
    pub snap_back_duration_ms: u32,
    pub autoplay_interval_ms: u32,
    pub swipe_threshold: f64,
    pub drag_damping: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH_PX,
            commit_duration_ms: COMMIT_DURATION_MS,
            snap_back_duration_ms: SNAP_BACK_DURATION_MS,
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            swipe_threshold: SWIPE_THRESHOLD_PX,
            drag_damping: DRAG_DAMPING,
        }
    }
}

impl CarouselConfig {
    fn validate(&self) -> Result<(), CarouselError> {
        if !(self.card_width > 0.0) {
            return Err(CarouselError::InvalidCardWidth(self.card_width));
        }
        if !(self.swipe_threshold > 0.0) {
            return Err(CarouselError::InvalidSwipeThreshold(self.swipe_threshold));
        }
        if !(self.drag_damping > 0.0 && self.drag_damping <= 1.0) {
            return Err(CarouselError::InvalidDamping(self.drag_damping));
        }
        if self.autoplay_interval_ms == 0 {
            return Err(CarouselError::ZeroAutoplayInterval);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselState {
    pub index: usize,
    pub is_animating: bool,
    pub is_dragging: bool,
    pub drag_start_x: f64,
    pub drag_current_x: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
    Dragging,
}

/// A tween of the track to `offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMotion {
    pub offset: f64,
    pub duration_ms: u32,
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Animate to a new index. The view reports completion back.
    Commit(TrackMotion),
    /// Animate back to the current index after an aborted swipe.
    SnapBack(TrackMotion),
    /// Place the track immediately, no transition.
    Follow(f64),
    ScheduleAutoplay(u32),
    CancelAutoplay,
}

pub struct Carousel {
    len: usize,
    config: CarouselConfig,
    state: CarouselState,
    offset: f64,
    autoplay_pending: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            config: CarouselConfig::default(),
            state: CarouselState::default(),
            offset: 0.0,
            autoplay_pending: false,
        }
    }

    pub fn with_config(len: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(len)
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A carousel with nothing to show never schedules or animates.
    pub fn is_inert(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Where the track currently sits or is heading.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn autoplay_pending(&self) -> bool {
        self.autoplay_pending
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_dragging {
            Phase::Dragging
        } else if self.state.is_animating {
            Phase::Animating
        } else {
            Phase::Idle
        }
    }

    fn resting_offset(&self) -> f64 {
        -(self.state.index as f64) * self.config.card_width
    }

    fn drag_diff(&self) -> f64 {
        self.state.drag_current_x - self.state.drag_start_x
    }

    fn wrapped(&self, delta: i64) -> usize {
        (self.state.index as i64 + delta).rem_euclid(self.len as i64) as usize
    }

    /// Initial placement plus the first autoplay tick.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.is_inert() {
            return Vec::new();
        }
        self.offset = self.resting_offset();
        let mut effects = vec![Effect::Follow(self.offset)];
        effects.extend(self.restart_autoplay());
        effects
    }

    pub fn advance(&mut self) -> Vec<Effect> {
        self.commit(1)
    }

    pub fn retreat(&mut self) -> Vec<Effect> {
        self.commit(-1)
    }

    fn commit(&mut self, delta: i64) -> Vec<Effect> {
        if self.is_inert() || self.state.is_animating {
            return Vec::new();
        }
        // A button press abandons any drag the view lost track of
        self.state.is_dragging = false;
        self.state.is_animating = true;
        self.state.index = self.wrapped(delta);
        self.offset = self.resting_offset();
        vec![Effect::Commit(TrackMotion {
            offset: self.offset,
            duration_ms: self.config.commit_duration_ms,
            ease: Ease::Power2InOut,
        })]
    }

    /// The commit transition has finished.
    pub fn finish_animation(&mut self) {
        self.state.is_animating = false;
    }

    /// "Next" button: advance and push the autoplay tick back.
    pub fn next(&mut self) -> Vec<Effect> {
        let mut effects = self.advance();
        effects.extend(self.restart_autoplay());
        effects
    }

    /// "Previous" button.
    pub fn prev(&mut self) -> Vec<Effect> {
        let mut effects = self.retreat();
        effects.extend(self.restart_autoplay());
        effects
    }

    pub fn restart_autoplay(&mut self) -> Vec<Effect> {
        if self.is_inert() {
            return Vec::new();
        }
        self.autoplay_pending = true;
        vec![
            Effect::CancelAutoplay,
            Effect::ScheduleAutoplay(self.config.autoplay_interval_ms),
        ]
    }

    pub fn pause_autoplay(&mut self) -> Vec<Effect> {
        if self.is_inert() {
            return Vec::new();
        }
        self.autoplay_pending = false;
        vec![Effect::CancelAutoplay]
    }

    /// The scheduled autoplay timer fired.
    pub fn autoplay_fired(&mut self) -> Vec<Effect> {
        if self.is_inert() {
            return Vec::new();
        }
        self.autoplay_pending = false;
        let mut effects = self.advance();
        effects.extend(self.restart_autoplay());
        effects
    }

    pub fn pointer_enter(&mut self) -> Vec<Effect> {
        self.pause_autoplay()
    }

    pub fn pointer_leave(&mut self) -> Vec<Effect> {
        if self.state.is_dragging {
            return self.gesture_end();
        }
        self.restart_autoplay()
    }

    /// A gesture arriving mid-commit only pauses autoplay.
    pub fn gesture_start(&mut self, x: f64) -> Vec<Effect> {
        if self.is_inert() {
            return Vec::new();
        }
        if !self.state.is_animating {
            self.state.is_dragging = true;
            self.state.drag_start_x = x;
            self.state.drag_current_x = x;
        }
        self.pause_autoplay()
    }

    pub fn gesture_move(&mut self, x: f64) -> Vec<Effect> {
        if !self.state.is_dragging || self.state.is_animating {
            return Vec::new();
        }
        self.state.drag_current_x = x;
        self.offset = self.resting_offset() + self.drag_diff() * self.config.drag_damping;
        vec![Effect::Follow(self.offset)]
    }

    pub fn gesture_end(&mut self) -> Vec<Effect> {
        if self.is_inert() {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if self.state.is_dragging {
            self.state.is_dragging = false;
            let diff = self.drag_diff();
            if diff.abs() > self.config.swipe_threshold {
                effects.extend(if diff > 0.0 { self.retreat() } else { self.advance() });
            } else {
                self.offset = self.resting_offset();
                effects.push(Effect::SnapBack(TrackMotion {
                    offset: self.offset,
                    duration_ms: self.config.snap_back_duration_ms,
                    ease: Ease::Power2Out,
                }));
            }
        }
        effects.extend(self.restart_autoplay());
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stands in for the view: tracks live timer handles and replays commit
    /// completions.
    #[derive(Default)]
    struct Timers {
        pending_autoplay: usize,
        commits: usize,
        snap_backs: usize,
        last_offset: Option<f64>,
    }

    impl Timers {
        fn apply(&mut self, effects: Vec<Effect>) {
            for effect in effects {
                match effect {
                    Effect::Commit(motion) => {
                        self.commits += 1;
                        self.last_offset = Some(motion.offset);
                    }
                    Effect::SnapBack(motion) => {
                        self.snap_backs += 1;
                        self.last_offset = Some(motion.offset);
                    }
                    Effect::Follow(offset) => self.last_offset = Some(offset),
                    Effect::ScheduleAutoplay(_) => self.pending_autoplay += 1,
                    Effect::CancelAutoplay => self.pending_autoplay = 0,
                }
            }
        }
    }

    fn settled_advance(carousel: &mut Carousel) {
        carousel.advance();
        carousel.finish_animation();
    }

    fn settled_retreat(carousel: &mut Carousel) {
        carousel.retreat();
        carousel.finish_animation();
    }

    fn swipe(carousel: &mut Carousel, diff: f64) -> Vec<Effect> {
        let mut effects = carousel.gesture_start(200.0);
        effects.extend(carousel.gesture_move(200.0 + diff));
        effects.extend(carousel.gesture_end());
        effects
    }

    #[test]
    fn sequential_advances_wrap_modulo_len() {
        for len in 1..=7 {
            let mut carousel = Carousel::new(len);
            for k in 1..=20 {
                settled_advance(&mut carousel);
                assert_eq!(carousel.index(), k % len);
            }
        }
    }

    #[test]
    fn sequential_retreats_stay_non_negative() {
        for len in 1..=7 {
            let mut carousel = Carousel::new(len);
            for k in 1..=20 {
                settled_retreat(&mut carousel);
                assert_eq!(carousel.index(), (len - (k % len)) % len);
            }
        }
    }

    #[test]
    fn commits_while_animating_are_ignored() {
        let mut carousel = Carousel::new(4);
        let effects = carousel.advance();
        assert_eq!(effects.len(), 1);
        assert_eq!(carousel.phase(), Phase::Animating);

        assert!(carousel.advance().is_empty());
        assert!(carousel.retreat().is_empty());
        assert_eq!(carousel.index(), 1);
        assert!(carousel.state().is_animating);

        carousel.finish_animation();
        assert_eq!(carousel.phase(), Phase::Idle);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn commit_moves_track_to_index_offset() {
        let mut carousel = Carousel::new(5);
        carousel.advance();
        carousel.finish_animation();
        let effects = carousel.advance();
        assert_eq!(
            effects,
            vec![Effect::Commit(TrackMotion {
                offset: -2.0 * CARD_WIDTH_PX,
                duration_ms: COMMIT_DURATION_MS,
                ease: Ease::Power2InOut,
            })]
        );
    }

    #[test]
    fn swipe_left_past_threshold_advances() {
        let mut carousel = Carousel::new(5);
        swipe(&mut carousel, -60.0);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.phase(), Phase::Animating);
    }

    #[test]
    fn swipe_right_past_threshold_wraps_backwards() {
        let mut carousel = Carousel::new(5);
        swipe(&mut carousel, 60.0);
        assert_eq!(carousel.index(), 4);
        assert_eq!(carousel.offset(), -4.0 * CARD_WIDTH_PX);
    }

    #[test]
    fn short_swipe_snaps_back() {
        let mut carousel = Carousel::new(5);
        let mut timers = Timers::default();
        timers.apply(swipe(&mut carousel, 20.0));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.phase(), Phase::Idle);
        assert_eq!(timers.snap_backs, 1);
        assert_eq!(timers.commits, 0);
        assert_eq!(timers.last_offset, Some(0.0));
        assert_eq!(timers.pending_autoplay, 1);
    }

    #[test]
    fn drag_follows_with_damping_without_changing_index() {
        let mut carousel = Carousel::new(5);
        settled_advance(&mut carousel);
        carousel.gesture_start(100.0);
        assert_eq!(carousel.phase(), Phase::Dragging);
        let effects = carousel.gesture_move(0.0);
        assert_eq!(effects, vec![Effect::Follow(-CARD_WIDTH_PX - 30.0)]);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn tap_without_movement_does_not_commit() {
        let mut carousel = Carousel::new(5);
        carousel.gesture_start(300.0);
        carousel.gesture_end();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.state().is_animating);
    }

    #[test]
    fn gesture_during_commit_only_pauses() {
        let mut carousel = Carousel::new(5);
        let mut timers = Timers::default();
        timers.apply(carousel.start());
        timers.apply(carousel.advance());

        timers.apply(carousel.gesture_start(100.0));
        assert_eq!(timers.pending_autoplay, 0);
        assert_eq!(carousel.phase(), Phase::Animating);
        assert!(carousel.gesture_move(0.0).is_empty());

        timers.apply(carousel.gesture_end());
        assert_eq!(carousel.index(), 1);
        assert_eq!(timers.commits, 1);
        assert_eq!(timers.pending_autoplay, 1);
    }

    #[test]
    fn button_press_mid_drag_ends_the_drag() {
        let mut carousel = Carousel::new(5);
        let mut timers = Timers::default();
        timers.apply(carousel.start());
        timers.apply(carousel.gesture_start(200.0));
        timers.apply(carousel.next());
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.phase(), Phase::Animating);
        assert!(!carousel.state().is_dragging);

        assert!(carousel.gesture_move(260.0).is_empty());
        assert_eq!(carousel.offset(), -CARD_WIDTH_PX);

        timers.apply(carousel.gesture_end());
        assert_eq!(carousel.index(), 1);
        assert_eq!(timers.commits, 1);
        assert_eq!(timers.pending_autoplay, 1);
    }

    #[test]
    fn double_pause_then_restart_leaves_one_pending_tick() {
        let mut carousel = Carousel::new(3);
        let mut timers = Timers::default();
        timers.apply(carousel.start());
        timers.apply(carousel.pause_autoplay());
        timers.apply(carousel.pause_autoplay());
        assert!(!carousel.autoplay_pending());
        timers.apply(carousel.restart_autoplay());
        assert_eq!(timers.pending_autoplay, 1);
        assert!(carousel.autoplay_pending());
    }

    #[test]
    fn repeated_restarts_never_stack_ticks() {
        let mut carousel = Carousel::new(3);
        let mut timers = Timers::default();
        for _ in 0..5 {
            timers.apply(carousel.restart_autoplay());
        }
        assert_eq!(timers.pending_autoplay, 1);
    }

    #[test]
    fn autoplay_tick_advances_and_rearms() {
        let mut carousel = Carousel::new(3);
        let mut timers = Timers::default();
        timers.apply(carousel.start());
        timers.apply(carousel.autoplay_fired());
        assert_eq!(carousel.index(), 1);
        assert_eq!(timers.commits, 1);
        assert_eq!(timers.pending_autoplay, 1);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut carousel = Carousel::new(3);
        let mut timers = Timers::default();
        timers.apply(carousel.start());
        timers.apply(carousel.pointer_enter());
        assert_eq!(timers.pending_autoplay, 0);
        timers.apply(carousel.pointer_leave());
        assert_eq!(timers.pending_autoplay, 1);
    }

    #[test]
    fn leaving_mid_drag_resolves_the_gesture() {
        let mut carousel = Carousel::new(3);
        carousel.gesture_start(0.0);
        carousel.gesture_move(-120.0);
        carousel.pointer_leave();
        assert_eq!(carousel.index(), 1);
        assert!(!carousel.state().is_dragging);
        assert!(carousel.autoplay_pending());
    }

    #[test]
    fn buttons_commit_and_restart_autoplay() {
        let mut carousel = Carousel::new(3);
        let effects = carousel.prev();
        assert_eq!(carousel.index(), 2);
        assert_eq!(
            &effects[1..],
            &[
                Effect::CancelAutoplay,
                Effect::ScheduleAutoplay(AUTOPLAY_INTERVAL_MS)
            ]
        );
    }

    #[test]
    fn mixed_sequence_over_three_reviews() {
        let mut carousel = Carousel::new(3);
        settled_advance(&mut carousel);
        assert_eq!(carousel.index(), 1);
        settled_advance(&mut carousel);
        assert_eq!(carousel.index(), 2);
        settled_advance(&mut carousel);
        assert_eq!(carousel.index(), 0);
        settled_retreat(&mut carousel);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_inert());
        assert!(carousel.start().is_empty());
        assert!(carousel.advance().is_empty());
        assert!(carousel.retreat().is_empty());
        assert!(carousel.next().is_empty());
        assert!(carousel.restart_autoplay().is_empty());
        assert!(carousel.pause_autoplay().is_empty());
        assert!(carousel.autoplay_fired().is_empty());
        assert!(carousel.gesture_start(10.0).is_empty());
        assert!(carousel.gesture_move(90.0).is_empty());
        assert!(carousel.gesture_end().is_empty());
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.autoplay_pending());
    }

    #[test]
    fn single_review_wraps_onto_itself() {
        let mut carousel = Carousel::new(1);
        settled_advance(&mut carousel);
        settled_retreat(&mut carousel);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let bad_width = CarouselConfig {
            card_width: 0.0,
            ..CarouselConfig::default()
        };
        assert_eq!(
            Carousel::with_config(3, bad_width).err(),
            Some(CarouselError::InvalidCardWidth(0.0))
        );

        let bad_damping = CarouselConfig {
            drag_damping: 1.5,
            ..CarouselConfig::default()
        };
        assert!(matches!(
            Carousel::with_config(3, bad_damping),
            Err(CarouselError::InvalidDamping(_))
        ));

        let no_interval = CarouselConfig {
            autoplay_interval_ms: 0,
            ..CarouselConfig::default()
        };
        assert!(matches!(
            Carousel::with_config(3, no_interval),
            Err(CarouselError::ZeroAutoplayInterval)
        ));

        assert!(Carousel::with_config(3, CarouselConfig::default()).is_ok());
    }
}
