//! Bounded cyclic index shared by every slideshow, lightbox and rotator.
//!
//! The state is a plain value so the same rules drive a `use_reducer` hook
//! in the browser and the unit tests on the host.

use std::rc::Rc;
use yew::Reducible;

/// Delay between automatic slide changes.
pub const AUTO_ADVANCE_MS: u32 = 5_000;
/// Horizontal travel a touch needs before it counts as a swipe.
pub const SWIPE_THRESHOLD_PX: i32 = 40;
/// How long autoplay stays paused after a tap on touch screens.
pub const TOUCH_PAUSE_MS: u32 = 1_200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    Tick,
    Pause,
    Resume,
    OpenOverlay(usize),
    CloseOverlay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    paused: bool,
    overlay_open: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            paused: false,
            overlay_open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn advance(&mut self, direction: Direction) {
        // widgets never render an empty list, so there is nothing to cycle
        if self.len == 0 {
            return;
        }
        self.current = match direction {
            Direction::Forward => (self.current + 1) % self.len,
            Direction::Backward => (self.current + self.len - 1) % self.len,
        };
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Timer callback: moves forward unless the viewer is interacting.
    pub fn tick(&mut self) {
        if !self.paused {
            self.advance(Direction::Forward);
        }
    }

    pub fn open_overlay(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
            self.overlay_open = true;
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.advance(Direction::Forward),
            CarouselAction::Prev => self.advance(Direction::Backward),
            CarouselAction::GoTo(index) => self.go_to(index),
            CarouselAction::Tick => self.tick(),
            CarouselAction::Pause => self.paused = true,
            CarouselAction::Resume => self.paused = false,
            CarouselAction::OpenOverlay(index) => self.open_overlay(index),
            CarouselAction::CloseOverlay => self.close_overlay(),
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Maps a finished touch gesture to a slide change. Dragging left shows the
/// next slide.
pub fn swipe_direction(start_x: i32, end_x: i32) -> Option<Direction> {
    let dx = end_x - start_x;
    if dx.abs() <= SWIPE_THRESHOLD_PX {
        None
    } else if dx < 0 {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}

pub fn key_action(key: &str, overlay_open: bool) -> Option<CarouselAction> {
    match key {
        "ArrowRight" => Some(CarouselAction::Next),
        "ArrowLeft" => Some(CarouselAction::Prev),
        "Escape" if overlay_open => Some(CarouselAction::CloseOverlay),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut state = CarouselState::new(6);
        state.go_to(5);
        state.advance(Direction::Forward);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut state = CarouselState::new(6);
        state.advance(Direction::Backward);
        assert_eq!(state.current(), 5);
    }

    #[test]
    fn single_item_stays_put() {
        let mut state = CarouselState::new(1);
        state.apply(CarouselAction::Next);
        state.apply(CarouselAction::Prev);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn out_of_range_go_to_is_ignored() {
        let mut state = CarouselState::new(4);
        state.go_to(2);
        state.go_to(4);
        state.go_to(usize::MAX);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn index_stays_in_bounds_for_any_action_sequence() {
        for len in 1..=7usize {
            let mut state = CarouselState::new(len);
            let mut seed: u32 = 0x2545_f491 ^ len as u32;
            for _ in 0..500 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let action = match (seed >> 16) % 5 {
                    0 => CarouselAction::Next,
                    1 => CarouselAction::Prev,
                    2 => CarouselAction::GoTo((seed >> 8) as usize % (len + 3)),
                    3 => CarouselAction::Tick,
                    _ => CarouselAction::OpenOverlay((seed >> 4) as usize % (len + 2)),
                };
                state.apply(action);
                assert!(state.current() < len, "index {} escaped len {}", state.current(), len);
            }
        }
    }

    #[test]
    fn tick_respects_pause() {
        let mut state = CarouselState::new(3);
        state.apply(CarouselAction::Pause);
        state.apply(CarouselAction::Tick);
        assert_eq!(state.current(), 0);
        state.apply(CarouselAction::Resume);
        state.apply(CarouselAction::Tick);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn overlay_opens_at_index_and_closes() {
        let mut state = CarouselState::new(6);
        state.apply(CarouselAction::OpenOverlay(3));
        assert!(state.is_overlay_open());
        assert_eq!(state.current(), 3);
        state.apply(CarouselAction::CloseOverlay);
        assert!(!state.is_overlay_open());
        assert_eq!(state.current(), 3);

        state.apply(CarouselAction::OpenOverlay(9));
        assert!(!state.is_overlay_open());
    }

    #[test]
    fn empty_list_never_panics() {
        let mut state = CarouselState::new(0);
        state.apply(CarouselAction::Next);
        state.apply(CarouselAction::Tick);
        state.apply(CarouselAction::Prev);
        assert!(state.is_empty());
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(CarouselState::new(3));
        let same = state.clone().reduce(CarouselAction::CloseOverlay);
        assert!(Rc::ptr_eq(&state, &same));
        let moved = state.clone().reduce(CarouselAction::Next);
        assert_eq!(moved.current(), 1);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn swipes_need_more_than_forty_pixels() {
        assert_eq!(swipe_direction(200, 160), None);
        assert_eq!(swipe_direction(200, 159), Some(Direction::Forward));
        assert_eq!(swipe_direction(100, 141), Some(Direction::Backward));
    }

    #[test]
    fn escape_only_matters_with_overlay_open() {
        assert_eq!(key_action("ArrowRight", false), Some(CarouselAction::Next));
        assert_eq!(key_action("ArrowLeft", true), Some(CarouselAction::Prev));
        assert_eq!(key_action("Escape", false), None);
        assert_eq!(key_action("Escape", true), Some(CarouselAction::CloseOverlay));
        assert_eq!(key_action("Enter", true), None);
    }
}
