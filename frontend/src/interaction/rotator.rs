use std::rc::Rc;

use gloo_timers::callback::Interval;
use thiserror::Error;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("slide {target} is out of range for a carousel of {len}")]
pub struct SlideOutOfRange {
    pub target: usize,
    pub len: usize,
}

/// Wrapping index over a fixed list of slides.
///
/// An empty carousel is allowed; every transition on it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, target: usize) -> Result<(), SlideOutOfRange> {
        if target >= self.len {
            return Err(SlideOutOfRange { target, len: self.len });
        }
        self.index = target;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    /// Timer tick or "next" button
    Advance,
    Retreat,
    GoTo(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Advance => next.next(),
            CarouselAction::Retreat => next.previous(),
            CarouselAction::GoTo(target) => {
                if let Err(e) = next.go_to(target) {
                    log::warn!("{}", e);
                    return self;
                }
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Repeating timer that drives a carousel forward.
///
/// Manual navigation does not touch the timer, so a tick can land right after a
/// manual jump.
pub struct AutoAdvance {
    period_ms: u32,
    interval: Option<Interval>,
}

impl AutoAdvance {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            interval: None,
        }
    }

    pub fn start<F>(&mut self, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        log::debug!("auto-advance started, every {}ms", self.period_ms);
        self.interval = Some(Interval::new(self.period_ms, on_tick));
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            drop(interval);
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HERO_INTERVAL_MS;
    use pretty_assertions::assert_eq;

    fn dispatch(state: CarouselState, actions: &[CarouselAction]) -> CarouselState {
        *actions.iter().fold(Rc::new(state), |s, a| s.reduce(*a))
    }

    #[test]
    fn advancing_k_times_lands_on_k_mod_n() {
        for len in 1..=6 {
            let mut state = CarouselState::new(len);
            for k in 1..=20 {
                state.next();
                assert_eq!(state.index(), k % len, "len {len} after {k} advances");
            }
        }
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut state = CarouselState::new(3);
        state.previous();
        assert_eq!(state.index(), 2);
        state.previous();
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn go_to_accepts_in_range_targets() {
        let mut state = CarouselState::new(4);
        for target in [3, 0, 2, 1] {
            state.go_to(target).unwrap();
            assert_eq!(state.index(), target);
            assert!(state.is_current(target));
        }
    }

    #[test]
    fn go_to_rejects_out_of_range_and_keeps_index() {
        let mut state = CarouselState::new(3);
        state.go_to(1).unwrap();
        assert_eq!(state.go_to(3), Err(SlideOutOfRange { target: 3, len: 3 }));
        assert_eq!(state.go_to(usize::MAX).map_err(|e| e.target), Err(usize::MAX));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn reducer_keeps_same_state_on_rejected_jump() {
        let state = Rc::new(CarouselState::new(2));
        let reduced = state.clone().reduce(CarouselAction::GoTo(7));
        assert!(Rc::ptr_eq(&state, &reduced));
    }

    #[test]
    fn empty_carousel_ignores_every_transition() {
        let state = dispatch(
            CarouselState::new(0),
            &[CarouselAction::Advance, CarouselAction::Retreat, CarouselAction::GoTo(0)],
        );
        assert_eq!(state.index(), 0);
        assert!(!state.is_current(0));
    }

    #[test]
    fn hero_after_twelve_and_a_half_seconds() {
        let ticks = 12_500 / HERO_INTERVAL_MS;
        let mut actions = vec![CarouselAction::Advance; ticks as usize];
        let state = dispatch(CarouselState::new(3), &actions);
        assert_eq!(state.index(), 2);

        actions.push(CarouselAction::Retreat);
        let state = dispatch(CarouselState::new(3), &actions);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn testimonials_full_cycle() {
        let state = dispatch(CarouselState::new(3), &[CarouselAction::Advance; 3]);
        assert_eq!(state.index(), 0);

        let state = dispatch(CarouselState::new(3), &[CarouselAction::Retreat]);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn manual_jump_between_ticks_is_not_rebased() {
        let state = dispatch(
            CarouselState::new(3),
            &[CarouselAction::GoTo(2), CarouselAction::Advance],
        );
        assert_eq!(state.index(), 0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::config::HERO_INTERVAL_MS;

    fn counting(timer: &mut AutoAdvance) -> Rc<Cell<u32>> {
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        timer.start(move || counter.set(counter.get() + 1));
        ticks
    }

    #[wasm_bindgen_test]
    async fn hero_lands_on_third_slide_after_twelve_and_a_half_seconds() {
        let carousel = Rc::new(Cell::new(CarouselState::new(3)));
        let mut timer = AutoAdvance::new(HERO_INTERVAL_MS);
        {
            let carousel = carousel.clone();
            timer.start(move || {
                let mut next = carousel.get();
                next.next();
                carousel.set(next);
            });
        }

        TimeoutFuture::new(12_500).await;
        assert_eq!(carousel.get().index(), 2);

        timer.stop();
        TimeoutFuture::new(HERO_INTERVAL_MS).await;
        assert_eq!(carousel.get().index(), 2);
    }

    #[wasm_bindgen_test]
    async fn stop_cancels_pending_ticks() {
        let mut timer = AutoAdvance::new(50);
        let ticks = counting(&mut timer);

        TimeoutFuture::new(175).await;
        timer.stop();
        let seen = ticks.get();
        assert!(seen >= 1);

        TimeoutFuture::new(200).await;
        assert_eq!(ticks.get(), seen);
    }

    #[wasm_bindgen_test]
    async fn drop_cancels_pending_ticks() {
        let mut timer = AutoAdvance::new(50);
        let ticks = counting(&mut timer);

        TimeoutFuture::new(175).await;
        drop(timer);
        let seen = ticks.get();

        TimeoutFuture::new(200).await;
        assert_eq!(ticks.get(), seen);
    }

    #[wasm_bindgen_test]
    async fn restart_replaces_previous_interval() {
        let mut timer = AutoAdvance::new(50);
        let first = counting(&mut timer);
        let second = counting(&mut timer);

        TimeoutFuture::new(175).await;
        timer.stop();
        assert_eq!(first.get(), 0);
        assert!(second.get() >= 1);
    }
}
