//! Leptos Carousel Utilities
//!
//! Slide index handling with an auto-advance timer.
//! Manual navigation restarts the timer, so the next automatic step
//! always comes one full interval after the last move.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Default auto-advance period
pub const DEFAULT_INTERVAL_MS: u32 = 5_000;

/// Current slide position, wrapping at both ends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideCursor {
    index: usize,
    len: usize,
}

impl SlideCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to slide `n`; out-of-range targets fall back to the first slide
    pub fn go_to(&mut self, n: usize) {
        self.index = if n < self.len { n } else { 0 };
    }
}

/// Source of repeating ticks. The returned guard cancels the ticks when
/// dropped.
pub trait Ticker: 'static {
    type Guard: 'static;

    fn every(&self, interval_ms: u32, tick: impl FnMut() + 'static) -> Self::Guard;
}

/// Browser `setInterval` through gloo-timers
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Guard = Interval;

    fn every(&self, interval_ms: u32, tick: impl FnMut() + 'static) -> Interval {
        Interval::new(interval_ms, tick)
    }
}

/// Reactive carousel state plus its running timer
pub struct CarouselHandle<T: Ticker = IntervalTicker> {
    cursor: RwSignal<SlideCursor>,
    ticker: StoredValue<T, LocalStorage>,
    timer: StoredValue<Option<T::Guard>, LocalStorage>,
    interval_ms: u32,
}

impl<T: Ticker> Clone for CarouselHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Ticker> Copy for CarouselHandle<T> {}

impl<T: Ticker> CarouselHandle<T> {
    /// Current slide index (tracked)
    pub fn index(&self) -> usize {
        self.cursor.get().index()
    }

    pub fn len(&self) -> usize {
        self.cursor.get_untracked().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.get_untracked().is_empty()
    }

    /// Whether an auto-advance timer is running
    pub fn is_running(&self) -> bool {
        self.timer
            .try_with_value(|timer| timer.is_some())
            .unwrap_or(false)
    }

    pub fn next(&self) {
        self.cursor.update(|c| c.next());
        self.restart();
    }

    pub fn prev(&self) {
        self.cursor.update(|c| c.prev());
        self.restart();
    }

    pub fn go_to(&self, n: usize) {
        self.cursor.update(|c| c.go_to(n));
        self.restart();
    }

    /// Cancel the running timer and start a fresh one. A carousel with
    /// fewer than two slides never runs a timer.
    pub fn restart(&self) {
        self.stop();
        if self.len() < 2 {
            return;
        }
        let cursor = self.cursor;
        let interval_ms = self.interval_ms;
        let started = self.ticker.try_with_value(|ticker| {
            ticker.every(interval_ms, move || {
                cursor.try_update(|c| c.next());
            })
        });
        if let Some(timer) = started {
            self.timer.try_set_value(Some(timer));
            log::debug!("[CAROUSEL] timer restarted ({} ms)", interval_ms);
        }
    }

    /// Stop auto-advance
    pub fn stop(&self) {
        // May run after the owner is gone
        self.timer.try_update_value(|timer| *timer = None);
    }
}

/// Create a carousel over `len` slides that advances every `interval_ms`.
/// The timer is stopped when the owning component is cleaned up.
pub fn use_carousel(len: usize, interval_ms: u32) -> CarouselHandle {
    use_carousel_with(len, interval_ms, IntervalTicker)
}

/// `use_carousel` driven by a custom tick source
pub fn use_carousel_with<T: Ticker>(len: usize, interval_ms: u32, ticker: T) -> CarouselHandle<T> {
    let handle = CarouselHandle {
        cursor: RwSignal::new(SlideCursor::new(len)),
        ticker: StoredValue::new_local(ticker),
        timer: StoredValue::new_local(None),
        interval_ms,
    };
    handle.restart();
    on_cleanup(move || handle.stop());
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Ticker that records started/live timers and fires on demand
    #[derive(Clone, Default)]
    struct ManualTicker {
        started: Rc<Cell<u32>>,
        live: Rc<Cell<u32>>,
        tick: Rc<RefCell<Option<Box<dyn FnMut()>>>>,
    }

    struct ManualGuard(Rc<Cell<u32>>);

    impl Drop for ManualGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl Ticker for ManualTicker {
        type Guard = ManualGuard;

        fn every(&self, _interval_ms: u32, tick: impl FnMut() + 'static) -> ManualGuard {
            self.started.set(self.started.get() + 1);
            self.live.set(self.live.get() + 1);
            *self.tick.borrow_mut() = Some(Box::new(tick));
            ManualGuard(self.live.clone())
        }
    }

    impl ManualTicker {
        fn fire(&self) {
            if let Some(tick) = self.tick.borrow_mut().as_mut() {
                tick();
            }
        }
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut cursor = SlideCursor::new(3);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut cursor = SlideCursor::new(3);
        cursor.prev();
        assert_eq!(cursor.index(), 2);
        cursor.prev();
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_go_to_out_of_range_resets() {
        let mut cursor = SlideCursor::new(3);
        cursor.go_to(1);
        assert_eq!(cursor.index(), 1);
        cursor.go_to(7);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_empty_cursor_stays_at_zero() {
        let mut cursor = SlideCursor::new(0);
        assert!(cursor.is_empty());
        cursor.next();
        cursor.prev();
        cursor.go_to(2);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_timer_starts_and_advances() {
        let owner = Owner::new();
        owner.with(|| {
            let ticker = ManualTicker::default();
            let carousel = use_carousel_with(3, DEFAULT_INTERVAL_MS, ticker.clone());
            assert!(carousel.is_running());
            assert_eq!(ticker.started.get(), 1);

            ticker.fire();
            ticker.fire();
            assert_eq!(carousel.index(), 2);
            ticker.fire();
            assert_eq!(carousel.index(), 0);
        });
    }

    #[test]
    fn test_manual_navigation_restarts_timer() {
        let owner = Owner::new();
        owner.with(|| {
            let ticker = ManualTicker::default();
            let carousel = use_carousel_with(3, DEFAULT_INTERVAL_MS, ticker.clone());

            carousel.next();
            assert_eq!(ticker.started.get(), 2);
            carousel.prev();
            carousel.go_to(2);
            assert_eq!(ticker.started.get(), 4);
            // Old timers are cancelled, only one is ever running
            assert_eq!(ticker.live.get(), 1);
            assert_eq!(carousel.index(), 2);
        });
    }

    #[test]
    fn test_single_slide_has_no_timer() {
        let owner = Owner::new();
        owner.with(|| {
            for len in [0, 1] {
                let ticker = ManualTicker::default();
                let carousel = use_carousel_with(len, DEFAULT_INTERVAL_MS, ticker.clone());
                carousel.next();
                assert!(!carousel.is_running());
                assert_eq!(ticker.started.get(), 0);
            }
        });
    }

    #[test]
    fn test_cleanup_stops_timer() {
        let owner = Owner::new();
        let ticker = ManualTicker::default();
        let carousel = owner.with(|| use_carousel_with(3, DEFAULT_INTERVAL_MS, ticker.clone()));
        assert_eq!(ticker.live.get(), 1);

        owner.cleanup();
        assert_eq!(ticker.live.get(), 0);
        // Handle outlives its owner without panicking
        carousel.stop();
        assert!(!carousel.is_running());
    }

    #[test]
    fn test_stop_clears_timer() {
        let owner = Owner::new();
        owner.with(|| {
            let ticker = ManualTicker::default();
            let carousel = use_carousel_with(2, DEFAULT_INTERVAL_MS, ticker.clone());
            carousel.stop();
            assert!(!carousel.is_running());
            assert_eq!(ticker.live.get(), 0);
        });
    }
}
