//! Timer-driven effects shared by the sections: cycling slides, the
//! solutions carousel and counters.
//!
//! Every interval is cleared when the owning component is disposed.

use std::time::Duration;

use leptos::prelude::*;
use tracing::error;

/// Ticks used by [`use_counter`] to reach its target.
pub const COUNTER_STEPS: u32 = 60;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Counter value after `step` of `steps` ticks, rounded down; exact at the end.
pub fn counter_at(target: u32, step: u32, steps: u32) -> u32 {
    if steps == 0 || step >= steps {
        return target;
    }
    (u64::from(target) * u64::from(step) / u64::from(steps)) as u32
}

/// Index into `len` items that advances every `period`. The signal stays
/// writable so prev/next buttons can move it too.
pub fn use_cycle(len: usize, period: Duration) -> RwSignal<usize> {
    let index = RwSignal::new(0usize);
    if len > 1 {
        match set_interval_with_handle(move || index.update(|i| *i = next_index(*i, len)), period) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => error!(error = ?err, "could not start cycle interval"),
        }
    }
    index
}

/// Carousel position. Autoplay ticks advance it until the first manual move;
/// from then on only the user moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            autoplay: len > 1,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    /// Autoplay step. Returns `false` once autoplay has been stopped.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay {
            return false;
        }
        self.index = next_index(self.index, self.len);
        true
    }

    pub fn select(&mut self, index: usize) {
        self.stop();
        if index < self.len {
            self.index = index;
        }
    }

    pub fn next(&mut self) {
        self.stop();
        self.index = next_index(self.index, self.len);
    }

    pub fn prev(&mut self) {
        self.stop();
        self.index = prev_index(self.index, self.len);
    }

    pub fn stop(&mut self) {
        self.autoplay = false;
    }
}

/// Reactive [`Carousel`] plus the interval driving its autoplay. Any manual
/// navigation clears the interval.
#[derive(Clone, Copy)]
pub struct CarouselHandle {
    state: RwSignal<Carousel>,
    timer: StoredValue<Option<IntervalHandle>>,
}

impl CarouselHandle {
    pub fn index(&self) -> usize {
        self.state.with(|c| c.index())
    }

    pub fn select(&self, index: usize) {
        self.state.update(|c| c.select(index));
        self.clear_timer();
    }

    pub fn next(&self) {
        self.state.update(|c| c.next());
        self.clear_timer();
    }

    pub fn prev(&self) {
        self.state.update(|c| c.prev());
        self.clear_timer();
    }

    /// Stops autoplay without moving, e.g. when the user opens a slide's details.
    pub fn stop(&self) {
        self.state.update(|c| c.stop());
        self.clear_timer();
    }

    fn clear_timer(&self) {
        if let Some(handle) = self.timer.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
    }
}

pub fn use_carousel(len: usize, period: Duration) -> CarouselHandle {
    let carousel = CarouselHandle {
        state: RwSignal::new(Carousel::new(len)),
        timer: StoredValue::new(None),
    };
    if !carousel.state.with_untracked(|c| c.is_autoplaying()) {
        return carousel;
    }

    let state = carousel.state;
    match set_interval_with_handle(
        move || {
            state.try_update(|c| c.tick());
        },
        period,
    ) {
        Ok(handle) => {
            carousel.timer.set_value(Some(handle));
            on_cleanup(move || carousel.clear_timer());
        }
        Err(err) => error!(error = ?err, "could not start carousel autoplay"),
    }
    carousel
}

/// Counts from zero up to `target` over `duration`, then stops.
pub fn use_counter(target: u32, duration: Duration) -> ReadSignal<u32> {
    let (value, set_value) = signal(0u32);
    let step = StoredValue::new(0u32);
    let handle = StoredValue::new(None::<IntervalHandle>);

    let started = set_interval_with_handle(
        move || {
            step.update_value(|s| *s += 1);
            let current = step.get_value();
            set_value.set(counter_at(target, current, COUNTER_STEPS));
            if current >= COUNTER_STEPS {
                if let Some(h) = handle.get_value() {
                    h.clear();
                }
            }
        },
        duration / COUNTER_STEPS,
    );

    match started {
        Ok(h) => {
            handle.set_value(Some(h));
            on_cleanup(move || {
                if let Some(h) = handle.try_get_value().flatten() {
                    h.clear();
                }
            });
        }
        Err(err) => {
            error!(error = ?err, "could not start counter interval");
            set_value.set(target);
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_wrap_around() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(prev_index(2, 4), 1);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn autoplay_advances_until_first_manual_move() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.tick());
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 2);

        carousel.select(4);
        assert!(!carousel.is_autoplaying());
        assert!(!carousel.tick());
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 4, "a picked slide stays put");
    }

    #[test]
    fn prev_and_next_wrap_and_stop_autoplay() {
        let mut carousel = Carousel::new(5);
        carousel.prev();
        assert_eq!(carousel.index(), 4);
        assert!(!carousel.is_autoplaying());
        carousel.next();
        assert_eq!(carousel.index(), 0);

        let mut other = Carousel::new(5);
        other.next();
        other.tick();
        assert_eq!(other.index(), 1);
    }

    #[test]
    fn stopping_keeps_the_current_slide() {
        let mut carousel = Carousel::new(3);
        carousel.tick();
        carousel.stop();
        carousel.tick();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn out_of_range_selection_only_stops() {
        let mut carousel = Carousel::new(3);
        carousel.tick();
        carousel.select(7);
        assert_eq!(carousel.index(), 1);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn single_slide_never_autoplays() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.is_autoplaying());
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn counter_reaches_target_exactly() {
        assert_eq!(counter_at(95, 0, COUNTER_STEPS), 0);
        assert_eq!(counter_at(95, 30, COUNTER_STEPS), 47);
        assert_eq!(counter_at(95, COUNTER_STEPS, COUNTER_STEPS), 95);
        assert_eq!(counter_at(95, COUNTER_STEPS + 5, COUNTER_STEPS), 95);
        assert_eq!(counter_at(7, 3, 0), 7);
    }

    #[test]
    fn counter_never_decreases() {
        let values: Vec<_> = (0..=COUNTER_STEPS).map(|s| counter_at(500, s, COUNTER_STEPS)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
