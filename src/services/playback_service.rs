//! Service driving timed slideshow playback.
//!
//! Owns the play/pause state machine and the repeating `slint::Timer` that
//! advances the catalog. The timer lives on the UI thread; every control
//! method below must be called from there.

use crate::config::{DEFAULT_INTERVAL_SECS, MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};
use crate::state::{PlayOrder, SlideshowState};
use log::debug;
use slint::TimerMode;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn clamp_interval(secs: u32) -> u32 {
    secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS)
}

/// Play/pause control around the shared slideshow state.
#[derive(Clone)]
pub struct PlaybackService {
    slideshow: Arc<Mutex<SlideshowState>>,
    timer: Arc<Mutex<Option<slint::Timer>>>,
    playing: Arc<Mutex<bool>>,
    interval_secs: Arc<Mutex<u32>>,
}

impl PlaybackService {
    pub fn new(
        slideshow: Arc<Mutex<SlideshowState>>,
        timer: Arc<Mutex<Option<slint::Timer>>>,
    ) -> Self {
        Self {
            slideshow,
            timer,
            playing: Arc::new(Mutex::new(false)),
            interval_secs: Arc::new(Mutex::new(DEFAULT_INTERVAL_SECS)),
        }
    }

    pub fn is_playing(&self) -> bool {
        *self.playing.lock().unwrap()
    }

    pub fn interval_secs(&self) -> u32 {
        *self.interval_secs.lock().unwrap()
    }

    /// Starts periodic playback, advancing the catalog on every tick.
    ///
    /// Any pending timer is cancelled first, so a start while already playing
    /// reschedules instead of double-advancing. `on_tick` is not invoked when
    /// the catalog is empty.
    pub fn start<F>(&self, on_tick: F)
    where
        F: Fn(PathBuf) + 'static,
    {
        self.stop();

        let interval = self.interval_secs();
        let slideshow = self.slideshow.clone();
        let timer = slint::Timer::default();
        timer.start(
            TimerMode::Repeated,
            Duration::from_secs(u64::from(interval)),
            move || {
                let next = slideshow.lock().unwrap().advance();
                if let Some(path) = next {
                    on_tick(path);
                }
            },
        );

        *self.timer.lock().unwrap() = Some(timer);
        *self.playing.lock().unwrap() = true;
        debug!("Playback started at {}s interval", interval);
    }

    /// Cancels the periodic timer. Idempotent when already stopped.
    pub fn stop(&self) {
        if let Some(timer) = self.timer.lock().unwrap().take() {
            timer.stop();
        }
        *self.playing.lock().unwrap() = false;
    }

    /// Clamps and applies a new interval. Restarts a live timer so the new
    /// cadence takes effect immediately, without skipping the current image.
    pub fn set_interval<F>(&self, secs: u32, on_tick: F)
    where
        F: Fn(PathBuf) + 'static,
    {
        *self.interval_secs.lock().unwrap() = clamp_interval(secs);
        if self.is_playing() {
            self.start(on_tick);
        }
    }

    /// Applies a new play order. Restarts a live timer so the old schedule
    /// cannot fire one more step under the previous order.
    pub fn set_order<F>(&self, order: PlayOrder, on_tick: F)
    where
        F: Fn(PathBuf) + 'static,
    {
        self.slideshow.lock().unwrap().set_order(order);
        if self.is_playing() {
            self.start(on_tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_clamped_to_documented_bounds() {
        assert_eq!(clamp_interval(0), MIN_INTERVAL_SECS);
        assert_eq!(clamp_interval(5), 5);
        assert_eq!(clamp_interval(60), MAX_INTERVAL_SECS);
        assert_eq!(clamp_interval(1000), MAX_INTERVAL_SECS);
    }

    #[test]
    fn stop_without_start_is_idempotent() {
        let service = PlaybackService::new(
            Arc::new(Mutex::new(SlideshowState::new())),
            Arc::new(Mutex::new(None)),
        );
        service.stop();
        service.stop();
        assert!(!service.is_playing());
    }
}
