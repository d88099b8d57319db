//! Horizontal swipe detection for touch screens.
//!
//! `SwipeTracker` does the classification and knows nothing about the DOM;
//! `use_horizontal_swipe` feeds it from touch events.

use leptos::ev::TouchEvent;
use leptos::prelude::*;

/// Direction the finger travelled. In the developer tools panel `Left`
/// opens the next tab and `Right` the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled towards the left edge.
    Left,
    /// Finger travelled towards the right edge.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimal horizontal travel, in CSS pixels.
    pub min_distance: f64,
    /// Vertical travel allowed per pixel of horizontal travel.
    pub max_off_axis_ratio: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            max_off_axis_ratio: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self { config, start: None }
    }

    pub fn start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Ends the gesture. Returns the direction if it qualifies as a swipe.
    pub fn finish(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;

        if dx.abs() < self.config.min_distance {
            return None;
        }
        if dy.abs() > dx.abs() * self.config.max_off_axis_ratio {
            return None;
        }

        if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}

/// Touch handlers to bind on the element that should react to swipes.
///
/// Bound via `on:touchstart` / `on:touchend` / `on:touchcancel`, the
/// listeners live exactly as long as the element is mounted.
#[derive(Clone, Copy)]
pub struct SwipeHandlers {
    tracker: StoredValue<SwipeTracker>,
    on_left: Callback<()>,
    on_right: Callback<()>,
}

impl SwipeHandlers {
    pub fn touch_start(&self, ev: &TouchEvent) {
        // pinch and other multi-finger gestures are not swipes
        if ev.touches().length() != 1 {
            self.tracker.update_value(SwipeTracker::cancel);
            return;
        }
        if let Some(touch) = ev.touches().get(0) {
            let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
            self.tracker.update_value(|t| t.start(x, y));
        }
    }

    pub fn touch_end(&self, ev: &TouchEvent) {
        let Some(touch) = ev.changed_touches().get(0) else {
            self.tracker.update_value(SwipeTracker::cancel);
            return;
        };
        let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
        let mut direction = None;
        self.tracker.update_value(|t| direction = t.finish(x, y));

        match direction {
            Some(SwipeDirection::Left) => self.on_left.run(()),
            Some(SwipeDirection::Right) => self.on_right.run(()),
            None => {}
        }
    }

    pub fn touch_cancel(&self) {
        self.tracker.update_value(SwipeTracker::cancel);
    }
}

/// Sets up horizontal swipe handling for the calling component.
pub fn use_horizontal_swipe(on_left: Callback<()>, on_right: Callback<()>) -> SwipeHandlers {
    log::debug!("horizontal swipe attached");
    on_cleanup(|| log::debug!("horizontal swipe detached"));

    SwipeHandlers {
        tracker: StoredValue::new(SwipeTracker::new(SwipeConfig::default())),
        on_left,
        on_right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SwipeTracker {
        SwipeTracker::new(SwipeConfig::default())
    }

    #[test]
    fn test_left_and_right() {
        let mut t = tracker();
        t.start(300.0, 100.0);
        assert_eq!(t.finish(100.0, 110.0), Some(SwipeDirection::Left));

        t.start(100.0, 100.0);
        assert_eq!(t.finish(260.0, 90.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_short_travel_is_ignored() {
        let mut t = tracker();
        t.start(100.0, 100.0);
        assert_eq!(t.finish(140.0, 100.0), None);
    }

    #[test]
    fn test_vertical_scroll_is_ignored() {
        let mut t = tracker();
        t.start(100.0, 100.0);
        assert_eq!(t.finish(170.0, 400.0), None);
    }

    #[test]
    fn test_finish_without_start() {
        let mut t = tracker();
        assert_eq!(t.finish(0.0, 0.0), None);

        t.start(0.0, 0.0);
        t.cancel();
        assert_eq!(t.finish(200.0, 0.0), None);
    }

    #[test]
    fn test_start_is_consumed() {
        let mut t = tracker();
        t.start(0.0, 0.0);
        assert_eq!(t.finish(-80.0, 0.0), Some(SwipeDirection::Left));
        assert_eq!(t.finish(-160.0, 0.0), None);
    }

    #[test]
    fn test_custom_threshold() {
        let mut t = SwipeTracker::new(SwipeConfig {
            min_distance: 10.0,
            max_off_axis_ratio: 0.5,
        });
        t.start(0.0, 0.0);
        assert_eq!(t.finish(20.0, 9.0), Some(SwipeDirection::Right));
        t.start(0.0, 0.0);
        assert_eq!(t.finish(20.0, 11.0), None);
    }
}
