// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete zoom level state machine with change notification.
//!
//! ## Usage
//!
//! 1) Create a [`ZoomControl`] from a [`ZoomState`].
//! 2) Register observers with [`ZoomControl::subscribe`]. They are called in
//!    registration order, once per transition that actually changes the level.
//! 3) Drive it with [`ZoomControl::zoom_in`], [`ZoomControl::zoom_out`] or
//!    [`ZoomControl::zoom_change`] (a drag or click on a zoom slider).
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use planview_viewport::{ZoomControl, ZoomState};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut zoom = ZoomControl::new(ZoomState::new(0, 0, 4, 10));
//! let sink = Rc::clone(&seen);
//! zoom.subscribe(move |level| sink.borrow_mut().push(level));
//!
//! assert!(!zoom.zoom_in()); // already at the minimum
//! assert!(zoom.zoom_out());
//! assert!(zoom.zoom_change(35)); // (35 - 0) / 10 = 3
//! assert_eq!(*seen.borrow(), vec![1, 3]);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Zoom level and its limits.
///
/// `min <= level <= max` always holds; `increment` is the number of slider
/// pixels per level and is at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomState {
    level: i32,
    min: i32,
    max: i32,
    increment: i32,
}

impl ZoomState {
    /// Creates a zoom state.
    ///
    /// The limits are normalized so that `min <= max`, `level` is clamped into
    /// them, and `increment` is raised to at least 1.
    #[must_use]
    pub fn new(level: i32, min: i32, max: i32, increment: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            level: level.clamp(min, max),
            min,
            max,
            increment: increment.max(1),
        }
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Lowest level (most zoomed in).
    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Highest level (most zoomed out).
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Slider pixels per level.
    #[must_use]
    pub fn increment(&self) -> i32 {
        self.increment
    }

    /// Maps a slider pixel to a level, clamped into `[min, max]`.
    ///
    /// The pixel offset from `floor_y` is divided by the increment rounding
    /// toward zero, so partial steps below the floor still count as level 0.
    #[must_use]
    pub fn level_for_pixel(&self, pixel_y: i32, floor_y: i32) -> i32 {
        (pixel_y.saturating_sub(floor_y) / self.increment).clamp(self.min, self.max)
    }
}

/// Handle returned by [`ZoomControl::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(i32)>;

/// Zoom level state machine with an ordered observer registry.
pub struct ZoomControl {
    state: ZoomState,
    floor_y: i32,
    observers: Vec<(ObserverId, Observer)>,
    next_id: u64,
}

impl fmt::Debug for ZoomControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomControl")
            .field("state", &self.state)
            .field("floor_y", &self.floor_y)
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl ZoomControl {
    /// Creates a control with no observers and a slider floor at pixel 0.
    #[must_use]
    pub fn new(state: ZoomState) -> Self {
        Self {
            state,
            floor_y: 0,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Sets the slider pixel that corresponds to level 0 in [`ZoomControl::zoom_change`].
    #[must_use]
    pub fn with_floor(mut self, floor_y: i32) -> Self {
        self.floor_y = floor_y;
        self
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    /// Returns the current level.
    #[must_use]
    pub fn level(&self) -> i32 {
        self.state.level
    }

    /// Returns the slider floor pixel.
    #[must_use]
    pub fn floor_y(&self) -> i32 {
        self.floor_y
    }

    /// Registers an observer called with the new level after every change.
    ///
    /// Observers run in registration order.
    pub fn subscribe(&mut self, observer: impl FnMut(i32) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Decrements the level unless it is already at the minimum.
    pub fn zoom_in(&mut self) -> bool {
        if self.state.level > self.state.min {
            self.commit(self.state.level - 1)
        } else {
            false
        }
    }

    /// Increments the level unless it is already at the maximum.
    pub fn zoom_out(&mut self) -> bool {
        if self.state.level < self.state.max {
            self.commit(self.state.level + 1)
        } else {
            false
        }
    }

    /// Sets the level from a slider pixel: `clamp((pixel_y - floor_y) / increment)`.
    pub fn zoom_change(&mut self, pixel_y: i32) -> bool {
        let level = self.state.level_for_pixel(pixel_y, self.floor_y);
        self.commit(level)
    }

    /// Sets the level directly, clamped into `[min, max]`.
    pub fn set_level(&mut self, level: i32) -> bool {
        self.commit(level.clamp(self.state.min, self.state.max))
    }

    fn commit(&mut self, level: i32) -> bool {
        if level == self.state.level {
            return false;
        }
        log::debug!("zoom level {} -> {level}", self.state.level);
        self.state.level = level;
        for (_, observer) in &mut self.observers {
            observer(level);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::{ZoomControl, ZoomState};

    fn recording(control: &mut ZoomControl) -> Rc<RefCell<Vec<i32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        control.subscribe(move |level| sink.borrow_mut().push(level));
        seen
    }

    #[test]
    fn state_is_normalized() {
        let s = ZoomState::new(12, 10, 2, 0);
        assert_eq!((s.min(), s.max()), (2, 10));
        assert_eq!(s.level(), 10);
        assert_eq!(s.increment(), 1);
    }

    #[test]
    fn zoom_in_at_min_is_silent() {
        let mut zoom = ZoomControl::new(ZoomState::new(0, 0, 5, 10));
        let seen = recording(&mut zoom);
        assert!(!zoom.zoom_in());
        assert_eq!(zoom.level(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn level_never_leaves_limits() {
        let mut zoom = ZoomControl::new(ZoomState::new(1, 0, 3, 10));
        let seen = recording(&mut zoom);
        let script = [true, true, true, false, false, false, false, false, true];
        for zoom_in in script {
            if zoom_in {
                zoom.zoom_in();
            } else {
                zoom.zoom_out();
            }
            assert!((0..=3).contains(&zoom.level()));
        }
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3, 2]);
    }

    #[test]
    fn zoom_change_maps_and_clamps_pixels() {
        let mut zoom = ZoomControl::new(ZoomState::new(0, 0, 8, 12)).with_floor(100);
        let seen = recording(&mut zoom);
        assert!(zoom.zoom_change(136)); // 36 / 12 = 3
        assert_eq!(zoom.level(), 3);
        assert!(!zoom.zoom_change(140)); // still 3
        assert!(zoom.zoom_change(10_000));
        assert_eq!(zoom.level(), 8);
        assert!(zoom.zoom_change(0));
        assert_eq!(zoom.level(), 0);
        assert_eq!(*seen.borrow(), vec![3, 8, 0]);
    }

    #[test]
    fn pixels_below_floor_truncate_toward_zero() {
        let state = ZoomState::new(0, -3, 3, 10);
        assert_eq!(state.level_for_pixel(-5, 0), 0);
        assert_eq!(state.level_for_pixel(-10, 0), -1);
        assert_eq!(state.level_for_pixel(-29, 0), -2);
        assert_eq!(state.level_for_pixel(i32::MIN, 0), -3);
        assert_eq!(state.level_for_pixel(25, 0), 2);
    }

    #[test]
    fn set_level_clamps() {
        let mut zoom = ZoomControl::new(ZoomState::new(2, -2, 4, 1));
        assert!(zoom.set_level(-50));
        assert_eq!(zoom.level(), -2);
        assert!(!zoom.set_level(-3));
    }

    #[test]
    fn observers_run_in_registration_order() {
        let mut zoom = ZoomControl::new(ZoomState::new(0, 0, 5, 1));
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in 0..3 {
            let sink = Rc::clone(&order);
            zoom.subscribe(move |level| sink.borrow_mut().push((tag, level)));
        }
        zoom.zoom_out();
        assert_eq!(*order.borrow(), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut zoom = ZoomControl::new(ZoomState::new(0, 0, 5, 1));
        let kept = recording(&mut zoom);
        let dropped = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&dropped);
        let id = zoom.subscribe(move |level| sink.borrow_mut().push(level));

        zoom.zoom_out();
        assert!(zoom.unsubscribe(id));
        assert!(!zoom.unsubscribe(id));
        zoom.zoom_out();

        assert_eq!(*kept.borrow(), vec![1, 2]);
        assert_eq!(*dropped.borrow(), vec![1]);
        assert_eq!(zoom.observer_count(), 1);
    }
}
