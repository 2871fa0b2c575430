// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle helpers and the two bounded extents a [`crate::ViewportMap`] owns.
//!
//! Plain extents use [`kurbo::Rect`] directly. `Rect` is `Copy`, so handing a
//! rectangle to another owner always hands over an independent value; there is
//! no way for two views to share one mutable camera.
//!
//! [`CameraBounds`] and [`PanelBounds`] wrap a `Rect` and guarantee a strictly
//! positive width and height, which is what lets the projection code divide by
//! them without checks.

use kurbo::{Point, Rect, Size, Vec2};

/// Smallest width/height a [`CameraBounds`] may have, in world units.
pub const MIN_CAMERA_EXTENT: f64 = 1e-6;

/// Smallest width/height a [`PanelBounds`] may have, in pixels.
pub const MIN_PANEL_EXTENT: f64 = 1.0;

/// Builds a rectangle from two opposite corners given in any order.
///
/// ```
/// use planview_viewport::from_diagonal;
///
/// let r = from_diagonal(10.0, 2.0, -4.0, 8.0);
/// assert_eq!((r.min_x(), r.min_y(), r.max_x(), r.max_y()), (-4.0, 2.0, 10.0, 8.0));
/// assert_eq!((r.width(), r.height()), (14.0, 6.0));
/// ```
#[must_use]
pub fn from_diagonal(x1: f64, y1: f64, x2: f64, y2: f64) -> Rect {
    Rect::from_points((x1, y1), (x2, y2))
}

/// Keeps `lo..hi` at least `min_extent` long, growing `hi`.
///
/// A non-finite `lo` is replaced by zero. When `lo` is so large that adding
/// `min_extent` rounds away, `hi` steps up to the next representable value,
/// and at the top of the `f64` range `lo` steps down instead.
fn clamp_axis(lo: f64, hi: f64, min_extent: f64) -> (f64, f64) {
    let side = hi - lo;
    if lo.is_finite() && side.is_finite() && side >= min_extent {
        return (lo, hi);
    }
    let lo = if lo.is_finite() { lo } else { 0.0 };
    let side = hi - lo;
    let side = if side.is_finite() && side >= min_extent {
        side
    } else {
        min_extent
    };
    let mut hi = lo + side;
    while hi - lo < min_extent {
        hi = hi.next_up();
    }
    if hi.is_finite() {
        return (lo, hi);
    }
    let hi = lo;
    let mut lo = hi - side;
    while hi - lo < min_extent {
        lo = lo.next_down();
    }
    (lo, hi)
}

/// Normalizes `rect` and grows it from its min corner until both sides reach `min_extent`.
///
/// Non-finite sides collapse to `min_extent` as well.
fn ensure_extent(rect: Rect, min_extent: f64, what: &str) -> Rect {
    let rect = rect.abs();
    let (x0, x1) = clamp_axis(rect.x0, rect.x1, min_extent);
    let (y0, y1) = clamp_axis(rect.y0, rect.y1, min_extent);
    let clamped = Rect::new(x0, y0, x1, y1);
    if clamped != rect {
        log::debug!("{what} {rect:?} has a degenerate extent, clamping to {clamped:?}");
    }
    clamped
}

/// The world-space rectangle currently visible on the render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Rect", into = "Rect")
)]
pub struct CameraBounds(Rect);

impl CameraBounds {
    /// Creates camera bounds from a world rectangle.
    ///
    /// The rectangle is normalized, and any side smaller than
    /// [`MIN_CAMERA_EXTENT`] is widened to it.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self(ensure_extent(rect, MIN_CAMERA_EXTENT, "camera bounds"))
    }

    /// Creates camera bounds of `size` centered on `center`.
    #[must_use]
    pub fn from_center_size(center: Point, size: Size) -> Self {
        Self::new(Rect::from_center_size(center, size))
    }

    /// Returns the underlying world rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.0
    }

    /// Returns the world-space width; always positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.0.width()
    }

    /// Returns the world-space height; always positive.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.0.height()
    }

    /// Minimum X.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.0.min_x()
    }

    /// Minimum Y.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.0.min_y()
    }

    /// Maximum X.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.0.max_x()
    }

    /// Maximum Y.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.0.max_y()
    }

    /// Returns the center of the visible extent.
    #[must_use]
    pub fn center(&self) -> Point {
        self.0.center()
    }

    /// Returns a copy moved rigidly by `delta`.
    ///
    /// A move that would leave the camera non-finite is ignored. Far from the
    /// origin, where a side rounds below [`MIN_CAMERA_EXTENT`], the moved
    /// camera is widened again like in [`CameraBounds::new`].
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        let moved = self.0 + delta;
        if !(moved.x0.is_finite()
            && moved.y0.is_finite()
            && moved.x1.is_finite()
            && moved.y1.is_finite())
        {
            log::debug!("ignoring camera move by {delta:?}: result is not finite");
            return *self;
        }
        if moved.width() >= MIN_CAMERA_EXTENT && moved.height() >= MIN_CAMERA_EXTENT {
            Self(moved)
        } else {
            Self::new(moved)
        }
    }

    /// Returns a copy scaled by `factor` about its own center.
    ///
    /// Non-positive factors are ignored.
    #[must_use]
    pub fn scaled_about_center(&self, factor: f64) -> Self {
        if factor.is_nan() || factor <= 0.0 {
            return *self;
        }
        Self::from_center_size(self.center(), self.0.size() * factor)
    }
}

impl From<Rect> for CameraBounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect)
    }
}

impl From<CameraBounds> for Rect {
    fn from(bounds: CameraBounds) -> Self {
        bounds.0
    }
}

/// The pixel-space rectangle of the render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Rect", into = "Rect")
)]
pub struct PanelBounds(Rect);

impl PanelBounds {
    /// Creates panel bounds from a pixel rectangle.
    ///
    /// Sides smaller than [`MIN_PANEL_EXTENT`] are widened to it.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self(ensure_extent(rect, MIN_PANEL_EXTENT, "panel bounds"))
    }

    /// Creates panel bounds of the given pixel size with its origin at `(0, 0)`.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Rect::new(0.0, 0.0, width, height))
    }

    /// Returns the underlying pixel rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.0
    }

    /// Returns the width in pixels; always positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.0.width()
    }

    /// Returns the height in pixels; always positive.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.0.height()
    }

    /// Returns the panel size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.0.size()
    }
}

impl From<Rect> for PanelBounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect)
    }
}

impl From<PanelBounds> for Rect {
    fn from(bounds: PanelBounds) -> Self {
        bounds.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{CameraBounds, MIN_CAMERA_EXTENT, MIN_PANEL_EXTENT, PanelBounds, from_diagonal};

    #[test]
    fn from_diagonal_normalizes_any_corner_pair() {
        let a = from_diagonal(0.0, 0.0, 10.0, 5.0);
        let b = from_diagonal(10.0, 5.0, 0.0, 0.0);
        let c = from_diagonal(0.0, 5.0, 10.0, 0.0);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.width(), 10.0);
        assert_eq!(a.height(), 5.0);
    }

    #[test]
    fn copies_are_independent() {
        let shared = CameraBounds::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut mine = shared;
        mine = mine.translated(Vec2::new(5.0, 0.0));
        assert_eq!(shared.min_x(), 0.0);
        assert_eq!(mine.min_x(), 5.0);
    }

    #[test]
    fn degenerate_camera_is_clamped_from_min_corner() {
        let cam = CameraBounds::new(Rect::new(3.0, 4.0, 3.0, 4.0));
        assert_eq!(cam.min_x(), 3.0);
        assert_eq!(cam.min_y(), 4.0);
        assert!((cam.width() - MIN_CAMERA_EXTENT).abs() < 1e-12);
        assert!((cam.height() - MIN_CAMERA_EXTENT).abs() < 1e-12);
    }

    #[test]
    fn inverted_camera_is_normalized() {
        let cam = CameraBounds::new(Rect::new(10.0, 10.0, 0.0, 0.0));
        assert_eq!(cam.rect(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn non_finite_camera_is_clamped() {
        let cam = CameraBounds::new(Rect::new(0.0, 0.0, f64::NAN, 2.0));
        assert!((cam.width() - MIN_CAMERA_EXTENT).abs() < 1e-12);
        assert_eq!(cam.height(), 2.0);
    }

    #[test]
    fn far_translation_keeps_a_positive_extent() {
        let tiny = CameraBounds::new(Rect::new(0.0, 0.0, MIN_CAMERA_EXTENT, MIN_CAMERA_EXTENT));
        assert_eq!(tiny.width(), MIN_CAMERA_EXTENT);

        // 1e11 + 1e-6 rounds back to 1e11.
        let far = tiny.translated(Vec2::new(1e11, 0.0));
        assert_eq!(far.min_x(), 1e11);
        assert!(far.width() >= MIN_CAMERA_EXTENT, "width was {}", far.width());
        assert!(far.width().is_finite());
        assert_eq!(far.height(), MIN_CAMERA_EXTENT);
    }

    #[test]
    fn non_finite_translation_is_ignored() {
        let cam = CameraBounds::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(cam.translated(Vec2::new(0.0, f64::INFINITY)), cam);
        assert_eq!(cam.translated(Vec2::new(f64::NAN, 0.0)), cam);

        let edge = cam.translated(Vec2::new(f64::MAX, 0.0));
        assert!(edge.width().is_finite());
        assert!(edge.width() >= MIN_CAMERA_EXTENT);
        assert_eq!(edge.translated(Vec2::new(f64::MAX, 0.0)), edge);
    }

    #[test]
    fn infinite_origin_is_moved_to_zero() {
        let cam = CameraBounds::new(Rect::new(f64::NEG_INFINITY, 2.0, 5.0, 4.0));
        assert_eq!(cam.min_x(), 0.0);
        assert_eq!(cam.width(), 5.0);
        assert_eq!(cam.height(), 2.0);
    }

    #[test]
    fn empty_panel_gets_one_pixel() {
        let panel = PanelBounds::from_size(0.0, 480.0);
        assert_eq!(panel.width(), MIN_PANEL_EXTENT);
        assert_eq!(panel.height(), 480.0);
    }

    #[test]
    fn scaled_about_center_keeps_center() {
        let cam = CameraBounds::new(Rect::new(0.0, 0.0, 10.0, 20.0));
        let zoomed = cam.scaled_about_center(0.5);
        assert_eq!(zoomed.center(), Point::new(5.0, 10.0));
        assert_eq!(zoomed.width(), 5.0);
        assert_eq!(zoomed.height(), 10.0);
        assert_eq!(cam.scaled_about_center(0.0), cam);
        assert_eq!(cam.scaled_about_center(-2.0), cam);
    }
}
