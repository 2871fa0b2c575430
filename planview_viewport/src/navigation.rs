// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless navigation: pan, recenter, resize and scale computation.
//!
//! Every function takes bounds by reference and returns new bounds, or
//! mutates a [`ViewportMap`] it is handed. Nothing here holds state between
//! calls.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Point, Rect, Vec2};

use crate::map::ViewportMap;
use crate::plane::screen_to_world;
use crate::rect::{CameraBounds, PanelBounds};

const THREE_FRAC_PI_2: f64 = 3.0 * FRAC_PI_2;

/// Canonical pan directions, as azimuths measured from "up".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanDirection {
    /// `0`
    Up,
    /// `π/2`
    Left,
    /// `π`
    Right,
    /// `3π/2`
    Down,
}

impl PanDirection {
    /// Returns the azimuth in radians.
    #[must_use]
    pub const fn radians(self) -> f64 {
        match self {
            Self::Up => 0.0,
            Self::Left => FRAC_PI_2,
            Self::Right => PI,
            Self::Down => THREE_FRAC_PI_2,
        }
    }
}

/// `(sin θ, cos θ)`, exact for the four canonical directions.
fn azimuth_unit(direction: f64) -> Vec2 {
    if direction == 0.0 {
        Vec2::new(0.0, 1.0)
    } else if direction == FRAC_PI_2 {
        Vec2::new(1.0, 0.0)
    } else if direction == PI {
        Vec2::new(0.0, -1.0)
    } else if direction == THREE_FRAC_PI_2 {
        Vec2::new(-1.0, 0.0)
    } else {
        // from_angle gives (cos θ, sin θ).
        let v = Vec2::from_angle(direction);
        Vec2::new(v.y, v.x)
    }
}

/// Returns the world-space shift [`pan`] applies.
#[must_use]
pub fn pan_shift(direction: f64, distance: f64) -> Vec2 {
    azimuth_unit(direction) * distance
}

/// Moves the camera rigidly by `distance` world units along `direction`.
///
/// `shift_x = distance·sin(direction)`, `shift_y = distance·cos(direction)`;
/// width and height are unchanged.
///
/// ```
/// use kurbo::Rect;
/// use planview_viewport::{CameraBounds, PanDirection, pan};
///
/// let cam = CameraBounds::new(Rect::new(0.0, 0.0, 10.0, 10.0));
/// let up = pan(&cam, PanDirection::Up.radians(), 2.0);
/// assert_eq!(up.rect(), Rect::new(0.0, 2.0, 10.0, 12.0));
/// ```
#[must_use]
pub fn pan(camera: &CameraBounds, direction: f64, distance: f64) -> CameraBounds {
    camera.translated(pan_shift(direction, distance))
}

/// Like [`pan`], with the Y shift negated: `shift_y = −distance·cos(direction)`.
///
/// This is the screen-oriented convention, where "up" reduces world Y.
#[must_use]
pub fn pan_screen(camera: &CameraBounds, direction: f64, distance: f64) -> CameraBounds {
    let shift = pan_shift(direction, distance);
    camera.translated(Vec2::new(shift.x, -shift.y))
}

/// Recenters the camera on the world point currently under `pixel`.
///
/// Width and height are preserved.
#[must_use]
pub fn pan_to_point(camera: &CameraBounds, panel: &PanelBounds, pixel: Point) -> CameraBounds {
    let target = screen_to_world(pixel, camera, panel);
    camera.translated(target - camera.center())
}

/// World units per pixel needed to fit `map_area` into `panel` without distortion.
///
/// `1 / min(panel_w / map_w, panel_h / map_h)`: the more constrained axis wins.
///
/// ```
/// use kurbo::Rect;
/// use planview_viewport::{PanelBounds, get_scale};
///
/// let scale = get_scale(Rect::new(0.0, 0.0, 200.0, 100.0), &PanelBounds::from_size(100.0, 100.0));
/// assert_eq!(scale, 2.0);
/// ```
#[must_use]
pub fn get_scale(map_area: Rect, panel: &PanelBounds) -> f64 {
    let sx = panel.width() / map_area.width().abs();
    let sy = panel.height() / map_area.height().abs();
    1.0 / sx.min(sy)
}

/// Adapts `map` to a resized render surface without changing its scale.
///
/// - The scale is taken from the current camera against `old_panel`.
/// - The camera keeps its center and becomes `new_panel`'s size times that
///   scale.
/// - `new_panel` becomes the map's panel.
/// - The tracked screen rectangle keeps its min corner; its far corner moves
///   by the panel size delta, and the world rectangle is re-derived from it.
///   A shrink larger than the rectangle collapses it onto its min corner.
pub fn rescale(map: &mut ViewportMap, old_panel: &PanelBounds, new_panel: &PanelBounds) {
    let camera = map.camera_bounds();
    let scale = get_scale(camera.rect(), old_panel);
    let new_camera = CameraBounds::from_center_size(camera.center(), new_panel.size() * scale);
    let delta = new_panel.size() - old_panel.size();

    map.set_camera_bounds(new_camera);
    map.set_panel_bounds(*new_panel);

    let screen = map.screen_rect();
    map.set_screen_position(Rect::new(
        screen.x0,
        screen.y0,
        (screen.x1 + delta.width).max(screen.x0),
        (screen.y1 + delta.height).max(screen.y0),
    ));
    log::trace!(
        "rescale {:?} -> {:?} at {scale} units/px: camera {:?}",
        old_panel.size(),
        new_panel.size(),
        new_camera.rect()
    );
}
