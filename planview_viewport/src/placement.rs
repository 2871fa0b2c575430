// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-entity placement: where an entity's icon or outline is drawn, and how.
//!
//! World headings are measured counter-clockwise with Y up; screen Y grows
//! downward. Negating the heading is the whole of the 2D projection needed for
//! rotation.

use kurbo::{Affine, Vec2};

/// Read-only view of an entity's geometry, supplied by the host.
pub trait EntityGeometry {
    /// World position `[x, y, z]` with Y up.
    fn world_position(&self) -> [f64; 3];

    /// Orientation in radians, counter-clockwise in world space.
    fn heading(&self) -> f64;

    /// Whether the entity is drawn at a constant size regardless of its scale.
    fn fixed_size(&self) -> bool;
}

/// Input to [`placement_transform`], rebuilt whenever an entity moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityPlacement {
    /// Pixel X of the entity anchor.
    pub screen_x: f64,
    /// Pixel Y of the entity anchor.
    pub screen_y: f64,
    /// World heading in radians.
    pub heading_radians: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Ignore `scale_x`/`scale_y` and draw at unit scale.
    pub fixed_size: bool,
}

impl Default for EntityPlacement {
    fn default() -> Self {
        Self {
            screen_x: 0.0,
            screen_y: 0.0,
            heading_radians: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            fixed_size: false,
        }
    }
}

/// Builds `translate(screen) ∘ rotate(-heading) ∘ scale(sx, sy)`.
///
/// `(sx, sy)` is `(1, 1)` for fixed-size entities.
///
/// ```
/// use kurbo::{Affine, Point};
/// use planview_viewport::{EntityPlacement, placement_transform};
///
/// let placement = EntityPlacement {
///     screen_x: 10.0,
///     screen_y: 20.0,
///     fixed_size: true,
///     ..EntityPlacement::default()
/// };
/// let t = placement_transform(&placement);
/// assert_eq!(t, Affine::translate((10.0, 20.0)));
/// assert_eq!(t * Point::ORIGIN, Point::new(10.0, 20.0));
/// ```
#[must_use]
pub fn placement_transform(placement: &EntityPlacement) -> Affine {
    let scale = if placement.fixed_size {
        Vec2::new(1.0, 1.0)
    } else {
        Vec2::new(placement.scale_x, placement.scale_y)
    };
    Affine::translate((placement.screen_x, placement.screen_y))
        * Affine::rotate(-placement.heading_radians)
        * Affine::scale_non_uniform(scale.x, scale.y)
}
