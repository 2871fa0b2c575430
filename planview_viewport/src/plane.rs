// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection planes and the world ↔ screen formulas for each of them.
//!
//! Every plane maps a 2D world point (already reduced to the plane's two axes,
//! see [`ProjectionPlane::project_position`]) onto the panel. The plan-like
//! planes ([`ProjectionPlane::Top`], [`ProjectionPlane::Front`]) scale X by the
//! panel width; the elevation-like planes ([`ProjectionPlane::Left`],
//! [`ProjectionPlane::Right`]) derive their horizontal span from the camera
//! height and scale both axes by the panel height.
//!
//! The inverse conversion ignores the plane: it adds `cam.min_x` back but
//! subtracts `cam.max_y`, so it undoes the plan formulas only. Pixels picked on
//! an elevation plane do not map back to the world point drawn there. Callers
//! rely on both directions exactly as written.

use core::fmt;
use core::str::FromStr;

use kurbo::Point;

use crate::rect::{CameraBounds, PanelBounds};

/// A forward projection: world point on the plane → rounded pixel.
pub type ProjectFn = fn(Point, &CameraBounds, &PanelBounds) -> Point;

/// One of the four orthogonal viewing planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectionPlane {
    /// Plan view, looking down the world Y axis.
    #[default]
    Top,
    /// Elevation seen from the left.
    Left,
    /// Elevation seen from the right.
    Right,
    /// Elevation seen from the front; uses the plan formulas.
    Front,
}

impl ProjectionPlane {
    /// All planes, in declaration order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Right, Self::Front];

    /// Returns the symbolic name (`TOP`, `LEFT`, `RIGHT` or `FRONT`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Front => "FRONT",
        }
    }

    /// Returns the forward projection used by this plane.
    #[must_use]
    pub const fn projection(self) -> ProjectFn {
        match self {
            Self::Top | Self::Front => project_plan,
            Self::Left => project_left,
            Self::Right => project_right,
        }
    }

    /// Converts a world point on this plane into a rounded pixel position.
    #[must_use]
    pub fn world_to_screen(
        self,
        world: Point,
        camera: &CameraBounds,
        panel: &PanelBounds,
    ) -> Point {
        (self.projection())(world, camera, panel)
    }

    /// Reduces a 3D world position `[x, y, z]` (Y up) to this plane's two axes.
    ///
    /// The plan view drops Y; the elevations keep it as their vertical axis.
    #[must_use]
    pub fn project_position(self, position: [f64; 3]) -> Point {
        let [x, y, z] = position;
        match self {
            Self::Top => Point::new(x, z),
            Self::Front => Point::new(x, y),
            Self::Left | Self::Right => Point::new(z, y),
        }
    }
}

impl fmt::Display for ProjectionPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`ProjectionPlane`] name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsePlaneError;

impl fmt::Display for ParsePlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown projection plane, expected one of TOP, LEFT, RIGHT, FRONT")
    }
}

impl core::error::Error for ParsePlaneError {}

impl FromStr for ProjectionPlane {
    type Err = ParsePlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|plane| plane.name().eq_ignore_ascii_case(s))
            .ok_or(ParsePlaneError)
    }
}

fn project_plan(w: Point, cam: &CameraBounds, panel: &PanelBounds) -> Point {
    Point::new(
        (w.x - cam.min_x()) * panel.width() / cam.width(),
        (w.y + cam.max_y()) * panel.height() / cam.height(),
    )
    .round()
}

fn project_left(w: Point, cam: &CameraBounds, panel: &PanelBounds) -> Point {
    Point::new(
        (-w.x - cam.min_x()) * panel.height() / cam.height(),
        (-w.y + cam.max_y()) * panel.height() / cam.height(),
    )
    .round()
}

fn project_right(w: Point, cam: &CameraBounds, panel: &PanelBounds) -> Point {
    Point::new(
        (w.x - cam.min_x()) * panel.height() / cam.height(),
        (-w.y + cam.max_y()) * panel.height() / cam.height(),
    )
    .round()
}

/// Converts a pixel into world units. Plane-agnostic and unrounded.
#[must_use]
pub fn screen_to_world(screen: Point, cam: &CameraBounds, panel: &PanelBounds) -> Point {
    Point::new(
        screen.x * cam.width() / panel.width() + cam.min_x(),
        screen.y * cam.height() / panel.height() - cam.max_y(),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{ParsePlaneError, ProjectionPlane, screen_to_world};
    use crate::rect::{CameraBounds, PanelBounds};

    fn cam10() -> CameraBounds {
        CameraBounds::new(Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn top_literal_case() {
        let panel = PanelBounds::from_size(100.0, 100.0);
        let p = ProjectionPlane::Top.world_to_screen(Point::new(5.0, 5.0), &cam10(), &panel);
        assert_eq!(p, Point::new(50.0, 150.0));
    }

    #[test]
    fn front_matches_top() {
        let cam = CameraBounds::new(Rect::new(-3.0, 1.0, 7.0, 6.0));
        let panel = PanelBounds::from_size(320.0, 200.0);
        for w in [Point::new(0.0, 0.0), Point::new(2.5, -4.0), Point::new(-3.0, 6.0)] {
            assert_eq!(
                ProjectionPlane::Top.world_to_screen(w, &cam, &panel),
                ProjectionPlane::Front.world_to_screen(w, &cam, &panel)
            );
        }
    }

    #[test]
    fn top_scales_x_by_panel_width() {
        let panel = PanelBounds::from_size(200.0, 100.0);
        let p = ProjectionPlane::Top.world_to_screen(Point::new(5.0, 0.0), &cam10(), &panel);
        assert_eq!(p.x, 100.0);
    }

    #[test]
    fn left_negates_both_axes_and_uses_panel_height() {
        let cam = CameraBounds::new(Rect::new(-10.0, 0.0, 0.0, 10.0));
        let panel = PanelBounds::from_size(400.0, 100.0);
        // sx = (-2 - -10) * 100 / 10 = 80; sy = (-3 + 10) * 100 / 10 = 70
        let p = ProjectionPlane::Left.world_to_screen(Point::new(2.0, 3.0), &cam, &panel);
        assert_eq!(p, Point::new(80.0, 70.0));
    }

    #[test]
    fn right_uses_panel_height_for_x() {
        let panel = PanelBounds::from_size(400.0, 100.0);
        // sx = (2 - 0) * 100 / 10 = 20; sy = (-3 + 10) * 100 / 10 = 70
        let p = ProjectionPlane::Right.world_to_screen(Point::new(2.0, 3.0), &cam10(), &panel);
        assert_eq!(p, Point::new(20.0, 70.0));
    }

    #[test]
    fn forward_rounds_to_whole_pixels() {
        let panel = PanelBounds::from_size(100.0, 100.0);
        let p = ProjectionPlane::Top.world_to_screen(Point::new(0.123, 0.987), &cam10(), &panel);
        assert_eq!(p, Point::new(1.0, 110.0));
    }

    #[test]
    fn inverse_subtracts_max_y() {
        let panel = PanelBounds::from_size(100.0, 100.0);
        let w = screen_to_world(Point::new(50.0, 150.0), &cam10(), &panel);
        assert_eq!(w, Point::new(5.0, 5.0));
        // The panel origin lands below the camera: the Y term subtracts max_y.
        let w = screen_to_world(Point::new(0.0, 0.0), &cam10(), &panel);
        assert_eq!(w, Point::new(0.0, -10.0));
    }

    #[test]
    fn project_position_picks_plane_axes() {
        let pos = [1.0, 2.0, 3.0];
        assert_eq!(ProjectionPlane::Top.project_position(pos), Point::new(1.0, 3.0));
        assert_eq!(ProjectionPlane::Front.project_position(pos), Point::new(1.0, 2.0));
        assert_eq!(ProjectionPlane::Left.project_position(pos), Point::new(3.0, 2.0));
        assert_eq!(ProjectionPlane::Right.project_position(pos), Point::new(3.0, 2.0));
    }

    #[test]
    fn parse_names() {
        for plane in ProjectionPlane::ALL {
            assert_eq!(plane.name().parse::<ProjectionPlane>(), Ok(plane));
            assert_eq!(alloc::format!("{plane}"), plane.name());
        }
        assert_eq!(" front ".parse::<ProjectionPlane>(), Ok(ProjectionPlane::Front));
        assert_eq!("BOTTOM".parse::<ProjectionPlane>(), Err(ParsePlaneError));
    }
}
