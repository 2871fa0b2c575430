// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::placement::{EntityGeometry, EntityPlacement};
use crate::plane::{ProjectionPlane, screen_to_world};
use crate::rect::{CameraBounds, PanelBounds};

/// Camera, panel and one tracked world/screen rectangle pair for a single view.
///
/// `ViewportMap` owns:
/// - the [`CameraBounds`]: the world extent currently visible,
/// - the [`PanelBounds`]: the pixel size of the render surface, unknown until
///   the host reports it,
/// - a world rectangle and its screen projection, kept in step under the
///   active [`ProjectionPlane`].
///
/// Setters that change the tracked pair recompute the other side before they
/// return. Camera, panel and plane setters do not; call
/// [`ViewportMap::update_map_area`] afterwards.
#[derive(Clone, Debug)]
pub struct ViewportMap {
    plane: ProjectionPlane,
    camera: CameraBounds,
    panel: Option<PanelBounds>,
    world_rect: Rect,
    screen_rect: Rect,
}

impl ViewportMap {
    /// Creates a map for `plane` looking at `camera`.
    ///
    /// - The panel is unknown; conversions return `None` until
    ///   [`ViewportMap::set_panel_bounds`] is called.
    /// - The tracked world rectangle starts as the camera extent.
    #[must_use]
    pub fn new(plane: ProjectionPlane, camera: CameraBounds) -> Self {
        Self {
            plane,
            camera,
            panel: None,
            world_rect: camera.rect(),
            screen_rect: Rect::ZERO,
        }
    }

    /// Creates a map with a known panel and refreshes the screen rectangle.
    #[must_use]
    pub fn with_panel(plane: ProjectionPlane, camera: CameraBounds, panel: PanelBounds) -> Self {
        let mut map = Self::new(plane, camera);
        map.panel = Some(panel);
        map.update_map_area();
        map
    }

    /// Returns the active projection plane.
    #[must_use]
    pub fn current_plane(&self) -> ProjectionPlane {
        self.plane
    }

    /// Switches the projection plane. Does not recompute anything.
    pub fn set_current_plane(&mut self, plane: ProjectionPlane) {
        self.plane = plane;
    }

    /// Returns a copy of the camera bounds.
    #[must_use]
    pub fn camera_bounds(&self) -> CameraBounds {
        self.camera
    }

    /// Replaces the camera bounds with a copy of `camera`.
    pub fn set_camera_bounds(&mut self, camera: CameraBounds) {
        self.camera = camera;
    }

    /// Returns the panel bounds, or `None` before the surface has been sized.
    #[must_use]
    pub fn panel_bounds(&self) -> Option<PanelBounds> {
        self.panel
    }

    /// Replaces the panel bounds. Does not recompute anything.
    pub fn set_panel_bounds(&mut self, panel: PanelBounds) {
        self.panel = Some(panel);
    }

    /// Returns the tracked world rectangle.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        self.world_rect
    }

    /// Returns the tracked screen rectangle.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    /// Stores a screen rectangle and derives the world rectangle from it.
    ///
    /// Both diagonal corners go through the inverse conversion. Before the
    /// panel is known this is a no-op.
    pub fn set_screen_position(&mut self, rect: Rect) {
        let Some(panel) = self.panel else {
            log::debug!("set_screen_position({rect:?}) ignored: panel not sized yet");
            return;
        };
        let rect = rect.abs();
        let p0 = screen_to_world(rect.origin(), &self.camera, &panel);
        let p1 = screen_to_world(Point::new(rect.max_x(), rect.max_y()), &self.camera, &panel);
        self.screen_rect = rect;
        self.world_rect = Rect::from_points(p0, p1);
    }

    /// Stores a world rectangle and derives the screen rectangle from it.
    ///
    /// Before the panel is known only the world side is stored; the screen
    /// side follows on the next [`ViewportMap::update_map_area`].
    pub fn set_world_position(&mut self, rect: Rect) {
        self.world_rect = rect.abs();
        self.update_map_area();
    }

    /// Re-derives the screen rectangle from the world rectangle using the
    /// current camera, panel and plane.
    pub fn update_map_area(&mut self) {
        let Some(panel) = self.panel else {
            return;
        };
        let project = self.plane.projection();
        let p0 = project(self.world_rect.origin(), &self.camera, &panel);
        let p1 = project(
            Point::new(self.world_rect.max_x(), self.world_rect.max_y()),
            &self.camera,
            &panel,
        );
        self.screen_rect = Rect::from_points(p0, p1);
        log::trace!(
            "{} map area: world {:?} -> screen {:?}",
            self.plane,
            self.world_rect,
            self.screen_rect
        );
    }

    /// Converts a world point on the active plane into a rounded pixel.
    ///
    /// Returns `None` before the panel is known.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Option<Point> {
        let panel = self.panel?;
        Some(self.plane.world_to_screen(world, &self.camera, &panel))
    }

    /// Converts a pixel (for example, a pointer position) into world units.
    ///
    /// Returns `None` before the panel is known.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Option<Point> {
        let panel = self.panel?;
        Some(screen_to_world(screen, &self.camera, &panel))
    }

    /// Builds the placement of `entity` on the active plane.
    ///
    /// `scale` is the entity's scale factors; it is ignored for fixed-size
    /// entities when the transform is built. Returns `None` before the panel
    /// is known.
    #[must_use]
    pub fn placement_for<E: EntityGeometry + ?Sized>(
        &self,
        entity: &E,
        scale: Vec2,
    ) -> Option<EntityPlacement> {
        let world = self.plane.project_position(entity.world_position());
        let screen = self.world_to_screen(world)?;
        Some(EntityPlacement {
            screen_x: screen.x,
            screen_y: screen.y,
            heading_radians: entity.heading(),
            scale_x: scale.x,
            scale_y: scale.y,
            fixed_size: entity.fixed_size(),
        })
    }

    /// Snapshot of the current map state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportMapDebugInfo {
        ViewportMapDebugInfo {
            plane: self.plane,
            camera: self.camera.rect(),
            panel: self.panel.map(|p| p.rect()),
            world_rect: self.world_rect,
            screen_rect: self.screen_rect,
        }
    }
}

/// Debug snapshot of a [`ViewportMap`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMapDebugInfo {
    /// Active projection plane.
    pub plane: ProjectionPlane,
    /// Visible world extent.
    pub camera: Rect,
    /// Render surface, if sized.
    pub panel: Option<Rect>,
    /// Tracked world rectangle.
    pub world_rect: Rect,
    /// Screen projection of the tracked world rectangle.
    pub screen_rect: Rect,
}
