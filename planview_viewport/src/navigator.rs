// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::command::NavCommand;
use crate::map::ViewportMap;
use crate::modes::{PanConvention, PanDistance};
use crate::navigation::{pan, pan_screen, pan_to_point, rescale};
use crate::rect::{CameraBounds, PanelBounds};
use crate::zoom::ZoomControl;

/// Tunables for a [`Navigator`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigatorConfig {
    /// Distance moved by one pan command.
    pub pan_distance: PanDistance,
    /// Y sign convention for pan commands.
    pub pan_convention: PanConvention,
    /// Camera size multiplier per zoom level; levels above the home level
    /// show more of the world.
    pub zoom_factor: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            pan_distance: PanDistance::default(),
            pan_convention: PanConvention::default(),
            zoom_factor: 1.25,
        }
    }
}

impl NavigatorConfig {
    /// Sets the pan distance.
    #[must_use]
    pub fn with_pan_distance(mut self, pan_distance: PanDistance) -> Self {
        self.pan_distance = pan_distance;
        self
    }

    /// Sets the pan convention.
    #[must_use]
    pub fn with_pan_convention(mut self, pan_convention: PanConvention) -> Self {
        self.pan_convention = pan_convention;
        self
    }

    /// Sets the per-level zoom factor. Factors that are not finite, or not
    /// greater than 1, are ignored.
    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        if zoom_factor.is_finite() && zoom_factor > 1.0 {
            self.zoom_factor = zoom_factor;
        } else {
            log::debug!("ignoring zoom factor {zoom_factor}, keeping {}", self.zoom_factor);
        }
        self
    }
}

/// `base^steps` without relying on `std` float intrinsics.
fn level_factor(base: f64, steps: i32) -> f64 {
    let mut factor = 1.0;
    for _ in 0..steps.unsigned_abs() {
        factor *= base;
    }
    if steps < 0 { 1.0 / factor } else { factor }
}

/// Routes [`NavCommand`]s and surface resizes onto a [`ViewportMap`].
///
/// The navigator remembers the camera and zoom level it was created with as
/// its home; [`NavCommand::Reset`] returns to them. After every command that
/// changes the camera the tracked screen rectangle is refreshed, so the map's
/// world/screen pair is consistent when `apply` returns.
#[derive(Debug)]
pub struct Navigator {
    map: ViewportMap,
    zoom: ZoomControl,
    config: NavigatorConfig,
    home_camera: CameraBounds,
    home_level: i32,
}

impl Navigator {
    /// Creates a navigator; the current camera and level become home.
    #[must_use]
    pub fn new(map: ViewportMap, zoom: ZoomControl, config: NavigatorConfig) -> Self {
        let home_camera = map.camera_bounds();
        let home_level = zoom.level();
        Self {
            map,
            zoom,
            config,
            home_camera,
            home_level,
        }
    }

    /// Returns the map.
    #[must_use]
    pub fn map(&self) -> &ViewportMap {
        &self.map
    }

    /// Returns the map for direct edits (tracked rectangles, plane switches).
    pub fn map_mut(&mut self) -> &mut ViewportMap {
        &mut self.map
    }

    /// Returns the zoom control.
    #[must_use]
    pub fn zoom(&self) -> &ZoomControl {
        &self.zoom
    }

    /// Returns the zoom control, for example to subscribe to level changes.
    ///
    /// Changing the level through this handle does not resize the camera;
    /// use [`Navigator::apply`] for that.
    pub fn zoom_mut(&mut self) -> &mut ZoomControl {
        &mut self.zoom
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: NavigatorConfig) {
        self.config = config;
    }

    /// Returns the home camera.
    #[must_use]
    pub fn home_camera(&self) -> CameraBounds {
        self.home_camera
    }

    /// Makes the current camera and zoom level the new home.
    pub fn set_home(&mut self) {
        self.home_camera = self.map.camera_bounds();
        self.home_level = self.zoom.level();
    }

    /// Applies one command. Returns `true` if the camera or zoom level changed.
    pub fn apply(&mut self, cmd: NavCommand) -> bool {
        let camera = self.map.camera_bounds();
        let level = self.zoom.level();

        match cmd {
            NavCommand::PanUp
            | NavCommand::PanLeft
            | NavCommand::PanRight
            | NavCommand::PanDown => {
                let Some(direction) = cmd.pan_direction() else {
                    return false;
                };
                let distance = self.config.pan_distance.resolve(&camera);
                let moved = match self.config.pan_convention {
                    PanConvention::Azimuth => pan(&camera, direction.radians(), distance),
                    PanConvention::Screen => pan_screen(&camera, direction.radians(), distance),
                };
                self.map.set_camera_bounds(moved);
            }
            NavCommand::Reset => {
                self.map.set_camera_bounds(self.home_camera);
                self.zoom.set_level(self.home_level);
            }
            NavCommand::ZoomIn => {
                self.zoom.zoom_in();
            }
            NavCommand::ZoomOut => {
                self.zoom.zoom_out();
            }
            NavCommand::ZoomChange { pixel_y } => {
                self.zoom.zoom_change(pixel_y);
            }
        }

        if !matches!(cmd, NavCommand::Reset) {
            let steps = self.zoom.level() - level;
            if steps != 0 {
                let factor = level_factor(self.config.zoom_factor, steps);
                self.map.set_camera_bounds(camera.scaled_about_center(factor));
            }
        }

        let changed = self.map.camera_bounds() != camera || self.zoom.level() != level;
        if changed {
            self.map.update_map_area();
            log::debug!("{cmd}: camera {:?}", self.map.camera_bounds().rect());
        }
        changed
    }

    /// Recenters the camera on the world point under `pixel`.
    ///
    /// Returns `false` before the panel is known.
    pub fn pan_to_point(&mut self, pixel: Point) -> bool {
        let Some(panel) = self.map.panel_bounds() else {
            return false;
        };
        let moved = pan_to_point(&self.map.camera_bounds(), &panel, pixel);
        self.map.set_camera_bounds(moved);
        self.map.update_map_area();
        true
    }

    /// Handles a render-surface resize, preserving scale.
    ///
    /// The first size reported only records the panel and projects the
    /// tracked world rectangle.
    pub fn resize(&mut self, new_panel: PanelBounds) {
        match self.map.panel_bounds() {
            Some(old_panel) if old_panel == new_panel => {}
            Some(old_panel) => rescale(&mut self.map, &old_panel, &new_panel),
            None => {
                self.map.set_panel_bounds(new_panel);
                self.map.update_map_area();
            }
        }
    }
}
