// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=planview_viewport --heading-base-level=0

//! Planview Viewport: world ↔ pixel mapping for plan and elevation canvases.
//!
//! This crate is the headless core of a map-like authoring canvas. World
//! content lives in real-world units (meters); the render surface is measured
//! in pixels. The crate provides:
//! - A camera ([`CameraBounds`]) tracked independently of the panel size
//!   ([`PanelBounds`]).
//! - Four projection planes ([`ProjectionPlane`]) with their own forward
//!   formulas, and one plane-agnostic inverse for pointer input.
//! - [`ViewportMap`], which keeps a world rectangle and its screen projection
//!   in step.
//! - Stateless navigation: [`pan`], [`pan_to_point`], [`rescale`],
//!   [`get_scale`].
//! - A discrete zoom state machine with change notification ([`ZoomControl`]).
//! - Per-entity placement transforms ([`placement_transform`]).
//! - [`Navigator`], which maps symbolic [`NavCommand`]s onto all of the above.
//!
//! It does **not** paint, route input events, or load anything. Callers are
//! expected to:
//! - Report surface resizes with [`Navigator::resize`] (or [`rescale`]).
//! - Feed pointer pixels into [`ViewportMap::screen_to_world`].
//! - Draw entities with the [`kurbo::Affine`] from [`placement_transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use planview_viewport::{
//!     CameraBounds, NavCommand, Navigator, NavigatorConfig, PanelBounds, ProjectionPlane,
//!     ViewportMap, ZoomControl, ZoomState,
//! };
//!
//! // 10 m × 10 m visible on a 100 × 100 px panel.
//! let camera = CameraBounds::new(Rect::new(0.0, 0.0, 10.0, 10.0));
//! let map = ViewportMap::with_panel(ProjectionPlane::Top, camera, PanelBounds::from_size(100.0, 100.0));
//! assert_eq!(map.world_to_screen(Point::new(5.0, 5.0)), Some(Point::new(50.0, 150.0)));
//!
//! let mut nav = Navigator::new(map, ZoomControl::new(ZoomState::new(2, 0, 4, 10)), NavigatorConfig::default());
//! nav.apply("ZOOM_IN".parse().unwrap());
//! nav.apply(NavCommand::Reset);
//! assert_eq!(nav.map().camera_bounds(), camera);
//! ```
//!
//! ## Conventions
//!
//! - Forward conversions round to whole pixels; the inverse does not round.
//! - Before the panel size is known, conversions return `None` and setters
//!   that need one leave the map untouched.
//! - Camera and panel extents are always strictly positive; degenerate input
//!   is widened rather than rejected.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod command;
mod map;
mod modes;
mod navigation;
mod navigator;
mod placement;
mod plane;
mod rect;
mod zoom;

pub use command::{NavCommand, ParseCommandError};
pub use map::{ViewportMap, ViewportMapDebugInfo};
pub use modes::{PanConvention, PanDistance};
pub use navigation::{PanDirection, get_scale, pan, pan_screen, pan_shift, pan_to_point, rescale};
pub use navigator::{Navigator, NavigatorConfig};
pub use placement::{EntityGeometry, EntityPlacement, placement_transform};
pub use plane::{ParsePlaneError, ProjectFn, ProjectionPlane, screen_to_world};
pub use rect::{CameraBounds, MIN_CAMERA_EXTENT, MIN_PANEL_EXTENT, PanelBounds, from_diagonal};
pub use zoom::{ObserverId, ZoomControl, ZoomState};
