// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walk through a plan view: size the surface, track a selection,
//! run a scripted list of navigation commands, resize, and place an entity.
//!
//! Commands can be given on the command line (`PAN_UP ZOOM_CHANGE(40) RESET`);
//! without arguments a built-in script runs. Set `RUST_LOG=trace` to see every
//! map-area refresh.

use kurbo::{Point, Rect, Vec2};
use log::{info, warn};
use planview_viewport::{
    CameraBounds, EntityGeometry, NavCommand, Navigator, NavigatorConfig, PanDistance,
    PanelBounds, ProjectionPlane, ViewportMap, ZoomControl, ZoomState, placement_transform,
};

const SCRIPT: &[&str] = &[
    "PAN_UP",
    "PAN_LEFT",
    "ZOOM_IN",
    "ZOOM_IN",
    "ZOOM_CHANGE(70)",
    "PAN_DOWN",
    "RESET",
];

struct Column {
    position: [f64; 3],
}

impl EntityGeometry for Column {
    fn world_position(&self) -> [f64; 3] {
        self.position
    }

    fn heading(&self) -> f64 {
        0.3
    }

    fn fixed_size(&self) -> bool {
        false
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    // A 40 m x 30 m floor plan, initially unsized.
    let camera = CameraBounds::new(Rect::new(0.0, 0.0, 40.0, 30.0));
    let mut map = ViewportMap::new(ProjectionPlane::Top, camera);
    map.set_world_position(Rect::new(5.0, 5.0, 15.0, 10.0));

    let zoom = ZoomControl::new(ZoomState::new(3, 0, 6, 20));
    let config = NavigatorConfig::default().with_pan_distance(PanDistance::FractionOfView(0.1));
    let mut nav = Navigator::new(map, zoom, config);
    nav.zoom_mut().subscribe(|level| info!("zoom slider moved to level {level}"));

    nav.resize(PanelBounds::from_size(800.0, 600.0));
    info!("selection on screen: {:?}", nav.map().screen_rect());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let commands: Vec<&str> = if args.is_empty() {
        SCRIPT.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };
    for name in commands {
        match name.parse::<NavCommand>() {
            Ok(cmd) => {
                let changed = nav.apply(cmd);
                info!(
                    "{cmd}: changed={changed} camera={:?} selection={:?}",
                    nav.map().camera_bounds().rect(),
                    nav.map().screen_rect()
                );
            }
            Err(err) => warn!("skipping {name:?}: {err}"),
        }
    }

    nav.resize(PanelBounds::from_size(1024.0, 600.0));
    info!(
        "after resize: camera={:?} selection={:?}",
        nav.map().camera_bounds().rect(),
        nav.map().screen_rect()
    );

    let pointer = Point::new(400.0, 300.0);
    if let Some(world) = nav.map().screen_to_world(pointer) {
        info!("pointer {pointer:?} is at world {world:?}");
    }

    let column = Column {
        position: [12.0, 0.0, 8.0],
    };
    if let Some(placement) = nav.map().placement_for(&column, Vec2::new(2.0, 2.0)) {
        info!(
            "column drawn with {:?}",
            placement_transform(&placement).as_coeffs()
        );
    }
}
