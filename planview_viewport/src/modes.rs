// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::rect::CameraBounds;

/// Sign convention for the Y shift of a pan.
///
/// Both conventions are in use by hosts: pan buttons historically moved the
/// camera with [`PanConvention::Azimuth`], while drag-style panning used the
/// screen-oriented variant. [`crate::Navigator`] applies whichever is configured
/// to every pan command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanConvention {
    /// `shift = (d·sin θ, d·cos θ)`; see [`crate::pan`].
    #[default]
    Azimuth,
    /// `shift = (d·sin θ, −d·cos θ)`; see [`crate::pan_screen`].
    Screen,
}

/// How far a single pan command moves the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanDistance {
    /// A fixed distance in world units.
    World(f64),
    /// A fraction of the current camera height.
    ///
    /// The elevation planes derive their horizontal span from the camera
    /// height too, so this gives the same on-screen step on every plane.
    FractionOfView(f64),
}

impl PanDistance {
    /// Resolves this distance against the current camera, in world units.
    #[must_use]
    pub fn resolve(self, camera: &CameraBounds) -> f64 {
        match self {
            Self::World(d) => d,
            Self::FractionOfView(f) => f * camera.height(),
        }
    }
}

impl Default for PanDistance {
    fn default() -> Self {
        Self::FractionOfView(0.25)
    }
}
