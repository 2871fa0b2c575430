// Copyright 2025 the Planview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::navigation::PanDirection;

/// Navigation commands a host can issue, identified by symbolic names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavCommand {
    /// `PAN_UP`
    PanUp,
    /// `PAN_LEFT`
    PanLeft,
    /// `PAN_RIGHT`
    PanRight,
    /// `PAN_DOWN`
    PanDown,
    /// `RESET`: back to the home camera and zoom level.
    Reset,
    /// `ZOOM_IN`
    ZoomIn,
    /// `ZOOM_OUT`
    ZoomOut,
    /// `ZOOM_CHANGE(<pixel_y>)`: direct drag or click on the zoom slider.
    ZoomChange {
        /// Slider pixel the pointer is at.
        pixel_y: i32,
    },
}

impl NavCommand {
    /// Returns the symbolic name, without any payload.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PanUp => "PAN_UP",
            Self::PanLeft => "PAN_LEFT",
            Self::PanRight => "PAN_RIGHT",
            Self::PanDown => "PAN_DOWN",
            Self::Reset => "RESET",
            Self::ZoomIn => "ZOOM_IN",
            Self::ZoomOut => "ZOOM_OUT",
            Self::ZoomChange { .. } => "ZOOM_CHANGE",
        }
    }

    /// Returns the pan direction for the four pan commands.
    #[must_use]
    pub const fn pan_direction(self) -> Option<PanDirection> {
        match self {
            Self::PanUp => Some(PanDirection::Up),
            Self::PanLeft => Some(PanDirection::Left),
            Self::PanRight => Some(PanDirection::Right),
            Self::PanDown => Some(PanDirection::Down),
            _ => None,
        }
    }
}

impl fmt::Display for NavCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomChange { pixel_y } => write!(f, "ZOOM_CHANGE({pixel_y})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Error returned when parsing a [`NavCommand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    /// The name is not one of the known commands.
    Unknown,
    /// `ZOOM_CHANGE` was given without a `(<pixel_y>)` payload.
    MissingPixel,
    /// The `ZOOM_CHANGE` payload is not an integer.
    InvalidPixel,
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown navigation command"),
            Self::MissingPixel => f.write_str("ZOOM_CHANGE needs a pixel, as ZOOM_CHANGE(<y>)"),
            Self::InvalidPixel => f.write_str("ZOOM_CHANGE pixel is not an integer"),
        }
    }
}

impl core::error::Error for ParseCommandError {}

const SIMPLE: [NavCommand; 7] = [
    NavCommand::PanUp,
    NavCommand::PanLeft,
    NavCommand::PanRight,
    NavCommand::PanDown,
    NavCommand::Reset,
    NavCommand::ZoomIn,
    NavCommand::ZoomOut,
];

impl FromStr for NavCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(cmd) = SIMPLE.into_iter().find(|c| c.name().eq_ignore_ascii_case(s)) {
            return Ok(cmd);
        }

        let zoom_change = "ZOOM_CHANGE";
        let Some(head) = s.get(..zoom_change.len()) else {
            return Err(ParseCommandError::Unknown);
        };
        if !head.eq_ignore_ascii_case(zoom_change) {
            return Err(ParseCommandError::Unknown);
        }
        let rest = s[zoom_change.len()..].trim();
        if rest.is_empty() {
            return Err(ParseCommandError::MissingPixel);
        }
        let inner = rest
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or(ParseCommandError::Unknown)?;
        let pixel_y = inner
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseCommandError::InvalidPixel)?;
        Ok(Self::ZoomChange { pixel_y })
    }
}
