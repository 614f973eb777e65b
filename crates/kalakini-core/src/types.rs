// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the booth: filter tags and the adjustment steps each
// filter expands to.

use serde::{Deserialize, Serialize};

/// Which filter pipeline to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Leave the pixels alone.
    #[default]
    None,
    /// Sepia tone with a slight contrast boost.
    Vintage,
    /// Brighter and more saturated.
    Bright,
    /// Soft blur with a small brightness lift.
    Smooth,
}

/// A single enhancement step. Factors of 1.0 are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Adjustment {
    /// Fixed 3x3 sepia color matrix.
    Sepia,
    /// Interpolate away from mid-gray (128).
    Contrast(f32),
    /// Interpolate away from black.
    Brightness(f32),
    /// Interpolate away from the pixel's luma.
    Saturation(f32),
    /// Gaussian blur with the given sigma.
    GaussianBlur(f32),
}

const VINTAGE_STEPS: &[Adjustment] = &[Adjustment::Sepia, Adjustment::Contrast(1.1)];
const BRIGHT_STEPS: &[Adjustment] = &[Adjustment::Brightness(1.2), Adjustment::Saturation(1.3)];
const SMOOTH_STEPS: &[Adjustment] = &[Adjustment::GaussianBlur(0.5), Adjustment::Brightness(1.05)];

// Strip cells skip the sepia matrix and only mute the colors.
const STRIP_VINTAGE_STEPS: &[Adjustment] =
    &[Adjustment::Saturation(0.8), Adjustment::Contrast(1.1)];

impl FilterKind {
    /// Every variant, in CLI listing order.
    pub const ALL: [FilterKind; 4] = [Self::None, Self::Vintage, Self::Bright, Self::Smooth];

    /// Lowercase tag used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vintage => "vintage",
            Self::Bright => "bright",
            Self::Smooth => "smooth",
        }
    }

    /// Human label used in result lines ("Vintage filter applied: ...").
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No",
            Self::Vintage => "Vintage",
            Self::Bright => "Bright",
            Self::Smooth => "Smooth",
        }
    }

    /// Steps for the full-fidelity single-image filters.
    pub fn standalone_steps(&self) -> &'static [Adjustment] {
        match self {
            Self::None => &[],
            Self::Vintage => VINTAGE_STEPS,
            Self::Bright => BRIGHT_STEPS,
            Self::Smooth => SMOOTH_STEPS,
        }
    }

    /// Steps applied to each cell of a photo strip.
    pub fn strip_steps(&self) -> &'static [Adjustment] {
        match self {
            Self::Vintage => STRIP_VINTAGE_STEPS,
            other => other.standalone_steps(),
        }
    }

    /// Parse a tag, treating anything unrecognised as [`FilterKind::None`].
    ///
    /// Returns the kind plus whether the tag was recognised, so callers can
    /// warn about it.
    pub fn parse_lenient(tag: &str) -> (Self, bool) {
        match tag.parse() {
            Ok(kind) => (kind, true),
            Err(_) => (Self::None, false),
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a filter tag is not one of `none|vintage|bright|smooth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl std::fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown filter type '{}' (expected none, vintage, bright or smooth)",
            self.0
        )
    }
}

impl std::error::Error for UnknownFilter {}

impl std::str::FromStr for FilterKind {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "vintage" => Ok(Self::Vintage),
            "bright" => Ok(Self::Bright),
            "smooth" => Ok(Self::Smooth),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

/// An sRGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const BLACK: Color = Color(0, 0, 0);
    /// Booth yellow (#FFD93D), used between photos.
    pub const SUNFLOWER: Color = Color(255, 217, 61);
    /// Booth coral (#FF6B6B), used for the outer frame.
    pub const CORAL: Color = Color(255, 107, 107);

    pub fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}
