// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photo strip layout configuration.

use serde::{Deserialize, Serialize};

use crate::error::KalakiniError;
use crate::types::Color;

/// Geometry and colors of a photo strip.
///
/// The defaults describe the classic 2" x 6" booth strip: three 600x600
/// cells stacked into a 600x1800 canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripLayout {
    /// Width of each photo cell (and of the whole strip).
    pub cell_width: u32,
    /// Height of each photo cell.
    pub cell_height: u32,
    /// Number of cells stacked vertically.
    pub cell_count: u32,
    /// Separator bands extend this far above and below each internal seam.
    pub separator_half_width: u32,
    /// Thickness of the outer frame.
    pub border_width: u32,
    /// Canvas fill behind the cells.
    pub background: Color,
    /// Fill around a photo that does not cover its whole cell.
    pub letterbox: Color,
    /// Color of the bands between cells.
    pub separator: Color,
    /// Color of the outer frame.
    pub border: Color,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self {
            cell_width: 600,
            cell_height: 600,
            cell_count: 3,
            separator_half_width: 4,
            border_width: 8,
            background: Color::WHITE,
            letterbox: Color::BLACK,
            separator: Color::SUNFLOWER,
            border: Color::CORAL,
        }
    }
}

impl StripLayout {
    pub fn canvas_width(&self) -> u32 {
        self.cell_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.cell_height * self.cell_count
    }

    /// Y coordinates of the seams between neighbouring cells.
    pub fn seams(&self) -> impl Iterator<Item = u32> + '_ {
        (1..self.cell_count).map(move |i| i * self.cell_height)
    }

    /// Reject layouts the strip generator cannot draw.
    pub fn validate(&self) -> Result<(), KalakiniError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(KalakiniError::InvalidLayout(format!(
                "cell size must be non-zero, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if self.cell_count != 3 {
            return Err(KalakiniError::InvalidLayout(format!(
                "a booth strip holds exactly 3 photos, got {}",
                self.cell_count
            )));
        }
        let Some(canvas_height) = self.cell_height.checked_mul(self.cell_count) else {
            return Err(KalakiniError::InvalidLayout(format!(
                "strip height {} x {} cells overflows",
                self.cell_height, self.cell_count
            )));
        };
        if self.separator_half_width.saturating_mul(2) >= self.cell_height {
            return Err(KalakiniError::InvalidLayout(format!(
                "separator ({} px each side) would cover a whole cell",
                self.separator_half_width
            )));
        }
        if self.border_width.saturating_mul(2) >= self.cell_width.min(canvas_height) {
            return Err(KalakiniError::InvalidLayout(format!(
                "border width {} leaves no room for photos",
                self.border_width
            )));
        }
        Ok(())
    }
}
