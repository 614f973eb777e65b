// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// kalakini-imaging: Image processing for the KalaKini photo booth.
//
// Provides the in-memory adjustment pipeline (sepia, contrast, brightness,
// saturation, gaussian blur), the file-level vintage/bright/smooth filters,
// and the three-photo strip generator.

pub mod filters;
pub mod photo;
pub mod strip;

// Re-export the primary entry points so callers can use `kalakini_imaging::StripGenerator` etc.
pub use filters::{apply_bright, apply_filter_file, apply_smooth, apply_strip_filter, apply_vintage};
pub use photo::processor::PhotoProcessor;
pub use strip::generator::StripGenerator;
