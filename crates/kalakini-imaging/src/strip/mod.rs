// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Strip module: letterboxing, stacking and framing three photos into one
// booth strip.

pub mod generator;

pub use generator::{StripGenerator, strip_file_name};
