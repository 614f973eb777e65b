// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photo module: loading, saving, and per-pixel enhancement of RGB photos.

pub mod processor;

pub use processor::PhotoProcessor;
