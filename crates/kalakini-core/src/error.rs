// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for KalaKini Booth.

use thiserror::Error;

/// Top-level error type for all booth operations.
#[derive(Debug, Error)]
pub enum KalakiniError {
    // -- File access --
    #[error("file I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // -- Codec errors --
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("failed to encode {path}: {reason}")]
    Encode { path: String, reason: String },

    // -- Configuration --
    #[error("invalid strip layout: {0}")]
    InvalidLayout(String),
}

impl KalakiniError {
    /// Short machine-friendly name of the failure kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Decode { .. } => "decode",
            Self::Encode { .. } => "encode",
            Self::InvalidLayout(_) => "layout",
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, KalakiniError>;
