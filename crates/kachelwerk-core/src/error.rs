// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Kachelwerk.

use thiserror::Error;

/// Top-level error type for all Kachelwerk operations.
#[derive(Debug, Error)]
pub enum KachelwerkError {
    // -- Image errors --
    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- PDF errors --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("PDF rasteriser `{program}` is not available: {reason}")]
    RasterizerUnavailable { program: String, reason: String },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, KachelwerkError>;
