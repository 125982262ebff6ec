// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command-line tools.
//
// Every technical error is mapped to a short summary plus a suggestion the
// user can act on.

use std::io::ErrorKind;

use crate::error::KachelwerkError;

/// A human-readable error with a plain summary and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
}

/// Convert a `KachelwerkError` into a `HumanError`.
pub fn humanize_error(err: &KachelwerkError) -> HumanError {
    match err {
        KachelwerkError::ImageError(detail) => HumanError {
            message: "An image could not be processed.".into(),
            suggestion: format!(
                "Check that the file is a valid image and the output folder is writable ({detail})."
            ),
        },

        KachelwerkError::PdfError(detail) => {
            if detail.contains("pdftocairo") {
                HumanError {
                    message: "The PDF could not be rendered.".into(),
                    suggestion: format!(
                        "The renderer reported a problem; make sure the PDF opens in a viewer ({detail})."
                    ),
                }
            } else {
                HumanError {
                    message: "The PDF could not be read or written.".into(),
                    suggestion: "Make sure the file is a valid PDF and is not open in another program."
                        .into(),
                }
            }
        }

        KachelwerkError::RasterizerUnavailable { program, .. } => HumanError {
            message: format!("`{program}` was not found."),
            suggestion: "Install poppler-utils (it provides pdftocairo) or point PDFTOCAIRO_BIN at the binary."
                .into(),
        },

        KachelwerkError::InvalidConfig(detail) => HumanError {
            message: "The options given are not valid.".into(),
            suggestion: format!("Fix the command line and try again: {detail}."),
        },

        KachelwerkError::Io(io_err) => humanize_io_error(io_err),
    }
}

fn humanize_io_error(err: &std::io::Error) -> HumanError {
    match err.kind() {
        ErrorKind::NotFound => HumanError {
            message: "A file or folder was not found.".into(),
            suggestion: "Check the paths on the command line.".into(),
        },
        ErrorKind::PermissionDenied => HumanError {
            message: "Permission denied.".into(),
            suggestion: "Choose an output location you are allowed to write to.".into(),
        },
        _ => HumanError {
            message: "A file could not be read or written.".into(),
            suggestion: format!("Check disk space and paths ({err})."),
        },
    }
}
