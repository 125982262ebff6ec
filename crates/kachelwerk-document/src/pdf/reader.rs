// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — open and inspect existing PDF documents using the `lopdf`
// crate.

use std::path::Path;

use lopdf::Document;
use kachelwerk_core::error::KachelwerkError;
use tracing::{debug, instrument};

/// Read-only view of an existing PDF.
pub struct PdfReader {
    document: Document,
}

impl PdfReader {
    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, KachelwerkError> {
        let path_ref = path.as_ref();
        let document = Document::load(path_ref).map_err(|err| {
            KachelwerkError::PdfError(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self { document })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }
}
