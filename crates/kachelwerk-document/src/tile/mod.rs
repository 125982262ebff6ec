// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tile module — group sequential page images into 2x2 composite pages.
//
// Pipeline: list and sort the page images of a directory, paginate them into
// groups of four, then load, compose and write one group at a time.

pub mod canvas;
pub mod pagination;
pub mod source;
pub mod tiler;

use std::num::NonZeroUsize;
use std::path::Path;

use kachelwerk_core::TileConfig;
use kachelwerk_core::error::{KachelwerkError, Result};
use tracing::{debug, info, instrument};

pub use canvas::compose;
pub use pagination::{PageGroup, paginate};
pub use source::{list_page_images, page_sort_key};
pub use tiler::{PageTiler, TileOutcome, output_file_name};

/// Totals for one `group_pages` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSummary {
    /// Input page images found.
    pub pages: usize,
    /// Groups processed (one output index each).
    pub groups: usize,
    /// Composite pages written.
    pub written: usize,
    /// Groups with no readable page.
    pub skipped: usize,
}

/// Group the page images in `input_dir` into 2x2 composite pages written to
/// `output_dir` (created if missing).
///
/// Groups are processed strictly one after another; only one group's decoded
/// pages are held in memory at a time.
#[instrument(skip_all, fields(input = %input_dir.as_ref().display(), output = %output_dir.as_ref().display()))]
pub fn group_pages(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &TileConfig,
) -> Result<TileSummary> {
    config.validate()?;
    let group_size = NonZeroUsize::new(config.group_size)
        .ok_or_else(|| KachelwerkError::InvalidConfig("group size must be positive".into()))?;

    std::fs::create_dir_all(output_dir.as_ref())?;

    let files = list_page_images(input_dir)?;
    let pages = files.len();
    let groups = paginate(files, group_size);
    info!(pages, groups = groups.len(), manga = config.manga_mode, "Processing page groups");

    let mut tiler = PageTiler::new(output_dir.as_ref(), config);
    let mut summary = TileSummary {
        pages,
        ..TileSummary::default()
    };

    for group in groups {
        debug!(index = tiler.next_index(), files = ?group.slots(), "Processing group");
        match tiler.process_files(group)? {
            TileOutcome::Written { .. } => summary.written += 1,
            TileOutcome::Skipped { .. } => summary.skipped += 1,
        }
        summary.groups += 1;
    }

    info!(
        written = summary.written,
        skipped = summary.skipped,
        "Page grouping complete"
    );
    Ok(summary)
}
