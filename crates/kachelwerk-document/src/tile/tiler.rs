// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page tiler — load each page group, compose it onto one canvas and write the
// result as a sequentially numbered PNG.

use std::path::PathBuf;

use image::DynamicImage;
use kachelwerk_core::error::Result;
use kachelwerk_core::{Layout, TileConfig};
use tracing::{info, instrument, warn};

use super::canvas::compose;
use super::pagination::PageGroup;
use crate::image::ImageProcessor;

/// What happened to one page group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileOutcome {
    /// A composite page was written.
    Written {
        index: usize,
        path: PathBuf,
        /// Pages that made it onto the canvas.
        placed: usize,
    },
    /// Every slot was empty, nothing was written. The index is still used up
    /// so later pages keep their numbers.
    Skipped { index: usize },
}

/// Renders page groups into `p-000.png`, `p-001.png`, ... in an output
/// directory.
///
/// The output index starts at 0 and advances once per group, whether or not
/// the group produced a file.
pub struct PageTiler {
    output_dir: PathBuf,
    layout: Layout,
    next_index: usize,
}

impl PageTiler {
    pub fn new(output_dir: impl Into<PathBuf>, config: &TileConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            layout: config.layout(),
            next_index: 0,
        }
    }

    /// Index the next group will be written under.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Path of the composite page with the given index.
    pub fn output_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(output_file_name(index))
    }

    /// Decode every file of `group`. Files that fail to decode become empty
    /// slots, with a warning.
    pub fn load_group(group: PageGroup<PathBuf>) -> PageGroup<DynamicImage> {
        group.filter_map(|path| match ImageProcessor::open(&path) {
            Ok(processor) => Some(processor.into_dynamic()),
            Err(err) => {
                warn!(path = %path.display(), %err, "Failed to read page, leaving slot empty");
                None
            }
        })
    }

    /// Compose one group of decoded pages and write it.
    ///
    /// The decoded pages are owned by `group` and dropped before this returns,
    /// on success and on error alike.
    #[instrument(skip_all, fields(index = self.next_index))]
    pub fn process_group(&mut self, group: PageGroup<DynamicImage>) -> Result<TileOutcome> {
        let index = self.next_index;
        self.next_index += 1;

        let pages = group.into_present();
        let placed = pages.len().min(self.layout.positions().len());

        let Some(page) = compose(pages, self.layout) else {
            warn!(index, "No readable pages in group, skipping output");
            return Ok(TileOutcome::Skipped { index });
        };

        let path = self.output_path(index);
        ImageProcessor::from_dynamic(page).save(&path)?;
        info!(path = %path.display(), placed, "Saved");

        Ok(TileOutcome::Written {
            index,
            path,
            placed,
        })
    }

    /// Load, compose and write one group of files.
    pub fn process_files(&mut self, group: PageGroup<PathBuf>) -> Result<TileOutcome> {
        self.process_group(Self::load_group(group))
    }
}

/// `p-000.png` style name for a composite page.
pub fn output_file_name(index: usize) -> String {
    format!("p-{index:03}.png")
}
