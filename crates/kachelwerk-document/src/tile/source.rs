// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Source listing — find page images in a directory and order them by the page
// number embedded in their file names.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use kachelwerk_core::error::Result;
use regex::Regex;
use tracing::{debug, instrument, warn};

/// Page images are named `<anything>-<page number>.png`, e.g. `p-007.png`.
static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d+)\.png$").expect("page number pattern is valid"));

/// Extract the page number from a page image file name.
///
/// Returns `None` when the name does not end in `-<digits>.png` or the number
/// does not fit in a `u64`. Leading zeros are insignificant, so `p-010.png`
/// and `p-10.png` share the key 10.
pub fn page_sort_key(file_name: &str) -> Option<u64> {
    PAGE_NUMBER
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// List the `.png` page images in `dir`, ordered by [`page_sort_key`].
///
/// Files with equal keys are ordered by name. `.png` files without a page
/// number are skipped with a warning. A directory that does not exist yields
/// an empty list.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn list_page_images(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("Input directory does not exist");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut keyed: Vec<(u64, String)> = Vec::new();
    for entry in entries {
        let entry = entry?;
        // Follows symlinks, so linked page images are listed too.
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !name.ends_with(".png") {
            continue;
        }
        match page_sort_key(&name) {
            Some(key) => keyed.push((key, name)),
            None => warn!(file = %name, "Skipping image without a page number"),
        }
    }

    keyed.sort();
    debug!(count = keyed.len(), "Sorted page images");

    Ok(keyed.into_iter().map(|(_, name)| dir.join(name)).collect())
}
