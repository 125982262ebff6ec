// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tool configuration. Values are built from command-line flags and passed
// explicitly to the components that need them.

use crate::error::{KachelwerkError, Result};
use crate::types::Layout;

/// Number of pages combined into one composite page. The quadrant layout only
/// has four positions, so this is not user-configurable.
pub const PAGE_GROUP_SIZE: usize = 4;

/// Settings for the page tiler (`pagegroup`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileConfig {
    /// Tile right to left (manga reading order).
    pub manga_mode: bool,
    /// Emit progress logging.
    pub verbose: bool,
    /// Pages per composite page.
    pub group_size: usize,
}

impl TileConfig {
    /// Quadrant ordering selected by `manga_mode`.
    pub fn layout(&self) -> Layout {
        if self.manga_mode {
            Layout::Manga
        } else {
            Layout::Standard
        }
    }

    /// Reject group sizes the quadrant layout cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.group_size == 0 || self.group_size > PAGE_GROUP_SIZE {
            return Err(KachelwerkError::InvalidConfig(format!(
                "group size must be between 1 and {}, got {}",
                PAGE_GROUP_SIZE, self.group_size
            )));
        }
        Ok(())
    }
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            manga_mode: false,
            verbose: false,
            group_size: PAGE_GROUP_SIZE,
        }
    }
}

/// Settings for rasterising a PDF into page images (`pdftool toimgs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterConfig {
    /// Target page width in pixels. `None` keeps the aspect ratio (or the
    /// native size if `height` is also `None`).
    pub width: Option<u32>,
    /// Target page height in pixels.
    pub height: Option<u32>,
    /// Render resolution in dots per inch.
    pub dpi: u32,
}

impl RasterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(KachelwerkError::InvalidConfig(
                "resolution must be at least 1 dpi".into(),
            ));
        }
        if self.width == Some(0) || self.height == Some(0) {
            return Err(KachelwerkError::InvalidConfig(
                "page width and height must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            dpi: 200,
        }
    }
}

/// Settings for assembling images into a PDF (`pdftool fromimgs`).
#[derive(Debug, Clone, PartialEq)]
pub struct PdfConfig {
    /// Resolution used to map image pixels onto page points. At 72 dpi one
    /// pixel becomes one point.
    pub dpi: f32,
    /// Title embedded in the PDF /Info dictionary.
    pub title: String,
}

impl PdfConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(KachelwerkError::InvalidConfig(format!(
                "PDF resolution must be a positive number, got {}",
                self.dpi
            )));
        }
        Ok(())
    }
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            dpi: 72.0,
            title: "Kachelwerk Document".into(),
        }
    }
}
