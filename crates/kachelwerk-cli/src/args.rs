// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line definitions for `pagegroup` and `pdftool`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kachelwerk_core::{PdfConfig, RasterConfig, TileConfig};

/// Convert sets of 4 pages into 1 page.
#[derive(Parser, Debug)]
#[command(name = "pagegroup", version)]
pub struct PagegroupCli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable manga mode (pages are tiled right to left)
    #[arg(short, long)]
    pub manga: bool,

    /// Input directory of page images named like `p-001.png`
    pub input: PathBuf,

    /// Output directory for grouped pages
    pub output: PathBuf,
}

impl PagegroupCli {
    pub fn tile_config(&self) -> TileConfig {
        TileConfig {
            manga_mode: self.manga,
            verbose: self.verbose,
            ..TileConfig::default()
        }
    }
}

/// Convert between images and PDF.
#[derive(Parser, Debug)]
#[command(name = "pdftool", version)]
pub struct PdftoolCli {
    #[command(subcommand)]
    pub command: PdftoolCommand,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum PdftoolCommand {
    /// Convert images to PDF
    Fromimgs(FromImages),

    /// Convert PDF to images
    Toimgs(ToImages),
}

#[derive(Args, Debug)]
pub struct FromImages {
    /// Directory containing images to convert
    pub image_dir: PathBuf,

    /// Path to save the output PDF
    pub output_pdf: PathBuf,

    /// Pixels per inch when sizing pages (72 maps one pixel to one point)
    #[arg(long, default_value_t = 72.0)]
    pub dpi: f32,

    /// Title stored in the PDF metadata
    #[arg(long)]
    pub title: Option<String>,
}

impl FromImages {
    pub fn pdf_config(&self) -> PdfConfig {
        let defaults = PdfConfig::default();
        PdfConfig {
            dpi: self.dpi,
            title: self.title.clone().unwrap_or(defaults.title),
        }
    }
}

#[derive(Args, Debug)]
pub struct ToImages {
    /// Page width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Page height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Render resolution in dots per inch
    #[arg(long, default_value_t = 200)]
    pub dpi: u32,

    /// Path to the PDF file to convert
    pub input_pdf: PathBuf,

    /// Directory to save the output images
    pub output_dir: PathBuf,
}

impl ToImages {
    pub fn raster_config(&self) -> RasterConfig {
        RasterConfig {
            width: self.width,
            height: self.height,
            dpi: self.dpi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definitions_are_consistent() {
        PagegroupCli::command().debug_assert();
        PdftoolCli::command().debug_assert();
    }

    #[test]
    fn pagegroup_flags() {
        let cli = PagegroupCli::try_parse_from(["pagegroup", "-v", "--manga", "in", "out"]).unwrap();
        let config = cli.tile_config();
        assert!(config.manga_mode);
        assert!(config.verbose);
        assert_eq!(config.group_size, 4);
        assert_eq!(cli.input, PathBuf::from("in"));
        assert_eq!(cli.output, PathBuf::from("out"));
    }

    #[test]
    fn pagegroup_requires_both_directories() {
        assert!(PagegroupCli::try_parse_from(["pagegroup", "in"]).is_err());
    }

    #[test]
    fn toimgs_defaults_to_native_size() {
        let cli = PdftoolCli::try_parse_from(["pdftool", "toimgs", "book.pdf", "pages"]).unwrap();
        let PdftoolCommand::Toimgs(cmd) = cli.command else {
            panic!("expected toimgs");
        };
        assert_eq!(cmd.raster_config(), RasterConfig::default());
        assert_eq!(cmd.input_pdf, PathBuf::from("book.pdf"));
    }

    #[test]
    fn toimgs_accepts_size_and_global_verbose() {
        let cli = PdftoolCli::try_parse_from([
            "pdftool", "toimgs", "--width", "1000", "--height", "1500", "book.pdf", "pages", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let PdftoolCommand::Toimgs(cmd) = cli.command else {
            panic!("expected toimgs");
        };
        let config = cmd.raster_config();
        assert_eq!((config.width, config.height), (Some(1000), Some(1500)));
    }

    #[test]
    fn fromimgs_uses_default_title() {
        let cli = PdftoolCli::try_parse_from(["pdftool", "fromimgs", "pages", "book.pdf"]).unwrap();
        let PdftoolCommand::Fromimgs(cmd) = cli.command else {
            panic!("expected fromimgs");
        };
        assert_eq!(cmd.pdf_config(), PdfConfig::default());
    }
}
