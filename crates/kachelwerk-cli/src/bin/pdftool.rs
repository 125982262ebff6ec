// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdftool — convert a directory of images into a PDF and back.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kachelwerk_cli::args::{FromImages, PdftoolCli, PdftoolCommand, ToImages};
use kachelwerk_document::{PdfWriter, Rasterizer};
use tracing::info;

fn main() -> ExitCode {
    let cli = PdftoolCli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => kachelwerk_cli::report(&err),
    }
}

fn run(cli: PdftoolCli) -> anyhow::Result<()> {
    kachelwerk_cli::init_tracing(cli.verbose)?;

    match cli.command {
        PdftoolCommand::Fromimgs(cmd) => from_images(&cmd),
        PdftoolCommand::Toimgs(cmd) => to_images(&cmd),
    }
}

fn from_images(cmd: &FromImages) -> anyhow::Result<()> {
    let writer = PdfWriter::new(cmd.pdf_config());
    let pages = writer
        .images_to_pdf(&cmd.image_dir, &cmd.output_pdf)
        .with_context(|| format!("converting images in {} to PDF", cmd.image_dir.display()))?;

    match pages {
        Some(pages) => info!(
            pages,
            "Converted images in {} to PDF at {}",
            cmd.image_dir.display(),
            cmd.output_pdf.display()
        ),
        None => info!("No images found in {}", cmd.image_dir.display()),
    }
    Ok(())
}

fn to_images(cmd: &ToImages) -> anyhow::Result<()> {
    let rasterizer = Rasterizer::new(cmd.raster_config());
    let pages = rasterizer
        .rasterize(&cmd.input_pdf, &cmd.output_dir)
        .with_context(|| format!("converting {} to images", cmd.input_pdf.display()))?;

    info!(
        pages = pages.len(),
        "Converted {} to images in {}",
        cmd.input_pdf.display(),
        cmd.output_dir.display()
    );
    Ok(())
}
