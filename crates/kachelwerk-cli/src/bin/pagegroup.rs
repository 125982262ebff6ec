// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagegroup — combine every four sequential page images into one 2x2 page.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kachelwerk_cli::args::PagegroupCli;
use kachelwerk_document::group_pages;

fn main() -> ExitCode {
    let cli = PagegroupCli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => kachelwerk_cli::report(&err),
    }
}

fn run(cli: &PagegroupCli) -> anyhow::Result<()> {
    let config = cli.tile_config();
    kachelwerk_cli::init_tracing(config.verbose)?;

    let summary = group_pages(&cli.input, &cli.output, &config).with_context(|| {
        format!(
            "grouping pages from {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    tracing::info!(
        pages = summary.pages,
        written = summary.written,
        skipped = summary.skipped,
        "Done"
    );
    Ok(())
}
