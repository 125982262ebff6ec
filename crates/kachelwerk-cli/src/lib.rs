// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared plumbing for the Kachelwerk binaries: argument definitions, logging
// setup and error reporting.

pub mod args;

use std::process::ExitCode;

use kachelwerk_core::KachelwerkError;
use kachelwerk_core::human_errors::humanize_error;
use tracing_subscriber::EnvFilter;

/// Crates whose progress messages `--verbose` turns on.
const OWN_CRATES: [&str; 3] = ["kachelwerk_core", "kachelwerk_document", "kachelwerk_cli"];

/// Filter directives for the given verbosity. Quiet runs only let errors
/// through; verbose runs show debug output from Kachelwerk and warnings from
/// everything else.
pub fn default_directives(verbose: bool) -> String {
    if verbose {
        std::iter::once("warn".to_string())
            .chain(OWN_CRATES.iter().map(|krate| format!("{krate}=debug")))
            .collect::<Vec<_>>()
            .join(",")
    } else {
        "error".to_string()
    }
}

/// Install the global `tracing` subscriber, writing to stderr. `RUST_LOG`
/// overrides the verbosity flag when set.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to set tracing subscriber: {err}"))
}

/// Print `err` with its cause chain (and a suggestion when the root cause is
/// a `KachelwerkError`) to stderr, returning a failing exit code.
pub fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("error: {err:#}");
    if let Some(cause) = err.downcast_ref::<KachelwerkError>() {
        let human = humanize_error(cause);
        eprintln!("  {}", human.message);
        eprintln!("  hint: {}", human.suggestion);
    }
    ExitCode::FAILURE
}
