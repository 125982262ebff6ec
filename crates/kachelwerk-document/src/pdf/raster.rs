// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF rasteriser — render every page of a PDF to PNG by running poppler's
// `pdftocairo`.
//
// Pages are written as `<dir>/p-<n>.png`; pdftocairo zero-pads <n> to the
// width of the page count, which is the naming `tile::source` sorts on.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use kachelwerk_core::RasterConfig;
use kachelwerk_core::error::{KachelwerkError, Result};
use tracing::{debug, info, instrument};

use super::reader::PdfReader;

/// Renderer binary used when `PDFTOCAIRO_BIN` is not set.
pub const DEFAULT_PROGRAM: &str = "pdftocairo";

/// Environment variable overriding the renderer binary.
pub const PROGRAM_ENV: &str = "PDFTOCAIRO_BIN";

/// File name prefix of rendered pages.
pub const PAGE_PREFIX: &str = "p";

/// Renders PDF pages to PNG files.
pub struct Rasterizer {
    program: PathBuf,
    config: RasterConfig,
}

impl Rasterizer {
    /// Use the binary named by `PDFTOCAIRO_BIN`, falling back to `pdftocairo`
    /// on the `PATH`.
    pub fn new(config: RasterConfig) -> Self {
        let program = std::env::var_os(PROGRAM_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM));
        Self::with_program(program, config)
    }

    pub fn with_program(program: impl Into<PathBuf>, config: RasterConfig) -> Self {
        Self {
            program: program.into(),
            config,
        }
    }

    /// Arguments passed to pdftocairo for rendering `input_pdf` into files
    /// starting with `output_root`.
    ///
    /// A width or height given alone keeps the page's aspect ratio.
    pub fn command_args(&self, input_pdf: &Path, output_root: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-png".into(),
            "-r".into(),
            self.config.dpi.to_string().into(),
        ];

        if self.config.width.is_some() || self.config.height.is_some() {
            let scale = |value: Option<u32>| value.map_or_else(|| "-1".into(), |v| v.to_string());
            args.push("-scale-to-x".into());
            args.push(scale(self.config.width).into());
            args.push("-scale-to-y".into());
            args.push(scale(self.config.height).into());
        }

        args.push(input_pdf.into());
        args.push(output_root.into());
        args
    }

    /// Render every page of `input_pdf` into `output_dir` (created if
    /// missing). Returns the files written for this document in page order;
    /// a page the renderer failed to write is an error.
    #[instrument(skip_all, fields(input = %input_pdf.as_ref().display(), output = %output_dir.as_ref().display()))]
    pub fn rasterize(
        &self,
        input_pdf: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>> {
        self.config.validate()?;
        let (input_pdf, output_dir) = (input_pdf.as_ref(), output_dir.as_ref());

        let page_count = PdfReader::open(input_pdf)?.page_count();
        if page_count == 0 {
            return Err(KachelwerkError::PdfError(format!(
                "{} has no pages",
                input_pdf.display()
            )));
        }

        std::fs::create_dir_all(output_dir)?;

        let args = self.command_args(input_pdf, &output_dir.join(PAGE_PREFIX));
        debug!(program = %self.program.display(), ?args, "Running rasteriser");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    KachelwerkError::RasterizerUnavailable {
                        program: self.program.display().to_string(),
                        reason: err.to_string(),
                    }
                }
                _ => KachelwerkError::Io(err),
            })?;

        if !output.status.success() {
            return Err(KachelwerkError::PdfError(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let pages = rendered_page_paths(output_dir, page_count);
        if let Some(missing) = pages.iter().find(|path| !path.is_file()) {
            return Err(KachelwerkError::PdfError(format!(
                "{} did not produce {}",
                self.program.display(),
                missing.display()
            )));
        }

        info!(pages = page_count, "Converted PDF to images");
        Ok(pages)
    }
}

/// Files pdftocairo writes for a document of `page_count` pages: `p-1.png`
/// up to `p-<page_count>.png`, numbers zero-padded to the width of the last
/// one. Other files already in `output_dir` are not part of the result.
pub fn rendered_page_paths(output_dir: &Path, page_count: usize) -> Vec<PathBuf> {
    let width = page_count.to_string().len();
    (1..=page_count)
        .map(|page| output_dir.join(format!("{PAGE_PREFIX}-{page:0width$}.png")))
        .collect()
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(RasterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_as_strings(rasterizer: &Rasterizer) -> Vec<String> {
        rasterizer
            .command_args(Path::new("in.pdf"), Path::new("out/p"))
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn native_size_has_no_scaling_flags() {
        let rasterizer = Rasterizer::with_program("pdftocairo", RasterConfig::default());
        assert_eq!(
            args_as_strings(&rasterizer),
            ["-png", "-r", "200", "in.pdf", "out/p"]
        );
    }

    #[test]
    fn explicit_size_scales_both_axes() {
        let config = RasterConfig {
            width: Some(1200),
            height: Some(1800),
            dpi: 150,
        };
        let rasterizer = Rasterizer::with_program("pdftocairo", config);
        assert_eq!(
            args_as_strings(&rasterizer),
            [
                "-png", "-r", "150", "-scale-to-x", "1200", "-scale-to-y", "1800", "in.pdf",
                "out/p"
            ]
        );
    }

    #[test]
    fn width_alone_keeps_aspect_ratio() {
        let config = RasterConfig {
            width: Some(800),
            ..RasterConfig::default()
        };
        let args = args_as_strings(&Rasterizer::with_program("pdftocairo", config));
        assert!(args.windows(2).any(|w| w == ["-scale-to-y", "-1"]));
        assert!(args.windows(2).any(|w| w == ["-scale-to-x", "800"]));
    }

    #[test]
    fn page_paths_are_padded_to_the_last_page() {
        let dir = Path::new("out");
        assert_eq!(rendered_page_paths(dir, 1), vec![dir.join("p-1.png")]);

        let paths = rendered_page_paths(dir, 12);
        assert_eq!(paths.len(), 12);
        assert_eq!(paths[0], dir.join("p-01.png"));
        assert_eq!(paths[11], dir.join("p-12.png"));

        assert_eq!(rendered_page_paths(dir, 100)[4], dir.join("p-005.png"));
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let dir = tempfile::tempdir().unwrap();
        let config = RasterConfig {
            dpi: 0,
            ..RasterConfig::default()
        };
        let result = Rasterizer::with_program("pdftocairo", config)
            .rasterize(dir.path().join("in.pdf"), dir.path().join("out"));
        assert!(matches!(result, Err(KachelwerkError::InvalidConfig(_))));
    }
}
