// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — assemble page images into one PDF using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use kachelwerk_core::error::{KachelwerkError, Result};
use kachelwerk_core::{ImageType, PdfConfig};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument, warn};

use crate::image::ImageProcessor;

const MM_PER_INCH: f32 = 25.4;

/// Builds a PDF with one page per image. Each page is exactly the size of its
/// image at the configured resolution, with no margins.
pub struct PdfWriter {
    config: PdfConfig,
}

impl PdfWriter {
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Page size in millimetres for an image of `width` x `height` pixels.
    pub fn page_size_mm(&self, width: u32, height: u32) -> (Mm, Mm) {
        let to_mm = |px: u32| Mm(px as f32 / self.config.dpi * MM_PER_INCH);
        (to_mm(width), to_mm(height))
    }

    /// Serialise `images` into PDF bytes, one page each, in order.
    pub fn render<I>(&self, images: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = DynamicImage>,
    {
        self.render_pages(images.into_iter().map(Ok))
    }

    /// Build the document from a stream of images. Each image is converted to
    /// RGB8 and embedded before the next one is pulled, so only one decoded
    /// image is alive at a time.
    #[instrument(skip_all)]
    fn render_pages<I>(&self, images: I) -> Result<Vec<u8>>
    where
        I: Iterator<Item = Result<DynamicImage>>,
    {
        self.config.validate()?;

        let mut doc = PdfDocument::new(&self.config.title);
        let mut pages: Vec<PdfPage> = Vec::new();

        for image in images {
            let image = image?;
            let (width, height) = (image.width(), image.height());
            let rgb = image.into_rgb8();
            let raw = RawImage {
                pixels: RawImageData::U8(rgb.into_raw()),
                width: width as usize,
                height: height as usize,
                data_format: RawImageFormat::RGB8,
                tag: Vec::new(),
            };
            let xobject_id = doc.add_image(&raw);

            let ops = vec![Op::UseXobject {
                id: xobject_id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(0.0)),
                    translate_y: Some(Pt(0.0)),
                    scale_x: None,
                    scale_y: None,
                    dpi: Some(self.config.dpi),
                    rotate: None,
                },
            }];

            let (page_w, page_h) = self.page_size_mm(width, height);
            pages.push(PdfPage::new(page_w, page_h, ops));
            debug!(page = pages.len(), width, height, "Image placed on page");
        }

        if pages.is_empty() {
            return Err(KachelwerkError::PdfError(
                "cannot create a PDF without pages".into(),
            ));
        }

        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!(count = warnings.len(), "printpdf reported warnings");
        }

        Ok(output)
    }

    /// Combine the images in `image_dir` into a PDF at `output_pdf`.
    ///
    /// Returns the number of pages written, or `None` when the directory holds
    /// no images (nothing is written in that case). An image that cannot be
    /// decoded aborts the conversion.
    #[instrument(skip_all, fields(dir = %image_dir.as_ref().display(), output = %output_pdf.as_ref().display()))]
    pub fn images_to_pdf(
        &self,
        image_dir: impl AsRef<Path>,
        output_pdf: impl AsRef<Path>,
    ) -> Result<Option<usize>> {
        let files = list_pdf_sources(image_dir.as_ref())?;
        if files.is_empty() {
            warn!("No images found in the directory");
            return Ok(None);
        }

        let page_count = files.len();
        let bytes = self.render_pages(
            files
                .iter()
                .map(|path| ImageProcessor::open(path).map(ImageProcessor::into_dynamic)),
        )?;

        let output_pdf = output_pdf.as_ref();
        if let Some(parent) = output_pdf.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_pdf, &bytes)?;

        info!(pages = page_count, bytes = bytes.len(), "Converted images to PDF");
        Ok(Some(page_count))
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new(PdfConfig::default())
    }
}

/// Image files in `dir` that can become PDF pages, sorted by file name. A
/// directory that does not exist yields an empty list.
pub fn list_pdf_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        match name.to_str().and_then(ImageType::from_file_name) {
            Some(kind) => {
                debug!(file = ?name, mime = kind.mime_type(), "Found image");
                files.push(entry.path());
            }
            None => debug!(file = ?name, "Ignoring non-image file"),
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn page_size_matches_pixels_at_72_dpi() {
        let writer = PdfWriter::default();
        let (w, h) = writer.page_size_mm(720, 144);
        assert!((w.0 - 254.0).abs() < 0.01);
        assert!((h.0 - 50.8).abs() < 0.01);
    }

    #[test]
    fn no_images_is_an_error_for_render() {
        let writer = PdfWriter::default();
        assert!(writer.render(Vec::<DynamicImage>::new()).is_err());
    }

    #[test]
    fn sources_are_filtered_and_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.PNG", "c.gif", "notes.txt", "p-10.png", "p-9.png"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let names: Vec<String> = list_pdf_sources(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.PNG", "b.jpg", "c.gif", "p-10.png", "p-9.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_images_are_sources() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("scan.jpg");
        std::fs::write(&target, b"").unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir(&images).unwrap();
        std::os::unix::fs::symlink(&target, images.join("a.jpg")).unwrap();

        assert_eq!(list_pdf_sources(&images).unwrap(), vec![images.join("a.jpg")]);
    }

    #[test]
    fn rendered_bytes_start_with_pdf_header() {
        let writer = PdfWriter::default();
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([1, 2, 3])));
        let bytes = writer.render(vec![img]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
