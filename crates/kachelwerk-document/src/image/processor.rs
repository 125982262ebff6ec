// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode, resize and save single page images using the
// `image` crate.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use kachelwerk_core::error::KachelwerkError;
use tracing::{debug, instrument};

/// A single decoded page image.
///
/// Transformations consume `self` and return a new `ImageProcessor`, so calls
/// chain:
///
/// ```ignore
/// let thumb = ImageProcessor::open("p-001.png")?.resize_exact(400, 600);
/// thumb.save("thumb.png")?;
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path. The format is detected from the file
    /// contents, not the extension.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, KachelwerkError> {
        let path = path.as_ref();
        let img = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|err| {
                KachelwerkError::ImageError(format!("failed to open {}: {}", path.display(), err))
            })?;
        debug!(width = img.width(), height = img.height(), "Image loaded");
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// Consume the processor and return 8-bit RGB pixels, dropping any alpha
    /// channel.
    pub fn into_rgb8(self) -> RgbImage {
        self.image.into_rgb8()
    }

    // -- Transformations ------------------------------------------------------

    /// Resize the image to exactly `width` x `height`, ignoring aspect ratio.
    /// Uses bicubic (Catmull-Rom) filtering.
    pub fn resize_exact(self, width: u32, height: u32) -> Self {
        let resized = self
            .image
            .resize_exact(width, height, FilterType::CatmullRom);
        Self { image: resized }
    }

    // -- Output ---------------------------------------------------------------

    /// Write the image to a file. The format is inferred from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), KachelwerkError> {
        self.image.save(path.as_ref()).map_err(|err| {
            KachelwerkError::ImageError(format!(
                "failed to save image to {}: {}",
                path.as_ref().display(),
                err
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn saved_png_opens_with_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p-001.png");
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(12, 7, Rgb([10, 20, 30])));
        ImageProcessor::from_dynamic(img).save(&path).unwrap();

        let reopened = ImageProcessor::open(&path).unwrap().into_rgb8();
        assert_eq!(reopened.dimensions(), (12, 7));
        assert_eq!(reopened.get_pixel(3, 3), &Rgb([10, 20, 30]));
    }

    #[test]
    fn format_comes_from_contents_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("scan.png");
        DynamicImage::ImageRgb8(RgbImage::new(5, 4)).save(&png).unwrap();
        let renamed = dir.path().join("scan.jpg");
        std::fs::rename(&png, &renamed).unwrap();

        let opened = ImageProcessor::open(&renamed).unwrap().into_dynamic();
        assert_eq!((opened.width(), opened.height()), (5, 4));
    }

    #[test]
    fn resize_exact_ignores_aspect_ratio() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(100, 40));
        let resized = ImageProcessor::from_dynamic(img).resize_exact(10, 30).into_dynamic();
        assert_eq!((resized.width(), resized.height()), (10, 30));
    }

    #[test]
    fn open_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\ntruncated").unwrap();

        let result = ImageProcessor::open(&path);
        assert!(matches!(result, Err(KachelwerkError::ImageError(_))));
    }
}
