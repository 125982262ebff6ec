// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Kachelwerk.

/// One quarter of a composite page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Pixel offset of the quadrant's top-left corner on a canvas whose
    /// quadrants are `half_w` x `half_h`.
    pub fn origin(&self, half_w: u32, half_h: u32) -> (u32, u32) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (half_w, 0),
            Self::BottomLeft => (0, half_h),
            Self::BottomRight => (half_w, half_h),
        }
    }
}

/// Order in which the pages of a group fill the quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Left to right: top-left, top-right, bottom-left, bottom-right.
    #[default]
    Standard,
    /// Right to left on the top row: top-right, top-left, bottom-left,
    /// bottom-right.
    Manga,
}

impl Layout {
    /// Quadrants in fill order.
    pub fn positions(&self) -> [Quadrant; 4] {
        match self {
            Self::Standard => [
                Quadrant::TopLeft,
                Quadrant::TopRight,
                Quadrant::BottomLeft,
                Quadrant::BottomRight,
            ],
            Self::Manga => [
                Quadrant::TopRight,
                Quadrant::TopLeft,
                Quadrant::BottomLeft,
                Quadrant::BottomRight,
            ],
        }
    }
}

/// Raster formats accepted when assembling a PDF from a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Png,
    Jpeg,
    Bmp,
    Gif,
}

impl ImageType {
    /// MIME type string.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Bmp => "image/bmp",
            Self::Gif => "image/gif",
        }
    }

    /// Infer the image type from a file name. Matches on the name's ending
    /// (case-insensitive), so `scan.PNG` and `cover.jpeg` are both accepted.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with("png") {
            Some(Self::Png)
        } else if lower.ends_with("jpg") || lower.ends_with("jpeg") {
            Some(Self::Jpeg)
        } else if lower.ends_with("bmp") {
            Some(Self::Bmp)
        } else if lower.ends_with("gif") {
            Some(Self::Gif)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manga_mirrors_top_row_only() {
        let standard = Layout::Standard.positions();
        let manga = Layout::Manga.positions();
        assert_eq!(manga[0], standard[1]);
        assert_eq!(manga[1], standard[0]);
        assert_eq!(manga[2..], standard[2..]);
    }

    #[test]
    fn quadrant_origins() {
        assert_eq!(Quadrant::TopLeft.origin(50, 40), (0, 0));
        assert_eq!(Quadrant::TopRight.origin(50, 40), (50, 0));
        assert_eq!(Quadrant::BottomLeft.origin(50, 40), (0, 40));
        assert_eq!(Quadrant::BottomRight.origin(50, 40), (50, 40));
    }

    #[test]
    fn image_type_from_file_name() {
        assert_eq!(ImageType::from_file_name("p-001.PNG"), Some(ImageType::Png));
        assert_eq!(ImageType::from_file_name("cover.jpeg"), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_file_name("cover.jpg"), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_file_name("anim.gif"), Some(ImageType::Gif));
        assert_eq!(ImageType::from_file_name("notes.txt"), None);
        assert_eq!(ImageType::Bmp.mime_type(), "image/bmp");
    }
}
