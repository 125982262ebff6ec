// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Composite canvas — lay up to four page images out on a 2x2 grid using the
// `image` and `imageproc` crates.

use image::{DynamicImage, Rgb, RgbImage, imageops};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use kachelwerk_core::Layout;
use tracing::{debug, instrument};

use crate::image::ImageProcessor;

/// Canvas background.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Divider line colour.
pub const DIVIDER: Rgb<u8> = Rgb([0, 0, 0]);

/// Divider line thickness in pixels.
pub const DIVIDER_WIDTH: u32 = 2;

/// Compose the present pages of one group into a single output page.
///
/// * no pages: `None`
/// * one page: that page, untouched
/// * two or more: a white canvas the size of the first page, each page scaled
///   to a quarter and placed at the next position of `layout`, with a
///   vertical divider (2+ pages) and a horizontal divider (3+ pages)
///
/// Placement is positional: the k-th page goes to the k-th quadrant no matter
/// which slot of the group it came from. Pages beyond the fourth are ignored.
#[instrument(skip(pages), fields(page_count = pages.len()))]
pub fn compose(pages: Vec<DynamicImage>, layout: Layout) -> Option<DynamicImage> {
    let mut pages = pages.into_iter();
    let first = pages.next()?;

    let Some(second) = pages.next() else {
        debug!("Single page, passing through");
        return Some(first);
    };

    let (width, height) = (first.width(), first.height());
    let (half_w, half_h) = ((width / 2).max(1), (height / 2).max(1));
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    let mut placed = 0usize;
    for (page, quadrant) in [first, second]
        .into_iter()
        .chain(pages)
        .zip(layout.positions())
    {
        let (x, y) = quadrant.origin(half_w, half_h);
        let tile = ImageProcessor::from_dynamic(page)
            .resize_exact(half_w, half_h)
            .into_rgb8();
        imageops::replace(&mut canvas, &tile, i64::from(x), i64::from(y));
        placed += 1;
    }

    draw_dividers(&mut canvas, placed);
    debug!(placed, width, height, "Canvas composed");

    Some(DynamicImage::ImageRgb8(canvas))
}

/// Draw the vertical divider for 2+ pages and the horizontal one for 3+.
fn draw_dividers(canvas: &mut RgbImage, placed: usize) {
    let (width, height) = canvas.dimensions();
    let offset = (DIVIDER_WIDTH / 2) as i32;

    if placed > 1 {
        let x = (width / 2) as i32 - offset;
        draw_filled_rect_mut(canvas, Rect::at(x, 0).of_size(DIVIDER_WIDTH, height), DIVIDER);
    }
    if placed > 2 {
        let y = (height / 2) as i32 - offset;
        draw_filled_rect_mut(canvas, Rect::at(0, y).of_size(width, DIVIDER_WIDTH), DIVIDER);
    }
}
