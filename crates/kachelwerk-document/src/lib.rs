// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// kachelwerk-document — Page and document processing for Kachelwerk.
//
// Provides page tiling (group four sequential pages into one 2x2 composite
// page), image decoding and resizing, PDF assembly from images, and PDF
// rasterisation into page images.

pub mod image;
pub mod pdf;
pub mod tile;

// Re-export the primary structs so callers can use `kachelwerk_document::PdfWriter` etc.
pub use image::processor::ImageProcessor;
pub use pdf::raster::Rasterizer;
pub use pdf::reader::PdfReader;
pub use pdf::writer::PdfWriter;
pub use tile::{PageTiler, TileSummary, group_pages};
