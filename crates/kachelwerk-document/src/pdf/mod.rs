// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — assemble images into a PDF, inspect PDFs, and rasterise PDF
// pages back into images.

pub mod raster;
pub mod reader;
pub mod writer;

pub use raster::Rasterizer;
pub use reader::PdfReader;
pub use writer::PdfWriter;
