//! ocrlayout: Reconstruct layout-preserving plain text from OCR output.
//!
//! Recognition engines return scattered, unordered text fragments with
//! bounding boxes. This crate groups them into top-to-bottom rows, infers
//! column boundaries from horizontal gaps, and renders a plain-text document
//! that visually approximates the source page's rows and columns.
//!
//! # Architecture
//!
//! - **ocrlayout-core**: Engine-independent data types and layout algorithms
//! - **ocrlayout** (this crate): Capability traits for the external
//!   rasterizer/recognizer, the page assembler, and the document pipeline
//!
//! Rasterization and recognition are pluggable [`PageRasterizer`] /
//! [`TextRecognizer`] implementations, so the layout core can be exercised
//! with synthetic fragment data and no real image pipeline.
//!
//! # Example
//!
//! ```ignore
//! let source = MyPdfSource::new(path);
//! let recognizer = MyVisionRecognizer::new();
//! let text = ocrlayout::extract_document_text(&source, &recognizer, &LayoutOptions::default());
//! ```

pub use ocrlayout_core;

pub mod options;
pub mod pipeline;
pub mod recognize;

pub use ocrlayout_core::{
    Fragment, NormalizedRect, OcrError, Rect, Row, SpacingClass, SpacingOptions,
};

pub use options::LayoutOptions;
pub use pipeline::{
    assemble_document, assemble_page, extract_document_text, page_fragments,
    try_extract_document_text,
};
#[cfg(feature = "parallel")]
pub use pipeline::try_extract_document_text_parallel;
pub use recognize::{DocumentSource, PageImage, PageRasterizer, RecognizedText, TextRecognizer};
