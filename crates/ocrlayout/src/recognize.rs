//! Capability traits for the external rasterization and recognition engines.
//!
//! The layout pipeline never touches files or images directly: a
//! [`DocumentSource`] yields a [`PageRasterizer`], the rasterizer yields
//! [`PageImage`]s, and a [`TextRecognizer`] turns each image into
//! [`RecognizedText`] observations. Implementations wrap whatever engine is
//! available (a PDF renderer plus a vision framework, a Tesseract binding,
//! a fixture that replays canned results in tests).

use ocrlayout_core::{NormalizedRect, OcrError};

/// A rasterized page: a pixel buffer with known dimensions.
///
/// The pixel format is producer-defined (the recognizer that consumes the
/// buffer must agree with the rasterizer that filled it); the layout
/// pipeline itself only reads the dimensions, which anchor the conversion
/// from normalized recognition coordinates to page pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PageImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Raw pixel data.
    pub pixels: Vec<u8>,
}

impl PageImage {
    /// An image with dimensions only, for recognizers that do not read
    /// pixel data (fixtures, remote engines keyed by page).
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: Vec::new(),
        }
    }
}

/// One text observation from the recognition engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedText {
    /// The recognized string, before normalization.
    pub text: String,
    /// Recognition confidence in [0, 1].
    pub confidence: f64,
    /// Bounding box in normalized bottom-left-origin coordinates,
    /// relative to the image that was recognized.
    pub bbox: NormalizedRect,
}

/// Renders document pages to pixel images.
pub trait PageRasterizer {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Render the page at `index` (0-based) at the given scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::Render`] if the page is missing, corrupt, or
    /// unsupported. The pipeline recovers by treating the page as empty.
    fn rasterize(&self, index: usize, scale: f64) -> Result<PageImage, OcrError>;
}

/// Recognizes text in a page image.
pub trait TextRecognizer {
    /// Run recognition over `image`, yielding zero or more observations.
    ///
    /// `enable_correction` asks the engine to apply its own language-level
    /// correction; the pipeline's fixed-rule normalization runs regardless.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::Recognition`] on engine failure. The pipeline
    /// recovers by treating the page as empty.
    fn recognize(
        &self,
        image: &PageImage,
        enable_correction: bool,
    ) -> Result<Vec<RecognizedText>, OcrError>;
}

/// Opens a document and hands out a rasterizer for its pages.
///
/// Acquisition is scoped: the rasterizer is obtained before processing
/// starts and released (dropped) on every exit path, including early
/// failures. Implementations holding scoped resources — file handles,
/// security-scoped URLs — release them in `Drop`.
pub trait DocumentSource {
    /// The rasterizer produced by a successful open.
    type Rasterizer: PageRasterizer;

    /// Open the document.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::DocumentOpen`] (or [`OcrError::Io`]) if the
    /// source cannot be read or parsed as a document. This is the only
    /// failure that is fatal for the whole document.
    fn open(&self) -> Result<Self::Rasterizer, OcrError>;
}
