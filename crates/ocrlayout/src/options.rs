use ocrlayout_core::SpacingOptions;

/// Options for document text extraction.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Rasterization scale factor passed to the page rasterizer. Higher
    /// improves recognition fidelity at the cost of processing time.
    /// Spacing thresholds are calibrated against this default; see
    /// [`SpacingOptions`].
    pub scale: f64,
    /// Vertical pixel tolerance for clustering fragments into rows.
    pub y_tolerance: f64,
    /// Whether the recognition engine applies its own language-level
    /// correction. The fixed-rule normalization pass always runs,
    /// independently of this flag.
    pub enable_text_correction: bool,
    /// Fragments with recognition confidence below this are discarded
    /// before layout.
    pub minimum_confidence: f64,
    /// Gap thresholds for column spacing classification.
    pub spacing: SpacingOptions,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            y_tolerance: 10.0,
            enable_text_correction: true,
            minimum_confidence: 0.5,
            spacing: SpacingOptions::default(),
        }
    }
}
