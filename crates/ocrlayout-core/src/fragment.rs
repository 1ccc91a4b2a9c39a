use crate::geometry::Rect;

/// A recognized text unit: content plus its pixel-space bounding rectangle.
///
/// Fragments are produced fresh per page by the recognition pass, consumed
/// by row grouping, and discarded once the page text block is rendered.
/// They carry no identity beyond structural equality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    /// The recognized (and normalized) text content.
    pub text: String,
    /// Bounding box in top-left origin pixel coordinates.
    pub bbox: Rect,
}

impl Fragment {
    pub fn new(text: impl Into<String>, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}
