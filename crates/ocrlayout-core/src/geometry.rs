/// Bounding rectangle with top-left origin coordinate system.
///
/// Coordinates are in page pixels at the rasterization scale:
/// - `x0`: left edge
/// - `top`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from top of page)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Build a rect from an origin and size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x0: x,
            top: y,
            x1: x + width,
            bottom: y + height,
        }
    }

    /// Width of the rectangle. May be negative for degenerate boxes;
    /// gap classification treats those as overlapping.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal midpoint.
    pub fn mid_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    /// Vertical midpoint. Row grouping clusters on this value.
    pub fn mid_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// Compute the union of two rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Bounding box in recognizer output coordinates: normalized to [0, 1]
/// with origin bottom-left, y increasing upward.
///
/// Recognition engines report boxes relative to the image they were given;
/// [`to_page_rect`](NormalizedRect::to_page_rect) converts to pixel
/// coordinates with the y-flip into top-left origin space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedRect {
    /// Left edge, fraction of image width.
    pub x0: f64,
    /// Bottom edge, fraction of image height (from the bottom).
    pub y0: f64,
    /// Right edge, fraction of image width.
    pub x1: f64,
    /// Top edge, fraction of image height (from the bottom).
    pub y1: f64,
}

impl NormalizedRect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Convert to pixel coordinates for an image of the given dimensions.
    ///
    /// `top` is measured from the top of the image, so the normalized top
    /// edge `y1` maps to `(1 - y1) * height`.
    pub fn to_page_rect(&self, image_width: f64, image_height: f64) -> Rect {
        Rect::from_origin_size(
            self.x0 * image_width,
            (1.0 - self.y1) * image_height,
            self.width() * image_width,
            self.height() * image_height,
        )
    }
}
