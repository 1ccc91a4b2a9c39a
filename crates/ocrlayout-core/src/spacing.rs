use crate::rows::Row;

/// Discrete spacing class for the horizontal gap between two row neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingClass {
    /// Intra-word / normal spacing: one space.
    Word,
    /// Column boundary: three spaces.
    Column,
    /// Wide column boundary: five spaces.
    WideColumn,
}

impl SpacingClass {
    /// Number of literal space characters this class renders as.
    pub fn space_count(&self) -> usize {
        match self {
            SpacingClass::Word => 1,
            SpacingClass::Column => 3,
            SpacingClass::WideColumn => 5,
        }
    }
}

/// Gap thresholds for spacing classification, in page pixels.
///
/// The defaults are calibrated against the default rasterization scale.
/// Callers rendering at a different scale must rescale gaps (or these
/// thresholds) themselves — classification is deliberately not
/// scale-adaptive, since that would change observable output.
#[derive(Debug, Clone)]
pub struct SpacingOptions {
    /// Gaps at or above this width are column boundaries (default: 15.0).
    pub column_gap: f64,
    /// Gaps at or above this width are wide column boundaries (default: 40.0).
    pub wide_column_gap: f64,
}

impl Default for SpacingOptions {
    fn default() -> Self {
        Self {
            column_gap: 15.0,
            wide_column_gap: 40.0,
        }
    }
}

/// Classify a horizontal gap into a spacing class.
///
/// Negative gaps (horizontally overlapping boxes) and degenerate geometry
/// fall through to [`SpacingClass::Word`], the minimum spacing.
pub fn classify_gap(gap: f64, options: &SpacingOptions) -> SpacingClass {
    if gap >= options.wide_column_gap {
        SpacingClass::WideColumn
    } else if gap >= options.column_gap {
        SpacingClass::Column
    } else {
        SpacingClass::Word
    }
}

/// Render one row as a single line of text.
///
/// The first fragment's text starts the line; each following fragment is
/// preceded by the number of spaces its gap to the previous fragment
/// classifies to (`gap = next.x0 - current.x1`). An empty row renders as an
/// empty string, which callers skip. Never fails.
pub fn render_row(row: &Row, options: &SpacingOptions) -> String {
    let mut fragments = row.fragments.iter();
    let Some(first) = fragments.next() else {
        return String::new();
    };

    let mut line = first.text.clone();
    let mut previous = first;
    for next in fragments {
        let gap = next.bbox.x0 - previous.bbox.x1;
        let class = classify_gap(gap, options);
        for _ in 0..class.space_count() {
            line.push(' ');
        }
        line.push_str(&next.text);
        previous = next;
    }
    line
}
