//! The page assembler: orchestrates rasterize → recognize → normalize →
//! row grouping → column spacing per page, and folds page blocks into the
//! final document string.

use ocrlayout_core::{Fragment, OcrError, group_into_rows, normalize_fragment_text, render_row};

use crate::options::LayoutOptions;
use crate::recognize::{DocumentSource, PageImage, PageRasterizer, RecognizedText, TextRecognizer};

/// Turn raw recognition observations for one page into layout-ready fragments.
///
/// Converts each observation's normalized bounding box to pixel coordinates
/// against the image dimensions, drops observations below
/// `minimum_confidence`, normalizes the text, and drops fragments whose text
/// is empty (or whitespace-only) after normalization.
pub fn page_fragments(
    image: &PageImage,
    observations: Vec<RecognizedText>,
    options: &LayoutOptions,
) -> Vec<Fragment> {
    let width = f64::from(image.width);
    let height = f64::from(image.height);

    observations
        .into_iter()
        .filter(|obs| obs.confidence >= options.minimum_confidence)
        .filter_map(|obs| {
            let text = normalize_fragment_text(&obs.text);
            if text.trim().is_empty() {
                return None;
            }
            Some(Fragment::new(text, obs.bbox.to_page_rect(width, height)))
        })
        .collect()
}

/// Reconstruct one page's text block from its fragments.
///
/// Groups fragments into rows, renders each non-empty row with column
/// spacing, joins rows with a line break, and trims the block. Zero usable
/// fragments yield an empty block, not an error.
pub fn assemble_page(fragments: Vec<Fragment>, options: &LayoutOptions) -> String {
    let rows = group_into_rows(fragments, options.y_tolerance);

    let lines: Vec<String> = rows
        .iter()
        .filter(|row| !row.is_empty())
        .map(|row| render_row(row, &options.spacing))
        .collect();

    lines.join("\n").trim().to_string()
}

/// Fold per-page fragment collections into the final document text.
///
/// Pages are processed in order. A double line break separates two blocks
/// only when both the accumulated text and the incoming block are
/// non-empty, so empty pages contribute nothing — no stray separators for
/// leading, trailing, or interior blank pages. The result is trimmed.
pub fn assemble_document<I>(pages: I, options: &LayoutOptions) -> String
where
    I: IntoIterator<Item = Vec<Fragment>>,
{
    let mut document = String::new();
    for fragments in pages {
        let block = assemble_page(fragments, options);
        if block.is_empty() {
            continue;
        }
        if !document.is_empty() {
            document.push_str("\n\n");
        }
        document.push_str(&block);
    }
    document.trim().to_string()
}

/// Rasterize and recognize one page, degrading any failure to an empty
/// fragment list. Per-page errors never abort the document.
fn recognize_page<R, T>(
    rasterizer: &R,
    recognizer: &T,
    index: usize,
    options: &LayoutOptions,
) -> Vec<Fragment>
where
    R: PageRasterizer,
    T: TextRecognizer,
{
    let Ok(image) = rasterizer.rasterize(index, options.scale) else {
        return Vec::new();
    };
    let Ok(observations) = recognizer.recognize(&image, options.enable_text_correction) else {
        return Vec::new();
    };
    page_fragments(&image, observations, options)
}

/// Extract the full document text, surfacing open failures.
///
/// Opens the source (the only fatal failure), then processes pages
/// sequentially: each page is rasterized, recognized, and assembled; a
/// failing page contributes an empty block and processing continues. The
/// rasterizer is dropped on every exit path, releasing any scoped resource
/// the source acquired.
///
/// # Errors
///
/// Returns [`OcrError::DocumentOpen`] or [`OcrError::Io`] when the source
/// cannot be opened at all.
pub fn try_extract_document_text<S, T>(
    source: &S,
    recognizer: &T,
    options: &LayoutOptions,
) -> Result<String, OcrError>
where
    S: DocumentSource,
    T: TextRecognizer,
{
    let rasterizer = source.open()?;
    let count = rasterizer.page_count();
    let pages = (0..count).map(|i| recognize_page(&rasterizer, recognizer, i, options));
    Ok(assemble_document(pages, options))
}

/// Parallel variant of [`try_extract_document_text`]: pages fan out across
/// rayon workers and fan back in by page index, so the output is
/// byte-identical to the sequential path.
#[cfg(feature = "parallel")]
pub fn try_extract_document_text_parallel<S, T>(
    source: &S,
    recognizer: &T,
    options: &LayoutOptions,
) -> Result<String, OcrError>
where
    S: DocumentSource,
    S::Rasterizer: Sync,
    T: TextRecognizer + Sync,
{
    use rayon::prelude::*;

    let rasterizer = source.open()?;
    let count = rasterizer.page_count();
    let pages: Vec<Vec<Fragment>> = (0..count)
        .into_par_iter()
        .map(|i| recognize_page(&rasterizer, recognizer, i, options))
        .collect();
    Ok(assemble_document(pages, options))
}

/// Extract the full document text; never fails.
///
/// The top-level convenience contract: the caller always receives a string.
/// Any unrecoverable failure (source unreadable, not parseable as a
/// document) yields an empty string. Callers that need the failure kind use
/// [`try_extract_document_text`] instead.
pub fn extract_document_text<S, T>(source: &S, recognizer: &T, options: &LayoutOptions) -> String
where
    S: DocumentSource,
    T: TextRecognizer,
{
    try_extract_document_text(source, recognizer, options).unwrap_or_default()
}
