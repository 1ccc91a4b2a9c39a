use std::fs;
use std::path::Path;

use ocrlayout::ocrlayout_core::normalize_fragment_text;
use ocrlayout::{Fragment, LayoutOptions, Rect, assemble_document};
use serde::Deserialize;

use crate::cli::OutputFormat;

/// One recognized fragment as it appears in the input file: page-pixel
/// coordinates, top-left origin.
#[derive(Debug, Deserialize)]
struct InputFragment {
    text: String,
    #[serde(default = "full_confidence")]
    confidence: f64,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

fn full_confidence() -> f64 {
    1.0
}

pub fn run(
    file: &Path,
    format: &OutputFormat,
    y_tolerance: f64,
    min_confidence: f64,
) -> Result<(), i32> {
    let data = fs::read_to_string(file).map_err(|e| {
        eprintln!("Error reading {}: {e}", file.display());
        1
    })?;

    let pages: Vec<Vec<InputFragment>> = serde_json::from_str(&data).map_err(|e| {
        eprintln!("Error parsing {}: {e}", file.display());
        1
    })?;

    let options = LayoutOptions {
        y_tolerance,
        minimum_confidence: min_confidence,
        ..LayoutOptions::default()
    };

    let fragment_pages = pages.into_iter().map(|page| {
        page.into_iter()
            .filter(|f| f.confidence >= min_confidence)
            .filter_map(|f| {
                let text = normalize_fragment_text(&f.text);
                if text.trim().is_empty() {
                    return None;
                }
                Some(Fragment::new(
                    text,
                    Rect::from_origin_size(f.x, f.y, f.width, f.height),
                ))
            })
            .collect::<Vec<_>>()
    });

    let text = assemble_document(fragment_pages, &options);

    match format {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json => {
            let obj = serde_json::json!({ "text": text });
            println!("{}", serde_json::to_string(&obj).map_err(|_| 1)?);
        }
    }

    Ok(())
}
