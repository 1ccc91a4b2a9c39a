use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Reconstruct layout-preserving plain text from recognized OCR fragments.
#[derive(Debug, Parser)]
#[command(name = "ocrlayout", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconstruct document text from a JSON file of recognized fragments
    Layout {
        /// Path to the fragments file: a JSON array of pages, each an array
        /// of {text, confidence, x, y, width, height} objects in page-pixel
        /// coordinates
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Vertical tolerance for row grouping, in pixels (default: 10.0)
        #[arg(long, default_value_t = 10.0)]
        y_tolerance: f64,

        /// Discard fragments below this recognition confidence (default: 0.5)
        #[arg(long, default_value_t = 0.5)]
        min_confidence: f64,
    },
}

/// Output format for reconstructed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON object with a "text" field
    Json,
}
