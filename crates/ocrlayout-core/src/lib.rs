//! ocrlayout-core: Engine-independent data types and layout algorithms.
//!
//! This crate provides the foundational types (Rect, NormalizedRect, Fragment,
//! Row) and algorithms (text normalization, row grouping, column spacing) used
//! by ocrlayout-rs. It knows nothing about rasterization or text recognition —
//! those live behind capability traits in the `ocrlayout` facade crate.

pub mod error;
pub mod fragment;
pub mod geometry;
pub mod normalize;
pub mod rows;
pub mod spacing;

pub use error::OcrError;
pub use fragment::Fragment;
pub use geometry::{NormalizedRect, Rect};
pub use normalize::normalize_fragment_text;
pub use rows::{Row, group_into_rows};
pub use spacing::{SpacingClass, SpacingOptions, classify_gap, render_row};
