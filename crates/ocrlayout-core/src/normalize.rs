//! Fixed-rule normalization of recognized fragment text.
//!
//! Recognition engines hand back text with a small set of recurring defects:
//! Latin ligature code points, decomposed combining sequences, a trailing "+"
//! grade marker misread as a lowercase "t", and letter/digit runs fused into
//! a single token. This module applies a deterministic, ordered sequence of
//! corrections once per fragment. It is a total function: any input string,
//! including empty or already-clean text, yields a valid output.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Letters whose trailing "+" grade marker is commonly misread as "t".
///
/// "Ct" becomes "C+", and likewise for the other letter grades. The
/// replacement is a literal substring pass, positionally blind; that
/// approximation matches the upstream correction rules exactly.
const GRADE_MARKER_RULES: [(&str, &str); 4] =
    [("At", "A+"), ("Bt", "B+"), ("Ct", "C+"), ("Dt", "D+")];

static LETTER_THEN_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])([0-9])").expect("static pattern"));
static DIGIT_THEN_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])([A-Za-z])").expect("static pattern"));

/// Apply the full correction sequence to one fragment's recognized text.
///
/// Rules run once, in a fixed order:
/// 1. Latin ligatures (U+FB00–U+FB06) expand to their character sequences.
/// 2. NFC normalization of combining sequences.
/// 3. Grade-marker substitutions ([`GRADE_MARKER_RULES`]).
/// 4. A single space is inserted at every letter→digit and digit→letter
///    boundary, all non-overlapping matches across the string.
///
/// There is no iteration to a fixed point: the output is the string after
/// one pass, and no rule introduces new matches for a later rule beyond
/// that pass.
pub fn normalize_fragment_text(text: &str) -> String {
    let text = expand_ligatures(text);
    let mut text: String = text.nfc().collect();

    for (from, to) in GRADE_MARKER_RULES {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }

    let text = LETTER_THEN_DIGIT.replace_all(&text, "${1} ${2}");
    let text = DIGIT_THEN_LETTER.replace_all(&text, "${1} ${2}");
    text.into_owned()
}

/// Expand common Latin ligatures (U+FB00–U+FB06) to their multi-character
/// equivalents. Recognition engines occasionally emit these for tightly-set
/// type; downstream spacing math works on plain character runs.
pub fn expand_ligatures(text: &str) -> String {
    if !text.chars().any(|c| ('\u{FB00}'..='\u{FB06}').contains(&c)) {
        return text.to_string();
    }
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{FB00}' => result.push_str("ff"),
            '\u{FB01}' => result.push_str("fi"),
            '\u{FB02}' => result.push_str("fl"),
            '\u{FB03}' => result.push_str("ffi"),
            '\u{FB04}' => result.push_str("ffl"),
            '\u{FB05}' => result.push_str("\u{017F}t"), // long s + t
            '\u{FB06}' => result.push_str("st"),
            _ => result.push(ch),
        }
    }
    result
}
