#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::perf, clippy::suspicious)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Unicode scalar-value algorithms.
//!
//! This crate implements the normative parts of the Unicode Standard for
//! character property lookup, full case conversion (with the Turkish, Azeri
//! and Lithuanian tailorings), the four normalization forms, and text
//! segmentation at the grapheme-cluster, word and sentence levels (UAX #29).
//!
//! All operations work on sequences of Unicode scalar values, modelled as
//! `&[char]`, and return owned sequences or boundary information. String
//! conveniences are provided where an operation is naturally string-shaped.
//! Property data is generated from the Unicode Character Database
//! (version 14.0.0) by `cargo run -p xtask -- unicode` and committed under
//! `generated/unicode14/`.

pub mod case;
pub mod combining;
pub mod hangul;
pub mod normalize;
pub mod properties;
pub mod segment;

/// An inclusive range of Unicode scalar values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    #[inline]
    pub const fn contains(&self, value: u32) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Membership test against a sorted slice of inclusive ranges.
#[inline]
pub(crate) fn range_contains(value: u32, ranges: &[Range]) -> bool {
    let idx = ranges.partition_point(|range| range.end < value);
    match ranges.get(idx) {
        Some(range) => range.contains(value),
        None => false,
    }
}

/// Convert a table scalar back into a `char`.
///
/// Table data only ever stores valid scalar values, so the fallback arm is
/// unreachable for correctly generated tables.
#[inline]
pub(crate) fn from_scalar(value: u32) -> char {
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}
