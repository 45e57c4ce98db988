//! The four Unicode normalization forms.
//!
//! Decomposition recurses through the raw UnicodeData mappings (gated on
//! the compatibility tag for NFKC/NFKD) and through the algorithmic Hangul
//! rules, then canonically reorders combining marks. Composition walks the
//! result one starter run at a time, folding pairs through the canonical
//! composition table with the ccc blocking rule, and folding jamo runs
//! arithmetically.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{from_scalar, hangul};

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/normalization.rs"
));

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/composition.rs"
));

/// The normalization form to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl Form {
    const fn is_compatibility(self) -> bool {
        matches!(self, Form::Nfkc | Form::Nfkd)
    }
}

/// Canonical combining class of a scalar; 0 for everything not listed.
#[must_use]
pub fn canonical_combining_class(ch: char) -> u8 {
    combining_class(ch as u32)
}

pub(crate) fn combining_class(scalar: u32) -> u8 {
    let idx = COMBINING_CLASS_RANGES.partition_point(|&(_, end, _)| end < scalar);
    match COMBINING_CLASS_RANGES.get(idx) {
        Some(&(start, _, class)) if start <= scalar => class,
        _ => 0,
    }
}

fn decomposition(scalar: u32) -> Option<(bool, &'static [u32])> {
    let idx = DECOMPOSITIONS.partition_point(|&(value, _, _)| value < scalar);
    match DECOMPOSITIONS.get(idx) {
        Some(&(value, compat, mapping)) if value == scalar => Some((compat, mapping)),
        _ => None,
    }
}

static COMPOSITION_INDEX: Lazy<HashMap<(u32, u32), u32>> = Lazy::new(|| {
    let index: HashMap<(u32, u32), u32> = CANONICAL_COMPOSITIONS
        .iter()
        .map(|&(first, second, composite)| ((first, second), composite))
        .collect();
    debug!(pairs = index.len(), "built canonical composition index");
    index
});

fn compose_pair(first: u32, second: u32) -> Option<u32> {
    COMPOSITION_INDEX.get(&(first, second)).copied()
}

fn decompose_scalar(scalar: u32, form: Form, out: &mut Vec<u32>) {
    if hangul::is_precomposed_syllable(scalar) {
        hangul::decompose_syllable(scalar, out);
        return;
    }
    match decomposition(scalar) {
        Some((compat, mapping)) if !compat || form.is_compatibility() => {
            for &part in mapping {
                decompose_scalar(part, form, out);
            }
        }
        _ => out.push(scalar),
    }
}

/// Canonical Ordering Algorithm: bubble each nonzero-class scalar left
/// until its predecessor's class is no longer greater.
fn reorder_marks(scalars: &mut [u32]) {
    for i in 0..scalars.len() {
        if combining_class(scalars[i]) == 0 {
            continue;
        }
        let mut j = i;
        while j > 0 && combining_class(scalars[j - 1]) > combining_class(scalars[j]) {
            scalars.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn decompose(scalars: &[u32], form: Form) -> Vec<u32> {
    let mut out = Vec::with_capacity(scalars.len() * 2);
    for &scalar in scalars {
        decompose_scalar(scalar, form, &mut out);
    }
    reorder_marks(&mut out);
    out
}

/// Compose one starter run beginning at `run[0]`, appending the result to
/// `out`. Returns how many input scalars were consumed.
fn compose_run(run: &[u32], out: &mut Vec<u32>) -> usize {
    let start = out.len();
    let mut starter = run[0];
    out.push(starter);

    let mut max_class: i32 = -1;
    let mut i = 1;
    while i < run.len() {
        let scalar = run[i];
        let class = i32::from(combining_class(scalar));
        if class > max_class {
            if let Some(composite) = compose_pair(starter, scalar) {
                starter = composite;
                out[start] = composite;
                i += 1;
                continue;
            }
        }
        if class == 0 {
            break;
        }
        max_class = max_class.max(class);
        out.push(scalar);
        i += 1;
    }

    i
}

fn compose(scalars: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(scalars.len());
    let mut i = 0;
    while i < scalars.len() {
        if hangul::is_decomposed_syllable(&scalars[i..]) {
            i += hangul::compose_syllables(&scalars[i..], &mut out);
        } else {
            i += compose_run(&scalars[i..], &mut out);
        }
    }
    out
}

pub(crate) fn normalize_scalars(scalars: &[u32], form: Form) -> Vec<u32> {
    let decomposed = decompose(scalars, form);
    match form {
        Form::Nfd | Form::Nfkd => decomposed,
        Form::Nfc | Form::Nfkc => compose(&decomposed),
    }
}

fn normalize_chars(input: &[char], form: Form) -> Vec<char> {
    let scalars: Vec<u32> = input.iter().map(|&ch| ch as u32).collect();
    normalize_scalars(&scalars, form)
        .into_iter()
        .map(from_scalar)
        .collect()
}

/// Normalization Form C: canonical decomposition then canonical
/// composition.
#[must_use]
pub fn to_nfc(input: &[char]) -> Vec<char> {
    normalize_chars(input, Form::Nfc)
}

/// Normalization Form D: canonical decomposition.
#[must_use]
pub fn to_nfd(input: &[char]) -> Vec<char> {
    normalize_chars(input, Form::Nfd)
}

/// Normalization Form KC: compatibility decomposition then canonical
/// composition.
#[must_use]
pub fn to_nfkc(input: &[char]) -> Vec<char> {
    normalize_chars(input, Form::Nfkc)
}

/// Normalization Form KD: compatibility decomposition.
#[must_use]
pub fn to_nfkd(input: &[char]) -> Vec<char> {
    normalize_chars(input, Form::Nfkd)
}

fn normalize_str(input: &str, form: Form) -> String {
    let scalars: Vec<u32> = input.chars().map(|ch| ch as u32).collect();
    normalize_scalars(&scalars, form)
        .into_iter()
        .map(from_scalar)
        .collect()
}

/// Normalize text to NFC.
#[must_use]
pub fn nfc(input: &str) -> String {
    normalize_str(input, Form::Nfc)
}

/// Normalize text to NFD.
#[must_use]
pub fn nfd(input: &str) -> String {
    normalize_str(input, Form::Nfd)
}

/// Normalize text to NFKC.
#[must_use]
pub fn nfkc(input: &str) -> String {
    normalize_str(input, Form::Nfkc)
}

/// Normalize text to NFKD.
#[must_use]
pub fn nfkd(input: &str) -> String {
    normalize_str(input, Form::Nfkd)
}

/// True when the sequence is already in the given form.
#[must_use]
pub fn is_normalized(input: &[char], form: Form) -> bool {
    let scalars: Vec<u32> = input.iter().map(|&ch| ch as u32).collect();
    normalize_scalars(&scalars, form) == scalars
}

/// True when the text is already NFC.
#[must_use]
pub fn is_nfc(input: &str) -> bool {
    nfc(input) == input
}

/// True when the text is already NFD.
#[must_use]
pub fn is_nfd(input: &str) -> bool {
    nfd(input) == input
}

/// True when the text is already NFKC.
#[must_use]
pub fn is_nfkc(input: &str) -> bool {
    nfkc(input) == input
}

/// True when the text is already NFKD.
#[must_use]
pub fn is_nfkd(input: &str) -> bool {
    nfkd(input) == input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(scalars: &[u32]) -> Vec<char> {
        scalars.iter().copied().map(crate::from_scalar).collect()
    }

    #[test]
    fn composes_diaeresis() {
        assert_eq!(to_nfc(&chars(&[0x0041, 0x0308])), chars(&[0x00C4]));
    }

    #[test]
    fn decomposes_a_umlaut() {
        assert_eq!(to_nfd(&chars(&[0x00C4])), chars(&[0x0041, 0x0308]));
    }

    #[test]
    fn hangul_composes() {
        assert_eq!(
            to_nfc(&chars(&[0x1100, 0x1161, 0x11A8])),
            chars(&[0xAC01])
        );
    }

    #[test]
    fn compatibility_gate() {
        assert_eq!(to_nfkd(&chars(&[0xFB00])), chars(&[0x0066, 0x0066]));
        assert_eq!(to_nfd(&chars(&[0xFB00])), chars(&[0xFB00]));
    }

    #[test]
    fn reorders_marks() {
        // dot below (220) sorts before dot above (230)
        assert_eq!(
            to_nfd(&chars(&[0x0071, 0x0307, 0x0323])),
            chars(&[0x0071, 0x0323, 0x0307])
        );
    }

    #[test]
    fn blocked_composition() {
        // the grave (230) composes across the blocked dot below (220)
        assert_eq!(
            to_nfc(&chars(&[0x0041, 0x0316, 0x0300])),
            chars(&[0x00C0, 0x0316])
        );
    }

    #[test]
    fn singleton_stays_decomposed() {
        assert_eq!(to_nfc(&chars(&[0x212B])), chars(&[0x00C5]));
        assert_eq!(to_nfd(&chars(&[0x2126])), chars(&[0x03A9]));
    }

    #[test]
    fn excluded_composition() {
        assert_eq!(to_nfd(&chars(&[0x0958])), chars(&[0x0915, 0x093C]));
        assert_eq!(to_nfc(&chars(&[0x0915, 0x093C])), chars(&[0x0915, 0x093C]));
    }

    #[test]
    fn combining_classes() {
        assert_eq!(canonical_combining_class('\u{0301}'), 230);
        assert_eq!(canonical_combining_class('\u{0323}'), 220);
        assert_eq!(canonical_combining_class('\u{094D}'), 9);
        assert_eq!(canonical_combining_class('a'), 0);
    }

    #[test]
    fn string_round_trip() {
        assert_eq!(nfc("A\u{0308}"), "\u{00C4}");
        assert_eq!(nfd("\u{00C4}"), "A\u{0308}");
        assert!(is_nfc("\u{00C4}"));
        assert!(!is_nfd("\u{00C4}"));
    }
}
