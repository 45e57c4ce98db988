//! Simple and full case conversion, case folding, and caseless matching.
//!
//! Full mappings resolve in three steps per scalar: conditional
//! SpecialCasing entries (filtered by language tag and casing context, in
//! declaration order), then the unconditional SpecialCasing entry, then the
//! simple mapping. Language tags are BCP-47 primary subtags; the data
//! consults `"tr"`, `"az"` and `"lt"`.

use crate::normalize::{self, Form};
use crate::properties::{is_case_ignorable, is_cased, is_soft_dotted};
use crate::segment::word::is_word_boundary;
use crate::{from_scalar, properties};

const COMBINING_DOT_ABOVE: u32 = 0x0307;
const CAPITAL_I: u32 = 0x0049;

/// Casing contexts from Table 3-17 of the standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CasingContext {
    FinalSigma,
    NotFinalSigma,
    AfterSoftDotted,
    MoreAbove,
    BeforeDot,
    NotBeforeDot,
    AfterI,
}

/// One conditional SpecialCasing record.
#[derive(Clone, Copy, Debug)]
pub struct SpecialCaseMapping {
    pub scalar: u32,
    pub language: Option<&'static str>,
    pub context: Option<CasingContext>,
    pub lower: &'static [u32],
    pub title: &'static [u32],
    pub upper: &'static [u32],
}

/// One CaseFolding.txt record. `common` and `full` are mutually exclusive;
/// `simple` and `turkic` override them for the S and T statuses.
#[derive(Clone, Copy, Debug)]
pub struct CaseFolding {
    pub scalar: u32,
    pub common: Option<u32>,
    pub full: Option<&'static [u32]>,
    pub simple: Option<u32>,
    pub turkic: Option<&'static [u32]>,
}

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/case.rs"
));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mapping {
    Upper,
    Lower,
    Title,
}

fn simple_triple(scalar: u32) -> Option<(u32, u32, u32)> {
    let idx = SIMPLE_CASE_MAPPINGS.partition_point(|&(value, ..)| value < scalar);
    match SIMPLE_CASE_MAPPINGS.get(idx) {
        Some(&(value, upper, lower, title)) if value == scalar => Some((upper, lower, title)),
        _ => None,
    }
}

fn simple_mapping(scalar: u32, mapping: Mapping) -> u32 {
    match simple_triple(scalar) {
        Some((upper, lower, title)) => match mapping {
            Mapping::Upper => upper,
            Mapping::Lower => lower,
            Mapping::Title => title,
        },
        None => scalar,
    }
}

/// Simple (single-scalar) uppercase mapping; identity when absent.
#[must_use]
pub fn simple_uppercase_mapping(ch: char) -> char {
    from_scalar(simple_mapping(ch as u32, Mapping::Upper))
}

/// Simple lowercase mapping; identity when absent.
#[must_use]
pub fn simple_lowercase_mapping(ch: char) -> char {
    from_scalar(simple_mapping(ch as u32, Mapping::Lower))
}

/// Simple titlecase mapping; identity when absent.
#[must_use]
pub fn simple_titlecase_mapping(ch: char) -> char {
    from_scalar(simple_mapping(ch as u32, Mapping::Title))
}

fn folding_record(scalar: u32) -> Option<&'static CaseFolding> {
    let idx = CASE_FOLDINGS.partition_point(|record| record.scalar < scalar);
    CASE_FOLDINGS
        .get(idx)
        .filter(|record| record.scalar == scalar)
}

/// Simple case folding: the S mapping when present, else C, else identity.
#[must_use]
pub fn simple_case_folding(ch: char) -> char {
    match folding_record(ch as u32) {
        Some(record) => from_scalar(record.simple.or(record.common).unwrap_or(ch as u32)),
        None => ch,
    }
}

// Context predicates. Each scans over the scalar sequence around position
// `i`, skipping combining classes other than 0 and 230 (Above) where the
// standard says so.

fn is_final_sigma(seq: &[char], i: usize) -> bool {
    // Before C: a cased scalar, then zero or more case-ignorable.
    let mut pos = i;
    loop {
        if pos == 0 {
            return false;
        }
        pos -= 1;
        if !is_case_ignorable(seq[pos]) {
            break;
        }
    }
    if !is_cased(seq[pos]) {
        return false;
    }

    // After C: not (zero or more case-ignorable, then a cased scalar).
    let mut pos = i + 1;
    while pos < seq.len() && is_case_ignorable(seq[pos]) {
        pos += 1;
    }
    !(pos < seq.len() && is_cased(seq[pos]))
}

fn class_230_or_0(ch: char) -> bool {
    matches!(normalize::canonical_combining_class(ch), 0 | 230)
}

fn is_after_soft_dotted(seq: &[char], i: usize) -> bool {
    let mut pos = i;
    while pos > 0 {
        pos -= 1;
        if class_230_or_0(seq[pos]) {
            return is_soft_dotted(seq[pos]);
        }
    }
    false
}

fn is_more_above(seq: &[char], i: usize) -> bool {
    let mut pos = i + 1;
    while pos < seq.len() && !class_230_or_0(seq[pos]) {
        pos += 1;
    }
    pos < seq.len() && normalize::canonical_combining_class(seq[pos]) == 230
}

fn is_before_dot(seq: &[char], i: usize) -> bool {
    let mut pos = i + 1;
    while pos < seq.len() && !class_230_or_0(seq[pos]) {
        pos += 1;
    }
    pos < seq.len() && seq[pos] as u32 == COMBINING_DOT_ABOVE
}

fn is_after_i(seq: &[char], i: usize) -> bool {
    let mut pos = i;
    while pos > 0 {
        pos -= 1;
        if class_230_or_0(seq[pos]) {
            return seq[pos] as u32 == CAPITAL_I;
        }
    }
    false
}

fn context_holds(context: CasingContext, seq: &[char], i: usize) -> bool {
    match context {
        CasingContext::FinalSigma => is_final_sigma(seq, i),
        CasingContext::NotFinalSigma => !is_final_sigma(seq, i),
        CasingContext::AfterSoftDotted => is_after_soft_dotted(seq, i),
        CasingContext::MoreAbove => is_more_above(seq, i),
        CasingContext::BeforeDot => is_before_dot(seq, i),
        CasingContext::NotBeforeDot => !is_before_dot(seq, i),
        CasingContext::AfterI => is_after_i(seq, i),
    }
}

fn special_entries(scalar: u32) -> &'static [SpecialCaseMapping] {
    let start = SPECIAL_CASE_MAPPINGS.partition_point(|entry| entry.scalar < scalar);
    let mut end = start;
    while end < SPECIAL_CASE_MAPPINGS.len() && SPECIAL_CASE_MAPPINGS[end].scalar == scalar {
        end += 1;
    }
    &SPECIAL_CASE_MAPPINGS[start..end]
}

fn default_special(scalar: u32) -> Option<(&'static [u32], &'static [u32], &'static [u32])> {
    let idx = DEFAULT_SPECIAL_CASE_MAPPINGS.partition_point(|&(value, ..)| value < scalar);
    match DEFAULT_SPECIAL_CASE_MAPPINGS.get(idx) {
        Some(&(value, lower, title, upper)) if value == scalar => Some((lower, title, upper)),
        _ => None,
    }
}

fn full_case_mapping(
    seq: &[char],
    i: usize,
    language: Option<&str>,
    mapping: Mapping,
    out: &mut Vec<char>,
) {
    let scalar = seq[i] as u32;

    for entry in special_entries(scalar) {
        if let Some(tag) = entry.language {
            if language != Some(tag) {
                continue;
            }
        }
        if let Some(context) = entry.context {
            if !context_holds(context, seq, i) {
                continue;
            }
        }
        let replacement = match mapping {
            Mapping::Upper => entry.upper,
            Mapping::Lower => entry.lower,
            Mapping::Title => entry.title,
        };
        out.extend(replacement.iter().copied().map(from_scalar));
        return;
    }

    if let Some((lower, title, upper)) = default_special(scalar) {
        let replacement = match mapping {
            Mapping::Upper => upper,
            Mapping::Lower => lower,
            Mapping::Title => title,
        };
        out.extend(replacement.iter().copied().map(from_scalar));
        return;
    }

    out.push(from_scalar(simple_mapping(scalar, mapping)));
}

/// Full uppercase mapping of the scalar at `i`, appended to `out`.
pub fn uppercase_mapping(seq: &[char], i: usize, language: Option<&str>, out: &mut Vec<char>) {
    full_case_mapping(seq, i, language, Mapping::Upper, out);
}

/// Full lowercase mapping of the scalar at `i`, appended to `out`.
pub fn lowercase_mapping(seq: &[char], i: usize, language: Option<&str>, out: &mut Vec<char>) {
    full_case_mapping(seq, i, language, Mapping::Lower, out);
}

/// Full titlecase mapping of the scalar at `i`, appended to `out`.
pub fn titlecase_mapping(seq: &[char], i: usize, language: Option<&str>, out: &mut Vec<char>) {
    full_case_mapping(seq, i, language, Mapping::Title, out);
}

/// R1: map every scalar to its full uppercase mapping.
#[must_use]
pub fn to_uppercase(seq: &[char], language: Option<&str>) -> Vec<char> {
    let mut out = Vec::with_capacity(seq.len());
    for i in 0..seq.len() {
        uppercase_mapping(seq, i, language, &mut out);
    }
    out
}

/// R2: map every scalar to its full lowercase mapping.
#[must_use]
pub fn to_lowercase(seq: &[char], language: Option<&str>) -> Vec<char> {
    let mut out = Vec::with_capacity(seq.len());
    for i in 0..seq.len() {
        lowercase_mapping(seq, i, language, &mut out);
    }
    out
}

/// R3: titlecase the first cased scalar after each word boundary, lowercase
/// the rest of the word, and copy non-cased scalars through.
#[must_use]
pub fn to_titlecase(seq: &[char], language: Option<&str>) -> Vec<char> {
    let mut out = Vec::with_capacity(seq.len());
    let mut i = 0;
    while i < seq.len() {
        while i < seq.len() && !is_cased(seq[i]) {
            out.push(seq[i]);
            i += 1;
        }
        if i == seq.len() {
            break;
        }

        titlecase_mapping(seq, i, language, &mut out);
        i += 1;

        while i < seq.len() && !is_word_boundary(seq, i) {
            lowercase_mapping(seq, i, language, &mut out);
            i += 1;
        }
    }
    out
}

fn case_folding(scalar: u32, turkic: bool, out: &mut Vec<char>) {
    if let Some(record) = folding_record(scalar) {
        if turkic {
            if let Some(mapping) = record.turkic {
                out.extend(mapping.iter().copied().map(from_scalar));
                return;
            }
        }
        if let Some(mapping) = record.full {
            out.extend(mapping.iter().copied().map(from_scalar));
            return;
        }
        if let Some(simple) = record.simple {
            out.push(from_scalar(simple));
            return;
        }
        if let Some(common) = record.common {
            out.push(from_scalar(common));
            return;
        }
    }
    out.push(from_scalar(scalar));
}

/// R4: map every scalar to its case folding. With `turkic` set, the T
/// mappings for U+0049 and U+0130 replace the defaults.
#[must_use]
pub fn to_case_fold(seq: &[char], turkic: bool) -> Vec<char> {
    let mut out = Vec::with_capacity(seq.len());
    for &ch in seq {
        case_folding(ch as u32, turkic, &mut out);
    }
    out
}

/// D144: toCasefold(X) = toCasefold(Y).
#[must_use]
pub fn caseless_match(a: &[char], b: &[char], turkic: bool) -> bool {
    to_case_fold(a, turkic) == to_case_fold(b, turkic)
}

fn fold_scalars(scalars: &[u32], turkic: bool) -> Vec<u32> {
    let chars: Vec<char> = scalars.iter().copied().map(from_scalar).collect();
    to_case_fold(&chars, turkic)
        .into_iter()
        .map(|ch| ch as u32)
        .collect()
}

fn canonical_caseless(seq: &[char], turkic: bool) -> Vec<u32> {
    let scalars: Vec<u32> = seq.iter().map(|&ch| ch as u32).collect();
    let nfd = normalize::normalize_scalars(&scalars, Form::Nfd);
    normalize::normalize_scalars(&fold_scalars(&nfd, turkic), Form::Nfd)
}

/// D145: NFD(toCasefold(NFD(X))) = NFD(toCasefold(NFD(Y))).
#[must_use]
pub fn canonical_caseless_match(a: &[char], b: &[char], turkic: bool) -> bool {
    canonical_caseless(a, turkic) == canonical_caseless(b, turkic)
}

fn compatibility_caseless(seq: &[char], turkic: bool) -> Vec<u32> {
    let scalars: Vec<u32> = seq.iter().map(|&ch| ch as u32).collect();
    let nfd = normalize::normalize_scalars(&scalars, Form::Nfd);
    let folded = fold_scalars(&nfd, turkic);
    let nfkd = normalize::normalize_scalars(&folded, Form::Nfkd);
    normalize::normalize_scalars(&fold_scalars(&nfkd, turkic), Form::Nfkd)
}

/// D146: NFKD(toCasefold(NFKD(toCasefold(NFD(X))))) compared for both
/// sides.
#[must_use]
pub fn compatibility_caseless_match(a: &[char], b: &[char], turkic: bool) -> bool {
    compatibility_caseless(a, turkic) == compatibility_caseless(b, turkic)
}

/// D140: true when toUppercase(X) = X, decided via Changes_When_Uppercased.
#[must_use]
pub fn is_uppercase(seq: &[char]) -> bool {
    seq.iter()
        .all(|&ch| !properties::is_changes_when_uppercased(ch))
}

/// D139: true when toLowercase(X) = X.
#[must_use]
pub fn is_lowercase(seq: &[char]) -> bool {
    seq.iter()
        .all(|&ch| !properties::is_changes_when_lowercased(ch))
}

/// D142: true when toCasefold(X) = X.
#[must_use]
pub fn is_case_folded(seq: &[char]) -> bool {
    seq.iter()
        .all(|&ch| !properties::is_changes_when_casefolded(ch))
}

/// D141: true when toTitlecase(X) = X, decided by walking word boundaries
/// with the Changes_When_Titlecased and Changes_When_Lowercased properties.
#[must_use]
pub fn is_titlecase(seq: &[char]) -> bool {
    let mut i = 0;
    while i < seq.len() {
        while i < seq.len() && !is_cased(seq[i]) {
            if properties::is_changes_when_lowercased(seq[i]) {
                return false;
            }
            i += 1;
        }
        if i == seq.len() {
            break;
        }

        if properties::is_changes_when_titlecased(seq[i]) {
            return false;
        }
        i += 1;

        while i < seq.len() && !is_word_boundary(seq, i) {
            if properties::is_changes_when_lowercased(seq[i]) {
                return false;
            }
            i += 1;
        }
    }
    true
}

fn convert_str(input: &str, convert: impl Fn(&[char]) -> Vec<char>) -> String {
    let seq: Vec<char> = input.chars().collect();
    convert(&seq).into_iter().collect()
}

/// Full uppercase conversion of a string.
#[must_use]
pub fn uppercase(input: &str, language: Option<&str>) -> String {
    convert_str(input, |seq| to_uppercase(seq, language))
}

/// Full lowercase conversion of a string.
#[must_use]
pub fn lowercase(input: &str, language: Option<&str>) -> String {
    convert_str(input, |seq| to_lowercase(seq, language))
}

/// Full titlecase conversion of a string.
#[must_use]
pub fn titlecase(input: &str, language: Option<&str>) -> String {
    convert_str(input, |seq| to_titlecase(seq, language))
}

/// Case folding of a string.
#[must_use]
pub fn case_fold(input: &str, turkic: bool) -> String {
    convert_str(input, |seq| to_case_fold(seq, turkic))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn turkish_dotted_i() {
        assert_eq!(uppercase("i", Some("tr")), "\u{0130}");
        assert_eq!(uppercase("i", Some("az")), "\u{0130}");
        assert_eq!(uppercase("i", None), "I");
        assert_eq!(lowercase("\u{0130}", Some("tr")), "i");
        assert_eq!(lowercase("\u{0130}", None), "i\u{0307}");
        assert_eq!(lowercase("I", Some("tr")), "\u{0131}");
        assert_eq!(lowercase("I", None), "i");
        assert_eq!(lowercase("I\u{0307}", Some("tr")), "i");
    }

    #[test]
    fn final_sigma() {
        assert_eq!(lowercase("\u{039F}\u{03A3}", None), "\u{03BF}\u{03C2}");
        assert_eq!(lowercase("\u{03A3}\u{039F}", None), "\u{03C3}\u{03BF}");
        assert_eq!(lowercase("\u{039F}\u{03A3}.", None), "\u{03BF}\u{03C2}.");
        assert_eq!(
            lowercase("\u{1F48}\u{0394}\u{03A5}\u{03A3}\u{03A3}\u{0395}\u{03A5}\u{03A3}", None),
            "\u{1F40}\u{03B4}\u{03C5}\u{03C3}\u{03C3}\u{03B5}\u{03C5}\u{03C2}"
        );
    }

    #[test]
    fn lithuanian_dot_above() {
        assert_eq!(lowercase("\u{00CC}", Some("lt")), "i\u{0307}\u{0300}");
        assert_eq!(lowercase("\u{00CC}", None), "\u{00EC}");
        assert_eq!(lowercase("I\u{0300}", Some("lt")), "i\u{0307}\u{0300}");
        assert_eq!(lowercase("I\u{0300}", None), "i\u{0300}");
        assert_eq!(uppercase("i\u{0307}", Some("lt")), "I");
        assert_eq!(uppercase("i\u{0307}", None), "I\u{0307}");
    }

    #[test]
    fn sharp_s_and_ligatures() {
        assert_eq!(uppercase("stra\u{00DF}e", None), "STRASSE");
        assert_eq!(uppercase("\u{FB00}", None), "FF");
        assert_eq!(titlecase("\u{FB00}", None), "Ff");
    }

    #[test]
    fn titlecasing_words() {
        assert_eq!(titlecase("hello world", None), "Hello World");
        assert_eq!(titlecase("O'neil's", None), "O'neil's");
        assert_eq!(titlecase("3rd place", None), "3Rd Place");
        assert_eq!(titlecase("\u{01C6}eltva", None), "\u{01C5}eltva");
    }

    #[test]
    fn folding() {
        assert_eq!(case_fold("MASSE", false), case_fold("Ma\u{00DF}e", false));
        assert_eq!(case_fold("\u{03A3}", false), case_fold("\u{03C2}", false));
        assert_eq!(case_fold("I", true), "\u{0131}");
        assert_eq!(case_fold("\u{0130}", true), "i");
        assert_eq!(case_fold("\u{0130}", false), "i\u{0307}");
        assert_eq!(simple_case_folding('\u{1E9E}'), '\u{00DF}');
        assert_eq!(simple_case_folding('A'), 'a');
        assert_eq!(simple_case_folding('\u{00DF}'), '\u{00DF}');
    }

    #[test]
    fn caseless_matching() {
        assert!(caseless_match(&seq("MASSE"), &seq("ma\u{00DF}e"), false));
        assert!(canonical_caseless_match(
            &seq("A\u{0308}"),
            &seq("\u{00E4}"),
            false
        ));
        assert!(compatibility_caseless_match(
            &seq("\u{FB00}I"),
            &seq("ffi"),
            false
        ));
        assert!(!compatibility_caseless_match(
            &seq("\u{FB00}I"),
            &seq("ffi"),
            true
        ));
        assert!(caseless_match(&seq("x"), &seq("x"), false));
        assert!(!caseless_match(&seq("x"), &seq("y"), false));
    }

    #[test]
    fn string_checks() {
        assert!(is_uppercase(&seq("HELLO")));
        assert!(!is_uppercase(&seq("Hello")));
        assert!(is_lowercase(&seq("hello")));
        assert!(!is_lowercase(&seq("hellO")));
        assert!(is_titlecase(&seq("Hello World")));
        assert!(!is_titlecase(&seq("hello world")));
        assert!(!is_titlecase(&seq("HELLO")));
        assert!(is_case_folded(&seq("hello")));
        assert!(!is_case_folded(&seq("Hello")));
    }

    #[test]
    fn simple_mappings() {
        assert_eq!(simple_uppercase_mapping('a'), 'A');
        assert_eq!(simple_uppercase_mapping('\u{00DF}'), '\u{00DF}');
        assert_eq!(simple_lowercase_mapping('\u{0130}'), 'i');
        assert_eq!(simple_titlecase_mapping('\u{01C4}'), '\u{01C5}');
        assert_eq!(simple_uppercase_mapping('\u{00FF}'), '\u{0178}');
    }
}
