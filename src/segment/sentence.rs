//! Sentence boundaries (UAX #29 rules SB1 to SB998).
//!
//! SB5 folds Extend and Format runs into the preceding scalar. The
//! lookback chains skip Close* and Sp* runs; SB8 additionally scans
//! rightward for the first scalar that could begin a sentence.

use super::Segments;

/// Sentence_Break values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentenceBreak {
    Other,
    CR,
    LF,
    Sep,
    Extend,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    STerm,
    Close,
    SContinue,
}

/// One run of code points sharing a Sentence_Break value.
#[derive(Clone, Copy, Debug)]
pub struct SentenceBreakRange {
    pub start: u32,
    pub end: u32,
    pub property: SentenceBreak,
}

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/sentence.rs"
));

fn property(ch: char) -> SentenceBreak {
    let value = ch as u32;
    let idx = SENTENCE_BREAK_RANGES.partition_point(|range| range.end < value);
    match SENTENCE_BREAK_RANGES.get(idx) {
        Some(range) if range.start <= value => range.property,
        _ => SentenceBreak::Other,
    }
}

const fn is_skipped(property: SentenceBreak) -> bool {
    matches!(property, SentenceBreak::Extend | SentenceBreak::Format)
}

fn previous_position(seq: &[char], i: usize) -> Option<usize> {
    let mut pos = i;
    while pos > 0 {
        pos -= 1;
        if !is_skipped(property(seq[pos])) {
            return Some(pos);
        }
    }
    None
}

fn next_position(seq: &[char], i: usize) -> usize {
    let mut pos = i + 1;
    while pos < seq.len() && is_skipped(property(seq[pos])) {
        pos += 1;
    }
    pos
}

const fn para_sep(property: SentenceBreak) -> bool {
    matches!(
        property,
        SentenceBreak::Sep | SentenceBreak::CR | SentenceBreak::LF
    )
}

const fn sa_term(property: SentenceBreak) -> bool {
    matches!(property, SentenceBreak::STerm | SentenceBreak::ATerm)
}

/// Skip a run of `skipped` leftward from `i`, returning the first
/// significant property past it.
fn lookback_past(seq: &[char], i: usize, skipped: &[SentenceBreak]) -> SentenceBreak {
    let mut result = SentenceBreak::Other;
    let mut pos = previous_position(seq, i);
    for &class in skipped {
        while let Some(p) = pos {
            result = property(seq[p]);
            if result != class {
                break;
            }
            pos = previous_position(seq, p);
        }
    }
    result
}

/// True when a sentence boundary lies before position `i` of `seq`, for
/// `i` in `[0, seq.len()]`.
#[must_use]
pub fn is_sentence_boundary(seq: &[char], i: usize) -> bool {
    use SentenceBreak::*;

    // SB1, SB2
    if i == 0 || i == seq.len() {
        return true;
    }

    let mut lp = property(seq[i - 1]);
    let rp = property(seq[i]);

    // SB3: CR x LF
    if lp == CR && rp == LF {
        return false;
    }
    // SB4: ParaSep ÷
    if para_sep(lp) {
        return true;
    }
    // SB5: X (Extend | Format)* -> X
    if is_skipped(rp) {
        return false;
    }

    let lpos = previous_position(seq, i);
    lp = match lpos {
        Some(pos) => property(seq[pos]),
        None => Other,
    };

    // SB6: ATerm x Numeric
    if lp == ATerm && rp == Numeric {
        return false;
    }

    // SB7: (Upper | Lower) ATerm x Upper
    let lp1 = match lpos {
        Some(pos) if pos > 0 => match previous_position(seq, pos) {
            Some(prev) => property(seq[prev]),
            None => Other,
        },
        _ => Other,
    };
    if matches!(lp1, Upper | Lower) && lp == ATerm && rp == Upper {
        return false;
    }

    // The SB8/SB8a/SB10/SB11 lookback: the property before Close* Sp*.
    let lp2 = lookback_past(seq, i, &[Sp, Close]);

    // SB8's rightward scan: the first scalar that is none of the skippable
    // middle classes decides whether a lowercase continuation follows.
    let mut rp2 = Other;
    let mut pos = i;
    while pos < seq.len() {
        rp2 = property(seq[pos]);
        if para_sep(rp2) || sa_term(rp2) || matches!(rp2, OLetter | Upper | Lower) {
            break;
        }
        pos = next_position(seq, pos);
    }

    // SB8: ATerm Close* Sp* x (not (OLetter | Upper | Lower | ParaSep |
    // SATerm))* Lower
    if lp2 == ATerm && rp2 == Lower {
        return false;
    }
    // SB8a: SATerm Close* Sp* x (SContinue | SATerm)
    if sa_term(lp2) && (rp == SContinue || sa_term(rp)) {
        return false;
    }

    // SB9: SATerm Close* x (Close | Sp | ParaSep)
    let lp3 = lookback_past(seq, i, &[Close]);
    if sa_term(lp3) && (matches!(rp, Close | Sp) || para_sep(rp)) {
        return false;
    }
    // SB10: SATerm Close* Sp* x (Sp | ParaSep)
    if sa_term(lp2) && (rp == Sp || para_sep(rp)) {
        return false;
    }
    // SB11: SATerm Close* Sp* ParaSep? ÷ (the ParaSep case is SB4)
    if sa_term(lp2) {
        return true;
    }
    // SB998
    false
}

/// Length of the first sentence segment; 0 only for empty input.
#[must_use]
pub fn sentence_length(seq: &[char]) -> usize {
    (1..seq.len())
        .find(|&i| is_sentence_boundary(seq, i))
        .unwrap_or(seq.len())
}

/// Number of sentence segments in the sequence.
#[must_use]
pub fn sentence_count(seq: &[char]) -> usize {
    sentences(seq).count()
}

/// Iterate over the sentence segments of a sequence.
#[must_use]
pub fn sentences(seq: &[char]) -> Segments<'_> {
    Segments::new(seq, is_sentence_boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        let seq: Vec<char> = text.chars().collect();
        sentences(&seq)
            .map(|segment| segment.iter().collect())
            .collect()
    }

    #[test]
    fn quoted_terminator() {
        assert_eq!(
            split("He said \"Hi.\" She left."),
            ["He said \"Hi.\" ", "She left."]
        );
    }

    #[test]
    fn terminators() {
        assert_eq!(split("One! Two? Three."), ["One! ", "Two? ", "Three."]);
        assert_eq!(split("He left. She stayed."), ["He left. ", "She stayed."]);
    }

    #[test]
    fn lowercase_continuation_suppresses_break() {
        assert_eq!(split("Is 3.4 big? e.g. yes."), ["Is 3.4 big? ", "e.g. yes."]);
        assert_eq!(split("etc. and more"), ["etc. and more"]);
    }

    #[test]
    fn numeric_abbreviations() {
        assert_eq!(split("It is 3.4 m."), ["It is 3.4 m."]);
    }

    #[test]
    fn paragraph_separators() {
        assert_eq!(split("End.\nNew"), ["End.\n", "New"]);
        assert_eq!(split("a\r\nb"), ["a\r\n", "b"]);
        assert_eq!(split("a\u{2029}b"), ["a\u{2029}", "b"]);
    }

    #[test]
    fn continuation_comma() {
        assert_eq!(split("No. 5, please."), ["No. 5, please."]);
    }

    #[test]
    fn lengths_and_counts() {
        let seq: Vec<char> = "One. Two.".chars().collect();
        assert_eq!(sentence_length(&seq), 5);
        assert_eq!(sentence_count(&seq), 2);
    }
}
