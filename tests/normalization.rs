use unitext::normalize::{
    is_nfc, is_nfd, is_normalized, nfc, nfd, nfkc, nfkd, to_nfc, to_nfd, to_nfkc, to_nfkd, Form,
};

const CORPUS: &[&str] = &[
    "",
    "The quick brown fox jumps over the lazy dog.",
    "Gr\u{00FC}\u{00DF}e aus der Stra\u{00DF}e",
    "e\u{0301}tude \u{00E9}tude",
    "\u{1F26}\u{03BB}\u{03B8}\u{03B5} \u{039F}\u{0394}\u{03A5}\u{03A3}\u{03A3}\u{0395}\u{03A5}\u{03A3}",
    "\u{D55C}\u{AD6D}\u{C5B4} \u{1112}\u{1161}\u{11AB}\u{AE00}",
    "\u{0936}\u{093E}\u{0928}\u{094D}\u{0924}\u{093F}",
    "\u{05E9}\u{05B8}\u{05C1}\u{05DC}\u{05D5}\u{05B9}\u{05DD}",
    "q\u{0307}\u{0323} s\u{0323}\u{0307}",
    "\u{FB01}nal \u{FB00}ort",
    "\u{212B}ngstr\u{00F6}m \u{2126}",
    "\u{1E0B}\u{0323} d\u{0323}\u{0307}",
];

fn seq(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn idempotence() {
    for text in CORPUS {
        let input = seq(text);
        for convert in [to_nfc, to_nfd, to_nfkc, to_nfkd] {
            let once = convert(&input);
            assert_eq!(convert(&once), once, "non-idempotent for {text:?}");
        }
    }
}

#[test]
fn composition_decomposition_duality() {
    for text in CORPUS {
        let input = seq(text);
        assert_eq!(to_nfc(&to_nfd(&input)), to_nfc(&input), "for {text:?}");
        assert_eq!(to_nfd(&to_nfc(&input)), to_nfd(&input), "for {text:?}");
        assert_eq!(to_nfkc(&to_nfkd(&input)), to_nfkc(&input), "for {text:?}");
    }
}

#[test]
fn canonical_equivalence() {
    // precomposed, partially composed and fully decomposed spellings
    let spellings = [
        "\u{1E0D}\u{0307}",
        "\u{1E0B}\u{0323}",
        "d\u{0323}\u{0307}",
        "d\u{0307}\u{0323}",
    ];
    let canonical = to_nfd(&seq(spellings[0]));
    for spelling in &spellings[1..] {
        assert_eq!(to_nfd(&seq(spelling)), canonical, "for {spelling:?}");
    }
}

#[test]
fn canonical_ordering_invariant() {
    use unitext::normalize::canonical_combining_class;
    for text in CORPUS {
        let output = to_nfd(&seq(text));
        for i in 1..output.len() {
            let previous = canonical_combining_class(output[i - 1]);
            let current = canonical_combining_class(output[i]);
            assert!(
                current == 0 || previous == 0 || previous <= current,
                "ordering violated at {i} in {text:?}"
            );
        }
    }
}

#[test]
fn normalized_checks_match_conversion() {
    for text in CORPUS {
        let input = seq(text);
        for form in [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd] {
            let converted = match form {
                Form::Nfc => to_nfc(&input),
                Form::Nfd => to_nfd(&input),
                Form::Nfkc => to_nfkc(&input),
                Form::Nfkd => to_nfkd(&input),
            };
            assert_eq!(
                is_normalized(&input, form),
                converted == input,
                "for {text:?}"
            );
        }
    }
}

#[test]
fn composes_a_with_diaeresis() {
    assert_eq!(to_nfc(&[char::from(0x41), '\u{0308}']), ['\u{00C4}']);
}

#[test]
fn decomposes_a_umlaut() {
    assert_eq!(to_nfd(&['\u{00C4}']), ['A', '\u{0308}']);
}

#[test]
fn composes_hangul_jamo() {
    assert_eq!(to_nfc(&['\u{1100}', '\u{1161}', '\u{11A8}']), ['\u{AC01}']);
    assert_eq!(to_nfd(&['\u{AC01}']), ['\u{1100}', '\u{1161}', '\u{11A8}']);
}

#[test]
fn compatibility_only_in_k_forms() {
    assert_eq!(to_nfkd(&['\u{FB00}']), ['f', 'f']);
    assert_eq!(to_nfd(&['\u{FB00}']), ['\u{FB00}']);
    assert_eq!(to_nfkc(&['\u{FB01}']), ['f', 'i']);
    assert_eq!(nfkc("2\u{2075}"), "25");
}

#[test]
fn string_wrappers() {
    assert_eq!(nfc("A\u{0308}"), "\u{00C4}");
    assert_eq!(nfd("\u{00C4}"), "A\u{0308}");
    assert_eq!(nfkd("\u{FB00}"), "ff");
    assert!(is_nfc("\u{00C4}"));
    assert!(is_nfd("A\u{0308}"));
    assert!(!is_nfc("A\u{0308}"));
    assert!(!is_nfd("\u{00C4}"));
}

#[test]
fn non_starter_decomposition() {
    // U+0344 decomposes to U+0308 U+0301 and must never recompose
    assert_eq!(to_nfd(&['E', '\u{0344}']), ['E', '\u{0308}', '\u{0301}']);
    assert_eq!(to_nfc(&['E', '\u{0344}']), ['\u{00CB}', '\u{0301}']);
}

#[test]
fn discontiguous_composition() {
    // the cedilla blocks nothing above it
    assert_eq!(
        to_nfc(&['A', '\u{0316}', '\u{0300}']),
        ['\u{00C0}', '\u{0316}']
    );
    // same combining class blocks
    assert_eq!(
        to_nfc(&['A', '\u{0308}', '\u{0300}']),
        ['\u{00C4}', '\u{0300}']
    );
}

#[test]
fn two_part_vowels_compose() {
    assert_eq!(
        to_nfc(&['\u{0CC6}', '\u{0CC2}', '\u{0CD5}']),
        ['\u{0CCB}']
    );
}
