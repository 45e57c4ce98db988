use unitext::case::{
    caseless_match, canonical_caseless_match, case_fold, compatibility_caseless_match,
    is_case_folded, is_lowercase, is_titlecase, is_uppercase, lowercase, titlecase, to_case_fold,
    to_lowercase, to_titlecase, to_uppercase, uppercase,
};

const CORPUS: &[&str] = &[
    "",
    "The Quick Brown Fox",
    "stra\u{00DF}e und STRASSE",
    "\u{039F}\u{0394}\u{03A5}\u{03A3}\u{03A3}\u{0395}\u{03A5}\u{03A3}",
    "\u{0130}stanbul \u{0131}rmak",
    "can't stop, won't stop",
    "3rd place: 42.5 points",
    "\u{01C6}eltva \u{01C4}ELTVA",
    "\u{05E9}\u{05DC}\u{05D5}\u{05DD} world",
];

fn seq(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn case_conversion_idempotence() {
    for text in CORPUS {
        let input = seq(text);
        let upper = to_uppercase(&input, None);
        assert_eq!(to_uppercase(&upper, None), upper, "for {text:?}");
        let lower = to_lowercase(&input, None);
        assert_eq!(to_lowercase(&lower, None), lower, "for {text:?}");
        let title = to_titlecase(&input, None);
        assert_eq!(to_titlecase(&title, None), title, "for {text:?}");
    }
}

#[test]
fn folding_idempotence() {
    for text in CORPUS {
        let input = seq(text);
        for turkic in [false, true] {
            let folded = to_case_fold(&input, turkic);
            assert_eq!(to_case_fold(&folded, turkic), folded, "for {text:?}");
        }
    }
}

#[test]
fn converted_strings_pass_their_checks() {
    for text in CORPUS {
        let input = seq(text);
        assert!(is_uppercase(&to_uppercase(&input, None)), "for {text:?}");
        assert!(is_lowercase(&to_lowercase(&input, None)), "for {text:?}");
        assert!(is_titlecase(&to_titlecase(&input, None)), "for {text:?}");
        assert!(is_case_folded(&to_case_fold(&input, false)), "for {text:?}");
    }
}

#[test]
fn caseless_match_reflexive_and_symmetric() {
    for a in CORPUS {
        for b in CORPUS {
            let (sa, sb) = (seq(a), seq(b));
            assert!(caseless_match(&sa, &sa, false));
            assert_eq!(
                caseless_match(&sa, &sb, false),
                caseless_match(&sb, &sa, false)
            );
            assert_eq!(
                canonical_caseless_match(&sa, &sb, false),
                canonical_caseless_match(&sb, &sa, false)
            );
        }
    }
}

#[test]
fn turkish_and_azeri_dotted_i() {
    assert_eq!(uppercase("i", Some("tr")), "\u{0130}");
    assert_eq!(uppercase("i", None), "I");
    assert_eq!(uppercase("diyarbak\u{0131}r", Some("tr")), "D\u{0130}YARBAKIR");
    assert_eq!(lowercase("DIYARBAKIR", Some("tr")), "d\u{0131}yarbak\u{0131}r");
    assert_eq!(lowercase("\u{0130}", Some("az")), "i");
    assert_eq!(lowercase("\u{0130}", None), "i\u{0307}");
}

#[test]
fn final_sigma_position() {
    assert_eq!(
        lowercase("\u{039F}\u{0394}\u{03A5}\u{03A3}\u{03A3}\u{0395}\u{03A5}\u{03A3}", None),
        "\u{03BF}\u{03B4}\u{03C5}\u{03C3}\u{03C3}\u{03B5}\u{03C5}\u{03C2}"
    );
    // punctuation after the sigma is case-ignorable
    assert_eq!(lowercase("\u{039F}\u{03A3}.", None), "\u{03BF}\u{03C2}.");
    // a following cased letter keeps the non-final form
    assert_eq!(lowercase("\u{03A3}\u{0395}", None), "\u{03C3}\u{03B5}");
}

#[test]
fn lithuanian_tailoring() {
    assert_eq!(lowercase("\u{00CC}", Some("lt")), "i\u{0307}\u{0300}");
    assert_eq!(lowercase("I\u{0300}", Some("lt")), "i\u{0307}\u{0300}");
    assert_eq!(uppercase("i\u{0307}", Some("lt")), "I");
}

#[test]
fn multi_scalar_expansions() {
    assert_eq!(uppercase("stra\u{00DF}e", None), "STRASSE");
    assert_eq!(uppercase("\u{FB03}", None), "FFI");
    assert_eq!(uppercase("\u{0149}", None), "\u{02BC}N");
    assert_eq!(titlecase("\u{01F3}voni", None), "\u{01F2}voni");
}

#[test]
fn titlecase_walks_word_boundaries() {
    assert_eq!(titlecase("hello world", None), "Hello World");
    assert_eq!(titlecase("it's 3rd", None), "It's 3Rd");
    assert_eq!(titlecase("\u{03BF}\u{03B4}\u{03C5}\u{03C3}", None), "\u{039F}\u{03B4}\u{03C5}\u{03C3}");
}

#[test]
fn folding_merges_case_pairs() {
    assert_eq!(case_fold("MASSE", false), case_fold("Ma\u{00DF}e", false));
    assert_eq!(case_fold("\u{03A3}\u{03C2}\u{03C3}", false), "\u{03C3}\u{03C3}\u{03C3}");
    assert_eq!(case_fold("I\u{0131}", true), "\u{0131}\u{0131}");
    assert_eq!(case_fold("\u{0130}", true), "i");
}

#[test]
fn caseless_matching_definitions() {
    let a = seq("MASSE");
    let b = seq("ma\u{00DF}e");
    assert!(caseless_match(&a, &b, false));

    // canonical: decomposed and precomposed spellings match caselessly
    assert!(canonical_caseless_match(
        &seq("A\u{0308}pfel"),
        &seq("\u{00E4}PFEL"),
        false
    ));
    assert!(!canonical_caseless_match(&seq("apfel"), &seq("\u{00E4}pfel"), false));

    // compatibility: ligatures match their expansions
    assert!(compatibility_caseless_match(&seq("\u{FB00}"), &seq("FF"), false));
    assert!(!caseless_match(&seq("\u{FB00}"), &seq("FF"), false));
}

#[test]
fn checks_reject_mixed_case() {
    assert!(!is_uppercase(&seq("Hello")));
    assert!(!is_lowercase(&seq("heLlo")));
    assert!(!is_titlecase(&seq("hello World")));
    assert!(!is_case_folded(&seq("Stra\u{00DF}e")));
    assert!(is_uppercase(&seq("HELLO 42!")));
    assert!(is_lowercase(&seq("hello 42!")));
}
