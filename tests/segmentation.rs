use expect_test::expect;
use unitext::segment::grapheme::{grapheme_count, graphemes, is_grapheme_boundary};
use unitext::segment::sentence::{is_sentence_boundary, sentence_count, sentences};
use unitext::segment::word::{is_word_boundary, word_count, words};

const CORPUS: &[&str] = &[
    "",
    "plain ascii words",
    "e\u{0301}tude \u{00E9}tude",
    "\u{1F469}\u{200D}\u{1F4BB} and \u{1F1FA}\u{1F1F8}\u{1F1EB}\u{1F1F7}",
    "line one\r\nline two\nline three",
    "He said \"Hi.\" She left.",
    "\u{1112}\u{1161}\u{11AB} \u{AD6D}\u{C5B4}",
    "price: 1,234.56 (net)",
];

fn seq(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn boundaries_hold_at_ends() {
    for text in CORPUS {
        let input = seq(text);
        for is_boundary in [is_grapheme_boundary, is_word_boundary, is_sentence_boundary] {
            assert!(is_boundary(&input, 0), "start of {text:?}");
            assert!(is_boundary(&input, input.len()), "end of {text:?}");
        }
    }
}

#[test]
fn segments_cover_the_input() {
    for text in CORPUS {
        let input = seq(text);
        for (name, count, collect) in [
            (
                "grapheme",
                grapheme_count(&input),
                graphemes(&input).collect::<Vec<_>>(),
            ),
            ("word", word_count(&input), words(&input).collect()),
            (
                "sentence",
                sentence_count(&input),
                sentences(&input).collect(),
            ),
        ] {
            assert_eq!(collect.len(), count, "{name} count for {text:?}");
            assert!(
                collect.iter().all(|segment| !segment.is_empty()),
                "{name} empty segment in {text:?}"
            );
            let rejoined: Vec<char> = collect.into_iter().flatten().copied().collect();
            assert_eq!(rejoined, input, "{name} coverage for {text:?}");
        }
    }
}

#[test]
fn grapheme_scenarios() {
    let lengths = |text: &str| -> Vec<usize> {
        let input = seq(text);
        graphemes(&input).map(<[char]>::len).collect()
    };
    assert_eq!(lengths("e\u{0301}A"), [2, 1]);
    assert_eq!(lengths("\u{1F469}\u{200D}\u{1F4BB}"), [3]);
    assert_eq!(lengths("\u{1F1FA}\u{1F1F8}"), [2]);
    assert_eq!(lengths("\u{1F1FA}\u{1F1F8}\u{1F1EB}\u{1F1F7}"), [2, 2]);
    assert_eq!(lengths("\u{1112}\u{1161}\u{11AB}"), [3]);
    assert_eq!(lengths("\r\n"), [2]);
}

#[test]
fn word_segments() {
    let split = |text: &str| -> Vec<String> {
        let input = seq(text);
        words(&input).map(|segment| segment.iter().collect()).collect()
    };
    let observed = format!(
        "{:?}",
        split("The quick (\u{201C}brown\u{201D}) fox can\u{2019}t jump 32.3 feet, right?")
    );
    expect![[r#"["The", " ", "quick", " ", "(", "“", "brown", "”", ")", " ", "fox", " ", "can’t", " ", "jump", " ", "32.3", " ", "feet", ",", " ", "right", "?"]"#]]
        .assert_eq(&observed);

    assert_eq!(split("a:b c"), ["a:b", " ", "c"]);
    assert_eq!(split("\u{AD6D}\u{C5B4} text"), ["\u{AD6D}\u{C5B4}", " ", "text"]);
}

#[test]
fn sentence_segments() {
    let split = |text: &str| -> Vec<String> {
        let input = seq(text);
        sentences(&input)
            .map(|segment| segment.iter().collect())
            .collect()
    };
    assert_eq!(
        split("He said \"Hi.\" She left."),
        ["He said \"Hi.\" ", "She left."]
    );
    assert_eq!(split("One! Two? Three."), ["One! ", "Two? ", "Three."]);
    assert_eq!(split("Is 3.4 big? e.g. yes."), ["Is 3.4 big? ", "e.g. yes."]);
    assert_eq!(split("End.\nNew start."), ["End.\n", "New start."]);
    assert_eq!(split("No break here"), ["No break here"]);
}

#[test]
fn word_boundary_positions() {
    let input = seq("ab cd");
    let positions: Vec<usize> = (0..=input.len())
        .filter(|&i| is_word_boundary(&input, i))
        .collect();
    assert_eq!(positions, [0, 2, 3, 5]);
}

#[test]
fn sentence_boundary_positions() {
    let input = seq("Hi. Bye.");
    let positions: Vec<usize> = (0..=input.len())
        .filter(|&i| is_sentence_boundary(&input, i))
        .collect();
    assert_eq!(positions, [0, 4, 8]);
}
