use unitext::combining::{
    combining_character_sequence_count, combining_character_sequence_length,
    extended_combining_character_sequence_count, extended_combining_character_sequence_length,
    is_combining_character,
};

fn seq(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn mark_classification() {
    assert!(is_combining_character('\u{0301}'));
    assert!(is_combining_character('\u{0903}'));
    assert!(is_combining_character('\u{20DD}'));
    assert!(!is_combining_character('a'));
    assert!(!is_combining_character('\u{200D}'));
}

#[test]
fn base_with_marks() {
    let text = seq("a\u{0301}\u{0308}bc");
    assert_eq!(combining_character_sequence_length(&text), 3);
    assert_eq!(combining_character_sequence_count(&text), 3);
}

#[test]
fn zwj_and_zwnj_extend() {
    let text = seq("a\u{200D}\u{0301}b");
    assert_eq!(combining_character_sequence_length(&text), 3);
    let text = seq("\u{0915}\u{200C}\u{094D}");
    assert_eq!(combining_character_sequence_length(&text), 3);
}

#[test]
fn defective_sequence_without_base() {
    let text = seq("\u{0301}\u{0302}a");
    assert_eq!(combining_character_sequence_length(&text), 2);
    assert_eq!(combining_character_sequence_count(&text), 2);
}

#[test]
fn korean_syllable_blocks() {
    // L L V T block counts as a single extended base
    let text = seq("\u{1100}\u{1100}\u{1161}\u{11A8}\u{0301}");
    assert_eq!(extended_combining_character_sequence_length(&text), 5);
    assert_eq!(combining_character_sequence_length(&text), 1);

    // two blocks, counted separately
    let two = seq("\u{1100}\u{1161}\u{1112}\u{1161}\u{11AB}");
    assert_eq!(extended_combining_character_sequence_count(&two), 2);
}

#[test]
fn lone_trailing_jamo_is_not_a_block() {
    // T without a leading L V is an ordinary base character
    let text = seq("\u{11A8}\u{0301}");
    assert_eq!(extended_combining_character_sequence_length(&text), 2);
}

#[test]
fn empty_input() {
    assert_eq!(combining_character_sequence_length(&[]), 0);
    assert_eq!(combining_character_sequence_count(&[]), 0);
    assert_eq!(extended_combining_character_sequence_count(&[]), 0);
}
