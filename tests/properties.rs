use unitext::properties::{
    block, general_category, is_alphabetic, is_cased, is_extended_pictographic, is_letter,
    is_mark, is_script, is_soft_dotted, is_white_space, script, Block, GeneralCategory, Script,
};

#[test]
fn categories_across_planes() {
    assert_eq!(general_category('A'), GeneralCategory::Lu);
    assert_eq!(general_category('\u{00DF}'), GeneralCategory::Ll);
    assert_eq!(general_category('\u{01C5}'), GeneralCategory::Lt);
    assert_eq!(general_category('\u{4E2D}'), GeneralCategory::Lo);
    assert_eq!(general_category('\u{0301}'), GeneralCategory::Mn);
    assert_eq!(general_category('\u{20AC}'), GeneralCategory::Sc);
    assert_eq!(general_category('\u{1D400}'), GeneralCategory::Lu);
    assert_eq!(general_category('\u{E000}'), GeneralCategory::Co);
    assert_eq!(general_category('\u{10FFFF}'), GeneralCategory::Cn);
}

#[test]
fn class_predicates() {
    assert!(is_letter('x'));
    assert!(is_letter('\u{05D0}'));
    assert!(!is_letter('1'));
    assert!(is_mark('\u{0301}'));
    assert!(!is_mark('a'));
}

#[test]
fn derived_predicates() {
    assert!(is_alphabetic('a'));
    assert!(is_alphabetic('\u{AC00}'));
    assert!(!is_alphabetic('3'));
    assert!(is_cased('a'));
    assert!(!is_cased('\u{4E2D}'));
    assert!(is_soft_dotted('i'));
    assert!(is_white_space('\u{2003}'));
}

#[test]
fn script_lookup() {
    assert_eq!(script('a'), Script::Latin);
    assert_eq!(script('\u{0391}'), Script::Greek);
    assert_eq!(script('\u{05D0}'), Script::Hebrew);
    assert_eq!(script('\u{0627}'), Script::Arabic);
    assert_eq!(script('\u{3042}'), Script::Hiragana);
    assert_eq!(script('0'), Script::Common);
    assert_eq!(script('\u{0301}'), Script::Inherited);
    assert_eq!(script('\u{16A70}'), Script::Tangsa);
    assert_eq!(script('\u{10570}'), Script::Vithkuqi);
    assert_eq!(script('\u{11300}'), Script::Grantha);
}

#[test]
fn script_extension_membership() {
    assert!(is_script(Script::Latin, 'a'));
    assert!(!is_script(Script::Latin, '\u{0391}'));
    assert!(is_script(Script::Devanagari, '\u{0964}'));
    assert!(is_script(Script::Gurmukhi, '\u{0964}'));
    assert!(is_script(Script::Hiragana, '\u{30FC}'));
    assert!(is_script(Script::Katakana, '\u{30FC}'));
    assert!(!is_script(Script::Hebrew, '\u{30FC}'));
}

#[test]
fn block_lookup() {
    assert_eq!(block('z'), Block::BasicLatin);
    assert_eq!(block('\u{0101}'), Block::LatinExtendedA);
    assert_eq!(block('\u{2190}'), Block::Arrows);
    assert_eq!(block('\u{1F1FA}'), Block::EnclosedAlphanumericSupplement);
    assert_eq!(block('\u{1E290}'), Block::Toto);
    assert_eq!(block('\u{1CF00}'), Block::ZnamennyMusicalNotation);
}

#[test]
fn emoji_property() {
    assert!(is_extended_pictographic('\u{1F600}'));
    assert!(!is_extended_pictographic('#'));
}
