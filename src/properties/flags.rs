//! Binary properties from PropList.txt.

use crate::{range_contains, Range};

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/flags.rs"
));

macro_rules! flag_predicate {
    ($(#[$doc:meta])* $name:ident, $table:ident) => {
        $(#[$doc])*
        #[must_use]
        pub fn $name(ch: char) -> bool {
            range_contains(ch as u32, $table)
        }
    };
}

flag_predicate!(
    /// White_Space.
    is_white_space,
    WHITE_SPACE_RANGES
);
flag_predicate!(
    /// Bidi_Control.
    is_bidi_control,
    BIDI_CONTROL_RANGES
);
flag_predicate!(
    /// Join_Control (ZWJ and ZWNJ).
    is_join_control,
    JOIN_CONTROL_RANGES
);
flag_predicate!(
    /// Dash.
    is_dash,
    DASH_RANGES
);
flag_predicate!(
    /// Hyphen.
    is_hyphen,
    HYPHEN_RANGES
);
flag_predicate!(
    /// Quotation_Mark.
    is_quotation_mark,
    QUOTATION_MARK_RANGES
);
flag_predicate!(
    /// Terminal_Punctuation.
    is_terminal_punctuation,
    TERMINAL_PUNCTUATION_RANGES
);
flag_predicate!(
    /// Other_Math.
    is_other_math,
    OTHER_MATH_RANGES
);
flag_predicate!(
    /// Hex_Digit.
    is_hex_digit,
    HEX_DIGIT_RANGES
);
flag_predicate!(
    /// ASCII_Hex_Digit.
    is_ascii_hex_digit,
    ASCII_HEX_DIGIT_RANGES
);
flag_predicate!(
    /// Other_Alphabetic.
    is_other_alphabetic,
    OTHER_ALPHABETIC_RANGES
);
flag_predicate!(
    /// Ideographic.
    is_ideographic,
    IDEOGRAPHIC_RANGES
);
flag_predicate!(
    /// Diacritic.
    is_diacritic,
    DIACRITIC_RANGES
);
flag_predicate!(
    /// Extender.
    is_extender,
    EXTENDER_RANGES
);
flag_predicate!(
    /// Other_Lowercase.
    is_other_lowercase,
    OTHER_LOWERCASE_RANGES
);
flag_predicate!(
    /// Other_Uppercase.
    is_other_uppercase,
    OTHER_UPPERCASE_RANGES
);
flag_predicate!(
    /// Noncharacter_Code_Point.
    is_noncharacter_code_point,
    NONCHARACTER_CODE_POINT_RANGES
);
flag_predicate!(
    /// Other_Grapheme_Extend.
    is_other_grapheme_extend,
    OTHER_GRAPHEME_EXTEND_RANGES
);
flag_predicate!(
    /// IDS_Binary_Operator.
    is_ids_binary_operator,
    IDS_BINARY_OPERATOR_RANGES
);
flag_predicate!(
    /// IDS_Trinary_Operator.
    is_ids_trinary_operator,
    IDS_TRINARY_OPERATOR_RANGES
);
flag_predicate!(
    /// Radical.
    is_radical,
    RADICAL_RANGES
);
flag_predicate!(
    /// Unified_Ideograph.
    is_unified_ideograph,
    UNIFIED_IDEOGRAPH_RANGES
);
flag_predicate!(
    /// Other_Default_Ignorable_Code_Point.
    is_other_default_ignorable_code_point,
    OTHER_DEFAULT_IGNORABLE_CODE_POINT_RANGES
);
flag_predicate!(
    /// Deprecated.
    is_deprecated,
    DEPRECATED_RANGES
);
flag_predicate!(
    /// Soft_Dotted.
    is_soft_dotted,
    SOFT_DOTTED_RANGES
);
flag_predicate!(
    /// Logical_Order_Exception.
    is_logical_order_exception,
    LOGICAL_ORDER_EXCEPTION_RANGES
);
flag_predicate!(
    /// Other_ID_Start.
    is_other_id_start,
    OTHER_ID_START_RANGES
);
flag_predicate!(
    /// Other_ID_Continue.
    is_other_id_continue,
    OTHER_ID_CONTINUE_RANGES
);
flag_predicate!(
    /// Sentence_Terminal.
    is_sentence_terminal,
    SENTENCE_TERMINAL_RANGES
);
flag_predicate!(
    /// Variation_Selector.
    is_variation_selector,
    VARIATION_SELECTOR_RANGES
);
flag_predicate!(
    /// Pattern_White_Space.
    is_pattern_white_space,
    PATTERN_WHITE_SPACE_RANGES
);
flag_predicate!(
    /// Pattern_Syntax.
    is_pattern_syntax,
    PATTERN_SYNTAX_RANGES
);
flag_predicate!(
    /// Prepended_Concatenation_Mark.
    is_prepended_concatenation_mark,
    PREPENDED_CONCATENATION_MARK_RANGES
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_sets() {
        assert!(is_white_space(' '));
        assert!(is_white_space('\u{00A0}'));
        assert!(!is_white_space('x'));
        assert!(is_join_control('\u{200D}'));
        assert!(is_ascii_hex_digit('f'));
        assert!(!is_ascii_hex_digit('g'));
        assert!(is_hex_digit('\u{FF21}'));
        assert!(is_noncharacter_code_point('\u{FDD0}'));
        assert!(is_noncharacter_code_point('\u{FFFE}'));
        assert!(is_variation_selector('\u{FE0F}'));
    }

    #[test]
    fn soft_dotted_letters() {
        assert!(is_soft_dotted('i'));
        assert!(is_soft_dotted('j'));
        assert!(!is_soft_dotted('\u{0131}'));
        assert!(!is_soft_dotted('I'));
    }

    #[test]
    fn pattern_sets() {
        assert!(is_pattern_syntax('+'));
        assert!(is_pattern_white_space('\t'));
        assert!(!is_pattern_syntax('a'));
    }
}
