//! Derived core properties from DerivedCoreProperties.txt.

use crate::{range_contains, Range};

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/derived.rs"
));

macro_rules! derived_predicate {
    ($(#[$doc:meta])* $name:ident, $table:ident) => {
        $(#[$doc])*
        #[must_use]
        pub fn $name(ch: char) -> bool {
            range_contains(ch as u32, $table)
        }
    };
}

derived_predicate!(
    /// Math.
    is_math,
    MATH_RANGES
);
derived_predicate!(
    /// Alphabetic.
    is_alphabetic,
    ALPHABETIC_RANGES
);
derived_predicate!(
    /// Lowercase.
    is_lowercase,
    LOWERCASE_RANGES
);
derived_predicate!(
    /// Uppercase.
    is_uppercase,
    UPPERCASE_RANGES
);
derived_predicate!(
    /// Cased (D135).
    is_cased,
    CASED_RANGES
);
derived_predicate!(
    /// Case_Ignorable (D136).
    is_case_ignorable,
    CASE_IGNORABLE_RANGES
);
derived_predicate!(
    /// Changes_When_Lowercased.
    is_changes_when_lowercased,
    CHANGES_WHEN_LOWERCASED_RANGES
);
derived_predicate!(
    /// Changes_When_Uppercased.
    is_changes_when_uppercased,
    CHANGES_WHEN_UPPERCASED_RANGES
);
derived_predicate!(
    /// Changes_When_Titlecased.
    is_changes_when_titlecased,
    CHANGES_WHEN_TITLECASED_RANGES
);
derived_predicate!(
    /// Changes_When_Casefolded.
    is_changes_when_casefolded,
    CHANGES_WHEN_CASEFOLDED_RANGES
);
derived_predicate!(
    /// Changes_When_Casemapped.
    is_changes_when_casemapped,
    CHANGES_WHEN_CASEMAPPED_RANGES
);
derived_predicate!(
    /// ID_Start.
    is_id_start,
    ID_START_RANGES
);
derived_predicate!(
    /// ID_Continue.
    is_id_continue,
    ID_CONTINUE_RANGES
);
derived_predicate!(
    /// XID_Start.
    is_xid_start,
    XID_START_RANGES
);
derived_predicate!(
    /// XID_Continue.
    is_xid_continue,
    XID_CONTINUE_RANGES
);
derived_predicate!(
    /// Default_Ignorable_Code_Point.
    is_default_ignorable_code_point,
    DEFAULT_IGNORABLE_CODE_POINT_RANGES
);
derived_predicate!(
    /// Grapheme_Extend.
    is_grapheme_extend,
    GRAPHEME_EXTEND_RANGES
);
derived_predicate!(
    /// Grapheme_Base.
    is_grapheme_base,
    GRAPHEME_BASE_RANGES
);
derived_predicate!(
    /// Grapheme_Link.
    is_grapheme_link,
    GRAPHEME_LINK_RANGES
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casing_properties() {
        assert!(is_cased('a'));
        assert!(is_cased('A'));
        assert!(is_cased('\u{01C5}'));
        assert!(!is_cased('1'));
        assert!(is_case_ignorable('\''));
        assert!(is_case_ignorable('\u{0301}'));
        assert!(!is_case_ignorable('a'));
    }

    #[test]
    fn changes_when() {
        assert!(is_changes_when_uppercased('a'));
        assert!(!is_changes_when_uppercased('A'));
        assert!(is_changes_when_lowercased('A'));
        assert!(is_changes_when_casefolded('\u{00DF}'));
        assert!(is_changes_when_uppercased('\u{00DF}'));
    }

    #[test]
    fn identifier_properties() {
        assert!(is_xid_start('a'));
        assert!(!is_xid_start('1'));
        assert!(is_xid_continue('1'));
        assert!(is_xid_continue('_'));
        assert!(!is_xid_start('_'));
        assert!(is_id_start('\u{212E}'));
    }

    #[test]
    fn grapheme_properties() {
        assert!(is_grapheme_extend('\u{0301}'));
        assert!(is_grapheme_extend('\u{200C}'));
        assert!(!is_grapheme_extend('a'));
        assert!(is_grapheme_base('a'));
        assert!(!is_grapheme_base('\u{0301}'));
        assert!(is_grapheme_link('\u{094D}'));
    }
}
