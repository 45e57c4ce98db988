/// General_Category values, one per code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneralCategory {
    Lu,
    Ll,
    Lt,
    Lm,
    Lo,
    Mn,
    Mc,
    Me,
    Nd,
    Nl,
    No,
    Pc,
    Pd,
    Ps,
    Pe,
    Pi,
    Pf,
    Po,
    Sm,
    Sc,
    Sk,
    So,
    Zs,
    Zl,
    Zp,
    Cc,
    Cf,
    Cs,
    Co,
    Cn,
}

impl GeneralCategory {
    /// Lu, Ll or Lt.
    #[must_use]
    pub const fn is_cased_letter(self) -> bool {
        matches!(self, Self::Lu | Self::Ll | Self::Lt)
    }

    /// Any Letter category.
    #[must_use]
    pub const fn is_letter(self) -> bool {
        matches!(self, Self::Lu | Self::Ll | Self::Lt | Self::Lm | Self::Lo)
    }

    /// Any Mark category.
    #[must_use]
    pub const fn is_mark(self) -> bool {
        matches!(self, Self::Mn | Self::Mc | Self::Me)
    }

    /// Any Number category.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Nd | Self::Nl | Self::No)
    }

    /// Any Punctuation category.
    #[must_use]
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            Self::Pc | Self::Pd | Self::Ps | Self::Pe | Self::Pi | Self::Pf | Self::Po
        )
    }

    /// Any Symbol category.
    #[must_use]
    pub const fn is_symbol(self) -> bool {
        matches!(self, Self::Sm | Self::Sc | Self::Sk | Self::So)
    }

    /// Any Separator category.
    #[must_use]
    pub const fn is_separator(self) -> bool {
        matches!(self, Self::Zs | Self::Zl | Self::Zp)
    }

    /// Any Other category (controls, format, surrogates, private use,
    /// unassigned).
    #[must_use]
    pub const fn is_other(self) -> bool {
        matches!(self, Self::Cc | Self::Cf | Self::Cs | Self::Co | Self::Cn)
    }
}

/// One run of code points sharing a General_Category value.
#[derive(Clone, Copy, Debug)]
pub struct CategoryRange {
    pub start: u32,
    pub end: u32,
    pub category: GeneralCategory,
}

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/category.rs"
));

/// Look up the General_Category of a scalar. Unassigned scalars are `Cn`.
#[must_use]
pub fn general_category(ch: char) -> GeneralCategory {
    let value = ch as u32;
    let idx = GENERAL_CATEGORY_RANGES.partition_point(|range| range.end < value);
    match GENERAL_CATEGORY_RANGES.get(idx) {
        Some(range) if range.start <= value => range.category,
        _ => GeneralCategory::Cn,
    }
}

/// Lu, Ll or Lt.
#[must_use]
pub fn is_cased_letter(ch: char) -> bool {
    general_category(ch).is_cased_letter()
}

/// Any Letter category.
#[must_use]
pub fn is_letter(ch: char) -> bool {
    general_category(ch).is_letter()
}

/// Any Mark category.
#[must_use]
pub fn is_mark(ch: char) -> bool {
    general_category(ch).is_mark()
}

/// Any Number category.
#[must_use]
pub fn is_number(ch: char) -> bool {
    general_category(ch).is_number()
}

/// Any Punctuation category.
#[must_use]
pub fn is_punctuation(ch: char) -> bool {
    general_category(ch).is_punctuation()
}

/// Any Symbol category.
#[must_use]
pub fn is_symbol(ch: char) -> bool {
    general_category(ch).is_symbol()
}

/// Any Separator category.
#[must_use]
pub fn is_separator(ch: char) -> bool {
    general_category(ch).is_separator()
}

/// Any Other category.
#[must_use]
pub fn is_other(ch: char) -> bool {
    general_category(ch).is_other()
}

/// D50: a character with a Letter, Mark, Number, Punctuation, Symbol or
/// Space Separator category.
#[must_use]
pub fn is_graphic_character(ch: char) -> bool {
    is_base_character(ch) || is_mark(ch)
}

/// D51: any graphic character that is not a combining mark.
#[must_use]
pub fn is_base_character(ch: char) -> bool {
    let gc = general_category(ch);
    gc == GeneralCategory::Zs
        || gc.is_letter()
        || gc.is_number()
        || gc.is_punctuation()
        || gc.is_symbol()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_categories() {
        assert_eq!(general_category('A'), GeneralCategory::Lu);
        assert_eq!(general_category('a'), GeneralCategory::Ll);
        assert_eq!(general_category('0'), GeneralCategory::Nd);
        assert_eq!(general_category(' '), GeneralCategory::Zs);
        assert_eq!(general_category('\u{0001}'), GeneralCategory::Cc);
    }

    #[test]
    fn marks_and_unassigned() {
        assert_eq!(general_category('\u{0301}'), GeneralCategory::Mn);
        assert_eq!(general_category('\u{0903}'), GeneralCategory::Mc);
        assert_eq!(general_category('\u{0488}'), GeneralCategory::Me);
        assert_eq!(general_category('\u{0378}'), GeneralCategory::Cn);
    }

    #[test]
    fn base_and_graphic() {
        assert!(is_base_character('A'));
        assert!(is_base_character(' '));
        assert!(!is_base_character('\u{0301}'));
        assert!(is_graphic_character('\u{0301}'));
        assert!(!is_graphic_character('\u{0007}'));
    }
}
