//! Block property (Blocks.txt).

/// Block values. `NoBlock` covers code points outside every named block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    NoBlock,
    Adlam,
    AegeanNumbers,
    Ahom,
    AlchemicalSymbols,
    AlphabeticPresentationForms,
    AnatolianHieroglyphs,
    AncientGreekMusicalNotation,
    AncientGreekNumbers,
    AncientSymbols,
    Arabic,
    ArabicExtendedA,
    ArabicExtendedB,
    ArabicMathematicalAlphabeticSymbols,
    ArabicPresentationFormsA,
    ArabicPresentationFormsB,
    ArabicSupplement,
    Armenian,
    Arrows,
    Avestan,
    Balinese,
    Bamum,
    BamumSupplement,
    BasicLatin,
    BassaVah,
    Batak,
    Bengali,
    Bhaiksuki,
    BlockElements,
    Bopomofo,
    BopomofoExtended,
    BoxDrawing,
    Brahmi,
    BraillePatterns,
    Buginese,
    Buhid,
    ByzantineMusicalSymbols,
    Carian,
    CaucasianAlbanian,
    Chakma,
    Cham,
    Cherokee,
    CherokeeSupplement,
    ChessSymbols,
    Chorasmian,
    CjkCompatibility,
    CjkCompatibilityForms,
    CjkCompatibilityIdeographs,
    CjkCompatibilityIdeographsSupplement,
    CjkRadicalsSupplement,
    CjkStrokes,
    CjkSymbolsAndPunctuation,
    CjkUnifiedIdeographs,
    CjkUnifiedIdeographsExtensionA,
    CjkUnifiedIdeographsExtensionB,
    CjkUnifiedIdeographsExtensionC,
    CjkUnifiedIdeographsExtensionD,
    CjkUnifiedIdeographsExtensionE,
    CjkUnifiedIdeographsExtensionF,
    CjkUnifiedIdeographsExtensionG,
    CombiningDiacriticalMarks,
    CombiningDiacriticalMarksExtended,
    CombiningDiacriticalMarksForSymbols,
    CombiningDiacriticalMarksSupplement,
    CombiningHalfMarks,
    CommonIndicNumberForms,
    ControlPictures,
    Coptic,
    CopticEpactNumbers,
    CountingRodNumerals,
    Cuneiform,
    CuneiformNumbersAndPunctuation,
    CurrencySymbols,
    CypriotSyllabary,
    CyproMinoan,
    Cyrillic,
    CyrillicExtendedA,
    CyrillicExtendedB,
    CyrillicExtendedC,
    CyrillicSupplement,
    Deseret,
    Devanagari,
    DevanagariExtended,
    Dingbats,
    DivesAkuru,
    Dogra,
    DominoTiles,
    Duployan,
    EarlyDynasticCuneiform,
    EgyptianHieroglyphFormatControls,
    EgyptianHieroglyphs,
    Elbasan,
    Elymaic,
    Emoticons,
    EnclosedAlphanumericSupplement,
    EnclosedAlphanumerics,
    EnclosedCjkLettersAndMonths,
    EnclosedIdeographicSupplement,
    Ethiopic,
    EthiopicExtended,
    EthiopicExtendedA,
    EthiopicExtendedB,
    EthiopicSupplement,
    GeneralPunctuation,
    GeometricShapes,
    GeometricShapesExtended,
    Georgian,
    GeorgianExtended,
    GeorgianSupplement,
    Glagolitic,
    GlagoliticSupplement,
    Gothic,
    Grantha,
    GreekAndCoptic,
    GreekExtended,
    Gujarati,
    GunjalaGondi,
    Gurmukhi,
    HalfwidthAndFullwidthForms,
    HangulCompatibilityJamo,
    HangulJamo,
    HangulJamoExtendedA,
    HangulJamoExtendedB,
    HangulSyllables,
    HanifiRohingya,
    Hanunoo,
    Hatran,
    Hebrew,
    HighPrivateUseSurrogates,
    HighSurrogates,
    Hiragana,
    IdeographicDescriptionCharacters,
    IdeographicSymbolsAndPunctuation,
    ImperialAramaic,
    IndicSiyaqNumbers,
    InscriptionalPahlavi,
    InscriptionalParthian,
    IpaExtensions,
    Javanese,
    Kaithi,
    KaktovikNumerals,
    KanaExtendedA,
    KanaExtendedB,
    KanaSupplement,
    Kanbun,
    KangxiRadicals,
    Kannada,
    Katakana,
    KatakanaPhoneticExtensions,
    KayahLi,
    Kharoshthi,
    KhitanSmallScript,
    Khmer,
    KhmerSymbols,
    Khojki,
    Khudawadi,
    Lao,
    Latin1Supplement,
    LatinExtendedA,
    LatinExtendedAdditional,
    LatinExtendedB,
    LatinExtendedC,
    LatinExtendedD,
    LatinExtendedE,
    LatinExtendedF,
    LatinExtendedG,
    Lepcha,
    LetterlikeSymbols,
    Limbu,
    LinearA,
    LinearBIdeograms,
    LinearBSyllabary,
    Lisu,
    LisuSupplement,
    LowSurrogates,
    Lycian,
    Lydian,
    Mahajani,
    MahjongTiles,
    Makasar,
    Malayalam,
    Mandaic,
    Manichaean,
    Marchen,
    MasaramGondi,
    MathematicalAlphanumericSymbols,
    MathematicalOperators,
    MayanNumerals,
    Medefaidrin,
    MeeteiMayek,
    MeeteiMayekExtensions,
    MendeKikakui,
    MeroiticCursive,
    MeroiticHieroglyphs,
    Miao,
    MiscellaneousMathematicalSymbolsA,
    MiscellaneousMathematicalSymbolsB,
    MiscellaneousSymbols,
    MiscellaneousSymbolsAndArrows,
    MiscellaneousSymbolsAndPictographs,
    MiscellaneousTechnical,
    Modi,
    ModifierToneLetters,
    Mongolian,
    MongolianSupplement,
    Mro,
    Multani,
    MusicalSymbols,
    Myanmar,
    MyanmarExtendedA,
    MyanmarExtendedB,
    Nabataean,
    Nandinagari,
    NewTaiLue,
    Newa,
    Nko,
    NumberForms,
    Nushu,
    NyiakengPuachueHmong,
    Ogham,
    OlChiki,
    OldHungarian,
    OldItalic,
    OldNorthArabian,
    OldPermic,
    OldPersian,
    OldSogdian,
    OldSouthArabian,
    OldTurkic,
    OldUyghur,
    OpticalCharacterRecognition,
    Oriya,
    OrnamentalDingbats,
    Osage,
    Osmanya,
    OttomanSiyaqNumbers,
    PahawhHmong,
    Palmyrene,
    PauCinHau,
    Phagspa,
    PhaistosDisc,
    Phoenician,
    PhoneticExtensions,
    PhoneticExtensionsSupplement,
    PlayingCards,
    PrivateUseArea,
    PsalterPahlavi,
    Rejang,
    RumiNumeralSymbols,
    Runic,
    Samaritan,
    Saurashtra,
    Sharada,
    Shavian,
    ShorthandFormatControls,
    Siddham,
    Sinhala,
    SinhalaArchaicNumbers,
    SmallFormVariants,
    SmallKanaExtension,
    Sogdian,
    SoraSompeng,
    Soyombo,
    SpacingModifierLetters,
    Specials,
    Sundanese,
    SuperscriptsAndSubscripts,
    SupplementalArrowsA,
    SupplementalArrowsB,
    SupplementalArrowsC,
    SupplementalMathematicalOperators,
    SupplementalPunctuation,
    SupplementalSymbolsAndPictographs,
    SupplementaryPrivateUseAreaA,
    SupplementaryPrivateUseAreaB,
    SuttonSignwriting,
    SylotiNagri,
    SymbolsAndPictographsExtendedA,
    SymbolsForLegacyComputing,
    Syriac,
    SyriacSupplement,
    Tagalog,
    Tagbanwa,
    Tags,
    TaiLe,
    TaiTham,
    TaiViet,
    TaiXuanJingSymbols,
    Takri,
    Tamil,
    TamilSupplement,
    Tangsa,
    Tangut,
    TangutComponents,
    TangutSupplement,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    Tifinagh,
    Tirhuta,
    Toto,
    TransportAndMapSymbols,
    Ugaritic,
    UnifiedCanadianAboriginalSyllabics,
    UnifiedCanadianAboriginalSyllabicsExtendedA,
    Vai,
    VariationSelectors,
    VariationSelectorsSupplement,
    VedicExtensions,
    VerticalForms,
    Vithkuqi,
    Wancho,
    WarangCiti,
    Yezidi,
    YiRadicals,
    YiSyllables,
    YijingHexagramSymbols,
    ZanabazarSquare,
    ZnamennyMusicalNotation,
}

/// One named block of code points.
#[derive(Clone, Copy, Debug)]
pub struct BlockRange {
    pub start: u32,
    pub end: u32,
    pub block: Block,
}

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/block.rs"
));

/// Look up the Block containing a scalar.
#[must_use]
pub fn block(ch: char) -> Block {
    let value = ch as u32;
    let idx = BLOCK_RANGES.partition_point(|range| range.end < value);
    match BLOCK_RANGES.get(idx) {
        Some(range) if range.start <= value => range.block,
        _ => Block::NoBlock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups() {
        assert_eq!(block('A'), Block::BasicLatin);
        assert_eq!(block('\u{00E9}'), Block::Latin1Supplement);
        assert_eq!(block('\u{AC00}'), Block::HangulSyllables);
        assert_eq!(block('\u{1F600}'), Block::Emoticons);
    }

    #[test]
    fn recent_blocks() {
        assert_eq!(block('\u{16A70}'), Block::Tangsa);
        assert_eq!(block('\u{1E290}'), Block::Toto);
        assert_eq!(block('\u{10570}'), Block::Vithkuqi);
        assert_eq!(block('\u{10F70}'), Block::OldUyghur);
        assert_eq!(block('\u{12F90}'), Block::CyproMinoan);
        assert_eq!(block('\u{1CF00}'), Block::ZnamennyMusicalNotation);
        assert_eq!(block('\u{1D2C0}'), Block::KaktovikNumerals);
        assert_eq!(block('\u{1FB00}'), Block::SymbolsForLegacyComputing);
    }
}
