// Generated by `cargo run -p xtask -- unicode` from UCD 14.0.0 data. Do not edit.
pub static BLOCK_RANGES: &[BlockRange] = &[
    BlockRange { start: 0x0000, end: 0x007F, block: Block::BasicLatin },
    BlockRange { start: 0x0080, end: 0x00FF, block: Block::Latin1Supplement },
    BlockRange { start: 0x0100, end: 0x017F, block: Block::LatinExtendedA },
    BlockRange { start: 0x0180, end: 0x024F, block: Block::LatinExtendedB },
    BlockRange { start: 0x0250, end: 0x02AF, block: Block::IpaExtensions },
    BlockRange { start: 0x02B0, end: 0x02FF, block: Block::SpacingModifierLetters },
    BlockRange { start: 0x0300, end: 0x036F, block: Block::CombiningDiacriticalMarks },
    BlockRange { start: 0x0370, end: 0x03FF, block: Block::GreekAndCoptic },
    BlockRange { start: 0x0400, end: 0x04FF, block: Block::Cyrillic },
    BlockRange { start: 0x0500, end: 0x052F, block: Block::CyrillicSupplement },
    BlockRange { start: 0x0530, end: 0x058F, block: Block::Armenian },
    BlockRange { start: 0x0590, end: 0x05FF, block: Block::Hebrew },
    BlockRange { start: 0x0600, end: 0x06FF, block: Block::Arabic },
    BlockRange { start: 0x0700, end: 0x074F, block: Block::Syriac },
    BlockRange { start: 0x0750, end: 0x077F, block: Block::ArabicSupplement },
    BlockRange { start: 0x0780, end: 0x07BF, block: Block::Thaana },
    BlockRange { start: 0x07C0, end: 0x07FF, block: Block::Nko },
    BlockRange { start: 0x0800, end: 0x083F, block: Block::Samaritan },
    BlockRange { start: 0x0840, end: 0x085F, block: Block::Mandaic },
    BlockRange { start: 0x0860, end: 0x086F, block: Block::SyriacSupplement },
    BlockRange { start: 0x0870, end: 0x089F, block: Block::ArabicExtendedB },
    BlockRange { start: 0x08A0, end: 0x08FF, block: Block::ArabicExtendedA },
    BlockRange { start: 0x0900, end: 0x097F, block: Block::Devanagari },
    BlockRange { start: 0x0980, end: 0x09FF, block: Block::Bengali },
    BlockRange { start: 0x0A00, end: 0x0A7F, block: Block::Gurmukhi },
    BlockRange { start: 0x0A80, end: 0x0AFF, block: Block::Gujarati },
    BlockRange { start: 0x0B00, end: 0x0B7F, block: Block::Oriya },
    BlockRange { start: 0x0B80, end: 0x0BFF, block: Block::Tamil },
    BlockRange { start: 0x0C00, end: 0x0C7F, block: Block::Telugu },
    BlockRange { start: 0x0C80, end: 0x0CFF, block: Block::Kannada },
    BlockRange { start: 0x0D00, end: 0x0D7F, block: Block::Malayalam },
    BlockRange { start: 0x0D80, end: 0x0DFF, block: Block::Sinhala },
    BlockRange { start: 0x0E00, end: 0x0E7F, block: Block::Thai },
    BlockRange { start: 0x0E80, end: 0x0EFF, block: Block::Lao },
    BlockRange { start: 0x0F00, end: 0x0FFF, block: Block::Tibetan },
    BlockRange { start: 0x1000, end: 0x109F, block: Block::Myanmar },
    BlockRange { start: 0x10A0, end: 0x10FF, block: Block::Georgian },
    BlockRange { start: 0x1100, end: 0x11FF, block: Block::HangulJamo },
    BlockRange { start: 0x1200, end: 0x137F, block: Block::Ethiopic },
    BlockRange { start: 0x1380, end: 0x139F, block: Block::EthiopicSupplement },
    BlockRange { start: 0x13A0, end: 0x13FF, block: Block::Cherokee },
    BlockRange { start: 0x1400, end: 0x167F, block: Block::UnifiedCanadianAboriginalSyllabics },
    BlockRange { start: 0x1680, end: 0x169F, block: Block::Ogham },
    BlockRange { start: 0x16A0, end: 0x16FF, block: Block::Runic },
    BlockRange { start: 0x1700, end: 0x171F, block: Block::Tagalog },
    BlockRange { start: 0x1720, end: 0x173F, block: Block::Hanunoo },
    BlockRange { start: 0x1740, end: 0x175F, block: Block::Buhid },
    BlockRange { start: 0x1760, end: 0x177F, block: Block::Tagbanwa },
    BlockRange { start: 0x1780, end: 0x17FF, block: Block::Khmer },
    BlockRange { start: 0x1800, end: 0x18AF, block: Block::Mongolian },
    BlockRange { start: 0x1900, end: 0x194F, block: Block::Limbu },
    BlockRange { start: 0x1950, end: 0x197F, block: Block::TaiLe },
    BlockRange { start: 0x1980, end: 0x19DF, block: Block::NewTaiLue },
    BlockRange { start: 0x19E0, end: 0x19FF, block: Block::KhmerSymbols },
    BlockRange { start: 0x1A00, end: 0x1A1F, block: Block::Buginese },
    BlockRange { start: 0x1A20, end: 0x1AAF, block: Block::TaiTham },
    BlockRange { start: 0x1AB0, end: 0x1AFF, block: Block::CombiningDiacriticalMarksExtended },
    BlockRange { start: 0x1B00, end: 0x1B7F, block: Block::Balinese },
    BlockRange { start: 0x1B80, end: 0x1BBF, block: Block::Sundanese },
    BlockRange { start: 0x1BC0, end: 0x1BFF, block: Block::Batak },
    BlockRange { start: 0x1C00, end: 0x1C4F, block: Block::Lepcha },
    BlockRange { start: 0x1C50, end: 0x1C7F, block: Block::OlChiki },
    BlockRange { start: 0x1C80, end: 0x1C8F, block: Block::CyrillicExtendedC },
    BlockRange { start: 0x1C90, end: 0x1CBF, block: Block::GeorgianExtended },
    BlockRange { start: 0x1CD0, end: 0x1CFF, block: Block::VedicExtensions },
    BlockRange { start: 0x1D00, end: 0x1D7F, block: Block::PhoneticExtensions },
    BlockRange { start: 0x1D80, end: 0x1DBF, block: Block::PhoneticExtensionsSupplement },
    BlockRange { start: 0x1DC0, end: 0x1DFF, block: Block::CombiningDiacriticalMarksSupplement },
    BlockRange { start: 0x1E00, end: 0x1EFF, block: Block::LatinExtendedAdditional },
    BlockRange { start: 0x1F00, end: 0x1FFF, block: Block::GreekExtended },
    BlockRange { start: 0x2000, end: 0x206F, block: Block::GeneralPunctuation },
    BlockRange { start: 0x2070, end: 0x209F, block: Block::SuperscriptsAndSubscripts },
    BlockRange { start: 0x20A0, end: 0x20CF, block: Block::CurrencySymbols },
    BlockRange { start: 0x20D0, end: 0x20FF, block: Block::CombiningDiacriticalMarksForSymbols },
    BlockRange { start: 0x2100, end: 0x214F, block: Block::LetterlikeSymbols },
    BlockRange { start: 0x2150, end: 0x218F, block: Block::NumberForms },
    BlockRange { start: 0x2190, end: 0x21FF, block: Block::Arrows },
    BlockRange { start: 0x2200, end: 0x22FF, block: Block::MathematicalOperators },
    BlockRange { start: 0x2300, end: 0x23FF, block: Block::MiscellaneousTechnical },
    BlockRange { start: 0x2400, end: 0x243F, block: Block::ControlPictures },
    BlockRange { start: 0x2440, end: 0x245F, block: Block::OpticalCharacterRecognition },
    BlockRange { start: 0x2460, end: 0x24FF, block: Block::EnclosedAlphanumerics },
    BlockRange { start: 0x2500, end: 0x257F, block: Block::BoxDrawing },
    BlockRange { start: 0x2580, end: 0x259F, block: Block::BlockElements },
    BlockRange { start: 0x25A0, end: 0x25FF, block: Block::GeometricShapes },
    BlockRange { start: 0x2600, end: 0x26FF, block: Block::MiscellaneousSymbols },
    BlockRange { start: 0x2700, end: 0x27BF, block: Block::Dingbats },
    BlockRange { start: 0x27C0, end: 0x27EF, block: Block::MiscellaneousMathematicalSymbolsA },
    BlockRange { start: 0x27F0, end: 0x27FF, block: Block::SupplementalArrowsA },
    BlockRange { start: 0x2800, end: 0x28FF, block: Block::BraillePatterns },
    BlockRange { start: 0x2900, end: 0x297F, block: Block::SupplementalArrowsB },
    BlockRange { start: 0x2980, end: 0x29FF, block: Block::MiscellaneousMathematicalSymbolsB },
    BlockRange { start: 0x2A00, end: 0x2AFF, block: Block::SupplementalMathematicalOperators },
    BlockRange { start: 0x2B00, end: 0x2BFF, block: Block::MiscellaneousSymbolsAndArrows },
    BlockRange { start: 0x2C00, end: 0x2C5F, block: Block::Glagolitic },
    BlockRange { start: 0x2C60, end: 0x2C7F, block: Block::LatinExtendedC },
    BlockRange { start: 0x2C80, end: 0x2CFF, block: Block::Coptic },
    BlockRange { start: 0x2D00, end: 0x2D2F, block: Block::GeorgianSupplement },
    BlockRange { start: 0x2D30, end: 0x2D7F, block: Block::Tifinagh },
    BlockRange { start: 0x2D80, end: 0x2DDF, block: Block::EthiopicExtended },
    BlockRange { start: 0x2DE0, end: 0x2DFF, block: Block::CyrillicExtendedA },
    BlockRange { start: 0x2E00, end: 0x2E7F, block: Block::SupplementalPunctuation },
    BlockRange { start: 0x2E80, end: 0x2EFF, block: Block::CjkRadicalsSupplement },
    BlockRange { start: 0x2F00, end: 0x2FDF, block: Block::KangxiRadicals },
    BlockRange { start: 0x2FF0, end: 0x2FFF, block: Block::IdeographicDescriptionCharacters },
    BlockRange { start: 0x3000, end: 0x303F, block: Block::CjkSymbolsAndPunctuation },
    BlockRange { start: 0x3040, end: 0x309F, block: Block::Hiragana },
    BlockRange { start: 0x30A0, end: 0x30FF, block: Block::Katakana },
    BlockRange { start: 0x3100, end: 0x312F, block: Block::Bopomofo },
    BlockRange { start: 0x3130, end: 0x318F, block: Block::HangulCompatibilityJamo },
    BlockRange { start: 0x3190, end: 0x319F, block: Block::Kanbun },
    BlockRange { start: 0x31A0, end: 0x31BF, block: Block::BopomofoExtended },
    BlockRange { start: 0x31C0, end: 0x31EF, block: Block::CjkStrokes },
    BlockRange { start: 0x31F0, end: 0x31FF, block: Block::KatakanaPhoneticExtensions },
    BlockRange { start: 0x3200, end: 0x32FF, block: Block::EnclosedCjkLettersAndMonths },
    BlockRange { start: 0x3300, end: 0x33FF, block: Block::CjkCompatibility },
    BlockRange { start: 0x3400, end: 0x4DBF, block: Block::CjkUnifiedIdeographsExtensionA },
    BlockRange { start: 0x4DC0, end: 0x4DFF, block: Block::YijingHexagramSymbols },
    BlockRange { start: 0x4E00, end: 0x9FFF, block: Block::CjkUnifiedIdeographs },
    BlockRange { start: 0xA000, end: 0xA48F, block: Block::YiSyllables },
    BlockRange { start: 0xA490, end: 0xA4CF, block: Block::YiRadicals },
    BlockRange { start: 0xA4D0, end: 0xA4FF, block: Block::Lisu },
    BlockRange { start: 0xA500, end: 0xA63F, block: Block::Vai },
    BlockRange { start: 0xA640, end: 0xA69F, block: Block::CyrillicExtendedB },
    BlockRange { start: 0xA6A0, end: 0xA6FF, block: Block::Bamum },
    BlockRange { start: 0xA700, end: 0xA71F, block: Block::ModifierToneLetters },
    BlockRange { start: 0xA720, end: 0xA7FF, block: Block::LatinExtendedD },
    BlockRange { start: 0xA800, end: 0xA82F, block: Block::SylotiNagri },
    BlockRange { start: 0xA830, end: 0xA83F, block: Block::CommonIndicNumberForms },
    BlockRange { start: 0xA840, end: 0xA87F, block: Block::Phagspa },
    BlockRange { start: 0xA880, end: 0xA8DF, block: Block::Saurashtra },
    BlockRange { start: 0xA8E0, end: 0xA8FF, block: Block::DevanagariExtended },
    BlockRange { start: 0xA900, end: 0xA92F, block: Block::KayahLi },
    BlockRange { start: 0xA930, end: 0xA95F, block: Block::Rejang },
    BlockRange { start: 0xA960, end: 0xA97F, block: Block::HangulJamoExtendedA },
    BlockRange { start: 0xA980, end: 0xA9DF, block: Block::Javanese },
    BlockRange { start: 0xA9E0, end: 0xA9FF, block: Block::MyanmarExtendedB },
    BlockRange { start: 0xAA00, end: 0xAA5F, block: Block::Cham },
    BlockRange { start: 0xAA60, end: 0xAA7F, block: Block::MyanmarExtendedA },
    BlockRange { start: 0xAA80, end: 0xAADF, block: Block::TaiViet },
    BlockRange { start: 0xAAE0, end: 0xAAFF, block: Block::MeeteiMayekExtensions },
    BlockRange { start: 0xAB00, end: 0xAB2F, block: Block::EthiopicExtendedA },
    BlockRange { start: 0xAB30, end: 0xAB6F, block: Block::LatinExtendedE },
    BlockRange { start: 0xAB70, end: 0xABBF, block: Block::CherokeeSupplement },
    BlockRange { start: 0xABC0, end: 0xABFF, block: Block::MeeteiMayek },
    BlockRange { start: 0xAC00, end: 0xD7AF, block: Block::HangulSyllables },
    BlockRange { start: 0xD7B0, end: 0xD7FF, block: Block::HangulJamoExtendedB },
    BlockRange { start: 0xD800, end: 0xDB7F, block: Block::HighSurrogates },
    BlockRange { start: 0xDB80, end: 0xDBFF, block: Block::HighPrivateUseSurrogates },
    BlockRange { start: 0xDC00, end: 0xDFFF, block: Block::LowSurrogates },
    BlockRange { start: 0xE000, end: 0xF8FF, block: Block::PrivateUseArea },
    BlockRange { start: 0xF900, end: 0xFAFF, block: Block::CjkCompatibilityIdeographs },
    BlockRange { start: 0xFB00, end: 0xFB4F, block: Block::AlphabeticPresentationForms },
    BlockRange { start: 0xFB50, end: 0xFDFF, block: Block::ArabicPresentationFormsA },
    BlockRange { start: 0xFE00, end: 0xFE0F, block: Block::VariationSelectors },
    BlockRange { start: 0xFE10, end: 0xFE1F, block: Block::VerticalForms },
    BlockRange { start: 0xFE20, end: 0xFE2F, block: Block::CombiningHalfMarks },
    BlockRange { start: 0xFE30, end: 0xFE4F, block: Block::CjkCompatibilityForms },
    BlockRange { start: 0xFE50, end: 0xFE6F, block: Block::SmallFormVariants },
    BlockRange { start: 0xFE70, end: 0xFEFF, block: Block::ArabicPresentationFormsB },
    BlockRange { start: 0xFF00, end: 0xFFEF, block: Block::HalfwidthAndFullwidthForms },
    BlockRange { start: 0xFFF0, end: 0xFFFF, block: Block::Specials },
    BlockRange { start: 0x10000, end: 0x1007F, block: Block::LinearBSyllabary },
    BlockRange { start: 0x10080, end: 0x100FF, block: Block::LinearBIdeograms },
    BlockRange { start: 0x10100, end: 0x1013F, block: Block::AegeanNumbers },
    BlockRange { start: 0x10140, end: 0x1018F, block: Block::AncientGreekNumbers },
    BlockRange { start: 0x10190, end: 0x101CF, block: Block::AncientSymbols },
    BlockRange { start: 0x101D0, end: 0x101FF, block: Block::PhaistosDisc },
    BlockRange { start: 0x10280, end: 0x1029F, block: Block::Lycian },
    BlockRange { start: 0x102A0, end: 0x102DF, block: Block::Carian },
    BlockRange { start: 0x102E0, end: 0x102FF, block: Block::CopticEpactNumbers },
    BlockRange { start: 0x10300, end: 0x1032F, block: Block::OldItalic },
    BlockRange { start: 0x10330, end: 0x1034F, block: Block::Gothic },
    BlockRange { start: 0x10350, end: 0x1037F, block: Block::OldPermic },
    BlockRange { start: 0x10380, end: 0x1039F, block: Block::Ugaritic },
    BlockRange { start: 0x103A0, end: 0x103DF, block: Block::OldPersian },
    BlockRange { start: 0x10400, end: 0x1044F, block: Block::Deseret },
    BlockRange { start: 0x10450, end: 0x1047F, block: Block::Shavian },
    BlockRange { start: 0x10480, end: 0x104AF, block: Block::Osmanya },
    BlockRange { start: 0x104B0, end: 0x104FF, block: Block::Osage },
    BlockRange { start: 0x10500, end: 0x1052F, block: Block::Elbasan },
    BlockRange { start: 0x10530, end: 0x1056F, block: Block::CaucasianAlbanian },
    BlockRange { start: 0x10570, end: 0x105BF, block: Block::Vithkuqi },
    BlockRange { start: 0x10600, end: 0x1077F, block: Block::LinearA },
    BlockRange { start: 0x10780, end: 0x107BF, block: Block::LatinExtendedF },
    BlockRange { start: 0x10800, end: 0x1083F, block: Block::CypriotSyllabary },
    BlockRange { start: 0x10840, end: 0x1085F, block: Block::ImperialAramaic },
    BlockRange { start: 0x10860, end: 0x1087F, block: Block::Palmyrene },
    BlockRange { start: 0x10880, end: 0x108AF, block: Block::Nabataean },
    BlockRange { start: 0x108E0, end: 0x108FF, block: Block::Hatran },
    BlockRange { start: 0x10900, end: 0x1091F, block: Block::Phoenician },
    BlockRange { start: 0x10920, end: 0x1093F, block: Block::Lydian },
    BlockRange { start: 0x10980, end: 0x1099F, block: Block::MeroiticHieroglyphs },
    BlockRange { start: 0x109A0, end: 0x109FF, block: Block::MeroiticCursive },
    BlockRange { start: 0x10A00, end: 0x10A5F, block: Block::Kharoshthi },
    BlockRange { start: 0x10A60, end: 0x10A7F, block: Block::OldSouthArabian },
    BlockRange { start: 0x10A80, end: 0x10A9F, block: Block::OldNorthArabian },
    BlockRange { start: 0x10AC0, end: 0x10AFF, block: Block::Manichaean },
    BlockRange { start: 0x10B00, end: 0x10B3F, block: Block::Avestan },
    BlockRange { start: 0x10B40, end: 0x10B5F, block: Block::InscriptionalParthian },
    BlockRange { start: 0x10B60, end: 0x10B7F, block: Block::InscriptionalPahlavi },
    BlockRange { start: 0x10B80, end: 0x10BAF, block: Block::PsalterPahlavi },
    BlockRange { start: 0x10C00, end: 0x10C4F, block: Block::OldTurkic },
    BlockRange { start: 0x10C80, end: 0x10CFF, block: Block::OldHungarian },
    BlockRange { start: 0x10D00, end: 0x10D3F, block: Block::HanifiRohingya },
    BlockRange { start: 0x10E60, end: 0x10E7F, block: Block::RumiNumeralSymbols },
    BlockRange { start: 0x10E80, end: 0x10EBF, block: Block::Yezidi },
    BlockRange { start: 0x10F00, end: 0x10F2F, block: Block::OldSogdian },
    BlockRange { start: 0x10F30, end: 0x10F6F, block: Block::Sogdian },
    BlockRange { start: 0x10F70, end: 0x10FAF, block: Block::OldUyghur },
    BlockRange { start: 0x10FB0, end: 0x10FDF, block: Block::Chorasmian },
    BlockRange { start: 0x10FE0, end: 0x10FFF, block: Block::Elymaic },
    BlockRange { start: 0x11000, end: 0x1107F, block: Block::Brahmi },
    BlockRange { start: 0x11080, end: 0x110CF, block: Block::Kaithi },
    BlockRange { start: 0x110D0, end: 0x110FF, block: Block::SoraSompeng },
    BlockRange { start: 0x11100, end: 0x1114F, block: Block::Chakma },
    BlockRange { start: 0x11150, end: 0x1117F, block: Block::Mahajani },
    BlockRange { start: 0x11180, end: 0x111DF, block: Block::Sharada },
    BlockRange { start: 0x111E0, end: 0x111FF, block: Block::SinhalaArchaicNumbers },
    BlockRange { start: 0x11200, end: 0x1124F, block: Block::Khojki },
    BlockRange { start: 0x11280, end: 0x112AF, block: Block::Multani },
    BlockRange { start: 0x112B0, end: 0x112FF, block: Block::Khudawadi },
    BlockRange { start: 0x11300, end: 0x1137F, block: Block::Grantha },
    BlockRange { start: 0x11400, end: 0x1147F, block: Block::Newa },
    BlockRange { start: 0x11480, end: 0x114DF, block: Block::Tirhuta },
    BlockRange { start: 0x11580, end: 0x115FF, block: Block::Siddham },
    BlockRange { start: 0x11600, end: 0x1165F, block: Block::Modi },
    BlockRange { start: 0x11660, end: 0x1167F, block: Block::MongolianSupplement },
    BlockRange { start: 0x11680, end: 0x116CF, block: Block::Takri },
    BlockRange { start: 0x11700, end: 0x1174F, block: Block::Ahom },
    BlockRange { start: 0x11800, end: 0x1184F, block: Block::Dogra },
    BlockRange { start: 0x118A0, end: 0x118FF, block: Block::WarangCiti },
    BlockRange { start: 0x11900, end: 0x1195F, block: Block::DivesAkuru },
    BlockRange { start: 0x119A0, end: 0x119FF, block: Block::Nandinagari },
    BlockRange { start: 0x11A00, end: 0x11A4F, block: Block::ZanabazarSquare },
    BlockRange { start: 0x11A50, end: 0x11AAF, block: Block::Soyombo },
    BlockRange { start: 0x11AB0, end: 0x11ABF, block: Block::UnifiedCanadianAboriginalSyllabicsExtendedA },
    BlockRange { start: 0x11AC0, end: 0x11AFF, block: Block::PauCinHau },
    BlockRange { start: 0x11C00, end: 0x11C6F, block: Block::Bhaiksuki },
    BlockRange { start: 0x11C70, end: 0x11CBF, block: Block::Marchen },
    BlockRange { start: 0x11D00, end: 0x11D5F, block: Block::MasaramGondi },
    BlockRange { start: 0x11D60, end: 0x11DAF, block: Block::GunjalaGondi },
    BlockRange { start: 0x11EE0, end: 0x11EFF, block: Block::Makasar },
    BlockRange { start: 0x11FB0, end: 0x11FBF, block: Block::LisuSupplement },
    BlockRange { start: 0x11FC0, end: 0x11FFF, block: Block::TamilSupplement },
    BlockRange { start: 0x12000, end: 0x123FF, block: Block::Cuneiform },
    BlockRange { start: 0x12400, end: 0x1247F, block: Block::CuneiformNumbersAndPunctuation },
    BlockRange { start: 0x12480, end: 0x1254F, block: Block::EarlyDynasticCuneiform },
    BlockRange { start: 0x12F90, end: 0x12FFF, block: Block::CyproMinoan },
    BlockRange { start: 0x13000, end: 0x1342F, block: Block::EgyptianHieroglyphs },
    BlockRange { start: 0x13430, end: 0x1343F, block: Block::EgyptianHieroglyphFormatControls },
    BlockRange { start: 0x14400, end: 0x1467F, block: Block::AnatolianHieroglyphs },
    BlockRange { start: 0x16800, end: 0x16A3F, block: Block::BamumSupplement },
    BlockRange { start: 0x16A40, end: 0x16A6F, block: Block::Mro },
    BlockRange { start: 0x16A70, end: 0x16ACF, block: Block::Tangsa },
    BlockRange { start: 0x16AD0, end: 0x16AFF, block: Block::BassaVah },
    BlockRange { start: 0x16B00, end: 0x16B8F, block: Block::PahawhHmong },
    BlockRange { start: 0x16E40, end: 0x16E9F, block: Block::Medefaidrin },
    BlockRange { start: 0x16F00, end: 0x16F9F, block: Block::Miao },
    BlockRange { start: 0x16FE0, end: 0x16FFF, block: Block::IdeographicSymbolsAndPunctuation },
    BlockRange { start: 0x17000, end: 0x187FF, block: Block::Tangut },
    BlockRange { start: 0x18800, end: 0x18AFF, block: Block::TangutComponents },
    BlockRange { start: 0x18B00, end: 0x18CFF, block: Block::KhitanSmallScript },
    BlockRange { start: 0x18D00, end: 0x18D7F, block: Block::TangutSupplement },
    BlockRange { start: 0x1AFF0, end: 0x1AFFF, block: Block::KanaExtendedB },
    BlockRange { start: 0x1B000, end: 0x1B0FF, block: Block::KanaSupplement },
    BlockRange { start: 0x1B100, end: 0x1B12F, block: Block::KanaExtendedA },
    BlockRange { start: 0x1B130, end: 0x1B16F, block: Block::SmallKanaExtension },
    BlockRange { start: 0x1B170, end: 0x1B2FF, block: Block::Nushu },
    BlockRange { start: 0x1BC00, end: 0x1BC9F, block: Block::Duployan },
    BlockRange { start: 0x1BCA0, end: 0x1BCAF, block: Block::ShorthandFormatControls },
    BlockRange { start: 0x1CF00, end: 0x1CFCF, block: Block::ZnamennyMusicalNotation },
    BlockRange { start: 0x1D000, end: 0x1D0FF, block: Block::ByzantineMusicalSymbols },
    BlockRange { start: 0x1D100, end: 0x1D1FF, block: Block::MusicalSymbols },
    BlockRange { start: 0x1D200, end: 0x1D24F, block: Block::AncientGreekMusicalNotation },
    BlockRange { start: 0x1D2C0, end: 0x1D2DF, block: Block::KaktovikNumerals },
    BlockRange { start: 0x1D2E0, end: 0x1D2FF, block: Block::MayanNumerals },
    BlockRange { start: 0x1D300, end: 0x1D35F, block: Block::TaiXuanJingSymbols },
    BlockRange { start: 0x1D360, end: 0x1D37F, block: Block::CountingRodNumerals },
    BlockRange { start: 0x1D400, end: 0x1D7FF, block: Block::MathematicalAlphanumericSymbols },
    BlockRange { start: 0x1D800, end: 0x1DAAF, block: Block::SuttonSignwriting },
    BlockRange { start: 0x1DF00, end: 0x1DFFF, block: Block::LatinExtendedG },
    BlockRange { start: 0x1E000, end: 0x1E02F, block: Block::GlagoliticSupplement },
    BlockRange { start: 0x1E100, end: 0x1E14F, block: Block::NyiakengPuachueHmong },
    BlockRange { start: 0x1E290, end: 0x1E2BF, block: Block::Toto },
    BlockRange { start: 0x1E2C0, end: 0x1E2FF, block: Block::Wancho },
    BlockRange { start: 0x1E7E0, end: 0x1E7FF, block: Block::EthiopicExtendedB },
    BlockRange { start: 0x1E800, end: 0x1E8DF, block: Block::MendeKikakui },
    BlockRange { start: 0x1E900, end: 0x1E95F, block: Block::Adlam },
    BlockRange { start: 0x1EC70, end: 0x1ECBF, block: Block::IndicSiyaqNumbers },
    BlockRange { start: 0x1ED00, end: 0x1ED4F, block: Block::OttomanSiyaqNumbers },
    BlockRange { start: 0x1EE00, end: 0x1EEFF, block: Block::ArabicMathematicalAlphabeticSymbols },
    BlockRange { start: 0x1F000, end: 0x1F02F, block: Block::MahjongTiles },
    BlockRange { start: 0x1F030, end: 0x1F09F, block: Block::DominoTiles },
    BlockRange { start: 0x1F0A0, end: 0x1F0FF, block: Block::PlayingCards },
    BlockRange { start: 0x1F100, end: 0x1F1FF, block: Block::EnclosedAlphanumericSupplement },
    BlockRange { start: 0x1F200, end: 0x1F2FF, block: Block::EnclosedIdeographicSupplement },
    BlockRange { start: 0x1F300, end: 0x1F5FF, block: Block::MiscellaneousSymbolsAndPictographs },
    BlockRange { start: 0x1F600, end: 0x1F64F, block: Block::Emoticons },
    BlockRange { start: 0x1F650, end: 0x1F67F, block: Block::OrnamentalDingbats },
    BlockRange { start: 0x1F680, end: 0x1F6FF, block: Block::TransportAndMapSymbols },
    BlockRange { start: 0x1F700, end: 0x1F77F, block: Block::AlchemicalSymbols },
    BlockRange { start: 0x1F780, end: 0x1F7FF, block: Block::GeometricShapesExtended },
    BlockRange { start: 0x1F800, end: 0x1F8FF, block: Block::SupplementalArrowsC },
    BlockRange { start: 0x1F900, end: 0x1F9FF, block: Block::SupplementalSymbolsAndPictographs },
    BlockRange { start: 0x1FA00, end: 0x1FA6F, block: Block::ChessSymbols },
    BlockRange { start: 0x1FA70, end: 0x1FAFF, block: Block::SymbolsAndPictographsExtendedA },
    BlockRange { start: 0x1FB00, end: 0x1FBFF, block: Block::SymbolsForLegacyComputing },
    BlockRange { start: 0x20000, end: 0x2A6DF, block: Block::CjkUnifiedIdeographsExtensionB },
    BlockRange { start: 0x2A700, end: 0x2B73F, block: Block::CjkUnifiedIdeographsExtensionC },
    BlockRange { start: 0x2B740, end: 0x2B81F, block: Block::CjkUnifiedIdeographsExtensionD },
    BlockRange { start: 0x2B820, end: 0x2CEAF, block: Block::CjkUnifiedIdeographsExtensionE },
    BlockRange { start: 0x2CEB0, end: 0x2EBEF, block: Block::CjkUnifiedIdeographsExtensionF },
    BlockRange { start: 0x2F800, end: 0x2FA1F, block: Block::CjkCompatibilityIdeographsSupplement },
    BlockRange { start: 0x30000, end: 0x3134F, block: Block::CjkUnifiedIdeographsExtensionG },
    BlockRange { start: 0xE0000, end: 0xE007F, block: Block::Tags },
    BlockRange { start: 0xE0100, end: 0xE01EF, block: Block::VariationSelectorsSupplement },
    BlockRange { start: 0xF0000, end: 0xFFFFF, block: Block::SupplementaryPrivateUseAreaA },
    BlockRange { start: 0x100000, end: 0x10FFFF, block: Block::SupplementaryPrivateUseAreaB },
];
