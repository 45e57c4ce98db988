// Generated by `cargo run -p xtask -- unicode` from UCD 14.0.0 data. Do not edit.
pub static SCRIPT_RANGES: &[ScriptRange] = &[
    ScriptRange { start: 0x0000, end: 0x0040, script: Script::Common },
    ScriptRange { start: 0x0041, end: 0x005A, script: Script::Latin },
    ScriptRange { start: 0x005B, end: 0x0060, script: Script::Common },
    ScriptRange { start: 0x0061, end: 0x007A, script: Script::Latin },
    ScriptRange { start: 0x007B, end: 0x00A9, script: Script::Common },
    ScriptRange { start: 0x00AA, end: 0x00AA, script: Script::Latin },
    ScriptRange { start: 0x00AB, end: 0x00B9, script: Script::Common },
    ScriptRange { start: 0x00BA, end: 0x00BA, script: Script::Latin },
    ScriptRange { start: 0x00BB, end: 0x00BF, script: Script::Common },
    ScriptRange { start: 0x00C0, end: 0x00D6, script: Script::Latin },
    ScriptRange { start: 0x00D7, end: 0x00D7, script: Script::Common },
    ScriptRange { start: 0x00D8, end: 0x00F6, script: Script::Latin },
    ScriptRange { start: 0x00F7, end: 0x00F7, script: Script::Common },
    ScriptRange { start: 0x00F8, end: 0x02B8, script: Script::Latin },
    ScriptRange { start: 0x02B9, end: 0x02DF, script: Script::Common },
    ScriptRange { start: 0x02E0, end: 0x02E4, script: Script::Latin },
    ScriptRange { start: 0x02E5, end: 0x02E9, script: Script::Common },
    ScriptRange { start: 0x02EA, end: 0x02EB, script: Script::Bopomofo },
    ScriptRange { start: 0x02EC, end: 0x02FF, script: Script::Common },
    ScriptRange { start: 0x0300, end: 0x036F, script: Script::Inherited },
    ScriptRange { start: 0x0370, end: 0x0373, script: Script::Greek },
    ScriptRange { start: 0x0374, end: 0x0374, script: Script::Common },
    ScriptRange { start: 0x0375, end: 0x0377, script: Script::Greek },
    ScriptRange { start: 0x037A, end: 0x037D, script: Script::Greek },
    ScriptRange { start: 0x037E, end: 0x037E, script: Script::Common },
    ScriptRange { start: 0x037F, end: 0x037F, script: Script::Greek },
    ScriptRange { start: 0x0384, end: 0x0384, script: Script::Greek },
    ScriptRange { start: 0x0385, end: 0x0385, script: Script::Common },
    ScriptRange { start: 0x0386, end: 0x0386, script: Script::Greek },
    ScriptRange { start: 0x0387, end: 0x0387, script: Script::Common },
    ScriptRange { start: 0x0388, end: 0x03E1, script: Script::Greek },
    ScriptRange { start: 0x03E2, end: 0x03EF, script: Script::Coptic },
    ScriptRange { start: 0x03F0, end: 0x03FF, script: Script::Greek },
    ScriptRange { start: 0x0400, end: 0x0484, script: Script::Cyrillic },
    ScriptRange { start: 0x0485, end: 0x0486, script: Script::Inherited },
    ScriptRange { start: 0x0487, end: 0x052F, script: Script::Cyrillic },
    ScriptRange { start: 0x0531, end: 0x058A, script: Script::Armenian },
    ScriptRange { start: 0x058D, end: 0x058F, script: Script::Armenian },
    ScriptRange { start: 0x0591, end: 0x05F4, script: Script::Hebrew },
    ScriptRange { start: 0x0600, end: 0x0604, script: Script::Arabic },
    ScriptRange { start: 0x0605, end: 0x0605, script: Script::Common },
    ScriptRange { start: 0x0606, end: 0x060B, script: Script::Arabic },
    ScriptRange { start: 0x060C, end: 0x060C, script: Script::Common },
    ScriptRange { start: 0x060D, end: 0x061A, script: Script::Arabic },
    ScriptRange { start: 0x061B, end: 0x061B, script: Script::Common },
    ScriptRange { start: 0x061C, end: 0x061E, script: Script::Arabic },
    ScriptRange { start: 0x061F, end: 0x061F, script: Script::Common },
    ScriptRange { start: 0x0620, end: 0x063F, script: Script::Arabic },
    ScriptRange { start: 0x0640, end: 0x0640, script: Script::Common },
    ScriptRange { start: 0x0641, end: 0x064A, script: Script::Arabic },
    ScriptRange { start: 0x064B, end: 0x0655, script: Script::Inherited },
    ScriptRange { start: 0x0656, end: 0x066F, script: Script::Arabic },
    ScriptRange { start: 0x0670, end: 0x0670, script: Script::Inherited },
    ScriptRange { start: 0x0671, end: 0x06DC, script: Script::Arabic },
    ScriptRange { start: 0x06DD, end: 0x06DD, script: Script::Common },
    ScriptRange { start: 0x06DE, end: 0x06FF, script: Script::Arabic },
    ScriptRange { start: 0x0700, end: 0x074F, script: Script::Syriac },
    ScriptRange { start: 0x0750, end: 0x077F, script: Script::Arabic },
    ScriptRange { start: 0x0780, end: 0x07BF, script: Script::Thaana },
    ScriptRange { start: 0x07C0, end: 0x07FF, script: Script::Nko },
    ScriptRange { start: 0x0800, end: 0x083F, script: Script::Samaritan },
    ScriptRange { start: 0x0840, end: 0x085F, script: Script::Mandaic },
    ScriptRange { start: 0x0860, end: 0x086F, script: Script::Syriac },
    ScriptRange { start: 0x0870, end: 0x08FF, script: Script::Arabic },
    ScriptRange { start: 0x0900, end: 0x0950, script: Script::Devanagari },
    ScriptRange { start: 0x0951, end: 0x0954, script: Script::Inherited },
    ScriptRange { start: 0x0955, end: 0x0963, script: Script::Devanagari },
    ScriptRange { start: 0x0964, end: 0x0965, script: Script::Common },
    ScriptRange { start: 0x0966, end: 0x097F, script: Script::Devanagari },
    ScriptRange { start: 0x0980, end: 0x09FF, script: Script::Bengali },
    ScriptRange { start: 0x0A00, end: 0x0A7F, script: Script::Gurmukhi },
    ScriptRange { start: 0x0A80, end: 0x0AFF, script: Script::Gujarati },
    ScriptRange { start: 0x0B00, end: 0x0B7F, script: Script::Oriya },
    ScriptRange { start: 0x0B80, end: 0x0BFF, script: Script::Tamil },
    ScriptRange { start: 0x0C00, end: 0x0C7F, script: Script::Telugu },
    ScriptRange { start: 0x0C80, end: 0x0CFF, script: Script::Kannada },
    ScriptRange { start: 0x0D00, end: 0x0D7F, script: Script::Malayalam },
    ScriptRange { start: 0x0D80, end: 0x0DFF, script: Script::Sinhala },
    ScriptRange { start: 0x0E01, end: 0x0E3A, script: Script::Thai },
    ScriptRange { start: 0x0E3F, end: 0x0E3F, script: Script::Common },
    ScriptRange { start: 0x0E40, end: 0x0E5B, script: Script::Thai },
    ScriptRange { start: 0x0E80, end: 0x0EFF, script: Script::Lao },
    ScriptRange { start: 0x0F00, end: 0x0FFF, script: Script::Tibetan },
    ScriptRange { start: 0x1000, end: 0x109F, script: Script::Myanmar },
    ScriptRange { start: 0x10A0, end: 0x10FA, script: Script::Georgian },
    ScriptRange { start: 0x10FB, end: 0x10FB, script: Script::Common },
    ScriptRange { start: 0x10FC, end: 0x10FF, script: Script::Georgian },
    ScriptRange { start: 0x1100, end: 0x11FF, script: Script::Hangul },
    ScriptRange { start: 0x1200, end: 0x139F, script: Script::Ethiopic },
    ScriptRange { start: 0x13A0, end: 0x13FF, script: Script::Cherokee },
    ScriptRange { start: 0x1400, end: 0x167F, script: Script::CanadianAboriginal },
    ScriptRange { start: 0x1680, end: 0x169F, script: Script::Ogham },
    ScriptRange { start: 0x16A0, end: 0x16EA, script: Script::Runic },
    ScriptRange { start: 0x16EB, end: 0x16ED, script: Script::Common },
    ScriptRange { start: 0x16EE, end: 0x16FF, script: Script::Runic },
    ScriptRange { start: 0x1700, end: 0x1715, script: Script::Tagalog },
    ScriptRange { start: 0x171F, end: 0x171F, script: Script::Tagalog },
    ScriptRange { start: 0x1720, end: 0x1734, script: Script::Hanunoo },
    ScriptRange { start: 0x1740, end: 0x1753, script: Script::Buhid },
    ScriptRange { start: 0x1760, end: 0x1773, script: Script::Tagbanwa },
    ScriptRange { start: 0x1780, end: 0x17FF, script: Script::Khmer },
    ScriptRange { start: 0x1800, end: 0x1801, script: Script::Mongolian },
    ScriptRange { start: 0x1802, end: 0x1803, script: Script::Common },
    ScriptRange { start: 0x1804, end: 0x1804, script: Script::Mongolian },
    ScriptRange { start: 0x1805, end: 0x1805, script: Script::Common },
    ScriptRange { start: 0x1806, end: 0x18AF, script: Script::Mongolian },
    ScriptRange { start: 0x18B0, end: 0x18F5, script: Script::CanadianAboriginal },
    ScriptRange { start: 0x1900, end: 0x194F, script: Script::Limbu },
    ScriptRange { start: 0x1950, end: 0x197F, script: Script::TaiLe },
    ScriptRange { start: 0x1980, end: 0x19DF, script: Script::NewTaiLue },
    ScriptRange { start: 0x19E0, end: 0x19FF, script: Script::Khmer },
    ScriptRange { start: 0x1A00, end: 0x1A1F, script: Script::Buginese },
    ScriptRange { start: 0x1A20, end: 0x1AAF, script: Script::TaiTham },
    ScriptRange { start: 0x1AB0, end: 0x1AFF, script: Script::Inherited },
    ScriptRange { start: 0x1B00, end: 0x1B7F, script: Script::Balinese },
    ScriptRange { start: 0x1B80, end: 0x1BBF, script: Script::Sundanese },
    ScriptRange { start: 0x1BC0, end: 0x1BFF, script: Script::Batak },
    ScriptRange { start: 0x1C00, end: 0x1C4F, script: Script::Lepcha },
    ScriptRange { start: 0x1C50, end: 0x1C7F, script: Script::OlChiki },
    ScriptRange { start: 0x1C80, end: 0x1C88, script: Script::Cyrillic },
    ScriptRange { start: 0x1C90, end: 0x1CBF, script: Script::Georgian },
    ScriptRange { start: 0x1CC0, end: 0x1CC7, script: Script::Sundanese },
    ScriptRange { start: 0x1D00, end: 0x1D25, script: Script::Latin },
    ScriptRange { start: 0x1D26, end: 0x1D2A, script: Script::Greek },
    ScriptRange { start: 0x1D2B, end: 0x1D2B, script: Script::Cyrillic },
    ScriptRange { start: 0x1D2C, end: 0x1D5C, script: Script::Latin },
    ScriptRange { start: 0x1D5D, end: 0x1D61, script: Script::Greek },
    ScriptRange { start: 0x1D62, end: 0x1D65, script: Script::Latin },
    ScriptRange { start: 0x1D66, end: 0x1D6A, script: Script::Greek },
    ScriptRange { start: 0x1D6B, end: 0x1D77, script: Script::Latin },
    ScriptRange { start: 0x1D78, end: 0x1D78, script: Script::Cyrillic },
    ScriptRange { start: 0x1D79, end: 0x1DBE, script: Script::Latin },
    ScriptRange { start: 0x1DBF, end: 0x1DBF, script: Script::Greek },
    ScriptRange { start: 0x1DC0, end: 0x1DFF, script: Script::Inherited },
    ScriptRange { start: 0x1E00, end: 0x1EFF, script: Script::Latin },
    ScriptRange { start: 0x1F00, end: 0x1FFF, script: Script::Greek },
    ScriptRange { start: 0x2000, end: 0x200B, script: Script::Common },
    ScriptRange { start: 0x200C, end: 0x200D, script: Script::Inherited },
    ScriptRange { start: 0x200E, end: 0x2064, script: Script::Common },
    ScriptRange { start: 0x2066, end: 0x2070, script: Script::Common },
    ScriptRange { start: 0x2071, end: 0x2071, script: Script::Latin },
    ScriptRange { start: 0x2074, end: 0x207E, script: Script::Common },
    ScriptRange { start: 0x207F, end: 0x207F, script: Script::Latin },
    ScriptRange { start: 0x2080, end: 0x208E, script: Script::Common },
    ScriptRange { start: 0x2090, end: 0x209C, script: Script::Latin },
    ScriptRange { start: 0x20A0, end: 0x20BF, script: Script::Common },
    ScriptRange { start: 0x20D0, end: 0x20F0, script: Script::Inherited },
    ScriptRange { start: 0x2100, end: 0x2125, script: Script::Common },
    ScriptRange { start: 0x2126, end: 0x2126, script: Script::Greek },
    ScriptRange { start: 0x2127, end: 0x2129, script: Script::Common },
    ScriptRange { start: 0x212A, end: 0x212B, script: Script::Latin },
    ScriptRange { start: 0x212C, end: 0x2131, script: Script::Common },
    ScriptRange { start: 0x2132, end: 0x2132, script: Script::Latin },
    ScriptRange { start: 0x2133, end: 0x214D, script: Script::Common },
    ScriptRange { start: 0x214E, end: 0x214E, script: Script::Latin },
    ScriptRange { start: 0x214F, end: 0x215F, script: Script::Common },
    ScriptRange { start: 0x2160, end: 0x2188, script: Script::Latin },
    ScriptRange { start: 0x2189, end: 0x218B, script: Script::Common },
    ScriptRange { start: 0x2190, end: 0x2426, script: Script::Common },
    ScriptRange { start: 0x2440, end: 0x244A, script: Script::Common },
    ScriptRange { start: 0x2460, end: 0x27FF, script: Script::Common },
    ScriptRange { start: 0x2800, end: 0x28FF, script: Script::Braille },
    ScriptRange { start: 0x2900, end: 0x2BFF, script: Script::Common },
    ScriptRange { start: 0x2C00, end: 0x2C5F, script: Script::Glagolitic },
    ScriptRange { start: 0x2C60, end: 0x2C7F, script: Script::Latin },
    ScriptRange { start: 0x2C80, end: 0x2CFF, script: Script::Coptic },
    ScriptRange { start: 0x2D00, end: 0x2D2F, script: Script::Georgian },
    ScriptRange { start: 0x2D30, end: 0x2D7F, script: Script::Tifinagh },
    ScriptRange { start: 0x2D80, end: 0x2DDF, script: Script::Ethiopic },
    ScriptRange { start: 0x2DE0, end: 0x2DFF, script: Script::Cyrillic },
    ScriptRange { start: 0x2E00, end: 0x2E5D, script: Script::Common },
    ScriptRange { start: 0x2E80, end: 0x2FD5, script: Script::Han },
    ScriptRange { start: 0x2FF0, end: 0x2FFB, script: Script::Common },
    ScriptRange { start: 0x3000, end: 0x3004, script: Script::Common },
    ScriptRange { start: 0x3005, end: 0x3005, script: Script::Han },
    ScriptRange { start: 0x3006, end: 0x3006, script: Script::Common },
    ScriptRange { start: 0x3007, end: 0x3007, script: Script::Han },
    ScriptRange { start: 0x3008, end: 0x3020, script: Script::Common },
    ScriptRange { start: 0x3021, end: 0x3029, script: Script::Han },
    ScriptRange { start: 0x302A, end: 0x302D, script: Script::Inherited },
    ScriptRange { start: 0x302E, end: 0x302F, script: Script::Hangul },
    ScriptRange { start: 0x3030, end: 0x3037, script: Script::Common },
    ScriptRange { start: 0x3038, end: 0x303B, script: Script::Han },
    ScriptRange { start: 0x303C, end: 0x303F, script: Script::Common },
    ScriptRange { start: 0x3041, end: 0x3096, script: Script::Hiragana },
    ScriptRange { start: 0x3099, end: 0x309A, script: Script::Inherited },
    ScriptRange { start: 0x309B, end: 0x309C, script: Script::Common },
    ScriptRange { start: 0x309D, end: 0x309F, script: Script::Hiragana },
    ScriptRange { start: 0x30A0, end: 0x30A0, script: Script::Common },
    ScriptRange { start: 0x30A1, end: 0x30FA, script: Script::Katakana },
    ScriptRange { start: 0x30FB, end: 0x30FC, script: Script::Common },
    ScriptRange { start: 0x30FD, end: 0x30FF, script: Script::Katakana },
    ScriptRange { start: 0x3105, end: 0x312F, script: Script::Bopomofo },
    ScriptRange { start: 0x3131, end: 0x318E, script: Script::Hangul },
    ScriptRange { start: 0x3190, end: 0x319F, script: Script::Common },
    ScriptRange { start: 0x31A0, end: 0x31BF, script: Script::Bopomofo },
    ScriptRange { start: 0x31C0, end: 0x31E3, script: Script::Common },
    ScriptRange { start: 0x31F0, end: 0x31FF, script: Script::Katakana },
    ScriptRange { start: 0x3200, end: 0x321E, script: Script::Hangul },
    ScriptRange { start: 0x3220, end: 0x325F, script: Script::Common },
    ScriptRange { start: 0x3260, end: 0x327E, script: Script::Hangul },
    ScriptRange { start: 0x327F, end: 0x32CF, script: Script::Common },
    ScriptRange { start: 0x32D0, end: 0x3357, script: Script::Katakana },
    ScriptRange { start: 0x3358, end: 0x33FF, script: Script::Common },
    ScriptRange { start: 0x3400, end: 0x4DBF, script: Script::Han },
    ScriptRange { start: 0x4DC0, end: 0x4DFF, script: Script::Common },
    ScriptRange { start: 0x4E00, end: 0x9FFF, script: Script::Han },
    ScriptRange { start: 0xA000, end: 0xA4CF, script: Script::Yi },
    ScriptRange { start: 0xA4D0, end: 0xA4FF, script: Script::Lisu },
    ScriptRange { start: 0xA500, end: 0xA63F, script: Script::Vai },
    ScriptRange { start: 0xA640, end: 0xA69F, script: Script::Cyrillic },
    ScriptRange { start: 0xA6A0, end: 0xA6F7, script: Script::Bamum },
    ScriptRange { start: 0xA700, end: 0xA721, script: Script::Common },
    ScriptRange { start: 0xA722, end: 0xA787, script: Script::Latin },
    ScriptRange { start: 0xA788, end: 0xA78A, script: Script::Common },
    ScriptRange { start: 0xA78B, end: 0xA7FF, script: Script::Latin },
    ScriptRange { start: 0xA800, end: 0xA82C, script: Script::SylotiNagri },
    ScriptRange { start: 0xA830, end: 0xA839, script: Script::Common },
    ScriptRange { start: 0xA840, end: 0xA877, script: Script::PhagsPa },
    ScriptRange { start: 0xA880, end: 0xA8DF, script: Script::Saurashtra },
    ScriptRange { start: 0xA8E0, end: 0xA8FF, script: Script::Devanagari },
    ScriptRange { start: 0xA900, end: 0xA92F, script: Script::KayahLi },
    ScriptRange { start: 0xA930, end: 0xA95F, script: Script::Rejang },
    ScriptRange { start: 0xA960, end: 0xA97C, script: Script::Hangul },
    ScriptRange { start: 0xA980, end: 0xA9DF, script: Script::Javanese },
    ScriptRange { start: 0xA9E0, end: 0xA9FF, script: Script::Myanmar },
    ScriptRange { start: 0xAA00, end: 0xAA5F, script: Script::Cham },
    ScriptRange { start: 0xAA60, end: 0xAA7F, script: Script::Myanmar },
    ScriptRange { start: 0xAA80, end: 0xAADF, script: Script::TaiViet },
    ScriptRange { start: 0xAAE0, end: 0xAAF6, script: Script::MeeteiMayek },
    ScriptRange { start: 0xAB01, end: 0xAB2E, script: Script::Ethiopic },
    ScriptRange { start: 0xAB30, end: 0xAB5A, script: Script::Latin },
    ScriptRange { start: 0xAB5B, end: 0xAB5B, script: Script::Common },
    ScriptRange { start: 0xAB5C, end: 0xAB64, script: Script::Latin },
    ScriptRange { start: 0xAB65, end: 0xAB65, script: Script::Greek },
    ScriptRange { start: 0xAB66, end: 0xAB69, script: Script::Latin },
    ScriptRange { start: 0xAB6A, end: 0xAB6B, script: Script::Common },
    ScriptRange { start: 0xAB70, end: 0xABBF, script: Script::Cherokee },
    ScriptRange { start: 0xABC0, end: 0xABFF, script: Script::MeeteiMayek },
    ScriptRange { start: 0xAC00, end: 0xD7FB, script: Script::Hangul },
    ScriptRange { start: 0xF900, end: 0xFAD9, script: Script::Han },
    ScriptRange { start: 0xFB00, end: 0xFB06, script: Script::Latin },
    ScriptRange { start: 0xFB13, end: 0xFB17, script: Script::Armenian },
    ScriptRange { start: 0xFB1D, end: 0xFB4F, script: Script::Hebrew },
    ScriptRange { start: 0xFB50, end: 0xFDFD, script: Script::Arabic },
    ScriptRange { start: 0xFDFF, end: 0xFDFF, script: Script::Arabic },
    ScriptRange { start: 0xFE00, end: 0xFE0F, script: Script::Inherited },
    ScriptRange { start: 0xFE10, end: 0xFE19, script: Script::Common },
    ScriptRange { start: 0xFE20, end: 0xFE2D, script: Script::Inherited },
    ScriptRange { start: 0xFE2E, end: 0xFE2F, script: Script::Cyrillic },
    ScriptRange { start: 0xFE30, end: 0xFE6B, script: Script::Common },
    ScriptRange { start: 0xFE70, end: 0xFEFC, script: Script::Arabic },
    ScriptRange { start: 0xFEFF, end: 0xFEFF, script: Script::Common },
    ScriptRange { start: 0xFF01, end: 0xFF20, script: Script::Common },
    ScriptRange { start: 0xFF21, end: 0xFF3A, script: Script::Latin },
    ScriptRange { start: 0xFF3B, end: 0xFF40, script: Script::Common },
    ScriptRange { start: 0xFF41, end: 0xFF5A, script: Script::Latin },
    ScriptRange { start: 0xFF5B, end: 0xFF65, script: Script::Common },
    ScriptRange { start: 0xFF66, end: 0xFF6F, script: Script::Katakana },
    ScriptRange { start: 0xFF70, end: 0xFF70, script: Script::Common },
    ScriptRange { start: 0xFF71, end: 0xFF9D, script: Script::Katakana },
    ScriptRange { start: 0xFF9E, end: 0xFF9F, script: Script::Common },
    ScriptRange { start: 0xFFA0, end: 0xFFDC, script: Script::Hangul },
    ScriptRange { start: 0xFFE0, end: 0xFFFD, script: Script::Common },
    ScriptRange { start: 0x10000, end: 0x100FA, script: Script::LinearB },
    ScriptRange { start: 0x10100, end: 0x10102, script: Script::Common },
    ScriptRange { start: 0x10107, end: 0x10133, script: Script::Common },
    ScriptRange { start: 0x10137, end: 0x1013F, script: Script::Common },
    ScriptRange { start: 0x10140, end: 0x1018E, script: Script::Greek },
    ScriptRange { start: 0x10190, end: 0x1019C, script: Script::Common },
    ScriptRange { start: 0x101FD, end: 0x101FD, script: Script::Inherited },
    ScriptRange { start: 0x10280, end: 0x1029C, script: Script::Lycian },
    ScriptRange { start: 0x102A0, end: 0x102D0, script: Script::Carian },
    ScriptRange { start: 0x102E0, end: 0x102E0, script: Script::Inherited },
    ScriptRange { start: 0x102E1, end: 0x102FB, script: Script::Common },
    ScriptRange { start: 0x10300, end: 0x10323, script: Script::OldItalic },
    ScriptRange { start: 0x10330, end: 0x1034A, script: Script::Gothic },
    ScriptRange { start: 0x10350, end: 0x1037A, script: Script::OldPermic },
    ScriptRange { start: 0x10380, end: 0x1039F, script: Script::Ugaritic },
    ScriptRange { start: 0x103A0, end: 0x103D5, script: Script::OldPersian },
    ScriptRange { start: 0x10400, end: 0x1044F, script: Script::Deseret },
    ScriptRange { start: 0x10450, end: 0x1047F, script: Script::Shavian },
    ScriptRange { start: 0x10480, end: 0x104A9, script: Script::Osmanya },
    ScriptRange { start: 0x104B0, end: 0x104FB, script: Script::Osage },
    ScriptRange { start: 0x10500, end: 0x10527, script: Script::Elbasan },
    ScriptRange { start: 0x10530, end: 0x10563, script: Script::CaucasianAlbanian },
    ScriptRange { start: 0x10570, end: 0x105BC, script: Script::Vithkuqi },
    ScriptRange { start: 0x10600, end: 0x10767, script: Script::LinearA },
    ScriptRange { start: 0x10780, end: 0x107BA, script: Script::Latin },
    ScriptRange { start: 0x10800, end: 0x1083F, script: Script::Cypriot },
    ScriptRange { start: 0x10840, end: 0x1085F, script: Script::ImperialAramaic },
    ScriptRange { start: 0x10860, end: 0x1087F, script: Script::Palmyrene },
    ScriptRange { start: 0x10880, end: 0x108AF, script: Script::Nabataean },
    ScriptRange { start: 0x108E0, end: 0x108FF, script: Script::Hatran },
    ScriptRange { start: 0x10900, end: 0x1091F, script: Script::Phoenician },
    ScriptRange { start: 0x10920, end: 0x1093F, script: Script::Lydian },
    ScriptRange { start: 0x10980, end: 0x1099F, script: Script::MeroiticHieroglyphs },
    ScriptRange { start: 0x109A0, end: 0x109FF, script: Script::MeroiticCursive },
    ScriptRange { start: 0x10A00, end: 0x10A58, script: Script::Kharoshthi },
    ScriptRange { start: 0x10A60, end: 0x10A7F, script: Script::OldSouthArabian },
    ScriptRange { start: 0x10A80, end: 0x10A9F, script: Script::OldNorthArabian },
    ScriptRange { start: 0x10AC0, end: 0x10AFF, script: Script::Manichaean },
    ScriptRange { start: 0x10B00, end: 0x10B3F, script: Script::Avestan },
    ScriptRange { start: 0x10B40, end: 0x10B5F, script: Script::InscriptionalParthian },
    ScriptRange { start: 0x10B60, end: 0x10B7F, script: Script::InscriptionalPahlavi },
    ScriptRange { start: 0x10B80, end: 0x10BAF, script: Script::PsalterPahlavi },
    ScriptRange { start: 0x10C00, end: 0x10C48, script: Script::OldTurkic },
    ScriptRange { start: 0x10C80, end: 0x10CFF, script: Script::OldHungarian },
    ScriptRange { start: 0x10D00, end: 0x10D39, script: Script::HanifiRohingya },
    ScriptRange { start: 0x10E60, end: 0x10E7E, script: Script::Arabic },
    ScriptRange { start: 0x10E80, end: 0x10EBF, script: Script::Yezidi },
    ScriptRange { start: 0x10F00, end: 0x10F27, script: Script::OldSogdian },
    ScriptRange { start: 0x10F30, end: 0x10F69, script: Script::Sogdian },
    ScriptRange { start: 0x10F70, end: 0x10FA9, script: Script::OldUyghur },
    ScriptRange { start: 0x10FB0, end: 0x10FCB, script: Script::Chorasmian },
    ScriptRange { start: 0x10FE0, end: 0x10FF6, script: Script::Elymaic },
    ScriptRange { start: 0x11000, end: 0x1107F, script: Script::Brahmi },
    ScriptRange { start: 0x11080, end: 0x110CD, script: Script::Kaithi },
    ScriptRange { start: 0x110D0, end: 0x110FF, script: Script::SoraSompeng },
    ScriptRange { start: 0x11100, end: 0x11147, script: Script::Chakma },
    ScriptRange { start: 0x11150, end: 0x1117F, script: Script::Mahajani },
    ScriptRange { start: 0x11180, end: 0x111DF, script: Script::Sharada },
    ScriptRange { start: 0x111E1, end: 0x111F4, script: Script::Sinhala },
    ScriptRange { start: 0x11200, end: 0x1124F, script: Script::Khojki },
    ScriptRange { start: 0x11280, end: 0x112AF, script: Script::Multani },
    ScriptRange { start: 0x112B0, end: 0x112FF, script: Script::Khudawadi },
    ScriptRange { start: 0x11300, end: 0x1137F, script: Script::Grantha },
    ScriptRange { start: 0x11400, end: 0x1147F, script: Script::Newa },
    ScriptRange { start: 0x11480, end: 0x114DF, script: Script::Tirhuta },
    ScriptRange { start: 0x11580, end: 0x115FF, script: Script::Siddham },
    ScriptRange { start: 0x11600, end: 0x1165F, script: Script::Modi },
    ScriptRange { start: 0x11660, end: 0x1167F, script: Script::Mongolian },
    ScriptRange { start: 0x11680, end: 0x116CF, script: Script::Takri },
    ScriptRange { start: 0x11700, end: 0x1174F, script: Script::Ahom },
    ScriptRange { start: 0x11800, end: 0x1184F, script: Script::Dogra },
    ScriptRange { start: 0x118A0, end: 0x118FF, script: Script::WarangCiti },
    ScriptRange { start: 0x11900, end: 0x11959, script: Script::DivesAkuru },
    ScriptRange { start: 0x119A0, end: 0x119FF, script: Script::Nandinagari },
    ScriptRange { start: 0x11A00, end: 0x11A4F, script: Script::ZanabazarSquare },
    ScriptRange { start: 0x11A50, end: 0x11AAF, script: Script::Soyombo },
    ScriptRange { start: 0x11AB0, end: 0x11ABF, script: Script::CanadianAboriginal },
    ScriptRange { start: 0x11AC0, end: 0x11AFF, script: Script::PauCinHau },
    ScriptRange { start: 0x11C00, end: 0x11C6F, script: Script::Bhaiksuki },
    ScriptRange { start: 0x11C70, end: 0x11CBF, script: Script::Marchen },
    ScriptRange { start: 0x11D00, end: 0x11D5F, script: Script::MasaramGondi },
    ScriptRange { start: 0x11D60, end: 0x11DAF, script: Script::GunjalaGondi },
    ScriptRange { start: 0x11EE0, end: 0x11EFF, script: Script::Makasar },
    ScriptRange { start: 0x11FB0, end: 0x11FB0, script: Script::Lisu },
    ScriptRange { start: 0x11FC0, end: 0x11FFF, script: Script::Tamil },
    ScriptRange { start: 0x12000, end: 0x12543, script: Script::Cuneiform },
    ScriptRange { start: 0x12F90, end: 0x12FF2, script: Script::CyproMinoan },
    ScriptRange { start: 0x13000, end: 0x1342E, script: Script::EgyptianHieroglyphs },
    ScriptRange { start: 0x13430, end: 0x13438, script: Script::EgyptianHieroglyphs },
    ScriptRange { start: 0x14400, end: 0x14646, script: Script::AnatolianHieroglyphs },
    ScriptRange { start: 0x16800, end: 0x16A38, script: Script::Bamum },
    ScriptRange { start: 0x16A40, end: 0x16A6F, script: Script::Mro },
    ScriptRange { start: 0x16A70, end: 0x16ACF, script: Script::Tangsa },
    ScriptRange { start: 0x16AD0, end: 0x16AFF, script: Script::BassaVah },
    ScriptRange { start: 0x16B00, end: 0x16B8F, script: Script::PahawhHmong },
    ScriptRange { start: 0x16E40, end: 0x16E9F, script: Script::Medefaidrin },
    ScriptRange { start: 0x16F00, end: 0x16F9F, script: Script::Miao },
    ScriptRange { start: 0x16FE0, end: 0x16FE0, script: Script::Tangut },
    ScriptRange { start: 0x16FE1, end: 0x16FE1, script: Script::Nushu },
    ScriptRange { start: 0x17000, end: 0x18AFF, script: Script::Tangut },
    ScriptRange { start: 0x18B00, end: 0x18CD5, script: Script::KhitanSmallScript },
    ScriptRange { start: 0x18D00, end: 0x18D7F, script: Script::Tangut },
    ScriptRange { start: 0x1AFF0, end: 0x1AFFE, script: Script::Katakana },
    ScriptRange { start: 0x1B000, end: 0x1B000, script: Script::Katakana },
    ScriptRange { start: 0x1B001, end: 0x1B11F, script: Script::Hiragana },
    ScriptRange { start: 0x1B150, end: 0x1B152, script: Script::Hiragana },
    ScriptRange { start: 0x1B164, end: 0x1B167, script: Script::Katakana },
    ScriptRange { start: 0x1B170, end: 0x1B2FB, script: Script::Nushu },
    ScriptRange { start: 0x1BC00, end: 0x1BC9F, script: Script::Duployan },
    ScriptRange { start: 0x1BCA0, end: 0x1BCA3, script: Script::Common },
    ScriptRange { start: 0x1CF00, end: 0x1CF46, script: Script::Inherited },
    ScriptRange { start: 0x1CF50, end: 0x1CFC3, script: Script::Common },
    ScriptRange { start: 0x1D000, end: 0x1D166, script: Script::Common },
    ScriptRange { start: 0x1D167, end: 0x1D169, script: Script::Inherited },
    ScriptRange { start: 0x1D16A, end: 0x1D17A, script: Script::Common },
    ScriptRange { start: 0x1D17B, end: 0x1D182, script: Script::Inherited },
    ScriptRange { start: 0x1D183, end: 0x1D184, script: Script::Common },
    ScriptRange { start: 0x1D185, end: 0x1D18B, script: Script::Inherited },
    ScriptRange { start: 0x1D18C, end: 0x1D1A9, script: Script::Common },
    ScriptRange { start: 0x1D1AA, end: 0x1D1AD, script: Script::Inherited },
    ScriptRange { start: 0x1D1AE, end: 0x1D1EA, script: Script::Common },
    ScriptRange { start: 0x1D200, end: 0x1D245, script: Script::Greek },
    ScriptRange { start: 0x1D2E0, end: 0x1D378, script: Script::Common },
    ScriptRange { start: 0x1D400, end: 0x1D7FF, script: Script::Common },
    ScriptRange { start: 0x1D800, end: 0x1DAAF, script: Script::SignWriting },
    ScriptRange { start: 0x1DF00, end: 0x1DF1E, script: Script::Latin },
    ScriptRange { start: 0x1E000, end: 0x1E02F, script: Script::Glagolitic },
    ScriptRange { start: 0x1E100, end: 0x1E14F, script: Script::NyiakengPuachueHmong },
    ScriptRange { start: 0x1E290, end: 0x1E2BF, script: Script::Toto },
    ScriptRange { start: 0x1E2C0, end: 0x1E2FF, script: Script::Wancho },
    ScriptRange { start: 0x1E7E0, end: 0x1E7FF, script: Script::Ethiopic },
    ScriptRange { start: 0x1E800, end: 0x1E8DF, script: Script::MendeKikakui },
    ScriptRange { start: 0x1E900, end: 0x1E95F, script: Script::Adlam },
    ScriptRange { start: 0x1EC71, end: 0x1ECB4, script: Script::Common },
    ScriptRange { start: 0x1ED01, end: 0x1ED3D, script: Script::Common },
    ScriptRange { start: 0x1EE00, end: 0x1EEFF, script: Script::Arabic },
    ScriptRange { start: 0x1F000, end: 0x1FBCA, script: Script::Common },
    ScriptRange { start: 0x20000, end: 0x3134A, script: Script::Han },
    ScriptRange { start: 0xE0001, end: 0xE007F, script: Script::Common },
    ScriptRange { start: 0xE0100, end: 0xE01EF, script: Script::Inherited },
];

pub static SCRIPT_EXTENSION_RANGES: &[(u32, u32, &[Script])] = &[
    (0x0589, 0x0589, &[Script::Armenian, Script::Georgian]),
    (0x060C, 0x060C, &[Script::Arabic, Script::Syriac, Script::Thaana]),
    (0x061B, 0x061B, &[Script::Arabic, Script::Syriac, Script::Thaana]),
    (0x061F, 0x061F, &[Script::Arabic, Script::Syriac, Script::Thaana]),
    (0x0640, 0x0640, &[Script::Arabic, Script::Mandaic, Script::PhagsPa, Script::Syriac]),
    (0x064B, 0x0655, &[Script::Arabic, Script::Syriac]),
    (0x0670, 0x0670, &[Script::Arabic, Script::Syriac]),
    (0x06DD, 0x06DD, &[Script::Arabic]),
    (0x0951, 0x0952, &[Script::Bengali, Script::Devanagari, Script::Gujarati, Script::Gurmukhi, Script::Kannada, Script::Latin, Script::Malayalam, Script::Oriya, Script::Tamil, Script::Telugu]),
    (0x0964, 0x0965, &[Script::Bengali, Script::Devanagari, Script::Dogra, Script::Grantha, Script::Gujarati, Script::Gurmukhi, Script::Kannada, Script::Khojki, Script::Khudawadi, Script::Mahajani, Script::Malayalam, Script::Modi, Script::Nandinagari, Script::Oriya, Script::Sharada, Script::Sinhala, Script::Takri, Script::Tamil, Script::Telugu, Script::Tirhuta]),
    (0x1805, 0x1805, &[Script::Mongolian, Script::PhagsPa]),
    (0x3001, 0x3003, &[Script::Bopomofo, Script::Han, Script::Hangul, Script::Hiragana, Script::Katakana, Script::Yi]),
    (0x3006, 0x3006, &[Script::Han]),
    (0x3008, 0x3011, &[Script::Bopomofo, Script::Han, Script::Hangul, Script::Hiragana, Script::Katakana, Script::Mongolian, Script::Tibetan, Script::Yi]),
    (0x3013, 0x3020, &[Script::Bopomofo, Script::Han, Script::Hangul, Script::Hiragana, Script::Katakana, Script::Yi]),
    (0x3030, 0x3037, &[Script::Bopomofo, Script::Han, Script::Hangul, Script::Hiragana, Script::Katakana, Script::Yi]),
    (0x303C, 0x303D, &[Script::Han, Script::Hiragana, Script::Katakana]),
    (0x303E, 0x303F, &[Script::Han]),
    (0x3099, 0x309C, &[Script::Hiragana, Script::Katakana]),
    (0x30A0, 0x30A0, &[Script::Hiragana, Script::Katakana]),
    (0x30FB, 0x30FC, &[Script::Hiragana, Script::Katakana]),
    (0xA830, 0xA839, &[Script::Bengali, Script::Devanagari, Script::Dogra, Script::Gujarati, Script::Gurmukhi, Script::Kannada, Script::Khojki, Script::Khudawadi, Script::Mahajani, Script::Malayalam, Script::Modi, Script::Oriya, Script::Sharada, Script::Sinhala, Script::Takri, Script::Tamil, Script::Telugu, Script::Tirhuta]),
    (0xFE45, 0xFE46, &[Script::Bopomofo, Script::Han, Script::Hangul, Script::Hiragana, Script::Katakana, Script::Yi]),
    (0xFF61, 0xFF65, &[Script::Bopomofo, Script::Han, Script::Hangul, Script::Hiragana, Script::Katakana, Script::Yi]),
    (0xFF70, 0xFF70, &[Script::Hiragana, Script::Katakana]),
    (0xFF9E, 0xFF9F, &[Script::Hiragana, Script::Katakana]),
    (0x10100, 0x10102, &[Script::Cypriot, Script::LinearB]),
    (0x10107, 0x10133, &[Script::Cypriot, Script::LinearA, Script::LinearB]),
    (0x11FD0, 0x11FD1, &[Script::Grantha, Script::Tamil]),
];
