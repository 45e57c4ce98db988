// Generated by `cargo run -p xtask -- unicode` from UCD 14.0.0 data. Do not edit.
pub static WORD_BREAK_RANGES: &[WordBreakRange] = &[
    WordBreakRange { start: 0x000A, end: 0x000A, property: WordBreak::LF },
    WordBreakRange { start: 0x000B, end: 0x000C, property: WordBreak::Newline },
    WordBreakRange { start: 0x000D, end: 0x000D, property: WordBreak::CR },
    WordBreakRange { start: 0x0020, end: 0x0020, property: WordBreak::WSegSpace },
    WordBreakRange { start: 0x0022, end: 0x0022, property: WordBreak::DoubleQuote },
    WordBreakRange { start: 0x0027, end: 0x0027, property: WordBreak::SingleQuote },
    WordBreakRange { start: 0x002C, end: 0x002C, property: WordBreak::MidNum },
    WordBreakRange { start: 0x002E, end: 0x002E, property: WordBreak::MidNumLet },
    WordBreakRange { start: 0x0030, end: 0x0039, property: WordBreak::Numeric },
    WordBreakRange { start: 0x003A, end: 0x003A, property: WordBreak::MidLetter },
    WordBreakRange { start: 0x003B, end: 0x003B, property: WordBreak::MidNum },
    WordBreakRange { start: 0x0041, end: 0x005A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x005F, end: 0x005F, property: WordBreak::ExtendNumLet },
    WordBreakRange { start: 0x0061, end: 0x007A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0085, end: 0x0085, property: WordBreak::Newline },
    WordBreakRange { start: 0x00AA, end: 0x00AA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x00AD, end: 0x00AD, property: WordBreak::Format },
    WordBreakRange { start: 0x00B5, end: 0x00B5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x00B7, end: 0x00B7, property: WordBreak::MidLetter },
    WordBreakRange { start: 0x00BA, end: 0x00BA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x00C0, end: 0x00D6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x00D8, end: 0x00F6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x00F8, end: 0x02C1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x02C6, end: 0x02D1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x02E0, end: 0x02E4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x02EC, end: 0x02EC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x02EE, end: 0x02EE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0300, end: 0x036F, property: WordBreak::Extend },
    WordBreakRange { start: 0x0370, end: 0x0374, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0376, end: 0x0377, property: WordBreak::ALetter },
    WordBreakRange { start: 0x037A, end: 0x037D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x037E, end: 0x037E, property: WordBreak::MidNum },
    WordBreakRange { start: 0x037F, end: 0x037F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0386, end: 0x0386, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0387, end: 0x0387, property: WordBreak::MidLetter },
    WordBreakRange { start: 0x0388, end: 0x038A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x038C, end: 0x038C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x038E, end: 0x03A1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x03A3, end: 0x03F5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x03F7, end: 0x0481, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0483, end: 0x0489, property: WordBreak::Extend },
    WordBreakRange { start: 0x048A, end: 0x052F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0531, end: 0x0556, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0559, end: 0x0559, property: WordBreak::ALetter },
    WordBreakRange { start: 0x055F, end: 0x055F, property: WordBreak::MidLetter },
    WordBreakRange { start: 0x0560, end: 0x0588, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0589, end: 0x0589, property: WordBreak::MidNum },
    WordBreakRange { start: 0x0591, end: 0x05BD, property: WordBreak::Extend },
    WordBreakRange { start: 0x05BF, end: 0x05BF, property: WordBreak::Extend },
    WordBreakRange { start: 0x05C1, end: 0x05C2, property: WordBreak::Extend },
    WordBreakRange { start: 0x05C4, end: 0x05C5, property: WordBreak::Extend },
    WordBreakRange { start: 0x05C7, end: 0x05C7, property: WordBreak::Extend },
    WordBreakRange { start: 0x05D0, end: 0x05EA, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0x05EF, end: 0x05F2, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0x05F3, end: 0x05F3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x05F4, end: 0x05F4, property: WordBreak::MidLetter },
    WordBreakRange { start: 0x0600, end: 0x0605, property: WordBreak::Format },
    WordBreakRange { start: 0x060C, end: 0x060D, property: WordBreak::MidNum },
    WordBreakRange { start: 0x0610, end: 0x061A, property: WordBreak::Extend },
    WordBreakRange { start: 0x061C, end: 0x061C, property: WordBreak::Format },
    WordBreakRange { start: 0x0620, end: 0x064A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x064B, end: 0x065F, property: WordBreak::Extend },
    WordBreakRange { start: 0x0660, end: 0x0669, property: WordBreak::Numeric },
    WordBreakRange { start: 0x066B, end: 0x066B, property: WordBreak::Numeric },
    WordBreakRange { start: 0x066C, end: 0x066C, property: WordBreak::MidNum },
    WordBreakRange { start: 0x066E, end: 0x066F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0670, end: 0x0670, property: WordBreak::Extend },
    WordBreakRange { start: 0x0671, end: 0x06D3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x06D5, end: 0x06D5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x06D6, end: 0x06DC, property: WordBreak::Extend },
    WordBreakRange { start: 0x06DD, end: 0x06DD, property: WordBreak::Format },
    WordBreakRange { start: 0x06DF, end: 0x06E4, property: WordBreak::Extend },
    WordBreakRange { start: 0x06E5, end: 0x06E6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x06E7, end: 0x06E8, property: WordBreak::Extend },
    WordBreakRange { start: 0x06EA, end: 0x06ED, property: WordBreak::Extend },
    WordBreakRange { start: 0x06EE, end: 0x06EF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x06F0, end: 0x06F9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x06FA, end: 0x06FC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x06FF, end: 0x06FF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x070F, end: 0x070F, property: WordBreak::Format },
    WordBreakRange { start: 0x0710, end: 0x0710, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0711, end: 0x0711, property: WordBreak::Extend },
    WordBreakRange { start: 0x0712, end: 0x072F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0730, end: 0x074A, property: WordBreak::Extend },
    WordBreakRange { start: 0x074D, end: 0x07A5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x07A6, end: 0x07B0, property: WordBreak::Extend },
    WordBreakRange { start: 0x07B1, end: 0x07B1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x07C0, end: 0x07C9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x07CA, end: 0x07EA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x07EB, end: 0x07F3, property: WordBreak::Extend },
    WordBreakRange { start: 0x07F4, end: 0x07F5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x07F8, end: 0x07F8, property: WordBreak::MidNum },
    WordBreakRange { start: 0x07FA, end: 0x07FA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x07FD, end: 0x07FD, property: WordBreak::Extend },
    WordBreakRange { start: 0x0800, end: 0x0815, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0816, end: 0x0819, property: WordBreak::Extend },
    WordBreakRange { start: 0x081A, end: 0x081A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x081B, end: 0x0823, property: WordBreak::Extend },
    WordBreakRange { start: 0x0824, end: 0x0824, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0825, end: 0x0827, property: WordBreak::Extend },
    WordBreakRange { start: 0x0828, end: 0x0828, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0829, end: 0x082D, property: WordBreak::Extend },
    WordBreakRange { start: 0x0840, end: 0x0858, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0859, end: 0x085B, property: WordBreak::Extend },
    WordBreakRange { start: 0x0860, end: 0x086A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0870, end: 0x0887, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0889, end: 0x088E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0890, end: 0x0891, property: WordBreak::Format },
    WordBreakRange { start: 0x0898, end: 0x089F, property: WordBreak::Extend },
    WordBreakRange { start: 0x08A0, end: 0x08C9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x08CA, end: 0x08E1, property: WordBreak::Extend },
    WordBreakRange { start: 0x08E2, end: 0x08E2, property: WordBreak::Format },
    WordBreakRange { start: 0x08E3, end: 0x0903, property: WordBreak::Extend },
    WordBreakRange { start: 0x0904, end: 0x0939, property: WordBreak::ALetter },
    WordBreakRange { start: 0x093A, end: 0x093C, property: WordBreak::Extend },
    WordBreakRange { start: 0x093D, end: 0x093D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x093E, end: 0x094F, property: WordBreak::Extend },
    WordBreakRange { start: 0x0950, end: 0x0950, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0951, end: 0x0957, property: WordBreak::Extend },
    WordBreakRange { start: 0x0958, end: 0x0961, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0962, end: 0x0963, property: WordBreak::Extend },
    WordBreakRange { start: 0x0966, end: 0x096F, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0971, end: 0x0980, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0981, end: 0x0983, property: WordBreak::Extend },
    WordBreakRange { start: 0x0985, end: 0x098C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x098F, end: 0x0990, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0993, end: 0x09A8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09AA, end: 0x09B0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09B2, end: 0x09B2, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09B6, end: 0x09B9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09BC, end: 0x09BC, property: WordBreak::Extend },
    WordBreakRange { start: 0x09BD, end: 0x09BD, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09BE, end: 0x09C4, property: WordBreak::Extend },
    WordBreakRange { start: 0x09C7, end: 0x09C8, property: WordBreak::Extend },
    WordBreakRange { start: 0x09CB, end: 0x09CD, property: WordBreak::Extend },
    WordBreakRange { start: 0x09CE, end: 0x09CE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09D7, end: 0x09D7, property: WordBreak::Extend },
    WordBreakRange { start: 0x09DC, end: 0x09DD, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09DF, end: 0x09E1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09E2, end: 0x09E3, property: WordBreak::Extend },
    WordBreakRange { start: 0x09E6, end: 0x09EF, property: WordBreak::Numeric },
    WordBreakRange { start: 0x09F0, end: 0x09F1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09FC, end: 0x09FC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x09FE, end: 0x09FE, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A01, end: 0x0A03, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A05, end: 0x0A0A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A0F, end: 0x0A10, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A13, end: 0x0A28, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A2A, end: 0x0A30, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A32, end: 0x0A33, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A35, end: 0x0A36, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A38, end: 0x0A39, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A3C, end: 0x0A3C, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A3E, end: 0x0A42, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A47, end: 0x0A48, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A4B, end: 0x0A4D, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A51, end: 0x0A51, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A59, end: 0x0A5C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A5E, end: 0x0A5E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A66, end: 0x0A6F, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0A70, end: 0x0A71, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A72, end: 0x0A74, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A75, end: 0x0A75, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A81, end: 0x0A83, property: WordBreak::Extend },
    WordBreakRange { start: 0x0A85, end: 0x0A8D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A8F, end: 0x0A91, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0A93, end: 0x0AA8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0AAA, end: 0x0AB0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0AB2, end: 0x0AB3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0AB5, end: 0x0AB9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0ABC, end: 0x0ABC, property: WordBreak::Extend },
    WordBreakRange { start: 0x0ABD, end: 0x0ABD, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0ABE, end: 0x0AC5, property: WordBreak::Extend },
    WordBreakRange { start: 0x0AC7, end: 0x0AC9, property: WordBreak::Extend },
    WordBreakRange { start: 0x0ACB, end: 0x0ACD, property: WordBreak::Extend },
    WordBreakRange { start: 0x0AD0, end: 0x0AD0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0AE0, end: 0x0AE1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0AE2, end: 0x0AE3, property: WordBreak::Extend },
    WordBreakRange { start: 0x0AE6, end: 0x0AEF, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0AF9, end: 0x0AF9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0AFA, end: 0x0AFF, property: WordBreak::Extend },
    WordBreakRange { start: 0x0B01, end: 0x0B03, property: WordBreak::Extend },
    WordBreakRange { start: 0x0B05, end: 0x0B0C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B0F, end: 0x0B10, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B13, end: 0x0B28, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B2A, end: 0x0B30, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B32, end: 0x0B33, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B35, end: 0x0B39, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B3C, end: 0x0B3C, property: WordBreak::Extend },
    WordBreakRange { start: 0x0B3D, end: 0x0B3D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B3E, end: 0x0B44, property: WordBreak::Extend },
    WordBreakRange { start: 0x0B47, end: 0x0B48, property: WordBreak::Extend },
    WordBreakRange { start: 0x0B4B, end: 0x0B4D, property: WordBreak::Extend },
    WordBreakRange { start: 0x0B55, end: 0x0B57, property: WordBreak::Extend },
    WordBreakRange { start: 0x0B5C, end: 0x0B5D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B5F, end: 0x0B61, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B62, end: 0x0B63, property: WordBreak::Extend },
    WordBreakRange { start: 0x0B66, end: 0x0B6F, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0B71, end: 0x0B71, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B82, end: 0x0B82, property: WordBreak::Extend },
    WordBreakRange { start: 0x0B83, end: 0x0B83, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B85, end: 0x0B8A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B8E, end: 0x0B90, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B92, end: 0x0B95, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B99, end: 0x0B9A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B9C, end: 0x0B9C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0B9E, end: 0x0B9F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0BA3, end: 0x0BA4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0BA8, end: 0x0BAA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0BAE, end: 0x0BB9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0BBE, end: 0x0BC2, property: WordBreak::Extend },
    WordBreakRange { start: 0x0BC6, end: 0x0BC8, property: WordBreak::Extend },
    WordBreakRange { start: 0x0BCA, end: 0x0BCD, property: WordBreak::Extend },
    WordBreakRange { start: 0x0BD0, end: 0x0BD0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0BD7, end: 0x0BD7, property: WordBreak::Extend },
    WordBreakRange { start: 0x0BE6, end: 0x0BEF, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0C00, end: 0x0C04, property: WordBreak::Extend },
    WordBreakRange { start: 0x0C05, end: 0x0C0C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C0E, end: 0x0C10, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C12, end: 0x0C28, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C2A, end: 0x0C39, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C3C, end: 0x0C3C, property: WordBreak::Extend },
    WordBreakRange { start: 0x0C3D, end: 0x0C3D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C3E, end: 0x0C44, property: WordBreak::Extend },
    WordBreakRange { start: 0x0C46, end: 0x0C48, property: WordBreak::Extend },
    WordBreakRange { start: 0x0C4A, end: 0x0C4D, property: WordBreak::Extend },
    WordBreakRange { start: 0x0C55, end: 0x0C56, property: WordBreak::Extend },
    WordBreakRange { start: 0x0C58, end: 0x0C5A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C5D, end: 0x0C5D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C60, end: 0x0C61, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C62, end: 0x0C63, property: WordBreak::Extend },
    WordBreakRange { start: 0x0C66, end: 0x0C6F, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0C80, end: 0x0C80, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C81, end: 0x0C83, property: WordBreak::Extend },
    WordBreakRange { start: 0x0C85, end: 0x0C8C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C8E, end: 0x0C90, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0C92, end: 0x0CA8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0CAA, end: 0x0CB3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0CB5, end: 0x0CB9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0CBC, end: 0x0CBC, property: WordBreak::Extend },
    WordBreakRange { start: 0x0CBD, end: 0x0CBD, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0CBE, end: 0x0CC4, property: WordBreak::Extend },
    WordBreakRange { start: 0x0CC6, end: 0x0CC8, property: WordBreak::Extend },
    WordBreakRange { start: 0x0CCA, end: 0x0CCD, property: WordBreak::Extend },
    WordBreakRange { start: 0x0CD5, end: 0x0CD6, property: WordBreak::Extend },
    WordBreakRange { start: 0x0CDD, end: 0x0CDE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0CE0, end: 0x0CE1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0CE2, end: 0x0CE3, property: WordBreak::Extend },
    WordBreakRange { start: 0x0CE6, end: 0x0CEF, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0CF1, end: 0x0CF2, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D00, end: 0x0D03, property: WordBreak::Extend },
    WordBreakRange { start: 0x0D04, end: 0x0D0C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D0E, end: 0x0D10, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D12, end: 0x0D3A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D3B, end: 0x0D3C, property: WordBreak::Extend },
    WordBreakRange { start: 0x0D3D, end: 0x0D3D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D3E, end: 0x0D44, property: WordBreak::Extend },
    WordBreakRange { start: 0x0D46, end: 0x0D48, property: WordBreak::Extend },
    WordBreakRange { start: 0x0D4A, end: 0x0D4D, property: WordBreak::Extend },
    WordBreakRange { start: 0x0D4E, end: 0x0D4E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D54, end: 0x0D56, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D57, end: 0x0D57, property: WordBreak::Extend },
    WordBreakRange { start: 0x0D5F, end: 0x0D61, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D62, end: 0x0D63, property: WordBreak::Extend },
    WordBreakRange { start: 0x0D66, end: 0x0D6F, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0D7A, end: 0x0D7F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D81, end: 0x0D83, property: WordBreak::Extend },
    WordBreakRange { start: 0x0D85, end: 0x0D96, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0D9A, end: 0x0DB1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0DB3, end: 0x0DBB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0DBD, end: 0x0DBD, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0DC0, end: 0x0DC6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0DCA, end: 0x0DCA, property: WordBreak::Extend },
    WordBreakRange { start: 0x0DCF, end: 0x0DD4, property: WordBreak::Extend },
    WordBreakRange { start: 0x0DD6, end: 0x0DD6, property: WordBreak::Extend },
    WordBreakRange { start: 0x0DD8, end: 0x0DDF, property: WordBreak::Extend },
    WordBreakRange { start: 0x0DE6, end: 0x0DEF, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0DF2, end: 0x0DF3, property: WordBreak::Extend },
    WordBreakRange { start: 0x0E31, end: 0x0E31, property: WordBreak::Extend },
    WordBreakRange { start: 0x0E34, end: 0x0E3A, property: WordBreak::Extend },
    WordBreakRange { start: 0x0E47, end: 0x0E4E, property: WordBreak::Extend },
    WordBreakRange { start: 0x0E50, end: 0x0E59, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0EB1, end: 0x0EB1, property: WordBreak::Extend },
    WordBreakRange { start: 0x0EB4, end: 0x0EBC, property: WordBreak::Extend },
    WordBreakRange { start: 0x0EC8, end: 0x0ECD, property: WordBreak::Extend },
    WordBreakRange { start: 0x0ED0, end: 0x0ED9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0F00, end: 0x0F00, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0F18, end: 0x0F19, property: WordBreak::Extend },
    WordBreakRange { start: 0x0F20, end: 0x0F29, property: WordBreak::Numeric },
    WordBreakRange { start: 0x0F35, end: 0x0F35, property: WordBreak::Extend },
    WordBreakRange { start: 0x0F37, end: 0x0F37, property: WordBreak::Extend },
    WordBreakRange { start: 0x0F39, end: 0x0F39, property: WordBreak::Extend },
    WordBreakRange { start: 0x0F3E, end: 0x0F3F, property: WordBreak::Extend },
    WordBreakRange { start: 0x0F40, end: 0x0F47, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0F49, end: 0x0F6C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0F71, end: 0x0F84, property: WordBreak::Extend },
    WordBreakRange { start: 0x0F86, end: 0x0F87, property: WordBreak::Extend },
    WordBreakRange { start: 0x0F88, end: 0x0F8C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x0F8D, end: 0x0F97, property: WordBreak::Extend },
    WordBreakRange { start: 0x0F99, end: 0x0FBC, property: WordBreak::Extend },
    WordBreakRange { start: 0x0FC6, end: 0x0FC6, property: WordBreak::Extend },
    WordBreakRange { start: 0x102B, end: 0x103E, property: WordBreak::Extend },
    WordBreakRange { start: 0x1040, end: 0x1049, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1056, end: 0x1059, property: WordBreak::Extend },
    WordBreakRange { start: 0x105E, end: 0x1060, property: WordBreak::Extend },
    WordBreakRange { start: 0x1062, end: 0x1064, property: WordBreak::Extend },
    WordBreakRange { start: 0x1067, end: 0x106D, property: WordBreak::Extend },
    WordBreakRange { start: 0x1071, end: 0x1074, property: WordBreak::Extend },
    WordBreakRange { start: 0x1082, end: 0x108D, property: WordBreak::Extend },
    WordBreakRange { start: 0x108F, end: 0x108F, property: WordBreak::Extend },
    WordBreakRange { start: 0x1090, end: 0x1099, property: WordBreak::Numeric },
    WordBreakRange { start: 0x109A, end: 0x109D, property: WordBreak::Extend },
    WordBreakRange { start: 0x10A0, end: 0x10C5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10C7, end: 0x10C7, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10CD, end: 0x10CD, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10D0, end: 0x10FA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10FC, end: 0x1248, property: WordBreak::ALetter },
    WordBreakRange { start: 0x124A, end: 0x124D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1250, end: 0x1256, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1258, end: 0x1258, property: WordBreak::ALetter },
    WordBreakRange { start: 0x125A, end: 0x125D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1260, end: 0x1288, property: WordBreak::ALetter },
    WordBreakRange { start: 0x128A, end: 0x128D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1290, end: 0x12B0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12B2, end: 0x12B5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12B8, end: 0x12BE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12C0, end: 0x12C0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12C2, end: 0x12C5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12C8, end: 0x12D6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12D8, end: 0x1310, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1312, end: 0x1315, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1318, end: 0x135A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x135D, end: 0x135F, property: WordBreak::Extend },
    WordBreakRange { start: 0x1380, end: 0x138F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x13A0, end: 0x13F5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x13F8, end: 0x13FD, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1401, end: 0x166C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x166F, end: 0x167F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1680, end: 0x1680, property: WordBreak::WSegSpace },
    WordBreakRange { start: 0x1681, end: 0x169A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16A0, end: 0x16EA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16EE, end: 0x16F8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1700, end: 0x1711, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1712, end: 0x1715, property: WordBreak::Extend },
    WordBreakRange { start: 0x171F, end: 0x1731, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1732, end: 0x1734, property: WordBreak::Extend },
    WordBreakRange { start: 0x1740, end: 0x1751, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1752, end: 0x1753, property: WordBreak::Extend },
    WordBreakRange { start: 0x1760, end: 0x176C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x176E, end: 0x1770, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1772, end: 0x1773, property: WordBreak::Extend },
    WordBreakRange { start: 0x17B4, end: 0x17D3, property: WordBreak::Extend },
    WordBreakRange { start: 0x17DD, end: 0x17DD, property: WordBreak::Extend },
    WordBreakRange { start: 0x17E0, end: 0x17E9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x180B, end: 0x180D, property: WordBreak::Extend },
    WordBreakRange { start: 0x180E, end: 0x180E, property: WordBreak::Format },
    WordBreakRange { start: 0x180F, end: 0x180F, property: WordBreak::Extend },
    WordBreakRange { start: 0x1810, end: 0x1819, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1820, end: 0x1878, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1880, end: 0x1884, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1885, end: 0x1886, property: WordBreak::Extend },
    WordBreakRange { start: 0x1887, end: 0x18A8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x18A9, end: 0x18A9, property: WordBreak::Extend },
    WordBreakRange { start: 0x18AA, end: 0x18AA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x18B0, end: 0x18F5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1900, end: 0x191E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1920, end: 0x192B, property: WordBreak::Extend },
    WordBreakRange { start: 0x1930, end: 0x193B, property: WordBreak::Extend },
    WordBreakRange { start: 0x1946, end: 0x194F, property: WordBreak::Numeric },
    WordBreakRange { start: 0x19D0, end: 0x19D9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1A00, end: 0x1A16, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1A17, end: 0x1A1B, property: WordBreak::Extend },
    WordBreakRange { start: 0x1A55, end: 0x1A5E, property: WordBreak::Extend },
    WordBreakRange { start: 0x1A60, end: 0x1A7C, property: WordBreak::Extend },
    WordBreakRange { start: 0x1A7F, end: 0x1A7F, property: WordBreak::Extend },
    WordBreakRange { start: 0x1A80, end: 0x1A89, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1A90, end: 0x1A99, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1AB0, end: 0x1ACE, property: WordBreak::Extend },
    WordBreakRange { start: 0x1B00, end: 0x1B04, property: WordBreak::Extend },
    WordBreakRange { start: 0x1B05, end: 0x1B33, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1B34, end: 0x1B44, property: WordBreak::Extend },
    WordBreakRange { start: 0x1B45, end: 0x1B4C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1B50, end: 0x1B59, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1B6B, end: 0x1B73, property: WordBreak::Extend },
    WordBreakRange { start: 0x1B80, end: 0x1B82, property: WordBreak::Extend },
    WordBreakRange { start: 0x1B83, end: 0x1BA0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1BA1, end: 0x1BAD, property: WordBreak::Extend },
    WordBreakRange { start: 0x1BAE, end: 0x1BAF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1BB0, end: 0x1BB9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1BBA, end: 0x1BE5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1BE6, end: 0x1BF3, property: WordBreak::Extend },
    WordBreakRange { start: 0x1C00, end: 0x1C23, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1C24, end: 0x1C37, property: WordBreak::Extend },
    WordBreakRange { start: 0x1C40, end: 0x1C49, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1C4D, end: 0x1C4F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1C50, end: 0x1C59, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1C5A, end: 0x1C7D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1C80, end: 0x1C88, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1C90, end: 0x1CBA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1CBD, end: 0x1CBF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1CD0, end: 0x1CD2, property: WordBreak::Extend },
    WordBreakRange { start: 0x1CD4, end: 0x1CE8, property: WordBreak::Extend },
    WordBreakRange { start: 0x1CE9, end: 0x1CEC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1CED, end: 0x1CED, property: WordBreak::Extend },
    WordBreakRange { start: 0x1CEE, end: 0x1CF3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1CF4, end: 0x1CF4, property: WordBreak::Extend },
    WordBreakRange { start: 0x1CF5, end: 0x1CF6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1CF7, end: 0x1CF9, property: WordBreak::Extend },
    WordBreakRange { start: 0x1CFA, end: 0x1CFA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D00, end: 0x1DBF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1DC0, end: 0x1DFF, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E00, end: 0x1F15, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F18, end: 0x1F1D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F20, end: 0x1F45, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F48, end: 0x1F4D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F50, end: 0x1F57, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F59, end: 0x1F59, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F5B, end: 0x1F5B, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F5D, end: 0x1F5D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F5F, end: 0x1F7D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F80, end: 0x1FB4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1FB6, end: 0x1FBC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1FBE, end: 0x1FBE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1FC2, end: 0x1FC4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1FC6, end: 0x1FCC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1FD0, end: 0x1FD3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1FD6, end: 0x1FDB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1FE0, end: 0x1FEC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1FF2, end: 0x1FF4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1FF6, end: 0x1FFC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2000, end: 0x2006, property: WordBreak::WSegSpace },
    WordBreakRange { start: 0x2008, end: 0x200A, property: WordBreak::WSegSpace },
    WordBreakRange { start: 0x200B, end: 0x200B, property: WordBreak::Format },
    WordBreakRange { start: 0x200C, end: 0x200C, property: WordBreak::Extend },
    WordBreakRange { start: 0x200D, end: 0x200D, property: WordBreak::ZWJ },
    WordBreakRange { start: 0x200E, end: 0x200F, property: WordBreak::Format },
    WordBreakRange { start: 0x2018, end: 0x2019, property: WordBreak::MidNumLet },
    WordBreakRange { start: 0x2024, end: 0x2024, property: WordBreak::MidNumLet },
    WordBreakRange { start: 0x2027, end: 0x2027, property: WordBreak::MidLetter },
    WordBreakRange { start: 0x2028, end: 0x2029, property: WordBreak::Newline },
    WordBreakRange { start: 0x202A, end: 0x202E, property: WordBreak::Format },
    WordBreakRange { start: 0x202F, end: 0x202F, property: WordBreak::ExtendNumLet },
    WordBreakRange { start: 0x203F, end: 0x2040, property: WordBreak::ExtendNumLet },
    WordBreakRange { start: 0x2044, end: 0x2044, property: WordBreak::MidNum },
    WordBreakRange { start: 0x2054, end: 0x2054, property: WordBreak::ExtendNumLet },
    WordBreakRange { start: 0x205F, end: 0x205F, property: WordBreak::WSegSpace },
    WordBreakRange { start: 0x2060, end: 0x2064, property: WordBreak::Format },
    WordBreakRange { start: 0x2066, end: 0x206F, property: WordBreak::Format },
    WordBreakRange { start: 0x2071, end: 0x2071, property: WordBreak::ALetter },
    WordBreakRange { start: 0x207F, end: 0x207F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2090, end: 0x209C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x20D0, end: 0x20F0, property: WordBreak::Extend },
    WordBreakRange { start: 0x2102, end: 0x2102, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2107, end: 0x2107, property: WordBreak::ALetter },
    WordBreakRange { start: 0x210A, end: 0x2113, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2115, end: 0x2115, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2119, end: 0x211D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2124, end: 0x2124, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2126, end: 0x2126, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2128, end: 0x2128, property: WordBreak::ALetter },
    WordBreakRange { start: 0x212A, end: 0x212D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x212F, end: 0x2139, property: WordBreak::ALetter },
    WordBreakRange { start: 0x213C, end: 0x213F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2145, end: 0x2149, property: WordBreak::ALetter },
    WordBreakRange { start: 0x214E, end: 0x214E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2160, end: 0x2188, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2C00, end: 0x2CE4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2CEB, end: 0x2CEE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2CEF, end: 0x2CF1, property: WordBreak::Extend },
    WordBreakRange { start: 0x2CF2, end: 0x2CF3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2D00, end: 0x2D25, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2D27, end: 0x2D27, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2D2D, end: 0x2D2D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2D30, end: 0x2D67, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2D6F, end: 0x2D6F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2D7F, end: 0x2D7F, property: WordBreak::Extend },
    WordBreakRange { start: 0x2D80, end: 0x2D96, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2DA0, end: 0x2DA6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2DA8, end: 0x2DAE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2DB0, end: 0x2DB6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2DB8, end: 0x2DBE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2DC0, end: 0x2DC6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2DC8, end: 0x2DCE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2DD0, end: 0x2DD6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2DD8, end: 0x2DDE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x2DE0, end: 0x2DFF, property: WordBreak::Extend },
    WordBreakRange { start: 0x2E2F, end: 0x2E2F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x3000, end: 0x3000, property: WordBreak::WSegSpace },
    WordBreakRange { start: 0x3005, end: 0x3005, property: WordBreak::ALetter },
    WordBreakRange { start: 0x302A, end: 0x302F, property: WordBreak::Extend },
    WordBreakRange { start: 0x3031, end: 0x3035, property: WordBreak::Katakana },
    WordBreakRange { start: 0x303B, end: 0x303C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x3099, end: 0x309A, property: WordBreak::Extend },
    WordBreakRange { start: 0x309B, end: 0x309C, property: WordBreak::Katakana },
    WordBreakRange { start: 0x30A0, end: 0x30FA, property: WordBreak::Katakana },
    WordBreakRange { start: 0x30FC, end: 0x30FF, property: WordBreak::Katakana },
    WordBreakRange { start: 0x3105, end: 0x312F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x3131, end: 0x318E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x31A0, end: 0x31BF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x31F0, end: 0x31FF, property: WordBreak::Katakana },
    WordBreakRange { start: 0x32D0, end: 0x32FE, property: WordBreak::Katakana },
    WordBreakRange { start: 0x3300, end: 0x3357, property: WordBreak::Katakana },
    WordBreakRange { start: 0xA000, end: 0xA48C, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA4D0, end: 0xA4FD, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA500, end: 0xA60C, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA610, end: 0xA61F, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA620, end: 0xA629, property: WordBreak::Numeric },
    WordBreakRange { start: 0xA62A, end: 0xA62B, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA640, end: 0xA66E, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA66F, end: 0xA672, property: WordBreak::Extend },
    WordBreakRange { start: 0xA674, end: 0xA67D, property: WordBreak::Extend },
    WordBreakRange { start: 0xA67F, end: 0xA69D, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA69E, end: 0xA69F, property: WordBreak::Extend },
    WordBreakRange { start: 0xA6A0, end: 0xA6EF, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA6F0, end: 0xA6F1, property: WordBreak::Extend },
    WordBreakRange { start: 0xA717, end: 0xA71F, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA722, end: 0xA788, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA78B, end: 0xA7CA, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA7D0, end: 0xA7D1, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA7D3, end: 0xA7D3, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA7D5, end: 0xA7D9, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA7F2, end: 0xA801, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA802, end: 0xA802, property: WordBreak::Extend },
    WordBreakRange { start: 0xA803, end: 0xA805, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA806, end: 0xA806, property: WordBreak::Extend },
    WordBreakRange { start: 0xA807, end: 0xA80A, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA80B, end: 0xA80B, property: WordBreak::Extend },
    WordBreakRange { start: 0xA80C, end: 0xA822, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA823, end: 0xA827, property: WordBreak::Extend },
    WordBreakRange { start: 0xA82C, end: 0xA82C, property: WordBreak::Extend },
    WordBreakRange { start: 0xA840, end: 0xA873, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA880, end: 0xA881, property: WordBreak::Extend },
    WordBreakRange { start: 0xA882, end: 0xA8B3, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA8B4, end: 0xA8C5, property: WordBreak::Extend },
    WordBreakRange { start: 0xA8D0, end: 0xA8D9, property: WordBreak::Numeric },
    WordBreakRange { start: 0xA8E0, end: 0xA8F1, property: WordBreak::Extend },
    WordBreakRange { start: 0xA8F2, end: 0xA8F7, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA8FB, end: 0xA8FB, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA8FD, end: 0xA8FE, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA8FF, end: 0xA8FF, property: WordBreak::Extend },
    WordBreakRange { start: 0xA900, end: 0xA909, property: WordBreak::Numeric },
    WordBreakRange { start: 0xA926, end: 0xA92D, property: WordBreak::Extend },
    WordBreakRange { start: 0xA930, end: 0xA946, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA947, end: 0xA953, property: WordBreak::Extend },
    WordBreakRange { start: 0xA960, end: 0xA97C, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA980, end: 0xA983, property: WordBreak::Extend },
    WordBreakRange { start: 0xA984, end: 0xA9B2, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA9B3, end: 0xA9C0, property: WordBreak::Extend },
    WordBreakRange { start: 0xA9CF, end: 0xA9CF, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA9D0, end: 0xA9D9, property: WordBreak::Numeric },
    WordBreakRange { start: 0xA9E0, end: 0xA9E4, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA9E5, end: 0xA9E5, property: WordBreak::Extend },
    WordBreakRange { start: 0xA9E6, end: 0xA9EF, property: WordBreak::ALetter },
    WordBreakRange { start: 0xA9F0, end: 0xA9F9, property: WordBreak::Numeric },
    WordBreakRange { start: 0xA9FA, end: 0xA9FE, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAA00, end: 0xAA28, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAA29, end: 0xAA36, property: WordBreak::Extend },
    WordBreakRange { start: 0xAA40, end: 0xAA42, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAA43, end: 0xAA43, property: WordBreak::Extend },
    WordBreakRange { start: 0xAA44, end: 0xAA4B, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAA4C, end: 0xAA4D, property: WordBreak::Extend },
    WordBreakRange { start: 0xAA50, end: 0xAA59, property: WordBreak::Numeric },
    WordBreakRange { start: 0xAA7B, end: 0xAA7D, property: WordBreak::Extend },
    WordBreakRange { start: 0xAAB0, end: 0xAAB0, property: WordBreak::Extend },
    WordBreakRange { start: 0xAAB2, end: 0xAAB4, property: WordBreak::Extend },
    WordBreakRange { start: 0xAAB7, end: 0xAAB8, property: WordBreak::Extend },
    WordBreakRange { start: 0xAABE, end: 0xAABF, property: WordBreak::Extend },
    WordBreakRange { start: 0xAAC1, end: 0xAAC1, property: WordBreak::Extend },
    WordBreakRange { start: 0xAAE0, end: 0xAAEA, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAAEB, end: 0xAAEF, property: WordBreak::Extend },
    WordBreakRange { start: 0xAAF2, end: 0xAAF4, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAAF5, end: 0xAAF6, property: WordBreak::Extend },
    WordBreakRange { start: 0xAB01, end: 0xAB06, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAB09, end: 0xAB0E, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAB11, end: 0xAB16, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAB20, end: 0xAB26, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAB28, end: 0xAB2E, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAB30, end: 0xAB5A, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAB5C, end: 0xAB69, property: WordBreak::ALetter },
    WordBreakRange { start: 0xAB70, end: 0xABE2, property: WordBreak::ALetter },
    WordBreakRange { start: 0xABE3, end: 0xABEA, property: WordBreak::Extend },
    WordBreakRange { start: 0xABEC, end: 0xABED, property: WordBreak::Extend },
    WordBreakRange { start: 0xABF0, end: 0xABF9, property: WordBreak::Numeric },
    WordBreakRange { start: 0xAC00, end: 0xD7A3, property: WordBreak::ALetter },
    WordBreakRange { start: 0xD7B0, end: 0xD7C6, property: WordBreak::ALetter },
    WordBreakRange { start: 0xD7CB, end: 0xD7FB, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFB00, end: 0xFB06, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFB13, end: 0xFB17, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFB1D, end: 0xFB1D, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0xFB1E, end: 0xFB1E, property: WordBreak::Extend },
    WordBreakRange { start: 0xFB1F, end: 0xFB28, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0xFB2A, end: 0xFB36, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0xFB38, end: 0xFB3C, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0xFB3E, end: 0xFB3E, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0xFB40, end: 0xFB41, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0xFB43, end: 0xFB44, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0xFB46, end: 0xFB4F, property: WordBreak::HebrewLetter },
    WordBreakRange { start: 0xFB50, end: 0xFBB1, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFBD3, end: 0xFD3D, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFD50, end: 0xFD8F, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFD92, end: 0xFDC7, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFDF0, end: 0xFDFB, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFE00, end: 0xFE0F, property: WordBreak::Extend },
    WordBreakRange { start: 0xFE10, end: 0xFE10, property: WordBreak::MidNum },
    WordBreakRange { start: 0xFE13, end: 0xFE13, property: WordBreak::MidLetter },
    WordBreakRange { start: 0xFE14, end: 0xFE14, property: WordBreak::MidNum },
    WordBreakRange { start: 0xFE20, end: 0xFE2F, property: WordBreak::Extend },
    WordBreakRange { start: 0xFE33, end: 0xFE34, property: WordBreak::ExtendNumLet },
    WordBreakRange { start: 0xFE4D, end: 0xFE4F, property: WordBreak::ExtendNumLet },
    WordBreakRange { start: 0xFE50, end: 0xFE50, property: WordBreak::MidNum },
    WordBreakRange { start: 0xFE52, end: 0xFE52, property: WordBreak::MidNumLet },
    WordBreakRange { start: 0xFE54, end: 0xFE54, property: WordBreak::MidNum },
    WordBreakRange { start: 0xFE55, end: 0xFE55, property: WordBreak::MidLetter },
    WordBreakRange { start: 0xFE70, end: 0xFE74, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFE76, end: 0xFEFC, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFEFF, end: 0xFEFF, property: WordBreak::Format },
    WordBreakRange { start: 0xFF07, end: 0xFF07, property: WordBreak::MidNumLet },
    WordBreakRange { start: 0xFF0C, end: 0xFF0C, property: WordBreak::MidNum },
    WordBreakRange { start: 0xFF0E, end: 0xFF0E, property: WordBreak::MidNumLet },
    WordBreakRange { start: 0xFF10, end: 0xFF19, property: WordBreak::Numeric },
    WordBreakRange { start: 0xFF1A, end: 0xFF1A, property: WordBreak::MidLetter },
    WordBreakRange { start: 0xFF1B, end: 0xFF1B, property: WordBreak::MidNum },
    WordBreakRange { start: 0xFF21, end: 0xFF3A, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFF3F, end: 0xFF3F, property: WordBreak::ExtendNumLet },
    WordBreakRange { start: 0xFF41, end: 0xFF5A, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFF66, end: 0xFF9D, property: WordBreak::Katakana },
    WordBreakRange { start: 0xFF9E, end: 0xFF9F, property: WordBreak::Extend },
    WordBreakRange { start: 0xFFA0, end: 0xFFBE, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFFC2, end: 0xFFC7, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFFCA, end: 0xFFCF, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFFD2, end: 0xFFD7, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFFDA, end: 0xFFDC, property: WordBreak::ALetter },
    WordBreakRange { start: 0xFFF9, end: 0xFFFB, property: WordBreak::Format },
    WordBreakRange { start: 0x10000, end: 0x1000B, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1000D, end: 0x10026, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10028, end: 0x1003A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1003C, end: 0x1003D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1003F, end: 0x1004D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10050, end: 0x1005D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10080, end: 0x100FA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10140, end: 0x10174, property: WordBreak::ALetter },
    WordBreakRange { start: 0x101FD, end: 0x101FD, property: WordBreak::Extend },
    WordBreakRange { start: 0x10280, end: 0x1029C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x102A0, end: 0x102D0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x102E0, end: 0x102E0, property: WordBreak::Extend },
    WordBreakRange { start: 0x10300, end: 0x1031F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1032D, end: 0x1034A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10350, end: 0x10375, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10376, end: 0x1037A, property: WordBreak::Extend },
    WordBreakRange { start: 0x10380, end: 0x1039D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x103A0, end: 0x103C3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x103C8, end: 0x103CF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x103D1, end: 0x103D5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10400, end: 0x1049D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x104A0, end: 0x104A9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x104B0, end: 0x104D3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x104D8, end: 0x104FB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10500, end: 0x10527, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10530, end: 0x10563, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10570, end: 0x1057A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1057C, end: 0x1058A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1058C, end: 0x10592, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10594, end: 0x10595, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10597, end: 0x105A1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x105A3, end: 0x105B1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x105B3, end: 0x105B9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x105BB, end: 0x105BC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10600, end: 0x10736, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10740, end: 0x10755, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10760, end: 0x10767, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10780, end: 0x10785, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10787, end: 0x107B0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x107B2, end: 0x107BA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10800, end: 0x10805, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10808, end: 0x10808, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1080A, end: 0x10835, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10837, end: 0x10838, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1083C, end: 0x1083C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1083F, end: 0x10855, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10860, end: 0x10876, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10880, end: 0x1089E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x108E0, end: 0x108F2, property: WordBreak::ALetter },
    WordBreakRange { start: 0x108F4, end: 0x108F5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10900, end: 0x10915, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10920, end: 0x10939, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10980, end: 0x109B7, property: WordBreak::ALetter },
    WordBreakRange { start: 0x109BE, end: 0x109BF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10A00, end: 0x10A00, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10A01, end: 0x10A03, property: WordBreak::Extend },
    WordBreakRange { start: 0x10A05, end: 0x10A06, property: WordBreak::Extend },
    WordBreakRange { start: 0x10A0C, end: 0x10A0F, property: WordBreak::Extend },
    WordBreakRange { start: 0x10A10, end: 0x10A13, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10A15, end: 0x10A17, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10A19, end: 0x10A35, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10A38, end: 0x10A3A, property: WordBreak::Extend },
    WordBreakRange { start: 0x10A3F, end: 0x10A3F, property: WordBreak::Extend },
    WordBreakRange { start: 0x10A60, end: 0x10A7C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10A80, end: 0x10A9C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10AC0, end: 0x10AC7, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10AC9, end: 0x10AE4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10AE5, end: 0x10AE6, property: WordBreak::Extend },
    WordBreakRange { start: 0x10B00, end: 0x10B35, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10B40, end: 0x10B55, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10B60, end: 0x10B72, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10B80, end: 0x10B91, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10C00, end: 0x10C48, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10C80, end: 0x10CB2, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10CC0, end: 0x10CF2, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10D00, end: 0x10D23, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10D24, end: 0x10D27, property: WordBreak::Extend },
    WordBreakRange { start: 0x10D30, end: 0x10D39, property: WordBreak::Numeric },
    WordBreakRange { start: 0x10E80, end: 0x10EA9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10EAB, end: 0x10EAC, property: WordBreak::Extend },
    WordBreakRange { start: 0x10EB0, end: 0x10EB1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10F00, end: 0x10F1C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10F27, end: 0x10F27, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10F30, end: 0x10F45, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10F46, end: 0x10F50, property: WordBreak::Extend },
    WordBreakRange { start: 0x10F70, end: 0x10F81, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10F82, end: 0x10F85, property: WordBreak::Extend },
    WordBreakRange { start: 0x10FB0, end: 0x10FC4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x10FE0, end: 0x10FF6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11000, end: 0x11002, property: WordBreak::Extend },
    WordBreakRange { start: 0x11003, end: 0x11037, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11038, end: 0x11046, property: WordBreak::Extend },
    WordBreakRange { start: 0x11066, end: 0x1106F, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11070, end: 0x11070, property: WordBreak::Extend },
    WordBreakRange { start: 0x11071, end: 0x11072, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11073, end: 0x11074, property: WordBreak::Extend },
    WordBreakRange { start: 0x11075, end: 0x11075, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1107F, end: 0x11082, property: WordBreak::Extend },
    WordBreakRange { start: 0x11083, end: 0x110AF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x110B0, end: 0x110BA, property: WordBreak::Extend },
    WordBreakRange { start: 0x110BD, end: 0x110BD, property: WordBreak::Format },
    WordBreakRange { start: 0x110C2, end: 0x110C2, property: WordBreak::Extend },
    WordBreakRange { start: 0x110CD, end: 0x110CD, property: WordBreak::Format },
    WordBreakRange { start: 0x110D0, end: 0x110E8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x110F0, end: 0x110F9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11100, end: 0x11102, property: WordBreak::Extend },
    WordBreakRange { start: 0x11103, end: 0x11126, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11127, end: 0x11134, property: WordBreak::Extend },
    WordBreakRange { start: 0x11136, end: 0x1113F, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11144, end: 0x11144, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11145, end: 0x11146, property: WordBreak::Extend },
    WordBreakRange { start: 0x11147, end: 0x11147, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11150, end: 0x11172, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11173, end: 0x11173, property: WordBreak::Extend },
    WordBreakRange { start: 0x11176, end: 0x11176, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11180, end: 0x11182, property: WordBreak::Extend },
    WordBreakRange { start: 0x11183, end: 0x111B2, property: WordBreak::ALetter },
    WordBreakRange { start: 0x111B3, end: 0x111C0, property: WordBreak::Extend },
    WordBreakRange { start: 0x111C1, end: 0x111C4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x111C9, end: 0x111CC, property: WordBreak::Extend },
    WordBreakRange { start: 0x111CE, end: 0x111CF, property: WordBreak::Extend },
    WordBreakRange { start: 0x111D0, end: 0x111D9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x111DA, end: 0x111DA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x111DC, end: 0x111DC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11200, end: 0x11211, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11213, end: 0x1122B, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1122C, end: 0x11237, property: WordBreak::Extend },
    WordBreakRange { start: 0x1123E, end: 0x1123E, property: WordBreak::Extend },
    WordBreakRange { start: 0x11280, end: 0x11286, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11288, end: 0x11288, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1128A, end: 0x1128D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1128F, end: 0x1129D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1129F, end: 0x112A8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x112B0, end: 0x112DE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x112DF, end: 0x112EA, property: WordBreak::Extend },
    WordBreakRange { start: 0x112F0, end: 0x112F9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11300, end: 0x11303, property: WordBreak::Extend },
    WordBreakRange { start: 0x11305, end: 0x1130C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1130F, end: 0x11310, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11313, end: 0x11328, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1132A, end: 0x11330, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11332, end: 0x11333, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11335, end: 0x11339, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1133B, end: 0x1133C, property: WordBreak::Extend },
    WordBreakRange { start: 0x1133D, end: 0x1133D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1133E, end: 0x11344, property: WordBreak::Extend },
    WordBreakRange { start: 0x11347, end: 0x11348, property: WordBreak::Extend },
    WordBreakRange { start: 0x1134B, end: 0x1134D, property: WordBreak::Extend },
    WordBreakRange { start: 0x11350, end: 0x11350, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11357, end: 0x11357, property: WordBreak::Extend },
    WordBreakRange { start: 0x1135D, end: 0x11361, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11362, end: 0x11363, property: WordBreak::Extend },
    WordBreakRange { start: 0x11366, end: 0x1136C, property: WordBreak::Extend },
    WordBreakRange { start: 0x11370, end: 0x11374, property: WordBreak::Extend },
    WordBreakRange { start: 0x11400, end: 0x11434, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11435, end: 0x11446, property: WordBreak::Extend },
    WordBreakRange { start: 0x11447, end: 0x1144A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11450, end: 0x11459, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1145E, end: 0x1145E, property: WordBreak::Extend },
    WordBreakRange { start: 0x1145F, end: 0x11461, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11480, end: 0x114AF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x114B0, end: 0x114C3, property: WordBreak::Extend },
    WordBreakRange { start: 0x114C4, end: 0x114C5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x114C7, end: 0x114C7, property: WordBreak::ALetter },
    WordBreakRange { start: 0x114D0, end: 0x114D9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11580, end: 0x115AE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x115AF, end: 0x115B5, property: WordBreak::Extend },
    WordBreakRange { start: 0x115B8, end: 0x115C0, property: WordBreak::Extend },
    WordBreakRange { start: 0x115D8, end: 0x115DB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x115DC, end: 0x115DD, property: WordBreak::Extend },
    WordBreakRange { start: 0x11600, end: 0x1162F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11630, end: 0x11640, property: WordBreak::Extend },
    WordBreakRange { start: 0x11644, end: 0x11644, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11650, end: 0x11659, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11680, end: 0x116AA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x116AB, end: 0x116B7, property: WordBreak::Extend },
    WordBreakRange { start: 0x116B8, end: 0x116B8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x116C0, end: 0x116C9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1171D, end: 0x1172B, property: WordBreak::Extend },
    WordBreakRange { start: 0x11730, end: 0x11739, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11740, end: 0x11746, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11800, end: 0x1182B, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1182C, end: 0x1183A, property: WordBreak::Extend },
    WordBreakRange { start: 0x118A0, end: 0x118DF, property: WordBreak::ALetter },
    WordBreakRange { start: 0x118E0, end: 0x118E9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x118FF, end: 0x11906, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11909, end: 0x11909, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1190C, end: 0x11913, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11915, end: 0x11916, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11918, end: 0x1192F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11930, end: 0x11935, property: WordBreak::Extend },
    WordBreakRange { start: 0x11937, end: 0x11938, property: WordBreak::Extend },
    WordBreakRange { start: 0x1193B, end: 0x1193E, property: WordBreak::Extend },
    WordBreakRange { start: 0x1193F, end: 0x1193F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11940, end: 0x11940, property: WordBreak::Extend },
    WordBreakRange { start: 0x11941, end: 0x11941, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11942, end: 0x11943, property: WordBreak::Extend },
    WordBreakRange { start: 0x11950, end: 0x11959, property: WordBreak::Numeric },
    WordBreakRange { start: 0x119A0, end: 0x119A7, property: WordBreak::ALetter },
    WordBreakRange { start: 0x119AA, end: 0x119D0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x119D1, end: 0x119D7, property: WordBreak::Extend },
    WordBreakRange { start: 0x119DA, end: 0x119E0, property: WordBreak::Extend },
    WordBreakRange { start: 0x119E1, end: 0x119E1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x119E3, end: 0x119E3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x119E4, end: 0x119E4, property: WordBreak::Extend },
    WordBreakRange { start: 0x11A00, end: 0x11A00, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11A01, end: 0x11A0A, property: WordBreak::Extend },
    WordBreakRange { start: 0x11A0B, end: 0x11A32, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11A33, end: 0x11A39, property: WordBreak::Extend },
    WordBreakRange { start: 0x11A3A, end: 0x11A3A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11A3B, end: 0x11A3E, property: WordBreak::Extend },
    WordBreakRange { start: 0x11A47, end: 0x11A47, property: WordBreak::Extend },
    WordBreakRange { start: 0x11A50, end: 0x11A50, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11A51, end: 0x11A5B, property: WordBreak::Extend },
    WordBreakRange { start: 0x11A5C, end: 0x11A89, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11A8A, end: 0x11A99, property: WordBreak::Extend },
    WordBreakRange { start: 0x11A9D, end: 0x11A9D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11AB0, end: 0x11AF8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11C00, end: 0x11C08, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11C0A, end: 0x11C2E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11C2F, end: 0x11C36, property: WordBreak::Extend },
    WordBreakRange { start: 0x11C38, end: 0x11C3F, property: WordBreak::Extend },
    WordBreakRange { start: 0x11C40, end: 0x11C40, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11C50, end: 0x11C59, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11C72, end: 0x11C8F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11C92, end: 0x11CA7, property: WordBreak::Extend },
    WordBreakRange { start: 0x11CA9, end: 0x11CB6, property: WordBreak::Extend },
    WordBreakRange { start: 0x11D00, end: 0x11D06, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11D08, end: 0x11D09, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11D0B, end: 0x11D30, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11D31, end: 0x11D36, property: WordBreak::Extend },
    WordBreakRange { start: 0x11D3A, end: 0x11D3A, property: WordBreak::Extend },
    WordBreakRange { start: 0x11D3C, end: 0x11D3D, property: WordBreak::Extend },
    WordBreakRange { start: 0x11D3F, end: 0x11D45, property: WordBreak::Extend },
    WordBreakRange { start: 0x11D46, end: 0x11D46, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11D47, end: 0x11D47, property: WordBreak::Extend },
    WordBreakRange { start: 0x11D50, end: 0x11D59, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11D60, end: 0x11D65, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11D67, end: 0x11D68, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11D6A, end: 0x11D89, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11D8A, end: 0x11D8E, property: WordBreak::Extend },
    WordBreakRange { start: 0x11D90, end: 0x11D91, property: WordBreak::Extend },
    WordBreakRange { start: 0x11D93, end: 0x11D97, property: WordBreak::Extend },
    WordBreakRange { start: 0x11D98, end: 0x11D98, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11DA0, end: 0x11DA9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x11EE0, end: 0x11EF2, property: WordBreak::ALetter },
    WordBreakRange { start: 0x11EF3, end: 0x11EF6, property: WordBreak::Extend },
    WordBreakRange { start: 0x11FB0, end: 0x11FB0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12000, end: 0x12399, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12400, end: 0x1246E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12480, end: 0x12543, property: WordBreak::ALetter },
    WordBreakRange { start: 0x12F90, end: 0x12FF0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x13000, end: 0x1342E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x13430, end: 0x13438, property: WordBreak::Format },
    WordBreakRange { start: 0x14400, end: 0x14646, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16800, end: 0x16A38, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16A40, end: 0x16A5E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16A60, end: 0x16A69, property: WordBreak::Numeric },
    WordBreakRange { start: 0x16A70, end: 0x16ABE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16AC0, end: 0x16AC9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x16AD0, end: 0x16AED, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16AF0, end: 0x16AF4, property: WordBreak::Extend },
    WordBreakRange { start: 0x16B00, end: 0x16B2F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16B30, end: 0x16B36, property: WordBreak::Extend },
    WordBreakRange { start: 0x16B40, end: 0x16B43, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16B50, end: 0x16B59, property: WordBreak::Numeric },
    WordBreakRange { start: 0x16B63, end: 0x16B77, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16B7D, end: 0x16B8F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16E40, end: 0x16E7F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16F00, end: 0x16F4A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16F4F, end: 0x16F4F, property: WordBreak::Extend },
    WordBreakRange { start: 0x16F50, end: 0x16F50, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16F51, end: 0x16F87, property: WordBreak::Extend },
    WordBreakRange { start: 0x16F8F, end: 0x16F92, property: WordBreak::Extend },
    WordBreakRange { start: 0x16F93, end: 0x16F9F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16FE0, end: 0x16FE1, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16FE3, end: 0x16FE3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x16FE4, end: 0x16FE4, property: WordBreak::Extend },
    WordBreakRange { start: 0x16FF0, end: 0x16FF1, property: WordBreak::Extend },
    WordBreakRange { start: 0x18D00, end: 0x18D08, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1AFF0, end: 0x1AFF3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1AFF5, end: 0x1AFFB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1AFFD, end: 0x1AFFE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1B000, end: 0x1B000, property: WordBreak::Katakana },
    WordBreakRange { start: 0x1B120, end: 0x1B122, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1B164, end: 0x1B167, property: WordBreak::Katakana },
    WordBreakRange { start: 0x1BC00, end: 0x1BC6A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1BC70, end: 0x1BC7C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1BC80, end: 0x1BC88, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1BC90, end: 0x1BC99, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1BC9D, end: 0x1BC9E, property: WordBreak::Extend },
    WordBreakRange { start: 0x1BCA0, end: 0x1BCA3, property: WordBreak::Format },
    WordBreakRange { start: 0x1CF00, end: 0x1CF2D, property: WordBreak::Extend },
    WordBreakRange { start: 0x1CF30, end: 0x1CF46, property: WordBreak::Extend },
    WordBreakRange { start: 0x1D165, end: 0x1D169, property: WordBreak::Extend },
    WordBreakRange { start: 0x1D16D, end: 0x1D172, property: WordBreak::Extend },
    WordBreakRange { start: 0x1D173, end: 0x1D17A, property: WordBreak::Format },
    WordBreakRange { start: 0x1D17B, end: 0x1D182, property: WordBreak::Extend },
    WordBreakRange { start: 0x1D185, end: 0x1D18B, property: WordBreak::Extend },
    WordBreakRange { start: 0x1D1AA, end: 0x1D1AD, property: WordBreak::Extend },
    WordBreakRange { start: 0x1D242, end: 0x1D244, property: WordBreak::Extend },
    WordBreakRange { start: 0x1D400, end: 0x1D454, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D456, end: 0x1D49C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D49E, end: 0x1D49F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D4A2, end: 0x1D4A2, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D4A5, end: 0x1D4A6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D4A9, end: 0x1D4AC, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D4AE, end: 0x1D4B9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D4BB, end: 0x1D4BB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D4BD, end: 0x1D4C3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D4C5, end: 0x1D505, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D507, end: 0x1D50A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D50D, end: 0x1D514, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D516, end: 0x1D51C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D51E, end: 0x1D539, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D53B, end: 0x1D53E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D540, end: 0x1D544, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D546, end: 0x1D546, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D54A, end: 0x1D550, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D552, end: 0x1D6A5, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D6A8, end: 0x1D6C0, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D6C2, end: 0x1D6DA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D6DC, end: 0x1D6FA, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D6FC, end: 0x1D714, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D716, end: 0x1D734, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D736, end: 0x1D74E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D750, end: 0x1D76E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D770, end: 0x1D788, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D78A, end: 0x1D7A8, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D7AA, end: 0x1D7C2, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D7C4, end: 0x1D7CB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1D7CE, end: 0x1D7FF, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1DA00, end: 0x1DA36, property: WordBreak::Extend },
    WordBreakRange { start: 0x1DA3B, end: 0x1DA6C, property: WordBreak::Extend },
    WordBreakRange { start: 0x1DA75, end: 0x1DA75, property: WordBreak::Extend },
    WordBreakRange { start: 0x1DA84, end: 0x1DA84, property: WordBreak::Extend },
    WordBreakRange { start: 0x1DA9B, end: 0x1DA9F, property: WordBreak::Extend },
    WordBreakRange { start: 0x1DAA1, end: 0x1DAAF, property: WordBreak::Extend },
    WordBreakRange { start: 0x1DF00, end: 0x1DF1E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E000, end: 0x1E006, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E008, end: 0x1E018, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E01B, end: 0x1E021, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E023, end: 0x1E024, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E026, end: 0x1E02A, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E100, end: 0x1E12C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E130, end: 0x1E136, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E137, end: 0x1E13D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E140, end: 0x1E149, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1E14E, end: 0x1E14E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E290, end: 0x1E2AD, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E2AE, end: 0x1E2AE, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E2C0, end: 0x1E2EB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E2EC, end: 0x1E2EF, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E2F0, end: 0x1E2F9, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1E7E0, end: 0x1E7E6, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E7E8, end: 0x1E7EB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E7ED, end: 0x1E7EE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E7F0, end: 0x1E7FE, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E800, end: 0x1E8C4, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E8D0, end: 0x1E8D6, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E900, end: 0x1E943, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E944, end: 0x1E94A, property: WordBreak::Extend },
    WordBreakRange { start: 0x1E94B, end: 0x1E94B, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1E950, end: 0x1E959, property: WordBreak::Numeric },
    WordBreakRange { start: 0x1EE00, end: 0x1EE03, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE05, end: 0x1EE1F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE21, end: 0x1EE22, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE24, end: 0x1EE24, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE27, end: 0x1EE27, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE29, end: 0x1EE32, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE34, end: 0x1EE37, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE39, end: 0x1EE39, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE3B, end: 0x1EE3B, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE42, end: 0x1EE42, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE47, end: 0x1EE47, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE49, end: 0x1EE49, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE4B, end: 0x1EE4B, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE4D, end: 0x1EE4F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE51, end: 0x1EE52, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE54, end: 0x1EE54, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE57, end: 0x1EE57, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE59, end: 0x1EE59, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE5B, end: 0x1EE5B, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE5D, end: 0x1EE5D, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE5F, end: 0x1EE5F, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE61, end: 0x1EE62, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE64, end: 0x1EE64, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE67, end: 0x1EE6A, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE6C, end: 0x1EE72, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE74, end: 0x1EE77, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE79, end: 0x1EE7C, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE7E, end: 0x1EE7E, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE80, end: 0x1EE89, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EE8B, end: 0x1EE9B, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EEA1, end: 0x1EEA3, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EEA5, end: 0x1EEA9, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1EEAB, end: 0x1EEBB, property: WordBreak::ALetter },
    WordBreakRange { start: 0x1F1E6, end: 0x1F1FF, property: WordBreak::RegionalIndicator },
    WordBreakRange { start: 0x1F3FB, end: 0x1F3FF, property: WordBreak::Extend },
    WordBreakRange { start: 0x1FBF0, end: 0x1FBF9, property: WordBreak::Numeric },
    WordBreakRange { start: 0xE0001, end: 0xE0001, property: WordBreak::Format },
    WordBreakRange { start: 0xE0020, end: 0xE007F, property: WordBreak::Extend },
    WordBreakRange { start: 0xE0100, end: 0xE01EF, property: WordBreak::Extend },
];
