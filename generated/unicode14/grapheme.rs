// Generated by `cargo run -p xtask -- unicode` from UCD 14.0.0 data. Do not edit.
pub static GRAPHEME_BREAK_RANGES: &[GraphemeBreakRange] = &[
    GraphemeBreakRange { start: 0x0000, end: 0x0009, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x000A, end: 0x000A, property: GraphemeBreak::LF },
    GraphemeBreakRange { start: 0x000B, end: 0x000C, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x000D, end: 0x000D, property: GraphemeBreak::CR },
    GraphemeBreakRange { start: 0x000E, end: 0x001F, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x007F, end: 0x009F, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x00AD, end: 0x00AD, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x0300, end: 0x036F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0483, end: 0x0489, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0591, end: 0x05BD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x05BF, end: 0x05BF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x05C1, end: 0x05C2, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x05C4, end: 0x05C5, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x05C7, end: 0x05C7, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0600, end: 0x0605, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x0610, end: 0x061A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x061C, end: 0x061C, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x064B, end: 0x065F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0670, end: 0x0670, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x06D6, end: 0x06DC, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x06DD, end: 0x06DD, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x06DF, end: 0x06E4, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x06E7, end: 0x06E8, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x06EA, end: 0x06ED, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x070F, end: 0x070F, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x0711, end: 0x0711, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0730, end: 0x074A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x07A6, end: 0x07B0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x07EB, end: 0x07F3, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x07FD, end: 0x07FD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0816, end: 0x0819, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x081B, end: 0x0823, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0825, end: 0x0827, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0829, end: 0x082D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0859, end: 0x085B, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0890, end: 0x0891, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x0898, end: 0x089F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x08CA, end: 0x08E1, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x08E2, end: 0x08E2, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x08E3, end: 0x0902, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0903, end: 0x0903, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x093A, end: 0x093A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x093B, end: 0x093B, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x093C, end: 0x093C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x093E, end: 0x0940, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0941, end: 0x0948, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0949, end: 0x094C, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x094D, end: 0x094D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x094E, end: 0x094F, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0951, end: 0x0957, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0962, end: 0x0963, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0981, end: 0x0981, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0982, end: 0x0983, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x09BC, end: 0x09BC, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x09BE, end: 0x09BE, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x09BF, end: 0x09C0, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x09C1, end: 0x09C4, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x09C7, end: 0x09C8, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x09CB, end: 0x09CC, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x09CD, end: 0x09CD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x09D7, end: 0x09D7, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x09E2, end: 0x09E3, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x09FE, end: 0x09FE, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A01, end: 0x0A02, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A03, end: 0x0A03, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0A3C, end: 0x0A3C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A3E, end: 0x0A40, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0A41, end: 0x0A42, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A47, end: 0x0A48, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A4B, end: 0x0A4D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A51, end: 0x0A51, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A70, end: 0x0A71, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A75, end: 0x0A75, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A81, end: 0x0A82, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0A83, end: 0x0A83, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0ABC, end: 0x0ABC, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0ABE, end: 0x0AC0, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0AC1, end: 0x0AC5, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0AC7, end: 0x0AC8, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0AC9, end: 0x0AC9, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0ACB, end: 0x0ACC, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0ACD, end: 0x0ACD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0AE2, end: 0x0AE3, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0AFA, end: 0x0AFF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0B01, end: 0x0B01, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0B02, end: 0x0B03, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0B3C, end: 0x0B3C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0B3E, end: 0x0B3F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0B40, end: 0x0B40, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0B41, end: 0x0B44, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0B47, end: 0x0B48, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0B4B, end: 0x0B4C, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0B4D, end: 0x0B4D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0B55, end: 0x0B57, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0B62, end: 0x0B63, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0B82, end: 0x0B82, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0BBE, end: 0x0BBE, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0BBF, end: 0x0BBF, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0BC0, end: 0x0BC0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0BC1, end: 0x0BC2, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0BC6, end: 0x0BC8, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0BCA, end: 0x0BCC, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0BCD, end: 0x0BCD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0BD7, end: 0x0BD7, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C00, end: 0x0C00, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C01, end: 0x0C03, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0C04, end: 0x0C04, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C3C, end: 0x0C3C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C3E, end: 0x0C40, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C41, end: 0x0C44, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0C46, end: 0x0C48, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C4A, end: 0x0C4D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C55, end: 0x0C56, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C62, end: 0x0C63, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C81, end: 0x0C81, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0C82, end: 0x0C83, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0CBC, end: 0x0CBC, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0CBE, end: 0x0CBE, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0CBF, end: 0x0CBF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0CC0, end: 0x0CC1, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0CC2, end: 0x0CC2, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0CC3, end: 0x0CC4, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0CC6, end: 0x0CC6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0CC7, end: 0x0CC8, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0CCA, end: 0x0CCB, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0CCC, end: 0x0CCD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0CD5, end: 0x0CD6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0CE2, end: 0x0CE3, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0D00, end: 0x0D01, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0D02, end: 0x0D03, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0D3B, end: 0x0D3C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0D3E, end: 0x0D3E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0D3F, end: 0x0D40, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0D41, end: 0x0D44, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0D46, end: 0x0D48, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0D4A, end: 0x0D4C, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0D4D, end: 0x0D4D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0D4E, end: 0x0D4E, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x0D57, end: 0x0D57, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0D62, end: 0x0D63, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0D81, end: 0x0D81, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0D82, end: 0x0D83, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0DCA, end: 0x0DCA, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0DCF, end: 0x0DCF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0DD0, end: 0x0DD1, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0DD2, end: 0x0DD4, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0DD6, end: 0x0DD6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0DD8, end: 0x0DDE, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0DDF, end: 0x0DDF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0DF2, end: 0x0DF3, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0E31, end: 0x0E31, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0E34, end: 0x0E3A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0E47, end: 0x0E4E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0EB1, end: 0x0EB1, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0EB4, end: 0x0EBC, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0EC8, end: 0x0ECD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0F18, end: 0x0F19, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0F35, end: 0x0F35, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0F37, end: 0x0F37, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0F39, end: 0x0F39, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0F3E, end: 0x0F3F, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0F71, end: 0x0F7E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0F7F, end: 0x0F7F, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x0F80, end: 0x0F84, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0F86, end: 0x0F87, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0F8D, end: 0x0F97, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0F99, end: 0x0FBC, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x0FC6, end: 0x0FC6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x102D, end: 0x1030, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1031, end: 0x1031, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1032, end: 0x1037, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1039, end: 0x103A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x103B, end: 0x103C, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x103D, end: 0x103E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1056, end: 0x1057, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1058, end: 0x1059, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x105E, end: 0x1060, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1071, end: 0x1074, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1082, end: 0x1082, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1084, end: 0x1084, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1085, end: 0x1086, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x108D, end: 0x108D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x109D, end: 0x109D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1100, end: 0x115F, property: GraphemeBreak::L },
    GraphemeBreakRange { start: 0x1160, end: 0x11A7, property: GraphemeBreak::V },
    GraphemeBreakRange { start: 0x11A8, end: 0x11FF, property: GraphemeBreak::T },
    GraphemeBreakRange { start: 0x135D, end: 0x135F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1712, end: 0x1714, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1715, end: 0x1715, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1732, end: 0x1733, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1734, end: 0x1734, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1752, end: 0x1753, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1772, end: 0x1773, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x17B4, end: 0x17B5, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x17B6, end: 0x17B6, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x17B7, end: 0x17BD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x17BE, end: 0x17C5, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x17C6, end: 0x17C6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x17C7, end: 0x17C8, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x17C9, end: 0x17D3, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x17DD, end: 0x17DD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x180B, end: 0x180D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x180E, end: 0x180E, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x180F, end: 0x180F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1885, end: 0x1886, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x18A9, end: 0x18A9, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1920, end: 0x1922, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1923, end: 0x1926, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1927, end: 0x1928, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1929, end: 0x192B, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1930, end: 0x1931, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1932, end: 0x1932, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1933, end: 0x1938, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1939, end: 0x193B, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1A17, end: 0x1A18, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1A19, end: 0x1A1A, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1A1B, end: 0x1A1B, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1A55, end: 0x1A55, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1A56, end: 0x1A56, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1A57, end: 0x1A57, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1A58, end: 0x1A5E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1A60, end: 0x1A60, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1A62, end: 0x1A62, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1A65, end: 0x1A6C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1A6D, end: 0x1A72, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1A73, end: 0x1A7C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1A7F, end: 0x1A7F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1AB0, end: 0x1ACE, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1B00, end: 0x1B03, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1B04, end: 0x1B04, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1B34, end: 0x1B3A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1B3B, end: 0x1B3B, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1B3C, end: 0x1B3C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1B3D, end: 0x1B41, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1B42, end: 0x1B42, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1B43, end: 0x1B44, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1B6B, end: 0x1B73, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1B80, end: 0x1B81, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1B82, end: 0x1B82, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1BA1, end: 0x1BA1, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1BA2, end: 0x1BA5, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1BA6, end: 0x1BA7, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1BA8, end: 0x1BA9, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1BAA, end: 0x1BAA, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1BAB, end: 0x1BAD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1BE6, end: 0x1BE6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1BE7, end: 0x1BE7, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1BE8, end: 0x1BE9, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1BEA, end: 0x1BEC, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1BED, end: 0x1BED, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1BEE, end: 0x1BEE, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1BEF, end: 0x1BF1, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1BF2, end: 0x1BF3, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1C24, end: 0x1C2B, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1C2C, end: 0x1C33, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1C34, end: 0x1C35, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1C36, end: 0x1C37, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1CD0, end: 0x1CD2, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1CD4, end: 0x1CE0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1CE1, end: 0x1CE1, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1CE2, end: 0x1CE8, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1CED, end: 0x1CED, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1CF4, end: 0x1CF4, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1CF7, end: 0x1CF7, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1CF8, end: 0x1CF9, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1DC0, end: 0x1DFF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x200B, end: 0x200B, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x200C, end: 0x200C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x200D, end: 0x200D, property: GraphemeBreak::ZWJ },
    GraphemeBreakRange { start: 0x200E, end: 0x200F, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x2028, end: 0x202E, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x2060, end: 0x206F, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x20D0, end: 0x20F0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x2CEF, end: 0x2CF1, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x2D7F, end: 0x2D7F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x2DE0, end: 0x2DFF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x302A, end: 0x302F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x3099, end: 0x309A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA66F, end: 0xA672, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA674, end: 0xA67D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA69E, end: 0xA69F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA6F0, end: 0xA6F1, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA802, end: 0xA802, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA806, end: 0xA806, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA80B, end: 0xA80B, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA823, end: 0xA824, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xA825, end: 0xA826, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA827, end: 0xA827, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xA82C, end: 0xA82C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA880, end: 0xA881, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xA8B4, end: 0xA8C3, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xA8C4, end: 0xA8C5, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA8E0, end: 0xA8F1, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA8FF, end: 0xA8FF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA926, end: 0xA92D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA947, end: 0xA951, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA952, end: 0xA953, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xA960, end: 0xA97C, property: GraphemeBreak::L },
    GraphemeBreakRange { start: 0xA980, end: 0xA982, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA983, end: 0xA983, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xA9B3, end: 0xA9B3, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA9B4, end: 0xA9B5, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xA9B6, end: 0xA9B9, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA9BA, end: 0xA9BB, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xA9BC, end: 0xA9BD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xA9BE, end: 0xA9C0, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xA9E5, end: 0xA9E5, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAA29, end: 0xAA2E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAA2F, end: 0xAA30, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xAA31, end: 0xAA32, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAA33, end: 0xAA34, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xAA35, end: 0xAA36, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAA43, end: 0xAA43, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAA4C, end: 0xAA4C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAA4D, end: 0xAA4D, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xAA7C, end: 0xAA7C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAAB0, end: 0xAAB0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAAB2, end: 0xAAB4, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAAB7, end: 0xAAB8, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAABE, end: 0xAABF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAAC1, end: 0xAAC1, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAAEB, end: 0xAAEB, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xAAEC, end: 0xAAED, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAAEE, end: 0xAAEF, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xAAF5, end: 0xAAF5, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xAAF6, end: 0xAAF6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xABE3, end: 0xABE4, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xABE5, end: 0xABE5, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xABE6, end: 0xABE7, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xABE8, end: 0xABE8, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xABE9, end: 0xABEA, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xABEC, end: 0xABEC, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0xABED, end: 0xABED, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xAC00, end: 0xAC00, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAC01, end: 0xAC1B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAC1C, end: 0xAC1C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAC1D, end: 0xAC37, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAC38, end: 0xAC38, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAC39, end: 0xAC53, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAC54, end: 0xAC54, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAC55, end: 0xAC6F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAC70, end: 0xAC70, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAC71, end: 0xAC8B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAC8C, end: 0xAC8C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAC8D, end: 0xACA7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xACA8, end: 0xACA8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xACA9, end: 0xACC3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xACC4, end: 0xACC4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xACC5, end: 0xACDF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xACE0, end: 0xACE0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xACE1, end: 0xACFB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xACFC, end: 0xACFC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xACFD, end: 0xAD17, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAD18, end: 0xAD18, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAD19, end: 0xAD33, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAD34, end: 0xAD34, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAD35, end: 0xAD4F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAD50, end: 0xAD50, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAD51, end: 0xAD6B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAD6C, end: 0xAD6C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAD6D, end: 0xAD87, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAD88, end: 0xAD88, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAD89, end: 0xADA3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xADA4, end: 0xADA4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xADA5, end: 0xADBF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xADC0, end: 0xADC0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xADC1, end: 0xADDB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xADDC, end: 0xADDC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xADDD, end: 0xADF7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xADF8, end: 0xADF8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xADF9, end: 0xAE13, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAE14, end: 0xAE14, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAE15, end: 0xAE2F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAE30, end: 0xAE30, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAE31, end: 0xAE4B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAE4C, end: 0xAE4C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAE4D, end: 0xAE67, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAE68, end: 0xAE68, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAE69, end: 0xAE83, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAE84, end: 0xAE84, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAE85, end: 0xAE9F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAEA0, end: 0xAEA0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAEA1, end: 0xAEBB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAEBC, end: 0xAEBC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAEBD, end: 0xAED7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAED8, end: 0xAED8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAED9, end: 0xAEF3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAEF4, end: 0xAEF4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAEF5, end: 0xAF0F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAF10, end: 0xAF10, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAF11, end: 0xAF2B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAF2C, end: 0xAF2C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAF2D, end: 0xAF47, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAF48, end: 0xAF48, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAF49, end: 0xAF63, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAF64, end: 0xAF64, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAF65, end: 0xAF7F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAF80, end: 0xAF80, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAF81, end: 0xAF9B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAF9C, end: 0xAF9C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAF9D, end: 0xAFB7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAFB8, end: 0xAFB8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAFB9, end: 0xAFD3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAFD4, end: 0xAFD4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAFD5, end: 0xAFEF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xAFF0, end: 0xAFF0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xAFF1, end: 0xB00B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB00C, end: 0xB00C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB00D, end: 0xB027, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB028, end: 0xB028, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB029, end: 0xB043, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB044, end: 0xB044, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB045, end: 0xB05F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB060, end: 0xB060, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB061, end: 0xB07B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB07C, end: 0xB07C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB07D, end: 0xB097, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB098, end: 0xB098, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB099, end: 0xB0B3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB0B4, end: 0xB0B4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB0B5, end: 0xB0CF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB0D0, end: 0xB0D0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB0D1, end: 0xB0EB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB0EC, end: 0xB0EC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB0ED, end: 0xB107, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB108, end: 0xB108, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB109, end: 0xB123, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB124, end: 0xB124, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB125, end: 0xB13F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB140, end: 0xB140, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB141, end: 0xB15B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB15C, end: 0xB15C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB15D, end: 0xB177, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB178, end: 0xB178, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB179, end: 0xB193, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB194, end: 0xB194, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB195, end: 0xB1AF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB1B0, end: 0xB1B0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB1B1, end: 0xB1CB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB1CC, end: 0xB1CC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB1CD, end: 0xB1E7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB1E8, end: 0xB1E8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB1E9, end: 0xB203, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB204, end: 0xB204, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB205, end: 0xB21F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB220, end: 0xB220, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB221, end: 0xB23B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB23C, end: 0xB23C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB23D, end: 0xB257, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB258, end: 0xB258, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB259, end: 0xB273, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB274, end: 0xB274, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB275, end: 0xB28F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB290, end: 0xB290, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB291, end: 0xB2AB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB2AC, end: 0xB2AC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB2AD, end: 0xB2C7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB2C8, end: 0xB2C8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB2C9, end: 0xB2E3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB2E4, end: 0xB2E4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB2E5, end: 0xB2FF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB300, end: 0xB300, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB301, end: 0xB31B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB31C, end: 0xB31C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB31D, end: 0xB337, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB338, end: 0xB338, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB339, end: 0xB353, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB354, end: 0xB354, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB355, end: 0xB36F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB370, end: 0xB370, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB371, end: 0xB38B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB38C, end: 0xB38C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB38D, end: 0xB3A7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB3A8, end: 0xB3A8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB3A9, end: 0xB3C3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB3C4, end: 0xB3C4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB3C5, end: 0xB3DF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB3E0, end: 0xB3E0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB3E1, end: 0xB3FB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB3FC, end: 0xB3FC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB3FD, end: 0xB417, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB418, end: 0xB418, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB419, end: 0xB433, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB434, end: 0xB434, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB435, end: 0xB44F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB450, end: 0xB450, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB451, end: 0xB46B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB46C, end: 0xB46C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB46D, end: 0xB487, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB488, end: 0xB488, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB489, end: 0xB4A3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB4A4, end: 0xB4A4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB4A5, end: 0xB4BF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB4C0, end: 0xB4C0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB4C1, end: 0xB4DB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB4DC, end: 0xB4DC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB4DD, end: 0xB4F7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB4F8, end: 0xB4F8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB4F9, end: 0xB513, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB514, end: 0xB514, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB515, end: 0xB52F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB530, end: 0xB530, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB531, end: 0xB54B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB54C, end: 0xB54C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB54D, end: 0xB567, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB568, end: 0xB568, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB569, end: 0xB583, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB584, end: 0xB584, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB585, end: 0xB59F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB5A0, end: 0xB5A0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB5A1, end: 0xB5BB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB5BC, end: 0xB5BC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB5BD, end: 0xB5D7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB5D8, end: 0xB5D8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB5D9, end: 0xB5F3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB5F4, end: 0xB5F4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB5F5, end: 0xB60F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB610, end: 0xB610, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB611, end: 0xB62B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB62C, end: 0xB62C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB62D, end: 0xB647, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB648, end: 0xB648, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB649, end: 0xB663, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB664, end: 0xB664, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB665, end: 0xB67F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB680, end: 0xB680, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB681, end: 0xB69B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB69C, end: 0xB69C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB69D, end: 0xB6B7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB6B8, end: 0xB6B8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB6B9, end: 0xB6D3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB6D4, end: 0xB6D4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB6D5, end: 0xB6EF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB6F0, end: 0xB6F0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB6F1, end: 0xB70B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB70C, end: 0xB70C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB70D, end: 0xB727, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB728, end: 0xB728, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB729, end: 0xB743, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB744, end: 0xB744, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB745, end: 0xB75F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB760, end: 0xB760, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB761, end: 0xB77B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB77C, end: 0xB77C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB77D, end: 0xB797, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB798, end: 0xB798, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB799, end: 0xB7B3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB7B4, end: 0xB7B4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB7B5, end: 0xB7CF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB7D0, end: 0xB7D0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB7D1, end: 0xB7EB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB7EC, end: 0xB7EC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB7ED, end: 0xB807, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB808, end: 0xB808, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB809, end: 0xB823, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB824, end: 0xB824, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB825, end: 0xB83F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB840, end: 0xB840, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB841, end: 0xB85B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB85C, end: 0xB85C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB85D, end: 0xB877, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB878, end: 0xB878, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB879, end: 0xB893, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB894, end: 0xB894, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB895, end: 0xB8AF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB8B0, end: 0xB8B0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB8B1, end: 0xB8CB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB8CC, end: 0xB8CC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB8CD, end: 0xB8E7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB8E8, end: 0xB8E8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB8E9, end: 0xB903, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB904, end: 0xB904, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB905, end: 0xB91F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB920, end: 0xB920, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB921, end: 0xB93B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB93C, end: 0xB93C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB93D, end: 0xB957, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB958, end: 0xB958, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB959, end: 0xB973, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB974, end: 0xB974, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB975, end: 0xB98F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB990, end: 0xB990, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB991, end: 0xB9AB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB9AC, end: 0xB9AC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB9AD, end: 0xB9C7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB9C8, end: 0xB9C8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB9C9, end: 0xB9E3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xB9E4, end: 0xB9E4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xB9E5, end: 0xB9FF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBA00, end: 0xBA00, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBA01, end: 0xBA1B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBA1C, end: 0xBA1C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBA1D, end: 0xBA37, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBA38, end: 0xBA38, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBA39, end: 0xBA53, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBA54, end: 0xBA54, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBA55, end: 0xBA6F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBA70, end: 0xBA70, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBA71, end: 0xBA8B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBA8C, end: 0xBA8C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBA8D, end: 0xBAA7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBAA8, end: 0xBAA8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBAA9, end: 0xBAC3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBAC4, end: 0xBAC4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBAC5, end: 0xBADF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBAE0, end: 0xBAE0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBAE1, end: 0xBAFB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBAFC, end: 0xBAFC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBAFD, end: 0xBB17, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBB18, end: 0xBB18, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBB19, end: 0xBB33, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBB34, end: 0xBB34, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBB35, end: 0xBB4F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBB50, end: 0xBB50, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBB51, end: 0xBB6B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBB6C, end: 0xBB6C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBB6D, end: 0xBB87, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBB88, end: 0xBB88, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBB89, end: 0xBBA3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBBA4, end: 0xBBA4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBBA5, end: 0xBBBF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBBC0, end: 0xBBC0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBBC1, end: 0xBBDB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBBDC, end: 0xBBDC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBBDD, end: 0xBBF7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBBF8, end: 0xBBF8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBBF9, end: 0xBC13, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBC14, end: 0xBC14, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBC15, end: 0xBC2F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBC30, end: 0xBC30, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBC31, end: 0xBC4B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBC4C, end: 0xBC4C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBC4D, end: 0xBC67, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBC68, end: 0xBC68, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBC69, end: 0xBC83, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBC84, end: 0xBC84, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBC85, end: 0xBC9F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBCA0, end: 0xBCA0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBCA1, end: 0xBCBB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBCBC, end: 0xBCBC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBCBD, end: 0xBCD7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBCD8, end: 0xBCD8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBCD9, end: 0xBCF3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBCF4, end: 0xBCF4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBCF5, end: 0xBD0F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBD10, end: 0xBD10, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBD11, end: 0xBD2B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBD2C, end: 0xBD2C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBD2D, end: 0xBD47, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBD48, end: 0xBD48, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBD49, end: 0xBD63, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBD64, end: 0xBD64, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBD65, end: 0xBD7F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBD80, end: 0xBD80, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBD81, end: 0xBD9B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBD9C, end: 0xBD9C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBD9D, end: 0xBDB7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBDB8, end: 0xBDB8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBDB9, end: 0xBDD3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBDD4, end: 0xBDD4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBDD5, end: 0xBDEF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBDF0, end: 0xBDF0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBDF1, end: 0xBE0B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBE0C, end: 0xBE0C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBE0D, end: 0xBE27, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBE28, end: 0xBE28, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBE29, end: 0xBE43, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBE44, end: 0xBE44, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBE45, end: 0xBE5F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBE60, end: 0xBE60, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBE61, end: 0xBE7B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBE7C, end: 0xBE7C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBE7D, end: 0xBE97, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBE98, end: 0xBE98, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBE99, end: 0xBEB3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBEB4, end: 0xBEB4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBEB5, end: 0xBECF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBED0, end: 0xBED0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBED1, end: 0xBEEB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBEEC, end: 0xBEEC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBEED, end: 0xBF07, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBF08, end: 0xBF08, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBF09, end: 0xBF23, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBF24, end: 0xBF24, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBF25, end: 0xBF3F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBF40, end: 0xBF40, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBF41, end: 0xBF5B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBF5C, end: 0xBF5C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBF5D, end: 0xBF77, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBF78, end: 0xBF78, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBF79, end: 0xBF93, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBF94, end: 0xBF94, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBF95, end: 0xBFAF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBFB0, end: 0xBFB0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBFB1, end: 0xBFCB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBFCC, end: 0xBFCC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBFCD, end: 0xBFE7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xBFE8, end: 0xBFE8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xBFE9, end: 0xC003, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC004, end: 0xC004, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC005, end: 0xC01F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC020, end: 0xC020, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC021, end: 0xC03B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC03C, end: 0xC03C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC03D, end: 0xC057, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC058, end: 0xC058, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC059, end: 0xC073, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC074, end: 0xC074, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC075, end: 0xC08F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC090, end: 0xC090, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC091, end: 0xC0AB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC0AC, end: 0xC0AC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC0AD, end: 0xC0C7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC0C8, end: 0xC0C8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC0C9, end: 0xC0E3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC0E4, end: 0xC0E4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC0E5, end: 0xC0FF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC100, end: 0xC100, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC101, end: 0xC11B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC11C, end: 0xC11C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC11D, end: 0xC137, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC138, end: 0xC138, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC139, end: 0xC153, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC154, end: 0xC154, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC155, end: 0xC16F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC170, end: 0xC170, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC171, end: 0xC18B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC18C, end: 0xC18C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC18D, end: 0xC1A7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC1A8, end: 0xC1A8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC1A9, end: 0xC1C3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC1C4, end: 0xC1C4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC1C5, end: 0xC1DF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC1E0, end: 0xC1E0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC1E1, end: 0xC1FB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC1FC, end: 0xC1FC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC1FD, end: 0xC217, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC218, end: 0xC218, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC219, end: 0xC233, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC234, end: 0xC234, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC235, end: 0xC24F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC250, end: 0xC250, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC251, end: 0xC26B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC26C, end: 0xC26C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC26D, end: 0xC287, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC288, end: 0xC288, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC289, end: 0xC2A3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC2A4, end: 0xC2A4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC2A5, end: 0xC2BF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC2C0, end: 0xC2C0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC2C1, end: 0xC2DB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC2DC, end: 0xC2DC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC2DD, end: 0xC2F7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC2F8, end: 0xC2F8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC2F9, end: 0xC313, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC314, end: 0xC314, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC315, end: 0xC32F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC330, end: 0xC330, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC331, end: 0xC34B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC34C, end: 0xC34C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC34D, end: 0xC367, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC368, end: 0xC368, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC369, end: 0xC383, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC384, end: 0xC384, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC385, end: 0xC39F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC3A0, end: 0xC3A0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC3A1, end: 0xC3BB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC3BC, end: 0xC3BC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC3BD, end: 0xC3D7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC3D8, end: 0xC3D8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC3D9, end: 0xC3F3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC3F4, end: 0xC3F4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC3F5, end: 0xC40F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC410, end: 0xC410, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC411, end: 0xC42B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC42C, end: 0xC42C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC42D, end: 0xC447, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC448, end: 0xC448, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC449, end: 0xC463, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC464, end: 0xC464, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC465, end: 0xC47F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC480, end: 0xC480, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC481, end: 0xC49B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC49C, end: 0xC49C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC49D, end: 0xC4B7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC4B8, end: 0xC4B8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC4B9, end: 0xC4D3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC4D4, end: 0xC4D4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC4D5, end: 0xC4EF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC4F0, end: 0xC4F0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC4F1, end: 0xC50B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC50C, end: 0xC50C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC50D, end: 0xC527, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC528, end: 0xC528, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC529, end: 0xC543, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC544, end: 0xC544, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC545, end: 0xC55F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC560, end: 0xC560, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC561, end: 0xC57B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC57C, end: 0xC57C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC57D, end: 0xC597, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC598, end: 0xC598, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC599, end: 0xC5B3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC5B4, end: 0xC5B4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC5B5, end: 0xC5CF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC5D0, end: 0xC5D0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC5D1, end: 0xC5EB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC5EC, end: 0xC5EC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC5ED, end: 0xC607, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC608, end: 0xC608, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC609, end: 0xC623, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC624, end: 0xC624, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC625, end: 0xC63F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC640, end: 0xC640, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC641, end: 0xC65B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC65C, end: 0xC65C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC65D, end: 0xC677, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC678, end: 0xC678, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC679, end: 0xC693, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC694, end: 0xC694, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC695, end: 0xC6AF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC6B0, end: 0xC6B0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC6B1, end: 0xC6CB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC6CC, end: 0xC6CC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC6CD, end: 0xC6E7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC6E8, end: 0xC6E8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC6E9, end: 0xC703, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC704, end: 0xC704, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC705, end: 0xC71F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC720, end: 0xC720, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC721, end: 0xC73B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC73C, end: 0xC73C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC73D, end: 0xC757, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC758, end: 0xC758, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC759, end: 0xC773, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC774, end: 0xC774, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC775, end: 0xC78F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC790, end: 0xC790, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC791, end: 0xC7AB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC7AC, end: 0xC7AC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC7AD, end: 0xC7C7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC7C8, end: 0xC7C8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC7C9, end: 0xC7E3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC7E4, end: 0xC7E4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC7E5, end: 0xC7FF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC800, end: 0xC800, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC801, end: 0xC81B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC81C, end: 0xC81C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC81D, end: 0xC837, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC838, end: 0xC838, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC839, end: 0xC853, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC854, end: 0xC854, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC855, end: 0xC86F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC870, end: 0xC870, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC871, end: 0xC88B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC88C, end: 0xC88C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC88D, end: 0xC8A7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC8A8, end: 0xC8A8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC8A9, end: 0xC8C3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC8C4, end: 0xC8C4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC8C5, end: 0xC8DF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC8E0, end: 0xC8E0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC8E1, end: 0xC8FB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC8FC, end: 0xC8FC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC8FD, end: 0xC917, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC918, end: 0xC918, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC919, end: 0xC933, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC934, end: 0xC934, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC935, end: 0xC94F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC950, end: 0xC950, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC951, end: 0xC96B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC96C, end: 0xC96C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC96D, end: 0xC987, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC988, end: 0xC988, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC989, end: 0xC9A3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC9A4, end: 0xC9A4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC9A5, end: 0xC9BF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC9C0, end: 0xC9C0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC9C1, end: 0xC9DB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC9DC, end: 0xC9DC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC9DD, end: 0xC9F7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xC9F8, end: 0xC9F8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xC9F9, end: 0xCA13, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCA14, end: 0xCA14, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCA15, end: 0xCA2F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCA30, end: 0xCA30, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCA31, end: 0xCA4B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCA4C, end: 0xCA4C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCA4D, end: 0xCA67, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCA68, end: 0xCA68, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCA69, end: 0xCA83, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCA84, end: 0xCA84, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCA85, end: 0xCA9F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCAA0, end: 0xCAA0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCAA1, end: 0xCABB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCABC, end: 0xCABC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCABD, end: 0xCAD7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCAD8, end: 0xCAD8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCAD9, end: 0xCAF3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCAF4, end: 0xCAF4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCAF5, end: 0xCB0F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCB10, end: 0xCB10, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCB11, end: 0xCB2B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCB2C, end: 0xCB2C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCB2D, end: 0xCB47, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCB48, end: 0xCB48, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCB49, end: 0xCB63, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCB64, end: 0xCB64, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCB65, end: 0xCB7F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCB80, end: 0xCB80, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCB81, end: 0xCB9B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCB9C, end: 0xCB9C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCB9D, end: 0xCBB7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCBB8, end: 0xCBB8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCBB9, end: 0xCBD3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCBD4, end: 0xCBD4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCBD5, end: 0xCBEF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCBF0, end: 0xCBF0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCBF1, end: 0xCC0B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCC0C, end: 0xCC0C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCC0D, end: 0xCC27, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCC28, end: 0xCC28, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCC29, end: 0xCC43, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCC44, end: 0xCC44, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCC45, end: 0xCC5F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCC60, end: 0xCC60, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCC61, end: 0xCC7B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCC7C, end: 0xCC7C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCC7D, end: 0xCC97, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCC98, end: 0xCC98, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCC99, end: 0xCCB3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCCB4, end: 0xCCB4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCCB5, end: 0xCCCF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCCD0, end: 0xCCD0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCCD1, end: 0xCCEB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCCEC, end: 0xCCEC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCCED, end: 0xCD07, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCD08, end: 0xCD08, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCD09, end: 0xCD23, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCD24, end: 0xCD24, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCD25, end: 0xCD3F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCD40, end: 0xCD40, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCD41, end: 0xCD5B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCD5C, end: 0xCD5C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCD5D, end: 0xCD77, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCD78, end: 0xCD78, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCD79, end: 0xCD93, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCD94, end: 0xCD94, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCD95, end: 0xCDAF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCDB0, end: 0xCDB0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCDB1, end: 0xCDCB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCDCC, end: 0xCDCC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCDCD, end: 0xCDE7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCDE8, end: 0xCDE8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCDE9, end: 0xCE03, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCE04, end: 0xCE04, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCE05, end: 0xCE1F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCE20, end: 0xCE20, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCE21, end: 0xCE3B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCE3C, end: 0xCE3C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCE3D, end: 0xCE57, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCE58, end: 0xCE58, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCE59, end: 0xCE73, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCE74, end: 0xCE74, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCE75, end: 0xCE8F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCE90, end: 0xCE90, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCE91, end: 0xCEAB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCEAC, end: 0xCEAC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCEAD, end: 0xCEC7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCEC8, end: 0xCEC8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCEC9, end: 0xCEE3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCEE4, end: 0xCEE4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCEE5, end: 0xCEFF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCF00, end: 0xCF00, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCF01, end: 0xCF1B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCF1C, end: 0xCF1C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCF1D, end: 0xCF37, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCF38, end: 0xCF38, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCF39, end: 0xCF53, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCF54, end: 0xCF54, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCF55, end: 0xCF6F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCF70, end: 0xCF70, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCF71, end: 0xCF8B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCF8C, end: 0xCF8C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCF8D, end: 0xCFA7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCFA8, end: 0xCFA8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCFA9, end: 0xCFC3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCFC4, end: 0xCFC4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCFC5, end: 0xCFDF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCFE0, end: 0xCFE0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCFE1, end: 0xCFFB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xCFFC, end: 0xCFFC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xCFFD, end: 0xD017, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD018, end: 0xD018, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD019, end: 0xD033, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD034, end: 0xD034, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD035, end: 0xD04F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD050, end: 0xD050, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD051, end: 0xD06B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD06C, end: 0xD06C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD06D, end: 0xD087, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD088, end: 0xD088, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD089, end: 0xD0A3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD0A4, end: 0xD0A4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD0A5, end: 0xD0BF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD0C0, end: 0xD0C0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD0C1, end: 0xD0DB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD0DC, end: 0xD0DC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD0DD, end: 0xD0F7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD0F8, end: 0xD0F8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD0F9, end: 0xD113, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD114, end: 0xD114, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD115, end: 0xD12F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD130, end: 0xD130, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD131, end: 0xD14B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD14C, end: 0xD14C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD14D, end: 0xD167, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD168, end: 0xD168, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD169, end: 0xD183, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD184, end: 0xD184, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD185, end: 0xD19F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD1A0, end: 0xD1A0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD1A1, end: 0xD1BB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD1BC, end: 0xD1BC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD1BD, end: 0xD1D7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD1D8, end: 0xD1D8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD1D9, end: 0xD1F3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD1F4, end: 0xD1F4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD1F5, end: 0xD20F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD210, end: 0xD210, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD211, end: 0xD22B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD22C, end: 0xD22C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD22D, end: 0xD247, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD248, end: 0xD248, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD249, end: 0xD263, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD264, end: 0xD264, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD265, end: 0xD27F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD280, end: 0xD280, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD281, end: 0xD29B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD29C, end: 0xD29C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD29D, end: 0xD2B7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD2B8, end: 0xD2B8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD2B9, end: 0xD2D3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD2D4, end: 0xD2D4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD2D5, end: 0xD2EF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD2F0, end: 0xD2F0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD2F1, end: 0xD30B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD30C, end: 0xD30C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD30D, end: 0xD327, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD328, end: 0xD328, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD329, end: 0xD343, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD344, end: 0xD344, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD345, end: 0xD35F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD360, end: 0xD360, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD361, end: 0xD37B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD37C, end: 0xD37C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD37D, end: 0xD397, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD398, end: 0xD398, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD399, end: 0xD3B3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD3B4, end: 0xD3B4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD3B5, end: 0xD3CF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD3D0, end: 0xD3D0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD3D1, end: 0xD3EB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD3EC, end: 0xD3EC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD3ED, end: 0xD407, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD408, end: 0xD408, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD409, end: 0xD423, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD424, end: 0xD424, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD425, end: 0xD43F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD440, end: 0xD440, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD441, end: 0xD45B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD45C, end: 0xD45C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD45D, end: 0xD477, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD478, end: 0xD478, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD479, end: 0xD493, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD494, end: 0xD494, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD495, end: 0xD4AF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD4B0, end: 0xD4B0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD4B1, end: 0xD4CB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD4CC, end: 0xD4CC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD4CD, end: 0xD4E7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD4E8, end: 0xD4E8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD4E9, end: 0xD503, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD504, end: 0xD504, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD505, end: 0xD51F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD520, end: 0xD520, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD521, end: 0xD53B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD53C, end: 0xD53C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD53D, end: 0xD557, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD558, end: 0xD558, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD559, end: 0xD573, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD574, end: 0xD574, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD575, end: 0xD58F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD590, end: 0xD590, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD591, end: 0xD5AB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD5AC, end: 0xD5AC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD5AD, end: 0xD5C7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD5C8, end: 0xD5C8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD5C9, end: 0xD5E3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD5E4, end: 0xD5E4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD5E5, end: 0xD5FF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD600, end: 0xD600, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD601, end: 0xD61B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD61C, end: 0xD61C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD61D, end: 0xD637, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD638, end: 0xD638, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD639, end: 0xD653, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD654, end: 0xD654, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD655, end: 0xD66F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD670, end: 0xD670, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD671, end: 0xD68B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD68C, end: 0xD68C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD68D, end: 0xD6A7, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD6A8, end: 0xD6A8, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD6A9, end: 0xD6C3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD6C4, end: 0xD6C4, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD6C5, end: 0xD6DF, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD6E0, end: 0xD6E0, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD6E1, end: 0xD6FB, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD6FC, end: 0xD6FC, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD6FD, end: 0xD717, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD718, end: 0xD718, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD719, end: 0xD733, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD734, end: 0xD734, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD735, end: 0xD74F, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD750, end: 0xD750, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD751, end: 0xD76B, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD76C, end: 0xD76C, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD76D, end: 0xD787, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD788, end: 0xD788, property: GraphemeBreak::LV },
    GraphemeBreakRange { start: 0xD789, end: 0xD7A3, property: GraphemeBreak::LVT },
    GraphemeBreakRange { start: 0xD7B0, end: 0xD7C6, property: GraphemeBreak::V },
    GraphemeBreakRange { start: 0xD7CB, end: 0xD7FB, property: GraphemeBreak::T },
    GraphemeBreakRange { start: 0xD800, end: 0xDFFF, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0xFB1E, end: 0xFB1E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xFE00, end: 0xFE0F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xFE20, end: 0xFE2F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xFEFF, end: 0xFEFF, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0xFF9E, end: 0xFF9F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xFFF0, end: 0xFFFB, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x101FD, end: 0x101FD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x102E0, end: 0x102E0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10376, end: 0x1037A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10A01, end: 0x10A03, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10A05, end: 0x10A06, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10A0C, end: 0x10A0F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10A38, end: 0x10A3A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10A3F, end: 0x10A3F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10AE5, end: 0x10AE6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10D24, end: 0x10D27, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10EAB, end: 0x10EAC, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10F46, end: 0x10F50, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x10F82, end: 0x10F85, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11000, end: 0x11000, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11001, end: 0x11001, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11002, end: 0x11002, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11038, end: 0x11046, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11070, end: 0x11070, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11073, end: 0x11074, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1107F, end: 0x11081, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11082, end: 0x11082, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x110B0, end: 0x110B2, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x110B3, end: 0x110B6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x110B7, end: 0x110B8, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x110B9, end: 0x110BA, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x110BD, end: 0x110BD, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x110C2, end: 0x110C2, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x110CD, end: 0x110CD, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x11100, end: 0x11102, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11127, end: 0x1112B, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1112C, end: 0x1112C, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1112D, end: 0x11134, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11145, end: 0x11146, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11173, end: 0x11173, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11180, end: 0x11181, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11182, end: 0x11182, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x111B3, end: 0x111B5, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x111B6, end: 0x111BE, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x111BF, end: 0x111C0, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x111C2, end: 0x111C3, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x111C9, end: 0x111CC, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x111CE, end: 0x111CE, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x111CF, end: 0x111CF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1122C, end: 0x1122E, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1122F, end: 0x11231, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11232, end: 0x11233, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11234, end: 0x11234, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11235, end: 0x11235, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11236, end: 0x11237, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1123E, end: 0x1123E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x112DF, end: 0x112DF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x112E0, end: 0x112E2, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x112E3, end: 0x112EA, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11300, end: 0x11301, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11302, end: 0x11303, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1133B, end: 0x1133C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1133E, end: 0x1133E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1133F, end: 0x1133F, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11340, end: 0x11340, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11341, end: 0x11344, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11347, end: 0x11348, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1134B, end: 0x1134D, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11357, end: 0x11357, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11362, end: 0x11363, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11366, end: 0x1136C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11370, end: 0x11374, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11435, end: 0x11437, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11438, end: 0x1143F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11440, end: 0x11441, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11442, end: 0x11444, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11445, end: 0x11445, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11446, end: 0x11446, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1145E, end: 0x1145E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x114B0, end: 0x114B0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x114B1, end: 0x114B2, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x114B3, end: 0x114B8, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x114B9, end: 0x114B9, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x114BA, end: 0x114BA, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x114BB, end: 0x114BC, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x114BD, end: 0x114BD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x114BE, end: 0x114BE, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x114BF, end: 0x114C0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x114C1, end: 0x114C1, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x114C2, end: 0x114C3, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x115AF, end: 0x115AF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x115B0, end: 0x115B1, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x115B2, end: 0x115B5, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x115B8, end: 0x115BB, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x115BC, end: 0x115BD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x115BE, end: 0x115BE, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x115BF, end: 0x115C0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x115DC, end: 0x115DD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11630, end: 0x11632, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11633, end: 0x1163A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1163B, end: 0x1163C, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1163D, end: 0x1163D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1163E, end: 0x1163E, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1163F, end: 0x11640, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x116AB, end: 0x116AB, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x116AC, end: 0x116AC, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x116AD, end: 0x116AD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x116AE, end: 0x116AF, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x116B0, end: 0x116B5, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x116B6, end: 0x116B6, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x116B7, end: 0x116B7, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1171D, end: 0x1171F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11722, end: 0x11725, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11726, end: 0x11726, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11727, end: 0x1172B, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1182C, end: 0x1182E, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1182F, end: 0x11837, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11838, end: 0x11838, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11839, end: 0x1183A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11930, end: 0x11930, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11931, end: 0x11935, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11937, end: 0x11938, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1193B, end: 0x1193C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1193D, end: 0x1193D, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1193E, end: 0x1193E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1193F, end: 0x1193F, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x11940, end: 0x11940, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11941, end: 0x11941, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x11942, end: 0x11942, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11943, end: 0x11943, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x119D1, end: 0x119D3, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x119D4, end: 0x119D7, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x119DA, end: 0x119DB, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x119DC, end: 0x119DF, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x119E0, end: 0x119E0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x119E4, end: 0x119E4, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11A01, end: 0x11A0A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11A33, end: 0x11A38, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11A39, end: 0x11A39, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11A3A, end: 0x11A3A, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x11A3B, end: 0x11A3E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11A47, end: 0x11A47, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11A51, end: 0x11A56, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11A57, end: 0x11A58, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11A59, end: 0x11A5B, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11A84, end: 0x11A89, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x11A8A, end: 0x11A96, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11A97, end: 0x11A97, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11A98, end: 0x11A99, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11C2F, end: 0x11C2F, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11C30, end: 0x11C36, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11C38, end: 0x11C3D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11C3E, end: 0x11C3E, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11C3F, end: 0x11C3F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11C92, end: 0x11CA7, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11CA9, end: 0x11CA9, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11CAA, end: 0x11CB0, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11CB1, end: 0x11CB1, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11CB2, end: 0x11CB3, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11CB4, end: 0x11CB4, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11CB5, end: 0x11CB6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11D31, end: 0x11D36, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11D3A, end: 0x11D3A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11D3C, end: 0x11D3D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11D3F, end: 0x11D45, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11D46, end: 0x11D46, property: GraphemeBreak::Prepend },
    GraphemeBreakRange { start: 0x11D47, end: 0x11D47, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11D8A, end: 0x11D8E, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11D90, end: 0x11D91, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11D93, end: 0x11D94, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11D95, end: 0x11D95, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11D96, end: 0x11D96, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x11D97, end: 0x11D97, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11EF3, end: 0x11EF4, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x11EF5, end: 0x11EF6, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x13430, end: 0x13438, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x16AF0, end: 0x16AF4, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x16B30, end: 0x16B36, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x16F4F, end: 0x16F4F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x16F51, end: 0x16F87, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x16F8F, end: 0x16F92, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x16FE4, end: 0x16FE4, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x16FF0, end: 0x16FF1, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1BC9D, end: 0x1BC9E, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1BCA0, end: 0x1BCA3, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x1CF00, end: 0x1CF2D, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1CF30, end: 0x1CF46, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1D165, end: 0x1D165, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1D166, end: 0x1D166, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1D167, end: 0x1D169, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1D16D, end: 0x1D16D, property: GraphemeBreak::SpacingMark },
    GraphemeBreakRange { start: 0x1D16E, end: 0x1D172, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1D173, end: 0x1D17A, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0x1D17B, end: 0x1D182, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1D185, end: 0x1D18B, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1D1AA, end: 0x1D1AD, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1D242, end: 0x1D244, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1DA00, end: 0x1DA36, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1DA3B, end: 0x1DA6C, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1DA75, end: 0x1DA75, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1DA84, end: 0x1DA84, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1DA9B, end: 0x1DA9F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1DAA1, end: 0x1DAAF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E000, end: 0x1E006, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E008, end: 0x1E018, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E01B, end: 0x1E021, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E023, end: 0x1E024, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E026, end: 0x1E02A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E130, end: 0x1E136, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E2AE, end: 0x1E2AE, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E2EC, end: 0x1E2EF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E8D0, end: 0x1E8D6, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1E944, end: 0x1E94A, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0x1F1E6, end: 0x1F1FF, property: GraphemeBreak::RegionalIndicator },
    GraphemeBreakRange { start: 0x1F3FB, end: 0x1F3FF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xE0000, end: 0xE001F, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0xE0020, end: 0xE007F, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xE0080, end: 0xE00FF, property: GraphemeBreak::Control },
    GraphemeBreakRange { start: 0xE0100, end: 0xE01EF, property: GraphemeBreak::Extend },
    GraphemeBreakRange { start: 0xE01F0, end: 0xE0FFF, property: GraphemeBreak::Control },
];
