// Generated by `cargo run -p xtask -- unicode` from UCD 14.0.0 data. Do not edit.
pub static SENTENCE_BREAK_RANGES: &[SentenceBreakRange] = &[
    SentenceBreakRange { start: 0x0009, end: 0x0009, property: SentenceBreak::Sp },
    SentenceBreakRange { start: 0x000A, end: 0x000A, property: SentenceBreak::LF },
    SentenceBreakRange { start: 0x000B, end: 0x000C, property: SentenceBreak::Sp },
    SentenceBreakRange { start: 0x000D, end: 0x000D, property: SentenceBreak::CR },
    SentenceBreakRange { start: 0x0020, end: 0x0020, property: SentenceBreak::Sp },
    SentenceBreakRange { start: 0x0021, end: 0x0021, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x0022, end: 0x0022, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x0027, end: 0x0029, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x002C, end: 0x002D, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0x002E, end: 0x002E, property: SentenceBreak::ATerm },
    SentenceBreakRange { start: 0x0030, end: 0x0039, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x003A, end: 0x003A, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0x003F, end: 0x003F, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x0041, end: 0x005A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x005B, end: 0x005B, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x005D, end: 0x005D, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x0061, end: 0x007A, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x007B, end: 0x007B, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x007D, end: 0x007D, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x0085, end: 0x0085, property: SentenceBreak::Sep },
    SentenceBreakRange { start: 0x00A0, end: 0x00A0, property: SentenceBreak::Sp },
    SentenceBreakRange { start: 0x00AA, end: 0x00AA, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x00AB, end: 0x00AB, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x00AD, end: 0x00AD, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x00B5, end: 0x00B5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x00BA, end: 0x00BA, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x00BB, end: 0x00BB, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x00C0, end: 0x00D6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x00D8, end: 0x00DE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x00DF, end: 0x00F6, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x00F8, end: 0x00FF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0100, end: 0x0100, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0101, end: 0x0101, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0102, end: 0x0102, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0103, end: 0x0103, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0104, end: 0x0104, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0105, end: 0x0105, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0106, end: 0x0106, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0107, end: 0x0107, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0108, end: 0x0108, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0109, end: 0x0109, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x010A, end: 0x010A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x010B, end: 0x010B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x010C, end: 0x010C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x010D, end: 0x010D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x010E, end: 0x010E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x010F, end: 0x010F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0110, end: 0x0110, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0111, end: 0x0111, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0112, end: 0x0112, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0113, end: 0x0113, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0114, end: 0x0114, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0115, end: 0x0115, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0116, end: 0x0116, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0117, end: 0x0117, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0118, end: 0x0118, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0119, end: 0x0119, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x011A, end: 0x011A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x011B, end: 0x011B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x011C, end: 0x011C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x011D, end: 0x011D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x011E, end: 0x011E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x011F, end: 0x011F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0120, end: 0x0120, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0121, end: 0x0121, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0122, end: 0x0122, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0123, end: 0x0123, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0124, end: 0x0124, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0125, end: 0x0125, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0126, end: 0x0126, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0127, end: 0x0127, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0128, end: 0x0128, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0129, end: 0x0129, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x012A, end: 0x012A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x012B, end: 0x012B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x012C, end: 0x012C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x012D, end: 0x012D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x012E, end: 0x012E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x012F, end: 0x012F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0130, end: 0x0130, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0131, end: 0x0131, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0132, end: 0x0132, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0133, end: 0x0133, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0134, end: 0x0134, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0135, end: 0x0135, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0136, end: 0x0136, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0137, end: 0x0138, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0139, end: 0x0139, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x013A, end: 0x013A, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x013B, end: 0x013B, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x013C, end: 0x013C, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x013D, end: 0x013D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x013E, end: 0x013E, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x013F, end: 0x013F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0140, end: 0x0140, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0141, end: 0x0141, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0142, end: 0x0142, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0143, end: 0x0143, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0144, end: 0x0144, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0145, end: 0x0145, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0146, end: 0x0146, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0147, end: 0x0147, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0148, end: 0x0149, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x014A, end: 0x014A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x014B, end: 0x014B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x014C, end: 0x014C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x014D, end: 0x014D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x014E, end: 0x014E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x014F, end: 0x014F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0150, end: 0x0150, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0151, end: 0x0151, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0152, end: 0x0152, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0153, end: 0x0153, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0154, end: 0x0154, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0155, end: 0x0155, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0156, end: 0x0156, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0157, end: 0x0157, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0158, end: 0x0158, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0159, end: 0x0159, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x015A, end: 0x015A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x015B, end: 0x015B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x015C, end: 0x015C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x015D, end: 0x015D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x015E, end: 0x015E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x015F, end: 0x015F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0160, end: 0x0160, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0161, end: 0x0161, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0162, end: 0x0162, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0163, end: 0x0163, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0164, end: 0x0164, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0165, end: 0x0165, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0166, end: 0x0166, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0167, end: 0x0167, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0168, end: 0x0168, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0169, end: 0x0169, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x016A, end: 0x016A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x016B, end: 0x016B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x016C, end: 0x016C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x016D, end: 0x016D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x016E, end: 0x016E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x016F, end: 0x016F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0170, end: 0x0170, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0171, end: 0x0171, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0172, end: 0x0172, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0173, end: 0x0173, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0174, end: 0x0174, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0175, end: 0x0175, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0176, end: 0x0176, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0177, end: 0x0177, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0178, end: 0x0179, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x017A, end: 0x017A, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x017B, end: 0x017B, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x017C, end: 0x017C, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x017D, end: 0x017D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x017E, end: 0x0180, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0181, end: 0x0182, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0183, end: 0x0183, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0184, end: 0x0184, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0185, end: 0x0185, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0186, end: 0x0187, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0188, end: 0x0188, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0189, end: 0x018B, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x018C, end: 0x018D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x018E, end: 0x0191, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0192, end: 0x0192, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0193, end: 0x0194, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0195, end: 0x0195, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0196, end: 0x0198, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0199, end: 0x019B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x019C, end: 0x019D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x019E, end: 0x019E, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x019F, end: 0x01A0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01A1, end: 0x01A1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01A2, end: 0x01A2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01A3, end: 0x01A3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01A4, end: 0x01A4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01A5, end: 0x01A5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01A6, end: 0x01A7, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01A8, end: 0x01A8, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01A9, end: 0x01A9, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01AA, end: 0x01AB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01AC, end: 0x01AC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01AD, end: 0x01AD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01AE, end: 0x01AF, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01B0, end: 0x01B0, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01B1, end: 0x01B3, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01B4, end: 0x01B4, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01B5, end: 0x01B5, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01B6, end: 0x01B6, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01B7, end: 0x01B8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01B9, end: 0x01BA, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01BB, end: 0x01BB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x01BC, end: 0x01BC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01BD, end: 0x01BF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01C0, end: 0x01C3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x01C4, end: 0x01C5, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01C6, end: 0x01C6, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01C7, end: 0x01C8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01C9, end: 0x01C9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01CA, end: 0x01CB, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01CC, end: 0x01CC, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01CD, end: 0x01CD, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01CE, end: 0x01CE, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01CF, end: 0x01CF, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01D0, end: 0x01D0, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01D1, end: 0x01D1, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01D2, end: 0x01D2, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01D3, end: 0x01D3, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01D4, end: 0x01D4, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01D5, end: 0x01D5, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01D6, end: 0x01D6, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01D7, end: 0x01D7, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01D8, end: 0x01D8, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01D9, end: 0x01D9, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01DA, end: 0x01DA, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01DB, end: 0x01DB, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01DC, end: 0x01DD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01DE, end: 0x01DE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01DF, end: 0x01DF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01E0, end: 0x01E0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01E1, end: 0x01E1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01E2, end: 0x01E2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01E3, end: 0x01E3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01E4, end: 0x01E4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01E5, end: 0x01E5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01E6, end: 0x01E6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01E7, end: 0x01E7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01E8, end: 0x01E8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01E9, end: 0x01E9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01EA, end: 0x01EA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01EB, end: 0x01EB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01EC, end: 0x01EC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01ED, end: 0x01ED, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01EE, end: 0x01EE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01EF, end: 0x01F0, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01F1, end: 0x01F2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01F3, end: 0x01F3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01F4, end: 0x01F4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01F5, end: 0x01F5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01F6, end: 0x01F8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01F9, end: 0x01F9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01FA, end: 0x01FA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01FB, end: 0x01FB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01FC, end: 0x01FC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01FD, end: 0x01FD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x01FE, end: 0x01FE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x01FF, end: 0x01FF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0200, end: 0x0200, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0201, end: 0x0201, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0202, end: 0x0202, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0203, end: 0x0203, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0204, end: 0x0204, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0205, end: 0x0205, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0206, end: 0x0206, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0207, end: 0x0207, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0208, end: 0x0208, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0209, end: 0x0209, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x020A, end: 0x020A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x020B, end: 0x020B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x020C, end: 0x020C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x020D, end: 0x020D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x020E, end: 0x020E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x020F, end: 0x020F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0210, end: 0x0210, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0211, end: 0x0211, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0212, end: 0x0212, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0213, end: 0x0213, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0214, end: 0x0214, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0215, end: 0x0215, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0216, end: 0x0216, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0217, end: 0x0217, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0218, end: 0x0218, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0219, end: 0x0219, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x021A, end: 0x021A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x021B, end: 0x021B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x021C, end: 0x021C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x021D, end: 0x021D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x021E, end: 0x021E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x021F, end: 0x021F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0220, end: 0x0220, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0221, end: 0x0221, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0222, end: 0x0222, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0223, end: 0x0223, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0224, end: 0x0224, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0225, end: 0x0225, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0226, end: 0x0226, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0227, end: 0x0227, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0228, end: 0x0228, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0229, end: 0x0229, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x022A, end: 0x022A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x022B, end: 0x022B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x022C, end: 0x022C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x022D, end: 0x022D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x022E, end: 0x022E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x022F, end: 0x022F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0230, end: 0x0230, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0231, end: 0x0231, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0232, end: 0x0232, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0233, end: 0x0239, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x023A, end: 0x023B, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x023C, end: 0x023C, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x023D, end: 0x023E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x023F, end: 0x0240, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0241, end: 0x0241, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0242, end: 0x0242, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0243, end: 0x0246, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0247, end: 0x0247, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0248, end: 0x0248, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0249, end: 0x0249, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x024A, end: 0x024A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x024B, end: 0x024B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x024C, end: 0x024C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x024D, end: 0x024D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x024E, end: 0x024E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x024F, end: 0x0293, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0294, end: 0x0294, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0295, end: 0x02B8, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x02B9, end: 0x02BF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x02C0, end: 0x02C1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x02C6, end: 0x02D1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x02E0, end: 0x02E4, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x02EC, end: 0x02EC, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x02EE, end: 0x02EE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0300, end: 0x036F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0370, end: 0x0370, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0371, end: 0x0371, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0372, end: 0x0372, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0373, end: 0x0373, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0374, end: 0x0374, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0376, end: 0x0376, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0377, end: 0x0377, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x037A, end: 0x037D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x037F, end: 0x037F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0386, end: 0x0386, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0388, end: 0x038A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x038C, end: 0x038C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x038E, end: 0x038F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0390, end: 0x0390, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0391, end: 0x03A1, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03A3, end: 0x03AB, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03AC, end: 0x03CE, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03CF, end: 0x03CF, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03D0, end: 0x03D1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03D2, end: 0x03D4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03D5, end: 0x03D7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03D8, end: 0x03D8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03D9, end: 0x03D9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03DA, end: 0x03DA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03DB, end: 0x03DB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03DC, end: 0x03DC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03DD, end: 0x03DD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03DE, end: 0x03DE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03DF, end: 0x03DF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03E0, end: 0x03E0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03E1, end: 0x03E1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03E2, end: 0x03E2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03E3, end: 0x03E3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03E4, end: 0x03E4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03E5, end: 0x03E5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03E6, end: 0x03E6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03E7, end: 0x03E7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03E8, end: 0x03E8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03E9, end: 0x03E9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03EA, end: 0x03EA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03EB, end: 0x03EB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03EC, end: 0x03EC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03ED, end: 0x03ED, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03EE, end: 0x03EE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03EF, end: 0x03F3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03F4, end: 0x03F4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03F5, end: 0x03F5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03F7, end: 0x03F7, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03F8, end: 0x03F8, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03F9, end: 0x03FA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x03FB, end: 0x03FC, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x03FD, end: 0x042F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0430, end: 0x045F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0460, end: 0x0460, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0461, end: 0x0461, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0462, end: 0x0462, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0463, end: 0x0463, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0464, end: 0x0464, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0465, end: 0x0465, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0466, end: 0x0466, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0467, end: 0x0467, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0468, end: 0x0468, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0469, end: 0x0469, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x046A, end: 0x046A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x046B, end: 0x046B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x046C, end: 0x046C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x046D, end: 0x046D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x046E, end: 0x046E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x046F, end: 0x046F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0470, end: 0x0470, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0471, end: 0x0471, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0472, end: 0x0472, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0473, end: 0x0473, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0474, end: 0x0474, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0475, end: 0x0475, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0476, end: 0x0476, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0477, end: 0x0477, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0478, end: 0x0478, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0479, end: 0x0479, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x047A, end: 0x047A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x047B, end: 0x047B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x047C, end: 0x047C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x047D, end: 0x047D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x047E, end: 0x047E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x047F, end: 0x047F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0480, end: 0x0480, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0481, end: 0x0481, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0483, end: 0x0489, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x048A, end: 0x048A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x048B, end: 0x048B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x048C, end: 0x048C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x048D, end: 0x048D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x048E, end: 0x048E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x048F, end: 0x048F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0490, end: 0x0490, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0491, end: 0x0491, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0492, end: 0x0492, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0493, end: 0x0493, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0494, end: 0x0494, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0495, end: 0x0495, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0496, end: 0x0496, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0497, end: 0x0497, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0498, end: 0x0498, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0499, end: 0x0499, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x049A, end: 0x049A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x049B, end: 0x049B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x049C, end: 0x049C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x049D, end: 0x049D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x049E, end: 0x049E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x049F, end: 0x049F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04A0, end: 0x04A0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04A1, end: 0x04A1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04A2, end: 0x04A2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04A3, end: 0x04A3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04A4, end: 0x04A4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04A5, end: 0x04A5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04A6, end: 0x04A6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04A7, end: 0x04A7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04A8, end: 0x04A8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04A9, end: 0x04A9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04AA, end: 0x04AA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04AB, end: 0x04AB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04AC, end: 0x04AC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04AD, end: 0x04AD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04AE, end: 0x04AE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04AF, end: 0x04AF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04B0, end: 0x04B0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04B1, end: 0x04B1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04B2, end: 0x04B2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04B3, end: 0x04B3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04B4, end: 0x04B4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04B5, end: 0x04B5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04B6, end: 0x04B6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04B7, end: 0x04B7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04B8, end: 0x04B8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04B9, end: 0x04B9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04BA, end: 0x04BA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04BB, end: 0x04BB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04BC, end: 0x04BC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04BD, end: 0x04BD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04BE, end: 0x04BE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04BF, end: 0x04BF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04C0, end: 0x04C1, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04C2, end: 0x04C2, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04C3, end: 0x04C3, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04C4, end: 0x04C4, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04C5, end: 0x04C5, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04C6, end: 0x04C6, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04C7, end: 0x04C7, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04C8, end: 0x04C8, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04C9, end: 0x04C9, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04CA, end: 0x04CA, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04CB, end: 0x04CB, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04CC, end: 0x04CC, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04CD, end: 0x04CD, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04CE, end: 0x04CF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04D0, end: 0x04D0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04D1, end: 0x04D1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04D2, end: 0x04D2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04D3, end: 0x04D3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04D4, end: 0x04D4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04D5, end: 0x04D5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04D6, end: 0x04D6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04D7, end: 0x04D7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04D8, end: 0x04D8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04D9, end: 0x04D9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04DA, end: 0x04DA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04DB, end: 0x04DB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04DC, end: 0x04DC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04DD, end: 0x04DD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04DE, end: 0x04DE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04DF, end: 0x04DF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04E0, end: 0x04E0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04E1, end: 0x04E1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04E2, end: 0x04E2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04E3, end: 0x04E3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04E4, end: 0x04E4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04E5, end: 0x04E5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04E6, end: 0x04E6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04E7, end: 0x04E7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04E8, end: 0x04E8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04E9, end: 0x04E9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04EA, end: 0x04EA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04EB, end: 0x04EB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04EC, end: 0x04EC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04ED, end: 0x04ED, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04EE, end: 0x04EE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04EF, end: 0x04EF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04F0, end: 0x04F0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04F1, end: 0x04F1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04F2, end: 0x04F2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04F3, end: 0x04F3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04F4, end: 0x04F4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04F5, end: 0x04F5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04F6, end: 0x04F6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04F7, end: 0x04F7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04F8, end: 0x04F8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04F9, end: 0x04F9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04FA, end: 0x04FA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04FB, end: 0x04FB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04FC, end: 0x04FC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04FD, end: 0x04FD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x04FE, end: 0x04FE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x04FF, end: 0x04FF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0500, end: 0x0500, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0501, end: 0x0501, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0502, end: 0x0502, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0503, end: 0x0503, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0504, end: 0x0504, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0505, end: 0x0505, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0506, end: 0x0506, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0507, end: 0x0507, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0508, end: 0x0508, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0509, end: 0x0509, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x050A, end: 0x050A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x050B, end: 0x050B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x050C, end: 0x050C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x050D, end: 0x050D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x050E, end: 0x050E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x050F, end: 0x050F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0510, end: 0x0510, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0511, end: 0x0511, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0512, end: 0x0512, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0513, end: 0x0513, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0514, end: 0x0514, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0515, end: 0x0515, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0516, end: 0x0516, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0517, end: 0x0517, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0518, end: 0x0518, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0519, end: 0x0519, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x051A, end: 0x051A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x051B, end: 0x051B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x051C, end: 0x051C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x051D, end: 0x051D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x051E, end: 0x051E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x051F, end: 0x051F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0520, end: 0x0520, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0521, end: 0x0521, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0522, end: 0x0522, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0523, end: 0x0523, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0524, end: 0x0524, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0525, end: 0x0525, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0526, end: 0x0526, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0527, end: 0x0527, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0528, end: 0x0528, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0529, end: 0x0529, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x052A, end: 0x052A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x052B, end: 0x052B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x052C, end: 0x052C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x052D, end: 0x052D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x052E, end: 0x052E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x052F, end: 0x052F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0531, end: 0x0556, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x0559, end: 0x0559, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x055D, end: 0x055D, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0x0560, end: 0x0588, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x0589, end: 0x0589, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x0591, end: 0x05BD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x05BF, end: 0x05BF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x05C1, end: 0x05C2, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x05C4, end: 0x05C5, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x05C7, end: 0x05C7, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x05D0, end: 0x05EA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x05EF, end: 0x05F3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0600, end: 0x0605, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x060C, end: 0x060D, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0x0610, end: 0x061A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x061C, end: 0x061C, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x061D, end: 0x061F, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x0620, end: 0x064A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x064B, end: 0x065F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0660, end: 0x0669, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x066B, end: 0x066C, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x066E, end: 0x066F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0670, end: 0x0670, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0671, end: 0x06D3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x06D4, end: 0x06D4, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x06D5, end: 0x06D5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x06D6, end: 0x06DC, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x06DD, end: 0x06DD, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x06DF, end: 0x06E4, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x06E5, end: 0x06E6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x06E7, end: 0x06E8, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x06EA, end: 0x06ED, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x06EE, end: 0x06EF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x06F0, end: 0x06F9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x06FA, end: 0x06FC, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x06FF, end: 0x06FF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0700, end: 0x0702, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x070F, end: 0x070F, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x0710, end: 0x0710, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0711, end: 0x0711, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0712, end: 0x072F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0730, end: 0x074A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x074D, end: 0x07A5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x07A6, end: 0x07B0, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x07B1, end: 0x07B1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x07C0, end: 0x07C9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x07CA, end: 0x07EA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x07EB, end: 0x07F3, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x07F4, end: 0x07F5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x07F8, end: 0x07F8, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0x07F9, end: 0x07F9, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x07FA, end: 0x07FA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x07FD, end: 0x07FD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0800, end: 0x0815, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0816, end: 0x0819, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x081A, end: 0x081A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x081B, end: 0x0823, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0824, end: 0x0824, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0825, end: 0x0827, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0828, end: 0x0828, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0829, end: 0x082D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0837, end: 0x0837, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x0839, end: 0x0839, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x083D, end: 0x083E, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x0840, end: 0x0858, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0859, end: 0x085B, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0860, end: 0x086A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0870, end: 0x0887, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0889, end: 0x088E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0890, end: 0x0891, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x0898, end: 0x089F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x08A0, end: 0x08C9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x08CA, end: 0x08E1, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x08E2, end: 0x08E2, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x08E3, end: 0x0903, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0904, end: 0x0939, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x093A, end: 0x093C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x093D, end: 0x093D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x093E, end: 0x094F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0950, end: 0x0950, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0951, end: 0x0957, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0958, end: 0x0961, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0962, end: 0x0963, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0964, end: 0x0965, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x0966, end: 0x096F, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0971, end: 0x0980, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0981, end: 0x0983, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0985, end: 0x098C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x098F, end: 0x0990, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0993, end: 0x09A8, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09AA, end: 0x09B0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09B2, end: 0x09B2, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09B6, end: 0x09B9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09BC, end: 0x09BC, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x09BD, end: 0x09BD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09BE, end: 0x09C4, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x09C7, end: 0x09C8, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x09CB, end: 0x09CD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x09CE, end: 0x09CE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09D7, end: 0x09D7, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x09DC, end: 0x09DD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09DF, end: 0x09E1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09E2, end: 0x09E3, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x09E6, end: 0x09EF, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x09F0, end: 0x09F1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09FC, end: 0x09FC, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x09FE, end: 0x09FE, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A01, end: 0x0A03, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A05, end: 0x0A0A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A0F, end: 0x0A10, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A13, end: 0x0A28, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A2A, end: 0x0A30, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A32, end: 0x0A33, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A35, end: 0x0A36, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A38, end: 0x0A39, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A3C, end: 0x0A3C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A3E, end: 0x0A42, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A47, end: 0x0A48, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A4B, end: 0x0A4D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A51, end: 0x0A51, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A59, end: 0x0A5C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A5E, end: 0x0A5E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A66, end: 0x0A6F, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0A70, end: 0x0A71, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A72, end: 0x0A74, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A75, end: 0x0A75, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A81, end: 0x0A83, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0A85, end: 0x0A8D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A8F, end: 0x0A91, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0A93, end: 0x0AA8, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0AAA, end: 0x0AB0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0AB2, end: 0x0AB3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0AB5, end: 0x0AB9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0ABC, end: 0x0ABC, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0ABD, end: 0x0ABD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0ABE, end: 0x0AC5, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0AC7, end: 0x0AC9, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0ACB, end: 0x0ACD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0AD0, end: 0x0AD0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0AE0, end: 0x0AE1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0AE2, end: 0x0AE3, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0AE6, end: 0x0AEF, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0AF9, end: 0x0AF9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0AFA, end: 0x0AFF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0B01, end: 0x0B03, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0B05, end: 0x0B0C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B0F, end: 0x0B10, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B13, end: 0x0B28, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B2A, end: 0x0B30, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B32, end: 0x0B33, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B35, end: 0x0B39, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B3C, end: 0x0B3C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0B3D, end: 0x0B3D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B3E, end: 0x0B44, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0B47, end: 0x0B48, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0B4B, end: 0x0B4D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0B55, end: 0x0B57, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0B5C, end: 0x0B5D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B5F, end: 0x0B61, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B62, end: 0x0B63, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0B66, end: 0x0B6F, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0B71, end: 0x0B71, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B82, end: 0x0B82, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0B83, end: 0x0B83, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B85, end: 0x0B8A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B8E, end: 0x0B90, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B92, end: 0x0B95, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B99, end: 0x0B9A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B9C, end: 0x0B9C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0B9E, end: 0x0B9F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0BA3, end: 0x0BA4, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0BA8, end: 0x0BAA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0BAE, end: 0x0BB9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0BBE, end: 0x0BC2, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0BC6, end: 0x0BC8, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0BCA, end: 0x0BCD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0BD0, end: 0x0BD0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0BD7, end: 0x0BD7, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0BE6, end: 0x0BEF, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0C00, end: 0x0C04, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0C05, end: 0x0C0C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C0E, end: 0x0C10, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C12, end: 0x0C28, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C2A, end: 0x0C39, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C3C, end: 0x0C3C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0C3D, end: 0x0C3D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C3E, end: 0x0C44, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0C46, end: 0x0C48, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0C4A, end: 0x0C4D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0C55, end: 0x0C56, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0C58, end: 0x0C5A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C5D, end: 0x0C5D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C60, end: 0x0C61, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C62, end: 0x0C63, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0C66, end: 0x0C6F, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0C80, end: 0x0C80, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C81, end: 0x0C83, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0C85, end: 0x0C8C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C8E, end: 0x0C90, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0C92, end: 0x0CA8, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0CAA, end: 0x0CB3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0CB5, end: 0x0CB9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0CBC, end: 0x0CBC, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0CBD, end: 0x0CBD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0CBE, end: 0x0CC4, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0CC6, end: 0x0CC8, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0CCA, end: 0x0CCD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0CD5, end: 0x0CD6, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0CDD, end: 0x0CDE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0CE0, end: 0x0CE1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0CE2, end: 0x0CE3, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0CE6, end: 0x0CEF, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0CF1, end: 0x0CF2, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D00, end: 0x0D03, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0D04, end: 0x0D0C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D0E, end: 0x0D10, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D12, end: 0x0D3A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D3B, end: 0x0D3C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0D3D, end: 0x0D3D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D3E, end: 0x0D44, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0D46, end: 0x0D48, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0D4A, end: 0x0D4D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0D4E, end: 0x0D4E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D54, end: 0x0D56, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D57, end: 0x0D57, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0D5F, end: 0x0D61, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D62, end: 0x0D63, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0D66, end: 0x0D6F, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0D7A, end: 0x0D7F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D81, end: 0x0D83, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0D85, end: 0x0D96, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0D9A, end: 0x0DB1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0DB3, end: 0x0DBB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0DBD, end: 0x0DBD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0DC0, end: 0x0DC6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0DCA, end: 0x0DCA, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0DCF, end: 0x0DD4, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0DD6, end: 0x0DD6, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0DD8, end: 0x0DDF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0DE6, end: 0x0DEF, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0DF2, end: 0x0DF3, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0E01, end: 0x0E30, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0E31, end: 0x0E31, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0E32, end: 0x0E33, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0E34, end: 0x0E3A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0E40, end: 0x0E46, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0E47, end: 0x0E4E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0E50, end: 0x0E59, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0E81, end: 0x0E82, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0E84, end: 0x0E84, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0E86, end: 0x0E8A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0E8C, end: 0x0EA3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0EA5, end: 0x0EA5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0EA7, end: 0x0EB0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0EB1, end: 0x0EB1, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0EB2, end: 0x0EB3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0EB4, end: 0x0EBC, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0EBD, end: 0x0EBD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0EC0, end: 0x0EC4, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0EC6, end: 0x0EC6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0EC8, end: 0x0ECD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0ED0, end: 0x0ED9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0EDC, end: 0x0EDF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0F00, end: 0x0F00, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0F18, end: 0x0F19, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0F20, end: 0x0F29, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x0F35, end: 0x0F35, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0F37, end: 0x0F37, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0F39, end: 0x0F39, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0F3A, end: 0x0F3D, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x0F3E, end: 0x0F3F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0F40, end: 0x0F47, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0F49, end: 0x0F6C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0F71, end: 0x0F84, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0F86, end: 0x0F87, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0F88, end: 0x0F8C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x0F8D, end: 0x0F97, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0F99, end: 0x0FBC, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x0FC6, end: 0x0FC6, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1000, end: 0x102A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x102B, end: 0x103E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x103F, end: 0x103F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1040, end: 0x1049, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x104A, end: 0x104B, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1050, end: 0x1055, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1056, end: 0x1059, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x105A, end: 0x105D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x105E, end: 0x1060, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1061, end: 0x1061, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1062, end: 0x1064, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1065, end: 0x1066, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1067, end: 0x106D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x106E, end: 0x1070, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1071, end: 0x1074, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1075, end: 0x1081, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1082, end: 0x108D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x108E, end: 0x108E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x108F, end: 0x108F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1090, end: 0x1099, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x109A, end: 0x109D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10A0, end: 0x10C5, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x10C7, end: 0x10C7, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x10CD, end: 0x10CD, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x10D0, end: 0x10FA, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x10FC, end: 0x10FC, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10FD, end: 0x10FF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1100, end: 0x1248, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x124A, end: 0x124D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1250, end: 0x1256, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1258, end: 0x1258, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x125A, end: 0x125D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1260, end: 0x1288, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x128A, end: 0x128D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1290, end: 0x12B0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12B2, end: 0x12B5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12B8, end: 0x12BE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12C0, end: 0x12C0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12C2, end: 0x12C5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12C8, end: 0x12D6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12D8, end: 0x1310, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1312, end: 0x1315, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1318, end: 0x135A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x135D, end: 0x135F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1362, end: 0x1362, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1367, end: 0x1368, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1380, end: 0x138F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x13A0, end: 0x13F5, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x13F8, end: 0x13FD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1401, end: 0x166C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x166E, end: 0x166E, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x166F, end: 0x167F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1680, end: 0x1680, property: SentenceBreak::Sp },
    SentenceBreakRange { start: 0x1681, end: 0x169A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x169B, end: 0x169C, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x16A0, end: 0x16EA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16EE, end: 0x16F8, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1700, end: 0x1711, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1712, end: 0x1715, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x171F, end: 0x1731, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1732, end: 0x1734, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1735, end: 0x1736, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1740, end: 0x1751, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1752, end: 0x1753, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1760, end: 0x176C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x176E, end: 0x1770, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1772, end: 0x1773, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1780, end: 0x17B3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x17B4, end: 0x17D3, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x17D7, end: 0x17D7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x17DC, end: 0x17DC, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x17DD, end: 0x17DD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x17E0, end: 0x17E9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1802, end: 0x1802, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0x1803, end: 0x1803, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1808, end: 0x1808, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0x1809, end: 0x1809, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x180B, end: 0x180D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x180E, end: 0x180E, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x180F, end: 0x180F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1810, end: 0x1819, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1820, end: 0x1878, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1880, end: 0x1884, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1885, end: 0x1886, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1887, end: 0x18A8, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x18A9, end: 0x18A9, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x18AA, end: 0x18AA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x18B0, end: 0x18F5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1900, end: 0x191E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1920, end: 0x192B, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1930, end: 0x193B, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1944, end: 0x1945, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1946, end: 0x194F, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1950, end: 0x196D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1970, end: 0x1974, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1980, end: 0x19AB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x19B0, end: 0x19C9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x19D0, end: 0x19D9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1A00, end: 0x1A16, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1A17, end: 0x1A1B, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1A20, end: 0x1A54, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1A55, end: 0x1A5E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1A60, end: 0x1A7C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1A7F, end: 0x1A7F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1A80, end: 0x1A89, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1A90, end: 0x1A99, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1AA7, end: 0x1AA7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1AA8, end: 0x1AAB, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1AB0, end: 0x1ACE, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1B00, end: 0x1B04, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1B05, end: 0x1B33, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1B34, end: 0x1B44, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1B45, end: 0x1B4C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1B50, end: 0x1B59, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1B5A, end: 0x1B5B, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1B5E, end: 0x1B5F, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1B6B, end: 0x1B73, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1B80, end: 0x1B82, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1B83, end: 0x1BA0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1BA1, end: 0x1BAD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1BAE, end: 0x1BAF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1BB0, end: 0x1BB9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1BBA, end: 0x1BE5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1BE6, end: 0x1BF3, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1C00, end: 0x1C23, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1C24, end: 0x1C37, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1C3B, end: 0x1C3C, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1C40, end: 0x1C49, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1C4D, end: 0x1C4F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1C50, end: 0x1C59, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1C5A, end: 0x1C7D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1C7E, end: 0x1C7F, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x1C80, end: 0x1C88, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1C90, end: 0x1CBA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1CBD, end: 0x1CBF, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1CD0, end: 0x1CD2, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1CD4, end: 0x1CE8, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1CE9, end: 0x1CEC, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1CED, end: 0x1CED, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1CEE, end: 0x1CF3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1CF4, end: 0x1CF4, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1CF5, end: 0x1CF6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1CF7, end: 0x1CF9, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1CFA, end: 0x1CFA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1D00, end: 0x1DBF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1DC0, end: 0x1DFF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E00, end: 0x1E00, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E01, end: 0x1E01, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E02, end: 0x1E02, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E03, end: 0x1E03, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E04, end: 0x1E04, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E05, end: 0x1E05, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E06, end: 0x1E06, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E07, end: 0x1E07, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E08, end: 0x1E08, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E09, end: 0x1E09, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E0A, end: 0x1E0A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E0B, end: 0x1E0B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E0C, end: 0x1E0C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E0D, end: 0x1E0D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E0E, end: 0x1E0E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E0F, end: 0x1E0F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E10, end: 0x1E10, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E11, end: 0x1E11, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E12, end: 0x1E12, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E13, end: 0x1E13, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E14, end: 0x1E14, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E15, end: 0x1E15, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E16, end: 0x1E16, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E17, end: 0x1E17, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E18, end: 0x1E18, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E19, end: 0x1E19, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E1A, end: 0x1E1A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E1B, end: 0x1E1B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E1C, end: 0x1E1C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E1D, end: 0x1E1D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E1E, end: 0x1E1E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E1F, end: 0x1E1F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E20, end: 0x1E20, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E21, end: 0x1E21, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E22, end: 0x1E22, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E23, end: 0x1E23, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E24, end: 0x1E24, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E25, end: 0x1E25, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E26, end: 0x1E26, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E27, end: 0x1E27, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E28, end: 0x1E28, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E29, end: 0x1E29, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E2A, end: 0x1E2A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E2B, end: 0x1E2B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E2C, end: 0x1E2C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E2D, end: 0x1E2D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E2E, end: 0x1E2E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E2F, end: 0x1E2F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E30, end: 0x1E30, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E31, end: 0x1E31, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E32, end: 0x1E32, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E33, end: 0x1E33, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E34, end: 0x1E34, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E35, end: 0x1E35, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E36, end: 0x1E36, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E37, end: 0x1E37, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E38, end: 0x1E38, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E39, end: 0x1E39, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E3A, end: 0x1E3A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E3B, end: 0x1E3B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E3C, end: 0x1E3C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E3D, end: 0x1E3D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E3E, end: 0x1E3E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E3F, end: 0x1E3F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E40, end: 0x1E40, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E41, end: 0x1E41, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E42, end: 0x1E42, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E43, end: 0x1E43, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E44, end: 0x1E44, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E45, end: 0x1E45, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E46, end: 0x1E46, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E47, end: 0x1E47, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E48, end: 0x1E48, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E49, end: 0x1E49, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E4A, end: 0x1E4A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E4B, end: 0x1E4B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E4C, end: 0x1E4C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E4D, end: 0x1E4D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E4E, end: 0x1E4E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E4F, end: 0x1E4F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E50, end: 0x1E50, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E51, end: 0x1E51, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E52, end: 0x1E52, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E53, end: 0x1E53, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E54, end: 0x1E54, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E55, end: 0x1E55, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E56, end: 0x1E56, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E57, end: 0x1E57, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E58, end: 0x1E58, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E59, end: 0x1E59, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E5A, end: 0x1E5A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E5B, end: 0x1E5B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E5C, end: 0x1E5C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E5D, end: 0x1E5D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E5E, end: 0x1E5E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E5F, end: 0x1E5F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E60, end: 0x1E60, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E61, end: 0x1E61, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E62, end: 0x1E62, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E63, end: 0x1E63, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E64, end: 0x1E64, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E65, end: 0x1E65, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E66, end: 0x1E66, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E67, end: 0x1E67, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E68, end: 0x1E68, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E69, end: 0x1E69, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E6A, end: 0x1E6A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E6B, end: 0x1E6B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E6C, end: 0x1E6C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E6D, end: 0x1E6D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E6E, end: 0x1E6E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E6F, end: 0x1E6F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E70, end: 0x1E70, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E71, end: 0x1E71, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E72, end: 0x1E72, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E73, end: 0x1E73, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E74, end: 0x1E74, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E75, end: 0x1E75, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E76, end: 0x1E76, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E77, end: 0x1E77, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E78, end: 0x1E78, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E79, end: 0x1E79, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E7A, end: 0x1E7A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E7B, end: 0x1E7B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E7C, end: 0x1E7C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E7D, end: 0x1E7D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E7E, end: 0x1E7E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E7F, end: 0x1E7F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E80, end: 0x1E80, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E81, end: 0x1E81, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E82, end: 0x1E82, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E83, end: 0x1E83, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E84, end: 0x1E84, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E85, end: 0x1E85, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E86, end: 0x1E86, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E87, end: 0x1E87, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E88, end: 0x1E88, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E89, end: 0x1E89, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E8A, end: 0x1E8A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E8B, end: 0x1E8B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E8C, end: 0x1E8C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E8D, end: 0x1E8D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E8E, end: 0x1E8E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E8F, end: 0x1E8F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E90, end: 0x1E90, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E91, end: 0x1E91, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E92, end: 0x1E92, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E93, end: 0x1E93, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E94, end: 0x1E94, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E95, end: 0x1E9D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E9E, end: 0x1E9E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E9F, end: 0x1E9F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EA0, end: 0x1EA0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EA1, end: 0x1EA1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EA2, end: 0x1EA2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EA3, end: 0x1EA3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EA4, end: 0x1EA4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EA5, end: 0x1EA5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EA6, end: 0x1EA6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EA7, end: 0x1EA7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EA8, end: 0x1EA8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EA9, end: 0x1EA9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EAA, end: 0x1EAA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EAB, end: 0x1EAB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EAC, end: 0x1EAC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EAD, end: 0x1EAD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EAE, end: 0x1EAE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EAF, end: 0x1EAF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EB0, end: 0x1EB0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EB1, end: 0x1EB1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EB2, end: 0x1EB2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EB3, end: 0x1EB3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EB4, end: 0x1EB4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EB5, end: 0x1EB5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EB6, end: 0x1EB6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EB7, end: 0x1EB7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EB8, end: 0x1EB8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EB9, end: 0x1EB9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EBA, end: 0x1EBA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EBB, end: 0x1EBB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EBC, end: 0x1EBC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EBD, end: 0x1EBD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EBE, end: 0x1EBE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EBF, end: 0x1EBF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EC0, end: 0x1EC0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EC1, end: 0x1EC1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EC2, end: 0x1EC2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EC3, end: 0x1EC3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EC4, end: 0x1EC4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EC5, end: 0x1EC5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EC6, end: 0x1EC6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EC7, end: 0x1EC7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EC8, end: 0x1EC8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EC9, end: 0x1EC9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1ECA, end: 0x1ECA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1ECB, end: 0x1ECB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1ECC, end: 0x1ECC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1ECD, end: 0x1ECD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1ECE, end: 0x1ECE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1ECF, end: 0x1ECF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1ED0, end: 0x1ED0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1ED1, end: 0x1ED1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1ED2, end: 0x1ED2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1ED3, end: 0x1ED3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1ED4, end: 0x1ED4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1ED5, end: 0x1ED5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1ED6, end: 0x1ED6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1ED7, end: 0x1ED7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1ED8, end: 0x1ED8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1ED9, end: 0x1ED9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EDA, end: 0x1EDA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EDB, end: 0x1EDB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EDC, end: 0x1EDC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EDD, end: 0x1EDD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EDE, end: 0x1EDE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EDF, end: 0x1EDF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EE0, end: 0x1EE0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EE1, end: 0x1EE1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EE2, end: 0x1EE2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EE3, end: 0x1EE3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EE4, end: 0x1EE4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EE5, end: 0x1EE5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EE6, end: 0x1EE6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EE7, end: 0x1EE7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EE8, end: 0x1EE8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EE9, end: 0x1EE9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EEA, end: 0x1EEA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EEB, end: 0x1EEB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EEC, end: 0x1EEC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EED, end: 0x1EED, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EEE, end: 0x1EEE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EEF, end: 0x1EEF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EF0, end: 0x1EF0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EF1, end: 0x1EF1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EF2, end: 0x1EF2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EF3, end: 0x1EF3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EF4, end: 0x1EF4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EF5, end: 0x1EF5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EF6, end: 0x1EF6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EF7, end: 0x1EF7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EF8, end: 0x1EF8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EF9, end: 0x1EF9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EFA, end: 0x1EFA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EFB, end: 0x1EFB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EFC, end: 0x1EFC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EFD, end: 0x1EFD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1EFE, end: 0x1EFE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1EFF, end: 0x1F07, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F08, end: 0x1F0F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F10, end: 0x1F15, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F18, end: 0x1F1D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F20, end: 0x1F27, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F28, end: 0x1F2F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F30, end: 0x1F37, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F38, end: 0x1F3F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F40, end: 0x1F45, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F48, end: 0x1F4D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F50, end: 0x1F57, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F59, end: 0x1F59, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F5B, end: 0x1F5B, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F5D, end: 0x1F5D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F5F, end: 0x1F5F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F60, end: 0x1F67, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F68, end: 0x1F6F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F70, end: 0x1F7D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F80, end: 0x1F87, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F88, end: 0x1F8F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F90, end: 0x1F97, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1F98, end: 0x1F9F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1FA0, end: 0x1FA7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FA8, end: 0x1FAF, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1FB0, end: 0x1FB4, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FB6, end: 0x1FB7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FB8, end: 0x1FBC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1FBE, end: 0x1FBE, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FC2, end: 0x1FC4, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FC6, end: 0x1FC7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FC8, end: 0x1FCC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1FD0, end: 0x1FD3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FD6, end: 0x1FD7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FD8, end: 0x1FDB, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1FE0, end: 0x1FE7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FE8, end: 0x1FEC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1FF2, end: 0x1FF4, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FF6, end: 0x1FF7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1FF8, end: 0x1FFC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2000, end: 0x200A, property: SentenceBreak::Sp },
    SentenceBreakRange { start: 0x200B, end: 0x200B, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x200C, end: 0x200C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x200D, end: 0x200F, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x2013, end: 0x2014, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0x2018, end: 0x201F, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2024, end: 0x2024, property: SentenceBreak::ATerm },
    SentenceBreakRange { start: 0x2028, end: 0x2029, property: SentenceBreak::Sep },
    SentenceBreakRange { start: 0x202A, end: 0x202E, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x202F, end: 0x202F, property: SentenceBreak::Sp },
    SentenceBreakRange { start: 0x2039, end: 0x203A, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x203C, end: 0x203D, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x2045, end: 0x2046, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2047, end: 0x2049, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x205F, end: 0x205F, property: SentenceBreak::Sp },
    SentenceBreakRange { start: 0x2060, end: 0x2064, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x2066, end: 0x206F, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x2071, end: 0x2071, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x207D, end: 0x207E, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x207F, end: 0x207F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x208D, end: 0x208E, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2090, end: 0x209C, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x20D0, end: 0x20F0, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x2102, end: 0x2102, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2107, end: 0x2107, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x210A, end: 0x210A, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x210B, end: 0x210D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x210E, end: 0x210F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2110, end: 0x2112, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2113, end: 0x2113, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2115, end: 0x2115, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2119, end: 0x211D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2124, end: 0x2124, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2126, end: 0x2126, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2128, end: 0x2128, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x212A, end: 0x212D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x212F, end: 0x212F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2130, end: 0x2133, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2134, end: 0x2134, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2135, end: 0x2138, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2139, end: 0x2139, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x213C, end: 0x213D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x213E, end: 0x213F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2145, end: 0x2145, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2146, end: 0x2149, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x214E, end: 0x214E, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2160, end: 0x216F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2170, end: 0x217F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2180, end: 0x2182, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2183, end: 0x2183, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2184, end: 0x2184, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2185, end: 0x2188, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2308, end: 0x230B, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2329, end: 0x232A, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x24B6, end: 0x24CF, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x24D0, end: 0x24E9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2768, end: 0x2775, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x27C5, end: 0x27C6, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x27E6, end: 0x27EF, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2983, end: 0x2998, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x29D8, end: 0x29DB, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x29FC, end: 0x29FD, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2C00, end: 0x2C2F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C30, end: 0x2C5F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C60, end: 0x2C60, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C61, end: 0x2C61, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C62, end: 0x2C64, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C65, end: 0x2C66, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C67, end: 0x2C67, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C68, end: 0x2C68, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C69, end: 0x2C69, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C6A, end: 0x2C6A, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C6B, end: 0x2C6B, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C6C, end: 0x2C6C, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C6D, end: 0x2C70, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C71, end: 0x2C71, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C72, end: 0x2C72, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C73, end: 0x2C74, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C75, end: 0x2C75, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C76, end: 0x2C7D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C7E, end: 0x2C80, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C81, end: 0x2C81, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C82, end: 0x2C82, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C83, end: 0x2C83, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C84, end: 0x2C84, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C85, end: 0x2C85, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C86, end: 0x2C86, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C87, end: 0x2C87, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C88, end: 0x2C88, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C89, end: 0x2C89, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C8A, end: 0x2C8A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C8B, end: 0x2C8B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C8C, end: 0x2C8C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C8D, end: 0x2C8D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C8E, end: 0x2C8E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C8F, end: 0x2C8F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C90, end: 0x2C90, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C91, end: 0x2C91, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C92, end: 0x2C92, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C93, end: 0x2C93, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C94, end: 0x2C94, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C95, end: 0x2C95, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C96, end: 0x2C96, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C97, end: 0x2C97, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C98, end: 0x2C98, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C99, end: 0x2C99, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C9A, end: 0x2C9A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C9B, end: 0x2C9B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C9C, end: 0x2C9C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C9D, end: 0x2C9D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2C9E, end: 0x2C9E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2C9F, end: 0x2C9F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CA0, end: 0x2CA0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CA1, end: 0x2CA1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CA2, end: 0x2CA2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CA3, end: 0x2CA3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CA4, end: 0x2CA4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CA5, end: 0x2CA5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CA6, end: 0x2CA6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CA7, end: 0x2CA7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CA8, end: 0x2CA8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CA9, end: 0x2CA9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CAA, end: 0x2CAA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CAB, end: 0x2CAB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CAC, end: 0x2CAC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CAD, end: 0x2CAD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CAE, end: 0x2CAE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CAF, end: 0x2CAF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CB0, end: 0x2CB0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CB1, end: 0x2CB1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CB2, end: 0x2CB2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CB3, end: 0x2CB3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CB4, end: 0x2CB4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CB5, end: 0x2CB5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CB6, end: 0x2CB6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CB7, end: 0x2CB7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CB8, end: 0x2CB8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CB9, end: 0x2CB9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CBA, end: 0x2CBA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CBB, end: 0x2CBB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CBC, end: 0x2CBC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CBD, end: 0x2CBD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CBE, end: 0x2CBE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CBF, end: 0x2CBF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CC0, end: 0x2CC0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CC1, end: 0x2CC1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CC2, end: 0x2CC2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CC3, end: 0x2CC3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CC4, end: 0x2CC4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CC5, end: 0x2CC5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CC6, end: 0x2CC6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CC7, end: 0x2CC7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CC8, end: 0x2CC8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CC9, end: 0x2CC9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CCA, end: 0x2CCA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CCB, end: 0x2CCB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CCC, end: 0x2CCC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CCD, end: 0x2CCD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CCE, end: 0x2CCE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CCF, end: 0x2CCF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CD0, end: 0x2CD0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CD1, end: 0x2CD1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CD2, end: 0x2CD2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CD3, end: 0x2CD3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CD4, end: 0x2CD4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CD5, end: 0x2CD5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CD6, end: 0x2CD6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CD7, end: 0x2CD7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CD8, end: 0x2CD8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CD9, end: 0x2CD9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CDA, end: 0x2CDA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CDB, end: 0x2CDB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CDC, end: 0x2CDC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CDD, end: 0x2CDD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CDE, end: 0x2CDE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CDF, end: 0x2CDF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CE0, end: 0x2CE0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CE1, end: 0x2CE1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CE2, end: 0x2CE2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CE3, end: 0x2CE4, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CEB, end: 0x2CEB, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CEC, end: 0x2CEC, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CED, end: 0x2CED, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CEE, end: 0x2CEE, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2CEF, end: 0x2CF1, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x2CF2, end: 0x2CF2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x2CF3, end: 0x2CF3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2D00, end: 0x2D25, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2D27, end: 0x2D27, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2D2D, end: 0x2D2D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x2D30, end: 0x2D67, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2D6F, end: 0x2D6F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2D7F, end: 0x2D7F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x2D80, end: 0x2D96, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2DA0, end: 0x2DA6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2DA8, end: 0x2DAE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2DB0, end: 0x2DB6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2DB8, end: 0x2DBE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2DC0, end: 0x2DC6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2DC8, end: 0x2DCE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2DD0, end: 0x2DD6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2DD8, end: 0x2DDE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2DE0, end: 0x2DFF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x2E02, end: 0x2E05, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2E09, end: 0x2E0A, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2E0C, end: 0x2E0D, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2E1C, end: 0x2E1D, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2E20, end: 0x2E29, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2E2E, end: 0x2E2E, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x2E2F, end: 0x2E2F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2E3C, end: 0x2E3C, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x2E42, end: 0x2E42, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x2E55, end: 0x2E5C, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x3000, end: 0x3000, property: SentenceBreak::Sp },
    SentenceBreakRange { start: 0x3001, end: 0x3001, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0x3002, end: 0x3002, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0x3005, end: 0x3007, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x3008, end: 0x3011, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x3014, end: 0x301B, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x301D, end: 0x301F, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0x3021, end: 0x3029, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x302A, end: 0x302F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x3031, end: 0x3035, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x3038, end: 0x303C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x3041, end: 0x3096, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x3099, end: 0x309A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x309D, end: 0x309F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x30A1, end: 0x30FA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x30FC, end: 0x30FF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x3105, end: 0x312F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x3131, end: 0x318E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x31A0, end: 0x31BF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x31F0, end: 0x31FF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x3400, end: 0x4DBF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x4E00, end: 0xA48C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA4D0, end: 0xA4FD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA4FF, end: 0xA4FF, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xA500, end: 0xA60C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA60E, end: 0xA60F, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xA610, end: 0xA61F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA620, end: 0xA629, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0xA62A, end: 0xA62B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA640, end: 0xA640, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA641, end: 0xA641, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA642, end: 0xA642, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA643, end: 0xA643, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA644, end: 0xA644, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA645, end: 0xA645, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA646, end: 0xA646, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA647, end: 0xA647, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA648, end: 0xA648, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA649, end: 0xA649, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA64A, end: 0xA64A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA64B, end: 0xA64B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA64C, end: 0xA64C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA64D, end: 0xA64D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA64E, end: 0xA64E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA64F, end: 0xA64F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA650, end: 0xA650, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA651, end: 0xA651, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA652, end: 0xA652, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA653, end: 0xA653, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA654, end: 0xA654, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA655, end: 0xA655, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA656, end: 0xA656, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA657, end: 0xA657, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA658, end: 0xA658, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA659, end: 0xA659, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA65A, end: 0xA65A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA65B, end: 0xA65B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA65C, end: 0xA65C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA65D, end: 0xA65D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA65E, end: 0xA65E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA65F, end: 0xA65F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA660, end: 0xA660, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA661, end: 0xA661, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA662, end: 0xA662, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA663, end: 0xA663, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA664, end: 0xA664, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA665, end: 0xA665, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA666, end: 0xA666, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA667, end: 0xA667, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA668, end: 0xA668, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA669, end: 0xA669, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA66A, end: 0xA66A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA66B, end: 0xA66B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA66C, end: 0xA66C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA66D, end: 0xA66D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA66E, end: 0xA66E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA66F, end: 0xA672, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA674, end: 0xA67D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA67F, end: 0xA67F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA680, end: 0xA680, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA681, end: 0xA681, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA682, end: 0xA682, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA683, end: 0xA683, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA684, end: 0xA684, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA685, end: 0xA685, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA686, end: 0xA686, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA687, end: 0xA687, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA688, end: 0xA688, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA689, end: 0xA689, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA68A, end: 0xA68A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA68B, end: 0xA68B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA68C, end: 0xA68C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA68D, end: 0xA68D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA68E, end: 0xA68E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA68F, end: 0xA68F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA690, end: 0xA690, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA691, end: 0xA691, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA692, end: 0xA692, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA693, end: 0xA693, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA694, end: 0xA694, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA695, end: 0xA695, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA696, end: 0xA696, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA697, end: 0xA697, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA698, end: 0xA698, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA699, end: 0xA699, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA69A, end: 0xA69A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA69B, end: 0xA69D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA69E, end: 0xA69F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA6A0, end: 0xA6EF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA6F0, end: 0xA6F1, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA6F3, end: 0xA6F3, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xA6F7, end: 0xA6F7, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xA717, end: 0xA71F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA722, end: 0xA722, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA723, end: 0xA723, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA724, end: 0xA724, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA725, end: 0xA725, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA726, end: 0xA726, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA727, end: 0xA727, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA728, end: 0xA728, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA729, end: 0xA729, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA72A, end: 0xA72A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA72B, end: 0xA72B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA72C, end: 0xA72C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA72D, end: 0xA72D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA72E, end: 0xA72E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA72F, end: 0xA731, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA732, end: 0xA732, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA733, end: 0xA733, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA734, end: 0xA734, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA735, end: 0xA735, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA736, end: 0xA736, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA737, end: 0xA737, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA738, end: 0xA738, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA739, end: 0xA739, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA73A, end: 0xA73A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA73B, end: 0xA73B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA73C, end: 0xA73C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA73D, end: 0xA73D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA73E, end: 0xA73E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA73F, end: 0xA73F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA740, end: 0xA740, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA741, end: 0xA741, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA742, end: 0xA742, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA743, end: 0xA743, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA744, end: 0xA744, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA745, end: 0xA745, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA746, end: 0xA746, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA747, end: 0xA747, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA748, end: 0xA748, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA749, end: 0xA749, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA74A, end: 0xA74A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA74B, end: 0xA74B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA74C, end: 0xA74C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA74D, end: 0xA74D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA74E, end: 0xA74E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA74F, end: 0xA74F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA750, end: 0xA750, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA751, end: 0xA751, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA752, end: 0xA752, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA753, end: 0xA753, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA754, end: 0xA754, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA755, end: 0xA755, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA756, end: 0xA756, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA757, end: 0xA757, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA758, end: 0xA758, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA759, end: 0xA759, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA75A, end: 0xA75A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA75B, end: 0xA75B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA75C, end: 0xA75C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA75D, end: 0xA75D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA75E, end: 0xA75E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA75F, end: 0xA75F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA760, end: 0xA760, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA761, end: 0xA761, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA762, end: 0xA762, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA763, end: 0xA763, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA764, end: 0xA764, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA765, end: 0xA765, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA766, end: 0xA766, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA767, end: 0xA767, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA768, end: 0xA768, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA769, end: 0xA769, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA76A, end: 0xA76A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA76B, end: 0xA76B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA76C, end: 0xA76C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA76D, end: 0xA76D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA76E, end: 0xA76E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA76F, end: 0xA778, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA779, end: 0xA779, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA77A, end: 0xA77A, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA77B, end: 0xA77B, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA77C, end: 0xA77C, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA77D, end: 0xA77E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA77F, end: 0xA77F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA780, end: 0xA780, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA781, end: 0xA781, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA782, end: 0xA782, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA783, end: 0xA783, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA784, end: 0xA784, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA785, end: 0xA785, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA786, end: 0xA786, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA787, end: 0xA787, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA788, end: 0xA788, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA78B, end: 0xA78B, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA78C, end: 0xA78C, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA78D, end: 0xA78D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA78E, end: 0xA78E, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA78F, end: 0xA78F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA790, end: 0xA790, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA791, end: 0xA791, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA792, end: 0xA792, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA793, end: 0xA795, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA796, end: 0xA796, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA797, end: 0xA797, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA798, end: 0xA798, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA799, end: 0xA799, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA79A, end: 0xA79A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA79B, end: 0xA79B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA79C, end: 0xA79C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA79D, end: 0xA79D, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA79E, end: 0xA79E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA79F, end: 0xA79F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7A0, end: 0xA7A0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7A1, end: 0xA7A1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7A2, end: 0xA7A2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7A3, end: 0xA7A3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7A4, end: 0xA7A4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7A5, end: 0xA7A5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7A6, end: 0xA7A6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7A7, end: 0xA7A7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7A8, end: 0xA7A8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7A9, end: 0xA7A9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7AA, end: 0xA7AE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7AF, end: 0xA7AF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7B0, end: 0xA7B4, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7B5, end: 0xA7B5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7B6, end: 0xA7B6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7B7, end: 0xA7B7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7B8, end: 0xA7B8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7B9, end: 0xA7B9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7BA, end: 0xA7BA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7BB, end: 0xA7BB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7BC, end: 0xA7BC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7BD, end: 0xA7BD, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7BE, end: 0xA7BE, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7BF, end: 0xA7BF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7C0, end: 0xA7C0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7C1, end: 0xA7C1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7C2, end: 0xA7C2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7C3, end: 0xA7C3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7C4, end: 0xA7C7, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7C8, end: 0xA7C8, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7C9, end: 0xA7C9, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7CA, end: 0xA7CA, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7D0, end: 0xA7D0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7D1, end: 0xA7D1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7D3, end: 0xA7D3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7D5, end: 0xA7D5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7D6, end: 0xA7D6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7D7, end: 0xA7D7, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7D8, end: 0xA7D8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7D9, end: 0xA7D9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7F2, end: 0xA7F4, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA7F5, end: 0xA7F5, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xA7F6, end: 0xA7F6, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7F7, end: 0xA7F7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA7F8, end: 0xA7FA, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xA7FB, end: 0xA801, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA802, end: 0xA802, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA803, end: 0xA805, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA806, end: 0xA806, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA807, end: 0xA80A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA80B, end: 0xA80B, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA80C, end: 0xA822, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA823, end: 0xA827, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA82C, end: 0xA82C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA840, end: 0xA873, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA876, end: 0xA877, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xA880, end: 0xA881, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA882, end: 0xA8B3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA8B4, end: 0xA8C5, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA8CE, end: 0xA8CF, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xA8D0, end: 0xA8D9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0xA8E0, end: 0xA8F1, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA8F2, end: 0xA8F7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA8FB, end: 0xA8FB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA8FD, end: 0xA8FE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA8FF, end: 0xA8FF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA900, end: 0xA909, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0xA90A, end: 0xA925, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA926, end: 0xA92D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA92F, end: 0xA92F, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xA930, end: 0xA946, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA947, end: 0xA953, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA960, end: 0xA97C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA980, end: 0xA983, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA984, end: 0xA9B2, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA9B3, end: 0xA9C0, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA9C8, end: 0xA9C9, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xA9CF, end: 0xA9CF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA9D0, end: 0xA9D9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0xA9E0, end: 0xA9E4, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA9E5, end: 0xA9E5, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xA9E6, end: 0xA9EF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xA9F0, end: 0xA9F9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0xA9FA, end: 0xA9FE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAA00, end: 0xAA28, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAA29, end: 0xAA36, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAA40, end: 0xAA42, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAA43, end: 0xAA43, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAA44, end: 0xAA4B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAA4C, end: 0xAA4D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAA50, end: 0xAA59, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0xAA5D, end: 0xAA5F, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xAA60, end: 0xAA76, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAA7A, end: 0xAA7A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAA7B, end: 0xAA7D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAA7E, end: 0xAAAF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAAB0, end: 0xAAB0, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAAB1, end: 0xAAB1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAAB2, end: 0xAAB4, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAAB5, end: 0xAAB6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAAB7, end: 0xAAB8, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAAB9, end: 0xAABD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAABE, end: 0xAABF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAAC0, end: 0xAAC0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAAC1, end: 0xAAC1, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAAC2, end: 0xAAC2, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAADB, end: 0xAADD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAAE0, end: 0xAAEA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAAEB, end: 0xAAEF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAAF0, end: 0xAAF1, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xAAF2, end: 0xAAF4, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAAF5, end: 0xAAF6, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xAB01, end: 0xAB06, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAB09, end: 0xAB0E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAB11, end: 0xAB16, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAB20, end: 0xAB26, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAB28, end: 0xAB2E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xAB30, end: 0xAB5A, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xAB5C, end: 0xAB69, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xAB70, end: 0xABBF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xABC0, end: 0xABE2, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xABE3, end: 0xABEA, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xABEB, end: 0xABEB, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xABEC, end: 0xABED, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xABF0, end: 0xABF9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0xAC00, end: 0xD7A3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xD7B0, end: 0xD7C6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xD7CB, end: 0xD7FB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xF900, end: 0xFA6D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFA70, end: 0xFAD9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFB00, end: 0xFB06, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xFB13, end: 0xFB17, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xFB1D, end: 0xFB1D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFB1E, end: 0xFB1E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xFB1F, end: 0xFB28, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFB2A, end: 0xFB36, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFB38, end: 0xFB3C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFB3E, end: 0xFB3E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFB40, end: 0xFB41, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFB43, end: 0xFB44, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFB46, end: 0xFBB1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFBD3, end: 0xFD3D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFD3E, end: 0xFD3F, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFD50, end: 0xFD8F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFD92, end: 0xFDC7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFDF0, end: 0xFDFB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFE00, end: 0xFE0F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xFE10, end: 0xFE11, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFE13, end: 0xFE13, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFE17, end: 0xFE18, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFE20, end: 0xFE2F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xFE31, end: 0xFE32, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFE35, end: 0xFE44, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFE47, end: 0xFE48, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFE50, end: 0xFE51, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFE52, end: 0xFE52, property: SentenceBreak::ATerm },
    SentenceBreakRange { start: 0xFE55, end: 0xFE55, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFE56, end: 0xFE57, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xFE58, end: 0xFE58, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFE59, end: 0xFE5E, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFE63, end: 0xFE63, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFE70, end: 0xFE74, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFE76, end: 0xFEFC, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFEFF, end: 0xFEFF, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0xFF01, end: 0xFF01, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xFF02, end: 0xFF02, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFF07, end: 0xFF09, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFF0C, end: 0xFF0D, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFF0E, end: 0xFF0E, property: SentenceBreak::ATerm },
    SentenceBreakRange { start: 0xFF10, end: 0xFF19, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0xFF1A, end: 0xFF1A, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFF1F, end: 0xFF1F, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xFF21, end: 0xFF3A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0xFF3B, end: 0xFF3B, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFF3D, end: 0xFF3D, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFF41, end: 0xFF5A, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0xFF5B, end: 0xFF5B, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFF5D, end: 0xFF5D, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFF5F, end: 0xFF60, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFF61, end: 0xFF61, property: SentenceBreak::STerm },
    SentenceBreakRange { start: 0xFF62, end: 0xFF63, property: SentenceBreak::Close },
    SentenceBreakRange { start: 0xFF64, end: 0xFF64, property: SentenceBreak::SContinue },
    SentenceBreakRange { start: 0xFF66, end: 0xFF9D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFF9E, end: 0xFF9F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xFFA0, end: 0xFFBE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFFC2, end: 0xFFC7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFFCA, end: 0xFFCF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFFD2, end: 0xFFD7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFFDA, end: 0xFFDC, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xFFF9, end: 0xFFFB, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x10000, end: 0x1000B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1000D, end: 0x10026, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10028, end: 0x1003A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1003C, end: 0x1003D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1003F, end: 0x1004D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10050, end: 0x1005D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10080, end: 0x100FA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10140, end: 0x10174, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x101FD, end: 0x101FD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10280, end: 0x1029C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x102A0, end: 0x102D0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x102E0, end: 0x102E0, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10300, end: 0x1031F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1032D, end: 0x1034A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10350, end: 0x10375, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10376, end: 0x1037A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10380, end: 0x1039D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x103A0, end: 0x103C3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x103C8, end: 0x103CF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x103D1, end: 0x103D5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10400, end: 0x10427, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x10428, end: 0x1044F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x10450, end: 0x1049D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x104A0, end: 0x104A9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x104B0, end: 0x104D3, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x104D8, end: 0x104FB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x10500, end: 0x10527, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10530, end: 0x10563, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10570, end: 0x1057A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1057C, end: 0x1058A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1058C, end: 0x10592, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x10594, end: 0x10595, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x10597, end: 0x105A1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x105A3, end: 0x105B1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x105B3, end: 0x105B9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x105BB, end: 0x105BC, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x10600, end: 0x10736, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10740, end: 0x10755, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10760, end: 0x10767, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10780, end: 0x10785, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10787, end: 0x107B0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x107B2, end: 0x107BA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10800, end: 0x10805, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10808, end: 0x10808, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1080A, end: 0x10835, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10837, end: 0x10838, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1083C, end: 0x1083C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1083F, end: 0x10855, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10860, end: 0x10876, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10880, end: 0x1089E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x108E0, end: 0x108F2, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x108F4, end: 0x108F5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10900, end: 0x10915, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10920, end: 0x10939, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10980, end: 0x109B7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x109BE, end: 0x109BF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10A00, end: 0x10A00, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10A01, end: 0x10A03, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10A05, end: 0x10A06, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10A0C, end: 0x10A0F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10A10, end: 0x10A13, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10A15, end: 0x10A17, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10A19, end: 0x10A35, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10A38, end: 0x10A3A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10A3F, end: 0x10A3F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10A60, end: 0x10A7C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10A80, end: 0x10A9C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10AC0, end: 0x10AC7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10AC9, end: 0x10AE4, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10AE5, end: 0x10AE6, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10B00, end: 0x10B35, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10B40, end: 0x10B55, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10B60, end: 0x10B72, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10B80, end: 0x10B91, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10C00, end: 0x10C48, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10C80, end: 0x10CB2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x10CC0, end: 0x10CF2, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x10D00, end: 0x10D23, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10D24, end: 0x10D27, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10D30, end: 0x10D39, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x10E80, end: 0x10EA9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10EAB, end: 0x10EAC, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10EB0, end: 0x10EB1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10F00, end: 0x10F1C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10F27, end: 0x10F27, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10F30, end: 0x10F45, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10F46, end: 0x10F50, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10F70, end: 0x10F81, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10F82, end: 0x10F85, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x10FB0, end: 0x10FC4, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x10FE0, end: 0x10FF6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11000, end: 0x11002, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11003, end: 0x11037, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11038, end: 0x11046, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11066, end: 0x1106F, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11070, end: 0x11070, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11071, end: 0x11072, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11073, end: 0x11074, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11075, end: 0x11075, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1107F, end: 0x11082, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11083, end: 0x110AF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x110B0, end: 0x110BA, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x110BD, end: 0x110BD, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x110C2, end: 0x110C2, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x110CD, end: 0x110CD, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x110D0, end: 0x110E8, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x110F0, end: 0x110F9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11100, end: 0x11102, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11103, end: 0x11126, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11127, end: 0x11134, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11136, end: 0x1113F, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11144, end: 0x11144, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11145, end: 0x11146, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11147, end: 0x11147, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11150, end: 0x11172, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11173, end: 0x11173, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11176, end: 0x11176, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11180, end: 0x11182, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11183, end: 0x111B2, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x111B3, end: 0x111C0, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x111C1, end: 0x111C4, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x111C9, end: 0x111CC, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x111CE, end: 0x111CF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x111D0, end: 0x111D9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x111DA, end: 0x111DA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x111DC, end: 0x111DC, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11200, end: 0x11211, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11213, end: 0x1122B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1122C, end: 0x11237, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1123E, end: 0x1123E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11280, end: 0x11286, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11288, end: 0x11288, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1128A, end: 0x1128D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1128F, end: 0x1129D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1129F, end: 0x112A8, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x112B0, end: 0x112DE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x112DF, end: 0x112EA, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x112F0, end: 0x112F9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11300, end: 0x11303, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11305, end: 0x1130C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1130F, end: 0x11310, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11313, end: 0x11328, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1132A, end: 0x11330, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11332, end: 0x11333, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11335, end: 0x11339, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1133B, end: 0x1133C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1133D, end: 0x1133D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1133E, end: 0x11344, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11347, end: 0x11348, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1134B, end: 0x1134D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11350, end: 0x11350, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11357, end: 0x11357, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1135D, end: 0x11361, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11362, end: 0x11363, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11366, end: 0x1136C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11370, end: 0x11374, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11400, end: 0x11434, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11435, end: 0x11446, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11447, end: 0x1144A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11450, end: 0x11459, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1145E, end: 0x1145E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1145F, end: 0x11461, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11480, end: 0x114AF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x114B0, end: 0x114C3, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x114C4, end: 0x114C5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x114C7, end: 0x114C7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x114D0, end: 0x114D9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11580, end: 0x115AE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x115AF, end: 0x115B5, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x115B8, end: 0x115C0, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x115D8, end: 0x115DB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x115DC, end: 0x115DD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11600, end: 0x1162F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11630, end: 0x11640, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11644, end: 0x11644, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11650, end: 0x11659, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11680, end: 0x116AA, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x116AB, end: 0x116B7, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x116B8, end: 0x116B8, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x116C0, end: 0x116C9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11700, end: 0x1171A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1171D, end: 0x1172B, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11730, end: 0x11739, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11740, end: 0x11746, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11800, end: 0x1182B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1182C, end: 0x1183A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x118A0, end: 0x118BF, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x118C0, end: 0x118DF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x118E0, end: 0x118E9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x118FF, end: 0x11906, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11909, end: 0x11909, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1190C, end: 0x11913, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11915, end: 0x11916, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11918, end: 0x1192F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11930, end: 0x11935, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11937, end: 0x11938, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1193B, end: 0x1193E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1193F, end: 0x1193F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11940, end: 0x11940, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11941, end: 0x11941, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11942, end: 0x11943, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11950, end: 0x11959, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x119A0, end: 0x119A7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x119AA, end: 0x119D0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x119D1, end: 0x119D7, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x119DA, end: 0x119E0, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x119E1, end: 0x119E1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x119E3, end: 0x119E3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x119E4, end: 0x119E4, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11A00, end: 0x11A00, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11A01, end: 0x11A0A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11A0B, end: 0x11A32, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11A33, end: 0x11A39, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11A3A, end: 0x11A3A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11A3B, end: 0x11A3E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11A47, end: 0x11A47, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11A50, end: 0x11A50, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11A51, end: 0x11A5B, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11A5C, end: 0x11A89, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11A8A, end: 0x11A99, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11A9D, end: 0x11A9D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11AB0, end: 0x11AF8, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11C00, end: 0x11C08, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11C0A, end: 0x11C2E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11C2F, end: 0x11C36, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11C38, end: 0x11C3F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11C40, end: 0x11C40, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11C50, end: 0x11C59, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11C72, end: 0x11C8F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11C92, end: 0x11CA7, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11CA9, end: 0x11CB6, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11D00, end: 0x11D06, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11D08, end: 0x11D09, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11D0B, end: 0x11D30, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11D31, end: 0x11D36, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11D3A, end: 0x11D3A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11D3C, end: 0x11D3D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11D3F, end: 0x11D45, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11D46, end: 0x11D46, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11D47, end: 0x11D47, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11D50, end: 0x11D59, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11D60, end: 0x11D65, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11D67, end: 0x11D68, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11D6A, end: 0x11D89, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11D8A, end: 0x11D8E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11D90, end: 0x11D91, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11D93, end: 0x11D97, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11D98, end: 0x11D98, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11DA0, end: 0x11DA9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x11EE0, end: 0x11EF2, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x11EF3, end: 0x11EF6, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x11FB0, end: 0x11FB0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12000, end: 0x12399, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12400, end: 0x1246E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12480, end: 0x12543, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x12F90, end: 0x12FF0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x13000, end: 0x1342E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x13430, end: 0x13438, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x14400, end: 0x14646, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16800, end: 0x16A38, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16A40, end: 0x16A5E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16A60, end: 0x16A69, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x16A70, end: 0x16ABE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16AC0, end: 0x16AC9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x16AD0, end: 0x16AED, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16AF0, end: 0x16AF4, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x16B00, end: 0x16B2F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16B30, end: 0x16B36, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x16B40, end: 0x16B43, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16B50, end: 0x16B59, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x16B63, end: 0x16B77, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16B7D, end: 0x16B8F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16E40, end: 0x16E5F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x16E60, end: 0x16E7F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x16F00, end: 0x16F4A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16F4F, end: 0x16F4F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x16F50, end: 0x16F50, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16F51, end: 0x16F87, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x16F8F, end: 0x16F92, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x16F93, end: 0x16F9F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16FE0, end: 0x16FE1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16FE3, end: 0x16FE3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x16FE4, end: 0x16FE4, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x16FF0, end: 0x16FF1, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x17000, end: 0x187F7, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x18800, end: 0x18CD5, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x18D00, end: 0x18D08, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1AFF0, end: 0x1AFF3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1AFF5, end: 0x1AFFB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1AFFD, end: 0x1AFFE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1B000, end: 0x1B122, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1B150, end: 0x1B152, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1B164, end: 0x1B167, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1B170, end: 0x1B2FB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1BC00, end: 0x1BC6A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1BC70, end: 0x1BC7C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1BC80, end: 0x1BC88, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1BC90, end: 0x1BC99, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1BC9D, end: 0x1BC9E, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1BCA0, end: 0x1BCA3, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x1CF00, end: 0x1CF2D, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1CF30, end: 0x1CF46, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1D165, end: 0x1D169, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1D16D, end: 0x1D172, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1D173, end: 0x1D17A, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0x1D17B, end: 0x1D182, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1D185, end: 0x1D18B, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1D1AA, end: 0x1D1AD, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1D242, end: 0x1D244, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1D400, end: 0x1D419, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D41A, end: 0x1D433, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D434, end: 0x1D44D, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D44E, end: 0x1D454, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D456, end: 0x1D467, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D468, end: 0x1D481, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D482, end: 0x1D49B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D49C, end: 0x1D49C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D49E, end: 0x1D49F, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D4A2, end: 0x1D4A2, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D4A5, end: 0x1D4A6, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D4A9, end: 0x1D4AC, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D4AE, end: 0x1D4B5, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D4B6, end: 0x1D4B9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D4BB, end: 0x1D4BB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D4BD, end: 0x1D4C3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D4C5, end: 0x1D4CF, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D4D0, end: 0x1D4E9, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D4EA, end: 0x1D503, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D504, end: 0x1D505, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D507, end: 0x1D50A, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D50D, end: 0x1D514, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D516, end: 0x1D51C, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D51E, end: 0x1D537, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D538, end: 0x1D539, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D53B, end: 0x1D53E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D540, end: 0x1D544, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D546, end: 0x1D546, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D54A, end: 0x1D550, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D552, end: 0x1D56B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D56C, end: 0x1D585, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D586, end: 0x1D59F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D5A0, end: 0x1D5B9, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D5BA, end: 0x1D5D3, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D5D4, end: 0x1D5ED, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D5EE, end: 0x1D607, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D608, end: 0x1D621, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D622, end: 0x1D63B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D63C, end: 0x1D655, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D656, end: 0x1D66F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D670, end: 0x1D689, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D68A, end: 0x1D6A5, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D6A8, end: 0x1D6C0, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D6C2, end: 0x1D6DA, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D6DC, end: 0x1D6E1, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D6E2, end: 0x1D6FA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D6FC, end: 0x1D714, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D716, end: 0x1D71B, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D71C, end: 0x1D734, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D736, end: 0x1D74E, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D750, end: 0x1D755, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D756, end: 0x1D76E, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D770, end: 0x1D788, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D78A, end: 0x1D78F, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D790, end: 0x1D7A8, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D7AA, end: 0x1D7C2, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D7C4, end: 0x1D7C9, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D7CA, end: 0x1D7CA, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1D7CB, end: 0x1D7CB, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1D7CE, end: 0x1D7FF, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1DA00, end: 0x1DA36, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1DA3B, end: 0x1DA6C, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1DA75, end: 0x1DA75, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1DA84, end: 0x1DA84, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1DA9B, end: 0x1DA9F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1DAA1, end: 0x1DAAF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1DF00, end: 0x1DF09, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1DF0A, end: 0x1DF0A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1DF0B, end: 0x1DF1E, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E000, end: 0x1E006, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E008, end: 0x1E018, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E01B, end: 0x1E021, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E023, end: 0x1E024, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E026, end: 0x1E02A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E100, end: 0x1E12C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E130, end: 0x1E136, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E137, end: 0x1E13D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E140, end: 0x1E149, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1E14E, end: 0x1E14E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E290, end: 0x1E2AD, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E2AE, end: 0x1E2AE, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E2C0, end: 0x1E2EB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E2EC, end: 0x1E2EF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E2F0, end: 0x1E2F9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1E7E0, end: 0x1E7E6, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E7E8, end: 0x1E7EB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E7ED, end: 0x1E7EE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E7F0, end: 0x1E7FE, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E800, end: 0x1E8C4, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E8D0, end: 0x1E8D6, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E900, end: 0x1E921, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1E922, end: 0x1E943, property: SentenceBreak::Lower },
    SentenceBreakRange { start: 0x1E944, end: 0x1E94A, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1E94B, end: 0x1E94B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1E950, end: 0x1E959, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x1EE00, end: 0x1EE03, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE05, end: 0x1EE1F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE21, end: 0x1EE22, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE24, end: 0x1EE24, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE27, end: 0x1EE27, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE29, end: 0x1EE32, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE34, end: 0x1EE37, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE39, end: 0x1EE39, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE3B, end: 0x1EE3B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE42, end: 0x1EE42, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE47, end: 0x1EE47, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE49, end: 0x1EE49, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE4B, end: 0x1EE4B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE4D, end: 0x1EE4F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE51, end: 0x1EE52, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE54, end: 0x1EE54, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE57, end: 0x1EE57, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE59, end: 0x1EE59, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE5B, end: 0x1EE5B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE5D, end: 0x1EE5D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE5F, end: 0x1EE5F, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE61, end: 0x1EE62, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE64, end: 0x1EE64, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE67, end: 0x1EE6A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE6C, end: 0x1EE72, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE74, end: 0x1EE77, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE79, end: 0x1EE7C, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE7E, end: 0x1EE7E, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE80, end: 0x1EE89, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EE8B, end: 0x1EE9B, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EEA1, end: 0x1EEA3, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EEA5, end: 0x1EEA9, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1EEAB, end: 0x1EEBB, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x1F130, end: 0x1F149, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F150, end: 0x1F169, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F170, end: 0x1F189, property: SentenceBreak::Upper },
    SentenceBreakRange { start: 0x1F3FB, end: 0x1F3FF, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0x1FBF0, end: 0x1FBF9, property: SentenceBreak::Numeric },
    SentenceBreakRange { start: 0x20000, end: 0x2A6DF, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2A700, end: 0x2B738, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2B740, end: 0x2B81D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2B820, end: 0x2CEA1, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2CEB0, end: 0x2EBE0, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x2F800, end: 0x2FA1D, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0x30000, end: 0x3134A, property: SentenceBreak::OLetter },
    SentenceBreakRange { start: 0xE0001, end: 0xE0001, property: SentenceBreak::Format },
    SentenceBreakRange { start: 0xE0020, end: 0xE007F, property: SentenceBreak::Extend },
    SentenceBreakRange { start: 0xE0100, end: 0xE01EF, property: SentenceBreak::Extend },
];
