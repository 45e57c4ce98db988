// Generated by `cargo run -p xtask -- unicode` from UCD 14.0.0 data. Do not edit.
pub static GENERAL_CATEGORY_RANGES: &[CategoryRange] = &[
    CategoryRange { start: 0x0000, end: 0x001F, category: GeneralCategory::Cc },
    CategoryRange { start: 0x0020, end: 0x0020, category: GeneralCategory::Zs },
    CategoryRange { start: 0x0021, end: 0x0023, category: GeneralCategory::Po },
    CategoryRange { start: 0x0024, end: 0x0024, category: GeneralCategory::Sc },
    CategoryRange { start: 0x0025, end: 0x0027, category: GeneralCategory::Po },
    CategoryRange { start: 0x0028, end: 0x0028, category: GeneralCategory::Ps },
    CategoryRange { start: 0x0029, end: 0x0029, category: GeneralCategory::Pe },
    CategoryRange { start: 0x002A, end: 0x002A, category: GeneralCategory::Po },
    CategoryRange { start: 0x002B, end: 0x002B, category: GeneralCategory::Sm },
    CategoryRange { start: 0x002C, end: 0x002C, category: GeneralCategory::Po },
    CategoryRange { start: 0x002D, end: 0x002D, category: GeneralCategory::Pd },
    CategoryRange { start: 0x002E, end: 0x002F, category: GeneralCategory::Po },
    CategoryRange { start: 0x0030, end: 0x0039, category: GeneralCategory::Nd },
    CategoryRange { start: 0x003A, end: 0x003B, category: GeneralCategory::Po },
    CategoryRange { start: 0x003C, end: 0x003E, category: GeneralCategory::Sm },
    CategoryRange { start: 0x003F, end: 0x0040, category: GeneralCategory::Po },
    CategoryRange { start: 0x0041, end: 0x005A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x005B, end: 0x005B, category: GeneralCategory::Ps },
    CategoryRange { start: 0x005C, end: 0x005C, category: GeneralCategory::Po },
    CategoryRange { start: 0x005D, end: 0x005D, category: GeneralCategory::Pe },
    CategoryRange { start: 0x005E, end: 0x005E, category: GeneralCategory::Sk },
    CategoryRange { start: 0x005F, end: 0x005F, category: GeneralCategory::Pc },
    CategoryRange { start: 0x0060, end: 0x0060, category: GeneralCategory::Sk },
    CategoryRange { start: 0x0061, end: 0x007A, category: GeneralCategory::Ll },
    CategoryRange { start: 0x007B, end: 0x007B, category: GeneralCategory::Ps },
    CategoryRange { start: 0x007C, end: 0x007C, category: GeneralCategory::Sm },
    CategoryRange { start: 0x007D, end: 0x007D, category: GeneralCategory::Pe },
    CategoryRange { start: 0x007E, end: 0x007E, category: GeneralCategory::Sm },
    CategoryRange { start: 0x007F, end: 0x009F, category: GeneralCategory::Cc },
    CategoryRange { start: 0x00A0, end: 0x00A0, category: GeneralCategory::Zs },
    CategoryRange { start: 0x00A1, end: 0x00A1, category: GeneralCategory::Po },
    CategoryRange { start: 0x00A2, end: 0x00A5, category: GeneralCategory::Sc },
    CategoryRange { start: 0x00A6, end: 0x00A6, category: GeneralCategory::So },
    CategoryRange { start: 0x00A7, end: 0x00A7, category: GeneralCategory::Po },
    CategoryRange { start: 0x00A8, end: 0x00A8, category: GeneralCategory::Sk },
    CategoryRange { start: 0x00A9, end: 0x00A9, category: GeneralCategory::So },
    CategoryRange { start: 0x00AA, end: 0x00AA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x00AB, end: 0x00AB, category: GeneralCategory::Pi },
    CategoryRange { start: 0x00AC, end: 0x00AC, category: GeneralCategory::Sm },
    CategoryRange { start: 0x00AD, end: 0x00AD, category: GeneralCategory::Cf },
    CategoryRange { start: 0x00AE, end: 0x00AE, category: GeneralCategory::So },
    CategoryRange { start: 0x00AF, end: 0x00AF, category: GeneralCategory::Sk },
    CategoryRange { start: 0x00B0, end: 0x00B0, category: GeneralCategory::So },
    CategoryRange { start: 0x00B1, end: 0x00B1, category: GeneralCategory::Sm },
    CategoryRange { start: 0x00B2, end: 0x00B3, category: GeneralCategory::No },
    CategoryRange { start: 0x00B4, end: 0x00B4, category: GeneralCategory::Sk },
    CategoryRange { start: 0x00B5, end: 0x00B5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x00B6, end: 0x00B7, category: GeneralCategory::Po },
    CategoryRange { start: 0x00B8, end: 0x00B8, category: GeneralCategory::Sk },
    CategoryRange { start: 0x00B9, end: 0x00B9, category: GeneralCategory::No },
    CategoryRange { start: 0x00BA, end: 0x00BA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x00BB, end: 0x00BB, category: GeneralCategory::Pf },
    CategoryRange { start: 0x00BC, end: 0x00BE, category: GeneralCategory::No },
    CategoryRange { start: 0x00BF, end: 0x00BF, category: GeneralCategory::Po },
    CategoryRange { start: 0x00C0, end: 0x00D6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x00D7, end: 0x00D7, category: GeneralCategory::Sm },
    CategoryRange { start: 0x00D8, end: 0x00DE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x00DF, end: 0x00F6, category: GeneralCategory::Ll },
    CategoryRange { start: 0x00F7, end: 0x00F7, category: GeneralCategory::Sm },
    CategoryRange { start: 0x00F8, end: 0x00FF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0100, end: 0x0100, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0101, end: 0x0101, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0102, end: 0x0102, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0103, end: 0x0103, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0104, end: 0x0104, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0105, end: 0x0105, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0106, end: 0x0106, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0107, end: 0x0107, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0108, end: 0x0108, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0109, end: 0x0109, category: GeneralCategory::Ll },
    CategoryRange { start: 0x010A, end: 0x010A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x010B, end: 0x010B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x010C, end: 0x010C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x010D, end: 0x010D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x010E, end: 0x010E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x010F, end: 0x010F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0110, end: 0x0110, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0111, end: 0x0111, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0112, end: 0x0112, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0113, end: 0x0113, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0114, end: 0x0114, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0115, end: 0x0115, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0116, end: 0x0116, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0117, end: 0x0117, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0118, end: 0x0118, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0119, end: 0x0119, category: GeneralCategory::Ll },
    CategoryRange { start: 0x011A, end: 0x011A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x011B, end: 0x011B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x011C, end: 0x011C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x011D, end: 0x011D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x011E, end: 0x011E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x011F, end: 0x011F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0120, end: 0x0120, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0121, end: 0x0121, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0122, end: 0x0122, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0123, end: 0x0123, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0124, end: 0x0124, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0125, end: 0x0125, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0126, end: 0x0126, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0127, end: 0x0127, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0128, end: 0x0128, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0129, end: 0x0129, category: GeneralCategory::Ll },
    CategoryRange { start: 0x012A, end: 0x012A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x012B, end: 0x012B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x012C, end: 0x012C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x012D, end: 0x012D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x012E, end: 0x012E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x012F, end: 0x012F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0130, end: 0x0130, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0131, end: 0x0131, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0132, end: 0x0132, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0133, end: 0x0133, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0134, end: 0x0134, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0135, end: 0x0135, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0136, end: 0x0136, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0137, end: 0x0138, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0139, end: 0x0139, category: GeneralCategory::Lu },
    CategoryRange { start: 0x013A, end: 0x013A, category: GeneralCategory::Ll },
    CategoryRange { start: 0x013B, end: 0x013B, category: GeneralCategory::Lu },
    CategoryRange { start: 0x013C, end: 0x013C, category: GeneralCategory::Ll },
    CategoryRange { start: 0x013D, end: 0x013D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x013E, end: 0x013E, category: GeneralCategory::Ll },
    CategoryRange { start: 0x013F, end: 0x013F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0140, end: 0x0140, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0141, end: 0x0141, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0142, end: 0x0142, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0143, end: 0x0143, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0144, end: 0x0144, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0145, end: 0x0145, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0146, end: 0x0146, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0147, end: 0x0147, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0148, end: 0x0149, category: GeneralCategory::Ll },
    CategoryRange { start: 0x014A, end: 0x014A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x014B, end: 0x014B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x014C, end: 0x014C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x014D, end: 0x014D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x014E, end: 0x014E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x014F, end: 0x014F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0150, end: 0x0150, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0151, end: 0x0151, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0152, end: 0x0152, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0153, end: 0x0153, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0154, end: 0x0154, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0155, end: 0x0155, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0156, end: 0x0156, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0157, end: 0x0157, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0158, end: 0x0158, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0159, end: 0x0159, category: GeneralCategory::Ll },
    CategoryRange { start: 0x015A, end: 0x015A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x015B, end: 0x015B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x015C, end: 0x015C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x015D, end: 0x015D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x015E, end: 0x015E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x015F, end: 0x015F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0160, end: 0x0160, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0161, end: 0x0161, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0162, end: 0x0162, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0163, end: 0x0163, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0164, end: 0x0164, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0165, end: 0x0165, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0166, end: 0x0166, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0167, end: 0x0167, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0168, end: 0x0168, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0169, end: 0x0169, category: GeneralCategory::Ll },
    CategoryRange { start: 0x016A, end: 0x016A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x016B, end: 0x016B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x016C, end: 0x016C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x016D, end: 0x016D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x016E, end: 0x016E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x016F, end: 0x016F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0170, end: 0x0170, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0171, end: 0x0171, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0172, end: 0x0172, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0173, end: 0x0173, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0174, end: 0x0174, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0175, end: 0x0175, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0176, end: 0x0176, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0177, end: 0x0177, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0178, end: 0x0179, category: GeneralCategory::Lu },
    CategoryRange { start: 0x017A, end: 0x017A, category: GeneralCategory::Ll },
    CategoryRange { start: 0x017B, end: 0x017B, category: GeneralCategory::Lu },
    CategoryRange { start: 0x017C, end: 0x017C, category: GeneralCategory::Ll },
    CategoryRange { start: 0x017D, end: 0x017D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x017E, end: 0x0180, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0181, end: 0x0182, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0183, end: 0x0183, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0184, end: 0x0184, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0185, end: 0x0185, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0186, end: 0x0187, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0188, end: 0x0188, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0189, end: 0x018B, category: GeneralCategory::Lu },
    CategoryRange { start: 0x018C, end: 0x018D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x018E, end: 0x0191, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0192, end: 0x0192, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0193, end: 0x0194, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0195, end: 0x0195, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0196, end: 0x0198, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0199, end: 0x019B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x019C, end: 0x019D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x019E, end: 0x019E, category: GeneralCategory::Ll },
    CategoryRange { start: 0x019F, end: 0x01A0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01A1, end: 0x01A1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01A2, end: 0x01A2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01A3, end: 0x01A3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01A4, end: 0x01A4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01A5, end: 0x01A5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01A6, end: 0x01A7, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01A8, end: 0x01A8, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01A9, end: 0x01A9, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01AA, end: 0x01AB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01AC, end: 0x01AC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01AD, end: 0x01AD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01AE, end: 0x01AF, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01B0, end: 0x01B0, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01B1, end: 0x01B3, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01B4, end: 0x01B4, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01B5, end: 0x01B5, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01B6, end: 0x01B6, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01B7, end: 0x01B8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01B9, end: 0x01BA, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01BB, end: 0x01BB, category: GeneralCategory::Lo },
    CategoryRange { start: 0x01BC, end: 0x01BC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01BD, end: 0x01BF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01C0, end: 0x01C3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x01C4, end: 0x01C4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01C5, end: 0x01C5, category: GeneralCategory::Lt },
    CategoryRange { start: 0x01C6, end: 0x01C6, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01C7, end: 0x01C7, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01C8, end: 0x01C8, category: GeneralCategory::Lt },
    CategoryRange { start: 0x01C9, end: 0x01C9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01CA, end: 0x01CA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01CB, end: 0x01CB, category: GeneralCategory::Lt },
    CategoryRange { start: 0x01CC, end: 0x01CC, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01CD, end: 0x01CD, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01CE, end: 0x01CE, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01CF, end: 0x01CF, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01D0, end: 0x01D0, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01D1, end: 0x01D1, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01D2, end: 0x01D2, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01D3, end: 0x01D3, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01D4, end: 0x01D4, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01D5, end: 0x01D5, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01D6, end: 0x01D6, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01D7, end: 0x01D7, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01D8, end: 0x01D8, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01D9, end: 0x01D9, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01DA, end: 0x01DA, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01DB, end: 0x01DB, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01DC, end: 0x01DD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01DE, end: 0x01DE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01DF, end: 0x01DF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01E0, end: 0x01E0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01E1, end: 0x01E1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01E2, end: 0x01E2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01E3, end: 0x01E3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01E4, end: 0x01E4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01E5, end: 0x01E5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01E6, end: 0x01E6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01E7, end: 0x01E7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01E8, end: 0x01E8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01E9, end: 0x01E9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01EA, end: 0x01EA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01EB, end: 0x01EB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01EC, end: 0x01EC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01ED, end: 0x01ED, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01EE, end: 0x01EE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01EF, end: 0x01F0, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01F1, end: 0x01F1, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01F2, end: 0x01F2, category: GeneralCategory::Lt },
    CategoryRange { start: 0x01F3, end: 0x01F3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01F4, end: 0x01F4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01F5, end: 0x01F5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01F6, end: 0x01F8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01F9, end: 0x01F9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01FA, end: 0x01FA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01FB, end: 0x01FB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01FC, end: 0x01FC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01FD, end: 0x01FD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x01FE, end: 0x01FE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x01FF, end: 0x01FF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0200, end: 0x0200, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0201, end: 0x0201, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0202, end: 0x0202, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0203, end: 0x0203, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0204, end: 0x0204, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0205, end: 0x0205, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0206, end: 0x0206, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0207, end: 0x0207, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0208, end: 0x0208, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0209, end: 0x0209, category: GeneralCategory::Ll },
    CategoryRange { start: 0x020A, end: 0x020A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x020B, end: 0x020B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x020C, end: 0x020C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x020D, end: 0x020D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x020E, end: 0x020E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x020F, end: 0x020F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0210, end: 0x0210, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0211, end: 0x0211, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0212, end: 0x0212, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0213, end: 0x0213, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0214, end: 0x0214, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0215, end: 0x0215, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0216, end: 0x0216, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0217, end: 0x0217, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0218, end: 0x0218, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0219, end: 0x0219, category: GeneralCategory::Ll },
    CategoryRange { start: 0x021A, end: 0x021A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x021B, end: 0x021B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x021C, end: 0x021C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x021D, end: 0x021D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x021E, end: 0x021E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x021F, end: 0x021F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0220, end: 0x0220, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0221, end: 0x0221, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0222, end: 0x0222, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0223, end: 0x0223, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0224, end: 0x0224, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0225, end: 0x0225, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0226, end: 0x0226, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0227, end: 0x0227, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0228, end: 0x0228, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0229, end: 0x0229, category: GeneralCategory::Ll },
    CategoryRange { start: 0x022A, end: 0x022A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x022B, end: 0x022B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x022C, end: 0x022C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x022D, end: 0x022D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x022E, end: 0x022E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x022F, end: 0x022F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0230, end: 0x0230, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0231, end: 0x0231, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0232, end: 0x0232, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0233, end: 0x0239, category: GeneralCategory::Ll },
    CategoryRange { start: 0x023A, end: 0x023B, category: GeneralCategory::Lu },
    CategoryRange { start: 0x023C, end: 0x023C, category: GeneralCategory::Ll },
    CategoryRange { start: 0x023D, end: 0x023E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x023F, end: 0x0240, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0241, end: 0x0241, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0242, end: 0x0242, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0243, end: 0x0246, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0247, end: 0x0247, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0248, end: 0x0248, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0249, end: 0x0249, category: GeneralCategory::Ll },
    CategoryRange { start: 0x024A, end: 0x024A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x024B, end: 0x024B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x024C, end: 0x024C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x024D, end: 0x024D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x024E, end: 0x024E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x024F, end: 0x0293, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0294, end: 0x0294, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0295, end: 0x02AF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x02B0, end: 0x02C1, category: GeneralCategory::Lm },
    CategoryRange { start: 0x02C2, end: 0x02C5, category: GeneralCategory::Sk },
    CategoryRange { start: 0x02C6, end: 0x02D1, category: GeneralCategory::Lm },
    CategoryRange { start: 0x02D2, end: 0x02DF, category: GeneralCategory::Sk },
    CategoryRange { start: 0x02E0, end: 0x02E4, category: GeneralCategory::Lm },
    CategoryRange { start: 0x02E5, end: 0x02EB, category: GeneralCategory::Sk },
    CategoryRange { start: 0x02EC, end: 0x02EC, category: GeneralCategory::Lm },
    CategoryRange { start: 0x02ED, end: 0x02ED, category: GeneralCategory::Sk },
    CategoryRange { start: 0x02EE, end: 0x02EE, category: GeneralCategory::Lm },
    CategoryRange { start: 0x02EF, end: 0x02FF, category: GeneralCategory::Sk },
    CategoryRange { start: 0x0300, end: 0x036F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0370, end: 0x0370, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0371, end: 0x0371, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0372, end: 0x0372, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0373, end: 0x0373, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0374, end: 0x0374, category: GeneralCategory::Lm },
    CategoryRange { start: 0x0375, end: 0x0375, category: GeneralCategory::Sk },
    CategoryRange { start: 0x0376, end: 0x0376, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0377, end: 0x0377, category: GeneralCategory::Ll },
    CategoryRange { start: 0x037A, end: 0x037A, category: GeneralCategory::Lm },
    CategoryRange { start: 0x037B, end: 0x037D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x037E, end: 0x037E, category: GeneralCategory::Po },
    CategoryRange { start: 0x037F, end: 0x037F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0384, end: 0x0385, category: GeneralCategory::Sk },
    CategoryRange { start: 0x0386, end: 0x0386, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0387, end: 0x0387, category: GeneralCategory::Po },
    CategoryRange { start: 0x0388, end: 0x038A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x038C, end: 0x038C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x038E, end: 0x038F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0390, end: 0x0390, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0391, end: 0x03A1, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03A3, end: 0x03AB, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03AC, end: 0x03CE, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03CF, end: 0x03CF, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03D0, end: 0x03D1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03D2, end: 0x03D4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03D5, end: 0x03D7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03D8, end: 0x03D8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03D9, end: 0x03D9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03DA, end: 0x03DA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03DB, end: 0x03DB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03DC, end: 0x03DC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03DD, end: 0x03DD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03DE, end: 0x03DE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03DF, end: 0x03DF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03E0, end: 0x03E0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03E1, end: 0x03E1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03E2, end: 0x03E2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03E3, end: 0x03E3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03E4, end: 0x03E4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03E5, end: 0x03E5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03E6, end: 0x03E6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03E7, end: 0x03E7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03E8, end: 0x03E8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03E9, end: 0x03E9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03EA, end: 0x03EA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03EB, end: 0x03EB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03EC, end: 0x03EC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03ED, end: 0x03ED, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03EE, end: 0x03EE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03EF, end: 0x03F3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03F4, end: 0x03F4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03F5, end: 0x03F5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03F6, end: 0x03F6, category: GeneralCategory::Sm },
    CategoryRange { start: 0x03F7, end: 0x03F7, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03F8, end: 0x03F8, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03F9, end: 0x03FA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x03FB, end: 0x03FC, category: GeneralCategory::Ll },
    CategoryRange { start: 0x03FD, end: 0x042F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0430, end: 0x045F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0460, end: 0x0460, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0461, end: 0x0461, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0462, end: 0x0462, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0463, end: 0x0463, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0464, end: 0x0464, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0465, end: 0x0465, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0466, end: 0x0466, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0467, end: 0x0467, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0468, end: 0x0468, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0469, end: 0x0469, category: GeneralCategory::Ll },
    CategoryRange { start: 0x046A, end: 0x046A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x046B, end: 0x046B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x046C, end: 0x046C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x046D, end: 0x046D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x046E, end: 0x046E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x046F, end: 0x046F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0470, end: 0x0470, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0471, end: 0x0471, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0472, end: 0x0472, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0473, end: 0x0473, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0474, end: 0x0474, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0475, end: 0x0475, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0476, end: 0x0476, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0477, end: 0x0477, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0478, end: 0x0478, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0479, end: 0x0479, category: GeneralCategory::Ll },
    CategoryRange { start: 0x047A, end: 0x047A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x047B, end: 0x047B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x047C, end: 0x047C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x047D, end: 0x047D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x047E, end: 0x047E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x047F, end: 0x047F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0480, end: 0x0480, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0481, end: 0x0481, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0482, end: 0x0482, category: GeneralCategory::So },
    CategoryRange { start: 0x0483, end: 0x0487, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0488, end: 0x0489, category: GeneralCategory::Me },
    CategoryRange { start: 0x048A, end: 0x048A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x048B, end: 0x048B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x048C, end: 0x048C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x048D, end: 0x048D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x048E, end: 0x048E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x048F, end: 0x048F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0490, end: 0x0490, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0491, end: 0x0491, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0492, end: 0x0492, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0493, end: 0x0493, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0494, end: 0x0494, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0495, end: 0x0495, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0496, end: 0x0496, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0497, end: 0x0497, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0498, end: 0x0498, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0499, end: 0x0499, category: GeneralCategory::Ll },
    CategoryRange { start: 0x049A, end: 0x049A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x049B, end: 0x049B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x049C, end: 0x049C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x049D, end: 0x049D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x049E, end: 0x049E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x049F, end: 0x049F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04A0, end: 0x04A0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04A1, end: 0x04A1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04A2, end: 0x04A2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04A3, end: 0x04A3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04A4, end: 0x04A4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04A5, end: 0x04A5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04A6, end: 0x04A6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04A7, end: 0x04A7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04A8, end: 0x04A8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04A9, end: 0x04A9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04AA, end: 0x04AA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04AB, end: 0x04AB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04AC, end: 0x04AC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04AD, end: 0x04AD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04AE, end: 0x04AE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04AF, end: 0x04AF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04B0, end: 0x04B0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04B1, end: 0x04B1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04B2, end: 0x04B2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04B3, end: 0x04B3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04B4, end: 0x04B4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04B5, end: 0x04B5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04B6, end: 0x04B6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04B7, end: 0x04B7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04B8, end: 0x04B8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04B9, end: 0x04B9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04BA, end: 0x04BA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04BB, end: 0x04BB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04BC, end: 0x04BC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04BD, end: 0x04BD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04BE, end: 0x04BE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04BF, end: 0x04BF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04C0, end: 0x04C1, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04C2, end: 0x04C2, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04C3, end: 0x04C3, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04C4, end: 0x04C4, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04C5, end: 0x04C5, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04C6, end: 0x04C6, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04C7, end: 0x04C7, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04C8, end: 0x04C8, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04C9, end: 0x04C9, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04CA, end: 0x04CA, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04CB, end: 0x04CB, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04CC, end: 0x04CC, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04CD, end: 0x04CD, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04CE, end: 0x04CF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04D0, end: 0x04D0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04D1, end: 0x04D1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04D2, end: 0x04D2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04D3, end: 0x04D3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04D4, end: 0x04D4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04D5, end: 0x04D5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04D6, end: 0x04D6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04D7, end: 0x04D7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04D8, end: 0x04D8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04D9, end: 0x04D9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04DA, end: 0x04DA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04DB, end: 0x04DB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04DC, end: 0x04DC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04DD, end: 0x04DD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04DE, end: 0x04DE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04DF, end: 0x04DF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04E0, end: 0x04E0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04E1, end: 0x04E1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04E2, end: 0x04E2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04E3, end: 0x04E3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04E4, end: 0x04E4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04E5, end: 0x04E5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04E6, end: 0x04E6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04E7, end: 0x04E7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04E8, end: 0x04E8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04E9, end: 0x04E9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04EA, end: 0x04EA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04EB, end: 0x04EB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04EC, end: 0x04EC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04ED, end: 0x04ED, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04EE, end: 0x04EE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04EF, end: 0x04EF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04F0, end: 0x04F0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04F1, end: 0x04F1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04F2, end: 0x04F2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04F3, end: 0x04F3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04F4, end: 0x04F4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04F5, end: 0x04F5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04F6, end: 0x04F6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04F7, end: 0x04F7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04F8, end: 0x04F8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04F9, end: 0x04F9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04FA, end: 0x04FA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04FB, end: 0x04FB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04FC, end: 0x04FC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04FD, end: 0x04FD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x04FE, end: 0x04FE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x04FF, end: 0x04FF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0500, end: 0x0500, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0501, end: 0x0501, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0502, end: 0x0502, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0503, end: 0x0503, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0504, end: 0x0504, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0505, end: 0x0505, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0506, end: 0x0506, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0507, end: 0x0507, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0508, end: 0x0508, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0509, end: 0x0509, category: GeneralCategory::Ll },
    CategoryRange { start: 0x050A, end: 0x050A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x050B, end: 0x050B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x050C, end: 0x050C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x050D, end: 0x050D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x050E, end: 0x050E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x050F, end: 0x050F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0510, end: 0x0510, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0511, end: 0x0511, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0512, end: 0x0512, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0513, end: 0x0513, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0514, end: 0x0514, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0515, end: 0x0515, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0516, end: 0x0516, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0517, end: 0x0517, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0518, end: 0x0518, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0519, end: 0x0519, category: GeneralCategory::Ll },
    CategoryRange { start: 0x051A, end: 0x051A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x051B, end: 0x051B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x051C, end: 0x051C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x051D, end: 0x051D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x051E, end: 0x051E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x051F, end: 0x051F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0520, end: 0x0520, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0521, end: 0x0521, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0522, end: 0x0522, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0523, end: 0x0523, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0524, end: 0x0524, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0525, end: 0x0525, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0526, end: 0x0526, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0527, end: 0x0527, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0528, end: 0x0528, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0529, end: 0x0529, category: GeneralCategory::Ll },
    CategoryRange { start: 0x052A, end: 0x052A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x052B, end: 0x052B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x052C, end: 0x052C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x052D, end: 0x052D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x052E, end: 0x052E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x052F, end: 0x052F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0531, end: 0x0556, category: GeneralCategory::Lu },
    CategoryRange { start: 0x0559, end: 0x0559, category: GeneralCategory::Lm },
    CategoryRange { start: 0x055A, end: 0x055F, category: GeneralCategory::Po },
    CategoryRange { start: 0x0560, end: 0x0588, category: GeneralCategory::Ll },
    CategoryRange { start: 0x0589, end: 0x0589, category: GeneralCategory::Po },
    CategoryRange { start: 0x058A, end: 0x058A, category: GeneralCategory::Pd },
    CategoryRange { start: 0x058D, end: 0x058E, category: GeneralCategory::So },
    CategoryRange { start: 0x058F, end: 0x058F, category: GeneralCategory::Sc },
    CategoryRange { start: 0x0591, end: 0x05BD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x05BE, end: 0x05BE, category: GeneralCategory::Pd },
    CategoryRange { start: 0x05BF, end: 0x05BF, category: GeneralCategory::Mn },
    CategoryRange { start: 0x05C0, end: 0x05C0, category: GeneralCategory::Po },
    CategoryRange { start: 0x05C1, end: 0x05C2, category: GeneralCategory::Mn },
    CategoryRange { start: 0x05C3, end: 0x05C3, category: GeneralCategory::Po },
    CategoryRange { start: 0x05C4, end: 0x05C5, category: GeneralCategory::Mn },
    CategoryRange { start: 0x05C6, end: 0x05C6, category: GeneralCategory::Po },
    CategoryRange { start: 0x05C7, end: 0x05C7, category: GeneralCategory::Mn },
    CategoryRange { start: 0x05D0, end: 0x05EA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x05EF, end: 0x05F2, category: GeneralCategory::Lo },
    CategoryRange { start: 0x05F3, end: 0x05F4, category: GeneralCategory::Po },
    CategoryRange { start: 0x0600, end: 0x0605, category: GeneralCategory::Cf },
    CategoryRange { start: 0x0606, end: 0x0608, category: GeneralCategory::Sm },
    CategoryRange { start: 0x0609, end: 0x060A, category: GeneralCategory::Po },
    CategoryRange { start: 0x060B, end: 0x060B, category: GeneralCategory::Sc },
    CategoryRange { start: 0x060C, end: 0x060D, category: GeneralCategory::Po },
    CategoryRange { start: 0x060E, end: 0x060F, category: GeneralCategory::So },
    CategoryRange { start: 0x0610, end: 0x061A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x061B, end: 0x061B, category: GeneralCategory::Po },
    CategoryRange { start: 0x061C, end: 0x061C, category: GeneralCategory::Cf },
    CategoryRange { start: 0x061D, end: 0x061F, category: GeneralCategory::Po },
    CategoryRange { start: 0x0620, end: 0x063F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0640, end: 0x0640, category: GeneralCategory::Lm },
    CategoryRange { start: 0x0641, end: 0x064A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x064B, end: 0x065F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0660, end: 0x0669, category: GeneralCategory::Nd },
    CategoryRange { start: 0x066A, end: 0x066D, category: GeneralCategory::Po },
    CategoryRange { start: 0x066E, end: 0x066F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0670, end: 0x0670, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0671, end: 0x06D3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x06D4, end: 0x06D4, category: GeneralCategory::Po },
    CategoryRange { start: 0x06D5, end: 0x06D5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x06D6, end: 0x06DC, category: GeneralCategory::Mn },
    CategoryRange { start: 0x06DD, end: 0x06DD, category: GeneralCategory::Cf },
    CategoryRange { start: 0x06DE, end: 0x06DE, category: GeneralCategory::So },
    CategoryRange { start: 0x06DF, end: 0x06E4, category: GeneralCategory::Mn },
    CategoryRange { start: 0x06E5, end: 0x06E6, category: GeneralCategory::Lm },
    CategoryRange { start: 0x06E7, end: 0x06E8, category: GeneralCategory::Mn },
    CategoryRange { start: 0x06E9, end: 0x06E9, category: GeneralCategory::So },
    CategoryRange { start: 0x06EA, end: 0x06ED, category: GeneralCategory::Mn },
    CategoryRange { start: 0x06EE, end: 0x06EF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x06F0, end: 0x06F9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x06FA, end: 0x06FC, category: GeneralCategory::Lo },
    CategoryRange { start: 0x06FD, end: 0x06FE, category: GeneralCategory::So },
    CategoryRange { start: 0x06FF, end: 0x06FF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0700, end: 0x070D, category: GeneralCategory::Po },
    CategoryRange { start: 0x070F, end: 0x070F, category: GeneralCategory::Cf },
    CategoryRange { start: 0x0710, end: 0x0710, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0711, end: 0x0711, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0712, end: 0x072F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0730, end: 0x074A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x074D, end: 0x07A5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x07A6, end: 0x07B0, category: GeneralCategory::Mn },
    CategoryRange { start: 0x07B1, end: 0x07B1, category: GeneralCategory::Lo },
    CategoryRange { start: 0x07C0, end: 0x07C9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x07CA, end: 0x07EA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x07EB, end: 0x07F3, category: GeneralCategory::Mn },
    CategoryRange { start: 0x07F4, end: 0x07F5, category: GeneralCategory::Lm },
    CategoryRange { start: 0x07F6, end: 0x07F6, category: GeneralCategory::So },
    CategoryRange { start: 0x07F7, end: 0x07F9, category: GeneralCategory::Po },
    CategoryRange { start: 0x07FA, end: 0x07FA, category: GeneralCategory::Lm },
    CategoryRange { start: 0x07FD, end: 0x07FD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x07FE, end: 0x07FF, category: GeneralCategory::Sc },
    CategoryRange { start: 0x0800, end: 0x0815, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0816, end: 0x0819, category: GeneralCategory::Mn },
    CategoryRange { start: 0x081A, end: 0x081A, category: GeneralCategory::Lm },
    CategoryRange { start: 0x081B, end: 0x0823, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0824, end: 0x0824, category: GeneralCategory::Lm },
    CategoryRange { start: 0x0825, end: 0x0827, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0828, end: 0x0828, category: GeneralCategory::Lm },
    CategoryRange { start: 0x0829, end: 0x082D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0830, end: 0x083E, category: GeneralCategory::Po },
    CategoryRange { start: 0x0840, end: 0x0858, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0859, end: 0x085B, category: GeneralCategory::Mn },
    CategoryRange { start: 0x085E, end: 0x085E, category: GeneralCategory::Po },
    CategoryRange { start: 0x0860, end: 0x086A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0870, end: 0x0887, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0888, end: 0x0888, category: GeneralCategory::Sk },
    CategoryRange { start: 0x0889, end: 0x088E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0890, end: 0x0891, category: GeneralCategory::Cf },
    CategoryRange { start: 0x0898, end: 0x089F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x08A0, end: 0x08C8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x08C9, end: 0x08C9, category: GeneralCategory::Lm },
    CategoryRange { start: 0x08CA, end: 0x08E1, category: GeneralCategory::Mn },
    CategoryRange { start: 0x08E2, end: 0x08E2, category: GeneralCategory::Cf },
    CategoryRange { start: 0x08E3, end: 0x0902, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0903, end: 0x0903, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0904, end: 0x0939, category: GeneralCategory::Lo },
    CategoryRange { start: 0x093A, end: 0x093A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x093B, end: 0x093B, category: GeneralCategory::Mc },
    CategoryRange { start: 0x093C, end: 0x093C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x093D, end: 0x093D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x093E, end: 0x0940, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0941, end: 0x0948, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0949, end: 0x094C, category: GeneralCategory::Mc },
    CategoryRange { start: 0x094D, end: 0x094D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x094E, end: 0x094F, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0950, end: 0x0950, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0951, end: 0x0957, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0958, end: 0x0961, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0962, end: 0x0963, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0964, end: 0x0965, category: GeneralCategory::Po },
    CategoryRange { start: 0x0966, end: 0x096F, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0970, end: 0x0970, category: GeneralCategory::Po },
    CategoryRange { start: 0x0971, end: 0x0971, category: GeneralCategory::Lm },
    CategoryRange { start: 0x0972, end: 0x0980, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0981, end: 0x0981, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0982, end: 0x0983, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0985, end: 0x098C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x098F, end: 0x0990, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0993, end: 0x09A8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09AA, end: 0x09B0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09B2, end: 0x09B2, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09B6, end: 0x09B9, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09BC, end: 0x09BC, category: GeneralCategory::Mn },
    CategoryRange { start: 0x09BD, end: 0x09BD, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09BE, end: 0x09C0, category: GeneralCategory::Mc },
    CategoryRange { start: 0x09C1, end: 0x09C4, category: GeneralCategory::Mn },
    CategoryRange { start: 0x09C7, end: 0x09C8, category: GeneralCategory::Mc },
    CategoryRange { start: 0x09CB, end: 0x09CC, category: GeneralCategory::Mc },
    CategoryRange { start: 0x09CD, end: 0x09CD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x09CE, end: 0x09CE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09D7, end: 0x09D7, category: GeneralCategory::Mc },
    CategoryRange { start: 0x09DC, end: 0x09DD, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09DF, end: 0x09E1, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09E2, end: 0x09E3, category: GeneralCategory::Mn },
    CategoryRange { start: 0x09E6, end: 0x09EF, category: GeneralCategory::Nd },
    CategoryRange { start: 0x09F0, end: 0x09F1, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09F2, end: 0x09F3, category: GeneralCategory::Sc },
    CategoryRange { start: 0x09F4, end: 0x09F9, category: GeneralCategory::No },
    CategoryRange { start: 0x09FA, end: 0x09FA, category: GeneralCategory::So },
    CategoryRange { start: 0x09FB, end: 0x09FB, category: GeneralCategory::Sc },
    CategoryRange { start: 0x09FC, end: 0x09FC, category: GeneralCategory::Lo },
    CategoryRange { start: 0x09FD, end: 0x09FD, category: GeneralCategory::Po },
    CategoryRange { start: 0x09FE, end: 0x09FE, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A01, end: 0x0A02, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A03, end: 0x0A03, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0A05, end: 0x0A0A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A0F, end: 0x0A10, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A13, end: 0x0A28, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A2A, end: 0x0A30, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A32, end: 0x0A33, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A35, end: 0x0A36, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A38, end: 0x0A39, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A3C, end: 0x0A3C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A3E, end: 0x0A40, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0A41, end: 0x0A42, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A47, end: 0x0A48, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A4B, end: 0x0A4D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A51, end: 0x0A51, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A59, end: 0x0A5C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A5E, end: 0x0A5E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A66, end: 0x0A6F, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0A70, end: 0x0A71, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A72, end: 0x0A74, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A75, end: 0x0A75, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A76, end: 0x0A76, category: GeneralCategory::Po },
    CategoryRange { start: 0x0A81, end: 0x0A82, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0A83, end: 0x0A83, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0A85, end: 0x0A8D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A8F, end: 0x0A91, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0A93, end: 0x0AA8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0AAA, end: 0x0AB0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0AB2, end: 0x0AB3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0AB5, end: 0x0AB9, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0ABC, end: 0x0ABC, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0ABD, end: 0x0ABD, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0ABE, end: 0x0AC0, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0AC1, end: 0x0AC5, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0AC7, end: 0x0AC8, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0AC9, end: 0x0AC9, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0ACB, end: 0x0ACC, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0ACD, end: 0x0ACD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0AD0, end: 0x0AD0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0AE0, end: 0x0AE1, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0AE2, end: 0x0AE3, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0AE6, end: 0x0AEF, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0AF0, end: 0x0AF0, category: GeneralCategory::Po },
    CategoryRange { start: 0x0AF1, end: 0x0AF1, category: GeneralCategory::Sc },
    CategoryRange { start: 0x0AF9, end: 0x0AF9, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0AFA, end: 0x0AFF, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0B01, end: 0x0B01, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0B02, end: 0x0B03, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0B05, end: 0x0B0C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B0F, end: 0x0B10, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B13, end: 0x0B28, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B2A, end: 0x0B30, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B32, end: 0x0B33, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B35, end: 0x0B39, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B3C, end: 0x0B3C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0B3D, end: 0x0B3D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B3E, end: 0x0B3E, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0B3F, end: 0x0B3F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0B40, end: 0x0B40, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0B41, end: 0x0B44, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0B47, end: 0x0B48, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0B4B, end: 0x0B4C, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0B4D, end: 0x0B4D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0B55, end: 0x0B56, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0B57, end: 0x0B57, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0B5C, end: 0x0B5D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B5F, end: 0x0B61, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B62, end: 0x0B63, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0B66, end: 0x0B6F, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0B70, end: 0x0B70, category: GeneralCategory::So },
    CategoryRange { start: 0x0B71, end: 0x0B71, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B72, end: 0x0B77, category: GeneralCategory::No },
    CategoryRange { start: 0x0B82, end: 0x0B82, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0B83, end: 0x0B83, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B85, end: 0x0B8A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B8E, end: 0x0B90, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B92, end: 0x0B95, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B99, end: 0x0B9A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B9C, end: 0x0B9C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0B9E, end: 0x0B9F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0BA3, end: 0x0BA4, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0BA8, end: 0x0BAA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0BAE, end: 0x0BB9, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0BBE, end: 0x0BBF, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0BC0, end: 0x0BC0, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0BC1, end: 0x0BC2, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0BC6, end: 0x0BC8, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0BCA, end: 0x0BCC, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0BCD, end: 0x0BCD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0BD0, end: 0x0BD0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0BD7, end: 0x0BD7, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0BE6, end: 0x0BEF, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0BF0, end: 0x0BF2, category: GeneralCategory::No },
    CategoryRange { start: 0x0BF3, end: 0x0BF8, category: GeneralCategory::So },
    CategoryRange { start: 0x0BF9, end: 0x0BF9, category: GeneralCategory::Sc },
    CategoryRange { start: 0x0BFA, end: 0x0BFA, category: GeneralCategory::So },
    CategoryRange { start: 0x0C00, end: 0x0C00, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0C01, end: 0x0C03, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0C04, end: 0x0C04, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0C05, end: 0x0C0C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C0E, end: 0x0C10, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C12, end: 0x0C28, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C2A, end: 0x0C39, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C3C, end: 0x0C3C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0C3D, end: 0x0C3D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C3E, end: 0x0C40, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0C41, end: 0x0C44, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0C46, end: 0x0C48, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0C4A, end: 0x0C4D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0C55, end: 0x0C56, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0C58, end: 0x0C5A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C5D, end: 0x0C5D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C60, end: 0x0C61, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C62, end: 0x0C63, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0C66, end: 0x0C6F, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0C77, end: 0x0C77, category: GeneralCategory::Po },
    CategoryRange { start: 0x0C78, end: 0x0C7E, category: GeneralCategory::No },
    CategoryRange { start: 0x0C7F, end: 0x0C7F, category: GeneralCategory::So },
    CategoryRange { start: 0x0C80, end: 0x0C80, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C81, end: 0x0C81, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0C82, end: 0x0C83, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0C84, end: 0x0C84, category: GeneralCategory::Po },
    CategoryRange { start: 0x0C85, end: 0x0C8C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C8E, end: 0x0C90, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0C92, end: 0x0CA8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0CAA, end: 0x0CB3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0CB5, end: 0x0CB9, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0CBC, end: 0x0CBC, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0CBD, end: 0x0CBD, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0CBE, end: 0x0CBE, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0CBF, end: 0x0CBF, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0CC0, end: 0x0CC4, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0CC6, end: 0x0CC6, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0CC7, end: 0x0CC8, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0CCA, end: 0x0CCB, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0CCC, end: 0x0CCD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0CD5, end: 0x0CD6, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0CDD, end: 0x0CDE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0CE0, end: 0x0CE1, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0CE2, end: 0x0CE3, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0CE6, end: 0x0CEF, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0CF1, end: 0x0CF2, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D00, end: 0x0D01, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0D02, end: 0x0D03, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0D04, end: 0x0D0C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D0E, end: 0x0D10, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D12, end: 0x0D3A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D3B, end: 0x0D3C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0D3D, end: 0x0D3D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D3E, end: 0x0D40, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0D41, end: 0x0D44, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0D46, end: 0x0D48, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0D4A, end: 0x0D4C, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0D4D, end: 0x0D4D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0D4E, end: 0x0D4E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D4F, end: 0x0D4F, category: GeneralCategory::So },
    CategoryRange { start: 0x0D54, end: 0x0D56, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D57, end: 0x0D57, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0D58, end: 0x0D5E, category: GeneralCategory::No },
    CategoryRange { start: 0x0D5F, end: 0x0D61, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D62, end: 0x0D63, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0D66, end: 0x0D6F, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0D70, end: 0x0D78, category: GeneralCategory::No },
    CategoryRange { start: 0x0D79, end: 0x0D79, category: GeneralCategory::So },
    CategoryRange { start: 0x0D7A, end: 0x0D7F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D81, end: 0x0D81, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0D82, end: 0x0D83, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0D85, end: 0x0D96, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0D9A, end: 0x0DB1, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0DB3, end: 0x0DBB, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0DBD, end: 0x0DBD, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0DC0, end: 0x0DC6, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0DCA, end: 0x0DCA, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0DCF, end: 0x0DD1, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0DD2, end: 0x0DD4, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0DD6, end: 0x0DD6, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0DD8, end: 0x0DDF, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0DE6, end: 0x0DEF, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0DF2, end: 0x0DF3, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0DF4, end: 0x0DF4, category: GeneralCategory::Po },
    CategoryRange { start: 0x0E01, end: 0x0E30, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0E31, end: 0x0E31, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0E32, end: 0x0E33, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0E34, end: 0x0E3A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0E3F, end: 0x0E3F, category: GeneralCategory::Sc },
    CategoryRange { start: 0x0E40, end: 0x0E45, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0E46, end: 0x0E46, category: GeneralCategory::Lm },
    CategoryRange { start: 0x0E47, end: 0x0E4E, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0E4F, end: 0x0E4F, category: GeneralCategory::Po },
    CategoryRange { start: 0x0E50, end: 0x0E59, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0E5A, end: 0x0E5B, category: GeneralCategory::Po },
    CategoryRange { start: 0x0E81, end: 0x0E82, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0E84, end: 0x0E84, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0E86, end: 0x0E8A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0E8C, end: 0x0EA3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0EA5, end: 0x0EA5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0EA7, end: 0x0EB0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0EB1, end: 0x0EB1, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0EB2, end: 0x0EB3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0EB4, end: 0x0EBC, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0EBD, end: 0x0EBD, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0EC0, end: 0x0EC4, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0EC6, end: 0x0EC6, category: GeneralCategory::Lm },
    CategoryRange { start: 0x0EC8, end: 0x0ECD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0ED0, end: 0x0ED9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0EDC, end: 0x0EDF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0F00, end: 0x0F00, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0F01, end: 0x0F03, category: GeneralCategory::So },
    CategoryRange { start: 0x0F04, end: 0x0F12, category: GeneralCategory::Po },
    CategoryRange { start: 0x0F13, end: 0x0F13, category: GeneralCategory::So },
    CategoryRange { start: 0x0F14, end: 0x0F14, category: GeneralCategory::Po },
    CategoryRange { start: 0x0F15, end: 0x0F17, category: GeneralCategory::So },
    CategoryRange { start: 0x0F18, end: 0x0F19, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0F1A, end: 0x0F1F, category: GeneralCategory::So },
    CategoryRange { start: 0x0F20, end: 0x0F29, category: GeneralCategory::Nd },
    CategoryRange { start: 0x0F2A, end: 0x0F33, category: GeneralCategory::No },
    CategoryRange { start: 0x0F34, end: 0x0F34, category: GeneralCategory::So },
    CategoryRange { start: 0x0F35, end: 0x0F35, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0F36, end: 0x0F36, category: GeneralCategory::So },
    CategoryRange { start: 0x0F37, end: 0x0F37, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0F38, end: 0x0F38, category: GeneralCategory::So },
    CategoryRange { start: 0x0F39, end: 0x0F39, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0F3A, end: 0x0F3A, category: GeneralCategory::Ps },
    CategoryRange { start: 0x0F3B, end: 0x0F3B, category: GeneralCategory::Pe },
    CategoryRange { start: 0x0F3C, end: 0x0F3C, category: GeneralCategory::Ps },
    CategoryRange { start: 0x0F3D, end: 0x0F3D, category: GeneralCategory::Pe },
    CategoryRange { start: 0x0F3E, end: 0x0F3F, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0F40, end: 0x0F47, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0F49, end: 0x0F6C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0F71, end: 0x0F7E, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0F7F, end: 0x0F7F, category: GeneralCategory::Mc },
    CategoryRange { start: 0x0F80, end: 0x0F84, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0F85, end: 0x0F85, category: GeneralCategory::Po },
    CategoryRange { start: 0x0F86, end: 0x0F87, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0F88, end: 0x0F8C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x0F8D, end: 0x0F97, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0F99, end: 0x0FBC, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0FBE, end: 0x0FC5, category: GeneralCategory::So },
    CategoryRange { start: 0x0FC6, end: 0x0FC6, category: GeneralCategory::Mn },
    CategoryRange { start: 0x0FC7, end: 0x0FCC, category: GeneralCategory::So },
    CategoryRange { start: 0x0FCE, end: 0x0FCF, category: GeneralCategory::So },
    CategoryRange { start: 0x0FD0, end: 0x0FD4, category: GeneralCategory::Po },
    CategoryRange { start: 0x0FD5, end: 0x0FD8, category: GeneralCategory::So },
    CategoryRange { start: 0x0FD9, end: 0x0FDA, category: GeneralCategory::Po },
    CategoryRange { start: 0x1000, end: 0x102A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x102B, end: 0x102C, category: GeneralCategory::Mc },
    CategoryRange { start: 0x102D, end: 0x1030, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1031, end: 0x1031, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1032, end: 0x1037, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1038, end: 0x1038, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1039, end: 0x103A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x103B, end: 0x103C, category: GeneralCategory::Mc },
    CategoryRange { start: 0x103D, end: 0x103E, category: GeneralCategory::Mn },
    CategoryRange { start: 0x103F, end: 0x103F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1040, end: 0x1049, category: GeneralCategory::Nd },
    CategoryRange { start: 0x104A, end: 0x104F, category: GeneralCategory::Po },
    CategoryRange { start: 0x1050, end: 0x1055, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1056, end: 0x1057, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1058, end: 0x1059, category: GeneralCategory::Mn },
    CategoryRange { start: 0x105A, end: 0x105D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x105E, end: 0x1060, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1061, end: 0x1061, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1062, end: 0x1064, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1065, end: 0x1066, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1067, end: 0x106D, category: GeneralCategory::Mc },
    CategoryRange { start: 0x106E, end: 0x1070, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1071, end: 0x1074, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1075, end: 0x1081, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1082, end: 0x1082, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1083, end: 0x1084, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1085, end: 0x1086, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1087, end: 0x108C, category: GeneralCategory::Mc },
    CategoryRange { start: 0x108D, end: 0x108D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x108E, end: 0x108E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x108F, end: 0x108F, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1090, end: 0x1099, category: GeneralCategory::Nd },
    CategoryRange { start: 0x109A, end: 0x109C, category: GeneralCategory::Mc },
    CategoryRange { start: 0x109D, end: 0x109D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x109E, end: 0x109F, category: GeneralCategory::So },
    CategoryRange { start: 0x10A0, end: 0x10C5, category: GeneralCategory::Lu },
    CategoryRange { start: 0x10C7, end: 0x10C7, category: GeneralCategory::Lu },
    CategoryRange { start: 0x10CD, end: 0x10CD, category: GeneralCategory::Lu },
    CategoryRange { start: 0x10D0, end: 0x10FA, category: GeneralCategory::Ll },
    CategoryRange { start: 0x10FB, end: 0x10FB, category: GeneralCategory::Po },
    CategoryRange { start: 0x10FC, end: 0x10FC, category: GeneralCategory::Lm },
    CategoryRange { start: 0x10FD, end: 0x10FF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1100, end: 0x1248, category: GeneralCategory::Lo },
    CategoryRange { start: 0x124A, end: 0x124D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1250, end: 0x1256, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1258, end: 0x1258, category: GeneralCategory::Lo },
    CategoryRange { start: 0x125A, end: 0x125D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1260, end: 0x1288, category: GeneralCategory::Lo },
    CategoryRange { start: 0x128A, end: 0x128D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1290, end: 0x12B0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x12B2, end: 0x12B5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x12B8, end: 0x12BE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x12C0, end: 0x12C0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x12C2, end: 0x12C5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x12C8, end: 0x12D6, category: GeneralCategory::Lo },
    CategoryRange { start: 0x12D8, end: 0x1310, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1312, end: 0x1315, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1318, end: 0x135A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x135D, end: 0x135F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1360, end: 0x1368, category: GeneralCategory::Po },
    CategoryRange { start: 0x1369, end: 0x137C, category: GeneralCategory::No },
    CategoryRange { start: 0x1380, end: 0x138F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1390, end: 0x1399, category: GeneralCategory::So },
    CategoryRange { start: 0x13A0, end: 0x13F5, category: GeneralCategory::Lu },
    CategoryRange { start: 0x13F8, end: 0x13FD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1400, end: 0x1400, category: GeneralCategory::Pd },
    CategoryRange { start: 0x1401, end: 0x166C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x166D, end: 0x166D, category: GeneralCategory::So },
    CategoryRange { start: 0x166E, end: 0x166E, category: GeneralCategory::Po },
    CategoryRange { start: 0x166F, end: 0x167F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1680, end: 0x1680, category: GeneralCategory::Zs },
    CategoryRange { start: 0x1681, end: 0x169A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x169B, end: 0x169B, category: GeneralCategory::Ps },
    CategoryRange { start: 0x169C, end: 0x169C, category: GeneralCategory::Pe },
    CategoryRange { start: 0x16A0, end: 0x16EA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16EB, end: 0x16ED, category: GeneralCategory::Po },
    CategoryRange { start: 0x16EE, end: 0x16F0, category: GeneralCategory::Nl },
    CategoryRange { start: 0x16F1, end: 0x16F8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1700, end: 0x1711, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1712, end: 0x1714, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1715, end: 0x1715, category: GeneralCategory::Mc },
    CategoryRange { start: 0x171F, end: 0x1731, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1732, end: 0x1733, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1734, end: 0x1734, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1735, end: 0x1736, category: GeneralCategory::Po },
    CategoryRange { start: 0x1740, end: 0x1751, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1752, end: 0x1753, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1760, end: 0x176C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x176E, end: 0x1770, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1772, end: 0x1773, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1780, end: 0x17B3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x17B4, end: 0x17B5, category: GeneralCategory::Mn },
    CategoryRange { start: 0x17B6, end: 0x17B6, category: GeneralCategory::Mc },
    CategoryRange { start: 0x17B7, end: 0x17BD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x17BE, end: 0x17C5, category: GeneralCategory::Mc },
    CategoryRange { start: 0x17C6, end: 0x17C6, category: GeneralCategory::Mn },
    CategoryRange { start: 0x17C7, end: 0x17C8, category: GeneralCategory::Mc },
    CategoryRange { start: 0x17C9, end: 0x17D3, category: GeneralCategory::Mn },
    CategoryRange { start: 0x17D4, end: 0x17D6, category: GeneralCategory::Po },
    CategoryRange { start: 0x17D7, end: 0x17D7, category: GeneralCategory::Lm },
    CategoryRange { start: 0x17D8, end: 0x17DA, category: GeneralCategory::Po },
    CategoryRange { start: 0x17DB, end: 0x17DB, category: GeneralCategory::Sc },
    CategoryRange { start: 0x17DC, end: 0x17DC, category: GeneralCategory::Lo },
    CategoryRange { start: 0x17DD, end: 0x17DD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x17E0, end: 0x17E9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x17F0, end: 0x17F9, category: GeneralCategory::No },
    CategoryRange { start: 0x1800, end: 0x1805, category: GeneralCategory::Po },
    CategoryRange { start: 0x1806, end: 0x1806, category: GeneralCategory::Pd },
    CategoryRange { start: 0x1807, end: 0x180A, category: GeneralCategory::Po },
    CategoryRange { start: 0x180B, end: 0x180D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x180E, end: 0x180E, category: GeneralCategory::Cf },
    CategoryRange { start: 0x180F, end: 0x180F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1810, end: 0x1819, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1820, end: 0x1842, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1843, end: 0x1843, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1844, end: 0x1878, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1880, end: 0x1884, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1885, end: 0x1886, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1887, end: 0x18A8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x18A9, end: 0x18A9, category: GeneralCategory::Mn },
    CategoryRange { start: 0x18AA, end: 0x18AA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x18B0, end: 0x18F5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1900, end: 0x191E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1920, end: 0x1922, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1923, end: 0x1926, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1927, end: 0x1928, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1929, end: 0x192B, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1930, end: 0x1931, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1932, end: 0x1932, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1933, end: 0x1938, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1939, end: 0x193B, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1940, end: 0x1940, category: GeneralCategory::So },
    CategoryRange { start: 0x1944, end: 0x1945, category: GeneralCategory::Po },
    CategoryRange { start: 0x1946, end: 0x194F, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1950, end: 0x196D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1970, end: 0x1974, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1980, end: 0x19AB, category: GeneralCategory::Lo },
    CategoryRange { start: 0x19B0, end: 0x19C9, category: GeneralCategory::Lo },
    CategoryRange { start: 0x19D0, end: 0x19D9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x19DA, end: 0x19DA, category: GeneralCategory::No },
    CategoryRange { start: 0x19DE, end: 0x19FF, category: GeneralCategory::So },
    CategoryRange { start: 0x1A00, end: 0x1A16, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1A17, end: 0x1A18, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1A19, end: 0x1A1A, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1A1B, end: 0x1A1B, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1A1E, end: 0x1A1F, category: GeneralCategory::Po },
    CategoryRange { start: 0x1A20, end: 0x1A54, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1A55, end: 0x1A55, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1A56, end: 0x1A56, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1A57, end: 0x1A57, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1A58, end: 0x1A5E, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1A60, end: 0x1A60, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1A61, end: 0x1A61, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1A62, end: 0x1A62, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1A63, end: 0x1A64, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1A65, end: 0x1A6C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1A6D, end: 0x1A72, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1A73, end: 0x1A7C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1A7F, end: 0x1A7F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1A80, end: 0x1A89, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1A90, end: 0x1A99, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1AA0, end: 0x1AA6, category: GeneralCategory::Po },
    CategoryRange { start: 0x1AA7, end: 0x1AA7, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1AA8, end: 0x1AAD, category: GeneralCategory::Po },
    CategoryRange { start: 0x1AB0, end: 0x1ABD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1ABE, end: 0x1ABE, category: GeneralCategory::Me },
    CategoryRange { start: 0x1ABF, end: 0x1ACE, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1B00, end: 0x1B03, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1B04, end: 0x1B04, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1B05, end: 0x1B33, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1B34, end: 0x1B34, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1B35, end: 0x1B35, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1B36, end: 0x1B3A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1B3B, end: 0x1B3B, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1B3C, end: 0x1B3C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1B3D, end: 0x1B41, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1B42, end: 0x1B42, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1B43, end: 0x1B44, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1B45, end: 0x1B4C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1B50, end: 0x1B59, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1B5A, end: 0x1B60, category: GeneralCategory::Po },
    CategoryRange { start: 0x1B61, end: 0x1B6A, category: GeneralCategory::So },
    CategoryRange { start: 0x1B6B, end: 0x1B73, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1B74, end: 0x1B7C, category: GeneralCategory::So },
    CategoryRange { start: 0x1B7D, end: 0x1B7E, category: GeneralCategory::Po },
    CategoryRange { start: 0x1B80, end: 0x1B81, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1B82, end: 0x1B82, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1B83, end: 0x1BA0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1BA1, end: 0x1BA1, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1BA2, end: 0x1BA5, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1BA6, end: 0x1BA7, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1BA8, end: 0x1BA9, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1BAA, end: 0x1BAA, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1BAB, end: 0x1BAD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1BAE, end: 0x1BAF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1BB0, end: 0x1BB9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1BBA, end: 0x1BE5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1BE6, end: 0x1BE6, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1BE7, end: 0x1BE7, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1BE8, end: 0x1BE9, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1BEA, end: 0x1BEC, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1BED, end: 0x1BED, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1BEE, end: 0x1BEE, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1BEF, end: 0x1BF1, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1BF2, end: 0x1BF3, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1BFC, end: 0x1BFF, category: GeneralCategory::Po },
    CategoryRange { start: 0x1C00, end: 0x1C23, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1C24, end: 0x1C2B, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1C2C, end: 0x1C33, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1C34, end: 0x1C35, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1C36, end: 0x1C37, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1C3B, end: 0x1C3F, category: GeneralCategory::Po },
    CategoryRange { start: 0x1C40, end: 0x1C49, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1C4D, end: 0x1C4F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1C50, end: 0x1C59, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1C5A, end: 0x1C77, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1C78, end: 0x1C7D, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1C7E, end: 0x1C7F, category: GeneralCategory::Po },
    CategoryRange { start: 0x1C80, end: 0x1C88, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1C90, end: 0x1CBA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1CBD, end: 0x1CBF, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1CC0, end: 0x1CC7, category: GeneralCategory::Po },
    CategoryRange { start: 0x1CD0, end: 0x1CD2, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1CD3, end: 0x1CD3, category: GeneralCategory::Po },
    CategoryRange { start: 0x1CD4, end: 0x1CE0, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1CE1, end: 0x1CE1, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1CE2, end: 0x1CE8, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1CE9, end: 0x1CEC, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1CED, end: 0x1CED, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1CEE, end: 0x1CF3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1CF4, end: 0x1CF4, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1CF5, end: 0x1CF6, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1CF7, end: 0x1CF7, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1CF8, end: 0x1CF9, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1CFA, end: 0x1CFA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1D00, end: 0x1D2B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D2C, end: 0x1D6A, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1D6B, end: 0x1D77, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D78, end: 0x1D78, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1D79, end: 0x1D9A, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D9B, end: 0x1DBF, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1DC0, end: 0x1DFF, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E00, end: 0x1E00, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E01, end: 0x1E01, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E02, end: 0x1E02, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E03, end: 0x1E03, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E04, end: 0x1E04, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E05, end: 0x1E05, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E06, end: 0x1E06, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E07, end: 0x1E07, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E08, end: 0x1E08, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E09, end: 0x1E09, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E0A, end: 0x1E0A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E0B, end: 0x1E0B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E0C, end: 0x1E0C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E0D, end: 0x1E0D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E0E, end: 0x1E0E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E0F, end: 0x1E0F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E10, end: 0x1E10, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E11, end: 0x1E11, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E12, end: 0x1E12, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E13, end: 0x1E13, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E14, end: 0x1E14, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E15, end: 0x1E15, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E16, end: 0x1E16, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E17, end: 0x1E17, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E18, end: 0x1E18, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E19, end: 0x1E19, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E1A, end: 0x1E1A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E1B, end: 0x1E1B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E1C, end: 0x1E1C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E1D, end: 0x1E1D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E1E, end: 0x1E1E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E1F, end: 0x1E1F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E20, end: 0x1E20, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E21, end: 0x1E21, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E22, end: 0x1E22, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E23, end: 0x1E23, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E24, end: 0x1E24, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E25, end: 0x1E25, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E26, end: 0x1E26, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E27, end: 0x1E27, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E28, end: 0x1E28, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E29, end: 0x1E29, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E2A, end: 0x1E2A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E2B, end: 0x1E2B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E2C, end: 0x1E2C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E2D, end: 0x1E2D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E2E, end: 0x1E2E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E2F, end: 0x1E2F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E30, end: 0x1E30, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E31, end: 0x1E31, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E32, end: 0x1E32, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E33, end: 0x1E33, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E34, end: 0x1E34, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E35, end: 0x1E35, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E36, end: 0x1E36, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E37, end: 0x1E37, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E38, end: 0x1E38, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E39, end: 0x1E39, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E3A, end: 0x1E3A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E3B, end: 0x1E3B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E3C, end: 0x1E3C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E3D, end: 0x1E3D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E3E, end: 0x1E3E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E3F, end: 0x1E3F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E40, end: 0x1E40, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E41, end: 0x1E41, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E42, end: 0x1E42, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E43, end: 0x1E43, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E44, end: 0x1E44, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E45, end: 0x1E45, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E46, end: 0x1E46, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E47, end: 0x1E47, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E48, end: 0x1E48, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E49, end: 0x1E49, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E4A, end: 0x1E4A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E4B, end: 0x1E4B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E4C, end: 0x1E4C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E4D, end: 0x1E4D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E4E, end: 0x1E4E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E4F, end: 0x1E4F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E50, end: 0x1E50, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E51, end: 0x1E51, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E52, end: 0x1E52, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E53, end: 0x1E53, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E54, end: 0x1E54, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E55, end: 0x1E55, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E56, end: 0x1E56, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E57, end: 0x1E57, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E58, end: 0x1E58, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E59, end: 0x1E59, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E5A, end: 0x1E5A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E5B, end: 0x1E5B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E5C, end: 0x1E5C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E5D, end: 0x1E5D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E5E, end: 0x1E5E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E5F, end: 0x1E5F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E60, end: 0x1E60, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E61, end: 0x1E61, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E62, end: 0x1E62, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E63, end: 0x1E63, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E64, end: 0x1E64, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E65, end: 0x1E65, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E66, end: 0x1E66, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E67, end: 0x1E67, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E68, end: 0x1E68, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E69, end: 0x1E69, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E6A, end: 0x1E6A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E6B, end: 0x1E6B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E6C, end: 0x1E6C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E6D, end: 0x1E6D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E6E, end: 0x1E6E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E6F, end: 0x1E6F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E70, end: 0x1E70, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E71, end: 0x1E71, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E72, end: 0x1E72, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E73, end: 0x1E73, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E74, end: 0x1E74, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E75, end: 0x1E75, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E76, end: 0x1E76, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E77, end: 0x1E77, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E78, end: 0x1E78, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E79, end: 0x1E79, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E7A, end: 0x1E7A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E7B, end: 0x1E7B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E7C, end: 0x1E7C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E7D, end: 0x1E7D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E7E, end: 0x1E7E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E7F, end: 0x1E7F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E80, end: 0x1E80, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E81, end: 0x1E81, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E82, end: 0x1E82, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E83, end: 0x1E83, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E84, end: 0x1E84, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E85, end: 0x1E85, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E86, end: 0x1E86, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E87, end: 0x1E87, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E88, end: 0x1E88, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E89, end: 0x1E89, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E8A, end: 0x1E8A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E8B, end: 0x1E8B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E8C, end: 0x1E8C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E8D, end: 0x1E8D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E8E, end: 0x1E8E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E8F, end: 0x1E8F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E90, end: 0x1E90, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E91, end: 0x1E91, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E92, end: 0x1E92, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E93, end: 0x1E93, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E94, end: 0x1E94, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E95, end: 0x1E9D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E9E, end: 0x1E9E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E9F, end: 0x1E9F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EA0, end: 0x1EA0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EA1, end: 0x1EA1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EA2, end: 0x1EA2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EA3, end: 0x1EA3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EA4, end: 0x1EA4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EA5, end: 0x1EA5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EA6, end: 0x1EA6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EA7, end: 0x1EA7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EA8, end: 0x1EA8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EA9, end: 0x1EA9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EAA, end: 0x1EAA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EAB, end: 0x1EAB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EAC, end: 0x1EAC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EAD, end: 0x1EAD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EAE, end: 0x1EAE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EAF, end: 0x1EAF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EB0, end: 0x1EB0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EB1, end: 0x1EB1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EB2, end: 0x1EB2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EB3, end: 0x1EB3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EB4, end: 0x1EB4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EB5, end: 0x1EB5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EB6, end: 0x1EB6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EB7, end: 0x1EB7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EB8, end: 0x1EB8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EB9, end: 0x1EB9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EBA, end: 0x1EBA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EBB, end: 0x1EBB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EBC, end: 0x1EBC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EBD, end: 0x1EBD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EBE, end: 0x1EBE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EBF, end: 0x1EBF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EC0, end: 0x1EC0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EC1, end: 0x1EC1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EC2, end: 0x1EC2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EC3, end: 0x1EC3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EC4, end: 0x1EC4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EC5, end: 0x1EC5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EC6, end: 0x1EC6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EC7, end: 0x1EC7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EC8, end: 0x1EC8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EC9, end: 0x1EC9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1ECA, end: 0x1ECA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1ECB, end: 0x1ECB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1ECC, end: 0x1ECC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1ECD, end: 0x1ECD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1ECE, end: 0x1ECE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1ECF, end: 0x1ECF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1ED0, end: 0x1ED0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1ED1, end: 0x1ED1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1ED2, end: 0x1ED2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1ED3, end: 0x1ED3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1ED4, end: 0x1ED4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1ED5, end: 0x1ED5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1ED6, end: 0x1ED6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1ED7, end: 0x1ED7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1ED8, end: 0x1ED8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1ED9, end: 0x1ED9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EDA, end: 0x1EDA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EDB, end: 0x1EDB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EDC, end: 0x1EDC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EDD, end: 0x1EDD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EDE, end: 0x1EDE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EDF, end: 0x1EDF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EE0, end: 0x1EE0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EE1, end: 0x1EE1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EE2, end: 0x1EE2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EE3, end: 0x1EE3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EE4, end: 0x1EE4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EE5, end: 0x1EE5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EE6, end: 0x1EE6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EE7, end: 0x1EE7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EE8, end: 0x1EE8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EE9, end: 0x1EE9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EEA, end: 0x1EEA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EEB, end: 0x1EEB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EEC, end: 0x1EEC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EED, end: 0x1EED, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EEE, end: 0x1EEE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EEF, end: 0x1EEF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EF0, end: 0x1EF0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EF1, end: 0x1EF1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EF2, end: 0x1EF2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EF3, end: 0x1EF3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EF4, end: 0x1EF4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EF5, end: 0x1EF5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EF6, end: 0x1EF6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EF7, end: 0x1EF7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EF8, end: 0x1EF8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EF9, end: 0x1EF9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EFA, end: 0x1EFA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EFB, end: 0x1EFB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EFC, end: 0x1EFC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EFD, end: 0x1EFD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1EFE, end: 0x1EFE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1EFF, end: 0x1F07, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F08, end: 0x1F0F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F10, end: 0x1F15, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F18, end: 0x1F1D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F20, end: 0x1F27, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F28, end: 0x1F2F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F30, end: 0x1F37, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F38, end: 0x1F3F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F40, end: 0x1F45, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F48, end: 0x1F4D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F50, end: 0x1F57, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F59, end: 0x1F59, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F5B, end: 0x1F5B, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F5D, end: 0x1F5D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F5F, end: 0x1F5F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F60, end: 0x1F67, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F68, end: 0x1F6F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1F70, end: 0x1F7D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F80, end: 0x1F87, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F88, end: 0x1F8F, category: GeneralCategory::Lt },
    CategoryRange { start: 0x1F90, end: 0x1F97, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1F98, end: 0x1F9F, category: GeneralCategory::Lt },
    CategoryRange { start: 0x1FA0, end: 0x1FA7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FA8, end: 0x1FAF, category: GeneralCategory::Lt },
    CategoryRange { start: 0x1FB0, end: 0x1FB4, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FB6, end: 0x1FB7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FB8, end: 0x1FBB, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1FBC, end: 0x1FBC, category: GeneralCategory::Lt },
    CategoryRange { start: 0x1FBD, end: 0x1FBD, category: GeneralCategory::Sk },
    CategoryRange { start: 0x1FBE, end: 0x1FBE, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FBF, end: 0x1FC1, category: GeneralCategory::Sk },
    CategoryRange { start: 0x1FC2, end: 0x1FC4, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FC6, end: 0x1FC7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FC8, end: 0x1FCB, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1FCC, end: 0x1FCC, category: GeneralCategory::Lt },
    CategoryRange { start: 0x1FCD, end: 0x1FCF, category: GeneralCategory::Sk },
    CategoryRange { start: 0x1FD0, end: 0x1FD3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FD6, end: 0x1FD7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FD8, end: 0x1FDB, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1FDD, end: 0x1FDF, category: GeneralCategory::Sk },
    CategoryRange { start: 0x1FE0, end: 0x1FE7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FE8, end: 0x1FEC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1FED, end: 0x1FEF, category: GeneralCategory::Sk },
    CategoryRange { start: 0x1FF2, end: 0x1FF4, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FF6, end: 0x1FF7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1FF8, end: 0x1FFB, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1FFC, end: 0x1FFC, category: GeneralCategory::Lt },
    CategoryRange { start: 0x1FFD, end: 0x1FFE, category: GeneralCategory::Sk },
    CategoryRange { start: 0x2000, end: 0x200A, category: GeneralCategory::Zs },
    CategoryRange { start: 0x200B, end: 0x200F, category: GeneralCategory::Cf },
    CategoryRange { start: 0x2010, end: 0x2015, category: GeneralCategory::Pd },
    CategoryRange { start: 0x2016, end: 0x2017, category: GeneralCategory::Po },
    CategoryRange { start: 0x2018, end: 0x2018, category: GeneralCategory::Pi },
    CategoryRange { start: 0x2019, end: 0x2019, category: GeneralCategory::Pf },
    CategoryRange { start: 0x201A, end: 0x201A, category: GeneralCategory::Ps },
    CategoryRange { start: 0x201B, end: 0x201C, category: GeneralCategory::Pi },
    CategoryRange { start: 0x201D, end: 0x201D, category: GeneralCategory::Pf },
    CategoryRange { start: 0x201E, end: 0x201E, category: GeneralCategory::Ps },
    CategoryRange { start: 0x201F, end: 0x201F, category: GeneralCategory::Pi },
    CategoryRange { start: 0x2020, end: 0x2027, category: GeneralCategory::Po },
    CategoryRange { start: 0x2028, end: 0x2028, category: GeneralCategory::Zl },
    CategoryRange { start: 0x2029, end: 0x2029, category: GeneralCategory::Zp },
    CategoryRange { start: 0x202A, end: 0x202E, category: GeneralCategory::Cf },
    CategoryRange { start: 0x202F, end: 0x202F, category: GeneralCategory::Zs },
    CategoryRange { start: 0x2030, end: 0x2038, category: GeneralCategory::Po },
    CategoryRange { start: 0x2039, end: 0x2039, category: GeneralCategory::Pi },
    CategoryRange { start: 0x203A, end: 0x203A, category: GeneralCategory::Pf },
    CategoryRange { start: 0x203B, end: 0x203E, category: GeneralCategory::Po },
    CategoryRange { start: 0x203F, end: 0x2040, category: GeneralCategory::Pc },
    CategoryRange { start: 0x2041, end: 0x2043, category: GeneralCategory::Po },
    CategoryRange { start: 0x2044, end: 0x2044, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2045, end: 0x2045, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2046, end: 0x2046, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2047, end: 0x2051, category: GeneralCategory::Po },
    CategoryRange { start: 0x2052, end: 0x2052, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2053, end: 0x2053, category: GeneralCategory::Po },
    CategoryRange { start: 0x2054, end: 0x2054, category: GeneralCategory::Pc },
    CategoryRange { start: 0x2055, end: 0x205E, category: GeneralCategory::Po },
    CategoryRange { start: 0x205F, end: 0x205F, category: GeneralCategory::Zs },
    CategoryRange { start: 0x2060, end: 0x2064, category: GeneralCategory::Cf },
    CategoryRange { start: 0x2066, end: 0x206F, category: GeneralCategory::Cf },
    CategoryRange { start: 0x2070, end: 0x2070, category: GeneralCategory::No },
    CategoryRange { start: 0x2071, end: 0x2071, category: GeneralCategory::Lm },
    CategoryRange { start: 0x2074, end: 0x2079, category: GeneralCategory::No },
    CategoryRange { start: 0x207A, end: 0x207C, category: GeneralCategory::Sm },
    CategoryRange { start: 0x207D, end: 0x207D, category: GeneralCategory::Ps },
    CategoryRange { start: 0x207E, end: 0x207E, category: GeneralCategory::Pe },
    CategoryRange { start: 0x207F, end: 0x207F, category: GeneralCategory::Lm },
    CategoryRange { start: 0x2080, end: 0x2089, category: GeneralCategory::No },
    CategoryRange { start: 0x208A, end: 0x208C, category: GeneralCategory::Sm },
    CategoryRange { start: 0x208D, end: 0x208D, category: GeneralCategory::Ps },
    CategoryRange { start: 0x208E, end: 0x208E, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2090, end: 0x209C, category: GeneralCategory::Lm },
    CategoryRange { start: 0x20A0, end: 0x20C0, category: GeneralCategory::Sc },
    CategoryRange { start: 0x20D0, end: 0x20DC, category: GeneralCategory::Mn },
    CategoryRange { start: 0x20DD, end: 0x20E0, category: GeneralCategory::Me },
    CategoryRange { start: 0x20E1, end: 0x20E1, category: GeneralCategory::Mn },
    CategoryRange { start: 0x20E2, end: 0x20E4, category: GeneralCategory::Me },
    CategoryRange { start: 0x20E5, end: 0x20F0, category: GeneralCategory::Mn },
    CategoryRange { start: 0x2100, end: 0x2101, category: GeneralCategory::So },
    CategoryRange { start: 0x2102, end: 0x2102, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2103, end: 0x2106, category: GeneralCategory::So },
    CategoryRange { start: 0x2107, end: 0x2107, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2108, end: 0x2109, category: GeneralCategory::So },
    CategoryRange { start: 0x210A, end: 0x210A, category: GeneralCategory::Ll },
    CategoryRange { start: 0x210B, end: 0x210D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x210E, end: 0x210F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2110, end: 0x2112, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2113, end: 0x2113, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2114, end: 0x2114, category: GeneralCategory::So },
    CategoryRange { start: 0x2115, end: 0x2115, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2116, end: 0x2117, category: GeneralCategory::So },
    CategoryRange { start: 0x2118, end: 0x2118, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2119, end: 0x211D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x211E, end: 0x2123, category: GeneralCategory::So },
    CategoryRange { start: 0x2124, end: 0x2124, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2125, end: 0x2125, category: GeneralCategory::So },
    CategoryRange { start: 0x2126, end: 0x2126, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2127, end: 0x2127, category: GeneralCategory::So },
    CategoryRange { start: 0x2128, end: 0x2128, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2129, end: 0x2129, category: GeneralCategory::So },
    CategoryRange { start: 0x212A, end: 0x212D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x212E, end: 0x212E, category: GeneralCategory::So },
    CategoryRange { start: 0x212F, end: 0x212F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2130, end: 0x2133, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2134, end: 0x2134, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2135, end: 0x2138, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2139, end: 0x2139, category: GeneralCategory::Ll },
    CategoryRange { start: 0x213A, end: 0x213B, category: GeneralCategory::So },
    CategoryRange { start: 0x213C, end: 0x213D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x213E, end: 0x213F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2140, end: 0x2144, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2145, end: 0x2145, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2146, end: 0x2149, category: GeneralCategory::Ll },
    CategoryRange { start: 0x214A, end: 0x214A, category: GeneralCategory::So },
    CategoryRange { start: 0x214B, end: 0x214B, category: GeneralCategory::Sm },
    CategoryRange { start: 0x214C, end: 0x214D, category: GeneralCategory::So },
    CategoryRange { start: 0x214E, end: 0x214E, category: GeneralCategory::Ll },
    CategoryRange { start: 0x214F, end: 0x214F, category: GeneralCategory::So },
    CategoryRange { start: 0x2150, end: 0x215F, category: GeneralCategory::No },
    CategoryRange { start: 0x2160, end: 0x2182, category: GeneralCategory::Nl },
    CategoryRange { start: 0x2183, end: 0x2183, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2184, end: 0x2184, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2185, end: 0x2188, category: GeneralCategory::Nl },
    CategoryRange { start: 0x2189, end: 0x2189, category: GeneralCategory::No },
    CategoryRange { start: 0x218A, end: 0x218B, category: GeneralCategory::So },
    CategoryRange { start: 0x2190, end: 0x2194, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2195, end: 0x2199, category: GeneralCategory::So },
    CategoryRange { start: 0x219A, end: 0x219B, category: GeneralCategory::Sm },
    CategoryRange { start: 0x219C, end: 0x219F, category: GeneralCategory::So },
    CategoryRange { start: 0x21A0, end: 0x21A0, category: GeneralCategory::Sm },
    CategoryRange { start: 0x21A1, end: 0x21A2, category: GeneralCategory::So },
    CategoryRange { start: 0x21A3, end: 0x21A3, category: GeneralCategory::Sm },
    CategoryRange { start: 0x21A4, end: 0x21A5, category: GeneralCategory::So },
    CategoryRange { start: 0x21A6, end: 0x21A6, category: GeneralCategory::Sm },
    CategoryRange { start: 0x21A7, end: 0x21AD, category: GeneralCategory::So },
    CategoryRange { start: 0x21AE, end: 0x21AE, category: GeneralCategory::Sm },
    CategoryRange { start: 0x21AF, end: 0x21CD, category: GeneralCategory::So },
    CategoryRange { start: 0x21CE, end: 0x21CF, category: GeneralCategory::Sm },
    CategoryRange { start: 0x21D0, end: 0x21D1, category: GeneralCategory::So },
    CategoryRange { start: 0x21D2, end: 0x21D2, category: GeneralCategory::Sm },
    CategoryRange { start: 0x21D3, end: 0x21D3, category: GeneralCategory::So },
    CategoryRange { start: 0x21D4, end: 0x21D4, category: GeneralCategory::Sm },
    CategoryRange { start: 0x21D5, end: 0x21F3, category: GeneralCategory::So },
    CategoryRange { start: 0x21F4, end: 0x22FF, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2300, end: 0x2307, category: GeneralCategory::So },
    CategoryRange { start: 0x2308, end: 0x2308, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2309, end: 0x2309, category: GeneralCategory::Pe },
    CategoryRange { start: 0x230A, end: 0x230A, category: GeneralCategory::Ps },
    CategoryRange { start: 0x230B, end: 0x230B, category: GeneralCategory::Pe },
    CategoryRange { start: 0x230C, end: 0x231F, category: GeneralCategory::So },
    CategoryRange { start: 0x2320, end: 0x2321, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2322, end: 0x2328, category: GeneralCategory::So },
    CategoryRange { start: 0x2329, end: 0x2329, category: GeneralCategory::Ps },
    CategoryRange { start: 0x232A, end: 0x232A, category: GeneralCategory::Pe },
    CategoryRange { start: 0x232B, end: 0x237B, category: GeneralCategory::So },
    CategoryRange { start: 0x237C, end: 0x237C, category: GeneralCategory::Sm },
    CategoryRange { start: 0x237D, end: 0x239A, category: GeneralCategory::So },
    CategoryRange { start: 0x239B, end: 0x23B3, category: GeneralCategory::Sm },
    CategoryRange { start: 0x23B4, end: 0x23DB, category: GeneralCategory::So },
    CategoryRange { start: 0x23DC, end: 0x23E1, category: GeneralCategory::Sm },
    CategoryRange { start: 0x23E2, end: 0x2426, category: GeneralCategory::So },
    CategoryRange { start: 0x2440, end: 0x244A, category: GeneralCategory::So },
    CategoryRange { start: 0x2460, end: 0x249B, category: GeneralCategory::No },
    CategoryRange { start: 0x249C, end: 0x24E9, category: GeneralCategory::So },
    CategoryRange { start: 0x24EA, end: 0x24FF, category: GeneralCategory::No },
    CategoryRange { start: 0x2500, end: 0x25B6, category: GeneralCategory::So },
    CategoryRange { start: 0x25B7, end: 0x25B7, category: GeneralCategory::Sm },
    CategoryRange { start: 0x25B8, end: 0x25C0, category: GeneralCategory::So },
    CategoryRange { start: 0x25C1, end: 0x25C1, category: GeneralCategory::Sm },
    CategoryRange { start: 0x25C2, end: 0x25F7, category: GeneralCategory::So },
    CategoryRange { start: 0x25F8, end: 0x25FF, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2600, end: 0x266E, category: GeneralCategory::So },
    CategoryRange { start: 0x266F, end: 0x266F, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2670, end: 0x2767, category: GeneralCategory::So },
    CategoryRange { start: 0x2768, end: 0x2768, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2769, end: 0x2769, category: GeneralCategory::Pe },
    CategoryRange { start: 0x276A, end: 0x276A, category: GeneralCategory::Ps },
    CategoryRange { start: 0x276B, end: 0x276B, category: GeneralCategory::Pe },
    CategoryRange { start: 0x276C, end: 0x276C, category: GeneralCategory::Ps },
    CategoryRange { start: 0x276D, end: 0x276D, category: GeneralCategory::Pe },
    CategoryRange { start: 0x276E, end: 0x276E, category: GeneralCategory::Ps },
    CategoryRange { start: 0x276F, end: 0x276F, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2770, end: 0x2770, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2771, end: 0x2771, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2772, end: 0x2772, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2773, end: 0x2773, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2774, end: 0x2774, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2775, end: 0x2775, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2776, end: 0x2793, category: GeneralCategory::No },
    CategoryRange { start: 0x2794, end: 0x27BF, category: GeneralCategory::So },
    CategoryRange { start: 0x27C0, end: 0x27C4, category: GeneralCategory::Sm },
    CategoryRange { start: 0x27C5, end: 0x27C5, category: GeneralCategory::Ps },
    CategoryRange { start: 0x27C6, end: 0x27C6, category: GeneralCategory::Pe },
    CategoryRange { start: 0x27C7, end: 0x27E5, category: GeneralCategory::Sm },
    CategoryRange { start: 0x27E6, end: 0x27E6, category: GeneralCategory::Ps },
    CategoryRange { start: 0x27E7, end: 0x27E7, category: GeneralCategory::Pe },
    CategoryRange { start: 0x27E8, end: 0x27E8, category: GeneralCategory::Ps },
    CategoryRange { start: 0x27E9, end: 0x27E9, category: GeneralCategory::Pe },
    CategoryRange { start: 0x27EA, end: 0x27EA, category: GeneralCategory::Ps },
    CategoryRange { start: 0x27EB, end: 0x27EB, category: GeneralCategory::Pe },
    CategoryRange { start: 0x27EC, end: 0x27EC, category: GeneralCategory::Ps },
    CategoryRange { start: 0x27ED, end: 0x27ED, category: GeneralCategory::Pe },
    CategoryRange { start: 0x27EE, end: 0x27EE, category: GeneralCategory::Ps },
    CategoryRange { start: 0x27EF, end: 0x27EF, category: GeneralCategory::Pe },
    CategoryRange { start: 0x27F0, end: 0x27FF, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2800, end: 0x28FF, category: GeneralCategory::So },
    CategoryRange { start: 0x2900, end: 0x2982, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2983, end: 0x2983, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2984, end: 0x2984, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2985, end: 0x2985, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2986, end: 0x2986, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2987, end: 0x2987, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2988, end: 0x2988, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2989, end: 0x2989, category: GeneralCategory::Ps },
    CategoryRange { start: 0x298A, end: 0x298A, category: GeneralCategory::Pe },
    CategoryRange { start: 0x298B, end: 0x298B, category: GeneralCategory::Ps },
    CategoryRange { start: 0x298C, end: 0x298C, category: GeneralCategory::Pe },
    CategoryRange { start: 0x298D, end: 0x298D, category: GeneralCategory::Ps },
    CategoryRange { start: 0x298E, end: 0x298E, category: GeneralCategory::Pe },
    CategoryRange { start: 0x298F, end: 0x298F, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2990, end: 0x2990, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2991, end: 0x2991, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2992, end: 0x2992, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2993, end: 0x2993, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2994, end: 0x2994, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2995, end: 0x2995, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2996, end: 0x2996, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2997, end: 0x2997, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2998, end: 0x2998, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2999, end: 0x29D7, category: GeneralCategory::Sm },
    CategoryRange { start: 0x29D8, end: 0x29D8, category: GeneralCategory::Ps },
    CategoryRange { start: 0x29D9, end: 0x29D9, category: GeneralCategory::Pe },
    CategoryRange { start: 0x29DA, end: 0x29DA, category: GeneralCategory::Ps },
    CategoryRange { start: 0x29DB, end: 0x29DB, category: GeneralCategory::Pe },
    CategoryRange { start: 0x29DC, end: 0x29FB, category: GeneralCategory::Sm },
    CategoryRange { start: 0x29FC, end: 0x29FC, category: GeneralCategory::Ps },
    CategoryRange { start: 0x29FD, end: 0x29FD, category: GeneralCategory::Pe },
    CategoryRange { start: 0x29FE, end: 0x2AFF, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2B00, end: 0x2B2F, category: GeneralCategory::So },
    CategoryRange { start: 0x2B30, end: 0x2B44, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2B45, end: 0x2B46, category: GeneralCategory::So },
    CategoryRange { start: 0x2B47, end: 0x2B4C, category: GeneralCategory::Sm },
    CategoryRange { start: 0x2B4D, end: 0x2B73, category: GeneralCategory::So },
    CategoryRange { start: 0x2B76, end: 0x2B95, category: GeneralCategory::So },
    CategoryRange { start: 0x2B97, end: 0x2BFF, category: GeneralCategory::So },
    CategoryRange { start: 0x2C00, end: 0x2C2F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C30, end: 0x2C5F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C60, end: 0x2C60, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C61, end: 0x2C61, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C62, end: 0x2C64, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C65, end: 0x2C66, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C67, end: 0x2C67, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C68, end: 0x2C68, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C69, end: 0x2C69, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C6A, end: 0x2C6A, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C6B, end: 0x2C6B, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C6C, end: 0x2C6C, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C6D, end: 0x2C70, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C71, end: 0x2C71, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C72, end: 0x2C72, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C73, end: 0x2C74, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C75, end: 0x2C75, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C76, end: 0x2C7B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C7C, end: 0x2C7D, category: GeneralCategory::Lm },
    CategoryRange { start: 0x2C7E, end: 0x2C80, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C81, end: 0x2C81, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C82, end: 0x2C82, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C83, end: 0x2C83, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C84, end: 0x2C84, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C85, end: 0x2C85, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C86, end: 0x2C86, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C87, end: 0x2C87, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C88, end: 0x2C88, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C89, end: 0x2C89, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C8A, end: 0x2C8A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C8B, end: 0x2C8B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C8C, end: 0x2C8C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C8D, end: 0x2C8D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C8E, end: 0x2C8E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C8F, end: 0x2C8F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C90, end: 0x2C90, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C91, end: 0x2C91, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C92, end: 0x2C92, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C93, end: 0x2C93, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C94, end: 0x2C94, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C95, end: 0x2C95, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C96, end: 0x2C96, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C97, end: 0x2C97, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C98, end: 0x2C98, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C99, end: 0x2C99, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C9A, end: 0x2C9A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C9B, end: 0x2C9B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C9C, end: 0x2C9C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C9D, end: 0x2C9D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2C9E, end: 0x2C9E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2C9F, end: 0x2C9F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CA0, end: 0x2CA0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CA1, end: 0x2CA1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CA2, end: 0x2CA2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CA3, end: 0x2CA3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CA4, end: 0x2CA4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CA5, end: 0x2CA5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CA6, end: 0x2CA6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CA7, end: 0x2CA7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CA8, end: 0x2CA8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CA9, end: 0x2CA9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CAA, end: 0x2CAA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CAB, end: 0x2CAB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CAC, end: 0x2CAC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CAD, end: 0x2CAD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CAE, end: 0x2CAE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CAF, end: 0x2CAF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CB0, end: 0x2CB0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CB1, end: 0x2CB1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CB2, end: 0x2CB2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CB3, end: 0x2CB3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CB4, end: 0x2CB4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CB5, end: 0x2CB5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CB6, end: 0x2CB6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CB7, end: 0x2CB7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CB8, end: 0x2CB8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CB9, end: 0x2CB9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CBA, end: 0x2CBA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CBB, end: 0x2CBB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CBC, end: 0x2CBC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CBD, end: 0x2CBD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CBE, end: 0x2CBE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CBF, end: 0x2CBF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CC0, end: 0x2CC0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CC1, end: 0x2CC1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CC2, end: 0x2CC2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CC3, end: 0x2CC3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CC4, end: 0x2CC4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CC5, end: 0x2CC5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CC6, end: 0x2CC6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CC7, end: 0x2CC7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CC8, end: 0x2CC8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CC9, end: 0x2CC9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CCA, end: 0x2CCA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CCB, end: 0x2CCB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CCC, end: 0x2CCC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CCD, end: 0x2CCD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CCE, end: 0x2CCE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CCF, end: 0x2CCF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CD0, end: 0x2CD0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CD1, end: 0x2CD1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CD2, end: 0x2CD2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CD3, end: 0x2CD3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CD4, end: 0x2CD4, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CD5, end: 0x2CD5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CD6, end: 0x2CD6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CD7, end: 0x2CD7, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CD8, end: 0x2CD8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CD9, end: 0x2CD9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CDA, end: 0x2CDA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CDB, end: 0x2CDB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CDC, end: 0x2CDC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CDD, end: 0x2CDD, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CDE, end: 0x2CDE, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CDF, end: 0x2CDF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CE0, end: 0x2CE0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CE1, end: 0x2CE1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CE2, end: 0x2CE2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CE3, end: 0x2CE4, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CE5, end: 0x2CEA, category: GeneralCategory::So },
    CategoryRange { start: 0x2CEB, end: 0x2CEB, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CEC, end: 0x2CEC, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CED, end: 0x2CED, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CEE, end: 0x2CEE, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CEF, end: 0x2CF1, category: GeneralCategory::Mn },
    CategoryRange { start: 0x2CF2, end: 0x2CF2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x2CF3, end: 0x2CF3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2CF9, end: 0x2CFC, category: GeneralCategory::Po },
    CategoryRange { start: 0x2CFD, end: 0x2CFD, category: GeneralCategory::No },
    CategoryRange { start: 0x2CFE, end: 0x2CFF, category: GeneralCategory::Po },
    CategoryRange { start: 0x2D00, end: 0x2D25, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2D27, end: 0x2D27, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2D2D, end: 0x2D2D, category: GeneralCategory::Ll },
    CategoryRange { start: 0x2D30, end: 0x2D67, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2D6F, end: 0x2D6F, category: GeneralCategory::Lm },
    CategoryRange { start: 0x2D70, end: 0x2D70, category: GeneralCategory::Po },
    CategoryRange { start: 0x2D7F, end: 0x2D7F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x2D80, end: 0x2D96, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2DA0, end: 0x2DA6, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2DA8, end: 0x2DAE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2DB0, end: 0x2DB6, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2DB8, end: 0x2DBE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2DC0, end: 0x2DC6, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2DC8, end: 0x2DCE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2DD0, end: 0x2DD6, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2DD8, end: 0x2DDE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2DE0, end: 0x2DFF, category: GeneralCategory::Mn },
    CategoryRange { start: 0x2E00, end: 0x2E01, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E02, end: 0x2E02, category: GeneralCategory::Pi },
    CategoryRange { start: 0x2E03, end: 0x2E03, category: GeneralCategory::Pf },
    CategoryRange { start: 0x2E04, end: 0x2E04, category: GeneralCategory::Pi },
    CategoryRange { start: 0x2E05, end: 0x2E05, category: GeneralCategory::Pf },
    CategoryRange { start: 0x2E06, end: 0x2E08, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E09, end: 0x2E09, category: GeneralCategory::Pi },
    CategoryRange { start: 0x2E0A, end: 0x2E0A, category: GeneralCategory::Pf },
    CategoryRange { start: 0x2E0B, end: 0x2E0B, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E0C, end: 0x2E0C, category: GeneralCategory::Pi },
    CategoryRange { start: 0x2E0D, end: 0x2E0D, category: GeneralCategory::Pf },
    CategoryRange { start: 0x2E0E, end: 0x2E16, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E17, end: 0x2E17, category: GeneralCategory::Pd },
    CategoryRange { start: 0x2E18, end: 0x2E19, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E1A, end: 0x2E1A, category: GeneralCategory::Pd },
    CategoryRange { start: 0x2E1B, end: 0x2E1B, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E1C, end: 0x2E1C, category: GeneralCategory::Pi },
    CategoryRange { start: 0x2E1D, end: 0x2E1D, category: GeneralCategory::Pf },
    CategoryRange { start: 0x2E1E, end: 0x2E1F, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E20, end: 0x2E20, category: GeneralCategory::Pi },
    CategoryRange { start: 0x2E21, end: 0x2E21, category: GeneralCategory::Pf },
    CategoryRange { start: 0x2E22, end: 0x2E22, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2E23, end: 0x2E23, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2E24, end: 0x2E24, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2E25, end: 0x2E25, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2E26, end: 0x2E26, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2E27, end: 0x2E27, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2E28, end: 0x2E28, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2E29, end: 0x2E29, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2E2A, end: 0x2E2E, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E2F, end: 0x2E2F, category: GeneralCategory::Lm },
    CategoryRange { start: 0x2E30, end: 0x2E39, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E3A, end: 0x2E3B, category: GeneralCategory::Pd },
    CategoryRange { start: 0x2E3C, end: 0x2E3F, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E40, end: 0x2E40, category: GeneralCategory::Pd },
    CategoryRange { start: 0x2E41, end: 0x2E41, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E42, end: 0x2E42, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2E43, end: 0x2E4F, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E50, end: 0x2E51, category: GeneralCategory::So },
    CategoryRange { start: 0x2E52, end: 0x2E54, category: GeneralCategory::Po },
    CategoryRange { start: 0x2E55, end: 0x2E55, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2E56, end: 0x2E56, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2E57, end: 0x2E57, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2E58, end: 0x2E58, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2E59, end: 0x2E59, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2E5A, end: 0x2E5A, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2E5B, end: 0x2E5B, category: GeneralCategory::Ps },
    CategoryRange { start: 0x2E5C, end: 0x2E5C, category: GeneralCategory::Pe },
    CategoryRange { start: 0x2E5D, end: 0x2E5D, category: GeneralCategory::Pd },
    CategoryRange { start: 0x2E80, end: 0x2E99, category: GeneralCategory::So },
    CategoryRange { start: 0x2E9B, end: 0x2EF3, category: GeneralCategory::So },
    CategoryRange { start: 0x2F00, end: 0x2FD5, category: GeneralCategory::So },
    CategoryRange { start: 0x2FF0, end: 0x2FFB, category: GeneralCategory::So },
    CategoryRange { start: 0x3000, end: 0x3000, category: GeneralCategory::Zs },
    CategoryRange { start: 0x3001, end: 0x3003, category: GeneralCategory::Po },
    CategoryRange { start: 0x3004, end: 0x3004, category: GeneralCategory::So },
    CategoryRange { start: 0x3005, end: 0x3005, category: GeneralCategory::Lm },
    CategoryRange { start: 0x3006, end: 0x3006, category: GeneralCategory::Lo },
    CategoryRange { start: 0x3007, end: 0x3007, category: GeneralCategory::Nl },
    CategoryRange { start: 0x3008, end: 0x3008, category: GeneralCategory::Ps },
    CategoryRange { start: 0x3009, end: 0x3009, category: GeneralCategory::Pe },
    CategoryRange { start: 0x300A, end: 0x300A, category: GeneralCategory::Ps },
    CategoryRange { start: 0x300B, end: 0x300B, category: GeneralCategory::Pe },
    CategoryRange { start: 0x300C, end: 0x300C, category: GeneralCategory::Ps },
    CategoryRange { start: 0x300D, end: 0x300D, category: GeneralCategory::Pe },
    CategoryRange { start: 0x300E, end: 0x300E, category: GeneralCategory::Ps },
    CategoryRange { start: 0x300F, end: 0x300F, category: GeneralCategory::Pe },
    CategoryRange { start: 0x3010, end: 0x3010, category: GeneralCategory::Ps },
    CategoryRange { start: 0x3011, end: 0x3011, category: GeneralCategory::Pe },
    CategoryRange { start: 0x3012, end: 0x3013, category: GeneralCategory::So },
    CategoryRange { start: 0x3014, end: 0x3014, category: GeneralCategory::Ps },
    CategoryRange { start: 0x3015, end: 0x3015, category: GeneralCategory::Pe },
    CategoryRange { start: 0x3016, end: 0x3016, category: GeneralCategory::Ps },
    CategoryRange { start: 0x3017, end: 0x3017, category: GeneralCategory::Pe },
    CategoryRange { start: 0x3018, end: 0x3018, category: GeneralCategory::Ps },
    CategoryRange { start: 0x3019, end: 0x3019, category: GeneralCategory::Pe },
    CategoryRange { start: 0x301A, end: 0x301A, category: GeneralCategory::Ps },
    CategoryRange { start: 0x301B, end: 0x301B, category: GeneralCategory::Pe },
    CategoryRange { start: 0x301C, end: 0x301C, category: GeneralCategory::Pd },
    CategoryRange { start: 0x301D, end: 0x301D, category: GeneralCategory::Ps },
    CategoryRange { start: 0x301E, end: 0x301F, category: GeneralCategory::Pe },
    CategoryRange { start: 0x3020, end: 0x3020, category: GeneralCategory::So },
    CategoryRange { start: 0x3021, end: 0x3029, category: GeneralCategory::Nl },
    CategoryRange { start: 0x302A, end: 0x302D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x302E, end: 0x302F, category: GeneralCategory::Mc },
    CategoryRange { start: 0x3030, end: 0x3030, category: GeneralCategory::Pd },
    CategoryRange { start: 0x3031, end: 0x3035, category: GeneralCategory::Lm },
    CategoryRange { start: 0x3036, end: 0x3037, category: GeneralCategory::So },
    CategoryRange { start: 0x3038, end: 0x303A, category: GeneralCategory::Nl },
    CategoryRange { start: 0x303B, end: 0x303B, category: GeneralCategory::Lm },
    CategoryRange { start: 0x303C, end: 0x303C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x303D, end: 0x303D, category: GeneralCategory::Po },
    CategoryRange { start: 0x303E, end: 0x303F, category: GeneralCategory::So },
    CategoryRange { start: 0x3041, end: 0x3096, category: GeneralCategory::Lo },
    CategoryRange { start: 0x3099, end: 0x309A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x309B, end: 0x309C, category: GeneralCategory::Sk },
    CategoryRange { start: 0x309D, end: 0x309E, category: GeneralCategory::Lm },
    CategoryRange { start: 0x309F, end: 0x309F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x30A0, end: 0x30A0, category: GeneralCategory::Pd },
    CategoryRange { start: 0x30A1, end: 0x30FA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x30FB, end: 0x30FB, category: GeneralCategory::Po },
    CategoryRange { start: 0x30FC, end: 0x30FE, category: GeneralCategory::Lm },
    CategoryRange { start: 0x30FF, end: 0x30FF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x3105, end: 0x312F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x3131, end: 0x318E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x3190, end: 0x3191, category: GeneralCategory::So },
    CategoryRange { start: 0x3192, end: 0x3195, category: GeneralCategory::No },
    CategoryRange { start: 0x3196, end: 0x319F, category: GeneralCategory::So },
    CategoryRange { start: 0x31A0, end: 0x31BF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x31C0, end: 0x31E3, category: GeneralCategory::So },
    CategoryRange { start: 0x31F0, end: 0x31FF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x3200, end: 0x321E, category: GeneralCategory::So },
    CategoryRange { start: 0x3220, end: 0x3229, category: GeneralCategory::No },
    CategoryRange { start: 0x322A, end: 0x3247, category: GeneralCategory::So },
    CategoryRange { start: 0x3248, end: 0x324F, category: GeneralCategory::No },
    CategoryRange { start: 0x3250, end: 0x3250, category: GeneralCategory::So },
    CategoryRange { start: 0x3251, end: 0x325F, category: GeneralCategory::No },
    CategoryRange { start: 0x3260, end: 0x327F, category: GeneralCategory::So },
    CategoryRange { start: 0x3280, end: 0x3289, category: GeneralCategory::No },
    CategoryRange { start: 0x328A, end: 0x32B0, category: GeneralCategory::So },
    CategoryRange { start: 0x32B1, end: 0x32BF, category: GeneralCategory::No },
    CategoryRange { start: 0x32C0, end: 0x33FF, category: GeneralCategory::So },
    CategoryRange { start: 0x3400, end: 0x4DBF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x4DC0, end: 0x4DFF, category: GeneralCategory::So },
    CategoryRange { start: 0x4E00, end: 0xA014, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA015, end: 0xA015, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA016, end: 0xA48C, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA490, end: 0xA4C6, category: GeneralCategory::So },
    CategoryRange { start: 0xA4D0, end: 0xA4F7, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA4F8, end: 0xA4FD, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA4FE, end: 0xA4FF, category: GeneralCategory::Po },
    CategoryRange { start: 0xA500, end: 0xA60B, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA60C, end: 0xA60C, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA60D, end: 0xA60F, category: GeneralCategory::Po },
    CategoryRange { start: 0xA610, end: 0xA61F, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA620, end: 0xA629, category: GeneralCategory::Nd },
    CategoryRange { start: 0xA62A, end: 0xA62B, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA640, end: 0xA640, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA641, end: 0xA641, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA642, end: 0xA642, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA643, end: 0xA643, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA644, end: 0xA644, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA645, end: 0xA645, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA646, end: 0xA646, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA647, end: 0xA647, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA648, end: 0xA648, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA649, end: 0xA649, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA64A, end: 0xA64A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA64B, end: 0xA64B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA64C, end: 0xA64C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA64D, end: 0xA64D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA64E, end: 0xA64E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA64F, end: 0xA64F, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA650, end: 0xA650, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA651, end: 0xA651, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA652, end: 0xA652, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA653, end: 0xA653, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA654, end: 0xA654, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA655, end: 0xA655, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA656, end: 0xA656, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA657, end: 0xA657, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA658, end: 0xA658, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA659, end: 0xA659, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA65A, end: 0xA65A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA65B, end: 0xA65B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA65C, end: 0xA65C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA65D, end: 0xA65D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA65E, end: 0xA65E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA65F, end: 0xA65F, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA660, end: 0xA660, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA661, end: 0xA661, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA662, end: 0xA662, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA663, end: 0xA663, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA664, end: 0xA664, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA665, end: 0xA665, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA666, end: 0xA666, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA667, end: 0xA667, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA668, end: 0xA668, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA669, end: 0xA669, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA66A, end: 0xA66A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA66B, end: 0xA66B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA66C, end: 0xA66C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA66D, end: 0xA66D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA66E, end: 0xA66E, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA66F, end: 0xA66F, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA670, end: 0xA672, category: GeneralCategory::Me },
    CategoryRange { start: 0xA673, end: 0xA673, category: GeneralCategory::Po },
    CategoryRange { start: 0xA674, end: 0xA67D, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA67E, end: 0xA67E, category: GeneralCategory::Po },
    CategoryRange { start: 0xA67F, end: 0xA67F, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA680, end: 0xA680, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA681, end: 0xA681, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA682, end: 0xA682, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA683, end: 0xA683, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA684, end: 0xA684, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA685, end: 0xA685, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA686, end: 0xA686, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA687, end: 0xA687, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA688, end: 0xA688, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA689, end: 0xA689, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA68A, end: 0xA68A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA68B, end: 0xA68B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA68C, end: 0xA68C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA68D, end: 0xA68D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA68E, end: 0xA68E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA68F, end: 0xA68F, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA690, end: 0xA690, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA691, end: 0xA691, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA692, end: 0xA692, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA693, end: 0xA693, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA694, end: 0xA694, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA695, end: 0xA695, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA696, end: 0xA696, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA697, end: 0xA697, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA698, end: 0xA698, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA699, end: 0xA699, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA69A, end: 0xA69A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA69B, end: 0xA69B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA69C, end: 0xA69D, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA69E, end: 0xA69F, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA6A0, end: 0xA6E5, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA6E6, end: 0xA6EF, category: GeneralCategory::Nl },
    CategoryRange { start: 0xA6F0, end: 0xA6F1, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA6F2, end: 0xA6F7, category: GeneralCategory::Po },
    CategoryRange { start: 0xA700, end: 0xA716, category: GeneralCategory::Sk },
    CategoryRange { start: 0xA717, end: 0xA71F, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA720, end: 0xA721, category: GeneralCategory::Sk },
    CategoryRange { start: 0xA722, end: 0xA722, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA723, end: 0xA723, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA724, end: 0xA724, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA725, end: 0xA725, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA726, end: 0xA726, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA727, end: 0xA727, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA728, end: 0xA728, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA729, end: 0xA729, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA72A, end: 0xA72A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA72B, end: 0xA72B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA72C, end: 0xA72C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA72D, end: 0xA72D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA72E, end: 0xA72E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA72F, end: 0xA731, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA732, end: 0xA732, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA733, end: 0xA733, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA734, end: 0xA734, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA735, end: 0xA735, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA736, end: 0xA736, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA737, end: 0xA737, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA738, end: 0xA738, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA739, end: 0xA739, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA73A, end: 0xA73A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA73B, end: 0xA73B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA73C, end: 0xA73C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA73D, end: 0xA73D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA73E, end: 0xA73E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA73F, end: 0xA73F, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA740, end: 0xA740, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA741, end: 0xA741, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA742, end: 0xA742, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA743, end: 0xA743, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA744, end: 0xA744, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA745, end: 0xA745, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA746, end: 0xA746, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA747, end: 0xA747, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA748, end: 0xA748, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA749, end: 0xA749, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA74A, end: 0xA74A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA74B, end: 0xA74B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA74C, end: 0xA74C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA74D, end: 0xA74D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA74E, end: 0xA74E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA74F, end: 0xA74F, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA750, end: 0xA750, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA751, end: 0xA751, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA752, end: 0xA752, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA753, end: 0xA753, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA754, end: 0xA754, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA755, end: 0xA755, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA756, end: 0xA756, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA757, end: 0xA757, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA758, end: 0xA758, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA759, end: 0xA759, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA75A, end: 0xA75A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA75B, end: 0xA75B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA75C, end: 0xA75C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA75D, end: 0xA75D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA75E, end: 0xA75E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA75F, end: 0xA75F, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA760, end: 0xA760, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA761, end: 0xA761, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA762, end: 0xA762, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA763, end: 0xA763, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA764, end: 0xA764, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA765, end: 0xA765, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA766, end: 0xA766, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA767, end: 0xA767, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA768, end: 0xA768, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA769, end: 0xA769, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA76A, end: 0xA76A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA76B, end: 0xA76B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA76C, end: 0xA76C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA76D, end: 0xA76D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA76E, end: 0xA76E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA76F, end: 0xA76F, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA770, end: 0xA770, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA771, end: 0xA778, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA779, end: 0xA779, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA77A, end: 0xA77A, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA77B, end: 0xA77B, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA77C, end: 0xA77C, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA77D, end: 0xA77E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA77F, end: 0xA77F, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA780, end: 0xA780, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA781, end: 0xA781, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA782, end: 0xA782, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA783, end: 0xA783, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA784, end: 0xA784, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA785, end: 0xA785, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA786, end: 0xA786, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA787, end: 0xA787, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA788, end: 0xA788, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA789, end: 0xA78A, category: GeneralCategory::Sk },
    CategoryRange { start: 0xA78B, end: 0xA78B, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA78C, end: 0xA78C, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA78D, end: 0xA78D, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA78E, end: 0xA78E, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA78F, end: 0xA78F, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA790, end: 0xA790, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA791, end: 0xA791, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA792, end: 0xA792, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA793, end: 0xA795, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA796, end: 0xA796, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA797, end: 0xA797, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA798, end: 0xA798, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA799, end: 0xA799, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA79A, end: 0xA79A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA79B, end: 0xA79B, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA79C, end: 0xA79C, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA79D, end: 0xA79D, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA79E, end: 0xA79E, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA79F, end: 0xA79F, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7A0, end: 0xA7A0, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7A1, end: 0xA7A1, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7A2, end: 0xA7A2, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7A3, end: 0xA7A3, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7A4, end: 0xA7A4, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7A5, end: 0xA7A5, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7A6, end: 0xA7A6, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7A7, end: 0xA7A7, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7A8, end: 0xA7A8, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7A9, end: 0xA7A9, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7AA, end: 0xA7AE, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7AF, end: 0xA7AF, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7B0, end: 0xA7B4, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7B5, end: 0xA7B5, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7B6, end: 0xA7B6, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7B7, end: 0xA7B7, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7B8, end: 0xA7B8, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7B9, end: 0xA7B9, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7BA, end: 0xA7BA, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7BB, end: 0xA7BB, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7BC, end: 0xA7BC, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7BD, end: 0xA7BD, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7BE, end: 0xA7BE, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7BF, end: 0xA7BF, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7C0, end: 0xA7C0, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7C1, end: 0xA7C1, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7C2, end: 0xA7C2, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7C3, end: 0xA7C3, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7C4, end: 0xA7C7, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7C8, end: 0xA7C8, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7C9, end: 0xA7C9, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7CA, end: 0xA7CA, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7D0, end: 0xA7D0, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7D1, end: 0xA7D1, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7D3, end: 0xA7D3, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7D5, end: 0xA7D5, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7D6, end: 0xA7D6, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7D7, end: 0xA7D7, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7D8, end: 0xA7D8, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7D9, end: 0xA7D9, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7F2, end: 0xA7F4, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA7F5, end: 0xA7F5, category: GeneralCategory::Lu },
    CategoryRange { start: 0xA7F6, end: 0xA7F6, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7F7, end: 0xA7F7, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA7F8, end: 0xA7F9, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA7FA, end: 0xA7FA, category: GeneralCategory::Ll },
    CategoryRange { start: 0xA7FB, end: 0xA801, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA802, end: 0xA802, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA803, end: 0xA805, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA806, end: 0xA806, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA807, end: 0xA80A, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA80B, end: 0xA80B, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA80C, end: 0xA822, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA823, end: 0xA824, category: GeneralCategory::Mc },
    CategoryRange { start: 0xA825, end: 0xA826, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA827, end: 0xA827, category: GeneralCategory::Mc },
    CategoryRange { start: 0xA828, end: 0xA82B, category: GeneralCategory::So },
    CategoryRange { start: 0xA82C, end: 0xA82C, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA830, end: 0xA835, category: GeneralCategory::No },
    CategoryRange { start: 0xA836, end: 0xA837, category: GeneralCategory::So },
    CategoryRange { start: 0xA838, end: 0xA838, category: GeneralCategory::Sc },
    CategoryRange { start: 0xA839, end: 0xA839, category: GeneralCategory::So },
    CategoryRange { start: 0xA840, end: 0xA873, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA874, end: 0xA877, category: GeneralCategory::Po },
    CategoryRange { start: 0xA880, end: 0xA881, category: GeneralCategory::Mc },
    CategoryRange { start: 0xA882, end: 0xA8B3, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA8B4, end: 0xA8C3, category: GeneralCategory::Mc },
    CategoryRange { start: 0xA8C4, end: 0xA8C5, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA8CE, end: 0xA8CF, category: GeneralCategory::Po },
    CategoryRange { start: 0xA8D0, end: 0xA8D9, category: GeneralCategory::Nd },
    CategoryRange { start: 0xA8E0, end: 0xA8F1, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA8F2, end: 0xA8F7, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA8F8, end: 0xA8FA, category: GeneralCategory::Po },
    CategoryRange { start: 0xA8FB, end: 0xA8FB, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA8FC, end: 0xA8FC, category: GeneralCategory::Po },
    CategoryRange { start: 0xA8FD, end: 0xA8FE, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA8FF, end: 0xA8FF, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA900, end: 0xA909, category: GeneralCategory::Nd },
    CategoryRange { start: 0xA90A, end: 0xA925, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA926, end: 0xA92D, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA92E, end: 0xA92F, category: GeneralCategory::Po },
    CategoryRange { start: 0xA930, end: 0xA946, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA947, end: 0xA951, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA952, end: 0xA953, category: GeneralCategory::Mc },
    CategoryRange { start: 0xA95F, end: 0xA95F, category: GeneralCategory::Po },
    CategoryRange { start: 0xA960, end: 0xA97C, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA980, end: 0xA982, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA983, end: 0xA983, category: GeneralCategory::Mc },
    CategoryRange { start: 0xA984, end: 0xA9B2, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA9B3, end: 0xA9B3, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA9B4, end: 0xA9B5, category: GeneralCategory::Mc },
    CategoryRange { start: 0xA9B6, end: 0xA9B9, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA9BA, end: 0xA9BB, category: GeneralCategory::Mc },
    CategoryRange { start: 0xA9BC, end: 0xA9BD, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA9BE, end: 0xA9C0, category: GeneralCategory::Mc },
    CategoryRange { start: 0xA9C1, end: 0xA9CD, category: GeneralCategory::Po },
    CategoryRange { start: 0xA9CF, end: 0xA9CF, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA9D0, end: 0xA9D9, category: GeneralCategory::Nd },
    CategoryRange { start: 0xA9DE, end: 0xA9DF, category: GeneralCategory::Po },
    CategoryRange { start: 0xA9E0, end: 0xA9E4, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA9E5, end: 0xA9E5, category: GeneralCategory::Mn },
    CategoryRange { start: 0xA9E6, end: 0xA9E6, category: GeneralCategory::Lm },
    CategoryRange { start: 0xA9E7, end: 0xA9EF, category: GeneralCategory::Lo },
    CategoryRange { start: 0xA9F0, end: 0xA9F9, category: GeneralCategory::Nd },
    CategoryRange { start: 0xA9FA, end: 0xA9FE, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAA00, end: 0xAA28, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAA29, end: 0xAA2E, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAA2F, end: 0xAA30, category: GeneralCategory::Mc },
    CategoryRange { start: 0xAA31, end: 0xAA32, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAA33, end: 0xAA34, category: GeneralCategory::Mc },
    CategoryRange { start: 0xAA35, end: 0xAA36, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAA40, end: 0xAA42, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAA43, end: 0xAA43, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAA44, end: 0xAA4B, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAA4C, end: 0xAA4C, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAA4D, end: 0xAA4D, category: GeneralCategory::Mc },
    CategoryRange { start: 0xAA50, end: 0xAA59, category: GeneralCategory::Nd },
    CategoryRange { start: 0xAA5C, end: 0xAA5F, category: GeneralCategory::Po },
    CategoryRange { start: 0xAA60, end: 0xAA6F, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAA70, end: 0xAA70, category: GeneralCategory::Lm },
    CategoryRange { start: 0xAA71, end: 0xAA76, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAA77, end: 0xAA79, category: GeneralCategory::So },
    CategoryRange { start: 0xAA7A, end: 0xAA7A, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAA7B, end: 0xAA7B, category: GeneralCategory::Mc },
    CategoryRange { start: 0xAA7C, end: 0xAA7C, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAA7D, end: 0xAA7D, category: GeneralCategory::Mc },
    CategoryRange { start: 0xAA7E, end: 0xAAAF, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAAB0, end: 0xAAB0, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAAB1, end: 0xAAB1, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAAB2, end: 0xAAB4, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAAB5, end: 0xAAB6, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAAB7, end: 0xAAB8, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAAB9, end: 0xAABD, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAABE, end: 0xAABF, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAAC0, end: 0xAAC0, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAAC1, end: 0xAAC1, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAAC2, end: 0xAAC2, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAADB, end: 0xAADC, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAADD, end: 0xAADD, category: GeneralCategory::Lm },
    CategoryRange { start: 0xAADE, end: 0xAADF, category: GeneralCategory::Po },
    CategoryRange { start: 0xAAE0, end: 0xAAEA, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAAEB, end: 0xAAEB, category: GeneralCategory::Mc },
    CategoryRange { start: 0xAAEC, end: 0xAAED, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAAEE, end: 0xAAEF, category: GeneralCategory::Mc },
    CategoryRange { start: 0xAAF0, end: 0xAAF1, category: GeneralCategory::Po },
    CategoryRange { start: 0xAAF2, end: 0xAAF2, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAAF3, end: 0xAAF4, category: GeneralCategory::Lm },
    CategoryRange { start: 0xAAF5, end: 0xAAF5, category: GeneralCategory::Mc },
    CategoryRange { start: 0xAAF6, end: 0xAAF6, category: GeneralCategory::Mn },
    CategoryRange { start: 0xAB01, end: 0xAB06, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAB09, end: 0xAB0E, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAB11, end: 0xAB16, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAB20, end: 0xAB26, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAB28, end: 0xAB2E, category: GeneralCategory::Lo },
    CategoryRange { start: 0xAB30, end: 0xAB5A, category: GeneralCategory::Ll },
    CategoryRange { start: 0xAB5B, end: 0xAB5B, category: GeneralCategory::Sk },
    CategoryRange { start: 0xAB5C, end: 0xAB5F, category: GeneralCategory::Lm },
    CategoryRange { start: 0xAB60, end: 0xAB68, category: GeneralCategory::Ll },
    CategoryRange { start: 0xAB69, end: 0xAB69, category: GeneralCategory::Lm },
    CategoryRange { start: 0xAB6A, end: 0xAB6B, category: GeneralCategory::Sk },
    CategoryRange { start: 0xAB70, end: 0xABBF, category: GeneralCategory::Ll },
    CategoryRange { start: 0xABC0, end: 0xABE2, category: GeneralCategory::Lo },
    CategoryRange { start: 0xABE3, end: 0xABE4, category: GeneralCategory::Mc },
    CategoryRange { start: 0xABE5, end: 0xABE5, category: GeneralCategory::Mn },
    CategoryRange { start: 0xABE6, end: 0xABE7, category: GeneralCategory::Mc },
    CategoryRange { start: 0xABE8, end: 0xABE8, category: GeneralCategory::Mn },
    CategoryRange { start: 0xABE9, end: 0xABEA, category: GeneralCategory::Mc },
    CategoryRange { start: 0xABEB, end: 0xABEB, category: GeneralCategory::Po },
    CategoryRange { start: 0xABEC, end: 0xABEC, category: GeneralCategory::Mc },
    CategoryRange { start: 0xABED, end: 0xABED, category: GeneralCategory::Mn },
    CategoryRange { start: 0xABF0, end: 0xABF9, category: GeneralCategory::Nd },
    CategoryRange { start: 0xAC00, end: 0xD7A3, category: GeneralCategory::Lo },
    CategoryRange { start: 0xD7B0, end: 0xD7C6, category: GeneralCategory::Lo },
    CategoryRange { start: 0xD7CB, end: 0xD7FB, category: GeneralCategory::Lo },
    CategoryRange { start: 0xD800, end: 0xDFFF, category: GeneralCategory::Cs },
    CategoryRange { start: 0xE000, end: 0xF8FF, category: GeneralCategory::Co },
    CategoryRange { start: 0xF900, end: 0xFA6D, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFA70, end: 0xFAD9, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFB00, end: 0xFB06, category: GeneralCategory::Ll },
    CategoryRange { start: 0xFB13, end: 0xFB17, category: GeneralCategory::Ll },
    CategoryRange { start: 0xFB1D, end: 0xFB1D, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFB1E, end: 0xFB1E, category: GeneralCategory::Mn },
    CategoryRange { start: 0xFB1F, end: 0xFB28, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFB29, end: 0xFB29, category: GeneralCategory::Sm },
    CategoryRange { start: 0xFB2A, end: 0xFB36, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFB38, end: 0xFB3C, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFB3E, end: 0xFB3E, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFB40, end: 0xFB41, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFB43, end: 0xFB44, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFB46, end: 0xFBB1, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFBB2, end: 0xFBC2, category: GeneralCategory::Sk },
    CategoryRange { start: 0xFBD3, end: 0xFD3D, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFD3E, end: 0xFD3E, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFD3F, end: 0xFD3F, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFD40, end: 0xFD4F, category: GeneralCategory::So },
    CategoryRange { start: 0xFD50, end: 0xFD8F, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFD92, end: 0xFDC7, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFDCF, end: 0xFDCF, category: GeneralCategory::So },
    CategoryRange { start: 0xFDF0, end: 0xFDFB, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFDFC, end: 0xFDFC, category: GeneralCategory::Sc },
    CategoryRange { start: 0xFDFD, end: 0xFDFF, category: GeneralCategory::So },
    CategoryRange { start: 0xFE00, end: 0xFE0F, category: GeneralCategory::Mn },
    CategoryRange { start: 0xFE10, end: 0xFE16, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE17, end: 0xFE17, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE18, end: 0xFE18, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE19, end: 0xFE19, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE20, end: 0xFE2F, category: GeneralCategory::Mn },
    CategoryRange { start: 0xFE30, end: 0xFE30, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE31, end: 0xFE32, category: GeneralCategory::Pd },
    CategoryRange { start: 0xFE33, end: 0xFE34, category: GeneralCategory::Pc },
    CategoryRange { start: 0xFE35, end: 0xFE35, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE36, end: 0xFE36, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE37, end: 0xFE37, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE38, end: 0xFE38, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE39, end: 0xFE39, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE3A, end: 0xFE3A, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE3B, end: 0xFE3B, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE3C, end: 0xFE3C, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE3D, end: 0xFE3D, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE3E, end: 0xFE3E, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE3F, end: 0xFE3F, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE40, end: 0xFE40, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE41, end: 0xFE41, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE42, end: 0xFE42, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE43, end: 0xFE43, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE44, end: 0xFE44, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE45, end: 0xFE46, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE47, end: 0xFE47, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE48, end: 0xFE48, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE49, end: 0xFE4C, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE4D, end: 0xFE4F, category: GeneralCategory::Pc },
    CategoryRange { start: 0xFE50, end: 0xFE52, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE54, end: 0xFE57, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE58, end: 0xFE58, category: GeneralCategory::Pd },
    CategoryRange { start: 0xFE59, end: 0xFE59, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE5A, end: 0xFE5A, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE5B, end: 0xFE5B, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE5C, end: 0xFE5C, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE5D, end: 0xFE5D, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFE5E, end: 0xFE5E, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFE5F, end: 0xFE61, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE62, end: 0xFE62, category: GeneralCategory::Sm },
    CategoryRange { start: 0xFE63, end: 0xFE63, category: GeneralCategory::Pd },
    CategoryRange { start: 0xFE64, end: 0xFE66, category: GeneralCategory::Sm },
    CategoryRange { start: 0xFE68, end: 0xFE68, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE69, end: 0xFE69, category: GeneralCategory::Sc },
    CategoryRange { start: 0xFE6A, end: 0xFE6B, category: GeneralCategory::Po },
    CategoryRange { start: 0xFE70, end: 0xFE74, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFE76, end: 0xFEFC, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFEFF, end: 0xFEFF, category: GeneralCategory::Cf },
    CategoryRange { start: 0xFF01, end: 0xFF03, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF04, end: 0xFF04, category: GeneralCategory::Sc },
    CategoryRange { start: 0xFF05, end: 0xFF07, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF08, end: 0xFF08, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFF09, end: 0xFF09, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFF0A, end: 0xFF0A, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF0B, end: 0xFF0B, category: GeneralCategory::Sm },
    CategoryRange { start: 0xFF0C, end: 0xFF0C, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF0D, end: 0xFF0D, category: GeneralCategory::Pd },
    CategoryRange { start: 0xFF0E, end: 0xFF0F, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF10, end: 0xFF19, category: GeneralCategory::Nd },
    CategoryRange { start: 0xFF1A, end: 0xFF1B, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF1C, end: 0xFF1E, category: GeneralCategory::Sm },
    CategoryRange { start: 0xFF1F, end: 0xFF20, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF21, end: 0xFF3A, category: GeneralCategory::Lu },
    CategoryRange { start: 0xFF3B, end: 0xFF3B, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFF3C, end: 0xFF3C, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF3D, end: 0xFF3D, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFF3E, end: 0xFF3E, category: GeneralCategory::Sk },
    CategoryRange { start: 0xFF3F, end: 0xFF3F, category: GeneralCategory::Pc },
    CategoryRange { start: 0xFF40, end: 0xFF40, category: GeneralCategory::Sk },
    CategoryRange { start: 0xFF41, end: 0xFF5A, category: GeneralCategory::Ll },
    CategoryRange { start: 0xFF5B, end: 0xFF5B, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFF5C, end: 0xFF5C, category: GeneralCategory::Sm },
    CategoryRange { start: 0xFF5D, end: 0xFF5D, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFF5E, end: 0xFF5E, category: GeneralCategory::Sm },
    CategoryRange { start: 0xFF5F, end: 0xFF5F, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFF60, end: 0xFF60, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFF61, end: 0xFF61, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF62, end: 0xFF62, category: GeneralCategory::Ps },
    CategoryRange { start: 0xFF63, end: 0xFF63, category: GeneralCategory::Pe },
    CategoryRange { start: 0xFF64, end: 0xFF65, category: GeneralCategory::Po },
    CategoryRange { start: 0xFF66, end: 0xFF6F, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFF70, end: 0xFF70, category: GeneralCategory::Lm },
    CategoryRange { start: 0xFF71, end: 0xFF9D, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFF9E, end: 0xFF9F, category: GeneralCategory::Lm },
    CategoryRange { start: 0xFFA0, end: 0xFFBE, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFFC2, end: 0xFFC7, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFFCA, end: 0xFFCF, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFFD2, end: 0xFFD7, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFFDA, end: 0xFFDC, category: GeneralCategory::Lo },
    CategoryRange { start: 0xFFE0, end: 0xFFE1, category: GeneralCategory::Sc },
    CategoryRange { start: 0xFFE2, end: 0xFFE2, category: GeneralCategory::Sm },
    CategoryRange { start: 0xFFE3, end: 0xFFE3, category: GeneralCategory::Sk },
    CategoryRange { start: 0xFFE4, end: 0xFFE4, category: GeneralCategory::So },
    CategoryRange { start: 0xFFE5, end: 0xFFE6, category: GeneralCategory::Sc },
    CategoryRange { start: 0xFFE8, end: 0xFFE8, category: GeneralCategory::So },
    CategoryRange { start: 0xFFE9, end: 0xFFEC, category: GeneralCategory::Sm },
    CategoryRange { start: 0xFFED, end: 0xFFEE, category: GeneralCategory::So },
    CategoryRange { start: 0xFFF9, end: 0xFFFB, category: GeneralCategory::Cf },
    CategoryRange { start: 0xFFFC, end: 0xFFFD, category: GeneralCategory::So },
    CategoryRange { start: 0x10000, end: 0x1000B, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1000D, end: 0x10026, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10028, end: 0x1003A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1003C, end: 0x1003D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1003F, end: 0x1004D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10050, end: 0x1005D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10080, end: 0x100FA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10100, end: 0x10102, category: GeneralCategory::Po },
    CategoryRange { start: 0x10107, end: 0x10133, category: GeneralCategory::No },
    CategoryRange { start: 0x10137, end: 0x1013F, category: GeneralCategory::So },
    CategoryRange { start: 0x10140, end: 0x10174, category: GeneralCategory::Nl },
    CategoryRange { start: 0x10175, end: 0x10178, category: GeneralCategory::No },
    CategoryRange { start: 0x10179, end: 0x10189, category: GeneralCategory::So },
    CategoryRange { start: 0x1018A, end: 0x1018B, category: GeneralCategory::No },
    CategoryRange { start: 0x1018C, end: 0x1018E, category: GeneralCategory::So },
    CategoryRange { start: 0x10190, end: 0x1019C, category: GeneralCategory::So },
    CategoryRange { start: 0x101A0, end: 0x101A0, category: GeneralCategory::So },
    CategoryRange { start: 0x101D0, end: 0x101FC, category: GeneralCategory::So },
    CategoryRange { start: 0x101FD, end: 0x101FD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10280, end: 0x1029C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x102A0, end: 0x102D0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x102E0, end: 0x102E0, category: GeneralCategory::Mn },
    CategoryRange { start: 0x102E1, end: 0x102FB, category: GeneralCategory::No },
    CategoryRange { start: 0x10300, end: 0x1031F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10320, end: 0x10323, category: GeneralCategory::No },
    CategoryRange { start: 0x1032D, end: 0x10340, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10341, end: 0x10341, category: GeneralCategory::Nl },
    CategoryRange { start: 0x10342, end: 0x10349, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1034A, end: 0x1034A, category: GeneralCategory::Nl },
    CategoryRange { start: 0x10350, end: 0x10375, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10376, end: 0x1037A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10380, end: 0x1039D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1039F, end: 0x1039F, category: GeneralCategory::Po },
    CategoryRange { start: 0x103A0, end: 0x103C3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x103C8, end: 0x103CF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x103D0, end: 0x103D0, category: GeneralCategory::Po },
    CategoryRange { start: 0x103D1, end: 0x103D5, category: GeneralCategory::Nl },
    CategoryRange { start: 0x10400, end: 0x10427, category: GeneralCategory::Lu },
    CategoryRange { start: 0x10428, end: 0x1044F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x10450, end: 0x1049D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x104A0, end: 0x104A9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x104B0, end: 0x104D3, category: GeneralCategory::Lu },
    CategoryRange { start: 0x104D8, end: 0x104FB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x10500, end: 0x10527, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10530, end: 0x10563, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1056F, end: 0x1056F, category: GeneralCategory::Po },
    CategoryRange { start: 0x10570, end: 0x1057A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1057C, end: 0x1058A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1058C, end: 0x10592, category: GeneralCategory::Lu },
    CategoryRange { start: 0x10594, end: 0x10595, category: GeneralCategory::Lu },
    CategoryRange { start: 0x10597, end: 0x105A1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x105A3, end: 0x105B1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x105B3, end: 0x105B9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x105BB, end: 0x105BC, category: GeneralCategory::Ll },
    CategoryRange { start: 0x10600, end: 0x10736, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10740, end: 0x10755, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10760, end: 0x10767, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10780, end: 0x10785, category: GeneralCategory::Lm },
    CategoryRange { start: 0x10787, end: 0x107B0, category: GeneralCategory::Lm },
    CategoryRange { start: 0x107B2, end: 0x107BA, category: GeneralCategory::Lm },
    CategoryRange { start: 0x10800, end: 0x10805, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10808, end: 0x10808, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1080A, end: 0x10835, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10837, end: 0x10838, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1083C, end: 0x1083C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1083F, end: 0x10855, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10857, end: 0x10857, category: GeneralCategory::Po },
    CategoryRange { start: 0x10858, end: 0x1085F, category: GeneralCategory::No },
    CategoryRange { start: 0x10860, end: 0x10876, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10877, end: 0x10878, category: GeneralCategory::So },
    CategoryRange { start: 0x10879, end: 0x1087F, category: GeneralCategory::No },
    CategoryRange { start: 0x10880, end: 0x1089E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x108A7, end: 0x108AF, category: GeneralCategory::No },
    CategoryRange { start: 0x108E0, end: 0x108F2, category: GeneralCategory::Lo },
    CategoryRange { start: 0x108F4, end: 0x108F5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x108FB, end: 0x108FF, category: GeneralCategory::No },
    CategoryRange { start: 0x10900, end: 0x10915, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10916, end: 0x1091B, category: GeneralCategory::No },
    CategoryRange { start: 0x1091F, end: 0x1091F, category: GeneralCategory::Po },
    CategoryRange { start: 0x10920, end: 0x10939, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1093F, end: 0x1093F, category: GeneralCategory::Po },
    CategoryRange { start: 0x10980, end: 0x109B7, category: GeneralCategory::Lo },
    CategoryRange { start: 0x109BC, end: 0x109BD, category: GeneralCategory::No },
    CategoryRange { start: 0x109BE, end: 0x109BF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x109C0, end: 0x109CF, category: GeneralCategory::No },
    CategoryRange { start: 0x109D2, end: 0x109FF, category: GeneralCategory::No },
    CategoryRange { start: 0x10A00, end: 0x10A00, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10A01, end: 0x10A03, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10A05, end: 0x10A06, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10A0C, end: 0x10A0F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10A10, end: 0x10A13, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10A15, end: 0x10A17, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10A19, end: 0x10A35, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10A38, end: 0x10A3A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10A3F, end: 0x10A3F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10A40, end: 0x10A48, category: GeneralCategory::No },
    CategoryRange { start: 0x10A50, end: 0x10A58, category: GeneralCategory::Po },
    CategoryRange { start: 0x10A60, end: 0x10A7C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10A7D, end: 0x10A7E, category: GeneralCategory::No },
    CategoryRange { start: 0x10A7F, end: 0x10A7F, category: GeneralCategory::Po },
    CategoryRange { start: 0x10A80, end: 0x10A9C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10A9D, end: 0x10A9F, category: GeneralCategory::No },
    CategoryRange { start: 0x10AC0, end: 0x10AC7, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10AC8, end: 0x10AC8, category: GeneralCategory::So },
    CategoryRange { start: 0x10AC9, end: 0x10AE4, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10AE5, end: 0x10AE6, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10AEB, end: 0x10AEF, category: GeneralCategory::No },
    CategoryRange { start: 0x10AF0, end: 0x10AF6, category: GeneralCategory::Po },
    CategoryRange { start: 0x10B00, end: 0x10B35, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10B39, end: 0x10B3F, category: GeneralCategory::Po },
    CategoryRange { start: 0x10B40, end: 0x10B55, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10B58, end: 0x10B5F, category: GeneralCategory::No },
    CategoryRange { start: 0x10B60, end: 0x10B72, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10B78, end: 0x10B7F, category: GeneralCategory::No },
    CategoryRange { start: 0x10B80, end: 0x10B91, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10B99, end: 0x10B9C, category: GeneralCategory::Po },
    CategoryRange { start: 0x10BA9, end: 0x10BAF, category: GeneralCategory::No },
    CategoryRange { start: 0x10C00, end: 0x10C48, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10C80, end: 0x10CB2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x10CC0, end: 0x10CF2, category: GeneralCategory::Ll },
    CategoryRange { start: 0x10CFA, end: 0x10CFF, category: GeneralCategory::No },
    CategoryRange { start: 0x10D00, end: 0x10D23, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10D24, end: 0x10D27, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10D30, end: 0x10D39, category: GeneralCategory::Nd },
    CategoryRange { start: 0x10E60, end: 0x10E7E, category: GeneralCategory::No },
    CategoryRange { start: 0x10E80, end: 0x10EA9, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10EAB, end: 0x10EAC, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10EAD, end: 0x10EAD, category: GeneralCategory::Pd },
    CategoryRange { start: 0x10EB0, end: 0x10EB1, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10F00, end: 0x10F1C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10F1D, end: 0x10F26, category: GeneralCategory::No },
    CategoryRange { start: 0x10F27, end: 0x10F27, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10F30, end: 0x10F45, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10F46, end: 0x10F50, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10F51, end: 0x10F54, category: GeneralCategory::No },
    CategoryRange { start: 0x10F55, end: 0x10F59, category: GeneralCategory::Po },
    CategoryRange { start: 0x10F70, end: 0x10F81, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10F82, end: 0x10F85, category: GeneralCategory::Mn },
    CategoryRange { start: 0x10F86, end: 0x10F89, category: GeneralCategory::Po },
    CategoryRange { start: 0x10FB0, end: 0x10FC4, category: GeneralCategory::Lo },
    CategoryRange { start: 0x10FC5, end: 0x10FCB, category: GeneralCategory::No },
    CategoryRange { start: 0x10FE0, end: 0x10FF6, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11000, end: 0x11000, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11001, end: 0x11001, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11002, end: 0x11002, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11003, end: 0x11037, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11038, end: 0x11046, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11047, end: 0x1104D, category: GeneralCategory::Po },
    CategoryRange { start: 0x11052, end: 0x11065, category: GeneralCategory::No },
    CategoryRange { start: 0x11066, end: 0x1106F, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11070, end: 0x11070, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11071, end: 0x11072, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11073, end: 0x11074, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11075, end: 0x11075, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1107F, end: 0x11081, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11082, end: 0x11082, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11083, end: 0x110AF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x110B0, end: 0x110B2, category: GeneralCategory::Mc },
    CategoryRange { start: 0x110B3, end: 0x110B6, category: GeneralCategory::Mn },
    CategoryRange { start: 0x110B7, end: 0x110B8, category: GeneralCategory::Mc },
    CategoryRange { start: 0x110B9, end: 0x110BA, category: GeneralCategory::Mn },
    CategoryRange { start: 0x110BB, end: 0x110BC, category: GeneralCategory::Po },
    CategoryRange { start: 0x110BD, end: 0x110BD, category: GeneralCategory::Cf },
    CategoryRange { start: 0x110BE, end: 0x110C1, category: GeneralCategory::Po },
    CategoryRange { start: 0x110C2, end: 0x110C2, category: GeneralCategory::Mn },
    CategoryRange { start: 0x110CD, end: 0x110CD, category: GeneralCategory::Cf },
    CategoryRange { start: 0x110D0, end: 0x110E8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x110F0, end: 0x110F9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11100, end: 0x11102, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11103, end: 0x11126, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11127, end: 0x1112B, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1112C, end: 0x1112C, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1112D, end: 0x11134, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11136, end: 0x1113F, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11140, end: 0x11143, category: GeneralCategory::Po },
    CategoryRange { start: 0x11144, end: 0x11144, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11145, end: 0x11146, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11147, end: 0x11147, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11150, end: 0x11172, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11173, end: 0x11173, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11174, end: 0x11175, category: GeneralCategory::Po },
    CategoryRange { start: 0x11176, end: 0x11176, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11180, end: 0x11181, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11182, end: 0x11182, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11183, end: 0x111B2, category: GeneralCategory::Lo },
    CategoryRange { start: 0x111B3, end: 0x111B5, category: GeneralCategory::Mc },
    CategoryRange { start: 0x111B6, end: 0x111BE, category: GeneralCategory::Mn },
    CategoryRange { start: 0x111BF, end: 0x111C0, category: GeneralCategory::Mc },
    CategoryRange { start: 0x111C1, end: 0x111C4, category: GeneralCategory::Lo },
    CategoryRange { start: 0x111C5, end: 0x111C8, category: GeneralCategory::Po },
    CategoryRange { start: 0x111C9, end: 0x111CC, category: GeneralCategory::Mn },
    CategoryRange { start: 0x111CD, end: 0x111CD, category: GeneralCategory::Po },
    CategoryRange { start: 0x111CE, end: 0x111CE, category: GeneralCategory::Mc },
    CategoryRange { start: 0x111CF, end: 0x111CF, category: GeneralCategory::Mn },
    CategoryRange { start: 0x111D0, end: 0x111D9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x111DA, end: 0x111DA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x111DB, end: 0x111DB, category: GeneralCategory::Po },
    CategoryRange { start: 0x111DC, end: 0x111DC, category: GeneralCategory::Lo },
    CategoryRange { start: 0x111DD, end: 0x111DF, category: GeneralCategory::Po },
    CategoryRange { start: 0x111E1, end: 0x111F4, category: GeneralCategory::No },
    CategoryRange { start: 0x11200, end: 0x11211, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11213, end: 0x1122B, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1122C, end: 0x1122E, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1122F, end: 0x11231, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11232, end: 0x11233, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11234, end: 0x11234, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11235, end: 0x11235, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11236, end: 0x11237, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11238, end: 0x1123D, category: GeneralCategory::Po },
    CategoryRange { start: 0x1123E, end: 0x1123E, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11280, end: 0x11286, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11288, end: 0x11288, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1128A, end: 0x1128D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1128F, end: 0x1129D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1129F, end: 0x112A8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x112A9, end: 0x112A9, category: GeneralCategory::Po },
    CategoryRange { start: 0x112B0, end: 0x112DE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x112DF, end: 0x112DF, category: GeneralCategory::Mn },
    CategoryRange { start: 0x112E0, end: 0x112E2, category: GeneralCategory::Mc },
    CategoryRange { start: 0x112E3, end: 0x112EA, category: GeneralCategory::Mn },
    CategoryRange { start: 0x112F0, end: 0x112F9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11300, end: 0x11301, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11302, end: 0x11303, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11305, end: 0x1130C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1130F, end: 0x11310, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11313, end: 0x11328, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1132A, end: 0x11330, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11332, end: 0x11333, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11335, end: 0x11339, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1133B, end: 0x1133C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1133D, end: 0x1133D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1133E, end: 0x1133F, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11340, end: 0x11340, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11341, end: 0x11344, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11347, end: 0x11348, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1134B, end: 0x1134D, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11350, end: 0x11350, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11357, end: 0x11357, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1135D, end: 0x11361, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11362, end: 0x11363, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11366, end: 0x1136C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11370, end: 0x11374, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11400, end: 0x11434, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11435, end: 0x11437, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11438, end: 0x1143F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11440, end: 0x11441, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11442, end: 0x11444, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11445, end: 0x11445, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11446, end: 0x11446, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11447, end: 0x1144A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1144B, end: 0x1144F, category: GeneralCategory::Po },
    CategoryRange { start: 0x11450, end: 0x11459, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1145A, end: 0x1145B, category: GeneralCategory::Po },
    CategoryRange { start: 0x1145D, end: 0x1145D, category: GeneralCategory::Po },
    CategoryRange { start: 0x1145E, end: 0x1145E, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1145F, end: 0x11461, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11480, end: 0x114AF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x114B0, end: 0x114B2, category: GeneralCategory::Mc },
    CategoryRange { start: 0x114B3, end: 0x114B8, category: GeneralCategory::Mn },
    CategoryRange { start: 0x114B9, end: 0x114B9, category: GeneralCategory::Mc },
    CategoryRange { start: 0x114BA, end: 0x114BA, category: GeneralCategory::Mn },
    CategoryRange { start: 0x114BB, end: 0x114BE, category: GeneralCategory::Mc },
    CategoryRange { start: 0x114BF, end: 0x114C0, category: GeneralCategory::Mn },
    CategoryRange { start: 0x114C1, end: 0x114C1, category: GeneralCategory::Mc },
    CategoryRange { start: 0x114C2, end: 0x114C3, category: GeneralCategory::Mn },
    CategoryRange { start: 0x114C4, end: 0x114C5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x114C6, end: 0x114C6, category: GeneralCategory::Po },
    CategoryRange { start: 0x114C7, end: 0x114C7, category: GeneralCategory::Lo },
    CategoryRange { start: 0x114D0, end: 0x114D9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11580, end: 0x115AE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x115AF, end: 0x115B1, category: GeneralCategory::Mc },
    CategoryRange { start: 0x115B2, end: 0x115B5, category: GeneralCategory::Mn },
    CategoryRange { start: 0x115B8, end: 0x115BB, category: GeneralCategory::Mc },
    CategoryRange { start: 0x115BC, end: 0x115BD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x115BE, end: 0x115BE, category: GeneralCategory::Mc },
    CategoryRange { start: 0x115BF, end: 0x115C0, category: GeneralCategory::Mn },
    CategoryRange { start: 0x115C1, end: 0x115D7, category: GeneralCategory::Po },
    CategoryRange { start: 0x115D8, end: 0x115DB, category: GeneralCategory::Lo },
    CategoryRange { start: 0x115DC, end: 0x115DD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11600, end: 0x1162F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11630, end: 0x11632, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11633, end: 0x1163A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1163B, end: 0x1163C, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1163D, end: 0x1163D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1163E, end: 0x1163E, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1163F, end: 0x11640, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11641, end: 0x11643, category: GeneralCategory::Po },
    CategoryRange { start: 0x11644, end: 0x11644, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11650, end: 0x11659, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11660, end: 0x1166C, category: GeneralCategory::Po },
    CategoryRange { start: 0x11680, end: 0x116AA, category: GeneralCategory::Lo },
    CategoryRange { start: 0x116AB, end: 0x116AB, category: GeneralCategory::Mn },
    CategoryRange { start: 0x116AC, end: 0x116AC, category: GeneralCategory::Mc },
    CategoryRange { start: 0x116AD, end: 0x116AD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x116AE, end: 0x116AF, category: GeneralCategory::Mc },
    CategoryRange { start: 0x116B0, end: 0x116B5, category: GeneralCategory::Mn },
    CategoryRange { start: 0x116B6, end: 0x116B6, category: GeneralCategory::Mc },
    CategoryRange { start: 0x116B7, end: 0x116B7, category: GeneralCategory::Mn },
    CategoryRange { start: 0x116B8, end: 0x116B8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x116B9, end: 0x116B9, category: GeneralCategory::Po },
    CategoryRange { start: 0x116C0, end: 0x116C9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11700, end: 0x1171A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1171D, end: 0x1171F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11720, end: 0x11721, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11722, end: 0x11725, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11726, end: 0x11726, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11727, end: 0x1172B, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11730, end: 0x11739, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1173A, end: 0x1173B, category: GeneralCategory::No },
    CategoryRange { start: 0x1173C, end: 0x1173E, category: GeneralCategory::Po },
    CategoryRange { start: 0x1173F, end: 0x1173F, category: GeneralCategory::So },
    CategoryRange { start: 0x11740, end: 0x11746, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11800, end: 0x1182B, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1182C, end: 0x1182E, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1182F, end: 0x11837, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11838, end: 0x11838, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11839, end: 0x1183A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1183B, end: 0x1183B, category: GeneralCategory::Po },
    CategoryRange { start: 0x118A0, end: 0x118BF, category: GeneralCategory::Lu },
    CategoryRange { start: 0x118C0, end: 0x118DF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x118E0, end: 0x118E9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x118EA, end: 0x118F2, category: GeneralCategory::No },
    CategoryRange { start: 0x118FF, end: 0x11906, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11909, end: 0x11909, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1190C, end: 0x11913, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11915, end: 0x11916, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11918, end: 0x1192F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11930, end: 0x11935, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11937, end: 0x11938, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1193B, end: 0x1193C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1193D, end: 0x1193D, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1193E, end: 0x1193E, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1193F, end: 0x1193F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11940, end: 0x11940, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11941, end: 0x11941, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11942, end: 0x11942, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11943, end: 0x11943, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11944, end: 0x11946, category: GeneralCategory::Po },
    CategoryRange { start: 0x11950, end: 0x11959, category: GeneralCategory::Nd },
    CategoryRange { start: 0x119A0, end: 0x119A7, category: GeneralCategory::Lo },
    CategoryRange { start: 0x119AA, end: 0x119D0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x119D1, end: 0x119D3, category: GeneralCategory::Mc },
    CategoryRange { start: 0x119D4, end: 0x119D7, category: GeneralCategory::Mn },
    CategoryRange { start: 0x119DA, end: 0x119DB, category: GeneralCategory::Mn },
    CategoryRange { start: 0x119DC, end: 0x119DF, category: GeneralCategory::Mc },
    CategoryRange { start: 0x119E0, end: 0x119E0, category: GeneralCategory::Mn },
    CategoryRange { start: 0x119E1, end: 0x119E1, category: GeneralCategory::Lo },
    CategoryRange { start: 0x119E2, end: 0x119E2, category: GeneralCategory::Po },
    CategoryRange { start: 0x119E3, end: 0x119E3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x119E4, end: 0x119E4, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11A00, end: 0x11A00, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11A01, end: 0x11A0A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11A0B, end: 0x11A32, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11A33, end: 0x11A38, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11A39, end: 0x11A39, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11A3A, end: 0x11A3A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11A3B, end: 0x11A3E, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11A3F, end: 0x11A46, category: GeneralCategory::Po },
    CategoryRange { start: 0x11A47, end: 0x11A47, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11A50, end: 0x11A50, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11A51, end: 0x11A56, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11A57, end: 0x11A58, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11A59, end: 0x11A5B, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11A5C, end: 0x11A89, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11A8A, end: 0x11A96, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11A97, end: 0x11A97, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11A98, end: 0x11A99, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11A9A, end: 0x11A9C, category: GeneralCategory::Po },
    CategoryRange { start: 0x11A9D, end: 0x11A9D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11A9E, end: 0x11AA2, category: GeneralCategory::Po },
    CategoryRange { start: 0x11AB0, end: 0x11AF8, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11C00, end: 0x11C08, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11C0A, end: 0x11C2E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11C2F, end: 0x11C2F, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11C30, end: 0x11C36, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11C38, end: 0x11C3D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11C3E, end: 0x11C3E, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11C3F, end: 0x11C3F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11C40, end: 0x11C40, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11C41, end: 0x11C45, category: GeneralCategory::Po },
    CategoryRange { start: 0x11C50, end: 0x11C59, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11C5A, end: 0x11C6C, category: GeneralCategory::No },
    CategoryRange { start: 0x11C70, end: 0x11C71, category: GeneralCategory::Po },
    CategoryRange { start: 0x11C72, end: 0x11C8F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11C92, end: 0x11CA7, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11CA9, end: 0x11CA9, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11CAA, end: 0x11CB0, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11CB1, end: 0x11CB1, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11CB2, end: 0x11CB3, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11CB4, end: 0x11CB4, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11CB5, end: 0x11CB6, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11D00, end: 0x11D06, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11D08, end: 0x11D09, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11D0B, end: 0x11D30, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11D31, end: 0x11D36, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11D3A, end: 0x11D3A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11D3C, end: 0x11D3D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11D3F, end: 0x11D45, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11D46, end: 0x11D46, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11D47, end: 0x11D47, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11D50, end: 0x11D59, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11D60, end: 0x11D65, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11D67, end: 0x11D68, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11D6A, end: 0x11D89, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11D8A, end: 0x11D8E, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11D90, end: 0x11D91, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11D93, end: 0x11D94, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11D95, end: 0x11D95, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11D96, end: 0x11D96, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11D97, end: 0x11D97, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11D98, end: 0x11D98, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11DA0, end: 0x11DA9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x11EE0, end: 0x11EF2, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11EF3, end: 0x11EF4, category: GeneralCategory::Mn },
    CategoryRange { start: 0x11EF5, end: 0x11EF6, category: GeneralCategory::Mc },
    CategoryRange { start: 0x11EF7, end: 0x11EF8, category: GeneralCategory::Po },
    CategoryRange { start: 0x11FB0, end: 0x11FB0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x11FC0, end: 0x11FD4, category: GeneralCategory::No },
    CategoryRange { start: 0x11FD5, end: 0x11FDC, category: GeneralCategory::So },
    CategoryRange { start: 0x11FDD, end: 0x11FE0, category: GeneralCategory::Sc },
    CategoryRange { start: 0x11FE1, end: 0x11FF1, category: GeneralCategory::So },
    CategoryRange { start: 0x11FFF, end: 0x11FFF, category: GeneralCategory::Po },
    CategoryRange { start: 0x12000, end: 0x12399, category: GeneralCategory::Lo },
    CategoryRange { start: 0x12400, end: 0x1246E, category: GeneralCategory::Nl },
    CategoryRange { start: 0x12470, end: 0x12474, category: GeneralCategory::Po },
    CategoryRange { start: 0x12480, end: 0x12543, category: GeneralCategory::Lo },
    CategoryRange { start: 0x12F90, end: 0x12FF0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x12FF1, end: 0x12FF2, category: GeneralCategory::Po },
    CategoryRange { start: 0x13000, end: 0x1342E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x13430, end: 0x13438, category: GeneralCategory::Cf },
    CategoryRange { start: 0x14400, end: 0x14646, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16800, end: 0x16A38, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16A40, end: 0x16A5E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16A60, end: 0x16A69, category: GeneralCategory::Nd },
    CategoryRange { start: 0x16A6E, end: 0x16A6F, category: GeneralCategory::Po },
    CategoryRange { start: 0x16A70, end: 0x16ABE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16AC0, end: 0x16AC9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x16AD0, end: 0x16AED, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16AF0, end: 0x16AF4, category: GeneralCategory::Mn },
    CategoryRange { start: 0x16AF5, end: 0x16AF5, category: GeneralCategory::Po },
    CategoryRange { start: 0x16B00, end: 0x16B2F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16B30, end: 0x16B36, category: GeneralCategory::Mn },
    CategoryRange { start: 0x16B37, end: 0x16B3B, category: GeneralCategory::Po },
    CategoryRange { start: 0x16B3C, end: 0x16B3F, category: GeneralCategory::So },
    CategoryRange { start: 0x16B40, end: 0x16B43, category: GeneralCategory::Lm },
    CategoryRange { start: 0x16B44, end: 0x16B44, category: GeneralCategory::Po },
    CategoryRange { start: 0x16B45, end: 0x16B45, category: GeneralCategory::So },
    CategoryRange { start: 0x16B50, end: 0x16B59, category: GeneralCategory::Nd },
    CategoryRange { start: 0x16B5B, end: 0x16B61, category: GeneralCategory::No },
    CategoryRange { start: 0x16B63, end: 0x16B77, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16B7D, end: 0x16B8F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16E40, end: 0x16E5F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x16E60, end: 0x16E7F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x16E80, end: 0x16E96, category: GeneralCategory::No },
    CategoryRange { start: 0x16E97, end: 0x16E9A, category: GeneralCategory::Po },
    CategoryRange { start: 0x16F00, end: 0x16F4A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16F4F, end: 0x16F4F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x16F50, end: 0x16F50, category: GeneralCategory::Lo },
    CategoryRange { start: 0x16F51, end: 0x16F87, category: GeneralCategory::Mc },
    CategoryRange { start: 0x16F8F, end: 0x16F92, category: GeneralCategory::Mn },
    CategoryRange { start: 0x16F93, end: 0x16F9F, category: GeneralCategory::Lm },
    CategoryRange { start: 0x16FE0, end: 0x16FE1, category: GeneralCategory::Lm },
    CategoryRange { start: 0x16FE2, end: 0x16FE2, category: GeneralCategory::Po },
    CategoryRange { start: 0x16FE3, end: 0x16FE3, category: GeneralCategory::Lm },
    CategoryRange { start: 0x16FE4, end: 0x16FE4, category: GeneralCategory::Mn },
    CategoryRange { start: 0x16FF0, end: 0x16FF1, category: GeneralCategory::Mc },
    CategoryRange { start: 0x17000, end: 0x187F7, category: GeneralCategory::Lo },
    CategoryRange { start: 0x18800, end: 0x18CD5, category: GeneralCategory::Lo },
    CategoryRange { start: 0x18D00, end: 0x18D08, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1AFF0, end: 0x1AFF3, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1AFF5, end: 0x1AFFB, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1AFFD, end: 0x1AFFE, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1B000, end: 0x1B122, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1B150, end: 0x1B152, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1B164, end: 0x1B167, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1B170, end: 0x1B2FB, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1BC00, end: 0x1BC6A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1BC70, end: 0x1BC7C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1BC80, end: 0x1BC88, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1BC90, end: 0x1BC99, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1BC9C, end: 0x1BC9C, category: GeneralCategory::So },
    CategoryRange { start: 0x1BC9D, end: 0x1BC9E, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1BC9F, end: 0x1BC9F, category: GeneralCategory::Po },
    CategoryRange { start: 0x1BCA0, end: 0x1BCA3, category: GeneralCategory::Cf },
    CategoryRange { start: 0x1CF00, end: 0x1CF2D, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1CF30, end: 0x1CF46, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1CF50, end: 0x1CFC3, category: GeneralCategory::So },
    CategoryRange { start: 0x1D000, end: 0x1D0F5, category: GeneralCategory::So },
    CategoryRange { start: 0x1D100, end: 0x1D126, category: GeneralCategory::So },
    CategoryRange { start: 0x1D129, end: 0x1D164, category: GeneralCategory::So },
    CategoryRange { start: 0x1D165, end: 0x1D166, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1D167, end: 0x1D169, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1D16A, end: 0x1D16C, category: GeneralCategory::So },
    CategoryRange { start: 0x1D16D, end: 0x1D172, category: GeneralCategory::Mc },
    CategoryRange { start: 0x1D173, end: 0x1D17A, category: GeneralCategory::Cf },
    CategoryRange { start: 0x1D17B, end: 0x1D182, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1D183, end: 0x1D184, category: GeneralCategory::So },
    CategoryRange { start: 0x1D185, end: 0x1D18B, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1D18C, end: 0x1D1A9, category: GeneralCategory::So },
    CategoryRange { start: 0x1D1AA, end: 0x1D1AD, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1D1AE, end: 0x1D1EA, category: GeneralCategory::So },
    CategoryRange { start: 0x1D200, end: 0x1D241, category: GeneralCategory::So },
    CategoryRange { start: 0x1D242, end: 0x1D244, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1D245, end: 0x1D245, category: GeneralCategory::So },
    CategoryRange { start: 0x1D2E0, end: 0x1D2F3, category: GeneralCategory::No },
    CategoryRange { start: 0x1D300, end: 0x1D356, category: GeneralCategory::So },
    CategoryRange { start: 0x1D360, end: 0x1D378, category: GeneralCategory::No },
    CategoryRange { start: 0x1D400, end: 0x1D419, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D41A, end: 0x1D433, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D434, end: 0x1D44D, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D44E, end: 0x1D454, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D456, end: 0x1D467, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D468, end: 0x1D481, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D482, end: 0x1D49B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D49C, end: 0x1D49C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D49E, end: 0x1D49F, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D4A2, end: 0x1D4A2, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D4A5, end: 0x1D4A6, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D4A9, end: 0x1D4AC, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D4AE, end: 0x1D4B5, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D4B6, end: 0x1D4B9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D4BB, end: 0x1D4BB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D4BD, end: 0x1D4C3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D4C5, end: 0x1D4CF, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D4D0, end: 0x1D4E9, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D4EA, end: 0x1D503, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D504, end: 0x1D505, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D507, end: 0x1D50A, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D50D, end: 0x1D514, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D516, end: 0x1D51C, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D51E, end: 0x1D537, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D538, end: 0x1D539, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D53B, end: 0x1D53E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D540, end: 0x1D544, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D546, end: 0x1D546, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D54A, end: 0x1D550, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D552, end: 0x1D56B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D56C, end: 0x1D585, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D586, end: 0x1D59F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D5A0, end: 0x1D5B9, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D5BA, end: 0x1D5D3, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D5D4, end: 0x1D5ED, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D5EE, end: 0x1D607, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D608, end: 0x1D621, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D622, end: 0x1D63B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D63C, end: 0x1D655, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D656, end: 0x1D66F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D670, end: 0x1D689, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D68A, end: 0x1D6A5, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D6A8, end: 0x1D6C0, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D6C1, end: 0x1D6C1, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D6C2, end: 0x1D6DA, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D6DB, end: 0x1D6DB, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D6DC, end: 0x1D6E1, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D6E2, end: 0x1D6FA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D6FB, end: 0x1D6FB, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D6FC, end: 0x1D714, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D715, end: 0x1D715, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D716, end: 0x1D71B, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D71C, end: 0x1D734, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D735, end: 0x1D735, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D736, end: 0x1D74E, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D74F, end: 0x1D74F, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D750, end: 0x1D755, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D756, end: 0x1D76E, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D76F, end: 0x1D76F, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D770, end: 0x1D788, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D789, end: 0x1D789, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D78A, end: 0x1D78F, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D790, end: 0x1D7A8, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D7A9, end: 0x1D7A9, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D7AA, end: 0x1D7C2, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D7C3, end: 0x1D7C3, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1D7C4, end: 0x1D7C9, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D7CA, end: 0x1D7CA, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1D7CB, end: 0x1D7CB, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1D7CE, end: 0x1D7FF, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1D800, end: 0x1D9FF, category: GeneralCategory::So },
    CategoryRange { start: 0x1DA00, end: 0x1DA36, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1DA37, end: 0x1DA3A, category: GeneralCategory::So },
    CategoryRange { start: 0x1DA3B, end: 0x1DA6C, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1DA6D, end: 0x1DA74, category: GeneralCategory::So },
    CategoryRange { start: 0x1DA75, end: 0x1DA75, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1DA76, end: 0x1DA83, category: GeneralCategory::So },
    CategoryRange { start: 0x1DA84, end: 0x1DA84, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1DA85, end: 0x1DA86, category: GeneralCategory::So },
    CategoryRange { start: 0x1DA87, end: 0x1DA8B, category: GeneralCategory::Po },
    CategoryRange { start: 0x1DA9B, end: 0x1DA9F, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1DAA1, end: 0x1DAAF, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1DF00, end: 0x1DF09, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1DF0A, end: 0x1DF0A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1DF0B, end: 0x1DF1E, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E000, end: 0x1E006, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E008, end: 0x1E018, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E01B, end: 0x1E021, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E023, end: 0x1E024, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E026, end: 0x1E02A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E100, end: 0x1E12C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1E130, end: 0x1E136, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E137, end: 0x1E13D, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1E140, end: 0x1E149, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1E14E, end: 0x1E14E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1E14F, end: 0x1E14F, category: GeneralCategory::So },
    CategoryRange { start: 0x1E290, end: 0x1E2AD, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1E2AE, end: 0x1E2AE, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E2C0, end: 0x1E2EB, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1E2EC, end: 0x1E2EF, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E2F0, end: 0x1E2F9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1E2FF, end: 0x1E2FF, category: GeneralCategory::Sc },
    CategoryRange { start: 0x1E7E0, end: 0x1E7E6, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1E7E8, end: 0x1E7EB, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1E7ED, end: 0x1E7EE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1E7F0, end: 0x1E7FE, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1E800, end: 0x1E8C4, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1E8C7, end: 0x1E8CF, category: GeneralCategory::No },
    CategoryRange { start: 0x1E8D0, end: 0x1E8D6, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E900, end: 0x1E921, category: GeneralCategory::Lu },
    CategoryRange { start: 0x1E922, end: 0x1E943, category: GeneralCategory::Ll },
    CategoryRange { start: 0x1E944, end: 0x1E94A, category: GeneralCategory::Mn },
    CategoryRange { start: 0x1E94B, end: 0x1E94B, category: GeneralCategory::Lm },
    CategoryRange { start: 0x1E950, end: 0x1E959, category: GeneralCategory::Nd },
    CategoryRange { start: 0x1E95E, end: 0x1E95F, category: GeneralCategory::Po },
    CategoryRange { start: 0x1EC71, end: 0x1ECAB, category: GeneralCategory::No },
    CategoryRange { start: 0x1ECAC, end: 0x1ECAC, category: GeneralCategory::So },
    CategoryRange { start: 0x1ECAD, end: 0x1ECAF, category: GeneralCategory::No },
    CategoryRange { start: 0x1ECB0, end: 0x1ECB0, category: GeneralCategory::Sc },
    CategoryRange { start: 0x1ECB1, end: 0x1ECB4, category: GeneralCategory::No },
    CategoryRange { start: 0x1ED01, end: 0x1ED2D, category: GeneralCategory::No },
    CategoryRange { start: 0x1ED2E, end: 0x1ED2E, category: GeneralCategory::So },
    CategoryRange { start: 0x1ED2F, end: 0x1ED3D, category: GeneralCategory::No },
    CategoryRange { start: 0x1EE00, end: 0x1EE03, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE05, end: 0x1EE1F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE21, end: 0x1EE22, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE24, end: 0x1EE24, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE27, end: 0x1EE27, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE29, end: 0x1EE32, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE34, end: 0x1EE37, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE39, end: 0x1EE39, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE3B, end: 0x1EE3B, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE42, end: 0x1EE42, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE47, end: 0x1EE47, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE49, end: 0x1EE49, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE4B, end: 0x1EE4B, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE4D, end: 0x1EE4F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE51, end: 0x1EE52, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE54, end: 0x1EE54, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE57, end: 0x1EE57, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE59, end: 0x1EE59, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE5B, end: 0x1EE5B, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE5D, end: 0x1EE5D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE5F, end: 0x1EE5F, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE61, end: 0x1EE62, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE64, end: 0x1EE64, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE67, end: 0x1EE6A, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE6C, end: 0x1EE72, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE74, end: 0x1EE77, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE79, end: 0x1EE7C, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE7E, end: 0x1EE7E, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE80, end: 0x1EE89, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EE8B, end: 0x1EE9B, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EEA1, end: 0x1EEA3, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EEA5, end: 0x1EEA9, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EEAB, end: 0x1EEBB, category: GeneralCategory::Lo },
    CategoryRange { start: 0x1EEF0, end: 0x1EEF1, category: GeneralCategory::Sm },
    CategoryRange { start: 0x1F000, end: 0x1F02B, category: GeneralCategory::So },
    CategoryRange { start: 0x1F030, end: 0x1F093, category: GeneralCategory::So },
    CategoryRange { start: 0x1F0A0, end: 0x1F0AE, category: GeneralCategory::So },
    CategoryRange { start: 0x1F0B1, end: 0x1F0BF, category: GeneralCategory::So },
    CategoryRange { start: 0x1F0C1, end: 0x1F0CF, category: GeneralCategory::So },
    CategoryRange { start: 0x1F0D1, end: 0x1F0F5, category: GeneralCategory::So },
    CategoryRange { start: 0x1F100, end: 0x1F10C, category: GeneralCategory::No },
    CategoryRange { start: 0x1F10D, end: 0x1F1AD, category: GeneralCategory::So },
    CategoryRange { start: 0x1F1E6, end: 0x1F202, category: GeneralCategory::So },
    CategoryRange { start: 0x1F210, end: 0x1F23B, category: GeneralCategory::So },
    CategoryRange { start: 0x1F240, end: 0x1F248, category: GeneralCategory::So },
    CategoryRange { start: 0x1F250, end: 0x1F251, category: GeneralCategory::So },
    CategoryRange { start: 0x1F260, end: 0x1F265, category: GeneralCategory::So },
    CategoryRange { start: 0x1F300, end: 0x1F3FA, category: GeneralCategory::So },
    CategoryRange { start: 0x1F3FB, end: 0x1F3FF, category: GeneralCategory::Sk },
    CategoryRange { start: 0x1F400, end: 0x1F6D7, category: GeneralCategory::So },
    CategoryRange { start: 0x1F6DD, end: 0x1F6EC, category: GeneralCategory::So },
    CategoryRange { start: 0x1F6F0, end: 0x1F6FC, category: GeneralCategory::So },
    CategoryRange { start: 0x1F700, end: 0x1F773, category: GeneralCategory::So },
    CategoryRange { start: 0x1F780, end: 0x1F7D8, category: GeneralCategory::So },
    CategoryRange { start: 0x1F7E0, end: 0x1F7EB, category: GeneralCategory::So },
    CategoryRange { start: 0x1F7F0, end: 0x1F7F0, category: GeneralCategory::So },
    CategoryRange { start: 0x1F800, end: 0x1F80B, category: GeneralCategory::So },
    CategoryRange { start: 0x1F810, end: 0x1F847, category: GeneralCategory::So },
    CategoryRange { start: 0x1F850, end: 0x1F859, category: GeneralCategory::So },
    CategoryRange { start: 0x1F860, end: 0x1F887, category: GeneralCategory::So },
    CategoryRange { start: 0x1F890, end: 0x1F8AD, category: GeneralCategory::So },
    CategoryRange { start: 0x1F8B0, end: 0x1F8B1, category: GeneralCategory::So },
    CategoryRange { start: 0x1F900, end: 0x1FA53, category: GeneralCategory::So },
    CategoryRange { start: 0x1FA60, end: 0x1FA6D, category: GeneralCategory::So },
    CategoryRange { start: 0x1FA70, end: 0x1FA74, category: GeneralCategory::So },
    CategoryRange { start: 0x1FA78, end: 0x1FA7C, category: GeneralCategory::So },
    CategoryRange { start: 0x1FA80, end: 0x1FA86, category: GeneralCategory::So },
    CategoryRange { start: 0x1FA90, end: 0x1FAAC, category: GeneralCategory::So },
    CategoryRange { start: 0x1FAB0, end: 0x1FABA, category: GeneralCategory::So },
    CategoryRange { start: 0x1FAC0, end: 0x1FAC5, category: GeneralCategory::So },
    CategoryRange { start: 0x1FAD0, end: 0x1FAD9, category: GeneralCategory::So },
    CategoryRange { start: 0x1FAE0, end: 0x1FAE7, category: GeneralCategory::So },
    CategoryRange { start: 0x1FAF0, end: 0x1FAF6, category: GeneralCategory::So },
    CategoryRange { start: 0x1FB00, end: 0x1FB92, category: GeneralCategory::So },
    CategoryRange { start: 0x1FB94, end: 0x1FBCA, category: GeneralCategory::So },
    CategoryRange { start: 0x1FBF0, end: 0x1FBF9, category: GeneralCategory::Nd },
    CategoryRange { start: 0x20000, end: 0x2A6DF, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2A700, end: 0x2B738, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2B740, end: 0x2B81D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2B820, end: 0x2CEA1, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2CEB0, end: 0x2EBE0, category: GeneralCategory::Lo },
    CategoryRange { start: 0x2F800, end: 0x2FA1D, category: GeneralCategory::Lo },
    CategoryRange { start: 0x30000, end: 0x3134A, category: GeneralCategory::Lo },
    CategoryRange { start: 0xE0001, end: 0xE0001, category: GeneralCategory::Cf },
    CategoryRange { start: 0xE0020, end: 0xE007F, category: GeneralCategory::Cf },
    CategoryRange { start: 0xE0100, end: 0xE01EF, category: GeneralCategory::Mn },
    CategoryRange { start: 0xF0000, end: 0xFFFFD, category: GeneralCategory::Co },
    CategoryRange { start: 0x100000, end: 0x10FFFD, category: GeneralCategory::Co },
];
