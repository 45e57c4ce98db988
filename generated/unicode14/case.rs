// Generated by `cargo run -p xtask -- unicode` from UCD 14.0.0 data. Do not edit.
pub static SIMPLE_CASE_MAPPINGS: &[(u32, u32, u32, u32)] = &[
    (0x0041, 0x0041, 0x0061, 0x0041),
    (0x0042, 0x0042, 0x0062, 0x0042),
    (0x0043, 0x0043, 0x0063, 0x0043),
    (0x0044, 0x0044, 0x0064, 0x0044),
    (0x0045, 0x0045, 0x0065, 0x0045),
    (0x0046, 0x0046, 0x0066, 0x0046),
    (0x0047, 0x0047, 0x0067, 0x0047),
    (0x0048, 0x0048, 0x0068, 0x0048),
    (0x0049, 0x0049, 0x0069, 0x0049),
    (0x004A, 0x004A, 0x006A, 0x004A),
    (0x004B, 0x004B, 0x006B, 0x004B),
    (0x004C, 0x004C, 0x006C, 0x004C),
    (0x004D, 0x004D, 0x006D, 0x004D),
    (0x004E, 0x004E, 0x006E, 0x004E),
    (0x004F, 0x004F, 0x006F, 0x004F),
    (0x0050, 0x0050, 0x0070, 0x0050),
    (0x0051, 0x0051, 0x0071, 0x0051),
    (0x0052, 0x0052, 0x0072, 0x0052),
    (0x0053, 0x0053, 0x0073, 0x0053),
    (0x0054, 0x0054, 0x0074, 0x0054),
    (0x0055, 0x0055, 0x0075, 0x0055),
    (0x0056, 0x0056, 0x0076, 0x0056),
    (0x0057, 0x0057, 0x0077, 0x0057),
    (0x0058, 0x0058, 0x0078, 0x0058),
    (0x0059, 0x0059, 0x0079, 0x0059),
    (0x005A, 0x005A, 0x007A, 0x005A),
    (0x0061, 0x0041, 0x0061, 0x0041),
    (0x0062, 0x0042, 0x0062, 0x0042),
    (0x0063, 0x0043, 0x0063, 0x0043),
    (0x0064, 0x0044, 0x0064, 0x0044),
    (0x0065, 0x0045, 0x0065, 0x0045),
    (0x0066, 0x0046, 0x0066, 0x0046),
    (0x0067, 0x0047, 0x0067, 0x0047),
    (0x0068, 0x0048, 0x0068, 0x0048),
    (0x0069, 0x0049, 0x0069, 0x0049),
    (0x006A, 0x004A, 0x006A, 0x004A),
    (0x006B, 0x004B, 0x006B, 0x004B),
    (0x006C, 0x004C, 0x006C, 0x004C),
    (0x006D, 0x004D, 0x006D, 0x004D),
    (0x006E, 0x004E, 0x006E, 0x004E),
    (0x006F, 0x004F, 0x006F, 0x004F),
    (0x0070, 0x0050, 0x0070, 0x0050),
    (0x0071, 0x0051, 0x0071, 0x0051),
    (0x0072, 0x0052, 0x0072, 0x0052),
    (0x0073, 0x0053, 0x0073, 0x0053),
    (0x0074, 0x0054, 0x0074, 0x0054),
    (0x0075, 0x0055, 0x0075, 0x0055),
    (0x0076, 0x0056, 0x0076, 0x0056),
    (0x0077, 0x0057, 0x0077, 0x0057),
    (0x0078, 0x0058, 0x0078, 0x0058),
    (0x0079, 0x0059, 0x0079, 0x0059),
    (0x007A, 0x005A, 0x007A, 0x005A),
    (0x00B5, 0x039C, 0x00B5, 0x039C),
    (0x00C0, 0x00C0, 0x00E0, 0x00C0),
    (0x00C1, 0x00C1, 0x00E1, 0x00C1),
    (0x00C2, 0x00C2, 0x00E2, 0x00C2),
    (0x00C3, 0x00C3, 0x00E3, 0x00C3),
    (0x00C4, 0x00C4, 0x00E4, 0x00C4),
    (0x00C5, 0x00C5, 0x00E5, 0x00C5),
    (0x00C6, 0x00C6, 0x00E6, 0x00C6),
    (0x00C7, 0x00C7, 0x00E7, 0x00C7),
    (0x00C8, 0x00C8, 0x00E8, 0x00C8),
    (0x00C9, 0x00C9, 0x00E9, 0x00C9),
    (0x00CA, 0x00CA, 0x00EA, 0x00CA),
    (0x00CB, 0x00CB, 0x00EB, 0x00CB),
    (0x00CC, 0x00CC, 0x00EC, 0x00CC),
    (0x00CD, 0x00CD, 0x00ED, 0x00CD),
    (0x00CE, 0x00CE, 0x00EE, 0x00CE),
    (0x00CF, 0x00CF, 0x00EF, 0x00CF),
    (0x00D0, 0x00D0, 0x00F0, 0x00D0),
    (0x00D1, 0x00D1, 0x00F1, 0x00D1),
    (0x00D2, 0x00D2, 0x00F2, 0x00D2),
    (0x00D3, 0x00D3, 0x00F3, 0x00D3),
    (0x00D4, 0x00D4, 0x00F4, 0x00D4),
    (0x00D5, 0x00D5, 0x00F5, 0x00D5),
    (0x00D6, 0x00D6, 0x00F6, 0x00D6),
    (0x00D8, 0x00D8, 0x00F8, 0x00D8),
    (0x00D9, 0x00D9, 0x00F9, 0x00D9),
    (0x00DA, 0x00DA, 0x00FA, 0x00DA),
    (0x00DB, 0x00DB, 0x00FB, 0x00DB),
    (0x00DC, 0x00DC, 0x00FC, 0x00DC),
    (0x00DD, 0x00DD, 0x00FD, 0x00DD),
    (0x00DE, 0x00DE, 0x00FE, 0x00DE),
    (0x00E0, 0x00C0, 0x00E0, 0x00C0),
    (0x00E1, 0x00C1, 0x00E1, 0x00C1),
    (0x00E2, 0x00C2, 0x00E2, 0x00C2),
    (0x00E3, 0x00C3, 0x00E3, 0x00C3),
    (0x00E4, 0x00C4, 0x00E4, 0x00C4),
    (0x00E5, 0x00C5, 0x00E5, 0x00C5),
    (0x00E6, 0x00C6, 0x00E6, 0x00C6),
    (0x00E7, 0x00C7, 0x00E7, 0x00C7),
    (0x00E8, 0x00C8, 0x00E8, 0x00C8),
    (0x00E9, 0x00C9, 0x00E9, 0x00C9),
    (0x00EA, 0x00CA, 0x00EA, 0x00CA),
    (0x00EB, 0x00CB, 0x00EB, 0x00CB),
    (0x00EC, 0x00CC, 0x00EC, 0x00CC),
    (0x00ED, 0x00CD, 0x00ED, 0x00CD),
    (0x00EE, 0x00CE, 0x00EE, 0x00CE),
    (0x00EF, 0x00CF, 0x00EF, 0x00CF),
    (0x00F0, 0x00D0, 0x00F0, 0x00D0),
    (0x00F1, 0x00D1, 0x00F1, 0x00D1),
    (0x00F2, 0x00D2, 0x00F2, 0x00D2),
    (0x00F3, 0x00D3, 0x00F3, 0x00D3),
    (0x00F4, 0x00D4, 0x00F4, 0x00D4),
    (0x00F5, 0x00D5, 0x00F5, 0x00D5),
    (0x00F6, 0x00D6, 0x00F6, 0x00D6),
    (0x00F8, 0x00D8, 0x00F8, 0x00D8),
    (0x00F9, 0x00D9, 0x00F9, 0x00D9),
    (0x00FA, 0x00DA, 0x00FA, 0x00DA),
    (0x00FB, 0x00DB, 0x00FB, 0x00DB),
    (0x00FC, 0x00DC, 0x00FC, 0x00DC),
    (0x00FD, 0x00DD, 0x00FD, 0x00DD),
    (0x00FE, 0x00DE, 0x00FE, 0x00DE),
    (0x00FF, 0x0178, 0x00FF, 0x0178),
    (0x0100, 0x0100, 0x0101, 0x0100),
    (0x0101, 0x0100, 0x0101, 0x0100),
    (0x0102, 0x0102, 0x0103, 0x0102),
    (0x0103, 0x0102, 0x0103, 0x0102),
    (0x0104, 0x0104, 0x0105, 0x0104),
    (0x0105, 0x0104, 0x0105, 0x0104),
    (0x0106, 0x0106, 0x0107, 0x0106),
    (0x0107, 0x0106, 0x0107, 0x0106),
    (0x0108, 0x0108, 0x0109, 0x0108),
    (0x0109, 0x0108, 0x0109, 0x0108),
    (0x010A, 0x010A, 0x010B, 0x010A),
    (0x010B, 0x010A, 0x010B, 0x010A),
    (0x010C, 0x010C, 0x010D, 0x010C),
    (0x010D, 0x010C, 0x010D, 0x010C),
    (0x010E, 0x010E, 0x010F, 0x010E),
    (0x010F, 0x010E, 0x010F, 0x010E),
    (0x0110, 0x0110, 0x0111, 0x0110),
    (0x0111, 0x0110, 0x0111, 0x0110),
    (0x0112, 0x0112, 0x0113, 0x0112),
    (0x0113, 0x0112, 0x0113, 0x0112),
    (0x0114, 0x0114, 0x0115, 0x0114),
    (0x0115, 0x0114, 0x0115, 0x0114),
    (0x0116, 0x0116, 0x0117, 0x0116),
    (0x0117, 0x0116, 0x0117, 0x0116),
    (0x0118, 0x0118, 0x0119, 0x0118),
    (0x0119, 0x0118, 0x0119, 0x0118),
    (0x011A, 0x011A, 0x011B, 0x011A),
    (0x011B, 0x011A, 0x011B, 0x011A),
    (0x011C, 0x011C, 0x011D, 0x011C),
    (0x011D, 0x011C, 0x011D, 0x011C),
    (0x011E, 0x011E, 0x011F, 0x011E),
    (0x011F, 0x011E, 0x011F, 0x011E),
    (0x0120, 0x0120, 0x0121, 0x0120),
    (0x0121, 0x0120, 0x0121, 0x0120),
    (0x0122, 0x0122, 0x0123, 0x0122),
    (0x0123, 0x0122, 0x0123, 0x0122),
    (0x0124, 0x0124, 0x0125, 0x0124),
    (0x0125, 0x0124, 0x0125, 0x0124),
    (0x0126, 0x0126, 0x0127, 0x0126),
    (0x0127, 0x0126, 0x0127, 0x0126),
    (0x0128, 0x0128, 0x0129, 0x0128),
    (0x0129, 0x0128, 0x0129, 0x0128),
    (0x012A, 0x012A, 0x012B, 0x012A),
    (0x012B, 0x012A, 0x012B, 0x012A),
    (0x012C, 0x012C, 0x012D, 0x012C),
    (0x012D, 0x012C, 0x012D, 0x012C),
    (0x012E, 0x012E, 0x012F, 0x012E),
    (0x012F, 0x012E, 0x012F, 0x012E),
    (0x0130, 0x0130, 0x0069, 0x0130),
    (0x0131, 0x0049, 0x0131, 0x0049),
    (0x0132, 0x0132, 0x0133, 0x0132),
    (0x0133, 0x0132, 0x0133, 0x0132),
    (0x0134, 0x0134, 0x0135, 0x0134),
    (0x0135, 0x0134, 0x0135, 0x0134),
    (0x0136, 0x0136, 0x0137, 0x0136),
    (0x0137, 0x0136, 0x0137, 0x0136),
    (0x0139, 0x0139, 0x013A, 0x0139),
    (0x013A, 0x0139, 0x013A, 0x0139),
    (0x013B, 0x013B, 0x013C, 0x013B),
    (0x013C, 0x013B, 0x013C, 0x013B),
    (0x013D, 0x013D, 0x013E, 0x013D),
    (0x013E, 0x013D, 0x013E, 0x013D),
    (0x013F, 0x013F, 0x0140, 0x013F),
    (0x0140, 0x013F, 0x0140, 0x013F),
    (0x0141, 0x0141, 0x0142, 0x0141),
    (0x0142, 0x0141, 0x0142, 0x0141),
    (0x0143, 0x0143, 0x0144, 0x0143),
    (0x0144, 0x0143, 0x0144, 0x0143),
    (0x0145, 0x0145, 0x0146, 0x0145),
    (0x0146, 0x0145, 0x0146, 0x0145),
    (0x0147, 0x0147, 0x0148, 0x0147),
    (0x0148, 0x0147, 0x0148, 0x0147),
    (0x014A, 0x014A, 0x014B, 0x014A),
    (0x014B, 0x014A, 0x014B, 0x014A),
    (0x014C, 0x014C, 0x014D, 0x014C),
    (0x014D, 0x014C, 0x014D, 0x014C),
    (0x014E, 0x014E, 0x014F, 0x014E),
    (0x014F, 0x014E, 0x014F, 0x014E),
    (0x0150, 0x0150, 0x0151, 0x0150),
    (0x0151, 0x0150, 0x0151, 0x0150),
    (0x0152, 0x0152, 0x0153, 0x0152),
    (0x0153, 0x0152, 0x0153, 0x0152),
    (0x0154, 0x0154, 0x0155, 0x0154),
    (0x0155, 0x0154, 0x0155, 0x0154),
    (0x0156, 0x0156, 0x0157, 0x0156),
    (0x0157, 0x0156, 0x0157, 0x0156),
    (0x0158, 0x0158, 0x0159, 0x0158),
    (0x0159, 0x0158, 0x0159, 0x0158),
    (0x015A, 0x015A, 0x015B, 0x015A),
    (0x015B, 0x015A, 0x015B, 0x015A),
    (0x015C, 0x015C, 0x015D, 0x015C),
    (0x015D, 0x015C, 0x015D, 0x015C),
    (0x015E, 0x015E, 0x015F, 0x015E),
    (0x015F, 0x015E, 0x015F, 0x015E),
    (0x0160, 0x0160, 0x0161, 0x0160),
    (0x0161, 0x0160, 0x0161, 0x0160),
    (0x0162, 0x0162, 0x0163, 0x0162),
    (0x0163, 0x0162, 0x0163, 0x0162),
    (0x0164, 0x0164, 0x0165, 0x0164),
    (0x0165, 0x0164, 0x0165, 0x0164),
    (0x0166, 0x0166, 0x0167, 0x0166),
    (0x0167, 0x0166, 0x0167, 0x0166),
    (0x0168, 0x0168, 0x0169, 0x0168),
    (0x0169, 0x0168, 0x0169, 0x0168),
    (0x016A, 0x016A, 0x016B, 0x016A),
    (0x016B, 0x016A, 0x016B, 0x016A),
    (0x016C, 0x016C, 0x016D, 0x016C),
    (0x016D, 0x016C, 0x016D, 0x016C),
    (0x016E, 0x016E, 0x016F, 0x016E),
    (0x016F, 0x016E, 0x016F, 0x016E),
    (0x0170, 0x0170, 0x0171, 0x0170),
    (0x0171, 0x0170, 0x0171, 0x0170),
    (0x0172, 0x0172, 0x0173, 0x0172),
    (0x0173, 0x0172, 0x0173, 0x0172),
    (0x0174, 0x0174, 0x0175, 0x0174),
    (0x0175, 0x0174, 0x0175, 0x0174),
    (0x0176, 0x0176, 0x0177, 0x0176),
    (0x0177, 0x0176, 0x0177, 0x0176),
    (0x0178, 0x0178, 0x00FF, 0x0178),
    (0x0179, 0x0179, 0x017A, 0x0179),
    (0x017A, 0x0179, 0x017A, 0x0179),
    (0x017B, 0x017B, 0x017C, 0x017B),
    (0x017C, 0x017B, 0x017C, 0x017B),
    (0x017D, 0x017D, 0x017E, 0x017D),
    (0x017E, 0x017D, 0x017E, 0x017D),
    (0x017F, 0x0053, 0x017F, 0x0053),
    (0x0180, 0x0243, 0x0180, 0x0243),
    (0x0181, 0x0181, 0x0253, 0x0181),
    (0x0182, 0x0182, 0x0183, 0x0182),
    (0x0183, 0x0182, 0x0183, 0x0182),
    (0x0184, 0x0184, 0x0185, 0x0184),
    (0x0185, 0x0184, 0x0185, 0x0184),
    (0x0186, 0x0186, 0x0254, 0x0186),
    (0x0187, 0x0187, 0x0188, 0x0187),
    (0x0188, 0x0187, 0x0188, 0x0187),
    (0x0189, 0x0189, 0x0256, 0x0189),
    (0x018A, 0x018A, 0x0257, 0x018A),
    (0x018B, 0x018B, 0x018C, 0x018B),
    (0x018C, 0x018B, 0x018C, 0x018B),
    (0x018E, 0x018E, 0x01DD, 0x018E),
    (0x018F, 0x018F, 0x0259, 0x018F),
    (0x0190, 0x0190, 0x025B, 0x0190),
    (0x0191, 0x0191, 0x0192, 0x0191),
    (0x0192, 0x0191, 0x0192, 0x0191),
    (0x0193, 0x0193, 0x0260, 0x0193),
    (0x0194, 0x0194, 0x0263, 0x0194),
    (0x0195, 0x01F6, 0x0195, 0x01F6),
    (0x0196, 0x0196, 0x0269, 0x0196),
    (0x0197, 0x0197, 0x0268, 0x0197),
    (0x0198, 0x0198, 0x0199, 0x0198),
    (0x0199, 0x0198, 0x0199, 0x0198),
    (0x019A, 0x023D, 0x019A, 0x023D),
    (0x019C, 0x019C, 0x026F, 0x019C),
    (0x019D, 0x019D, 0x0272, 0x019D),
    (0x019E, 0x0220, 0x019E, 0x0220),
    (0x019F, 0x019F, 0x0275, 0x019F),
    (0x01A0, 0x01A0, 0x01A1, 0x01A0),
    (0x01A1, 0x01A0, 0x01A1, 0x01A0),
    (0x01A2, 0x01A2, 0x01A3, 0x01A2),
    (0x01A3, 0x01A2, 0x01A3, 0x01A2),
    (0x01A4, 0x01A4, 0x01A5, 0x01A4),
    (0x01A5, 0x01A4, 0x01A5, 0x01A4),
    (0x01A6, 0x01A6, 0x0280, 0x01A6),
    (0x01A7, 0x01A7, 0x01A8, 0x01A7),
    (0x01A8, 0x01A7, 0x01A8, 0x01A7),
    (0x01A9, 0x01A9, 0x0283, 0x01A9),
    (0x01AC, 0x01AC, 0x01AD, 0x01AC),
    (0x01AD, 0x01AC, 0x01AD, 0x01AC),
    (0x01AE, 0x01AE, 0x0288, 0x01AE),
    (0x01AF, 0x01AF, 0x01B0, 0x01AF),
    (0x01B0, 0x01AF, 0x01B0, 0x01AF),
    (0x01B1, 0x01B1, 0x028A, 0x01B1),
    (0x01B2, 0x01B2, 0x028B, 0x01B2),
    (0x01B3, 0x01B3, 0x01B4, 0x01B3),
    (0x01B4, 0x01B3, 0x01B4, 0x01B3),
    (0x01B5, 0x01B5, 0x01B6, 0x01B5),
    (0x01B6, 0x01B5, 0x01B6, 0x01B5),
    (0x01B7, 0x01B7, 0x0292, 0x01B7),
    (0x01B8, 0x01B8, 0x01B9, 0x01B8),
    (0x01B9, 0x01B8, 0x01B9, 0x01B8),
    (0x01BC, 0x01BC, 0x01BD, 0x01BC),
    (0x01BD, 0x01BC, 0x01BD, 0x01BC),
    (0x01BF, 0x01F7, 0x01BF, 0x01F7),
    (0x01C4, 0x01C4, 0x01C6, 0x01C5),
    (0x01C5, 0x01C4, 0x01C6, 0x01C5),
    (0x01C6, 0x01C4, 0x01C6, 0x01C5),
    (0x01C7, 0x01C7, 0x01C9, 0x01C8),
    (0x01C8, 0x01C7, 0x01C9, 0x01C8),
    (0x01C9, 0x01C7, 0x01C9, 0x01C8),
    (0x01CA, 0x01CA, 0x01CC, 0x01CB),
    (0x01CB, 0x01CA, 0x01CC, 0x01CB),
    (0x01CC, 0x01CA, 0x01CC, 0x01CB),
    (0x01CD, 0x01CD, 0x01CE, 0x01CD),
    (0x01CE, 0x01CD, 0x01CE, 0x01CD),
    (0x01CF, 0x01CF, 0x01D0, 0x01CF),
    (0x01D0, 0x01CF, 0x01D0, 0x01CF),
    (0x01D1, 0x01D1, 0x01D2, 0x01D1),
    (0x01D2, 0x01D1, 0x01D2, 0x01D1),
    (0x01D3, 0x01D3, 0x01D4, 0x01D3),
    (0x01D4, 0x01D3, 0x01D4, 0x01D3),
    (0x01D5, 0x01D5, 0x01D6, 0x01D5),
    (0x01D6, 0x01D5, 0x01D6, 0x01D5),
    (0x01D7, 0x01D7, 0x01D8, 0x01D7),
    (0x01D8, 0x01D7, 0x01D8, 0x01D7),
    (0x01D9, 0x01D9, 0x01DA, 0x01D9),
    (0x01DA, 0x01D9, 0x01DA, 0x01D9),
    (0x01DB, 0x01DB, 0x01DC, 0x01DB),
    (0x01DC, 0x01DB, 0x01DC, 0x01DB),
    (0x01DD, 0x018E, 0x01DD, 0x018E),
    (0x01DE, 0x01DE, 0x01DF, 0x01DE),
    (0x01DF, 0x01DE, 0x01DF, 0x01DE),
    (0x01E0, 0x01E0, 0x01E1, 0x01E0),
    (0x01E1, 0x01E0, 0x01E1, 0x01E0),
    (0x01E2, 0x01E2, 0x01E3, 0x01E2),
    (0x01E3, 0x01E2, 0x01E3, 0x01E2),
    (0x01E4, 0x01E4, 0x01E5, 0x01E4),
    (0x01E5, 0x01E4, 0x01E5, 0x01E4),
    (0x01E6, 0x01E6, 0x01E7, 0x01E6),
    (0x01E7, 0x01E6, 0x01E7, 0x01E6),
    (0x01E8, 0x01E8, 0x01E9, 0x01E8),
    (0x01E9, 0x01E8, 0x01E9, 0x01E8),
    (0x01EA, 0x01EA, 0x01EB, 0x01EA),
    (0x01EB, 0x01EA, 0x01EB, 0x01EA),
    (0x01EC, 0x01EC, 0x01ED, 0x01EC),
    (0x01ED, 0x01EC, 0x01ED, 0x01EC),
    (0x01EE, 0x01EE, 0x01EF, 0x01EE),
    (0x01EF, 0x01EE, 0x01EF, 0x01EE),
    (0x01F1, 0x01F1, 0x01F3, 0x01F2),
    (0x01F2, 0x01F1, 0x01F3, 0x01F2),
    (0x01F3, 0x01F1, 0x01F3, 0x01F2),
    (0x01F4, 0x01F4, 0x01F5, 0x01F4),
    (0x01F5, 0x01F4, 0x01F5, 0x01F4),
    (0x01F6, 0x01F6, 0x0195, 0x01F6),
    (0x01F7, 0x01F7, 0x01BF, 0x01F7),
    (0x01F8, 0x01F8, 0x01F9, 0x01F8),
    (0x01F9, 0x01F8, 0x01F9, 0x01F8),
    (0x01FA, 0x01FA, 0x01FB, 0x01FA),
    (0x01FB, 0x01FA, 0x01FB, 0x01FA),
    (0x01FC, 0x01FC, 0x01FD, 0x01FC),
    (0x01FD, 0x01FC, 0x01FD, 0x01FC),
    (0x01FE, 0x01FE, 0x01FF, 0x01FE),
    (0x01FF, 0x01FE, 0x01FF, 0x01FE),
    (0x0200, 0x0200, 0x0201, 0x0200),
    (0x0201, 0x0200, 0x0201, 0x0200),
    (0x0202, 0x0202, 0x0203, 0x0202),
    (0x0203, 0x0202, 0x0203, 0x0202),
    (0x0204, 0x0204, 0x0205, 0x0204),
    (0x0205, 0x0204, 0x0205, 0x0204),
    (0x0206, 0x0206, 0x0207, 0x0206),
    (0x0207, 0x0206, 0x0207, 0x0206),
    (0x0208, 0x0208, 0x0209, 0x0208),
    (0x0209, 0x0208, 0x0209, 0x0208),
    (0x020A, 0x020A, 0x020B, 0x020A),
    (0x020B, 0x020A, 0x020B, 0x020A),
    (0x020C, 0x020C, 0x020D, 0x020C),
    (0x020D, 0x020C, 0x020D, 0x020C),
    (0x020E, 0x020E, 0x020F, 0x020E),
    (0x020F, 0x020E, 0x020F, 0x020E),
    (0x0210, 0x0210, 0x0211, 0x0210),
    (0x0211, 0x0210, 0x0211, 0x0210),
    (0x0212, 0x0212, 0x0213, 0x0212),
    (0x0213, 0x0212, 0x0213, 0x0212),
    (0x0214, 0x0214, 0x0215, 0x0214),
    (0x0215, 0x0214, 0x0215, 0x0214),
    (0x0216, 0x0216, 0x0217, 0x0216),
    (0x0217, 0x0216, 0x0217, 0x0216),
    (0x0218, 0x0218, 0x0219, 0x0218),
    (0x0219, 0x0218, 0x0219, 0x0218),
    (0x021A, 0x021A, 0x021B, 0x021A),
    (0x021B, 0x021A, 0x021B, 0x021A),
    (0x021C, 0x021C, 0x021D, 0x021C),
    (0x021D, 0x021C, 0x021D, 0x021C),
    (0x021E, 0x021E, 0x021F, 0x021E),
    (0x021F, 0x021E, 0x021F, 0x021E),
    (0x0220, 0x0220, 0x019E, 0x0220),
    (0x0222, 0x0222, 0x0223, 0x0222),
    (0x0223, 0x0222, 0x0223, 0x0222),
    (0x0224, 0x0224, 0x0225, 0x0224),
    (0x0225, 0x0224, 0x0225, 0x0224),
    (0x0226, 0x0226, 0x0227, 0x0226),
    (0x0227, 0x0226, 0x0227, 0x0226),
    (0x0228, 0x0228, 0x0229, 0x0228),
    (0x0229, 0x0228, 0x0229, 0x0228),
    (0x022A, 0x022A, 0x022B, 0x022A),
    (0x022B, 0x022A, 0x022B, 0x022A),
    (0x022C, 0x022C, 0x022D, 0x022C),
    (0x022D, 0x022C, 0x022D, 0x022C),
    (0x022E, 0x022E, 0x022F, 0x022E),
    (0x022F, 0x022E, 0x022F, 0x022E),
    (0x0230, 0x0230, 0x0231, 0x0230),
    (0x0231, 0x0230, 0x0231, 0x0230),
    (0x0232, 0x0232, 0x0233, 0x0232),
    (0x0233, 0x0232, 0x0233, 0x0232),
    (0x023A, 0x023A, 0x2C65, 0x023A),
    (0x023B, 0x023B, 0x023C, 0x023B),
    (0x023C, 0x023B, 0x023C, 0x023B),
    (0x023D, 0x023D, 0x019A, 0x023D),
    (0x023E, 0x023E, 0x2C66, 0x023E),
    (0x023F, 0x2C7E, 0x023F, 0x2C7E),
    (0x0240, 0x2C7F, 0x0240, 0x2C7F),
    (0x0241, 0x0241, 0x0242, 0x0241),
    (0x0242, 0x0241, 0x0242, 0x0241),
    (0x0243, 0x0243, 0x0180, 0x0243),
    (0x0244, 0x0244, 0x0289, 0x0244),
    (0x0245, 0x0245, 0x028C, 0x0245),
    (0x0246, 0x0246, 0x0247, 0x0246),
    (0x0247, 0x0246, 0x0247, 0x0246),
    (0x0248, 0x0248, 0x0249, 0x0248),
    (0x0249, 0x0248, 0x0249, 0x0248),
    (0x024A, 0x024A, 0x024B, 0x024A),
    (0x024B, 0x024A, 0x024B, 0x024A),
    (0x024C, 0x024C, 0x024D, 0x024C),
    (0x024D, 0x024C, 0x024D, 0x024C),
    (0x024E, 0x024E, 0x024F, 0x024E),
    (0x024F, 0x024E, 0x024F, 0x024E),
    (0x0250, 0x2C6F, 0x0250, 0x2C6F),
    (0x0251, 0x2C6D, 0x0251, 0x2C6D),
    (0x0252, 0x2C70, 0x0252, 0x2C70),
    (0x0253, 0x0181, 0x0253, 0x0181),
    (0x0254, 0x0186, 0x0254, 0x0186),
    (0x0256, 0x0189, 0x0256, 0x0189),
    (0x0257, 0x018A, 0x0257, 0x018A),
    (0x0259, 0x018F, 0x0259, 0x018F),
    (0x025B, 0x0190, 0x025B, 0x0190),
    (0x025C, 0xA7AB, 0x025C, 0xA7AB),
    (0x0260, 0x0193, 0x0260, 0x0193),
    (0x0261, 0xA7AC, 0x0261, 0xA7AC),
    (0x0263, 0x0194, 0x0263, 0x0194),
    (0x0265, 0xA78D, 0x0265, 0xA78D),
    (0x0266, 0xA7AA, 0x0266, 0xA7AA),
    (0x0268, 0x0197, 0x0268, 0x0197),
    (0x0269, 0x0196, 0x0269, 0x0196),
    (0x026A, 0xA7AE, 0x026A, 0xA7AE),
    (0x026B, 0x2C62, 0x026B, 0x2C62),
    (0x026C, 0xA7AD, 0x026C, 0xA7AD),
    (0x026F, 0x019C, 0x026F, 0x019C),
    (0x0271, 0x2C6E, 0x0271, 0x2C6E),
    (0x0272, 0x019D, 0x0272, 0x019D),
    (0x0275, 0x019F, 0x0275, 0x019F),
    (0x027D, 0x2C64, 0x027D, 0x2C64),
    (0x0280, 0x01A6, 0x0280, 0x01A6),
    (0x0282, 0xA7C5, 0x0282, 0xA7C5),
    (0x0283, 0x01A9, 0x0283, 0x01A9),
    (0x0287, 0xA7B1, 0x0287, 0xA7B1),
    (0x0288, 0x01AE, 0x0288, 0x01AE),
    (0x0289, 0x0244, 0x0289, 0x0244),
    (0x028A, 0x01B1, 0x028A, 0x01B1),
    (0x028B, 0x01B2, 0x028B, 0x01B2),
    (0x028C, 0x0245, 0x028C, 0x0245),
    (0x0292, 0x01B7, 0x0292, 0x01B7),
    (0x029D, 0xA7B2, 0x029D, 0xA7B2),
    (0x029E, 0xA7B0, 0x029E, 0xA7B0),
    (0x0345, 0x0399, 0x0345, 0x0399),
    (0x0370, 0x0370, 0x0371, 0x0370),
    (0x0371, 0x0370, 0x0371, 0x0370),
    (0x0372, 0x0372, 0x0373, 0x0372),
    (0x0373, 0x0372, 0x0373, 0x0372),
    (0x0376, 0x0376, 0x0377, 0x0376),
    (0x0377, 0x0376, 0x0377, 0x0376),
    (0x037B, 0x03FD, 0x037B, 0x03FD),
    (0x037C, 0x03FE, 0x037C, 0x03FE),
    (0x037D, 0x03FF, 0x037D, 0x03FF),
    (0x037F, 0x037F, 0x03F3, 0x037F),
    (0x0386, 0x0386, 0x03AC, 0x0386),
    (0x0388, 0x0388, 0x03AD, 0x0388),
    (0x0389, 0x0389, 0x03AE, 0x0389),
    (0x038A, 0x038A, 0x03AF, 0x038A),
    (0x038C, 0x038C, 0x03CC, 0x038C),
    (0x038E, 0x038E, 0x03CD, 0x038E),
    (0x038F, 0x038F, 0x03CE, 0x038F),
    (0x0391, 0x0391, 0x03B1, 0x0391),
    (0x0392, 0x0392, 0x03B2, 0x0392),
    (0x0393, 0x0393, 0x03B3, 0x0393),
    (0x0394, 0x0394, 0x03B4, 0x0394),
    (0x0395, 0x0395, 0x03B5, 0x0395),
    (0x0396, 0x0396, 0x03B6, 0x0396),
    (0x0397, 0x0397, 0x03B7, 0x0397),
    (0x0398, 0x0398, 0x03B8, 0x0398),
    (0x0399, 0x0399, 0x03B9, 0x0399),
    (0x039A, 0x039A, 0x03BA, 0x039A),
    (0x039B, 0x039B, 0x03BB, 0x039B),
    (0x039C, 0x039C, 0x03BC, 0x039C),
    (0x039D, 0x039D, 0x03BD, 0x039D),
    (0x039E, 0x039E, 0x03BE, 0x039E),
    (0x039F, 0x039F, 0x03BF, 0x039F),
    (0x03A0, 0x03A0, 0x03C0, 0x03A0),
    (0x03A1, 0x03A1, 0x03C1, 0x03A1),
    (0x03A3, 0x03A3, 0x03C3, 0x03A3),
    (0x03A4, 0x03A4, 0x03C4, 0x03A4),
    (0x03A5, 0x03A5, 0x03C5, 0x03A5),
    (0x03A6, 0x03A6, 0x03C6, 0x03A6),
    (0x03A7, 0x03A7, 0x03C7, 0x03A7),
    (0x03A8, 0x03A8, 0x03C8, 0x03A8),
    (0x03A9, 0x03A9, 0x03C9, 0x03A9),
    (0x03AA, 0x03AA, 0x03CA, 0x03AA),
    (0x03AB, 0x03AB, 0x03CB, 0x03AB),
    (0x03AC, 0x0386, 0x03AC, 0x0386),
    (0x03AD, 0x0388, 0x03AD, 0x0388),
    (0x03AE, 0x0389, 0x03AE, 0x0389),
    (0x03AF, 0x038A, 0x03AF, 0x038A),
    (0x03B1, 0x0391, 0x03B1, 0x0391),
    (0x03B2, 0x0392, 0x03B2, 0x0392),
    (0x03B3, 0x0393, 0x03B3, 0x0393),
    (0x03B4, 0x0394, 0x03B4, 0x0394),
    (0x03B5, 0x0395, 0x03B5, 0x0395),
    (0x03B6, 0x0396, 0x03B6, 0x0396),
    (0x03B7, 0x0397, 0x03B7, 0x0397),
    (0x03B8, 0x0398, 0x03B8, 0x0398),
    (0x03B9, 0x0399, 0x03B9, 0x0399),
    (0x03BA, 0x039A, 0x03BA, 0x039A),
    (0x03BB, 0x039B, 0x03BB, 0x039B),
    (0x03BC, 0x039C, 0x03BC, 0x039C),
    (0x03BD, 0x039D, 0x03BD, 0x039D),
    (0x03BE, 0x039E, 0x03BE, 0x039E),
    (0x03BF, 0x039F, 0x03BF, 0x039F),
    (0x03C0, 0x03A0, 0x03C0, 0x03A0),
    (0x03C1, 0x03A1, 0x03C1, 0x03A1),
    (0x03C2, 0x03A3, 0x03C2, 0x03A3),
    (0x03C3, 0x03A3, 0x03C3, 0x03A3),
    (0x03C4, 0x03A4, 0x03C4, 0x03A4),
    (0x03C5, 0x03A5, 0x03C5, 0x03A5),
    (0x03C6, 0x03A6, 0x03C6, 0x03A6),
    (0x03C7, 0x03A7, 0x03C7, 0x03A7),
    (0x03C8, 0x03A8, 0x03C8, 0x03A8),
    (0x03C9, 0x03A9, 0x03C9, 0x03A9),
    (0x03CA, 0x03AA, 0x03CA, 0x03AA),
    (0x03CB, 0x03AB, 0x03CB, 0x03AB),
    (0x03CC, 0x038C, 0x03CC, 0x038C),
    (0x03CD, 0x038E, 0x03CD, 0x038E),
    (0x03CE, 0x038F, 0x03CE, 0x038F),
    (0x03CF, 0x03CF, 0x03D7, 0x03CF),
    (0x03D0, 0x0392, 0x03D0, 0x0392),
    (0x03D1, 0x0398, 0x03D1, 0x0398),
    (0x03D5, 0x03A6, 0x03D5, 0x03A6),
    (0x03D6, 0x03A0, 0x03D6, 0x03A0),
    (0x03D7, 0x03CF, 0x03D7, 0x03CF),
    (0x03D8, 0x03D8, 0x03D9, 0x03D8),
    (0x03D9, 0x03D8, 0x03D9, 0x03D8),
    (0x03DA, 0x03DA, 0x03DB, 0x03DA),
    (0x03DB, 0x03DA, 0x03DB, 0x03DA),
    (0x03DC, 0x03DC, 0x03DD, 0x03DC),
    (0x03DD, 0x03DC, 0x03DD, 0x03DC),
    (0x03DE, 0x03DE, 0x03DF, 0x03DE),
    (0x03DF, 0x03DE, 0x03DF, 0x03DE),
    (0x03E0, 0x03E0, 0x03E1, 0x03E0),
    (0x03E1, 0x03E0, 0x03E1, 0x03E0),
    (0x03E2, 0x03E2, 0x03E3, 0x03E2),
    (0x03E3, 0x03E2, 0x03E3, 0x03E2),
    (0x03E4, 0x03E4, 0x03E5, 0x03E4),
    (0x03E5, 0x03E4, 0x03E5, 0x03E4),
    (0x03E6, 0x03E6, 0x03E7, 0x03E6),
    (0x03E7, 0x03E6, 0x03E7, 0x03E6),
    (0x03E8, 0x03E8, 0x03E9, 0x03E8),
    (0x03E9, 0x03E8, 0x03E9, 0x03E8),
    (0x03EA, 0x03EA, 0x03EB, 0x03EA),
    (0x03EB, 0x03EA, 0x03EB, 0x03EA),
    (0x03EC, 0x03EC, 0x03ED, 0x03EC),
    (0x03ED, 0x03EC, 0x03ED, 0x03EC),
    (0x03EE, 0x03EE, 0x03EF, 0x03EE),
    (0x03EF, 0x03EE, 0x03EF, 0x03EE),
    (0x03F0, 0x039A, 0x03F0, 0x039A),
    (0x03F1, 0x03A1, 0x03F1, 0x03A1),
    (0x03F2, 0x03F9, 0x03F2, 0x03F9),
    (0x03F3, 0x037F, 0x03F3, 0x037F),
    (0x03F4, 0x03F4, 0x03B8, 0x03F4),
    (0x03F5, 0x0395, 0x03F5, 0x0395),
    (0x03F7, 0x03F7, 0x03F8, 0x03F7),
    (0x03F8, 0x03F7, 0x03F8, 0x03F7),
    (0x03F9, 0x03F9, 0x03F2, 0x03F9),
    (0x03FA, 0x03FA, 0x03FB, 0x03FA),
    (0x03FB, 0x03FA, 0x03FB, 0x03FA),
    (0x03FD, 0x03FD, 0x037B, 0x03FD),
    (0x03FE, 0x03FE, 0x037C, 0x03FE),
    (0x03FF, 0x03FF, 0x037D, 0x03FF),
    (0x0400, 0x0400, 0x0450, 0x0400),
    (0x0401, 0x0401, 0x0451, 0x0401),
    (0x0402, 0x0402, 0x0452, 0x0402),
    (0x0403, 0x0403, 0x0453, 0x0403),
    (0x0404, 0x0404, 0x0454, 0x0404),
    (0x0405, 0x0405, 0x0455, 0x0405),
    (0x0406, 0x0406, 0x0456, 0x0406),
    (0x0407, 0x0407, 0x0457, 0x0407),
    (0x0408, 0x0408, 0x0458, 0x0408),
    (0x0409, 0x0409, 0x0459, 0x0409),
    (0x040A, 0x040A, 0x045A, 0x040A),
    (0x040B, 0x040B, 0x045B, 0x040B),
    (0x040C, 0x040C, 0x045C, 0x040C),
    (0x040D, 0x040D, 0x045D, 0x040D),
    (0x040E, 0x040E, 0x045E, 0x040E),
    (0x040F, 0x040F, 0x045F, 0x040F),
    (0x0410, 0x0410, 0x0430, 0x0410),
    (0x0411, 0x0411, 0x0431, 0x0411),
    (0x0412, 0x0412, 0x0432, 0x0412),
    (0x0413, 0x0413, 0x0433, 0x0413),
    (0x0414, 0x0414, 0x0434, 0x0414),
    (0x0415, 0x0415, 0x0435, 0x0415),
    (0x0416, 0x0416, 0x0436, 0x0416),
    (0x0417, 0x0417, 0x0437, 0x0417),
    (0x0418, 0x0418, 0x0438, 0x0418),
    (0x0419, 0x0419, 0x0439, 0x0419),
    (0x041A, 0x041A, 0x043A, 0x041A),
    (0x041B, 0x041B, 0x043B, 0x041B),
    (0x041C, 0x041C, 0x043C, 0x041C),
    (0x041D, 0x041D, 0x043D, 0x041D),
    (0x041E, 0x041E, 0x043E, 0x041E),
    (0x041F, 0x041F, 0x043F, 0x041F),
    (0x0420, 0x0420, 0x0440, 0x0420),
    (0x0421, 0x0421, 0x0441, 0x0421),
    (0x0422, 0x0422, 0x0442, 0x0422),
    (0x0423, 0x0423, 0x0443, 0x0423),
    (0x0424, 0x0424, 0x0444, 0x0424),
    (0x0425, 0x0425, 0x0445, 0x0425),
    (0x0426, 0x0426, 0x0446, 0x0426),
    (0x0427, 0x0427, 0x0447, 0x0427),
    (0x0428, 0x0428, 0x0448, 0x0428),
    (0x0429, 0x0429, 0x0449, 0x0429),
    (0x042A, 0x042A, 0x044A, 0x042A),
    (0x042B, 0x042B, 0x044B, 0x042B),
    (0x042C, 0x042C, 0x044C, 0x042C),
    (0x042D, 0x042D, 0x044D, 0x042D),
    (0x042E, 0x042E, 0x044E, 0x042E),
    (0x042F, 0x042F, 0x044F, 0x042F),
    (0x0430, 0x0410, 0x0430, 0x0410),
    (0x0431, 0x0411, 0x0431, 0x0411),
    (0x0432, 0x0412, 0x0432, 0x0412),
    (0x0433, 0x0413, 0x0433, 0x0413),
    (0x0434, 0x0414, 0x0434, 0x0414),
    (0x0435, 0x0415, 0x0435, 0x0415),
    (0x0436, 0x0416, 0x0436, 0x0416),
    (0x0437, 0x0417, 0x0437, 0x0417),
    (0x0438, 0x0418, 0x0438, 0x0418),
    (0x0439, 0x0419, 0x0439, 0x0419),
    (0x043A, 0x041A, 0x043A, 0x041A),
    (0x043B, 0x041B, 0x043B, 0x041B),
    (0x043C, 0x041C, 0x043C, 0x041C),
    (0x043D, 0x041D, 0x043D, 0x041D),
    (0x043E, 0x041E, 0x043E, 0x041E),
    (0x043F, 0x041F, 0x043F, 0x041F),
    (0x0440, 0x0420, 0x0440, 0x0420),
    (0x0441, 0x0421, 0x0441, 0x0421),
    (0x0442, 0x0422, 0x0442, 0x0422),
    (0x0443, 0x0423, 0x0443, 0x0423),
    (0x0444, 0x0424, 0x0444, 0x0424),
    (0x0445, 0x0425, 0x0445, 0x0425),
    (0x0446, 0x0426, 0x0446, 0x0426),
    (0x0447, 0x0427, 0x0447, 0x0427),
    (0x0448, 0x0428, 0x0448, 0x0428),
    (0x0449, 0x0429, 0x0449, 0x0429),
    (0x044A, 0x042A, 0x044A, 0x042A),
    (0x044B, 0x042B, 0x044B, 0x042B),
    (0x044C, 0x042C, 0x044C, 0x042C),
    (0x044D, 0x042D, 0x044D, 0x042D),
    (0x044E, 0x042E, 0x044E, 0x042E),
    (0x044F, 0x042F, 0x044F, 0x042F),
    (0x0450, 0x0400, 0x0450, 0x0400),
    (0x0451, 0x0401, 0x0451, 0x0401),
    (0x0452, 0x0402, 0x0452, 0x0402),
    (0x0453, 0x0403, 0x0453, 0x0403),
    (0x0454, 0x0404, 0x0454, 0x0404),
    (0x0455, 0x0405, 0x0455, 0x0405),
    (0x0456, 0x0406, 0x0456, 0x0406),
    (0x0457, 0x0407, 0x0457, 0x0407),
    (0x0458, 0x0408, 0x0458, 0x0408),
    (0x0459, 0x0409, 0x0459, 0x0409),
    (0x045A, 0x040A, 0x045A, 0x040A),
    (0x045B, 0x040B, 0x045B, 0x040B),
    (0x045C, 0x040C, 0x045C, 0x040C),
    (0x045D, 0x040D, 0x045D, 0x040D),
    (0x045E, 0x040E, 0x045E, 0x040E),
    (0x045F, 0x040F, 0x045F, 0x040F),
    (0x0460, 0x0460, 0x0461, 0x0460),
    (0x0461, 0x0460, 0x0461, 0x0460),
    (0x0462, 0x0462, 0x0463, 0x0462),
    (0x0463, 0x0462, 0x0463, 0x0462),
    (0x0464, 0x0464, 0x0465, 0x0464),
    (0x0465, 0x0464, 0x0465, 0x0464),
    (0x0466, 0x0466, 0x0467, 0x0466),
    (0x0467, 0x0466, 0x0467, 0x0466),
    (0x0468, 0x0468, 0x0469, 0x0468),
    (0x0469, 0x0468, 0x0469, 0x0468),
    (0x046A, 0x046A, 0x046B, 0x046A),
    (0x046B, 0x046A, 0x046B, 0x046A),
    (0x046C, 0x046C, 0x046D, 0x046C),
    (0x046D, 0x046C, 0x046D, 0x046C),
    (0x046E, 0x046E, 0x046F, 0x046E),
    (0x046F, 0x046E, 0x046F, 0x046E),
    (0x0470, 0x0470, 0x0471, 0x0470),
    (0x0471, 0x0470, 0x0471, 0x0470),
    (0x0472, 0x0472, 0x0473, 0x0472),
    (0x0473, 0x0472, 0x0473, 0x0472),
    (0x0474, 0x0474, 0x0475, 0x0474),
    (0x0475, 0x0474, 0x0475, 0x0474),
    (0x0476, 0x0476, 0x0477, 0x0476),
    (0x0477, 0x0476, 0x0477, 0x0476),
    (0x0478, 0x0478, 0x0479, 0x0478),
    (0x0479, 0x0478, 0x0479, 0x0478),
    (0x047A, 0x047A, 0x047B, 0x047A),
    (0x047B, 0x047A, 0x047B, 0x047A),
    (0x047C, 0x047C, 0x047D, 0x047C),
    (0x047D, 0x047C, 0x047D, 0x047C),
    (0x047E, 0x047E, 0x047F, 0x047E),
    (0x047F, 0x047E, 0x047F, 0x047E),
    (0x0480, 0x0480, 0x0481, 0x0480),
    (0x0481, 0x0480, 0x0481, 0x0480),
    (0x048A, 0x048A, 0x048B, 0x048A),
    (0x048B, 0x048A, 0x048B, 0x048A),
    (0x048C, 0x048C, 0x048D, 0x048C),
    (0x048D, 0x048C, 0x048D, 0x048C),
    (0x048E, 0x048E, 0x048F, 0x048E),
    (0x048F, 0x048E, 0x048F, 0x048E),
    (0x0490, 0x0490, 0x0491, 0x0490),
    (0x0491, 0x0490, 0x0491, 0x0490),
    (0x0492, 0x0492, 0x0493, 0x0492),
    (0x0493, 0x0492, 0x0493, 0x0492),
    (0x0494, 0x0494, 0x0495, 0x0494),
    (0x0495, 0x0494, 0x0495, 0x0494),
    (0x0496, 0x0496, 0x0497, 0x0496),
    (0x0497, 0x0496, 0x0497, 0x0496),
    (0x0498, 0x0498, 0x0499, 0x0498),
    (0x0499, 0x0498, 0x0499, 0x0498),
    (0x049A, 0x049A, 0x049B, 0x049A),
    (0x049B, 0x049A, 0x049B, 0x049A),
    (0x049C, 0x049C, 0x049D, 0x049C),
    (0x049D, 0x049C, 0x049D, 0x049C),
    (0x049E, 0x049E, 0x049F, 0x049E),
    (0x049F, 0x049E, 0x049F, 0x049E),
    (0x04A0, 0x04A0, 0x04A1, 0x04A0),
    (0x04A1, 0x04A0, 0x04A1, 0x04A0),
    (0x04A2, 0x04A2, 0x04A3, 0x04A2),
    (0x04A3, 0x04A2, 0x04A3, 0x04A2),
    (0x04A4, 0x04A4, 0x04A5, 0x04A4),
    (0x04A5, 0x04A4, 0x04A5, 0x04A4),
    (0x04A6, 0x04A6, 0x04A7, 0x04A6),
    (0x04A7, 0x04A6, 0x04A7, 0x04A6),
    (0x04A8, 0x04A8, 0x04A9, 0x04A8),
    (0x04A9, 0x04A8, 0x04A9, 0x04A8),
    (0x04AA, 0x04AA, 0x04AB, 0x04AA),
    (0x04AB, 0x04AA, 0x04AB, 0x04AA),
    (0x04AC, 0x04AC, 0x04AD, 0x04AC),
    (0x04AD, 0x04AC, 0x04AD, 0x04AC),
    (0x04AE, 0x04AE, 0x04AF, 0x04AE),
    (0x04AF, 0x04AE, 0x04AF, 0x04AE),
    (0x04B0, 0x04B0, 0x04B1, 0x04B0),
    (0x04B1, 0x04B0, 0x04B1, 0x04B0),
    (0x04B2, 0x04B2, 0x04B3, 0x04B2),
    (0x04B3, 0x04B2, 0x04B3, 0x04B2),
    (0x04B4, 0x04B4, 0x04B5, 0x04B4),
    (0x04B5, 0x04B4, 0x04B5, 0x04B4),
    (0x04B6, 0x04B6, 0x04B7, 0x04B6),
    (0x04B7, 0x04B6, 0x04B7, 0x04B6),
    (0x04B8, 0x04B8, 0x04B9, 0x04B8),
    (0x04B9, 0x04B8, 0x04B9, 0x04B8),
    (0x04BA, 0x04BA, 0x04BB, 0x04BA),
    (0x04BB, 0x04BA, 0x04BB, 0x04BA),
    (0x04BC, 0x04BC, 0x04BD, 0x04BC),
    (0x04BD, 0x04BC, 0x04BD, 0x04BC),
    (0x04BE, 0x04BE, 0x04BF, 0x04BE),
    (0x04BF, 0x04BE, 0x04BF, 0x04BE),
    (0x04C0, 0x04C0, 0x04CF, 0x04C0),
    (0x04C1, 0x04C1, 0x04C2, 0x04C1),
    (0x04C2, 0x04C1, 0x04C2, 0x04C1),
    (0x04C3, 0x04C3, 0x04C4, 0x04C3),
    (0x04C4, 0x04C3, 0x04C4, 0x04C3),
    (0x04C5, 0x04C5, 0x04C6, 0x04C5),
    (0x04C6, 0x04C5, 0x04C6, 0x04C5),
    (0x04C7, 0x04C7, 0x04C8, 0x04C7),
    (0x04C8, 0x04C7, 0x04C8, 0x04C7),
    (0x04C9, 0x04C9, 0x04CA, 0x04C9),
    (0x04CA, 0x04C9, 0x04CA, 0x04C9),
    (0x04CB, 0x04CB, 0x04CC, 0x04CB),
    (0x04CC, 0x04CB, 0x04CC, 0x04CB),
    (0x04CD, 0x04CD, 0x04CE, 0x04CD),
    (0x04CE, 0x04CD, 0x04CE, 0x04CD),
    (0x04CF, 0x04C0, 0x04CF, 0x04C0),
    (0x04D0, 0x04D0, 0x04D1, 0x04D0),
    (0x04D1, 0x04D0, 0x04D1, 0x04D0),
    (0x04D2, 0x04D2, 0x04D3, 0x04D2),
    (0x04D3, 0x04D2, 0x04D3, 0x04D2),
    (0x04D4, 0x04D4, 0x04D5, 0x04D4),
    (0x04D5, 0x04D4, 0x04D5, 0x04D4),
    (0x04D6, 0x04D6, 0x04D7, 0x04D6),
    (0x04D7, 0x04D6, 0x04D7, 0x04D6),
    (0x04D8, 0x04D8, 0x04D9, 0x04D8),
    (0x04D9, 0x04D8, 0x04D9, 0x04D8),
    (0x04DA, 0x04DA, 0x04DB, 0x04DA),
    (0x04DB, 0x04DA, 0x04DB, 0x04DA),
    (0x04DC, 0x04DC, 0x04DD, 0x04DC),
    (0x04DD, 0x04DC, 0x04DD, 0x04DC),
    (0x04DE, 0x04DE, 0x04DF, 0x04DE),
    (0x04DF, 0x04DE, 0x04DF, 0x04DE),
    (0x04E0, 0x04E0, 0x04E1, 0x04E0),
    (0x04E1, 0x04E0, 0x04E1, 0x04E0),
    (0x04E2, 0x04E2, 0x04E3, 0x04E2),
    (0x04E3, 0x04E2, 0x04E3, 0x04E2),
    (0x04E4, 0x04E4, 0x04E5, 0x04E4),
    (0x04E5, 0x04E4, 0x04E5, 0x04E4),
    (0x04E6, 0x04E6, 0x04E7, 0x04E6),
    (0x04E7, 0x04E6, 0x04E7, 0x04E6),
    (0x04E8, 0x04E8, 0x04E9, 0x04E8),
    (0x04E9, 0x04E8, 0x04E9, 0x04E8),
    (0x04EA, 0x04EA, 0x04EB, 0x04EA),
    (0x04EB, 0x04EA, 0x04EB, 0x04EA),
    (0x04EC, 0x04EC, 0x04ED, 0x04EC),
    (0x04ED, 0x04EC, 0x04ED, 0x04EC),
    (0x04EE, 0x04EE, 0x04EF, 0x04EE),
    (0x04EF, 0x04EE, 0x04EF, 0x04EE),
    (0x04F0, 0x04F0, 0x04F1, 0x04F0),
    (0x04F1, 0x04F0, 0x04F1, 0x04F0),
    (0x04F2, 0x04F2, 0x04F3, 0x04F2),
    (0x04F3, 0x04F2, 0x04F3, 0x04F2),
    (0x04F4, 0x04F4, 0x04F5, 0x04F4),
    (0x04F5, 0x04F4, 0x04F5, 0x04F4),
    (0x04F6, 0x04F6, 0x04F7, 0x04F6),
    (0x04F7, 0x04F6, 0x04F7, 0x04F6),
    (0x04F8, 0x04F8, 0x04F9, 0x04F8),
    (0x04F9, 0x04F8, 0x04F9, 0x04F8),
    (0x04FA, 0x04FA, 0x04FB, 0x04FA),
    (0x04FB, 0x04FA, 0x04FB, 0x04FA),
    (0x04FC, 0x04FC, 0x04FD, 0x04FC),
    (0x04FD, 0x04FC, 0x04FD, 0x04FC),
    (0x04FE, 0x04FE, 0x04FF, 0x04FE),
    (0x04FF, 0x04FE, 0x04FF, 0x04FE),
    (0x0500, 0x0500, 0x0501, 0x0500),
    (0x0501, 0x0500, 0x0501, 0x0500),
    (0x0502, 0x0502, 0x0503, 0x0502),
    (0x0503, 0x0502, 0x0503, 0x0502),
    (0x0504, 0x0504, 0x0505, 0x0504),
    (0x0505, 0x0504, 0x0505, 0x0504),
    (0x0506, 0x0506, 0x0507, 0x0506),
    (0x0507, 0x0506, 0x0507, 0x0506),
    (0x0508, 0x0508, 0x0509, 0x0508),
    (0x0509, 0x0508, 0x0509, 0x0508),
    (0x050A, 0x050A, 0x050B, 0x050A),
    (0x050B, 0x050A, 0x050B, 0x050A),
    (0x050C, 0x050C, 0x050D, 0x050C),
    (0x050D, 0x050C, 0x050D, 0x050C),
    (0x050E, 0x050E, 0x050F, 0x050E),
    (0x050F, 0x050E, 0x050F, 0x050E),
    (0x0510, 0x0510, 0x0511, 0x0510),
    (0x0511, 0x0510, 0x0511, 0x0510),
    (0x0512, 0x0512, 0x0513, 0x0512),
    (0x0513, 0x0512, 0x0513, 0x0512),
    (0x0514, 0x0514, 0x0515, 0x0514),
    (0x0515, 0x0514, 0x0515, 0x0514),
    (0x0516, 0x0516, 0x0517, 0x0516),
    (0x0517, 0x0516, 0x0517, 0x0516),
    (0x0518, 0x0518, 0x0519, 0x0518),
    (0x0519, 0x0518, 0x0519, 0x0518),
    (0x051A, 0x051A, 0x051B, 0x051A),
    (0x051B, 0x051A, 0x051B, 0x051A),
    (0x051C, 0x051C, 0x051D, 0x051C),
    (0x051D, 0x051C, 0x051D, 0x051C),
    (0x051E, 0x051E, 0x051F, 0x051E),
    (0x051F, 0x051E, 0x051F, 0x051E),
    (0x0520, 0x0520, 0x0521, 0x0520),
    (0x0521, 0x0520, 0x0521, 0x0520),
    (0x0522, 0x0522, 0x0523, 0x0522),
    (0x0523, 0x0522, 0x0523, 0x0522),
    (0x0524, 0x0524, 0x0525, 0x0524),
    (0x0525, 0x0524, 0x0525, 0x0524),
    (0x0526, 0x0526, 0x0527, 0x0526),
    (0x0527, 0x0526, 0x0527, 0x0526),
    (0x0528, 0x0528, 0x0529, 0x0528),
    (0x0529, 0x0528, 0x0529, 0x0528),
    (0x052A, 0x052A, 0x052B, 0x052A),
    (0x052B, 0x052A, 0x052B, 0x052A),
    (0x052C, 0x052C, 0x052D, 0x052C),
    (0x052D, 0x052C, 0x052D, 0x052C),
    (0x052E, 0x052E, 0x052F, 0x052E),
    (0x052F, 0x052E, 0x052F, 0x052E),
    (0x0531, 0x0531, 0x0561, 0x0531),
    (0x0532, 0x0532, 0x0562, 0x0532),
    (0x0533, 0x0533, 0x0563, 0x0533),
    (0x0534, 0x0534, 0x0564, 0x0534),
    (0x0535, 0x0535, 0x0565, 0x0535),
    (0x0536, 0x0536, 0x0566, 0x0536),
    (0x0537, 0x0537, 0x0567, 0x0537),
    (0x0538, 0x0538, 0x0568, 0x0538),
    (0x0539, 0x0539, 0x0569, 0x0539),
    (0x053A, 0x053A, 0x056A, 0x053A),
    (0x053B, 0x053B, 0x056B, 0x053B),
    (0x053C, 0x053C, 0x056C, 0x053C),
    (0x053D, 0x053D, 0x056D, 0x053D),
    (0x053E, 0x053E, 0x056E, 0x053E),
    (0x053F, 0x053F, 0x056F, 0x053F),
    (0x0540, 0x0540, 0x0570, 0x0540),
    (0x0541, 0x0541, 0x0571, 0x0541),
    (0x0542, 0x0542, 0x0572, 0x0542),
    (0x0543, 0x0543, 0x0573, 0x0543),
    (0x0544, 0x0544, 0x0574, 0x0544),
    (0x0545, 0x0545, 0x0575, 0x0545),
    (0x0546, 0x0546, 0x0576, 0x0546),
    (0x0547, 0x0547, 0x0577, 0x0547),
    (0x0548, 0x0548, 0x0578, 0x0548),
    (0x0549, 0x0549, 0x0579, 0x0549),
    (0x054A, 0x054A, 0x057A, 0x054A),
    (0x054B, 0x054B, 0x057B, 0x054B),
    (0x054C, 0x054C, 0x057C, 0x054C),
    (0x054D, 0x054D, 0x057D, 0x054D),
    (0x054E, 0x054E, 0x057E, 0x054E),
    (0x054F, 0x054F, 0x057F, 0x054F),
    (0x0550, 0x0550, 0x0580, 0x0550),
    (0x0551, 0x0551, 0x0581, 0x0551),
    (0x0552, 0x0552, 0x0582, 0x0552),
    (0x0553, 0x0553, 0x0583, 0x0553),
    (0x0554, 0x0554, 0x0584, 0x0554),
    (0x0555, 0x0555, 0x0585, 0x0555),
    (0x0556, 0x0556, 0x0586, 0x0556),
    (0x0561, 0x0531, 0x0561, 0x0531),
    (0x0562, 0x0532, 0x0562, 0x0532),
    (0x0563, 0x0533, 0x0563, 0x0533),
    (0x0564, 0x0534, 0x0564, 0x0534),
    (0x0565, 0x0535, 0x0565, 0x0535),
    (0x0566, 0x0536, 0x0566, 0x0536),
    (0x0567, 0x0537, 0x0567, 0x0537),
    (0x0568, 0x0538, 0x0568, 0x0538),
    (0x0569, 0x0539, 0x0569, 0x0539),
    (0x056A, 0x053A, 0x056A, 0x053A),
    (0x056B, 0x053B, 0x056B, 0x053B),
    (0x056C, 0x053C, 0x056C, 0x053C),
    (0x056D, 0x053D, 0x056D, 0x053D),
    (0x056E, 0x053E, 0x056E, 0x053E),
    (0x056F, 0x053F, 0x056F, 0x053F),
    (0x0570, 0x0540, 0x0570, 0x0540),
    (0x0571, 0x0541, 0x0571, 0x0541),
    (0x0572, 0x0542, 0x0572, 0x0542),
    (0x0573, 0x0543, 0x0573, 0x0543),
    (0x0574, 0x0544, 0x0574, 0x0544),
    (0x0575, 0x0545, 0x0575, 0x0545),
    (0x0576, 0x0546, 0x0576, 0x0546),
    (0x0577, 0x0547, 0x0577, 0x0547),
    (0x0578, 0x0548, 0x0578, 0x0548),
    (0x0579, 0x0549, 0x0579, 0x0549),
    (0x057A, 0x054A, 0x057A, 0x054A),
    (0x057B, 0x054B, 0x057B, 0x054B),
    (0x057C, 0x054C, 0x057C, 0x054C),
    (0x057D, 0x054D, 0x057D, 0x054D),
    (0x057E, 0x054E, 0x057E, 0x054E),
    (0x057F, 0x054F, 0x057F, 0x054F),
    (0x0580, 0x0550, 0x0580, 0x0550),
    (0x0581, 0x0551, 0x0581, 0x0551),
    (0x0582, 0x0552, 0x0582, 0x0552),
    (0x0583, 0x0553, 0x0583, 0x0553),
    (0x0584, 0x0554, 0x0584, 0x0554),
    (0x0585, 0x0555, 0x0585, 0x0555),
    (0x0586, 0x0556, 0x0586, 0x0556),
    (0x10A0, 0x10A0, 0x2D00, 0x10A0),
    (0x10A1, 0x10A1, 0x2D01, 0x10A1),
    (0x10A2, 0x10A2, 0x2D02, 0x10A2),
    (0x10A3, 0x10A3, 0x2D03, 0x10A3),
    (0x10A4, 0x10A4, 0x2D04, 0x10A4),
    (0x10A5, 0x10A5, 0x2D05, 0x10A5),
    (0x10A6, 0x10A6, 0x2D06, 0x10A6),
    (0x10A7, 0x10A7, 0x2D07, 0x10A7),
    (0x10A8, 0x10A8, 0x2D08, 0x10A8),
    (0x10A9, 0x10A9, 0x2D09, 0x10A9),
    (0x10AA, 0x10AA, 0x2D0A, 0x10AA),
    (0x10AB, 0x10AB, 0x2D0B, 0x10AB),
    (0x10AC, 0x10AC, 0x2D0C, 0x10AC),
    (0x10AD, 0x10AD, 0x2D0D, 0x10AD),
    (0x10AE, 0x10AE, 0x2D0E, 0x10AE),
    (0x10AF, 0x10AF, 0x2D0F, 0x10AF),
    (0x10B0, 0x10B0, 0x2D10, 0x10B0),
    (0x10B1, 0x10B1, 0x2D11, 0x10B1),
    (0x10B2, 0x10B2, 0x2D12, 0x10B2),
    (0x10B3, 0x10B3, 0x2D13, 0x10B3),
    (0x10B4, 0x10B4, 0x2D14, 0x10B4),
    (0x10B5, 0x10B5, 0x2D15, 0x10B5),
    (0x10B6, 0x10B6, 0x2D16, 0x10B6),
    (0x10B7, 0x10B7, 0x2D17, 0x10B7),
    (0x10B8, 0x10B8, 0x2D18, 0x10B8),
    (0x10B9, 0x10B9, 0x2D19, 0x10B9),
    (0x10BA, 0x10BA, 0x2D1A, 0x10BA),
    (0x10BB, 0x10BB, 0x2D1B, 0x10BB),
    (0x10BC, 0x10BC, 0x2D1C, 0x10BC),
    (0x10BD, 0x10BD, 0x2D1D, 0x10BD),
    (0x10BE, 0x10BE, 0x2D1E, 0x10BE),
    (0x10BF, 0x10BF, 0x2D1F, 0x10BF),
    (0x10C0, 0x10C0, 0x2D20, 0x10C0),
    (0x10C1, 0x10C1, 0x2D21, 0x10C1),
    (0x10C2, 0x10C2, 0x2D22, 0x10C2),
    (0x10C3, 0x10C3, 0x2D23, 0x10C3),
    (0x10C4, 0x10C4, 0x2D24, 0x10C4),
    (0x10C5, 0x10C5, 0x2D25, 0x10C5),
    (0x10C7, 0x10C7, 0x2D27, 0x10C7),
    (0x10CD, 0x10CD, 0x2D2D, 0x10CD),
    (0x10D0, 0x1C90, 0x10D0, 0x10D0),
    (0x10D1, 0x1C91, 0x10D1, 0x10D1),
    (0x10D2, 0x1C92, 0x10D2, 0x10D2),
    (0x10D3, 0x1C93, 0x10D3, 0x10D3),
    (0x10D4, 0x1C94, 0x10D4, 0x10D4),
    (0x10D5, 0x1C95, 0x10D5, 0x10D5),
    (0x10D6, 0x1C96, 0x10D6, 0x10D6),
    (0x10D7, 0x1C97, 0x10D7, 0x10D7),
    (0x10D8, 0x1C98, 0x10D8, 0x10D8),
    (0x10D9, 0x1C99, 0x10D9, 0x10D9),
    (0x10DA, 0x1C9A, 0x10DA, 0x10DA),
    (0x10DB, 0x1C9B, 0x10DB, 0x10DB),
    (0x10DC, 0x1C9C, 0x10DC, 0x10DC),
    (0x10DD, 0x1C9D, 0x10DD, 0x10DD),
    (0x10DE, 0x1C9E, 0x10DE, 0x10DE),
    (0x10DF, 0x1C9F, 0x10DF, 0x10DF),
    (0x10E0, 0x1CA0, 0x10E0, 0x10E0),
    (0x10E1, 0x1CA1, 0x10E1, 0x10E1),
    (0x10E2, 0x1CA2, 0x10E2, 0x10E2),
    (0x10E3, 0x1CA3, 0x10E3, 0x10E3),
    (0x10E4, 0x1CA4, 0x10E4, 0x10E4),
    (0x10E5, 0x1CA5, 0x10E5, 0x10E5),
    (0x10E6, 0x1CA6, 0x10E6, 0x10E6),
    (0x10E7, 0x1CA7, 0x10E7, 0x10E7),
    (0x10E8, 0x1CA8, 0x10E8, 0x10E8),
    (0x10E9, 0x1CA9, 0x10E9, 0x10E9),
    (0x10EA, 0x1CAA, 0x10EA, 0x10EA),
    (0x10EB, 0x1CAB, 0x10EB, 0x10EB),
    (0x10EC, 0x1CAC, 0x10EC, 0x10EC),
    (0x10ED, 0x1CAD, 0x10ED, 0x10ED),
    (0x10EE, 0x1CAE, 0x10EE, 0x10EE),
    (0x10EF, 0x1CAF, 0x10EF, 0x10EF),
    (0x10F0, 0x1CB0, 0x10F0, 0x10F0),
    (0x10F1, 0x1CB1, 0x10F1, 0x10F1),
    (0x10F2, 0x1CB2, 0x10F2, 0x10F2),
    (0x10F3, 0x1CB3, 0x10F3, 0x10F3),
    (0x10F4, 0x1CB4, 0x10F4, 0x10F4),
    (0x10F5, 0x1CB5, 0x10F5, 0x10F5),
    (0x10F6, 0x1CB6, 0x10F6, 0x10F6),
    (0x10F7, 0x1CB7, 0x10F7, 0x10F7),
    (0x10F8, 0x1CB8, 0x10F8, 0x10F8),
    (0x10F9, 0x1CB9, 0x10F9, 0x10F9),
    (0x10FA, 0x1CBA, 0x10FA, 0x10FA),
    (0x10FD, 0x1CBD, 0x10FD, 0x10FD),
    (0x10FE, 0x1CBE, 0x10FE, 0x10FE),
    (0x10FF, 0x1CBF, 0x10FF, 0x10FF),
    (0x13A0, 0x13A0, 0xAB70, 0x13A0),
    (0x13A1, 0x13A1, 0xAB71, 0x13A1),
    (0x13A2, 0x13A2, 0xAB72, 0x13A2),
    (0x13A3, 0x13A3, 0xAB73, 0x13A3),
    (0x13A4, 0x13A4, 0xAB74, 0x13A4),
    (0x13A5, 0x13A5, 0xAB75, 0x13A5),
    (0x13A6, 0x13A6, 0xAB76, 0x13A6),
    (0x13A7, 0x13A7, 0xAB77, 0x13A7),
    (0x13A8, 0x13A8, 0xAB78, 0x13A8),
    (0x13A9, 0x13A9, 0xAB79, 0x13A9),
    (0x13AA, 0x13AA, 0xAB7A, 0x13AA),
    (0x13AB, 0x13AB, 0xAB7B, 0x13AB),
    (0x13AC, 0x13AC, 0xAB7C, 0x13AC),
    (0x13AD, 0x13AD, 0xAB7D, 0x13AD),
    (0x13AE, 0x13AE, 0xAB7E, 0x13AE),
    (0x13AF, 0x13AF, 0xAB7F, 0x13AF),
    (0x13B0, 0x13B0, 0xAB80, 0x13B0),
    (0x13B1, 0x13B1, 0xAB81, 0x13B1),
    (0x13B2, 0x13B2, 0xAB82, 0x13B2),
    (0x13B3, 0x13B3, 0xAB83, 0x13B3),
    (0x13B4, 0x13B4, 0xAB84, 0x13B4),
    (0x13B5, 0x13B5, 0xAB85, 0x13B5),
    (0x13B6, 0x13B6, 0xAB86, 0x13B6),
    (0x13B7, 0x13B7, 0xAB87, 0x13B7),
    (0x13B8, 0x13B8, 0xAB88, 0x13B8),
    (0x13B9, 0x13B9, 0xAB89, 0x13B9),
    (0x13BA, 0x13BA, 0xAB8A, 0x13BA),
    (0x13BB, 0x13BB, 0xAB8B, 0x13BB),
    (0x13BC, 0x13BC, 0xAB8C, 0x13BC),
    (0x13BD, 0x13BD, 0xAB8D, 0x13BD),
    (0x13BE, 0x13BE, 0xAB8E, 0x13BE),
    (0x13BF, 0x13BF, 0xAB8F, 0x13BF),
    (0x13C0, 0x13C0, 0xAB90, 0x13C0),
    (0x13C1, 0x13C1, 0xAB91, 0x13C1),
    (0x13C2, 0x13C2, 0xAB92, 0x13C2),
    (0x13C3, 0x13C3, 0xAB93, 0x13C3),
    (0x13C4, 0x13C4, 0xAB94, 0x13C4),
    (0x13C5, 0x13C5, 0xAB95, 0x13C5),
    (0x13C6, 0x13C6, 0xAB96, 0x13C6),
    (0x13C7, 0x13C7, 0xAB97, 0x13C7),
    (0x13C8, 0x13C8, 0xAB98, 0x13C8),
    (0x13C9, 0x13C9, 0xAB99, 0x13C9),
    (0x13CA, 0x13CA, 0xAB9A, 0x13CA),
    (0x13CB, 0x13CB, 0xAB9B, 0x13CB),
    (0x13CC, 0x13CC, 0xAB9C, 0x13CC),
    (0x13CD, 0x13CD, 0xAB9D, 0x13CD),
    (0x13CE, 0x13CE, 0xAB9E, 0x13CE),
    (0x13CF, 0x13CF, 0xAB9F, 0x13CF),
    (0x13D0, 0x13D0, 0xABA0, 0x13D0),
    (0x13D1, 0x13D1, 0xABA1, 0x13D1),
    (0x13D2, 0x13D2, 0xABA2, 0x13D2),
    (0x13D3, 0x13D3, 0xABA3, 0x13D3),
    (0x13D4, 0x13D4, 0xABA4, 0x13D4),
    (0x13D5, 0x13D5, 0xABA5, 0x13D5),
    (0x13D6, 0x13D6, 0xABA6, 0x13D6),
    (0x13D7, 0x13D7, 0xABA7, 0x13D7),
    (0x13D8, 0x13D8, 0xABA8, 0x13D8),
    (0x13D9, 0x13D9, 0xABA9, 0x13D9),
    (0x13DA, 0x13DA, 0xABAA, 0x13DA),
    (0x13DB, 0x13DB, 0xABAB, 0x13DB),
    (0x13DC, 0x13DC, 0xABAC, 0x13DC),
    (0x13DD, 0x13DD, 0xABAD, 0x13DD),
    (0x13DE, 0x13DE, 0xABAE, 0x13DE),
    (0x13DF, 0x13DF, 0xABAF, 0x13DF),
    (0x13E0, 0x13E0, 0xABB0, 0x13E0),
    (0x13E1, 0x13E1, 0xABB1, 0x13E1),
    (0x13E2, 0x13E2, 0xABB2, 0x13E2),
    (0x13E3, 0x13E3, 0xABB3, 0x13E3),
    (0x13E4, 0x13E4, 0xABB4, 0x13E4),
    (0x13E5, 0x13E5, 0xABB5, 0x13E5),
    (0x13E6, 0x13E6, 0xABB6, 0x13E6),
    (0x13E7, 0x13E7, 0xABB7, 0x13E7),
    (0x13E8, 0x13E8, 0xABB8, 0x13E8),
    (0x13E9, 0x13E9, 0xABB9, 0x13E9),
    (0x13EA, 0x13EA, 0xABBA, 0x13EA),
    (0x13EB, 0x13EB, 0xABBB, 0x13EB),
    (0x13EC, 0x13EC, 0xABBC, 0x13EC),
    (0x13ED, 0x13ED, 0xABBD, 0x13ED),
    (0x13EE, 0x13EE, 0xABBE, 0x13EE),
    (0x13EF, 0x13EF, 0xABBF, 0x13EF),
    (0x13F0, 0x13F0, 0x13F8, 0x13F0),
    (0x13F1, 0x13F1, 0x13F9, 0x13F1),
    (0x13F2, 0x13F2, 0x13FA, 0x13F2),
    (0x13F3, 0x13F3, 0x13FB, 0x13F3),
    (0x13F4, 0x13F4, 0x13FC, 0x13F4),
    (0x13F5, 0x13F5, 0x13FD, 0x13F5),
    (0x13F8, 0x13F0, 0x13F8, 0x13F0),
    (0x13F9, 0x13F1, 0x13F9, 0x13F1),
    (0x13FA, 0x13F2, 0x13FA, 0x13F2),
    (0x13FB, 0x13F3, 0x13FB, 0x13F3),
    (0x13FC, 0x13F4, 0x13FC, 0x13F4),
    (0x13FD, 0x13F5, 0x13FD, 0x13F5),
    (0x1C80, 0x0412, 0x1C80, 0x0412),
    (0x1C81, 0x0414, 0x1C81, 0x0414),
    (0x1C82, 0x041E, 0x1C82, 0x041E),
    (0x1C83, 0x0421, 0x1C83, 0x0421),
    (0x1C84, 0x0422, 0x1C84, 0x0422),
    (0x1C85, 0x0422, 0x1C85, 0x0422),
    (0x1C86, 0x042A, 0x1C86, 0x042A),
    (0x1C87, 0x0462, 0x1C87, 0x0462),
    (0x1C88, 0xA64A, 0x1C88, 0xA64A),
    (0x1C90, 0x1C90, 0x10D0, 0x1C90),
    (0x1C91, 0x1C91, 0x10D1, 0x1C91),
    (0x1C92, 0x1C92, 0x10D2, 0x1C92),
    (0x1C93, 0x1C93, 0x10D3, 0x1C93),
    (0x1C94, 0x1C94, 0x10D4, 0x1C94),
    (0x1C95, 0x1C95, 0x10D5, 0x1C95),
    (0x1C96, 0x1C96, 0x10D6, 0x1C96),
    (0x1C97, 0x1C97, 0x10D7, 0x1C97),
    (0x1C98, 0x1C98, 0x10D8, 0x1C98),
    (0x1C99, 0x1C99, 0x10D9, 0x1C99),
    (0x1C9A, 0x1C9A, 0x10DA, 0x1C9A),
    (0x1C9B, 0x1C9B, 0x10DB, 0x1C9B),
    (0x1C9C, 0x1C9C, 0x10DC, 0x1C9C),
    (0x1C9D, 0x1C9D, 0x10DD, 0x1C9D),
    (0x1C9E, 0x1C9E, 0x10DE, 0x1C9E),
    (0x1C9F, 0x1C9F, 0x10DF, 0x1C9F),
    (0x1CA0, 0x1CA0, 0x10E0, 0x1CA0),
    (0x1CA1, 0x1CA1, 0x10E1, 0x1CA1),
    (0x1CA2, 0x1CA2, 0x10E2, 0x1CA2),
    (0x1CA3, 0x1CA3, 0x10E3, 0x1CA3),
    (0x1CA4, 0x1CA4, 0x10E4, 0x1CA4),
    (0x1CA5, 0x1CA5, 0x10E5, 0x1CA5),
    (0x1CA6, 0x1CA6, 0x10E6, 0x1CA6),
    (0x1CA7, 0x1CA7, 0x10E7, 0x1CA7),
    (0x1CA8, 0x1CA8, 0x10E8, 0x1CA8),
    (0x1CA9, 0x1CA9, 0x10E9, 0x1CA9),
    (0x1CAA, 0x1CAA, 0x10EA, 0x1CAA),
    (0x1CAB, 0x1CAB, 0x10EB, 0x1CAB),
    (0x1CAC, 0x1CAC, 0x10EC, 0x1CAC),
    (0x1CAD, 0x1CAD, 0x10ED, 0x1CAD),
    (0x1CAE, 0x1CAE, 0x10EE, 0x1CAE),
    (0x1CAF, 0x1CAF, 0x10EF, 0x1CAF),
    (0x1CB0, 0x1CB0, 0x10F0, 0x1CB0),
    (0x1CB1, 0x1CB1, 0x10F1, 0x1CB1),
    (0x1CB2, 0x1CB2, 0x10F2, 0x1CB2),
    (0x1CB3, 0x1CB3, 0x10F3, 0x1CB3),
    (0x1CB4, 0x1CB4, 0x10F4, 0x1CB4),
    (0x1CB5, 0x1CB5, 0x10F5, 0x1CB5),
    (0x1CB6, 0x1CB6, 0x10F6, 0x1CB6),
    (0x1CB7, 0x1CB7, 0x10F7, 0x1CB7),
    (0x1CB8, 0x1CB8, 0x10F8, 0x1CB8),
    (0x1CB9, 0x1CB9, 0x10F9, 0x1CB9),
    (0x1CBA, 0x1CBA, 0x10FA, 0x1CBA),
    (0x1CBD, 0x1CBD, 0x10FD, 0x1CBD),
    (0x1CBE, 0x1CBE, 0x10FE, 0x1CBE),
    (0x1CBF, 0x1CBF, 0x10FF, 0x1CBF),
    (0x1D79, 0xA77D, 0x1D79, 0xA77D),
    (0x1D7D, 0x2C63, 0x1D7D, 0x2C63),
    (0x1D8E, 0xA7C6, 0x1D8E, 0xA7C6),
    (0x1E00, 0x1E00, 0x1E01, 0x1E00),
    (0x1E01, 0x1E00, 0x1E01, 0x1E00),
    (0x1E02, 0x1E02, 0x1E03, 0x1E02),
    (0x1E03, 0x1E02, 0x1E03, 0x1E02),
    (0x1E04, 0x1E04, 0x1E05, 0x1E04),
    (0x1E05, 0x1E04, 0x1E05, 0x1E04),
    (0x1E06, 0x1E06, 0x1E07, 0x1E06),
    (0x1E07, 0x1E06, 0x1E07, 0x1E06),
    (0x1E08, 0x1E08, 0x1E09, 0x1E08),
    (0x1E09, 0x1E08, 0x1E09, 0x1E08),
    (0x1E0A, 0x1E0A, 0x1E0B, 0x1E0A),
    (0x1E0B, 0x1E0A, 0x1E0B, 0x1E0A),
    (0x1E0C, 0x1E0C, 0x1E0D, 0x1E0C),
    (0x1E0D, 0x1E0C, 0x1E0D, 0x1E0C),
    (0x1E0E, 0x1E0E, 0x1E0F, 0x1E0E),
    (0x1E0F, 0x1E0E, 0x1E0F, 0x1E0E),
    (0x1E10, 0x1E10, 0x1E11, 0x1E10),
    (0x1E11, 0x1E10, 0x1E11, 0x1E10),
    (0x1E12, 0x1E12, 0x1E13, 0x1E12),
    (0x1E13, 0x1E12, 0x1E13, 0x1E12),
    (0x1E14, 0x1E14, 0x1E15, 0x1E14),
    (0x1E15, 0x1E14, 0x1E15, 0x1E14),
    (0x1E16, 0x1E16, 0x1E17, 0x1E16),
    (0x1E17, 0x1E16, 0x1E17, 0x1E16),
    (0x1E18, 0x1E18, 0x1E19, 0x1E18),
    (0x1E19, 0x1E18, 0x1E19, 0x1E18),
    (0x1E1A, 0x1E1A, 0x1E1B, 0x1E1A),
    (0x1E1B, 0x1E1A, 0x1E1B, 0x1E1A),
    (0x1E1C, 0x1E1C, 0x1E1D, 0x1E1C),
    (0x1E1D, 0x1E1C, 0x1E1D, 0x1E1C),
    (0x1E1E, 0x1E1E, 0x1E1F, 0x1E1E),
    (0x1E1F, 0x1E1E, 0x1E1F, 0x1E1E),
    (0x1E20, 0x1E20, 0x1E21, 0x1E20),
    (0x1E21, 0x1E20, 0x1E21, 0x1E20),
    (0x1E22, 0x1E22, 0x1E23, 0x1E22),
    (0x1E23, 0x1E22, 0x1E23, 0x1E22),
    (0x1E24, 0x1E24, 0x1E25, 0x1E24),
    (0x1E25, 0x1E24, 0x1E25, 0x1E24),
    (0x1E26, 0x1E26, 0x1E27, 0x1E26),
    (0x1E27, 0x1E26, 0x1E27, 0x1E26),
    (0x1E28, 0x1E28, 0x1E29, 0x1E28),
    (0x1E29, 0x1E28, 0x1E29, 0x1E28),
    (0x1E2A, 0x1E2A, 0x1E2B, 0x1E2A),
    (0x1E2B, 0x1E2A, 0x1E2B, 0x1E2A),
    (0x1E2C, 0x1E2C, 0x1E2D, 0x1E2C),
    (0x1E2D, 0x1E2C, 0x1E2D, 0x1E2C),
    (0x1E2E, 0x1E2E, 0x1E2F, 0x1E2E),
    (0x1E2F, 0x1E2E, 0x1E2F, 0x1E2E),
    (0x1E30, 0x1E30, 0x1E31, 0x1E30),
    (0x1E31, 0x1E30, 0x1E31, 0x1E30),
    (0x1E32, 0x1E32, 0x1E33, 0x1E32),
    (0x1E33, 0x1E32, 0x1E33, 0x1E32),
    (0x1E34, 0x1E34, 0x1E35, 0x1E34),
    (0x1E35, 0x1E34, 0x1E35, 0x1E34),
    (0x1E36, 0x1E36, 0x1E37, 0x1E36),
    (0x1E37, 0x1E36, 0x1E37, 0x1E36),
    (0x1E38, 0x1E38, 0x1E39, 0x1E38),
    (0x1E39, 0x1E38, 0x1E39, 0x1E38),
    (0x1E3A, 0x1E3A, 0x1E3B, 0x1E3A),
    (0x1E3B, 0x1E3A, 0x1E3B, 0x1E3A),
    (0x1E3C, 0x1E3C, 0x1E3D, 0x1E3C),
    (0x1E3D, 0x1E3C, 0x1E3D, 0x1E3C),
    (0x1E3E, 0x1E3E, 0x1E3F, 0x1E3E),
    (0x1E3F, 0x1E3E, 0x1E3F, 0x1E3E),
    (0x1E40, 0x1E40, 0x1E41, 0x1E40),
    (0x1E41, 0x1E40, 0x1E41, 0x1E40),
    (0x1E42, 0x1E42, 0x1E43, 0x1E42),
    (0x1E43, 0x1E42, 0x1E43, 0x1E42),
    (0x1E44, 0x1E44, 0x1E45, 0x1E44),
    (0x1E45, 0x1E44, 0x1E45, 0x1E44),
    (0x1E46, 0x1E46, 0x1E47, 0x1E46),
    (0x1E47, 0x1E46, 0x1E47, 0x1E46),
    (0x1E48, 0x1E48, 0x1E49, 0x1E48),
    (0x1E49, 0x1E48, 0x1E49, 0x1E48),
    (0x1E4A, 0x1E4A, 0x1E4B, 0x1E4A),
    (0x1E4B, 0x1E4A, 0x1E4B, 0x1E4A),
    (0x1E4C, 0x1E4C, 0x1E4D, 0x1E4C),
    (0x1E4D, 0x1E4C, 0x1E4D, 0x1E4C),
    (0x1E4E, 0x1E4E, 0x1E4F, 0x1E4E),
    (0x1E4F, 0x1E4E, 0x1E4F, 0x1E4E),
    (0x1E50, 0x1E50, 0x1E51, 0x1E50),
    (0x1E51, 0x1E50, 0x1E51, 0x1E50),
    (0x1E52, 0x1E52, 0x1E53, 0x1E52),
    (0x1E53, 0x1E52, 0x1E53, 0x1E52),
    (0x1E54, 0x1E54, 0x1E55, 0x1E54),
    (0x1E55, 0x1E54, 0x1E55, 0x1E54),
    (0x1E56, 0x1E56, 0x1E57, 0x1E56),
    (0x1E57, 0x1E56, 0x1E57, 0x1E56),
    (0x1E58, 0x1E58, 0x1E59, 0x1E58),
    (0x1E59, 0x1E58, 0x1E59, 0x1E58),
    (0x1E5A, 0x1E5A, 0x1E5B, 0x1E5A),
    (0x1E5B, 0x1E5A, 0x1E5B, 0x1E5A),
    (0x1E5C, 0x1E5C, 0x1E5D, 0x1E5C),
    (0x1E5D, 0x1E5C, 0x1E5D, 0x1E5C),
    (0x1E5E, 0x1E5E, 0x1E5F, 0x1E5E),
    (0x1E5F, 0x1E5E, 0x1E5F, 0x1E5E),
    (0x1E60, 0x1E60, 0x1E61, 0x1E60),
    (0x1E61, 0x1E60, 0x1E61, 0x1E60),
    (0x1E62, 0x1E62, 0x1E63, 0x1E62),
    (0x1E63, 0x1E62, 0x1E63, 0x1E62),
    (0x1E64, 0x1E64, 0x1E65, 0x1E64),
    (0x1E65, 0x1E64, 0x1E65, 0x1E64),
    (0x1E66, 0x1E66, 0x1E67, 0x1E66),
    (0x1E67, 0x1E66, 0x1E67, 0x1E66),
    (0x1E68, 0x1E68, 0x1E69, 0x1E68),
    (0x1E69, 0x1E68, 0x1E69, 0x1E68),
    (0x1E6A, 0x1E6A, 0x1E6B, 0x1E6A),
    (0x1E6B, 0x1E6A, 0x1E6B, 0x1E6A),
    (0x1E6C, 0x1E6C, 0x1E6D, 0x1E6C),
    (0x1E6D, 0x1E6C, 0x1E6D, 0x1E6C),
    (0x1E6E, 0x1E6E, 0x1E6F, 0x1E6E),
    (0x1E6F, 0x1E6E, 0x1E6F, 0x1E6E),
    (0x1E70, 0x1E70, 0x1E71, 0x1E70),
    (0x1E71, 0x1E70, 0x1E71, 0x1E70),
    (0x1E72, 0x1E72, 0x1E73, 0x1E72),
    (0x1E73, 0x1E72, 0x1E73, 0x1E72),
    (0x1E74, 0x1E74, 0x1E75, 0x1E74),
    (0x1E75, 0x1E74, 0x1E75, 0x1E74),
    (0x1E76, 0x1E76, 0x1E77, 0x1E76),
    (0x1E77, 0x1E76, 0x1E77, 0x1E76),
    (0x1E78, 0x1E78, 0x1E79, 0x1E78),
    (0x1E79, 0x1E78, 0x1E79, 0x1E78),
    (0x1E7A, 0x1E7A, 0x1E7B, 0x1E7A),
    (0x1E7B, 0x1E7A, 0x1E7B, 0x1E7A),
    (0x1E7C, 0x1E7C, 0x1E7D, 0x1E7C),
    (0x1E7D, 0x1E7C, 0x1E7D, 0x1E7C),
    (0x1E7E, 0x1E7E, 0x1E7F, 0x1E7E),
    (0x1E7F, 0x1E7E, 0x1E7F, 0x1E7E),
    (0x1E80, 0x1E80, 0x1E81, 0x1E80),
    (0x1E81, 0x1E80, 0x1E81, 0x1E80),
    (0x1E82, 0x1E82, 0x1E83, 0x1E82),
    (0x1E83, 0x1E82, 0x1E83, 0x1E82),
    (0x1E84, 0x1E84, 0x1E85, 0x1E84),
    (0x1E85, 0x1E84, 0x1E85, 0x1E84),
    (0x1E86, 0x1E86, 0x1E87, 0x1E86),
    (0x1E87, 0x1E86, 0x1E87, 0x1E86),
    (0x1E88, 0x1E88, 0x1E89, 0x1E88),
    (0x1E89, 0x1E88, 0x1E89, 0x1E88),
    (0x1E8A, 0x1E8A, 0x1E8B, 0x1E8A),
    (0x1E8B, 0x1E8A, 0x1E8B, 0x1E8A),
    (0x1E8C, 0x1E8C, 0x1E8D, 0x1E8C),
    (0x1E8D, 0x1E8C, 0x1E8D, 0x1E8C),
    (0x1E8E, 0x1E8E, 0x1E8F, 0x1E8E),
    (0x1E8F, 0x1E8E, 0x1E8F, 0x1E8E),
    (0x1E90, 0x1E90, 0x1E91, 0x1E90),
    (0x1E91, 0x1E90, 0x1E91, 0x1E90),
    (0x1E92, 0x1E92, 0x1E93, 0x1E92),
    (0x1E93, 0x1E92, 0x1E93, 0x1E92),
    (0x1E94, 0x1E94, 0x1E95, 0x1E94),
    (0x1E95, 0x1E94, 0x1E95, 0x1E94),
    (0x1E9B, 0x1E60, 0x1E9B, 0x1E60),
    (0x1E9E, 0x1E9E, 0x00DF, 0x1E9E),
    (0x1EA0, 0x1EA0, 0x1EA1, 0x1EA0),
    (0x1EA1, 0x1EA0, 0x1EA1, 0x1EA0),
    (0x1EA2, 0x1EA2, 0x1EA3, 0x1EA2),
    (0x1EA3, 0x1EA2, 0x1EA3, 0x1EA2),
    (0x1EA4, 0x1EA4, 0x1EA5, 0x1EA4),
    (0x1EA5, 0x1EA4, 0x1EA5, 0x1EA4),
    (0x1EA6, 0x1EA6, 0x1EA7, 0x1EA6),
    (0x1EA7, 0x1EA6, 0x1EA7, 0x1EA6),
    (0x1EA8, 0x1EA8, 0x1EA9, 0x1EA8),
    (0x1EA9, 0x1EA8, 0x1EA9, 0x1EA8),
    (0x1EAA, 0x1EAA, 0x1EAB, 0x1EAA),
    (0x1EAB, 0x1EAA, 0x1EAB, 0x1EAA),
    (0x1EAC, 0x1EAC, 0x1EAD, 0x1EAC),
    (0x1EAD, 0x1EAC, 0x1EAD, 0x1EAC),
    (0x1EAE, 0x1EAE, 0x1EAF, 0x1EAE),
    (0x1EAF, 0x1EAE, 0x1EAF, 0x1EAE),
    (0x1EB0, 0x1EB0, 0x1EB1, 0x1EB0),
    (0x1EB1, 0x1EB0, 0x1EB1, 0x1EB0),
    (0x1EB2, 0x1EB2, 0x1EB3, 0x1EB2),
    (0x1EB3, 0x1EB2, 0x1EB3, 0x1EB2),
    (0x1EB4, 0x1EB4, 0x1EB5, 0x1EB4),
    (0x1EB5, 0x1EB4, 0x1EB5, 0x1EB4),
    (0x1EB6, 0x1EB6, 0x1EB7, 0x1EB6),
    (0x1EB7, 0x1EB6, 0x1EB7, 0x1EB6),
    (0x1EB8, 0x1EB8, 0x1EB9, 0x1EB8),
    (0x1EB9, 0x1EB8, 0x1EB9, 0x1EB8),
    (0x1EBA, 0x1EBA, 0x1EBB, 0x1EBA),
    (0x1EBB, 0x1EBA, 0x1EBB, 0x1EBA),
    (0x1EBC, 0x1EBC, 0x1EBD, 0x1EBC),
    (0x1EBD, 0x1EBC, 0x1EBD, 0x1EBC),
    (0x1EBE, 0x1EBE, 0x1EBF, 0x1EBE),
    (0x1EBF, 0x1EBE, 0x1EBF, 0x1EBE),
    (0x1EC0, 0x1EC0, 0x1EC1, 0x1EC0),
    (0x1EC1, 0x1EC0, 0x1EC1, 0x1EC0),
    (0x1EC2, 0x1EC2, 0x1EC3, 0x1EC2),
    (0x1EC3, 0x1EC2, 0x1EC3, 0x1EC2),
    (0x1EC4, 0x1EC4, 0x1EC5, 0x1EC4),
    (0x1EC5, 0x1EC4, 0x1EC5, 0x1EC4),
    (0x1EC6, 0x1EC6, 0x1EC7, 0x1EC6),
    (0x1EC7, 0x1EC6, 0x1EC7, 0x1EC6),
    (0x1EC8, 0x1EC8, 0x1EC9, 0x1EC8),
    (0x1EC9, 0x1EC8, 0x1EC9, 0x1EC8),
    (0x1ECA, 0x1ECA, 0x1ECB, 0x1ECA),
    (0x1ECB, 0x1ECA, 0x1ECB, 0x1ECA),
    (0x1ECC, 0x1ECC, 0x1ECD, 0x1ECC),
    (0x1ECD, 0x1ECC, 0x1ECD, 0x1ECC),
    (0x1ECE, 0x1ECE, 0x1ECF, 0x1ECE),
    (0x1ECF, 0x1ECE, 0x1ECF, 0x1ECE),
    (0x1ED0, 0x1ED0, 0x1ED1, 0x1ED0),
    (0x1ED1, 0x1ED0, 0x1ED1, 0x1ED0),
    (0x1ED2, 0x1ED2, 0x1ED3, 0x1ED2),
    (0x1ED3, 0x1ED2, 0x1ED3, 0x1ED2),
    (0x1ED4, 0x1ED4, 0x1ED5, 0x1ED4),
    (0x1ED5, 0x1ED4, 0x1ED5, 0x1ED4),
    (0x1ED6, 0x1ED6, 0x1ED7, 0x1ED6),
    (0x1ED7, 0x1ED6, 0x1ED7, 0x1ED6),
    (0x1ED8, 0x1ED8, 0x1ED9, 0x1ED8),
    (0x1ED9, 0x1ED8, 0x1ED9, 0x1ED8),
    (0x1EDA, 0x1EDA, 0x1EDB, 0x1EDA),
    (0x1EDB, 0x1EDA, 0x1EDB, 0x1EDA),
    (0x1EDC, 0x1EDC, 0x1EDD, 0x1EDC),
    (0x1EDD, 0x1EDC, 0x1EDD, 0x1EDC),
    (0x1EDE, 0x1EDE, 0x1EDF, 0x1EDE),
    (0x1EDF, 0x1EDE, 0x1EDF, 0x1EDE),
    (0x1EE0, 0x1EE0, 0x1EE1, 0x1EE0),
    (0x1EE1, 0x1EE0, 0x1EE1, 0x1EE0),
    (0x1EE2, 0x1EE2, 0x1EE3, 0x1EE2),
    (0x1EE3, 0x1EE2, 0x1EE3, 0x1EE2),
    (0x1EE4, 0x1EE4, 0x1EE5, 0x1EE4),
    (0x1EE5, 0x1EE4, 0x1EE5, 0x1EE4),
    (0x1EE6, 0x1EE6, 0x1EE7, 0x1EE6),
    (0x1EE7, 0x1EE6, 0x1EE7, 0x1EE6),
    (0x1EE8, 0x1EE8, 0x1EE9, 0x1EE8),
    (0x1EE9, 0x1EE8, 0x1EE9, 0x1EE8),
    (0x1EEA, 0x1EEA, 0x1EEB, 0x1EEA),
    (0x1EEB, 0x1EEA, 0x1EEB, 0x1EEA),
    (0x1EEC, 0x1EEC, 0x1EED, 0x1EEC),
    (0x1EED, 0x1EEC, 0x1EED, 0x1EEC),
    (0x1EEE, 0x1EEE, 0x1EEF, 0x1EEE),
    (0x1EEF, 0x1EEE, 0x1EEF, 0x1EEE),
    (0x1EF0, 0x1EF0, 0x1EF1, 0x1EF0),
    (0x1EF1, 0x1EF0, 0x1EF1, 0x1EF0),
    (0x1EF2, 0x1EF2, 0x1EF3, 0x1EF2),
    (0x1EF3, 0x1EF2, 0x1EF3, 0x1EF2),
    (0x1EF4, 0x1EF4, 0x1EF5, 0x1EF4),
    (0x1EF5, 0x1EF4, 0x1EF5, 0x1EF4),
    (0x1EF6, 0x1EF6, 0x1EF7, 0x1EF6),
    (0x1EF7, 0x1EF6, 0x1EF7, 0x1EF6),
    (0x1EF8, 0x1EF8, 0x1EF9, 0x1EF8),
    (0x1EF9, 0x1EF8, 0x1EF9, 0x1EF8),
    (0x1EFA, 0x1EFA, 0x1EFB, 0x1EFA),
    (0x1EFB, 0x1EFA, 0x1EFB, 0x1EFA),
    (0x1EFC, 0x1EFC, 0x1EFD, 0x1EFC),
    (0x1EFD, 0x1EFC, 0x1EFD, 0x1EFC),
    (0x1EFE, 0x1EFE, 0x1EFF, 0x1EFE),
    (0x1EFF, 0x1EFE, 0x1EFF, 0x1EFE),
    (0x1F00, 0x1F08, 0x1F00, 0x1F08),
    (0x1F01, 0x1F09, 0x1F01, 0x1F09),
    (0x1F02, 0x1F0A, 0x1F02, 0x1F0A),
    (0x1F03, 0x1F0B, 0x1F03, 0x1F0B),
    (0x1F04, 0x1F0C, 0x1F04, 0x1F0C),
    (0x1F05, 0x1F0D, 0x1F05, 0x1F0D),
    (0x1F06, 0x1F0E, 0x1F06, 0x1F0E),
    (0x1F07, 0x1F0F, 0x1F07, 0x1F0F),
    (0x1F08, 0x1F08, 0x1F00, 0x1F08),
    (0x1F09, 0x1F09, 0x1F01, 0x1F09),
    (0x1F0A, 0x1F0A, 0x1F02, 0x1F0A),
    (0x1F0B, 0x1F0B, 0x1F03, 0x1F0B),
    (0x1F0C, 0x1F0C, 0x1F04, 0x1F0C),
    (0x1F0D, 0x1F0D, 0x1F05, 0x1F0D),
    (0x1F0E, 0x1F0E, 0x1F06, 0x1F0E),
    (0x1F0F, 0x1F0F, 0x1F07, 0x1F0F),
    (0x1F10, 0x1F18, 0x1F10, 0x1F18),
    (0x1F11, 0x1F19, 0x1F11, 0x1F19),
    (0x1F12, 0x1F1A, 0x1F12, 0x1F1A),
    (0x1F13, 0x1F1B, 0x1F13, 0x1F1B),
    (0x1F14, 0x1F1C, 0x1F14, 0x1F1C),
    (0x1F15, 0x1F1D, 0x1F15, 0x1F1D),
    (0x1F18, 0x1F18, 0x1F10, 0x1F18),
    (0x1F19, 0x1F19, 0x1F11, 0x1F19),
    (0x1F1A, 0x1F1A, 0x1F12, 0x1F1A),
    (0x1F1B, 0x1F1B, 0x1F13, 0x1F1B),
    (0x1F1C, 0x1F1C, 0x1F14, 0x1F1C),
    (0x1F1D, 0x1F1D, 0x1F15, 0x1F1D),
    (0x1F20, 0x1F28, 0x1F20, 0x1F28),
    (0x1F21, 0x1F29, 0x1F21, 0x1F29),
    (0x1F22, 0x1F2A, 0x1F22, 0x1F2A),
    (0x1F23, 0x1F2B, 0x1F23, 0x1F2B),
    (0x1F24, 0x1F2C, 0x1F24, 0x1F2C),
    (0x1F25, 0x1F2D, 0x1F25, 0x1F2D),
    (0x1F26, 0x1F2E, 0x1F26, 0x1F2E),
    (0x1F27, 0x1F2F, 0x1F27, 0x1F2F),
    (0x1F28, 0x1F28, 0x1F20, 0x1F28),
    (0x1F29, 0x1F29, 0x1F21, 0x1F29),
    (0x1F2A, 0x1F2A, 0x1F22, 0x1F2A),
    (0x1F2B, 0x1F2B, 0x1F23, 0x1F2B),
    (0x1F2C, 0x1F2C, 0x1F24, 0x1F2C),
    (0x1F2D, 0x1F2D, 0x1F25, 0x1F2D),
    (0x1F2E, 0x1F2E, 0x1F26, 0x1F2E),
    (0x1F2F, 0x1F2F, 0x1F27, 0x1F2F),
    (0x1F30, 0x1F38, 0x1F30, 0x1F38),
    (0x1F31, 0x1F39, 0x1F31, 0x1F39),
    (0x1F32, 0x1F3A, 0x1F32, 0x1F3A),
    (0x1F33, 0x1F3B, 0x1F33, 0x1F3B),
    (0x1F34, 0x1F3C, 0x1F34, 0x1F3C),
    (0x1F35, 0x1F3D, 0x1F35, 0x1F3D),
    (0x1F36, 0x1F3E, 0x1F36, 0x1F3E),
    (0x1F37, 0x1F3F, 0x1F37, 0x1F3F),
    (0x1F38, 0x1F38, 0x1F30, 0x1F38),
    (0x1F39, 0x1F39, 0x1F31, 0x1F39),
    (0x1F3A, 0x1F3A, 0x1F32, 0x1F3A),
    (0x1F3B, 0x1F3B, 0x1F33, 0x1F3B),
    (0x1F3C, 0x1F3C, 0x1F34, 0x1F3C),
    (0x1F3D, 0x1F3D, 0x1F35, 0x1F3D),
    (0x1F3E, 0x1F3E, 0x1F36, 0x1F3E),
    (0x1F3F, 0x1F3F, 0x1F37, 0x1F3F),
    (0x1F40, 0x1F48, 0x1F40, 0x1F48),
    (0x1F41, 0x1F49, 0x1F41, 0x1F49),
    (0x1F42, 0x1F4A, 0x1F42, 0x1F4A),
    (0x1F43, 0x1F4B, 0x1F43, 0x1F4B),
    (0x1F44, 0x1F4C, 0x1F44, 0x1F4C),
    (0x1F45, 0x1F4D, 0x1F45, 0x1F4D),
    (0x1F48, 0x1F48, 0x1F40, 0x1F48),
    (0x1F49, 0x1F49, 0x1F41, 0x1F49),
    (0x1F4A, 0x1F4A, 0x1F42, 0x1F4A),
    (0x1F4B, 0x1F4B, 0x1F43, 0x1F4B),
    (0x1F4C, 0x1F4C, 0x1F44, 0x1F4C),
    (0x1F4D, 0x1F4D, 0x1F45, 0x1F4D),
    (0x1F51, 0x1F59, 0x1F51, 0x1F59),
    (0x1F53, 0x1F5B, 0x1F53, 0x1F5B),
    (0x1F55, 0x1F5D, 0x1F55, 0x1F5D),
    (0x1F57, 0x1F5F, 0x1F57, 0x1F5F),
    (0x1F59, 0x1F59, 0x1F51, 0x1F59),
    (0x1F5B, 0x1F5B, 0x1F53, 0x1F5B),
    (0x1F5D, 0x1F5D, 0x1F55, 0x1F5D),
    (0x1F5F, 0x1F5F, 0x1F57, 0x1F5F),
    (0x1F60, 0x1F68, 0x1F60, 0x1F68),
    (0x1F61, 0x1F69, 0x1F61, 0x1F69),
    (0x1F62, 0x1F6A, 0x1F62, 0x1F6A),
    (0x1F63, 0x1F6B, 0x1F63, 0x1F6B),
    (0x1F64, 0x1F6C, 0x1F64, 0x1F6C),
    (0x1F65, 0x1F6D, 0x1F65, 0x1F6D),
    (0x1F66, 0x1F6E, 0x1F66, 0x1F6E),
    (0x1F67, 0x1F6F, 0x1F67, 0x1F6F),
    (0x1F68, 0x1F68, 0x1F60, 0x1F68),
    (0x1F69, 0x1F69, 0x1F61, 0x1F69),
    (0x1F6A, 0x1F6A, 0x1F62, 0x1F6A),
    (0x1F6B, 0x1F6B, 0x1F63, 0x1F6B),
    (0x1F6C, 0x1F6C, 0x1F64, 0x1F6C),
    (0x1F6D, 0x1F6D, 0x1F65, 0x1F6D),
    (0x1F6E, 0x1F6E, 0x1F66, 0x1F6E),
    (0x1F6F, 0x1F6F, 0x1F67, 0x1F6F),
    (0x1F70, 0x1FBA, 0x1F70, 0x1FBA),
    (0x1F71, 0x1FBB, 0x1F71, 0x1FBB),
    (0x1F72, 0x1FC8, 0x1F72, 0x1FC8),
    (0x1F73, 0x1FC9, 0x1F73, 0x1FC9),
    (0x1F74, 0x1FCA, 0x1F74, 0x1FCA),
    (0x1F75, 0x1FCB, 0x1F75, 0x1FCB),
    (0x1F76, 0x1FDA, 0x1F76, 0x1FDA),
    (0x1F77, 0x1FDB, 0x1F77, 0x1FDB),
    (0x1F78, 0x1FF8, 0x1F78, 0x1FF8),
    (0x1F79, 0x1FF9, 0x1F79, 0x1FF9),
    (0x1F7A, 0x1FEA, 0x1F7A, 0x1FEA),
    (0x1F7B, 0x1FEB, 0x1F7B, 0x1FEB),
    (0x1F7C, 0x1FFA, 0x1F7C, 0x1FFA),
    (0x1F7D, 0x1FFB, 0x1F7D, 0x1FFB),
    (0x1F80, 0x1F88, 0x1F80, 0x1F88),
    (0x1F81, 0x1F89, 0x1F81, 0x1F89),
    (0x1F82, 0x1F8A, 0x1F82, 0x1F8A),
    (0x1F83, 0x1F8B, 0x1F83, 0x1F8B),
    (0x1F84, 0x1F8C, 0x1F84, 0x1F8C),
    (0x1F85, 0x1F8D, 0x1F85, 0x1F8D),
    (0x1F86, 0x1F8E, 0x1F86, 0x1F8E),
    (0x1F87, 0x1F8F, 0x1F87, 0x1F8F),
    (0x1F88, 0x1F88, 0x1F80, 0x1F88),
    (0x1F89, 0x1F89, 0x1F81, 0x1F89),
    (0x1F8A, 0x1F8A, 0x1F82, 0x1F8A),
    (0x1F8B, 0x1F8B, 0x1F83, 0x1F8B),
    (0x1F8C, 0x1F8C, 0x1F84, 0x1F8C),
    (0x1F8D, 0x1F8D, 0x1F85, 0x1F8D),
    (0x1F8E, 0x1F8E, 0x1F86, 0x1F8E),
    (0x1F8F, 0x1F8F, 0x1F87, 0x1F8F),
    (0x1F90, 0x1F98, 0x1F90, 0x1F98),
    (0x1F91, 0x1F99, 0x1F91, 0x1F99),
    (0x1F92, 0x1F9A, 0x1F92, 0x1F9A),
    (0x1F93, 0x1F9B, 0x1F93, 0x1F9B),
    (0x1F94, 0x1F9C, 0x1F94, 0x1F9C),
    (0x1F95, 0x1F9D, 0x1F95, 0x1F9D),
    (0x1F96, 0x1F9E, 0x1F96, 0x1F9E),
    (0x1F97, 0x1F9F, 0x1F97, 0x1F9F),
    (0x1F98, 0x1F98, 0x1F90, 0x1F98),
    (0x1F99, 0x1F99, 0x1F91, 0x1F99),
    (0x1F9A, 0x1F9A, 0x1F92, 0x1F9A),
    (0x1F9B, 0x1F9B, 0x1F93, 0x1F9B),
    (0x1F9C, 0x1F9C, 0x1F94, 0x1F9C),
    (0x1F9D, 0x1F9D, 0x1F95, 0x1F9D),
    (0x1F9E, 0x1F9E, 0x1F96, 0x1F9E),
    (0x1F9F, 0x1F9F, 0x1F97, 0x1F9F),
    (0x1FA0, 0x1FA8, 0x1FA0, 0x1FA8),
    (0x1FA1, 0x1FA9, 0x1FA1, 0x1FA9),
    (0x1FA2, 0x1FAA, 0x1FA2, 0x1FAA),
    (0x1FA3, 0x1FAB, 0x1FA3, 0x1FAB),
    (0x1FA4, 0x1FAC, 0x1FA4, 0x1FAC),
    (0x1FA5, 0x1FAD, 0x1FA5, 0x1FAD),
    (0x1FA6, 0x1FAE, 0x1FA6, 0x1FAE),
    (0x1FA7, 0x1FAF, 0x1FA7, 0x1FAF),
    (0x1FA8, 0x1FA8, 0x1FA0, 0x1FA8),
    (0x1FA9, 0x1FA9, 0x1FA1, 0x1FA9),
    (0x1FAA, 0x1FAA, 0x1FA2, 0x1FAA),
    (0x1FAB, 0x1FAB, 0x1FA3, 0x1FAB),
    (0x1FAC, 0x1FAC, 0x1FA4, 0x1FAC),
    (0x1FAD, 0x1FAD, 0x1FA5, 0x1FAD),
    (0x1FAE, 0x1FAE, 0x1FA6, 0x1FAE),
    (0x1FAF, 0x1FAF, 0x1FA7, 0x1FAF),
    (0x1FB0, 0x1FB8, 0x1FB0, 0x1FB8),
    (0x1FB1, 0x1FB9, 0x1FB1, 0x1FB9),
    (0x1FB3, 0x1FBC, 0x1FB3, 0x1FBC),
    (0x1FB8, 0x1FB8, 0x1FB0, 0x1FB8),
    (0x1FB9, 0x1FB9, 0x1FB1, 0x1FB9),
    (0x1FBA, 0x1FBA, 0x1F70, 0x1FBA),
    (0x1FBB, 0x1FBB, 0x1F71, 0x1FBB),
    (0x1FBC, 0x1FBC, 0x1FB3, 0x1FBC),
    (0x1FBE, 0x0399, 0x1FBE, 0x0399),
    (0x1FC3, 0x1FCC, 0x1FC3, 0x1FCC),
    (0x1FC8, 0x1FC8, 0x1F72, 0x1FC8),
    (0x1FC9, 0x1FC9, 0x1F73, 0x1FC9),
    (0x1FCA, 0x1FCA, 0x1F74, 0x1FCA),
    (0x1FCB, 0x1FCB, 0x1F75, 0x1FCB),
    (0x1FCC, 0x1FCC, 0x1FC3, 0x1FCC),
    (0x1FD0, 0x1FD8, 0x1FD0, 0x1FD8),
    (0x1FD1, 0x1FD9, 0x1FD1, 0x1FD9),
    (0x1FD8, 0x1FD8, 0x1FD0, 0x1FD8),
    (0x1FD9, 0x1FD9, 0x1FD1, 0x1FD9),
    (0x1FDA, 0x1FDA, 0x1F76, 0x1FDA),
    (0x1FDB, 0x1FDB, 0x1F77, 0x1FDB),
    (0x1FE0, 0x1FE8, 0x1FE0, 0x1FE8),
    (0x1FE1, 0x1FE9, 0x1FE1, 0x1FE9),
    (0x1FE5, 0x1FEC, 0x1FE5, 0x1FEC),
    (0x1FE8, 0x1FE8, 0x1FE0, 0x1FE8),
    (0x1FE9, 0x1FE9, 0x1FE1, 0x1FE9),
    (0x1FEA, 0x1FEA, 0x1F7A, 0x1FEA),
    (0x1FEB, 0x1FEB, 0x1F7B, 0x1FEB),
    (0x1FEC, 0x1FEC, 0x1FE5, 0x1FEC),
    (0x1FF3, 0x1FFC, 0x1FF3, 0x1FFC),
    (0x1FF8, 0x1FF8, 0x1F78, 0x1FF8),
    (0x1FF9, 0x1FF9, 0x1F79, 0x1FF9),
    (0x1FFA, 0x1FFA, 0x1F7C, 0x1FFA),
    (0x1FFB, 0x1FFB, 0x1F7D, 0x1FFB),
    (0x1FFC, 0x1FFC, 0x1FF3, 0x1FFC),
    (0x2126, 0x2126, 0x03C9, 0x2126),
    (0x212A, 0x212A, 0x006B, 0x212A),
    (0x212B, 0x212B, 0x00E5, 0x212B),
    (0x2132, 0x2132, 0x214E, 0x2132),
    (0x214E, 0x2132, 0x214E, 0x2132),
    (0x2160, 0x2160, 0x2170, 0x2160),
    (0x2161, 0x2161, 0x2171, 0x2161),
    (0x2162, 0x2162, 0x2172, 0x2162),
    (0x2163, 0x2163, 0x2173, 0x2163),
    (0x2164, 0x2164, 0x2174, 0x2164),
    (0x2165, 0x2165, 0x2175, 0x2165),
    (0x2166, 0x2166, 0x2176, 0x2166),
    (0x2167, 0x2167, 0x2177, 0x2167),
    (0x2168, 0x2168, 0x2178, 0x2168),
    (0x2169, 0x2169, 0x2179, 0x2169),
    (0x216A, 0x216A, 0x217A, 0x216A),
    (0x216B, 0x216B, 0x217B, 0x216B),
    (0x216C, 0x216C, 0x217C, 0x216C),
    (0x216D, 0x216D, 0x217D, 0x216D),
    (0x216E, 0x216E, 0x217E, 0x216E),
    (0x216F, 0x216F, 0x217F, 0x216F),
    (0x2170, 0x2160, 0x2170, 0x2160),
    (0x2171, 0x2161, 0x2171, 0x2161),
    (0x2172, 0x2162, 0x2172, 0x2162),
    (0x2173, 0x2163, 0x2173, 0x2163),
    (0x2174, 0x2164, 0x2174, 0x2164),
    (0x2175, 0x2165, 0x2175, 0x2165),
    (0x2176, 0x2166, 0x2176, 0x2166),
    (0x2177, 0x2167, 0x2177, 0x2167),
    (0x2178, 0x2168, 0x2178, 0x2168),
    (0x2179, 0x2169, 0x2179, 0x2169),
    (0x217A, 0x216A, 0x217A, 0x216A),
    (0x217B, 0x216B, 0x217B, 0x216B),
    (0x217C, 0x216C, 0x217C, 0x216C),
    (0x217D, 0x216D, 0x217D, 0x216D),
    (0x217E, 0x216E, 0x217E, 0x216E),
    (0x217F, 0x216F, 0x217F, 0x216F),
    (0x2183, 0x2183, 0x2184, 0x2183),
    (0x2184, 0x2183, 0x2184, 0x2183),
    (0x24B6, 0x24B6, 0x24D0, 0x24B6),
    (0x24B7, 0x24B7, 0x24D1, 0x24B7),
    (0x24B8, 0x24B8, 0x24D2, 0x24B8),
    (0x24B9, 0x24B9, 0x24D3, 0x24B9),
    (0x24BA, 0x24BA, 0x24D4, 0x24BA),
    (0x24BB, 0x24BB, 0x24D5, 0x24BB),
    (0x24BC, 0x24BC, 0x24D6, 0x24BC),
    (0x24BD, 0x24BD, 0x24D7, 0x24BD),
    (0x24BE, 0x24BE, 0x24D8, 0x24BE),
    (0x24BF, 0x24BF, 0x24D9, 0x24BF),
    (0x24C0, 0x24C0, 0x24DA, 0x24C0),
    (0x24C1, 0x24C1, 0x24DB, 0x24C1),
    (0x24C2, 0x24C2, 0x24DC, 0x24C2),
    (0x24C3, 0x24C3, 0x24DD, 0x24C3),
    (0x24C4, 0x24C4, 0x24DE, 0x24C4),
    (0x24C5, 0x24C5, 0x24DF, 0x24C5),
    (0x24C6, 0x24C6, 0x24E0, 0x24C6),
    (0x24C7, 0x24C7, 0x24E1, 0x24C7),
    (0x24C8, 0x24C8, 0x24E2, 0x24C8),
    (0x24C9, 0x24C9, 0x24E3, 0x24C9),
    (0x24CA, 0x24CA, 0x24E4, 0x24CA),
    (0x24CB, 0x24CB, 0x24E5, 0x24CB),
    (0x24CC, 0x24CC, 0x24E6, 0x24CC),
    (0x24CD, 0x24CD, 0x24E7, 0x24CD),
    (0x24CE, 0x24CE, 0x24E8, 0x24CE),
    (0x24CF, 0x24CF, 0x24E9, 0x24CF),
    (0x24D0, 0x24B6, 0x24D0, 0x24B6),
    (0x24D1, 0x24B7, 0x24D1, 0x24B7),
    (0x24D2, 0x24B8, 0x24D2, 0x24B8),
    (0x24D3, 0x24B9, 0x24D3, 0x24B9),
    (0x24D4, 0x24BA, 0x24D4, 0x24BA),
    (0x24D5, 0x24BB, 0x24D5, 0x24BB),
    (0x24D6, 0x24BC, 0x24D6, 0x24BC),
    (0x24D7, 0x24BD, 0x24D7, 0x24BD),
    (0x24D8, 0x24BE, 0x24D8, 0x24BE),
    (0x24D9, 0x24BF, 0x24D9, 0x24BF),
    (0x24DA, 0x24C0, 0x24DA, 0x24C0),
    (0x24DB, 0x24C1, 0x24DB, 0x24C1),
    (0x24DC, 0x24C2, 0x24DC, 0x24C2),
    (0x24DD, 0x24C3, 0x24DD, 0x24C3),
    (0x24DE, 0x24C4, 0x24DE, 0x24C4),
    (0x24DF, 0x24C5, 0x24DF, 0x24C5),
    (0x24E0, 0x24C6, 0x24E0, 0x24C6),
    (0x24E1, 0x24C7, 0x24E1, 0x24C7),
    (0x24E2, 0x24C8, 0x24E2, 0x24C8),
    (0x24E3, 0x24C9, 0x24E3, 0x24C9),
    (0x24E4, 0x24CA, 0x24E4, 0x24CA),
    (0x24E5, 0x24CB, 0x24E5, 0x24CB),
    (0x24E6, 0x24CC, 0x24E6, 0x24CC),
    (0x24E7, 0x24CD, 0x24E7, 0x24CD),
    (0x24E8, 0x24CE, 0x24E8, 0x24CE),
    (0x24E9, 0x24CF, 0x24E9, 0x24CF),
    (0x2C00, 0x2C00, 0x2C30, 0x2C00),
    (0x2C01, 0x2C01, 0x2C31, 0x2C01),
    (0x2C02, 0x2C02, 0x2C32, 0x2C02),
    (0x2C03, 0x2C03, 0x2C33, 0x2C03),
    (0x2C04, 0x2C04, 0x2C34, 0x2C04),
    (0x2C05, 0x2C05, 0x2C35, 0x2C05),
    (0x2C06, 0x2C06, 0x2C36, 0x2C06),
    (0x2C07, 0x2C07, 0x2C37, 0x2C07),
    (0x2C08, 0x2C08, 0x2C38, 0x2C08),
    (0x2C09, 0x2C09, 0x2C39, 0x2C09),
    (0x2C0A, 0x2C0A, 0x2C3A, 0x2C0A),
    (0x2C0B, 0x2C0B, 0x2C3B, 0x2C0B),
    (0x2C0C, 0x2C0C, 0x2C3C, 0x2C0C),
    (0x2C0D, 0x2C0D, 0x2C3D, 0x2C0D),
    (0x2C0E, 0x2C0E, 0x2C3E, 0x2C0E),
    (0x2C0F, 0x2C0F, 0x2C3F, 0x2C0F),
    (0x2C10, 0x2C10, 0x2C40, 0x2C10),
    (0x2C11, 0x2C11, 0x2C41, 0x2C11),
    (0x2C12, 0x2C12, 0x2C42, 0x2C12),
    (0x2C13, 0x2C13, 0x2C43, 0x2C13),
    (0x2C14, 0x2C14, 0x2C44, 0x2C14),
    (0x2C15, 0x2C15, 0x2C45, 0x2C15),
    (0x2C16, 0x2C16, 0x2C46, 0x2C16),
    (0x2C17, 0x2C17, 0x2C47, 0x2C17),
    (0x2C18, 0x2C18, 0x2C48, 0x2C18),
    (0x2C19, 0x2C19, 0x2C49, 0x2C19),
    (0x2C1A, 0x2C1A, 0x2C4A, 0x2C1A),
    (0x2C1B, 0x2C1B, 0x2C4B, 0x2C1B),
    (0x2C1C, 0x2C1C, 0x2C4C, 0x2C1C),
    (0x2C1D, 0x2C1D, 0x2C4D, 0x2C1D),
    (0x2C1E, 0x2C1E, 0x2C4E, 0x2C1E),
    (0x2C1F, 0x2C1F, 0x2C4F, 0x2C1F),
    (0x2C20, 0x2C20, 0x2C50, 0x2C20),
    (0x2C21, 0x2C21, 0x2C51, 0x2C21),
    (0x2C22, 0x2C22, 0x2C52, 0x2C22),
    (0x2C23, 0x2C23, 0x2C53, 0x2C23),
    (0x2C24, 0x2C24, 0x2C54, 0x2C24),
    (0x2C25, 0x2C25, 0x2C55, 0x2C25),
    (0x2C26, 0x2C26, 0x2C56, 0x2C26),
    (0x2C27, 0x2C27, 0x2C57, 0x2C27),
    (0x2C28, 0x2C28, 0x2C58, 0x2C28),
    (0x2C29, 0x2C29, 0x2C59, 0x2C29),
    (0x2C2A, 0x2C2A, 0x2C5A, 0x2C2A),
    (0x2C2B, 0x2C2B, 0x2C5B, 0x2C2B),
    (0x2C2C, 0x2C2C, 0x2C5C, 0x2C2C),
    (0x2C2D, 0x2C2D, 0x2C5D, 0x2C2D),
    (0x2C2E, 0x2C2E, 0x2C5E, 0x2C2E),
    (0x2C2F, 0x2C2F, 0x2C5F, 0x2C2F),
    (0x2C30, 0x2C00, 0x2C30, 0x2C00),
    (0x2C31, 0x2C01, 0x2C31, 0x2C01),
    (0x2C32, 0x2C02, 0x2C32, 0x2C02),
    (0x2C33, 0x2C03, 0x2C33, 0x2C03),
    (0x2C34, 0x2C04, 0x2C34, 0x2C04),
    (0x2C35, 0x2C05, 0x2C35, 0x2C05),
    (0x2C36, 0x2C06, 0x2C36, 0x2C06),
    (0x2C37, 0x2C07, 0x2C37, 0x2C07),
    (0x2C38, 0x2C08, 0x2C38, 0x2C08),
    (0x2C39, 0x2C09, 0x2C39, 0x2C09),
    (0x2C3A, 0x2C0A, 0x2C3A, 0x2C0A),
    (0x2C3B, 0x2C0B, 0x2C3B, 0x2C0B),
    (0x2C3C, 0x2C0C, 0x2C3C, 0x2C0C),
    (0x2C3D, 0x2C0D, 0x2C3D, 0x2C0D),
    (0x2C3E, 0x2C0E, 0x2C3E, 0x2C0E),
    (0x2C3F, 0x2C0F, 0x2C3F, 0x2C0F),
    (0x2C40, 0x2C10, 0x2C40, 0x2C10),
    (0x2C41, 0x2C11, 0x2C41, 0x2C11),
    (0x2C42, 0x2C12, 0x2C42, 0x2C12),
    (0x2C43, 0x2C13, 0x2C43, 0x2C13),
    (0x2C44, 0x2C14, 0x2C44, 0x2C14),
    (0x2C45, 0x2C15, 0x2C45, 0x2C15),
    (0x2C46, 0x2C16, 0x2C46, 0x2C16),
    (0x2C47, 0x2C17, 0x2C47, 0x2C17),
    (0x2C48, 0x2C18, 0x2C48, 0x2C18),
    (0x2C49, 0x2C19, 0x2C49, 0x2C19),
    (0x2C4A, 0x2C1A, 0x2C4A, 0x2C1A),
    (0x2C4B, 0x2C1B, 0x2C4B, 0x2C1B),
    (0x2C4C, 0x2C1C, 0x2C4C, 0x2C1C),
    (0x2C4D, 0x2C1D, 0x2C4D, 0x2C1D),
    (0x2C4E, 0x2C1E, 0x2C4E, 0x2C1E),
    (0x2C4F, 0x2C1F, 0x2C4F, 0x2C1F),
    (0x2C50, 0x2C20, 0x2C50, 0x2C20),
    (0x2C51, 0x2C21, 0x2C51, 0x2C21),
    (0x2C52, 0x2C22, 0x2C52, 0x2C22),
    (0x2C53, 0x2C23, 0x2C53, 0x2C23),
    (0x2C54, 0x2C24, 0x2C54, 0x2C24),
    (0x2C55, 0x2C25, 0x2C55, 0x2C25),
    (0x2C56, 0x2C26, 0x2C56, 0x2C26),
    (0x2C57, 0x2C27, 0x2C57, 0x2C27),
    (0x2C58, 0x2C28, 0x2C58, 0x2C28),
    (0x2C59, 0x2C29, 0x2C59, 0x2C29),
    (0x2C5A, 0x2C2A, 0x2C5A, 0x2C2A),
    (0x2C5B, 0x2C2B, 0x2C5B, 0x2C2B),
    (0x2C5C, 0x2C2C, 0x2C5C, 0x2C2C),
    (0x2C5D, 0x2C2D, 0x2C5D, 0x2C2D),
    (0x2C5E, 0x2C2E, 0x2C5E, 0x2C2E),
    (0x2C5F, 0x2C2F, 0x2C5F, 0x2C2F),
    (0x2C60, 0x2C60, 0x2C61, 0x2C60),
    (0x2C61, 0x2C60, 0x2C61, 0x2C60),
    (0x2C62, 0x2C62, 0x026B, 0x2C62),
    (0x2C63, 0x2C63, 0x1D7D, 0x2C63),
    (0x2C64, 0x2C64, 0x027D, 0x2C64),
    (0x2C65, 0x023A, 0x2C65, 0x023A),
    (0x2C66, 0x023E, 0x2C66, 0x023E),
    (0x2C67, 0x2C67, 0x2C68, 0x2C67),
    (0x2C68, 0x2C67, 0x2C68, 0x2C67),
    (0x2C69, 0x2C69, 0x2C6A, 0x2C69),
    (0x2C6A, 0x2C69, 0x2C6A, 0x2C69),
    (0x2C6B, 0x2C6B, 0x2C6C, 0x2C6B),
    (0x2C6C, 0x2C6B, 0x2C6C, 0x2C6B),
    (0x2C6D, 0x2C6D, 0x0251, 0x2C6D),
    (0x2C6E, 0x2C6E, 0x0271, 0x2C6E),
    (0x2C6F, 0x2C6F, 0x0250, 0x2C6F),
    (0x2C70, 0x2C70, 0x0252, 0x2C70),
    (0x2C72, 0x2C72, 0x2C73, 0x2C72),
    (0x2C73, 0x2C72, 0x2C73, 0x2C72),
    (0x2C75, 0x2C75, 0x2C76, 0x2C75),
    (0x2C76, 0x2C75, 0x2C76, 0x2C75),
    (0x2C7E, 0x2C7E, 0x023F, 0x2C7E),
    (0x2C7F, 0x2C7F, 0x0240, 0x2C7F),
    (0x2C80, 0x2C80, 0x2C81, 0x2C80),
    (0x2C81, 0x2C80, 0x2C81, 0x2C80),
    (0x2C82, 0x2C82, 0x2C83, 0x2C82),
    (0x2C83, 0x2C82, 0x2C83, 0x2C82),
    (0x2C84, 0x2C84, 0x2C85, 0x2C84),
    (0x2C85, 0x2C84, 0x2C85, 0x2C84),
    (0x2C86, 0x2C86, 0x2C87, 0x2C86),
    (0x2C87, 0x2C86, 0x2C87, 0x2C86),
    (0x2C88, 0x2C88, 0x2C89, 0x2C88),
    (0x2C89, 0x2C88, 0x2C89, 0x2C88),
    (0x2C8A, 0x2C8A, 0x2C8B, 0x2C8A),
    (0x2C8B, 0x2C8A, 0x2C8B, 0x2C8A),
    (0x2C8C, 0x2C8C, 0x2C8D, 0x2C8C),
    (0x2C8D, 0x2C8C, 0x2C8D, 0x2C8C),
    (0x2C8E, 0x2C8E, 0x2C8F, 0x2C8E),
    (0x2C8F, 0x2C8E, 0x2C8F, 0x2C8E),
    (0x2C90, 0x2C90, 0x2C91, 0x2C90),
    (0x2C91, 0x2C90, 0x2C91, 0x2C90),
    (0x2C92, 0x2C92, 0x2C93, 0x2C92),
    (0x2C93, 0x2C92, 0x2C93, 0x2C92),
    (0x2C94, 0x2C94, 0x2C95, 0x2C94),
    (0x2C95, 0x2C94, 0x2C95, 0x2C94),
    (0x2C96, 0x2C96, 0x2C97, 0x2C96),
    (0x2C97, 0x2C96, 0x2C97, 0x2C96),
    (0x2C98, 0x2C98, 0x2C99, 0x2C98),
    (0x2C99, 0x2C98, 0x2C99, 0x2C98),
    (0x2C9A, 0x2C9A, 0x2C9B, 0x2C9A),
    (0x2C9B, 0x2C9A, 0x2C9B, 0x2C9A),
    (0x2C9C, 0x2C9C, 0x2C9D, 0x2C9C),
    (0x2C9D, 0x2C9C, 0x2C9D, 0x2C9C),
    (0x2C9E, 0x2C9E, 0x2C9F, 0x2C9E),
    (0x2C9F, 0x2C9E, 0x2C9F, 0x2C9E),
    (0x2CA0, 0x2CA0, 0x2CA1, 0x2CA0),
    (0x2CA1, 0x2CA0, 0x2CA1, 0x2CA0),
    (0x2CA2, 0x2CA2, 0x2CA3, 0x2CA2),
    (0x2CA3, 0x2CA2, 0x2CA3, 0x2CA2),
    (0x2CA4, 0x2CA4, 0x2CA5, 0x2CA4),
    (0x2CA5, 0x2CA4, 0x2CA5, 0x2CA4),
    (0x2CA6, 0x2CA6, 0x2CA7, 0x2CA6),
    (0x2CA7, 0x2CA6, 0x2CA7, 0x2CA6),
    (0x2CA8, 0x2CA8, 0x2CA9, 0x2CA8),
    (0x2CA9, 0x2CA8, 0x2CA9, 0x2CA8),
    (0x2CAA, 0x2CAA, 0x2CAB, 0x2CAA),
    (0x2CAB, 0x2CAA, 0x2CAB, 0x2CAA),
    (0x2CAC, 0x2CAC, 0x2CAD, 0x2CAC),
    (0x2CAD, 0x2CAC, 0x2CAD, 0x2CAC),
    (0x2CAE, 0x2CAE, 0x2CAF, 0x2CAE),
    (0x2CAF, 0x2CAE, 0x2CAF, 0x2CAE),
    (0x2CB0, 0x2CB0, 0x2CB1, 0x2CB0),
    (0x2CB1, 0x2CB0, 0x2CB1, 0x2CB0),
    (0x2CB2, 0x2CB2, 0x2CB3, 0x2CB2),
    (0x2CB3, 0x2CB2, 0x2CB3, 0x2CB2),
    (0x2CB4, 0x2CB4, 0x2CB5, 0x2CB4),
    (0x2CB5, 0x2CB4, 0x2CB5, 0x2CB4),
    (0x2CB6, 0x2CB6, 0x2CB7, 0x2CB6),
    (0x2CB7, 0x2CB6, 0x2CB7, 0x2CB6),
    (0x2CB8, 0x2CB8, 0x2CB9, 0x2CB8),
    (0x2CB9, 0x2CB8, 0x2CB9, 0x2CB8),
    (0x2CBA, 0x2CBA, 0x2CBB, 0x2CBA),
    (0x2CBB, 0x2CBA, 0x2CBB, 0x2CBA),
    (0x2CBC, 0x2CBC, 0x2CBD, 0x2CBC),
    (0x2CBD, 0x2CBC, 0x2CBD, 0x2CBC),
    (0x2CBE, 0x2CBE, 0x2CBF, 0x2CBE),
    (0x2CBF, 0x2CBE, 0x2CBF, 0x2CBE),
    (0x2CC0, 0x2CC0, 0x2CC1, 0x2CC0),
    (0x2CC1, 0x2CC0, 0x2CC1, 0x2CC0),
    (0x2CC2, 0x2CC2, 0x2CC3, 0x2CC2),
    (0x2CC3, 0x2CC2, 0x2CC3, 0x2CC2),
    (0x2CC4, 0x2CC4, 0x2CC5, 0x2CC4),
    (0x2CC5, 0x2CC4, 0x2CC5, 0x2CC4),
    (0x2CC6, 0x2CC6, 0x2CC7, 0x2CC6),
    (0x2CC7, 0x2CC6, 0x2CC7, 0x2CC6),
    (0x2CC8, 0x2CC8, 0x2CC9, 0x2CC8),
    (0x2CC9, 0x2CC8, 0x2CC9, 0x2CC8),
    (0x2CCA, 0x2CCA, 0x2CCB, 0x2CCA),
    (0x2CCB, 0x2CCA, 0x2CCB, 0x2CCA),
    (0x2CCC, 0x2CCC, 0x2CCD, 0x2CCC),
    (0x2CCD, 0x2CCC, 0x2CCD, 0x2CCC),
    (0x2CCE, 0x2CCE, 0x2CCF, 0x2CCE),
    (0x2CCF, 0x2CCE, 0x2CCF, 0x2CCE),
    (0x2CD0, 0x2CD0, 0x2CD1, 0x2CD0),
    (0x2CD1, 0x2CD0, 0x2CD1, 0x2CD0),
    (0x2CD2, 0x2CD2, 0x2CD3, 0x2CD2),
    (0x2CD3, 0x2CD2, 0x2CD3, 0x2CD2),
    (0x2CD4, 0x2CD4, 0x2CD5, 0x2CD4),
    (0x2CD5, 0x2CD4, 0x2CD5, 0x2CD4),
    (0x2CD6, 0x2CD6, 0x2CD7, 0x2CD6),
    (0x2CD7, 0x2CD6, 0x2CD7, 0x2CD6),
    (0x2CD8, 0x2CD8, 0x2CD9, 0x2CD8),
    (0x2CD9, 0x2CD8, 0x2CD9, 0x2CD8),
    (0x2CDA, 0x2CDA, 0x2CDB, 0x2CDA),
    (0x2CDB, 0x2CDA, 0x2CDB, 0x2CDA),
    (0x2CDC, 0x2CDC, 0x2CDD, 0x2CDC),
    (0x2CDD, 0x2CDC, 0x2CDD, 0x2CDC),
    (0x2CDE, 0x2CDE, 0x2CDF, 0x2CDE),
    (0x2CDF, 0x2CDE, 0x2CDF, 0x2CDE),
    (0x2CE0, 0x2CE0, 0x2CE1, 0x2CE0),
    (0x2CE1, 0x2CE0, 0x2CE1, 0x2CE0),
    (0x2CE2, 0x2CE2, 0x2CE3, 0x2CE2),
    (0x2CE3, 0x2CE2, 0x2CE3, 0x2CE2),
    (0x2CEB, 0x2CEB, 0x2CEC, 0x2CEB),
    (0x2CEC, 0x2CEB, 0x2CEC, 0x2CEB),
    (0x2CED, 0x2CED, 0x2CEE, 0x2CED),
    (0x2CEE, 0x2CED, 0x2CEE, 0x2CED),
    (0x2CF2, 0x2CF2, 0x2CF3, 0x2CF2),
    (0x2CF3, 0x2CF2, 0x2CF3, 0x2CF2),
    (0x2D00, 0x10A0, 0x2D00, 0x10A0),
    (0x2D01, 0x10A1, 0x2D01, 0x10A1),
    (0x2D02, 0x10A2, 0x2D02, 0x10A2),
    (0x2D03, 0x10A3, 0x2D03, 0x10A3),
    (0x2D04, 0x10A4, 0x2D04, 0x10A4),
    (0x2D05, 0x10A5, 0x2D05, 0x10A5),
    (0x2D06, 0x10A6, 0x2D06, 0x10A6),
    (0x2D07, 0x10A7, 0x2D07, 0x10A7),
    (0x2D08, 0x10A8, 0x2D08, 0x10A8),
    (0x2D09, 0x10A9, 0x2D09, 0x10A9),
    (0x2D0A, 0x10AA, 0x2D0A, 0x10AA),
    (0x2D0B, 0x10AB, 0x2D0B, 0x10AB),
    (0x2D0C, 0x10AC, 0x2D0C, 0x10AC),
    (0x2D0D, 0x10AD, 0x2D0D, 0x10AD),
    (0x2D0E, 0x10AE, 0x2D0E, 0x10AE),
    (0x2D0F, 0x10AF, 0x2D0F, 0x10AF),
    (0x2D10, 0x10B0, 0x2D10, 0x10B0),
    (0x2D11, 0x10B1, 0x2D11, 0x10B1),
    (0x2D12, 0x10B2, 0x2D12, 0x10B2),
    (0x2D13, 0x10B3, 0x2D13, 0x10B3),
    (0x2D14, 0x10B4, 0x2D14, 0x10B4),
    (0x2D15, 0x10B5, 0x2D15, 0x10B5),
    (0x2D16, 0x10B6, 0x2D16, 0x10B6),
    (0x2D17, 0x10B7, 0x2D17, 0x10B7),
    (0x2D18, 0x10B8, 0x2D18, 0x10B8),
    (0x2D19, 0x10B9, 0x2D19, 0x10B9),
    (0x2D1A, 0x10BA, 0x2D1A, 0x10BA),
    (0x2D1B, 0x10BB, 0x2D1B, 0x10BB),
    (0x2D1C, 0x10BC, 0x2D1C, 0x10BC),
    (0x2D1D, 0x10BD, 0x2D1D, 0x10BD),
    (0x2D1E, 0x10BE, 0x2D1E, 0x10BE),
    (0x2D1F, 0x10BF, 0x2D1F, 0x10BF),
    (0x2D20, 0x10C0, 0x2D20, 0x10C0),
    (0x2D21, 0x10C1, 0x2D21, 0x10C1),
    (0x2D22, 0x10C2, 0x2D22, 0x10C2),
    (0x2D23, 0x10C3, 0x2D23, 0x10C3),
    (0x2D24, 0x10C4, 0x2D24, 0x10C4),
    (0x2D25, 0x10C5, 0x2D25, 0x10C5),
    (0x2D27, 0x10C7, 0x2D27, 0x10C7),
    (0x2D2D, 0x10CD, 0x2D2D, 0x10CD),
    (0xA640, 0xA640, 0xA641, 0xA640),
    (0xA641, 0xA640, 0xA641, 0xA640),
    (0xA642, 0xA642, 0xA643, 0xA642),
    (0xA643, 0xA642, 0xA643, 0xA642),
    (0xA644, 0xA644, 0xA645, 0xA644),
    (0xA645, 0xA644, 0xA645, 0xA644),
    (0xA646, 0xA646, 0xA647, 0xA646),
    (0xA647, 0xA646, 0xA647, 0xA646),
    (0xA648, 0xA648, 0xA649, 0xA648),
    (0xA649, 0xA648, 0xA649, 0xA648),
    (0xA64A, 0xA64A, 0xA64B, 0xA64A),
    (0xA64B, 0xA64A, 0xA64B, 0xA64A),
    (0xA64C, 0xA64C, 0xA64D, 0xA64C),
    (0xA64D, 0xA64C, 0xA64D, 0xA64C),
    (0xA64E, 0xA64E, 0xA64F, 0xA64E),
    (0xA64F, 0xA64E, 0xA64F, 0xA64E),
    (0xA650, 0xA650, 0xA651, 0xA650),
    (0xA651, 0xA650, 0xA651, 0xA650),
    (0xA652, 0xA652, 0xA653, 0xA652),
    (0xA653, 0xA652, 0xA653, 0xA652),
    (0xA654, 0xA654, 0xA655, 0xA654),
    (0xA655, 0xA654, 0xA655, 0xA654),
    (0xA656, 0xA656, 0xA657, 0xA656),
    (0xA657, 0xA656, 0xA657, 0xA656),
    (0xA658, 0xA658, 0xA659, 0xA658),
    (0xA659, 0xA658, 0xA659, 0xA658),
    (0xA65A, 0xA65A, 0xA65B, 0xA65A),
    (0xA65B, 0xA65A, 0xA65B, 0xA65A),
    (0xA65C, 0xA65C, 0xA65D, 0xA65C),
    (0xA65D, 0xA65C, 0xA65D, 0xA65C),
    (0xA65E, 0xA65E, 0xA65F, 0xA65E),
    (0xA65F, 0xA65E, 0xA65F, 0xA65E),
    (0xA660, 0xA660, 0xA661, 0xA660),
    (0xA661, 0xA660, 0xA661, 0xA660),
    (0xA662, 0xA662, 0xA663, 0xA662),
    (0xA663, 0xA662, 0xA663, 0xA662),
    (0xA664, 0xA664, 0xA665, 0xA664),
    (0xA665, 0xA664, 0xA665, 0xA664),
    (0xA666, 0xA666, 0xA667, 0xA666),
    (0xA667, 0xA666, 0xA667, 0xA666),
    (0xA668, 0xA668, 0xA669, 0xA668),
    (0xA669, 0xA668, 0xA669, 0xA668),
    (0xA66A, 0xA66A, 0xA66B, 0xA66A),
    (0xA66B, 0xA66A, 0xA66B, 0xA66A),
    (0xA66C, 0xA66C, 0xA66D, 0xA66C),
    (0xA66D, 0xA66C, 0xA66D, 0xA66C),
    (0xA680, 0xA680, 0xA681, 0xA680),
    (0xA681, 0xA680, 0xA681, 0xA680),
    (0xA682, 0xA682, 0xA683, 0xA682),
    (0xA683, 0xA682, 0xA683, 0xA682),
    (0xA684, 0xA684, 0xA685, 0xA684),
    (0xA685, 0xA684, 0xA685, 0xA684),
    (0xA686, 0xA686, 0xA687, 0xA686),
    (0xA687, 0xA686, 0xA687, 0xA686),
    (0xA688, 0xA688, 0xA689, 0xA688),
    (0xA689, 0xA688, 0xA689, 0xA688),
    (0xA68A, 0xA68A, 0xA68B, 0xA68A),
    (0xA68B, 0xA68A, 0xA68B, 0xA68A),
    (0xA68C, 0xA68C, 0xA68D, 0xA68C),
    (0xA68D, 0xA68C, 0xA68D, 0xA68C),
    (0xA68E, 0xA68E, 0xA68F, 0xA68E),
    (0xA68F, 0xA68E, 0xA68F, 0xA68E),
    (0xA690, 0xA690, 0xA691, 0xA690),
    (0xA691, 0xA690, 0xA691, 0xA690),
    (0xA692, 0xA692, 0xA693, 0xA692),
    (0xA693, 0xA692, 0xA693, 0xA692),
    (0xA694, 0xA694, 0xA695, 0xA694),
    (0xA695, 0xA694, 0xA695, 0xA694),
    (0xA696, 0xA696, 0xA697, 0xA696),
    (0xA697, 0xA696, 0xA697, 0xA696),
    (0xA698, 0xA698, 0xA699, 0xA698),
    (0xA699, 0xA698, 0xA699, 0xA698),
    (0xA69A, 0xA69A, 0xA69B, 0xA69A),
    (0xA69B, 0xA69A, 0xA69B, 0xA69A),
    (0xA722, 0xA722, 0xA723, 0xA722),
    (0xA723, 0xA722, 0xA723, 0xA722),
    (0xA724, 0xA724, 0xA725, 0xA724),
    (0xA725, 0xA724, 0xA725, 0xA724),
    (0xA726, 0xA726, 0xA727, 0xA726),
    (0xA727, 0xA726, 0xA727, 0xA726),
    (0xA728, 0xA728, 0xA729, 0xA728),
    (0xA729, 0xA728, 0xA729, 0xA728),
    (0xA72A, 0xA72A, 0xA72B, 0xA72A),
    (0xA72B, 0xA72A, 0xA72B, 0xA72A),
    (0xA72C, 0xA72C, 0xA72D, 0xA72C),
    (0xA72D, 0xA72C, 0xA72D, 0xA72C),
    (0xA72E, 0xA72E, 0xA72F, 0xA72E),
    (0xA72F, 0xA72E, 0xA72F, 0xA72E),
    (0xA732, 0xA732, 0xA733, 0xA732),
    (0xA733, 0xA732, 0xA733, 0xA732),
    (0xA734, 0xA734, 0xA735, 0xA734),
    (0xA735, 0xA734, 0xA735, 0xA734),
    (0xA736, 0xA736, 0xA737, 0xA736),
    (0xA737, 0xA736, 0xA737, 0xA736),
    (0xA738, 0xA738, 0xA739, 0xA738),
    (0xA739, 0xA738, 0xA739, 0xA738),
    (0xA73A, 0xA73A, 0xA73B, 0xA73A),
    (0xA73B, 0xA73A, 0xA73B, 0xA73A),
    (0xA73C, 0xA73C, 0xA73D, 0xA73C),
    (0xA73D, 0xA73C, 0xA73D, 0xA73C),
    (0xA73E, 0xA73E, 0xA73F, 0xA73E),
    (0xA73F, 0xA73E, 0xA73F, 0xA73E),
    (0xA740, 0xA740, 0xA741, 0xA740),
    (0xA741, 0xA740, 0xA741, 0xA740),
    (0xA742, 0xA742, 0xA743, 0xA742),
    (0xA743, 0xA742, 0xA743, 0xA742),
    (0xA744, 0xA744, 0xA745, 0xA744),
    (0xA745, 0xA744, 0xA745, 0xA744),
    (0xA746, 0xA746, 0xA747, 0xA746),
    (0xA747, 0xA746, 0xA747, 0xA746),
    (0xA748, 0xA748, 0xA749, 0xA748),
    (0xA749, 0xA748, 0xA749, 0xA748),
    (0xA74A, 0xA74A, 0xA74B, 0xA74A),
    (0xA74B, 0xA74A, 0xA74B, 0xA74A),
    (0xA74C, 0xA74C, 0xA74D, 0xA74C),
    (0xA74D, 0xA74C, 0xA74D, 0xA74C),
    (0xA74E, 0xA74E, 0xA74F, 0xA74E),
    (0xA74F, 0xA74E, 0xA74F, 0xA74E),
    (0xA750, 0xA750, 0xA751, 0xA750),
    (0xA751, 0xA750, 0xA751, 0xA750),
    (0xA752, 0xA752, 0xA753, 0xA752),
    (0xA753, 0xA752, 0xA753, 0xA752),
    (0xA754, 0xA754, 0xA755, 0xA754),
    (0xA755, 0xA754, 0xA755, 0xA754),
    (0xA756, 0xA756, 0xA757, 0xA756),
    (0xA757, 0xA756, 0xA757, 0xA756),
    (0xA758, 0xA758, 0xA759, 0xA758),
    (0xA759, 0xA758, 0xA759, 0xA758),
    (0xA75A, 0xA75A, 0xA75B, 0xA75A),
    (0xA75B, 0xA75A, 0xA75B, 0xA75A),
    (0xA75C, 0xA75C, 0xA75D, 0xA75C),
    (0xA75D, 0xA75C, 0xA75D, 0xA75C),
    (0xA75E, 0xA75E, 0xA75F, 0xA75E),
    (0xA75F, 0xA75E, 0xA75F, 0xA75E),
    (0xA760, 0xA760, 0xA761, 0xA760),
    (0xA761, 0xA760, 0xA761, 0xA760),
    (0xA762, 0xA762, 0xA763, 0xA762),
    (0xA763, 0xA762, 0xA763, 0xA762),
    (0xA764, 0xA764, 0xA765, 0xA764),
    (0xA765, 0xA764, 0xA765, 0xA764),
    (0xA766, 0xA766, 0xA767, 0xA766),
    (0xA767, 0xA766, 0xA767, 0xA766),
    (0xA768, 0xA768, 0xA769, 0xA768),
    (0xA769, 0xA768, 0xA769, 0xA768),
    (0xA76A, 0xA76A, 0xA76B, 0xA76A),
    (0xA76B, 0xA76A, 0xA76B, 0xA76A),
    (0xA76C, 0xA76C, 0xA76D, 0xA76C),
    (0xA76D, 0xA76C, 0xA76D, 0xA76C),
    (0xA76E, 0xA76E, 0xA76F, 0xA76E),
    (0xA76F, 0xA76E, 0xA76F, 0xA76E),
    (0xA779, 0xA779, 0xA77A, 0xA779),
    (0xA77A, 0xA779, 0xA77A, 0xA779),
    (0xA77B, 0xA77B, 0xA77C, 0xA77B),
    (0xA77C, 0xA77B, 0xA77C, 0xA77B),
    (0xA77D, 0xA77D, 0x1D79, 0xA77D),
    (0xA77E, 0xA77E, 0xA77F, 0xA77E),
    (0xA77F, 0xA77E, 0xA77F, 0xA77E),
    (0xA780, 0xA780, 0xA781, 0xA780),
    (0xA781, 0xA780, 0xA781, 0xA780),
    (0xA782, 0xA782, 0xA783, 0xA782),
    (0xA783, 0xA782, 0xA783, 0xA782),
    (0xA784, 0xA784, 0xA785, 0xA784),
    (0xA785, 0xA784, 0xA785, 0xA784),
    (0xA786, 0xA786, 0xA787, 0xA786),
    (0xA787, 0xA786, 0xA787, 0xA786),
    (0xA78B, 0xA78B, 0xA78C, 0xA78B),
    (0xA78C, 0xA78B, 0xA78C, 0xA78B),
    (0xA78D, 0xA78D, 0x0265, 0xA78D),
    (0xA790, 0xA790, 0xA791, 0xA790),
    (0xA791, 0xA790, 0xA791, 0xA790),
    (0xA792, 0xA792, 0xA793, 0xA792),
    (0xA793, 0xA792, 0xA793, 0xA792),
    (0xA794, 0xA7C4, 0xA794, 0xA7C4),
    (0xA796, 0xA796, 0xA797, 0xA796),
    (0xA797, 0xA796, 0xA797, 0xA796),
    (0xA798, 0xA798, 0xA799, 0xA798),
    (0xA799, 0xA798, 0xA799, 0xA798),
    (0xA79A, 0xA79A, 0xA79B, 0xA79A),
    (0xA79B, 0xA79A, 0xA79B, 0xA79A),
    (0xA79C, 0xA79C, 0xA79D, 0xA79C),
    (0xA79D, 0xA79C, 0xA79D, 0xA79C),
    (0xA79E, 0xA79E, 0xA79F, 0xA79E),
    (0xA79F, 0xA79E, 0xA79F, 0xA79E),
    (0xA7A0, 0xA7A0, 0xA7A1, 0xA7A0),
    (0xA7A1, 0xA7A0, 0xA7A1, 0xA7A0),
    (0xA7A2, 0xA7A2, 0xA7A3, 0xA7A2),
    (0xA7A3, 0xA7A2, 0xA7A3, 0xA7A2),
    (0xA7A4, 0xA7A4, 0xA7A5, 0xA7A4),
    (0xA7A5, 0xA7A4, 0xA7A5, 0xA7A4),
    (0xA7A6, 0xA7A6, 0xA7A7, 0xA7A6),
    (0xA7A7, 0xA7A6, 0xA7A7, 0xA7A6),
    (0xA7A8, 0xA7A8, 0xA7A9, 0xA7A8),
    (0xA7A9, 0xA7A8, 0xA7A9, 0xA7A8),
    (0xA7AA, 0xA7AA, 0x0266, 0xA7AA),
    (0xA7AB, 0xA7AB, 0x025C, 0xA7AB),
    (0xA7AC, 0xA7AC, 0x0261, 0xA7AC),
    (0xA7AD, 0xA7AD, 0x026C, 0xA7AD),
    (0xA7AE, 0xA7AE, 0x026A, 0xA7AE),
    (0xA7B0, 0xA7B0, 0x029E, 0xA7B0),
    (0xA7B1, 0xA7B1, 0x0287, 0xA7B1),
    (0xA7B2, 0xA7B2, 0x029D, 0xA7B2),
    (0xA7B3, 0xA7B3, 0xAB53, 0xA7B3),
    (0xA7B4, 0xA7B4, 0xA7B5, 0xA7B4),
    (0xA7B5, 0xA7B4, 0xA7B5, 0xA7B4),
    (0xA7B6, 0xA7B6, 0xA7B7, 0xA7B6),
    (0xA7B7, 0xA7B6, 0xA7B7, 0xA7B6),
    (0xA7B8, 0xA7B8, 0xA7B9, 0xA7B8),
    (0xA7B9, 0xA7B8, 0xA7B9, 0xA7B8),
    (0xA7BA, 0xA7BA, 0xA7BB, 0xA7BA),
    (0xA7BB, 0xA7BA, 0xA7BB, 0xA7BA),
    (0xA7BC, 0xA7BC, 0xA7BD, 0xA7BC),
    (0xA7BD, 0xA7BC, 0xA7BD, 0xA7BC),
    (0xA7BE, 0xA7BE, 0xA7BF, 0xA7BE),
    (0xA7BF, 0xA7BE, 0xA7BF, 0xA7BE),
    (0xA7C0, 0xA7C0, 0xA7C1, 0xA7C0),
    (0xA7C1, 0xA7C0, 0xA7C1, 0xA7C0),
    (0xA7C2, 0xA7C2, 0xA7C3, 0xA7C2),
    (0xA7C3, 0xA7C2, 0xA7C3, 0xA7C2),
    (0xA7C4, 0xA7C4, 0xA794, 0xA7C4),
    (0xA7C5, 0xA7C5, 0x0282, 0xA7C5),
    (0xA7C6, 0xA7C6, 0x1D8E, 0xA7C6),
    (0xA7C7, 0xA7C7, 0xA7C8, 0xA7C7),
    (0xA7C8, 0xA7C7, 0xA7C8, 0xA7C7),
    (0xA7C9, 0xA7C9, 0xA7CA, 0xA7C9),
    (0xA7CA, 0xA7C9, 0xA7CA, 0xA7C9),
    (0xA7D0, 0xA7D0, 0xA7D1, 0xA7D0),
    (0xA7D1, 0xA7D0, 0xA7D1, 0xA7D0),
    (0xA7D6, 0xA7D6, 0xA7D7, 0xA7D6),
    (0xA7D7, 0xA7D6, 0xA7D7, 0xA7D6),
    (0xA7D8, 0xA7D8, 0xA7D9, 0xA7D8),
    (0xA7D9, 0xA7D8, 0xA7D9, 0xA7D8),
    (0xA7F5, 0xA7F5, 0xA7F6, 0xA7F5),
    (0xA7F6, 0xA7F5, 0xA7F6, 0xA7F5),
    (0xAB53, 0xA7B3, 0xAB53, 0xA7B3),
    (0xAB70, 0x13A0, 0xAB70, 0x13A0),
    (0xAB71, 0x13A1, 0xAB71, 0x13A1),
    (0xAB72, 0x13A2, 0xAB72, 0x13A2),
    (0xAB73, 0x13A3, 0xAB73, 0x13A3),
    (0xAB74, 0x13A4, 0xAB74, 0x13A4),
    (0xAB75, 0x13A5, 0xAB75, 0x13A5),
    (0xAB76, 0x13A6, 0xAB76, 0x13A6),
    (0xAB77, 0x13A7, 0xAB77, 0x13A7),
    (0xAB78, 0x13A8, 0xAB78, 0x13A8),
    (0xAB79, 0x13A9, 0xAB79, 0x13A9),
    (0xAB7A, 0x13AA, 0xAB7A, 0x13AA),
    (0xAB7B, 0x13AB, 0xAB7B, 0x13AB),
    (0xAB7C, 0x13AC, 0xAB7C, 0x13AC),
    (0xAB7D, 0x13AD, 0xAB7D, 0x13AD),
    (0xAB7E, 0x13AE, 0xAB7E, 0x13AE),
    (0xAB7F, 0x13AF, 0xAB7F, 0x13AF),
    (0xAB80, 0x13B0, 0xAB80, 0x13B0),
    (0xAB81, 0x13B1, 0xAB81, 0x13B1),
    (0xAB82, 0x13B2, 0xAB82, 0x13B2),
    (0xAB83, 0x13B3, 0xAB83, 0x13B3),
    (0xAB84, 0x13B4, 0xAB84, 0x13B4),
    (0xAB85, 0x13B5, 0xAB85, 0x13B5),
    (0xAB86, 0x13B6, 0xAB86, 0x13B6),
    (0xAB87, 0x13B7, 0xAB87, 0x13B7),
    (0xAB88, 0x13B8, 0xAB88, 0x13B8),
    (0xAB89, 0x13B9, 0xAB89, 0x13B9),
    (0xAB8A, 0x13BA, 0xAB8A, 0x13BA),
    (0xAB8B, 0x13BB, 0xAB8B, 0x13BB),
    (0xAB8C, 0x13BC, 0xAB8C, 0x13BC),
    (0xAB8D, 0x13BD, 0xAB8D, 0x13BD),
    (0xAB8E, 0x13BE, 0xAB8E, 0x13BE),
    (0xAB8F, 0x13BF, 0xAB8F, 0x13BF),
    (0xAB90, 0x13C0, 0xAB90, 0x13C0),
    (0xAB91, 0x13C1, 0xAB91, 0x13C1),
    (0xAB92, 0x13C2, 0xAB92, 0x13C2),
    (0xAB93, 0x13C3, 0xAB93, 0x13C3),
    (0xAB94, 0x13C4, 0xAB94, 0x13C4),
    (0xAB95, 0x13C5, 0xAB95, 0x13C5),
    (0xAB96, 0x13C6, 0xAB96, 0x13C6),
    (0xAB97, 0x13C7, 0xAB97, 0x13C7),
    (0xAB98, 0x13C8, 0xAB98, 0x13C8),
    (0xAB99, 0x13C9, 0xAB99, 0x13C9),
    (0xAB9A, 0x13CA, 0xAB9A, 0x13CA),
    (0xAB9B, 0x13CB, 0xAB9B, 0x13CB),
    (0xAB9C, 0x13CC, 0xAB9C, 0x13CC),
    (0xAB9D, 0x13CD, 0xAB9D, 0x13CD),
    (0xAB9E, 0x13CE, 0xAB9E, 0x13CE),
    (0xAB9F, 0x13CF, 0xAB9F, 0x13CF),
    (0xABA0, 0x13D0, 0xABA0, 0x13D0),
    (0xABA1, 0x13D1, 0xABA1, 0x13D1),
    (0xABA2, 0x13D2, 0xABA2, 0x13D2),
    (0xABA3, 0x13D3, 0xABA3, 0x13D3),
    (0xABA4, 0x13D4, 0xABA4, 0x13D4),
    (0xABA5, 0x13D5, 0xABA5, 0x13D5),
    (0xABA6, 0x13D6, 0xABA6, 0x13D6),
    (0xABA7, 0x13D7, 0xABA7, 0x13D7),
    (0xABA8, 0x13D8, 0xABA8, 0x13D8),
    (0xABA9, 0x13D9, 0xABA9, 0x13D9),
    (0xABAA, 0x13DA, 0xABAA, 0x13DA),
    (0xABAB, 0x13DB, 0xABAB, 0x13DB),
    (0xABAC, 0x13DC, 0xABAC, 0x13DC),
    (0xABAD, 0x13DD, 0xABAD, 0x13DD),
    (0xABAE, 0x13DE, 0xABAE, 0x13DE),
    (0xABAF, 0x13DF, 0xABAF, 0x13DF),
    (0xABB0, 0x13E0, 0xABB0, 0x13E0),
    (0xABB1, 0x13E1, 0xABB1, 0x13E1),
    (0xABB2, 0x13E2, 0xABB2, 0x13E2),
    (0xABB3, 0x13E3, 0xABB3, 0x13E3),
    (0xABB4, 0x13E4, 0xABB4, 0x13E4),
    (0xABB5, 0x13E5, 0xABB5, 0x13E5),
    (0xABB6, 0x13E6, 0xABB6, 0x13E6),
    (0xABB7, 0x13E7, 0xABB7, 0x13E7),
    (0xABB8, 0x13E8, 0xABB8, 0x13E8),
    (0xABB9, 0x13E9, 0xABB9, 0x13E9),
    (0xABBA, 0x13EA, 0xABBA, 0x13EA),
    (0xABBB, 0x13EB, 0xABBB, 0x13EB),
    (0xABBC, 0x13EC, 0xABBC, 0x13EC),
    (0xABBD, 0x13ED, 0xABBD, 0x13ED),
    (0xABBE, 0x13EE, 0xABBE, 0x13EE),
    (0xABBF, 0x13EF, 0xABBF, 0x13EF),
    (0xFF21, 0xFF21, 0xFF41, 0xFF21),
    (0xFF22, 0xFF22, 0xFF42, 0xFF22),
    (0xFF23, 0xFF23, 0xFF43, 0xFF23),
    (0xFF24, 0xFF24, 0xFF44, 0xFF24),
    (0xFF25, 0xFF25, 0xFF45, 0xFF25),
    (0xFF26, 0xFF26, 0xFF46, 0xFF26),
    (0xFF27, 0xFF27, 0xFF47, 0xFF27),
    (0xFF28, 0xFF28, 0xFF48, 0xFF28),
    (0xFF29, 0xFF29, 0xFF49, 0xFF29),
    (0xFF2A, 0xFF2A, 0xFF4A, 0xFF2A),
    (0xFF2B, 0xFF2B, 0xFF4B, 0xFF2B),
    (0xFF2C, 0xFF2C, 0xFF4C, 0xFF2C),
    (0xFF2D, 0xFF2D, 0xFF4D, 0xFF2D),
    (0xFF2E, 0xFF2E, 0xFF4E, 0xFF2E),
    (0xFF2F, 0xFF2F, 0xFF4F, 0xFF2F),
    (0xFF30, 0xFF30, 0xFF50, 0xFF30),
    (0xFF31, 0xFF31, 0xFF51, 0xFF31),
    (0xFF32, 0xFF32, 0xFF52, 0xFF32),
    (0xFF33, 0xFF33, 0xFF53, 0xFF33),
    (0xFF34, 0xFF34, 0xFF54, 0xFF34),
    (0xFF35, 0xFF35, 0xFF55, 0xFF35),
    (0xFF36, 0xFF36, 0xFF56, 0xFF36),
    (0xFF37, 0xFF37, 0xFF57, 0xFF37),
    (0xFF38, 0xFF38, 0xFF58, 0xFF38),
    (0xFF39, 0xFF39, 0xFF59, 0xFF39),
    (0xFF3A, 0xFF3A, 0xFF5A, 0xFF3A),
    (0xFF41, 0xFF21, 0xFF41, 0xFF21),
    (0xFF42, 0xFF22, 0xFF42, 0xFF22),
    (0xFF43, 0xFF23, 0xFF43, 0xFF23),
    (0xFF44, 0xFF24, 0xFF44, 0xFF24),
    (0xFF45, 0xFF25, 0xFF45, 0xFF25),
    (0xFF46, 0xFF26, 0xFF46, 0xFF26),
    (0xFF47, 0xFF27, 0xFF47, 0xFF27),
    (0xFF48, 0xFF28, 0xFF48, 0xFF28),
    (0xFF49, 0xFF29, 0xFF49, 0xFF29),
    (0xFF4A, 0xFF2A, 0xFF4A, 0xFF2A),
    (0xFF4B, 0xFF2B, 0xFF4B, 0xFF2B),
    (0xFF4C, 0xFF2C, 0xFF4C, 0xFF2C),
    (0xFF4D, 0xFF2D, 0xFF4D, 0xFF2D),
    (0xFF4E, 0xFF2E, 0xFF4E, 0xFF2E),
    (0xFF4F, 0xFF2F, 0xFF4F, 0xFF2F),
    (0xFF50, 0xFF30, 0xFF50, 0xFF30),
    (0xFF51, 0xFF31, 0xFF51, 0xFF31),
    (0xFF52, 0xFF32, 0xFF52, 0xFF32),
    (0xFF53, 0xFF33, 0xFF53, 0xFF33),
    (0xFF54, 0xFF34, 0xFF54, 0xFF34),
    (0xFF55, 0xFF35, 0xFF55, 0xFF35),
    (0xFF56, 0xFF36, 0xFF56, 0xFF36),
    (0xFF57, 0xFF37, 0xFF57, 0xFF37),
    (0xFF58, 0xFF38, 0xFF58, 0xFF38),
    (0xFF59, 0xFF39, 0xFF59, 0xFF39),
    (0xFF5A, 0xFF3A, 0xFF5A, 0xFF3A),
    (0x10400, 0x10400, 0x10428, 0x10400),
    (0x10401, 0x10401, 0x10429, 0x10401),
    (0x10402, 0x10402, 0x1042A, 0x10402),
    (0x10403, 0x10403, 0x1042B, 0x10403),
    (0x10404, 0x10404, 0x1042C, 0x10404),
    (0x10405, 0x10405, 0x1042D, 0x10405),
    (0x10406, 0x10406, 0x1042E, 0x10406),
    (0x10407, 0x10407, 0x1042F, 0x10407),
    (0x10408, 0x10408, 0x10430, 0x10408),
    (0x10409, 0x10409, 0x10431, 0x10409),
    (0x1040A, 0x1040A, 0x10432, 0x1040A),
    (0x1040B, 0x1040B, 0x10433, 0x1040B),
    (0x1040C, 0x1040C, 0x10434, 0x1040C),
    (0x1040D, 0x1040D, 0x10435, 0x1040D),
    (0x1040E, 0x1040E, 0x10436, 0x1040E),
    (0x1040F, 0x1040F, 0x10437, 0x1040F),
    (0x10410, 0x10410, 0x10438, 0x10410),
    (0x10411, 0x10411, 0x10439, 0x10411),
    (0x10412, 0x10412, 0x1043A, 0x10412),
    (0x10413, 0x10413, 0x1043B, 0x10413),
    (0x10414, 0x10414, 0x1043C, 0x10414),
    (0x10415, 0x10415, 0x1043D, 0x10415),
    (0x10416, 0x10416, 0x1043E, 0x10416),
    (0x10417, 0x10417, 0x1043F, 0x10417),
    (0x10418, 0x10418, 0x10440, 0x10418),
    (0x10419, 0x10419, 0x10441, 0x10419),
    (0x1041A, 0x1041A, 0x10442, 0x1041A),
    (0x1041B, 0x1041B, 0x10443, 0x1041B),
    (0x1041C, 0x1041C, 0x10444, 0x1041C),
    (0x1041D, 0x1041D, 0x10445, 0x1041D),
    (0x1041E, 0x1041E, 0x10446, 0x1041E),
    (0x1041F, 0x1041F, 0x10447, 0x1041F),
    (0x10420, 0x10420, 0x10448, 0x10420),
    (0x10421, 0x10421, 0x10449, 0x10421),
    (0x10422, 0x10422, 0x1044A, 0x10422),
    (0x10423, 0x10423, 0x1044B, 0x10423),
    (0x10424, 0x10424, 0x1044C, 0x10424),
    (0x10425, 0x10425, 0x1044D, 0x10425),
    (0x10426, 0x10426, 0x1044E, 0x10426),
    (0x10427, 0x10427, 0x1044F, 0x10427),
    (0x10428, 0x10400, 0x10428, 0x10400),
    (0x10429, 0x10401, 0x10429, 0x10401),
    (0x1042A, 0x10402, 0x1042A, 0x10402),
    (0x1042B, 0x10403, 0x1042B, 0x10403),
    (0x1042C, 0x10404, 0x1042C, 0x10404),
    (0x1042D, 0x10405, 0x1042D, 0x10405),
    (0x1042E, 0x10406, 0x1042E, 0x10406),
    (0x1042F, 0x10407, 0x1042F, 0x10407),
    (0x10430, 0x10408, 0x10430, 0x10408),
    (0x10431, 0x10409, 0x10431, 0x10409),
    (0x10432, 0x1040A, 0x10432, 0x1040A),
    (0x10433, 0x1040B, 0x10433, 0x1040B),
    (0x10434, 0x1040C, 0x10434, 0x1040C),
    (0x10435, 0x1040D, 0x10435, 0x1040D),
    (0x10436, 0x1040E, 0x10436, 0x1040E),
    (0x10437, 0x1040F, 0x10437, 0x1040F),
    (0x10438, 0x10410, 0x10438, 0x10410),
    (0x10439, 0x10411, 0x10439, 0x10411),
    (0x1043A, 0x10412, 0x1043A, 0x10412),
    (0x1043B, 0x10413, 0x1043B, 0x10413),
    (0x1043C, 0x10414, 0x1043C, 0x10414),
    (0x1043D, 0x10415, 0x1043D, 0x10415),
    (0x1043E, 0x10416, 0x1043E, 0x10416),
    (0x1043F, 0x10417, 0x1043F, 0x10417),
    (0x10440, 0x10418, 0x10440, 0x10418),
    (0x10441, 0x10419, 0x10441, 0x10419),
    (0x10442, 0x1041A, 0x10442, 0x1041A),
    (0x10443, 0x1041B, 0x10443, 0x1041B),
    (0x10444, 0x1041C, 0x10444, 0x1041C),
    (0x10445, 0x1041D, 0x10445, 0x1041D),
    (0x10446, 0x1041E, 0x10446, 0x1041E),
    (0x10447, 0x1041F, 0x10447, 0x1041F),
    (0x10448, 0x10420, 0x10448, 0x10420),
    (0x10449, 0x10421, 0x10449, 0x10421),
    (0x1044A, 0x10422, 0x1044A, 0x10422),
    (0x1044B, 0x10423, 0x1044B, 0x10423),
    (0x1044C, 0x10424, 0x1044C, 0x10424),
    (0x1044D, 0x10425, 0x1044D, 0x10425),
    (0x1044E, 0x10426, 0x1044E, 0x10426),
    (0x1044F, 0x10427, 0x1044F, 0x10427),
    (0x104B0, 0x104B0, 0x104D8, 0x104B0),
    (0x104B1, 0x104B1, 0x104D9, 0x104B1),
    (0x104B2, 0x104B2, 0x104DA, 0x104B2),
    (0x104B3, 0x104B3, 0x104DB, 0x104B3),
    (0x104B4, 0x104B4, 0x104DC, 0x104B4),
    (0x104B5, 0x104B5, 0x104DD, 0x104B5),
    (0x104B6, 0x104B6, 0x104DE, 0x104B6),
    (0x104B7, 0x104B7, 0x104DF, 0x104B7),
    (0x104B8, 0x104B8, 0x104E0, 0x104B8),
    (0x104B9, 0x104B9, 0x104E1, 0x104B9),
    (0x104BA, 0x104BA, 0x104E2, 0x104BA),
    (0x104BB, 0x104BB, 0x104E3, 0x104BB),
    (0x104BC, 0x104BC, 0x104E4, 0x104BC),
    (0x104BD, 0x104BD, 0x104E5, 0x104BD),
    (0x104BE, 0x104BE, 0x104E6, 0x104BE),
    (0x104BF, 0x104BF, 0x104E7, 0x104BF),
    (0x104C0, 0x104C0, 0x104E8, 0x104C0),
    (0x104C1, 0x104C1, 0x104E9, 0x104C1),
    (0x104C2, 0x104C2, 0x104EA, 0x104C2),
    (0x104C3, 0x104C3, 0x104EB, 0x104C3),
    (0x104C4, 0x104C4, 0x104EC, 0x104C4),
    (0x104C5, 0x104C5, 0x104ED, 0x104C5),
    (0x104C6, 0x104C6, 0x104EE, 0x104C6),
    (0x104C7, 0x104C7, 0x104EF, 0x104C7),
    (0x104C8, 0x104C8, 0x104F0, 0x104C8),
    (0x104C9, 0x104C9, 0x104F1, 0x104C9),
    (0x104CA, 0x104CA, 0x104F2, 0x104CA),
    (0x104CB, 0x104CB, 0x104F3, 0x104CB),
    (0x104CC, 0x104CC, 0x104F4, 0x104CC),
    (0x104CD, 0x104CD, 0x104F5, 0x104CD),
    (0x104CE, 0x104CE, 0x104F6, 0x104CE),
    (0x104CF, 0x104CF, 0x104F7, 0x104CF),
    (0x104D0, 0x104D0, 0x104F8, 0x104D0),
    (0x104D1, 0x104D1, 0x104F9, 0x104D1),
    (0x104D2, 0x104D2, 0x104FA, 0x104D2),
    (0x104D3, 0x104D3, 0x104FB, 0x104D3),
    (0x104D8, 0x104B0, 0x104D8, 0x104B0),
    (0x104D9, 0x104B1, 0x104D9, 0x104B1),
    (0x104DA, 0x104B2, 0x104DA, 0x104B2),
    (0x104DB, 0x104B3, 0x104DB, 0x104B3),
    (0x104DC, 0x104B4, 0x104DC, 0x104B4),
    (0x104DD, 0x104B5, 0x104DD, 0x104B5),
    (0x104DE, 0x104B6, 0x104DE, 0x104B6),
    (0x104DF, 0x104B7, 0x104DF, 0x104B7),
    (0x104E0, 0x104B8, 0x104E0, 0x104B8),
    (0x104E1, 0x104B9, 0x104E1, 0x104B9),
    (0x104E2, 0x104BA, 0x104E2, 0x104BA),
    (0x104E3, 0x104BB, 0x104E3, 0x104BB),
    (0x104E4, 0x104BC, 0x104E4, 0x104BC),
    (0x104E5, 0x104BD, 0x104E5, 0x104BD),
    (0x104E6, 0x104BE, 0x104E6, 0x104BE),
    (0x104E7, 0x104BF, 0x104E7, 0x104BF),
    (0x104E8, 0x104C0, 0x104E8, 0x104C0),
    (0x104E9, 0x104C1, 0x104E9, 0x104C1),
    (0x104EA, 0x104C2, 0x104EA, 0x104C2),
    (0x104EB, 0x104C3, 0x104EB, 0x104C3),
    (0x104EC, 0x104C4, 0x104EC, 0x104C4),
    (0x104ED, 0x104C5, 0x104ED, 0x104C5),
    (0x104EE, 0x104C6, 0x104EE, 0x104C6),
    (0x104EF, 0x104C7, 0x104EF, 0x104C7),
    (0x104F0, 0x104C8, 0x104F0, 0x104C8),
    (0x104F1, 0x104C9, 0x104F1, 0x104C9),
    (0x104F2, 0x104CA, 0x104F2, 0x104CA),
    (0x104F3, 0x104CB, 0x104F3, 0x104CB),
    (0x104F4, 0x104CC, 0x104F4, 0x104CC),
    (0x104F5, 0x104CD, 0x104F5, 0x104CD),
    (0x104F6, 0x104CE, 0x104F6, 0x104CE),
    (0x104F7, 0x104CF, 0x104F7, 0x104CF),
    (0x104F8, 0x104D0, 0x104F8, 0x104D0),
    (0x104F9, 0x104D1, 0x104F9, 0x104D1),
    (0x104FA, 0x104D2, 0x104FA, 0x104D2),
    (0x104FB, 0x104D3, 0x104FB, 0x104D3),
    (0x10570, 0x10570, 0x10597, 0x10570),
    (0x10571, 0x10571, 0x10598, 0x10571),
    (0x10572, 0x10572, 0x10599, 0x10572),
    (0x10573, 0x10573, 0x1059A, 0x10573),
    (0x10574, 0x10574, 0x1059B, 0x10574),
    (0x10575, 0x10575, 0x1059C, 0x10575),
    (0x10576, 0x10576, 0x1059D, 0x10576),
    (0x10577, 0x10577, 0x1059E, 0x10577),
    (0x10578, 0x10578, 0x1059F, 0x10578),
    (0x10579, 0x10579, 0x105A0, 0x10579),
    (0x1057A, 0x1057A, 0x105A1, 0x1057A),
    (0x1057C, 0x1057C, 0x105A3, 0x1057C),
    (0x1057D, 0x1057D, 0x105A4, 0x1057D),
    (0x1057E, 0x1057E, 0x105A5, 0x1057E),
    (0x1057F, 0x1057F, 0x105A6, 0x1057F),
    (0x10580, 0x10580, 0x105A7, 0x10580),
    (0x10581, 0x10581, 0x105A8, 0x10581),
    (0x10582, 0x10582, 0x105A9, 0x10582),
    (0x10583, 0x10583, 0x105AA, 0x10583),
    (0x10584, 0x10584, 0x105AB, 0x10584),
    (0x10585, 0x10585, 0x105AC, 0x10585),
    (0x10586, 0x10586, 0x105AD, 0x10586),
    (0x10587, 0x10587, 0x105AE, 0x10587),
    (0x10588, 0x10588, 0x105AF, 0x10588),
    (0x10589, 0x10589, 0x105B0, 0x10589),
    (0x1058A, 0x1058A, 0x105B1, 0x1058A),
    (0x1058C, 0x1058C, 0x105B3, 0x1058C),
    (0x1058D, 0x1058D, 0x105B4, 0x1058D),
    (0x1058E, 0x1058E, 0x105B5, 0x1058E),
    (0x1058F, 0x1058F, 0x105B6, 0x1058F),
    (0x10590, 0x10590, 0x105B7, 0x10590),
    (0x10591, 0x10591, 0x105B8, 0x10591),
    (0x10592, 0x10592, 0x105B9, 0x10592),
    (0x10594, 0x10594, 0x105BB, 0x10594),
    (0x10595, 0x10595, 0x105BC, 0x10595),
    (0x10597, 0x10570, 0x10597, 0x10570),
    (0x10598, 0x10571, 0x10598, 0x10571),
    (0x10599, 0x10572, 0x10599, 0x10572),
    (0x1059A, 0x10573, 0x1059A, 0x10573),
    (0x1059B, 0x10574, 0x1059B, 0x10574),
    (0x1059C, 0x10575, 0x1059C, 0x10575),
    (0x1059D, 0x10576, 0x1059D, 0x10576),
    (0x1059E, 0x10577, 0x1059E, 0x10577),
    (0x1059F, 0x10578, 0x1059F, 0x10578),
    (0x105A0, 0x10579, 0x105A0, 0x10579),
    (0x105A1, 0x1057A, 0x105A1, 0x1057A),
    (0x105A3, 0x1057C, 0x105A3, 0x1057C),
    (0x105A4, 0x1057D, 0x105A4, 0x1057D),
    (0x105A5, 0x1057E, 0x105A5, 0x1057E),
    (0x105A6, 0x1057F, 0x105A6, 0x1057F),
    (0x105A7, 0x10580, 0x105A7, 0x10580),
    (0x105A8, 0x10581, 0x105A8, 0x10581),
    (0x105A9, 0x10582, 0x105A9, 0x10582),
    (0x105AA, 0x10583, 0x105AA, 0x10583),
    (0x105AB, 0x10584, 0x105AB, 0x10584),
    (0x105AC, 0x10585, 0x105AC, 0x10585),
    (0x105AD, 0x10586, 0x105AD, 0x10586),
    (0x105AE, 0x10587, 0x105AE, 0x10587),
    (0x105AF, 0x10588, 0x105AF, 0x10588),
    (0x105B0, 0x10589, 0x105B0, 0x10589),
    (0x105B1, 0x1058A, 0x105B1, 0x1058A),
    (0x105B3, 0x1058C, 0x105B3, 0x1058C),
    (0x105B4, 0x1058D, 0x105B4, 0x1058D),
    (0x105B5, 0x1058E, 0x105B5, 0x1058E),
    (0x105B6, 0x1058F, 0x105B6, 0x1058F),
    (0x105B7, 0x10590, 0x105B7, 0x10590),
    (0x105B8, 0x10591, 0x105B8, 0x10591),
    (0x105B9, 0x10592, 0x105B9, 0x10592),
    (0x105BB, 0x10594, 0x105BB, 0x10594),
    (0x105BC, 0x10595, 0x105BC, 0x10595),
    (0x10C80, 0x10C80, 0x10CC0, 0x10C80),
    (0x10C81, 0x10C81, 0x10CC1, 0x10C81),
    (0x10C82, 0x10C82, 0x10CC2, 0x10C82),
    (0x10C83, 0x10C83, 0x10CC3, 0x10C83),
    (0x10C84, 0x10C84, 0x10CC4, 0x10C84),
    (0x10C85, 0x10C85, 0x10CC5, 0x10C85),
    (0x10C86, 0x10C86, 0x10CC6, 0x10C86),
    (0x10C87, 0x10C87, 0x10CC7, 0x10C87),
    (0x10C88, 0x10C88, 0x10CC8, 0x10C88),
    (0x10C89, 0x10C89, 0x10CC9, 0x10C89),
    (0x10C8A, 0x10C8A, 0x10CCA, 0x10C8A),
    (0x10C8B, 0x10C8B, 0x10CCB, 0x10C8B),
    (0x10C8C, 0x10C8C, 0x10CCC, 0x10C8C),
    (0x10C8D, 0x10C8D, 0x10CCD, 0x10C8D),
    (0x10C8E, 0x10C8E, 0x10CCE, 0x10C8E),
    (0x10C8F, 0x10C8F, 0x10CCF, 0x10C8F),
    (0x10C90, 0x10C90, 0x10CD0, 0x10C90),
    (0x10C91, 0x10C91, 0x10CD1, 0x10C91),
    (0x10C92, 0x10C92, 0x10CD2, 0x10C92),
    (0x10C93, 0x10C93, 0x10CD3, 0x10C93),
    (0x10C94, 0x10C94, 0x10CD4, 0x10C94),
    (0x10C95, 0x10C95, 0x10CD5, 0x10C95),
    (0x10C96, 0x10C96, 0x10CD6, 0x10C96),
    (0x10C97, 0x10C97, 0x10CD7, 0x10C97),
    (0x10C98, 0x10C98, 0x10CD8, 0x10C98),
    (0x10C99, 0x10C99, 0x10CD9, 0x10C99),
    (0x10C9A, 0x10C9A, 0x10CDA, 0x10C9A),
    (0x10C9B, 0x10C9B, 0x10CDB, 0x10C9B),
    (0x10C9C, 0x10C9C, 0x10CDC, 0x10C9C),
    (0x10C9D, 0x10C9D, 0x10CDD, 0x10C9D),
    (0x10C9E, 0x10C9E, 0x10CDE, 0x10C9E),
    (0x10C9F, 0x10C9F, 0x10CDF, 0x10C9F),
    (0x10CA0, 0x10CA0, 0x10CE0, 0x10CA0),
    (0x10CA1, 0x10CA1, 0x10CE1, 0x10CA1),
    (0x10CA2, 0x10CA2, 0x10CE2, 0x10CA2),
    (0x10CA3, 0x10CA3, 0x10CE3, 0x10CA3),
    (0x10CA4, 0x10CA4, 0x10CE4, 0x10CA4),
    (0x10CA5, 0x10CA5, 0x10CE5, 0x10CA5),
    (0x10CA6, 0x10CA6, 0x10CE6, 0x10CA6),
    (0x10CA7, 0x10CA7, 0x10CE7, 0x10CA7),
    (0x10CA8, 0x10CA8, 0x10CE8, 0x10CA8),
    (0x10CA9, 0x10CA9, 0x10CE9, 0x10CA9),
    (0x10CAA, 0x10CAA, 0x10CEA, 0x10CAA),
    (0x10CAB, 0x10CAB, 0x10CEB, 0x10CAB),
    (0x10CAC, 0x10CAC, 0x10CEC, 0x10CAC),
    (0x10CAD, 0x10CAD, 0x10CED, 0x10CAD),
    (0x10CAE, 0x10CAE, 0x10CEE, 0x10CAE),
    (0x10CAF, 0x10CAF, 0x10CEF, 0x10CAF),
    (0x10CB0, 0x10CB0, 0x10CF0, 0x10CB0),
    (0x10CB1, 0x10CB1, 0x10CF1, 0x10CB1),
    (0x10CB2, 0x10CB2, 0x10CF2, 0x10CB2),
    (0x10CC0, 0x10C80, 0x10CC0, 0x10C80),
    (0x10CC1, 0x10C81, 0x10CC1, 0x10C81),
    (0x10CC2, 0x10C82, 0x10CC2, 0x10C82),
    (0x10CC3, 0x10C83, 0x10CC3, 0x10C83),
    (0x10CC4, 0x10C84, 0x10CC4, 0x10C84),
    (0x10CC5, 0x10C85, 0x10CC5, 0x10C85),
    (0x10CC6, 0x10C86, 0x10CC6, 0x10C86),
    (0x10CC7, 0x10C87, 0x10CC7, 0x10C87),
    (0x10CC8, 0x10C88, 0x10CC8, 0x10C88),
    (0x10CC9, 0x10C89, 0x10CC9, 0x10C89),
    (0x10CCA, 0x10C8A, 0x10CCA, 0x10C8A),
    (0x10CCB, 0x10C8B, 0x10CCB, 0x10C8B),
    (0x10CCC, 0x10C8C, 0x10CCC, 0x10C8C),
    (0x10CCD, 0x10C8D, 0x10CCD, 0x10C8D),
    (0x10CCE, 0x10C8E, 0x10CCE, 0x10C8E),
    (0x10CCF, 0x10C8F, 0x10CCF, 0x10C8F),
    (0x10CD0, 0x10C90, 0x10CD0, 0x10C90),
    (0x10CD1, 0x10C91, 0x10CD1, 0x10C91),
    (0x10CD2, 0x10C92, 0x10CD2, 0x10C92),
    (0x10CD3, 0x10C93, 0x10CD3, 0x10C93),
    (0x10CD4, 0x10C94, 0x10CD4, 0x10C94),
    (0x10CD5, 0x10C95, 0x10CD5, 0x10C95),
    (0x10CD6, 0x10C96, 0x10CD6, 0x10C96),
    (0x10CD7, 0x10C97, 0x10CD7, 0x10C97),
    (0x10CD8, 0x10C98, 0x10CD8, 0x10C98),
    (0x10CD9, 0x10C99, 0x10CD9, 0x10C99),
    (0x10CDA, 0x10C9A, 0x10CDA, 0x10C9A),
    (0x10CDB, 0x10C9B, 0x10CDB, 0x10C9B),
    (0x10CDC, 0x10C9C, 0x10CDC, 0x10C9C),
    (0x10CDD, 0x10C9D, 0x10CDD, 0x10C9D),
    (0x10CDE, 0x10C9E, 0x10CDE, 0x10C9E),
    (0x10CDF, 0x10C9F, 0x10CDF, 0x10C9F),
    (0x10CE0, 0x10CA0, 0x10CE0, 0x10CA0),
    (0x10CE1, 0x10CA1, 0x10CE1, 0x10CA1),
    (0x10CE2, 0x10CA2, 0x10CE2, 0x10CA2),
    (0x10CE3, 0x10CA3, 0x10CE3, 0x10CA3),
    (0x10CE4, 0x10CA4, 0x10CE4, 0x10CA4),
    (0x10CE5, 0x10CA5, 0x10CE5, 0x10CA5),
    (0x10CE6, 0x10CA6, 0x10CE6, 0x10CA6),
    (0x10CE7, 0x10CA7, 0x10CE7, 0x10CA7),
    (0x10CE8, 0x10CA8, 0x10CE8, 0x10CA8),
    (0x10CE9, 0x10CA9, 0x10CE9, 0x10CA9),
    (0x10CEA, 0x10CAA, 0x10CEA, 0x10CAA),
    (0x10CEB, 0x10CAB, 0x10CEB, 0x10CAB),
    (0x10CEC, 0x10CAC, 0x10CEC, 0x10CAC),
    (0x10CED, 0x10CAD, 0x10CED, 0x10CAD),
    (0x10CEE, 0x10CAE, 0x10CEE, 0x10CAE),
    (0x10CEF, 0x10CAF, 0x10CEF, 0x10CAF),
    (0x10CF0, 0x10CB0, 0x10CF0, 0x10CB0),
    (0x10CF1, 0x10CB1, 0x10CF1, 0x10CB1),
    (0x10CF2, 0x10CB2, 0x10CF2, 0x10CB2),
    (0x118A0, 0x118A0, 0x118C0, 0x118A0),
    (0x118A1, 0x118A1, 0x118C1, 0x118A1),
    (0x118A2, 0x118A2, 0x118C2, 0x118A2),
    (0x118A3, 0x118A3, 0x118C3, 0x118A3),
    (0x118A4, 0x118A4, 0x118C4, 0x118A4),
    (0x118A5, 0x118A5, 0x118C5, 0x118A5),
    (0x118A6, 0x118A6, 0x118C6, 0x118A6),
    (0x118A7, 0x118A7, 0x118C7, 0x118A7),
    (0x118A8, 0x118A8, 0x118C8, 0x118A8),
    (0x118A9, 0x118A9, 0x118C9, 0x118A9),
    (0x118AA, 0x118AA, 0x118CA, 0x118AA),
    (0x118AB, 0x118AB, 0x118CB, 0x118AB),
    (0x118AC, 0x118AC, 0x118CC, 0x118AC),
    (0x118AD, 0x118AD, 0x118CD, 0x118AD),
    (0x118AE, 0x118AE, 0x118CE, 0x118AE),
    (0x118AF, 0x118AF, 0x118CF, 0x118AF),
    (0x118B0, 0x118B0, 0x118D0, 0x118B0),
    (0x118B1, 0x118B1, 0x118D1, 0x118B1),
    (0x118B2, 0x118B2, 0x118D2, 0x118B2),
    (0x118B3, 0x118B3, 0x118D3, 0x118B3),
    (0x118B4, 0x118B4, 0x118D4, 0x118B4),
    (0x118B5, 0x118B5, 0x118D5, 0x118B5),
    (0x118B6, 0x118B6, 0x118D6, 0x118B6),
    (0x118B7, 0x118B7, 0x118D7, 0x118B7),
    (0x118B8, 0x118B8, 0x118D8, 0x118B8),
    (0x118B9, 0x118B9, 0x118D9, 0x118B9),
    (0x118BA, 0x118BA, 0x118DA, 0x118BA),
    (0x118BB, 0x118BB, 0x118DB, 0x118BB),
    (0x118BC, 0x118BC, 0x118DC, 0x118BC),
    (0x118BD, 0x118BD, 0x118DD, 0x118BD),
    (0x118BE, 0x118BE, 0x118DE, 0x118BE),
    (0x118BF, 0x118BF, 0x118DF, 0x118BF),
    (0x118C0, 0x118A0, 0x118C0, 0x118A0),
    (0x118C1, 0x118A1, 0x118C1, 0x118A1),
    (0x118C2, 0x118A2, 0x118C2, 0x118A2),
    (0x118C3, 0x118A3, 0x118C3, 0x118A3),
    (0x118C4, 0x118A4, 0x118C4, 0x118A4),
    (0x118C5, 0x118A5, 0x118C5, 0x118A5),
    (0x118C6, 0x118A6, 0x118C6, 0x118A6),
    (0x118C7, 0x118A7, 0x118C7, 0x118A7),
    (0x118C8, 0x118A8, 0x118C8, 0x118A8),
    (0x118C9, 0x118A9, 0x118C9, 0x118A9),
    (0x118CA, 0x118AA, 0x118CA, 0x118AA),
    (0x118CB, 0x118AB, 0x118CB, 0x118AB),
    (0x118CC, 0x118AC, 0x118CC, 0x118AC),
    (0x118CD, 0x118AD, 0x118CD, 0x118AD),
    (0x118CE, 0x118AE, 0x118CE, 0x118AE),
    (0x118CF, 0x118AF, 0x118CF, 0x118AF),
    (0x118D0, 0x118B0, 0x118D0, 0x118B0),
    (0x118D1, 0x118B1, 0x118D1, 0x118B1),
    (0x118D2, 0x118B2, 0x118D2, 0x118B2),
    (0x118D3, 0x118B3, 0x118D3, 0x118B3),
    (0x118D4, 0x118B4, 0x118D4, 0x118B4),
    (0x118D5, 0x118B5, 0x118D5, 0x118B5),
    (0x118D6, 0x118B6, 0x118D6, 0x118B6),
    (0x118D7, 0x118B7, 0x118D7, 0x118B7),
    (0x118D8, 0x118B8, 0x118D8, 0x118B8),
    (0x118D9, 0x118B9, 0x118D9, 0x118B9),
    (0x118DA, 0x118BA, 0x118DA, 0x118BA),
    (0x118DB, 0x118BB, 0x118DB, 0x118BB),
    (0x118DC, 0x118BC, 0x118DC, 0x118BC),
    (0x118DD, 0x118BD, 0x118DD, 0x118BD),
    (0x118DE, 0x118BE, 0x118DE, 0x118BE),
    (0x118DF, 0x118BF, 0x118DF, 0x118BF),
    (0x16E40, 0x16E40, 0x16E60, 0x16E40),
    (0x16E41, 0x16E41, 0x16E61, 0x16E41),
    (0x16E42, 0x16E42, 0x16E62, 0x16E42),
    (0x16E43, 0x16E43, 0x16E63, 0x16E43),
    (0x16E44, 0x16E44, 0x16E64, 0x16E44),
    (0x16E45, 0x16E45, 0x16E65, 0x16E45),
    (0x16E46, 0x16E46, 0x16E66, 0x16E46),
    (0x16E47, 0x16E47, 0x16E67, 0x16E47),
    (0x16E48, 0x16E48, 0x16E68, 0x16E48),
    (0x16E49, 0x16E49, 0x16E69, 0x16E49),
    (0x16E4A, 0x16E4A, 0x16E6A, 0x16E4A),
    (0x16E4B, 0x16E4B, 0x16E6B, 0x16E4B),
    (0x16E4C, 0x16E4C, 0x16E6C, 0x16E4C),
    (0x16E4D, 0x16E4D, 0x16E6D, 0x16E4D),
    (0x16E4E, 0x16E4E, 0x16E6E, 0x16E4E),
    (0x16E4F, 0x16E4F, 0x16E6F, 0x16E4F),
    (0x16E50, 0x16E50, 0x16E70, 0x16E50),
    (0x16E51, 0x16E51, 0x16E71, 0x16E51),
    (0x16E52, 0x16E52, 0x16E72, 0x16E52),
    (0x16E53, 0x16E53, 0x16E73, 0x16E53),
    (0x16E54, 0x16E54, 0x16E74, 0x16E54),
    (0x16E55, 0x16E55, 0x16E75, 0x16E55),
    (0x16E56, 0x16E56, 0x16E76, 0x16E56),
    (0x16E57, 0x16E57, 0x16E77, 0x16E57),
    (0x16E58, 0x16E58, 0x16E78, 0x16E58),
    (0x16E59, 0x16E59, 0x16E79, 0x16E59),
    (0x16E5A, 0x16E5A, 0x16E7A, 0x16E5A),
    (0x16E5B, 0x16E5B, 0x16E7B, 0x16E5B),
    (0x16E5C, 0x16E5C, 0x16E7C, 0x16E5C),
    (0x16E5D, 0x16E5D, 0x16E7D, 0x16E5D),
    (0x16E5E, 0x16E5E, 0x16E7E, 0x16E5E),
    (0x16E5F, 0x16E5F, 0x16E7F, 0x16E5F),
    (0x16E60, 0x16E40, 0x16E60, 0x16E40),
    (0x16E61, 0x16E41, 0x16E61, 0x16E41),
    (0x16E62, 0x16E42, 0x16E62, 0x16E42),
    (0x16E63, 0x16E43, 0x16E63, 0x16E43),
    (0x16E64, 0x16E44, 0x16E64, 0x16E44),
    (0x16E65, 0x16E45, 0x16E65, 0x16E45),
    (0x16E66, 0x16E46, 0x16E66, 0x16E46),
    (0x16E67, 0x16E47, 0x16E67, 0x16E47),
    (0x16E68, 0x16E48, 0x16E68, 0x16E48),
    (0x16E69, 0x16E49, 0x16E69, 0x16E49),
    (0x16E6A, 0x16E4A, 0x16E6A, 0x16E4A),
    (0x16E6B, 0x16E4B, 0x16E6B, 0x16E4B),
    (0x16E6C, 0x16E4C, 0x16E6C, 0x16E4C),
    (0x16E6D, 0x16E4D, 0x16E6D, 0x16E4D),
    (0x16E6E, 0x16E4E, 0x16E6E, 0x16E4E),
    (0x16E6F, 0x16E4F, 0x16E6F, 0x16E4F),
    (0x16E70, 0x16E50, 0x16E70, 0x16E50),
    (0x16E71, 0x16E51, 0x16E71, 0x16E51),
    (0x16E72, 0x16E52, 0x16E72, 0x16E52),
    (0x16E73, 0x16E53, 0x16E73, 0x16E53),
    (0x16E74, 0x16E54, 0x16E74, 0x16E54),
    (0x16E75, 0x16E55, 0x16E75, 0x16E55),
    (0x16E76, 0x16E56, 0x16E76, 0x16E56),
    (0x16E77, 0x16E57, 0x16E77, 0x16E57),
    (0x16E78, 0x16E58, 0x16E78, 0x16E58),
    (0x16E79, 0x16E59, 0x16E79, 0x16E59),
    (0x16E7A, 0x16E5A, 0x16E7A, 0x16E5A),
    (0x16E7B, 0x16E5B, 0x16E7B, 0x16E5B),
    (0x16E7C, 0x16E5C, 0x16E7C, 0x16E5C),
    (0x16E7D, 0x16E5D, 0x16E7D, 0x16E5D),
    (0x16E7E, 0x16E5E, 0x16E7E, 0x16E5E),
    (0x16E7F, 0x16E5F, 0x16E7F, 0x16E5F),
    (0x1E900, 0x1E900, 0x1E922, 0x1E900),
    (0x1E901, 0x1E901, 0x1E923, 0x1E901),
    (0x1E902, 0x1E902, 0x1E924, 0x1E902),
    (0x1E903, 0x1E903, 0x1E925, 0x1E903),
    (0x1E904, 0x1E904, 0x1E926, 0x1E904),
    (0x1E905, 0x1E905, 0x1E927, 0x1E905),
    (0x1E906, 0x1E906, 0x1E928, 0x1E906),
    (0x1E907, 0x1E907, 0x1E929, 0x1E907),
    (0x1E908, 0x1E908, 0x1E92A, 0x1E908),
    (0x1E909, 0x1E909, 0x1E92B, 0x1E909),
    (0x1E90A, 0x1E90A, 0x1E92C, 0x1E90A),
    (0x1E90B, 0x1E90B, 0x1E92D, 0x1E90B),
    (0x1E90C, 0x1E90C, 0x1E92E, 0x1E90C),
    (0x1E90D, 0x1E90D, 0x1E92F, 0x1E90D),
    (0x1E90E, 0x1E90E, 0x1E930, 0x1E90E),
    (0x1E90F, 0x1E90F, 0x1E931, 0x1E90F),
    (0x1E910, 0x1E910, 0x1E932, 0x1E910),
    (0x1E911, 0x1E911, 0x1E933, 0x1E911),
    (0x1E912, 0x1E912, 0x1E934, 0x1E912),
    (0x1E913, 0x1E913, 0x1E935, 0x1E913),
    (0x1E914, 0x1E914, 0x1E936, 0x1E914),
    (0x1E915, 0x1E915, 0x1E937, 0x1E915),
    (0x1E916, 0x1E916, 0x1E938, 0x1E916),
    (0x1E917, 0x1E917, 0x1E939, 0x1E917),
    (0x1E918, 0x1E918, 0x1E93A, 0x1E918),
    (0x1E919, 0x1E919, 0x1E93B, 0x1E919),
    (0x1E91A, 0x1E91A, 0x1E93C, 0x1E91A),
    (0x1E91B, 0x1E91B, 0x1E93D, 0x1E91B),
    (0x1E91C, 0x1E91C, 0x1E93E, 0x1E91C),
    (0x1E91D, 0x1E91D, 0x1E93F, 0x1E91D),
    (0x1E91E, 0x1E91E, 0x1E940, 0x1E91E),
    (0x1E91F, 0x1E91F, 0x1E941, 0x1E91F),
    (0x1E920, 0x1E920, 0x1E942, 0x1E920),
    (0x1E921, 0x1E921, 0x1E943, 0x1E921),
    (0x1E922, 0x1E900, 0x1E922, 0x1E900),
    (0x1E923, 0x1E901, 0x1E923, 0x1E901),
    (0x1E924, 0x1E902, 0x1E924, 0x1E902),
    (0x1E925, 0x1E903, 0x1E925, 0x1E903),
    (0x1E926, 0x1E904, 0x1E926, 0x1E904),
    (0x1E927, 0x1E905, 0x1E927, 0x1E905),
    (0x1E928, 0x1E906, 0x1E928, 0x1E906),
    (0x1E929, 0x1E907, 0x1E929, 0x1E907),
    (0x1E92A, 0x1E908, 0x1E92A, 0x1E908),
    (0x1E92B, 0x1E909, 0x1E92B, 0x1E909),
    (0x1E92C, 0x1E90A, 0x1E92C, 0x1E90A),
    (0x1E92D, 0x1E90B, 0x1E92D, 0x1E90B),
    (0x1E92E, 0x1E90C, 0x1E92E, 0x1E90C),
    (0x1E92F, 0x1E90D, 0x1E92F, 0x1E90D),
    (0x1E930, 0x1E90E, 0x1E930, 0x1E90E),
    (0x1E931, 0x1E90F, 0x1E931, 0x1E90F),
    (0x1E932, 0x1E910, 0x1E932, 0x1E910),
    (0x1E933, 0x1E911, 0x1E933, 0x1E911),
    (0x1E934, 0x1E912, 0x1E934, 0x1E912),
    (0x1E935, 0x1E913, 0x1E935, 0x1E913),
    (0x1E936, 0x1E914, 0x1E936, 0x1E914),
    (0x1E937, 0x1E915, 0x1E937, 0x1E915),
    (0x1E938, 0x1E916, 0x1E938, 0x1E916),
    (0x1E939, 0x1E917, 0x1E939, 0x1E917),
    (0x1E93A, 0x1E918, 0x1E93A, 0x1E918),
    (0x1E93B, 0x1E919, 0x1E93B, 0x1E919),
    (0x1E93C, 0x1E91A, 0x1E93C, 0x1E91A),
    (0x1E93D, 0x1E91B, 0x1E93D, 0x1E91B),
    (0x1E93E, 0x1E91C, 0x1E93E, 0x1E91C),
    (0x1E93F, 0x1E91D, 0x1E93F, 0x1E91D),
    (0x1E940, 0x1E91E, 0x1E940, 0x1E91E),
    (0x1E941, 0x1E91F, 0x1E941, 0x1E91F),
    (0x1E942, 0x1E920, 0x1E942, 0x1E920),
    (0x1E943, 0x1E921, 0x1E943, 0x1E921),
];

pub static DEFAULT_SPECIAL_CASE_MAPPINGS: &[(u32, &[u32], &[u32], &[u32])] = &[
    (0x00DF, &[0x00DF], &[0x0053, 0x0073], &[0x0053, 0x0053]),
    (0x0130, &[0x0069, 0x0307], &[0x0130], &[0x0130]),
    (0x0149, &[0x0149], &[0x02BC, 0x004E], &[0x02BC, 0x004E]),
    (0x01F0, &[0x01F0], &[0x004A, 0x030C], &[0x004A, 0x030C]),
    (0x0390, &[0x0390], &[0x0399, 0x0308, 0x0301], &[0x0399, 0x0308, 0x0301]),
    (0x03B0, &[0x03B0], &[0x03A5, 0x0308, 0x0301], &[0x03A5, 0x0308, 0x0301]),
    (0x0587, &[0x0587], &[0x0535, 0x0582], &[0x0535, 0x0552]),
    (0x1E96, &[0x1E96], &[0x0048, 0x0331], &[0x0048, 0x0331]),
    (0x1E97, &[0x1E97], &[0x0054, 0x0308], &[0x0054, 0x0308]),
    (0x1E98, &[0x1E98], &[0x0057, 0x030A], &[0x0057, 0x030A]),
    (0x1E99, &[0x1E99], &[0x0059, 0x030A], &[0x0059, 0x030A]),
    (0x1E9A, &[0x1E9A], &[0x0041, 0x02BE], &[0x0041, 0x02BE]),
    (0x1F50, &[0x1F50], &[0x03A5, 0x0313], &[0x03A5, 0x0313]),
    (0x1F52, &[0x1F52], &[0x03A5, 0x0313, 0x0300], &[0x03A5, 0x0313, 0x0300]),
    (0x1F54, &[0x1F54], &[0x03A5, 0x0313, 0x0301], &[0x03A5, 0x0313, 0x0301]),
    (0x1F56, &[0x1F56], &[0x03A5, 0x0313, 0x0342], &[0x03A5, 0x0313, 0x0342]),
    (0x1F80, &[0x1F80], &[0x1F88], &[0x1F08, 0x0399]),
    (0x1F81, &[0x1F81], &[0x1F89], &[0x1F09, 0x0399]),
    (0x1F82, &[0x1F82], &[0x1F8A], &[0x1F0A, 0x0399]),
    (0x1F83, &[0x1F83], &[0x1F8B], &[0x1F0B, 0x0399]),
    (0x1F84, &[0x1F84], &[0x1F8C], &[0x1F0C, 0x0399]),
    (0x1F85, &[0x1F85], &[0x1F8D], &[0x1F0D, 0x0399]),
    (0x1F86, &[0x1F86], &[0x1F8E], &[0x1F0E, 0x0399]),
    (0x1F87, &[0x1F87], &[0x1F8F], &[0x1F0F, 0x0399]),
    (0x1F88, &[0x1F80], &[0x1F88], &[0x1F08, 0x0399]),
    (0x1F89, &[0x1F81], &[0x1F89], &[0x1F09, 0x0399]),
    (0x1F8A, &[0x1F82], &[0x1F8A], &[0x1F0A, 0x0399]),
    (0x1F8B, &[0x1F83], &[0x1F8B], &[0x1F0B, 0x0399]),
    (0x1F8C, &[0x1F84], &[0x1F8C], &[0x1F0C, 0x0399]),
    (0x1F8D, &[0x1F85], &[0x1F8D], &[0x1F0D, 0x0399]),
    (0x1F8E, &[0x1F86], &[0x1F8E], &[0x1F0E, 0x0399]),
    (0x1F8F, &[0x1F87], &[0x1F8F], &[0x1F0F, 0x0399]),
    (0x1F90, &[0x1F90], &[0x1F98], &[0x1F28, 0x0399]),
    (0x1F91, &[0x1F91], &[0x1F99], &[0x1F29, 0x0399]),
    (0x1F92, &[0x1F92], &[0x1F9A], &[0x1F2A, 0x0399]),
    (0x1F93, &[0x1F93], &[0x1F9B], &[0x1F2B, 0x0399]),
    (0x1F94, &[0x1F94], &[0x1F9C], &[0x1F2C, 0x0399]),
    (0x1F95, &[0x1F95], &[0x1F9D], &[0x1F2D, 0x0399]),
    (0x1F96, &[0x1F96], &[0x1F9E], &[0x1F2E, 0x0399]),
    (0x1F97, &[0x1F97], &[0x1F9F], &[0x1F2F, 0x0399]),
    (0x1F98, &[0x1F90], &[0x1F98], &[0x1F28, 0x0399]),
    (0x1F99, &[0x1F91], &[0x1F99], &[0x1F29, 0x0399]),
    (0x1F9A, &[0x1F92], &[0x1F9A], &[0x1F2A, 0x0399]),
    (0x1F9B, &[0x1F93], &[0x1F9B], &[0x1F2B, 0x0399]),
    (0x1F9C, &[0x1F94], &[0x1F9C], &[0x1F2C, 0x0399]),
    (0x1F9D, &[0x1F95], &[0x1F9D], &[0x1F2D, 0x0399]),
    (0x1F9E, &[0x1F96], &[0x1F9E], &[0x1F2E, 0x0399]),
    (0x1F9F, &[0x1F97], &[0x1F9F], &[0x1F2F, 0x0399]),
    (0x1FA0, &[0x1FA0], &[0x1FA8], &[0x1F68, 0x0399]),
    (0x1FA1, &[0x1FA1], &[0x1FA9], &[0x1F69, 0x0399]),
    (0x1FA2, &[0x1FA2], &[0x1FAA], &[0x1F6A, 0x0399]),
    (0x1FA3, &[0x1FA3], &[0x1FAB], &[0x1F6B, 0x0399]),
    (0x1FA4, &[0x1FA4], &[0x1FAC], &[0x1F6C, 0x0399]),
    (0x1FA5, &[0x1FA5], &[0x1FAD], &[0x1F6D, 0x0399]),
    (0x1FA6, &[0x1FA6], &[0x1FAE], &[0x1F6E, 0x0399]),
    (0x1FA7, &[0x1FA7], &[0x1FAF], &[0x1F6F, 0x0399]),
    (0x1FA8, &[0x1FA0], &[0x1FA8], &[0x1F68, 0x0399]),
    (0x1FA9, &[0x1FA1], &[0x1FA9], &[0x1F69, 0x0399]),
    (0x1FAA, &[0x1FA2], &[0x1FAA], &[0x1F6A, 0x0399]),
    (0x1FAB, &[0x1FA3], &[0x1FAB], &[0x1F6B, 0x0399]),
    (0x1FAC, &[0x1FA4], &[0x1FAC], &[0x1F6C, 0x0399]),
    (0x1FAD, &[0x1FA5], &[0x1FAD], &[0x1F6D, 0x0399]),
    (0x1FAE, &[0x1FA6], &[0x1FAE], &[0x1F6E, 0x0399]),
    (0x1FAF, &[0x1FA7], &[0x1FAF], &[0x1F6F, 0x0399]),
    (0x1FB2, &[0x1FB2], &[0x1FBA, 0x0345], &[0x1FBA, 0x0399]),
    (0x1FB3, &[0x1FB3], &[0x1FBC], &[0x0391, 0x0399]),
    (0x1FB4, &[0x1FB4], &[0x0386, 0x0345], &[0x0386, 0x0399]),
    (0x1FB6, &[0x1FB6], &[0x0391, 0x0342], &[0x0391, 0x0342]),
    (0x1FB7, &[0x1FB7], &[0x0391, 0x0342, 0x0345], &[0x0391, 0x0342, 0x0399]),
    (0x1FBC, &[0x1FB3], &[0x1FBC], &[0x0391, 0x0399]),
    (0x1FC2, &[0x1FC2], &[0x1FCA, 0x0345], &[0x1FCA, 0x0399]),
    (0x1FC3, &[0x1FC3], &[0x1FCC], &[0x0397, 0x0399]),
    (0x1FC4, &[0x1FC4], &[0x0389, 0x0345], &[0x0389, 0x0399]),
    (0x1FC6, &[0x1FC6], &[0x0397, 0x0342], &[0x0397, 0x0342]),
    (0x1FC7, &[0x1FC7], &[0x0397, 0x0342, 0x0345], &[0x0397, 0x0342, 0x0399]),
    (0x1FCC, &[0x1FC3], &[0x1FCC], &[0x0397, 0x0399]),
    (0x1FD2, &[0x1FD2], &[0x0399, 0x0308, 0x0300], &[0x0399, 0x0308, 0x0300]),
    (0x1FD3, &[0x1FD3], &[0x0399, 0x0308, 0x0301], &[0x0399, 0x0308, 0x0301]),
    (0x1FD6, &[0x1FD6], &[0x0399, 0x0342], &[0x0399, 0x0342]),
    (0x1FD7, &[0x1FD7], &[0x0399, 0x0308, 0x0342], &[0x0399, 0x0308, 0x0342]),
    (0x1FE2, &[0x1FE2], &[0x03A5, 0x0308, 0x0300], &[0x03A5, 0x0308, 0x0300]),
    (0x1FE3, &[0x1FE3], &[0x03A5, 0x0308, 0x0301], &[0x03A5, 0x0308, 0x0301]),
    (0x1FE4, &[0x1FE4], &[0x03A1, 0x0313], &[0x03A1, 0x0313]),
    (0x1FE6, &[0x1FE6], &[0x03A5, 0x0342], &[0x03A5, 0x0342]),
    (0x1FE7, &[0x1FE7], &[0x03A5, 0x0308, 0x0342], &[0x03A5, 0x0308, 0x0342]),
    (0x1FF2, &[0x1FF2], &[0x1FFA, 0x0345], &[0x1FFA, 0x0399]),
    (0x1FF3, &[0x1FF3], &[0x1FFC], &[0x03A9, 0x0399]),
    (0x1FF4, &[0x1FF4], &[0x038F, 0x0345], &[0x038F, 0x0399]),
    (0x1FF6, &[0x1FF6], &[0x03A9, 0x0342], &[0x03A9, 0x0342]),
    (0x1FF7, &[0x1FF7], &[0x03A9, 0x0342, 0x0345], &[0x03A9, 0x0342, 0x0399]),
    (0x1FFC, &[0x1FF3], &[0x1FFC], &[0x03A9, 0x0399]),
    (0xFB00, &[0xFB00], &[0x0046, 0x0066], &[0x0046, 0x0046]),
    (0xFB01, &[0xFB01], &[0x0046, 0x0069], &[0x0046, 0x0049]),
    (0xFB02, &[0xFB02], &[0x0046, 0x006C], &[0x0046, 0x004C]),
    (0xFB03, &[0xFB03], &[0x0046, 0x0066, 0x0069], &[0x0046, 0x0046, 0x0049]),
    (0xFB04, &[0xFB04], &[0x0046, 0x0066, 0x006C], &[0x0046, 0x0046, 0x004C]),
    (0xFB05, &[0xFB05], &[0x0053, 0x0074], &[0x0053, 0x0054]),
    (0xFB06, &[0xFB06], &[0x0053, 0x0074], &[0x0053, 0x0054]),
    (0xFB13, &[0xFB13], &[0x0544, 0x0576], &[0x0544, 0x0546]),
    (0xFB14, &[0xFB14], &[0x0544, 0x0565], &[0x0544, 0x0535]),
    (0xFB15, &[0xFB15], &[0x0544, 0x056B], &[0x0544, 0x053B]),
    (0xFB16, &[0xFB16], &[0x054E, 0x0576], &[0x054E, 0x0546]),
    (0xFB17, &[0xFB17], &[0x0544, 0x056D], &[0x0544, 0x053D]),
];

pub static SPECIAL_CASE_MAPPINGS: &[SpecialCaseMapping] = &[
    SpecialCaseMapping {
        scalar: 0x0049,
        language: Some("lt"),
        context: Some(CasingContext::MoreAbove),
        lower: &[0x0069, 0x0307],
        title: &[0x0049],
        upper: &[0x0049],
    },
    SpecialCaseMapping {
        scalar: 0x0049,
        language: Some("tr"),
        context: Some(CasingContext::NotBeforeDot),
        lower: &[0x0131],
        title: &[0x0049],
        upper: &[0x0049],
    },
    SpecialCaseMapping {
        scalar: 0x0049,
        language: Some("az"),
        context: Some(CasingContext::NotBeforeDot),
        lower: &[0x0131],
        title: &[0x0049],
        upper: &[0x0049],
    },
    SpecialCaseMapping {
        scalar: 0x004A,
        language: Some("lt"),
        context: Some(CasingContext::MoreAbove),
        lower: &[0x006A, 0x0307],
        title: &[0x004A],
        upper: &[0x004A],
    },
    SpecialCaseMapping {
        scalar: 0x0069,
        language: Some("tr"),
        context: None,
        lower: &[0x0069],
        title: &[0x0130],
        upper: &[0x0130],
    },
    SpecialCaseMapping {
        scalar: 0x0069,
        language: Some("az"),
        context: None,
        lower: &[0x0069],
        title: &[0x0130],
        upper: &[0x0130],
    },
    SpecialCaseMapping {
        scalar: 0x00CC,
        language: Some("lt"),
        context: None,
        lower: &[0x0069, 0x0307, 0x0300],
        title: &[0x00CC],
        upper: &[0x00CC],
    },
    SpecialCaseMapping {
        scalar: 0x00CD,
        language: Some("lt"),
        context: None,
        lower: &[0x0069, 0x0307, 0x0301],
        title: &[0x00CD],
        upper: &[0x00CD],
    },
    SpecialCaseMapping {
        scalar: 0x0128,
        language: Some("lt"),
        context: None,
        lower: &[0x0069, 0x0307, 0x0303],
        title: &[0x0128],
        upper: &[0x0128],
    },
    SpecialCaseMapping {
        scalar: 0x012E,
        language: Some("lt"),
        context: Some(CasingContext::MoreAbove),
        lower: &[0x012F, 0x0307],
        title: &[0x012E],
        upper: &[0x012E],
    },
    SpecialCaseMapping {
        scalar: 0x0130,
        language: Some("tr"),
        context: None,
        lower: &[0x0069],
        title: &[0x0130],
        upper: &[0x0130],
    },
    SpecialCaseMapping {
        scalar: 0x0130,
        language: Some("az"),
        context: None,
        lower: &[0x0069],
        title: &[0x0130],
        upper: &[0x0130],
    },
    SpecialCaseMapping {
        scalar: 0x0307,
        language: Some("lt"),
        context: Some(CasingContext::AfterSoftDotted),
        lower: &[0x0307],
        title: &[],
        upper: &[],
    },
    SpecialCaseMapping {
        scalar: 0x0307,
        language: Some("tr"),
        context: Some(CasingContext::AfterI),
        lower: &[],
        title: &[0x0307],
        upper: &[0x0307],
    },
    SpecialCaseMapping {
        scalar: 0x0307,
        language: Some("az"),
        context: Some(CasingContext::AfterI),
        lower: &[],
        title: &[0x0307],
        upper: &[0x0307],
    },
    SpecialCaseMapping {
        scalar: 0x03A3,
        language: None,
        context: Some(CasingContext::FinalSigma),
        lower: &[0x03C2],
        title: &[0x03A3],
        upper: &[0x03A3],
    },
];

pub static CASE_FOLDINGS: &[CaseFolding] = &[
    CaseFolding { scalar: 0x0041, common: Some(0x0061), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0042, common: Some(0x0062), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0043, common: Some(0x0063), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0044, common: Some(0x0064), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0045, common: Some(0x0065), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0046, common: Some(0x0066), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0047, common: Some(0x0067), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0048, common: Some(0x0068), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0049, common: Some(0x0069), full: None, simple: None, turkic: Some(&[0x0131]) },
    CaseFolding { scalar: 0x004A, common: Some(0x006A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x004B, common: Some(0x006B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x004C, common: Some(0x006C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x004D, common: Some(0x006D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x004E, common: Some(0x006E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x004F, common: Some(0x006F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0050, common: Some(0x0070), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0051, common: Some(0x0071), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0052, common: Some(0x0072), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0053, common: Some(0x0073), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0054, common: Some(0x0074), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0055, common: Some(0x0075), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0056, common: Some(0x0076), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0057, common: Some(0x0077), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0058, common: Some(0x0078), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0059, common: Some(0x0079), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x005A, common: Some(0x007A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00B5, common: Some(0x03BC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C0, common: Some(0x00E0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C1, common: Some(0x00E1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C2, common: Some(0x00E2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C3, common: Some(0x00E3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C4, common: Some(0x00E4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C5, common: Some(0x00E5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C6, common: Some(0x00E6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C7, common: Some(0x00E7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C8, common: Some(0x00E8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00C9, common: Some(0x00E9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00CA, common: Some(0x00EA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00CB, common: Some(0x00EB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00CC, common: Some(0x00EC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00CD, common: Some(0x00ED), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00CE, common: Some(0x00EE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00CF, common: Some(0x00EF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00D0, common: Some(0x00F0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00D1, common: Some(0x00F1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00D2, common: Some(0x00F2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00D3, common: Some(0x00F3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00D4, common: Some(0x00F4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00D5, common: Some(0x00F5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00D6, common: Some(0x00F6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00D8, common: Some(0x00F8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00D9, common: Some(0x00F9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00DA, common: Some(0x00FA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00DB, common: Some(0x00FB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00DC, common: Some(0x00FC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00DD, common: Some(0x00FD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00DE, common: Some(0x00FE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x00DF, common: None, full: Some(&[0x0073, 0x0073]), simple: None, turkic: None },
    CaseFolding { scalar: 0x0100, common: Some(0x0101), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0102, common: Some(0x0103), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0104, common: Some(0x0105), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0106, common: Some(0x0107), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0108, common: Some(0x0109), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x010A, common: Some(0x010B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x010C, common: Some(0x010D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x010E, common: Some(0x010F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0110, common: Some(0x0111), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0112, common: Some(0x0113), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0114, common: Some(0x0115), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0116, common: Some(0x0117), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0118, common: Some(0x0119), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x011A, common: Some(0x011B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x011C, common: Some(0x011D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x011E, common: Some(0x011F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0120, common: Some(0x0121), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0122, common: Some(0x0123), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0124, common: Some(0x0125), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0126, common: Some(0x0127), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0128, common: Some(0x0129), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x012A, common: Some(0x012B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x012C, common: Some(0x012D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x012E, common: Some(0x012F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0130, common: None, full: Some(&[0x0069, 0x0307]), simple: None, turkic: Some(&[0x0069]) },
    CaseFolding { scalar: 0x0132, common: Some(0x0133), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0134, common: Some(0x0135), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0136, common: Some(0x0137), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0139, common: Some(0x013A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x013B, common: Some(0x013C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x013D, common: Some(0x013E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x013F, common: Some(0x0140), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0141, common: Some(0x0142), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0143, common: Some(0x0144), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0145, common: Some(0x0146), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0147, common: Some(0x0148), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0149, common: None, full: Some(&[0x02BC, 0x006E]), simple: None, turkic: None },
    CaseFolding { scalar: 0x014A, common: Some(0x014B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x014C, common: Some(0x014D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x014E, common: Some(0x014F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0150, common: Some(0x0151), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0152, common: Some(0x0153), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0154, common: Some(0x0155), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0156, common: Some(0x0157), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0158, common: Some(0x0159), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x015A, common: Some(0x015B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x015C, common: Some(0x015D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x015E, common: Some(0x015F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0160, common: Some(0x0161), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0162, common: Some(0x0163), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0164, common: Some(0x0165), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0166, common: Some(0x0167), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0168, common: Some(0x0169), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x016A, common: Some(0x016B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x016C, common: Some(0x016D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x016E, common: Some(0x016F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0170, common: Some(0x0171), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0172, common: Some(0x0173), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0174, common: Some(0x0175), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0176, common: Some(0x0177), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0178, common: Some(0x00FF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0179, common: Some(0x017A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x017B, common: Some(0x017C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x017D, common: Some(0x017E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x017F, common: Some(0x0073), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0181, common: Some(0x0253), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0182, common: Some(0x0183), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0184, common: Some(0x0185), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0186, common: Some(0x0254), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0187, common: Some(0x0188), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0189, common: Some(0x0256), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x018A, common: Some(0x0257), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x018B, common: Some(0x018C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x018E, common: Some(0x01DD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x018F, common: Some(0x0259), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0190, common: Some(0x025B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0191, common: Some(0x0192), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0193, common: Some(0x0260), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0194, common: Some(0x0263), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0196, common: Some(0x0269), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0197, common: Some(0x0268), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0198, common: Some(0x0199), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x019C, common: Some(0x026F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x019D, common: Some(0x0272), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x019F, common: Some(0x0275), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01A0, common: Some(0x01A1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01A2, common: Some(0x01A3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01A4, common: Some(0x01A5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01A6, common: Some(0x0280), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01A7, common: Some(0x01A8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01A9, common: Some(0x0283), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01AC, common: Some(0x01AD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01AE, common: Some(0x0288), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01AF, common: Some(0x01B0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01B1, common: Some(0x028A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01B2, common: Some(0x028B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01B3, common: Some(0x01B4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01B5, common: Some(0x01B6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01B7, common: Some(0x0292), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01B8, common: Some(0x01B9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01BC, common: Some(0x01BD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01C4, common: Some(0x01C6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01C5, common: Some(0x01C6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01C7, common: Some(0x01C9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01C8, common: Some(0x01C9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01CA, common: Some(0x01CC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01CB, common: Some(0x01CC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01CD, common: Some(0x01CE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01CF, common: Some(0x01D0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01D1, common: Some(0x01D2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01D3, common: Some(0x01D4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01D5, common: Some(0x01D6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01D7, common: Some(0x01D8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01D9, common: Some(0x01DA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01DB, common: Some(0x01DC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01DE, common: Some(0x01DF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01E0, common: Some(0x01E1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01E2, common: Some(0x01E3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01E4, common: Some(0x01E5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01E6, common: Some(0x01E7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01E8, common: Some(0x01E9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01EA, common: Some(0x01EB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01EC, common: Some(0x01ED), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01EE, common: Some(0x01EF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01F0, common: None, full: Some(&[0x006A, 0x030C]), simple: None, turkic: None },
    CaseFolding { scalar: 0x01F1, common: Some(0x01F3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01F2, common: Some(0x01F3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01F4, common: Some(0x01F5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01F6, common: Some(0x0195), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01F7, common: Some(0x01BF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01F8, common: Some(0x01F9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01FA, common: Some(0x01FB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01FC, common: Some(0x01FD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x01FE, common: Some(0x01FF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0200, common: Some(0x0201), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0202, common: Some(0x0203), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0204, common: Some(0x0205), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0206, common: Some(0x0207), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0208, common: Some(0x0209), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x020A, common: Some(0x020B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x020C, common: Some(0x020D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x020E, common: Some(0x020F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0210, common: Some(0x0211), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0212, common: Some(0x0213), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0214, common: Some(0x0215), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0216, common: Some(0x0217), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0218, common: Some(0x0219), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x021A, common: Some(0x021B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x021C, common: Some(0x021D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x021E, common: Some(0x021F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0220, common: Some(0x019E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0222, common: Some(0x0223), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0224, common: Some(0x0225), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0226, common: Some(0x0227), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0228, common: Some(0x0229), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x022A, common: Some(0x022B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x022C, common: Some(0x022D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x022E, common: Some(0x022F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0230, common: Some(0x0231), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0232, common: Some(0x0233), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x023A, common: Some(0x2C65), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x023B, common: Some(0x023C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x023D, common: Some(0x019A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x023E, common: Some(0x2C66), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0241, common: Some(0x0242), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0243, common: Some(0x0180), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0244, common: Some(0x0289), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0245, common: Some(0x028C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0246, common: Some(0x0247), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0248, common: Some(0x0249), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x024A, common: Some(0x024B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x024C, common: Some(0x024D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x024E, common: Some(0x024F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0345, common: Some(0x03B9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0370, common: Some(0x0371), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0372, common: Some(0x0373), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0376, common: Some(0x0377), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x037F, common: Some(0x03F3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0386, common: Some(0x03AC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0388, common: Some(0x03AD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0389, common: Some(0x03AE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x038A, common: Some(0x03AF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x038C, common: Some(0x03CC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x038E, common: Some(0x03CD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x038F, common: Some(0x03CE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0390, common: None, full: Some(&[0x03B9, 0x0308, 0x0301]), simple: None, turkic: None },
    CaseFolding { scalar: 0x0391, common: Some(0x03B1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0392, common: Some(0x03B2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0393, common: Some(0x03B3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0394, common: Some(0x03B4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0395, common: Some(0x03B5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0396, common: Some(0x03B6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0397, common: Some(0x03B7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0398, common: Some(0x03B8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0399, common: Some(0x03B9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x039A, common: Some(0x03BA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x039B, common: Some(0x03BB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x039C, common: Some(0x03BC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x039D, common: Some(0x03BD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x039E, common: Some(0x03BE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x039F, common: Some(0x03BF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03A0, common: Some(0x03C0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03A1, common: Some(0x03C1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03A3, common: Some(0x03C3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03A4, common: Some(0x03C4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03A5, common: Some(0x03C5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03A6, common: Some(0x03C6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03A7, common: Some(0x03C7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03A8, common: Some(0x03C8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03A9, common: Some(0x03C9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03AA, common: Some(0x03CA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03AB, common: Some(0x03CB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03B0, common: None, full: Some(&[0x03C5, 0x0308, 0x0301]), simple: None, turkic: None },
    CaseFolding { scalar: 0x03C2, common: Some(0x03C3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03CF, common: Some(0x03D7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03D0, common: Some(0x03B2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03D1, common: Some(0x03B8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03D5, common: Some(0x03C6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03D6, common: Some(0x03C0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03D8, common: Some(0x03D9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03DA, common: Some(0x03DB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03DC, common: Some(0x03DD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03DE, common: Some(0x03DF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03E0, common: Some(0x03E1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03E2, common: Some(0x03E3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03E4, common: Some(0x03E5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03E6, common: Some(0x03E7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03E8, common: Some(0x03E9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03EA, common: Some(0x03EB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03EC, common: Some(0x03ED), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03EE, common: Some(0x03EF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03F0, common: Some(0x03BA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03F1, common: Some(0x03C1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03F4, common: Some(0x03B8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03F5, common: Some(0x03B5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03F7, common: Some(0x03F8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03F9, common: Some(0x03F2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03FA, common: Some(0x03FB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03FD, common: Some(0x037B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03FE, common: Some(0x037C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x03FF, common: Some(0x037D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0400, common: Some(0x0450), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0401, common: Some(0x0451), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0402, common: Some(0x0452), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0403, common: Some(0x0453), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0404, common: Some(0x0454), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0405, common: Some(0x0455), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0406, common: Some(0x0456), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0407, common: Some(0x0457), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0408, common: Some(0x0458), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0409, common: Some(0x0459), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x040A, common: Some(0x045A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x040B, common: Some(0x045B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x040C, common: Some(0x045C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x040D, common: Some(0x045D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x040E, common: Some(0x045E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x040F, common: Some(0x045F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0410, common: Some(0x0430), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0411, common: Some(0x0431), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0412, common: Some(0x0432), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0413, common: Some(0x0433), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0414, common: Some(0x0434), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0415, common: Some(0x0435), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0416, common: Some(0x0436), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0417, common: Some(0x0437), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0418, common: Some(0x0438), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0419, common: Some(0x0439), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x041A, common: Some(0x043A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x041B, common: Some(0x043B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x041C, common: Some(0x043C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x041D, common: Some(0x043D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x041E, common: Some(0x043E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x041F, common: Some(0x043F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0420, common: Some(0x0440), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0421, common: Some(0x0441), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0422, common: Some(0x0442), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0423, common: Some(0x0443), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0424, common: Some(0x0444), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0425, common: Some(0x0445), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0426, common: Some(0x0446), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0427, common: Some(0x0447), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0428, common: Some(0x0448), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0429, common: Some(0x0449), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x042A, common: Some(0x044A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x042B, common: Some(0x044B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x042C, common: Some(0x044C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x042D, common: Some(0x044D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x042E, common: Some(0x044E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x042F, common: Some(0x044F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0460, common: Some(0x0461), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0462, common: Some(0x0463), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0464, common: Some(0x0465), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0466, common: Some(0x0467), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0468, common: Some(0x0469), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x046A, common: Some(0x046B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x046C, common: Some(0x046D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x046E, common: Some(0x046F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0470, common: Some(0x0471), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0472, common: Some(0x0473), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0474, common: Some(0x0475), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0476, common: Some(0x0477), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0478, common: Some(0x0479), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x047A, common: Some(0x047B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x047C, common: Some(0x047D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x047E, common: Some(0x047F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0480, common: Some(0x0481), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x048A, common: Some(0x048B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x048C, common: Some(0x048D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x048E, common: Some(0x048F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0490, common: Some(0x0491), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0492, common: Some(0x0493), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0494, common: Some(0x0495), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0496, common: Some(0x0497), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0498, common: Some(0x0499), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x049A, common: Some(0x049B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x049C, common: Some(0x049D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x049E, common: Some(0x049F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04A0, common: Some(0x04A1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04A2, common: Some(0x04A3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04A4, common: Some(0x04A5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04A6, common: Some(0x04A7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04A8, common: Some(0x04A9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04AA, common: Some(0x04AB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04AC, common: Some(0x04AD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04AE, common: Some(0x04AF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04B0, common: Some(0x04B1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04B2, common: Some(0x04B3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04B4, common: Some(0x04B5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04B6, common: Some(0x04B7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04B8, common: Some(0x04B9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04BA, common: Some(0x04BB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04BC, common: Some(0x04BD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04BE, common: Some(0x04BF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04C0, common: Some(0x04CF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04C1, common: Some(0x04C2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04C3, common: Some(0x04C4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04C5, common: Some(0x04C6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04C7, common: Some(0x04C8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04C9, common: Some(0x04CA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04CB, common: Some(0x04CC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04CD, common: Some(0x04CE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04D0, common: Some(0x04D1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04D2, common: Some(0x04D3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04D4, common: Some(0x04D5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04D6, common: Some(0x04D7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04D8, common: Some(0x04D9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04DA, common: Some(0x04DB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04DC, common: Some(0x04DD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04DE, common: Some(0x04DF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04E0, common: Some(0x04E1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04E2, common: Some(0x04E3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04E4, common: Some(0x04E5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04E6, common: Some(0x04E7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04E8, common: Some(0x04E9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04EA, common: Some(0x04EB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04EC, common: Some(0x04ED), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04EE, common: Some(0x04EF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04F0, common: Some(0x04F1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04F2, common: Some(0x04F3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04F4, common: Some(0x04F5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04F6, common: Some(0x04F7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04F8, common: Some(0x04F9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04FA, common: Some(0x04FB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04FC, common: Some(0x04FD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x04FE, common: Some(0x04FF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0500, common: Some(0x0501), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0502, common: Some(0x0503), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0504, common: Some(0x0505), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0506, common: Some(0x0507), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0508, common: Some(0x0509), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x050A, common: Some(0x050B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x050C, common: Some(0x050D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x050E, common: Some(0x050F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0510, common: Some(0x0511), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0512, common: Some(0x0513), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0514, common: Some(0x0515), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0516, common: Some(0x0517), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0518, common: Some(0x0519), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x051A, common: Some(0x051B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x051C, common: Some(0x051D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x051E, common: Some(0x051F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0520, common: Some(0x0521), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0522, common: Some(0x0523), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0524, common: Some(0x0525), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0526, common: Some(0x0527), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0528, common: Some(0x0529), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x052A, common: Some(0x052B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x052C, common: Some(0x052D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x052E, common: Some(0x052F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0531, common: Some(0x0561), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0532, common: Some(0x0562), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0533, common: Some(0x0563), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0534, common: Some(0x0564), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0535, common: Some(0x0565), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0536, common: Some(0x0566), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0537, common: Some(0x0567), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0538, common: Some(0x0568), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0539, common: Some(0x0569), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x053A, common: Some(0x056A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x053B, common: Some(0x056B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x053C, common: Some(0x056C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x053D, common: Some(0x056D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x053E, common: Some(0x056E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x053F, common: Some(0x056F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0540, common: Some(0x0570), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0541, common: Some(0x0571), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0542, common: Some(0x0572), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0543, common: Some(0x0573), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0544, common: Some(0x0574), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0545, common: Some(0x0575), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0546, common: Some(0x0576), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0547, common: Some(0x0577), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0548, common: Some(0x0578), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0549, common: Some(0x0579), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x054A, common: Some(0x057A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x054B, common: Some(0x057B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x054C, common: Some(0x057C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x054D, common: Some(0x057D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x054E, common: Some(0x057E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x054F, common: Some(0x057F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0550, common: Some(0x0580), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0551, common: Some(0x0581), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0552, common: Some(0x0582), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0553, common: Some(0x0583), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0554, common: Some(0x0584), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0555, common: Some(0x0585), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0556, common: Some(0x0586), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x0587, common: None, full: Some(&[0x0565, 0x0582]), simple: None, turkic: None },
    CaseFolding { scalar: 0x10A0, common: Some(0x2D00), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10A1, common: Some(0x2D01), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10A2, common: Some(0x2D02), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10A3, common: Some(0x2D03), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10A4, common: Some(0x2D04), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10A5, common: Some(0x2D05), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10A6, common: Some(0x2D06), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10A7, common: Some(0x2D07), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10A8, common: Some(0x2D08), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10A9, common: Some(0x2D09), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10AA, common: Some(0x2D0A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10AB, common: Some(0x2D0B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10AC, common: Some(0x2D0C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10AD, common: Some(0x2D0D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10AE, common: Some(0x2D0E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10AF, common: Some(0x2D0F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B0, common: Some(0x2D10), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B1, common: Some(0x2D11), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B2, common: Some(0x2D12), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B3, common: Some(0x2D13), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B4, common: Some(0x2D14), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B5, common: Some(0x2D15), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B6, common: Some(0x2D16), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B7, common: Some(0x2D17), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B8, common: Some(0x2D18), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10B9, common: Some(0x2D19), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10BA, common: Some(0x2D1A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10BB, common: Some(0x2D1B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10BC, common: Some(0x2D1C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10BD, common: Some(0x2D1D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10BE, common: Some(0x2D1E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10BF, common: Some(0x2D1F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C0, common: Some(0x2D20), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C1, common: Some(0x2D21), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C2, common: Some(0x2D22), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C3, common: Some(0x2D23), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C4, common: Some(0x2D24), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C5, common: Some(0x2D25), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C7, common: Some(0x2D27), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CD, common: Some(0x2D2D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x13F8, common: Some(0x13F0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x13F9, common: Some(0x13F1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x13FA, common: Some(0x13F2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x13FB, common: Some(0x13F3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x13FC, common: Some(0x13F4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x13FD, common: Some(0x13F5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C80, common: Some(0x0432), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C81, common: Some(0x0434), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C82, common: Some(0x043E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C83, common: Some(0x0441), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C84, common: Some(0x0442), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C85, common: Some(0x0442), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C86, common: Some(0x044A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C87, common: Some(0x0463), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C88, common: Some(0xA64B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C90, common: Some(0x10D0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C91, common: Some(0x10D1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C92, common: Some(0x10D2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C93, common: Some(0x10D3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C94, common: Some(0x10D4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C95, common: Some(0x10D5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C96, common: Some(0x10D6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C97, common: Some(0x10D7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C98, common: Some(0x10D8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C99, common: Some(0x10D9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C9A, common: Some(0x10DA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C9B, common: Some(0x10DB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C9C, common: Some(0x10DC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C9D, common: Some(0x10DD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C9E, common: Some(0x10DE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1C9F, common: Some(0x10DF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA0, common: Some(0x10E0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA1, common: Some(0x10E1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA2, common: Some(0x10E2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA3, common: Some(0x10E3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA4, common: Some(0x10E4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA5, common: Some(0x10E5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA6, common: Some(0x10E6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA7, common: Some(0x10E7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA8, common: Some(0x10E8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CA9, common: Some(0x10E9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CAA, common: Some(0x10EA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CAB, common: Some(0x10EB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CAC, common: Some(0x10EC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CAD, common: Some(0x10ED), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CAE, common: Some(0x10EE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CAF, common: Some(0x10EF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB0, common: Some(0x10F0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB1, common: Some(0x10F1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB2, common: Some(0x10F2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB3, common: Some(0x10F3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB4, common: Some(0x10F4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB5, common: Some(0x10F5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB6, common: Some(0x10F6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB7, common: Some(0x10F7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB8, common: Some(0x10F8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CB9, common: Some(0x10F9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CBA, common: Some(0x10FA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CBD, common: Some(0x10FD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CBE, common: Some(0x10FE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1CBF, common: Some(0x10FF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E00, common: Some(0x1E01), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E02, common: Some(0x1E03), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E04, common: Some(0x1E05), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E06, common: Some(0x1E07), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E08, common: Some(0x1E09), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E0A, common: Some(0x1E0B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E0C, common: Some(0x1E0D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E0E, common: Some(0x1E0F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E10, common: Some(0x1E11), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E12, common: Some(0x1E13), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E14, common: Some(0x1E15), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E16, common: Some(0x1E17), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E18, common: Some(0x1E19), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E1A, common: Some(0x1E1B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E1C, common: Some(0x1E1D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E1E, common: Some(0x1E1F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E20, common: Some(0x1E21), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E22, common: Some(0x1E23), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E24, common: Some(0x1E25), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E26, common: Some(0x1E27), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E28, common: Some(0x1E29), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E2A, common: Some(0x1E2B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E2C, common: Some(0x1E2D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E2E, common: Some(0x1E2F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E30, common: Some(0x1E31), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E32, common: Some(0x1E33), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E34, common: Some(0x1E35), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E36, common: Some(0x1E37), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E38, common: Some(0x1E39), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E3A, common: Some(0x1E3B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E3C, common: Some(0x1E3D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E3E, common: Some(0x1E3F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E40, common: Some(0x1E41), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E42, common: Some(0x1E43), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E44, common: Some(0x1E45), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E46, common: Some(0x1E47), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E48, common: Some(0x1E49), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E4A, common: Some(0x1E4B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E4C, common: Some(0x1E4D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E4E, common: Some(0x1E4F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E50, common: Some(0x1E51), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E52, common: Some(0x1E53), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E54, common: Some(0x1E55), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E56, common: Some(0x1E57), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E58, common: Some(0x1E59), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E5A, common: Some(0x1E5B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E5C, common: Some(0x1E5D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E5E, common: Some(0x1E5F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E60, common: Some(0x1E61), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E62, common: Some(0x1E63), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E64, common: Some(0x1E65), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E66, common: Some(0x1E67), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E68, common: Some(0x1E69), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E6A, common: Some(0x1E6B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E6C, common: Some(0x1E6D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E6E, common: Some(0x1E6F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E70, common: Some(0x1E71), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E72, common: Some(0x1E73), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E74, common: Some(0x1E75), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E76, common: Some(0x1E77), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E78, common: Some(0x1E79), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E7A, common: Some(0x1E7B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E7C, common: Some(0x1E7D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E7E, common: Some(0x1E7F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E80, common: Some(0x1E81), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E82, common: Some(0x1E83), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E84, common: Some(0x1E85), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E86, common: Some(0x1E87), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E88, common: Some(0x1E89), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E8A, common: Some(0x1E8B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E8C, common: Some(0x1E8D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E8E, common: Some(0x1E8F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E90, common: Some(0x1E91), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E92, common: Some(0x1E93), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E94, common: Some(0x1E95), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E96, common: None, full: Some(&[0x0068, 0x0331]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1E97, common: None, full: Some(&[0x0074, 0x0308]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1E98, common: None, full: Some(&[0x0077, 0x030A]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1E99, common: None, full: Some(&[0x0079, 0x030A]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1E9A, common: None, full: Some(&[0x0061, 0x02BE]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1E9B, common: Some(0x1E61), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E9E, common: None, full: Some(&[0x0073, 0x0073]), simple: Some(0x00DF), turkic: None },
    CaseFolding { scalar: 0x1EA0, common: Some(0x1EA1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EA2, common: Some(0x1EA3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EA4, common: Some(0x1EA5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EA6, common: Some(0x1EA7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EA8, common: Some(0x1EA9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EAA, common: Some(0x1EAB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EAC, common: Some(0x1EAD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EAE, common: Some(0x1EAF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EB0, common: Some(0x1EB1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EB2, common: Some(0x1EB3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EB4, common: Some(0x1EB5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EB6, common: Some(0x1EB7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EB8, common: Some(0x1EB9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EBA, common: Some(0x1EBB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EBC, common: Some(0x1EBD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EBE, common: Some(0x1EBF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EC0, common: Some(0x1EC1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EC2, common: Some(0x1EC3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EC4, common: Some(0x1EC5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EC6, common: Some(0x1EC7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EC8, common: Some(0x1EC9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1ECA, common: Some(0x1ECB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1ECC, common: Some(0x1ECD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1ECE, common: Some(0x1ECF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1ED0, common: Some(0x1ED1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1ED2, common: Some(0x1ED3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1ED4, common: Some(0x1ED5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1ED6, common: Some(0x1ED7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1ED8, common: Some(0x1ED9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EDA, common: Some(0x1EDB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EDC, common: Some(0x1EDD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EDE, common: Some(0x1EDF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EE0, common: Some(0x1EE1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EE2, common: Some(0x1EE3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EE4, common: Some(0x1EE5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EE6, common: Some(0x1EE7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EE8, common: Some(0x1EE9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EEA, common: Some(0x1EEB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EEC, common: Some(0x1EED), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EEE, common: Some(0x1EEF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EF0, common: Some(0x1EF1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EF2, common: Some(0x1EF3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EF4, common: Some(0x1EF5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EF6, common: Some(0x1EF7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EF8, common: Some(0x1EF9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EFA, common: Some(0x1EFB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EFC, common: Some(0x1EFD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1EFE, common: Some(0x1EFF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F08, common: Some(0x1F00), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F09, common: Some(0x1F01), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F0A, common: Some(0x1F02), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F0B, common: Some(0x1F03), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F0C, common: Some(0x1F04), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F0D, common: Some(0x1F05), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F0E, common: Some(0x1F06), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F0F, common: Some(0x1F07), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F18, common: Some(0x1F10), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F19, common: Some(0x1F11), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F1A, common: Some(0x1F12), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F1B, common: Some(0x1F13), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F1C, common: Some(0x1F14), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F1D, common: Some(0x1F15), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F28, common: Some(0x1F20), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F29, common: Some(0x1F21), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F2A, common: Some(0x1F22), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F2B, common: Some(0x1F23), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F2C, common: Some(0x1F24), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F2D, common: Some(0x1F25), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F2E, common: Some(0x1F26), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F2F, common: Some(0x1F27), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F38, common: Some(0x1F30), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F39, common: Some(0x1F31), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F3A, common: Some(0x1F32), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F3B, common: Some(0x1F33), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F3C, common: Some(0x1F34), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F3D, common: Some(0x1F35), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F3E, common: Some(0x1F36), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F3F, common: Some(0x1F37), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F48, common: Some(0x1F40), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F49, common: Some(0x1F41), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F4A, common: Some(0x1F42), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F4B, common: Some(0x1F43), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F4C, common: Some(0x1F44), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F4D, common: Some(0x1F45), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F50, common: None, full: Some(&[0x03C5, 0x0313]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F52, common: None, full: Some(&[0x03C5, 0x0313, 0x0300]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F54, common: None, full: Some(&[0x03C5, 0x0313, 0x0301]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F56, common: None, full: Some(&[0x03C5, 0x0313, 0x0342]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F59, common: Some(0x1F51), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F5B, common: Some(0x1F53), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F5D, common: Some(0x1F55), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F5F, common: Some(0x1F57), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F68, common: Some(0x1F60), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F69, common: Some(0x1F61), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F6A, common: Some(0x1F62), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F6B, common: Some(0x1F63), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F6C, common: Some(0x1F64), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F6D, common: Some(0x1F65), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F6E, common: Some(0x1F66), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F6F, common: Some(0x1F67), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1F80, common: None, full: Some(&[0x1F00, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F81, common: None, full: Some(&[0x1F01, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F82, common: None, full: Some(&[0x1F02, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F83, common: None, full: Some(&[0x1F03, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F84, common: None, full: Some(&[0x1F04, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F85, common: None, full: Some(&[0x1F05, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F86, common: None, full: Some(&[0x1F06, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F87, common: None, full: Some(&[0x1F07, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F88, common: None, full: Some(&[0x1F00, 0x03B9]), simple: Some(0x1F80), turkic: None },
    CaseFolding { scalar: 0x1F89, common: None, full: Some(&[0x1F01, 0x03B9]), simple: Some(0x1F81), turkic: None },
    CaseFolding { scalar: 0x1F8A, common: None, full: Some(&[0x1F02, 0x03B9]), simple: Some(0x1F82), turkic: None },
    CaseFolding { scalar: 0x1F8B, common: None, full: Some(&[0x1F03, 0x03B9]), simple: Some(0x1F83), turkic: None },
    CaseFolding { scalar: 0x1F8C, common: None, full: Some(&[0x1F04, 0x03B9]), simple: Some(0x1F84), turkic: None },
    CaseFolding { scalar: 0x1F8D, common: None, full: Some(&[0x1F05, 0x03B9]), simple: Some(0x1F85), turkic: None },
    CaseFolding { scalar: 0x1F8E, common: None, full: Some(&[0x1F06, 0x03B9]), simple: Some(0x1F86), turkic: None },
    CaseFolding { scalar: 0x1F8F, common: None, full: Some(&[0x1F07, 0x03B9]), simple: Some(0x1F87), turkic: None },
    CaseFolding { scalar: 0x1F90, common: None, full: Some(&[0x1F20, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F91, common: None, full: Some(&[0x1F21, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F92, common: None, full: Some(&[0x1F22, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F93, common: None, full: Some(&[0x1F23, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F94, common: None, full: Some(&[0x1F24, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F95, common: None, full: Some(&[0x1F25, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F96, common: None, full: Some(&[0x1F26, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F97, common: None, full: Some(&[0x1F27, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1F98, common: None, full: Some(&[0x1F20, 0x03B9]), simple: Some(0x1F90), turkic: None },
    CaseFolding { scalar: 0x1F99, common: None, full: Some(&[0x1F21, 0x03B9]), simple: Some(0x1F91), turkic: None },
    CaseFolding { scalar: 0x1F9A, common: None, full: Some(&[0x1F22, 0x03B9]), simple: Some(0x1F92), turkic: None },
    CaseFolding { scalar: 0x1F9B, common: None, full: Some(&[0x1F23, 0x03B9]), simple: Some(0x1F93), turkic: None },
    CaseFolding { scalar: 0x1F9C, common: None, full: Some(&[0x1F24, 0x03B9]), simple: Some(0x1F94), turkic: None },
    CaseFolding { scalar: 0x1F9D, common: None, full: Some(&[0x1F25, 0x03B9]), simple: Some(0x1F95), turkic: None },
    CaseFolding { scalar: 0x1F9E, common: None, full: Some(&[0x1F26, 0x03B9]), simple: Some(0x1F96), turkic: None },
    CaseFolding { scalar: 0x1F9F, common: None, full: Some(&[0x1F27, 0x03B9]), simple: Some(0x1F97), turkic: None },
    CaseFolding { scalar: 0x1FA0, common: None, full: Some(&[0x1F60, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FA1, common: None, full: Some(&[0x1F61, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FA2, common: None, full: Some(&[0x1F62, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FA3, common: None, full: Some(&[0x1F63, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FA4, common: None, full: Some(&[0x1F64, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FA5, common: None, full: Some(&[0x1F65, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FA6, common: None, full: Some(&[0x1F66, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FA7, common: None, full: Some(&[0x1F67, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FA8, common: None, full: Some(&[0x1F60, 0x03B9]), simple: Some(0x1FA0), turkic: None },
    CaseFolding { scalar: 0x1FA9, common: None, full: Some(&[0x1F61, 0x03B9]), simple: Some(0x1FA1), turkic: None },
    CaseFolding { scalar: 0x1FAA, common: None, full: Some(&[0x1F62, 0x03B9]), simple: Some(0x1FA2), turkic: None },
    CaseFolding { scalar: 0x1FAB, common: None, full: Some(&[0x1F63, 0x03B9]), simple: Some(0x1FA3), turkic: None },
    CaseFolding { scalar: 0x1FAC, common: None, full: Some(&[0x1F64, 0x03B9]), simple: Some(0x1FA4), turkic: None },
    CaseFolding { scalar: 0x1FAD, common: None, full: Some(&[0x1F65, 0x03B9]), simple: Some(0x1FA5), turkic: None },
    CaseFolding { scalar: 0x1FAE, common: None, full: Some(&[0x1F66, 0x03B9]), simple: Some(0x1FA6), turkic: None },
    CaseFolding { scalar: 0x1FAF, common: None, full: Some(&[0x1F67, 0x03B9]), simple: Some(0x1FA7), turkic: None },
    CaseFolding { scalar: 0x1FB2, common: None, full: Some(&[0x1F70, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FB3, common: None, full: Some(&[0x03B1, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FB4, common: None, full: Some(&[0x03AC, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FB6, common: None, full: Some(&[0x03B1, 0x0342]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FB7, common: None, full: Some(&[0x03B1, 0x0342, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FB8, common: Some(0x1FB0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FB9, common: Some(0x1FB1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FBA, common: Some(0x1F70), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FBB, common: Some(0x1F71), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FBC, common: None, full: Some(&[0x03B1, 0x03B9]), simple: Some(0x1FB3), turkic: None },
    CaseFolding { scalar: 0x1FBE, common: Some(0x03B9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FC2, common: None, full: Some(&[0x1F74, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FC3, common: None, full: Some(&[0x03B7, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FC4, common: None, full: Some(&[0x03AE, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FC6, common: None, full: Some(&[0x03B7, 0x0342]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FC7, common: None, full: Some(&[0x03B7, 0x0342, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FC8, common: Some(0x1F72), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FC9, common: Some(0x1F73), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FCA, common: Some(0x1F74), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FCB, common: Some(0x1F75), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FCC, common: None, full: Some(&[0x03B7, 0x03B9]), simple: Some(0x1FC3), turkic: None },
    CaseFolding { scalar: 0x1FD2, common: None, full: Some(&[0x03B9, 0x0308, 0x0300]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FD3, common: None, full: Some(&[0x03B9, 0x0308, 0x0301]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FD6, common: None, full: Some(&[0x03B9, 0x0342]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FD7, common: None, full: Some(&[0x03B9, 0x0308, 0x0342]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FD8, common: Some(0x1FD0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FD9, common: Some(0x1FD1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FDA, common: Some(0x1F76), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FDB, common: Some(0x1F77), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FE2, common: None, full: Some(&[0x03C5, 0x0308, 0x0300]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FE3, common: None, full: Some(&[0x03C5, 0x0308, 0x0301]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FE4, common: None, full: Some(&[0x03C1, 0x0313]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FE6, common: None, full: Some(&[0x03C5, 0x0342]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FE7, common: None, full: Some(&[0x03C5, 0x0308, 0x0342]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FE8, common: Some(0x1FE0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FE9, common: Some(0x1FE1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FEA, common: Some(0x1F7A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FEB, common: Some(0x1F7B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FEC, common: Some(0x1FE5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FF2, common: None, full: Some(&[0x1F7C, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FF3, common: None, full: Some(&[0x03C9, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FF4, common: None, full: Some(&[0x03CE, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FF6, common: None, full: Some(&[0x03C9, 0x0342]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FF7, common: None, full: Some(&[0x03C9, 0x0342, 0x03B9]), simple: None, turkic: None },
    CaseFolding { scalar: 0x1FF8, common: Some(0x1F78), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FF9, common: Some(0x1F79), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FFA, common: Some(0x1F7C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FFB, common: Some(0x1F7D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1FFC, common: None, full: Some(&[0x03C9, 0x03B9]), simple: Some(0x1FF3), turkic: None },
    CaseFolding { scalar: 0x2126, common: Some(0x03C9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x212A, common: Some(0x006B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x212B, common: Some(0x00E5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2132, common: Some(0x214E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2160, common: Some(0x2170), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2161, common: Some(0x2171), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2162, common: Some(0x2172), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2163, common: Some(0x2173), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2164, common: Some(0x2174), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2165, common: Some(0x2175), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2166, common: Some(0x2176), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2167, common: Some(0x2177), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2168, common: Some(0x2178), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2169, common: Some(0x2179), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x216A, common: Some(0x217A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x216B, common: Some(0x217B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x216C, common: Some(0x217C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x216D, common: Some(0x217D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x216E, common: Some(0x217E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x216F, common: Some(0x217F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2183, common: Some(0x2184), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24B6, common: Some(0x24D0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24B7, common: Some(0x24D1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24B8, common: Some(0x24D2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24B9, common: Some(0x24D3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24BA, common: Some(0x24D4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24BB, common: Some(0x24D5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24BC, common: Some(0x24D6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24BD, common: Some(0x24D7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24BE, common: Some(0x24D8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24BF, common: Some(0x24D9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C0, common: Some(0x24DA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C1, common: Some(0x24DB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C2, common: Some(0x24DC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C3, common: Some(0x24DD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C4, common: Some(0x24DE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C5, common: Some(0x24DF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C6, common: Some(0x24E0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C7, common: Some(0x24E1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C8, common: Some(0x24E2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24C9, common: Some(0x24E3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24CA, common: Some(0x24E4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24CB, common: Some(0x24E5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24CC, common: Some(0x24E6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24CD, common: Some(0x24E7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24CE, common: Some(0x24E8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x24CF, common: Some(0x24E9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C00, common: Some(0x2C30), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C01, common: Some(0x2C31), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C02, common: Some(0x2C32), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C03, common: Some(0x2C33), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C04, common: Some(0x2C34), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C05, common: Some(0x2C35), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C06, common: Some(0x2C36), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C07, common: Some(0x2C37), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C08, common: Some(0x2C38), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C09, common: Some(0x2C39), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C0A, common: Some(0x2C3A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C0B, common: Some(0x2C3B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C0C, common: Some(0x2C3C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C0D, common: Some(0x2C3D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C0E, common: Some(0x2C3E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C0F, common: Some(0x2C3F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C10, common: Some(0x2C40), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C11, common: Some(0x2C41), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C12, common: Some(0x2C42), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C13, common: Some(0x2C43), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C14, common: Some(0x2C44), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C15, common: Some(0x2C45), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C16, common: Some(0x2C46), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C17, common: Some(0x2C47), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C18, common: Some(0x2C48), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C19, common: Some(0x2C49), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C1A, common: Some(0x2C4A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C1B, common: Some(0x2C4B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C1C, common: Some(0x2C4C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C1D, common: Some(0x2C4D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C1E, common: Some(0x2C4E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C1F, common: Some(0x2C4F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C20, common: Some(0x2C50), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C21, common: Some(0x2C51), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C22, common: Some(0x2C52), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C23, common: Some(0x2C53), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C24, common: Some(0x2C54), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C25, common: Some(0x2C55), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C26, common: Some(0x2C56), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C27, common: Some(0x2C57), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C28, common: Some(0x2C58), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C29, common: Some(0x2C59), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C2A, common: Some(0x2C5A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C2B, common: Some(0x2C5B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C2C, common: Some(0x2C5C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C2D, common: Some(0x2C5D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C2E, common: Some(0x2C5E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C2F, common: Some(0x2C5F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C60, common: Some(0x2C61), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C62, common: Some(0x026B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C63, common: Some(0x1D7D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C64, common: Some(0x027D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C67, common: Some(0x2C68), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C69, common: Some(0x2C6A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C6B, common: Some(0x2C6C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C6D, common: Some(0x0251), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C6E, common: Some(0x0271), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C6F, common: Some(0x0250), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C70, common: Some(0x0252), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C72, common: Some(0x2C73), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C75, common: Some(0x2C76), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C7E, common: Some(0x023F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C7F, common: Some(0x0240), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C80, common: Some(0x2C81), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C82, common: Some(0x2C83), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C84, common: Some(0x2C85), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C86, common: Some(0x2C87), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C88, common: Some(0x2C89), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C8A, common: Some(0x2C8B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C8C, common: Some(0x2C8D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C8E, common: Some(0x2C8F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C90, common: Some(0x2C91), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C92, common: Some(0x2C93), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C94, common: Some(0x2C95), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C96, common: Some(0x2C97), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C98, common: Some(0x2C99), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C9A, common: Some(0x2C9B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C9C, common: Some(0x2C9D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2C9E, common: Some(0x2C9F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CA0, common: Some(0x2CA1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CA2, common: Some(0x2CA3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CA4, common: Some(0x2CA5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CA6, common: Some(0x2CA7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CA8, common: Some(0x2CA9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CAA, common: Some(0x2CAB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CAC, common: Some(0x2CAD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CAE, common: Some(0x2CAF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CB0, common: Some(0x2CB1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CB2, common: Some(0x2CB3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CB4, common: Some(0x2CB5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CB6, common: Some(0x2CB7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CB8, common: Some(0x2CB9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CBA, common: Some(0x2CBB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CBC, common: Some(0x2CBD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CBE, common: Some(0x2CBF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CC0, common: Some(0x2CC1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CC2, common: Some(0x2CC3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CC4, common: Some(0x2CC5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CC6, common: Some(0x2CC7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CC8, common: Some(0x2CC9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CCA, common: Some(0x2CCB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CCC, common: Some(0x2CCD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CCE, common: Some(0x2CCF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CD0, common: Some(0x2CD1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CD2, common: Some(0x2CD3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CD4, common: Some(0x2CD5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CD6, common: Some(0x2CD7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CD8, common: Some(0x2CD9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CDA, common: Some(0x2CDB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CDC, common: Some(0x2CDD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CDE, common: Some(0x2CDF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CE0, common: Some(0x2CE1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CE2, common: Some(0x2CE3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CEB, common: Some(0x2CEC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CED, common: Some(0x2CEE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x2CF2, common: Some(0x2CF3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA640, common: Some(0xA641), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA642, common: Some(0xA643), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA644, common: Some(0xA645), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA646, common: Some(0xA647), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA648, common: Some(0xA649), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA64A, common: Some(0xA64B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA64C, common: Some(0xA64D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA64E, common: Some(0xA64F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA650, common: Some(0xA651), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA652, common: Some(0xA653), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA654, common: Some(0xA655), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA656, common: Some(0xA657), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA658, common: Some(0xA659), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA65A, common: Some(0xA65B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA65C, common: Some(0xA65D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA65E, common: Some(0xA65F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA660, common: Some(0xA661), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA662, common: Some(0xA663), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA664, common: Some(0xA665), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA666, common: Some(0xA667), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA668, common: Some(0xA669), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA66A, common: Some(0xA66B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA66C, common: Some(0xA66D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA680, common: Some(0xA681), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA682, common: Some(0xA683), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA684, common: Some(0xA685), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA686, common: Some(0xA687), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA688, common: Some(0xA689), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA68A, common: Some(0xA68B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA68C, common: Some(0xA68D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA68E, common: Some(0xA68F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA690, common: Some(0xA691), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA692, common: Some(0xA693), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA694, common: Some(0xA695), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA696, common: Some(0xA697), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA698, common: Some(0xA699), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA69A, common: Some(0xA69B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA722, common: Some(0xA723), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA724, common: Some(0xA725), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA726, common: Some(0xA727), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA728, common: Some(0xA729), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA72A, common: Some(0xA72B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA72C, common: Some(0xA72D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA72E, common: Some(0xA72F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA732, common: Some(0xA733), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA734, common: Some(0xA735), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA736, common: Some(0xA737), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA738, common: Some(0xA739), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA73A, common: Some(0xA73B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA73C, common: Some(0xA73D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA73E, common: Some(0xA73F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA740, common: Some(0xA741), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA742, common: Some(0xA743), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA744, common: Some(0xA745), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA746, common: Some(0xA747), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA748, common: Some(0xA749), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA74A, common: Some(0xA74B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA74C, common: Some(0xA74D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA74E, common: Some(0xA74F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA750, common: Some(0xA751), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA752, common: Some(0xA753), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA754, common: Some(0xA755), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA756, common: Some(0xA757), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA758, common: Some(0xA759), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA75A, common: Some(0xA75B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA75C, common: Some(0xA75D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA75E, common: Some(0xA75F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA760, common: Some(0xA761), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA762, common: Some(0xA763), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA764, common: Some(0xA765), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA766, common: Some(0xA767), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA768, common: Some(0xA769), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA76A, common: Some(0xA76B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA76C, common: Some(0xA76D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA76E, common: Some(0xA76F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA779, common: Some(0xA77A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA77B, common: Some(0xA77C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA77D, common: Some(0x1D79), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA77E, common: Some(0xA77F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA780, common: Some(0xA781), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA782, common: Some(0xA783), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA784, common: Some(0xA785), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA786, common: Some(0xA787), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA78B, common: Some(0xA78C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA78D, common: Some(0x0265), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA790, common: Some(0xA791), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA792, common: Some(0xA793), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA796, common: Some(0xA797), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA798, common: Some(0xA799), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA79A, common: Some(0xA79B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA79C, common: Some(0xA79D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA79E, common: Some(0xA79F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7A0, common: Some(0xA7A1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7A2, common: Some(0xA7A3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7A4, common: Some(0xA7A5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7A6, common: Some(0xA7A7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7A8, common: Some(0xA7A9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7AA, common: Some(0x0266), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7AB, common: Some(0x025C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7AC, common: Some(0x0261), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7AD, common: Some(0x026C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7AE, common: Some(0x026A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7B0, common: Some(0x029E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7B1, common: Some(0x0287), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7B2, common: Some(0x029D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7B3, common: Some(0xAB53), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7B4, common: Some(0xA7B5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7B6, common: Some(0xA7B7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7B8, common: Some(0xA7B9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7BA, common: Some(0xA7BB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7BC, common: Some(0xA7BD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7BE, common: Some(0xA7BF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7C0, common: Some(0xA7C1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7C2, common: Some(0xA7C3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7C4, common: Some(0xA794), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7C5, common: Some(0x0282), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7C6, common: Some(0x1D8E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7C7, common: Some(0xA7C8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7C9, common: Some(0xA7CA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7D0, common: Some(0xA7D1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7D6, common: Some(0xA7D7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7D8, common: Some(0xA7D9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xA7F5, common: Some(0xA7F6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB70, common: Some(0x13A0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB71, common: Some(0x13A1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB72, common: Some(0x13A2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB73, common: Some(0x13A3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB74, common: Some(0x13A4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB75, common: Some(0x13A5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB76, common: Some(0x13A6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB77, common: Some(0x13A7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB78, common: Some(0x13A8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB79, common: Some(0x13A9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB7A, common: Some(0x13AA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB7B, common: Some(0x13AB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB7C, common: Some(0x13AC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB7D, common: Some(0x13AD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB7E, common: Some(0x13AE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB7F, common: Some(0x13AF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB80, common: Some(0x13B0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB81, common: Some(0x13B1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB82, common: Some(0x13B2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB83, common: Some(0x13B3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB84, common: Some(0x13B4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB85, common: Some(0x13B5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB86, common: Some(0x13B6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB87, common: Some(0x13B7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB88, common: Some(0x13B8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB89, common: Some(0x13B9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB8A, common: Some(0x13BA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB8B, common: Some(0x13BB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB8C, common: Some(0x13BC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB8D, common: Some(0x13BD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB8E, common: Some(0x13BE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB8F, common: Some(0x13BF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB90, common: Some(0x13C0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB91, common: Some(0x13C1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB92, common: Some(0x13C2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB93, common: Some(0x13C3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB94, common: Some(0x13C4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB95, common: Some(0x13C5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB96, common: Some(0x13C6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB97, common: Some(0x13C7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB98, common: Some(0x13C8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB99, common: Some(0x13C9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB9A, common: Some(0x13CA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB9B, common: Some(0x13CB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB9C, common: Some(0x13CC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB9D, common: Some(0x13CD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB9E, common: Some(0x13CE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xAB9F, common: Some(0x13CF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA0, common: Some(0x13D0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA1, common: Some(0x13D1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA2, common: Some(0x13D2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA3, common: Some(0x13D3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA4, common: Some(0x13D4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA5, common: Some(0x13D5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA6, common: Some(0x13D6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA7, common: Some(0x13D7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA8, common: Some(0x13D8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABA9, common: Some(0x13D9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABAA, common: Some(0x13DA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABAB, common: Some(0x13DB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABAC, common: Some(0x13DC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABAD, common: Some(0x13DD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABAE, common: Some(0x13DE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABAF, common: Some(0x13DF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB0, common: Some(0x13E0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB1, common: Some(0x13E1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB2, common: Some(0x13E2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB3, common: Some(0x13E3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB4, common: Some(0x13E4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB5, common: Some(0x13E5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB6, common: Some(0x13E6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB7, common: Some(0x13E7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB8, common: Some(0x13E8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABB9, common: Some(0x13E9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABBA, common: Some(0x13EA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABBB, common: Some(0x13EB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABBC, common: Some(0x13EC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABBD, common: Some(0x13ED), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABBE, common: Some(0x13EE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xABBF, common: Some(0x13EF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFB00, common: None, full: Some(&[0x0066, 0x0066]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB01, common: None, full: Some(&[0x0066, 0x0069]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB02, common: None, full: Some(&[0x0066, 0x006C]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB03, common: None, full: Some(&[0x0066, 0x0066, 0x0069]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB04, common: None, full: Some(&[0x0066, 0x0066, 0x006C]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB05, common: None, full: Some(&[0x0073, 0x0074]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB06, common: None, full: Some(&[0x0073, 0x0074]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB13, common: None, full: Some(&[0x0574, 0x0576]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB14, common: None, full: Some(&[0x0574, 0x0565]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB15, common: None, full: Some(&[0x0574, 0x056B]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB16, common: None, full: Some(&[0x057E, 0x0576]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFB17, common: None, full: Some(&[0x0574, 0x056D]), simple: None, turkic: None },
    CaseFolding { scalar: 0xFF21, common: Some(0xFF41), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF22, common: Some(0xFF42), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF23, common: Some(0xFF43), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF24, common: Some(0xFF44), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF25, common: Some(0xFF45), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF26, common: Some(0xFF46), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF27, common: Some(0xFF47), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF28, common: Some(0xFF48), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF29, common: Some(0xFF49), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF2A, common: Some(0xFF4A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF2B, common: Some(0xFF4B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF2C, common: Some(0xFF4C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF2D, common: Some(0xFF4D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF2E, common: Some(0xFF4E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF2F, common: Some(0xFF4F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF30, common: Some(0xFF50), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF31, common: Some(0xFF51), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF32, common: Some(0xFF52), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF33, common: Some(0xFF53), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF34, common: Some(0xFF54), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF35, common: Some(0xFF55), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF36, common: Some(0xFF56), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF37, common: Some(0xFF57), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF38, common: Some(0xFF58), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF39, common: Some(0xFF59), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0xFF3A, common: Some(0xFF5A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10400, common: Some(0x10428), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10401, common: Some(0x10429), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10402, common: Some(0x1042A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10403, common: Some(0x1042B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10404, common: Some(0x1042C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10405, common: Some(0x1042D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10406, common: Some(0x1042E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10407, common: Some(0x1042F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10408, common: Some(0x10430), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10409, common: Some(0x10431), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1040A, common: Some(0x10432), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1040B, common: Some(0x10433), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1040C, common: Some(0x10434), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1040D, common: Some(0x10435), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1040E, common: Some(0x10436), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1040F, common: Some(0x10437), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10410, common: Some(0x10438), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10411, common: Some(0x10439), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10412, common: Some(0x1043A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10413, common: Some(0x1043B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10414, common: Some(0x1043C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10415, common: Some(0x1043D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10416, common: Some(0x1043E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10417, common: Some(0x1043F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10418, common: Some(0x10440), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10419, common: Some(0x10441), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1041A, common: Some(0x10442), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1041B, common: Some(0x10443), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1041C, common: Some(0x10444), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1041D, common: Some(0x10445), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1041E, common: Some(0x10446), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1041F, common: Some(0x10447), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10420, common: Some(0x10448), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10421, common: Some(0x10449), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10422, common: Some(0x1044A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10423, common: Some(0x1044B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10424, common: Some(0x1044C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10425, common: Some(0x1044D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10426, common: Some(0x1044E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10427, common: Some(0x1044F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B0, common: Some(0x104D8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B1, common: Some(0x104D9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B2, common: Some(0x104DA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B3, common: Some(0x104DB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B4, common: Some(0x104DC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B5, common: Some(0x104DD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B6, common: Some(0x104DE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B7, common: Some(0x104DF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B8, common: Some(0x104E0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104B9, common: Some(0x104E1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104BA, common: Some(0x104E2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104BB, common: Some(0x104E3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104BC, common: Some(0x104E4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104BD, common: Some(0x104E5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104BE, common: Some(0x104E6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104BF, common: Some(0x104E7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C0, common: Some(0x104E8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C1, common: Some(0x104E9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C2, common: Some(0x104EA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C3, common: Some(0x104EB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C4, common: Some(0x104EC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C5, common: Some(0x104ED), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C6, common: Some(0x104EE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C7, common: Some(0x104EF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C8, common: Some(0x104F0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104C9, common: Some(0x104F1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104CA, common: Some(0x104F2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104CB, common: Some(0x104F3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104CC, common: Some(0x104F4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104CD, common: Some(0x104F5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104CE, common: Some(0x104F6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104CF, common: Some(0x104F7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104D0, common: Some(0x104F8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104D1, common: Some(0x104F9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104D2, common: Some(0x104FA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x104D3, common: Some(0x104FB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10570, common: Some(0x10597), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10571, common: Some(0x10598), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10572, common: Some(0x10599), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10573, common: Some(0x1059A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10574, common: Some(0x1059B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10575, common: Some(0x1059C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10576, common: Some(0x1059D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10577, common: Some(0x1059E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10578, common: Some(0x1059F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10579, common: Some(0x105A0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1057A, common: Some(0x105A1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1057C, common: Some(0x105A3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1057D, common: Some(0x105A4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1057E, common: Some(0x105A5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1057F, common: Some(0x105A6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10580, common: Some(0x105A7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10581, common: Some(0x105A8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10582, common: Some(0x105A9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10583, common: Some(0x105AA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10584, common: Some(0x105AB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10585, common: Some(0x105AC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10586, common: Some(0x105AD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10587, common: Some(0x105AE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10588, common: Some(0x105AF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10589, common: Some(0x105B0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1058A, common: Some(0x105B1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1058C, common: Some(0x105B3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1058D, common: Some(0x105B4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1058E, common: Some(0x105B5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1058F, common: Some(0x105B6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10590, common: Some(0x105B7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10591, common: Some(0x105B8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10592, common: Some(0x105B9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10594, common: Some(0x105BB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10595, common: Some(0x105BC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C80, common: Some(0x10CC0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C81, common: Some(0x10CC1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C82, common: Some(0x10CC2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C83, common: Some(0x10CC3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C84, common: Some(0x10CC4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C85, common: Some(0x10CC5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C86, common: Some(0x10CC6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C87, common: Some(0x10CC7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C88, common: Some(0x10CC8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C89, common: Some(0x10CC9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C8A, common: Some(0x10CCA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C8B, common: Some(0x10CCB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C8C, common: Some(0x10CCC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C8D, common: Some(0x10CCD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C8E, common: Some(0x10CCE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C8F, common: Some(0x10CCF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C90, common: Some(0x10CD0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C91, common: Some(0x10CD1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C92, common: Some(0x10CD2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C93, common: Some(0x10CD3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C94, common: Some(0x10CD4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C95, common: Some(0x10CD5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C96, common: Some(0x10CD6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C97, common: Some(0x10CD7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C98, common: Some(0x10CD8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C99, common: Some(0x10CD9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C9A, common: Some(0x10CDA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C9B, common: Some(0x10CDB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C9C, common: Some(0x10CDC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C9D, common: Some(0x10CDD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C9E, common: Some(0x10CDE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10C9F, common: Some(0x10CDF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA0, common: Some(0x10CE0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA1, common: Some(0x10CE1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA2, common: Some(0x10CE2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA3, common: Some(0x10CE3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA4, common: Some(0x10CE4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA5, common: Some(0x10CE5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA6, common: Some(0x10CE6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA7, common: Some(0x10CE7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA8, common: Some(0x10CE8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CA9, common: Some(0x10CE9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CAA, common: Some(0x10CEA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CAB, common: Some(0x10CEB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CAC, common: Some(0x10CEC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CAD, common: Some(0x10CED), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CAE, common: Some(0x10CEE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CAF, common: Some(0x10CEF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CB0, common: Some(0x10CF0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CB1, common: Some(0x10CF1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x10CB2, common: Some(0x10CF2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A0, common: Some(0x118C0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A1, common: Some(0x118C1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A2, common: Some(0x118C2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A3, common: Some(0x118C3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A4, common: Some(0x118C4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A5, common: Some(0x118C5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A6, common: Some(0x118C6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A7, common: Some(0x118C7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A8, common: Some(0x118C8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118A9, common: Some(0x118C9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118AA, common: Some(0x118CA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118AB, common: Some(0x118CB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118AC, common: Some(0x118CC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118AD, common: Some(0x118CD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118AE, common: Some(0x118CE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118AF, common: Some(0x118CF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B0, common: Some(0x118D0), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B1, common: Some(0x118D1), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B2, common: Some(0x118D2), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B3, common: Some(0x118D3), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B4, common: Some(0x118D4), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B5, common: Some(0x118D5), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B6, common: Some(0x118D6), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B7, common: Some(0x118D7), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B8, common: Some(0x118D8), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118B9, common: Some(0x118D9), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118BA, common: Some(0x118DA), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118BB, common: Some(0x118DB), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118BC, common: Some(0x118DC), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118BD, common: Some(0x118DD), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118BE, common: Some(0x118DE), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x118BF, common: Some(0x118DF), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E40, common: Some(0x16E60), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E41, common: Some(0x16E61), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E42, common: Some(0x16E62), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E43, common: Some(0x16E63), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E44, common: Some(0x16E64), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E45, common: Some(0x16E65), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E46, common: Some(0x16E66), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E47, common: Some(0x16E67), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E48, common: Some(0x16E68), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E49, common: Some(0x16E69), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E4A, common: Some(0x16E6A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E4B, common: Some(0x16E6B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E4C, common: Some(0x16E6C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E4D, common: Some(0x16E6D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E4E, common: Some(0x16E6E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E4F, common: Some(0x16E6F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E50, common: Some(0x16E70), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E51, common: Some(0x16E71), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E52, common: Some(0x16E72), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E53, common: Some(0x16E73), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E54, common: Some(0x16E74), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E55, common: Some(0x16E75), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E56, common: Some(0x16E76), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E57, common: Some(0x16E77), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E58, common: Some(0x16E78), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E59, common: Some(0x16E79), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E5A, common: Some(0x16E7A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E5B, common: Some(0x16E7B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E5C, common: Some(0x16E7C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E5D, common: Some(0x16E7D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E5E, common: Some(0x16E7E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x16E5F, common: Some(0x16E7F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E900, common: Some(0x1E922), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E901, common: Some(0x1E923), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E902, common: Some(0x1E924), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E903, common: Some(0x1E925), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E904, common: Some(0x1E926), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E905, common: Some(0x1E927), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E906, common: Some(0x1E928), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E907, common: Some(0x1E929), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E908, common: Some(0x1E92A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E909, common: Some(0x1E92B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E90A, common: Some(0x1E92C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E90B, common: Some(0x1E92D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E90C, common: Some(0x1E92E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E90D, common: Some(0x1E92F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E90E, common: Some(0x1E930), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E90F, common: Some(0x1E931), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E910, common: Some(0x1E932), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E911, common: Some(0x1E933), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E912, common: Some(0x1E934), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E913, common: Some(0x1E935), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E914, common: Some(0x1E936), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E915, common: Some(0x1E937), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E916, common: Some(0x1E938), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E917, common: Some(0x1E939), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E918, common: Some(0x1E93A), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E919, common: Some(0x1E93B), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E91A, common: Some(0x1E93C), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E91B, common: Some(0x1E93D), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E91C, common: Some(0x1E93E), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E91D, common: Some(0x1E93F), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E91E, common: Some(0x1E940), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E91F, common: Some(0x1E941), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E920, common: Some(0x1E942), full: None, simple: None, turkic: None },
    CaseFolding { scalar: 0x1E921, common: Some(0x1E943), full: None, simple: None, turkic: None },
];
