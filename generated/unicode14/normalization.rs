// Generated by `cargo run -p xtask -- unicode` from UCD 14.0.0 data. Do not edit.
pub static COMBINING_CLASS_RANGES: &[(u32, u32, u8)] = &[
    (0x0300, 0x0314, 230),
    (0x0315, 0x0315, 232),
    (0x0316, 0x0319, 220),
    (0x031A, 0x031A, 232),
    (0x031B, 0x031B, 216),
    (0x031C, 0x0320, 220),
    (0x0321, 0x0322, 202),
    (0x0323, 0x0326, 220),
    (0x0327, 0x0328, 202),
    (0x0329, 0x0333, 220),
    (0x0334, 0x0338, 1),
    (0x0339, 0x033C, 220),
    (0x033D, 0x0344, 230),
    (0x0345, 0x0345, 240),
    (0x0346, 0x0346, 230),
    (0x0347, 0x0349, 220),
    (0x034A, 0x034C, 230),
    (0x034D, 0x034E, 220),
    (0x0350, 0x0352, 230),
    (0x0353, 0x0356, 220),
    (0x0357, 0x0357, 230),
    (0x0358, 0x0358, 232),
    (0x0359, 0x035A, 220),
    (0x035B, 0x035B, 230),
    (0x035C, 0x035C, 233),
    (0x035D, 0x035E, 234),
    (0x035F, 0x035F, 233),
    (0x0360, 0x0361, 234),
    (0x0362, 0x0362, 233),
    (0x0363, 0x036F, 230),
    (0x0483, 0x0487, 230),
    (0x0591, 0x0591, 220),
    (0x0592, 0x0595, 230),
    (0x0596, 0x0596, 220),
    (0x0597, 0x0599, 230),
    (0x059A, 0x059A, 222),
    (0x059B, 0x059B, 220),
    (0x059C, 0x05A1, 230),
    (0x05A2, 0x05A7, 220),
    (0x05A8, 0x05A9, 230),
    (0x05AA, 0x05AA, 220),
    (0x05AB, 0x05AC, 230),
    (0x05AD, 0x05AD, 222),
    (0x05AE, 0x05AE, 228),
    (0x05AF, 0x05AF, 230),
    (0x05B0, 0x05B0, 10),
    (0x05B1, 0x05B1, 11),
    (0x05B2, 0x05B2, 12),
    (0x05B3, 0x05B3, 13),
    (0x05B4, 0x05B4, 14),
    (0x05B5, 0x05B5, 15),
    (0x05B6, 0x05B6, 16),
    (0x05B7, 0x05B7, 17),
    (0x05B8, 0x05B8, 18),
    (0x05B9, 0x05BA, 19),
    (0x05BB, 0x05BB, 20),
    (0x05BC, 0x05BC, 21),
    (0x05BD, 0x05BD, 22),
    (0x05BF, 0x05BF, 23),
    (0x05C1, 0x05C1, 24),
    (0x05C2, 0x05C2, 25),
    (0x05C4, 0x05C4, 230),
    (0x05C5, 0x05C5, 220),
    (0x05C7, 0x05C7, 18),
    (0x0610, 0x0617, 230),
    (0x0618, 0x0618, 30),
    (0x0619, 0x0619, 31),
    (0x061A, 0x061A, 32),
    (0x064B, 0x064B, 27),
    (0x064C, 0x064C, 28),
    (0x064D, 0x064D, 29),
    (0x064E, 0x064E, 30),
    (0x064F, 0x064F, 31),
    (0x0650, 0x0650, 32),
    (0x0651, 0x0651, 33),
    (0x0652, 0x0652, 34),
    (0x0653, 0x0654, 230),
    (0x0655, 0x0656, 220),
    (0x0657, 0x065B, 230),
    (0x065C, 0x065C, 220),
    (0x065D, 0x065E, 230),
    (0x065F, 0x065F, 220),
    (0x0670, 0x0670, 35),
    (0x06D6, 0x06DC, 230),
    (0x06DF, 0x06E2, 230),
    (0x06E3, 0x06E3, 220),
    (0x06E4, 0x06E4, 230),
    (0x06E7, 0x06E8, 230),
    (0x06EA, 0x06EA, 220),
    (0x06EB, 0x06EC, 230),
    (0x06ED, 0x06ED, 220),
    (0x0711, 0x0711, 36),
    (0x0730, 0x0730, 230),
    (0x0731, 0x0731, 220),
    (0x0732, 0x0733, 230),
    (0x0734, 0x0734, 220),
    (0x0735, 0x0736, 230),
    (0x0737, 0x0739, 220),
    (0x073A, 0x073A, 230),
    (0x073B, 0x073C, 220),
    (0x073D, 0x073D, 230),
    (0x073E, 0x073E, 220),
    (0x073F, 0x0741, 230),
    (0x0742, 0x0742, 220),
    (0x0743, 0x0743, 230),
    (0x0744, 0x0744, 220),
    (0x0745, 0x0745, 230),
    (0x0746, 0x0746, 220),
    (0x0747, 0x0747, 230),
    (0x0748, 0x0748, 220),
    (0x0749, 0x074A, 230),
    (0x07EB, 0x07F1, 230),
    (0x07F2, 0x07F2, 220),
    (0x07F3, 0x07F3, 230),
    (0x07FD, 0x07FD, 220),
    (0x0816, 0x0819, 230),
    (0x081B, 0x0823, 230),
    (0x0825, 0x0827, 230),
    (0x0829, 0x082D, 230),
    (0x0859, 0x085B, 220),
    (0x0898, 0x0898, 230),
    (0x0899, 0x089B, 220),
    (0x089C, 0x089F, 230),
    (0x08CA, 0x08CE, 230),
    (0x08CF, 0x08D3, 220),
    (0x08D4, 0x08E1, 230),
    (0x08E3, 0x08E3, 220),
    (0x08E4, 0x08E5, 230),
    (0x08E6, 0x08E6, 220),
    (0x08E7, 0x08E8, 230),
    (0x08E9, 0x08E9, 220),
    (0x08EA, 0x08EC, 230),
    (0x08ED, 0x08EF, 220),
    (0x08F0, 0x08F0, 27),
    (0x08F1, 0x08F1, 28),
    (0x08F2, 0x08F2, 29),
    (0x08F3, 0x08F5, 230),
    (0x08F6, 0x08F6, 220),
    (0x08F7, 0x08F8, 230),
    (0x08F9, 0x08FA, 220),
    (0x08FB, 0x08FF, 230),
    (0x093C, 0x093C, 7),
    (0x094D, 0x094D, 9),
    (0x0951, 0x0951, 230),
    (0x0952, 0x0952, 220),
    (0x0953, 0x0954, 230),
    (0x09BC, 0x09BC, 7),
    (0x09CD, 0x09CD, 9),
    (0x09FE, 0x09FE, 230),
    (0x0A3C, 0x0A3C, 7),
    (0x0A4D, 0x0A4D, 9),
    (0x0ABC, 0x0ABC, 7),
    (0x0ACD, 0x0ACD, 9),
    (0x0B3C, 0x0B3C, 7),
    (0x0B4D, 0x0B4D, 9),
    (0x0BCD, 0x0BCD, 9),
    (0x0C3C, 0x0C3C, 7),
    (0x0C4D, 0x0C4D, 9),
    (0x0C55, 0x0C55, 84),
    (0x0C56, 0x0C56, 91),
    (0x0CBC, 0x0CBC, 7),
    (0x0CCD, 0x0CCD, 9),
    (0x0D3B, 0x0D3C, 9),
    (0x0D4D, 0x0D4D, 9),
    (0x0DCA, 0x0DCA, 9),
    (0x0E38, 0x0E39, 103),
    (0x0E3A, 0x0E3A, 9),
    (0x0E48, 0x0E4B, 107),
    (0x0EB8, 0x0EB9, 118),
    (0x0EBA, 0x0EBA, 9),
    (0x0EC8, 0x0ECB, 122),
    (0x0F18, 0x0F19, 220),
    (0x0F35, 0x0F35, 220),
    (0x0F37, 0x0F37, 220),
    (0x0F39, 0x0F39, 216),
    (0x0F71, 0x0F71, 129),
    (0x0F72, 0x0F72, 130),
    (0x0F74, 0x0F74, 132),
    (0x0F7A, 0x0F7D, 130),
    (0x0F80, 0x0F80, 130),
    (0x0F82, 0x0F83, 230),
    (0x0F84, 0x0F84, 9),
    (0x0F86, 0x0F87, 230),
    (0x0FC6, 0x0FC6, 220),
    (0x1037, 0x1037, 7),
    (0x1039, 0x103A, 9),
    (0x108D, 0x108D, 220),
    (0x135D, 0x135F, 230),
    (0x1714, 0x1715, 9),
    (0x1734, 0x1734, 9),
    (0x17D2, 0x17D2, 9),
    (0x17DD, 0x17DD, 230),
    (0x18A9, 0x18A9, 228),
    (0x1939, 0x1939, 222),
    (0x193A, 0x193A, 230),
    (0x193B, 0x193B, 220),
    (0x1A17, 0x1A17, 230),
    (0x1A18, 0x1A18, 220),
    (0x1A60, 0x1A60, 9),
    (0x1A75, 0x1A7C, 230),
    (0x1A7F, 0x1A7F, 220),
    (0x1AB0, 0x1AB4, 230),
    (0x1AB5, 0x1ABA, 220),
    (0x1ABB, 0x1ABC, 230),
    (0x1ABD, 0x1ABD, 220),
    (0x1ABF, 0x1AC0, 220),
    (0x1AC1, 0x1AC2, 230),
    (0x1AC3, 0x1AC4, 220),
    (0x1AC5, 0x1AC9, 230),
    (0x1ACA, 0x1ACA, 220),
    (0x1ACB, 0x1ACE, 230),
    (0x1B34, 0x1B34, 7),
    (0x1B44, 0x1B44, 9),
    (0x1B6B, 0x1B6B, 230),
    (0x1B6C, 0x1B6C, 220),
    (0x1B6D, 0x1B73, 230),
    (0x1BAA, 0x1BAB, 9),
    (0x1BE6, 0x1BE6, 7),
    (0x1BF2, 0x1BF3, 9),
    (0x1C37, 0x1C37, 7),
    (0x1CD0, 0x1CD2, 230),
    (0x1CD4, 0x1CD4, 1),
    (0x1CD5, 0x1CD9, 220),
    (0x1CDA, 0x1CDB, 230),
    (0x1CDC, 0x1CDF, 220),
    (0x1CE0, 0x1CE0, 230),
    (0x1CE2, 0x1CE8, 1),
    (0x1CED, 0x1CED, 220),
    (0x1CF4, 0x1CF4, 230),
    (0x1CF8, 0x1CF9, 230),
    (0x1DC0, 0x1DC1, 230),
    (0x1DC2, 0x1DC2, 220),
    (0x1DC3, 0x1DC9, 230),
    (0x1DCA, 0x1DCA, 220),
    (0x1DCB, 0x1DCC, 230),
    (0x1DCD, 0x1DCD, 234),
    (0x1DCE, 0x1DCE, 214),
    (0x1DCF, 0x1DCF, 220),
    (0x1DD0, 0x1DD0, 202),
    (0x1DD1, 0x1DF5, 230),
    (0x1DF6, 0x1DF6, 232),
    (0x1DF7, 0x1DF8, 228),
    (0x1DF9, 0x1DF9, 220),
    (0x1DFA, 0x1DFA, 218),
    (0x1DFB, 0x1DFB, 230),
    (0x1DFC, 0x1DFC, 233),
    (0x1DFD, 0x1DFD, 220),
    (0x1DFE, 0x1DFE, 230),
    (0x1DFF, 0x1DFF, 220),
    (0x20D0, 0x20D1, 230),
    (0x20D2, 0x20D3, 1),
    (0x20D4, 0x20D7, 230),
    (0x20D8, 0x20DA, 1),
    (0x20DB, 0x20DC, 230),
    (0x20E1, 0x20E1, 230),
    (0x20E5, 0x20E6, 1),
    (0x20E7, 0x20E7, 230),
    (0x20E8, 0x20E8, 220),
    (0x20E9, 0x20E9, 230),
    (0x20EA, 0x20EB, 1),
    (0x20EC, 0x20EF, 220),
    (0x20F0, 0x20F0, 230),
    (0x2CEF, 0x2CF1, 230),
    (0x2D7F, 0x2D7F, 9),
    (0x2DE0, 0x2DFF, 230),
    (0x302A, 0x302A, 218),
    (0x302B, 0x302B, 228),
    (0x302C, 0x302C, 232),
    (0x302D, 0x302D, 222),
    (0x302E, 0x302F, 224),
    (0x3099, 0x309A, 8),
    (0xA66F, 0xA66F, 230),
    (0xA674, 0xA67D, 230),
    (0xA69E, 0xA69F, 230),
    (0xA6F0, 0xA6F1, 230),
    (0xA806, 0xA806, 9),
    (0xA82C, 0xA82C, 9),
    (0xA8C4, 0xA8C4, 9),
    (0xA8E0, 0xA8F1, 230),
    (0xA92B, 0xA92D, 220),
    (0xA953, 0xA953, 9),
    (0xA9B3, 0xA9B3, 7),
    (0xA9C0, 0xA9C0, 9),
    (0xAAB0, 0xAAB0, 230),
    (0xAAB2, 0xAAB3, 230),
    (0xAAB4, 0xAAB4, 220),
    (0xAAB7, 0xAAB8, 230),
    (0xAABE, 0xAABF, 230),
    (0xAAC1, 0xAAC1, 230),
    (0xAAF6, 0xAAF6, 9),
    (0xABED, 0xABED, 9),
    (0xFB1E, 0xFB1E, 26),
    (0xFE20, 0xFE26, 230),
    (0xFE27, 0xFE2D, 220),
    (0xFE2E, 0xFE2F, 230),
    (0x101FD, 0x101FD, 220),
    (0x102E0, 0x102E0, 220),
    (0x10376, 0x1037A, 230),
    (0x10A0D, 0x10A0D, 220),
    (0x10A0F, 0x10A0F, 230),
    (0x10A38, 0x10A38, 230),
    (0x10A39, 0x10A39, 1),
    (0x10A3A, 0x10A3A, 220),
    (0x10A3F, 0x10A3F, 9),
    (0x10AE5, 0x10AE5, 230),
    (0x10AE6, 0x10AE6, 220),
    (0x10D24, 0x10D27, 230),
    (0x10EAB, 0x10EAC, 230),
    (0x10F46, 0x10F47, 220),
    (0x10F48, 0x10F4A, 230),
    (0x10F4B, 0x10F4B, 220),
    (0x10F4C, 0x10F4C, 230),
    (0x10F4D, 0x10F50, 220),
    (0x10F82, 0x10F82, 230),
    (0x10F83, 0x10F83, 220),
    (0x10F84, 0x10F84, 230),
    (0x10F85, 0x10F85, 220),
    (0x11046, 0x11046, 9),
    (0x11070, 0x11070, 9),
    (0x1107F, 0x1107F, 9),
    (0x110B9, 0x110B9, 9),
    (0x110BA, 0x110BA, 7),
    (0x11100, 0x11102, 230),
    (0x11133, 0x11134, 9),
    (0x11173, 0x11173, 7),
    (0x111C0, 0x111C0, 9),
    (0x111CA, 0x111CA, 7),
    (0x11235, 0x11235, 9),
    (0x11236, 0x11236, 7),
    (0x112E9, 0x112E9, 7),
    (0x112EA, 0x112EA, 9),
    (0x1133B, 0x1133C, 7),
    (0x1134D, 0x1134D, 9),
    (0x11366, 0x1136C, 230),
    (0x11370, 0x11374, 230),
    (0x11442, 0x11442, 9),
    (0x11446, 0x11446, 7),
    (0x1145E, 0x1145E, 230),
    (0x114C2, 0x114C2, 9),
    (0x114C3, 0x114C3, 7),
    (0x115BF, 0x115BF, 9),
    (0x115C0, 0x115C0, 7),
    (0x1163F, 0x1163F, 9),
    (0x116B6, 0x116B6, 9),
    (0x116B7, 0x116B7, 7),
    (0x1172B, 0x1172B, 9),
    (0x11839, 0x11839, 9),
    (0x1183A, 0x1183A, 7),
    (0x1193D, 0x1193E, 9),
    (0x11943, 0x11943, 7),
    (0x119E0, 0x119E0, 9),
    (0x11A34, 0x11A34, 9),
    (0x11A47, 0x11A47, 9),
    (0x11A99, 0x11A99, 9),
    (0x11C3F, 0x11C3F, 9),
    (0x11D42, 0x11D42, 7),
    (0x11D44, 0x11D45, 9),
    (0x11D97, 0x11D97, 9),
    (0x16AF0, 0x16AF4, 1),
    (0x16B30, 0x16B36, 230),
    (0x16FF0, 0x16FF1, 6),
    (0x1BC9E, 0x1BC9E, 1),
    (0x1D165, 0x1D166, 216),
    (0x1D167, 0x1D169, 1),
    (0x1D16D, 0x1D16D, 226),
    (0x1D16E, 0x1D172, 216),
    (0x1D17B, 0x1D182, 220),
    (0x1D185, 0x1D189, 230),
    (0x1D18A, 0x1D18B, 220),
    (0x1D1AA, 0x1D1AD, 230),
    (0x1D242, 0x1D244, 230),
    (0x1E000, 0x1E006, 230),
    (0x1E008, 0x1E018, 230),
    (0x1E01B, 0x1E021, 230),
    (0x1E023, 0x1E024, 230),
    (0x1E026, 0x1E02A, 230),
    (0x1E130, 0x1E136, 230),
    (0x1E2AE, 0x1E2AE, 230),
    (0x1E2EC, 0x1E2EF, 230),
    (0x1E8D0, 0x1E8D6, 220),
    (0x1E944, 0x1E949, 230),
    (0x1E94A, 0x1E94A, 7),
];

pub static DECOMPOSITIONS: &[(u32, bool, &[u32])] = &[
    (0x00A0, true, &[0x0020]),
    (0x00A8, true, &[0x0020, 0x0308]),
    (0x00AA, true, &[0x0061]),
    (0x00AF, true, &[0x0020, 0x0304]),
    (0x00B2, true, &[0x0032]),
    (0x00B3, true, &[0x0033]),
    (0x00B4, true, &[0x0020, 0x0301]),
    (0x00B5, true, &[0x03BC]),
    (0x00B8, true, &[0x0020, 0x0327]),
    (0x00B9, true, &[0x0031]),
    (0x00BA, true, &[0x006F]),
    (0x00BC, true, &[0x0031, 0x2044, 0x0034]),
    (0x00BD, true, &[0x0031, 0x2044, 0x0032]),
    (0x00BE, true, &[0x0033, 0x2044, 0x0034]),
    (0x00C0, false, &[0x0041, 0x0300]),
    (0x00C1, false, &[0x0041, 0x0301]),
    (0x00C2, false, &[0x0041, 0x0302]),
    (0x00C3, false, &[0x0041, 0x0303]),
    (0x00C4, false, &[0x0041, 0x0308]),
    (0x00C5, false, &[0x0041, 0x030A]),
    (0x00C7, false, &[0x0043, 0x0327]),
    (0x00C8, false, &[0x0045, 0x0300]),
    (0x00C9, false, &[0x0045, 0x0301]),
    (0x00CA, false, &[0x0045, 0x0302]),
    (0x00CB, false, &[0x0045, 0x0308]),
    (0x00CC, false, &[0x0049, 0x0300]),
    (0x00CD, false, &[0x0049, 0x0301]),
    (0x00CE, false, &[0x0049, 0x0302]),
    (0x00CF, false, &[0x0049, 0x0308]),
    (0x00D1, false, &[0x004E, 0x0303]),
    (0x00D2, false, &[0x004F, 0x0300]),
    (0x00D3, false, &[0x004F, 0x0301]),
    (0x00D4, false, &[0x004F, 0x0302]),
    (0x00D5, false, &[0x004F, 0x0303]),
    (0x00D6, false, &[0x004F, 0x0308]),
    (0x00D9, false, &[0x0055, 0x0300]),
    (0x00DA, false, &[0x0055, 0x0301]),
    (0x00DB, false, &[0x0055, 0x0302]),
    (0x00DC, false, &[0x0055, 0x0308]),
    (0x00DD, false, &[0x0059, 0x0301]),
    (0x00E0, false, &[0x0061, 0x0300]),
    (0x00E1, false, &[0x0061, 0x0301]),
    (0x00E2, false, &[0x0061, 0x0302]),
    (0x00E3, false, &[0x0061, 0x0303]),
    (0x00E4, false, &[0x0061, 0x0308]),
    (0x00E5, false, &[0x0061, 0x030A]),
    (0x00E7, false, &[0x0063, 0x0327]),
    (0x00E8, false, &[0x0065, 0x0300]),
    (0x00E9, false, &[0x0065, 0x0301]),
    (0x00EA, false, &[0x0065, 0x0302]),
    (0x00EB, false, &[0x0065, 0x0308]),
    (0x00EC, false, &[0x0069, 0x0300]),
    (0x00ED, false, &[0x0069, 0x0301]),
    (0x00EE, false, &[0x0069, 0x0302]),
    (0x00EF, false, &[0x0069, 0x0308]),
    (0x00F1, false, &[0x006E, 0x0303]),
    (0x00F2, false, &[0x006F, 0x0300]),
    (0x00F3, false, &[0x006F, 0x0301]),
    (0x00F4, false, &[0x006F, 0x0302]),
    (0x00F5, false, &[0x006F, 0x0303]),
    (0x00F6, false, &[0x006F, 0x0308]),
    (0x00F9, false, &[0x0075, 0x0300]),
    (0x00FA, false, &[0x0075, 0x0301]),
    (0x00FB, false, &[0x0075, 0x0302]),
    (0x00FC, false, &[0x0075, 0x0308]),
    (0x00FD, false, &[0x0079, 0x0301]),
    (0x00FF, false, &[0x0079, 0x0308]),
    (0x0100, false, &[0x0041, 0x0304]),
    (0x0101, false, &[0x0061, 0x0304]),
    (0x0102, false, &[0x0041, 0x0306]),
    (0x0103, false, &[0x0061, 0x0306]),
    (0x0104, false, &[0x0041, 0x0328]),
    (0x0105, false, &[0x0061, 0x0328]),
    (0x0106, false, &[0x0043, 0x0301]),
    (0x0107, false, &[0x0063, 0x0301]),
    (0x0108, false, &[0x0043, 0x0302]),
    (0x0109, false, &[0x0063, 0x0302]),
    (0x010A, false, &[0x0043, 0x0307]),
    (0x010B, false, &[0x0063, 0x0307]),
    (0x010C, false, &[0x0043, 0x030C]),
    (0x010D, false, &[0x0063, 0x030C]),
    (0x010E, false, &[0x0044, 0x030C]),
    (0x010F, false, &[0x0064, 0x030C]),
    (0x0112, false, &[0x0045, 0x0304]),
    (0x0113, false, &[0x0065, 0x0304]),
    (0x0114, false, &[0x0045, 0x0306]),
    (0x0115, false, &[0x0065, 0x0306]),
    (0x0116, false, &[0x0045, 0x0307]),
    (0x0117, false, &[0x0065, 0x0307]),
    (0x0118, false, &[0x0045, 0x0328]),
    (0x0119, false, &[0x0065, 0x0328]),
    (0x011A, false, &[0x0045, 0x030C]),
    (0x011B, false, &[0x0065, 0x030C]),
    (0x011C, false, &[0x0047, 0x0302]),
    (0x011D, false, &[0x0067, 0x0302]),
    (0x011E, false, &[0x0047, 0x0306]),
    (0x011F, false, &[0x0067, 0x0306]),
    (0x0120, false, &[0x0047, 0x0307]),
    (0x0121, false, &[0x0067, 0x0307]),
    (0x0122, false, &[0x0047, 0x0327]),
    (0x0123, false, &[0x0067, 0x0327]),
    (0x0124, false, &[0x0048, 0x0302]),
    (0x0125, false, &[0x0068, 0x0302]),
    (0x0128, false, &[0x0049, 0x0303]),
    (0x0129, false, &[0x0069, 0x0303]),
    (0x012A, false, &[0x0049, 0x0304]),
    (0x012B, false, &[0x0069, 0x0304]),
    (0x012C, false, &[0x0049, 0x0306]),
    (0x012D, false, &[0x0069, 0x0306]),
    (0x012E, false, &[0x0049, 0x0328]),
    (0x012F, false, &[0x0069, 0x0328]),
    (0x0130, false, &[0x0049, 0x0307]),
    (0x0132, true, &[0x0049, 0x004A]),
    (0x0133, true, &[0x0069, 0x006A]),
    (0x0134, false, &[0x004A, 0x0302]),
    (0x0135, false, &[0x006A, 0x0302]),
    (0x0136, false, &[0x004B, 0x0327]),
    (0x0137, false, &[0x006B, 0x0327]),
    (0x0139, false, &[0x004C, 0x0301]),
    (0x013A, false, &[0x006C, 0x0301]),
    (0x013B, false, &[0x004C, 0x0327]),
    (0x013C, false, &[0x006C, 0x0327]),
    (0x013D, false, &[0x004C, 0x030C]),
    (0x013E, false, &[0x006C, 0x030C]),
    (0x013F, true, &[0x004C, 0x00B7]),
    (0x0140, true, &[0x006C, 0x00B7]),
    (0x0143, false, &[0x004E, 0x0301]),
    (0x0144, false, &[0x006E, 0x0301]),
    (0x0145, false, &[0x004E, 0x0327]),
    (0x0146, false, &[0x006E, 0x0327]),
    (0x0147, false, &[0x004E, 0x030C]),
    (0x0148, false, &[0x006E, 0x030C]),
    (0x0149, true, &[0x02BC, 0x006E]),
    (0x014C, false, &[0x004F, 0x0304]),
    (0x014D, false, &[0x006F, 0x0304]),
    (0x014E, false, &[0x004F, 0x0306]),
    (0x014F, false, &[0x006F, 0x0306]),
    (0x0150, false, &[0x004F, 0x030B]),
    (0x0151, false, &[0x006F, 0x030B]),
    (0x0154, false, &[0x0052, 0x0301]),
    (0x0155, false, &[0x0072, 0x0301]),
    (0x0156, false, &[0x0052, 0x0327]),
    (0x0157, false, &[0x0072, 0x0327]),
    (0x0158, false, &[0x0052, 0x030C]),
    (0x0159, false, &[0x0072, 0x030C]),
    (0x015A, false, &[0x0053, 0x0301]),
    (0x015B, false, &[0x0073, 0x0301]),
    (0x015C, false, &[0x0053, 0x0302]),
    (0x015D, false, &[0x0073, 0x0302]),
    (0x015E, false, &[0x0053, 0x0327]),
    (0x015F, false, &[0x0073, 0x0327]),
    (0x0160, false, &[0x0053, 0x030C]),
    (0x0161, false, &[0x0073, 0x030C]),
    (0x0162, false, &[0x0054, 0x0327]),
    (0x0163, false, &[0x0074, 0x0327]),
    (0x0164, false, &[0x0054, 0x030C]),
    (0x0165, false, &[0x0074, 0x030C]),
    (0x0168, false, &[0x0055, 0x0303]),
    (0x0169, false, &[0x0075, 0x0303]),
    (0x016A, false, &[0x0055, 0x0304]),
    (0x016B, false, &[0x0075, 0x0304]),
    (0x016C, false, &[0x0055, 0x0306]),
    (0x016D, false, &[0x0075, 0x0306]),
    (0x016E, false, &[0x0055, 0x030A]),
    (0x016F, false, &[0x0075, 0x030A]),
    (0x0170, false, &[0x0055, 0x030B]),
    (0x0171, false, &[0x0075, 0x030B]),
    (0x0172, false, &[0x0055, 0x0328]),
    (0x0173, false, &[0x0075, 0x0328]),
    (0x0174, false, &[0x0057, 0x0302]),
    (0x0175, false, &[0x0077, 0x0302]),
    (0x0176, false, &[0x0059, 0x0302]),
    (0x0177, false, &[0x0079, 0x0302]),
    (0x0178, false, &[0x0059, 0x0308]),
    (0x0179, false, &[0x005A, 0x0301]),
    (0x017A, false, &[0x007A, 0x0301]),
    (0x017B, false, &[0x005A, 0x0307]),
    (0x017C, false, &[0x007A, 0x0307]),
    (0x017D, false, &[0x005A, 0x030C]),
    (0x017E, false, &[0x007A, 0x030C]),
    (0x017F, true, &[0x0073]),
    (0x01A0, false, &[0x004F, 0x031B]),
    (0x01A1, false, &[0x006F, 0x031B]),
    (0x01AF, false, &[0x0055, 0x031B]),
    (0x01B0, false, &[0x0075, 0x031B]),
    (0x01C4, true, &[0x0044, 0x017D]),
    (0x01C5, true, &[0x0044, 0x017E]),
    (0x01C6, true, &[0x0064, 0x017E]),
    (0x01C7, true, &[0x004C, 0x004A]),
    (0x01C8, true, &[0x004C, 0x006A]),
    (0x01C9, true, &[0x006C, 0x006A]),
    (0x01CA, true, &[0x004E, 0x004A]),
    (0x01CB, true, &[0x004E, 0x006A]),
    (0x01CC, true, &[0x006E, 0x006A]),
    (0x01CD, false, &[0x0041, 0x030C]),
    (0x01CE, false, &[0x0061, 0x030C]),
    (0x01CF, false, &[0x0049, 0x030C]),
    (0x01D0, false, &[0x0069, 0x030C]),
    (0x01D1, false, &[0x004F, 0x030C]),
    (0x01D2, false, &[0x006F, 0x030C]),
    (0x01D3, false, &[0x0055, 0x030C]),
    (0x01D4, false, &[0x0075, 0x030C]),
    (0x01D5, false, &[0x00DC, 0x0304]),
    (0x01D6, false, &[0x00FC, 0x0304]),
    (0x01D7, false, &[0x00DC, 0x0301]),
    (0x01D8, false, &[0x00FC, 0x0301]),
    (0x01D9, false, &[0x00DC, 0x030C]),
    (0x01DA, false, &[0x00FC, 0x030C]),
    (0x01DB, false, &[0x00DC, 0x0300]),
    (0x01DC, false, &[0x00FC, 0x0300]),
    (0x01DE, false, &[0x00C4, 0x0304]),
    (0x01DF, false, &[0x00E4, 0x0304]),
    (0x01E0, false, &[0x0226, 0x0304]),
    (0x01E1, false, &[0x0227, 0x0304]),
    (0x01E2, false, &[0x00C6, 0x0304]),
    (0x01E3, false, &[0x00E6, 0x0304]),
    (0x01E6, false, &[0x0047, 0x030C]),
    (0x01E7, false, &[0x0067, 0x030C]),
    (0x01E8, false, &[0x004B, 0x030C]),
    (0x01E9, false, &[0x006B, 0x030C]),
    (0x01EA, false, &[0x004F, 0x0328]),
    (0x01EB, false, &[0x006F, 0x0328]),
    (0x01EC, false, &[0x01EA, 0x0304]),
    (0x01ED, false, &[0x01EB, 0x0304]),
    (0x01EE, false, &[0x01B7, 0x030C]),
    (0x01EF, false, &[0x0292, 0x030C]),
    (0x01F0, false, &[0x006A, 0x030C]),
    (0x01F1, true, &[0x0044, 0x005A]),
    (0x01F2, true, &[0x0044, 0x007A]),
    (0x01F3, true, &[0x0064, 0x007A]),
    (0x01F4, false, &[0x0047, 0x0301]),
    (0x01F5, false, &[0x0067, 0x0301]),
    (0x01F8, false, &[0x004E, 0x0300]),
    (0x01F9, false, &[0x006E, 0x0300]),
    (0x01FA, false, &[0x00C5, 0x0301]),
    (0x01FB, false, &[0x00E5, 0x0301]),
    (0x01FC, false, &[0x00C6, 0x0301]),
    (0x01FD, false, &[0x00E6, 0x0301]),
    (0x01FE, false, &[0x00D8, 0x0301]),
    (0x01FF, false, &[0x00F8, 0x0301]),
    (0x0200, false, &[0x0041, 0x030F]),
    (0x0201, false, &[0x0061, 0x030F]),
    (0x0202, false, &[0x0041, 0x0311]),
    (0x0203, false, &[0x0061, 0x0311]),
    (0x0204, false, &[0x0045, 0x030F]),
    (0x0205, false, &[0x0065, 0x030F]),
    (0x0206, false, &[0x0045, 0x0311]),
    (0x0207, false, &[0x0065, 0x0311]),
    (0x0208, false, &[0x0049, 0x030F]),
    (0x0209, false, &[0x0069, 0x030F]),
    (0x020A, false, &[0x0049, 0x0311]),
    (0x020B, false, &[0x0069, 0x0311]),
    (0x020C, false, &[0x004F, 0x030F]),
    (0x020D, false, &[0x006F, 0x030F]),
    (0x020E, false, &[0x004F, 0x0311]),
    (0x020F, false, &[0x006F, 0x0311]),
    (0x0210, false, &[0x0052, 0x030F]),
    (0x0211, false, &[0x0072, 0x030F]),
    (0x0212, false, &[0x0052, 0x0311]),
    (0x0213, false, &[0x0072, 0x0311]),
    (0x0214, false, &[0x0055, 0x030F]),
    (0x0215, false, &[0x0075, 0x030F]),
    (0x0216, false, &[0x0055, 0x0311]),
    (0x0217, false, &[0x0075, 0x0311]),
    (0x0218, false, &[0x0053, 0x0326]),
    (0x0219, false, &[0x0073, 0x0326]),
    (0x021A, false, &[0x0054, 0x0326]),
    (0x021B, false, &[0x0074, 0x0326]),
    (0x021E, false, &[0x0048, 0x030C]),
    (0x021F, false, &[0x0068, 0x030C]),
    (0x0226, false, &[0x0041, 0x0307]),
    (0x0227, false, &[0x0061, 0x0307]),
    (0x0228, false, &[0x0045, 0x0327]),
    (0x0229, false, &[0x0065, 0x0327]),
    (0x022A, false, &[0x00D6, 0x0304]),
    (0x022B, false, &[0x00F6, 0x0304]),
    (0x022C, false, &[0x00D5, 0x0304]),
    (0x022D, false, &[0x00F5, 0x0304]),
    (0x022E, false, &[0x004F, 0x0307]),
    (0x022F, false, &[0x006F, 0x0307]),
    (0x0230, false, &[0x022E, 0x0304]),
    (0x0231, false, &[0x022F, 0x0304]),
    (0x0232, false, &[0x0059, 0x0304]),
    (0x0233, false, &[0x0079, 0x0304]),
    (0x02B0, true, &[0x0068]),
    (0x02B1, true, &[0x0266]),
    (0x02B2, true, &[0x006A]),
    (0x02B3, true, &[0x0072]),
    (0x02B4, true, &[0x0279]),
    (0x02B5, true, &[0x027B]),
    (0x02B6, true, &[0x0281]),
    (0x02B7, true, &[0x0077]),
    (0x02B8, true, &[0x0079]),
    (0x02D8, true, &[0x0020, 0x0306]),
    (0x02D9, true, &[0x0020, 0x0307]),
    (0x02DA, true, &[0x0020, 0x030A]),
    (0x02DB, true, &[0x0020, 0x0328]),
    (0x02DC, true, &[0x0020, 0x0303]),
    (0x02DD, true, &[0x0020, 0x030B]),
    (0x02E0, true, &[0x0263]),
    (0x02E1, true, &[0x006C]),
    (0x02E2, true, &[0x0073]),
    (0x02E3, true, &[0x0078]),
    (0x02E4, true, &[0x0295]),
    (0x0340, false, &[0x0300]),
    (0x0341, false, &[0x0301]),
    (0x0343, false, &[0x0313]),
    (0x0344, false, &[0x0308, 0x0301]),
    (0x0374, false, &[0x02B9]),
    (0x037A, true, &[0x0020, 0x0345]),
    (0x037E, false, &[0x003B]),
    (0x0384, true, &[0x0020, 0x0301]),
    (0x0385, false, &[0x00A8, 0x0301]),
    (0x0386, false, &[0x0391, 0x0301]),
    (0x0387, false, &[0x00B7]),
    (0x0388, false, &[0x0395, 0x0301]),
    (0x0389, false, &[0x0397, 0x0301]),
    (0x038A, false, &[0x0399, 0x0301]),
    (0x038C, false, &[0x039F, 0x0301]),
    (0x038E, false, &[0x03A5, 0x0301]),
    (0x038F, false, &[0x03A9, 0x0301]),
    (0x0390, false, &[0x03CA, 0x0301]),
    (0x03AA, false, &[0x0399, 0x0308]),
    (0x03AB, false, &[0x03A5, 0x0308]),
    (0x03AC, false, &[0x03B1, 0x0301]),
    (0x03AD, false, &[0x03B5, 0x0301]),
    (0x03AE, false, &[0x03B7, 0x0301]),
    (0x03AF, false, &[0x03B9, 0x0301]),
    (0x03B0, false, &[0x03CB, 0x0301]),
    (0x03CA, false, &[0x03B9, 0x0308]),
    (0x03CB, false, &[0x03C5, 0x0308]),
    (0x03CC, false, &[0x03BF, 0x0301]),
    (0x03CD, false, &[0x03C5, 0x0301]),
    (0x03CE, false, &[0x03C9, 0x0301]),
    (0x03D0, true, &[0x03B2]),
    (0x03D1, true, &[0x03B8]),
    (0x03D2, true, &[0x03A5]),
    (0x03D3, false, &[0x03D2, 0x0301]),
    (0x03D4, false, &[0x03D2, 0x0308]),
    (0x03D5, true, &[0x03C6]),
    (0x03D6, true, &[0x03C0]),
    (0x03F0, true, &[0x03BA]),
    (0x03F1, true, &[0x03C1]),
    (0x03F2, true, &[0x03C2]),
    (0x03F4, true, &[0x0398]),
    (0x03F5, true, &[0x03B5]),
    (0x03F9, true, &[0x03A3]),
    (0x0400, false, &[0x0415, 0x0300]),
    (0x0401, false, &[0x0415, 0x0308]),
    (0x0403, false, &[0x0413, 0x0301]),
    (0x0407, false, &[0x0406, 0x0308]),
    (0x040C, false, &[0x041A, 0x0301]),
    (0x040D, false, &[0x0418, 0x0300]),
    (0x040E, false, &[0x0423, 0x0306]),
    (0x0419, false, &[0x0418, 0x0306]),
    (0x0439, false, &[0x0438, 0x0306]),
    (0x0450, false, &[0x0435, 0x0300]),
    (0x0451, false, &[0x0435, 0x0308]),
    (0x0453, false, &[0x0433, 0x0301]),
    (0x0457, false, &[0x0456, 0x0308]),
    (0x045C, false, &[0x043A, 0x0301]),
    (0x045D, false, &[0x0438, 0x0300]),
    (0x045E, false, &[0x0443, 0x0306]),
    (0x0476, false, &[0x0474, 0x030F]),
    (0x0477, false, &[0x0475, 0x030F]),
    (0x04C1, false, &[0x0416, 0x0306]),
    (0x04C2, false, &[0x0436, 0x0306]),
    (0x04D0, false, &[0x0410, 0x0306]),
    (0x04D1, false, &[0x0430, 0x0306]),
    (0x04D2, false, &[0x0410, 0x0308]),
    (0x04D3, false, &[0x0430, 0x0308]),
    (0x04D6, false, &[0x0415, 0x0306]),
    (0x04D7, false, &[0x0435, 0x0306]),
    (0x04DA, false, &[0x04D8, 0x0308]),
    (0x04DB, false, &[0x04D9, 0x0308]),
    (0x04DC, false, &[0x0416, 0x0308]),
    (0x04DD, false, &[0x0436, 0x0308]),
    (0x04DE, false, &[0x0417, 0x0308]),
    (0x04DF, false, &[0x0437, 0x0308]),
    (0x04E2, false, &[0x0418, 0x0304]),
    (0x04E3, false, &[0x0438, 0x0304]),
    (0x04E4, false, &[0x0418, 0x0308]),
    (0x04E5, false, &[0x0438, 0x0308]),
    (0x04E6, false, &[0x041E, 0x0308]),
    (0x04E7, false, &[0x043E, 0x0308]),
    (0x04EA, false, &[0x04E8, 0x0308]),
    (0x04EB, false, &[0x04E9, 0x0308]),
    (0x04EC, false, &[0x042D, 0x0308]),
    (0x04ED, false, &[0x044D, 0x0308]),
    (0x04EE, false, &[0x0423, 0x0304]),
    (0x04EF, false, &[0x0443, 0x0304]),
    (0x04F0, false, &[0x0423, 0x0308]),
    (0x04F1, false, &[0x0443, 0x0308]),
    (0x04F2, false, &[0x0423, 0x030B]),
    (0x04F3, false, &[0x0443, 0x030B]),
    (0x04F4, false, &[0x0427, 0x0308]),
    (0x04F5, false, &[0x0447, 0x0308]),
    (0x04F8, false, &[0x042B, 0x0308]),
    (0x04F9, false, &[0x044B, 0x0308]),
    (0x0587, true, &[0x0565, 0x0582]),
    (0x0622, false, &[0x0627, 0x0653]),
    (0x0623, false, &[0x0627, 0x0654]),
    (0x0624, false, &[0x0648, 0x0654]),
    (0x0625, false, &[0x0627, 0x0655]),
    (0x0626, false, &[0x064A, 0x0654]),
    (0x0675, true, &[0x0627, 0x0674]),
    (0x0676, true, &[0x0648, 0x0674]),
    (0x0677, true, &[0x06C7, 0x0674]),
    (0x0678, true, &[0x064A, 0x0674]),
    (0x06C0, false, &[0x06D5, 0x0654]),
    (0x06C2, false, &[0x06C1, 0x0654]),
    (0x06D3, false, &[0x06D2, 0x0654]),
    (0x0929, false, &[0x0928, 0x093C]),
    (0x0931, false, &[0x0930, 0x093C]),
    (0x0934, false, &[0x0933, 0x093C]),
    (0x0958, false, &[0x0915, 0x093C]),
    (0x0959, false, &[0x0916, 0x093C]),
    (0x095A, false, &[0x0917, 0x093C]),
    (0x095B, false, &[0x091C, 0x093C]),
    (0x095C, false, &[0x0921, 0x093C]),
    (0x095D, false, &[0x0922, 0x093C]),
    (0x095E, false, &[0x092B, 0x093C]),
    (0x095F, false, &[0x092F, 0x093C]),
    (0x09CB, false, &[0x09C7, 0x09BE]),
    (0x09CC, false, &[0x09C7, 0x09D7]),
    (0x09DC, false, &[0x09A1, 0x09BC]),
    (0x09DD, false, &[0x09A2, 0x09BC]),
    (0x09DF, false, &[0x09AF, 0x09BC]),
    (0x0A33, false, &[0x0A32, 0x0A3C]),
    (0x0A36, false, &[0x0A38, 0x0A3C]),
    (0x0A59, false, &[0x0A16, 0x0A3C]),
    (0x0A5A, false, &[0x0A17, 0x0A3C]),
    (0x0A5B, false, &[0x0A1C, 0x0A3C]),
    (0x0A5E, false, &[0x0A2B, 0x0A3C]),
    (0x0B48, false, &[0x0B47, 0x0B56]),
    (0x0B4B, false, &[0x0B47, 0x0B3E]),
    (0x0B4C, false, &[0x0B47, 0x0B57]),
    (0x0B5C, false, &[0x0B21, 0x0B3C]),
    (0x0B5D, false, &[0x0B22, 0x0B3C]),
    (0x0B94, false, &[0x0B92, 0x0BD7]),
    (0x0BCA, false, &[0x0BC6, 0x0BBE]),
    (0x0BCB, false, &[0x0BC7, 0x0BBE]),
    (0x0BCC, false, &[0x0BC6, 0x0BD7]),
    (0x0C48, false, &[0x0C46, 0x0C56]),
    (0x0CC0, false, &[0x0CBF, 0x0CD5]),
    (0x0CC7, false, &[0x0CC6, 0x0CD5]),
    (0x0CC8, false, &[0x0CC6, 0x0CD6]),
    (0x0CCA, false, &[0x0CC6, 0x0CC2]),
    (0x0CCB, false, &[0x0CCA, 0x0CD5]),
    (0x0D4A, false, &[0x0D46, 0x0D3E]),
    (0x0D4B, false, &[0x0D47, 0x0D3E]),
    (0x0D4C, false, &[0x0D46, 0x0D57]),
    (0x0DDA, false, &[0x0DD9, 0x0DCA]),
    (0x0DDC, false, &[0x0DD9, 0x0DCF]),
    (0x0DDD, false, &[0x0DDC, 0x0DCA]),
    (0x0DDE, false, &[0x0DD9, 0x0DDF]),
    (0x0E33, true, &[0x0E4D, 0x0E32]),
    (0x0EB3, true, &[0x0ECD, 0x0EB2]),
    (0x0EDC, true, &[0x0EAB, 0x0E99]),
    (0x0EDD, true, &[0x0EAB, 0x0EA1]),
    (0x0F0C, true, &[0x0F0B]),
    (0x0F43, false, &[0x0F42, 0x0FB7]),
    (0x0F4D, false, &[0x0F4C, 0x0FB7]),
    (0x0F52, false, &[0x0F51, 0x0FB7]),
    (0x0F57, false, &[0x0F56, 0x0FB7]),
    (0x0F5C, false, &[0x0F5B, 0x0FB7]),
    (0x0F69, false, &[0x0F40, 0x0FB5]),
    (0x0F73, false, &[0x0F71, 0x0F72]),
    (0x0F75, false, &[0x0F71, 0x0F74]),
    (0x0F76, false, &[0x0FB2, 0x0F80]),
    (0x0F77, true, &[0x0FB2, 0x0F81]),
    (0x0F78, false, &[0x0FB3, 0x0F80]),
    (0x0F79, true, &[0x0FB3, 0x0F81]),
    (0x0F81, false, &[0x0F71, 0x0F80]),
    (0x0F93, false, &[0x0F92, 0x0FB7]),
    (0x0F9D, false, &[0x0F9C, 0x0FB7]),
    (0x0FA2, false, &[0x0FA1, 0x0FB7]),
    (0x0FA7, false, &[0x0FA6, 0x0FB7]),
    (0x0FAC, false, &[0x0FAB, 0x0FB7]),
    (0x0FB9, false, &[0x0F90, 0x0FB5]),
    (0x1026, false, &[0x1025, 0x102E]),
    (0x10FC, true, &[0x10DC]),
    (0x1B06, false, &[0x1B05, 0x1B35]),
    (0x1B08, false, &[0x1B07, 0x1B35]),
    (0x1B0A, false, &[0x1B09, 0x1B35]),
    (0x1B0C, false, &[0x1B0B, 0x1B35]),
    (0x1B0E, false, &[0x1B0D, 0x1B35]),
    (0x1B12, false, &[0x1B11, 0x1B35]),
    (0x1B3B, false, &[0x1B3A, 0x1B35]),
    (0x1B3D, false, &[0x1B3C, 0x1B35]),
    (0x1B40, false, &[0x1B3E, 0x1B35]),
    (0x1B41, false, &[0x1B3F, 0x1B35]),
    (0x1B43, false, &[0x1B42, 0x1B35]),
    (0x1D2C, true, &[0x0041]),
    (0x1D2D, true, &[0x00C6]),
    (0x1D2E, true, &[0x0042]),
    (0x1D30, true, &[0x0044]),
    (0x1D31, true, &[0x0045]),
    (0x1D32, true, &[0x018E]),
    (0x1D33, true, &[0x0047]),
    (0x1D34, true, &[0x0048]),
    (0x1D35, true, &[0x0049]),
    (0x1D36, true, &[0x004A]),
    (0x1D37, true, &[0x004B]),
    (0x1D38, true, &[0x004C]),
    (0x1D39, true, &[0x004D]),
    (0x1D3A, true, &[0x004E]),
    (0x1D3C, true, &[0x004F]),
    (0x1D3D, true, &[0x0222]),
    (0x1D3E, true, &[0x0050]),
    (0x1D3F, true, &[0x0052]),
    (0x1D40, true, &[0x0054]),
    (0x1D41, true, &[0x0055]),
    (0x1D42, true, &[0x0057]),
    (0x1D43, true, &[0x0061]),
    (0x1D44, true, &[0x0250]),
    (0x1D45, true, &[0x0251]),
    (0x1D46, true, &[0x1D02]),
    (0x1D47, true, &[0x0062]),
    (0x1D48, true, &[0x0064]),
    (0x1D49, true, &[0x0065]),
    (0x1D4A, true, &[0x0259]),
    (0x1D4B, true, &[0x025B]),
    (0x1D4C, true, &[0x025C]),
    (0x1D4D, true, &[0x0067]),
    (0x1D4F, true, &[0x006B]),
    (0x1D50, true, &[0x006D]),
    (0x1D51, true, &[0x014B]),
    (0x1D52, true, &[0x006F]),
    (0x1D53, true, &[0x0254]),
    (0x1D54, true, &[0x1D16]),
    (0x1D55, true, &[0x1D17]),
    (0x1D56, true, &[0x0070]),
    (0x1D57, true, &[0x0074]),
    (0x1D58, true, &[0x0075]),
    (0x1D59, true, &[0x1D1D]),
    (0x1D5A, true, &[0x026F]),
    (0x1D5B, true, &[0x0076]),
    (0x1D5C, true, &[0x1D25]),
    (0x1D5D, true, &[0x03B2]),
    (0x1D5E, true, &[0x03B3]),
    (0x1D5F, true, &[0x03B4]),
    (0x1D60, true, &[0x03C6]),
    (0x1D61, true, &[0x03C7]),
    (0x1D62, true, &[0x0069]),
    (0x1D63, true, &[0x0072]),
    (0x1D64, true, &[0x0075]),
    (0x1D65, true, &[0x0076]),
    (0x1D66, true, &[0x03B2]),
    (0x1D67, true, &[0x03B3]),
    (0x1D68, true, &[0x03C1]),
    (0x1D69, true, &[0x03C6]),
    (0x1D6A, true, &[0x03C7]),
    (0x1D78, true, &[0x043D]),
    (0x1D9B, true, &[0x0252]),
    (0x1D9C, true, &[0x0063]),
    (0x1D9D, true, &[0x0255]),
    (0x1D9E, true, &[0x00F0]),
    (0x1D9F, true, &[0x025C]),
    (0x1DA0, true, &[0x0066]),
    (0x1DA1, true, &[0x025F]),
    (0x1DA2, true, &[0x0261]),
    (0x1DA3, true, &[0x0265]),
    (0x1DA4, true, &[0x0268]),
    (0x1DA5, true, &[0x0269]),
    (0x1DA6, true, &[0x026A]),
    (0x1DA7, true, &[0x1D7B]),
    (0x1DA8, true, &[0x029D]),
    (0x1DA9, true, &[0x026D]),
    (0x1DAA, true, &[0x1D85]),
    (0x1DAB, true, &[0x029F]),
    (0x1DAC, true, &[0x0271]),
    (0x1DAD, true, &[0x0270]),
    (0x1DAE, true, &[0x0272]),
    (0x1DAF, true, &[0x0273]),
    (0x1DB0, true, &[0x0274]),
    (0x1DB1, true, &[0x0275]),
    (0x1DB2, true, &[0x0278]),
    (0x1DB3, true, &[0x0282]),
    (0x1DB4, true, &[0x0283]),
    (0x1DB5, true, &[0x01AB]),
    (0x1DB6, true, &[0x0289]),
    (0x1DB7, true, &[0x028A]),
    (0x1DB8, true, &[0x1D1C]),
    (0x1DB9, true, &[0x028B]),
    (0x1DBA, true, &[0x028C]),
    (0x1DBB, true, &[0x007A]),
    (0x1DBC, true, &[0x0290]),
    (0x1DBD, true, &[0x0291]),
    (0x1DBE, true, &[0x0292]),
    (0x1DBF, true, &[0x03B8]),
    (0x1E00, false, &[0x0041, 0x0325]),
    (0x1E01, false, &[0x0061, 0x0325]),
    (0x1E02, false, &[0x0042, 0x0307]),
    (0x1E03, false, &[0x0062, 0x0307]),
    (0x1E04, false, &[0x0042, 0x0323]),
    (0x1E05, false, &[0x0062, 0x0323]),
    (0x1E06, false, &[0x0042, 0x0331]),
    (0x1E07, false, &[0x0062, 0x0331]),
    (0x1E08, false, &[0x00C7, 0x0301]),
    (0x1E09, false, &[0x00E7, 0x0301]),
    (0x1E0A, false, &[0x0044, 0x0307]),
    (0x1E0B, false, &[0x0064, 0x0307]),
    (0x1E0C, false, &[0x0044, 0x0323]),
    (0x1E0D, false, &[0x0064, 0x0323]),
    (0x1E0E, false, &[0x0044, 0x0331]),
    (0x1E0F, false, &[0x0064, 0x0331]),
    (0x1E10, false, &[0x0044, 0x0327]),
    (0x1E11, false, &[0x0064, 0x0327]),
    (0x1E12, false, &[0x0044, 0x032D]),
    (0x1E13, false, &[0x0064, 0x032D]),
    (0x1E14, false, &[0x0112, 0x0300]),
    (0x1E15, false, &[0x0113, 0x0300]),
    (0x1E16, false, &[0x0112, 0x0301]),
    (0x1E17, false, &[0x0113, 0x0301]),
    (0x1E18, false, &[0x0045, 0x032D]),
    (0x1E19, false, &[0x0065, 0x032D]),
    (0x1E1A, false, &[0x0045, 0x0330]),
    (0x1E1B, false, &[0x0065, 0x0330]),
    (0x1E1C, false, &[0x0228, 0x0306]),
    (0x1E1D, false, &[0x0229, 0x0306]),
    (0x1E1E, false, &[0x0046, 0x0307]),
    (0x1E1F, false, &[0x0066, 0x0307]),
    (0x1E20, false, &[0x0047, 0x0304]),
    (0x1E21, false, &[0x0067, 0x0304]),
    (0x1E22, false, &[0x0048, 0x0307]),
    (0x1E23, false, &[0x0068, 0x0307]),
    (0x1E24, false, &[0x0048, 0x0323]),
    (0x1E25, false, &[0x0068, 0x0323]),
    (0x1E26, false, &[0x0048, 0x0308]),
    (0x1E27, false, &[0x0068, 0x0308]),
    (0x1E28, false, &[0x0048, 0x0327]),
    (0x1E29, false, &[0x0068, 0x0327]),
    (0x1E2A, false, &[0x0048, 0x032E]),
    (0x1E2B, false, &[0x0068, 0x032E]),
    (0x1E2C, false, &[0x0049, 0x0330]),
    (0x1E2D, false, &[0x0069, 0x0330]),
    (0x1E2E, false, &[0x00CF, 0x0301]),
    (0x1E2F, false, &[0x00EF, 0x0301]),
    (0x1E30, false, &[0x004B, 0x0301]),
    (0x1E31, false, &[0x006B, 0x0301]),
    (0x1E32, false, &[0x004B, 0x0323]),
    (0x1E33, false, &[0x006B, 0x0323]),
    (0x1E34, false, &[0x004B, 0x0331]),
    (0x1E35, false, &[0x006B, 0x0331]),
    (0x1E36, false, &[0x004C, 0x0323]),
    (0x1E37, false, &[0x006C, 0x0323]),
    (0x1E38, false, &[0x1E36, 0x0304]),
    (0x1E39, false, &[0x1E37, 0x0304]),
    (0x1E3A, false, &[0x004C, 0x0331]),
    (0x1E3B, false, &[0x006C, 0x0331]),
    (0x1E3C, false, &[0x004C, 0x032D]),
    (0x1E3D, false, &[0x006C, 0x032D]),
    (0x1E3E, false, &[0x004D, 0x0301]),
    (0x1E3F, false, &[0x006D, 0x0301]),
    (0x1E40, false, &[0x004D, 0x0307]),
    (0x1E41, false, &[0x006D, 0x0307]),
    (0x1E42, false, &[0x004D, 0x0323]),
    (0x1E43, false, &[0x006D, 0x0323]),
    (0x1E44, false, &[0x004E, 0x0307]),
    (0x1E45, false, &[0x006E, 0x0307]),
    (0x1E46, false, &[0x004E, 0x0323]),
    (0x1E47, false, &[0x006E, 0x0323]),
    (0x1E48, false, &[0x004E, 0x0331]),
    (0x1E49, false, &[0x006E, 0x0331]),
    (0x1E4A, false, &[0x004E, 0x032D]),
    (0x1E4B, false, &[0x006E, 0x032D]),
    (0x1E4C, false, &[0x00D5, 0x0301]),
    (0x1E4D, false, &[0x00F5, 0x0301]),
    (0x1E4E, false, &[0x00D5, 0x0308]),
    (0x1E4F, false, &[0x00F5, 0x0308]),
    (0x1E50, false, &[0x014C, 0x0300]),
    (0x1E51, false, &[0x014D, 0x0300]),
    (0x1E52, false, &[0x014C, 0x0301]),
    (0x1E53, false, &[0x014D, 0x0301]),
    (0x1E54, false, &[0x0050, 0x0301]),
    (0x1E55, false, &[0x0070, 0x0301]),
    (0x1E56, false, &[0x0050, 0x0307]),
    (0x1E57, false, &[0x0070, 0x0307]),
    (0x1E58, false, &[0x0052, 0x0307]),
    (0x1E59, false, &[0x0072, 0x0307]),
    (0x1E5A, false, &[0x0052, 0x0323]),
    (0x1E5B, false, &[0x0072, 0x0323]),
    (0x1E5C, false, &[0x1E5A, 0x0304]),
    (0x1E5D, false, &[0x1E5B, 0x0304]),
    (0x1E5E, false, &[0x0052, 0x0331]),
    (0x1E5F, false, &[0x0072, 0x0331]),
    (0x1E60, false, &[0x0053, 0x0307]),
    (0x1E61, false, &[0x0073, 0x0307]),
    (0x1E62, false, &[0x0053, 0x0323]),
    (0x1E63, false, &[0x0073, 0x0323]),
    (0x1E64, false, &[0x015A, 0x0307]),
    (0x1E65, false, &[0x015B, 0x0307]),
    (0x1E66, false, &[0x0160, 0x0307]),
    (0x1E67, false, &[0x0161, 0x0307]),
    (0x1E68, false, &[0x1E62, 0x0307]),
    (0x1E69, false, &[0x1E63, 0x0307]),
    (0x1E6A, false, &[0x0054, 0x0307]),
    (0x1E6B, false, &[0x0074, 0x0307]),
    (0x1E6C, false, &[0x0054, 0x0323]),
    (0x1E6D, false, &[0x0074, 0x0323]),
    (0x1E6E, false, &[0x0054, 0x0331]),
    (0x1E6F, false, &[0x0074, 0x0331]),
    (0x1E70, false, &[0x0054, 0x032D]),
    (0x1E71, false, &[0x0074, 0x032D]),
    (0x1E72, false, &[0x0055, 0x0324]),
    (0x1E73, false, &[0x0075, 0x0324]),
    (0x1E74, false, &[0x0055, 0x0330]),
    (0x1E75, false, &[0x0075, 0x0330]),
    (0x1E76, false, &[0x0055, 0x032D]),
    (0x1E77, false, &[0x0075, 0x032D]),
    (0x1E78, false, &[0x0168, 0x0301]),
    (0x1E79, false, &[0x0169, 0x0301]),
    (0x1E7A, false, &[0x016A, 0x0308]),
    (0x1E7B, false, &[0x016B, 0x0308]),
    (0x1E7C, false, &[0x0056, 0x0303]),
    (0x1E7D, false, &[0x0076, 0x0303]),
    (0x1E7E, false, &[0x0056, 0x0323]),
    (0x1E7F, false, &[0x0076, 0x0323]),
    (0x1E80, false, &[0x0057, 0x0300]),
    (0x1E81, false, &[0x0077, 0x0300]),
    (0x1E82, false, &[0x0057, 0x0301]),
    (0x1E83, false, &[0x0077, 0x0301]),
    (0x1E84, false, &[0x0057, 0x0308]),
    (0x1E85, false, &[0x0077, 0x0308]),
    (0x1E86, false, &[0x0057, 0x0307]),
    (0x1E87, false, &[0x0077, 0x0307]),
    (0x1E88, false, &[0x0057, 0x0323]),
    (0x1E89, false, &[0x0077, 0x0323]),
    (0x1E8A, false, &[0x0058, 0x0307]),
    (0x1E8B, false, &[0x0078, 0x0307]),
    (0x1E8C, false, &[0x0058, 0x0308]),
    (0x1E8D, false, &[0x0078, 0x0308]),
    (0x1E8E, false, &[0x0059, 0x0307]),
    (0x1E8F, false, &[0x0079, 0x0307]),
    (0x1E90, false, &[0x005A, 0x0302]),
    (0x1E91, false, &[0x007A, 0x0302]),
    (0x1E92, false, &[0x005A, 0x0323]),
    (0x1E93, false, &[0x007A, 0x0323]),
    (0x1E94, false, &[0x005A, 0x0331]),
    (0x1E95, false, &[0x007A, 0x0331]),
    (0x1E96, false, &[0x0068, 0x0331]),
    (0x1E97, false, &[0x0074, 0x0308]),
    (0x1E98, false, &[0x0077, 0x030A]),
    (0x1E99, false, &[0x0079, 0x030A]),
    (0x1E9A, true, &[0x0061, 0x02BE]),
    (0x1E9B, false, &[0x017F, 0x0307]),
    (0x1EA0, false, &[0x0041, 0x0323]),
    (0x1EA1, false, &[0x0061, 0x0323]),
    (0x1EA2, false, &[0x0041, 0x0309]),
    (0x1EA3, false, &[0x0061, 0x0309]),
    (0x1EA4, false, &[0x00C2, 0x0301]),
    (0x1EA5, false, &[0x00E2, 0x0301]),
    (0x1EA6, false, &[0x00C2, 0x0300]),
    (0x1EA7, false, &[0x00E2, 0x0300]),
    (0x1EA8, false, &[0x00C2, 0x0309]),
    (0x1EA9, false, &[0x00E2, 0x0309]),
    (0x1EAA, false, &[0x00C2, 0x0303]),
    (0x1EAB, false, &[0x00E2, 0x0303]),
    (0x1EAC, false, &[0x1EA0, 0x0302]),
    (0x1EAD, false, &[0x1EA1, 0x0302]),
    (0x1EAE, false, &[0x0102, 0x0301]),
    (0x1EAF, false, &[0x0103, 0x0301]),
    (0x1EB0, false, &[0x0102, 0x0300]),
    (0x1EB1, false, &[0x0103, 0x0300]),
    (0x1EB2, false, &[0x0102, 0x0309]),
    (0x1EB3, false, &[0x0103, 0x0309]),
    (0x1EB4, false, &[0x0102, 0x0303]),
    (0x1EB5, false, &[0x0103, 0x0303]),
    (0x1EB6, false, &[0x1EA0, 0x0306]),
    (0x1EB7, false, &[0x1EA1, 0x0306]),
    (0x1EB8, false, &[0x0045, 0x0323]),
    (0x1EB9, false, &[0x0065, 0x0323]),
    (0x1EBA, false, &[0x0045, 0x0309]),
    (0x1EBB, false, &[0x0065, 0x0309]),
    (0x1EBC, false, &[0x0045, 0x0303]),
    (0x1EBD, false, &[0x0065, 0x0303]),
    (0x1EBE, false, &[0x00CA, 0x0301]),
    (0x1EBF, false, &[0x00EA, 0x0301]),
    (0x1EC0, false, &[0x00CA, 0x0300]),
    (0x1EC1, false, &[0x00EA, 0x0300]),
    (0x1EC2, false, &[0x00CA, 0x0309]),
    (0x1EC3, false, &[0x00EA, 0x0309]),
    (0x1EC4, false, &[0x00CA, 0x0303]),
    (0x1EC5, false, &[0x00EA, 0x0303]),
    (0x1EC6, false, &[0x1EB8, 0x0302]),
    (0x1EC7, false, &[0x1EB9, 0x0302]),
    (0x1EC8, false, &[0x0049, 0x0309]),
    (0x1EC9, false, &[0x0069, 0x0309]),
    (0x1ECA, false, &[0x0049, 0x0323]),
    (0x1ECB, false, &[0x0069, 0x0323]),
    (0x1ECC, false, &[0x004F, 0x0323]),
    (0x1ECD, false, &[0x006F, 0x0323]),
    (0x1ECE, false, &[0x004F, 0x0309]),
    (0x1ECF, false, &[0x006F, 0x0309]),
    (0x1ED0, false, &[0x00D4, 0x0301]),
    (0x1ED1, false, &[0x00F4, 0x0301]),
    (0x1ED2, false, &[0x00D4, 0x0300]),
    (0x1ED3, false, &[0x00F4, 0x0300]),
    (0x1ED4, false, &[0x00D4, 0x0309]),
    (0x1ED5, false, &[0x00F4, 0x0309]),
    (0x1ED6, false, &[0x00D4, 0x0303]),
    (0x1ED7, false, &[0x00F4, 0x0303]),
    (0x1ED8, false, &[0x1ECC, 0x0302]),
    (0x1ED9, false, &[0x1ECD, 0x0302]),
    (0x1EDA, false, &[0x01A0, 0x0301]),
    (0x1EDB, false, &[0x01A1, 0x0301]),
    (0x1EDC, false, &[0x01A0, 0x0300]),
    (0x1EDD, false, &[0x01A1, 0x0300]),
    (0x1EDE, false, &[0x01A0, 0x0309]),
    (0x1EDF, false, &[0x01A1, 0x0309]),
    (0x1EE0, false, &[0x01A0, 0x0303]),
    (0x1EE1, false, &[0x01A1, 0x0303]),
    (0x1EE2, false, &[0x01A0, 0x0323]),
    (0x1EE3, false, &[0x01A1, 0x0323]),
    (0x1EE4, false, &[0x0055, 0x0323]),
    (0x1EE5, false, &[0x0075, 0x0323]),
    (0x1EE6, false, &[0x0055, 0x0309]),
    (0x1EE7, false, &[0x0075, 0x0309]),
    (0x1EE8, false, &[0x01AF, 0x0301]),
    (0x1EE9, false, &[0x01B0, 0x0301]),
    (0x1EEA, false, &[0x01AF, 0x0300]),
    (0x1EEB, false, &[0x01B0, 0x0300]),
    (0x1EEC, false, &[0x01AF, 0x0309]),
    (0x1EED, false, &[0x01B0, 0x0309]),
    (0x1EEE, false, &[0x01AF, 0x0303]),
    (0x1EEF, false, &[0x01B0, 0x0303]),
    (0x1EF0, false, &[0x01AF, 0x0323]),
    (0x1EF1, false, &[0x01B0, 0x0323]),
    (0x1EF2, false, &[0x0059, 0x0300]),
    (0x1EF3, false, &[0x0079, 0x0300]),
    (0x1EF4, false, &[0x0059, 0x0323]),
    (0x1EF5, false, &[0x0079, 0x0323]),
    (0x1EF6, false, &[0x0059, 0x0309]),
    (0x1EF7, false, &[0x0079, 0x0309]),
    (0x1EF8, false, &[0x0059, 0x0303]),
    (0x1EF9, false, &[0x0079, 0x0303]),
    (0x1F00, false, &[0x03B1, 0x0313]),
    (0x1F01, false, &[0x03B1, 0x0314]),
    (0x1F02, false, &[0x1F00, 0x0300]),
    (0x1F03, false, &[0x1F01, 0x0300]),
    (0x1F04, false, &[0x1F00, 0x0301]),
    (0x1F05, false, &[0x1F01, 0x0301]),
    (0x1F06, false, &[0x1F00, 0x0342]),
    (0x1F07, false, &[0x1F01, 0x0342]),
    (0x1F08, false, &[0x0391, 0x0313]),
    (0x1F09, false, &[0x0391, 0x0314]),
    (0x1F0A, false, &[0x1F08, 0x0300]),
    (0x1F0B, false, &[0x1F09, 0x0300]),
    (0x1F0C, false, &[0x1F08, 0x0301]),
    (0x1F0D, false, &[0x1F09, 0x0301]),
    (0x1F0E, false, &[0x1F08, 0x0342]),
    (0x1F0F, false, &[0x1F09, 0x0342]),
    (0x1F10, false, &[0x03B5, 0x0313]),
    (0x1F11, false, &[0x03B5, 0x0314]),
    (0x1F12, false, &[0x1F10, 0x0300]),
    (0x1F13, false, &[0x1F11, 0x0300]),
    (0x1F14, false, &[0x1F10, 0x0301]),
    (0x1F15, false, &[0x1F11, 0x0301]),
    (0x1F18, false, &[0x0395, 0x0313]),
    (0x1F19, false, &[0x0395, 0x0314]),
    (0x1F1A, false, &[0x1F18, 0x0300]),
    (0x1F1B, false, &[0x1F19, 0x0300]),
    (0x1F1C, false, &[0x1F18, 0x0301]),
    (0x1F1D, false, &[0x1F19, 0x0301]),
    (0x1F20, false, &[0x03B7, 0x0313]),
    (0x1F21, false, &[0x03B7, 0x0314]),
    (0x1F22, false, &[0x1F20, 0x0300]),
    (0x1F23, false, &[0x1F21, 0x0300]),
    (0x1F24, false, &[0x1F20, 0x0301]),
    (0x1F25, false, &[0x1F21, 0x0301]),
    (0x1F26, false, &[0x1F20, 0x0342]),
    (0x1F27, false, &[0x1F21, 0x0342]),
    (0x1F28, false, &[0x0397, 0x0313]),
    (0x1F29, false, &[0x0397, 0x0314]),
    (0x1F2A, false, &[0x1F28, 0x0300]),
    (0x1F2B, false, &[0x1F29, 0x0300]),
    (0x1F2C, false, &[0x1F28, 0x0301]),
    (0x1F2D, false, &[0x1F29, 0x0301]),
    (0x1F2E, false, &[0x1F28, 0x0342]),
    (0x1F2F, false, &[0x1F29, 0x0342]),
    (0x1F30, false, &[0x03B9, 0x0313]),
    (0x1F31, false, &[0x03B9, 0x0314]),
    (0x1F32, false, &[0x1F30, 0x0300]),
    (0x1F33, false, &[0x1F31, 0x0300]),
    (0x1F34, false, &[0x1F30, 0x0301]),
    (0x1F35, false, &[0x1F31, 0x0301]),
    (0x1F36, false, &[0x1F30, 0x0342]),
    (0x1F37, false, &[0x1F31, 0x0342]),
    (0x1F38, false, &[0x0399, 0x0313]),
    (0x1F39, false, &[0x0399, 0x0314]),
    (0x1F3A, false, &[0x1F38, 0x0300]),
    (0x1F3B, false, &[0x1F39, 0x0300]),
    (0x1F3C, false, &[0x1F38, 0x0301]),
    (0x1F3D, false, &[0x1F39, 0x0301]),
    (0x1F3E, false, &[0x1F38, 0x0342]),
    (0x1F3F, false, &[0x1F39, 0x0342]),
    (0x1F40, false, &[0x03BF, 0x0313]),
    (0x1F41, false, &[0x03BF, 0x0314]),
    (0x1F42, false, &[0x1F40, 0x0300]),
    (0x1F43, false, &[0x1F41, 0x0300]),
    (0x1F44, false, &[0x1F40, 0x0301]),
    (0x1F45, false, &[0x1F41, 0x0301]),
    (0x1F48, false, &[0x039F, 0x0313]),
    (0x1F49, false, &[0x039F, 0x0314]),
    (0x1F4A, false, &[0x1F48, 0x0300]),
    (0x1F4B, false, &[0x1F49, 0x0300]),
    (0x1F4C, false, &[0x1F48, 0x0301]),
    (0x1F4D, false, &[0x1F49, 0x0301]),
    (0x1F50, false, &[0x03C5, 0x0313]),
    (0x1F51, false, &[0x03C5, 0x0314]),
    (0x1F52, false, &[0x1F50, 0x0300]),
    (0x1F53, false, &[0x1F51, 0x0300]),
    (0x1F54, false, &[0x1F50, 0x0301]),
    (0x1F55, false, &[0x1F51, 0x0301]),
    (0x1F56, false, &[0x1F50, 0x0342]),
    (0x1F57, false, &[0x1F51, 0x0342]),
    (0x1F59, false, &[0x03A5, 0x0314]),
    (0x1F5B, false, &[0x1F59, 0x0300]),
    (0x1F5D, false, &[0x1F59, 0x0301]),
    (0x1F5F, false, &[0x1F59, 0x0342]),
    (0x1F60, false, &[0x03C9, 0x0313]),
    (0x1F61, false, &[0x03C9, 0x0314]),
    (0x1F62, false, &[0x1F60, 0x0300]),
    (0x1F63, false, &[0x1F61, 0x0300]),
    (0x1F64, false, &[0x1F60, 0x0301]),
    (0x1F65, false, &[0x1F61, 0x0301]),
    (0x1F66, false, &[0x1F60, 0x0342]),
    (0x1F67, false, &[0x1F61, 0x0342]),
    (0x1F68, false, &[0x03A9, 0x0313]),
    (0x1F69, false, &[0x03A9, 0x0314]),
    (0x1F6A, false, &[0x1F68, 0x0300]),
    (0x1F6B, false, &[0x1F69, 0x0300]),
    (0x1F6C, false, &[0x1F68, 0x0301]),
    (0x1F6D, false, &[0x1F69, 0x0301]),
    (0x1F6E, false, &[0x1F68, 0x0342]),
    (0x1F6F, false, &[0x1F69, 0x0342]),
    (0x1F70, false, &[0x03B1, 0x0300]),
    (0x1F71, false, &[0x03AC]),
    (0x1F72, false, &[0x03B5, 0x0300]),
    (0x1F73, false, &[0x03AD]),
    (0x1F74, false, &[0x03B7, 0x0300]),
    (0x1F75, false, &[0x03AE]),
    (0x1F76, false, &[0x03B9, 0x0300]),
    (0x1F77, false, &[0x03AF]),
    (0x1F78, false, &[0x03BF, 0x0300]),
    (0x1F79, false, &[0x03CC]),
    (0x1F7A, false, &[0x03C5, 0x0300]),
    (0x1F7B, false, &[0x03CD]),
    (0x1F7C, false, &[0x03C9, 0x0300]),
    (0x1F7D, false, &[0x03CE]),
    (0x1F80, false, &[0x1F00, 0x0345]),
    (0x1F81, false, &[0x1F01, 0x0345]),
    (0x1F82, false, &[0x1F02, 0x0345]),
    (0x1F83, false, &[0x1F03, 0x0345]),
    (0x1F84, false, &[0x1F04, 0x0345]),
    (0x1F85, false, &[0x1F05, 0x0345]),
    (0x1F86, false, &[0x1F06, 0x0345]),
    (0x1F87, false, &[0x1F07, 0x0345]),
    (0x1F88, false, &[0x1F08, 0x0345]),
    (0x1F89, false, &[0x1F09, 0x0345]),
    (0x1F8A, false, &[0x1F0A, 0x0345]),
    (0x1F8B, false, &[0x1F0B, 0x0345]),
    (0x1F8C, false, &[0x1F0C, 0x0345]),
    (0x1F8D, false, &[0x1F0D, 0x0345]),
    (0x1F8E, false, &[0x1F0E, 0x0345]),
    (0x1F8F, false, &[0x1F0F, 0x0345]),
    (0x1F90, false, &[0x1F20, 0x0345]),
    (0x1F91, false, &[0x1F21, 0x0345]),
    (0x1F92, false, &[0x1F22, 0x0345]),
    (0x1F93, false, &[0x1F23, 0x0345]),
    (0x1F94, false, &[0x1F24, 0x0345]),
    (0x1F95, false, &[0x1F25, 0x0345]),
    (0x1F96, false, &[0x1F26, 0x0345]),
    (0x1F97, false, &[0x1F27, 0x0345]),
    (0x1F98, false, &[0x1F28, 0x0345]),
    (0x1F99, false, &[0x1F29, 0x0345]),
    (0x1F9A, false, &[0x1F2A, 0x0345]),
    (0x1F9B, false, &[0x1F2B, 0x0345]),
    (0x1F9C, false, &[0x1F2C, 0x0345]),
    (0x1F9D, false, &[0x1F2D, 0x0345]),
    (0x1F9E, false, &[0x1F2E, 0x0345]),
    (0x1F9F, false, &[0x1F2F, 0x0345]),
    (0x1FA0, false, &[0x1F60, 0x0345]),
    (0x1FA1, false, &[0x1F61, 0x0345]),
    (0x1FA2, false, &[0x1F62, 0x0345]),
    (0x1FA3, false, &[0x1F63, 0x0345]),
    (0x1FA4, false, &[0x1F64, 0x0345]),
    (0x1FA5, false, &[0x1F65, 0x0345]),
    (0x1FA6, false, &[0x1F66, 0x0345]),
    (0x1FA7, false, &[0x1F67, 0x0345]),
    (0x1FA8, false, &[0x1F68, 0x0345]),
    (0x1FA9, false, &[0x1F69, 0x0345]),
    (0x1FAA, false, &[0x1F6A, 0x0345]),
    (0x1FAB, false, &[0x1F6B, 0x0345]),
    (0x1FAC, false, &[0x1F6C, 0x0345]),
    (0x1FAD, false, &[0x1F6D, 0x0345]),
    (0x1FAE, false, &[0x1F6E, 0x0345]),
    (0x1FAF, false, &[0x1F6F, 0x0345]),
    (0x1FB0, false, &[0x03B1, 0x0306]),
    (0x1FB1, false, &[0x03B1, 0x0304]),
    (0x1FB2, false, &[0x1F70, 0x0345]),
    (0x1FB3, false, &[0x03B1, 0x0345]),
    (0x1FB4, false, &[0x03AC, 0x0345]),
    (0x1FB6, false, &[0x03B1, 0x0342]),
    (0x1FB7, false, &[0x1FB6, 0x0345]),
    (0x1FB8, false, &[0x0391, 0x0306]),
    (0x1FB9, false, &[0x0391, 0x0304]),
    (0x1FBA, false, &[0x0391, 0x0300]),
    (0x1FBB, false, &[0x0386]),
    (0x1FBC, false, &[0x0391, 0x0345]),
    (0x1FBD, true, &[0x0020, 0x0313]),
    (0x1FBE, false, &[0x03B9]),
    (0x1FBF, true, &[0x0020, 0x0313]),
    (0x1FC0, true, &[0x0020, 0x0342]),
    (0x1FC1, false, &[0x00A8, 0x0342]),
    (0x1FC2, false, &[0x1F74, 0x0345]),
    (0x1FC3, false, &[0x03B7, 0x0345]),
    (0x1FC4, false, &[0x03AE, 0x0345]),
    (0x1FC6, false, &[0x03B7, 0x0342]),
    (0x1FC7, false, &[0x1FC6, 0x0345]),
    (0x1FC8, false, &[0x0395, 0x0300]),
    (0x1FC9, false, &[0x0388]),
    (0x1FCA, false, &[0x0397, 0x0300]),
    (0x1FCB, false, &[0x0389]),
    (0x1FCC, false, &[0x0397, 0x0345]),
    (0x1FCD, false, &[0x1FBF, 0x0300]),
    (0x1FCE, false, &[0x1FBF, 0x0301]),
    (0x1FCF, false, &[0x1FBF, 0x0342]),
    (0x1FD0, false, &[0x03B9, 0x0306]),
    (0x1FD1, false, &[0x03B9, 0x0304]),
    (0x1FD2, false, &[0x03CA, 0x0300]),
    (0x1FD3, false, &[0x0390]),
    (0x1FD6, false, &[0x03B9, 0x0342]),
    (0x1FD7, false, &[0x03CA, 0x0342]),
    (0x1FD8, false, &[0x0399, 0x0306]),
    (0x1FD9, false, &[0x0399, 0x0304]),
    (0x1FDA, false, &[0x0399, 0x0300]),
    (0x1FDB, false, &[0x038A]),
    (0x1FDD, false, &[0x1FFE, 0x0300]),
    (0x1FDE, false, &[0x1FFE, 0x0301]),
    (0x1FDF, false, &[0x1FFE, 0x0342]),
    (0x1FE0, false, &[0x03C5, 0x0306]),
    (0x1FE1, false, &[0x03C5, 0x0304]),
    (0x1FE2, false, &[0x03CB, 0x0300]),
    (0x1FE3, false, &[0x03B0]),
    (0x1FE4, false, &[0x03C1, 0x0313]),
    (0x1FE5, false, &[0x03C1, 0x0314]),
    (0x1FE6, false, &[0x03C5, 0x0342]),
    (0x1FE7, false, &[0x03CB, 0x0342]),
    (0x1FE8, false, &[0x03A5, 0x0306]),
    (0x1FE9, false, &[0x03A5, 0x0304]),
    (0x1FEA, false, &[0x03A5, 0x0300]),
    (0x1FEB, false, &[0x038E]),
    (0x1FEC, false, &[0x03A1, 0x0314]),
    (0x1FED, false, &[0x00A8, 0x0300]),
    (0x1FEE, false, &[0x0385]),
    (0x1FEF, false, &[0x0060]),
    (0x1FF2, false, &[0x1F7C, 0x0345]),
    (0x1FF3, false, &[0x03C9, 0x0345]),
    (0x1FF4, false, &[0x03CE, 0x0345]),
    (0x1FF6, false, &[0x03C9, 0x0342]),
    (0x1FF7, false, &[0x1FF6, 0x0345]),
    (0x1FF8, false, &[0x039F, 0x0300]),
    (0x1FF9, false, &[0x038C]),
    (0x1FFA, false, &[0x03A9, 0x0300]),
    (0x1FFB, false, &[0x038F]),
    (0x1FFC, false, &[0x03A9, 0x0345]),
    (0x1FFD, false, &[0x00B4]),
    (0x1FFE, true, &[0x0020, 0x0314]),
    (0x2000, false, &[0x2002]),
    (0x2001, false, &[0x2003]),
    (0x2002, true, &[0x0020]),
    (0x2003, true, &[0x0020]),
    (0x2004, true, &[0x0020]),
    (0x2005, true, &[0x0020]),
    (0x2006, true, &[0x0020]),
    (0x2007, true, &[0x0020]),
    (0x2008, true, &[0x0020]),
    (0x2009, true, &[0x0020]),
    (0x200A, true, &[0x0020]),
    (0x2011, true, &[0x2010]),
    (0x2017, true, &[0x0020, 0x0333]),
    (0x2024, true, &[0x002E]),
    (0x2025, true, &[0x002E, 0x002E]),
    (0x2026, true, &[0x002E, 0x002E, 0x002E]),
    (0x202F, true, &[0x0020]),
    (0x2033, true, &[0x2032, 0x2032]),
    (0x2034, true, &[0x2032, 0x2032, 0x2032]),
    (0x2036, true, &[0x2035, 0x2035]),
    (0x2037, true, &[0x2035, 0x2035, 0x2035]),
    (0x203C, true, &[0x0021, 0x0021]),
    (0x203E, true, &[0x0020, 0x0305]),
    (0x2047, true, &[0x003F, 0x003F]),
    (0x2048, true, &[0x003F, 0x0021]),
    (0x2049, true, &[0x0021, 0x003F]),
    (0x2057, true, &[0x2032, 0x2032, 0x2032, 0x2032]),
    (0x205F, true, &[0x0020]),
    (0x2070, true, &[0x0030]),
    (0x2071, true, &[0x0069]),
    (0x2074, true, &[0x0034]),
    (0x2075, true, &[0x0035]),
    (0x2076, true, &[0x0036]),
    (0x2077, true, &[0x0037]),
    (0x2078, true, &[0x0038]),
    (0x2079, true, &[0x0039]),
    (0x207A, true, &[0x002B]),
    (0x207B, true, &[0x2212]),
    (0x207C, true, &[0x003D]),
    (0x207D, true, &[0x0028]),
    (0x207E, true, &[0x0029]),
    (0x207F, true, &[0x006E]),
    (0x2080, true, &[0x0030]),
    (0x2081, true, &[0x0031]),
    (0x2082, true, &[0x0032]),
    (0x2083, true, &[0x0033]),
    (0x2084, true, &[0x0034]),
    (0x2085, true, &[0x0035]),
    (0x2086, true, &[0x0036]),
    (0x2087, true, &[0x0037]),
    (0x2088, true, &[0x0038]),
    (0x2089, true, &[0x0039]),
    (0x208A, true, &[0x002B]),
    (0x208B, true, &[0x2212]),
    (0x208C, true, &[0x003D]),
    (0x208D, true, &[0x0028]),
    (0x208E, true, &[0x0029]),
    (0x2090, true, &[0x0061]),
    (0x2091, true, &[0x0065]),
    (0x2092, true, &[0x006F]),
    (0x2093, true, &[0x0078]),
    (0x2094, true, &[0x0259]),
    (0x2095, true, &[0x0068]),
    (0x2096, true, &[0x006B]),
    (0x2097, true, &[0x006C]),
    (0x2098, true, &[0x006D]),
    (0x2099, true, &[0x006E]),
    (0x209A, true, &[0x0070]),
    (0x209B, true, &[0x0073]),
    (0x209C, true, &[0x0074]),
    (0x20A8, true, &[0x0052, 0x0073]),
    (0x2100, true, &[0x0061, 0x002F, 0x0063]),
    (0x2101, true, &[0x0061, 0x002F, 0x0073]),
    (0x2102, true, &[0x0043]),
    (0x2103, true, &[0x00B0, 0x0043]),
    (0x2105, true, &[0x0063, 0x002F, 0x006F]),
    (0x2106, true, &[0x0063, 0x002F, 0x0075]),
    (0x2107, true, &[0x0190]),
    (0x2109, true, &[0x00B0, 0x0046]),
    (0x210A, true, &[0x0067]),
    (0x210B, true, &[0x0048]),
    (0x210C, true, &[0x0048]),
    (0x210D, true, &[0x0048]),
    (0x210E, true, &[0x0068]),
    (0x210F, true, &[0x0127]),
    (0x2110, true, &[0x0049]),
    (0x2111, true, &[0x0049]),
    (0x2112, true, &[0x004C]),
    (0x2113, true, &[0x006C]),
    (0x2115, true, &[0x004E]),
    (0x2116, true, &[0x004E, 0x006F]),
    (0x2119, true, &[0x0050]),
    (0x211A, true, &[0x0051]),
    (0x211B, true, &[0x0052]),
    (0x211C, true, &[0x0052]),
    (0x211D, true, &[0x0052]),
    (0x2120, true, &[0x0053, 0x004D]),
    (0x2121, true, &[0x0054, 0x0045, 0x004C]),
    (0x2122, true, &[0x0054, 0x004D]),
    (0x2124, true, &[0x005A]),
    (0x2126, false, &[0x03A9]),
    (0x2128, true, &[0x005A]),
    (0x212A, false, &[0x004B]),
    (0x212B, false, &[0x00C5]),
    (0x212C, true, &[0x0042]),
    (0x212D, true, &[0x0043]),
    (0x212F, true, &[0x0065]),
    (0x2130, true, &[0x0045]),
    (0x2131, true, &[0x0046]),
    (0x2133, true, &[0x004D]),
    (0x2134, true, &[0x006F]),
    (0x2135, true, &[0x05D0]),
    (0x2136, true, &[0x05D1]),
    (0x2137, true, &[0x05D2]),
    (0x2138, true, &[0x05D3]),
    (0x2139, true, &[0x0069]),
    (0x213B, true, &[0x0046, 0x0041, 0x0058]),
    (0x213C, true, &[0x03C0]),
    (0x213D, true, &[0x03B3]),
    (0x213E, true, &[0x0393]),
    (0x213F, true, &[0x03A0]),
    (0x2140, true, &[0x2211]),
    (0x2145, true, &[0x0044]),
    (0x2146, true, &[0x0064]),
    (0x2147, true, &[0x0065]),
    (0x2148, true, &[0x0069]),
    (0x2149, true, &[0x006A]),
    (0x2150, true, &[0x0031, 0x2044, 0x0037]),
    (0x2151, true, &[0x0031, 0x2044, 0x0039]),
    (0x2152, true, &[0x0031, 0x2044, 0x0031, 0x0030]),
    (0x2153, true, &[0x0031, 0x2044, 0x0033]),
    (0x2154, true, &[0x0032, 0x2044, 0x0033]),
    (0x2155, true, &[0x0031, 0x2044, 0x0035]),
    (0x2156, true, &[0x0032, 0x2044, 0x0035]),
    (0x2157, true, &[0x0033, 0x2044, 0x0035]),
    (0x2158, true, &[0x0034, 0x2044, 0x0035]),
    (0x2159, true, &[0x0031, 0x2044, 0x0036]),
    (0x215A, true, &[0x0035, 0x2044, 0x0036]),
    (0x215B, true, &[0x0031, 0x2044, 0x0038]),
    (0x215C, true, &[0x0033, 0x2044, 0x0038]),
    (0x215D, true, &[0x0035, 0x2044, 0x0038]),
    (0x215E, true, &[0x0037, 0x2044, 0x0038]),
    (0x215F, true, &[0x0031, 0x2044]),
    (0x2160, true, &[0x0049]),
    (0x2161, true, &[0x0049, 0x0049]),
    (0x2162, true, &[0x0049, 0x0049, 0x0049]),
    (0x2163, true, &[0x0049, 0x0056]),
    (0x2164, true, &[0x0056]),
    (0x2165, true, &[0x0056, 0x0049]),
    (0x2166, true, &[0x0056, 0x0049, 0x0049]),
    (0x2167, true, &[0x0056, 0x0049, 0x0049, 0x0049]),
    (0x2168, true, &[0x0049, 0x0058]),
    (0x2169, true, &[0x0058]),
    (0x216A, true, &[0x0058, 0x0049]),
    (0x216B, true, &[0x0058, 0x0049, 0x0049]),
    (0x216C, true, &[0x004C]),
    (0x216D, true, &[0x0043]),
    (0x216E, true, &[0x0044]),
    (0x216F, true, &[0x004D]),
    (0x2170, true, &[0x0069]),
    (0x2171, true, &[0x0069, 0x0069]),
    (0x2172, true, &[0x0069, 0x0069, 0x0069]),
    (0x2173, true, &[0x0069, 0x0076]),
    (0x2174, true, &[0x0076]),
    (0x2175, true, &[0x0076, 0x0069]),
    (0x2176, true, &[0x0076, 0x0069, 0x0069]),
    (0x2177, true, &[0x0076, 0x0069, 0x0069, 0x0069]),
    (0x2178, true, &[0x0069, 0x0078]),
    (0x2179, true, &[0x0078]),
    (0x217A, true, &[0x0078, 0x0069]),
    (0x217B, true, &[0x0078, 0x0069, 0x0069]),
    (0x217C, true, &[0x006C]),
    (0x217D, true, &[0x0063]),
    (0x217E, true, &[0x0064]),
    (0x217F, true, &[0x006D]),
    (0x2189, true, &[0x0030, 0x2044, 0x0033]),
    (0x219A, false, &[0x2190, 0x0338]),
    (0x219B, false, &[0x2192, 0x0338]),
    (0x21AE, false, &[0x2194, 0x0338]),
    (0x21CD, false, &[0x21D0, 0x0338]),
    (0x21CE, false, &[0x21D4, 0x0338]),
    (0x21CF, false, &[0x21D2, 0x0338]),
    (0x2204, false, &[0x2203, 0x0338]),
    (0x2209, false, &[0x2208, 0x0338]),
    (0x220C, false, &[0x220B, 0x0338]),
    (0x2224, false, &[0x2223, 0x0338]),
    (0x2226, false, &[0x2225, 0x0338]),
    (0x222C, true, &[0x222B, 0x222B]),
    (0x222D, true, &[0x222B, 0x222B, 0x222B]),
    (0x222F, true, &[0x222E, 0x222E]),
    (0x2230, true, &[0x222E, 0x222E, 0x222E]),
    (0x2241, false, &[0x223C, 0x0338]),
    (0x2244, false, &[0x2243, 0x0338]),
    (0x2247, false, &[0x2245, 0x0338]),
    (0x2249, false, &[0x2248, 0x0338]),
    (0x2260, false, &[0x003D, 0x0338]),
    (0x2262, false, &[0x2261, 0x0338]),
    (0x226D, false, &[0x224D, 0x0338]),
    (0x226E, false, &[0x003C, 0x0338]),
    (0x226F, false, &[0x003E, 0x0338]),
    (0x2270, false, &[0x2264, 0x0338]),
    (0x2271, false, &[0x2265, 0x0338]),
    (0x2274, false, &[0x2272, 0x0338]),
    (0x2275, false, &[0x2273, 0x0338]),
    (0x2278, false, &[0x2276, 0x0338]),
    (0x2279, false, &[0x2277, 0x0338]),
    (0x2280, false, &[0x227A, 0x0338]),
    (0x2281, false, &[0x227B, 0x0338]),
    (0x2284, false, &[0x2282, 0x0338]),
    (0x2285, false, &[0x2283, 0x0338]),
    (0x2288, false, &[0x2286, 0x0338]),
    (0x2289, false, &[0x2287, 0x0338]),
    (0x22AC, false, &[0x22A2, 0x0338]),
    (0x22AD, false, &[0x22A8, 0x0338]),
    (0x22AE, false, &[0x22A9, 0x0338]),
    (0x22AF, false, &[0x22AB, 0x0338]),
    (0x22E0, false, &[0x227C, 0x0338]),
    (0x22E1, false, &[0x227D, 0x0338]),
    (0x22E2, false, &[0x2291, 0x0338]),
    (0x22E3, false, &[0x2292, 0x0338]),
    (0x22EA, false, &[0x22B2, 0x0338]),
    (0x22EB, false, &[0x22B3, 0x0338]),
    (0x22EC, false, &[0x22B4, 0x0338]),
    (0x22ED, false, &[0x22B5, 0x0338]),
    (0x2329, false, &[0x3008]),
    (0x232A, false, &[0x3009]),
    (0x2460, true, &[0x0031]),
    (0x2461, true, &[0x0032]),
    (0x2462, true, &[0x0033]),
    (0x2463, true, &[0x0034]),
    (0x2464, true, &[0x0035]),
    (0x2465, true, &[0x0036]),
    (0x2466, true, &[0x0037]),
    (0x2467, true, &[0x0038]),
    (0x2468, true, &[0x0039]),
    (0x2469, true, &[0x0031, 0x0030]),
    (0x246A, true, &[0x0031, 0x0031]),
    (0x246B, true, &[0x0031, 0x0032]),
    (0x246C, true, &[0x0031, 0x0033]),
    (0x246D, true, &[0x0031, 0x0034]),
    (0x246E, true, &[0x0031, 0x0035]),
    (0x246F, true, &[0x0031, 0x0036]),
    (0x2470, true, &[0x0031, 0x0037]),
    (0x2471, true, &[0x0031, 0x0038]),
    (0x2472, true, &[0x0031, 0x0039]),
    (0x2473, true, &[0x0032, 0x0030]),
    (0x2474, true, &[0x0028, 0x0031, 0x0029]),
    (0x2475, true, &[0x0028, 0x0032, 0x0029]),
    (0x2476, true, &[0x0028, 0x0033, 0x0029]),
    (0x2477, true, &[0x0028, 0x0034, 0x0029]),
    (0x2478, true, &[0x0028, 0x0035, 0x0029]),
    (0x2479, true, &[0x0028, 0x0036, 0x0029]),
    (0x247A, true, &[0x0028, 0x0037, 0x0029]),
    (0x247B, true, &[0x0028, 0x0038, 0x0029]),
    (0x247C, true, &[0x0028, 0x0039, 0x0029]),
    (0x247D, true, &[0x0028, 0x0031, 0x0030, 0x0029]),
    (0x247E, true, &[0x0028, 0x0031, 0x0031, 0x0029]),
    (0x247F, true, &[0x0028, 0x0031, 0x0032, 0x0029]),
    (0x2480, true, &[0x0028, 0x0031, 0x0033, 0x0029]),
    (0x2481, true, &[0x0028, 0x0031, 0x0034, 0x0029]),
    (0x2482, true, &[0x0028, 0x0031, 0x0035, 0x0029]),
    (0x2483, true, &[0x0028, 0x0031, 0x0036, 0x0029]),
    (0x2484, true, &[0x0028, 0x0031, 0x0037, 0x0029]),
    (0x2485, true, &[0x0028, 0x0031, 0x0038, 0x0029]),
    (0x2486, true, &[0x0028, 0x0031, 0x0039, 0x0029]),
    (0x2487, true, &[0x0028, 0x0032, 0x0030, 0x0029]),
    (0x2488, true, &[0x0031, 0x002E]),
    (0x2489, true, &[0x0032, 0x002E]),
    (0x248A, true, &[0x0033, 0x002E]),
    (0x248B, true, &[0x0034, 0x002E]),
    (0x248C, true, &[0x0035, 0x002E]),
    (0x248D, true, &[0x0036, 0x002E]),
    (0x248E, true, &[0x0037, 0x002E]),
    (0x248F, true, &[0x0038, 0x002E]),
    (0x2490, true, &[0x0039, 0x002E]),
    (0x2491, true, &[0x0031, 0x0030, 0x002E]),
    (0x2492, true, &[0x0031, 0x0031, 0x002E]),
    (0x2493, true, &[0x0031, 0x0032, 0x002E]),
    (0x2494, true, &[0x0031, 0x0033, 0x002E]),
    (0x2495, true, &[0x0031, 0x0034, 0x002E]),
    (0x2496, true, &[0x0031, 0x0035, 0x002E]),
    (0x2497, true, &[0x0031, 0x0036, 0x002E]),
    (0x2498, true, &[0x0031, 0x0037, 0x002E]),
    (0x2499, true, &[0x0031, 0x0038, 0x002E]),
    (0x249A, true, &[0x0031, 0x0039, 0x002E]),
    (0x249B, true, &[0x0032, 0x0030, 0x002E]),
    (0x249C, true, &[0x0028, 0x0061, 0x0029]),
    (0x249D, true, &[0x0028, 0x0062, 0x0029]),
    (0x249E, true, &[0x0028, 0x0063, 0x0029]),
    (0x249F, true, &[0x0028, 0x0064, 0x0029]),
    (0x24A0, true, &[0x0028, 0x0065, 0x0029]),
    (0x24A1, true, &[0x0028, 0x0066, 0x0029]),
    (0x24A2, true, &[0x0028, 0x0067, 0x0029]),
    (0x24A3, true, &[0x0028, 0x0068, 0x0029]),
    (0x24A4, true, &[0x0028, 0x0069, 0x0029]),
    (0x24A5, true, &[0x0028, 0x006A, 0x0029]),
    (0x24A6, true, &[0x0028, 0x006B, 0x0029]),
    (0x24A7, true, &[0x0028, 0x006C, 0x0029]),
    (0x24A8, true, &[0x0028, 0x006D, 0x0029]),
    (0x24A9, true, &[0x0028, 0x006E, 0x0029]),
    (0x24AA, true, &[0x0028, 0x006F, 0x0029]),
    (0x24AB, true, &[0x0028, 0x0070, 0x0029]),
    (0x24AC, true, &[0x0028, 0x0071, 0x0029]),
    (0x24AD, true, &[0x0028, 0x0072, 0x0029]),
    (0x24AE, true, &[0x0028, 0x0073, 0x0029]),
    (0x24AF, true, &[0x0028, 0x0074, 0x0029]),
    (0x24B0, true, &[0x0028, 0x0075, 0x0029]),
    (0x24B1, true, &[0x0028, 0x0076, 0x0029]),
    (0x24B2, true, &[0x0028, 0x0077, 0x0029]),
    (0x24B3, true, &[0x0028, 0x0078, 0x0029]),
    (0x24B4, true, &[0x0028, 0x0079, 0x0029]),
    (0x24B5, true, &[0x0028, 0x007A, 0x0029]),
    (0x24B6, true, &[0x0041]),
    (0x24B7, true, &[0x0042]),
    (0x24B8, true, &[0x0043]),
    (0x24B9, true, &[0x0044]),
    (0x24BA, true, &[0x0045]),
    (0x24BB, true, &[0x0046]),
    (0x24BC, true, &[0x0047]),
    (0x24BD, true, &[0x0048]),
    (0x24BE, true, &[0x0049]),
    (0x24BF, true, &[0x004A]),
    (0x24C0, true, &[0x004B]),
    (0x24C1, true, &[0x004C]),
    (0x24C2, true, &[0x004D]),
    (0x24C3, true, &[0x004E]),
    (0x24C4, true, &[0x004F]),
    (0x24C5, true, &[0x0050]),
    (0x24C6, true, &[0x0051]),
    (0x24C7, true, &[0x0052]),
    (0x24C8, true, &[0x0053]),
    (0x24C9, true, &[0x0054]),
    (0x24CA, true, &[0x0055]),
    (0x24CB, true, &[0x0056]),
    (0x24CC, true, &[0x0057]),
    (0x24CD, true, &[0x0058]),
    (0x24CE, true, &[0x0059]),
    (0x24CF, true, &[0x005A]),
    (0x24D0, true, &[0x0061]),
    (0x24D1, true, &[0x0062]),
    (0x24D2, true, &[0x0063]),
    (0x24D3, true, &[0x0064]),
    (0x24D4, true, &[0x0065]),
    (0x24D5, true, &[0x0066]),
    (0x24D6, true, &[0x0067]),
    (0x24D7, true, &[0x0068]),
    (0x24D8, true, &[0x0069]),
    (0x24D9, true, &[0x006A]),
    (0x24DA, true, &[0x006B]),
    (0x24DB, true, &[0x006C]),
    (0x24DC, true, &[0x006D]),
    (0x24DD, true, &[0x006E]),
    (0x24DE, true, &[0x006F]),
    (0x24DF, true, &[0x0070]),
    (0x24E0, true, &[0x0071]),
    (0x24E1, true, &[0x0072]),
    (0x24E2, true, &[0x0073]),
    (0x24E3, true, &[0x0074]),
    (0x24E4, true, &[0x0075]),
    (0x24E5, true, &[0x0076]),
    (0x24E6, true, &[0x0077]),
    (0x24E7, true, &[0x0078]),
    (0x24E8, true, &[0x0079]),
    (0x24E9, true, &[0x007A]),
    (0x24EA, true, &[0x0030]),
    (0x2A0C, true, &[0x222B, 0x222B, 0x222B, 0x222B]),
    (0x2A74, true, &[0x003A, 0x003A, 0x003D]),
    (0x2A75, true, &[0x003D, 0x003D]),
    (0x2A76, true, &[0x003D, 0x003D, 0x003D]),
    (0x2ADC, false, &[0x2ADD, 0x0338]),
    (0x2C7C, true, &[0x006A]),
    (0x2C7D, true, &[0x0056]),
    (0x2D6F, true, &[0x2D61]),
    (0x2E9F, true, &[0x6BCD]),
    (0x2EF3, true, &[0x9F9F]),
    (0x2F00, true, &[0x4E00]),
    (0x2F01, true, &[0x4E28]),
    (0x2F02, true, &[0x4E36]),
    (0x2F03, true, &[0x4E3F]),
    (0x2F04, true, &[0x4E59]),
    (0x2F05, true, &[0x4E85]),
    (0x2F06, true, &[0x4E8C]),
    (0x2F07, true, &[0x4EA0]),
    (0x2F08, true, &[0x4EBA]),
    (0x2F09, true, &[0x513F]),
    (0x2F0A, true, &[0x5165]),
    (0x2F0B, true, &[0x516B]),
    (0x2F0C, true, &[0x5182]),
    (0x2F0D, true, &[0x5196]),
    (0x2F0E, true, &[0x51AB]),
    (0x2F0F, true, &[0x51E0]),
    (0x2F10, true, &[0x51F5]),
    (0x2F11, true, &[0x5200]),
    (0x2F12, true, &[0x529B]),
    (0x2F13, true, &[0x52F9]),
    (0x2F14, true, &[0x5315]),
    (0x2F15, true, &[0x531A]),
    (0x2F16, true, &[0x5338]),
    (0x2F17, true, &[0x5341]),
    (0x2F18, true, &[0x535C]),
    (0x2F19, true, &[0x5369]),
    (0x2F1A, true, &[0x5382]),
    (0x2F1B, true, &[0x53B6]),
    (0x2F1C, true, &[0x53C8]),
    (0x2F1D, true, &[0x53E3]),
    (0x2F1E, true, &[0x56D7]),
    (0x2F1F, true, &[0x571F]),
    (0x2F20, true, &[0x58EB]),
    (0x2F21, true, &[0x5902]),
    (0x2F22, true, &[0x590A]),
    (0x2F23, true, &[0x5915]),
    (0x2F24, true, &[0x5927]),
    (0x2F25, true, &[0x5973]),
    (0x2F26, true, &[0x5B50]),
    (0x2F27, true, &[0x5B80]),
    (0x2F28, true, &[0x5BF8]),
    (0x2F29, true, &[0x5C0F]),
    (0x2F2A, true, &[0x5C22]),
    (0x2F2B, true, &[0x5C38]),
    (0x2F2C, true, &[0x5C6E]),
    (0x2F2D, true, &[0x5C71]),
    (0x2F2E, true, &[0x5DDB]),
    (0x2F2F, true, &[0x5DE5]),
    (0x2F30, true, &[0x5DF1]),
    (0x2F31, true, &[0x5DFE]),
    (0x2F32, true, &[0x5E72]),
    (0x2F33, true, &[0x5E7A]),
    (0x2F34, true, &[0x5E7F]),
    (0x2F35, true, &[0x5EF4]),
    (0x2F36, true, &[0x5EFE]),
    (0x2F37, true, &[0x5F0B]),
    (0x2F38, true, &[0x5F13]),
    (0x2F39, true, &[0x5F50]),
    (0x2F3A, true, &[0x5F61]),
    (0x2F3B, true, &[0x5F73]),
    (0x2F3C, true, &[0x5FC3]),
    (0x2F3D, true, &[0x6208]),
    (0x2F3E, true, &[0x6236]),
    (0x2F3F, true, &[0x624B]),
    (0x2F40, true, &[0x652F]),
    (0x2F41, true, &[0x6534]),
    (0x2F42, true, &[0x6587]),
    (0x2F43, true, &[0x6597]),
    (0x2F44, true, &[0x65A4]),
    (0x2F45, true, &[0x65B9]),
    (0x2F46, true, &[0x65E0]),
    (0x2F47, true, &[0x65E5]),
    (0x2F48, true, &[0x66F0]),
    (0x2F49, true, &[0x6708]),
    (0x2F4A, true, &[0x6728]),
    (0x2F4B, true, &[0x6B20]),
    (0x2F4C, true, &[0x6B62]),
    (0x2F4D, true, &[0x6B79]),
    (0x2F4E, true, &[0x6BB3]),
    (0x2F4F, true, &[0x6BCB]),
    (0x2F50, true, &[0x6BD4]),
    (0x2F51, true, &[0x6BDB]),
    (0x2F52, true, &[0x6C0F]),
    (0x2F53, true, &[0x6C14]),
    (0x2F54, true, &[0x6C34]),
    (0x2F55, true, &[0x706B]),
    (0x2F56, true, &[0x722A]),
    (0x2F57, true, &[0x7236]),
    (0x2F58, true, &[0x723B]),
    (0x2F59, true, &[0x723F]),
    (0x2F5A, true, &[0x7247]),
    (0x2F5B, true, &[0x7259]),
    (0x2F5C, true, &[0x725B]),
    (0x2F5D, true, &[0x72AC]),
    (0x2F5E, true, &[0x7384]),
    (0x2F5F, true, &[0x7389]),
    (0x2F60, true, &[0x74DC]),
    (0x2F61, true, &[0x74E6]),
    (0x2F62, true, &[0x7518]),
    (0x2F63, true, &[0x751F]),
    (0x2F64, true, &[0x7528]),
    (0x2F65, true, &[0x7530]),
    (0x2F66, true, &[0x758B]),
    (0x2F67, true, &[0x7592]),
    (0x2F68, true, &[0x7676]),
    (0x2F69, true, &[0x767D]),
    (0x2F6A, true, &[0x76AE]),
    (0x2F6B, true, &[0x76BF]),
    (0x2F6C, true, &[0x76EE]),
    (0x2F6D, true, &[0x77DB]),
    (0x2F6E, true, &[0x77E2]),
    (0x2F6F, true, &[0x77F3]),
    (0x2F70, true, &[0x793A]),
    (0x2F71, true, &[0x79B8]),
    (0x2F72, true, &[0x79BE]),
    (0x2F73, true, &[0x7A74]),
    (0x2F74, true, &[0x7ACB]),
    (0x2F75, true, &[0x7AF9]),
    (0x2F76, true, &[0x7C73]),
    (0x2F77, true, &[0x7CF8]),
    (0x2F78, true, &[0x7F36]),
    (0x2F79, true, &[0x7F51]),
    (0x2F7A, true, &[0x7F8A]),
    (0x2F7B, true, &[0x7FBD]),
    (0x2F7C, true, &[0x8001]),
    (0x2F7D, true, &[0x800C]),
    (0x2F7E, true, &[0x8012]),
    (0x2F7F, true, &[0x8033]),
    (0x2F80, true, &[0x807F]),
    (0x2F81, true, &[0x8089]),
    (0x2F82, true, &[0x81E3]),
    (0x2F83, true, &[0x81EA]),
    (0x2F84, true, &[0x81F3]),
    (0x2F85, true, &[0x81FC]),
    (0x2F86, true, &[0x820C]),
    (0x2F87, true, &[0x821B]),
    (0x2F88, true, &[0x821F]),
    (0x2F89, true, &[0x826E]),
    (0x2F8A, true, &[0x8272]),
    (0x2F8B, true, &[0x8278]),
    (0x2F8C, true, &[0x864D]),
    (0x2F8D, true, &[0x866B]),
    (0x2F8E, true, &[0x8840]),
    (0x2F8F, true, &[0x884C]),
    (0x2F90, true, &[0x8863]),
    (0x2F91, true, &[0x897E]),
    (0x2F92, true, &[0x898B]),
    (0x2F93, true, &[0x89D2]),
    (0x2F94, true, &[0x8A00]),
    (0x2F95, true, &[0x8C37]),
    (0x2F96, true, &[0x8C46]),
    (0x2F97, true, &[0x8C55]),
    (0x2F98, true, &[0x8C78]),
    (0x2F99, true, &[0x8C9D]),
    (0x2F9A, true, &[0x8D64]),
    (0x2F9B, true, &[0x8D70]),
    (0x2F9C, true, &[0x8DB3]),
    (0x2F9D, true, &[0x8EAB]),
    (0x2F9E, true, &[0x8ECA]),
    (0x2F9F, true, &[0x8F9B]),
    (0x2FA0, true, &[0x8FB0]),
    (0x2FA1, true, &[0x8FB5]),
    (0x2FA2, true, &[0x9091]),
    (0x2FA3, true, &[0x9149]),
    (0x2FA4, true, &[0x91C6]),
    (0x2FA5, true, &[0x91CC]),
    (0x2FA6, true, &[0x91D1]),
    (0x2FA7, true, &[0x9577]),
    (0x2FA8, true, &[0x9580]),
    (0x2FA9, true, &[0x961C]),
    (0x2FAA, true, &[0x96B6]),
    (0x2FAB, true, &[0x96B9]),
    (0x2FAC, true, &[0x96E8]),
    (0x2FAD, true, &[0x9751]),
    (0x2FAE, true, &[0x975E]),
    (0x2FAF, true, &[0x9762]),
    (0x2FB0, true, &[0x9769]),
    (0x2FB1, true, &[0x97CB]),
    (0x2FB2, true, &[0x97ED]),
    (0x2FB3, true, &[0x97F3]),
    (0x2FB4, true, &[0x9801]),
    (0x2FB5, true, &[0x98A8]),
    (0x2FB6, true, &[0x98DB]),
    (0x2FB7, true, &[0x98DF]),
    (0x2FB8, true, &[0x9996]),
    (0x2FB9, true, &[0x9999]),
    (0x2FBA, true, &[0x99AC]),
    (0x2FBB, true, &[0x9AA8]),
    (0x2FBC, true, &[0x9AD8]),
    (0x2FBD, true, &[0x9ADF]),
    (0x2FBE, true, &[0x9B25]),
    (0x2FBF, true, &[0x9B2F]),
    (0x2FC0, true, &[0x9B32]),
    (0x2FC1, true, &[0x9B3C]),
    (0x2FC2, true, &[0x9B5A]),
    (0x2FC3, true, &[0x9CE5]),
    (0x2FC4, true, &[0x9E75]),
    (0x2FC5, true, &[0x9E7F]),
    (0x2FC6, true, &[0x9EA5]),
    (0x2FC7, true, &[0x9EBB]),
    (0x2FC8, true, &[0x9EC3]),
    (0x2FC9, true, &[0x9ECD]),
    (0x2FCA, true, &[0x9ED1]),
    (0x2FCB, true, &[0x9EF9]),
    (0x2FCC, true, &[0x9EFD]),
    (0x2FCD, true, &[0x9F0E]),
    (0x2FCE, true, &[0x9F13]),
    (0x2FCF, true, &[0x9F20]),
    (0x2FD0, true, &[0x9F3B]),
    (0x2FD1, true, &[0x9F4A]),
    (0x2FD2, true, &[0x9F52]),
    (0x2FD3, true, &[0x9F8D]),
    (0x2FD4, true, &[0x9F9C]),
    (0x2FD5, true, &[0x9FA0]),
    (0x3000, true, &[0x0020]),
    (0x3036, true, &[0x3012]),
    (0x3038, true, &[0x5341]),
    (0x3039, true, &[0x5344]),
    (0x303A, true, &[0x5345]),
    (0x304C, false, &[0x304B, 0x3099]),
    (0x304E, false, &[0x304D, 0x3099]),
    (0x3050, false, &[0x304F, 0x3099]),
    (0x3052, false, &[0x3051, 0x3099]),
    (0x3054, false, &[0x3053, 0x3099]),
    (0x3056, false, &[0x3055, 0x3099]),
    (0x3058, false, &[0x3057, 0x3099]),
    (0x305A, false, &[0x3059, 0x3099]),
    (0x305C, false, &[0x305B, 0x3099]),
    (0x305E, false, &[0x305D, 0x3099]),
    (0x3060, false, &[0x305F, 0x3099]),
    (0x3062, false, &[0x3061, 0x3099]),
    (0x3065, false, &[0x3064, 0x3099]),
    (0x3067, false, &[0x3066, 0x3099]),
    (0x3069, false, &[0x3068, 0x3099]),
    (0x3070, false, &[0x306F, 0x3099]),
    (0x3071, false, &[0x306F, 0x309A]),
    (0x3073, false, &[0x3072, 0x3099]),
    (0x3074, false, &[0x3072, 0x309A]),
    (0x3076, false, &[0x3075, 0x3099]),
    (0x3077, false, &[0x3075, 0x309A]),
    (0x3079, false, &[0x3078, 0x3099]),
    (0x307A, false, &[0x3078, 0x309A]),
    (0x307C, false, &[0x307B, 0x3099]),
    (0x307D, false, &[0x307B, 0x309A]),
    (0x3094, false, &[0x3046, 0x3099]),
    (0x309B, true, &[0x0020, 0x3099]),
    (0x309C, true, &[0x0020, 0x309A]),
    (0x309E, false, &[0x309D, 0x3099]),
    (0x309F, true, &[0x3088, 0x308A]),
    (0x30AC, false, &[0x30AB, 0x3099]),
    (0x30AE, false, &[0x30AD, 0x3099]),
    (0x30B0, false, &[0x30AF, 0x3099]),
    (0x30B2, false, &[0x30B1, 0x3099]),
    (0x30B4, false, &[0x30B3, 0x3099]),
    (0x30B6, false, &[0x30B5, 0x3099]),
    (0x30B8, false, &[0x30B7, 0x3099]),
    (0x30BA, false, &[0x30B9, 0x3099]),
    (0x30BC, false, &[0x30BB, 0x3099]),
    (0x30BE, false, &[0x30BD, 0x3099]),
    (0x30C0, false, &[0x30BF, 0x3099]),
    (0x30C2, false, &[0x30C1, 0x3099]),
    (0x30C5, false, &[0x30C4, 0x3099]),
    (0x30C7, false, &[0x30C6, 0x3099]),
    (0x30C9, false, &[0x30C8, 0x3099]),
    (0x30D0, false, &[0x30CF, 0x3099]),
    (0x30D1, false, &[0x30CF, 0x309A]),
    (0x30D3, false, &[0x30D2, 0x3099]),
    (0x30D4, false, &[0x30D2, 0x309A]),
    (0x30D6, false, &[0x30D5, 0x3099]),
    (0x30D7, false, &[0x30D5, 0x309A]),
    (0x30D9, false, &[0x30D8, 0x3099]),
    (0x30DA, false, &[0x30D8, 0x309A]),
    (0x30DC, false, &[0x30DB, 0x3099]),
    (0x30DD, false, &[0x30DB, 0x309A]),
    (0x30F4, false, &[0x30A6, 0x3099]),
    (0x30F7, false, &[0x30EF, 0x3099]),
    (0x30F8, false, &[0x30F0, 0x3099]),
    (0x30F9, false, &[0x30F1, 0x3099]),
    (0x30FA, false, &[0x30F2, 0x3099]),
    (0x30FE, false, &[0x30FD, 0x3099]),
    (0x30FF, true, &[0x30B3, 0x30C8]),
    (0x3131, true, &[0x1100]),
    (0x3132, true, &[0x1101]),
    (0x3133, true, &[0x11AA]),
    (0x3134, true, &[0x1102]),
    (0x3135, true, &[0x11AC]),
    (0x3136, true, &[0x11AD]),
    (0x3137, true, &[0x1103]),
    (0x3138, true, &[0x1104]),
    (0x3139, true, &[0x1105]),
    (0x313A, true, &[0x11B0]),
    (0x313B, true, &[0x11B1]),
    (0x313C, true, &[0x11B2]),
    (0x313D, true, &[0x11B3]),
    (0x313E, true, &[0x11B4]),
    (0x313F, true, &[0x11B5]),
    (0x3140, true, &[0x111A]),
    (0x3141, true, &[0x1106]),
    (0x3142, true, &[0x1107]),
    (0x3143, true, &[0x1108]),
    (0x3144, true, &[0x1121]),
    (0x3145, true, &[0x1109]),
    (0x3146, true, &[0x110A]),
    (0x3147, true, &[0x110B]),
    (0x3148, true, &[0x110C]),
    (0x3149, true, &[0x110D]),
    (0x314A, true, &[0x110E]),
    (0x314B, true, &[0x110F]),
    (0x314C, true, &[0x1110]),
    (0x314D, true, &[0x1111]),
    (0x314E, true, &[0x1112]),
    (0x314F, true, &[0x1161]),
    (0x3150, true, &[0x1162]),
    (0x3151, true, &[0x1163]),
    (0x3152, true, &[0x1164]),
    (0x3153, true, &[0x1165]),
    (0x3154, true, &[0x1166]),
    (0x3155, true, &[0x1167]),
    (0x3156, true, &[0x1168]),
    (0x3157, true, &[0x1169]),
    (0x3158, true, &[0x116A]),
    (0x3159, true, &[0x116B]),
    (0x315A, true, &[0x116C]),
    (0x315B, true, &[0x116D]),
    (0x315C, true, &[0x116E]),
    (0x315D, true, &[0x116F]),
    (0x315E, true, &[0x1170]),
    (0x315F, true, &[0x1171]),
    (0x3160, true, &[0x1172]),
    (0x3161, true, &[0x1173]),
    (0x3162, true, &[0x1174]),
    (0x3163, true, &[0x1175]),
    (0x3164, true, &[0x1160]),
    (0x3165, true, &[0x1114]),
    (0x3166, true, &[0x1115]),
    (0x3167, true, &[0x11C7]),
    (0x3168, true, &[0x11C8]),
    (0x3169, true, &[0x11CC]),
    (0x316A, true, &[0x11CE]),
    (0x316B, true, &[0x11D3]),
    (0x316C, true, &[0x11D7]),
    (0x316D, true, &[0x11D9]),
    (0x316E, true, &[0x111C]),
    (0x316F, true, &[0x11DD]),
    (0x3170, true, &[0x11DF]),
    (0x3171, true, &[0x111D]),
    (0x3172, true, &[0x111E]),
    (0x3173, true, &[0x1120]),
    (0x3174, true, &[0x1122]),
    (0x3175, true, &[0x1123]),
    (0x3176, true, &[0x1127]),
    (0x3177, true, &[0x1129]),
    (0x3178, true, &[0x112B]),
    (0x3179, true, &[0x112C]),
    (0x317A, true, &[0x112D]),
    (0x317B, true, &[0x112E]),
    (0x317C, true, &[0x112F]),
    (0x317D, true, &[0x1132]),
    (0x317E, true, &[0x1136]),
    (0x317F, true, &[0x1140]),
    (0x3180, true, &[0x1147]),
    (0x3181, true, &[0x114C]),
    (0x3182, true, &[0x11F1]),
    (0x3183, true, &[0x11F2]),
    (0x3184, true, &[0x1157]),
    (0x3185, true, &[0x1158]),
    (0x3186, true, &[0x1159]),
    (0x3187, true, &[0x1184]),
    (0x3188, true, &[0x1185]),
    (0x3189, true, &[0x1188]),
    (0x318A, true, &[0x1191]),
    (0x318B, true, &[0x1192]),
    (0x318C, true, &[0x1194]),
    (0x318D, true, &[0x119E]),
    (0x318E, true, &[0x11A1]),
    (0x3192, true, &[0x4E00]),
    (0x3193, true, &[0x4E8C]),
    (0x3194, true, &[0x4E09]),
    (0x3195, true, &[0x56DB]),
    (0x3196, true, &[0x4E0A]),
    (0x3197, true, &[0x4E2D]),
    (0x3198, true, &[0x4E0B]),
    (0x3199, true, &[0x7532]),
    (0x319A, true, &[0x4E59]),
    (0x319B, true, &[0x4E19]),
    (0x319C, true, &[0x4E01]),
    (0x319D, true, &[0x5929]),
    (0x319E, true, &[0x5730]),
    (0x319F, true, &[0x4EBA]),
    (0x3200, true, &[0x0028, 0x1100, 0x0029]),
    (0x3201, true, &[0x0028, 0x1102, 0x0029]),
    (0x3202, true, &[0x0028, 0x1103, 0x0029]),
    (0x3203, true, &[0x0028, 0x1105, 0x0029]),
    (0x3204, true, &[0x0028, 0x1106, 0x0029]),
    (0x3205, true, &[0x0028, 0x1107, 0x0029]),
    (0x3206, true, &[0x0028, 0x1109, 0x0029]),
    (0x3207, true, &[0x0028, 0x110B, 0x0029]),
    (0x3208, true, &[0x0028, 0x110C, 0x0029]),
    (0x3209, true, &[0x0028, 0x110E, 0x0029]),
    (0x320A, true, &[0x0028, 0x110F, 0x0029]),
    (0x320B, true, &[0x0028, 0x1110, 0x0029]),
    (0x320C, true, &[0x0028, 0x1111, 0x0029]),
    (0x320D, true, &[0x0028, 0x1112, 0x0029]),
    (0x320E, true, &[0x0028, 0x1100, 0x1161, 0x0029]),
    (0x320F, true, &[0x0028, 0x1102, 0x1161, 0x0029]),
    (0x3210, true, &[0x0028, 0x1103, 0x1161, 0x0029]),
    (0x3211, true, &[0x0028, 0x1105, 0x1161, 0x0029]),
    (0x3212, true, &[0x0028, 0x1106, 0x1161, 0x0029]),
    (0x3213, true, &[0x0028, 0x1107, 0x1161, 0x0029]),
    (0x3214, true, &[0x0028, 0x1109, 0x1161, 0x0029]),
    (0x3215, true, &[0x0028, 0x110B, 0x1161, 0x0029]),
    (0x3216, true, &[0x0028, 0x110C, 0x1161, 0x0029]),
    (0x3217, true, &[0x0028, 0x110E, 0x1161, 0x0029]),
    (0x3218, true, &[0x0028, 0x110F, 0x1161, 0x0029]),
    (0x3219, true, &[0x0028, 0x1110, 0x1161, 0x0029]),
    (0x321A, true, &[0x0028, 0x1111, 0x1161, 0x0029]),
    (0x321B, true, &[0x0028, 0x1112, 0x1161, 0x0029]),
    (0x321C, true, &[0x0028, 0x110C, 0x116E, 0x0029]),
    (0x321D, true, &[0x0028, 0x110B, 0x1169, 0x110C, 0x1165, 0x11AB, 0x0029]),
    (0x321E, true, &[0x0028, 0x110B, 0x1169, 0x1112, 0x116E, 0x0029]),
    (0x3220, true, &[0x0028, 0x4E00, 0x0029]),
    (0x3221, true, &[0x0028, 0x4E8C, 0x0029]),
    (0x3222, true, &[0x0028, 0x4E09, 0x0029]),
    (0x3223, true, &[0x0028, 0x56DB, 0x0029]),
    (0x3224, true, &[0x0028, 0x4E94, 0x0029]),
    (0x3225, true, &[0x0028, 0x516D, 0x0029]),
    (0x3226, true, &[0x0028, 0x4E03, 0x0029]),
    (0x3227, true, &[0x0028, 0x516B, 0x0029]),
    (0x3228, true, &[0x0028, 0x4E5D, 0x0029]),
    (0x3229, true, &[0x0028, 0x5341, 0x0029]),
    (0x322A, true, &[0x0028, 0x6708, 0x0029]),
    (0x322B, true, &[0x0028, 0x706B, 0x0029]),
    (0x322C, true, &[0x0028, 0x6C34, 0x0029]),
    (0x322D, true, &[0x0028, 0x6728, 0x0029]),
    (0x322E, true, &[0x0028, 0x91D1, 0x0029]),
    (0x322F, true, &[0x0028, 0x571F, 0x0029]),
    (0x3230, true, &[0x0028, 0x65E5, 0x0029]),
    (0x3231, true, &[0x0028, 0x682A, 0x0029]),
    (0x3232, true, &[0x0028, 0x6709, 0x0029]),
    (0x3233, true, &[0x0028, 0x793E, 0x0029]),
    (0x3234, true, &[0x0028, 0x540D, 0x0029]),
    (0x3235, true, &[0x0028, 0x7279, 0x0029]),
    (0x3236, true, &[0x0028, 0x8CA1, 0x0029]),
    (0x3237, true, &[0x0028, 0x795D, 0x0029]),
    (0x3238, true, &[0x0028, 0x52B4, 0x0029]),
    (0x3239, true, &[0x0028, 0x4EE3, 0x0029]),
    (0x323A, true, &[0x0028, 0x547C, 0x0029]),
    (0x323B, true, &[0x0028, 0x5B66, 0x0029]),
    (0x323C, true, &[0x0028, 0x76E3, 0x0029]),
    (0x323D, true, &[0x0028, 0x4F01, 0x0029]),
    (0x323E, true, &[0x0028, 0x8CC7, 0x0029]),
    (0x323F, true, &[0x0028, 0x5354, 0x0029]),
    (0x3240, true, &[0x0028, 0x796D, 0x0029]),
    (0x3241, true, &[0x0028, 0x4F11, 0x0029]),
    (0x3242, true, &[0x0028, 0x81EA, 0x0029]),
    (0x3243, true, &[0x0028, 0x81F3, 0x0029]),
    (0x3244, true, &[0x554F]),
    (0x3245, true, &[0x5E7C]),
    (0x3246, true, &[0x6587]),
    (0x3247, true, &[0x7B8F]),
    (0x3250, true, &[0x0050, 0x0054, 0x0045]),
    (0x3251, true, &[0x0032, 0x0031]),
    (0x3252, true, &[0x0032, 0x0032]),
    (0x3253, true, &[0x0032, 0x0033]),
    (0x3254, true, &[0x0032, 0x0034]),
    (0x3255, true, &[0x0032, 0x0035]),
    (0x3256, true, &[0x0032, 0x0036]),
    (0x3257, true, &[0x0032, 0x0037]),
    (0x3258, true, &[0x0032, 0x0038]),
    (0x3259, true, &[0x0032, 0x0039]),
    (0x325A, true, &[0x0033, 0x0030]),
    (0x325B, true, &[0x0033, 0x0031]),
    (0x325C, true, &[0x0033, 0x0032]),
    (0x325D, true, &[0x0033, 0x0033]),
    (0x325E, true, &[0x0033, 0x0034]),
    (0x325F, true, &[0x0033, 0x0035]),
    (0x3260, true, &[0x1100]),
    (0x3261, true, &[0x1102]),
    (0x3262, true, &[0x1103]),
    (0x3263, true, &[0x1105]),
    (0x3264, true, &[0x1106]),
    (0x3265, true, &[0x1107]),
    (0x3266, true, &[0x1109]),
    (0x3267, true, &[0x110B]),
    (0x3268, true, &[0x110C]),
    (0x3269, true, &[0x110E]),
    (0x326A, true, &[0x110F]),
    (0x326B, true, &[0x1110]),
    (0x326C, true, &[0x1111]),
    (0x326D, true, &[0x1112]),
    (0x326E, true, &[0x1100, 0x1161]),
    (0x326F, true, &[0x1102, 0x1161]),
    (0x3270, true, &[0x1103, 0x1161]),
    (0x3271, true, &[0x1105, 0x1161]),
    (0x3272, true, &[0x1106, 0x1161]),
    (0x3273, true, &[0x1107, 0x1161]),
    (0x3274, true, &[0x1109, 0x1161]),
    (0x3275, true, &[0x110B, 0x1161]),
    (0x3276, true, &[0x110C, 0x1161]),
    (0x3277, true, &[0x110E, 0x1161]),
    (0x3278, true, &[0x110F, 0x1161]),
    (0x3279, true, &[0x1110, 0x1161]),
    (0x327A, true, &[0x1111, 0x1161]),
    (0x327B, true, &[0x1112, 0x1161]),
    (0x327C, true, &[0x110E, 0x1161, 0x11B7, 0x1100, 0x1169]),
    (0x327D, true, &[0x110C, 0x116E, 0x110B, 0x1174]),
    (0x327E, true, &[0x110B, 0x116E]),
    (0x3280, true, &[0x4E00]),
    (0x3281, true, &[0x4E8C]),
    (0x3282, true, &[0x4E09]),
    (0x3283, true, &[0x56DB]),
    (0x3284, true, &[0x4E94]),
    (0x3285, true, &[0x516D]),
    (0x3286, true, &[0x4E03]),
    (0x3287, true, &[0x516B]),
    (0x3288, true, &[0x4E5D]),
    (0x3289, true, &[0x5341]),
    (0x328A, true, &[0x6708]),
    (0x328B, true, &[0x706B]),
    (0x328C, true, &[0x6C34]),
    (0x328D, true, &[0x6728]),
    (0x328E, true, &[0x91D1]),
    (0x328F, true, &[0x571F]),
    (0x3290, true, &[0x65E5]),
    (0x3291, true, &[0x682A]),
    (0x3292, true, &[0x6709]),
    (0x3293, true, &[0x793E]),
    (0x3294, true, &[0x540D]),
    (0x3295, true, &[0x7279]),
    (0x3296, true, &[0x8CA1]),
    (0x3297, true, &[0x795D]),
    (0x3298, true, &[0x52B4]),
    (0x3299, true, &[0x79D8]),
    (0x329A, true, &[0x7537]),
    (0x329B, true, &[0x5973]),
    (0x329C, true, &[0x9069]),
    (0x329D, true, &[0x512A]),
    (0x329E, true, &[0x5370]),
    (0x329F, true, &[0x6CE8]),
    (0x32A0, true, &[0x9805]),
    (0x32A1, true, &[0x4F11]),
    (0x32A2, true, &[0x5199]),
    (0x32A3, true, &[0x6B63]),
    (0x32A4, true, &[0x4E0A]),
    (0x32A5, true, &[0x4E2D]),
    (0x32A6, true, &[0x4E0B]),
    (0x32A7, true, &[0x5DE6]),
    (0x32A8, true, &[0x53F3]),
    (0x32A9, true, &[0x533B]),
    (0x32AA, true, &[0x5B97]),
    (0x32AB, true, &[0x5B66]),
    (0x32AC, true, &[0x76E3]),
    (0x32AD, true, &[0x4F01]),
    (0x32AE, true, &[0x8CC7]),
    (0x32AF, true, &[0x5354]),
    (0x32B0, true, &[0x591C]),
    (0x32B1, true, &[0x0033, 0x0036]),
    (0x32B2, true, &[0x0033, 0x0037]),
    (0x32B3, true, &[0x0033, 0x0038]),
    (0x32B4, true, &[0x0033, 0x0039]),
    (0x32B5, true, &[0x0034, 0x0030]),
    (0x32B6, true, &[0x0034, 0x0031]),
    (0x32B7, true, &[0x0034, 0x0032]),
    (0x32B8, true, &[0x0034, 0x0033]),
    (0x32B9, true, &[0x0034, 0x0034]),
    (0x32BA, true, &[0x0034, 0x0035]),
    (0x32BB, true, &[0x0034, 0x0036]),
    (0x32BC, true, &[0x0034, 0x0037]),
    (0x32BD, true, &[0x0034, 0x0038]),
    (0x32BE, true, &[0x0034, 0x0039]),
    (0x32BF, true, &[0x0035, 0x0030]),
    (0x32C0, true, &[0x0031, 0x6708]),
    (0x32C1, true, &[0x0032, 0x6708]),
    (0x32C2, true, &[0x0033, 0x6708]),
    (0x32C3, true, &[0x0034, 0x6708]),
    (0x32C4, true, &[0x0035, 0x6708]),
    (0x32C5, true, &[0x0036, 0x6708]),
    (0x32C6, true, &[0x0037, 0x6708]),
    (0x32C7, true, &[0x0038, 0x6708]),
    (0x32C8, true, &[0x0039, 0x6708]),
    (0x32C9, true, &[0x0031, 0x0030, 0x6708]),
    (0x32CA, true, &[0x0031, 0x0031, 0x6708]),
    (0x32CB, true, &[0x0031, 0x0032, 0x6708]),
    (0x32CC, true, &[0x0048, 0x0067]),
    (0x32CD, true, &[0x0065, 0x0072, 0x0067]),
    (0x32CE, true, &[0x0065, 0x0056]),
    (0x32CF, true, &[0x004C, 0x0054, 0x0044]),
    (0x32D0, true, &[0x30A2]),
    (0x32D1, true, &[0x30A4]),
    (0x32D2, true, &[0x30A6]),
    (0x32D3, true, &[0x30A8]),
    (0x32D4, true, &[0x30AA]),
    (0x32D5, true, &[0x30AB]),
    (0x32D6, true, &[0x30AD]),
    (0x32D7, true, &[0x30AF]),
    (0x32D8, true, &[0x30B1]),
    (0x32D9, true, &[0x30B3]),
    (0x32DA, true, &[0x30B5]),
    (0x32DB, true, &[0x30B7]),
    (0x32DC, true, &[0x30B9]),
    (0x32DD, true, &[0x30BB]),
    (0x32DE, true, &[0x30BD]),
    (0x32DF, true, &[0x30BF]),
    (0x32E0, true, &[0x30C1]),
    (0x32E1, true, &[0x30C4]),
    (0x32E2, true, &[0x30C6]),
    (0x32E3, true, &[0x30C8]),
    (0x32E4, true, &[0x30CA]),
    (0x32E5, true, &[0x30CB]),
    (0x32E6, true, &[0x30CC]),
    (0x32E7, true, &[0x30CD]),
    (0x32E8, true, &[0x30CE]),
    (0x32E9, true, &[0x30CF]),
    (0x32EA, true, &[0x30D2]),
    (0x32EB, true, &[0x30D5]),
    (0x32EC, true, &[0x30D8]),
    (0x32ED, true, &[0x30DB]),
    (0x32EE, true, &[0x30DE]),
    (0x32EF, true, &[0x30DF]),
    (0x32F0, true, &[0x30E0]),
    (0x32F1, true, &[0x30E1]),
    (0x32F2, true, &[0x30E2]),
    (0x32F3, true, &[0x30E4]),
    (0x32F4, true, &[0x30E6]),
    (0x32F5, true, &[0x30E8]),
    (0x32F6, true, &[0x30E9]),
    (0x32F7, true, &[0x30EA]),
    (0x32F8, true, &[0x30EB]),
    (0x32F9, true, &[0x30EC]),
    (0x32FA, true, &[0x30ED]),
    (0x32FB, true, &[0x30EF]),
    (0x32FC, true, &[0x30F0]),
    (0x32FD, true, &[0x30F1]),
    (0x32FE, true, &[0x30F2]),
    (0x32FF, true, &[0x4EE4, 0x548C]),
    (0x3300, true, &[0x30A2, 0x30D1, 0x30FC, 0x30C8]),
    (0x3301, true, &[0x30A2, 0x30EB, 0x30D5, 0x30A1]),
    (0x3302, true, &[0x30A2, 0x30F3, 0x30DA, 0x30A2]),
    (0x3303, true, &[0x30A2, 0x30FC, 0x30EB]),
    (0x3304, true, &[0x30A4, 0x30CB, 0x30F3, 0x30B0]),
    (0x3305, true, &[0x30A4, 0x30F3, 0x30C1]),
    (0x3306, true, &[0x30A6, 0x30A9, 0x30F3]),
    (0x3307, true, &[0x30A8, 0x30B9, 0x30AF, 0x30FC, 0x30C9]),
    (0x3308, true, &[0x30A8, 0x30FC, 0x30AB, 0x30FC]),
    (0x3309, true, &[0x30AA, 0x30F3, 0x30B9]),
    (0x330A, true, &[0x30AA, 0x30FC, 0x30E0]),
    (0x330B, true, &[0x30AB, 0x30A4, 0x30EA]),
    (0x330C, true, &[0x30AB, 0x30E9, 0x30C3, 0x30C8]),
    (0x330D, true, &[0x30AB, 0x30ED, 0x30EA, 0x30FC]),
    (0x330E, true, &[0x30AC, 0x30ED, 0x30F3]),
    (0x330F, true, &[0x30AC, 0x30F3, 0x30DE]),
    (0x3310, true, &[0x30AE, 0x30AC]),
    (0x3311, true, &[0x30AE, 0x30CB, 0x30FC]),
    (0x3312, true, &[0x30AD, 0x30E5, 0x30EA, 0x30FC]),
    (0x3313, true, &[0x30AE, 0x30EB, 0x30C0, 0x30FC]),
    (0x3314, true, &[0x30AD, 0x30ED]),
    (0x3315, true, &[0x30AD, 0x30ED, 0x30B0, 0x30E9, 0x30E0]),
    (0x3316, true, &[0x30AD, 0x30ED, 0x30E1, 0x30FC, 0x30C8, 0x30EB]),
    (0x3317, true, &[0x30AD, 0x30ED, 0x30EF, 0x30C3, 0x30C8]),
    (0x3318, true, &[0x30B0, 0x30E9, 0x30E0]),
    (0x3319, true, &[0x30B0, 0x30E9, 0x30E0, 0x30C8, 0x30F3]),
    (0x331A, true, &[0x30AF, 0x30EB, 0x30BC, 0x30A4, 0x30ED]),
    (0x331B, true, &[0x30AF, 0x30ED, 0x30FC, 0x30CD]),
    (0x331C, true, &[0x30B1, 0x30FC, 0x30B9]),
    (0x331D, true, &[0x30B3, 0x30EB, 0x30CA]),
    (0x331E, true, &[0x30B3, 0x30FC, 0x30DD]),
    (0x331F, true, &[0x30B5, 0x30A4, 0x30AF, 0x30EB]),
    (0x3320, true, &[0x30B5, 0x30F3, 0x30C1, 0x30FC, 0x30E0]),
    (0x3321, true, &[0x30B7, 0x30EA, 0x30F3, 0x30B0]),
    (0x3322, true, &[0x30BB, 0x30F3, 0x30C1]),
    (0x3323, true, &[0x30BB, 0x30F3, 0x30C8]),
    (0x3324, true, &[0x30C0, 0x30FC, 0x30B9]),
    (0x3325, true, &[0x30C7, 0x30B7]),
    (0x3326, true, &[0x30C9, 0x30EB]),
    (0x3327, true, &[0x30C8, 0x30F3]),
    (0x3328, true, &[0x30CA, 0x30CE]),
    (0x3329, true, &[0x30CE, 0x30C3, 0x30C8]),
    (0x332A, true, &[0x30CF, 0x30A4, 0x30C4]),
    (0x332B, true, &[0x30D1, 0x30FC, 0x30BB, 0x30F3, 0x30C8]),
    (0x332C, true, &[0x30D1, 0x30FC, 0x30C4]),
    (0x332D, true, &[0x30D0, 0x30FC, 0x30EC, 0x30EB]),
    (0x332E, true, &[0x30D4, 0x30A2, 0x30B9, 0x30C8, 0x30EB]),
    (0x332F, true, &[0x30D4, 0x30AF, 0x30EB]),
    (0x3330, true, &[0x30D4, 0x30B3]),
    (0x3331, true, &[0x30D3, 0x30EB]),
    (0x3332, true, &[0x30D5, 0x30A1, 0x30E9, 0x30C3, 0x30C9]),
    (0x3333, true, &[0x30D5, 0x30A3, 0x30FC, 0x30C8]),
    (0x3334, true, &[0x30D6, 0x30C3, 0x30B7, 0x30A7, 0x30EB]),
    (0x3335, true, &[0x30D5, 0x30E9, 0x30F3]),
    (0x3336, true, &[0x30D8, 0x30AF, 0x30BF, 0x30FC, 0x30EB]),
    (0x3337, true, &[0x30DA, 0x30BD]),
    (0x3338, true, &[0x30DA, 0x30CB, 0x30D2]),
    (0x3339, true, &[0x30D8, 0x30EB, 0x30C4]),
    (0x333A, true, &[0x30DA, 0x30F3, 0x30B9]),
    (0x333B, true, &[0x30DA, 0x30FC, 0x30B8]),
    (0x333C, true, &[0x30D9, 0x30FC, 0x30BF]),
    (0x333D, true, &[0x30DD, 0x30A4, 0x30F3, 0x30C8]),
    (0x333E, true, &[0x30DC, 0x30EB, 0x30C8]),
    (0x333F, true, &[0x30DB, 0x30F3]),
    (0x3340, true, &[0x30DD, 0x30F3, 0x30C9]),
    (0x3341, true, &[0x30DB, 0x30FC, 0x30EB]),
    (0x3342, true, &[0x30DB, 0x30FC, 0x30F3]),
    (0x3343, true, &[0x30DE, 0x30A4, 0x30AF, 0x30ED]),
    (0x3344, true, &[0x30DE, 0x30A4, 0x30EB]),
    (0x3345, true, &[0x30DE, 0x30C3, 0x30CF]),
    (0x3346, true, &[0x30DE, 0x30EB, 0x30AF]),
    (0x3347, true, &[0x30DE, 0x30F3, 0x30B7, 0x30E7, 0x30F3]),
    (0x3348, true, &[0x30DF, 0x30AF, 0x30ED, 0x30F3]),
    (0x3349, true, &[0x30DF, 0x30EA]),
    (0x334A, true, &[0x30DF, 0x30EA, 0x30D0, 0x30FC, 0x30EB]),
    (0x334B, true, &[0x30E1, 0x30AC]),
    (0x334C, true, &[0x30E1, 0x30AC, 0x30C8, 0x30F3]),
    (0x334D, true, &[0x30E1, 0x30FC, 0x30C8, 0x30EB]),
    (0x334E, true, &[0x30E4, 0x30FC, 0x30C9]),
    (0x334F, true, &[0x30E4, 0x30FC, 0x30EB]),
    (0x3350, true, &[0x30E6, 0x30A2, 0x30F3]),
    (0x3351, true, &[0x30EA, 0x30C3, 0x30C8, 0x30EB]),
    (0x3352, true, &[0x30EA, 0x30E9]),
    (0x3353, true, &[0x30EB, 0x30D4, 0x30FC]),
    (0x3354, true, &[0x30EB, 0x30FC, 0x30D6, 0x30EB]),
    (0x3355, true, &[0x30EC, 0x30E0]),
    (0x3356, true, &[0x30EC, 0x30F3, 0x30C8, 0x30B2, 0x30F3]),
    (0x3357, true, &[0x30EF, 0x30C3, 0x30C8]),
    (0x3358, true, &[0x0030, 0x70B9]),
    (0x3359, true, &[0x0031, 0x70B9]),
    (0x335A, true, &[0x0032, 0x70B9]),
    (0x335B, true, &[0x0033, 0x70B9]),
    (0x335C, true, &[0x0034, 0x70B9]),
    (0x335D, true, &[0x0035, 0x70B9]),
    (0x335E, true, &[0x0036, 0x70B9]),
    (0x335F, true, &[0x0037, 0x70B9]),
    (0x3360, true, &[0x0038, 0x70B9]),
    (0x3361, true, &[0x0039, 0x70B9]),
    (0x3362, true, &[0x0031, 0x0030, 0x70B9]),
    (0x3363, true, &[0x0031, 0x0031, 0x70B9]),
    (0x3364, true, &[0x0031, 0x0032, 0x70B9]),
    (0x3365, true, &[0x0031, 0x0033, 0x70B9]),
    (0x3366, true, &[0x0031, 0x0034, 0x70B9]),
    (0x3367, true, &[0x0031, 0x0035, 0x70B9]),
    (0x3368, true, &[0x0031, 0x0036, 0x70B9]),
    (0x3369, true, &[0x0031, 0x0037, 0x70B9]),
    (0x336A, true, &[0x0031, 0x0038, 0x70B9]),
    (0x336B, true, &[0x0031, 0x0039, 0x70B9]),
    (0x336C, true, &[0x0032, 0x0030, 0x70B9]),
    (0x336D, true, &[0x0032, 0x0031, 0x70B9]),
    (0x336E, true, &[0x0032, 0x0032, 0x70B9]),
    (0x336F, true, &[0x0032, 0x0033, 0x70B9]),
    (0x3370, true, &[0x0032, 0x0034, 0x70B9]),
    (0x3371, true, &[0x0068, 0x0050, 0x0061]),
    (0x3372, true, &[0x0064, 0x0061]),
    (0x3373, true, &[0x0041, 0x0055]),
    (0x3374, true, &[0x0062, 0x0061, 0x0072]),
    (0x3375, true, &[0x006F, 0x0056]),
    (0x3376, true, &[0x0070, 0x0063]),
    (0x3377, true, &[0x0064, 0x006D]),
    (0x3378, true, &[0x0064, 0x006D, 0x00B2]),
    (0x3379, true, &[0x0064, 0x006D, 0x00B3]),
    (0x337A, true, &[0x0049, 0x0055]),
    (0x337B, true, &[0x5E73, 0x6210]),
    (0x337C, true, &[0x662D, 0x548C]),
    (0x337D, true, &[0x5927, 0x6B63]),
    (0x337E, true, &[0x660E, 0x6CBB]),
    (0x337F, true, &[0x682A, 0x5F0F, 0x4F1A, 0x793E]),
    (0x3380, true, &[0x0070, 0x0041]),
    (0x3381, true, &[0x006E, 0x0041]),
    (0x3382, true, &[0x03BC, 0x0041]),
    (0x3383, true, &[0x006D, 0x0041]),
    (0x3384, true, &[0x006B, 0x0041]),
    (0x3385, true, &[0x004B, 0x0042]),
    (0x3386, true, &[0x004D, 0x0042]),
    (0x3387, true, &[0x0047, 0x0042]),
    (0x3388, true, &[0x0063, 0x0061, 0x006C]),
    (0x3389, true, &[0x006B, 0x0063, 0x0061, 0x006C]),
    (0x338A, true, &[0x0070, 0x0046]),
    (0x338B, true, &[0x006E, 0x0046]),
    (0x338C, true, &[0x03BC, 0x0046]),
    (0x338D, true, &[0x03BC, 0x0067]),
    (0x338E, true, &[0x006D, 0x0067]),
    (0x338F, true, &[0x006B, 0x0067]),
    (0x3390, true, &[0x0048, 0x007A]),
    (0x3391, true, &[0x006B, 0x0048, 0x007A]),
    (0x3392, true, &[0x004D, 0x0048, 0x007A]),
    (0x3393, true, &[0x0047, 0x0048, 0x007A]),
    (0x3394, true, &[0x0054, 0x0048, 0x007A]),
    (0x3395, true, &[0x03BC, 0x2113]),
    (0x3396, true, &[0x006D, 0x2113]),
    (0x3397, true, &[0x0064, 0x2113]),
    (0x3398, true, &[0x006B, 0x2113]),
    (0x3399, true, &[0x0066, 0x006D]),
    (0x339A, true, &[0x006E, 0x006D]),
    (0x339B, true, &[0x03BC, 0x006D]),
    (0x339C, true, &[0x006D, 0x006D]),
    (0x339D, true, &[0x0063, 0x006D]),
    (0x339E, true, &[0x006B, 0x006D]),
    (0x339F, true, &[0x006D, 0x006D, 0x00B2]),
    (0x33A0, true, &[0x0063, 0x006D, 0x00B2]),
    (0x33A1, true, &[0x006D, 0x00B2]),
    (0x33A2, true, &[0x006B, 0x006D, 0x00B2]),
    (0x33A3, true, &[0x006D, 0x006D, 0x00B3]),
    (0x33A4, true, &[0x0063, 0x006D, 0x00B3]),
    (0x33A5, true, &[0x006D, 0x00B3]),
    (0x33A6, true, &[0x006B, 0x006D, 0x00B3]),
    (0x33A7, true, &[0x006D, 0x2215, 0x0073]),
    (0x33A8, true, &[0x006D, 0x2215, 0x0073, 0x00B2]),
    (0x33A9, true, &[0x0050, 0x0061]),
    (0x33AA, true, &[0x006B, 0x0050, 0x0061]),
    (0x33AB, true, &[0x004D, 0x0050, 0x0061]),
    (0x33AC, true, &[0x0047, 0x0050, 0x0061]),
    (0x33AD, true, &[0x0072, 0x0061, 0x0064]),
    (0x33AE, true, &[0x0072, 0x0061, 0x0064, 0x2215, 0x0073]),
    (0x33AF, true, &[0x0072, 0x0061, 0x0064, 0x2215, 0x0073, 0x00B2]),
    (0x33B0, true, &[0x0070, 0x0073]),
    (0x33B1, true, &[0x006E, 0x0073]),
    (0x33B2, true, &[0x03BC, 0x0073]),
    (0x33B3, true, &[0x006D, 0x0073]),
    (0x33B4, true, &[0x0070, 0x0056]),
    (0x33B5, true, &[0x006E, 0x0056]),
    (0x33B6, true, &[0x03BC, 0x0056]),
    (0x33B7, true, &[0x006D, 0x0056]),
    (0x33B8, true, &[0x006B, 0x0056]),
    (0x33B9, true, &[0x004D, 0x0056]),
    (0x33BA, true, &[0x0070, 0x0057]),
    (0x33BB, true, &[0x006E, 0x0057]),
    (0x33BC, true, &[0x03BC, 0x0057]),
    (0x33BD, true, &[0x006D, 0x0057]),
    (0x33BE, true, &[0x006B, 0x0057]),
    (0x33BF, true, &[0x004D, 0x0057]),
    (0x33C0, true, &[0x006B, 0x03A9]),
    (0x33C1, true, &[0x004D, 0x03A9]),
    (0x33C2, true, &[0x0061, 0x002E, 0x006D, 0x002E]),
    (0x33C3, true, &[0x0042, 0x0071]),
    (0x33C4, true, &[0x0063, 0x0063]),
    (0x33C5, true, &[0x0063, 0x0064]),
    (0x33C6, true, &[0x0043, 0x2215, 0x006B, 0x0067]),
    (0x33C7, true, &[0x0043, 0x006F, 0x002E]),
    (0x33C8, true, &[0x0064, 0x0042]),
    (0x33C9, true, &[0x0047, 0x0079]),
    (0x33CA, true, &[0x0068, 0x0061]),
    (0x33CB, true, &[0x0048, 0x0050]),
    (0x33CC, true, &[0x0069, 0x006E]),
    (0x33CD, true, &[0x004B, 0x004B]),
    (0x33CE, true, &[0x004B, 0x004D]),
    (0x33CF, true, &[0x006B, 0x0074]),
    (0x33D0, true, &[0x006C, 0x006D]),
    (0x33D1, true, &[0x006C, 0x006E]),
    (0x33D2, true, &[0x006C, 0x006F, 0x0067]),
    (0x33D3, true, &[0x006C, 0x0078]),
    (0x33D4, true, &[0x006D, 0x0062]),
    (0x33D5, true, &[0x006D, 0x0069, 0x006C]),
    (0x33D6, true, &[0x006D, 0x006F, 0x006C]),
    (0x33D7, true, &[0x0050, 0x0048]),
    (0x33D8, true, &[0x0070, 0x002E, 0x006D, 0x002E]),
    (0x33D9, true, &[0x0050, 0x0050, 0x004D]),
    (0x33DA, true, &[0x0050, 0x0052]),
    (0x33DB, true, &[0x0073, 0x0072]),
    (0x33DC, true, &[0x0053, 0x0076]),
    (0x33DD, true, &[0x0057, 0x0062]),
    (0x33DE, true, &[0x0056, 0x2215, 0x006D]),
    (0x33DF, true, &[0x0041, 0x2215, 0x006D]),
    (0x33E0, true, &[0x0031, 0x65E5]),
    (0x33E1, true, &[0x0032, 0x65E5]),
    (0x33E2, true, &[0x0033, 0x65E5]),
    (0x33E3, true, &[0x0034, 0x65E5]),
    (0x33E4, true, &[0x0035, 0x65E5]),
    (0x33E5, true, &[0x0036, 0x65E5]),
    (0x33E6, true, &[0x0037, 0x65E5]),
    (0x33E7, true, &[0x0038, 0x65E5]),
    (0x33E8, true, &[0x0039, 0x65E5]),
    (0x33E9, true, &[0x0031, 0x0030, 0x65E5]),
    (0x33EA, true, &[0x0031, 0x0031, 0x65E5]),
    (0x33EB, true, &[0x0031, 0x0032, 0x65E5]),
    (0x33EC, true, &[0x0031, 0x0033, 0x65E5]),
    (0x33ED, true, &[0x0031, 0x0034, 0x65E5]),
    (0x33EE, true, &[0x0031, 0x0035, 0x65E5]),
    (0x33EF, true, &[0x0031, 0x0036, 0x65E5]),
    (0x33F0, true, &[0x0031, 0x0037, 0x65E5]),
    (0x33F1, true, &[0x0031, 0x0038, 0x65E5]),
    (0x33F2, true, &[0x0031, 0x0039, 0x65E5]),
    (0x33F3, true, &[0x0032, 0x0030, 0x65E5]),
    (0x33F4, true, &[0x0032, 0x0031, 0x65E5]),
    (0x33F5, true, &[0x0032, 0x0032, 0x65E5]),
    (0x33F6, true, &[0x0032, 0x0033, 0x65E5]),
    (0x33F7, true, &[0x0032, 0x0034, 0x65E5]),
    (0x33F8, true, &[0x0032, 0x0035, 0x65E5]),
    (0x33F9, true, &[0x0032, 0x0036, 0x65E5]),
    (0x33FA, true, &[0x0032, 0x0037, 0x65E5]),
    (0x33FB, true, &[0x0032, 0x0038, 0x65E5]),
    (0x33FC, true, &[0x0032, 0x0039, 0x65E5]),
    (0x33FD, true, &[0x0033, 0x0030, 0x65E5]),
    (0x33FE, true, &[0x0033, 0x0031, 0x65E5]),
    (0x33FF, true, &[0x0067, 0x0061, 0x006C]),
    (0xA69C, true, &[0x044A]),
    (0xA69D, true, &[0x044C]),
    (0xA770, true, &[0xA76F]),
    (0xA7F2, true, &[0x0043]),
    (0xA7F3, true, &[0x0046]),
    (0xA7F4, true, &[0x0051]),
    (0xA7F8, true, &[0x0126]),
    (0xA7F9, true, &[0x0153]),
    (0xAB5C, true, &[0xA727]),
    (0xAB5D, true, &[0xAB37]),
    (0xAB5E, true, &[0x026B]),
    (0xAB5F, true, &[0xAB52]),
    (0xAB69, true, &[0x028D]),
    (0xF900, false, &[0x8C48]),
    (0xF901, false, &[0x66F4]),
    (0xF902, false, &[0x8ECA]),
    (0xF903, false, &[0x8CC8]),
    (0xF904, false, &[0x6ED1]),
    (0xF905, false, &[0x4E32]),
    (0xF906, false, &[0x53E5]),
    (0xF907, false, &[0x9F9C]),
    (0xF908, false, &[0x9F9C]),
    (0xF909, false, &[0x5951]),
    (0xF90A, false, &[0x91D1]),
    (0xF90B, false, &[0x5587]),
    (0xF90C, false, &[0x5948]),
    (0xF90D, false, &[0x61F6]),
    (0xF90E, false, &[0x7669]),
    (0xF90F, false, &[0x7F85]),
    (0xF910, false, &[0x863F]),
    (0xF911, false, &[0x87BA]),
    (0xF912, false, &[0x88F8]),
    (0xF913, false, &[0x908F]),
    (0xF914, false, &[0x6A02]),
    (0xF915, false, &[0x6D1B]),
    (0xF916, false, &[0x70D9]),
    (0xF917, false, &[0x73DE]),
    (0xF918, false, &[0x843D]),
    (0xF919, false, &[0x916A]),
    (0xF91A, false, &[0x99F1]),
    (0xF91B, false, &[0x4E82]),
    (0xF91C, false, &[0x5375]),
    (0xF91D, false, &[0x6B04]),
    (0xF91E, false, &[0x721B]),
    (0xF91F, false, &[0x862D]),
    (0xF920, false, &[0x9E1E]),
    (0xF921, false, &[0x5D50]),
    (0xF922, false, &[0x6FEB]),
    (0xF923, false, &[0x85CD]),
    (0xF924, false, &[0x8964]),
    (0xF925, false, &[0x62C9]),
    (0xF926, false, &[0x81D8]),
    (0xF927, false, &[0x881F]),
    (0xF928, false, &[0x5ECA]),
    (0xF929, false, &[0x6717]),
    (0xF92A, false, &[0x6D6A]),
    (0xF92B, false, &[0x72FC]),
    (0xF92C, false, &[0x90CE]),
    (0xF92D, false, &[0x4F86]),
    (0xF92E, false, &[0x51B7]),
    (0xF92F, false, &[0x52DE]),
    (0xF930, false, &[0x64C4]),
    (0xF931, false, &[0x6AD3]),
    (0xF932, false, &[0x7210]),
    (0xF933, false, &[0x76E7]),
    (0xF934, false, &[0x8001]),
    (0xF935, false, &[0x8606]),
    (0xF936, false, &[0x865C]),
    (0xF937, false, &[0x8DEF]),
    (0xF938, false, &[0x9732]),
    (0xF939, false, &[0x9B6F]),
    (0xF93A, false, &[0x9DFA]),
    (0xF93B, false, &[0x788C]),
    (0xF93C, false, &[0x797F]),
    (0xF93D, false, &[0x7DA0]),
    (0xF93E, false, &[0x83C9]),
    (0xF93F, false, &[0x9304]),
    (0xF940, false, &[0x9E7F]),
    (0xF941, false, &[0x8AD6]),
    (0xF942, false, &[0x58DF]),
    (0xF943, false, &[0x5F04]),
    (0xF944, false, &[0x7C60]),
    (0xF945, false, &[0x807E]),
    (0xF946, false, &[0x7262]),
    (0xF947, false, &[0x78CA]),
    (0xF948, false, &[0x8CC2]),
    (0xF949, false, &[0x96F7]),
    (0xF94A, false, &[0x58D8]),
    (0xF94B, false, &[0x5C62]),
    (0xF94C, false, &[0x6A13]),
    (0xF94D, false, &[0x6DDA]),
    (0xF94E, false, &[0x6F0F]),
    (0xF94F, false, &[0x7D2F]),
    (0xF950, false, &[0x7E37]),
    (0xF951, false, &[0x964B]),
    (0xF952, false, &[0x52D2]),
    (0xF953, false, &[0x808B]),
    (0xF954, false, &[0x51DC]),
    (0xF955, false, &[0x51CC]),
    (0xF956, false, &[0x7A1C]),
    (0xF957, false, &[0x7DBE]),
    (0xF958, false, &[0x83F1]),
    (0xF959, false, &[0x9675]),
    (0xF95A, false, &[0x8B80]),
    (0xF95B, false, &[0x62CF]),
    (0xF95C, false, &[0x6A02]),
    (0xF95D, false, &[0x8AFE]),
    (0xF95E, false, &[0x4E39]),
    (0xF95F, false, &[0x5BE7]),
    (0xF960, false, &[0x6012]),
    (0xF961, false, &[0x7387]),
    (0xF962, false, &[0x7570]),
    (0xF963, false, &[0x5317]),
    (0xF964, false, &[0x78FB]),
    (0xF965, false, &[0x4FBF]),
    (0xF966, false, &[0x5FA9]),
    (0xF967, false, &[0x4E0D]),
    (0xF968, false, &[0x6CCC]),
    (0xF969, false, &[0x6578]),
    (0xF96A, false, &[0x7D22]),
    (0xF96B, false, &[0x53C3]),
    (0xF96C, false, &[0x585E]),
    (0xF96D, false, &[0x7701]),
    (0xF96E, false, &[0x8449]),
    (0xF96F, false, &[0x8AAA]),
    (0xF970, false, &[0x6BBA]),
    (0xF971, false, &[0x8FB0]),
    (0xF972, false, &[0x6C88]),
    (0xF973, false, &[0x62FE]),
    (0xF974, false, &[0x82E5]),
    (0xF975, false, &[0x63A0]),
    (0xF976, false, &[0x7565]),
    (0xF977, false, &[0x4EAE]),
    (0xF978, false, &[0x5169]),
    (0xF979, false, &[0x51C9]),
    (0xF97A, false, &[0x6881]),
    (0xF97B, false, &[0x7CE7]),
    (0xF97C, false, &[0x826F]),
    (0xF97D, false, &[0x8AD2]),
    (0xF97E, false, &[0x91CF]),
    (0xF97F, false, &[0x52F5]),
    (0xF980, false, &[0x5442]),
    (0xF981, false, &[0x5973]),
    (0xF982, false, &[0x5EEC]),
    (0xF983, false, &[0x65C5]),
    (0xF984, false, &[0x6FFE]),
    (0xF985, false, &[0x792A]),
    (0xF986, false, &[0x95AD]),
    (0xF987, false, &[0x9A6A]),
    (0xF988, false, &[0x9E97]),
    (0xF989, false, &[0x9ECE]),
    (0xF98A, false, &[0x529B]),
    (0xF98B, false, &[0x66C6]),
    (0xF98C, false, &[0x6B77]),
    (0xF98D, false, &[0x8F62]),
    (0xF98E, false, &[0x5E74]),
    (0xF98F, false, &[0x6190]),
    (0xF990, false, &[0x6200]),
    (0xF991, false, &[0x649A]),
    (0xF992, false, &[0x6F23]),
    (0xF993, false, &[0x7149]),
    (0xF994, false, &[0x7489]),
    (0xF995, false, &[0x79CA]),
    (0xF996, false, &[0x7DF4]),
    (0xF997, false, &[0x806F]),
    (0xF998, false, &[0x8F26]),
    (0xF999, false, &[0x84EE]),
    (0xF99A, false, &[0x9023]),
    (0xF99B, false, &[0x934A]),
    (0xF99C, false, &[0x5217]),
    (0xF99D, false, &[0x52A3]),
    (0xF99E, false, &[0x54BD]),
    (0xF99F, false, &[0x70C8]),
    (0xF9A0, false, &[0x88C2]),
    (0xF9A1, false, &[0x8AAA]),
    (0xF9A2, false, &[0x5EC9]),
    (0xF9A3, false, &[0x5FF5]),
    (0xF9A4, false, &[0x637B]),
    (0xF9A5, false, &[0x6BAE]),
    (0xF9A6, false, &[0x7C3E]),
    (0xF9A7, false, &[0x7375]),
    (0xF9A8, false, &[0x4EE4]),
    (0xF9A9, false, &[0x56F9]),
    (0xF9AA, false, &[0x5BE7]),
    (0xF9AB, false, &[0x5DBA]),
    (0xF9AC, false, &[0x601C]),
    (0xF9AD, false, &[0x73B2]),
    (0xF9AE, false, &[0x7469]),
    (0xF9AF, false, &[0x7F9A]),
    (0xF9B0, false, &[0x8046]),
    (0xF9B1, false, &[0x9234]),
    (0xF9B2, false, &[0x96F6]),
    (0xF9B3, false, &[0x9748]),
    (0xF9B4, false, &[0x9818]),
    (0xF9B5, false, &[0x4F8B]),
    (0xF9B6, false, &[0x79AE]),
    (0xF9B7, false, &[0x91B4]),
    (0xF9B8, false, &[0x96B8]),
    (0xF9B9, false, &[0x60E1]),
    (0xF9BA, false, &[0x4E86]),
    (0xF9BB, false, &[0x50DA]),
    (0xF9BC, false, &[0x5BEE]),
    (0xF9BD, false, &[0x5C3F]),
    (0xF9BE, false, &[0x6599]),
    (0xF9BF, false, &[0x6A02]),
    (0xF9C0, false, &[0x71CE]),
    (0xF9C1, false, &[0x7642]),
    (0xF9C2, false, &[0x84FC]),
    (0xF9C3, false, &[0x907C]),
    (0xF9C4, false, &[0x9F8D]),
    (0xF9C5, false, &[0x6688]),
    (0xF9C6, false, &[0x962E]),
    (0xF9C7, false, &[0x5289]),
    (0xF9C8, false, &[0x677B]),
    (0xF9C9, false, &[0x67F3]),
    (0xF9CA, false, &[0x6D41]),
    (0xF9CB, false, &[0x6E9C]),
    (0xF9CC, false, &[0x7409]),
    (0xF9CD, false, &[0x7559]),
    (0xF9CE, false, &[0x786B]),
    (0xF9CF, false, &[0x7D10]),
    (0xF9D0, false, &[0x985E]),
    (0xF9D1, false, &[0x516D]),
    (0xF9D2, false, &[0x622E]),
    (0xF9D3, false, &[0x9678]),
    (0xF9D4, false, &[0x502B]),
    (0xF9D5, false, &[0x5D19]),
    (0xF9D6, false, &[0x6DEA]),
    (0xF9D7, false, &[0x8F2A]),
    (0xF9D8, false, &[0x5F8B]),
    (0xF9D9, false, &[0x6144]),
    (0xF9DA, false, &[0x6817]),
    (0xF9DB, false, &[0x7387]),
    (0xF9DC, false, &[0x9686]),
    (0xF9DD, false, &[0x5229]),
    (0xF9DE, false, &[0x540F]),
    (0xF9DF, false, &[0x5C65]),
    (0xF9E0, false, &[0x6613]),
    (0xF9E1, false, &[0x674E]),
    (0xF9E2, false, &[0x68A8]),
    (0xF9E3, false, &[0x6CE5]),
    (0xF9E4, false, &[0x7406]),
    (0xF9E5, false, &[0x75E2]),
    (0xF9E6, false, &[0x7F79]),
    (0xF9E7, false, &[0x88CF]),
    (0xF9E8, false, &[0x88E1]),
    (0xF9E9, false, &[0x91CC]),
    (0xF9EA, false, &[0x96E2]),
    (0xF9EB, false, &[0x533F]),
    (0xF9EC, false, &[0x6EBA]),
    (0xF9ED, false, &[0x541D]),
    (0xF9EE, false, &[0x71D0]),
    (0xF9EF, false, &[0x7498]),
    (0xF9F0, false, &[0x85FA]),
    (0xF9F1, false, &[0x96A3]),
    (0xF9F2, false, &[0x9C57]),
    (0xF9F3, false, &[0x9E9F]),
    (0xF9F4, false, &[0x6797]),
    (0xF9F5, false, &[0x6DCB]),
    (0xF9F6, false, &[0x81E8]),
    (0xF9F7, false, &[0x7ACB]),
    (0xF9F8, false, &[0x7B20]),
    (0xF9F9, false, &[0x7C92]),
    (0xF9FA, false, &[0x72C0]),
    (0xF9FB, false, &[0x7099]),
    (0xF9FC, false, &[0x8B58]),
    (0xF9FD, false, &[0x4EC0]),
    (0xF9FE, false, &[0x8336]),
    (0xF9FF, false, &[0x523A]),
    (0xFA00, false, &[0x5207]),
    (0xFA01, false, &[0x5EA6]),
    (0xFA02, false, &[0x62D3]),
    (0xFA03, false, &[0x7CD6]),
    (0xFA04, false, &[0x5B85]),
    (0xFA05, false, &[0x6D1E]),
    (0xFA06, false, &[0x66B4]),
    (0xFA07, false, &[0x8F3B]),
    (0xFA08, false, &[0x884C]),
    (0xFA09, false, &[0x964D]),
    (0xFA0A, false, &[0x898B]),
    (0xFA0B, false, &[0x5ED3]),
    (0xFA0C, false, &[0x5140]),
    (0xFA0D, false, &[0x55C0]),
    (0xFA10, false, &[0x585A]),
    (0xFA12, false, &[0x6674]),
    (0xFA15, false, &[0x51DE]),
    (0xFA16, false, &[0x732A]),
    (0xFA17, false, &[0x76CA]),
    (0xFA18, false, &[0x793C]),
    (0xFA19, false, &[0x795E]),
    (0xFA1A, false, &[0x7965]),
    (0xFA1B, false, &[0x798F]),
    (0xFA1C, false, &[0x9756]),
    (0xFA1D, false, &[0x7CBE]),
    (0xFA1E, false, &[0x7FBD]),
    (0xFA20, false, &[0x8612]),
    (0xFA22, false, &[0x8AF8]),
    (0xFA25, false, &[0x9038]),
    (0xFA26, false, &[0x90FD]),
    (0xFA2A, false, &[0x98EF]),
    (0xFA2B, false, &[0x98FC]),
    (0xFA2C, false, &[0x9928]),
    (0xFA2D, false, &[0x9DB4]),
    (0xFA2E, false, &[0x90DE]),
    (0xFA2F, false, &[0x96B7]),
    (0xFA30, false, &[0x4FAE]),
    (0xFA31, false, &[0x50E7]),
    (0xFA32, false, &[0x514D]),
    (0xFA33, false, &[0x52C9]),
    (0xFA34, false, &[0x52E4]),
    (0xFA35, false, &[0x5351]),
    (0xFA36, false, &[0x559D]),
    (0xFA37, false, &[0x5606]),
    (0xFA38, false, &[0x5668]),
    (0xFA39, false, &[0x5840]),
    (0xFA3A, false, &[0x58A8]),
    (0xFA3B, false, &[0x5C64]),
    (0xFA3C, false, &[0x5C6E]),
    (0xFA3D, false, &[0x6094]),
    (0xFA3E, false, &[0x6168]),
    (0xFA3F, false, &[0x618E]),
    (0xFA40, false, &[0x61F2]),
    (0xFA41, false, &[0x654F]),
    (0xFA42, false, &[0x65E2]),
    (0xFA43, false, &[0x6691]),
    (0xFA44, false, &[0x6885]),
    (0xFA45, false, &[0x6D77]),
    (0xFA46, false, &[0x6E1A]),
    (0xFA47, false, &[0x6F22]),
    (0xFA48, false, &[0x716E]),
    (0xFA49, false, &[0x722B]),
    (0xFA4A, false, &[0x7422]),
    (0xFA4B, false, &[0x7891]),
    (0xFA4C, false, &[0x793E]),
    (0xFA4D, false, &[0x7949]),
    (0xFA4E, false, &[0x7948]),
    (0xFA4F, false, &[0x7950]),
    (0xFA50, false, &[0x7956]),
    (0xFA51, false, &[0x795D]),
    (0xFA52, false, &[0x798D]),
    (0xFA53, false, &[0x798E]),
    (0xFA54, false, &[0x7A40]),
    (0xFA55, false, &[0x7A81]),
    (0xFA56, false, &[0x7BC0]),
    (0xFA57, false, &[0x7DF4]),
    (0xFA58, false, &[0x7E09]),
    (0xFA59, false, &[0x7E41]),
    (0xFA5A, false, &[0x7F72]),
    (0xFA5B, false, &[0x8005]),
    (0xFA5C, false, &[0x81ED]),
    (0xFA5D, false, &[0x8279]),
    (0xFA5E, false, &[0x8279]),
    (0xFA5F, false, &[0x8457]),
    (0xFA60, false, &[0x8910]),
    (0xFA61, false, &[0x8996]),
    (0xFA62, false, &[0x8B01]),
    (0xFA63, false, &[0x8B39]),
    (0xFA64, false, &[0x8CD3]),
    (0xFA65, false, &[0x8D08]),
    (0xFA66, false, &[0x8FB6]),
    (0xFA67, false, &[0x9038]),
    (0xFA68, false, &[0x96E3]),
    (0xFA69, false, &[0x97FF]),
    (0xFA6A, false, &[0x983B]),
    (0xFA6B, false, &[0x6075]),
    (0xFA6C, false, &[0x242EE]),
    (0xFA6D, false, &[0x8218]),
    (0xFA70, false, &[0x4E26]),
    (0xFA71, false, &[0x51B5]),
    (0xFA72, false, &[0x5168]),
    (0xFA73, false, &[0x4F80]),
    (0xFA74, false, &[0x5145]),
    (0xFA75, false, &[0x5180]),
    (0xFA76, false, &[0x52C7]),
    (0xFA77, false, &[0x52FA]),
    (0xFA78, false, &[0x559D]),
    (0xFA79, false, &[0x5555]),
    (0xFA7A, false, &[0x5599]),
    (0xFA7B, false, &[0x55E2]),
    (0xFA7C, false, &[0x585A]),
    (0xFA7D, false, &[0x58B3]),
    (0xFA7E, false, &[0x5944]),
    (0xFA7F, false, &[0x5954]),
    (0xFA80, false, &[0x5A62]),
    (0xFA81, false, &[0x5B28]),
    (0xFA82, false, &[0x5ED2]),
    (0xFA83, false, &[0x5ED9]),
    (0xFA84, false, &[0x5F69]),
    (0xFA85, false, &[0x5FAD]),
    (0xFA86, false, &[0x60D8]),
    (0xFA87, false, &[0x614E]),
    (0xFA88, false, &[0x6108]),
    (0xFA89, false, &[0x618E]),
    (0xFA8A, false, &[0x6160]),
    (0xFA8B, false, &[0x61F2]),
    (0xFA8C, false, &[0x6234]),
    (0xFA8D, false, &[0x63C4]),
    (0xFA8E, false, &[0x641C]),
    (0xFA8F, false, &[0x6452]),
    (0xFA90, false, &[0x6556]),
    (0xFA91, false, &[0x6674]),
    (0xFA92, false, &[0x6717]),
    (0xFA93, false, &[0x671B]),
    (0xFA94, false, &[0x6756]),
    (0xFA95, false, &[0x6B79]),
    (0xFA96, false, &[0x6BBA]),
    (0xFA97, false, &[0x6D41]),
    (0xFA98, false, &[0x6EDB]),
    (0xFA99, false, &[0x6ECB]),
    (0xFA9A, false, &[0x6F22]),
    (0xFA9B, false, &[0x701E]),
    (0xFA9C, false, &[0x716E]),
    (0xFA9D, false, &[0x77A7]),
    (0xFA9E, false, &[0x7235]),
    (0xFA9F, false, &[0x72AF]),
    (0xFAA0, false, &[0x732A]),
    (0xFAA1, false, &[0x7471]),
    (0xFAA2, false, &[0x7506]),
    (0xFAA3, false, &[0x753B]),
    (0xFAA4, false, &[0x761D]),
    (0xFAA5, false, &[0x761F]),
    (0xFAA6, false, &[0x76CA]),
    (0xFAA7, false, &[0x76DB]),
    (0xFAA8, false, &[0x76F4]),
    (0xFAA9, false, &[0x774A]),
    (0xFAAA, false, &[0x7740]),
    (0xFAAB, false, &[0x78CC]),
    (0xFAAC, false, &[0x7AB1]),
    (0xFAAD, false, &[0x7BC0]),
    (0xFAAE, false, &[0x7C7B]),
    (0xFAAF, false, &[0x7D5B]),
    (0xFAB0, false, &[0x7DF4]),
    (0xFAB1, false, &[0x7F3E]),
    (0xFAB2, false, &[0x8005]),
    (0xFAB3, false, &[0x8352]),
    (0xFAB4, false, &[0x83EF]),
    (0xFAB5, false, &[0x8779]),
    (0xFAB6, false, &[0x8941]),
    (0xFAB7, false, &[0x8986]),
    (0xFAB8, false, &[0x8996]),
    (0xFAB9, false, &[0x8ABF]),
    (0xFABA, false, &[0x8AF8]),
    (0xFABB, false, &[0x8ACB]),
    (0xFABC, false, &[0x8B01]),
    (0xFABD, false, &[0x8AFE]),
    (0xFABE, false, &[0x8AED]),
    (0xFABF, false, &[0x8B39]),
    (0xFAC0, false, &[0x8B8A]),
    (0xFAC1, false, &[0x8D08]),
    (0xFAC2, false, &[0x8F38]),
    (0xFAC3, false, &[0x9072]),
    (0xFAC4, false, &[0x9199]),
    (0xFAC5, false, &[0x9276]),
    (0xFAC6, false, &[0x967C]),
    (0xFAC7, false, &[0x96E3]),
    (0xFAC8, false, &[0x9756]),
    (0xFAC9, false, &[0x97DB]),
    (0xFACA, false, &[0x97FF]),
    (0xFACB, false, &[0x980B]),
    (0xFACC, false, &[0x983B]),
    (0xFACD, false, &[0x9B12]),
    (0xFACE, false, &[0x9F9C]),
    (0xFACF, false, &[0x2284A]),
    (0xFAD0, false, &[0x22844]),
    (0xFAD1, false, &[0x233D5]),
    (0xFAD2, false, &[0x3B9D]),
    (0xFAD3, false, &[0x4018]),
    (0xFAD4, false, &[0x4039]),
    (0xFAD5, false, &[0x25249]),
    (0xFAD6, false, &[0x25CD0]),
    (0xFAD7, false, &[0x27ED3]),
    (0xFAD8, false, &[0x9F43]),
    (0xFAD9, false, &[0x9F8E]),
    (0xFB00, true, &[0x0066, 0x0066]),
    (0xFB01, true, &[0x0066, 0x0069]),
    (0xFB02, true, &[0x0066, 0x006C]),
    (0xFB03, true, &[0x0066, 0x0066, 0x0069]),
    (0xFB04, true, &[0x0066, 0x0066, 0x006C]),
    (0xFB05, true, &[0x017F, 0x0074]),
    (0xFB06, true, &[0x0073, 0x0074]),
    (0xFB13, true, &[0x0574, 0x0576]),
    (0xFB14, true, &[0x0574, 0x0565]),
    (0xFB15, true, &[0x0574, 0x056B]),
    (0xFB16, true, &[0x057E, 0x0576]),
    (0xFB17, true, &[0x0574, 0x056D]),
    (0xFB1D, false, &[0x05D9, 0x05B4]),
    (0xFB1F, false, &[0x05F2, 0x05B7]),
    (0xFB20, true, &[0x05E2]),
    (0xFB21, true, &[0x05D0]),
    (0xFB22, true, &[0x05D3]),
    (0xFB23, true, &[0x05D4]),
    (0xFB24, true, &[0x05DB]),
    (0xFB25, true, &[0x05DC]),
    (0xFB26, true, &[0x05DD]),
    (0xFB27, true, &[0x05E8]),
    (0xFB28, true, &[0x05EA]),
    (0xFB29, true, &[0x002B]),
    (0xFB2A, false, &[0x05E9, 0x05C1]),
    (0xFB2B, false, &[0x05E9, 0x05C2]),
    (0xFB2C, false, &[0xFB49, 0x05C1]),
    (0xFB2D, false, &[0xFB49, 0x05C2]),
    (0xFB2E, false, &[0x05D0, 0x05B7]),
    (0xFB2F, false, &[0x05D0, 0x05B8]),
    (0xFB30, false, &[0x05D0, 0x05BC]),
    (0xFB31, false, &[0x05D1, 0x05BC]),
    (0xFB32, false, &[0x05D2, 0x05BC]),
    (0xFB33, false, &[0x05D3, 0x05BC]),
    (0xFB34, false, &[0x05D4, 0x05BC]),
    (0xFB35, false, &[0x05D5, 0x05BC]),
    (0xFB36, false, &[0x05D6, 0x05BC]),
    (0xFB38, false, &[0x05D8, 0x05BC]),
    (0xFB39, false, &[0x05D9, 0x05BC]),
    (0xFB3A, false, &[0x05DA, 0x05BC]),
    (0xFB3B, false, &[0x05DB, 0x05BC]),
    (0xFB3C, false, &[0x05DC, 0x05BC]),
    (0xFB3E, false, &[0x05DE, 0x05BC]),
    (0xFB40, false, &[0x05E0, 0x05BC]),
    (0xFB41, false, &[0x05E1, 0x05BC]),
    (0xFB43, false, &[0x05E3, 0x05BC]),
    (0xFB44, false, &[0x05E4, 0x05BC]),
    (0xFB46, false, &[0x05E6, 0x05BC]),
    (0xFB47, false, &[0x05E7, 0x05BC]),
    (0xFB48, false, &[0x05E8, 0x05BC]),
    (0xFB49, false, &[0x05E9, 0x05BC]),
    (0xFB4A, false, &[0x05EA, 0x05BC]),
    (0xFB4B, false, &[0x05D5, 0x05B9]),
    (0xFB4C, false, &[0x05D1, 0x05BF]),
    (0xFB4D, false, &[0x05DB, 0x05BF]),
    (0xFB4E, false, &[0x05E4, 0x05BF]),
    (0xFB4F, true, &[0x05D0, 0x05DC]),
    (0xFB50, true, &[0x0671]),
    (0xFB51, true, &[0x0671]),
    (0xFB52, true, &[0x067B]),
    (0xFB53, true, &[0x067B]),
    (0xFB54, true, &[0x067B]),
    (0xFB55, true, &[0x067B]),
    (0xFB56, true, &[0x067E]),
    (0xFB57, true, &[0x067E]),
    (0xFB58, true, &[0x067E]),
    (0xFB59, true, &[0x067E]),
    (0xFB5A, true, &[0x0680]),
    (0xFB5B, true, &[0x0680]),
    (0xFB5C, true, &[0x0680]),
    (0xFB5D, true, &[0x0680]),
    (0xFB5E, true, &[0x067A]),
    (0xFB5F, true, &[0x067A]),
    (0xFB60, true, &[0x067A]),
    (0xFB61, true, &[0x067A]),
    (0xFB62, true, &[0x067F]),
    (0xFB63, true, &[0x067F]),
    (0xFB64, true, &[0x067F]),
    (0xFB65, true, &[0x067F]),
    (0xFB66, true, &[0x0679]),
    (0xFB67, true, &[0x0679]),
    (0xFB68, true, &[0x0679]),
    (0xFB69, true, &[0x0679]),
    (0xFB6A, true, &[0x06A4]),
    (0xFB6B, true, &[0x06A4]),
    (0xFB6C, true, &[0x06A4]),
    (0xFB6D, true, &[0x06A4]),
    (0xFB6E, true, &[0x06A6]),
    (0xFB6F, true, &[0x06A6]),
    (0xFB70, true, &[0x06A6]),
    (0xFB71, true, &[0x06A6]),
    (0xFB72, true, &[0x0684]),
    (0xFB73, true, &[0x0684]),
    (0xFB74, true, &[0x0684]),
    (0xFB75, true, &[0x0684]),
    (0xFB76, true, &[0x0683]),
    (0xFB77, true, &[0x0683]),
    (0xFB78, true, &[0x0683]),
    (0xFB79, true, &[0x0683]),
    (0xFB7A, true, &[0x0686]),
    (0xFB7B, true, &[0x0686]),
    (0xFB7C, true, &[0x0686]),
    (0xFB7D, true, &[0x0686]),
    (0xFB7E, true, &[0x0687]),
    (0xFB7F, true, &[0x0687]),
    (0xFB80, true, &[0x0687]),
    (0xFB81, true, &[0x0687]),
    (0xFB82, true, &[0x068D]),
    (0xFB83, true, &[0x068D]),
    (0xFB84, true, &[0x068C]),
    (0xFB85, true, &[0x068C]),
    (0xFB86, true, &[0x068E]),
    (0xFB87, true, &[0x068E]),
    (0xFB88, true, &[0x0688]),
    (0xFB89, true, &[0x0688]),
    (0xFB8A, true, &[0x0698]),
    (0xFB8B, true, &[0x0698]),
    (0xFB8C, true, &[0x0691]),
    (0xFB8D, true, &[0x0691]),
    (0xFB8E, true, &[0x06A9]),
    (0xFB8F, true, &[0x06A9]),
    (0xFB90, true, &[0x06A9]),
    (0xFB91, true, &[0x06A9]),
    (0xFB92, true, &[0x06AF]),
    (0xFB93, true, &[0x06AF]),
    (0xFB94, true, &[0x06AF]),
    (0xFB95, true, &[0x06AF]),
    (0xFB96, true, &[0x06B3]),
    (0xFB97, true, &[0x06B3]),
    (0xFB98, true, &[0x06B3]),
    (0xFB99, true, &[0x06B3]),
    (0xFB9A, true, &[0x06B1]),
    (0xFB9B, true, &[0x06B1]),
    (0xFB9C, true, &[0x06B1]),
    (0xFB9D, true, &[0x06B1]),
    (0xFB9E, true, &[0x06BA]),
    (0xFB9F, true, &[0x06BA]),
    (0xFBA0, true, &[0x06BB]),
    (0xFBA1, true, &[0x06BB]),
    (0xFBA2, true, &[0x06BB]),
    (0xFBA3, true, &[0x06BB]),
    (0xFBA4, true, &[0x06C0]),
    (0xFBA5, true, &[0x06C0]),
    (0xFBA6, true, &[0x06C1]),
    (0xFBA7, true, &[0x06C1]),
    (0xFBA8, true, &[0x06C1]),
    (0xFBA9, true, &[0x06C1]),
    (0xFBAA, true, &[0x06BE]),
    (0xFBAB, true, &[0x06BE]),
    (0xFBAC, true, &[0x06BE]),
    (0xFBAD, true, &[0x06BE]),
    (0xFBAE, true, &[0x06D2]),
    (0xFBAF, true, &[0x06D2]),
    (0xFBB0, true, &[0x06D3]),
    (0xFBB1, true, &[0x06D3]),
    (0xFBD3, true, &[0x06AD]),
    (0xFBD4, true, &[0x06AD]),
    (0xFBD5, true, &[0x06AD]),
    (0xFBD6, true, &[0x06AD]),
    (0xFBD7, true, &[0x06C7]),
    (0xFBD8, true, &[0x06C7]),
    (0xFBD9, true, &[0x06C6]),
    (0xFBDA, true, &[0x06C6]),
    (0xFBDB, true, &[0x06C8]),
    (0xFBDC, true, &[0x06C8]),
    (0xFBDD, true, &[0x0677]),
    (0xFBDE, true, &[0x06CB]),
    (0xFBDF, true, &[0x06CB]),
    (0xFBE0, true, &[0x06C5]),
    (0xFBE1, true, &[0x06C5]),
    (0xFBE2, true, &[0x06C9]),
    (0xFBE3, true, &[0x06C9]),
    (0xFBE4, true, &[0x06D0]),
    (0xFBE5, true, &[0x06D0]),
    (0xFBE6, true, &[0x06D0]),
    (0xFBE7, true, &[0x06D0]),
    (0xFBE8, true, &[0x0649]),
    (0xFBE9, true, &[0x0649]),
    (0xFBEA, true, &[0x0626, 0x0627]),
    (0xFBEB, true, &[0x0626, 0x0627]),
    (0xFBEC, true, &[0x0626, 0x06D5]),
    (0xFBED, true, &[0x0626, 0x06D5]),
    (0xFBEE, true, &[0x0626, 0x0648]),
    (0xFBEF, true, &[0x0626, 0x0648]),
    (0xFBF0, true, &[0x0626, 0x06C7]),
    (0xFBF1, true, &[0x0626, 0x06C7]),
    (0xFBF2, true, &[0x0626, 0x06C6]),
    (0xFBF3, true, &[0x0626, 0x06C6]),
    (0xFBF4, true, &[0x0626, 0x06C8]),
    (0xFBF5, true, &[0x0626, 0x06C8]),
    (0xFBF6, true, &[0x0626, 0x06D0]),
    (0xFBF7, true, &[0x0626, 0x06D0]),
    (0xFBF8, true, &[0x0626, 0x06D0]),
    (0xFBF9, true, &[0x0626, 0x0649]),
    (0xFBFA, true, &[0x0626, 0x0649]),
    (0xFBFB, true, &[0x0626, 0x0649]),
    (0xFBFC, true, &[0x06CC]),
    (0xFBFD, true, &[0x06CC]),
    (0xFBFE, true, &[0x06CC]),
    (0xFBFF, true, &[0x06CC]),
    (0xFC00, true, &[0x0626, 0x062C]),
    (0xFC01, true, &[0x0626, 0x062D]),
    (0xFC02, true, &[0x0626, 0x0645]),
    (0xFC03, true, &[0x0626, 0x0649]),
    (0xFC04, true, &[0x0626, 0x064A]),
    (0xFC05, true, &[0x0628, 0x062C]),
    (0xFC06, true, &[0x0628, 0x062D]),
    (0xFC07, true, &[0x0628, 0x062E]),
    (0xFC08, true, &[0x0628, 0x0645]),
    (0xFC09, true, &[0x0628, 0x0649]),
    (0xFC0A, true, &[0x0628, 0x064A]),
    (0xFC0B, true, &[0x062A, 0x062C]),
    (0xFC0C, true, &[0x062A, 0x062D]),
    (0xFC0D, true, &[0x062A, 0x062E]),
    (0xFC0E, true, &[0x062A, 0x0645]),
    (0xFC0F, true, &[0x062A, 0x0649]),
    (0xFC10, true, &[0x062A, 0x064A]),
    (0xFC11, true, &[0x062B, 0x062C]),
    (0xFC12, true, &[0x062B, 0x0645]),
    (0xFC13, true, &[0x062B, 0x0649]),
    (0xFC14, true, &[0x062B, 0x064A]),
    (0xFC15, true, &[0x062C, 0x062D]),
    (0xFC16, true, &[0x062C, 0x0645]),
    (0xFC17, true, &[0x062D, 0x062C]),
    (0xFC18, true, &[0x062D, 0x0645]),
    (0xFC19, true, &[0x062E, 0x062C]),
    (0xFC1A, true, &[0x062E, 0x062D]),
    (0xFC1B, true, &[0x062E, 0x0645]),
    (0xFC1C, true, &[0x0633, 0x062C]),
    (0xFC1D, true, &[0x0633, 0x062D]),
    (0xFC1E, true, &[0x0633, 0x062E]),
    (0xFC1F, true, &[0x0633, 0x0645]),
    (0xFC20, true, &[0x0635, 0x062D]),
    (0xFC21, true, &[0x0635, 0x0645]),
    (0xFC22, true, &[0x0636, 0x062C]),
    (0xFC23, true, &[0x0636, 0x062D]),
    (0xFC24, true, &[0x0636, 0x062E]),
    (0xFC25, true, &[0x0636, 0x0645]),
    (0xFC26, true, &[0x0637, 0x062D]),
    (0xFC27, true, &[0x0637, 0x0645]),
    (0xFC28, true, &[0x0638, 0x0645]),
    (0xFC29, true, &[0x0639, 0x062C]),
    (0xFC2A, true, &[0x0639, 0x0645]),
    (0xFC2B, true, &[0x063A, 0x062C]),
    (0xFC2C, true, &[0x063A, 0x0645]),
    (0xFC2D, true, &[0x0641, 0x062C]),
    (0xFC2E, true, &[0x0641, 0x062D]),
    (0xFC2F, true, &[0x0641, 0x062E]),
    (0xFC30, true, &[0x0641, 0x0645]),
    (0xFC31, true, &[0x0641, 0x0649]),
    (0xFC32, true, &[0x0641, 0x064A]),
    (0xFC33, true, &[0x0642, 0x062D]),
    (0xFC34, true, &[0x0642, 0x0645]),
    (0xFC35, true, &[0x0642, 0x0649]),
    (0xFC36, true, &[0x0642, 0x064A]),
    (0xFC37, true, &[0x0643, 0x0627]),
    (0xFC38, true, &[0x0643, 0x062C]),
    (0xFC39, true, &[0x0643, 0x062D]),
    (0xFC3A, true, &[0x0643, 0x062E]),
    (0xFC3B, true, &[0x0643, 0x0644]),
    (0xFC3C, true, &[0x0643, 0x0645]),
    (0xFC3D, true, &[0x0643, 0x0649]),
    (0xFC3E, true, &[0x0643, 0x064A]),
    (0xFC3F, true, &[0x0644, 0x062C]),
    (0xFC40, true, &[0x0644, 0x062D]),
    (0xFC41, true, &[0x0644, 0x062E]),
    (0xFC42, true, &[0x0644, 0x0645]),
    (0xFC43, true, &[0x0644, 0x0649]),
    (0xFC44, true, &[0x0644, 0x064A]),
    (0xFC45, true, &[0x0645, 0x062C]),
    (0xFC46, true, &[0x0645, 0x062D]),
    (0xFC47, true, &[0x0645, 0x062E]),
    (0xFC48, true, &[0x0645, 0x0645]),
    (0xFC49, true, &[0x0645, 0x0649]),
    (0xFC4A, true, &[0x0645, 0x064A]),
    (0xFC4B, true, &[0x0646, 0x062C]),
    (0xFC4C, true, &[0x0646, 0x062D]),
    (0xFC4D, true, &[0x0646, 0x062E]),
    (0xFC4E, true, &[0x0646, 0x0645]),
    (0xFC4F, true, &[0x0646, 0x0649]),
    (0xFC50, true, &[0x0646, 0x064A]),
    (0xFC51, true, &[0x0647, 0x062C]),
    (0xFC52, true, &[0x0647, 0x0645]),
    (0xFC53, true, &[0x0647, 0x0649]),
    (0xFC54, true, &[0x0647, 0x064A]),
    (0xFC55, true, &[0x064A, 0x062C]),
    (0xFC56, true, &[0x064A, 0x062D]),
    (0xFC57, true, &[0x064A, 0x062E]),
    (0xFC58, true, &[0x064A, 0x0645]),
    (0xFC59, true, &[0x064A, 0x0649]),
    (0xFC5A, true, &[0x064A, 0x064A]),
    (0xFC5B, true, &[0x0630, 0x0670]),
    (0xFC5C, true, &[0x0631, 0x0670]),
    (0xFC5D, true, &[0x0649, 0x0670]),
    (0xFC5E, true, &[0x0020, 0x064C, 0x0651]),
    (0xFC5F, true, &[0x0020, 0x064D, 0x0651]),
    (0xFC60, true, &[0x0020, 0x064E, 0x0651]),
    (0xFC61, true, &[0x0020, 0x064F, 0x0651]),
    (0xFC62, true, &[0x0020, 0x0650, 0x0651]),
    (0xFC63, true, &[0x0020, 0x0651, 0x0670]),
    (0xFC64, true, &[0x0626, 0x0631]),
    (0xFC65, true, &[0x0626, 0x0632]),
    (0xFC66, true, &[0x0626, 0x0645]),
    (0xFC67, true, &[0x0626, 0x0646]),
    (0xFC68, true, &[0x0626, 0x0649]),
    (0xFC69, true, &[0x0626, 0x064A]),
    (0xFC6A, true, &[0x0628, 0x0631]),
    (0xFC6B, true, &[0x0628, 0x0632]),
    (0xFC6C, true, &[0x0628, 0x0645]),
    (0xFC6D, true, &[0x0628, 0x0646]),
    (0xFC6E, true, &[0x0628, 0x0649]),
    (0xFC6F, true, &[0x0628, 0x064A]),
    (0xFC70, true, &[0x062A, 0x0631]),
    (0xFC71, true, &[0x062A, 0x0632]),
    (0xFC72, true, &[0x062A, 0x0645]),
    (0xFC73, true, &[0x062A, 0x0646]),
    (0xFC74, true, &[0x062A, 0x0649]),
    (0xFC75, true, &[0x062A, 0x064A]),
    (0xFC76, true, &[0x062B, 0x0631]),
    (0xFC77, true, &[0x062B, 0x0632]),
    (0xFC78, true, &[0x062B, 0x0645]),
    (0xFC79, true, &[0x062B, 0x0646]),
    (0xFC7A, true, &[0x062B, 0x0649]),
    (0xFC7B, true, &[0x062B, 0x064A]),
    (0xFC7C, true, &[0x0641, 0x0649]),
    (0xFC7D, true, &[0x0641, 0x064A]),
    (0xFC7E, true, &[0x0642, 0x0649]),
    (0xFC7F, true, &[0x0642, 0x064A]),
    (0xFC80, true, &[0x0643, 0x0627]),
    (0xFC81, true, &[0x0643, 0x0644]),
    (0xFC82, true, &[0x0643, 0x0645]),
    (0xFC83, true, &[0x0643, 0x0649]),
    (0xFC84, true, &[0x0643, 0x064A]),
    (0xFC85, true, &[0x0644, 0x0645]),
    (0xFC86, true, &[0x0644, 0x0649]),
    (0xFC87, true, &[0x0644, 0x064A]),
    (0xFC88, true, &[0x0645, 0x0627]),
    (0xFC89, true, &[0x0645, 0x0645]),
    (0xFC8A, true, &[0x0646, 0x0631]),
    (0xFC8B, true, &[0x0646, 0x0632]),
    (0xFC8C, true, &[0x0646, 0x0645]),
    (0xFC8D, true, &[0x0646, 0x0646]),
    (0xFC8E, true, &[0x0646, 0x0649]),
    (0xFC8F, true, &[0x0646, 0x064A]),
    (0xFC90, true, &[0x0649, 0x0670]),
    (0xFC91, true, &[0x064A, 0x0631]),
    (0xFC92, true, &[0x064A, 0x0632]),
    (0xFC93, true, &[0x064A, 0x0645]),
    (0xFC94, true, &[0x064A, 0x0646]),
    (0xFC95, true, &[0x064A, 0x0649]),
    (0xFC96, true, &[0x064A, 0x064A]),
    (0xFC97, true, &[0x0626, 0x062C]),
    (0xFC98, true, &[0x0626, 0x062D]),
    (0xFC99, true, &[0x0626, 0x062E]),
    (0xFC9A, true, &[0x0626, 0x0645]),
    (0xFC9B, true, &[0x0626, 0x0647]),
    (0xFC9C, true, &[0x0628, 0x062C]),
    (0xFC9D, true, &[0x0628, 0x062D]),
    (0xFC9E, true, &[0x0628, 0x062E]),
    (0xFC9F, true, &[0x0628, 0x0645]),
    (0xFCA0, true, &[0x0628, 0x0647]),
    (0xFCA1, true, &[0x062A, 0x062C]),
    (0xFCA2, true, &[0x062A, 0x062D]),
    (0xFCA3, true, &[0x062A, 0x062E]),
    (0xFCA4, true, &[0x062A, 0x0645]),
    (0xFCA5, true, &[0x062A, 0x0647]),
    (0xFCA6, true, &[0x062B, 0x0645]),
    (0xFCA7, true, &[0x062C, 0x062D]),
    (0xFCA8, true, &[0x062C, 0x0645]),
    (0xFCA9, true, &[0x062D, 0x062C]),
    (0xFCAA, true, &[0x062D, 0x0645]),
    (0xFCAB, true, &[0x062E, 0x062C]),
    (0xFCAC, true, &[0x062E, 0x0645]),
    (0xFCAD, true, &[0x0633, 0x062C]),
    (0xFCAE, true, &[0x0633, 0x062D]),
    (0xFCAF, true, &[0x0633, 0x062E]),
    (0xFCB0, true, &[0x0633, 0x0645]),
    (0xFCB1, true, &[0x0635, 0x062D]),
    (0xFCB2, true, &[0x0635, 0x062E]),
    (0xFCB3, true, &[0x0635, 0x0645]),
    (0xFCB4, true, &[0x0636, 0x062C]),
    (0xFCB5, true, &[0x0636, 0x062D]),
    (0xFCB6, true, &[0x0636, 0x062E]),
    (0xFCB7, true, &[0x0636, 0x0645]),
    (0xFCB8, true, &[0x0637, 0x062D]),
    (0xFCB9, true, &[0x0638, 0x0645]),
    (0xFCBA, true, &[0x0639, 0x062C]),
    (0xFCBB, true, &[0x0639, 0x0645]),
    (0xFCBC, true, &[0x063A, 0x062C]),
    (0xFCBD, true, &[0x063A, 0x0645]),
    (0xFCBE, true, &[0x0641, 0x062C]),
    (0xFCBF, true, &[0x0641, 0x062D]),
    (0xFCC0, true, &[0x0641, 0x062E]),
    (0xFCC1, true, &[0x0641, 0x0645]),
    (0xFCC2, true, &[0x0642, 0x062D]),
    (0xFCC3, true, &[0x0642, 0x0645]),
    (0xFCC4, true, &[0x0643, 0x062C]),
    (0xFCC5, true, &[0x0643, 0x062D]),
    (0xFCC6, true, &[0x0643, 0x062E]),
    (0xFCC7, true, &[0x0643, 0x0644]),
    (0xFCC8, true, &[0x0643, 0x0645]),
    (0xFCC9, true, &[0x0644, 0x062C]),
    (0xFCCA, true, &[0x0644, 0x062D]),
    (0xFCCB, true, &[0x0644, 0x062E]),
    (0xFCCC, true, &[0x0644, 0x0645]),
    (0xFCCD, true, &[0x0644, 0x0647]),
    (0xFCCE, true, &[0x0645, 0x062C]),
    (0xFCCF, true, &[0x0645, 0x062D]),
    (0xFCD0, true, &[0x0645, 0x062E]),
    (0xFCD1, true, &[0x0645, 0x0645]),
    (0xFCD2, true, &[0x0646, 0x062C]),
    (0xFCD3, true, &[0x0646, 0x062D]),
    (0xFCD4, true, &[0x0646, 0x062E]),
    (0xFCD5, true, &[0x0646, 0x0645]),
    (0xFCD6, true, &[0x0646, 0x0647]),
    (0xFCD7, true, &[0x0647, 0x062C]),
    (0xFCD8, true, &[0x0647, 0x0645]),
    (0xFCD9, true, &[0x0647, 0x0670]),
    (0xFCDA, true, &[0x064A, 0x062C]),
    (0xFCDB, true, &[0x064A, 0x062D]),
    (0xFCDC, true, &[0x064A, 0x062E]),
    (0xFCDD, true, &[0x064A, 0x0645]),
    (0xFCDE, true, &[0x064A, 0x0647]),
    (0xFCDF, true, &[0x0626, 0x0645]),
    (0xFCE0, true, &[0x0626, 0x0647]),
    (0xFCE1, true, &[0x0628, 0x0645]),
    (0xFCE2, true, &[0x0628, 0x0647]),
    (0xFCE3, true, &[0x062A, 0x0645]),
    (0xFCE4, true, &[0x062A, 0x0647]),
    (0xFCE5, true, &[0x062B, 0x0645]),
    (0xFCE6, true, &[0x062B, 0x0647]),
    (0xFCE7, true, &[0x0633, 0x0645]),
    (0xFCE8, true, &[0x0633, 0x0647]),
    (0xFCE9, true, &[0x0634, 0x0645]),
    (0xFCEA, true, &[0x0634, 0x0647]),
    (0xFCEB, true, &[0x0643, 0x0644]),
    (0xFCEC, true, &[0x0643, 0x0645]),
    (0xFCED, true, &[0x0644, 0x0645]),
    (0xFCEE, true, &[0x0646, 0x0645]),
    (0xFCEF, true, &[0x0646, 0x0647]),
    (0xFCF0, true, &[0x064A, 0x0645]),
    (0xFCF1, true, &[0x064A, 0x0647]),
    (0xFCF2, true, &[0x0640, 0x064E, 0x0651]),
    (0xFCF3, true, &[0x0640, 0x064F, 0x0651]),
    (0xFCF4, true, &[0x0640, 0x0650, 0x0651]),
    (0xFCF5, true, &[0x0637, 0x0649]),
    (0xFCF6, true, &[0x0637, 0x064A]),
    (0xFCF7, true, &[0x0639, 0x0649]),
    (0xFCF8, true, &[0x0639, 0x064A]),
    (0xFCF9, true, &[0x063A, 0x0649]),
    (0xFCFA, true, &[0x063A, 0x064A]),
    (0xFCFB, true, &[0x0633, 0x0649]),
    (0xFCFC, true, &[0x0633, 0x064A]),
    (0xFCFD, true, &[0x0634, 0x0649]),
    (0xFCFE, true, &[0x0634, 0x064A]),
    (0xFCFF, true, &[0x062D, 0x0649]),
    (0xFD00, true, &[0x062D, 0x064A]),
    (0xFD01, true, &[0x062C, 0x0649]),
    (0xFD02, true, &[0x062C, 0x064A]),
    (0xFD03, true, &[0x062E, 0x0649]),
    (0xFD04, true, &[0x062E, 0x064A]),
    (0xFD05, true, &[0x0635, 0x0649]),
    (0xFD06, true, &[0x0635, 0x064A]),
    (0xFD07, true, &[0x0636, 0x0649]),
    (0xFD08, true, &[0x0636, 0x064A]),
    (0xFD09, true, &[0x0634, 0x062C]),
    (0xFD0A, true, &[0x0634, 0x062D]),
    (0xFD0B, true, &[0x0634, 0x062E]),
    (0xFD0C, true, &[0x0634, 0x0645]),
    (0xFD0D, true, &[0x0634, 0x0631]),
    (0xFD0E, true, &[0x0633, 0x0631]),
    (0xFD0F, true, &[0x0635, 0x0631]),
    (0xFD10, true, &[0x0636, 0x0631]),
    (0xFD11, true, &[0x0637, 0x0649]),
    (0xFD12, true, &[0x0637, 0x064A]),
    (0xFD13, true, &[0x0639, 0x0649]),
    (0xFD14, true, &[0x0639, 0x064A]),
    (0xFD15, true, &[0x063A, 0x0649]),
    (0xFD16, true, &[0x063A, 0x064A]),
    (0xFD17, true, &[0x0633, 0x0649]),
    (0xFD18, true, &[0x0633, 0x064A]),
    (0xFD19, true, &[0x0634, 0x0649]),
    (0xFD1A, true, &[0x0634, 0x064A]),
    (0xFD1B, true, &[0x062D, 0x0649]),
    (0xFD1C, true, &[0x062D, 0x064A]),
    (0xFD1D, true, &[0x062C, 0x0649]),
    (0xFD1E, true, &[0x062C, 0x064A]),
    (0xFD1F, true, &[0x062E, 0x0649]),
    (0xFD20, true, &[0x062E, 0x064A]),
    (0xFD21, true, &[0x0635, 0x0649]),
    (0xFD22, true, &[0x0635, 0x064A]),
    (0xFD23, true, &[0x0636, 0x0649]),
    (0xFD24, true, &[0x0636, 0x064A]),
    (0xFD25, true, &[0x0634, 0x062C]),
    (0xFD26, true, &[0x0634, 0x062D]),
    (0xFD27, true, &[0x0634, 0x062E]),
    (0xFD28, true, &[0x0634, 0x0645]),
    (0xFD29, true, &[0x0634, 0x0631]),
    (0xFD2A, true, &[0x0633, 0x0631]),
    (0xFD2B, true, &[0x0635, 0x0631]),
    (0xFD2C, true, &[0x0636, 0x0631]),
    (0xFD2D, true, &[0x0634, 0x062C]),
    (0xFD2E, true, &[0x0634, 0x062D]),
    (0xFD2F, true, &[0x0634, 0x062E]),
    (0xFD30, true, &[0x0634, 0x0645]),
    (0xFD31, true, &[0x0633, 0x0647]),
    (0xFD32, true, &[0x0634, 0x0647]),
    (0xFD33, true, &[0x0637, 0x0645]),
    (0xFD34, true, &[0x0633, 0x062C]),
    (0xFD35, true, &[0x0633, 0x062D]),
    (0xFD36, true, &[0x0633, 0x062E]),
    (0xFD37, true, &[0x0634, 0x062C]),
    (0xFD38, true, &[0x0634, 0x062D]),
    (0xFD39, true, &[0x0634, 0x062E]),
    (0xFD3A, true, &[0x0637, 0x0645]),
    (0xFD3B, true, &[0x0638, 0x0645]),
    (0xFD3C, true, &[0x0627, 0x064B]),
    (0xFD3D, true, &[0x0627, 0x064B]),
    (0xFD50, true, &[0x062A, 0x062C, 0x0645]),
    (0xFD51, true, &[0x062A, 0x062D, 0x062C]),
    (0xFD52, true, &[0x062A, 0x062D, 0x062C]),
    (0xFD53, true, &[0x062A, 0x062D, 0x0645]),
    (0xFD54, true, &[0x062A, 0x062E, 0x0645]),
    (0xFD55, true, &[0x062A, 0x0645, 0x062C]),
    (0xFD56, true, &[0x062A, 0x0645, 0x062D]),
    (0xFD57, true, &[0x062A, 0x0645, 0x062E]),
    (0xFD58, true, &[0x062C, 0x0645, 0x062D]),
    (0xFD59, true, &[0x062C, 0x0645, 0x062D]),
    (0xFD5A, true, &[0x062D, 0x0645, 0x064A]),
    (0xFD5B, true, &[0x062D, 0x0645, 0x0649]),
    (0xFD5C, true, &[0x0633, 0x062D, 0x062C]),
    (0xFD5D, true, &[0x0633, 0x062C, 0x062D]),
    (0xFD5E, true, &[0x0633, 0x062C, 0x0649]),
    (0xFD5F, true, &[0x0633, 0x0645, 0x062D]),
    (0xFD60, true, &[0x0633, 0x0645, 0x062D]),
    (0xFD61, true, &[0x0633, 0x0645, 0x062C]),
    (0xFD62, true, &[0x0633, 0x0645, 0x0645]),
    (0xFD63, true, &[0x0633, 0x0645, 0x0645]),
    (0xFD64, true, &[0x0635, 0x062D, 0x062D]),
    (0xFD65, true, &[0x0635, 0x062D, 0x062D]),
    (0xFD66, true, &[0x0635, 0x0645, 0x0645]),
    (0xFD67, true, &[0x0634, 0x062D, 0x0645]),
    (0xFD68, true, &[0x0634, 0x062D, 0x0645]),
    (0xFD69, true, &[0x0634, 0x062C, 0x064A]),
    (0xFD6A, true, &[0x0634, 0x0645, 0x062E]),
    (0xFD6B, true, &[0x0634, 0x0645, 0x062E]),
    (0xFD6C, true, &[0x0634, 0x0645, 0x0645]),
    (0xFD6D, true, &[0x0634, 0x0645, 0x0645]),
    (0xFD6E, true, &[0x0636, 0x062D, 0x0649]),
    (0xFD6F, true, &[0x0636, 0x062E, 0x0645]),
    (0xFD70, true, &[0x0636, 0x062E, 0x0645]),
    (0xFD71, true, &[0x0637, 0x0645, 0x062D]),
    (0xFD72, true, &[0x0637, 0x0645, 0x062D]),
    (0xFD73, true, &[0x0637, 0x0645, 0x0645]),
    (0xFD74, true, &[0x0637, 0x0645, 0x064A]),
    (0xFD75, true, &[0x0639, 0x062C, 0x0645]),
    (0xFD76, true, &[0x0639, 0x0645, 0x0645]),
    (0xFD77, true, &[0x0639, 0x0645, 0x0645]),
    (0xFD78, true, &[0x0639, 0x0645, 0x0649]),
    (0xFD79, true, &[0x063A, 0x0645, 0x0645]),
    (0xFD7A, true, &[0x063A, 0x0645, 0x064A]),
    (0xFD7B, true, &[0x063A, 0x0645, 0x0649]),
    (0xFD7C, true, &[0x0641, 0x062E, 0x0645]),
    (0xFD7D, true, &[0x0641, 0x062E, 0x0645]),
    (0xFD7E, true, &[0x0642, 0x0645, 0x062D]),
    (0xFD7F, true, &[0x0642, 0x0645, 0x0645]),
    (0xFD80, true, &[0x0644, 0x062D, 0x0645]),
    (0xFD81, true, &[0x0644, 0x062D, 0x064A]),
    (0xFD82, true, &[0x0644, 0x062D, 0x0649]),
    (0xFD83, true, &[0x0644, 0x062C, 0x062C]),
    (0xFD84, true, &[0x0644, 0x062C, 0x062C]),
    (0xFD85, true, &[0x0644, 0x062E, 0x0645]),
    (0xFD86, true, &[0x0644, 0x062E, 0x0645]),
    (0xFD87, true, &[0x0644, 0x0645, 0x062D]),
    (0xFD88, true, &[0x0644, 0x0645, 0x062D]),
    (0xFD89, true, &[0x0645, 0x062D, 0x062C]),
    (0xFD8A, true, &[0x0645, 0x062D, 0x0645]),
    (0xFD8B, true, &[0x0645, 0x062D, 0x064A]),
    (0xFD8C, true, &[0x0645, 0x062C, 0x062D]),
    (0xFD8D, true, &[0x0645, 0x062C, 0x0645]),
    (0xFD8E, true, &[0x0645, 0x062E, 0x062C]),
    (0xFD8F, true, &[0x0645, 0x062E, 0x0645]),
    (0xFD92, true, &[0x0645, 0x062C, 0x062E]),
    (0xFD93, true, &[0x0647, 0x0645, 0x062C]),
    (0xFD94, true, &[0x0647, 0x0645, 0x0645]),
    (0xFD95, true, &[0x0646, 0x062D, 0x0645]),
    (0xFD96, true, &[0x0646, 0x062D, 0x0649]),
    (0xFD97, true, &[0x0646, 0x062C, 0x0645]),
    (0xFD98, true, &[0x0646, 0x062C, 0x0645]),
    (0xFD99, true, &[0x0646, 0x062C, 0x0649]),
    (0xFD9A, true, &[0x0646, 0x0645, 0x064A]),
    (0xFD9B, true, &[0x0646, 0x0645, 0x0649]),
    (0xFD9C, true, &[0x064A, 0x0645, 0x0645]),
    (0xFD9D, true, &[0x064A, 0x0645, 0x0645]),
    (0xFD9E, true, &[0x0628, 0x062E, 0x064A]),
    (0xFD9F, true, &[0x062A, 0x062C, 0x064A]),
    (0xFDA0, true, &[0x062A, 0x062C, 0x0649]),
    (0xFDA1, true, &[0x062A, 0x062E, 0x064A]),
    (0xFDA2, true, &[0x062A, 0x062E, 0x0649]),
    (0xFDA3, true, &[0x062A, 0x0645, 0x064A]),
    (0xFDA4, true, &[0x062A, 0x0645, 0x0649]),
    (0xFDA5, true, &[0x062C, 0x0645, 0x064A]),
    (0xFDA6, true, &[0x062C, 0x062D, 0x0649]),
    (0xFDA7, true, &[0x062C, 0x0645, 0x0649]),
    (0xFDA8, true, &[0x0633, 0x062E, 0x0649]),
    (0xFDA9, true, &[0x0635, 0x062D, 0x064A]),
    (0xFDAA, true, &[0x0634, 0x062D, 0x064A]),
    (0xFDAB, true, &[0x0636, 0x062D, 0x064A]),
    (0xFDAC, true, &[0x0644, 0x062C, 0x064A]),
    (0xFDAD, true, &[0x0644, 0x0645, 0x064A]),
    (0xFDAE, true, &[0x064A, 0x062D, 0x064A]),
    (0xFDAF, true, &[0x064A, 0x062C, 0x064A]),
    (0xFDB0, true, &[0x064A, 0x0645, 0x064A]),
    (0xFDB1, true, &[0x0645, 0x0645, 0x064A]),
    (0xFDB2, true, &[0x0642, 0x0645, 0x064A]),
    (0xFDB3, true, &[0x0646, 0x062D, 0x064A]),
    (0xFDB4, true, &[0x0642, 0x0645, 0x062D]),
    (0xFDB5, true, &[0x0644, 0x062D, 0x0645]),
    (0xFDB6, true, &[0x0639, 0x0645, 0x064A]),
    (0xFDB7, true, &[0x0643, 0x0645, 0x064A]),
    (0xFDB8, true, &[0x0646, 0x062C, 0x062D]),
    (0xFDB9, true, &[0x0645, 0x062E, 0x064A]),
    (0xFDBA, true, &[0x0644, 0x062C, 0x0645]),
    (0xFDBB, true, &[0x0643, 0x0645, 0x0645]),
    (0xFDBC, true, &[0x0644, 0x062C, 0x0645]),
    (0xFDBD, true, &[0x0646, 0x062C, 0x062D]),
    (0xFDBE, true, &[0x062C, 0x062D, 0x064A]),
    (0xFDBF, true, &[0x062D, 0x062C, 0x064A]),
    (0xFDC0, true, &[0x0645, 0x062C, 0x064A]),
    (0xFDC1, true, &[0x0641, 0x0645, 0x064A]),
    (0xFDC2, true, &[0x0628, 0x062D, 0x064A]),
    (0xFDC3, true, &[0x0643, 0x0645, 0x0645]),
    (0xFDC4, true, &[0x0639, 0x062C, 0x0645]),
    (0xFDC5, true, &[0x0635, 0x0645, 0x0645]),
    (0xFDC6, true, &[0x0633, 0x062E, 0x064A]),
    (0xFDC7, true, &[0x0646, 0x062C, 0x064A]),
    (0xFDF0, true, &[0x0635, 0x0644, 0x06D2]),
    (0xFDF1, true, &[0x0642, 0x0644, 0x06D2]),
    (0xFDF2, true, &[0x0627, 0x0644, 0x0644, 0x0647]),
    (0xFDF3, true, &[0x0627, 0x0643, 0x0628, 0x0631]),
    (0xFDF4, true, &[0x0645, 0x062D, 0x0645, 0x062F]),
    (0xFDF5, true, &[0x0635, 0x0644, 0x0639, 0x0645]),
    (0xFDF6, true, &[0x0631, 0x0633, 0x0648, 0x0644]),
    (0xFDF7, true, &[0x0639, 0x0644, 0x064A, 0x0647]),
    (0xFDF8, true, &[0x0648, 0x0633, 0x0644, 0x0645]),
    (0xFDF9, true, &[0x0635, 0x0644, 0x0649]),
    (0xFDFA, true, &[0x0635, 0x0644, 0x0649, 0x0020, 0x0627, 0x0644, 0x0644, 0x0647, 0x0020, 0x0639, 0x0644, 0x064A, 0x0647, 0x0020, 0x0648, 0x0633, 0x0644, 0x0645]),
    (0xFDFB, true, &[0x062C, 0x0644, 0x0020, 0x062C, 0x0644, 0x0627, 0x0644, 0x0647]),
    (0xFDFC, true, &[0x0631, 0x06CC, 0x0627, 0x0644]),
    (0xFE10, true, &[0x002C]),
    (0xFE11, true, &[0x3001]),
    (0xFE12, true, &[0x3002]),
    (0xFE13, true, &[0x003A]),
    (0xFE14, true, &[0x003B]),
    (0xFE15, true, &[0x0021]),
    (0xFE16, true, &[0x003F]),
    (0xFE17, true, &[0x3016]),
    (0xFE18, true, &[0x3017]),
    (0xFE19, true, &[0x2026]),
    (0xFE30, true, &[0x2025]),
    (0xFE31, true, &[0x2014]),
    (0xFE32, true, &[0x2013]),
    (0xFE33, true, &[0x005F]),
    (0xFE34, true, &[0x005F]),
    (0xFE35, true, &[0x0028]),
    (0xFE36, true, &[0x0029]),
    (0xFE37, true, &[0x007B]),
    (0xFE38, true, &[0x007D]),
    (0xFE39, true, &[0x3014]),
    (0xFE3A, true, &[0x3015]),
    (0xFE3B, true, &[0x3010]),
    (0xFE3C, true, &[0x3011]),
    (0xFE3D, true, &[0x300A]),
    (0xFE3E, true, &[0x300B]),
    (0xFE3F, true, &[0x3008]),
    (0xFE40, true, &[0x3009]),
    (0xFE41, true, &[0x300C]),
    (0xFE42, true, &[0x300D]),
    (0xFE43, true, &[0x300E]),
    (0xFE44, true, &[0x300F]),
    (0xFE47, true, &[0x005B]),
    (0xFE48, true, &[0x005D]),
    (0xFE49, true, &[0x203E]),
    (0xFE4A, true, &[0x203E]),
    (0xFE4B, true, &[0x203E]),
    (0xFE4C, true, &[0x203E]),
    (0xFE4D, true, &[0x005F]),
    (0xFE4E, true, &[0x005F]),
    (0xFE4F, true, &[0x005F]),
    (0xFE50, true, &[0x002C]),
    (0xFE51, true, &[0x3001]),
    (0xFE52, true, &[0x002E]),
    (0xFE54, true, &[0x003B]),
    (0xFE55, true, &[0x003A]),
    (0xFE56, true, &[0x003F]),
    (0xFE57, true, &[0x0021]),
    (0xFE58, true, &[0x2014]),
    (0xFE59, true, &[0x0028]),
    (0xFE5A, true, &[0x0029]),
    (0xFE5B, true, &[0x007B]),
    (0xFE5C, true, &[0x007D]),
    (0xFE5D, true, &[0x3014]),
    (0xFE5E, true, &[0x3015]),
    (0xFE5F, true, &[0x0023]),
    (0xFE60, true, &[0x0026]),
    (0xFE61, true, &[0x002A]),
    (0xFE62, true, &[0x002B]),
    (0xFE63, true, &[0x002D]),
    (0xFE64, true, &[0x003C]),
    (0xFE65, true, &[0x003E]),
    (0xFE66, true, &[0x003D]),
    (0xFE68, true, &[0x005C]),
    (0xFE69, true, &[0x0024]),
    (0xFE6A, true, &[0x0025]),
    (0xFE6B, true, &[0x0040]),
    (0xFE70, true, &[0x0020, 0x064B]),
    (0xFE71, true, &[0x0640, 0x064B]),
    (0xFE72, true, &[0x0020, 0x064C]),
    (0xFE74, true, &[0x0020, 0x064D]),
    (0xFE76, true, &[0x0020, 0x064E]),
    (0xFE77, true, &[0x0640, 0x064E]),
    (0xFE78, true, &[0x0020, 0x064F]),
    (0xFE79, true, &[0x0640, 0x064F]),
    (0xFE7A, true, &[0x0020, 0x0650]),
    (0xFE7B, true, &[0x0640, 0x0650]),
    (0xFE7C, true, &[0x0020, 0x0651]),
    (0xFE7D, true, &[0x0640, 0x0651]),
    (0xFE7E, true, &[0x0020, 0x0652]),
    (0xFE7F, true, &[0x0640, 0x0652]),
    (0xFE80, true, &[0x0621]),
    (0xFE81, true, &[0x0622]),
    (0xFE82, true, &[0x0622]),
    (0xFE83, true, &[0x0623]),
    (0xFE84, true, &[0x0623]),
    (0xFE85, true, &[0x0624]),
    (0xFE86, true, &[0x0624]),
    (0xFE87, true, &[0x0625]),
    (0xFE88, true, &[0x0625]),
    (0xFE89, true, &[0x0626]),
    (0xFE8A, true, &[0x0626]),
    (0xFE8B, true, &[0x0626]),
    (0xFE8C, true, &[0x0626]),
    (0xFE8D, true, &[0x0627]),
    (0xFE8E, true, &[0x0627]),
    (0xFE8F, true, &[0x0628]),
    (0xFE90, true, &[0x0628]),
    (0xFE91, true, &[0x0628]),
    (0xFE92, true, &[0x0628]),
    (0xFE93, true, &[0x0629]),
    (0xFE94, true, &[0x0629]),
    (0xFE95, true, &[0x062A]),
    (0xFE96, true, &[0x062A]),
    (0xFE97, true, &[0x062A]),
    (0xFE98, true, &[0x062A]),
    (0xFE99, true, &[0x062B]),
    (0xFE9A, true, &[0x062B]),
    (0xFE9B, true, &[0x062B]),
    (0xFE9C, true, &[0x062B]),
    (0xFE9D, true, &[0x062C]),
    (0xFE9E, true, &[0x062C]),
    (0xFE9F, true, &[0x062C]),
    (0xFEA0, true, &[0x062C]),
    (0xFEA1, true, &[0x062D]),
    (0xFEA2, true, &[0x062D]),
    (0xFEA3, true, &[0x062D]),
    (0xFEA4, true, &[0x062D]),
    (0xFEA5, true, &[0x062E]),
    (0xFEA6, true, &[0x062E]),
    (0xFEA7, true, &[0x062E]),
    (0xFEA8, true, &[0x062E]),
    (0xFEA9, true, &[0x062F]),
    (0xFEAA, true, &[0x062F]),
    (0xFEAB, true, &[0x0630]),
    (0xFEAC, true, &[0x0630]),
    (0xFEAD, true, &[0x0631]),
    (0xFEAE, true, &[0x0631]),
    (0xFEAF, true, &[0x0632]),
    (0xFEB0, true, &[0x0632]),
    (0xFEB1, true, &[0x0633]),
    (0xFEB2, true, &[0x0633]),
    (0xFEB3, true, &[0x0633]),
    (0xFEB4, true, &[0x0633]),
    (0xFEB5, true, &[0x0634]),
    (0xFEB6, true, &[0x0634]),
    (0xFEB7, true, &[0x0634]),
    (0xFEB8, true, &[0x0634]),
    (0xFEB9, true, &[0x0635]),
    (0xFEBA, true, &[0x0635]),
    (0xFEBB, true, &[0x0635]),
    (0xFEBC, true, &[0x0635]),
    (0xFEBD, true, &[0x0636]),
    (0xFEBE, true, &[0x0636]),
    (0xFEBF, true, &[0x0636]),
    (0xFEC0, true, &[0x0636]),
    (0xFEC1, true, &[0x0637]),
    (0xFEC2, true, &[0x0637]),
    (0xFEC3, true, &[0x0637]),
    (0xFEC4, true, &[0x0637]),
    (0xFEC5, true, &[0x0638]),
    (0xFEC6, true, &[0x0638]),
    (0xFEC7, true, &[0x0638]),
    (0xFEC8, true, &[0x0638]),
    (0xFEC9, true, &[0x0639]),
    (0xFECA, true, &[0x0639]),
    (0xFECB, true, &[0x0639]),
    (0xFECC, true, &[0x0639]),
    (0xFECD, true, &[0x063A]),
    (0xFECE, true, &[0x063A]),
    (0xFECF, true, &[0x063A]),
    (0xFED0, true, &[0x063A]),
    (0xFED1, true, &[0x0641]),
    (0xFED2, true, &[0x0641]),
    (0xFED3, true, &[0x0641]),
    (0xFED4, true, &[0x0641]),
    (0xFED5, true, &[0x0642]),
    (0xFED6, true, &[0x0642]),
    (0xFED7, true, &[0x0642]),
    (0xFED8, true, &[0x0642]),
    (0xFED9, true, &[0x0643]),
    (0xFEDA, true, &[0x0643]),
    (0xFEDB, true, &[0x0643]),
    (0xFEDC, true, &[0x0643]),
    (0xFEDD, true, &[0x0644]),
    (0xFEDE, true, &[0x0644]),
    (0xFEDF, true, &[0x0644]),
    (0xFEE0, true, &[0x0644]),
    (0xFEE1, true, &[0x0645]),
    (0xFEE2, true, &[0x0645]),
    (0xFEE3, true, &[0x0645]),
    (0xFEE4, true, &[0x0645]),
    (0xFEE5, true, &[0x0646]),
    (0xFEE6, true, &[0x0646]),
    (0xFEE7, true, &[0x0646]),
    (0xFEE8, true, &[0x0646]),
    (0xFEE9, true, &[0x0647]),
    (0xFEEA, true, &[0x0647]),
    (0xFEEB, true, &[0x0647]),
    (0xFEEC, true, &[0x0647]),
    (0xFEED, true, &[0x0648]),
    (0xFEEE, true, &[0x0648]),
    (0xFEEF, true, &[0x0649]),
    (0xFEF0, true, &[0x0649]),
    (0xFEF1, true, &[0x064A]),
    (0xFEF2, true, &[0x064A]),
    (0xFEF3, true, &[0x064A]),
    (0xFEF4, true, &[0x064A]),
    (0xFEF5, true, &[0x0644, 0x0622]),
    (0xFEF6, true, &[0x0644, 0x0622]),
    (0xFEF7, true, &[0x0644, 0x0623]),
    (0xFEF8, true, &[0x0644, 0x0623]),
    (0xFEF9, true, &[0x0644, 0x0625]),
    (0xFEFA, true, &[0x0644, 0x0625]),
    (0xFEFB, true, &[0x0644, 0x0627]),
    (0xFEFC, true, &[0x0644, 0x0627]),
    (0xFF01, true, &[0x0021]),
    (0xFF02, true, &[0x0022]),
    (0xFF03, true, &[0x0023]),
    (0xFF04, true, &[0x0024]),
    (0xFF05, true, &[0x0025]),
    (0xFF06, true, &[0x0026]),
    (0xFF07, true, &[0x0027]),
    (0xFF08, true, &[0x0028]),
    (0xFF09, true, &[0x0029]),
    (0xFF0A, true, &[0x002A]),
    (0xFF0B, true, &[0x002B]),
    (0xFF0C, true, &[0x002C]),
    (0xFF0D, true, &[0x002D]),
    (0xFF0E, true, &[0x002E]),
    (0xFF0F, true, &[0x002F]),
    (0xFF10, true, &[0x0030]),
    (0xFF11, true, &[0x0031]),
    (0xFF12, true, &[0x0032]),
    (0xFF13, true, &[0x0033]),
    (0xFF14, true, &[0x0034]),
    (0xFF15, true, &[0x0035]),
    (0xFF16, true, &[0x0036]),
    (0xFF17, true, &[0x0037]),
    (0xFF18, true, &[0x0038]),
    (0xFF19, true, &[0x0039]),
    (0xFF1A, true, &[0x003A]),
    (0xFF1B, true, &[0x003B]),
    (0xFF1C, true, &[0x003C]),
    (0xFF1D, true, &[0x003D]),
    (0xFF1E, true, &[0x003E]),
    (0xFF1F, true, &[0x003F]),
    (0xFF20, true, &[0x0040]),
    (0xFF21, true, &[0x0041]),
    (0xFF22, true, &[0x0042]),
    (0xFF23, true, &[0x0043]),
    (0xFF24, true, &[0x0044]),
    (0xFF25, true, &[0x0045]),
    (0xFF26, true, &[0x0046]),
    (0xFF27, true, &[0x0047]),
    (0xFF28, true, &[0x0048]),
    (0xFF29, true, &[0x0049]),
    (0xFF2A, true, &[0x004A]),
    (0xFF2B, true, &[0x004B]),
    (0xFF2C, true, &[0x004C]),
    (0xFF2D, true, &[0x004D]),
    (0xFF2E, true, &[0x004E]),
    (0xFF2F, true, &[0x004F]),
    (0xFF30, true, &[0x0050]),
    (0xFF31, true, &[0x0051]),
    (0xFF32, true, &[0x0052]),
    (0xFF33, true, &[0x0053]),
    (0xFF34, true, &[0x0054]),
    (0xFF35, true, &[0x0055]),
    (0xFF36, true, &[0x0056]),
    (0xFF37, true, &[0x0057]),
    (0xFF38, true, &[0x0058]),
    (0xFF39, true, &[0x0059]),
    (0xFF3A, true, &[0x005A]),
    (0xFF3B, true, &[0x005B]),
    (0xFF3C, true, &[0x005C]),
    (0xFF3D, true, &[0x005D]),
    (0xFF3E, true, &[0x005E]),
    (0xFF3F, true, &[0x005F]),
    (0xFF40, true, &[0x0060]),
    (0xFF41, true, &[0x0061]),
    (0xFF42, true, &[0x0062]),
    (0xFF43, true, &[0x0063]),
    (0xFF44, true, &[0x0064]),
    (0xFF45, true, &[0x0065]),
    (0xFF46, true, &[0x0066]),
    (0xFF47, true, &[0x0067]),
    (0xFF48, true, &[0x0068]),
    (0xFF49, true, &[0x0069]),
    (0xFF4A, true, &[0x006A]),
    (0xFF4B, true, &[0x006B]),
    (0xFF4C, true, &[0x006C]),
    (0xFF4D, true, &[0x006D]),
    (0xFF4E, true, &[0x006E]),
    (0xFF4F, true, &[0x006F]),
    (0xFF50, true, &[0x0070]),
    (0xFF51, true, &[0x0071]),
    (0xFF52, true, &[0x0072]),
    (0xFF53, true, &[0x0073]),
    (0xFF54, true, &[0x0074]),
    (0xFF55, true, &[0x0075]),
    (0xFF56, true, &[0x0076]),
    (0xFF57, true, &[0x0077]),
    (0xFF58, true, &[0x0078]),
    (0xFF59, true, &[0x0079]),
    (0xFF5A, true, &[0x007A]),
    (0xFF5B, true, &[0x007B]),
    (0xFF5C, true, &[0x007C]),
    (0xFF5D, true, &[0x007D]),
    (0xFF5E, true, &[0x007E]),
    (0xFF5F, true, &[0x2985]),
    (0xFF60, true, &[0x2986]),
    (0xFF61, true, &[0x3002]),
    (0xFF62, true, &[0x300C]),
    (0xFF63, true, &[0x300D]),
    (0xFF64, true, &[0x3001]),
    (0xFF65, true, &[0x30FB]),
    (0xFF66, true, &[0x30F2]),
    (0xFF67, true, &[0x30A1]),
    (0xFF68, true, &[0x30A3]),
    (0xFF69, true, &[0x30A5]),
    (0xFF6A, true, &[0x30A7]),
    (0xFF6B, true, &[0x30A9]),
    (0xFF6C, true, &[0x30E3]),
    (0xFF6D, true, &[0x30E5]),
    (0xFF6E, true, &[0x30E7]),
    (0xFF6F, true, &[0x30C3]),
    (0xFF70, true, &[0x30FC]),
    (0xFF71, true, &[0x30A2]),
    (0xFF72, true, &[0x30A4]),
    (0xFF73, true, &[0x30A6]),
    (0xFF74, true, &[0x30A8]),
    (0xFF75, true, &[0x30AA]),
    (0xFF76, true, &[0x30AB]),
    (0xFF77, true, &[0x30AD]),
    (0xFF78, true, &[0x30AF]),
    (0xFF79, true, &[0x30B1]),
    (0xFF7A, true, &[0x30B3]),
    (0xFF7B, true, &[0x30B5]),
    (0xFF7C, true, &[0x30B7]),
    (0xFF7D, true, &[0x30B9]),
    (0xFF7E, true, &[0x30BB]),
    (0xFF7F, true, &[0x30BD]),
    (0xFF80, true, &[0x30BF]),
    (0xFF81, true, &[0x30C1]),
    (0xFF82, true, &[0x30C4]),
    (0xFF83, true, &[0x30C6]),
    (0xFF84, true, &[0x30C8]),
    (0xFF85, true, &[0x30CA]),
    (0xFF86, true, &[0x30CB]),
    (0xFF87, true, &[0x30CC]),
    (0xFF88, true, &[0x30CD]),
    (0xFF89, true, &[0x30CE]),
    (0xFF8A, true, &[0x30CF]),
    (0xFF8B, true, &[0x30D2]),
    (0xFF8C, true, &[0x30D5]),
    (0xFF8D, true, &[0x30D8]),
    (0xFF8E, true, &[0x30DB]),
    (0xFF8F, true, &[0x30DE]),
    (0xFF90, true, &[0x30DF]),
    (0xFF91, true, &[0x30E0]),
    (0xFF92, true, &[0x30E1]),
    (0xFF93, true, &[0x30E2]),
    (0xFF94, true, &[0x30E4]),
    (0xFF95, true, &[0x30E6]),
    (0xFF96, true, &[0x30E8]),
    (0xFF97, true, &[0x30E9]),
    (0xFF98, true, &[0x30EA]),
    (0xFF99, true, &[0x30EB]),
    (0xFF9A, true, &[0x30EC]),
    (0xFF9B, true, &[0x30ED]),
    (0xFF9C, true, &[0x30EF]),
    (0xFF9D, true, &[0x30F3]),
    (0xFF9E, true, &[0x3099]),
    (0xFF9F, true, &[0x309A]),
    (0xFFA0, true, &[0x3164]),
    (0xFFA1, true, &[0x3131]),
    (0xFFA2, true, &[0x3132]),
    (0xFFA3, true, &[0x3133]),
    (0xFFA4, true, &[0x3134]),
    (0xFFA5, true, &[0x3135]),
    (0xFFA6, true, &[0x3136]),
    (0xFFA7, true, &[0x3137]),
    (0xFFA8, true, &[0x3138]),
    (0xFFA9, true, &[0x3139]),
    (0xFFAA, true, &[0x313A]),
    (0xFFAB, true, &[0x313B]),
    (0xFFAC, true, &[0x313C]),
    (0xFFAD, true, &[0x313D]),
    (0xFFAE, true, &[0x313E]),
    (0xFFAF, true, &[0x313F]),
    (0xFFB0, true, &[0x3140]),
    (0xFFB1, true, &[0x3141]),
    (0xFFB2, true, &[0x3142]),
    (0xFFB3, true, &[0x3143]),
    (0xFFB4, true, &[0x3144]),
    (0xFFB5, true, &[0x3145]),
    (0xFFB6, true, &[0x3146]),
    (0xFFB7, true, &[0x3147]),
    (0xFFB8, true, &[0x3148]),
    (0xFFB9, true, &[0x3149]),
    (0xFFBA, true, &[0x314A]),
    (0xFFBB, true, &[0x314B]),
    (0xFFBC, true, &[0x314C]),
    (0xFFBD, true, &[0x314D]),
    (0xFFBE, true, &[0x314E]),
    (0xFFC2, true, &[0x314F]),
    (0xFFC3, true, &[0x3150]),
    (0xFFC4, true, &[0x3151]),
    (0xFFC5, true, &[0x3152]),
    (0xFFC6, true, &[0x3153]),
    (0xFFC7, true, &[0x3154]),
    (0xFFCA, true, &[0x3155]),
    (0xFFCB, true, &[0x3156]),
    (0xFFCC, true, &[0x3157]),
    (0xFFCD, true, &[0x3158]),
    (0xFFCE, true, &[0x3159]),
    (0xFFCF, true, &[0x315A]),
    (0xFFD2, true, &[0x315B]),
    (0xFFD3, true, &[0x315C]),
    (0xFFD4, true, &[0x315D]),
    (0xFFD5, true, &[0x315E]),
    (0xFFD6, true, &[0x315F]),
    (0xFFD7, true, &[0x3160]),
    (0xFFDA, true, &[0x3161]),
    (0xFFDB, true, &[0x3162]),
    (0xFFDC, true, &[0x3163]),
    (0xFFE0, true, &[0x00A2]),
    (0xFFE1, true, &[0x00A3]),
    (0xFFE2, true, &[0x00AC]),
    (0xFFE3, true, &[0x00AF]),
    (0xFFE4, true, &[0x00A6]),
    (0xFFE5, true, &[0x00A5]),
    (0xFFE6, true, &[0x20A9]),
    (0xFFE8, true, &[0x2502]),
    (0xFFE9, true, &[0x2190]),
    (0xFFEA, true, &[0x2191]),
    (0xFFEB, true, &[0x2192]),
    (0xFFEC, true, &[0x2193]),
    (0xFFED, true, &[0x25A0]),
    (0xFFEE, true, &[0x25CB]),
    (0x10781, true, &[0x02D0]),
    (0x10782, true, &[0x02D1]),
    (0x10783, true, &[0x00E6]),
    (0x10784, true, &[0x0299]),
    (0x10785, true, &[0x0253]),
    (0x10787, true, &[0x02A3]),
    (0x10788, true, &[0xAB66]),
    (0x10789, true, &[0x02A5]),
    (0x1078A, true, &[0x02A4]),
    (0x1078B, true, &[0x0256]),
    (0x1078C, true, &[0x0257]),
    (0x1078D, true, &[0x1D91]),
    (0x1078E, true, &[0x0258]),
    (0x1078F, true, &[0x025E]),
    (0x10790, true, &[0x02A9]),
    (0x10791, true, &[0x0264]),
    (0x10792, true, &[0x0262]),
    (0x10793, true, &[0x0260]),
    (0x10794, true, &[0x029B]),
    (0x10795, true, &[0x0127]),
    (0x10796, true, &[0x029C]),
    (0x10797, true, &[0x0267]),
    (0x10798, true, &[0x0284]),
    (0x10799, true, &[0x02AA]),
    (0x1079A, true, &[0x02AB]),
    (0x1079B, true, &[0x026C]),
    (0x1079C, true, &[0x1DF04]),
    (0x1079D, true, &[0xA78E]),
    (0x1079E, true, &[0x026E]),
    (0x1079F, true, &[0x1DF05]),
    (0x107A0, true, &[0x028E]),
    (0x107A1, true, &[0x1DF06]),
    (0x107A2, true, &[0x00F8]),
    (0x107A3, true, &[0x0276]),
    (0x107A4, true, &[0x0277]),
    (0x107A5, true, &[0x0071]),
    (0x107A6, true, &[0x027A]),
    (0x107A7, true, &[0x1DF08]),
    (0x107A8, true, &[0x027D]),
    (0x107A9, true, &[0x027E]),
    (0x107AA, true, &[0x0280]),
    (0x107AB, true, &[0x02A8]),
    (0x107AC, true, &[0x02A6]),
    (0x107AD, true, &[0xAB67]),
    (0x107AE, true, &[0x02A7]),
    (0x107AF, true, &[0x0288]),
    (0x107B0, true, &[0x2C71]),
    (0x107B2, true, &[0x028F]),
    (0x107B3, true, &[0x02A1]),
    (0x107B4, true, &[0x02A2]),
    (0x107B5, true, &[0x0298]),
    (0x107B6, true, &[0x01C0]),
    (0x107B7, true, &[0x01C1]),
    (0x107B8, true, &[0x01C2]),
    (0x107B9, true, &[0x1DF0A]),
    (0x107BA, true, &[0x1DF1E]),
    (0x1109A, false, &[0x11099, 0x110BA]),
    (0x1109C, false, &[0x1109B, 0x110BA]),
    (0x110AB, false, &[0x110A5, 0x110BA]),
    (0x1112E, false, &[0x11131, 0x11127]),
    (0x1112F, false, &[0x11132, 0x11127]),
    (0x1134B, false, &[0x11347, 0x1133E]),
    (0x1134C, false, &[0x11347, 0x11357]),
    (0x114BB, false, &[0x114B9, 0x114BA]),
    (0x114BC, false, &[0x114B9, 0x114B0]),
    (0x114BE, false, &[0x114B9, 0x114BD]),
    (0x115BA, false, &[0x115B8, 0x115AF]),
    (0x115BB, false, &[0x115B9, 0x115AF]),
    (0x11938, false, &[0x11935, 0x11930]),
    (0x1D15E, false, &[0x1D157, 0x1D165]),
    (0x1D15F, false, &[0x1D158, 0x1D165]),
    (0x1D160, false, &[0x1D15F, 0x1D16E]),
    (0x1D161, false, &[0x1D15F, 0x1D16F]),
    (0x1D162, false, &[0x1D15F, 0x1D170]),
    (0x1D163, false, &[0x1D15F, 0x1D171]),
    (0x1D164, false, &[0x1D15F, 0x1D172]),
    (0x1D1BB, false, &[0x1D1B9, 0x1D165]),
    (0x1D1BC, false, &[0x1D1BA, 0x1D165]),
    (0x1D1BD, false, &[0x1D1BB, 0x1D16E]),
    (0x1D1BE, false, &[0x1D1BC, 0x1D16E]),
    (0x1D1BF, false, &[0x1D1BB, 0x1D16F]),
    (0x1D1C0, false, &[0x1D1BC, 0x1D16F]),
    (0x1D400, true, &[0x0041]),
    (0x1D401, true, &[0x0042]),
    (0x1D402, true, &[0x0043]),
    (0x1D403, true, &[0x0044]),
    (0x1D404, true, &[0x0045]),
    (0x1D405, true, &[0x0046]),
    (0x1D406, true, &[0x0047]),
    (0x1D407, true, &[0x0048]),
    (0x1D408, true, &[0x0049]),
    (0x1D409, true, &[0x004A]),
    (0x1D40A, true, &[0x004B]),
    (0x1D40B, true, &[0x004C]),
    (0x1D40C, true, &[0x004D]),
    (0x1D40D, true, &[0x004E]),
    (0x1D40E, true, &[0x004F]),
    (0x1D40F, true, &[0x0050]),
    (0x1D410, true, &[0x0051]),
    (0x1D411, true, &[0x0052]),
    (0x1D412, true, &[0x0053]),
    (0x1D413, true, &[0x0054]),
    (0x1D414, true, &[0x0055]),
    (0x1D415, true, &[0x0056]),
    (0x1D416, true, &[0x0057]),
    (0x1D417, true, &[0x0058]),
    (0x1D418, true, &[0x0059]),
    (0x1D419, true, &[0x005A]),
    (0x1D41A, true, &[0x0061]),
    (0x1D41B, true, &[0x0062]),
    (0x1D41C, true, &[0x0063]),
    (0x1D41D, true, &[0x0064]),
    (0x1D41E, true, &[0x0065]),
    (0x1D41F, true, &[0x0066]),
    (0x1D420, true, &[0x0067]),
    (0x1D421, true, &[0x0068]),
    (0x1D422, true, &[0x0069]),
    (0x1D423, true, &[0x006A]),
    (0x1D424, true, &[0x006B]),
    (0x1D425, true, &[0x006C]),
    (0x1D426, true, &[0x006D]),
    (0x1D427, true, &[0x006E]),
    (0x1D428, true, &[0x006F]),
    (0x1D429, true, &[0x0070]),
    (0x1D42A, true, &[0x0071]),
    (0x1D42B, true, &[0x0072]),
    (0x1D42C, true, &[0x0073]),
    (0x1D42D, true, &[0x0074]),
    (0x1D42E, true, &[0x0075]),
    (0x1D42F, true, &[0x0076]),
    (0x1D430, true, &[0x0077]),
    (0x1D431, true, &[0x0078]),
    (0x1D432, true, &[0x0079]),
    (0x1D433, true, &[0x007A]),
    (0x1D434, true, &[0x0041]),
    (0x1D435, true, &[0x0042]),
    (0x1D436, true, &[0x0043]),
    (0x1D437, true, &[0x0044]),
    (0x1D438, true, &[0x0045]),
    (0x1D439, true, &[0x0046]),
    (0x1D43A, true, &[0x0047]),
    (0x1D43B, true, &[0x0048]),
    (0x1D43C, true, &[0x0049]),
    (0x1D43D, true, &[0x004A]),
    (0x1D43E, true, &[0x004B]),
    (0x1D43F, true, &[0x004C]),
    (0x1D440, true, &[0x004D]),
    (0x1D441, true, &[0x004E]),
    (0x1D442, true, &[0x004F]),
    (0x1D443, true, &[0x0050]),
    (0x1D444, true, &[0x0051]),
    (0x1D445, true, &[0x0052]),
    (0x1D446, true, &[0x0053]),
    (0x1D447, true, &[0x0054]),
    (0x1D448, true, &[0x0055]),
    (0x1D449, true, &[0x0056]),
    (0x1D44A, true, &[0x0057]),
    (0x1D44B, true, &[0x0058]),
    (0x1D44C, true, &[0x0059]),
    (0x1D44D, true, &[0x005A]),
    (0x1D44E, true, &[0x0061]),
    (0x1D44F, true, &[0x0062]),
    (0x1D450, true, &[0x0063]),
    (0x1D451, true, &[0x0064]),
    (0x1D452, true, &[0x0065]),
    (0x1D453, true, &[0x0066]),
    (0x1D454, true, &[0x0067]),
    (0x1D456, true, &[0x0069]),
    (0x1D457, true, &[0x006A]),
    (0x1D458, true, &[0x006B]),
    (0x1D459, true, &[0x006C]),
    (0x1D45A, true, &[0x006D]),
    (0x1D45B, true, &[0x006E]),
    (0x1D45C, true, &[0x006F]),
    (0x1D45D, true, &[0x0070]),
    (0x1D45E, true, &[0x0071]),
    (0x1D45F, true, &[0x0072]),
    (0x1D460, true, &[0x0073]),
    (0x1D461, true, &[0x0074]),
    (0x1D462, true, &[0x0075]),
    (0x1D463, true, &[0x0076]),
    (0x1D464, true, &[0x0077]),
    (0x1D465, true, &[0x0078]),
    (0x1D466, true, &[0x0079]),
    (0x1D467, true, &[0x007A]),
    (0x1D468, true, &[0x0041]),
    (0x1D469, true, &[0x0042]),
    (0x1D46A, true, &[0x0043]),
    (0x1D46B, true, &[0x0044]),
    (0x1D46C, true, &[0x0045]),
    (0x1D46D, true, &[0x0046]),
    (0x1D46E, true, &[0x0047]),
    (0x1D46F, true, &[0x0048]),
    (0x1D470, true, &[0x0049]),
    (0x1D471, true, &[0x004A]),
    (0x1D472, true, &[0x004B]),
    (0x1D473, true, &[0x004C]),
    (0x1D474, true, &[0x004D]),
    (0x1D475, true, &[0x004E]),
    (0x1D476, true, &[0x004F]),
    (0x1D477, true, &[0x0050]),
    (0x1D478, true, &[0x0051]),
    (0x1D479, true, &[0x0052]),
    (0x1D47A, true, &[0x0053]),
    (0x1D47B, true, &[0x0054]),
    (0x1D47C, true, &[0x0055]),
    (0x1D47D, true, &[0x0056]),
    (0x1D47E, true, &[0x0057]),
    (0x1D47F, true, &[0x0058]),
    (0x1D480, true, &[0x0059]),
    (0x1D481, true, &[0x005A]),
    (0x1D482, true, &[0x0061]),
    (0x1D483, true, &[0x0062]),
    (0x1D484, true, &[0x0063]),
    (0x1D485, true, &[0x0064]),
    (0x1D486, true, &[0x0065]),
    (0x1D487, true, &[0x0066]),
    (0x1D488, true, &[0x0067]),
    (0x1D489, true, &[0x0068]),
    (0x1D48A, true, &[0x0069]),
    (0x1D48B, true, &[0x006A]),
    (0x1D48C, true, &[0x006B]),
    (0x1D48D, true, &[0x006C]),
    (0x1D48E, true, &[0x006D]),
    (0x1D48F, true, &[0x006E]),
    (0x1D490, true, &[0x006F]),
    (0x1D491, true, &[0x0070]),
    (0x1D492, true, &[0x0071]),
    (0x1D493, true, &[0x0072]),
    (0x1D494, true, &[0x0073]),
    (0x1D495, true, &[0x0074]),
    (0x1D496, true, &[0x0075]),
    (0x1D497, true, &[0x0076]),
    (0x1D498, true, &[0x0077]),
    (0x1D499, true, &[0x0078]),
    (0x1D49A, true, &[0x0079]),
    (0x1D49B, true, &[0x007A]),
    (0x1D49C, true, &[0x0041]),
    (0x1D49E, true, &[0x0043]),
    (0x1D49F, true, &[0x0044]),
    (0x1D4A2, true, &[0x0047]),
    (0x1D4A5, true, &[0x004A]),
    (0x1D4A6, true, &[0x004B]),
    (0x1D4A9, true, &[0x004E]),
    (0x1D4AA, true, &[0x004F]),
    (0x1D4AB, true, &[0x0050]),
    (0x1D4AC, true, &[0x0051]),
    (0x1D4AE, true, &[0x0053]),
    (0x1D4AF, true, &[0x0054]),
    (0x1D4B0, true, &[0x0055]),
    (0x1D4B1, true, &[0x0056]),
    (0x1D4B2, true, &[0x0057]),
    (0x1D4B3, true, &[0x0058]),
    (0x1D4B4, true, &[0x0059]),
    (0x1D4B5, true, &[0x005A]),
    (0x1D4B6, true, &[0x0061]),
    (0x1D4B7, true, &[0x0062]),
    (0x1D4B8, true, &[0x0063]),
    (0x1D4B9, true, &[0x0064]),
    (0x1D4BB, true, &[0x0066]),
    (0x1D4BD, true, &[0x0068]),
    (0x1D4BE, true, &[0x0069]),
    (0x1D4BF, true, &[0x006A]),
    (0x1D4C0, true, &[0x006B]),
    (0x1D4C1, true, &[0x006C]),
    (0x1D4C2, true, &[0x006D]),
    (0x1D4C3, true, &[0x006E]),
    (0x1D4C5, true, &[0x0070]),
    (0x1D4C6, true, &[0x0071]),
    (0x1D4C7, true, &[0x0072]),
    (0x1D4C8, true, &[0x0073]),
    (0x1D4C9, true, &[0x0074]),
    (0x1D4CA, true, &[0x0075]),
    (0x1D4CB, true, &[0x0076]),
    (0x1D4CC, true, &[0x0077]),
    (0x1D4CD, true, &[0x0078]),
    (0x1D4CE, true, &[0x0079]),
    (0x1D4CF, true, &[0x007A]),
    (0x1D4D0, true, &[0x0041]),
    (0x1D4D1, true, &[0x0042]),
    (0x1D4D2, true, &[0x0043]),
    (0x1D4D3, true, &[0x0044]),
    (0x1D4D4, true, &[0x0045]),
    (0x1D4D5, true, &[0x0046]),
    (0x1D4D6, true, &[0x0047]),
    (0x1D4D7, true, &[0x0048]),
    (0x1D4D8, true, &[0x0049]),
    (0x1D4D9, true, &[0x004A]),
    (0x1D4DA, true, &[0x004B]),
    (0x1D4DB, true, &[0x004C]),
    (0x1D4DC, true, &[0x004D]),
    (0x1D4DD, true, &[0x004E]),
    (0x1D4DE, true, &[0x004F]),
    (0x1D4DF, true, &[0x0050]),
    (0x1D4E0, true, &[0x0051]),
    (0x1D4E1, true, &[0x0052]),
    (0x1D4E2, true, &[0x0053]),
    (0x1D4E3, true, &[0x0054]),
    (0x1D4E4, true, &[0x0055]),
    (0x1D4E5, true, &[0x0056]),
    (0x1D4E6, true, &[0x0057]),
    (0x1D4E7, true, &[0x0058]),
    (0x1D4E8, true, &[0x0059]),
    (0x1D4E9, true, &[0x005A]),
    (0x1D4EA, true, &[0x0061]),
    (0x1D4EB, true, &[0x0062]),
    (0x1D4EC, true, &[0x0063]),
    (0x1D4ED, true, &[0x0064]),
    (0x1D4EE, true, &[0x0065]),
    (0x1D4EF, true, &[0x0066]),
    (0x1D4F0, true, &[0x0067]),
    (0x1D4F1, true, &[0x0068]),
    (0x1D4F2, true, &[0x0069]),
    (0x1D4F3, true, &[0x006A]),
    (0x1D4F4, true, &[0x006B]),
    (0x1D4F5, true, &[0x006C]),
    (0x1D4F6, true, &[0x006D]),
    (0x1D4F7, true, &[0x006E]),
    (0x1D4F8, true, &[0x006F]),
    (0x1D4F9, true, &[0x0070]),
    (0x1D4FA, true, &[0x0071]),
    (0x1D4FB, true, &[0x0072]),
    (0x1D4FC, true, &[0x0073]),
    (0x1D4FD, true, &[0x0074]),
    (0x1D4FE, true, &[0x0075]),
    (0x1D4FF, true, &[0x0076]),
    (0x1D500, true, &[0x0077]),
    (0x1D501, true, &[0x0078]),
    (0x1D502, true, &[0x0079]),
    (0x1D503, true, &[0x007A]),
    (0x1D504, true, &[0x0041]),
    (0x1D505, true, &[0x0042]),
    (0x1D507, true, &[0x0044]),
    (0x1D508, true, &[0x0045]),
    (0x1D509, true, &[0x0046]),
    (0x1D50A, true, &[0x0047]),
    (0x1D50D, true, &[0x004A]),
    (0x1D50E, true, &[0x004B]),
    (0x1D50F, true, &[0x004C]),
    (0x1D510, true, &[0x004D]),
    (0x1D511, true, &[0x004E]),
    (0x1D512, true, &[0x004F]),
    (0x1D513, true, &[0x0050]),
    (0x1D514, true, &[0x0051]),
    (0x1D516, true, &[0x0053]),
    (0x1D517, true, &[0x0054]),
    (0x1D518, true, &[0x0055]),
    (0x1D519, true, &[0x0056]),
    (0x1D51A, true, &[0x0057]),
    (0x1D51B, true, &[0x0058]),
    (0x1D51C, true, &[0x0059]),
    (0x1D51E, true, &[0x0061]),
    (0x1D51F, true, &[0x0062]),
    (0x1D520, true, &[0x0063]),
    (0x1D521, true, &[0x0064]),
    (0x1D522, true, &[0x0065]),
    (0x1D523, true, &[0x0066]),
    (0x1D524, true, &[0x0067]),
    (0x1D525, true, &[0x0068]),
    (0x1D526, true, &[0x0069]),
    (0x1D527, true, &[0x006A]),
    (0x1D528, true, &[0x006B]),
    (0x1D529, true, &[0x006C]),
    (0x1D52A, true, &[0x006D]),
    (0x1D52B, true, &[0x006E]),
    (0x1D52C, true, &[0x006F]),
    (0x1D52D, true, &[0x0070]),
    (0x1D52E, true, &[0x0071]),
    (0x1D52F, true, &[0x0072]),
    (0x1D530, true, &[0x0073]),
    (0x1D531, true, &[0x0074]),
    (0x1D532, true, &[0x0075]),
    (0x1D533, true, &[0x0076]),
    (0x1D534, true, &[0x0077]),
    (0x1D535, true, &[0x0078]),
    (0x1D536, true, &[0x0079]),
    (0x1D537, true, &[0x007A]),
    (0x1D538, true, &[0x0041]),
    (0x1D539, true, &[0x0042]),
    (0x1D53B, true, &[0x0044]),
    (0x1D53C, true, &[0x0045]),
    (0x1D53D, true, &[0x0046]),
    (0x1D53E, true, &[0x0047]),
    (0x1D540, true, &[0x0049]),
    (0x1D541, true, &[0x004A]),
    (0x1D542, true, &[0x004B]),
    (0x1D543, true, &[0x004C]),
    (0x1D544, true, &[0x004D]),
    (0x1D546, true, &[0x004F]),
    (0x1D54A, true, &[0x0053]),
    (0x1D54B, true, &[0x0054]),
    (0x1D54C, true, &[0x0055]),
    (0x1D54D, true, &[0x0056]),
    (0x1D54E, true, &[0x0057]),
    (0x1D54F, true, &[0x0058]),
    (0x1D550, true, &[0x0059]),
    (0x1D552, true, &[0x0061]),
    (0x1D553, true, &[0x0062]),
    (0x1D554, true, &[0x0063]),
    (0x1D555, true, &[0x0064]),
    (0x1D556, true, &[0x0065]),
    (0x1D557, true, &[0x0066]),
    (0x1D558, true, &[0x0067]),
    (0x1D559, true, &[0x0068]),
    (0x1D55A, true, &[0x0069]),
    (0x1D55B, true, &[0x006A]),
    (0x1D55C, true, &[0x006B]),
    (0x1D55D, true, &[0x006C]),
    (0x1D55E, true, &[0x006D]),
    (0x1D55F, true, &[0x006E]),
    (0x1D560, true, &[0x006F]),
    (0x1D561, true, &[0x0070]),
    (0x1D562, true, &[0x0071]),
    (0x1D563, true, &[0x0072]),
    (0x1D564, true, &[0x0073]),
    (0x1D565, true, &[0x0074]),
    (0x1D566, true, &[0x0075]),
    (0x1D567, true, &[0x0076]),
    (0x1D568, true, &[0x0077]),
    (0x1D569, true, &[0x0078]),
    (0x1D56A, true, &[0x0079]),
    (0x1D56B, true, &[0x007A]),
    (0x1D56C, true, &[0x0041]),
    (0x1D56D, true, &[0x0042]),
    (0x1D56E, true, &[0x0043]),
    (0x1D56F, true, &[0x0044]),
    (0x1D570, true, &[0x0045]),
    (0x1D571, true, &[0x0046]),
    (0x1D572, true, &[0x0047]),
    (0x1D573, true, &[0x0048]),
    (0x1D574, true, &[0x0049]),
    (0x1D575, true, &[0x004A]),
    (0x1D576, true, &[0x004B]),
    (0x1D577, true, &[0x004C]),
    (0x1D578, true, &[0x004D]),
    (0x1D579, true, &[0x004E]),
    (0x1D57A, true, &[0x004F]),
    (0x1D57B, true, &[0x0050]),
    (0x1D57C, true, &[0x0051]),
    (0x1D57D, true, &[0x0052]),
    (0x1D57E, true, &[0x0053]),
    (0x1D57F, true, &[0x0054]),
    (0x1D580, true, &[0x0055]),
    (0x1D581, true, &[0x0056]),
    (0x1D582, true, &[0x0057]),
    (0x1D583, true, &[0x0058]),
    (0x1D584, true, &[0x0059]),
    (0x1D585, true, &[0x005A]),
    (0x1D586, true, &[0x0061]),
    (0x1D587, true, &[0x0062]),
    (0x1D588, true, &[0x0063]),
    (0x1D589, true, &[0x0064]),
    (0x1D58A, true, &[0x0065]),
    (0x1D58B, true, &[0x0066]),
    (0x1D58C, true, &[0x0067]),
    (0x1D58D, true, &[0x0068]),
    (0x1D58E, true, &[0x0069]),
    (0x1D58F, true, &[0x006A]),
    (0x1D590, true, &[0x006B]),
    (0x1D591, true, &[0x006C]),
    (0x1D592, true, &[0x006D]),
    (0x1D593, true, &[0x006E]),
    (0x1D594, true, &[0x006F]),
    (0x1D595, true, &[0x0070]),
    (0x1D596, true, &[0x0071]),
    (0x1D597, true, &[0x0072]),
    (0x1D598, true, &[0x0073]),
    (0x1D599, true, &[0x0074]),
    (0x1D59A, true, &[0x0075]),
    (0x1D59B, true, &[0x0076]),
    (0x1D59C, true, &[0x0077]),
    (0x1D59D, true, &[0x0078]),
    (0x1D59E, true, &[0x0079]),
    (0x1D59F, true, &[0x007A]),
    (0x1D5A0, true, &[0x0041]),
    (0x1D5A1, true, &[0x0042]),
    (0x1D5A2, true, &[0x0043]),
    (0x1D5A3, true, &[0x0044]),
    (0x1D5A4, true, &[0x0045]),
    (0x1D5A5, true, &[0x0046]),
    (0x1D5A6, true, &[0x0047]),
    (0x1D5A7, true, &[0x0048]),
    (0x1D5A8, true, &[0x0049]),
    (0x1D5A9, true, &[0x004A]),
    (0x1D5AA, true, &[0x004B]),
    (0x1D5AB, true, &[0x004C]),
    (0x1D5AC, true, &[0x004D]),
    (0x1D5AD, true, &[0x004E]),
    (0x1D5AE, true, &[0x004F]),
    (0x1D5AF, true, &[0x0050]),
    (0x1D5B0, true, &[0x0051]),
    (0x1D5B1, true, &[0x0052]),
    (0x1D5B2, true, &[0x0053]),
    (0x1D5B3, true, &[0x0054]),
    (0x1D5B4, true, &[0x0055]),
    (0x1D5B5, true, &[0x0056]),
    (0x1D5B6, true, &[0x0057]),
    (0x1D5B7, true, &[0x0058]),
    (0x1D5B8, true, &[0x0059]),
    (0x1D5B9, true, &[0x005A]),
    (0x1D5BA, true, &[0x0061]),
    (0x1D5BB, true, &[0x0062]),
    (0x1D5BC, true, &[0x0063]),
    (0x1D5BD, true, &[0x0064]),
    (0x1D5BE, true, &[0x0065]),
    (0x1D5BF, true, &[0x0066]),
    (0x1D5C0, true, &[0x0067]),
    (0x1D5C1, true, &[0x0068]),
    (0x1D5C2, true, &[0x0069]),
    (0x1D5C3, true, &[0x006A]),
    (0x1D5C4, true, &[0x006B]),
    (0x1D5C5, true, &[0x006C]),
    (0x1D5C6, true, &[0x006D]),
    (0x1D5C7, true, &[0x006E]),
    (0x1D5C8, true, &[0x006F]),
    (0x1D5C9, true, &[0x0070]),
    (0x1D5CA, true, &[0x0071]),
    (0x1D5CB, true, &[0x0072]),
    (0x1D5CC, true, &[0x0073]),
    (0x1D5CD, true, &[0x0074]),
    (0x1D5CE, true, &[0x0075]),
    (0x1D5CF, true, &[0x0076]),
    (0x1D5D0, true, &[0x0077]),
    (0x1D5D1, true, &[0x0078]),
    (0x1D5D2, true, &[0x0079]),
    (0x1D5D3, true, &[0x007A]),
    (0x1D5D4, true, &[0x0041]),
    (0x1D5D5, true, &[0x0042]),
    (0x1D5D6, true, &[0x0043]),
    (0x1D5D7, true, &[0x0044]),
    (0x1D5D8, true, &[0x0045]),
    (0x1D5D9, true, &[0x0046]),
    (0x1D5DA, true, &[0x0047]),
    (0x1D5DB, true, &[0x0048]),
    (0x1D5DC, true, &[0x0049]),
    (0x1D5DD, true, &[0x004A]),
    (0x1D5DE, true, &[0x004B]),
    (0x1D5DF, true, &[0x004C]),
    (0x1D5E0, true, &[0x004D]),
    (0x1D5E1, true, &[0x004E]),
    (0x1D5E2, true, &[0x004F]),
    (0x1D5E3, true, &[0x0050]),
    (0x1D5E4, true, &[0x0051]),
    (0x1D5E5, true, &[0x0052]),
    (0x1D5E6, true, &[0x0053]),
    (0x1D5E7, true, &[0x0054]),
    (0x1D5E8, true, &[0x0055]),
    (0x1D5E9, true, &[0x0056]),
    (0x1D5EA, true, &[0x0057]),
    (0x1D5EB, true, &[0x0058]),
    (0x1D5EC, true, &[0x0059]),
    (0x1D5ED, true, &[0x005A]),
    (0x1D5EE, true, &[0x0061]),
    (0x1D5EF, true, &[0x0062]),
    (0x1D5F0, true, &[0x0063]),
    (0x1D5F1, true, &[0x0064]),
    (0x1D5F2, true, &[0x0065]),
    (0x1D5F3, true, &[0x0066]),
    (0x1D5F4, true, &[0x0067]),
    (0x1D5F5, true, &[0x0068]),
    (0x1D5F6, true, &[0x0069]),
    (0x1D5F7, true, &[0x006A]),
    (0x1D5F8, true, &[0x006B]),
    (0x1D5F9, true, &[0x006C]),
    (0x1D5FA, true, &[0x006D]),
    (0x1D5FB, true, &[0x006E]),
    (0x1D5FC, true, &[0x006F]),
    (0x1D5FD, true, &[0x0070]),
    (0x1D5FE, true, &[0x0071]),
    (0x1D5FF, true, &[0x0072]),
    (0x1D600, true, &[0x0073]),
    (0x1D601, true, &[0x0074]),
    (0x1D602, true, &[0x0075]),
    (0x1D603, true, &[0x0076]),
    (0x1D604, true, &[0x0077]),
    (0x1D605, true, &[0x0078]),
    (0x1D606, true, &[0x0079]),
    (0x1D607, true, &[0x007A]),
    (0x1D608, true, &[0x0041]),
    (0x1D609, true, &[0x0042]),
    (0x1D60A, true, &[0x0043]),
    (0x1D60B, true, &[0x0044]),
    (0x1D60C, true, &[0x0045]),
    (0x1D60D, true, &[0x0046]),
    (0x1D60E, true, &[0x0047]),
    (0x1D60F, true, &[0x0048]),
    (0x1D610, true, &[0x0049]),
    (0x1D611, true, &[0x004A]),
    (0x1D612, true, &[0x004B]),
    (0x1D613, true, &[0x004C]),
    (0x1D614, true, &[0x004D]),
    (0x1D615, true, &[0x004E]),
    (0x1D616, true, &[0x004F]),
    (0x1D617, true, &[0x0050]),
    (0x1D618, true, &[0x0051]),
    (0x1D619, true, &[0x0052]),
    (0x1D61A, true, &[0x0053]),
    (0x1D61B, true, &[0x0054]),
    (0x1D61C, true, &[0x0055]),
    (0x1D61D, true, &[0x0056]),
    (0x1D61E, true, &[0x0057]),
    (0x1D61F, true, &[0x0058]),
    (0x1D620, true, &[0x0059]),
    (0x1D621, true, &[0x005A]),
    (0x1D622, true, &[0x0061]),
    (0x1D623, true, &[0x0062]),
    (0x1D624, true, &[0x0063]),
    (0x1D625, true, &[0x0064]),
    (0x1D626, true, &[0x0065]),
    (0x1D627, true, &[0x0066]),
    (0x1D628, true, &[0x0067]),
    (0x1D629, true, &[0x0068]),
    (0x1D62A, true, &[0x0069]),
    (0x1D62B, true, &[0x006A]),
    (0x1D62C, true, &[0x006B]),
    (0x1D62D, true, &[0x006C]),
    (0x1D62E, true, &[0x006D]),
    (0x1D62F, true, &[0x006E]),
    (0x1D630, true, &[0x006F]),
    (0x1D631, true, &[0x0070]),
    (0x1D632, true, &[0x0071]),
    (0x1D633, true, &[0x0072]),
    (0x1D634, true, &[0x0073]),
    (0x1D635, true, &[0x0074]),
    (0x1D636, true, &[0x0075]),
    (0x1D637, true, &[0x0076]),
    (0x1D638, true, &[0x0077]),
    (0x1D639, true, &[0x0078]),
    (0x1D63A, true, &[0x0079]),
    (0x1D63B, true, &[0x007A]),
    (0x1D63C, true, &[0x0041]),
    (0x1D63D, true, &[0x0042]),
    (0x1D63E, true, &[0x0043]),
    (0x1D63F, true, &[0x0044]),
    (0x1D640, true, &[0x0045]),
    (0x1D641, true, &[0x0046]),
    (0x1D642, true, &[0x0047]),
    (0x1D643, true, &[0x0048]),
    (0x1D644, true, &[0x0049]),
    (0x1D645, true, &[0x004A]),
    (0x1D646, true, &[0x004B]),
    (0x1D647, true, &[0x004C]),
    (0x1D648, true, &[0x004D]),
    (0x1D649, true, &[0x004E]),
    (0x1D64A, true, &[0x004F]),
    (0x1D64B, true, &[0x0050]),
    (0x1D64C, true, &[0x0051]),
    (0x1D64D, true, &[0x0052]),
    (0x1D64E, true, &[0x0053]),
    (0x1D64F, true, &[0x0054]),
    (0x1D650, true, &[0x0055]),
    (0x1D651, true, &[0x0056]),
    (0x1D652, true, &[0x0057]),
    (0x1D653, true, &[0x0058]),
    (0x1D654, true, &[0x0059]),
    (0x1D655, true, &[0x005A]),
    (0x1D656, true, &[0x0061]),
    (0x1D657, true, &[0x0062]),
    (0x1D658, true, &[0x0063]),
    (0x1D659, true, &[0x0064]),
    (0x1D65A, true, &[0x0065]),
    (0x1D65B, true, &[0x0066]),
    (0x1D65C, true, &[0x0067]),
    (0x1D65D, true, &[0x0068]),
    (0x1D65E, true, &[0x0069]),
    (0x1D65F, true, &[0x006A]),
    (0x1D660, true, &[0x006B]),
    (0x1D661, true, &[0x006C]),
    (0x1D662, true, &[0x006D]),
    (0x1D663, true, &[0x006E]),
    (0x1D664, true, &[0x006F]),
    (0x1D665, true, &[0x0070]),
    (0x1D666, true, &[0x0071]),
    (0x1D667, true, &[0x0072]),
    (0x1D668, true, &[0x0073]),
    (0x1D669, true, &[0x0074]),
    (0x1D66A, true, &[0x0075]),
    (0x1D66B, true, &[0x0076]),
    (0x1D66C, true, &[0x0077]),
    (0x1D66D, true, &[0x0078]),
    (0x1D66E, true, &[0x0079]),
    (0x1D66F, true, &[0x007A]),
    (0x1D670, true, &[0x0041]),
    (0x1D671, true, &[0x0042]),
    (0x1D672, true, &[0x0043]),
    (0x1D673, true, &[0x0044]),
    (0x1D674, true, &[0x0045]),
    (0x1D675, true, &[0x0046]),
    (0x1D676, true, &[0x0047]),
    (0x1D677, true, &[0x0048]),
    (0x1D678, true, &[0x0049]),
    (0x1D679, true, &[0x004A]),
    (0x1D67A, true, &[0x004B]),
    (0x1D67B, true, &[0x004C]),
    (0x1D67C, true, &[0x004D]),
    (0x1D67D, true, &[0x004E]),
    (0x1D67E, true, &[0x004F]),
    (0x1D67F, true, &[0x0050]),
    (0x1D680, true, &[0x0051]),
    (0x1D681, true, &[0x0052]),
    (0x1D682, true, &[0x0053]),
    (0x1D683, true, &[0x0054]),
    (0x1D684, true, &[0x0055]),
    (0x1D685, true, &[0x0056]),
    (0x1D686, true, &[0x0057]),
    (0x1D687, true, &[0x0058]),
    (0x1D688, true, &[0x0059]),
    (0x1D689, true, &[0x005A]),
    (0x1D68A, true, &[0x0061]),
    (0x1D68B, true, &[0x0062]),
    (0x1D68C, true, &[0x0063]),
    (0x1D68D, true, &[0x0064]),
    (0x1D68E, true, &[0x0065]),
    (0x1D68F, true, &[0x0066]),
    (0x1D690, true, &[0x0067]),
    (0x1D691, true, &[0x0068]),
    (0x1D692, true, &[0x0069]),
    (0x1D693, true, &[0x006A]),
    (0x1D694, true, &[0x006B]),
    (0x1D695, true, &[0x006C]),
    (0x1D696, true, &[0x006D]),
    (0x1D697, true, &[0x006E]),
    (0x1D698, true, &[0x006F]),
    (0x1D699, true, &[0x0070]),
    (0x1D69A, true, &[0x0071]),
    (0x1D69B, true, &[0x0072]),
    (0x1D69C, true, &[0x0073]),
    (0x1D69D, true, &[0x0074]),
    (0x1D69E, true, &[0x0075]),
    (0x1D69F, true, &[0x0076]),
    (0x1D6A0, true, &[0x0077]),
    (0x1D6A1, true, &[0x0078]),
    (0x1D6A2, true, &[0x0079]),
    (0x1D6A3, true, &[0x007A]),
    (0x1D6A4, true, &[0x0131]),
    (0x1D6A5, true, &[0x0237]),
    (0x1D6A8, true, &[0x0391]),
    (0x1D6A9, true, &[0x0392]),
    (0x1D6AA, true, &[0x0393]),
    (0x1D6AB, true, &[0x0394]),
    (0x1D6AC, true, &[0x0395]),
    (0x1D6AD, true, &[0x0396]),
    (0x1D6AE, true, &[0x0397]),
    (0x1D6AF, true, &[0x0398]),
    (0x1D6B0, true, &[0x0399]),
    (0x1D6B1, true, &[0x039A]),
    (0x1D6B2, true, &[0x039B]),
    (0x1D6B3, true, &[0x039C]),
    (0x1D6B4, true, &[0x039D]),
    (0x1D6B5, true, &[0x039E]),
    (0x1D6B6, true, &[0x039F]),
    (0x1D6B7, true, &[0x03A0]),
    (0x1D6B8, true, &[0x03A1]),
    (0x1D6B9, true, &[0x03F4]),
    (0x1D6BA, true, &[0x03A3]),
    (0x1D6BB, true, &[0x03A4]),
    (0x1D6BC, true, &[0x03A5]),
    (0x1D6BD, true, &[0x03A6]),
    (0x1D6BE, true, &[0x03A7]),
    (0x1D6BF, true, &[0x03A8]),
    (0x1D6C0, true, &[0x03A9]),
    (0x1D6C1, true, &[0x2207]),
    (0x1D6C2, true, &[0x03B1]),
    (0x1D6C3, true, &[0x03B2]),
    (0x1D6C4, true, &[0x03B3]),
    (0x1D6C5, true, &[0x03B4]),
    (0x1D6C6, true, &[0x03B5]),
    (0x1D6C7, true, &[0x03B6]),
    (0x1D6C8, true, &[0x03B7]),
    (0x1D6C9, true, &[0x03B8]),
    (0x1D6CA, true, &[0x03B9]),
    (0x1D6CB, true, &[0x03BA]),
    (0x1D6CC, true, &[0x03BB]),
    (0x1D6CD, true, &[0x03BC]),
    (0x1D6CE, true, &[0x03BD]),
    (0x1D6CF, true, &[0x03BE]),
    (0x1D6D0, true, &[0x03BF]),
    (0x1D6D1, true, &[0x03C0]),
    (0x1D6D2, true, &[0x03C1]),
    (0x1D6D3, true, &[0x03C2]),
    (0x1D6D4, true, &[0x03C3]),
    (0x1D6D5, true, &[0x03C4]),
    (0x1D6D6, true, &[0x03C5]),
    (0x1D6D7, true, &[0x03C6]),
    (0x1D6D8, true, &[0x03C7]),
    (0x1D6D9, true, &[0x03C8]),
    (0x1D6DA, true, &[0x03C9]),
    (0x1D6DB, true, &[0x2202]),
    (0x1D6DC, true, &[0x03F5]),
    (0x1D6DD, true, &[0x03D1]),
    (0x1D6DE, true, &[0x03F0]),
    (0x1D6DF, true, &[0x03D5]),
    (0x1D6E0, true, &[0x03F1]),
    (0x1D6E1, true, &[0x03D6]),
    (0x1D6E2, true, &[0x0391]),
    (0x1D6E3, true, &[0x0392]),
    (0x1D6E4, true, &[0x0393]),
    (0x1D6E5, true, &[0x0394]),
    (0x1D6E6, true, &[0x0395]),
    (0x1D6E7, true, &[0x0396]),
    (0x1D6E8, true, &[0x0397]),
    (0x1D6E9, true, &[0x0398]),
    (0x1D6EA, true, &[0x0399]),
    (0x1D6EB, true, &[0x039A]),
    (0x1D6EC, true, &[0x039B]),
    (0x1D6ED, true, &[0x039C]),
    (0x1D6EE, true, &[0x039D]),
    (0x1D6EF, true, &[0x039E]),
    (0x1D6F0, true, &[0x039F]),
    (0x1D6F1, true, &[0x03A0]),
    (0x1D6F2, true, &[0x03A1]),
    (0x1D6F3, true, &[0x03F4]),
    (0x1D6F4, true, &[0x03A3]),
    (0x1D6F5, true, &[0x03A4]),
    (0x1D6F6, true, &[0x03A5]),
    (0x1D6F7, true, &[0x03A6]),
    (0x1D6F8, true, &[0x03A7]),
    (0x1D6F9, true, &[0x03A8]),
    (0x1D6FA, true, &[0x03A9]),
    (0x1D6FB, true, &[0x2207]),
    (0x1D6FC, true, &[0x03B1]),
    (0x1D6FD, true, &[0x03B2]),
    (0x1D6FE, true, &[0x03B3]),
    (0x1D6FF, true, &[0x03B4]),
    (0x1D700, true, &[0x03B5]),
    (0x1D701, true, &[0x03B6]),
    (0x1D702, true, &[0x03B7]),
    (0x1D703, true, &[0x03B8]),
    (0x1D704, true, &[0x03B9]),
    (0x1D705, true, &[0x03BA]),
    (0x1D706, true, &[0x03BB]),
    (0x1D707, true, &[0x03BC]),
    (0x1D708, true, &[0x03BD]),
    (0x1D709, true, &[0x03BE]),
    (0x1D70A, true, &[0x03BF]),
    (0x1D70B, true, &[0x03C0]),
    (0x1D70C, true, &[0x03C1]),
    (0x1D70D, true, &[0x03C2]),
    (0x1D70E, true, &[0x03C3]),
    (0x1D70F, true, &[0x03C4]),
    (0x1D710, true, &[0x03C5]),
    (0x1D711, true, &[0x03C6]),
    (0x1D712, true, &[0x03C7]),
    (0x1D713, true, &[0x03C8]),
    (0x1D714, true, &[0x03C9]),
    (0x1D715, true, &[0x2202]),
    (0x1D716, true, &[0x03F5]),
    (0x1D717, true, &[0x03D1]),
    (0x1D718, true, &[0x03F0]),
    (0x1D719, true, &[0x03D5]),
    (0x1D71A, true, &[0x03F1]),
    (0x1D71B, true, &[0x03D6]),
    (0x1D71C, true, &[0x0391]),
    (0x1D71D, true, &[0x0392]),
    (0x1D71E, true, &[0x0393]),
    (0x1D71F, true, &[0x0394]),
    (0x1D720, true, &[0x0395]),
    (0x1D721, true, &[0x0396]),
    (0x1D722, true, &[0x0397]),
    (0x1D723, true, &[0x0398]),
    (0x1D724, true, &[0x0399]),
    (0x1D725, true, &[0x039A]),
    (0x1D726, true, &[0x039B]),
    (0x1D727, true, &[0x039C]),
    (0x1D728, true, &[0x039D]),
    (0x1D729, true, &[0x039E]),
    (0x1D72A, true, &[0x039F]),
    (0x1D72B, true, &[0x03A0]),
    (0x1D72C, true, &[0x03A1]),
    (0x1D72D, true, &[0x03F4]),
    (0x1D72E, true, &[0x03A3]),
    (0x1D72F, true, &[0x03A4]),
    (0x1D730, true, &[0x03A5]),
    (0x1D731, true, &[0x03A6]),
    (0x1D732, true, &[0x03A7]),
    (0x1D733, true, &[0x03A8]),
    (0x1D734, true, &[0x03A9]),
    (0x1D735, true, &[0x2207]),
    (0x1D736, true, &[0x03B1]),
    (0x1D737, true, &[0x03B2]),
    (0x1D738, true, &[0x03B3]),
    (0x1D739, true, &[0x03B4]),
    (0x1D73A, true, &[0x03B5]),
    (0x1D73B, true, &[0x03B6]),
    (0x1D73C, true, &[0x03B7]),
    (0x1D73D, true, &[0x03B8]),
    (0x1D73E, true, &[0x03B9]),
    (0x1D73F, true, &[0x03BA]),
    (0x1D740, true, &[0x03BB]),
    (0x1D741, true, &[0x03BC]),
    (0x1D742, true, &[0x03BD]),
    (0x1D743, true, &[0x03BE]),
    (0x1D744, true, &[0x03BF]),
    (0x1D745, true, &[0x03C0]),
    (0x1D746, true, &[0x03C1]),
    (0x1D747, true, &[0x03C2]),
    (0x1D748, true, &[0x03C3]),
    (0x1D749, true, &[0x03C4]),
    (0x1D74A, true, &[0x03C5]),
    (0x1D74B, true, &[0x03C6]),
    (0x1D74C, true, &[0x03C7]),
    (0x1D74D, true, &[0x03C8]),
    (0x1D74E, true, &[0x03C9]),
    (0x1D74F, true, &[0x2202]),
    (0x1D750, true, &[0x03F5]),
    (0x1D751, true, &[0x03D1]),
    (0x1D752, true, &[0x03F0]),
    (0x1D753, true, &[0x03D5]),
    (0x1D754, true, &[0x03F1]),
    (0x1D755, true, &[0x03D6]),
    (0x1D756, true, &[0x0391]),
    (0x1D757, true, &[0x0392]),
    (0x1D758, true, &[0x0393]),
    (0x1D759, true, &[0x0394]),
    (0x1D75A, true, &[0x0395]),
    (0x1D75B, true, &[0x0396]),
    (0x1D75C, true, &[0x0397]),
    (0x1D75D, true, &[0x0398]),
    (0x1D75E, true, &[0x0399]),
    (0x1D75F, true, &[0x039A]),
    (0x1D760, true, &[0x039B]),
    (0x1D761, true, &[0x039C]),
    (0x1D762, true, &[0x039D]),
    (0x1D763, true, &[0x039E]),
    (0x1D764, true, &[0x039F]),
    (0x1D765, true, &[0x03A0]),
    (0x1D766, true, &[0x03A1]),
    (0x1D767, true, &[0x03F4]),
    (0x1D768, true, &[0x03A3]),
    (0x1D769, true, &[0x03A4]),
    (0x1D76A, true, &[0x03A5]),
    (0x1D76B, true, &[0x03A6]),
    (0x1D76C, true, &[0x03A7]),
    (0x1D76D, true, &[0x03A8]),
    (0x1D76E, true, &[0x03A9]),
    (0x1D76F, true, &[0x2207]),
    (0x1D770, true, &[0x03B1]),
    (0x1D771, true, &[0x03B2]),
    (0x1D772, true, &[0x03B3]),
    (0x1D773, true, &[0x03B4]),
    (0x1D774, true, &[0x03B5]),
    (0x1D775, true, &[0x03B6]),
    (0x1D776, true, &[0x03B7]),
    (0x1D777, true, &[0x03B8]),
    (0x1D778, true, &[0x03B9]),
    (0x1D779, true, &[0x03BA]),
    (0x1D77A, true, &[0x03BB]),
    (0x1D77B, true, &[0x03BC]),
    (0x1D77C, true, &[0x03BD]),
    (0x1D77D, true, &[0x03BE]),
    (0x1D77E, true, &[0x03BF]),
    (0x1D77F, true, &[0x03C0]),
    (0x1D780, true, &[0x03C1]),
    (0x1D781, true, &[0x03C2]),
    (0x1D782, true, &[0x03C3]),
    (0x1D783, true, &[0x03C4]),
    (0x1D784, true, &[0x03C5]),
    (0x1D785, true, &[0x03C6]),
    (0x1D786, true, &[0x03C7]),
    (0x1D787, true, &[0x03C8]),
    (0x1D788, true, &[0x03C9]),
    (0x1D789, true, &[0x2202]),
    (0x1D78A, true, &[0x03F5]),
    (0x1D78B, true, &[0x03D1]),
    (0x1D78C, true, &[0x03F0]),
    (0x1D78D, true, &[0x03D5]),
    (0x1D78E, true, &[0x03F1]),
    (0x1D78F, true, &[0x03D6]),
    (0x1D790, true, &[0x0391]),
    (0x1D791, true, &[0x0392]),
    (0x1D792, true, &[0x0393]),
    (0x1D793, true, &[0x0394]),
    (0x1D794, true, &[0x0395]),
    (0x1D795, true, &[0x0396]),
    (0x1D796, true, &[0x0397]),
    (0x1D797, true, &[0x0398]),
    (0x1D798, true, &[0x0399]),
    (0x1D799, true, &[0x039A]),
    (0x1D79A, true, &[0x039B]),
    (0x1D79B, true, &[0x039C]),
    (0x1D79C, true, &[0x039D]),
    (0x1D79D, true, &[0x039E]),
    (0x1D79E, true, &[0x039F]),
    (0x1D79F, true, &[0x03A0]),
    (0x1D7A0, true, &[0x03A1]),
    (0x1D7A1, true, &[0x03F4]),
    (0x1D7A2, true, &[0x03A3]),
    (0x1D7A3, true, &[0x03A4]),
    (0x1D7A4, true, &[0x03A5]),
    (0x1D7A5, true, &[0x03A6]),
    (0x1D7A6, true, &[0x03A7]),
    (0x1D7A7, true, &[0x03A8]),
    (0x1D7A8, true, &[0x03A9]),
    (0x1D7A9, true, &[0x2207]),
    (0x1D7AA, true, &[0x03B1]),
    (0x1D7AB, true, &[0x03B2]),
    (0x1D7AC, true, &[0x03B3]),
    (0x1D7AD, true, &[0x03B4]),
    (0x1D7AE, true, &[0x03B5]),
    (0x1D7AF, true, &[0x03B6]),
    (0x1D7B0, true, &[0x03B7]),
    (0x1D7B1, true, &[0x03B8]),
    (0x1D7B2, true, &[0x03B9]),
    (0x1D7B3, true, &[0x03BA]),
    (0x1D7B4, true, &[0x03BB]),
    (0x1D7B5, true, &[0x03BC]),
    (0x1D7B6, true, &[0x03BD]),
    (0x1D7B7, true, &[0x03BE]),
    (0x1D7B8, true, &[0x03BF]),
    (0x1D7B9, true, &[0x03C0]),
    (0x1D7BA, true, &[0x03C1]),
    (0x1D7BB, true, &[0x03C2]),
    (0x1D7BC, true, &[0x03C3]),
    (0x1D7BD, true, &[0x03C4]),
    (0x1D7BE, true, &[0x03C5]),
    (0x1D7BF, true, &[0x03C6]),
    (0x1D7C0, true, &[0x03C7]),
    (0x1D7C1, true, &[0x03C8]),
    (0x1D7C2, true, &[0x03C9]),
    (0x1D7C3, true, &[0x2202]),
    (0x1D7C4, true, &[0x03F5]),
    (0x1D7C5, true, &[0x03D1]),
    (0x1D7C6, true, &[0x03F0]),
    (0x1D7C7, true, &[0x03D5]),
    (0x1D7C8, true, &[0x03F1]),
    (0x1D7C9, true, &[0x03D6]),
    (0x1D7CA, true, &[0x03DC]),
    (0x1D7CB, true, &[0x03DD]),
    (0x1D7CE, true, &[0x0030]),
    (0x1D7CF, true, &[0x0031]),
    (0x1D7D0, true, &[0x0032]),
    (0x1D7D1, true, &[0x0033]),
    (0x1D7D2, true, &[0x0034]),
    (0x1D7D3, true, &[0x0035]),
    (0x1D7D4, true, &[0x0036]),
    (0x1D7D5, true, &[0x0037]),
    (0x1D7D6, true, &[0x0038]),
    (0x1D7D7, true, &[0x0039]),
    (0x1D7D8, true, &[0x0030]),
    (0x1D7D9, true, &[0x0031]),
    (0x1D7DA, true, &[0x0032]),
    (0x1D7DB, true, &[0x0033]),
    (0x1D7DC, true, &[0x0034]),
    (0x1D7DD, true, &[0x0035]),
    (0x1D7DE, true, &[0x0036]),
    (0x1D7DF, true, &[0x0037]),
    (0x1D7E0, true, &[0x0038]),
    (0x1D7E1, true, &[0x0039]),
    (0x1D7E2, true, &[0x0030]),
    (0x1D7E3, true, &[0x0031]),
    (0x1D7E4, true, &[0x0032]),
    (0x1D7E5, true, &[0x0033]),
    (0x1D7E6, true, &[0x0034]),
    (0x1D7E7, true, &[0x0035]),
    (0x1D7E8, true, &[0x0036]),
    (0x1D7E9, true, &[0x0037]),
    (0x1D7EA, true, &[0x0038]),
    (0x1D7EB, true, &[0x0039]),
    (0x1D7EC, true, &[0x0030]),
    (0x1D7ED, true, &[0x0031]),
    (0x1D7EE, true, &[0x0032]),
    (0x1D7EF, true, &[0x0033]),
    (0x1D7F0, true, &[0x0034]),
    (0x1D7F1, true, &[0x0035]),
    (0x1D7F2, true, &[0x0036]),
    (0x1D7F3, true, &[0x0037]),
    (0x1D7F4, true, &[0x0038]),
    (0x1D7F5, true, &[0x0039]),
    (0x1D7F6, true, &[0x0030]),
    (0x1D7F7, true, &[0x0031]),
    (0x1D7F8, true, &[0x0032]),
    (0x1D7F9, true, &[0x0033]),
    (0x1D7FA, true, &[0x0034]),
    (0x1D7FB, true, &[0x0035]),
    (0x1D7FC, true, &[0x0036]),
    (0x1D7FD, true, &[0x0037]),
    (0x1D7FE, true, &[0x0038]),
    (0x1D7FF, true, &[0x0039]),
    (0x1EE00, true, &[0x0627]),
    (0x1EE01, true, &[0x0628]),
    (0x1EE02, true, &[0x062C]),
    (0x1EE03, true, &[0x062F]),
    (0x1EE05, true, &[0x0648]),
    (0x1EE06, true, &[0x0632]),
    (0x1EE07, true, &[0x062D]),
    (0x1EE08, true, &[0x0637]),
    (0x1EE09, true, &[0x064A]),
    (0x1EE0A, true, &[0x0643]),
    (0x1EE0B, true, &[0x0644]),
    (0x1EE0C, true, &[0x0645]),
    (0x1EE0D, true, &[0x0646]),
    (0x1EE0E, true, &[0x0633]),
    (0x1EE0F, true, &[0x0639]),
    (0x1EE10, true, &[0x0641]),
    (0x1EE11, true, &[0x0635]),
    (0x1EE12, true, &[0x0642]),
    (0x1EE13, true, &[0x0631]),
    (0x1EE14, true, &[0x0634]),
    (0x1EE15, true, &[0x062A]),
    (0x1EE16, true, &[0x062B]),
    (0x1EE17, true, &[0x062E]),
    (0x1EE18, true, &[0x0630]),
    (0x1EE19, true, &[0x0636]),
    (0x1EE1A, true, &[0x0638]),
    (0x1EE1B, true, &[0x063A]),
    (0x1EE1C, true, &[0x066E]),
    (0x1EE1D, true, &[0x06BA]),
    (0x1EE1E, true, &[0x06A1]),
    (0x1EE1F, true, &[0x066F]),
    (0x1EE21, true, &[0x0628]),
    (0x1EE22, true, &[0x062C]),
    (0x1EE24, true, &[0x0647]),
    (0x1EE27, true, &[0x062D]),
    (0x1EE29, true, &[0x064A]),
    (0x1EE2A, true, &[0x0643]),
    (0x1EE2B, true, &[0x0644]),
    (0x1EE2C, true, &[0x0645]),
    (0x1EE2D, true, &[0x0646]),
    (0x1EE2E, true, &[0x0633]),
    (0x1EE2F, true, &[0x0639]),
    (0x1EE30, true, &[0x0641]),
    (0x1EE31, true, &[0x0635]),
    (0x1EE32, true, &[0x0642]),
    (0x1EE34, true, &[0x0634]),
    (0x1EE35, true, &[0x062A]),
    (0x1EE36, true, &[0x062B]),
    (0x1EE37, true, &[0x062E]),
    (0x1EE39, true, &[0x0636]),
    (0x1EE3B, true, &[0x063A]),
    (0x1EE42, true, &[0x062C]),
    (0x1EE47, true, &[0x062D]),
    (0x1EE49, true, &[0x064A]),
    (0x1EE4B, true, &[0x0644]),
    (0x1EE4D, true, &[0x0646]),
    (0x1EE4E, true, &[0x0633]),
    (0x1EE4F, true, &[0x0639]),
    (0x1EE51, true, &[0x0635]),
    (0x1EE52, true, &[0x0642]),
    (0x1EE54, true, &[0x0634]),
    (0x1EE57, true, &[0x062E]),
    (0x1EE59, true, &[0x0636]),
    (0x1EE5B, true, &[0x063A]),
    (0x1EE5D, true, &[0x06BA]),
    (0x1EE5F, true, &[0x066F]),
    (0x1EE61, true, &[0x0628]),
    (0x1EE62, true, &[0x062C]),
    (0x1EE64, true, &[0x0647]),
    (0x1EE67, true, &[0x062D]),
    (0x1EE68, true, &[0x0637]),
    (0x1EE69, true, &[0x064A]),
    (0x1EE6A, true, &[0x0643]),
    (0x1EE6C, true, &[0x0645]),
    (0x1EE6D, true, &[0x0646]),
    (0x1EE6E, true, &[0x0633]),
    (0x1EE6F, true, &[0x0639]),
    (0x1EE70, true, &[0x0641]),
    (0x1EE71, true, &[0x0635]),
    (0x1EE72, true, &[0x0642]),
    (0x1EE74, true, &[0x0634]),
    (0x1EE75, true, &[0x062A]),
    (0x1EE76, true, &[0x062B]),
    (0x1EE77, true, &[0x062E]),
    (0x1EE79, true, &[0x0636]),
    (0x1EE7A, true, &[0x0638]),
    (0x1EE7B, true, &[0x063A]),
    (0x1EE7C, true, &[0x066E]),
    (0x1EE7E, true, &[0x06A1]),
    (0x1EE80, true, &[0x0627]),
    (0x1EE81, true, &[0x0628]),
    (0x1EE82, true, &[0x062C]),
    (0x1EE83, true, &[0x062F]),
    (0x1EE84, true, &[0x0647]),
    (0x1EE85, true, &[0x0648]),
    (0x1EE86, true, &[0x0632]),
    (0x1EE87, true, &[0x062D]),
    (0x1EE88, true, &[0x0637]),
    (0x1EE89, true, &[0x064A]),
    (0x1EE8B, true, &[0x0644]),
    (0x1EE8C, true, &[0x0645]),
    (0x1EE8D, true, &[0x0646]),
    (0x1EE8E, true, &[0x0633]),
    (0x1EE8F, true, &[0x0639]),
    (0x1EE90, true, &[0x0641]),
    (0x1EE91, true, &[0x0635]),
    (0x1EE92, true, &[0x0642]),
    (0x1EE93, true, &[0x0631]),
    (0x1EE94, true, &[0x0634]),
    (0x1EE95, true, &[0x062A]),
    (0x1EE96, true, &[0x062B]),
    (0x1EE97, true, &[0x062E]),
    (0x1EE98, true, &[0x0630]),
    (0x1EE99, true, &[0x0636]),
    (0x1EE9A, true, &[0x0638]),
    (0x1EE9B, true, &[0x063A]),
    (0x1EEA1, true, &[0x0628]),
    (0x1EEA2, true, &[0x062C]),
    (0x1EEA3, true, &[0x062F]),
    (0x1EEA5, true, &[0x0648]),
    (0x1EEA6, true, &[0x0632]),
    (0x1EEA7, true, &[0x062D]),
    (0x1EEA8, true, &[0x0637]),
    (0x1EEA9, true, &[0x064A]),
    (0x1EEAB, true, &[0x0644]),
    (0x1EEAC, true, &[0x0645]),
    (0x1EEAD, true, &[0x0646]),
    (0x1EEAE, true, &[0x0633]),
    (0x1EEAF, true, &[0x0639]),
    (0x1EEB0, true, &[0x0641]),
    (0x1EEB1, true, &[0x0635]),
    (0x1EEB2, true, &[0x0642]),
    (0x1EEB3, true, &[0x0631]),
    (0x1EEB4, true, &[0x0634]),
    (0x1EEB5, true, &[0x062A]),
    (0x1EEB6, true, &[0x062B]),
    (0x1EEB7, true, &[0x062E]),
    (0x1EEB8, true, &[0x0630]),
    (0x1EEB9, true, &[0x0636]),
    (0x1EEBA, true, &[0x0638]),
    (0x1EEBB, true, &[0x063A]),
    (0x1F100, true, &[0x0030, 0x002E]),
    (0x1F101, true, &[0x0030, 0x002C]),
    (0x1F102, true, &[0x0031, 0x002C]),
    (0x1F103, true, &[0x0032, 0x002C]),
    (0x1F104, true, &[0x0033, 0x002C]),
    (0x1F105, true, &[0x0034, 0x002C]),
    (0x1F106, true, &[0x0035, 0x002C]),
    (0x1F107, true, &[0x0036, 0x002C]),
    (0x1F108, true, &[0x0037, 0x002C]),
    (0x1F109, true, &[0x0038, 0x002C]),
    (0x1F10A, true, &[0x0039, 0x002C]),
    (0x1F110, true, &[0x0028, 0x0041, 0x0029]),
    (0x1F111, true, &[0x0028, 0x0042, 0x0029]),
    (0x1F112, true, &[0x0028, 0x0043, 0x0029]),
    (0x1F113, true, &[0x0028, 0x0044, 0x0029]),
    (0x1F114, true, &[0x0028, 0x0045, 0x0029]),
    (0x1F115, true, &[0x0028, 0x0046, 0x0029]),
    (0x1F116, true, &[0x0028, 0x0047, 0x0029]),
    (0x1F117, true, &[0x0028, 0x0048, 0x0029]),
    (0x1F118, true, &[0x0028, 0x0049, 0x0029]),
    (0x1F119, true, &[0x0028, 0x004A, 0x0029]),
    (0x1F11A, true, &[0x0028, 0x004B, 0x0029]),
    (0x1F11B, true, &[0x0028, 0x004C, 0x0029]),
    (0x1F11C, true, &[0x0028, 0x004D, 0x0029]),
    (0x1F11D, true, &[0x0028, 0x004E, 0x0029]),
    (0x1F11E, true, &[0x0028, 0x004F, 0x0029]),
    (0x1F11F, true, &[0x0028, 0x0050, 0x0029]),
    (0x1F120, true, &[0x0028, 0x0051, 0x0029]),
    (0x1F121, true, &[0x0028, 0x0052, 0x0029]),
    (0x1F122, true, &[0x0028, 0x0053, 0x0029]),
    (0x1F123, true, &[0x0028, 0x0054, 0x0029]),
    (0x1F124, true, &[0x0028, 0x0055, 0x0029]),
    (0x1F125, true, &[0x0028, 0x0056, 0x0029]),
    (0x1F126, true, &[0x0028, 0x0057, 0x0029]),
    (0x1F127, true, &[0x0028, 0x0058, 0x0029]),
    (0x1F128, true, &[0x0028, 0x0059, 0x0029]),
    (0x1F129, true, &[0x0028, 0x005A, 0x0029]),
    (0x1F12A, true, &[0x3014, 0x0053, 0x3015]),
    (0x1F12B, true, &[0x0043]),
    (0x1F12C, true, &[0x0052]),
    (0x1F12D, true, &[0x0043, 0x0044]),
    (0x1F12E, true, &[0x0057, 0x005A]),
    (0x1F130, true, &[0x0041]),
    (0x1F131, true, &[0x0042]),
    (0x1F132, true, &[0x0043]),
    (0x1F133, true, &[0x0044]),
    (0x1F134, true, &[0x0045]),
    (0x1F135, true, &[0x0046]),
    (0x1F136, true, &[0x0047]),
    (0x1F137, true, &[0x0048]),
    (0x1F138, true, &[0x0049]),
    (0x1F139, true, &[0x004A]),
    (0x1F13A, true, &[0x004B]),
    (0x1F13B, true, &[0x004C]),
    (0x1F13C, true, &[0x004D]),
    (0x1F13D, true, &[0x004E]),
    (0x1F13E, true, &[0x004F]),
    (0x1F13F, true, &[0x0050]),
    (0x1F140, true, &[0x0051]),
    (0x1F141, true, &[0x0052]),
    (0x1F142, true, &[0x0053]),
    (0x1F143, true, &[0x0054]),
    (0x1F144, true, &[0x0055]),
    (0x1F145, true, &[0x0056]),
    (0x1F146, true, &[0x0057]),
    (0x1F147, true, &[0x0058]),
    (0x1F148, true, &[0x0059]),
    (0x1F149, true, &[0x005A]),
    (0x1F14A, true, &[0x0048, 0x0056]),
    (0x1F14B, true, &[0x004D, 0x0056]),
    (0x1F14C, true, &[0x0053, 0x0044]),
    (0x1F14D, true, &[0x0053, 0x0053]),
    (0x1F14E, true, &[0x0050, 0x0050, 0x0056]),
    (0x1F14F, true, &[0x0057, 0x0043]),
    (0x1F16A, true, &[0x004D, 0x0043]),
    (0x1F16B, true, &[0x004D, 0x0044]),
    (0x1F16C, true, &[0x004D, 0x0052]),
    (0x1F190, true, &[0x0044, 0x004A]),
    (0x1F200, true, &[0x307B, 0x304B]),
    (0x1F201, true, &[0x30B3, 0x30B3]),
    (0x1F202, true, &[0x30B5]),
    (0x1F210, true, &[0x624B]),
    (0x1F211, true, &[0x5B57]),
    (0x1F212, true, &[0x53CC]),
    (0x1F213, true, &[0x30C7]),
    (0x1F214, true, &[0x4E8C]),
    (0x1F215, true, &[0x591A]),
    (0x1F216, true, &[0x89E3]),
    (0x1F217, true, &[0x5929]),
    (0x1F218, true, &[0x4EA4]),
    (0x1F219, true, &[0x6620]),
    (0x1F21A, true, &[0x7121]),
    (0x1F21B, true, &[0x6599]),
    (0x1F21C, true, &[0x524D]),
    (0x1F21D, true, &[0x5F8C]),
    (0x1F21E, true, &[0x518D]),
    (0x1F21F, true, &[0x65B0]),
    (0x1F220, true, &[0x521D]),
    (0x1F221, true, &[0x7D42]),
    (0x1F222, true, &[0x751F]),
    (0x1F223, true, &[0x8CA9]),
    (0x1F224, true, &[0x58F0]),
    (0x1F225, true, &[0x5439]),
    (0x1F226, true, &[0x6F14]),
    (0x1F227, true, &[0x6295]),
    (0x1F228, true, &[0x6355]),
    (0x1F229, true, &[0x4E00]),
    (0x1F22A, true, &[0x4E09]),
    (0x1F22B, true, &[0x904A]),
    (0x1F22C, true, &[0x5DE6]),
    (0x1F22D, true, &[0x4E2D]),
    (0x1F22E, true, &[0x53F3]),
    (0x1F22F, true, &[0x6307]),
    (0x1F230, true, &[0x8D70]),
    (0x1F231, true, &[0x6253]),
    (0x1F232, true, &[0x7981]),
    (0x1F233, true, &[0x7A7A]),
    (0x1F234, true, &[0x5408]),
    (0x1F235, true, &[0x6E80]),
    (0x1F236, true, &[0x6709]),
    (0x1F237, true, &[0x6708]),
    (0x1F238, true, &[0x7533]),
    (0x1F239, true, &[0x5272]),
    (0x1F23A, true, &[0x55B6]),
    (0x1F23B, true, &[0x914D]),
    (0x1F240, true, &[0x3014, 0x672C, 0x3015]),
    (0x1F241, true, &[0x3014, 0x4E09, 0x3015]),
    (0x1F242, true, &[0x3014, 0x4E8C, 0x3015]),
    (0x1F243, true, &[0x3014, 0x5B89, 0x3015]),
    (0x1F244, true, &[0x3014, 0x70B9, 0x3015]),
    (0x1F245, true, &[0x3014, 0x6253, 0x3015]),
    (0x1F246, true, &[0x3014, 0x76D7, 0x3015]),
    (0x1F247, true, &[0x3014, 0x52DD, 0x3015]),
    (0x1F248, true, &[0x3014, 0x6557, 0x3015]),
    (0x1F250, true, &[0x5F97]),
    (0x1F251, true, &[0x53EF]),
    (0x1FBF0, true, &[0x0030]),
    (0x1FBF1, true, &[0x0031]),
    (0x1FBF2, true, &[0x0032]),
    (0x1FBF3, true, &[0x0033]),
    (0x1FBF4, true, &[0x0034]),
    (0x1FBF5, true, &[0x0035]),
    (0x1FBF6, true, &[0x0036]),
    (0x1FBF7, true, &[0x0037]),
    (0x1FBF8, true, &[0x0038]),
    (0x1FBF9, true, &[0x0039]),
    (0x2F800, false, &[0x4E3D]),
    (0x2F801, false, &[0x4E38]),
    (0x2F802, false, &[0x4E41]),
    (0x2F803, false, &[0x20122]),
    (0x2F804, false, &[0x4F60]),
    (0x2F805, false, &[0x4FAE]),
    (0x2F806, false, &[0x4FBB]),
    (0x2F807, false, &[0x5002]),
    (0x2F808, false, &[0x507A]),
    (0x2F809, false, &[0x5099]),
    (0x2F80A, false, &[0x50E7]),
    (0x2F80B, false, &[0x50CF]),
    (0x2F80C, false, &[0x349E]),
    (0x2F80D, false, &[0x2063A]),
    (0x2F80E, false, &[0x514D]),
    (0x2F80F, false, &[0x5154]),
    (0x2F810, false, &[0x5164]),
    (0x2F811, false, &[0x5177]),
    (0x2F812, false, &[0x2051C]),
    (0x2F813, false, &[0x34B9]),
    (0x2F814, false, &[0x5167]),
    (0x2F815, false, &[0x518D]),
    (0x2F816, false, &[0x2054B]),
    (0x2F817, false, &[0x5197]),
    (0x2F818, false, &[0x51A4]),
    (0x2F819, false, &[0x4ECC]),
    (0x2F81A, false, &[0x51AC]),
    (0x2F81B, false, &[0x51B5]),
    (0x2F81C, false, &[0x291DF]),
    (0x2F81D, false, &[0x51F5]),
    (0x2F81E, false, &[0x5203]),
    (0x2F81F, false, &[0x34DF]),
    (0x2F820, false, &[0x523B]),
    (0x2F821, false, &[0x5246]),
    (0x2F822, false, &[0x5272]),
    (0x2F823, false, &[0x5277]),
    (0x2F824, false, &[0x3515]),
    (0x2F825, false, &[0x52C7]),
    (0x2F826, false, &[0x52C9]),
    (0x2F827, false, &[0x52E4]),
    (0x2F828, false, &[0x52FA]),
    (0x2F829, false, &[0x5305]),
    (0x2F82A, false, &[0x5306]),
    (0x2F82B, false, &[0x5317]),
    (0x2F82C, false, &[0x5349]),
    (0x2F82D, false, &[0x5351]),
    (0x2F82E, false, &[0x535A]),
    (0x2F82F, false, &[0x5373]),
    (0x2F830, false, &[0x537D]),
    (0x2F831, false, &[0x537F]),
    (0x2F832, false, &[0x537F]),
    (0x2F833, false, &[0x537F]),
    (0x2F834, false, &[0x20A2C]),
    (0x2F835, false, &[0x7070]),
    (0x2F836, false, &[0x53CA]),
    (0x2F837, false, &[0x53DF]),
    (0x2F838, false, &[0x20B63]),
    (0x2F839, false, &[0x53EB]),
    (0x2F83A, false, &[0x53F1]),
    (0x2F83B, false, &[0x5406]),
    (0x2F83C, false, &[0x549E]),
    (0x2F83D, false, &[0x5438]),
    (0x2F83E, false, &[0x5448]),
    (0x2F83F, false, &[0x5468]),
    (0x2F840, false, &[0x54A2]),
    (0x2F841, false, &[0x54F6]),
    (0x2F842, false, &[0x5510]),
    (0x2F843, false, &[0x5553]),
    (0x2F844, false, &[0x5563]),
    (0x2F845, false, &[0x5584]),
    (0x2F846, false, &[0x5584]),
    (0x2F847, false, &[0x5599]),
    (0x2F848, false, &[0x55AB]),
    (0x2F849, false, &[0x55B3]),
    (0x2F84A, false, &[0x55C2]),
    (0x2F84B, false, &[0x5716]),
    (0x2F84C, false, &[0x5606]),
    (0x2F84D, false, &[0x5717]),
    (0x2F84E, false, &[0x5651]),
    (0x2F84F, false, &[0x5674]),
    (0x2F850, false, &[0x5207]),
    (0x2F851, false, &[0x58EE]),
    (0x2F852, false, &[0x57CE]),
    (0x2F853, false, &[0x57F4]),
    (0x2F854, false, &[0x580D]),
    (0x2F855, false, &[0x578B]),
    (0x2F856, false, &[0x5832]),
    (0x2F857, false, &[0x5831]),
    (0x2F858, false, &[0x58AC]),
    (0x2F859, false, &[0x214E4]),
    (0x2F85A, false, &[0x58F2]),
    (0x2F85B, false, &[0x58F7]),
    (0x2F85C, false, &[0x5906]),
    (0x2F85D, false, &[0x591A]),
    (0x2F85E, false, &[0x5922]),
    (0x2F85F, false, &[0x5962]),
    (0x2F860, false, &[0x216A8]),
    (0x2F861, false, &[0x216EA]),
    (0x2F862, false, &[0x59EC]),
    (0x2F863, false, &[0x5A1B]),
    (0x2F864, false, &[0x5A27]),
    (0x2F865, false, &[0x59D8]),
    (0x2F866, false, &[0x5A66]),
    (0x2F867, false, &[0x36EE]),
    (0x2F868, false, &[0x36FC]),
    (0x2F869, false, &[0x5B08]),
    (0x2F86A, false, &[0x5B3E]),
    (0x2F86B, false, &[0x5B3E]),
    (0x2F86C, false, &[0x219C8]),
    (0x2F86D, false, &[0x5BC3]),
    (0x2F86E, false, &[0x5BD8]),
    (0x2F86F, false, &[0x5BE7]),
    (0x2F870, false, &[0x5BF3]),
    (0x2F871, false, &[0x21B18]),
    (0x2F872, false, &[0x5BFF]),
    (0x2F873, false, &[0x5C06]),
    (0x2F874, false, &[0x5F53]),
    (0x2F875, false, &[0x5C22]),
    (0x2F876, false, &[0x3781]),
    (0x2F877, false, &[0x5C60]),
    (0x2F878, false, &[0x5C6E]),
    (0x2F879, false, &[0x5CC0]),
    (0x2F87A, false, &[0x5C8D]),
    (0x2F87B, false, &[0x21DE4]),
    (0x2F87C, false, &[0x5D43]),
    (0x2F87D, false, &[0x21DE6]),
    (0x2F87E, false, &[0x5D6E]),
    (0x2F87F, false, &[0x5D6B]),
    (0x2F880, false, &[0x5D7C]),
    (0x2F881, false, &[0x5DE1]),
    (0x2F882, false, &[0x5DE2]),
    (0x2F883, false, &[0x382F]),
    (0x2F884, false, &[0x5DFD]),
    (0x2F885, false, &[0x5E28]),
    (0x2F886, false, &[0x5E3D]),
    (0x2F887, false, &[0x5E69]),
    (0x2F888, false, &[0x3862]),
    (0x2F889, false, &[0x22183]),
    (0x2F88A, false, &[0x387C]),
    (0x2F88B, false, &[0x5EB0]),
    (0x2F88C, false, &[0x5EB3]),
    (0x2F88D, false, &[0x5EB6]),
    (0x2F88E, false, &[0x5ECA]),
    (0x2F88F, false, &[0x2A392]),
    (0x2F890, false, &[0x5EFE]),
    (0x2F891, false, &[0x22331]),
    (0x2F892, false, &[0x22331]),
    (0x2F893, false, &[0x8201]),
    (0x2F894, false, &[0x5F22]),
    (0x2F895, false, &[0x5F22]),
    (0x2F896, false, &[0x38C7]),
    (0x2F897, false, &[0x232B8]),
    (0x2F898, false, &[0x261DA]),
    (0x2F899, false, &[0x5F62]),
    (0x2F89A, false, &[0x5F6B]),
    (0x2F89B, false, &[0x38E3]),
    (0x2F89C, false, &[0x5F9A]),
    (0x2F89D, false, &[0x5FCD]),
    (0x2F89E, false, &[0x5FD7]),
    (0x2F89F, false, &[0x5FF9]),
    (0x2F8A0, false, &[0x6081]),
    (0x2F8A1, false, &[0x393A]),
    (0x2F8A2, false, &[0x391C]),
    (0x2F8A3, false, &[0x6094]),
    (0x2F8A4, false, &[0x226D4]),
    (0x2F8A5, false, &[0x60C7]),
    (0x2F8A6, false, &[0x6148]),
    (0x2F8A7, false, &[0x614C]),
    (0x2F8A8, false, &[0x614E]),
    (0x2F8A9, false, &[0x614C]),
    (0x2F8AA, false, &[0x617A]),
    (0x2F8AB, false, &[0x618E]),
    (0x2F8AC, false, &[0x61B2]),
    (0x2F8AD, false, &[0x61A4]),
    (0x2F8AE, false, &[0x61AF]),
    (0x2F8AF, false, &[0x61DE]),
    (0x2F8B0, false, &[0x61F2]),
    (0x2F8B1, false, &[0x61F6]),
    (0x2F8B2, false, &[0x6210]),
    (0x2F8B3, false, &[0x621B]),
    (0x2F8B4, false, &[0x625D]),
    (0x2F8B5, false, &[0x62B1]),
    (0x2F8B6, false, &[0x62D4]),
    (0x2F8B7, false, &[0x6350]),
    (0x2F8B8, false, &[0x22B0C]),
    (0x2F8B9, false, &[0x633D]),
    (0x2F8BA, false, &[0x62FC]),
    (0x2F8BB, false, &[0x6368]),
    (0x2F8BC, false, &[0x6383]),
    (0x2F8BD, false, &[0x63E4]),
    (0x2F8BE, false, &[0x22BF1]),
    (0x2F8BF, false, &[0x6422]),
    (0x2F8C0, false, &[0x63C5]),
    (0x2F8C1, false, &[0x63A9]),
    (0x2F8C2, false, &[0x3A2E]),
    (0x2F8C3, false, &[0x6469]),
    (0x2F8C4, false, &[0x647E]),
    (0x2F8C5, false, &[0x649D]),
    (0x2F8C6, false, &[0x6477]),
    (0x2F8C7, false, &[0x3A6C]),
    (0x2F8C8, false, &[0x654F]),
    (0x2F8C9, false, &[0x656C]),
    (0x2F8CA, false, &[0x2300A]),
    (0x2F8CB, false, &[0x65E3]),
    (0x2F8CC, false, &[0x66F8]),
    (0x2F8CD, false, &[0x6649]),
    (0x2F8CE, false, &[0x3B19]),
    (0x2F8CF, false, &[0x6691]),
    (0x2F8D0, false, &[0x3B08]),
    (0x2F8D1, false, &[0x3AE4]),
    (0x2F8D2, false, &[0x5192]),
    (0x2F8D3, false, &[0x5195]),
    (0x2F8D4, false, &[0x6700]),
    (0x2F8D5, false, &[0x669C]),
    (0x2F8D6, false, &[0x80AD]),
    (0x2F8D7, false, &[0x43D9]),
    (0x2F8D8, false, &[0x6717]),
    (0x2F8D9, false, &[0x671B]),
    (0x2F8DA, false, &[0x6721]),
    (0x2F8DB, false, &[0x675E]),
    (0x2F8DC, false, &[0x6753]),
    (0x2F8DD, false, &[0x233C3]),
    (0x2F8DE, false, &[0x3B49]),
    (0x2F8DF, false, &[0x67FA]),
    (0x2F8E0, false, &[0x6785]),
    (0x2F8E1, false, &[0x6852]),
    (0x2F8E2, false, &[0x6885]),
    (0x2F8E3, false, &[0x2346D]),
    (0x2F8E4, false, &[0x688E]),
    (0x2F8E5, false, &[0x681F]),
    (0x2F8E6, false, &[0x6914]),
    (0x2F8E7, false, &[0x3B9D]),
    (0x2F8E8, false, &[0x6942]),
    (0x2F8E9, false, &[0x69A3]),
    (0x2F8EA, false, &[0x69EA]),
    (0x2F8EB, false, &[0x6AA8]),
    (0x2F8EC, false, &[0x236A3]),
    (0x2F8ED, false, &[0x6ADB]),
    (0x2F8EE, false, &[0x3C18]),
    (0x2F8EF, false, &[0x6B21]),
    (0x2F8F0, false, &[0x238A7]),
    (0x2F8F1, false, &[0x6B54]),
    (0x2F8F2, false, &[0x3C4E]),
    (0x2F8F3, false, &[0x6B72]),
    (0x2F8F4, false, &[0x6B9F]),
    (0x2F8F5, false, &[0x6BBA]),
    (0x2F8F6, false, &[0x6BBB]),
    (0x2F8F7, false, &[0x23A8D]),
    (0x2F8F8, false, &[0x21D0B]),
    (0x2F8F9, false, &[0x23AFA]),
    (0x2F8FA, false, &[0x6C4E]),
    (0x2F8FB, false, &[0x23CBC]),
    (0x2F8FC, false, &[0x6CBF]),
    (0x2F8FD, false, &[0x6CCD]),
    (0x2F8FE, false, &[0x6C67]),
    (0x2F8FF, false, &[0x6D16]),
    (0x2F900, false, &[0x6D3E]),
    (0x2F901, false, &[0x6D77]),
    (0x2F902, false, &[0x6D41]),
    (0x2F903, false, &[0x6D69]),
    (0x2F904, false, &[0x6D78]),
    (0x2F905, false, &[0x6D85]),
    (0x2F906, false, &[0x23D1E]),
    (0x2F907, false, &[0x6D34]),
    (0x2F908, false, &[0x6E2F]),
    (0x2F909, false, &[0x6E6E]),
    (0x2F90A, false, &[0x3D33]),
    (0x2F90B, false, &[0x6ECB]),
    (0x2F90C, false, &[0x6EC7]),
    (0x2F90D, false, &[0x23ED1]),
    (0x2F90E, false, &[0x6DF9]),
    (0x2F90F, false, &[0x6F6E]),
    (0x2F910, false, &[0x23F5E]),
    (0x2F911, false, &[0x23F8E]),
    (0x2F912, false, &[0x6FC6]),
    (0x2F913, false, &[0x7039]),
    (0x2F914, false, &[0x701E]),
    (0x2F915, false, &[0x701B]),
    (0x2F916, false, &[0x3D96]),
    (0x2F917, false, &[0x704A]),
    (0x2F918, false, &[0x707D]),
    (0x2F919, false, &[0x7077]),
    (0x2F91A, false, &[0x70AD]),
    (0x2F91B, false, &[0x20525]),
    (0x2F91C, false, &[0x7145]),
    (0x2F91D, false, &[0x24263]),
    (0x2F91E, false, &[0x719C]),
    (0x2F91F, false, &[0x243AB]),
    (0x2F920, false, &[0x7228]),
    (0x2F921, false, &[0x7235]),
    (0x2F922, false, &[0x7250]),
    (0x2F923, false, &[0x24608]),
    (0x2F924, false, &[0x7280]),
    (0x2F925, false, &[0x7295]),
    (0x2F926, false, &[0x24735]),
    (0x2F927, false, &[0x24814]),
    (0x2F928, false, &[0x737A]),
    (0x2F929, false, &[0x738B]),
    (0x2F92A, false, &[0x3EAC]),
    (0x2F92B, false, &[0x73A5]),
    (0x2F92C, false, &[0x3EB8]),
    (0x2F92D, false, &[0x3EB8]),
    (0x2F92E, false, &[0x7447]),
    (0x2F92F, false, &[0x745C]),
    (0x2F930, false, &[0x7471]),
    (0x2F931, false, &[0x7485]),
    (0x2F932, false, &[0x74CA]),
    (0x2F933, false, &[0x3F1B]),
    (0x2F934, false, &[0x7524]),
    (0x2F935, false, &[0x24C36]),
    (0x2F936, false, &[0x753E]),
    (0x2F937, false, &[0x24C92]),
    (0x2F938, false, &[0x7570]),
    (0x2F939, false, &[0x2219F]),
    (0x2F93A, false, &[0x7610]),
    (0x2F93B, false, &[0x24FA1]),
    (0x2F93C, false, &[0x24FB8]),
    (0x2F93D, false, &[0x25044]),
    (0x2F93E, false, &[0x3FFC]),
    (0x2F93F, false, &[0x4008]),
    (0x2F940, false, &[0x76F4]),
    (0x2F941, false, &[0x250F3]),
    (0x2F942, false, &[0x250F2]),
    (0x2F943, false, &[0x25119]),
    (0x2F944, false, &[0x25133]),
    (0x2F945, false, &[0x771E]),
    (0x2F946, false, &[0x771F]),
    (0x2F947, false, &[0x771F]),
    (0x2F948, false, &[0x774A]),
    (0x2F949, false, &[0x4039]),
    (0x2F94A, false, &[0x778B]),
    (0x2F94B, false, &[0x4046]),
    (0x2F94C, false, &[0x4096]),
    (0x2F94D, false, &[0x2541D]),
    (0x2F94E, false, &[0x784E]),
    (0x2F94F, false, &[0x788C]),
    (0x2F950, false, &[0x78CC]),
    (0x2F951, false, &[0x40E3]),
    (0x2F952, false, &[0x25626]),
    (0x2F953, false, &[0x7956]),
    (0x2F954, false, &[0x2569A]),
    (0x2F955, false, &[0x256C5]),
    (0x2F956, false, &[0x798F]),
    (0x2F957, false, &[0x79EB]),
    (0x2F958, false, &[0x412F]),
    (0x2F959, false, &[0x7A40]),
    (0x2F95A, false, &[0x7A4A]),
    (0x2F95B, false, &[0x7A4F]),
    (0x2F95C, false, &[0x2597C]),
    (0x2F95D, false, &[0x25AA7]),
    (0x2F95E, false, &[0x25AA7]),
    (0x2F95F, false, &[0x7AEE]),
    (0x2F960, false, &[0x4202]),
    (0x2F961, false, &[0x25BAB]),
    (0x2F962, false, &[0x7BC6]),
    (0x2F963, false, &[0x7BC9]),
    (0x2F964, false, &[0x4227]),
    (0x2F965, false, &[0x25C80]),
    (0x2F966, false, &[0x7CD2]),
    (0x2F967, false, &[0x42A0]),
    (0x2F968, false, &[0x7CE8]),
    (0x2F969, false, &[0x7CE3]),
    (0x2F96A, false, &[0x7D00]),
    (0x2F96B, false, &[0x25F86]),
    (0x2F96C, false, &[0x7D63]),
    (0x2F96D, false, &[0x4301]),
    (0x2F96E, false, &[0x7DC7]),
    (0x2F96F, false, &[0x7E02]),
    (0x2F970, false, &[0x7E45]),
    (0x2F971, false, &[0x4334]),
    (0x2F972, false, &[0x26228]),
    (0x2F973, false, &[0x26247]),
    (0x2F974, false, &[0x4359]),
    (0x2F975, false, &[0x262D9]),
    (0x2F976, false, &[0x7F7A]),
    (0x2F977, false, &[0x2633E]),
    (0x2F978, false, &[0x7F95]),
    (0x2F979, false, &[0x7FFA]),
    (0x2F97A, false, &[0x8005]),
    (0x2F97B, false, &[0x264DA]),
    (0x2F97C, false, &[0x26523]),
    (0x2F97D, false, &[0x8060]),
    (0x2F97E, false, &[0x265A8]),
    (0x2F97F, false, &[0x8070]),
    (0x2F980, false, &[0x2335F]),
    (0x2F981, false, &[0x43D5]),
    (0x2F982, false, &[0x80B2]),
    (0x2F983, false, &[0x8103]),
    (0x2F984, false, &[0x440B]),
    (0x2F985, false, &[0x813E]),
    (0x2F986, false, &[0x5AB5]),
    (0x2F987, false, &[0x267A7]),
    (0x2F988, false, &[0x267B5]),
    (0x2F989, false, &[0x23393]),
    (0x2F98A, false, &[0x2339C]),
    (0x2F98B, false, &[0x8201]),
    (0x2F98C, false, &[0x8204]),
    (0x2F98D, false, &[0x8F9E]),
    (0x2F98E, false, &[0x446B]),
    (0x2F98F, false, &[0x8291]),
    (0x2F990, false, &[0x828B]),
    (0x2F991, false, &[0x829D]),
    (0x2F992, false, &[0x52B3]),
    (0x2F993, false, &[0x82B1]),
    (0x2F994, false, &[0x82B3]),
    (0x2F995, false, &[0x82BD]),
    (0x2F996, false, &[0x82E6]),
    (0x2F997, false, &[0x26B3C]),
    (0x2F998, false, &[0x82E5]),
    (0x2F999, false, &[0x831D]),
    (0x2F99A, false, &[0x8363]),
    (0x2F99B, false, &[0x83AD]),
    (0x2F99C, false, &[0x8323]),
    (0x2F99D, false, &[0x83BD]),
    (0x2F99E, false, &[0x83E7]),
    (0x2F99F, false, &[0x8457]),
    (0x2F9A0, false, &[0x8353]),
    (0x2F9A1, false, &[0x83CA]),
    (0x2F9A2, false, &[0x83CC]),
    (0x2F9A3, false, &[0x83DC]),
    (0x2F9A4, false, &[0x26C36]),
    (0x2F9A5, false, &[0x26D6B]),
    (0x2F9A6, false, &[0x26CD5]),
    (0x2F9A7, false, &[0x452B]),
    (0x2F9A8, false, &[0x84F1]),
    (0x2F9A9, false, &[0x84F3]),
    (0x2F9AA, false, &[0x8516]),
    (0x2F9AB, false, &[0x273CA]),
    (0x2F9AC, false, &[0x8564]),
    (0x2F9AD, false, &[0x26F2C]),
    (0x2F9AE, false, &[0x455D]),
    (0x2F9AF, false, &[0x4561]),
    (0x2F9B0, false, &[0x26FB1]),
    (0x2F9B1, false, &[0x270D2]),
    (0x2F9B2, false, &[0x456B]),
    (0x2F9B3, false, &[0x8650]),
    (0x2F9B4, false, &[0x865C]),
    (0x2F9B5, false, &[0x8667]),
    (0x2F9B6, false, &[0x8669]),
    (0x2F9B7, false, &[0x86A9]),
    (0x2F9B8, false, &[0x8688]),
    (0x2F9B9, false, &[0x870E]),
    (0x2F9BA, false, &[0x86E2]),
    (0x2F9BB, false, &[0x8779]),
    (0x2F9BC, false, &[0x8728]),
    (0x2F9BD, false, &[0x876B]),
    (0x2F9BE, false, &[0x8786]),
    (0x2F9BF, false, &[0x45D7]),
    (0x2F9C0, false, &[0x87E1]),
    (0x2F9C1, false, &[0x8801]),
    (0x2F9C2, false, &[0x45F9]),
    (0x2F9C3, false, &[0x8860]),
    (0x2F9C4, false, &[0x8863]),
    (0x2F9C5, false, &[0x27667]),
    (0x2F9C6, false, &[0x88D7]),
    (0x2F9C7, false, &[0x88DE]),
    (0x2F9C8, false, &[0x4635]),
    (0x2F9C9, false, &[0x88FA]),
    (0x2F9CA, false, &[0x34BB]),
    (0x2F9CB, false, &[0x278AE]),
    (0x2F9CC, false, &[0x27966]),
    (0x2F9CD, false, &[0x46BE]),
    (0x2F9CE, false, &[0x46C7]),
    (0x2F9CF, false, &[0x8AA0]),
    (0x2F9D0, false, &[0x8AED]),
    (0x2F9D1, false, &[0x8B8A]),
    (0x2F9D2, false, &[0x8C55]),
    (0x2F9D3, false, &[0x27CA8]),
    (0x2F9D4, false, &[0x8CAB]),
    (0x2F9D5, false, &[0x8CC1]),
    (0x2F9D6, false, &[0x8D1B]),
    (0x2F9D7, false, &[0x8D77]),
    (0x2F9D8, false, &[0x27F2F]),
    (0x2F9D9, false, &[0x20804]),
    (0x2F9DA, false, &[0x8DCB]),
    (0x2F9DB, false, &[0x8DBC]),
    (0x2F9DC, false, &[0x8DF0]),
    (0x2F9DD, false, &[0x208DE]),
    (0x2F9DE, false, &[0x8ED4]),
    (0x2F9DF, false, &[0x8F38]),
    (0x2F9E0, false, &[0x285D2]),
    (0x2F9E1, false, &[0x285ED]),
    (0x2F9E2, false, &[0x9094]),
    (0x2F9E3, false, &[0x90F1]),
    (0x2F9E4, false, &[0x9111]),
    (0x2F9E5, false, &[0x2872E]),
    (0x2F9E6, false, &[0x911B]),
    (0x2F9E7, false, &[0x9238]),
    (0x2F9E8, false, &[0x92D7]),
    (0x2F9E9, false, &[0x92D8]),
    (0x2F9EA, false, &[0x927C]),
    (0x2F9EB, false, &[0x93F9]),
    (0x2F9EC, false, &[0x9415]),
    (0x2F9ED, false, &[0x28BFA]),
    (0x2F9EE, false, &[0x958B]),
    (0x2F9EF, false, &[0x4995]),
    (0x2F9F0, false, &[0x95B7]),
    (0x2F9F1, false, &[0x28D77]),
    (0x2F9F2, false, &[0x49E6]),
    (0x2F9F3, false, &[0x96C3]),
    (0x2F9F4, false, &[0x5DB2]),
    (0x2F9F5, false, &[0x9723]),
    (0x2F9F6, false, &[0x29145]),
    (0x2F9F7, false, &[0x2921A]),
    (0x2F9F8, false, &[0x4A6E]),
    (0x2F9F9, false, &[0x4A76]),
    (0x2F9FA, false, &[0x97E0]),
    (0x2F9FB, false, &[0x2940A]),
    (0x2F9FC, false, &[0x4AB2]),
    (0x2F9FD, false, &[0x29496]),
    (0x2F9FE, false, &[0x980B]),
    (0x2F9FF, false, &[0x980B]),
    (0x2FA00, false, &[0x9829]),
    (0x2FA01, false, &[0x295B6]),
    (0x2FA02, false, &[0x98E2]),
    (0x2FA03, false, &[0x4B33]),
    (0x2FA04, false, &[0x9929]),
    (0x2FA05, false, &[0x99A7]),
    (0x2FA06, false, &[0x99C2]),
    (0x2FA07, false, &[0x99FE]),
    (0x2FA08, false, &[0x4BCE]),
    (0x2FA09, false, &[0x29B30]),
    (0x2FA0A, false, &[0x9B12]),
    (0x2FA0B, false, &[0x9C40]),
    (0x2FA0C, false, &[0x9CFD]),
    (0x2FA0D, false, &[0x4CCE]),
    (0x2FA0E, false, &[0x4CED]),
    (0x2FA0F, false, &[0x9D67]),
    (0x2FA10, false, &[0x2A0CE]),
    (0x2FA11, false, &[0x4CF8]),
    (0x2FA12, false, &[0x2A105]),
    (0x2FA13, false, &[0x2A20E]),
    (0x2FA14, false, &[0x2A291]),
    (0x2FA15, false, &[0x9EBB]),
    (0x2FA16, false, &[0x4D56]),
    (0x2FA17, false, &[0x9EF9]),
    (0x2FA18, false, &[0x9EFE]),
    (0x2FA19, false, &[0x9F05]),
    (0x2FA1A, false, &[0x9F0F]),
    (0x2FA1B, false, &[0x9F16]),
    (0x2FA1C, false, &[0x9F3B]),
    (0x2FA1D, false, &[0x2A600]),
];
