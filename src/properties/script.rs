//! Script and Script_Extensions properties.

/// Script values (Scripts.txt). `Unknown` covers unassigned scalars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Script {
    Unknown,
    Common,
    Inherited,
    Adlam,
    Ahom,
    AnatolianHieroglyphs,
    Arabic,
    Armenian,
    Avestan,
    Balinese,
    Bamum,
    BassaVah,
    Batak,
    Bengali,
    Bhaiksuki,
    Bopomofo,
    Brahmi,
    Braille,
    Buginese,
    Buhid,
    CanadianAboriginal,
    Carian,
    CaucasianAlbanian,
    Chakma,
    Cham,
    Cherokee,
    Chorasmian,
    Coptic,
    Cuneiform,
    Cypriot,
    CyproMinoan,
    Cyrillic,
    Deseret,
    Devanagari,
    DivesAkuru,
    Dogra,
    Duployan,
    EgyptianHieroglyphs,
    Elbasan,
    Elymaic,
    Ethiopic,
    Georgian,
    Glagolitic,
    Gothic,
    Grantha,
    Greek,
    Gujarati,
    GunjalaGondi,
    Gurmukhi,
    Han,
    Hangul,
    HanifiRohingya,
    Hanunoo,
    Hatran,
    Hebrew,
    Hiragana,
    ImperialAramaic,
    InscriptionalPahlavi,
    InscriptionalParthian,
    Javanese,
    Kaithi,
    Kannada,
    Katakana,
    KayahLi,
    Kharoshthi,
    KhitanSmallScript,
    Khmer,
    Khojki,
    Khudawadi,
    Lao,
    Latin,
    Lepcha,
    Limbu,
    LinearA,
    LinearB,
    Lisu,
    Lycian,
    Lydian,
    Mahajani,
    Makasar,
    Malayalam,
    Mandaic,
    Manichaean,
    Marchen,
    MasaramGondi,
    Medefaidrin,
    MeeteiMayek,
    MendeKikakui,
    MeroiticCursive,
    MeroiticHieroglyphs,
    Miao,
    Modi,
    Mongolian,
    Mro,
    Multani,
    Myanmar,
    Nabataean,
    Nandinagari,
    NewTaiLue,
    Newa,
    Nko,
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
    Oriya,
    Osage,
    Osmanya,
    PahawhHmong,
    Palmyrene,
    PauCinHau,
    PhagsPa,
    Phoenician,
    PsalterPahlavi,
    Rejang,
    Runic,
    Samaritan,
    Saurashtra,
    Sharada,
    Shavian,
    Siddham,
    SignWriting,
    Sinhala,
    Sogdian,
    SoraSompeng,
    Soyombo,
    Sundanese,
    SylotiNagri,
    Syriac,
    Tagalog,
    Tagbanwa,
    TaiLe,
    TaiTham,
    TaiViet,
    Takri,
    Tamil,
    Tangsa,
    Tangut,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    Tifinagh,
    Tirhuta,
    Toto,
    Ugaritic,
    Vai,
    Vithkuqi,
    Wancho,
    WarangCiti,
    Yezidi,
    Yi,
    ZanabazarSquare,
}

/// One run of code points sharing a Script value.
#[derive(Clone, Copy, Debug)]
pub struct ScriptRange {
    pub start: u32,
    pub end: u32,
    pub script: Script,
}

include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/unicode14/script.rs"
));

/// Look up the Script of a scalar.
#[must_use]
pub fn script(ch: char) -> Script {
    let value = ch as u32;
    let idx = SCRIPT_RANGES.partition_point(|range| range.end < value);
    match SCRIPT_RANGES.get(idx) {
        Some(range) if range.start <= value => range.script,
        _ => Script::Unknown,
    }
}

/// The Script_Extensions set for a scalar, if it has one beyond its plain
/// Script value.
#[must_use]
pub fn script_extensions(ch: char) -> Option<&'static [Script]> {
    let value = ch as u32;
    let idx = SCRIPT_EXTENSION_RANGES.partition_point(|&(_, end, _)| end < value);
    match SCRIPT_EXTENSION_RANGES.get(idx) {
        Some(&(start, _, scripts)) if start <= value => Some(scripts),
        _ => None,
    }
}

/// True when the scalar belongs to `wanted`: either its Script matches, or
/// its Script is Common or Inherited and `wanted` appears in its
/// Script_Extensions.
#[must_use]
pub fn is_script(wanted: Script, ch: char) -> bool {
    let value = script(ch);
    if value == wanted {
        return true;
    }
    matches!(value, Script::Common | Script::Inherited)
        && script_extensions(ch).is_some_and(|scripts| scripts.contains(&wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_scripts() {
        assert_eq!(script('a'), Script::Latin);
        assert_eq!(script('\u{03B1}'), Script::Greek);
        assert_eq!(script('\u{0416}'), Script::Cyrillic);
        assert_eq!(script('\u{4E2D}'), Script::Han);
        assert_eq!(script(' '), Script::Common);
        assert_eq!(script('\u{0301}'), Script::Inherited);
    }

    #[test]
    fn supplementary_plane_scripts() {
        assert_eq!(script('\u{10570}'), Script::Vithkuqi);
        assert_eq!(script('\u{10F70}'), Script::OldUyghur);
        assert_eq!(script('\u{12F90}'), Script::CyproMinoan);
        assert_eq!(script('\u{16A70}'), Script::Tangsa);
        assert_eq!(script('\u{1E290}'), Script::Toto);
        assert_eq!(script('\u{11400}'), Script::Newa);
        assert_eq!(script('\u{10D00}'), Script::HanifiRohingya);
        assert_eq!(script('\u{1720}'), Script::Hanunoo);
    }

    #[test]
    fn extensions() {
        // Devanagari danda is Common but usable across the Indic scripts.
        assert!(is_script(Script::Devanagari, '\u{0964}'));
        assert!(is_script(Script::Bengali, '\u{0964}'));
        assert!(is_script(Script::Grantha, '\u{0964}'));
        assert!(is_script(Script::Common, '\u{0964}'));
        assert!(!is_script(Script::Latin, '\u{0964}'));
        // Katakana-Hiragana prolonged sound mark.
        assert!(is_script(Script::Katakana, '\u{30FC}'));
        assert!(is_script(Script::Hiragana, '\u{30FC}'));
        // Aegean numbers reach the Cypriot and Linear scripts.
        assert!(is_script(Script::LinearB, '\u{10107}'));
        assert!(is_script(Script::Cypriot, '\u{10107}'));
        // Plain letters only match their own script.
        assert!(is_script(Script::Latin, 'x'));
        assert!(!is_script(Script::Greek, 'x'));
    }
}
