//! Regenerate the committed Unicode 14.0.0 property tables under
//! `generated/unicode14/`. Downloads are cached next to the output so the
//! task runs offline after the first fetch.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const UCD_BASE: &str = "https://www.unicode.org/Public/14.0.0/ucd/";
const AUX_BASE: &str = "https://www.unicode.org/Public/14.0.0/ucd/auxiliary/";
const EMOJI_BASE: &str = "https://www.unicode.org/Public/14.0.0/ucd/emoji/";

const MAX_SCALAR: u32 = 0x0010_FFFF;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub fn run() -> Result<()> {
    let out_dir = PathBuf::from("generated/unicode14");
    fs::create_dir_all(&out_dir)?;
    let cache_dir = out_dir.join("ucd_cache");
    fs::create_dir_all(&cache_dir)?;

    let unicode_data = fetch(&cache_dir, "UnicodeData.txt", UCD_BASE)?;
    let prop_list = fetch(&cache_dir, "PropList.txt", UCD_BASE)?;
    let derived_core = fetch(&cache_dir, "DerivedCoreProperties.txt", UCD_BASE)?;
    let comp_exclusions = fetch(&cache_dir, "CompositionExclusions.txt", UCD_BASE)?;
    let derived_norm = fetch(&cache_dir, "DerivedNormalizationProps.txt", UCD_BASE)?;
    let special_casing = fetch(&cache_dir, "SpecialCasing.txt", UCD_BASE)?;
    let case_folding = fetch(&cache_dir, "CaseFolding.txt", UCD_BASE)?;
    let scripts = fetch(&cache_dir, "Scripts.txt", UCD_BASE)?;
    let script_extensions = fetch(&cache_dir, "ScriptExtensions.txt", UCD_BASE)?;
    let property_aliases = fetch(&cache_dir, "PropertyValueAliases.txt", UCD_BASE)?;
    let blocks = fetch(&cache_dir, "Blocks.txt", UCD_BASE)?;
    let grapheme_break = fetch(&cache_dir, "GraphemeBreakProperty.txt", AUX_BASE)?;
    let word_break = fetch(&cache_dir, "WordBreakProperty.txt", AUX_BASE)?;
    let sentence_break = fetch(&cache_dir, "SentenceBreakProperty.txt", AUX_BASE)?;
    let emoji_data = fetch(&cache_dir, "emoji-data.txt", EMOJI_BASE)?;

    let records = parse_unicode_data(&unicode_data)?;

    write_category_table(&out_dir, &records)?;
    write_flag_tables(&out_dir, &prop_list)?;
    write_derived_tables(&out_dir, &derived_core)?;
    write_normalization_tables(&out_dir, &records)?;
    write_composition_table(&out_dir, &records, &comp_exclusions, &derived_norm)?;
    write_case_tables(&out_dir, &records, &special_casing, &case_folding)?;
    write_break_table(
        &out_dir,
        "grapheme.rs",
        "GRAPHEME_BREAK_RANGES",
        "GraphemeBreakRange",
        "GraphemeBreak",
        &grapheme_break,
    )?;
    write_break_table(
        &out_dir,
        "word.rs",
        "WORD_BREAK_RANGES",
        "WordBreakRange",
        "WordBreak",
        &word_break,
    )?;
    write_break_table(
        &out_dir,
        "sentence.rs",
        "SENTENCE_BREAK_RANGES",
        "SentenceBreakRange",
        "SentenceBreak",
        &sentence_break,
    )?;
    write_emoji_table(&out_dir, &emoji_data)?;
    write_script_tables(&out_dir, &scripts, &script_extensions, &property_aliases)?;
    write_block_table(&out_dir, &blocks)?;

    println!("generated Unicode 14 tables into {}", out_dir.display());
    Ok(())
}

fn fetch(cache_dir: &Path, name: &str, base: &str) -> Result<String> {
    let path = cache_dir.join(name);
    if let Ok(contents) = fs::read_to_string(&path) {
        return Ok(contents);
    }
    let url = format!("{base}{name}");
    println!("downloading {url}");
    let response = ureq::get(&url).call()?;
    let text = response.into_string()?;
    fs::write(&path, text.as_bytes())?;
    Ok(text)
}

/// One parsed UnicodeData.txt row.
struct CharRecord {
    category: String,
    combining_class: u8,
    decomposition: Vec<u32>,
    compat: bool,
    upper: Option<u32>,
    lower: Option<u32>,
    title: Option<u32>,
}

fn parse_scalar(field: &str) -> Option<u32> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    u32::from_str_radix(trimmed, 16).ok()
}

fn parse_unicode_data(text: &str) -> Result<BTreeMap<u32, CharRecord>> {
    let mut records = BTreeMap::new();
    let mut range_start: Option<(u32, String)> = None;

    for line in text.lines() {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 15 {
            continue;
        }
        let Some(code) = parse_scalar(fields[0]) else {
            continue;
        };
        let name = fields[1];
        let category = fields[2].to_string();

        // Ranged records appear as "<Name, First>" / "<Name, Last>" pairs.
        if name.ends_with(", First>") {
            range_start = Some((code, category));
            continue;
        }
        if name.ends_with(", Last>") {
            if let Some((start, range_category)) = range_start.take() {
                for scalar in start..=code {
                    records.insert(
                        scalar,
                        CharRecord {
                            category: range_category.clone(),
                            combining_class: 0,
                            decomposition: Vec::new(),
                            compat: false,
                            upper: None,
                            lower: None,
                            title: None,
                        },
                    );
                }
            }
            continue;
        }

        let combining_class = fields[3].parse::<u8>().unwrap_or(0);
        let decomp_field = fields[5].trim();
        let (compat, decomposition) = if decomp_field.is_empty() {
            (false, Vec::new())
        } else {
            let compat = decomp_field.starts_with('<');
            let scalars = decomp_field
                .split_whitespace()
                .filter(|part| !part.starts_with('<'))
                .filter_map(parse_scalar)
                .collect();
            (compat, scalars)
        };

        records.insert(
            code,
            CharRecord {
                category,
                combining_class,
                decomposition,
                compat,
                upper: parse_scalar(fields[12]),
                lower: parse_scalar(fields[13]),
                title: parse_scalar(fields.get(14).copied().unwrap_or("")),
            },
        );
    }

    Ok(records)
}

fn header(file: &mut fs::File) -> Result<()> {
    writeln!(
        file,
        "// Generated by `cargo run -p xtask -- unicode` from UCD 14.0.0 data. Do not edit."
    )?;
    Ok(())
}

fn merge_ranges(mut ranges: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1.saturating_add(1) => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

fn write_range_array(file: &mut fs::File, name: &str, ranges: &[(u32, u32)]) -> Result<()> {
    writeln!(file, "pub static {name}: &[Range] = &[")?;
    for &(start, end) in ranges {
        writeln!(
            file,
            "    Range {{ start: 0x{start:04X}, end: 0x{end:04X} }},"
        )?;
    }
    writeln!(file, "];")?;
    Ok(())
}

/// Parse "range ; Property_Name" style files into per-property range lists.
fn parse_property_file(text: &str) -> HashMap<String, Vec<(u32, u32)>> {
    let mut properties: HashMap<String, Vec<(u32, u32)>> = HashMap::new();
    for line in text.lines() {
        let Some((range_text, rest)) = line.split_once(';') else {
            continue;
        };
        let property = rest.split('#').next().unwrap_or("").trim();
        if property.is_empty() {
            continue;
        }
        if let Some(range) = parse_range(range_text) {
            properties.entry(property.to_string()).or_default().push(range);
        }
    }
    properties
}

fn parse_range(text: &str) -> Option<(u32, u32)> {
    let cleaned = text.split('#').next().unwrap_or("").trim();
    if cleaned.is_empty() {
        return None;
    }
    if let Some((start, end)) = cleaned.split_once("..") {
        Some((parse_scalar(start)?, parse_scalar(end)?))
    } else {
        let value = parse_scalar(cleaned)?;
        Some((value, value))
    }
}

fn write_category_table(out_dir: &Path, records: &BTreeMap<u32, CharRecord>) -> Result<()> {
    let mut file = fs::File::create(out_dir.join("category.rs"))?;
    header(&mut file)?;
    writeln!(
        file,
        "pub static GENERAL_CATEGORY_RANGES: &[CategoryRange] = &["
    )?;

    let mut run: Option<(u32, u32, String)> = None;
    for scalar in 0..=MAX_SCALAR {
        let category = records
            .get(&scalar)
            .map_or("Cn", |record| record.category.as_str());
        match &mut run {
            Some((_, end, current)) if current.as_str() == category && *end + 1 == scalar => {
                *end = scalar;
            }
            _ => {
                if let Some((start, end, current)) = run.take() {
                    if current != "Cn" {
                        writeln!(
                            file,
                            "    CategoryRange {{ start: 0x{start:04X}, end: 0x{end:04X}, category: GeneralCategory::{current} }},"
                        )?;
                    }
                }
                run = Some((scalar, scalar, category.to_string()));
            }
        }
    }
    if let Some((start, end, current)) = run {
        if current != "Cn" {
            writeln!(
                file,
                "    CategoryRange {{ start: 0x{start:04X}, end: 0x{end:04X}, category: GeneralCategory::{current} }},"
            )?;
        }
    }
    writeln!(file, "];")?;
    Ok(())
}

const FLAG_TABLES: &[(&str, &str)] = &[
    ("White_Space", "WHITE_SPACE_RANGES"),
    ("Bidi_Control", "BIDI_CONTROL_RANGES"),
    ("Join_Control", "JOIN_CONTROL_RANGES"),
    ("Dash", "DASH_RANGES"),
    ("Hyphen", "HYPHEN_RANGES"),
    ("Quotation_Mark", "QUOTATION_MARK_RANGES"),
    ("Terminal_Punctuation", "TERMINAL_PUNCTUATION_RANGES"),
    ("Other_Math", "OTHER_MATH_RANGES"),
    ("Hex_Digit", "HEX_DIGIT_RANGES"),
    ("ASCII_Hex_Digit", "ASCII_HEX_DIGIT_RANGES"),
    ("Other_Alphabetic", "OTHER_ALPHABETIC_RANGES"),
    ("Ideographic", "IDEOGRAPHIC_RANGES"),
    ("Extender", "EXTENDER_RANGES"),
    ("Other_Lowercase", "OTHER_LOWERCASE_RANGES"),
    ("Other_Uppercase", "OTHER_UPPERCASE_RANGES"),
    ("Noncharacter_Code_Point", "NONCHARACTER_CODE_POINT_RANGES"),
    ("Other_Grapheme_Extend", "OTHER_GRAPHEME_EXTEND_RANGES"),
    ("IDS_Binary_Operator", "IDS_BINARY_OPERATOR_RANGES"),
    ("IDS_Trinary_Operator", "IDS_TRINARY_OPERATOR_RANGES"),
    ("Radical", "RADICAL_RANGES"),
    ("Unified_Ideograph", "UNIFIED_IDEOGRAPH_RANGES"),
    (
        "Other_Default_Ignorable_Code_Point",
        "OTHER_DEFAULT_IGNORABLE_CODE_POINT_RANGES",
    ),
    ("Deprecated", "DEPRECATED_RANGES"),
    ("Soft_Dotted", "SOFT_DOTTED_RANGES"),
    ("Logical_Order_Exception", "LOGICAL_ORDER_EXCEPTION_RANGES"),
    ("Other_ID_Start", "OTHER_ID_START_RANGES"),
    ("Other_ID_Continue", "OTHER_ID_CONTINUE_RANGES"),
    ("Sentence_Terminal", "SENTENCE_TERMINAL_RANGES"),
    ("Variation_Selector", "VARIATION_SELECTOR_RANGES"),
    ("Pattern_White_Space", "PATTERN_WHITE_SPACE_RANGES"),
    ("Pattern_Syntax", "PATTERN_SYNTAX_RANGES"),
    (
        "Prepended_Concatenation_Mark",
        "PREPENDED_CONCATENATION_MARK_RANGES",
    ),
    ("Diacritic", "DIACRITIC_RANGES"),
];

fn write_flag_tables(out_dir: &Path, prop_list: &str) -> Result<()> {
    let properties = parse_property_file(prop_list);
    let mut file = fs::File::create(out_dir.join("flags.rs"))?;
    header(&mut file)?;
    for &(property, table) in FLAG_TABLES {
        let ranges = merge_ranges(properties.get(property).cloned().unwrap_or_default());
        write_range_array(&mut file, table, &ranges)?;
        writeln!(file)?;
    }
    Ok(())
}

const DERIVED_TABLES: &[(&str, &str)] = &[
    ("Math", "MATH_RANGES"),
    ("Alphabetic", "ALPHABETIC_RANGES"),
    ("Lowercase", "LOWERCASE_RANGES"),
    ("Uppercase", "UPPERCASE_RANGES"),
    ("Cased", "CASED_RANGES"),
    ("Case_Ignorable", "CASE_IGNORABLE_RANGES"),
    ("Changes_When_Lowercased", "CHANGES_WHEN_LOWERCASED_RANGES"),
    ("Changes_When_Uppercased", "CHANGES_WHEN_UPPERCASED_RANGES"),
    ("Changes_When_Titlecased", "CHANGES_WHEN_TITLECASED_RANGES"),
    ("Changes_When_Casefolded", "CHANGES_WHEN_CASEFOLDED_RANGES"),
    ("Changes_When_Casemapped", "CHANGES_WHEN_CASEMAPPED_RANGES"),
    ("ID_Start", "ID_START_RANGES"),
    ("ID_Continue", "ID_CONTINUE_RANGES"),
    ("XID_Start", "XID_START_RANGES"),
    ("XID_Continue", "XID_CONTINUE_RANGES"),
    (
        "Default_Ignorable_Code_Point",
        "DEFAULT_IGNORABLE_CODE_POINT_RANGES",
    ),
    ("Grapheme_Extend", "GRAPHEME_EXTEND_RANGES"),
    ("Grapheme_Base", "GRAPHEME_BASE_RANGES"),
    ("Grapheme_Link", "GRAPHEME_LINK_RANGES"),
];

fn write_derived_tables(out_dir: &Path, derived_core: &str) -> Result<()> {
    let properties = parse_property_file(derived_core);
    let mut file = fs::File::create(out_dir.join("derived.rs"))?;
    header(&mut file)?;
    for &(property, table) in DERIVED_TABLES {
        let ranges = merge_ranges(properties.get(property).cloned().unwrap_or_default());
        write_range_array(&mut file, table, &ranges)?;
        writeln!(file)?;
    }
    Ok(())
}

fn write_scalar_list(file: &mut fs::File, scalars: &[u32]) -> Result<()> {
    write!(file, "&[")?;
    for (idx, scalar) in scalars.iter().enumerate() {
        if idx > 0 {
            write!(file, ", ")?;
        }
        write!(file, "0x{scalar:04X}")?;
    }
    write!(file, "]")?;
    Ok(())
}

fn write_normalization_tables(out_dir: &Path, records: &BTreeMap<u32, CharRecord>) -> Result<()> {
    let mut file = fs::File::create(out_dir.join("normalization.rs"))?;
    header(&mut file)?;

    writeln!(
        file,
        "pub static COMBINING_CLASS_RANGES: &[(u32, u32, u8)] = &["
    )?;
    let mut run: Option<(u32, u32, u8)> = None;
    for (&scalar, record) in records {
        if record.combining_class == 0 {
            continue;
        }
        match &mut run {
            Some((_, end, class)) if *class == record.combining_class && *end + 1 == scalar => {
                *end = scalar;
            }
            _ => {
                if let Some((start, end, class)) = run.take() {
                    writeln!(file, "    (0x{start:04X}, 0x{end:04X}, {class}),")?;
                }
                run = Some((scalar, scalar, record.combining_class));
            }
        }
    }
    if let Some((start, end, class)) = run {
        writeln!(file, "    (0x{start:04X}, 0x{end:04X}, {class}),")?;
    }
    writeln!(file, "];")?;
    writeln!(file)?;

    writeln!(file, "pub static DECOMPOSITIONS: &[(u32, bool, &[u32])] = &[")?;
    for (&scalar, record) in records {
        if record.decomposition.is_empty() {
            continue;
        }
        write!(file, "    (0x{scalar:04X}, {}, ", record.compat)?;
        write_scalar_list(&mut file, &record.decomposition)?;
        writeln!(file, "),")?;
    }
    writeln!(file, "];")?;
    Ok(())
}

fn write_composition_table(
    out_dir: &Path,
    records: &BTreeMap<u32, CharRecord>,
    comp_exclusions: &str,
    derived_norm: &str,
) -> Result<()> {
    let mut excluded: HashSet<u32> = HashSet::new();
    for line in comp_exclusions.lines() {
        if let Some((start, end)) = parse_range(line) {
            excluded.extend(start..=end);
        }
    }
    let derived = parse_property_file(derived_norm);
    for &(start, end) in derived
        .get("Full_Composition_Exclusion")
        .map_or(&[][..], Vec::as_slice)
    {
        excluded.extend(start..=end);
    }

    let mut triples: Vec<(u32, u32, u32)> = Vec::new();
    for (&scalar, record) in records {
        if record.compat || record.decomposition.len() != 2 || record.combining_class != 0 {
            continue;
        }
        if excluded.contains(&scalar) {
            continue;
        }
        let first = record.decomposition[0];
        if records.get(&first).is_some_and(|r| r.combining_class != 0) {
            continue;
        }
        triples.push((first, record.decomposition[1], scalar));
    }
    triples.sort_unstable();

    let mut file = fs::File::create(out_dir.join("composition.rs"))?;
    header(&mut file)?;
    writeln!(
        file,
        "pub static CANONICAL_COMPOSITIONS: &[(u32, u32, u32)] = &["
    )?;
    for (first, second, composite) in triples {
        writeln!(
            file,
            "    (0x{first:04X}, 0x{second:04X}, 0x{composite:04X}),"
        )?;
    }
    writeln!(file, "];")?;
    Ok(())
}

fn context_variant(condition: &str) -> Option<&'static str> {
    match condition {
        "Final_Sigma" => Some("FinalSigma"),
        "Not_Final_Sigma" => Some("NotFinalSigma"),
        "After_Soft_Dotted" => Some("AfterSoftDotted"),
        "More_Above" => Some("MoreAbove"),
        "Before_Dot" => Some("BeforeDot"),
        "Not_Before_Dot" => Some("NotBeforeDot"),
        "After_I" => Some("AfterI"),
        _ => None,
    }
}

struct SpecialCasingEntry {
    scalar: u32,
    language: Option<String>,
    context: Option<&'static str>,
    lower: Vec<u32>,
    title: Vec<u32>,
    upper: Vec<u32>,
}

fn parse_special_casing(text: &str) -> Vec<SpecialCasingEntry> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or("");
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        if fields.len() < 4 {
            continue;
        }
        let Some(scalar) = parse_scalar(fields[0]) else {
            continue;
        };
        let parse_seq = |field: &str| -> Vec<u32> {
            field.split_whitespace().filter_map(parse_scalar).collect()
        };
        let mut language = None;
        let mut context = None;
        if let Some(conditions) = fields.get(4) {
            for condition in conditions.split_whitespace() {
                match context_variant(condition) {
                    Some(variant) => context = Some(variant),
                    None => language = Some(condition.to_string()),
                }
            }
        }
        entries.push(SpecialCasingEntry {
            scalar,
            language,
            context,
            lower: parse_seq(fields[1]),
            title: parse_seq(fields[2]),
            upper: parse_seq(fields[3]),
        });
    }
    entries
}

fn write_case_tables(
    out_dir: &Path,
    records: &BTreeMap<u32, CharRecord>,
    special_casing: &str,
    case_folding: &str,
) -> Result<()> {
    let mut file = fs::File::create(out_dir.join("case.rs"))?;
    header(&mut file)?;

    writeln!(
        file,
        "pub static SIMPLE_CASE_MAPPINGS: &[(u32, u32, u32, u32)] = &["
    )?;
    for (&scalar, record) in records {
        let upper = record.upper.unwrap_or(scalar);
        let lower = record.lower.unwrap_or(scalar);
        let title = record.title.or(record.upper).unwrap_or(scalar);
        if upper != scalar || lower != scalar || title != scalar {
            writeln!(
                file,
                "    (0x{scalar:04X}, 0x{upper:04X}, 0x{lower:04X}, 0x{title:04X}),"
            )?;
        }
    }
    writeln!(file, "];")?;
    writeln!(file)?;

    let entries = parse_special_casing(special_casing);

    writeln!(
        file,
        "pub static DEFAULT_SPECIAL_CASE_MAPPINGS: &[(u32, &[u32], &[u32], &[u32])] = &["
    )?;
    let mut unconditional: Vec<&SpecialCasingEntry> = entries
        .iter()
        .filter(|entry| entry.language.is_none() && entry.context.is_none())
        .collect();
    unconditional.sort_by_key(|entry| entry.scalar);
    for entry in unconditional {
        write!(file, "    (0x{:04X}, ", entry.scalar)?;
        write_scalar_list(&mut file, &entry.lower)?;
        write!(file, ", ")?;
        write_scalar_list(&mut file, &entry.title)?;
        write!(file, ", ")?;
        write_scalar_list(&mut file, &entry.upper)?;
        writeln!(file, "),")?;
    }
    writeln!(file, "];")?;
    writeln!(file)?;

    writeln!(
        file,
        "pub static SPECIAL_CASE_MAPPINGS: &[SpecialCaseMapping] = &["
    )?;
    let mut conditional: Vec<(usize, &SpecialCasingEntry)> = entries
        .iter()
        .filter(|entry| entry.language.is_some() || entry.context.is_some())
        .enumerate()
        .collect();
    // Stable by scalar, keeping SpecialCasing.txt declaration order within
    // a scalar so first-match resolution follows the data file.
    conditional.sort_by_key(|&(order, entry)| (entry.scalar, order));
    for (_, entry) in conditional {
        writeln!(file, "    SpecialCaseMapping {{")?;
        writeln!(file, "        scalar: 0x{:04X},", entry.scalar)?;
        match &entry.language {
            Some(language) => writeln!(file, "        language: Some(\"{language}\"),")?,
            None => writeln!(file, "        language: None,")?,
        }
        match entry.context {
            Some(context) => writeln!(file, "        context: Some(CasingContext::{context}),")?,
            None => writeln!(file, "        context: None,")?,
        }
        write!(file, "        lower: ")?;
        write_scalar_list(&mut file, &entry.lower)?;
        writeln!(file, ",")?;
        write!(file, "        title: ")?;
        write_scalar_list(&mut file, &entry.title)?;
        writeln!(file, ",")?;
        write!(file, "        upper: ")?;
        write_scalar_list(&mut file, &entry.upper)?;
        writeln!(file, ",")?;
        writeln!(file, "    }},")?;
    }
    writeln!(file, "];")?;
    writeln!(file)?;

    #[derive(Default)]
    struct Folding {
        common: Option<u32>,
        full: Option<Vec<u32>>,
        simple: Option<u32>,
        turkic: Option<Vec<u32>>,
    }
    let mut foldings: BTreeMap<u32, Folding> = BTreeMap::new();
    for line in case_folding.lines() {
        let line = line.split('#').next().unwrap_or("");
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        if fields.len() < 3 {
            continue;
        }
        let Some(scalar) = parse_scalar(fields[0]) else {
            continue;
        };
        let mapping: Vec<u32> = fields[2].split_whitespace().filter_map(parse_scalar).collect();
        let entry = foldings.entry(scalar).or_default();
        match fields[1] {
            "C" => entry.common = mapping.first().copied(),
            "F" => entry.full = Some(mapping),
            "S" => entry.simple = mapping.first().copied(),
            "T" => entry.turkic = Some(mapping),
            _ => {}
        }
    }

    writeln!(file, "pub static CASE_FOLDINGS: &[CaseFolding] = &[")?;
    for (scalar, folding) in &foldings {
        write!(file, "    CaseFolding {{ scalar: 0x{scalar:04X}, common: ")?;
        match folding.common {
            Some(value) => write!(file, "Some(0x{value:04X})")?,
            None => write!(file, "None")?,
        }
        write!(file, ", full: ")?;
        match &folding.full {
            Some(mapping) => {
                write!(file, "Some(")?;
                write_scalar_list(&mut file, mapping)?;
                write!(file, ")")?;
            }
            None => write!(file, "None")?,
        }
        write!(file, ", simple: ")?;
        match folding.simple {
            Some(value) => write!(file, "Some(0x{value:04X})")?,
            None => write!(file, "None")?,
        }
        write!(file, ", turkic: ")?;
        match &folding.turkic {
            Some(mapping) => {
                write!(file, "Some(")?;
                write_scalar_list(&mut file, mapping)?;
                write!(file, ")")?;
            }
            None => write!(file, "None")?,
        }
        writeln!(file, " }},")?;
    }
    writeln!(file, "];")?;
    Ok(())
}

/// Property value names in the UCD use underscores; the enums drop them.
fn variant_name(value: &str) -> String {
    value.split('_').collect()
}

fn write_break_table(
    out_dir: &Path,
    file_name: &str,
    table: &str,
    range_type: &str,
    enum_name: &str,
    data: &str,
) -> Result<()> {
    let mut ranges: Vec<(u32, u32, String)> = Vec::new();
    for line in data.lines() {
        let Some((range_text, rest)) = line.split_once(';') else {
            continue;
        };
        let property = rest.split('#').next().unwrap_or("").trim();
        if property.is_empty() {
            continue;
        }
        if let Some((start, end)) = parse_range(range_text) {
            ranges.push((start, end, variant_name(property)));
        }
    }
    ranges.sort_unstable();

    // Merge adjacent ranges with the same property.
    let mut merged: Vec<(u32, u32, String)> = Vec::with_capacity(ranges.len());
    for (start, end, property) in ranges {
        match merged.last_mut() {
            Some(last) if last.2 == property && start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end, property)),
        }
    }

    let mut file = fs::File::create(out_dir.join(file_name))?;
    header(&mut file)?;
    writeln!(file, "pub static {table}: &[{range_type}] = &[")?;
    for (start, end, property) in merged {
        writeln!(
            file,
            "    {range_type} {{ start: 0x{start:04X}, end: 0x{end:04X}, property: {enum_name}::{property} }},"
        )?;
    }
    writeln!(file, "];")?;
    Ok(())
}

fn write_emoji_table(out_dir: &Path, emoji_data: &str) -> Result<()> {
    let properties = parse_property_file(emoji_data);
    let ranges = merge_ranges(
        properties
            .get("Extended_Pictographic")
            .cloned()
            .unwrap_or_default(),
    );
    let mut file = fs::File::create(out_dir.join("emoji.rs"))?;
    header(&mut file)?;
    write_range_array(&mut file, "EXTENDED_PICTOGRAPHIC_RANGES", &ranges)?;
    Ok(())
}

fn write_script_tables(
    out_dir: &Path,
    scripts: &str,
    script_extensions: &str,
    property_aliases: &str,
) -> Result<()> {
    // Short script codes (sc=Latn style) map to long names via
    // PropertyValueAliases.txt.
    let mut short_to_long: HashMap<String, String> = HashMap::new();
    for line in property_aliases.lines() {
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        if fields.len() >= 3 && fields[0] == "sc" {
            short_to_long.insert(fields[1].to_string(), variant_name(fields[2]));
        }
    }

    let mut ranges: Vec<(u32, u32, String)> = Vec::new();
    for line in scripts.lines() {
        let Some((range_text, rest)) = line.split_once(';') else {
            continue;
        };
        let script = rest.split('#').next().unwrap_or("").trim();
        if script.is_empty() {
            continue;
        }
        if let Some((start, end)) = parse_range(range_text) {
            ranges.push((start, end, variant_name(script)));
        }
    }
    ranges.sort_unstable();

    let mut file = fs::File::create(out_dir.join("script.rs"))?;
    header(&mut file)?;
    writeln!(file, "pub static SCRIPT_RANGES: &[ScriptRange] = &[")?;
    for (start, end, script) in &ranges {
        writeln!(
            file,
            "    ScriptRange {{ start: 0x{start:04X}, end: 0x{end:04X}, script: Script::{script} }},"
        )?;
    }
    writeln!(file, "];")?;
    writeln!(file)?;

    let mut extension_ranges: Vec<(u32, u32, Vec<String>)> = Vec::new();
    for line in script_extensions.lines() {
        let line = line.split('#').next().unwrap_or("");
        let Some((range_text, rest)) = line.split_once(';') else {
            continue;
        };
        let mut scripts: Vec<String> = rest
            .split_whitespace()
            .filter_map(|code| short_to_long.get(code).cloned())
            .collect();
        if scripts.is_empty() {
            continue;
        }
        scripts.sort();
        if let Some((start, end)) = parse_range(range_text) {
            extension_ranges.push((start, end, scripts));
        }
    }
    extension_ranges.sort();

    writeln!(
        file,
        "pub static SCRIPT_EXTENSION_RANGES: &[(u32, u32, &[Script])] = &["
    )?;
    for (start, end, scripts) in extension_ranges {
        write!(file, "    (0x{start:04X}, 0x{end:04X}, &[")?;
        for (idx, script) in scripts.iter().enumerate() {
            if idx > 0 {
                write!(file, ", ")?;
            }
            write!(file, "Script::{script}")?;
        }
        writeln!(file, "]),")?;
    }
    writeln!(file, "];")?;
    Ok(())
}

fn write_block_table(out_dir: &Path, blocks: &str) -> Result<()> {
    let mut file = fs::File::create(out_dir.join("block.rs"))?;
    header(&mut file)?;
    writeln!(file, "pub static BLOCK_RANGES: &[BlockRange] = &[")?;
    for line in blocks.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((range_text, name)) = line.split_once(';') else {
            continue;
        };
        let Some((start, end)) = parse_range(range_text) else {
            continue;
        };
        let variant: String = name
            .trim()
            .split(|ch: char| !ch.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars.as_str().chars()).collect(),
                    None => String::new(),
                }
            })
            .collect();
        writeln!(
            file,
            "    BlockRange {{ start: 0x{start:04X}, end: 0x{end:04X}, block: Block::{variant} }},"
        )?;
    }
    writeln!(file, "];")?;
    Ok(())
}
