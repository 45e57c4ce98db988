//! Read-only character property substrate.
//!
//! Every lookup is total over the scalar range: values not present in a
//! table fall back to that property's default (`Cn`, `Other`, ccc 0, and so
//! on). Tables are sorted range arrays generated from the UCD and searched
//! with `partition_point`.

mod block;
mod category;
mod derived;
mod emoji;
mod flags;
mod script;

pub use block::{block, Block};
pub use category::{
    general_category, is_base_character, is_cased_letter, is_graphic_character, is_letter,
    is_mark, is_number, is_other, is_punctuation, is_separator, is_symbol, GeneralCategory,
};
pub use derived::*;
pub use emoji::is_extended_pictographic;
pub use flags::*;
pub use script::{is_script, script, script_extensions, Script};
