//! Component extraction: named, ordered patterns run over one citation text.
//!
//! Extraction never fails. A pattern that does not match leaves its field unset.

pub mod components;
pub mod patterns;

pub use components::{
    extract_from_bibliography, extract_from_footnote, extract_from_name,
    extract_from_short_footnote, name_enumeration_district, ExtractedComponents, NameEdForm,
};
