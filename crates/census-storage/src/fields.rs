//! Decoder for the per-source `Fields` XML blob.
//!
//! ```xml
//! <Root><Fields>
//!   <Field><Name>Footnote</Name><Value>…</Value></Field>
//!   …
//! </Fields></Root>
//! ```
//!
//! Values are kept exactly as stored. Entity-escaped markup such as
//! `&lt;i&gt;` stays escaped.

use quick_xml::events::Event;
use quick_xml::Reader;

/// The three citation texts held in a source's field blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationFields {
    pub footnote: String,
    pub short_footnote: String,
    pub bibliography: String,
}

impl CitationFields {
    fn assign(&mut self, name: &str, value: String) {
        match name {
            "Footnote" => self.footnote = value,
            "ShortFootnote" => self.short_footnote = value,
            "Bibliography" => self.bibliography = value,
            _ => {}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Inside {
    Other,
    Name,
    Value,
}

/// Decode a field blob. Unknown field names are ignored; missing ones stay
/// empty.
pub fn decode_fields(xml: &str) -> Result<CitationFields, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut fields = CitationFields::default();
    let mut inside = Inside::Other;
    let mut name = String::new();
    let mut value = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"Field" => {
                    name.clear();
                    value.clear();
                }
                b"Name" => inside = Inside::Name,
                b"Value" => inside = Inside::Value,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"Name" | b"Value" => inside = Inside::Other,
                b"Field" => fields.assign(name.trim(), std::mem::take(&mut value)),
                _ => {}
            },
            Event::Text(text) => match inside {
                Inside::Name => name.push_str(&String::from_utf8_lossy(&text)),
                Inside::Value => value.push_str(&String::from_utf8_lossy(&text)),
                Inside::Other => {}
            },
            Event::CData(data) => {
                if inside == Inside::Value {
                    value.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(fields)
}
