//! Book folder/file naming templates
//!
//! Templates use percent-style named placeholders, e.g. `%(Title)s - %(Author)s`.
//! Only text conversions (`s`, `r`, `a`) are accepted since every field value
//! is text. Flags, width and precision may appear between the key and the
//! conversion.

pub mod parser;

/// Why a template was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("incomplete format")]
    IncompleteFormat,

    #[error("incomplete format key")]
    IncompleteKey,

    #[error("Invalid field '{0}'")]
    UnknownField(String),

    #[error("* wants int")]
    StarWidth,

    #[error("width too big")]
    WidthTooBig,

    #[error("precision too big")]
    PrecisionTooBig,

    #[error("%{0} format: a real number is required, not str")]
    RealNumberRequired(char),

    #[error("%{0} format: an integer is required, not str")]
    IntegerRequired(char),

    #[error("%c requires an int or a unicode character, not a string of length 0")]
    CharRequired,

    #[error("unsupported format character '{ch}' ({code}) at index {index}", code = hex_code(.ch))]
    UnsupportedCharacter { ch: char, index: usize },

    #[error("unnamed placeholder at index {0}, use %(Field)s")]
    UnnamedPlaceholder(usize),
}

fn hex_code(ch: &char) -> String {
    format!("0x{:x}", u32::from(*ch))
}

/// A template checked against a field set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    fields: Vec<String>,
}

impl FormatTemplate {
    /// Parse `template`, allowing only placeholders named in `fields`
    pub fn parse(template: &str, fields: &[&str]) -> Result<Self, FormatError> {
        let referenced = parser::parse_template(template, fields)?;
        Ok(Self {
            source: template.to_string(),
            fields: referenced,
        })
    }

    /// Field names referenced by the template, in order of appearance
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The template text as given
    pub fn into_string(self) -> String {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FIELDS: [&str; 6] = ["Title", "Author", "Series", "ReadingOrder", "Edition", "ID"];

    #[test]
    fn test_template_keeps_source() {
        let template =
            FormatTemplate::parse("%(Series)s %(ReadingOrder)s - %(Title)s", &FIELDS).unwrap();
        assert_eq!(template.fields(), ["Series", "ReadingOrder", "Title"]);
        assert_eq!(template.into_string(), "%(Series)s %(ReadingOrder)s - %(Title)s");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormatError::UnknownField("Nope".into()).to_string(), "Invalid field 'Nope'");
        assert_eq!(
            FormatError::UnsupportedCharacter { ch: 'q', index: 8 }.to_string(),
            "unsupported format character 'q' (0x71) at index 8"
        );
        assert_eq!(
            FormatError::UnsupportedCharacter { ch: '%', index: 8 }.to_string(),
            "unsupported format character '%' (0x25) at index 8"
        );
        assert_eq!(
            FormatError::RealNumberRequired('d').to_string(),
            "%d format: a real number is required, not str"
        );
    }

    fn template_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
        let piece = prop_oneof![
            "[a-zA-Z0-9 ._/-]{0,8}".prop_map(|text| (text, None)),
            proptest::sample::select(FIELDS.to_vec())
                .prop_map(|field| (format!("%({})s", field), Some(field.to_string()))),
            Just(("%%".to_string(), None)),
        ];
        proptest::collection::vec(piece, 0..8).prop_map(|pieces| {
            let template = pieces.iter().map(|(text, _)| text.as_str()).collect();
            let fields = pieces.into_iter().filter_map(|(_, field)| field).collect();
            (template, fields)
        })
    }

    proptest! {
        #[test]
        fn prop_fields_follow_template_order((template, expected) in template_strategy()) {
            let parsed = FormatTemplate::parse(&template, &FIELDS).unwrap();
            prop_assert_eq!(parsed.fields(), expected.as_slice());
        }
    }
}
