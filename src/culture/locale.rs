use crate::culture::number_format::{self, NumberError};
use crate::size::error::{ByteSizeError, Result};
use serde::{Deserialize, Serialize};

/// Numeric conventions of a culture, as needed to read and write sizes.
///
/// Only the separators are required; formatting and parsing default to the
/// template engine in [`number_format`] driven by those separators.
pub trait NumberCulture {
    fn name(&self) -> &str;

    fn decimal_separator(&self) -> char;

    fn group_separator(&self) -> char;

    fn format_number(&self, value: f64, template: &str) -> String {
        number_format::format_number(
            value,
            template,
            self.decimal_separator(),
            self.group_separator(),
        )
    }

    fn parse_number(&self, text: &str, allow_thousands: bool) -> std::result::Result<f64, NumberError> {
        number_format::parse_number(
            text,
            self.decimal_separator(),
            self.group_separator(),
            allow_thousands,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Culture {
    #[serde(default)]
    pub name: String,
    pub decimal_separator: char,
    pub group_separator: char,
}

// name, decimal separator, group separator
const BUILTIN_CULTURES: &[(&str, char, char)] = &[
    ("", '.', ','),
    ("en-US", '.', ','),
    ("en-GB", '.', ','),
    ("ja-JP", '.', ','),
    ("de-DE", ',', '.'),
    ("es-ES", ',', '.'),
    ("it-IT", ',', '.'),
    ("nl-NL", ',', '.'),
    ("pt-BR", ',', '.'),
    ("fr-FR", ',', '\u{202F}'),
    ("ru-RU", ',', '\u{00A0}'),
    ("sv-SE", ',', '\u{00A0}'),
    ("pl-PL", ',', '\u{00A0}'),
    ("de-CH", '.', '\u{2019}'),
];

impl Culture {
    pub fn new(name: impl Into<String>, decimal_separator: char, group_separator: char) -> Self {
        Self {
            name: name.into(),
            decimal_separator,
            group_separator,
        }
    }

    /// Culture independent conventions: '.' for decimals, ',' for groups
    pub fn invariant() -> Self {
        Self::new("", '.', ',')
    }

    /// Look up a built-in culture by locale name (case-insensitive).
    /// "invariant" and the empty string both name the invariant culture.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        if wanted.is_empty() || wanted.eq_ignore_ascii_case("invariant") {
            return Ok(Self::invariant());
        }

        BUILTIN_CULTURES
            .iter()
            .find(|(builtin, _, _)| builtin.eq_ignore_ascii_case(wanted))
            .map(|(builtin, decimal, group)| Self::new(*builtin, *decimal, *group))
            .ok_or_else(|| ByteSizeError::UnknownCulture(name.to_string()))
    }

    /// Names of the built-in cultures, invariant first
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_CULTURES.iter().map(|(name, _, _)| *name)
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

impl NumberCulture for Culture {
    fn name(&self) -> &str {
        &self.name
    }

    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    fn group_separator(&self) -> char {
        self.group_separator
    }
}
