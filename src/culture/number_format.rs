// Custom numeric format templates ("0.##", "#,##0.0 KB", ...) and
// culture aware number parsing

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// The numeric section of a template: digit placeholders with an optional
    /// group separator in the integer part and a single decimal point.
    /// Examples: "0.##", "#,##0", ".00", "##.####"
    static ref NUMBER_SECTION: Regex = Regex::new(r"[0#][0#,]*(?:\.[0#]*)?|\.[0#]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Empty number")]
    Empty,
    #[error("Invalid number: {0}")]
    Invalid(String),
}

/// A parsed numeric format template
#[derive(Debug, Clone, PartialEq)]
pub struct NumberTemplate {
    prefix: String,
    suffix: String,
    min_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    grouping: bool,
    has_digits: bool,
}

impl NumberTemplate {
    pub fn parse(template: &str) -> Self {
        let (literal_before, section, literal_after) = split_template(template);

        let (integer, fraction) = match section.find('.') {
            Some(dot) => (&section[..dot], &section[dot + 1..]),
            None => (section, ""),
        };

        Self {
            prefix: unescape_literal(literal_before),
            suffix: unescape_literal(literal_after),
            min_integer_digits: integer.chars().filter(|c| *c == '0').count(),
            min_fraction_digits: fraction.chars().filter(|c| *c == '0').count(),
            max_fraction_digits: fraction.len(),
            grouping: integer.contains(','),
            has_digits: !section.is_empty(),
        }
    }

    /// Render `value` with the given separators
    pub fn render(&self, value: f64, decimal_separator: char, group_separator: char) -> String {
        if !self.has_digits {
            return format!("{}{}", self.prefix, self.suffix);
        }
        if !value.is_finite() {
            return format!("{}{}{}", self.prefix, non_finite(value), self.suffix);
        }

        let rounded = round_half_away(value.abs(), self.max_fraction_digits);
        let digits = format!("{:.*}", self.max_fraction_digits, rounded);
        let (integer, fraction) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits.as_str(), ""),
        };

        let integer = integer.trim_start_matches('0');
        let integer = if integer.len() < self.min_integer_digits {
            format!("{}{}", "0".repeat(self.min_integer_digits - integer.len()), integer)
        } else {
            integer.to_string()
        };
        let integer = if self.grouping {
            group_digits(&integer, group_separator)
        } else {
            integer
        };

        let mut fraction = fraction.to_string();
        while fraction.len() > self.min_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }

        let is_zero = integer.chars().all(|c| !c.is_ascii_digit() || c == '0')
            && fraction.chars().all(|c| c == '0');

        let mut out = String::with_capacity(self.prefix.len() + integer.len() + fraction.len() + 8);
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&self.prefix);
        out.push_str(&integer);
        if !fraction.is_empty() {
            out.push(decimal_separator);
            out.push_str(&fraction);
        }
        out.push_str(&self.suffix);
        out
    }
}

/// Format `value` with a custom numeric template
pub fn format_number(
    value: f64,
    template: &str,
    decimal_separator: char,
    group_separator: char,
) -> String {
    NumberTemplate::parse(template).render(value, decimal_separator, group_separator)
}

/// Parse a floating point number written with the given separators.
///
/// Accepts surrounding whitespace, a leading sign, a single decimal separator
/// and an exponent. Group separators are only accepted in the integer part and
/// only when `allow_thousands` is set.
pub fn parse_number(
    text: &str,
    decimal_separator: char,
    group_separator: char,
    allow_thousands: bool,
) -> Result<f64, NumberError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NumberError::Empty);
    }

    let invalid = || NumberError::Invalid(text.to_string());

    let mut normalized = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();

    if let Some(sign) = chars.next_if(|c| *c == '-' || *c == '+') {
        normalized.push(sign);
    }

    let mut seen_digit = false;
    let mut seen_decimal = false;
    let mut seen_exponent = false;

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            seen_digit = true;
            normalized.push(c);
        } else if c == decimal_separator && !seen_decimal && !seen_exponent {
            seen_decimal = true;
            normalized.push('.');
        } else if c == group_separator && allow_thousands && !seen_decimal && !seen_exponent {
            // Group separators cannot lead the number
            if !seen_digit {
                return Err(invalid());
            }
        } else if (c == 'e' || c == 'E') && seen_digit && !seen_exponent {
            seen_exponent = true;
            normalized.push('e');
            if let Some(sign) = chars.next_if(|c| *c == '-' || *c == '+') {
                normalized.push(sign);
            }
            if !chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
        } else {
            return Err(invalid());
        }
    }

    if !seen_digit {
        return Err(invalid());
    }

    normalized.parse::<f64>().map_err(|_| invalid())
}

fn split_template(template: &str) -> (&str, &str, &str) {
    // Placeholders inside quoted literals are not numeric
    let mut search_from = 0;
    while let Some(found) = NUMBER_SECTION.find_at(template, search_from) {
        if !inside_literal(&template[..found.start()]) {
            return (
                &template[..found.start()],
                found.as_str(),
                &template[found.end()..],
            );
        }
        search_from = found.start() + 1;
    }
    (template, "", "")
}

/// Whether the end of `before` is inside a quoted or escaped section
fn inside_literal(before: &str) -> bool {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in before.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (None, '\\') => escaped = true,
            (None, '\'') | (None, '"') => quote = Some(c),
            (Some(q), c) if q == c => quote = None,
            _ => {}
        }
    }
    quote.is_some() || escaped
}

fn unescape_literal(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut quote: Option<char> = None;
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        match (quote, c) {
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            (None, '\'') | (None, '"') => quote = Some(c),
            (Some(q), c) if q == c => quote = None,
            _ => out.push(c),
        }
    }
    out
}

fn group_digits(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

fn round_half_away(value: f64, fraction_digits: usize) -> f64 {
    let scale = 10f64.powi(fraction_digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "∞"
    } else {
        "-∞"
    }
}
