use crate::culture::NumberCulture;
use crate::size::{ByteSize, ByteSizeError, Result, Unit};
use log::debug;

/// Parse a size such as `"1020KB"`, `" 100 KiB "` or `"1.500,5 MB"`.
///
/// The number is read with the culture's decimal and group separators. The
/// suffix "b" (bits) and "B" (bytes) are case sensitive; prefixed units such
/// as "KB" or "MiB" are not.
pub fn parse(input: &str, culture: &dyn NumberCulture) -> Result<ByteSize> {
    parse_inner(input, culture).inspect_err(|e| {
        debug!("Failed to parse byte size '{}': {}", input, e);
    })
}

/// Parse, collapsing every failure into `None`
pub fn try_parse(input: &str, culture: &dyn NumberCulture) -> Option<ByteSize> {
    parse(input, culture).ok()
}

fn parse_inner(input: &str, culture: &dyn NumberCulture) -> Result<ByteSize> {
    if input.trim().is_empty() {
        return Err(ByteSizeError::EmptyInput);
    }

    let text = input.trim_start();
    let decimal_separator = culture.decimal_separator();
    let group_separator = culture.group_separator();

    let split_at = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == decimal_separator || *c == group_separator))
        .map(|(index, _)| index)
        .ok_or_else(|| ByteSizeError::MissingMagnitude(text.to_string()))?;

    let number_part = text[..split_at].trim();
    let size_part = text[split_at..].trim();

    let number = culture
        .parse_number(number_part, true)
        .map_err(|_| ByteSizeError::InvalidNumber(text.to_string()))?;

    match Unit::from_symbol(size_part) {
        Some(Unit::Bit) => {
            if number.fract() != 0.0 {
                return Err(ByteSizeError::FractionalBits(text.to_string()));
            }
            Ok(ByteSize::from_bits(number as i64))
        }
        Some(unit) => Ok(ByteSize::from_unit(unit, number)),
        None => Err(ByteSizeError::UnknownMagnitude(size_part.to_string())),
    }
}
