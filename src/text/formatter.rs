use crate::culture::NumberCulture;
use crate::size::{ByteSize, Unit, UnitSystem, BIT_SYMBOL, BYTE_SYMBOL};
use log::trace;

/// Template used when none is given: up to two fractional digits, trailing zeros trimmed
pub const DEFAULT_TEMPLATE: &str = "0.##";

/// Prefixed units in the order a template is searched for them
const TEMPLATE_UNITS: [Unit; 10] = [
    Unit::PebiByte,
    Unit::TebiByte,
    Unit::GibiByte,
    Unit::MebiByte,
    Unit::KibiByte,
    Unit::PetaByte,
    Unit::TeraByte,
    Unit::GigaByte,
    Unit::MegaByte,
    Unit::KiloByte,
];

/// Render `size` as text.
///
/// If the template names a unit (e.g. `"0.0 MiB"`) the value is scaled to that
/// unit and the template is rendered as is, so it must carry the symbol itself.
/// Otherwise the largest unit of `system` in which the value is at least one
/// is chosen and its symbol appended after a space.
pub fn format(
    size: &ByteSize,
    template: &str,
    culture: &dyn NumberCulture,
    system: UnitSystem,
) -> String {
    let template = normalize_template(template);

    if let Some(unit) = unit_in_template(&template) {
        trace!("Formatting {} bits in template unit {}", size.bits(), unit);
        return culture.format_number(size.in_unit(unit), &template);
    }

    let unit = size.largest_whole_number_unit(system);
    trace!("Formatting {} bits in largest whole unit {}", size.bits(), unit);
    format!(
        "{} {}",
        culture.format_number(size.in_unit(unit), &template),
        unit.symbol()
    )
}

/// Render `size` in a fixed `unit`, followed by a space and the unit's symbol.
///
/// Only the number format of `template` is used: a unit symbol in the
/// template is dropped, so `"0.0 GiB"` renders kilobytes as `"1500.0 KB"`.
pub fn format_in_unit(
    size: &ByteSize,
    unit: Unit,
    template: &str,
    culture: &dyn NumberCulture,
) -> String {
    let template = normalize_template(&strip_template_unit(template));
    trace!("Formatting {} bits in requested unit {}", size.bits(), unit);

    format!(
        "{} {}",
        culture.format_number(size.in_unit(unit), &template),
        unit.symbol()
    )
}

/// Give templates without digit placeholders the default number format,
/// so that e.g. `"KiB"` renders like `"0.## KiB"`.
fn normalize_template(template: &str) -> String {
    if template.is_empty() {
        DEFAULT_TEMPLATE.to_string()
    } else if !template.contains('0') && !template.contains('#') {
        format!("{} {}", DEFAULT_TEMPLATE, template)
    } else {
        template.to_string()
    }
}

/// The unit a template asks for, if any.
///
/// Prefixed symbols match ignoring case, binary before decimal. Byte and bit
/// must match case exactly since "B" also appears in every prefixed symbol.
fn unit_in_template(template: &str) -> Option<Unit> {
    let lowered = template.to_lowercase();

    TEMPLATE_UNITS
        .iter()
        .copied()
        .find(|unit| lowered.contains(&unit.symbol().to_lowercase()))
        .or_else(|| template.contains(BYTE_SYMBOL).then_some(Unit::Byte))
        .or_else(|| template.contains(BIT_SYMBOL).then_some(Unit::Bit))
}

/// The template without the unit symbol [`unit_in_template`] finds in it
fn strip_template_unit(template: &str) -> String {
    let Some(unit) = unit_in_template(template) else {
        return template.to_string();
    };

    // Symbols are ASCII, so offsets in the ASCII-lowered copy line up
    let symbol = unit.symbol();
    let start = match unit {
        Unit::Byte | Unit::Bit => template.find(symbol),
        _ => template
            .to_ascii_lowercase()
            .find(&symbol.to_ascii_lowercase()),
    };

    match start {
        Some(start) => {
            let mut stripped = template.to_string();
            stripped.replace_range(start..start + symbol.len(), "");
            stripped.trim().to_string()
        }
        None => template.to_string(),
    }
}
