use crate::culture::{Culture, NumberCulture};
use crate::size::error::{ByteSizeError, Result};
use crate::size::unit::*;
use crate::text;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A quantity of digital storage.
///
/// `bits` is the exact value and the only field used for equality, ordering
/// and hashing. `bytes` always equals `bits / 8` up to the rounding of the
/// constructor used, and is what unit views and arithmetic are computed from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteSize {
    bits: i64,
    bytes: f64,
}

macro_rules! unit_methods {
    ($($unit:ident => $from:ident, $get:ident, $add:ident;)*) => {
        impl ByteSize {
            $(
                pub fn $from(value: f64) -> Self {
                    Self::from_unit(Unit::$unit, value)
                }

                pub fn $get(&self) -> f64 {
                    self.in_unit(Unit::$unit)
                }

                pub fn $add(&self, value: f64) -> Self {
                    self.add(Self::$from(value))
                }
            )*
        }
    };
}

unit_methods! {
    KiloByte => from_kilo_bytes, kilo_bytes, add_kilo_bytes;
    MegaByte => from_mega_bytes, mega_bytes, add_mega_bytes;
    GigaByte => from_giga_bytes, giga_bytes, add_giga_bytes;
    TeraByte => from_tera_bytes, tera_bytes, add_tera_bytes;
    PetaByte => from_peta_bytes, peta_bytes, add_peta_bytes;
    KibiByte => from_kibi_bytes, kibi_bytes, add_kibi_bytes;
    MebiByte => from_mebi_bytes, mebi_bytes, add_mebi_bytes;
    GibiByte => from_gibi_bytes, gibi_bytes, add_gibi_bytes;
    TebiByte => from_tebi_bytes, tebi_bytes, add_tebi_bytes;
    PebiByte => from_pebi_bytes, pebi_bytes, add_pebi_bytes;
}

impl ByteSize {
    pub const ZERO: ByteSize = ByteSize { bits: 0, bytes: 0.0 };
    pub const MIN: ByteSize = ByteSize {
        bits: i64::MIN,
        bytes: i64::MIN as f64 / BITS_IN_BYTE as f64,
    };
    pub const MAX: ByteSize = ByteSize {
        bits: i64::MAX,
        bytes: i64::MAX as f64 / BITS_IN_BYTE as f64,
    };

    /// Exact bit count, no rounding
    pub fn from_bits(bits: i64) -> Self {
        Self {
            bits,
            bytes: bits as f64 / BITS_IN_BYTE as f64,
        }
    }

    /// Bits are indivisible, so the bit count is rounded up to the next whole bit.
    /// Values outside the `i64` bit range saturate.
    pub fn from_bytes(bytes: f64) -> Self {
        Self {
            bits: (bytes * BITS_IN_BYTE as f64).ceil() as i64,
            bytes,
        }
    }

    pub fn from_unit(unit: Unit, value: f64) -> Self {
        match unit {
            // Fractional bits cannot exist; round up like any other byte quantity
            Unit::Bit => Self::from_bytes(value / BITS_IN_BYTE as f64),
            Unit::Byte => Self::from_bytes(value),
            other => Self::from_bytes(value * other.bytes_per_unit()),
        }
    }

    pub fn from_prefixed(system: UnitSystem, prefix: Prefix, value: f64) -> Self {
        Self::from_unit(system.unit(prefix), value)
    }

    pub fn bits(&self) -> i64 {
        self.bits
    }

    pub fn bytes(&self) -> f64 {
        self.bytes
    }

    pub fn in_unit(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Bit => self.bits as f64,
            Unit::Byte => self.bytes,
            other => self.bytes / other.bytes_per_unit(),
        }
    }

    /// The largest unit of `system` in which this size is at least one in
    /// absolute value. Falls back to bits below one byte.
    pub fn largest_whole_number_unit(&self, system: UnitSystem) -> Unit {
        system
            .units()
            .iter()
            .copied()
            .find(|unit| *unit == Unit::Bit || self.in_unit(*unit).abs() >= 1.0)
            .unwrap_or(Unit::Bit)
    }

    pub fn largest_whole_number_value(&self, system: UnitSystem) -> f64 {
        self.in_unit(self.largest_whole_number_unit(system))
    }

    pub fn largest_whole_number_symbol(&self, system: UnitSystem) -> &'static str {
        self.largest_whole_number_unit(system).symbol()
    }

    pub fn add(&self, other: ByteSize) -> Self {
        Self::from_bytes(self.bytes + other.bytes)
    }

    pub fn subtract(&self, other: ByteSize) -> Self {
        Self::from_bytes(self.bytes - other.bytes)
    }

    pub fn negate(&self) -> Self {
        Self::from_bytes(-self.bytes)
    }

    pub fn multiply(&self, other: ByteSize) -> Self {
        Self::from_bytes(self.bytes * other.bytes)
    }

    pub fn divide(&self, other: ByteSize) -> Result<Self> {
        if other.bytes == 0.0 {
            return Err(ByteSizeError::DivideByZero);
        }
        Ok(Self::from_bytes(self.bytes / other.bytes))
    }

    pub fn increment(&self) -> Self {
        Self::from_bytes(self.bytes + 1.0)
    }

    pub fn decrement(&self) -> Self {
        Self::from_bytes(self.bytes - 1.0)
    }

    pub fn add_bits(&self, value: i64) -> Self {
        self.add(Self::from_bits(value))
    }

    pub fn add_bytes(&self, value: f64) -> Self {
        self.add(Self::from_bytes(value))
    }

    /// Total of a sequence of sizes; `None` when the sequence is empty
    pub fn sum<I>(sizes: I) -> Option<Self>
    where
        I: IntoIterator<Item = ByteSize>,
    {
        sizes.into_iter().reduce(|total, size| total.add(size))
    }

    /// Render with a numeric template, e.g. `"0.0 MB"` or `"#.#"`
    pub fn to_string_with(&self, template: &str) -> String {
        self.format(template, &Culture::invariant(), UnitSystem::Decimal)
    }

    pub fn to_string_in(&self, template: &str, culture: &dyn NumberCulture) -> String {
        self.format(template, culture, UnitSystem::Decimal)
    }

    pub fn to_binary_string(&self, culture: &dyn NumberCulture) -> String {
        self.format(text::DEFAULT_TEMPLATE, culture, UnitSystem::Binary)
    }

    pub fn format(&self, template: &str, culture: &dyn NumberCulture, system: UnitSystem) -> String {
        text::format(self, template, culture, system)
    }

    pub fn parse(input: &str) -> Result<Self> {
        text::parse(input, &Culture::invariant())
    }

    pub fn parse_with(input: &str, culture: &dyn NumberCulture) -> Result<Self> {
        text::parse(input, culture)
    }

    /// Like [`ByteSize::parse`] but discards the reason for a failure
    pub fn try_parse(input: &str) -> Option<Self> {
        text::try_parse(input, &Culture::invariant())
    }
}

impl PartialEq for ByteSize {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for ByteSize {}

impl PartialOrd for ByteSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteSize {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits.cmp(&other.bits)
    }
}

impl Hash for ByteSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl Add for ByteSize {
    type Output = ByteSize;

    fn add(self, rhs: ByteSize) -> ByteSize {
        ByteSize::add(&self, rhs)
    }
}

impl AddAssign for ByteSize {
    fn add_assign(&mut self, rhs: ByteSize) {
        *self = ByteSize::add(self, rhs);
    }
}

impl Sub for ByteSize {
    type Output = ByteSize;

    fn sub(self, rhs: ByteSize) -> ByteSize {
        self.subtract(rhs)
    }
}

impl SubAssign for ByteSize {
    fn sub_assign(&mut self, rhs: ByteSize) {
        *self = self.subtract(rhs);
    }
}

impl Neg for ByteSize {
    type Output = ByteSize;

    fn neg(self) -> ByteSize {
        self.negate()
    }
}

impl Mul for ByteSize {
    type Output = ByteSize;

    fn mul(self, rhs: ByteSize) -> ByteSize {
        self.multiply(rhs)
    }
}

impl Mul<f64> for ByteSize {
    type Output = ByteSize;

    fn mul(self, rhs: f64) -> ByteSize {
        ByteSize::from_bytes(self.bytes * rhs)
    }
}

/// An empty iterator sums to [`ByteSize::ZERO`]; use [`ByteSize::sum`] to tell the cases apart.
impl Sum for ByteSize {
    fn sum<I: Iterator<Item = ByteSize>>(iter: I) -> ByteSize {
        iter.fold(ByteSize::ZERO, |total, size| ByteSize::add(&total, size))
    }
}

impl<'a> Sum<&'a ByteSize> for ByteSize {
    fn sum<I: Iterator<Item = &'a ByteSize>>(iter: I) -> ByteSize {
        iter.copied().sum()
    }
}

/// `{}` uses decimal units, `{:#}` binary units. Both use the invariant culture.
impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let system = if f.alternate() {
            UnitSystem::Binary
        } else {
            UnitSystem::Decimal
        };
        let rendered = self.format(text::DEFAULT_TEMPLATE, &Culture::invariant(), system);
        f.pad(&rendered)
    }
}

impl FromStr for ByteSize {
    type Err = ByteSizeError;

    fn from_str(s: &str) -> Result<Self> {
        ByteSize::parse(s)
    }
}
