//! Static knowledge of the bit/byte magnitude units.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const BITS_IN_BYTE: i64 = 8;

pub const BYTES_IN_KILO_BYTE: i64 = 1_000;
pub const BYTES_IN_MEGA_BYTE: i64 = 1_000_000;
pub const BYTES_IN_GIGA_BYTE: i64 = 1_000_000_000;
pub const BYTES_IN_TERA_BYTE: i64 = 1_000_000_000_000;
pub const BYTES_IN_PETA_BYTE: i64 = 1_000_000_000_000_000;

pub const BYTES_IN_KIBI_BYTE: i64 = 1_024;
pub const BYTES_IN_MEBI_BYTE: i64 = 1_048_576;
pub const BYTES_IN_GIBI_BYTE: i64 = 1_073_741_824;
pub const BYTES_IN_TEBI_BYTE: i64 = 1_099_511_627_776;
pub const BYTES_IN_PEBI_BYTE: i64 = 1_125_899_906_842_624;

pub const BIT_SYMBOL: &str = "b";
pub const BYTE_SYMBOL: &str = "B";

pub const KILO_BYTE_SYMBOL: &str = "KB";
pub const MEGA_BYTE_SYMBOL: &str = "MB";
pub const GIGA_BYTE_SYMBOL: &str = "GB";
pub const TERA_BYTE_SYMBOL: &str = "TB";
pub const PETA_BYTE_SYMBOL: &str = "PB";

pub const KIBI_BYTE_SYMBOL: &str = "KiB";
pub const MEBI_BYTE_SYMBOL: &str = "MiB";
pub const GIBI_BYTE_SYMBOL: &str = "GiB";
pub const TEBI_BYTE_SYMBOL: &str = "TiB";
pub const PEBI_BYTE_SYMBOL: &str = "PiB";

/// Which family of prefixed units a value is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// KB, MB, GB, TB, PB (powers of 1000)
    #[default]
    Decimal,
    /// KiB, MiB, GiB, TiB, PiB (powers of 1024)
    Binary,
}

/// Magnitude prefix shared by both unit systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Bit,
    Byte,
    KiloByte,
    MegaByte,
    GigaByte,
    TeraByte,
    PetaByte,
    KibiByte,
    MebiByte,
    GibiByte,
    TebiByte,
    PebiByte,
}

const DECIMAL_UNITS: [Unit; 7] = [
    Unit::PetaByte,
    Unit::TeraByte,
    Unit::GigaByte,
    Unit::MegaByte,
    Unit::KiloByte,
    Unit::Byte,
    Unit::Bit,
];

const BINARY_UNITS: [Unit; 7] = [
    Unit::PebiByte,
    Unit::TebiByte,
    Unit::GibiByte,
    Unit::MebiByte,
    Unit::KibiByte,
    Unit::Byte,
    Unit::Bit,
];

impl UnitSystem {
    /// Units of this system ordered largest first, ending with byte and bit
    pub const fn units(self) -> &'static [Unit] {
        match self {
            UnitSystem::Decimal => &DECIMAL_UNITS,
            UnitSystem::Binary => &BINARY_UNITS,
        }
    }

    /// Only the prefixed units of this system, largest first
    pub fn prefixed_units(self) -> &'static [Unit] {
        &self.units()[..5]
    }

    pub const fn unit(self, prefix: Prefix) -> Unit {
        match (self, prefix) {
            (UnitSystem::Decimal, Prefix::Kilo) => Unit::KiloByte,
            (UnitSystem::Decimal, Prefix::Mega) => Unit::MegaByte,
            (UnitSystem::Decimal, Prefix::Giga) => Unit::GigaByte,
            (UnitSystem::Decimal, Prefix::Tera) => Unit::TeraByte,
            (UnitSystem::Decimal, Prefix::Peta) => Unit::PetaByte,
            (UnitSystem::Binary, Prefix::Kilo) => Unit::KibiByte,
            (UnitSystem::Binary, Prefix::Mega) => Unit::MebiByte,
            (UnitSystem::Binary, Prefix::Giga) => Unit::GibiByte,
            (UnitSystem::Binary, Prefix::Tera) => Unit::TebiByte,
            (UnitSystem::Binary, Prefix::Peta) => Unit::PebiByte,
        }
    }
}

impl Unit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Bit => BIT_SYMBOL,
            Unit::Byte => BYTE_SYMBOL,
            Unit::KiloByte => KILO_BYTE_SYMBOL,
            Unit::MegaByte => MEGA_BYTE_SYMBOL,
            Unit::GigaByte => GIGA_BYTE_SYMBOL,
            Unit::TeraByte => TERA_BYTE_SYMBOL,
            Unit::PetaByte => PETA_BYTE_SYMBOL,
            Unit::KibiByte => KIBI_BYTE_SYMBOL,
            Unit::MebiByte => MEBI_BYTE_SYMBOL,
            Unit::GibiByte => GIBI_BYTE_SYMBOL,
            Unit::TebiByte => TEBI_BYTE_SYMBOL,
            Unit::PebiByte => PEBI_BYTE_SYMBOL,
        }
    }

    /// Whole bytes in one of this unit. Zero for the bit, which is smaller than a byte.
    pub const fn whole_bytes(self) -> i64 {
        match self {
            Unit::Bit => 0,
            Unit::Byte => 1,
            Unit::KiloByte => BYTES_IN_KILO_BYTE,
            Unit::MegaByte => BYTES_IN_MEGA_BYTE,
            Unit::GigaByte => BYTES_IN_GIGA_BYTE,
            Unit::TeraByte => BYTES_IN_TERA_BYTE,
            Unit::PetaByte => BYTES_IN_PETA_BYTE,
            Unit::KibiByte => BYTES_IN_KIBI_BYTE,
            Unit::MebiByte => BYTES_IN_MEBI_BYTE,
            Unit::GibiByte => BYTES_IN_GIBI_BYTE,
            Unit::TebiByte => BYTES_IN_TEBI_BYTE,
            Unit::PebiByte => BYTES_IN_PEBI_BYTE,
        }
    }

    /// Multiplier of this unit expressed in bits
    pub const fn bits_per_unit(self) -> i64 {
        match self {
            Unit::Bit => 1,
            other => other.whole_bytes() * BITS_IN_BYTE,
        }
    }

    pub fn bytes_per_unit(self) -> f64 {
        match self {
            Unit::Bit => 1.0 / BITS_IN_BYTE as f64,
            other => other.whole_bytes() as f64,
        }
    }

    /// The system a prefixed unit belongs to; `None` for the shared bit and byte
    pub const fn system(self) -> Option<UnitSystem> {
        match self {
            Unit::Bit | Unit::Byte => None,
            Unit::KiloByte | Unit::MegaByte | Unit::GigaByte | Unit::TeraByte | Unit::PetaByte => {
                Some(UnitSystem::Decimal)
            }
            _ => Some(UnitSystem::Binary),
        }
    }

    /// Resolve a unit suffix as written after a number.
    ///
    /// "b" and "B" are matched exactly since they only differ by case; the
    /// prefixed symbols are matched ignoring case.
    pub fn from_symbol(symbol: &str) -> Option<Unit> {
        match symbol {
            BIT_SYMBOL => return Some(Unit::Bit),
            BYTE_SYMBOL => return Some(Unit::Byte),
            _ => {}
        }

        BINARY_UNITS[..5]
            .iter()
            .chain(DECIMAL_UNITS[..5].iter())
            .copied()
            .find(|unit| unit.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
