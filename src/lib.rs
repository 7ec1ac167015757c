pub mod config;
pub mod culture;
pub mod size;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use culture::{Culture, NumberCulture};
pub use size::{ByteSize, ByteSizeError, Prefix, Unit, UnitSystem};
