pub mod byte_size;
pub mod error;
pub mod unit;

#[cfg(test)]
mod tests;

pub use byte_size::ByteSize;
pub use error::{ByteSizeError, Result};
pub use unit::*;
