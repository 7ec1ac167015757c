// Culture numeric conventions: separators, number templates and number parsing

pub mod locale;
pub mod number_format;

pub use locale::{Culture, NumberCulture};
pub use number_format::{format_number, parse_number, NumberError, NumberTemplate};
