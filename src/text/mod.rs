pub mod formatter;
pub mod parser;


pub use formatter::*;
pub use parser::*;
