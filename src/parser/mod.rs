//! Parser module - handles parsing `.quiz` files

mod document;
mod error;
mod lines;
pub mod option_line;

pub use document::{parse, parse_file, parse_with, ParseOptions};
pub use error::FormatError;
