//! Quiz module - the structured document produced by the parser

mod types;
pub mod source;

pub use types::*;
pub use source::to_source;
