pub mod models;
pub mod processing;
pub mod utils;
pub mod passport_parser;

pub use models::{Field, ParsedRecord};
pub use passport_parser::PassportParser;
