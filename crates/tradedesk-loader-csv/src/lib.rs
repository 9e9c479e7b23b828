mod error;
mod loader;
mod parse;

pub use error::CsvError;
pub use loader::CsvLoader;
pub use parse::{parse_assets, parse_trades};
