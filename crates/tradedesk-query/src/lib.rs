mod filter;
mod path;
mod resolve;
mod search;
mod sort;

pub use filter::FieldFilter;
pub use path::FieldPath;
pub use resolve::{resolve, resolve_decoded};
pub use search::Search;
pub use sort::{Sort, SortDirection, sort_contracts};
