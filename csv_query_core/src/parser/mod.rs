pub mod command;
pub mod csv_text;
pub mod filter;
pub mod selection;

pub use command::{CompareOp, FilterSet, Predicate};
pub use csv_text::{check_quotes, parse, read_records};
pub use filter::compile;
pub use selection::split_selection;
