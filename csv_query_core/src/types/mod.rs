pub mod table;
pub mod value;

pub use table::{Header, Table};

/// A row is a vector of raw field strings, one per header column
pub type Row = Vec<String>;
