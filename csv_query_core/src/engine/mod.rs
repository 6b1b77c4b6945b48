pub mod filter_project;
pub mod format;
pub mod query;
pub mod resolve;

pub use filter_project::{filter_rows, passes, project};
pub use format::format_select;
pub use query::{Projection, load_table, select};
pub use resolve::resolve;
