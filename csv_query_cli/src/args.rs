//! CLI argument definitions using clap
//!
//! - csvq data.csv -c col1,col3 -f 'col1>l1c1'   # query a file
//! - cat data.csv | csvq -c col1 -f 'age>=18'     # query stdin
//! - csvq --demo                                  # run the bundled sample

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "csvq")]
#[command(about = "Filter rows and project columns of CSV data")]
#[command(version)]
pub struct Cli {
    /// CSV file to read (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Comma-separated columns to output, in order (all columns when empty)
    #[arg(short = 'c', long = "columns", default_value = "")]
    pub columns: String,

    /// Row filter `<column><op><value>`, op one of >=|<=|!=|>|<|=. Repeat to AND filters
    #[arg(short = 'f', long = "filter")]
    pub filters: Vec<String>,

    /// Run the bundled sample query and exit
    #[arg(long, conflicts_with = "file")]
    pub demo: bool,

    /// CSV file for the file half of `--demo` (defaults to the bundled data.csv)
    #[arg(long, requires = "demo")]
    pub demo_file: Option<PathBuf>,
}

impl Cli {
    /// Filters in the newline-separated form the engine expects
    pub fn filter_definitions(&self) -> String {
        self.filters.join("\n")
    }
}
