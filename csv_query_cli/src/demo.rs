use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv_query_core::{process_csv, process_csv_file};

const SAMPLE_CSV: &str = "col1,col2,col3,col4,col5,col6,col7\n\
l1c1,l1c2,l1c3,l1c4,l1c5,l1c6,l1c7\n\
l1c1,l1c2,l1c3,l1c4,l1c5,l1c6,l1c7\n\
l2c1,l2c2,l2c3,l2c4,l2c5,l2c6,l2c7\n\
l3c1,l3c2,l3c3,l3c4,l3c5,l3c6,l3c7\n";
const SAMPLE_COLUMNS: &str = "col1,col3,col4,col7";
const SAMPLE_FILTERS: &str = "col1>l1c1\ncol3>l1c3";

/// Same rows as `SAMPLE_CSV`, shipped next to this crate's manifest
pub fn bundled_file() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data.csv")
}

/// Runs the sample query in memory, then over `file`.
pub fn run(file: &Path) -> Result<()> {
    println!("processCsv output:");
    print!("{}", process_csv(SAMPLE_CSV, SAMPLE_COLUMNS, SAMPLE_FILTERS)?);
    println!();

    println!("processCsvFile output:");
    let out = process_csv_file(file, SAMPLE_COLUMNS, SAMPLE_FILTERS)
        .with_context(|| format!("Demo query over {} failed", file.display()))?;
    print!("{out}");
    Ok(())
}
