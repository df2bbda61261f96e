//! load-table: read a CSV file and print every row.

use anyhow::Result;

fn main() -> Result<()> {
    loadkit::cli::load_table::main()
}
