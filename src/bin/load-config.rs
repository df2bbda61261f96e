//! load-config: decode a JSON configuration file and print it.

use anyhow::Result;

fn main() -> Result<()> {
    loadkit::cli::load_config::main()
}
