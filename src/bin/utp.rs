//! List capacitances of unshielded twisted pairs.
//!
//! Takes no arguments. Writes one line per material, gauge and insulation
//! thickness combination to standard output, e.g.
//!
//! ```text
//! utp > capacitances.txt
//! utp | grep 'AWG30' | grep 'PVC(Semi' | sort -k 9
//! ```

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use tracing::Level;

use utp_capacitance::table::TableConfig;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only the table.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let config = TableConfig::default();

    if cfg!(debug_assertions) {
        config
            .check_log_arguments()
            .context("built-in tables produce an undefined logarithm")?;
    }

    let stdout = io::stdout();
    config
        .write_table(BufWriter::new(stdout.lock()))
        .context("failed to write capacitance table")?;

    Ok(())
}
