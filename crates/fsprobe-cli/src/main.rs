//! # fsprobe
//!
//! Touches, writes and reads back `test.txt` in the working directory, prints
//! its absolute path, then reads two integers from one line of standard input
//! and prints their sum twice.
//!
//! Takes no arguments. Any failure ends the run with a non-zero exit status
//! and an error report on stderr; the sum is never printed after a failure.

use std::io::{self, Write};

use anyhow::{Context, Result};
use fsprobe_config::log_probe_info;
use fsprobe_config::logging::init_logging;

mod error;
mod probe;
mod sum;

use probe::{run_file_steps, ProbeFile};

fn main() -> Result<()> {
    let config = fsprobe_config::config().clone();
    init_logging(config.log.level);

    let file = ProbeFile::in_working_dir(&config.probe.file_name)?;
    run_file_steps(&file, &config.probe).context("file probe failed")?;
    log_probe_info!(
        "File probe passed",
        path = tracing::field::display(file.path().display())
    );

    let mut out = io::stdout().lock();
    writeln!(out, "{}", file.path().display())?;
    out.flush()?;

    let operands = sum::read_operands(io::stdin().lock()).context("failed to read operands")?;
    let total = operands.sum().context("failed to add operands")?;
    sum::write_sum_twice(&mut out, total)?;

    Ok(())
}
