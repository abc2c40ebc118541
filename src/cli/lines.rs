use anyhow::Result;
use std::io::{self, Write};

use crate::cli::LinesArgs;
use crate::core::{count_lines, LineCountConfigBuilder};

/// Counts lines of matching files below `args.root` and prints the
/// per-file counts followed by the total.
pub fn cmd_lines(args: LinesArgs) -> Result<()> {
    let config = LineCountConfigBuilder::new()
        .root(args.root)
        .extension(&args.ext)
        .excludes(args.excludes)
        .build();

    let report = count_lines(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.render(&mut out)?;
    out.flush()?;

    Ok(())
}
