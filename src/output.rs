//! CSV emission for the CLI frontend.
//!
//! Writes the finished trace as a `t_s,volts` header followed by one
//! `<time>,<voltage>` row per sample, using default float formatting.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{CapsimError, Result};
use crate::trace::Trace;

/// Destination path for the trace CSV.
pub const LOG_PATH: &str = "./log.csv";

/// Write the trace as CSV to any writer.
pub fn write_csv<W: Write>(trace: &Trace, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "t_s,volts")?;
    for sample in trace.samples() {
        writeln!(writer, "{},{}", sample.time_s, sample.voltage_v)?;
    }
    Ok(())
}

/// Write the trace as CSV to a file at `path`.
pub fn write_csv_file(trace: &Trace, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let map_err = |e| CapsimError::trace_write(path.display().to_string(), e);

    let file = File::create(path).map_err(map_err)?;
    let mut writer = BufWriter::new(file);
    write_csv(trace, &mut writer).map_err(map_err)?;
    writer.flush().map_err(map_err)?;

    Ok(())
}
