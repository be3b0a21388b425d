use crate::storage::Record;
use std::io::{self, Write};

pub fn write_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Por busqueda: {}", count)
}

/// Print `name - surname` for every record, in order.
///
/// Thin stdout wrapper over [`write_records`], which carries the tests.
pub fn print_all(records: &[Record]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_records(&mut out, records) {
        tracing::warn!("failed to print records: {}", e);
    }
}
