use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write ledger lines to `writer`, one per line, in order
pub fn write_ledger<W, L>(mut writer: W, lines: &[L]) -> io::Result<()>
where
    W: Write,
    L: AsRef<str>,
{
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Create or truncate `path` and write the ledger lines into it
///
/// The file handle is dropped on every return path, including after a
/// failed write.
pub fn export_ledger<L: AsRef<str>>(path: &Path, lines: &[L]) -> io::Result<()> {
    let file = File::create(path)?;
    write_ledger(BufWriter::new(file), lines)
}
