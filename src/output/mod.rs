//! Output sink for generated commands.
//!
//! Commands go to stdout unless an output file is given; logs stay on
//! stderr so the commands can be piped straight into a router script.

use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Write `lines` to `output`, or to stdout when `output` is None.
pub fn write_lines<S: AsRef<str>>(lines: &[S], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
            write_to(&mut file, lines)?;
            file.flush()?;
            log::info!("Wrote {} line(s) to {}", lines.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_to(&mut handle, lines)?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn write_to<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}
