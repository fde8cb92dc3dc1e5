use numscan_core::error::NumscanError;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Install the process-wide logger. The core library only emits records.
///
/// Records always go to stderr; with `log_file` they are appended there too.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<(), NumscanError> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(level);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(Tee {
            first: io::stderr(),
            second: file,
        })));
    }

    builder.init();
    Ok(())
}

/// Writer that duplicates everything into two sinks.
struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}
