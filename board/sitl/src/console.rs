use std::convert::Infallible;

use hal::LineSink;
use log::info;

/// Serial console stand-in: every line goes to the log at info level
#[derive(Debug, Default)]
pub struct LogSink {
    lines: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }
}

impl LineSink for LogSink {
    type Error = Infallible;

    fn write_line(&mut self, line: &str) -> Result<(), Infallible> {
        self.lines += 1;
        info!("{}", line);
        Ok(())
    }
}
