/// Text output interface

/// Line-oriented text output, typically a serial console
pub trait LineSink {
    /// Error returned when the line could not be written
    type Error: core::fmt::Debug;

    /// Write `line` followed by a line terminator
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

impl<T: LineSink + ?Sized> LineSink for &mut T {
    type Error = T::Error;

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        T::write_line(self, line)
    }
}
