/// Analog input interface

/// Board pin number of the first analog input.
///
/// Analog channel `n` is wired to digital pin `ANALOG_BASE + n` on the
/// ATmega328-style boards this layout comes from.
pub const ANALOG_BASE: u8 = 14;

/// Analog input channel index (A0 = 0, A1 = 1, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Channel(pub u8);

impl Channel {
    /// Channel index as passed to the ADC
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Board pin number of this channel, used when configuring pin direction.
    /// Widened so large channel numbers do not wrap.
    pub const fn pin(self) -> u16 {
        self.0 as u16 + ANALOG_BASE as u16
    }
}

impl From<u8> for Channel {
    fn from(index: u8) -> Self {
        Channel(index)
    }
}

/// ADC interface
pub trait AnalogInput {
    /// Error returned by a failed conversion
    type Error: core::fmt::Debug;

    /// Configure the pin behind `channel` as an input.
    ///
    /// Channel numbers are not validated.
    fn configure_input(&mut self, channel: Channel);

    /// Perform one conversion on `channel` and return the raw counts
    /// (0..=1023 for a 10-bit converter)
    fn read(&mut self, channel: Channel) -> Result<u16, Self::Error>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    type Error = T::Error;

    fn configure_input(&mut self, channel: Channel) {
        T::configure_input(self, channel)
    }

    fn read(&mut self, channel: Channel) -> Result<u16, Self::Error> {
        T::read(self, channel)
    }
}
