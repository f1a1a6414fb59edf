use hal::{AnalogInput, Channel};
use thiserror::Error;

use crate::util::tilt_to_gravity;

/// Full scale of the simulated 10-bit converter
pub const ADC_MAX: u16 = 1023;

/// Board attitude in the accelerometer's convention (degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub roll: f64,
    pub pitch: f64,
}

impl Tilt {
    /// Z axis pointing up
    pub const LEVEL: Tilt = Tilt {
        roll: 0.0,
        pitch: 90.0,
    };
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    #[error("Channel {0} is not wired to the accelerometer")]
    Unwired(u8),

    #[error("Channel {0} read before being configured as an input")]
    NotConfigured(u8),
}

/// ADC with an analog accelerometer wired to three of its channels
pub struct SimulatedAdc {
    /// X, Y, Z channels the sensor is wired to
    channels: [Channel; 3],
    /// Counts per g
    scale: i32,
    /// Counts at 0 g
    midpoint: i32,
    /// Zero-g error of each axis in counts
    offset: [i32; 3],
    tilt: Tilt,
    /// Pins configured as inputs
    configured: Vec<u16>,
    reads: u64,
}

impl SimulatedAdc {
    pub fn new(channels: [Channel; 3], scale: i32, midpoint: i32) -> Self {
        Self {
            channels,
            scale,
            midpoint,
            offset: [0; 3],
            tilt: Tilt::LEVEL,
            configured: Vec::new(),
            reads: 0,
        }
    }

    /// Add a fixed zero-g error per axis, as a badly trimmed part would have
    pub fn with_offset(mut self, offset: [i32; 3]) -> Self {
        self.offset = offset;
        self
    }

    pub fn set_tilt(&mut self, tilt: Tilt) {
        self.tilt = tilt;
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Counts the sensor outputs on each axis at the current tilt
    pub fn counts(&self) -> [u16; 3] {
        let (x, y, z) = tilt_to_gravity(self.tilt.roll, self.tilt.pitch);
        let mut counts = [0; 3];
        for (axis, g) in [x, y, z].into_iter().enumerate() {
            let value = self.midpoint + self.offset[axis] + (g * f64::from(self.scale)).round() as i32;
            counts[axis] = value.clamp(0, i32::from(ADC_MAX)) as u16;
        }
        counts
    }
}

impl AnalogInput for SimulatedAdc {
    type Error = SimError;

    fn configure_input(&mut self, channel: Channel) {
        self.configured.push(channel.pin());
    }

    fn read(&mut self, channel: Channel) -> Result<u16, SimError> {
        if !self.configured.contains(&channel.pin()) {
            return Err(SimError::NotConfigured(channel.index()));
        }
        let axis = self
            .channels
            .iter()
            .position(|c| *c == channel)
            .ok_or(SimError::Unwired(channel.index()))?;
        self.reads += 1;
        Ok(self.counts()[axis])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANNELS: [Channel; 3] = [Channel(0), Channel(1), Channel(2)];

    fn configured_adc() -> SimulatedAdc {
        let mut adc = SimulatedAdc::new(CHANNELS, 100, 512);
        for channel in CHANNELS {
            adc.configure_input(channel);
        }
        adc
    }

    #[test]
    fn test_level_counts() {
        let mut adc = configured_adc();
        assert_eq!(adc.read(Channel(0)), Ok(512));
        assert_eq!(adc.read(Channel(1)), Ok(512));
        assert_eq!(adc.read(Channel(2)), Ok(612), "Z should read one g when level");
        assert_eq!(adc.reads(), 3);
    }

    #[test]
    fn test_offset_and_tilt() {
        let mut adc = configured_adc().with_offset([5, -3, 2]);
        adc.set_tilt(Tilt { roll: 90.0, pitch: 90.0 });
        assert_eq!(adc.counts(), [617, 509, 514]);
    }

    #[test]
    fn test_counts_clamp_to_adc_range() {
        let adc = SimulatedAdc::new(CHANNELS, 1000, 512);
        assert_eq!(adc.counts()[2], ADC_MAX);
    }

    #[test]
    fn test_read_errors() {
        let mut adc = SimulatedAdc::new(CHANNELS, 100, 512);
        assert_eq!(adc.read(Channel(0)), Err(SimError::NotConfigured(0)));
        adc.configure_input(Channel(5));
        assert_eq!(adc.read(Channel(5)), Err(SimError::Unwired(5)));
        assert_eq!(adc.reads(), 0);
    }
}
