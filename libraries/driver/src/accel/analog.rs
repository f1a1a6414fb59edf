use core::fmt::{self, Write as _};

use hal::{AnalogInput, Axis, Channel, LineSink, Vector3d};
use heapless::String;
use log::{debug, trace, warn};
use num_traits::Float;

use super::cache::Cached;
use super::config::{PitchDomain, ReaderConfig};
use super::error::{Error, Result};

/// Capacity of one diagnostic line in bytes
pub const LINE_CAPACITY: usize = 128;

/// Quantities derived from the current sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derived {
    Magnitude,
    Pitch,
    Roll,
}

/// Snapshot of the current sample and everything derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Bias-corrected counts, X/Y/Z
    pub sample: [i32; 3],
    /// Magnitude in milli-g
    pub magnitude: i32,
    /// Pitch in whole degrees
    pub pitch: i32,
    /// Roll in whole degrees
    pub roll: i32,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={}\ty={}\tz={}\tmg={}\tpitch={}\troll={}",
            self.sample[0], self.sample[1], self.sample[2], self.magnitude, self.pitch, self.roll
        )
    }
}

/// 3-axis analog accelerometer (ADXL335 style) read through three ADC channels
///
/// Each `update()` takes one sample per axis and subtracts the per-axis bias.
/// Magnitude, pitch and roll are computed on first access and cached until
/// the next `update()`.
pub struct AnalogAccelerometer<A: AnalogInput> {
    /// ADC the axes are wired to
    adc: A,
    /// X, Y, Z channels
    channels: [Channel; 3],
    /// Raw counts that read as zero acceleration, per axis
    bias: [i32; 3],
    /// Latest bias-corrected counts
    sample: [i32; 3],
    /// ADC counts per 1 g
    scale: i32,
    pitch_domain: PitchDomain,

    magnitude: Cached,
    pitch: Cached,
    roll: Cached,
}

impl<A: AnalogInput> AnalogAccelerometer<A> {
    /// Create a driver with the default configuration
    /// (10-bit ADC, bias 512, 100 counts per g).
    ///
    /// Configures the three channels as inputs. Channel numbers are not
    /// checked.
    pub fn new(adc: A, x: Channel, y: Channel, z: Channel) -> Self {
        Self::build(adc, [x, y, z], ReaderConfig::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(adc: A, channels: [Channel; 3], config: ReaderConfig) -> Result<Self, A::Error> {
        if config.scale <= 0 {
            return Err(Error::InvalidScale(config.scale));
        }
        Ok(Self::build(adc, channels, config))
    }

    fn build(mut adc: A, channels: [Channel; 3], config: ReaderConfig) -> Self {
        for channel in channels {
            adc.configure_input(channel);
        }
        debug!(
            "accelerometer on channels {:?}, scale {}, midpoint {}",
            channels, config.scale, config.midpoint
        );

        Self {
            adc,
            channels,
            bias: [config.midpoint; 3],
            sample: [0; 3],
            scale: config.scale,
            pitch_domain: config.pitch_domain,
            magnitude: Cached::new(config.cache_policy),
            pitch: Cached::new(config.cache_policy),
            roll: Cached::new(config.cache_policy),
        }
    }

    fn read_raw(&mut self) -> Result<[u16; 3], A::Error> {
        let mut raw = [0u16; 3];
        for (value, channel) in raw.iter_mut().zip(self.channels) {
            *value = self.adc.read(channel).map_err(Error::Hal)?;
        }
        Ok(raw)
    }

    fn invalidate(&mut self) {
        self.magnitude.clear();
        self.pitch.clear();
        self.roll.clear();
    }

    /// Take a new sample on all three axes and drop cached results.
    ///
    /// On an ADC error the previous sample and cache are kept.
    pub fn update(&mut self) -> Result<(), A::Error> {
        let raw = self.read_raw()?;
        for axis in Axis::ALL {
            let i = axis.index();
            self.sample[i] = i32::from(raw[i]).wrapping_sub(self.bias[i]);
        }
        self.invalidate();
        trace!("accel sample {:?}", self.sample);
        Ok(())
    }

    /// Zero the sensor at its current attitude.
    ///
    /// The sensor must be at rest with Z pointing against gravity: the
    /// current readings become the bias, less one g on Z.
    pub fn calibrate(&mut self) -> Result<(), A::Error> {
        let raw = self.read_raw()?;
        self.bias = raw.map(i32::from);
        self.bias[Axis::Z.index()] -= self.scale;
        debug!("accel calibrated, bias {:?}", self.bias);
        self.update()
    }

    /// Polling hook for the main loop
    pub fn tick(&mut self) -> Result<(), A::Error> {
        self.update()
    }

    /// Bias-corrected sample for axis `index` (0 = X, 1 = Y, 2 = Z).
    /// Any other index reads as 0.
    pub fn axis(&self, index: i32) -> i32 {
        Axis::from_index(index).map_or(0, |axis| self.sample(axis))
    }

    pub fn sample(&self, axis: Axis) -> i32 {
        self.sample[axis.index()]
    }

    pub fn samples(&self) -> [i32; 3] {
        self.sample
    }

    /// Current sample in g
    pub fn acceleration(&self) -> Vector3d {
        let scale = self.scale as f32;
        Vector3d::new(
            self.sample[0] as f32 / scale,
            self.sample[1] as f32 / scale,
            self.sample[2] as f32 / scale,
        )
    }

    /// Magnitude of the acceleration in milli-g (1000 = 1 g)
    pub fn magnitude(&mut self) -> i32 {
        let (sample, scale) = (self.sample, self.scale);
        self.magnitude.get_or_insert_with(|| milligee(&sample, scale))
    }

    /// Rotation about Y in whole degrees, `atan2(x, z)`
    pub fn roll(&mut self) -> i32 {
        let (x, z) = (self.sample[Axis::X.index()], self.sample[Axis::Z.index()]);
        self.roll.get_or_insert_with(|| roll_degrees(x, z))
    }

    /// Angle between Y and the horizontal plane's normal in whole degrees,
    /// `acos(y / scale)`.
    ///
    /// With `PitchDomain::Unchecked` a Y sample larger than one g in either
    /// direction gives NaN from `acos`, which truncates to 0.
    pub fn pitch(&mut self) -> i32 {
        let (y, scale, domain) = (self.sample[Axis::Y.index()], self.scale, self.pitch_domain);
        self.pitch.get_or_insert_with(|| {
            if y.unsigned_abs() > scale.unsigned_abs() {
                warn!("pitch out of domain: y {} scale {}", y, scale);
            }
            pitch_degrees(y, scale, domain)
        })
    }

    /// Like `pitch()`, but reports a Y sample outside [-scale, scale]
    pub fn try_pitch(&mut self) -> Result<i32, A::Error> {
        let y = self.sample[Axis::Y.index()];
        if y.unsigned_abs() > self.scale.unsigned_abs() {
            return Err(Error::PitchOutOfDomain {
                sample: y,
                scale: self.scale,
            });
        }
        Ok(self.pitch())
    }

    pub fn is_cached(&self, derived: Derived) -> bool {
        match derived {
            Derived::Magnitude => self.magnitude.is_set(),
            Derived::Pitch => self.pitch.is_set(),
            Derived::Roll => self.roll.is_set(),
        }
    }

    /// Sample plus all derived values, computing any that are not cached
    pub fn reading(&mut self) -> Reading {
        Reading {
            sample: self.sample,
            magnitude: self.magnitude(),
            pitch: self.pitch(),
            roll: self.roll(),
        }
    }

    /// Write the current reading as one line of text
    pub fn dump<S: LineSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        let reading = self.reading();
        let mut line: String<LINE_CAPACITY> = String::new();
        write!(line, "{}", reading).map_err(|_| Error::LineOverflow(LINE_CAPACITY))?;
        sink.write_line(&line).map_err(Error::Hal)
    }

    pub fn bias(&self) -> [i32; 3] {
        self.bias
    }

    /// Replace the bias, e.g. with a previously saved calibration.
    /// Takes effect on the next `update()`.
    pub fn set_bias(&mut self, bias: [i32; 3]) {
        self.bias = bias;
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn channels(&self) -> [Channel; 3] {
        self.channels
    }

    pub fn adc(&self) -> &A {
        &self.adc
    }

    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// Give back the ADC
    pub fn release(self) -> A {
        self.adc
    }
}

fn milligee(sample: &[i32; 3], scale: i32) -> i32 {
    let squared: i128 = sample.iter().map(|&a| i128::from(a) * i128::from(a)).sum();
    let scale = i128::from(scale);
    i32::try_from(squared * 1000 / (scale * scale)).unwrap_or(i32::MAX)
}

fn roll_degrees(x: i32, z: i32) -> i32 {
    Float::to_degrees(Float::atan2(x as f32, z as f32)) as i32
}

fn pitch_degrees(y: i32, scale: i32, domain: PitchDomain) -> i32 {
    let ratio = y as f32 / scale as f32;
    let ratio = match domain {
        PitchDomain::Unchecked => ratio,
        PitchDomain::Clamp => ratio.clamp(-1.0, 1.0),
    };
    Float::to_degrees(Float::acos(ratio)) as i32
}
