// Analog accelerometer driver module
//
// Three ADC channels, one per axis. The driver keeps the latest
// bias-corrected sample and derives magnitude, pitch and roll from it on
// demand, caching each result until the next sample.

mod analog;
mod cache;
mod config;
mod error;

pub use self::analog::{AnalogAccelerometer, Derived, Reading, LINE_CAPACITY};
pub use self::config::{CachePolicy, PitchDomain, ReaderConfig, DEFAULT_MIDPOINT, DEFAULT_SCALE};
pub use self::error::{Error, Result};
