#![cfg_attr(not(test), no_std)]

pub mod accel;

pub use accel::AnalogAccelerometer;
