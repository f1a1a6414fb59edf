#![no_std]
extern crate nalgebra;

mod analog;
mod serial;
mod types;

pub use analog::*;
pub use serial::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_pin_offset() {
        assert_eq!(Channel(0).pin(), 14, "A0 should map to pin 14");
        assert_eq!(Channel(2).pin(), 16, "A2 should map to pin 16");
        assert_eq!(Channel::from(5).index(), 5);
        assert_eq!(Channel(250).pin(), 264, "Pin numbers past 255 should not wrap");
        assert_eq!(Channel(u8::MAX).pin(), 269);
    }

    #[test]
    fn test_axis_from_index() {
        assert_eq!(Axis::from_index(0), Some(Axis::X));
        assert_eq!(Axis::from_index(2), Some(Axis::Z));
        assert_eq!(Axis::from_index(3), None, "index 3 is past the last axis");
        assert_eq!(Axis::from_index(-1), None);
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }
}
