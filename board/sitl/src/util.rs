/// Unit gravity vector in the sensor frame for a board tilted by
/// `roll` and `pitch` degrees.
///
/// Pitch is measured from the Y axis, so a level board (Z up) has a pitch of
/// 90 degrees. Roll turns gravity from Z towards X.
pub fn tilt_to_gravity(roll: f64, pitch: f64) -> (f64, f64, f64) {
    let (sin_r, cos_r) = roll.to_radians().sin_cos();
    let (sin_p, cos_p) = pitch.to_radians().sin_cos();

    (sin_r * sin_p, cos_p, cos_r * sin_p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        let err = (actual.0 - expected.0).abs() + (actual.1 - expected.1).abs() + (actual.2 - expected.2).abs();
        assert!(err < 1e-9, "Expected {:?}, got {:?}", expected, actual);
    }

    #[test]
    fn test_level_board() {
        assert_close(tilt_to_gravity(0.0, 90.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rolled_and_pitched() {
        assert_close(tilt_to_gravity(90.0, 90.0), (1.0, 0.0, 0.0));
        assert_close(tilt_to_gravity(0.0, 0.0), (0.0, 1.0, 0.0));
        let (x, y, z) = tilt_to_gravity(37.0, 61.0);
        assert!((x * x + y * y + z * z - 1.0).abs() < 1e-9, "Gravity should stay unit length");
    }
}
