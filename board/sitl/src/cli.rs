use clap::Parser;
use driver::accel::{CachePolicy, PitchDomain, ReaderConfig};

/// Simulated analog accelerometer on a swaying board
#[derive(Parser, Debug, Clone)]
#[command(name = "sitl", version, about)]
pub struct Args {
    /// Polling rate of the main loop in Hz
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub rate_hz: u32,

    /// Number of samples to take before stopping (0 runs until Ctrl-C)
    #[arg(long, default_value_t = 500)]
    pub cycles: u64,

    /// Print a diagnostic line every N samples
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u64).range(1..))]
    pub dump_every: u64,

    /// ADC counts per g
    #[arg(long, default_value_t = 100)]
    pub scale: i32,

    /// ADC counts at 0 g
    #[arg(long, default_value_t = 512)]
    pub midpoint: i32,

    /// Peak sway of the board in degrees
    #[arg(long, default_value_t = 30.0)]
    pub sway_deg: f64,

    /// Sway frequency in Hz
    #[arg(long, default_value_t = 0.25)]
    pub sway_hz: f64,

    /// Zero-g error of the simulated part in counts, X,Y,Z
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [6, -4, 3])]
    pub offset: Vec<i32>,

    /// Keep the default midpoint bias instead of calibrating at startup
    #[arg(long)]
    pub skip_calibration: bool,

    /// Recompute zero results on every access, like the Arduino library
    #[arg(long)]
    pub arduino_compatible: bool,

    /// Clamp pitch to [0, 180] degrees when Y exceeds one g
    #[arg(long)]
    pub clamp_pitch: bool,
}

impl Args {
    pub fn reader_config(&self) -> ReaderConfig {
        let cache_policy = if self.arduino_compatible {
            CachePolicy::ZeroSentinel
        } else {
            CachePolicy::Tagged
        };
        let pitch_domain = if self.clamp_pitch {
            PitchDomain::Clamp
        } else {
            PitchDomain::Unchecked
        };
        ReaderConfig::default()
            .with_scale(self.scale)
            .with_midpoint(self.midpoint)
            .with_cache_policy(cache_policy)
            .with_pitch_domain(pitch_domain)
    }

    pub fn offset(&self) -> [i32; 3] {
        let mut offset = [0; 3];
        for (dst, src) in offset.iter_mut().zip(&self.offset) {
            *dst = *src;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sitl"]);
        assert_eq!(args.rate_hz, 50);
        assert_eq!(args.offset(), [6, -4, 3]);
        assert_eq!(args.reader_config(), ReaderConfig::default());
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::parse_from([
            "sitl",
            "--scale",
            "330",
            "--arduino-compatible",
            "--clamp-pitch",
            "--offset",
            "1,2,3",
        ]);
        let config = args.reader_config();
        assert_eq!(config.scale, 330);
        assert_eq!(config.cache_policy, CachePolicy::ZeroSentinel);
        assert_eq!(config.pitch_domain, PitchDomain::Clamp);
        assert_eq!(args.offset(), [1, 2, 3]);
    }

    #[test]
    fn test_zero_rate_and_cadence_rejected() {
        assert!(Args::try_parse_from(["sitl", "--rate-hz", "0"]).is_err(), "Zero rate should be rejected");
        assert!(
            Args::try_parse_from(["sitl", "--dump-every", "0"]).is_err(),
            "Zero dump cadence should be rejected"
        );
    }
}
