/// Default ADC midpoint of a 10-bit converter, used as the initial bias
pub const DEFAULT_MIDPOINT: i32 = 512;

/// Default ADC counts per 1 g
pub const DEFAULT_SCALE: i32 = 100;

/// How derived values remember that they were already computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Cache every computed value, including zero
    #[default]
    Tagged,
    /// Treat a cached zero as "not computed", so zero results are recomputed
    /// on every call. Matches the Arduino Accelerometer library.
    ZeroSentinel,
}

/// What `pitch()` does when `|sample[Y] / scale| > 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PitchDomain {
    /// Pass the ratio to `acos` unchanged. The NaN result truncates to 0.
    #[default]
    Unchecked,
    /// Clamp the ratio to [-1, 1] first, giving 0 or 180 degrees
    Clamp,
}

/// Configuration for `AnalogAccelerometer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// ADC counts per 1 g. Must be positive.
    pub scale: i32,

    /// Initial bias for every axis, before any calibration
    pub midpoint: i32,

    /// Cache behavior for magnitude, pitch and roll
    pub cache_policy: CachePolicy,

    /// Pitch behavior outside the `acos` domain
    pub pitch_domain: PitchDomain,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            midpoint: DEFAULT_MIDPOINT,
            cache_policy: CachePolicy::Tagged,
            pitch_domain: PitchDomain::Unchecked,
        }
    }
}

impl ReaderConfig {
    pub fn with_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_midpoint(mut self, midpoint: i32) -> Self {
        self.midpoint = midpoint;
        self
    }

    pub fn with_cache_policy(mut self, cache_policy: CachePolicy) -> Self {
        self.cache_policy = cache_policy;
        self
    }

    pub fn with_pitch_domain(mut self, pitch_domain: PitchDomain) -> Self {
        self.pitch_domain = pitch_domain;
        self
    }

    /// Configuration matching the Arduino library this driver replaces
    pub fn arduino_compatible() -> Self {
        Self::default().with_cache_policy(CachePolicy::ZeroSentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::default();
        assert_eq!(config.scale, 100, "Default scale should be 100 counts per g");
        assert_eq!(config.midpoint, 512, "Default midpoint should be 512");
        assert_eq!(config.cache_policy, CachePolicy::Tagged);
        assert_eq!(config.pitch_domain, PitchDomain::Unchecked);
    }

    #[test]
    fn test_builder_setters() {
        let config = ReaderConfig::default()
            .with_scale(330)
            .with_midpoint(2048)
            .with_pitch_domain(PitchDomain::Clamp);
        assert_eq!(config.scale, 330);
        assert_eq!(config.midpoint, 2048);
        assert_eq!(config.pitch_domain, PitchDomain::Clamp);
        assert_eq!(
            ReaderConfig::arduino_compatible().cache_policy,
            CachePolicy::ZeroSentinel
        );
    }
}
