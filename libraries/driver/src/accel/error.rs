use thiserror::Error;

/// Errors from the analog accelerometer driver
///
/// `E` is the error type of the hardware collaborator (ADC or line sink).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    #[error("Hardware access failed: {0:?}")]
    Hal(E),

    #[error("Invalid scale: {0} must be positive")]
    InvalidScale(i32),

    #[error("Pitch undefined: Y sample {sample} exceeds scale {scale}")]
    PitchOutOfDomain { sample: i32, scale: i32 },

    #[error("Diagnostic line exceeded {0} bytes")]
    LineOverflow(usize),
}

/// Result type for accelerometer operations
pub type Result<T, E> = core::result::Result<T, Error<E>>;
