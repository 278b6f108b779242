// src/common/error.rs

use super::response::ReadingParseError;

#[derive(Debug, thiserror::Error)]
pub enum EzoError<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic Io error
{
    /// Underlying I2C transport error from the HAL implementation.
    #[error("I2C transport error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// The bus lock could not be acquired within the retry budget.
    #[error("bus could not be locked")]
    BusUnavailable,

    /// The shared bus session is already borrowed by another device.
    #[error("bus session already in use")]
    SessionBusy,

    /// Provided byte is not a usable 7-bit I2C address.
    #[error("invalid I2C address: {0:#04x}")]
    InvalidAddress(u8),

    /// Calibration point name is not one of `low`, `mid`, `high`.
    #[error("unrecognized calibration point")]
    UnknownCalibrationPoint,

    /// The reading field of a response could not be decoded as a number.
    #[error("reading parse error: {0}")]
    Parse(ReadingParseError),
}

// No manual Display impl needed - thiserror handles it.

// Allow mapping from underlying HAL error if From is implemented
impl<E: core::fmt::Debug> From<E> for EzoError<E> {
    fn from(e: E) -> Self {
        EzoError::Io(e)
    }
}

// Note: For the Io(E) variant's #[error("...")] message to work correctly even
// in no_std, the underlying error type `E` must implement `core::fmt::Debug`.
