//! EZO command definitions.
//!
//! Every EZO command is a fixed ASCII string with a documented response
//! size and settle time, taken from the Atlas Scientific EZO datasheets.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use super::{error::EzoError, timing};

/// Represents a command understood by an EZO circuit.
///
/// The `Display` implementation produces the exact wire form (no line
/// terminator; EZO commands are sent bare over I2C).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Single reading (`R`). 7-byte response after a 0.9 s settle.
    Read,

    /// Enter low-power sleep (`Sleep`). Fire-and-forget, no response.
    Sleep,

    /// Voltage-at-probe status report (`Status`). 17-byte response.
    Status,

    /// Device information (`i`). 13-byte response.
    Identify,

    /// Stored device name (`Name,?`). 24-byte response.
    NameQuery,

    /// Single-point pH calibration (`Cal,<point>,<ref>`). 2-byte response.
    Calibrate(CalPoint),
}

/// A pH calibration point together with its reference solution value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalPoint {
    /// Low point, pH 4.00 reference.
    #[default]
    Low,
    /// Mid point, pH 7.00 reference.
    Mid,
    /// High point, pH 10.00 reference.
    High,
}

impl Command {
    /// The exact ASCII wire form of this command.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Command::Read => "R",
            Command::Sleep => "Sleep",
            Command::Status => "Status",
            Command::Identify => "i",
            Command::NameQuery => "Name,?",
            Command::Calibrate(CalPoint::Low) => "Cal,low,4.00",
            Command::Calibrate(CalPoint::Mid) => "Cal,mid,7.00",
            Command::Calibrate(CalPoint::High) => "Cal,high,10.00",
        }
    }

    /// The wire form as bytes, ready for an I2C write.
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    /// Number of bytes the device answers with, or `None` for
    /// fire-and-forget commands.
    pub const fn response_len(&self) -> Option<usize> {
        match self {
            Command::Read => Some(7),
            Command::Sleep => None,
            Command::Status => Some(17),
            Command::Identify => Some(13),
            Command::NameQuery => Some(24),
            Command::Calibrate(_) => Some(2),
        }
    }

    /// Time the device needs to process the command before its response
    /// buffer is valid.
    pub const fn settle(&self) -> Duration {
        match self {
            Command::Read => timing::READ_SETTLE,
            Command::Sleep => Duration::ZERO,
            Command::Status => timing::STATUS_SETTLE,
            Command::Identify => timing::IDENTIFY_SETTLE,
            Command::NameQuery => timing::NAME_QUERY_SETTLE,
            Command::Calibrate(_) => timing::CALIBRATION_SETTLE,
        }
    }

    /// Whether a read transaction follows the write.
    pub const fn expects_response(&self) -> bool {
        self.response_len().is_some()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalPoint {
    type Err = EzoError<()>;

    /// Parses the lowercase point names accepted by the calibrate call.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(CalPoint::Low),
            "mid" => Ok(CalPoint::Mid),
            "high" => Ok(CalPoint::High),
            _ => Err(EzoError::UnknownCalibrationPoint),
        }
    }
}
