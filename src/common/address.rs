// src/common/address.rs

use super::error::EzoError;
use core::convert::TryFrom;
use core::fmt;

/// A validated 7-bit I2C target address.
///
/// The valid range is the scannable window `0x08..=0x77`; addresses
/// outside it are reserved by the I2C specification (general call,
/// 10-bit addressing, etc.) and are never occupied by an EZO circuit.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EzoAddr(u8);

impl EzoAddr {
    /// Factory-default address of a pH EZO circuit (decimal 99).
    pub const PH_DEFAULT: EzoAddr = EzoAddr(99);

    /// First address probed by a bus scan.
    pub const SCAN_FIRST: u8 = 0x08;
    /// Last address probed by a bus scan.
    pub const SCAN_LAST: u8 = 0x77;

    /// Creates a new `EzoAddr` if the given byte is a usable 7-bit address.
    /// Returns `Result<Self, EzoError<()>>` because validation itself
    /// cannot cause an I/O error.
    pub fn new(raw: u8) -> Result<Self, EzoError<()>> {
        if Self::is_valid_address(raw) {
            Ok(EzoAddr(raw))
        } else {
            Err(EzoError::InvalidAddress(raw))
        }
    }

    /// Creates an address without validation.
    ///
    /// # Safety
    /// The caller must guarantee `raw` lies within `0x08..=0x77`.
    pub const unsafe fn new_unchecked(raw: u8) -> Self {
        EzoAddr(raw)
    }

    #[inline]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_valid_address(raw: u8) -> bool {
        matches!(raw, Self::SCAN_FIRST..=Self::SCAN_LAST)
    }
}

impl TryFrom<u8> for EzoAddr {
    // The error type here is specific: EzoError with no I/O error possibility
    type Error = EzoError<()>;

    /// Attempts to convert a raw byte into an `EzoAddr`.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EzoAddr> for u8 {
    fn from(value: EzoAddr) -> Self {
        value.0
    }
}

impl fmt::Display for EzoAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(EzoAddr::new(0x08).is_ok());
        assert!(EzoAddr::new(50).is_ok());
        assert!(EzoAddr::new(99).is_ok());
        assert!(EzoAddr::new(0x77).is_ok());
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(matches!(EzoAddr::new(0x00), Err(EzoError::InvalidAddress(0x00))));
        assert!(matches!(EzoAddr::new(0x07), Err(EzoError::InvalidAddress(0x07))));
        assert!(matches!(EzoAddr::new(0x78), Err(EzoError::InvalidAddress(0x78))));
        assert!(matches!(EzoAddr::new(0xFF), Err(EzoError::InvalidAddress(0xFF))));
    }

    #[test]
    fn test_ph_default() {
        assert_eq!(EzoAddr::PH_DEFAULT.as_u8(), 99);
        assert!(EzoAddr::is_valid_address(EzoAddr::PH_DEFAULT.as_u8()));
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(EzoAddr::try_from(99).unwrap(), EzoAddr(99));
        assert_eq!(EzoAddr::try_from(0x42).unwrap(), EzoAddr(0x42));
        assert!(matches!(EzoAddr::try_from(0x7F), Err(EzoError::InvalidAddress(0x7F))));
    }

    #[test]
    fn test_into_u8_and_display() {
        let addr = EzoAddr::new(99).unwrap();
        assert_eq!(u8::from(addr), 99);
        assert_eq!(std::format!("{}", addr), "99");
    }
}
