// src/common/hal_traits.rs

use super::address::EzoAddr;
use core::fmt::Debug;

/// Abstraction for delay operations required between write and read.
///
/// Note: This could potentially be replaced by directly requiring
/// `embedded_hal::delay::DelayNs` if embedded-hal v1 is mandated.
pub trait EzoDelay {
    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for an I2C bus master carrying EZO circuits.
///
/// Implementations map onto whatever the platform provides: a bit-banged
/// bus, a HAL peripheral, or a shared-bus proxy. All data operations are
/// blocking; only lock acquisition is non-blocking so the session layer
/// can bound its retry loop.
pub trait EzoI2c {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Attempts to take exclusive ownership of the bus.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` while another owner holds the
    /// bus. Other errors are returned as `Err(nb::Error::Other(Self::Error))`.
    fn try_lock(&mut self) -> nb::Result<(), Self::Error>;

    /// Releases the bus lock. Must only be called while the lock is held.
    fn unlock(&mut self);

    /// Writes `bytes` to the device at `address`.
    ///
    /// Fails if the address does not acknowledge or the transfer aborts.
    fn write(&mut self, address: EzoAddr, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Reads exactly `buffer.len()` bytes from the device at `address`.
    fn read_into(&mut self, address: EzoAddr, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Probes whether a device acknowledges `address`.
    ///
    /// This is the transport primitive behind the bus scan: an address
    /// NACK is `Ok(false)`, not an error.
    fn ping(&mut self, address: EzoAddr) -> Result<bool, Self::Error>;
}

/// Adapter implementing the bus traits on top of embedded-hal 1.0
/// (requires the `hal-adapter` feature).
///
/// An embedded-hal `I2c` is exclusively owned by construction, so the
/// lock is always immediately available and `unlock` is a no-op.
#[cfg(feature = "hal-adapter")]
pub struct HalInterface<I2C, D> {
    i2c: I2C,
    delay: D,
}

#[cfg(feature = "hal-adapter")]
impl<I2C, D> HalInterface<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        HalInterface { i2c, delay }
    }

    /// Releases the wrapped peripherals.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

#[cfg(feature = "hal-adapter")]
impl<I2C, D> EzoI2c for HalInterface<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    type Error = I2C::Error;

    fn try_lock(&mut self) -> nb::Result<(), Self::Error> {
        // Exclusive ownership of the peripheral: nothing to contend with.
        Ok(())
    }

    fn unlock(&mut self) {}

    fn write(&mut self, address: EzoAddr, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address.as_u8(), bytes)
    }

    fn read_into(&mut self, address: EzoAddr, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address.as_u8(), buffer)
    }

    fn ping(&mut self, address: EzoAddr) -> Result<bool, Self::Error> {
        use embedded_hal::i2c::{Error, ErrorKind};
        match self.i2c.write(address.as_u8(), &[]) {
            Ok(()) => Ok(true),
            Err(e) if matches!(e.kind(), ErrorKind::NoAcknowledge(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(feature = "hal-adapter")]
impl<I2C, D> EzoDelay for HalInterface<I2C, D>
where
    I2C: embedded_hal::i2c::I2c,
    D: embedded_hal::delay::DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
