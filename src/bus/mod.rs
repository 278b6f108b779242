// src/bus/mod.rs

mod discovery;

pub use discovery::ScanResults;

use crate::common::{
    address::EzoAddr,
    command::Command,
    error::EzoError,
    hal_traits::{EzoDelay, EzoI2c},
    response::{ResponseBytes, MAX_RESPONSE_LEN},
    timing,
};
use core::time::Duration;

/// Exclusive access to an I2C bus for the lifetime of the session.
///
/// The bus lock is taken in `open` and held until the session is closed
/// or dropped; it is released exactly once on every exit path. Devices
/// built against a session share it through a `RefCell` and issue their
/// transactions one at a time.
#[derive(Debug)]
pub struct BusSession<IF>
where
    IF: EzoI2c,
{
    interface: IF,
    locked: bool,
}

impl<IF> BusSession<IF>
where
    IF: EzoI2c + EzoDelay,
{
    /// Opens a session, acquiring the bus lock with the default retry
    /// budget (`timing::DEFAULT_LOCK_ATTEMPTS`).
    pub fn open(interface: IF) -> Result<Self, EzoError<IF::Error>> {
        Self::open_with_retry(interface, timing::DEFAULT_LOCK_ATTEMPTS)
    }

    /// Opens a session with a caller-supplied attempt budget.
    ///
    /// Each failed attempt is followed by a `timing::LOCK_RETRY_DELAY`
    /// pause. Exhausting the budget fails with `BusUnavailable`; the
    /// acquire loop never spins unbounded.
    pub fn open_with_retry(
        mut interface: IF,
        max_attempts: usize,
    ) -> Result<Self, EzoError<IF::Error>> {
        for attempt in 1..=max_attempts {
            match interface.try_lock() {
                Ok(()) => {
                    return Ok(BusSession {
                        interface,
                        locked: true,
                    })
                }
                Err(nb::Error::WouldBlock) => {
                    if attempt < max_attempts {
                        interface.delay_ms(timing::LOCK_RETRY_DELAY.as_millis() as u32);
                    }
                }
                Err(nb::Error::Other(e)) => return Err(EzoError::Io(e)),
            }
        }
        Err(EzoError::BusUnavailable)
    }

    /// Writes raw bytes to the device at `address`.
    pub fn write_raw(&mut self, address: EzoAddr, bytes: &[u8]) -> Result<(), EzoError<IF::Error>> {
        self.interface.write(address, bytes).map_err(EzoError::Io)
    }

    /// Writes `message`, blocks for `settle`, then reads exactly
    /// `response_len` bytes into a fresh buffer.
    ///
    /// `response_len` is clamped to `MAX_RESPONSE_LEN`. No retry is
    /// performed; any transport failure propagates as `Io`.
    pub fn write_then_read(
        &mut self,
        address: EzoAddr,
        message: &[u8],
        settle: Duration,
        response_len: usize,
    ) -> Result<ResponseBytes, EzoError<IF::Error>> {
        self.interface.write(address, message).map_err(EzoError::Io)?;
        self.interface.delay_ms(settle.as_millis() as u32);

        let mut buffer = ResponseBytes::new();
        for _ in 0..response_len.min(MAX_RESPONSE_LEN) {
            buffer.push(0);
        }
        self.interface
            .read_into(address, &mut buffer)
            .map_err(EzoError::Io)?;
        Ok(buffer)
    }

    /// Runs one command transaction, deriving message, settle time and
    /// response size from the command itself. Fire-and-forget commands
    /// return an empty buffer.
    pub fn transact(
        &mut self,
        address: EzoAddr,
        command: &Command,
    ) -> Result<ResponseBytes, EzoError<IF::Error>> {
        match command.response_len() {
            Some(len) => {
                self.write_then_read(address, command.as_bytes(), command.settle(), len)
            }
            None => {
                self.write_raw(address, command.as_bytes())?;
                Ok(ResponseBytes::new())
            }
        }
    }

    /// Releases the lock and ends the session.
    ///
    /// Dropping the session has the same effect; `close` exists so the
    /// release point can be made explicit.
    pub fn close(mut self) {
        self.release();
    }
}

impl<IF> BusSession<IF>
where
    IF: EzoI2c,
{
    fn release(&mut self) {
        if self.locked {
            self.interface.unlock();
            self.locked = false;
        }
    }
}

impl<IF> Drop for BusSession<IF>
where
    IF: EzoI2c,
{
    fn drop(&mut self) {
        self.release();
    }
}
