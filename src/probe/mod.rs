// src/probe/mod.rs

mod ph;

pub use ph::PhProbeDevice;

use crate::bus::BusSession;
use crate::common::{
    address::EzoAddr,
    command::Command,
    diag::ezo_diag,
    error::EzoError,
    hal_traits::{EzoDelay, EzoI2c},
    response::{self, ResponseBytes},
};
use core::cell::RefCell;

/// A generic EZO circuit bound to one fixed address.
///
/// The device does not own the bus: it holds a shared reference to a
/// session established elsewhere, and borrows it per transaction. Every
/// operation is a fresh write+read; no state is retained across calls.
pub struct ProbeDevice<'bus, IF>
where
    IF: EzoI2c,
{
    address: EzoAddr,
    session: &'bus RefCell<BusSession<IF>>,
    print_results: bool,
}

impl<'bus, IF> ProbeDevice<'bus, IF>
where
    IF: EzoI2c + EzoDelay,
{
    /// Binds a device handle to `address` on the shared session. With
    /// `print_results` set, responses are echoed to the diagnostic
    /// output.
    pub fn new(
        address: EzoAddr,
        session: &'bus RefCell<BusSession<IF>>,
        print_results: bool,
    ) -> Self {
        ProbeDevice {
            address,
            session,
            print_results,
        }
    }

    /// The address this handle is bound to.
    pub const fn address(&self) -> EzoAddr {
        self.address
    }

    // One borrow of the shared session per transaction. A session
    // already borrowed elsewhere on this thread surfaces as
    // `SessionBusy` rather than aliasing the bus mid-transfer.
    pub(crate) fn transact(
        &self,
        command: &Command,
    ) -> Result<ResponseBytes, EzoError<IF::Error>> {
        let mut session = self
            .session
            .try_borrow_mut()
            .map_err(|_| EzoError::SessionBusy)?;
        session.transact(self.address, command)
    }

    pub(crate) const fn print_results(&self) -> bool {
        self.print_results
    }

    /// Takes a reading and returns the raw 7-byte response.
    pub fn read_raw(&mut self) -> Result<ResponseBytes, EzoError<IF::Error>> {
        let response = self.transact(&Command::Read)?;
        if self.print_results {
            ezo_diag!("reading: {}", response::as_text(&response));
        }
        Ok(response)
    }

    /// Takes a reading and decodes it to a float.
    ///
    /// Runs the same transaction as `read_raw`, then parses the numeric
    /// field at bytes `[1..5)`.
    pub fn read_value(&mut self) -> Result<f32, EzoError<IF::Error>> {
        let response = self.read_raw()?;
        response::parse_reading(&response).map_err(EzoError::Parse)
    }

    /// Puts the circuit into low-power sleep. Fire-and-forget: one
    /// write, no response read.
    pub fn sleep(&mut self) -> Result<(), EzoError<IF::Error>> {
        self.transact(&Command::Sleep).map(|_| ())
    }

    /// Queries the restart-reason/voltage status report (17 bytes, raw).
    pub fn read_status(&mut self) -> Result<ResponseBytes, EzoError<IF::Error>> {
        let response = self.transact(&Command::Status)?;
        if self.print_results {
            ezo_diag!("status: {}", response::as_text(&response));
        }
        Ok(response)
    }
}
