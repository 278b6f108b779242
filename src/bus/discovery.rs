// src/bus/discovery.rs

use super::BusSession;
use crate::common::{
    address::EzoAddr,
    command::Command,
    diag::ezo_diag,
    error::EzoError,
    hal_traits::{EzoDelay, EzoI2c},
    response::{self, ResponseBytes},
};
use arrayvec::ArrayVec;

/// Addresses found by a bus scan. The scannable window holds 112
/// addresses, so results always fit without allocation.
pub type ScanResults = ArrayVec<EzoAddr, 112>;

// Implementation block for interactive discovery helpers
impl<IF> BusSession<IF>
where
    IF: EzoI2c + EzoDelay,
{
    /// Enumerates responding addresses across the scannable window.
    pub fn scan_addresses(&mut self) -> Result<ScanResults, EzoError<IF::Error>> {
        let mut found = ScanResults::new();
        for address in
            (EzoAddr::SCAN_FIRST..=EzoAddr::SCAN_LAST).filter_map(|raw| EzoAddr::new(raw).ok())
        {
            if self.interface.ping(address).map_err(EzoError::Io)? {
                found.push(address);
            }
        }
        Ok(found)
    }

    /// Queries the stored name of the device at `address` (`Name,?`,
    /// 24-byte response).
    pub fn device_name(&mut self, address: EzoAddr) -> Result<ResponseBytes, EzoError<IF::Error>> {
        self.transact(address, &Command::NameQuery)
    }

    /// Walks the bus and reports identification and name of every
    /// responding device through the diagnostic output.
    ///
    /// Interactive discovery aid; the information is emitted, not
    /// returned.
    pub fn identify_devices(&mut self) -> Result<(), EzoError<IF::Error>> {
        for address in self.scan_addresses()? {
            let info = self.transact(address, &Command::Identify)?;
            let name = self.device_name(address)?;
            ezo_diag!("device information: {}", response::as_text(&info));
            ezo_diag!("name: {}", response::as_text(&name));
            ezo_diag!("i2c address: {}", address.as_u8());
        }
        Ok(())
    }
}
