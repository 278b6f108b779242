// src/probe/ph.rs

use super::ProbeDevice;
use crate::bus::BusSession;
use crate::common::{
    address::EzoAddr,
    command::{CalPoint, Command},
    diag::ezo_diag,
    error::EzoError,
    hal_traits::{EzoDelay, EzoI2c},
    response::{self, ResponseBytes},
};
use core::cell::RefCell;

/// A pH EZO circuit: a generic probe plus single-point calibration.
///
/// Thin wrapper over [`ProbeDevice`]; the only pH-specific behavior is
/// the default address and the `Cal,<point>,<ref>` command family.
pub struct PhProbeDevice<'bus, IF>
where
    IF: EzoI2c,
{
    device: ProbeDevice<'bus, IF>,
}

impl<'bus, IF> PhProbeDevice<'bus, IF>
where
    IF: EzoI2c + EzoDelay,
{
    /// Binds a pH device handle. `None` picks the factory-default
    /// address 99 (`EzoAddr::PH_DEFAULT`).
    pub fn new(
        address: Option<EzoAddr>,
        session: &'bus RefCell<BusSession<IF>>,
        print_results: bool,
    ) -> Self {
        let address = address.unwrap_or(EzoAddr::PH_DEFAULT);
        PhProbeDevice {
            device: ProbeDevice::new(address, session, print_results),
        }
    }

    /// The address this handle is bound to.
    pub const fn address(&self) -> EzoAddr {
        self.device.address()
    }

    /// Takes a reading and returns the raw 7-byte response.
    pub fn read_raw(&mut self) -> Result<ResponseBytes, EzoError<IF::Error>> {
        self.device.read_raw()
    }

    /// Takes a pH reading and decodes it to a float.
    pub fn read_value(&mut self) -> Result<f32, EzoError<IF::Error>> {
        self.device.read_value()
    }

    /// Puts the circuit into low-power sleep.
    pub fn sleep(&mut self) -> Result<(), EzoError<IF::Error>> {
        self.device.sleep()
    }

    /// Queries the status report (17 bytes, raw).
    pub fn read_status(&mut self) -> Result<ResponseBytes, EzoError<IF::Error>> {
        self.device.read_status()
    }

    /// Calibrates against the reference solution for `point`
    /// (`Cal,low,4.00` / `Cal,mid,7.00` / `Cal,high,10.00`) and returns
    /// the 2-byte acknowledgment.
    pub fn calibrate(&mut self, point: CalPoint) -> Result<ResponseBytes, EzoError<IF::Error>> {
        let response = self.device.transact(&Command::Calibrate(point))?;
        if self.device.print_results() {
            ezo_diag!("calibration: {}", response::as_text(&response));
        }
        Ok(response)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::tests::{addr, MockInterface};

    fn open_session(mock: MockInterface) -> RefCell<BusSession<MockInterface>> {
        RefCell::new(BusSession::open(mock).unwrap())
    }

    #[test]
    fn test_default_address_is_99() {
        let mock = MockInterface::new();
        let session = open_session(mock);
        let ph = PhProbeDevice::new(None, &session, false);
        assert_eq!(ph.address().as_u8(), 99);
    }

    #[test]
    fn test_explicit_address_wins() {
        let mock = MockInterface::new();
        let session = open_session(mock);
        let ph = PhProbeDevice::new(Some(addr(50)), &session, false);
        assert_eq!(ph.address().as_u8(), 50);
    }

    #[test]
    fn test_calibrate_low_command() {
        let mock = MockInterface::new();
        let state = mock.state.clone();
        mock.stage_response(b"\x01\x00");
        let session = open_session(mock);
        let mut ph = PhProbeDevice::new(None, &session, false);

        let response = ph.calibrate(CalPoint::Low).unwrap();
        assert_eq!(response.len(), 2);
        let state = state.borrow();
        assert_eq!(state.write_log, [(99, b"Cal,low,4.00".to_vec())]);
        assert_eq!(state.read_log, [(99, 2)]);
        assert_eq!(state.delay_ms_total, 900);
    }

    #[test]
    fn test_calibrate_mid_command() {
        let mock = MockInterface::new();
        let state = mock.state.clone();
        mock.stage_response(b"\x01\x00");
        let session = open_session(mock);
        let mut ph = PhProbeDevice::new(None, &session, false);

        ph.calibrate(CalPoint::Mid).unwrap();
        assert_eq!(state.borrow().write_log, [(99, b"Cal,mid,7.00".to_vec())]);
    }

    #[test]
    fn test_calibrate_high_command() {
        let mock = MockInterface::new();
        let state = mock.state.clone();
        mock.stage_response(b"\x01\x00");
        let session = open_session(mock);
        let mut ph = PhProbeDevice::new(None, &session, false);

        ph.calibrate(CalPoint::High).unwrap();
        assert_eq!(state.borrow().write_log, [(99, b"Cal,high,10.00".to_vec())]);
    }

    #[test]
    fn test_unrecognized_point_never_reaches_the_bus() {
        let mock = MockInterface::new();
        let state = mock.state.clone();
        let session = open_session(mock);
        let mut ph = PhProbeDevice::new(None, &session, false);

        // The string surface rejects the point before any transaction;
        // a typed CalPoint is the only way into calibrate().
        let point: Result<CalPoint, _> = "bogus".parse();
        assert!(matches!(&point, Err(EzoError::UnknownCalibrationPoint)));
        if let Ok(point) = point {
            ph.calibrate(point).unwrap();
        }
        assert!(state.borrow().write_log.is_empty());
        assert!(state.borrow().read_log.is_empty());
    }

    #[test]
    fn test_generic_operations_delegate() {
        let mock = MockInterface::new();
        let state = mock.state.clone();
        mock.stage_response(b"\x017.04\x00\x00");
        let session = open_session(mock);
        let mut ph = PhProbeDevice::new(None, &session, false);

        assert_eq!(ph.read_value().unwrap(), 7.04);
        ph.sleep().unwrap();
        let state = state.borrow();
        assert_eq!(state.write_log[0], (99, b"R".to_vec()));
        assert_eq!(state.write_log[1], (99, b"Sleep".to_vec()));
    }
}
