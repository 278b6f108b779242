// src/lib.rs

#![no_std] // Specify no_std at the crate root

// The unit tests run on the host and need std collections.
#[cfg(test)]
extern crate std;

pub mod bus;
pub mod common;
pub mod probe;

// Re-export key types for convenience
pub use bus::BusSession;
pub use common::EzoAddr;
pub use common::EzoError;
pub use probe::{PhProbeDevice, ProbeDevice};
