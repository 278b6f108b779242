// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub(crate) mod diag;
pub mod error;
pub mod hal_traits;
pub mod response;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::EzoAddr;

// From command.rs
pub use command::{CalPoint, Command};

// From error.rs
pub use error::EzoError;

// From hal_traits.rs
pub use hal_traits::{EzoDelay, EzoI2c};

// From response.rs
pub use response::{parse_reading, ReadingParseError, ResponseBytes, MAX_RESPONSE_LEN};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.

// --- Feature-gated re-exports ---

// embedded-hal adapter (from hal_traits.rs)
#[cfg(feature = "hal-adapter")]
pub use hal_traits::HalInterface;
