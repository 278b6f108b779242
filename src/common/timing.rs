// src/common/timing.rs

use core::time::Duration;

// Settle times are taken from the Atlas Scientific EZO datasheets: the
// circuit needs 900 ms to take a reading or process a calibration, and
// 300 ms for the informational queries. Reading the response buffer
// before the settle elapses returns a "still processing" payload.

// === Command settle times ===

/// Settle after `R` before the reading is available.
pub const READ_SETTLE: Duration = Duration::from_millis(900);
/// Settle after `Status`.
pub const STATUS_SETTLE: Duration = Duration::from_millis(300);
/// Settle after `i`.
pub const IDENTIFY_SETTLE: Duration = Duration::from_millis(300);
/// Settle after `Name,?`.
pub const NAME_QUERY_SETTLE: Duration = Duration::from_millis(300);
/// Settle after `Cal,<point>,<ref>`.
pub const CALIBRATION_SETTLE: Duration = Duration::from_millis(900);

// === Bus lock acquisition ===

/// Pause between failed lock attempts.
pub const LOCK_RETRY_DELAY: Duration = Duration::from_millis(10);
/// Attempt budget used by `BusSession::open`. Bounds the acquire loop at
/// roughly one second of waiting instead of spinning forever.
pub const DEFAULT_LOCK_ATTEMPTS: usize = 100;
