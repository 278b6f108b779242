// src/common/diag.rs

// Diagnostic output for `identify_devices` and devices constructed with
// `print_results`. Forwards to whichever backend feature is enabled and
// stays silent otherwise. Call sites must stick to `{}` placeholders
// with arguments that both backends understand (&str and integers).

macro_rules! ezo_diag {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        ::log::info!($($arg)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            let _ = ($($arg)*);
        }
    }};
}

pub(crate) use ezo_diag;
