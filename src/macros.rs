//! Internal macros.

/// Emits a debug-level record through the `log` facade.
///
/// Expands to nothing unless the `log` feature is enabled.
macro_rules! debug_log {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            log::debug!(target: "url_parts", $($arg)+);
        }
    };
}

/// Emits a trace-level record through the `log` facade.
///
/// Expands to nothing unless the `log` feature is enabled.
macro_rules! trace_log {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        {
            log::trace!(target: "url_parts", $($arg)+);
        }
    };
}
