// Not every macro is used in every feature configuration.
#![allow(unused_macros)]

/// Expands its body only when the `logging` feature is enabled.
///
/// Without the feature, none of the arguments are evaluated, so it is
/// fine to pass expressions that do a little work (like calling into a
/// calendar) to the level macros below.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! error {
    ($($tt:tt)*) => { log!(log::error!(target: "jiff_calendar", $($tt)*)) }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!(target: "jiff_calendar", $($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "jiff_calendar", $($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "jiff_calendar", $($tt)*)) }
}
