//! Logging macros
//!
//! Route to defmt when that feature is enabled, to stderr on a host build,
//! and compile to nothing otherwise.

/// Debug message
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

/// Info message
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { defmt::info!($($arg)*) };
}

/// Warning message
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

/// Error message
#[cfg(feature = "defmt")]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { defmt::error!($($arg)*) };
}

// Host fallback: stderr, one line per message
#[cfg(all(not(feature = "defmt"), feature = "std"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { ::std::eprintln!("[debug] {}", ::std::format_args!($($arg)*)) };
}
#[cfg(all(not(feature = "defmt"), feature = "std"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { ::std::eprintln!("[info ] {}", ::std::format_args!($($arg)*)) };
}
#[cfg(all(not(feature = "defmt"), feature = "std"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { ::std::eprintln!("[warn ] {}", ::std::format_args!($($arg)*)) };
}
#[cfg(all(not(feature = "defmt"), feature = "std"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { ::std::eprintln!("[error] {}", ::std::format_args!($($arg)*)) };
}

// No-op versions for bare builds
#[cfg(all(not(feature = "defmt"), not(feature = "std")))]
#[macro_export]
macro_rules! debug { ($($arg:tt)*) => {}; }
#[cfg(all(not(feature = "defmt"), not(feature = "std")))]
#[macro_export]
macro_rules! info { ($($arg:tt)*) => {}; }
#[cfg(all(not(feature = "defmt"), not(feature = "std")))]
#[macro_export]
macro_rules! warn { ($($arg:tt)*) => {}; }
#[cfg(all(not(feature = "defmt"), not(feature = "std")))]
#[macro_export]
macro_rules! error { ($($arg:tt)*) => {}; }
