// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Debug logging. Forwards to `tracing` with the `trace` feature, otherwise
//! expands to nothing so the default build stays allocation-free.

#[cfg(feature = "trace")]
macro_rules! tlv_debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! tlv_debug {
    ($($arg:tt)*) => {};
}
