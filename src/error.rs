// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

/// Failure of a TLV trailer operation. Every variant ends the current scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum TlvError {
    /// Iterator used without its header or flash area.
    #[cfg_attr(feature = "std", error("iterator has no header or flash area"))]
    InvalidArgument,

    /// The flash area could not supply the requested bytes.
    #[cfg_attr(feature = "std", error("flash load failed"))]
    LoadFailed,

    /// Framing, magic or length consistency violated.
    #[cfg_attr(feature = "std", error("malformed TLV trailer"))]
    Malformed,

    /// Caller buffer cannot hold a record payload.
    #[cfg_attr(
        feature = "std",
        error("buffer too small: need {needed} bytes, have {available}")
    )]
    BufferTooSmall { needed: usize, available: usize },
}

/// Failure reported by a [`FlashArea`](crate::flash::FlashArea).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum FlashError {
    /// Range not inside the area.
    #[cfg_attr(feature = "std", error("read of {len} bytes at {off:#x} leaves the area"))]
    OutOfBounds { off: u32, len: usize },

    /// The device or stream failed the read.
    #[cfg_attr(feature = "std", error("flash read failed"))]
    Io,
}

impl From<FlashError> for TlvError {
    fn from(_: FlashError) -> Self {
        TlvError::LoadFailed
    }
}

pub type Result<T> = core::result::Result<T, TlvError>;
