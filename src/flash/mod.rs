// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Read-only flash access.
//!
//! Every trailer read goes through [`load`], which checks that the requested
//! range lies inside the area before touching it. A corrupted length field
//! therefore turns into [`TlvError::LoadFailed`], never into a stray read.

pub mod slice;

#[cfg(feature = "std")]
pub mod file;

pub use slice::SliceArea;

#[cfg(feature = "std")]
pub use file::FileArea;

use crate::error::{FlashError, Result, TlvError};

/// A flash area holding one image slot.
pub trait FlashArea {
    /// Size of the area in bytes.
    fn size(&self) -> u32;

    /// Read exactly `buf.len()` bytes starting at `off`.
    fn read(&self, off: u32, buf: &mut [u8]) -> core::result::Result<(), FlashError>;
}

impl<T: FlashArea + ?Sized> FlashArea for &T {
    fn size(&self) -> u32 {
        (**self).size()
    }

    fn read(&self, off: u32, buf: &mut [u8]) -> core::result::Result<(), FlashError> {
        (**self).read(off, buf)
    }
}

/// Bounds-checked load of `buf.len()` bytes at `off`.
pub fn load<F: FlashArea + ?Sized>(fap: &F, off: u32, buf: &mut [u8]) -> Result<()> {
    let len = u32::try_from(buf.len()).map_err(|_| TlvError::LoadFailed)?;
    let end = off.checked_add(len).ok_or(TlvError::LoadFailed)?;
    if end > fap.size() {
        return Err(TlvError::LoadFailed);
    }
    fap.read(off, buf)?;
    Ok(())
}
