// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Memory-mapped or RAM-resident flash area.

use crate::error::FlashError;
use crate::flash::FlashArea;

/// Flash area backed by a byte slice, e.g. an XIP-mapped slot or a copy of
/// one in RAM.
#[derive(Clone, Copy, Debug)]
pub struct SliceArea<'a> {
    data: &'a [u8],
}

impl<'a> SliceArea<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}

impl FlashArea for SliceArea<'_> {
    fn size(&self) -> u32 {
        // Areas beyond 4 GiB are clamped; offsets are 32-bit.
        u32::try_from(self.data.len()).unwrap_or(u32::MAX)
    }

    fn read(&self, off: u32, buf: &mut [u8]) -> Result<(), FlashError> {
        let start = off as usize;
        let src = start
            .checked_add(buf.len())
            .and_then(|end| self.data.get(start..end))
            .ok_or(FlashError::OutOfBounds { off, len: buf.len() })?;
        buf.copy_from_slice(src);
        Ok(())
    }
}
