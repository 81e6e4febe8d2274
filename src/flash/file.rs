// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Host-side flash area over any seekable reader, e.g. a slot dump on disk.

use std::cell::RefCell;
use std::io::{self, Read, Seek, SeekFrom};

use crate::error::FlashError;
use crate::flash::FlashArea;

/// Flash area read through a seekable handle; its size is the stream length.
pub struct FileArea<R> {
    inner: RefCell<R>,
    size: u32,
}

impl<R: Read + Seek> FileArea<R> {
    /// Wrap `inner`, sizing the area from its end. Fails above 4 GiB.
    pub fn new(mut inner: R) -> io::Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        let size = u32::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "area larger than 4 GiB"))?;
        Ok(Self {
            inner: RefCell::new(inner),
            size,
        })
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read + Seek> FlashArea for FileArea<R> {
    fn size(&self) -> u32 {
        self.size
    }

    fn read(&self, off: u32, buf: &mut [u8]) -> Result<(), FlashError> {
        let len = buf.len();
        let mut inner = self.inner.try_borrow_mut().map_err(|_| FlashError::Io)?;
        inner
            .seek(SeekFrom::Start(u64::from(off)))
            .map_err(|_| FlashError::Io)?;
        inner.read_exact(buf).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => FlashError::OutOfBounds { off, len },
            _ => FlashError::Io,
        })
    }
}
