// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! TLV trailer iterator.
//!
//! Trailer layout, offsets relative to the flash area:
//!
//! ```text
//! base                                   prot_end                       tlv_end
//!  | prot info | tlv | tlv | ...         | info | tlv | tlv | ...         |
//!  '---------- protect_tlv_size ---------''------- info.tlv_tot ---------'
//! ```
//!
//! The protected block is optional. When absent, `prot_end == base` and the
//! trailer opens directly with the unprotected info record.

use crate::config::{Layout, IMAGE_TLV_INFO_MAGIC, IMAGE_TLV_PROT_INFO_MAGIC, TLV_HEADER_SIZE, TLV_INFO_SIZE};
use crate::error::{Result, TlvError};
use crate::flash::{self, FlashArea};
use crate::header::ImageHeader;
use crate::types::{TlvEntry, TlvHeader, TlvInfo, TlvType};

/// Single-pass scan over the records of one image trailer.
///
/// Built by [`TlvIter::begin`]; the header and flash area stay borrowed for
/// the lifetime of the scan.
pub struct TlvIter<'a, H: ?Sized, F: ?Sized> {
    hdr: Option<&'a H>,
    fap: Option<&'a F>,
    kind: TlvType,
    prot: bool,
    prot_end: u32,
    tlv_end: u32,
    tlv_off: u32,
    // Set once the `Iterator` adapter has returned an error or `None`.
    done: bool,
}

impl<'a, H: ?Sized, F: ?Sized> TlvIter<'a, H, F> {
    /// An iterator that was never started. Every operation on it fails with
    /// [`TlvError::InvalidArgument`].
    pub fn detached() -> Self {
        Self {
            hdr: None,
            fap: None,
            kind: TlvType::ANY,
            prot: false,
            prot_end: 0,
            tlv_end: 0,
            tlv_off: 0,
            done: false,
        }
    }

    /// Offset where the protected block ends.
    pub fn prot_end(&self) -> u32 {
        self.prot_end
    }

    /// Offset where the trailer ends.
    pub fn tlv_end(&self) -> u32 {
        self.tlv_end
    }

    /// Offset of the next record header to examine.
    pub fn cursor(&self) -> u32 {
        self.tlv_off
    }

    fn parts(&self) -> Result<(&'a H, &'a F)> {
        match (self.hdr, self.fap) {
            (Some(hdr), Some(fap)) => Ok((hdr, fap)),
            _ => Err(TlvError::InvalidArgument),
        }
    }

    /// Whether a record at `off` lies in the protected block.
    pub fn is_protected(&self, off: u32) -> Result<bool> {
        self.parts()?;
        Ok(off < self.prot_end)
    }
}

impl<'a, H: ?Sized, F: ?Sized> Default for TlvIter<'a, H, F> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<'a, H, F> TlvIter<'a, H, F>
where
    H: ImageHeader + ?Sized,
    F: FlashArea + ?Sized,
{
    /// Locate and validate the trailer of the image described by `hdr`.
    ///
    /// `kind` filters the records [`next`](Self::next) yields
    /// ([`TlvType::ANY`] for all of them). With `prot` set the scan stops at
    /// the end of the protected block.
    pub fn begin(hdr: &'a H, fap: &'a F, kind: TlvType, prot: bool) -> Result<Self> {
        Self::begin_opt(Some(hdr), Some(fap), kind, prot, Layout::Standard)
    }

    /// [`begin`](Self::begin) for an image placed according to `layout`.
    pub fn begin_with_layout(
        hdr: &'a H,
        fap: &'a F,
        kind: TlvType,
        prot: bool,
        layout: Layout,
    ) -> Result<Self> {
        Self::begin_opt(Some(hdr), Some(fap), kind, prot, layout)
    }

    /// Entry point for callers whose header or area may be missing.
    pub fn begin_opt(
        hdr: Option<&'a H>,
        fap: Option<&'a F>,
        kind: TlvType,
        prot: bool,
        layout: Layout,
    ) -> Result<Self> {
        tlv_debug!(kind = kind.0, prot, "tlv iter begin");

        let (hdr, fap) = match (hdr, fap) {
            (Some(hdr), Some(fap)) => (hdr, fap),
            _ => return Err(TlvError::InvalidArgument),
        };

        let off = hdr
            .tlv_offset()
            .and_then(|tlv_off| layout.base_offset(tlv_off))
            .ok_or(TlvError::Malformed)?;
        let protect_tlv_size = hdr.protect_tlv_size();

        let mut info = TlvInfo::load(fap, off)?;
        if info.magic == IMAGE_TLV_PROT_INFO_MAGIC {
            if info.tlv_tot != protect_tlv_size {
                tlv_debug!(
                    declared = protect_tlv_size,
                    found = info.tlv_tot,
                    "protected block size mismatch"
                );
                return Err(TlvError::Malformed);
            }
            let unprot_off = off
                .checked_add(u32::from(info.tlv_tot))
                .ok_or(TlvError::LoadFailed)?;
            info = TlvInfo::load(fap, unprot_off)?;
        } else if protect_tlv_size != 0 {
            tlv_debug!(declared = protect_tlv_size, "protected block missing");
            return Err(TlvError::Malformed);
        }

        if info.magic != IMAGE_TLV_INFO_MAGIC {
            tlv_debug!(magic = info.magic, "bad tlv info magic");
            return Err(TlvError::Malformed);
        }

        let prot_end = off
            .checked_add(u32::from(protect_tlv_size))
            .ok_or(TlvError::Malformed)?;
        let tlv_end = prot_end
            .checked_add(u32::from(info.tlv_tot))
            .ok_or(TlvError::Malformed)?;
        let tlv_off = off.checked_add(TLV_INFO_SIZE).ok_or(TlvError::Malformed)?;

        Ok(Self {
            hdr: Some(hdr),
            fap: Some(fap),
            kind,
            prot,
            prot_end,
            tlv_end,
            tlv_off,
            done: false,
        })
    }

    /// Advance to the next record passing the type filter.
    ///
    /// `Ok(None)` means no more matching records; calling again keeps
    /// returning `Ok(None)`.
    pub fn next(&mut self) -> Result<Option<TlvEntry>> {
        let (hdr, fap) = self.parts()?;

        tlv_debug!(
            kind = self.kind.0,
            start = self.tlv_off,
            end = self.tlv_end,
            "tlv iter next"
        );

        while self.tlv_off < self.tlv_end {
            // Crossing into the unprotected block: step over its info record.
            if hdr.protect_tlv_size() > 0 && self.tlv_off == self.prot_end {
                self.tlv_off = self
                    .tlv_off
                    .checked_add(TLV_INFO_SIZE)
                    .ok_or(TlvError::Malformed)?;
                // Empty unprotected block: no header to read past tlv_end.
                if self.tlv_off >= self.tlv_end {
                    break;
                }
            }

            let tlv = TlvHeader::load(fap, self.tlv_off).map_err(|e| {
                tlv_debug!(off = self.tlv_off, "tlv header load failed");
                e
            })?;

            if self.prot && self.tlv_off >= self.prot_end {
                tlv_debug!(kind = self.kind.0, "protected tlv not found");
                return Ok(None);
            }

            let payload = self
                .tlv_off
                .checked_add(TLV_HEADER_SIZE)
                .ok_or(TlvError::Malformed)?;
            let following = payload
                .checked_add(u32::from(tlv.len))
                .ok_or(TlvError::Malformed)?;
            self.tlv_off = following;

            if self.kind.matches(tlv.kind) {
                tlv_debug!(kind = tlv.kind.0, off = payload, len = tlv.len, "tlv found");
                return Ok(Some(TlvEntry {
                    off: payload,
                    len: tlv.len,
                    kind: tlv.kind,
                }));
            }
        }

        tlv_debug!(kind = self.kind.0, "tlv not found");
        Ok(None)
    }

    /// Copy the payload of `entry` into the front of `buf`, returning its
    /// length.
    pub fn read_payload(&self, entry: &TlvEntry, buf: &mut [u8]) -> Result<usize> {
        let (_, fap) = self.parts()?;
        let needed = usize::from(entry.len);
        let available = buf.len();
        let dst = buf
            .get_mut(..needed)
            .ok_or(TlvError::BufferTooSmall { needed, available })?;
        flash::load(fap, entry.off, dst)?;
        Ok(needed)
    }
}

/// Yields matching records. Stops after the first error, since any failure
/// ends the scan.
impl<'a, H, F> Iterator for TlvIter<'a, H, F>
where
    H: ImageHeader + ?Sized,
    F: FlashArea + ?Sized,
{
    type Item = Result<TlvEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match TlvIter::next(self) {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
