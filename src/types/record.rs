// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-size trailer structures. Both are little-endian on flash.

use byteorder::{ByteOrder, LittleEndian};

use crate::config::{TLV_HEADER_SIZE, TLV_INFO_SIZE};
use crate::error::Result;
use crate::flash::{self, FlashArea};
use crate::types::TlvType;

/// Info record opening a TLV block: `[magic u16][tlv_tot u16]`.
///
/// `tlv_tot` counts the whole block, this record included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlvInfo {
    pub magic: u16,
    pub tlv_tot: u16,
}

impl TlvInfo {
    pub const SIZE: usize = TLV_INFO_SIZE as usize;

    pub fn from_bytes(buf: &[u8; Self::SIZE]) -> Self {
        Self {
            magic: LittleEndian::read_u16(&buf[0..2]),
            tlv_tot: LittleEndian::read_u16(&buf[2..4]),
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        LittleEndian::write_u16(&mut buf[0..2], self.magic);
        LittleEndian::write_u16(&mut buf[2..4], self.tlv_tot);
        buf
    }

    pub fn load<F: FlashArea + ?Sized>(fap: &F, off: u32) -> Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        flash::load(fap, off, &mut buf)?;
        Ok(Self::from_bytes(&buf))
    }
}

/// Record header: `[type u16][len u16]`, followed by `len` payload bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlvHeader {
    pub kind: TlvType,
    pub len: u16,
}

impl TlvHeader {
    pub const SIZE: usize = TLV_HEADER_SIZE as usize;

    pub fn from_bytes(buf: &[u8; Self::SIZE]) -> Self {
        Self {
            kind: TlvType(LittleEndian::read_u16(&buf[0..2])),
            len: LittleEndian::read_u16(&buf[2..4]),
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        LittleEndian::write_u16(&mut buf[0..2], self.kind.0);
        LittleEndian::write_u16(&mut buf[2..4], self.len);
        buf
    }

    pub fn load<F: FlashArea + ?Sized>(fap: &F, off: u32) -> Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        flash::load(fap, off, &mut buf)?;
        Ok(Self::from_bytes(&buf))
    }
}

/// A record yielded by the iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlvEntry {
    /// Flash offset of the payload (just past the record header).
    pub off: u32,
    /// Payload length in bytes.
    pub len: u16,
    /// Tag actually found, useful with an [`TlvType::ANY`] filter.
    pub kind: TlvType,
}
