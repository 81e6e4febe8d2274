// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Image builders for the trailer tests.

use std::cell::RefCell;
use std::vec::Vec;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::config::{IMAGE_TLV_INFO_MAGIC, IMAGE_TLV_PROT_INFO_MAGIC};
use crate::error::FlashError;
use crate::flash::{FlashArea, SliceArea};
use crate::header::ImageHeader;

pub const HDR_SIZE: u16 = 32;
pub const IMG_SIZE: u32 = 64;
/// Trailer offset of every image built here (with no start offset).
pub const BASE: u32 = HDR_SIZE as u32 + IMG_SIZE;

#[derive(Clone, Copy, Debug)]
pub struct TestHeader {
    pub hdr_size: u16,
    pub img_size: u32,
    pub protect_tlv_size: u16,
}

impl TestHeader {
    pub fn new(protect_tlv_size: u16) -> Self {
        Self {
            hdr_size: HDR_SIZE,
            img_size: IMG_SIZE,
            protect_tlv_size,
        }
    }
}

impl ImageHeader for TestHeader {
    fn hdr_size(&self) -> u16 {
        self.hdr_size
    }

    fn img_size(&self) -> u32 {
        self.img_size
    }

    fn protect_tlv_size(&self) -> u16 {
        self.protect_tlv_size
    }
}

/// Header and body bytes up to the trailer.
pub fn image_prefix() -> Vec<u8> {
    vec![0xA5; BASE as usize]
}

pub fn write_info(buf: &mut Vec<u8>, magic: u16, tlv_tot: u16) {
    buf.write_u16::<LittleEndian>(magic).unwrap();
    buf.write_u16::<LittleEndian>(tlv_tot).unwrap();
}

/// Record header only; the declared length need not match what follows.
pub fn write_tlv_header(buf: &mut Vec<u8>, kind: u16, len: u16) {
    buf.write_u16::<LittleEndian>(kind).unwrap();
    buf.write_u16::<LittleEndian>(len).unwrap();
}

pub fn write_tlv(buf: &mut Vec<u8>, kind: u16, payload: &[u8]) {
    write_tlv_header(buf, kind, payload.len() as u16);
    buf.extend_from_slice(payload);
}

/// Lays out `[start_off padding][header + body][prot block][unprot block]`.
#[derive(Default)]
pub struct ImageBuilder {
    start_off: u32,
    protected: Vec<(u16, Vec<u8>)>,
    unprotected: Vec<(u16, Vec<u8>)>,
}

impl ImageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_off(mut self, start_off: u32) -> Self {
        self.start_off = start_off;
        self
    }

    pub fn protected(mut self, kind: u16, payload: &[u8]) -> Self {
        self.protected.push((kind, payload.to_vec()));
        self
    }

    pub fn unprotected(mut self, kind: u16, payload: &[u8]) -> Self {
        self.unprotected.push((kind, payload.to_vec()));
        self
    }

    fn block_len(records: &[(u16, Vec<u8>)]) -> u16 {
        let body: usize = records.iter().map(|(_, p)| 4 + p.len()).sum();
        (4 + body) as u16
    }

    pub fn protect_tlv_size(&self) -> u16 {
        if self.protected.is_empty() {
            0
        } else {
            Self::block_len(&self.protected)
        }
    }

    pub fn build(&self) -> (TestHeader, Vec<u8>) {
        let mut buf = vec![0xFF; self.start_off as usize];
        buf.extend_from_slice(&image_prefix());

        let protect_tlv_size = self.protect_tlv_size();
        if protect_tlv_size > 0 {
            write_info(&mut buf, IMAGE_TLV_PROT_INFO_MAGIC, protect_tlv_size);
            for (kind, payload) in &self.protected {
                write_tlv(&mut buf, *kind, payload);
            }
        }

        write_info(&mut buf, IMAGE_TLV_INFO_MAGIC, Self::block_len(&self.unprotected));
        for (kind, payload) in &self.unprotected {
            write_tlv(&mut buf, *kind, payload);
        }

        (TestHeader::new(protect_tlv_size), buf)
    }
}

/// Slice area that logs every read it serves.
pub struct RecordingArea<'a> {
    inner: SliceArea<'a>,
    pub reads: RefCell<Vec<(u32, usize)>>,
}

impl<'a> RecordingArea<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            inner: SliceArea::new(data),
            reads: RefCell::new(Vec::new()),
        }
    }
}

impl FlashArea for RecordingArea<'_> {
    fn size(&self) -> u32 {
        self.inner.size()
    }

    fn read(&self, off: u32, buf: &mut [u8]) -> Result<(), FlashError> {
        self.reads.borrow_mut().push((off, buf.len()));
        self.inner.read(off, buf)
    }
}
