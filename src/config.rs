// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Magic of the info record that opens the unprotected TLV block.
pub const IMAGE_TLV_INFO_MAGIC: u16 = 0x6907;

/// Magic of the info record that opens the protected TLV block.
pub const IMAGE_TLV_PROT_INFO_MAGIC: u16 = 0x6908;

/// Wildcard type: matches every record.
pub const IMAGE_TLV_ANY: u16 = 0xffff;

/// Size in bytes of an encoded info record (`magic`, `tlv_tot`).
pub const TLV_INFO_SIZE: u32 = 4;

/// Size in bytes of an encoded record header (`type`, `len`).
pub const TLV_HEADER_SIZE: u32 = 4;

/// Where the trailer starts relative to the flash area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Trailer sits at `hdr_size + img_size`.
    #[default]
    Standard,
    /// The image itself was placed `start_off` bytes into the area
    /// (swap-using-offset slots).
    OffsetRelative { start_off: u32 },
}

impl Layout {
    /// Trailer base for an image whose trailer offset is `tlv_off`.
    /// `None` if the sum leaves the 32-bit offset space.
    pub fn base_offset(&self, tlv_off: u32) -> Option<u32> {
        match *self {
            Layout::Standard => Some(tlv_off),
            Layout::OffsetRelative { start_off } => tlv_off.checked_add(start_off),
        }
    }
}
