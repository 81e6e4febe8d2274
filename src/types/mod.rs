// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record tags and the wire structures of the trailer.

pub mod record;

pub use record::{TlvEntry, TlvHeader, TlvInfo};

use crate::config::IMAGE_TLV_ANY;

/// 16-bit record tag. Unknown tags are carried as-is; the names below only
/// label the well-known ones, payloads are never interpreted here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TlvType(pub u16);

impl TlvType {
    pub const KEYHASH: TlvType = TlvType(0x01);
    pub const PUBKEY: TlvType = TlvType(0x02);
    pub const SHA256: TlvType = TlvType(0x10);
    pub const SHA384: TlvType = TlvType(0x11);
    pub const SHA512: TlvType = TlvType(0x12);
    pub const RSA2048_PSS: TlvType = TlvType(0x20);
    pub const ECDSA224: TlvType = TlvType(0x21);
    pub const ECDSA_SIG: TlvType = TlvType(0x22);
    pub const RSA3072_PSS: TlvType = TlvType(0x23);
    pub const ED25519: TlvType = TlvType(0x24);
    pub const SIG_PURE: TlvType = TlvType(0x25);
    pub const ENC_RSA2048: TlvType = TlvType(0x30);
    pub const ENC_KW: TlvType = TlvType(0x31);
    pub const ENC_EC256: TlvType = TlvType(0x32);
    pub const ENC_X25519: TlvType = TlvType(0x33);
    pub const ENC_X25519_SHA512: TlvType = TlvType(0x34);
    pub const DEPENDENCY: TlvType = TlvType(0x40);
    pub const SEC_CNT: TlvType = TlvType(0x50);
    pub const BOOT_RECORD: TlvType = TlvType(0x60);
    pub const DECOMP_SIZE: TlvType = TlvType(0x70);
    pub const DECOMP_SHA: TlvType = TlvType(0x71);
    pub const DECOMP_SIGNATURE: TlvType = TlvType(0x72);
    pub const COMP_DEC_SIZE: TlvType = TlvType(0x73);

    /// Matches every record when used as a filter.
    pub const ANY: TlvType = TlvType(IMAGE_TLV_ANY);

    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }

    /// Whether a record tagged `found` passes this filter.
    pub fn matches(&self, found: TlvType) -> bool {
        self.is_any() || *self == found
    }
}

impl From<u16> for TlvType {
    fn from(v: u16) -> Self {
        TlvType(v)
    }
}

impl From<TlvType> for u16 {
    fn from(t: TlvType) -> Self {
        t.0
    }
}
