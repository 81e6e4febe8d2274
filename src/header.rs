// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Read-only view of the image header fields the trailer depends on.

/// Accessors into an image header. The header layout itself belongs to the
/// image format and is not decoded here.
pub trait ImageHeader {
    /// Size of the header preceding the image body.
    fn hdr_size(&self) -> u16;

    /// Size of the image body.
    fn img_size(&self) -> u32;

    /// Declared size of the protected TLV block, 0 when there is none.
    fn protect_tlv_size(&self) -> u16;

    /// Offset of the trailer: header plus body.
    fn tlv_offset(&self) -> Option<u32> {
        u32::from(self.hdr_size()).checked_add(self.img_size())
    }
}

impl<T: ImageHeader + ?Sized> ImageHeader for &T {
    fn hdr_size(&self) -> u16 {
        (**self).hdr_size()
    }

    fn img_size(&self) -> u32 {
        (**self).img_size()
    }

    fn protect_tlv_size(&self) -> u16 {
        (**self).protect_tlv_size()
    }

    fn tlv_offset(&self) -> Option<u32> {
        (**self).tlv_offset()
    }
}
