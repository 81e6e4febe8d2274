// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![cfg_attr(not(feature = "std"), no_std)]

//! bootutil-tlv: a no_std, allocation-free iterator over the TLV trailer of a
//! signed firmware image.
//!
//! The trailer sits right after the image body and carries an optional
//! protected block (covered by the image hash) followed by the mandatory
//! unprotected block. [`TlvIter`] validates the framing once in
//! [`TlvIter::begin`] and then yields matching records one by one.

#[cfg(all(test, not(feature = "std")))]
#[macro_use]
extern crate std;

#[macro_use]
mod trace;

pub mod config;
pub mod error;
pub mod flash;
pub mod header;
pub mod iter;
pub mod types;

pub use config::Layout;
pub use error::{FlashError, Result, TlvError};
pub use flash::{FlashArea, SliceArea};
pub use header::ImageHeader;
pub use iter::TlvIter;
pub use types::{TlvEntry, TlvHeader, TlvInfo, TlvType};

#[cfg(feature = "std")]
pub use flash::FileArea;

#[cfg(test)]
mod tests;
