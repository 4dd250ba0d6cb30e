#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![no_std]

//! Provide utilities for parsing and constructing IEEE 802.3 frames that
//! carry IEEE 802.2 LLC PDUs.

#[macro_use]
mod macros;

mod traits;
pub use traits::{Buf, PktBuf, PktBufMut};

mod cursors;
pub use cursors::{Cursor, CursorMut};

pub mod ether;
pub mod llc;
