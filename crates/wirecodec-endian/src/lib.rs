//! Byte order primitives for wirecodec.
//!
//! This is the lowest layer of the workspace:
//! - [`ByteOrder::native`] detects the running system's order once
//! - [`Primitive`] maps every supported scalar onto a same-width unsigned
//!   [`Word`] so byte swapping is chosen statically by storage width
//!
//! Everything in `wirecodec` builds on the types here.

pub mod error;
pub mod order;
pub mod swap;

pub use error::{EndianError, Result};
pub use order::{ByteOrder, Endianness};
pub use swap::{swap, Primitive, Word};
