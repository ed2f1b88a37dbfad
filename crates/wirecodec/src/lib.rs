//! Endian-aware binary encoding of primitives, strings and arrays.
//!
//! The format is compact and self-consistent but not self-describing:
//! - Fixed-width scalars are written as 1, 2, 4 or 8 raw bytes
//! - Strings are a 4-byte length followed by the raw content
//! - Arrays are a 4-byte count followed by each element
//!
//! Every multi-byte value, prefixes included, uses the byte order chosen
//! when the [`Encoder`] or [`Decoder`] is created. The reader must already
//! know the sequence of types the writer used.

pub mod buffer;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod wire;

pub use buffer::{Buffer, LENGTH_PREFIX_SIZE, MAX_LENGTH};
pub use codec::{decode_one, encode_one, encode_one_to_vec};
pub use config::{CodecConfig, DEFAULT_INITIAL_CAPACITY};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{CodecError, Result};
pub use wire::{Decode, Encode};
pub use wirecodec_endian::{swap, ByteOrder, Endianness, Primitive};
