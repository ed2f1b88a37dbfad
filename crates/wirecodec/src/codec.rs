//! Single-value shortcuts. Multi-field messages use [`Encoder`] and
//! [`Decoder`] directly.

use bytes::Bytes;
use wirecodec_endian::Endianness;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::wire::{Decode, Encode};

/// Encode one value.
pub fn encode_one<T: Encode + ?Sized>(value: &T, endianness: Endianness) -> Result<Bytes> {
    let mut encoder = Encoder::new(endianness);
    encoder.put(value)?;
    Ok(encoder.into_bytes())
}

/// Encode one value into an owned `Vec`.
pub fn encode_one_to_vec<T: Encode + ?Sized>(
    value: &T,
    endianness: Endianness,
) -> Result<Vec<u8>> {
    Ok(encode_one(value, endianness)?.to_vec())
}

/// Decode one value from the start of `data`. Trailing bytes are ignored.
pub fn decode_one<T: Decode>(data: &[u8], endianness: Endianness) -> Result<T> {
    Decoder::from_slice(data, endianness).decode()
}
