use bytes::{Bytes, BytesMut};
use tracing::debug;
use wirecodec_endian::{ByteOrder, Endianness, Primitive};

use crate::buffer::Buffer;
use crate::config::CodecConfig;
use crate::error::Result;
use crate::wire::Encode;

/// Appends values to a byte sequence in caller order.
///
/// Every append returns the encoder so calls chain. The order of the calls
/// is the only contract a matching [`Decoder`](crate::Decoder) relies on.
///
/// ```
/// use wirecodec::{Encoder, Endianness};
///
/// let mut enc = Encoder::new(Endianness::Big);
/// enc.write(42i32).write_str("test")?.write(2.5f32).write(true);
/// assert_eq!(enc.len(), 4 + 8 + 4 + 1);
/// # Ok::<(), wirecodec::CodecError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    buf: Buffer,
}

impl Encoder {
    /// Create an encoder with default configuration and the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        Self::with_config(CodecConfig::default().with_endianness(endianness))
    }

    /// Create an encoder with explicit configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        let buf = Buffer::with_capacity(config.endianness, config.initial_capacity);
        debug!(
            order = %buf.byte_order(),
            capacity = config.initial_capacity,
            "created encoder"
        );
        Self { buf }
    }

    /// Append a fixed-width value.
    pub fn write<T: Primitive>(&mut self, value: T) -> &mut Self {
        self.buf.write(value);
        self
    }

    /// Append a length-prefixed string.
    pub fn write_str(&mut self, s: &str) -> Result<&mut Self> {
        self.buf.write_string(s)?;
        Ok(self)
    }

    /// Append length-prefixed opaque bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        self.buf.write_bytes(bytes)?;
        Ok(self)
    }

    /// Append a fixed-size array.
    pub fn write_array<T: Encode, const N: usize>(
        &mut self,
        array: &[T; N],
    ) -> Result<&mut Self> {
        self.buf.write_array(array.as_slice())?;
        Ok(self)
    }

    /// Append a dynamically sized array.
    pub fn write_slice<T: Encode>(&mut self, elements: &[T]) -> Result<&mut Self> {
        self.buf.write_array(elements)?;
        Ok(self)
    }

    /// Append any value with a wire rule.
    pub fn put<T: Encode + ?Sized>(&mut self, value: &T) -> Result<&mut Self> {
        value.encode(&mut self.buf)?;
        Ok(self)
    }

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// An owned copy of the bytes written so far.
    pub fn to_vec(&self) -> Vec<u8> {
        self.buf.to_vec()
    }

    /// Consume the encoder and return its bytes.
    pub fn into_bytes(self) -> Bytes {
        self.buf.into_bytes()
    }

    /// Consume the encoder and return its bytes without freezing them.
    ///
    /// The result can be handed straight to [`Decoder::new`](crate::Decoder::new).
    pub fn into_bytes_mut(self) -> BytesMut {
        self.buf.into_inner()
    }

    pub fn len(&self) -> usize {
        self.buf.size()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.buf.byte_order()
    }

    /// Borrow the underlying buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buf
    }

    /// Discard everything written so the encoder can be reused.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::with_config(CodecConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_writes_keep_order() {
        let mut enc = Encoder::new(Endianness::Little);
        enc.write(1u8).write(2u16).write_str("x").unwrap().write(3u8);
        assert_eq!(
            enc.as_bytes(),
            [0x01, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00, b'x', 0x03]
        );
    }

    #[test]
    fn fixed_and_dynamic_arrays_share_layout() {
        let mut fixed = Encoder::new(Endianness::Big);
        fixed.write_array(&[1i32, 2, 3]).unwrap();

        let mut dynamic = Encoder::new(Endianness::Big);
        dynamic.write_slice(&vec![1i32, 2, 3]).unwrap();

        assert_eq!(fixed.as_bytes(), dynamic.as_bytes());
        assert_eq!(fixed.len(), 4 + 3 * 4);
    }

    #[test]
    fn put_accepts_unsized_values() -> Result<()> {
        let mut enc = Encoder::new(Endianness::Big);
        enc.put("ab")?.put(&[7u8, 8][..])?.put(&-1i64)?;
        assert_eq!(enc.len(), 6 + 6 + 8);
        Ok(())
    }

    #[test]
    fn write_bytes_layout() {
        let mut enc = Encoder::new(Endianness::Big);
        enc.write_bytes(&[0xDE, 0xAD]).unwrap();
        assert_eq!(enc.as_bytes(), [0, 0, 0, 2, 0xDE, 0xAD]);
    }

    #[test]
    fn clear_allows_reuse() {
        let mut enc = Encoder::new(Endianness::Native);
        enc.write(10u32);
        assert!(!enc.is_empty());

        enc.clear();
        assert!(enc.is_empty());

        enc.write(11u8);
        assert_eq!(enc.to_vec(), vec![11]);
    }

    #[test]
    fn default_is_native_order() {
        let enc = Encoder::default();
        assert_eq!(enc.byte_order(), ByteOrder::native());
        assert!(enc.buffer().is_empty());
    }

    #[test]
    fn into_bytes_variants_agree() {
        let mut enc = Encoder::new(Endianness::Little);
        enc.write(0xBEEFu16);
        let frozen = enc.clone().into_bytes();
        let unfrozen = enc.into_bytes_mut();
        assert_eq!(frozen.as_ref(), unfrozen.as_ref());
        assert_eq!(frozen.as_ref(), [0xEF, 0xBE]);
    }
}
