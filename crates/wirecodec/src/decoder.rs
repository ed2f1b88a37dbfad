use bytes::{Bytes, BytesMut};
use tracing::debug;
use wirecodec_endian::{ByteOrder, Endianness, Primitive};

use crate::buffer::Buffer;
use crate::config::CodecConfig;
use crate::error::Result;
use crate::wire::Decode;

/// Reads values back from a byte sequence in the order they were written.
///
/// The decoder owns its input. Values must be extracted in exactly the order
/// and with exactly the types the writer used; nothing in the bytes says what
/// comes next. Use [`Decoder::has_more`] or [`Decoder::remaining`] to check for
/// trailing data.
///
/// After any error the cursor position is unspecified and the decoder should
/// be dropped.
#[derive(Debug, Clone)]
pub struct Decoder {
    buf: Buffer,
}

impl Decoder {
    /// Take ownership of `data` and decode it with the given byte order.
    pub fn new(data: BytesMut, endianness: Endianness) -> Self {
        Self::with_config(data, CodecConfig::default().with_endianness(endianness))
    }

    /// Copy `data` into a new decoder.
    pub fn from_slice(data: &[u8], endianness: Endianness) -> Self {
        Self::new(BytesMut::from(data), endianness)
    }

    /// Create a decoder with explicit configuration.
    pub fn with_config(data: BytesMut, config: CodecConfig) -> Self {
        let buf = Buffer::from_bytes(data, config.endianness);
        debug!(order = %buf.byte_order(), size = buf.size(), "created decoder");
        Self { buf }
    }

    /// Extract a fixed-width value.
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        self.buf.read()
    }

    /// Extract a length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<String> {
        self.buf.read_string()
    }

    /// Extract length-prefixed bytes without interpreting them.
    pub fn read_bytes(&mut self) -> Result<Bytes> {
        self.buf.read_bytes()
    }

    /// Extract an array whose element count must be exactly `N`.
    ///
    /// Fails with [`CodecError::ArraySizeMismatch`](crate::CodecError::ArraySizeMismatch)
    /// when the encoded count differs.
    pub fn read_fixed_array<T: Decode, const N: usize>(&mut self) -> Result<[T; N]> {
        <[T; N]>::decode(&mut self.buf)
    }

    /// Extract an array of whatever length the data declares.
    pub fn read_dynamic_array<T: Decode>(&mut self) -> Result<Vec<T>> {
        self.buf.read_array()
    }

    /// Extract any value with a wire rule.
    pub fn decode<T: Decode>(&mut self) -> Result<T> {
        T::decode(&mut self.buf)
    }

    /// Extract into `out` and return the decoder for chaining.
    ///
    /// ```
    /// use wirecodec::{Decoder, Encoder, Endianness};
    ///
    /// let mut enc = Encoder::new(Endianness::Little);
    /// enc.write(7u16).write_str("seven")?;
    ///
    /// let mut dec = Decoder::new(enc.into_bytes_mut(), Endianness::Little);
    /// let (mut n, mut s) = (0u16, String::new());
    /// dec.read_into(&mut n)?.read_into(&mut s)?;
    /// assert_eq!((n, s.as_str()), (7, "seven"));
    /// assert!(!dec.has_more());
    /// # Ok::<(), wirecodec::CodecError>(())
    /// ```
    pub fn read_into<T: Decode>(&mut self, out: &mut T) -> Result<&mut Self> {
        *out = T::decode(&mut self.buf)?;
        Ok(self)
    }

    /// Returns true while unread bytes remain.
    pub fn has_more(&self) -> bool {
        self.buf.position() < self.buf.size()
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn position(&self) -> usize {
        self.buf.position()
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.buf.byte_order()
    }

    /// Borrow the underlying buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buf
    }

    /// Consume the decoder and return the buffer, e.g. to reposition it.
    pub fn into_buffer(self) -> Buffer {
        self.buf
    }
}
