use bytes::{BufMut, Bytes, BytesMut};
use tracing::{debug, trace};
use wirecodec_endian::{ByteOrder, Endianness, Primitive, Word};

use crate::error::{CodecError, Result};
use crate::wire::{Decode, Encode};

/// Size of the length prefix in front of every string and array.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Largest length a prefix can carry.
pub const MAX_LENGTH: usize = u32::MAX as usize;

/// Growable byte sequence with a read cursor and a fixed byte order.
///
/// Writes always append at the end. Reads start at the cursor and move it
/// forward by exactly the number of bytes consumed.
///
/// Wire layout:
/// ```text
/// scalar  : W bytes in the buffer's byte order (W = 1, 2, 4 or 8)
/// string  : ┌──────────────┬──────────────────┐
///           │ Length (4B)  │ Content (Length) │
///           └──────────────┴──────────────────┘
/// array   : ┌──────────────┬──────────────────────────────┐
///           │ Count (4B)   │ Count elements, each encoded │
///           └──────────────┴──────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct Buffer {
    data: BytesMut,
    position: usize,
    order: ByteOrder,
}

impl Buffer {
    /// Create an empty buffer.
    pub fn new(endianness: Endianness) -> Self {
        Self::from_bytes(BytesMut::new(), endianness)
    }

    /// Create an empty buffer with `capacity` bytes reserved.
    pub fn with_capacity(endianness: Endianness, capacity: usize) -> Self {
        Self::from_bytes(BytesMut::with_capacity(capacity), endianness)
    }

    /// Take ownership of existing bytes for reading, cursor at 0.
    pub fn from_bytes(data: BytesMut, endianness: Endianness) -> Self {
        Self {
            data,
            position: 0,
            order: endianness.resolve(),
        }
    }

    pub fn reserve(&mut self, capacity: usize) {
        self.data.reserve(capacity);
    }

    /// Drop all bytes and rewind the cursor.
    pub fn clear(&mut self) {
        debug!(size = self.data.len(), "clearing buffer");
        self.data.clear();
        self.position = 0;
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor. Offsets past the end are accepted; reads from there fail.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Bytes between the cursor and the end (zero if the cursor is past the end).
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.order = endianness.resolve();
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Consume the buffer and return its bytes.
    pub fn into_bytes(self) -> Bytes {
        self.data.freeze()
    }

    pub fn into_inner(self) -> BytesMut {
        self.data
    }

    fn needs_swap(&self) -> bool {
        !self.order.is_native()
    }

    /// Append `value` in machine-native order.
    pub fn append_raw<T: Primitive>(&mut self, value: T) {
        value.to_word().put_ne(&mut self.data);
    }

    /// Read a value stored in machine-native order.
    pub fn read_raw<T: Primitive>(&mut self) -> Result<T> {
        let remaining = self.remaining();
        if remaining < T::WIDTH {
            trace!(
                needed = T::WIDTH,
                remaining,
                position = self.position,
                "fixed-width read past end of buffer"
            );
            return Err(CodecError::Underflow {
                needed: T::WIDTH,
                remaining,
            });
        }

        let end = self.position + T::WIDTH;
        let mut src = &self.data[self.position..end];
        let word = <T::Word as Word>::get_ne(&mut src);
        self.position = end;
        Ok(T::from_word(word))
    }

    /// Append `value` in the buffer's byte order.
    pub fn write<T: Primitive>(&mut self, value: T) {
        let value = if self.needs_swap() { value.swap() } else { value };
        self.append_raw(value);
    }

    /// Read a value stored in the buffer's byte order.
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        let value = self.read_raw::<T>()?;
        Ok(if self.needs_swap() { value.swap() } else { value })
    }

    fn write_length(&mut self, len: usize) -> Result<()> {
        let prefix = u32::try_from(len).map_err(|_| CodecError::LengthOverflow {
            len,
            max: MAX_LENGTH,
        })?;
        self.write(prefix);
        Ok(())
    }

    fn read_length(&mut self) -> Result<usize> {
        Ok(self.read::<u32>()? as usize)
    }

    /// Write a length-prefixed string.
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Write length-prefixed opaque bytes. Same layout as a string.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_length(bytes.len())?;
        self.data.put_slice(bytes);
        Ok(())
    }

    /// Read length-prefixed bytes without interpreting them.
    pub fn read_bytes(&mut self) -> Result<Bytes> {
        let length = self.read_length()?;
        let remaining = self.remaining();
        if length > remaining {
            trace!(
                length,
                remaining,
                position = self.position,
                "string length prefix exceeds buffer"
            );
            return Err(CodecError::StringUnderflow { length, remaining });
        }

        let start = self.position;
        self.position += length;
        Ok(Bytes::copy_from_slice(&self.data[start..self.position]))
    }

    /// Read a length-prefixed string. Content must be valid UTF-8.
    pub fn read_string(&mut self) -> Result<String> {
        let bytes = self.read_bytes()?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    /// Write a count prefix followed by each element.
    pub fn write_array<T: Encode>(&mut self, elements: &[T]) -> Result<()> {
        self.write_length(elements.len())?;
        for element in elements {
            element.encode(self)?;
        }
        Ok(())
    }

    /// Read a count prefix followed by that many elements.
    ///
    /// The count is trusted; a short buffer surfaces as `Underflow` from the
    /// first element that does not fit.
    pub fn read_array<T: Decode>(&mut self) -> Result<Vec<T>> {
        let count = self.read_length()?;
        self.read_elements(count)
    }

    /// Like [`Buffer::read_array`], but the count must equal `expected`.
    pub fn read_array_exact<T: Decode>(&mut self, expected: usize) -> Result<Vec<T>> {
        let count = self.read_length()?;
        if count != expected {
            trace!(expected, actual = count, "array count mismatch");
            return Err(CodecError::ArraySizeMismatch {
                expected,
                actual: count,
            });
        }
        self.read_elements(count)
    }

    fn read_elements<T: Decode>(&mut self, count: usize) -> Result<Vec<T>> {
        // Every element takes at least one byte, so never reserve past what is left.
        let mut elements = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            elements.push(T::decode(self)?);
        }
        Ok(elements)
    }
}
