//! Per-type wire rules.
//!
//! Scalars use their fixed width, strings and byte blobs a length prefix,
//! arrays a count prefix followed by each element's own rule. Because the
//! rules nest, arrays of strings and arrays of arrays need no extra code.

use bytes::Bytes;

use crate::buffer::Buffer;
use crate::error::{CodecError, Result};

/// A value that can be appended to a [`Buffer`].
pub trait Encode {
    fn encode(&self, buf: &mut Buffer) -> Result<()>;
}

/// A value that can be read back from a [`Buffer`].
pub trait Decode: Sized {
    fn decode(buf: &mut Buffer) -> Result<Self>;
}

macro_rules! impl_primitive_wire {
    ($($ty:ty),*) => {$(
        impl Encode for $ty {
            #[inline]
            fn encode(&self, buf: &mut Buffer) -> Result<()> {
                buf.write(*self);
                Ok(())
            }
        }

        impl Decode for $ty {
            #[inline]
            fn decode(buf: &mut Buffer) -> Result<Self> {
                buf.read()
            }
        }
    )*};
}

impl_primitive_wire!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, bool);

impl Encode for str {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        buf.write_string(self)
    }
}

impl Encode for String {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        buf.write_string(self)
    }
}

impl Decode for String {
    fn decode(buf: &mut Buffer) -> Result<Self> {
        buf.read_string()
    }
}

impl Encode for Bytes {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        buf.write_bytes(self)
    }
}

impl Decode for Bytes {
    fn decode(buf: &mut Buffer) -> Result<Self> {
        buf.read_bytes()
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        buf.write_array(self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        buf.write_array(self)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(buf: &mut Buffer) -> Result<Self> {
        buf.read_array()
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        buf.write_array(self.as_slice())
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(buf: &mut Buffer) -> Result<Self> {
        let elements = buf.read_array_exact::<T>(N)?;
        <[T; N]>::try_from(elements).map_err(|rest| CodecError::ArraySizeMismatch {
            expected: N,
            actual: rest.len(),
        })
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        (**self).encode(buf)
    }
}
