//! Width-dispatched byte swapping.
//!
//! Every supported primitive maps onto an unsigned [`Word`] of the same
//! storage width. Swapping always happens on that word, so signed integers,
//! floats and booleans share one code path per width and never go through
//! value arithmetic.

use std::fmt;

use bytes::{Buf, BufMut};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer holding the raw bit pattern of a 1, 2, 4 or 8 byte value.
pub trait Word: Copy + Eq + fmt::Debug + sealed::Sealed {
    /// Storage width in bytes.
    const WIDTH: usize;

    /// Reverse the byte order. A no-op for 1-byte words.
    fn swap(self) -> Self;

    /// Append the word to `dst` in machine-native order.
    fn put_ne<B: BufMut>(self, dst: &mut B);

    /// Take one word from `src` in machine-native order.
    ///
    /// `src` must hold at least [`Word::WIDTH`] bytes.
    fn get_ne<B: Buf>(src: &mut B) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty => $put:ident, $get:ident);* $(;)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Word for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn swap(self) -> Self {
                self.swap_bytes()
            }

            #[inline]
            fn put_ne<B: BufMut>(self, dst: &mut B) {
                dst.$put(self)
            }

            #[inline]
            fn get_ne<B: Buf>(src: &mut B) -> Self {
                src.$get()
            }
        }
    )*};
}

impl_word! {
    u8 => put_u8, get_u8;
    u16 => put_u16_ne, get_u16_ne;
    u32 => put_u32_ne, get_u32_ne;
    u64 => put_u64_ne, get_u64_ne;
}

/// A fixed-width value the codec can write and read.
///
/// Sealed: implemented for `u8 i8 u16 i16 u32 i32 u64 i64 f32 f64 bool`.
pub trait Primitive: Copy + fmt::Debug + sealed::Sealed + 'static {
    /// Same-width unsigned integer carrying this value's bits.
    type Word: Word;

    /// Storage width in bytes.
    const WIDTH: usize = std::mem::size_of::<Self>();

    fn to_word(self) -> Self::Word;

    fn from_word(word: Self::Word) -> Self;

    /// Reverse this value's byte order through its bit pattern.
    #[inline]
    fn swap(self) -> Self {
        Self::from_word(self.to_word().swap())
    }
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {$(
        impl Primitive for $ty {
            type Word = $ty;

            #[inline]
            fn to_word(self) -> $ty {
                self
            }

            #[inline]
            fn from_word(word: $ty) -> Self {
                word
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($ty:ty => $word:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Primitive for $ty {
            type Word = $word;

            #[inline]
            fn to_word(self) -> $word {
                self as $word
            }

            #[inline]
            fn from_word(word: $word) -> Self {
                word as $ty
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty => $word:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Primitive for $ty {
            type Word = $word;

            #[inline]
            fn to_word(self) -> $word {
                self.to_bits()
            }

            #[inline]
            fn from_word(word: $word) -> Self {
                <$ty>::from_bits(word)
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
impl_float!(f32 => u32, f64 => u64);

impl sealed::Sealed for bool {}

/// `true` is stored as 0x01; any nonzero byte reads back as `true`.
impl Primitive for bool {
    type Word = u8;

    #[inline]
    fn to_word(self) -> u8 {
        self as u8
    }

    #[inline]
    fn from_word(word: u8) -> Self {
        word != 0
    }
}

/// Reverse the byte order of `value`.
#[inline]
pub fn swap<T: Primitive>(value: T) -> T {
    value.swap()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn widths_match_words() {
        fn check<T: Primitive>(width: usize) {
            assert_eq!(T::WIDTH, width);
            assert_eq!(<T::Word as Word>::WIDTH, width);
        }
        check::<u8>(1);
        check::<i8>(1);
        check::<bool>(1);
        check::<u16>(2);
        check::<i16>(2);
        check::<u32>(4);
        check::<i32>(4);
        check::<f32>(4);
        check::<u64>(8);
        check::<i64>(8);
        check::<f64>(8);
    }

    #[test]
    fn single_byte_is_noop() {
        assert_eq!(swap(0xABu8), 0xAB);
        assert_eq!(swap(-42i8), -42);
        assert!(swap(true));
    }

    #[test]
    fn swaps_multi_byte_integers() {
        assert_eq!(swap(0x1234u16), 0x3412);
        assert_eq!(swap(0x1234_5678u32), 0x7856_3412);
        assert_eq!(swap(0x0102_0304_0506_0708u64), 0x0807_0605_0403_0201);
    }

    #[test]
    fn swap_ignores_signedness() {
        assert_eq!(swap(-2i16), 0xFEFFu16 as i16);
        assert_eq!(swap(1i32), 0x0100_0000);
        assert_eq!(swap(i64::MIN) as u64, 0x80);
    }

    #[test]
    fn swaps_float_bit_patterns() {
        let value = 3.14159f32;
        let swapped = swap(value);
        assert_eq!(swapped.to_bits(), value.to_bits().swap_bytes());
        assert_eq!(swap(swapped).to_bits(), value.to_bits());

        let value = 2.718281828459045f64;
        assert_eq!(swap(value).to_bits(), value.to_bits().swap_bytes());
    }

    #[test]
    fn swapped_nan_keeps_bits() {
        // A swapped pattern may land on a NaN payload; bits must survive.
        let value = f32::from_bits(0x0000_C07F);
        let swapped = swap(value);
        assert!(swapped.is_nan());
        assert_eq!(swap(swapped).to_bits(), 0x0000_C07F);
    }

    #[test]
    fn put_and_get_native_words() {
        let mut buf: Vec<u8> = Vec::new();
        0x1234_5678u32.put_ne(&mut buf);
        assert_eq!(buf, 0x1234_5678u32.to_ne_bytes());

        let mut src = buf.as_slice();
        assert_eq!(u32::get_ne(&mut src), 0x1234_5678);
        assert!(src.is_empty());
    }

    #[test]
    fn bool_reads_any_nonzero_as_true() {
        assert!(!bool::from_word(0));
        assert!(bool::from_word(1));
        assert!(bool::from_word(0xFF));
        assert_eq!(true.to_word(), 1);
    }

    proptest! {
        #[test]
        fn prop_swap_is_involution_u64(x in any::<u64>()) {
            prop_assert_eq!(swap(swap(x)), x);
        }

        #[test]
        fn prop_swap_is_involution_i32(x in any::<i32>()) {
            prop_assert_eq!(swap(swap(x)), x);
        }

        #[test]
        fn prop_swap_f64_matches_bits(x in any::<f64>()) {
            prop_assert_eq!(swap(x).to_bits(), x.to_bits().swap_bytes());
        }

        #[test]
        fn prop_swap_matches_byte_reversal(x in any::<u32>()) {
            let mut bytes = x.to_ne_bytes();
            bytes.reverse();
            prop_assert_eq!(swap(x), u32::from_ne_bytes(bytes));
        }
    }
}
