/// Errors that can occur while encoding or decoding values.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A fixed-width read needs more bytes than remain after the cursor.
    #[error("buffer underflow (need {needed} bytes, {remaining} remaining)")]
    Underflow { needed: usize, remaining: usize },

    /// A string length prefix points past the end of the buffer.
    #[error("string extends beyond buffer (length {length}, {remaining} remaining)")]
    StringUnderflow { length: usize, remaining: usize },

    /// A fixed-size array carries a different element count than expected.
    #[error("array size mismatch (expected {expected}, got {actual})")]
    ArraySizeMismatch { expected: usize, actual: usize },

    /// A string or array is too long for its 4-byte length prefix.
    #[error("length too large for prefix ({len}, max {max})")]
    LengthOverflow { len: usize, max: usize },

    /// A decoded string is not valid UTF-8.
    #[error("string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
