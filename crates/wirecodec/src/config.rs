use wirecodec_endian::Endianness;

/// Default byte capacity reserved by a fresh encoder.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Settings shared by encoders and decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CodecConfig {
    /// Byte order for every multi-byte value and length prefix. Default: native.
    pub endianness: Endianness,
    /// Bytes reserved up front when encoding. Ignored by decoders.
    pub initial_capacity: usize,
}

impl CodecConfig {
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            endianness: Endianness::Native,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}
