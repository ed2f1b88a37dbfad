/// Errors that can occur when interpreting byte order settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndianError {
    /// The byte order name is not one of `little`, `big` or `native`.
    #[error("unknown byte order {0:?} (expected \"little\", \"big\" or \"native\")")]
    UnknownOrder(String),
}

pub type Result<T> = std::result::Result<T, EndianError>;
