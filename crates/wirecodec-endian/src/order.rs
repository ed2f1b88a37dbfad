use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{EndianError, Result};

/// Multi-byte pattern whose in-memory layout reveals the native order.
const PROBE: u32 = 0x1234_5678;

static NATIVE: OnceLock<ByteOrder> = OnceLock::new();

/// Byte order requested by a caller.
///
/// `Native` is only a request: it is turned into a concrete [`ByteOrder`]
/// by [`Endianness::resolve`] and never stored unresolved by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Endianness {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
    /// Whatever order the running system uses.
    #[default]
    Native,
}

impl Endianness {
    /// Resolve the request to a concrete byte order.
    pub fn resolve(self) -> ByteOrder {
        match self {
            Endianness::Little => ByteOrder::Little,
            Endianness::Big => ByteOrder::Big,
            Endianness::Native => ByteOrder::native(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Endianness::Little => "little",
            Endianness::Big => "big",
            Endianness::Native => "native",
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endianness {
    type Err = EndianError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(Endianness::Little),
            "big" | "be" | "network" => Ok(Endianness::Big),
            "native" | "ne" => Ok(Endianness::Native),
            _ => Err(EndianError::UnknownOrder(s.to_string())),
        }
    }
}

impl From<ByteOrder> for Endianness {
    fn from(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Little => Endianness::Little,
            ByteOrder::Big => Endianness::Big,
        }
    }
}

/// A resolved, concrete byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// The running system's byte order.
    ///
    /// Detected on first use by inspecting how a known 4-byte pattern is laid
    /// out in memory, then cached for the life of the process.
    pub fn native() -> ByteOrder {
        *NATIVE.get_or_init(detect_native)
    }

    /// Returns true if this order matches the running system's order.
    pub fn is_native(self) -> bool {
        self == Self::native()
    }

    /// The other byte order.
    pub fn reversed(self) -> ByteOrder {
        match self {
            ByteOrder::Little => ByteOrder::Big,
            ByteOrder::Big => ByteOrder::Little,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn detect_native() -> ByteOrder {
    let order = if PROBE.to_ne_bytes()[0] == 0x78 {
        ByteOrder::Little
    } else {
        ByteOrder::Big
    };
    debug!(%order, "resolved native byte order");
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_matches_target() {
        let expected = if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        };
        assert_eq!(ByteOrder::native(), expected);
        assert!(expected.is_native());
        assert!(!expected.reversed().is_native());
    }

    #[test]
    fn native_is_stable_across_calls() {
        assert_eq!(ByteOrder::native(), ByteOrder::native());
    }

    #[test]
    fn resolve_never_yields_unresolved() {
        assert_eq!(Endianness::Little.resolve(), ByteOrder::Little);
        assert_eq!(Endianness::Big.resolve(), ByteOrder::Big);
        assert_eq!(Endianness::Native.resolve(), ByteOrder::native());
    }

    #[test]
    fn default_is_native() {
        assert_eq!(Endianness::default(), Endianness::Native);
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("little".parse::<Endianness>().unwrap(), Endianness::Little);
        assert_eq!("LE".parse::<Endianness>().unwrap(), Endianness::Little);
        assert_eq!("Big".parse::<Endianness>().unwrap(), Endianness::Big);
        assert_eq!("network".parse::<Endianness>().unwrap(), Endianness::Big);
        assert_eq!("native".parse::<Endianness>().unwrap(), Endianness::Native);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "middle".parse::<Endianness>().unwrap_err();
        assert_eq!(err, EndianError::UnknownOrder("middle".to_string()));
        assert!(err.to_string().contains("middle"));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for e in [Endianness::Little, Endianness::Big, Endianness::Native] {
            assert_eq!(e.to_string().parse::<Endianness>().unwrap(), e);
        }
    }

    #[test]
    fn byte_order_converts_to_request() {
        assert_eq!(Endianness::from(ByteOrder::Big), Endianness::Big);
        assert_eq!(Endianness::from(ByteOrder::Little).resolve(), ByteOrder::Little);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Endianness::Big).unwrap();
        assert_eq!(json, "\"big\"");
        let order: ByteOrder = serde_json::from_str("\"little\"").unwrap();
        assert_eq!(order, ByteOrder::Little);
    }
}
