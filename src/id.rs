use crate::layout::unpack_counter;

/// Represents a 128-bit time-ordered identifier in the UUID version 7 layout.
///
/// The derived ordering compares the underlying octets lexicographically, which is the same as
/// comparing the values as big-endian unsigned 128-bit integers.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Identifier([u8; 16]);

impl Identifier {
    /// Nil identifier (all bits cleared)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max identifier (all bits set)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 48-bit `unix_ts_ms` field.
    pub const fn unix_ts_ms(&self) -> u64 {
        let b = &self.0;
        (b[0] as u64) << 40
            | (b[1] as u64) << 32
            | (b[2] as u64) << 24
            | (b[3] as u64) << 16
            | (b[4] as u64) << 8
            | b[5] as u64
    }

    /// Returns the 18-bit dedicated counter.
    pub const fn counter(&self) -> u32 {
        unpack_counter(self.0[6], self.0[7], self.0[8])
    }

    /// Returns the 4-bit version field.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns `true` if the variant field holds `10`.
    pub const fn is_rfc_variant(&self) -> bool {
        self.0[8] >> 6 == 0b10
    }
}

impl From<Identifier> for [u8; 16] {
    fn from(src: Identifier) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Identifier {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Identifier> for u128 {
    fn from(src: Identifier) -> Self {
        u128::from_be_bytes(src.0)
    }
}

impl From<u128> for Identifier {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Identifier;

    impl From<Identifier> for uuid::Uuid {
        fn from(src: Identifier) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Identifier {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Identifier;
    use core::fmt;
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Identifier {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(self.as_bytes())
        }
    }

    impl<'de> serde::Deserialize<'de> for Identifier {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_bytes(VisitorImpl)
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Identifier;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a 16-byte identifier")
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(|_| de::Error::invalid_length(value.len(), &self))
        }
    }

}
