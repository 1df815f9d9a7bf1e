//! Serialize byte buffers as Z85 strings.
//!
//! ```
//! # #[cfg(feature = "serde")] {
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Frame {
//!     #[serde(with = "z85::serde")]
//!     payload: Vec<u8>,
//! }
//!
//! let frame = Frame { payload: vec![0x86, 0x4f, 0xd2, 0x6f] };
//! let json = serde_json::to_string(&frame).unwrap();
//! assert_eq!(json, r#"{"payload":"Hello0rr91"}"#);
//!
//! let actual: Frame = serde_json::from_str(&json).unwrap();
//! assert_eq!(actual, frame);
//! # }
//! ```

use ::serde::de::{self, Deserializer, Visitor};
use ::serde::Serializer;
use std::fmt;

/// Serializes the bytes as a Z85 encoded string
pub fn serialize<T, S>(data: T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    serializer.serialize_str(&crate::encode_to_string(data))
}

/// Deserializes a Z85 encoded string into bytes
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(Z85Visitor)
}

struct Z85Visitor;

impl<'de> Visitor<'de> for Z85Visitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a z85 encoded string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        crate::decode_str(v).map_err(de::Error::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        crate::decode(v).map_err(de::Error::custom)
    }
}
