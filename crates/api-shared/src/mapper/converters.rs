//! Scalar converters for binary fields.
//!
//! The persistence side holds binary content as [`Blob`]; DTOs hold plain byte
//! vectors, which travel through JSON as standard base64 strings. No current
//! catalogue record has a binary field.

use base64::{engine::general_purpose, Engine as _};
use hms_core::Blob;

pub fn blob_to_bytes(blob: Option<&Blob>) -> Option<Vec<u8>> {
    blob.map(|b| b.as_bytes().to_vec())
}

pub fn bytes_to_blob(bytes: Option<&[u8]>) -> Option<Blob> {
    bytes.map(Blob::from_bytes)
}

/// `#[serde(with = "base64_bytes")]` for `Option<Vec<u8>>` DTO fields.
pub mod base64_bytes {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => serializer.serialize_str(&general_purpose::STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = Option::<String>::deserialize(deserializer)?;
        encoded
            .map(|s| {
                general_purpose::STANDARD
                    .decode(s.as_bytes())
                    .map_err(serde::de::Error::custom)
            })
            .transpose()
    }
}
