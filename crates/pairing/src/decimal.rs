//! Serde helpers that encode base-field integers as decimal strings.
//!
//! Use with `#[serde(with = "crate::decimal")]` on `BigInt` fields.

use num::BigInt;
use serde::{de::Error, Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_str_radix(10))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
    let s = String::deserialize(deserializer)?;
    BigInt::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| D::Error::custom(format!("invalid decimal integer: {s:?}")))
}
