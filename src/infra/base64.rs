//! Serde helpers for byte fields carried as base64 strings.

use base64::prelude::*;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(v: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&BASE64_STANDARD.encode(v))
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
    let v = String::deserialize(d)?;

    BASE64_STANDARD
        .decode(v.trim().as_bytes())
        .map_err(serde::de::Error::custom)
}
