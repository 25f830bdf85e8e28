//! Operation selectors
//!
//! A selector is the fixed-width identifier of a registry operation: the
//! first four bytes of the Keccak-256 digest of its canonical signature
//! string, e.g. `"transfer(address,uint256)"` -> `0xa9059cbb`. Two
//! selectors are equal iff they were derived from the same signature;
//! collision resistance is inherited from the hash function.

use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};
use std::convert::TryInto;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

pub const SELECTOR_SIZE: usize = 4;

#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Selector([u8; SELECTOR_SIZE]);

impl Selector {
    pub const fn new(bytes: [u8; SELECTOR_SIZE]) -> Self {
        Selector(bytes)
    }

    /// Derive the selector of a canonical signature string
    pub fn from_signature(signature: &str) -> Self {
        let digest = Keccak256::digest(signature.as_bytes());
        let mut bytes = [0u8; SELECTOR_SIZE];
        bytes.copy_from_slice(&digest[..SELECTOR_SIZE]);
        Selector(bytes)
    }

    /// Extract the selector from a raw call payload.
    /// Returns `None` when the payload is too short to carry one.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() < SELECTOR_SIZE {
            return None;
        }
        let mut bytes = [0u8; SELECTOR_SIZE];
        bytes.copy_from_slice(&payload[..SELECTOR_SIZE]);
        Some(Selector(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SELECTOR_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Selector {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| "Invalid hex string")?;
        let bytes: [u8; SELECTOR_SIZE] = bytes.try_into().map_err(|_| "Invalid selector")?;
        Ok(Selector::new(bytes))
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Selector::from_str(&hex).map_err(SerdeError::custom)
    }
}
