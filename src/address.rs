use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryInto;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

pub const ADDRESS_SIZE: usize = 32; // 32 bytes / 256 bits

/// Identity of an addressable entity: an account, a registry contract,
/// a proxy or a governance wrapper.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    pub const fn zero() -> Self {
        Address::new([0; ADDRESS_SIZE])
    }

    pub fn is_zero(&self) -> bool {
        *self == Address::zero()
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| "Invalid hex string")?;
        let bytes: [u8; ADDRESS_SIZE] = bytes.try_into().map_err(|_| "Invalid address")?;
        Ok(Address::new(bytes))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Address::from_str(&hex).map_err(SerdeError::custom)
    }
}
