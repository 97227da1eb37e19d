use crate::error::ModelError;
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{
    fmt::{self, Write},
    str::FromStr,
    sync::{
        OnceLock,
        atomic::{AtomicU32, Ordering},
    },
};
use uuid::Uuid;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: AtomicU32 = AtomicU32::new(0);

/// 12-byte document identifier, rendered as 24 hex characters.
///
/// Layout: 4-byte big-endian seconds timestamp, 5 process-unique bytes,
/// 3-byte big-endian counter. Ordering is byte-wise, so ids minted by one
/// process sort in creation order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Smallest possible id, used as the "before everything" anchor.
    pub const MIN: ObjectId = ObjectId([0x00; 12]);

    /// Largest possible id, used as the "after everything" anchor.
    pub const MAX: ObjectId = ObjectId([0xff; 12]);

    pub fn new() -> Self {
        let mut bytes = [0u8; 12];

        let secs = Utc::now().timestamp().clamp(0, u32::MAX as i64) as u32;
        bytes[..4].copy_from_slice(&secs.to_be_bytes());

        let process = PROCESS_UNIQUE.get_or_init(|| {
            let mut unique = [0u8; 5];
            unique.copy_from_slice(&Uuid::new_v4().as_bytes()[..5]);
            unique
        });
        bytes[4..9].copy_from_slice(process);

        let count = COUNTER.fetch_add(1, Ordering::SeqCst) & 0x00ff_ffff;
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        ObjectId(bytes)
    }

    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        ObjectId(bytes)
    }

    pub const fn bytes(&self) -> [u8; 12] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(24);
        for b in self.0 {
            // Writing into a String cannot fail.
            let _ = write!(&mut out, "{b:02x}");
        }
        out
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ObjectId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
            return Err(ModelError::InvalidObjectIdChar(c));
        }
        if s.len() != 24 {
            return Err(ModelError::InvalidObjectIdLength(s.len()));
        }

        let mut bytes = [0u8; 12];
        for (i, pair) in s.as_bytes().chunks(2).enumerate() {
            let hi = hex_digit(pair[0] as char)?;
            let lo = hex_digit(pair[1] as char)?;
            bytes[i] = (hi << 4) | lo;
        }

        Ok(ObjectId(bytes))
    }
}

/// Only the canonical lowercase form is accepted.
fn hex_digit(c: char) -> Result<u8, ModelError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        _ => Err(ModelError::InvalidObjectIdChar(c)),
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
