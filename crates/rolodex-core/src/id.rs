//! Document identifiers.
//!
//! An identifier is 12 bytes rendered as 24 hexadecimal characters:
//!
//! | bytes | content |
//! |-------|---------|
//! | 0..4  | seconds since the Unix epoch, big-endian |
//! | 4..9  | random value chosen once per process |
//! | 9..12 | counter, big-endian, seeded randomly |
//!
//! Identifiers sort roughly by creation time and never collide within a
//! process.

use std::{
  fmt,
  str::FromStr,
  sync::{
    OnceLock,
    atomic::{AtomicU32, Ordering},
  },
};

use chrono::Utc;
use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Error, Result};

/// Number of characters in the textual form of a [`DocumentId`].
pub const ID_LEN: usize = 24;

const COUNTER_MASK: u32 = 0x00ff_ffff;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

/// Returns `true` iff `raw` is exactly [`ID_LEN`] ASCII hex digits.
///
/// Either case is accepted. Nothing else (whitespace, `0x` prefixes, 12-byte
/// binary strings) passes.
pub fn is_valid_id(raw: &str) -> bool {
  raw.len() == ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A store-assigned, immutable document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
  /// Parse the textual form, rejecting anything [`is_valid_id`] rejects.
  pub fn parse(raw: &str) -> Result<Self> {
    if !is_valid_id(raw) {
      return Err(Error::InvalidId(raw.to_owned()));
    }
    let mut bytes = [0u8; 12];
    hex::decode_to_slice(raw, &mut bytes)
      .map_err(|_| Error::InvalidId(raw.to_owned()))?;
    Ok(Self(bytes))
  }

  /// Allocate a fresh identifier.
  pub fn generate() -> Self {
    let secs = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
    let unique = PROCESS_UNIQUE.get_or_init(|| {
      let mut b = [0u8; 5];
      OsRng.fill_bytes(&mut b);
      b
    });
    let count = COUNTER
      .get_or_init(|| AtomicU32::new(OsRng.next_u32() & COUNTER_MASK))
      .fetch_add(1, Ordering::Relaxed)
      & COUNTER_MASK;

    let mut bytes = [0u8; 12];
    bytes[0..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..9].copy_from_slice(unique);
    bytes[9..12].copy_from_slice(&count.to_be_bytes()[1..]);
    Self(bytes)
  }

  pub fn as_bytes(&self) -> &[u8; 12] { &self.0 }

  /// Lowercase 24-character hex form.
  pub fn to_hex(&self) -> String { hex::encode(self.0) }
}

impl fmt::Display for DocumentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_hex())
  }
}

impl FromStr for DocumentId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl Serialize for DocumentId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for DocumentId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Self::parse(&raw).map_err(de::Error::custom)
  }
}
