use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

/// Document identifier used by every collection in the store
///
/// 12 bytes, rendered as 24 lowercase hex characters:
/// - bytes 0..4: UNIX seconds (big-endian)
/// - bytes 4..9: per-process random value
/// - bytes 9..12: wrapping counter (big-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

/// Error returned when text is not a well-formed identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier '{0}': expected 24 hex characters")]
pub struct ParseObjectIdError(pub String);

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

impl ObjectId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        let secs = chrono::Utc::now().timestamp() as u32;

        let process = PROCESS_UNIQUE.get_or_init(|| {
            let random = uuid::Uuid::new_v4();
            let mut bytes = [0u8; 5];
            bytes.copy_from_slice(&random.as_bytes()[..5]);
            bytes
        });

        let counter = COUNTER.get_or_init(|| {
            let random = uuid::Uuid::new_v4();
            let b = random.as_bytes();
            AtomicU32::new(u32::from_be_bytes([0, b[13], b[14], b[15]]))
        });
        let count = counter.fetch_add(1, Ordering::SeqCst) & 0x00ff_ffff;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(process);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Check whether `s` would parse, without allocating
    pub fn is_valid(s: &str) -> bool {
        s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(ParseObjectIdError(s.to_string()));
        }

        let mut bytes = [0u8; 12];
        for (i, pair) in s.as_bytes().chunks_exact(2).enumerate() {
            // Both bytes are ASCII hex digits, checked above
            let pair = std::str::from_utf8(pair).map_err(|_| ParseObjectIdError(s.to_string()))?;
            bytes[i] =
                u8::from_str_radix(pair, 16).map_err(|_| ParseObjectIdError(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
