//! Todo entity and its document identifier.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDateTime;

/// Length of the identifier in raw bytes.
const ID_BYTES: usize = 12;

/// Length of the identifier in its hex string form.
const ID_HEX_LEN: usize = 2 * ID_BYTES;

/// Unique identifier for a [`Todo`] document.
///
/// The store's native identifier format: 12 bytes rendered as 24 lowercase
/// hex characters. Generated identifiers are composed of a 4-byte unix
/// timestamp prefix, a 5-byte per-process random component, and a 3-byte
/// incrementing counter, so ids created by the same process are unique and
/// roughly time-ordered.
///
/// Identifiers are immutable after creation; parsing accepts exactly 24 hex
/// characters and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId([u8; ID_BYTES]);

/// Random component shared by all ids generated in this process.
static PROCESS_RANDOM: OnceLock<[u8; 5]> = OnceLock::new();

/// Counter for the trailing 3 bytes, seeded randomly at first use.
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

impl TodoId {
    /// Generate a fresh identifier.
    ///
    /// # Returns
    /// A new id that is unique within this process and distinct across
    /// processes with overwhelming probability.
    pub fn generate() -> Self {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);

        let random = PROCESS_RANDOM.get_or_init(|| {
            let bytes = uuid::Uuid::new_v4().into_bytes();
            [bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]]
        });

        let counter = COUNTER.get_or_init(|| {
            let bytes = uuid::Uuid::new_v4().into_bytes();
            AtomicU32::new(u32::from_be_bytes([0, bytes[5], bytes[6], bytes[7]]))
        });
        let count = counter.fetch_add(1, Ordering::Relaxed);

        let mut raw = [0u8; ID_BYTES];
        raw[0..4].copy_from_slice(&seconds.to_be_bytes());
        raw[4..9].copy_from_slice(random);
        raw[9..12].copy_from_slice(&count.to_be_bytes()[1..4]);
        Self(raw)
    }

    /// Raw bytes of the identifier.
    pub fn as_bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for TodoId {
    type Err = String;

    /// Parse an identifier from its 24-hex-character string form.
    ///
    /// # Errors
    /// Returns an error if the input is not exactly 24 hex characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_HEX_LEN {
            return Err(format!(
                "invalid identifier '{}': expected {} hex characters",
                s, ID_HEX_LEN
            ));
        }
        let decoded =
            hex::decode(s).map_err(|e| format!("invalid identifier '{}': {}", s, e))?;
        let mut raw = [0u8; ID_BYTES];
        raw.copy_from_slice(&decoded);
        Ok(Self(raw))
    }
}

/// A todo item as persisted in the document store.
///
/// `id` is `None` until the store assigns one on first save. `date_time`
/// records when the item was created or last updated; a single field serves
/// both roles and is always server-set.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: Option<TodoId>,
    pub title: String,
    pub description: String,
    pub date_time: NaiveDateTime,
}
