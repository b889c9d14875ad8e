use std::fmt::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use rand::Rng;

/// Store identifiers are opaque strings; the application never parses them.
pub type DbId = String;

/// Length of identifiers produced by [`new_document_id`].
pub const DOCUMENT_ID_LEN: usize = 24;

/// Per-process random bytes, drawn once.
static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();

/// Wrapping 24-bit sequence, seeded randomly on first use.
static SEQUENCE: OnceLock<AtomicU32> = OnceLock::new();

/// Generate a new 24-character lowercase hex document identifier.
///
/// Layout (12 bytes): 4-byte big-endian Unix seconds, 5 random bytes fixed
/// for the lifetime of the process, 3-byte wrapping counter. Identifiers
/// created in the same process are unique and sort roughly by creation
/// time.
pub fn new_document_id() -> DbId {
    let secs = chrono::Utc::now().timestamp() as u32;
    let process = PROCESS_UNIQUE.get_or_init(|| rand::rng().random());
    let sequence = SEQUENCE
        .get_or_init(|| AtomicU32::new(rand::rng().random()))
        .fetch_add(1, Ordering::Relaxed)
        & 0x00ff_ffff;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..9].copy_from_slice(process);
    bytes[9..].copy_from_slice(&sequence.to_be_bytes()[1..]);

    let mut id = String::with_capacity(DOCUMENT_ID_LEN);
    for b in bytes {
        // Writing to a String cannot fail.
        let _ = write!(id, "{b:02x}");
    }
    id
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn document_id_is_24_lowercase_hex_chars() {
        let id = new_document_id();
        assert_eq!(id.len(), DOCUMENT_ID_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn document_ids_are_unique_within_process() {
        let ids: HashSet<DbId> = (0..10_000).map(|_| new_document_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn document_id_starts_with_current_timestamp() {
        let before = chrono::Utc::now().timestamp() as u32;
        let id = new_document_id();
        let after = chrono::Utc::now().timestamp() as u32;

        let secs = u32::from_str_radix(&id[..8], 16).unwrap();
        assert!(secs >= before && secs <= after);
    }

    #[test]
    fn document_ids_share_process_bytes() {
        let a = new_document_id();
        let b = new_document_id();
        assert_eq!(a[8..18], b[8..18]);
    }
}
