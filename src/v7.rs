//! UUIDv7 field semantics: the directly embedded Unix millisecond timestamp.

use chrono::{DateTime, Utc};

use crate::Uuid;

/// Recovers the embedded timestamp of a v7 UUID.
///
/// The top 48 bits are the Unix timestamp in milliseconds, so no inversion
/// arithmetic is needed, unlike v1's tick encoding.
pub fn extract_timestamp(uuid: &Uuid) -> DateTime<Utc> {
    let mut unix_ms = 0u64;
    for &byte in &uuid.as_bytes()[..6] {
        unix_ms = (unix_ms << 8) | byte as u64;
    }
    DateTime::from_timestamp_millis(unix_ms as i64)
        .expect("48-bit millisecond count stays within the chrono-representable range")
}
