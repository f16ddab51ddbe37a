//! UUIDv1 field semantics: Gregorian-epoch timestamp, clock sequence, node id.

use chrono::{DateTime, Utc};

use crate::Uuid;

/// 100-nanosecond ticks between the Gregorian reform date (1582-10-15) and
/// the Unix epoch (1970-01-01).
pub const GREGORIAN_OFFSET_TICKS: u64 = 122_192_928_000_000_000;

/// Converts a Unix millisecond timestamp into the 60-bit tick count v1 embeds.
pub(crate) const fn ticks_from_unix_ms(unix_ms: u64) -> u64 {
    unix_ms * 10_000 + GREGORIAN_OFFSET_TICKS
}

/// Recovers the embedded timestamp of a v1 UUID.
///
/// Reassembles the 60-bit tick count from the `time_low`, `time_mid`, and
/// `time_hi` fields, removes the Gregorian offset, and truncates to Unix
/// milliseconds, the exact inverse of the generation encoding. Ticks before
/// the Unix epoch yield dates before 1970.
pub fn extract_timestamp(uuid: &Uuid) -> DateTime<Utc> {
    let b = uuid.as_bytes();
    let time_low = u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as u64;
    let time_mid = u16::from_be_bytes([b[4], b[5]]) as u64;
    let time_hi = (((b[6] & 0x0f) as u64) << 8) | b[7] as u64;
    let ticks = (time_hi << 48) | (time_mid << 32) | time_low;

    let unix_ms = (ticks as i128 - GREGORIAN_OFFSET_TICKS as i128) / 10_000;
    DateTime::from_timestamp_millis(unix_ms as i64)
        .expect("60-bit tick count stays within the chrono-representable range")
}

/// Recovers the 14-bit clock sequence of a v1 UUID.
pub fn extract_clock_seq(uuid: &Uuid) -> u16 {
    let b = uuid.as_bytes();
    (((b[8] & 0x3f) as u16) << 8) | b[9] as u16
}

/// Recovers the 48-bit node id of a v1 UUID.
///
/// The low bit of the first octet is the multicast bit; generated values set
/// it to mark the node as random rather than a hardware MAC address.
pub fn extract_node(uuid: &Uuid) -> [u8; 6] {
    let b = uuid.as_bytes();
    [b[10], b[11], b[12], b[13], b[14], b[15]]
}

#[cfg(test)]
mod tests {
    use super::{extract_clock_seq, extract_node, extract_timestamp, ticks_from_unix_ms};
    use crate::Uuid;
    use chrono::DateTime;

    /// Extraction inverts the generation encoding exactly
    #[test]
    fn extraction_inverts_the_generation_encoding_exactly() {
        let cases: &[u64] = &[0, 1, 1_000, 1_700_000_000_000, 0x0000_ffff_ffff_ffff >> 4];
        for &unix_ms in cases {
            let e = Uuid::from_fields_v1(
                ticks_from_unix_ms(unix_ms),
                0x1234,
                [0x01, 0x23, 0x45, 0x67, 0x89, 0xab],
            );
            assert_eq!(
                extract_timestamp(&e),
                DateTime::from_timestamp_millis(unix_ms as i64).unwrap()
            );
            assert_eq!(extract_clock_seq(&e), 0x1234);
            assert_eq!(extract_node(&e), [0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);
        }
    }

    /// Recovers dates before the Unix epoch
    #[test]
    fn recovers_dates_before_the_unix_epoch() {
        // one second of ticks short of the Unix epoch
        let ticks = super::GREGORIAN_OFFSET_TICKS - 10_000_000;
        let e = Uuid::from_fields_v1(ticks, 0, [0; 6]);
        assert_eq!(
            extract_timestamp(&e),
            DateTime::from_timestamp_millis(-1_000).unwrap()
        );
    }

    /// Reads the full clock sequence range
    #[test]
    fn reads_the_full_clock_sequence_range() {
        for clock_seq in [0u16, 1, 0x00b4, 0x2abc, (1 << 14) - 1] {
            let e = Uuid::from_fields_v1(0, clock_seq, [0; 6]);
            assert_eq!(extract_clock_seq(&e), clock_seq);
        }
    }

    /// Reads fields of the RFC 4122 DNS namespace UUID
    #[test]
    fn reads_fields_of_the_rfc_4122_dns_namespace_uuid() {
        let e: Uuid = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse().unwrap();
        assert_eq!(extract_clock_seq(&e), 0x00b4);
        assert_eq!(extract_node(&e), [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
        // the namespace UUIDs were minted in early 1998
        assert_eq!(extract_timestamp(&e).format("%Y").to_string(), "1998");
    }
}
