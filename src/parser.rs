//! Structural parsing of validated UUIDs into version-specific fields.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::{v1, v7, validate_uuid, SupportedVersion, Version};

/// The semantic fields embedded in a supported UUID, tagged by version.
///
/// Built fresh per [`parse_uuid`] call and never mutated. v4 deliberately
/// carries no recoverable information; its payload is a display-only
/// annotation of which bits were random.
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub enum ParsedUuid {
    V1 {
        timestamp: DateTime<Utc>,
        clock_seq: u16,
        node: [u8; 6],
    },
    V4 {
        random_bits: String,
    },
    V7 {
        timestamp: DateTime<Utc>,
    },
}

impl ParsedUuid {
    /// Returns the version tag of the parsed value.
    pub const fn version(&self) -> SupportedVersion {
        match self {
            Self::V1 { .. } => SupportedVersion::V1,
            Self::V4 { .. } => SupportedVersion::V4,
            Self::V7 { .. } => SupportedVersion::V7,
        }
    }
}

/// Parses a UUID in any accepted textual form into its embedded fields.
///
/// Returns `None` both for invalid input and for valid-but-unsupported
/// versions or variants; either way there are no structured fields to
/// offer. Use [`validate_uuid`] to tell the two cases apart.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{parse_uuid, ParsedUuid};
///
/// match parse_uuid("550e8400-e29b-41d4-a716-446655440000") {
///     Some(ParsedUuid::V4 { random_bits }) => println!("{random_bits}"),
///     _ => unreachable!(),
/// }
/// assert_eq!(parse_uuid("550e8400-e29b-31d4-a716-446655440000"), None); // v3
/// ```
pub fn parse_uuid(input: &str) -> Option<ParsedUuid> {
    let report = validate_uuid(input);
    if !report.is_valid || !report.is_supported {
        return None;
    }

    let normalized = report.normalized?;
    let uuid = normalized.parse().ok()?;

    match report.version? {
        Version::V1 => Some(ParsedUuid::V1 {
            timestamp: v1::extract_timestamp(&uuid),
            clock_seq: v1::extract_clock_seq(&uuid),
            node: v1::extract_node(&uuid),
        }),
        Version::V4 => Some(ParsedUuid::V4 {
            random_bits: describe_random_bits(&normalized),
        }),
        Version::V7 => Some(ParsedUuid::V7 {
            timestamp: v7::extract_timestamp(&uuid),
        }),
        _ => None,
    }
}

/// Annotates the hex digits of a v4 UUID, eliding the version nibble and the
/// variant byte, which are the only non-random positions.
fn describe_random_bits(normalized: &str) -> String {
    let hex: String = normalized.chars().filter(|&c| c != '-').collect();
    format!("{}[v]{}[var]{}", &hex[..12], &hex[13..16], &hex[18..])
}

/// Renders a parsed UUID into a human-presentable field map.
///
/// Labels are presentation keys; the structured data stays in [`ParsedUuid`].
pub fn format_parsed_uuid(parsed: &ParsedUuid) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();

    match parsed {
        ParsedUuid::V1 {
            timestamp,
            clock_seq,
            node,
        } => {
            fields.insert("Version".to_owned(), "V1".to_owned());
            insert_timestamp(&mut fields, timestamp);
            fields.insert(
                "Clock sequence".to_owned(),
                format!("{clock_seq} (0x{clock_seq:04x})"),
            );
            fields.insert("Node ID".to_owned(), format_node(node));
        }
        ParsedUuid::V4 { random_bits } => {
            fields.insert("Version".to_owned(), "V4".to_owned());
            fields.insert("Random bits".to_owned(), random_bits.clone());
        }
        ParsedUuid::V7 { timestamp } => {
            fields.insert("Version".to_owned(), "V7".to_owned());
            insert_timestamp(&mut fields, timestamp);
        }
    }

    fields
}

fn insert_timestamp(fields: &mut BTreeMap<String, String>, timestamp: &DateTime<Utc>) {
    fields.insert(
        "Timestamp".to_owned(),
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
    );
    fields.insert(
        "Created".to_owned(),
        timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
}

/// Formats a node id as colon-separated octets, annotated by whether the
/// multicast bit marks it as random or as a hardware MAC address.
fn format_node(node: &[u8; 6]) -> String {
    let octets = node
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":");
    let origin = if node[0] & 0x01 == 0x01 {
        "(random)"
    } else {
        "(MAC)"
    };
    format!("{octets} {origin}")
}
