//! An RFC 9562 UUID engine: generation of versions 1, 4, and 7, plus the
//! inverse operations: tolerant validation and structural field extraction.
//!
//! ```rust
//! use uuidkit::{parse_uuid, uuid7, validate_uuid};
//!
//! let uuid = uuid7();
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! assert!(validate_uuid(&uuid.to_string()).is_supported);
//! assert!(parse_uuid(&uuid.to_string()).is_some());
//! ```
//!
//! # Field and bit layout
//!
//! Version 7 identifiers carry a directly sortable timestamp:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        counter        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        session_id                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |      session_id       |              rand                     |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - The 48-bit `unix_ts_ms` field is the Unix timestamp in milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `counter` increments for each identifier generated within the
//!   same millisecond, keeping same-millisecond output in generation order.
//!   At counter overflow the timestamp advances by one artificial
//!   millisecond; a backward-moving system clock is pinned to the last-seen
//!   timestamp, so output order never regresses.
//! - The 2-bit `var` field is set at `10`.
//! - The `session_id` bits come from a 6-byte value drawn once per process
//!   and fixed thereafter, reducing collision odds across independent
//!   processes without coordination; the final 16 `rand` bits are fresh per
//!   call.
//!
//! Version 1 identifiers embed a 60-bit count of 100-nanosecond ticks since
//! 1582-10-15 split across `time_low`/`time_mid`/`time_hi`, a 14-bit clock
//! sequence, and a 48-bit node id. Both the clock sequence and the node are
//! freshly random per call, and the node's multicast bit is forced so no
//! hardware MAC address is ever embedded or implied. Version 4 identifiers
//! are 122 random bits behind fixed version and variant bits.
//!
//! # Validation and parsing
//!
//! [`validate_uuid`] accepts the canonical hyphenated form, the bare 32-digit
//! form, `{}`-braced and `urn:uuid:`-prefixed text in either case, and
//! reports normalization, version, variant family, and structured errors
//! with character positions. [`parse_uuid`] inverts generation: it recovers
//! the embedded timestamp (v1, v7), clock sequence and node id (v1), or
//! reports the random-bit layout (v4).
//!
//! ```rust
//! use uuidkit::{validate_uuid, ErrorCode};
//!
//! let report = validate_uuid("550e8400-e29b-41d4-a716-44665544000g");
//! assert!(!report.is_valid);
//! assert_eq!(report.errors[0].code(), ErrorCode::InvalidHex);
//! assert_eq!(report.errors[0].position(), Some(31));
//! ```

mod id;
pub use id::{ParseError, Uuid, Variant};

mod options;
pub use options::GenerationOptions;

mod generator;
pub use generator::UuidGenerator;

mod entry;
pub use entry::{generate, generate_many, uuid1, uuid4, uuid7};

mod validator;
pub use validator::{
    validate_uuid, ErrorCode, SupportedVersion, ValidationError, ValidationResult, Version,
};

mod parser;
pub use parser::{format_parsed_uuid, parse_uuid, ParsedUuid};

pub mod v1;
pub mod v7;
