//! The 16-byte UUID value type and its canonical text codec.

use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier as its 16-byte big-endian value.
///
/// This is the only in-memory representation of a UUID's value in this crate;
/// generators build one fresh per call and the validator rebuilds one while
/// normalizing text input.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the version nibble (the high 4 bits of byte 6).
    pub const fn version_nibble(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the variant family encoded in the high bits of byte 8.
    pub const fn variant(&self) -> Variant {
        Variant::of_byte(self.0[8])
    }

    /// Creates a UUID byte array from UUIDv1 field values: the 60-bit count of
    /// 100-nanosecond ticks since 1582-10-15, the 14-bit clock sequence, and
    /// the 48-bit node id.
    ///
    /// # Panics
    ///
    /// Panics if `gregorian_ticks` or `clock_seq` exceeds its field width.
    pub const fn from_fields_v1(gregorian_ticks: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if gregorian_ticks >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self([
            (gregorian_ticks >> 24) as u8,
            (gregorian_ticks >> 16) as u8,
            (gregorian_ticks >> 8) as u8,
            gregorian_ticks as u8,
            (gregorian_ticks >> 40) as u8,
            (gregorian_ticks >> 32) as u8,
            0x10 | ((gregorian_ticks >> 56) as u8 & 0x0f),
            (gregorian_ticks >> 48) as u8,
            0x80 | ((clock_seq >> 8) as u8 & 0x3f),
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Creates a UUID byte array from UUIDv7 field values: the 48-bit Unix
    /// millisecond timestamp, the 12-bit monotonic counter, the 6-byte session
    /// id (its top two bits are displaced by the variant bits), and 16 bits of
    /// fresh randomness.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` or `counter` exceeds its field width.
    pub const fn from_fields_v7(
        unix_ts_ms: u64,
        counter: u16,
        session: [u8; 6],
        extra: u16,
    ) -> Self {
        if unix_ts_ms >= 1 << 48 || counter >= 1 << 12 {
            panic!("invalid field value");
        }

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (counter >> 8) as u8,
            counter as u8,
            0x80 | (session[0] & 0x3f),
            session[1],
            session[2],
            session[3],
            session[4],
            session[5],
            (extra >> 8) as u8,
            extra as u8,
        ])
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::Uuid;
    ///
    /// let x = "0190b5b1-9e24-7abc-8def-1234567890ab".parse::<Uuid>()?;
    /// assert_eq!(&x.encode() as &str, "0190b5b1-9e24-7abc-8def-1234567890ab");
    /// # Ok::<(), uuidkit::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Only the hyphenated canonical form is accepted here (upper- or
    /// lowercase). Use [`validate_uuid`](crate::validate_uuid) to normalize
    /// the other textual forms first.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let mut bytes = [0u8; 16];
        let mut chars = src.chars();
        for (i, b) in bytes.iter_mut().enumerate() {
            let hi = chars.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = chars.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *b = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && chars.next() != Some('-') {
                return Err(ERR);
            }
        }
        if chars.next().is_none() {
            Ok(Self(bytes))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated
/// 8-4-4-4-12 string representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Error parsing an invalid canonical string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation")
    }
}

impl std::error::Error for ParseError {}

/// The variant family a UUID belongs to, classified from the high bits of
/// byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, serde::Serialize)]
pub enum Variant {
    /// `10xxxxxx`: the RFC 4122/9562 family; the only family this engine
    /// generates and parses.
    Rfc4122,
    /// `110xxxxx`: Microsoft backward-compatibility family.
    Microsoft,
    /// `111xxxxx`: reserved for future definition.
    Future,
    /// `0xxxxxxx`: the old Apollo NCS family.
    Ncs,
}

impl Variant {
    /// Classifies a full byte 8 value. Total over `u8`; every value falls into
    /// exactly one family.
    pub const fn of_byte(byte: u8) -> Self {
        if byte & 0x80 == 0x00 {
            Self::Ncs
        } else if byte & 0xc0 == 0x80 {
            Self::Rfc4122
        } else if byte & 0xe0 == 0xc0 {
            Self::Microsoft
        } else {
            Self::Future
        }
    }

    /// Returns `true` for the RFC 4122/9562 family.
    pub const fn is_rfc4122(&self) -> bool {
        matches!(self, Self::Rfc4122)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rfc4122 => "RFC 4122",
            Self::Microsoft => "Microsoft",
            Self::Future => "Future",
            Self::Ncs => "NCS",
        })
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "0190b5b1-9e24-7abc-8def-1234567890ab",
                    &[
                        0x01, 0x90, 0xb5, 0xb1, 0x9e, 0x24, 0x7a, 0xbc, 0x8d, 0xef, 0x12, 0x34,
                        0x56, 0x78, 0x90, 0xab,
                    ],
                ),
                (
                    "550e8400-e29b-41d4-a716-446655440000",
                    &[
                        0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66,
                        0x55, 0x44, 0x00, 0x00,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Returns a collection of prepared v7 cases
    fn prepare_v7_cases() -> &'static [((u64, u16, [u8; 6], u16), &'static str)] {
        const MAX_UINT48: u64 = (1 << 48) - 1;
        const MAX_UINT12: u16 = (1 << 12) - 1;

        &[
            ((0, 0, [0; 6], 0), "00000000-0000-7000-8000-000000000000"),
            (
                (MAX_UINT48, 0, [0; 6], 0),
                "ffffffff-ffff-7000-8000-000000000000",
            ),
            (
                (0, MAX_UINT12, [0; 6], 0),
                "00000000-0000-7fff-8000-000000000000",
            ),
            (
                // session's top two bits are displaced by the variant bits
                (0, 0, [0xff; 6], 0xffff),
                "00000000-0000-7000-bfff-ffffffffffff",
            ),
            (
                (
                    0x17f22e279b0,
                    0xcc3,
                    [0x98, 0xc4, 0xdc, 0x0c, 0x0c, 0x07],
                    0x398f,
                ),
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared v7 cases correctly
    #[test]
    fn encodes_and_decodes_prepared_v7_cases_correctly() {
        for (fs, text) in prepare_v7_cases() {
            let from_fields = Uuid::from_fields_v7(fs.0, fs.1, fs.2, fs.3);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(from_fields.version_nibble(), 7);
            assert_eq!(from_fields.variant(), Variant::Rfc4122);
        }
    }

    /// Encodes prepared v1 cases correctly
    #[test]
    fn encodes_prepared_v1_cases_correctly() {
        const MAX_UINT60: u64 = (1 << 60) - 1;
        const MAX_UINT14: u16 = (1 << 14) - 1;

        let cases: &[((u64, u16, [u8; 6]), &str)] = &[
            ((0, 0, [0; 6]), "00000000-0000-1000-8000-000000000000"),
            (
                (MAX_UINT60, 0, [0; 6]),
                "ffffffff-ffff-1fff-8000-000000000000",
            ),
            (
                (0, MAX_UINT14, [0; 6]),
                "00000000-0000-1000-bfff-000000000000",
            ),
            ((0, 0, [0xff; 6]), "00000000-0000-1000-8000-ffffffffffff"),
            (
                // the DNS namespace UUID from RFC 4122 Appendix C
                (0x1d19dad6ba7b810, 0x00b4, [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]),
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            ),
        ];

        for (fs, text) in cases {
            let from_fields = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(from_fields.version_nibble(), 1);
            assert_eq!(from_fields.variant(), Variant::Rfc4122);
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 0180a8f0-5b82-75b4-9fef-ecad657c30bb",
            "0180a8f0-5b84-7438-ab50-f0626f78002b ",
            "+0180a8f0-5b84-7438-ab50-f06405d35edb",
            "0180a8f05b847438ab50f068decfbfd7",
            "0180a8f0-5b847438-ab50-f06991838802",
            "{0180a8f0-5b84-7438-ab50-f06ac2e5e082}",
            "0180a8f0-5b84-74 8-ab50-f06bed27bdc7",
            "0180a8g0-5b84-7438-ab50-f06c91175b8a",
            "0180a8f0-5b84-7438-ab50_f06d3ea24429",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err());
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );

        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_v7_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2, fs.3);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
        }
    }

    /// Classifies every variant family from byte 8
    #[test]
    fn classifies_every_variant_family_from_byte_8() {
        for byte in 0u8..=0x7f {
            assert_eq!(Variant::of_byte(byte), Variant::Ncs);
        }
        for byte in 0x80u8..=0xbf {
            assert_eq!(Variant::of_byte(byte), Variant::Rfc4122);
        }
        for byte in 0xc0u8..=0xdf {
            assert_eq!(Variant::of_byte(byte), Variant::Microsoft);
        }
        for byte in 0xe0u8..=0xff {
            assert_eq!(Variant::of_byte(byte), Variant::Future);
        }
    }
}
