//! Tolerant UUID text validation: normalization, classification, and
//! structured error reporting.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{Uuid, Variant};

/// A version tag from the full RFC 9562 space.
///
/// Every version can be recognized by the validator; only the
/// [`SupportedVersion`] subset can be generated and parsed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum Version {
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
}

impl Version {
    /// Maps a version nibble to a tag; `0` and `9..=15` are outside the RFC
    /// 9562 space.
    pub const fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            3 => Some(Self::V3),
            4 => Some(Self::V4),
            5 => Some(Self::V5),
            6 => Some(Self::V6),
            7 => Some(Self::V7),
            8 => Some(Self::V8),
            _ => None,
        }
    }

    /// Returns the version number, 1 through 8.
    pub const fn number(&self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
            Self::V4 => 4,
            Self::V5 => 5,
            Self::V6 => 6,
            Self::V7 => 7,
            Self::V8 => 8,
        }
    }

    /// Returns `true` if this engine can generate and parse the version.
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::V1 | Self::V4 | Self::V7)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

/// The subset of versions this engine generates and parses.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum SupportedVersion {
    V1,
    V4,
    V7,
}

impl From<SupportedVersion> for Version {
    fn from(src: SupportedVersion) -> Self {
        match src {
            SupportedVersion::V1 => Self::V1,
            SupportedVersion::V4 => Self::V4,
            SupportedVersion::V7 => Self::V7,
        }
    }
}

impl TryFrom<Version> for SupportedVersion {
    type Error = Version;

    /// Narrows a version tag, returning the unsupported tag as the error.
    fn try_from(src: Version) -> Result<Self, Self::Error> {
        match src {
            Version::V1 => Ok(Self::V1),
            Version::V4 => Ok(Self::V4),
            Version::V7 => Ok(Self::V7),
            other => Err(other),
        }
    }
}

impl fmt::Display for SupportedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Version::from(*self).fmt(f)
    }
}

/// The closed set of validation error codes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum ErrorCode {
    InvalidLength,
    InvalidHex,
    InvalidVersion,
    InvalidVariant,
    InvalidHyphenPosition,
    /// Reserved for inputs no other code describes; produced by no current
    /// pipeline step.
    InvalidFormat,
}

/// A structured validation failure.
///
/// The `Display` message is the human-readable description; [`code`] and
/// [`position`] expose the machine-readable classification.
///
/// [`code`]: ValidationError::code
/// [`position`]: ValidationError::position
#[derive(Clone, Eq, PartialEq, Debug, Error, Serialize)]
pub enum ValidationError {
    #[error("expected 32 hexadecimal digits, found {found}")]
    InvalidLength { found: usize },

    #[error("invalid character at position {position}")]
    InvalidHex { position: usize },

    #[error("version nibble {nibble} is outside the RFC 9562 range")]
    InvalidVersion { nibble: u8 },

    #[error("variant is {variant}, not RFC 4122")]
    InvalidVariant { variant: Variant },

    #[error("hyphens do not follow the 8-4-4-4-12 grouping")]
    InvalidHyphenPosition,

    #[error("input is not recognizable as a UUID")]
    InvalidFormat,
}

impl ValidationError {
    /// Returns the error code.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidLength { .. } => ErrorCode::InvalidLength,
            Self::InvalidHex { .. } => ErrorCode::InvalidHex,
            Self::InvalidVersion { .. } => ErrorCode::InvalidVersion,
            Self::InvalidVariant { .. } => ErrorCode::InvalidVariant,
            Self::InvalidHyphenPosition => ErrorCode::InvalidHyphenPosition,
            Self::InvalidFormat => ErrorCode::InvalidFormat,
        }
    }

    /// Returns the zero-based character position the error refers to, where
    /// one exists.
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidHex { position } => Some(*position),
            _ => None,
        }
    }
}

/// The outcome of validating one input string.
///
/// A structurally well-formed UUID of a non-RFC-4122 variant is reported
/// `is_valid` with an [`InvalidVariant`](ValidationError::InvalidVariant)
/// error entry and `is_supported == false`: it is a UUID, just not one this
/// engine can say anything more about.
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub version: Option<Version>,
    pub variant: Option<Variant>,
    /// The canonical lowercase hyphenated form, present whenever the input
    /// carried 32 hex digits.
    pub normalized: Option<String>,
    pub errors: Vec<ValidationError>,
    /// `true` only for a valid RFC 4122 UUID of version 1, 4, or 7.
    pub is_supported: bool,
}

impl ValidationResult {
    fn failure(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            version: None,
            variant: None,
            normalized: None,
            errors: vec![error],
            is_supported: false,
        }
    }
}

/// Validates a UUID in any accepted textual form.
///
/// Accepted forms: canonical hyphenated, unhyphenated, `{}`-braced, and
/// `urn:uuid:`-prefixed, in either case. The checks run in a fixed order and
/// stop at the first structural failure; length and charset failures are
/// prerequisites for every later check.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{validate_uuid, Version};
///
/// let report = validate_uuid("urn:uuid:550E8400-E29B-41D4-A716-446655440000");
/// assert!(report.is_valid);
/// assert!(report.is_supported);
/// assert_eq!(report.version, Some(Version::V4));
/// assert_eq!(
///     report.normalized.as_deref(),
///     Some("550e8400-e29b-41d4-a716-446655440000")
/// );
/// ```
pub fn validate_uuid(input: &str) -> ValidationResult {
    let mut cleaned = input.trim().to_lowercase();

    if let Some(rest) = cleaned.strip_prefix("urn:uuid:") {
        cleaned = rest.to_owned();
    }
    if cleaned.starts_with('{') && cleaned.ends_with('}') {
        cleaned = cleaned[1..cleaned.len() - 1].to_owned();
    }

    let hex: String = cleaned.chars().filter(|&c| c != '-').collect();

    let found = hex.chars().count();
    if found != 32 {
        return ValidationResult::failure(ValidationError::InvalidLength { found });
    }

    if let Some(position) = hex.chars().position(|c| !matches!(c, '0'..='9' | 'a'..='f')) {
        return ValidationResult::failure(ValidationError::InvalidHex { position });
    }

    // the grouping check only fires when the input chose to carry hyphens at
    // all; unhyphenated input is already fully covered by the checks above
    if cleaned.contains('-') && !cleaned.split('-').map(str::len).eq([8usize, 4, 4, 4, 12]) {
        return ValidationResult::failure(ValidationError::InvalidHyphenPosition);
    }

    let mut bytes = [0u8; 16];
    for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
        *byte = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
    }
    let uuid = Uuid::from(bytes);
    let normalized = uuid.encode().to_string();

    let nibble = uuid.version_nibble();
    let Some(version) = Version::from_nibble(nibble) else {
        return ValidationResult {
            normalized: Some(normalized),
            ..ValidationResult::failure(ValidationError::InvalidVersion { nibble })
        };
    };

    let variant = uuid.variant();
    if !variant.is_rfc4122() {
        return ValidationResult {
            is_valid: true,
            version: Some(version),
            variant: Some(variant),
            normalized: Some(normalized),
            errors: vec![ValidationError::InvalidVariant { variant }],
            is_supported: false,
        };
    }

    ValidationResult {
        is_valid: true,
        version: Some(version),
        variant: Some(variant),
        normalized: Some(normalized),
        errors: Vec::new(),
        is_supported: version.is_supported(),
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        _ => digit - b'a' + 10,
    }
}
