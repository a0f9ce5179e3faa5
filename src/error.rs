//! Errors for jwtdecode
//!
//! Decoding either yields a complete token or one of the errors below. Claim
//! lookups on a decoded token never fail; a missing or mistyped claim is simply
//! absent.

use std::fmt;

use thiserror::Error;

/// The two token segments that are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Segment 0, the JOSE header
    Header,
    /// Segment 1, the claims set
    Payload,
}

impl Segment {
    /// Position of the segment in the compact serialization
    pub fn index(self) -> usize {
        match self {
            Segment::Header => 0,
            Segment::Payload => 1,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Header => f.write_str("header"),
            Segment::Payload => f.write_str("payload"),
        }
    }
}

/// JWT decoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not split into exactly three `.`-separated parts
    #[error("Malformed JWT: expected 3 parts separated by '.', found {actual_part_count}")]
    MalformedToken {
        actual_part_count: usize,
        raw_token: String,
    },

    /// A header or payload segment is not valid Base64URL
    #[error("Failed to decode {segment} segment as Base64URL: '{segment_value}'")]
    InvalidBase64Segment {
        segment: Segment,
        segment_value: String,
    },

    /// A header or payload segment does not decode to a JSON object
    #[error("Failed to parse {segment} segment as a JSON object: '{segment_value}'")]
    InvalidJsonSegment {
        segment: Segment,
        segment_value: String,
    },

    /// The input exceeds the length limit configured on a [`Decoder`](crate::Decoder)
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },
}

impl Error {
    /// The segment that failed to decode, if the error is segment specific
    pub fn segment(&self) -> Option<Segment> {
        match self {
            Error::InvalidBase64Segment { segment, .. }
            | Error::InvalidJsonSegment { segment, .. } => Some(*segment),
            Error::MalformedToken { .. } | Error::TokenTooLarge { .. } => None,
        }
    }
}

/// Result type alias for jwtdecode operations
pub type Result<T> = std::result::Result<T, Error>;
