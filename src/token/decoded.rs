//! Decoded token view
//!
//! [`DecodedToken`] is the result of a successful decode. It owns the header,
//! the claims set, the raw signature and the original compact string, and only
//! offers read access to them.
//!
//! Nothing here has been verified. The claims are exactly what the token
//! carries, so they must not be used for authorization decisions unless the
//! signature has been checked elsewhere.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::claims::{Claim, FromClaim, names};
use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::token::TokenHeader;

/// A decoded, unverified JWT
///
/// # Examples
///
/// ```ignore
/// use jwtdecode::*;
///
/// let token = decode(token_str)?;
///
/// println!("Algorithm: {:?}", token.header().algorithm());
/// println!("Subject: {:?}", token.subject());
/// println!("Audience: {:?}", token.audience());
/// println!("Expired: {}", token.expired());
///
/// // Any claim, typed on read
/// let admin: Option<bool> = token.claim("admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    header: TokenHeader,
    payload: Map<String, Value>,
    signature: String,
    raw: String,
}

impl DecodedToken {
    pub(crate) fn new(
        header: TokenHeader,
        payload: Map<String, Value>,
        signature: String,
        raw: String,
    ) -> Self {
        Self {
            header,
            payload,
            signature,
            raw,
        }
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the full claims set
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Get the signature segment exactly as it appeared in the token
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Get the original compact token string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Read a claim as `T`
    ///
    /// Returns `None` if the claim is missing or its JSON value cannot be
    /// read as `T`.
    pub fn claim<'a, T: FromClaim<'a>>(&'a self, name: &str) -> Option<T> {
        self.payload.get(name).and_then(T::from_claim)
    }

    /// Look up a claim without committing to a type yet
    pub fn get<'a>(&'a self, name: &'a str) -> Claim<'a> {
        Claim::new(name, self.payload.get(name))
    }

    /// Whether the payload has a claim with this name, whatever its type
    pub fn contains_claim(&self, name: &str) -> bool {
        self.payload.contains_key(name)
    }

    /// Names of all claims in the payload
    pub fn claim_names(&self) -> impl Iterator<Item = &str> {
        self.payload.keys().map(String::as_str)
    }

    /// Get the issuer (iss claim)
    pub fn issuer(&self) -> Option<&str> {
        self.claim(names::ISSUER)
    }

    /// Get the subject (sub claim)
    pub fn subject(&self) -> Option<&str> {
        self.claim(names::SUBJECT)
    }

    /// Get the JWT ID (jti claim)
    pub fn identifier(&self) -> Option<&str> {
        self.claim(names::JWT_ID)
    }

    /// Get the audience (aud claim)
    ///
    /// The claim may be a single string or an array of strings; both are
    /// returned as a list.
    pub fn audience(&self) -> Option<Vec<String>> {
        self.claim::<String>(names::AUDIENCE)
            .map(|single| vec![single])
            .or_else(|| self.claim(names::AUDIENCE))
    }

    /// Get the expiration time (exp claim)
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.claim(names::EXPIRATION)
    }

    /// Get the issued-at time (iat claim)
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.claim(names::ISSUED_AT)
    }

    /// Get the not-before time (nbf claim)
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        self.claim(names::NOT_BEFORE)
    }

    /// Whether the token has expired according to the system clock
    ///
    /// See [`expired_with`](Self::expired_with).
    pub fn expired(&self) -> bool {
        self.expired_with(&SystemClock)
    }

    /// Whether the token has expired at the clock's current instant
    ///
    /// A token without a readable `exp` claim never expires. A token whose
    /// `exp` equals the current instant is already expired.
    pub fn expired_with(&self, clock: &impl Clock) -> bool {
        self.expires_at()
            .is_some_and(|expires_at| expires_at <= clock.now())
    }

    /// Whether the token is not yet valid according to the system clock
    ///
    /// See [`not_yet_valid_with`](Self::not_yet_valid_with).
    pub fn not_yet_valid(&self) -> bool {
        self.not_yet_valid_with(&SystemClock)
    }

    /// Whether the `nbf` claim lies after the clock's current instant
    ///
    /// A token without a readable `nbf` claim is always valid.
    pub fn not_yet_valid_with(&self, clock: &impl Clock) -> bool {
        self.not_before()
            .is_some_and(|not_before| not_before > clock.now())
    }
}

impl FromStr for DecodedToken {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        crate::decode(token)
    }
}

impl AsRef<str> for DecodedToken {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
