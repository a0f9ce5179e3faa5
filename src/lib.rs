//! # jwtdecode - Minimal JWT Decoding
//!
//! > Decode JSON Web Tokens (JWT) into header, claims and signature.
//!
//! **jwtdecode** splits a compact JWT, decodes the Base64URL header and payload
//! segments into JSON objects, and exposes typed accessors for the registered
//! claims. It does **not** verify signatures and does not enforce any claim
//! policy. Use it to inspect tokens, route requests, or read claims that a
//! gateway in front of you has already validated.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtdecode::*;
//!
//! let token = decode(token_str)?;
//!
//! println!("Algorithm: {:?}", token.header().algorithm());
//! println!("Subject: {:?}", token.subject());
//! println!("Expires: {:?}", token.expires_at());
//!
//! if token.expired() {
//!     // ask for a fresh token
//! }
//! ```
//!
//! ## Decoding Flow
//!
//! ```text
//! "xxxxx.yyyyy.zzzzz"
//!     │ split on '.' (exactly three parts)
//!     ▼
//! header / payload segments
//!     │ Base64URL (lenient) → JSON object
//!     ▼
//! DecodedToken (header, claims, raw signature, original string)
//! ```
//!
//! Decoding is all-or-nothing: it returns a complete [`DecodedToken`] or an
//! [`Error`]. Reading claims afterwards never fails. A missing claim and a
//! claim of the wrong JSON type both read as `None`.
//!
//! ## Claims
//!
//! The registered claims have named accessors: [`DecodedToken::issuer`],
//! [`DecodedToken::subject`], [`DecodedToken::audience`],
//! [`DecodedToken::expires_at`], [`DecodedToken::not_before`],
//! [`DecodedToken::issued_at`] and [`DecodedToken::identifier`]. Any other
//! claim is read with [`DecodedToken::claim`], typed through [`FromClaim`]:
//!
//! ```ignore
//! let roles: Option<Vec<String>> = token.claim("roles");
//! let admin: Option<bool> = token.claim("admin");
//! let name: Option<&str> = token.claim("name");
//! ```
//!
//! ## Time
//!
//! [`DecodedToken::expired`] compares `exp` against the system clock. Pass a
//! [`Clock`] to [`DecodedToken::expired_with`] for a different time source,
//! such as a [`FixedClock`] in tests.
//!
//! ## Base64URL Leniency
//!
//! Characters outside the Base64 alphabet are skipped while decoding, and
//! missing padding is restored. This matches what tokens look like in practice
//! (stray whitespace, padded segments) and is not a strictness guarantee.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)

// Core modules
pub mod error;
pub mod limits;
pub mod utils;

// Claims and time
pub mod claims;
pub mod clock;

// Token types
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use token::{DecodedToken, Decoder, TokenHeader, decode};

pub use claims::{Claim, FromClaim};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result, Segment};
