//! Typed access to JWT claims
//!
//! Claims are stored as untyped JSON and typed on read. Each Rust type that a
//! claim can be read as implements [`FromClaim`], which inspects the JSON value
//! and returns `None` when the shape does not fit. A claim with the wrong shape
//! therefore reads exactly like a missing one.
//!
//! | Type             | Accepted JSON                                       |
//! |------------------|-----------------------------------------------------|
//! | `&str`, `String` | string                                              |
//! | `bool`           | boolean                                             |
//! | `f64`            | number                                              |
//! | `i64`, `u64`     | number in range (fractions truncate toward zero)    |
//! | `DateTime<Utc>`  | number of seconds since the Unix epoch              |
//! | `Vec<String>`    | array whose elements are all strings                |
//! | `&Value`         | anything                                            |

mod claim;

pub use claim::Claim;

use chrono::{DateTime, Utc};
use serde_json::{Number, Value};

/// Registered claim names (RFC 7519 section 4.1)
pub mod names {
    /// Issuer
    pub const ISSUER: &str = "iss";
    /// Subject
    pub const SUBJECT: &str = "sub";
    /// Audience
    pub const AUDIENCE: &str = "aud";
    /// Expiration Time
    pub const EXPIRATION: &str = "exp";
    /// Not Before
    pub const NOT_BEFORE: &str = "nbf";
    /// Issued At
    pub const ISSUED_AT: &str = "iat";
    /// JWT ID
    pub const JWT_ID: &str = "jti";
}

/// Conversion from a JSON claim value to a Rust type
///
/// The lifetime lets borrowed types such as `&str` point into the decoded
/// token instead of allocating.
pub trait FromClaim<'a>: Sized {
    /// Convert the value, or `None` if its shape does not match
    fn from_claim(value: &'a Value) -> Option<Self>;
}

impl<'a> FromClaim<'a> for &'a Value {
    fn from_claim(value: &'a Value) -> Option<Self> {
        Some(value)
    }
}

impl<'a> FromClaim<'a> for &'a str {
    fn from_claim(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl FromClaim<'_> for String {
    fn from_claim(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromClaim<'_> for bool {
    fn from_claim(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromClaim<'_> for f64 {
    fn from_claim(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromClaim<'_> for i64 {
    fn from_claim(value: &Value) -> Option<Self> {
        let Value::Number(number) = value else {
            return None;
        };
        number.as_i64().or_else(|| {
            number
                .as_f64()
                .map(f64::trunc)
                .filter(|f| (i64::MIN as f64..i64::MAX as f64).contains(f))
                .map(|f| f as i64)
        })
    }
}

impl FromClaim<'_> for u64 {
    fn from_claim(value: &Value) -> Option<Self> {
        let Value::Number(number) = value else {
            return None;
        };
        number.as_u64().or_else(|| {
            number
                .as_f64()
                .map(f64::trunc)
                .filter(|f| (0.0..u64::MAX as f64).contains(f))
                .map(|f| f as u64)
        })
    }
}

impl FromClaim<'_> for DateTime<Utc> {
    fn from_claim(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => timestamp_from_number(number),
            _ => None,
        }
    }
}

impl FromClaim<'_> for Vec<String> {
    fn from_claim(value: &Value) -> Option<Self> {
        value
            .as_array()?
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect()
    }
}

impl<'a> FromClaim<'a> for Vec<&'a str> {
    fn from_claim(value: &'a Value) -> Option<Self> {
        value.as_array()?.iter().map(Value::as_str).collect()
    }
}

/// Convert a NumericDate (seconds since the epoch, possibly fractional)
fn timestamp_from_number(number: &Number) -> Option<DateTime<Utc>> {
    if let Some(seconds) = number.as_i64() {
        return DateTime::from_timestamp(seconds, 0);
    }

    let seconds = number.as_f64().filter(|f| f.is_finite())?;
    let whole = seconds.floor();
    if !(i64::MIN as f64..i64::MAX as f64).contains(&whole) {
        return None;
    }

    let nanos = ((seconds - whole) * 1e9).round() as u32;
    let whole = whole as i64;
    // A fraction that rounds to a full second carries into the next one
    if nanos >= 1_000_000_000 {
        return DateTime::from_timestamp(whole.checked_add(1)?, 0);
    }
    DateTime::from_timestamp(whole, nanos)
}
