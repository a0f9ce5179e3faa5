use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::claims::FromClaim;

/// A borrowed view of a single, possibly absent, claim
///
/// Returned by [`DecodedToken::get`](crate::DecodedToken::get). Every accessor
/// returns `None` when the claim is missing or has a different JSON shape.
///
/// ```ignore
/// let token = jwtdecode::decode(token_str)?;
/// let admin = token.get("admin").as_bool().unwrap_or(false);
/// let roles = token.get("roles").as_array().unwrap_or_default();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Claim<'a> {
    name: &'a str,
    value: Option<&'a Value>,
}

impl<'a> Claim<'a> {
    pub(crate) fn new(name: &'a str, value: Option<&'a Value>) -> Self {
        Self { name, value }
    }

    /// Name the claim was looked up by
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Raw JSON value
    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    /// Whether the claim is present (a JSON `null` counts as present)
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// Convert to any [`FromClaim`] type
    pub fn to<T: FromClaim<'a>>(&self) -> Option<T> {
        self.value.and_then(T::from_claim)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.to()
    }

    pub fn as_string(&self) -> Option<String> {
        self.to()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.to()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.to()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.to()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.to()
    }

    /// NumericDate claim as an instant
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        self.to()
    }

    /// Array of strings; a lone string is returned as a one-element array
    pub fn as_array(&self) -> Option<Vec<String>> {
        self.as_string()
            .map(|single| vec![single])
            .or_else(|| self.to::<Vec<String>>())
    }
}
