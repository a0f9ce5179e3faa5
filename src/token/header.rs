use serde_json::{Map, Value};

use crate::claims::FromClaim;

/// JWT header (JOSE header)
///
/// Holds the decoded header object as-is. The registered parameters have
/// shortcuts; anything else is available through [`get`](Self::get) or
/// [`claim`](Self::claim).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenHeader(Map<String, Value>);

impl TokenHeader {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Algorithm (`alg`)
    pub fn algorithm(&self) -> Option<&str> {
        self.claim("alg")
    }

    /// Token type (`typ`), typically `"JWT"`
    pub fn token_type(&self) -> Option<&str> {
        self.claim("typ")
    }

    /// Content type (`cty`), set for nested tokens
    pub fn content_type(&self) -> Option<&str> {
        self.claim("cty")
    }

    /// Key ID (`kid`)
    pub fn key_id(&self) -> Option<&str> {
        self.claim("kid")
    }

    /// Raw header parameter
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Header parameter converted to `T`, `None` if absent or mistyped
    pub fn claim<'a, T: FromClaim<'a>>(&'a self, name: &str) -> Option<T> {
        self.get(name).and_then(T::from_claim)
    }

    /// Whether the header has a parameter with this name
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The full header object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<TokenHeader> for Map<String, Value> {
    fn from(header: TokenHeader) -> Self {
        header.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn header(value: Value) -> TokenHeader {
        match value {
            Value::Object(fields) => TokenHeader::new(fields),
            _ => panic!("header fixture must be an object"),
        }
    }

    #[test]
    fn test_registered_parameters() {
        let header = header(json!({"alg":"RS256","typ":"JWT","kid":"key-1","cty":"JWT"}));
        assert_eq!(header.algorithm(), Some("RS256"));
        assert_eq!(header.token_type(), Some("JWT"));
        assert_eq!(header.key_id(), Some("key-1"));
        assert_eq!(header.content_type(), Some("JWT"));
    }

    #[test]
    fn test_missing_and_mistyped_parameters() {
        let header = header(json!({"alg": 256}));
        assert_eq!(header.algorithm(), None);
        assert_eq!(header.key_id(), None);
        assert!(header.contains("alg"));
        assert!(!header.contains("kid"));
    }

    #[test]
    fn test_custom_parameters() {
        let header = header(json!({"alg":"HS256","x5c":["cert"],"b64":false}));
        assert_eq!(header.claim::<bool>("b64"), Some(false));
        assert_eq!(header.claim::<Vec<String>>("x5c"), Some(vec!["cert".to_string()]));
        assert_eq!(header.get("alg"), Some(&json!("HS256")));
        assert_eq!(header.as_map().len(), 3);
    }
}
