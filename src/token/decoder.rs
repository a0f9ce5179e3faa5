use serde_json::{Map, Value};

use crate::error::{Error, Result, Segment};
use crate::limits::MAX_TOKEN_LENGTH;
use crate::token::{DecodedToken, TokenHeader};
use crate::utils::base64url;

/// Decode a JWT string into its header, claims and signature
///
/// This is [`Decoder::new().decode(token)`](Decoder::decode): no length limit
/// is applied. The signature is not verified.
///
/// # Errors
///
/// - [`Error::MalformedToken`] if the token does not have exactly three
///   `.`-separated parts
/// - [`Error::InvalidBase64Segment`] if the header or payload is not Base64URL
/// - [`Error::InvalidJsonSegment`] if the header or payload is not a JSON object
pub fn decode(token: &str) -> Result<DecodedToken> {
    Decoder::new().decode(token)
}

/// Reusable JWT decoder
///
/// Carries the decoding configuration. The default configuration accepts
/// tokens of any length.
///
/// ```ignore
/// let decoder = Decoder::new().max_token_length(8 * 1024);
/// let token = decoder.decode(token_str)?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    max_token_length: Option<usize>,
}

impl Decoder {
    /// Create a decoder without limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject tokens longer than `bytes` with [`Error::TokenTooLarge`]
    pub fn max_token_length(mut self, bytes: usize) -> Self {
        self.max_token_length = Some(bytes);
        self
    }

    /// Apply [`MAX_TOKEN_LENGTH`] as the token length limit
    pub fn with_default_limits(self) -> Self {
        self.max_token_length(MAX_TOKEN_LENGTH)
    }

    /// Decode a JWT string
    ///
    /// # Errors
    ///
    /// See [`decode`]. Additionally returns [`Error::TokenTooLarge`] when a
    /// length limit is configured and exceeded.
    pub fn decode(&self, token: &str) -> Result<DecodedToken> {
        let size = token.len();
        tracing::trace!(length = size, "decoding token");

        if let Some(max) = self.max_token_length {
            if size > max {
                tracing::debug!(size, max, "token exceeds length limit");
                return Err(Error::TokenTooLarge { size, max });
            }
        }

        let parts: Vec<&str> = token.split('.').collect();
        let [header_b64, payload_b64, signature] = parts[..] else {
            tracing::debug!(parts = parts.len(), "token does not have three parts");
            return Err(Error::MalformedToken {
                actual_part_count: parts.len(),
                raw_token: token.to_string(),
            });
        };

        // Decode and parse payload, then header
        let payload = decode_object(Segment::Payload, payload_b64)?;
        let header = decode_object(Segment::Header, header_b64)?;

        tracing::trace!(claims = payload.len(), "token decoded");

        Ok(DecodedToken::new(
            TokenHeader::new(header),
            payload,
            signature.to_string(),
            token.to_string(),
        ))
    }
}

/// Base64URL-decode a segment and parse it as a JSON object
fn decode_object(segment: Segment, value: &str) -> Result<Map<String, Value>> {
    let bytes = base64url::decode_segment(value).map_err(|e| {
        tracing::debug!(%segment, error = %e, "Base64URL decoding failed");
        Error::InvalidBase64Segment {
            segment,
            segment_value: value.to_string(),
        }
    })?;

    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => {
            tracing::debug!(%segment, kind = json_kind(&other), "segment is not a JSON object");
            Err(Error::InvalidJsonSegment {
                segment,
                segment_value: value.to_string(),
            })
        }
        Err(e) => {
            tracing::debug!(%segment, error = %e, "JSON parsing failed");
            Err(Error::InvalidJsonSegment {
                segment,
                segment_value: value.to_string(),
            })
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token(header: &str, payload: &str, signature: &str) -> String {
        format!(
            "{}.{}.{}",
            base64url::encode(header),
            base64url::encode(payload),
            signature
        )
    }

    #[test]
    fn test_decode_valid_token() {
        let token_str = token(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"iss":"test","sub":"user"}"#,
            "signature",
        );
        let token = decode(&token_str).unwrap();

        assert_eq!(token.header().algorithm(), Some("HS256"));
        assert_eq!(token.header().token_type(), Some("JWT"));
        assert_eq!(token.payload().get("iss"), Some(&json!("test")));
        assert_eq!(token.signature(), "signature");
        assert_eq!(token.as_str(), token_str);
    }

    #[test]
    fn test_decode_invalid_format() {
        assert!(matches!(
            decode("not.enough"),
            Err(Error::MalformedToken {
                actual_part_count: 2,
                ..
            })
        ));
        assert!(matches!(
            decode("too.many.parts.here"),
            Err(Error::MalformedToken {
                actual_part_count: 4,
                ..
            })
        ));
        assert_eq!(
            decode("abc"),
            Err(Error::MalformedToken {
                actual_part_count: 1,
                raw_token: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_invalid_base64() {
        let payload = base64url::encode(r#"{"iss":"test"}"#);
        let result = decode(&format!("A.{payload}.sig"));
        assert_eq!(
            result,
            Err(Error::InvalidBase64Segment {
                segment: Segment::Header,
                segment_value: "A".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_invalid_json() {
        let result = decode(&token("not json", r#"{"iss":"test"}"#, "sig"));
        assert!(matches!(
            result,
            Err(Error::InvalidJsonSegment {
                segment: Segment::Header,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_non_object_json() {
        for payload in ["[1,2]", "\"text\"", "42", "null", "true"] {
            let result = decode(&token(r#"{"alg":"none"}"#, payload, ""));
            assert!(
                matches!(
                    result,
                    Err(Error::InvalidJsonSegment {
                        segment: Segment::Payload,
                        ..
                    })
                ),
                "payload {payload} should be rejected"
            );
        }
    }

    #[test]
    fn test_payload_decoded_before_header() {
        let result = decode("A.A.sig");
        assert_eq!(result.unwrap_err().segment(), Some(Segment::Payload));

        let result = decode("a..b");
        assert_eq!(
            result,
            Err(Error::InvalidJsonSegment {
                segment: Segment::Payload,
                segment_value: String::new(),
            })
        );
    }

    #[test]
    fn test_signature_kept_verbatim() {
        let token = decode(&token("{}", "{}", "not base64 at all!")).unwrap();
        assert_eq!(token.signature(), "not base64 at all!");
    }

    #[test]
    fn test_length_limit() {
        let token_str = token(r#"{"alg":"HS256"}"#, r#"{"sub":"user"}"#, "sig");

        let decoder = Decoder::new().max_token_length(token_str.len());
        assert!(decoder.decode(&token_str).is_ok());

        let decoder = Decoder::new().max_token_length(token_str.len() - 1);
        assert_eq!(
            decoder.decode(&token_str),
            Err(Error::TokenTooLarge {
                size: token_str.len(),
                max: token_str.len() - 1,
            })
        );
    }

    #[test]
    fn test_default_limits() {
        let decoder = Decoder::new().with_default_limits();
        let oversized = "a".repeat(MAX_TOKEN_LENGTH + 1);
        assert!(matches!(
            decoder.decode(&oversized),
            Err(Error::TokenTooLarge { .. })
        ));

        // The plain decoder only checks structure
        assert!(matches!(
            Decoder::new().decode(&oversized),
            Err(Error::MalformedToken { .. })
        ));
    }
}
