//! Base64URL encoding/decoding per RFC 4648
//!
//! Token segments are decoded leniently: the URL-safe alphabet is translated to
//! the standard one, padding is restored, and any character outside the
//! standard alphabet is skipped instead of rejected. Real-world tokens
//! occasionally carry stray whitespace or padding, and this mirrors how common
//! JWT decoders treat them. It is a tolerance, not a validation guarantee.

use base64::{
    DecodeError, Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::URL_SAFE_NO_PAD},
};

/// Standard alphabet, padding optional, trailing bits tolerated
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Translate a Base64URL segment to the standard alphabet and pad it to a
/// multiple of four characters
pub fn normalize(segment: &str) -> String {
    let mut normalized: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let padding = (4 - normalized.len() % 4) % 4;
    normalized.extend(std::iter::repeat_n('=', padding));
    normalized
}

/// Decode a token segment to bytes
///
/// An empty segment decodes to an empty vector. Characters outside the
/// standard alphabet (including `=`) are ignored; the remaining symbols must
/// still form a valid Base64 length.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
    let symbols: String = normalize(segment)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '+' || *c == '/')
        .collect();

    LENIENT_STANDARD.decode(symbols)
}

/// Encode bytes to an unpadded Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a string to an unpadded Base64URL string
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}
