//! Size limit constants for input validation

/// Maximum length for a JWT token string (64KB)
///
/// Applied by [`Decoder::with_default_limits`](crate::Decoder::with_default_limits).
/// The plain [`decode`](crate::decode) function accepts tokens of any length.
pub const MAX_TOKEN_LENGTH: usize = 64 * 1024;
