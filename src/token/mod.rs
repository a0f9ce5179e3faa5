// Internal modules
mod decoded;
mod decoder;
mod header;

// Public API exports
pub use decoded::DecodedToken;
pub use decoder::{Decoder, decode};
pub use header::TokenHeader;
