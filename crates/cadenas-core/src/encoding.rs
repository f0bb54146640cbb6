//! Bcrypt-flavored base64 (`./A–Za–z0–9`, no padding).
//!
//! Not interchangeable with standard base64: the alphabet starts with `.`
//! and `/` instead of ending with `+` and `/`, and encoded runs never carry
//! `=` padding. A 16-byte salt encodes to 22 characters, a 23-byte digest
//! to 31.

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, Engine as _};

use crate::error::HashError;

/// Stored salts are not canonical base64 — the final symbol of a 22-character
/// run carries 4 trailing bits that real encoders leave arbitrary.
const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::RequireNone)
    .with_decode_allow_trailing_bits(true);

const BCRYPT64: GeneralPurpose = GeneralPurpose::new(&alphabet::BCRYPT, CONFIG);

/// Encode bytes into the bcrypt alphabet, no padding.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    BCRYPT64.encode(bytes)
}

/// Decode a bcrypt-alphabet run back into bytes.
///
/// # Errors
///
/// Returns [`HashError::Malformed`] if `text` contains characters outside
/// `./A–Za–z0–9`.
pub fn decode(text: &str) -> Result<Vec<u8>, HashError> {
    BCRYPT64
        .decode(text)
        .map_err(|e| HashError::Malformed(format!("invalid bcrypt base64: {e}")))
}
