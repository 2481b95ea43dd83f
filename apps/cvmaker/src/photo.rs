//! Photo payload handling: the size cap is enforced before any state change.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::errors::AppError;

/// 2.5 MB of raw image bytes (2.5 × 1024 × 1024).
pub const MAX_PHOTO_BYTES: usize = 2_621_440;

/// Encodes raw image bytes into a `data:` URL for embedding. Oversized
/// payloads are rejected up front and leave the document untouched.
pub fn encode_data_url(bytes: &[u8], mime: &str) -> Result<String, AppError> {
    if bytes.len() > MAX_PHOTO_BYTES {
        return Err(AppError::PhotoTooLarge { size: bytes.len() });
    }
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}
