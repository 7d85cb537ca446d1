//! Cryptographic Utilities
//!
//! HMAC-SHA256 signing over arbitrary byte keys and URL-safe Base64
//! (no padding), which is safe to place in a cookie value.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signature failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("Signing key rejected")]
    InvalidKey,
    #[error("Signature is not valid Base64")]
    Malformed,
    #[error("Signature mismatch")]
    Mismatch,
}

/// Encode bytes as URL-safe Base64 without padding
pub fn to_base64url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode URL-safe Base64 without padding
pub fn from_base64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

/// Decode standard Base64 (used for secrets supplied through the environment)
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<[u8; 32], SignatureError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| SignatureError::InvalidKey)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}

/// Sign `data` and return the signature as URL-safe Base64
pub fn sign(key: &[u8], data: &[u8]) -> Result<String, SignatureError> {
    hmac_sha256(key, data).map(|tag| to_base64url(&tag))
}

/// Verify a URL-safe Base64 signature in constant time
pub fn verify(key: &[u8], data: &[u8], signature_b64: &str) -> Result<(), SignatureError> {
    let signature = from_base64url(signature_b64).map_err(|_| SignatureError::Malformed)?;

    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| SignatureError::InvalidKey)?;
    mac.update(data);
    mac.verify_slice(&signature)
        .map_err(|_| SignatureError::Mismatch)
}
