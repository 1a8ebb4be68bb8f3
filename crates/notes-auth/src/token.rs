//! Opaque random tokens.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;

/// Entropy of a session token in bytes.
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Entropy of a share-link token in bytes.
pub const SHARE_TOKEN_BYTES: usize = 24;

/// Draws `bytes` bytes from the OS CSPRNG and encodes them as URL-safe,
/// unpadded base64.
pub fn generate_token(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    OsRng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(&buf)
}
