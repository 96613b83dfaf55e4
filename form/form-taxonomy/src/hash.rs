//! FNV-1a hashing for canonical signatures.
//!
//! These hashes are not cryptographically secure; they give a stable,
//! platform-independent identity key for a signature string.

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
}

/// 64-bit FNV-1a over raw bytes.
#[must_use]
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &b| fnv1a_byte(hash, b))
}

/// Hash a signature and render it as 16 lowercase hex digits.
///
/// # Example
///
/// ```
/// use form_taxonomy::signature_hash;
///
/// assert_eq!(signature_hash(""), "cbf29ce484222325");
/// assert_eq!(signature_hash("a"), "af63dc4c8601ec8c");
/// ```
#[must_use]
pub fn signature_hash(signature: &str) -> String {
    format!("{:016x}", fnv1a_64(signature.as_bytes()))
}
