//! Identifier encoder
//!
//! Deterministic one-way encoding of an arbitrary byte string into a compact
//! URL-safe token, parameterized by the configured modulus and exponent.
//!
//! The plaintext is split into fixed-width chunks sized by the modulus bit
//! length, each chunk is raised to the exponent modulo the modulus, and the
//! results are re-serialized at the same fixed width so a symmetric decoder
//! can find the chunk boundaries. The concatenation is then base64-encoded
//! with a URL-safe alphabet and no padding.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use num_bigint::BigUint;

use crate::config::EncodingConfig;

/// Encode `plaintext` into a URL-safe token.
///
/// Pure and deterministic: identical input and parameters always produce
/// byte-identical output. The empty plaintext encodes to the empty string.
pub fn encode(plaintext: &[u8], config: &EncodingConfig) -> String {
    let chunk_size = config.chunk_size();
    let mut result = Vec::with_capacity(plaintext.len().div_ceil(chunk_size) * chunk_size);

    for chunk in plaintext.chunks(chunk_size) {
        let m = BigUint::from_bytes_be(chunk);
        let c = m.modpow(config.exponent(), config.modulus());

        // Left-pad to exactly chunk_size bytes; c < modulus < 2^(8*chunk_size)
        // holds because the modulus bit length is validated to be a byte
        // multiple, so the slice arithmetic cannot underflow.
        let bytes = c.to_bytes_be();
        let mut padded = vec![0u8; chunk_size];
        padded[chunk_size - bytes.len()..].copy_from_slice(&bytes);
        result.extend_from_slice(&padded);
    }

    // 标准 base64 再替换为 URL 安全字母表（与历史链接格式保持一致）
    STANDARD
        .encode(&result)
        .replace('+', "-")
        .replace('/', "_")
        .trim_end_matches('=')
        .to_string()
}
