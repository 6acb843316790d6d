//! Validated encoding parameters
//!
//! The modulus / exponent pair drives the identifier encoder. It is built
//! once at startup, validated eagerly, and then shared read-only by every
//! conversion.

use num_bigint::BigUint;
use std::str::FromStr;

use super::structs::EncodingSection;
use crate::errors::{ManybahtError, Result};

/// Immutable encoding parameters
///
/// Invariants enforced at construction:
/// - modulus bit length is at least 8 and a multiple of 8, so each chunk's
///   modpow result always fits in its fixed-width slot
/// - exponent is a decimal integer of at least 1; a zero exponent would
///   collapse every chunk to `1 mod n` and encode all inputs identically
#[derive(Debug, Clone)]
pub struct EncodingConfig {
    modulus: BigUint,
    exponent: BigUint,
    chunk_size: usize,
}

impl EncodingConfig {
    /// Build and validate from raw decimal strings
    pub fn new(modulus: &str, exponent: &str) -> Result<Self> {
        let modulus = BigUint::from_str(modulus.trim())
            .map_err(|_| ManybahtError::configuration(format!("invalid modulus: {}", modulus)))?;
        let exponent = BigUint::from_str(exponent.trim())
            .map_err(|_| ManybahtError::configuration(format!("invalid exponent: {}", exponent)))?;

        if exponent.bits() == 0 {
            return Err(ManybahtError::configuration("exponent must be at least 1"));
        }

        let bits = modulus.bits();
        if bits < 8 {
            return Err(ManybahtError::configuration(format!(
                "modulus too small: {} bits, need at least 8",
                bits
            )));
        }
        if bits % 8 != 0 {
            return Err(ManybahtError::configuration(format!(
                "modulus bit length must be a multiple of 8, got {}",
                bits
            )));
        }

        let chunk_size = (bits / 8) as usize;
        Ok(Self {
            modulus,
            exponent,
            chunk_size,
        })
    }

    /// Build from a parsed config file section
    pub fn from_section(section: &EncodingSection) -> Result<Self> {
        Self::new(&section.modulus, &section.exponent)
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn exponent(&self) -> &BigUint {
        &self.exponent
    }

    /// Plaintext chunk width in bytes, `bit_length(modulus) / 8`
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}
