//! Determinism hash — a normalized content fingerprint of an enhanced prompt.
//!
//! Two outputs that differ only in case, surrounding whitespace or Unicode
//! compatibility forms hash identically. Not a security primitive.

use sha2::{Digest, Sha256};
use unicode_normalization::UnicodeNormalization;

pub fn normalize_for_hash(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    folded.trim().to_lowercase()
}

pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn compute_determinism_hash(enhanced_prompt: &str) -> String {
    sha256_hex(&normalize_for_hash(enhanced_prompt))
}
