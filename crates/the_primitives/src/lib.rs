#![forbid(unsafe_code)]
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::result_large_err
)]

//! Shared primitives for the split-policy consensus core: epoch arithmetic,
//! the deterministic length-prefixed encoder, and domain-tagged hashing used
//! wherever a canonical byte image is required (transaction hashing, future
//! header encoding).

use primitive_types::U256;
use sha3::{Digest, Sha3_256};

pub mod constants;
pub mod encoding;
pub mod epoch;

/// 32-byte hash (SHA3-256 output).
pub type Hash256 = [u8; 32];

/// A non-negative arbitrary-precision count of base units: balances,
/// supplies, reward amounts, and cumulative split factors are all `Amount`.
pub type Amount = U256;

/// Domain-tagged SHA3-256 with length framing:
/// `H(tag, parts[])` = `SHA3_256`( UTF8(tag) || Σ ( `LE(|p|,8)` || p ) )
#[must_use]
pub fn h_tag(tag: &str, parts: &[&[u8]]) -> Hash256 {
    debug_assert!(
        tag.starts_with("the."),
        "non-the.* tag used in consensus hashing: {tag}"
    );
    let mut hasher = Sha3_256::new();
    hasher.update(tag.as_bytes());
    for p in parts {
        hasher.update((p.len() as u64).to_le_bytes());
        hasher.update(p);
    }
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Merkle leaf hash of an already length-framed payload (typically the
/// deterministic encoding of a transaction or other consensus object).
#[must_use]
pub fn merkle_leaf(payload: &[u8]) -> Hash256 {
    h_tag(constants::TAG_MERKLE_LEAF, &[payload])
}
