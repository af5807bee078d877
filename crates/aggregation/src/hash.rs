//! Stable string hashing for deterministic derivations.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hashes a string with a fixed-key hasher so the same input always yields
/// the same value within a process.
///
/// Used wherever a product id must map to the same derived data on every
/// call: category assignment and the simulated provider payloads.
pub(crate) fn stable_hash(input: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    hasher.finish()
}
