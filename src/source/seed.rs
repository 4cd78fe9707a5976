//! Seed handling for the synthetic source.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// Turns a seed argument into a `u64`.
///
/// Integers are used as-is (negative values keep their bit pattern);
/// anything else is hashed, so every string names a reproducible run.
pub fn parse_seed(arg: &str) -> u64 {
    let trimmed = arg.trim();
    if let Ok(seed) = trimmed.parse::<u64>() {
        return seed;
    }
    if let Ok(seed) = trimmed.parse::<i64>() {
        return seed as u64;
    }
    let mut hasher = DefaultHasher::new();
    arg.hash(&mut hasher);
    hasher.finish()
}

/// Seed derived from the current time (nanoseconds since the Unix epoch).
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
