//! Record id allocation.
//!
//! A candidate id is the hex MD5 digest of a random non-negative 63-bit
//! integer. Collisions are practically impossible, so the retry bound only
//! stops a broken random source from spinning forever.

use rand::RngCore;
use tracing::warn;

use crate::core::constants::ID_ALLOC_ATTEMPTS;
use crate::core::types::RecordId;
use crate::error::{Result, VaultError};

/// Draws a fresh candidate id from `rng`.
pub fn candidate<R: RngCore>(rng: &mut R) -> RecordId {
    let n = (rng.next_u64() >> 1) as i64;
    format!("{:x}", md5::compute(n.to_string().as_bytes()))
}

/// Allocate an id for which `taken` returns false.
///
/// # Errors
///
/// Returns `VaultError::AllocateIdFailed` after [`ID_ALLOC_ATTEMPTS`]
/// colliding candidates.
pub fn allocate<R, F>(rng: &mut R, taken: F) -> Result<RecordId>
where
    R: RngCore,
    F: Fn(&str) -> bool,
{
    for attempt in 1..=ID_ALLOC_ATTEMPTS {
        let id = candidate(rng);
        if !taken(&id) {
            return Ok(id);
        }
        warn!(attempt, "id collision");
    }
    Err(VaultError::AllocateIdFailed {
        attempts: ID_ALLOC_ATTEMPTS,
    }
    .into())
}
