//! Computes the n-th prime with a Sieve of Eratosthenes sized by Rosser's
//! upper bound.

mod bitmap;
mod bound;
pub mod timer;

use std::collections::TryReserveError;

use log::debug;

pub use bitmap::CompositeBitmap;
pub use bound::{bound, MIN_BOUND};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Memory allocation failed. A bitmap over [0, {limit}] does not fit in the address space.")]
    AddressSpace { limit: u64 },
    #[error("Memory allocation failed. Could not reserve a bitmap over [0, {limit}]: {source}")]
    Allocation {
        limit: u64,
        #[source]
        source: TryReserveError,
    },
}

impl Error {
    /// The bound the sieve attempted to allocate for.
    pub fn limit(&self) -> u64 {
        match self {
            Error::AddressSpace { limit } | Error::Allocation { limit, .. } => *limit,
        }
    }
}

/// Returns the `n`-th prime, counting from `nth_prime(1) == 2`.
///
/// Fails only if the composite bitmap for [`bound(n)`](fn@bound) cannot be
/// allocated.
///
/// # Panics
///
/// If `n == 0`.
pub fn nth_prime(n: u64) -> Result<u64, Error> {
    assert!(n >= 1, "prime indices start at 1");
    if n == 1 {
        return Ok(2);
    }

    let limit = bound(n);
    let cells = usize::try_from(limit)
        .ok()
        .and_then(|limit| limit.checked_add(1))
        .ok_or(Error::AddressSpace { limit })?;
    debug!("Sieving [0, {limit}] for prime no {n} with a bitmap of {cells} cells");
    let mut composite =
        CompositeBitmap::try_new(cells).map_err(|source| Error::Allocation { limit, source })?;

    let mut count = 0;
    for candidate in 2..composite.len() {
        if composite.is_composite(candidate) {
            continue;
        }
        count += 1;
        if count == n {
            debug!("Prime no {n} is {candidate}");
            return Ok(candidate as u64);
        }
        composite.mark_multiples(candidate);
    }

    unreachable!("only {count} primes in [2, {limit}], but prime no {n} is at most {limit}")
}
