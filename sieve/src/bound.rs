//! Upper bound on the n-th prime.

/// Smallest bound handed out for `n >= 2`.
///
/// For `n < 6` the Rosser estimate is either undefined or too tight
/// (`ln ln n <= 0` for `n <= 2`), so it is raised to this value, which
/// covers `p_5 = 11`.
pub const MIN_BOUND: u64 = 15;

/// Returns an integer `L` with `p_n <= L`.
///
/// Uses Rosser's bound `p_n < n (ln n + ln ln n)`, valid for `n >= 6`.
/// For `n <= 1` the answer is `2` itself.
///
/// The float to integer conversion saturates, so an index too large for the
/// estimate yields `u64::MAX`; the caller reports that as an allocation
/// failure rather than this function failing.
pub fn bound(n: u64) -> u64 {
    if n <= 1 {
        return 2;
    }
    let n = n as f64;
    let ln = n.ln();
    let estimate = (n * ln + n * ln.ln()).ceil();
    (estimate as u64).max(MIN_BOUND)
}
