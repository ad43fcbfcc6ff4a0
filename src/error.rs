/// Errors returned by [`split`](crate::split) and [`combine`](crate::combine).
///
/// Every variant maps to a caller-input problem; none of them is retried or
/// corrected internally. A division by the zero field element is not in this
/// list on purpose: it can only come from a broken internal invariant and
/// panics instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The threshold `k` is smaller than 2.
    #[error("threshold must be at least 2 but not more than 255")]
    InvalidThreshold,
    /// The share count `n` is smaller than the threshold.
    #[error("shares must be more or equal to threshold but not more than 255")]
    InvalidCount,
    /// The secret to split is empty.
    #[error("secret can not be empty")]
    EmptySecret,
    /// The secure randomness source failed to produce bytes.
    #[error("randomness source failed")]
    RandomnessFailure,
    /// Fewer than 2 shares, shares of unequal length or shares with
    /// duplicate coordinates were supplied.
    #[error("at least 2 shares are required and must have same length")]
    InvalidShares,
}
