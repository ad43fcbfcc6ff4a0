//! [Shamir's Secret Sharing](https://en.wikipedia.org/wiki/Shamir%27s_Secret_Sharing)
//! over GF(2^8): split a byte-string secret into `n` shares so that any `k`
//! of them recover it exactly, while `k - 1` or fewer reveal nothing.
//!
//! Each byte of the secret seeds its own random polynomial of degree
//! `k - 1` whose intercept is that byte. The polynomials are evaluated at
//! `n` distinct nonzero coordinates drawn as a secure random permutation,
//! and each share carries its evaluations plus the coordinate as a trailing
//! byte. Recovery interpolates every byte position at zero with Lagrange's
//! formula.
//!
//! # Usage
//! ## (std)
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use shamir256::{combine, split};
//!
//! // Any 3 of the 5 shares recover the secret
//! let shares = split(b"example", 5, 3).unwrap();
//! let secret = combine(&shares[..3]).unwrap();
//! assert_eq!(secret, b"example");
//! # }
//! ```
//!
//! ## (no std)
//!
//! ```
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//! use shamir256::{combine, split_rng};
//!
//! // Bring your own cryptographically secure generator
//! let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
//! let shares = split_rng(b"example", 5, 3, &mut rng).unwrap();
//! let secret = combine(&shares[1..4]).unwrap();
//! assert_eq!(secret, b"example");
//! ```
//!
//! Combining fewer than `k` well-formed shares does not fail; it returns a
//! byte string that is simply not the secret. That is the threshold
//! property of the scheme, not a detectable condition.
//!
//! # Field
//!
//! All arithmetic happens in GF(2^8) under the AES polynomial
//! `x^8 + x^4 + x^3 + x + 1` (0x11b). Shares are only compatible between
//! implementations that agree on the modulus.
//!
//! # Feature flags
//!
//! - `std` — enables the [`split`] convenience, which reads the operating
//!   system's randomness source per call. Without `std`, use [`split_rng`].
//! - `zeroize_memory` — wipes shares and polynomial coefficients from
//!   memory on drop.
//! - `fuzzing` — `Arbitrary` derives for the fuzz harness.
//!
//! This crate has not been audited by cryptography or security
//! professionals; treat it as a reference implementation of the algorithm.
#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod field;
mod math;
mod share;

extern crate alloc;

use alloc::vec::Vec;
use hashbrown::HashSet;
use rand::{CryptoRng, RngCore};

pub use error::Error;
pub use field::GF256;
pub use share::Share;

use math::Polynomial;

/// Splits `secret` into `n` shares of which any `k` recover it, drawing all
/// randomness from `rng`.
///
/// This is the entry point when `std` is not available or when the caller
/// wants to control the randomness source; for typical usage see [`split`].
/// The generator must be cryptographically secure. Coefficients and share
/// coordinates are drawn fresh from it on every call; nothing is cached
/// across invocations.
///
/// Each returned share serializes to `secret.len() + 1` bytes, and the
/// trailing coordinate bytes are pairwise distinct and nonzero.
///
/// # Errors
///
/// - [`Error::InvalidThreshold`] when `k < 2`
/// - [`Error::InvalidCount`] when `n < k`
/// - [`Error::EmptySecret`] when `secret` is empty
/// - [`Error::RandomnessFailure`] when `rng` fails; no weaker source is
///   substituted
///
/// Example:
/// ```
/// use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
///
/// let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = shamir256::split_rng(b"example", 5, 3, &mut rng).unwrap();
/// assert_eq!(shares.len(), 5);
/// ```
pub fn split_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    n: u8,
    k: u8,
    rng: &mut R,
) -> Result<Vec<Share>, Error> {
    if k < 2 {
        return Err(Error::InvalidThreshold);
    }
    if n < k {
        return Err(Error::InvalidCount);
    }
    if secret.is_empty() {
        return Err(Error::EmptySecret);
    }

    // The first n entries of a random permutation of 1..=255: distinct and
    // nonzero by construction.
    let coordinates = math::shuffled_coordinates(rng)?;
    let mut shares: Vec<Share> = coordinates[..n as usize]
        .iter()
        .map(|&x| Share {
            x: GF256(x),
            y: Vec::with_capacity(secret.len()),
        })
        .collect();

    for &byte in secret {
        let polynomial = Polynomial::random(GF256(byte), k, rng)?;
        for share in shares.iter_mut() {
            share.y.push(polynomial.eval(share.x));
        }
    }

    Ok(shares)
}

/// Splits `secret` into `n` shares of which any `k` recover it, reading the
/// operating system's randomness source.
///
/// See [`split_rng`] for the validation rules and error values. The source
/// is read per call; if it is unavailable the call fails with
/// [`Error::RandomnessFailure`] rather than falling back to anything
/// weaker.
///
/// Example:
/// ```
/// let shares = shamir256::split(b"example", 5, 3).unwrap();
/// assert_eq!(shares.len(), 5);
/// ```
#[cfg(feature = "std")]
pub fn split(secret: &[u8], n: u8, k: u8) -> Result<Vec<Share>, Error> {
    let mut rng = rand::rngs::OsRng;
    split_rng(secret, n, k, &mut rng)
}

/// Combines shares back into the secret they were split from.
///
/// At least 2 shares are required, all of the same length and with pairwise
/// distinct coordinates; any violation is [`Error::InvalidShares`] and no
/// partial output is produced. Supplying at least `k` of the original
/// shares yields the exact secret. Fewer well-formed shares yield a wrong
/// byte string, not an error; the scheme cannot tell.
///
/// Example:
/// ```
/// use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
///
/// let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = shamir256::split_rng(&[1, 2, 3, 4], 5, 2, &mut rng).unwrap();
/// let secret = shamir256::combine(&shares[3..]).unwrap();
/// assert_eq!(secret, vec![1, 2, 3, 4]);
/// ```
pub fn combine(shares: &[Share]) -> Result<Vec<u8>, Error> {
    if shares.len() < 2 {
        return Err(Error::InvalidShares);
    }

    let length = shares[0].y.len();
    if length == 0 {
        return Err(Error::InvalidShares);
    }

    let mut coordinates: HashSet<u8> = HashSet::with_capacity(shares.len());
    for share in shares {
        if share.y.len() != length || !coordinates.insert(share.x.0) {
            return Err(Error::InvalidShares);
        }
    }

    let mut xs = Vec::with_capacity(shares.len());
    let mut ys = Vec::with_capacity(shares.len());
    let mut secret = Vec::with_capacity(length);
    for i in 0..length {
        xs.clear();
        ys.clear();
        for share in shares {
            xs.push(share.x);
            ys.push(share.y[i]);
        }
        secret.push(math::interpolate(&xs, &ys, GF256(0)).0);
    }

    Ok(secret)
}
