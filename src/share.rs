use alloc::vec::Vec;

use super::error::Error;
use super::field::GF256;

#[cfg(feature = "fuzzing")]
use arbitrary::Arbitrary;

#[cfg(feature = "zeroize_memory")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One share of a split secret.
///
/// A share holds the coordinate `x` its polynomials were evaluated at, and
/// one `y` value per byte of the secret. On the wire a share is
/// `len(secret) + 1` raw bytes: the `y` values followed by the trailing
/// coordinate byte, with no framing, checksum or versioning.
///
/// Usage example:
/// ```
/// use shamir256::Share;
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// # fn send_to_printer(_: Vec<u8>) {}
/// # let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = shamir256::split_rng(&[1, 2, 3], 5, 3, &mut rng).unwrap();
///
/// // Print the shares as paper keys
/// let mut printed = Vec::new();
/// for s in &shares {
///     let bytes = Vec::from(s);
///     printed.push(bytes.clone());
///     send_to_printer(bytes);
/// }
///
/// // Get share bytes back from an external source and recover the secret
/// let shares: Vec<Share> = printed[..3]
///     .iter()
///     .map(|s| Share::try_from(s.as_slice()).unwrap())
///     .collect();
/// let secret = shamir256::combine(&shares).unwrap();
/// assert_eq!(secret, vec![1, 2, 3]);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "fuzzing", derive(Arbitrary, Debug))]
#[cfg_attr(feature = "zeroize_memory", derive(Zeroize, ZeroizeOnDrop))]
pub struct Share {
    /// The coordinate the share was dealt at, never zero for dealt shares.
    pub x: GF256,
    /// One y value per byte of the secret.
    pub y: Vec<GF256>,
}

/// Serializes a share as its wire format, the y bytes followed by the
/// trailing coordinate byte.
impl From<&Share> for Vec<u8> {
    fn from(s: &Share) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(s.y.len() + 1);
        bytes.extend(s.y.iter().map(|p| p.0));
        bytes.push(s.x.0);
        bytes
    }
}

/// Parses a share from its wire format. The slice must be at least 2 bytes,
/// one y value plus the trailing coordinate.
impl core::convert::TryFrom<&[u8]> for Share {
    type Error = Error;

    fn try_from(s: &[u8]) -> Result<Share, Error> {
        if s.len() < 2 {
            return Err(Error::InvalidShares);
        }

        let (y, x) = s.split_at(s.len() - 1);
        Ok(Share {
            x: GF256(x[0]),
            y: y.iter().map(|p| GF256(*p)).collect(),
        })
    }
}
