// The algorithms behind splitting and combining: random polynomials with a
// fixed intercept, Horner evaluation, Lagrange interpolation and the secure
// shuffle that picks evaluation coordinates.

use alloc::vec;
use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};

use super::error::Error;
use super::field::GF256;

#[cfg(feature = "zeroize_memory")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A polynomial over GF(2^8) whose value at zero is one byte of the secret.
///
/// Coefficients are stored from the highest degree down to the intercept,
/// so evaluation is a single Horner fold.
#[cfg_attr(feature = "zeroize_memory", derive(Zeroize, ZeroizeOnDrop))]
pub(crate) struct Polynomial(Vec<GF256>);

impl Polynomial {
    /// Builds a polynomial of degree `k - 1` with the given intercept and
    /// `k - 1` higher coefficients drawn uniformly from the field.
    ///
    /// A failing randomness source surfaces as [`Error::RandomnessFailure`];
    /// the coefficients are never zero-filled or drawn from a fallback.
    pub(crate) fn random<R: RngCore + CryptoRng>(
        intercept: GF256,
        k: u8,
        rng: &mut R,
    ) -> Result<Polynomial, Error> {
        let mut bytes = vec![0u8; k as usize - 1];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|_| Error::RandomnessFailure)?;

        let mut coefficients: Vec<GF256> = bytes.iter().copied().map(GF256).collect();
        #[cfg(feature = "zeroize_memory")]
        bytes.zeroize();
        coefficients.push(intercept);

        Ok(Polynomial(coefficients))
    }

    /// Evaluates the polynomial at `x`; `eval(GF256(0))` is the intercept.
    pub(crate) fn eval(&self, x: GF256) -> GF256 {
        self.0.iter().fold(GF256(0), |acc, &c| acc * x + c)
    }
}

/// Evaluates at `x` the unique minimal-degree polynomial passing through the
/// given points, by the Lagrange formula over GF(2^8). Combining calls this
/// with `x = 0` to read off the intercept.
///
/// The x-coordinates must be pairwise distinct. That is the caller's
/// contract; a repeated coordinate makes a basis denominator zero and panics
/// in field division rather than returning a silently wrong byte.
pub(crate) fn interpolate(xs: &[GF256], ys: &[GF256], x: GF256) -> GF256 {
    assert!(xs.len() == ys.len(), "sample length mismatch");

    let mut result = GF256(0);
    for (i, &x_i) in xs.iter().enumerate() {
        let mut basis = GF256(1);
        for (j, &x_j) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            basis = basis * ((x - x_j) / (x_i - x_j));
        }
        result = result + ys[i] * basis;
    }

    result
}

/// Produces a uniformly random permutation of the 255 nonzero field
/// elements, Fisher-Yates driven directly by the secure source. Splitting
/// takes the first `n` entries as share coordinates, which makes them
/// distinct and nonzero without any uniqueness-checking loop.
pub(crate) fn shuffled_coordinates<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<[u8; 255], Error> {
    let mut coordinates = [0u8; 255];
    for (i, coordinate) in coordinates.iter_mut().enumerate() {
        *coordinate = i as u8 + 1;
    }

    for i in (1..coordinates.len()).rev() {
        let j = uniform_index(rng, i + 1)?;
        coordinates.swap(i, j);
    }

    Ok(coordinates)
}

// Uniform draw from `0..bound` for `bound <= 256`, rejecting the remainder
// of the byte range that would bias small indices.
fn uniform_index<R: RngCore + CryptoRng>(rng: &mut R, bound: usize) -> Result<usize, Error> {
    let zone = 256 - 256 % bound;
    loop {
        let mut byte = [0u8; 1];
        rng.try_fill_bytes(&mut byte)
            .map_err(|_| Error::RandomnessFailure)?;
        if (byte[0] as usize) < zone {
            return Ok(byte[0] as usize % bound);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{interpolate, shuffled_coordinates, Polynomial, GF256};
    use alloc::vec::Vec;
    use hashbrown::HashSet;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn random_polynomial_keeps_intercept() {
        let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
        let poly = Polynomial::random(GF256(1), 3, &mut rng).unwrap();
        assert_eq!(poly.0.len(), 3);
        assert_eq!(poly.0[2], GF256(1));
    }

    #[test]
    fn eval_at_zero_is_intercept() {
        let mut rng = ChaCha8Rng::from_seed([0x45; 32]);
        for intercept in [0u8, 1, 42, 185, 255] {
            let poly = Polynomial::random(GF256(intercept), 10, &mut rng).unwrap();
            assert_eq!(poly.eval(GF256(0)), GF256(intercept));
        }
    }

    #[test]
    fn eval_known_polynomial() {
        // 3x^2 + 2x + 5
        let poly = Polynomial(Vec::from([GF256(3), GF256(2), GF256(5)]));
        assert_eq!(poly.eval(GF256(1)), GF256(4));
        assert_eq!(poly.eval(GF256(2)), GF256(13));
    }

    #[test]
    fn interpolate_recovers_intercept() {
        let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
        let poly = Polynomial::random(GF256(185), 10, &mut rng).unwrap();

        let xs: Vec<GF256> = (1..=10u8).map(GF256).collect();
        let ys: Vec<GF256> = xs.iter().map(|&x| poly.eval(x)).collect();

        assert_eq!(interpolate(&xs, &ys, GF256(0)), GF256(185));
    }

    #[test]
    fn interpolate_matches_eval_at_arbitrary_x() {
        let mut rng = ChaCha8Rng::from_seed([0x17; 32]);
        let poly = Polynomial::random(GF256(99), 4, &mut rng).unwrap();

        let xs: Vec<GF256> = [3u8, 76, 140, 201].iter().copied().map(GF256).collect();
        let ys: Vec<GF256> = xs.iter().map(|&x| poly.eval(x)).collect();

        for probe in [0u8, 1, 7, 142, 255] {
            assert_eq!(interpolate(&xs, &ys, GF256(probe)), poly.eval(GF256(probe)));
        }
    }

    #[test]
    fn interpolate_two_points_line() {
        // f(x) = 42 + 7x, sampled at x = 1 and x = 2
        let xs = [GF256(1), GF256(2)];
        let ys = [GF256(42) + GF256(7), GF256(42) + GF256(7) * GF256(2)];
        assert_eq!(interpolate(&xs, &ys, GF256(0)), GF256(42));
    }

    #[test]
    fn shuffled_coordinates_are_a_permutation() {
        let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
        let coordinates = shuffled_coordinates(&mut rng).unwrap();

        let distinct: HashSet<u8> = coordinates.iter().copied().collect();
        assert_eq!(distinct.len(), 255);
        assert!(!distinct.contains(&0));
    }

    #[test]
    fn shuffled_coordinates_vary_with_the_source() {
        let mut a = ChaCha8Rng::from_seed([0x01; 32]);
        let mut b = ChaCha8Rng::from_seed([0x02; 32]);
        assert_ne!(
            shuffled_coordinates(&mut a).unwrap(),
            shuffled_coordinates(&mut b).unwrap(),
        );
    }
}
