// Scalar arithmetic over GF(2^8), the field every other module computes in.

use core::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "fuzzing")]
use arbitrary::Arbitrary;

#[cfg(feature = "zeroize_memory")]
use zeroize::Zeroize;

// Discrete log and antilog tables for the fixed modulus, built once at
// compile time by walking the powers of the generator. The exp table is laid
// out twice over so `exp[log a + log b]` never needs a reduction mod 255.
const TABLES: ([u8; 256], [u8; 510]) = {
    let mut log = [0u8; 256];
    let mut exp = [0u8; 510];

    let mut x: u8 = 1;
    let mut i: usize = 0;
    while i < 255 {
        exp[i] = x;
        exp[i + 255] = x;
        log[x as usize] = i as u8;

        // next power of the generator: x * 0x03 = (x * 2) + x mod 0x11b
        let mut doubled = x << 1;
        if x & 0x80 != 0 {
            doubled ^= 0x1b;
        }
        x ^= doubled;

        i += 1;
    }

    (log, exp)
};

const LOG: [u8; 256] = TABLES.0;
const EXP: [u8; 510] = TABLES.1;

/// A single element of GF(2^8).
///
/// Arithmetic is polynomial arithmetic over GF(2) modulo the AES polynomial
/// `x^8 + x^4 + x^3 + x + 1` (0x11b), with 0x03 as the generator for the
/// log/exp tables. Shares are only compatible between implementations that
/// agree on this modulus.
///
/// `+` and `-` are both bitwise XOR (the field has characteristic 2), `*`
/// and `/` go through the tables. Dividing by [`GF256(0)`](GF256) panics:
/// zero has no inverse, and a zero divisor can only mean a broken invariant
/// upstream, never a recoverable condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(Arbitrary))]
#[cfg_attr(feature = "zeroize_memory", derive(Zeroize))]
pub struct GF256(pub u8);

impl GF256 {
    /// Returns the multiplicative inverse.
    ///
    /// # Panics
    /// Panics when `self` is the zero element.
    pub fn invert(self) -> GF256 {
        assert!(self.0 != 0, "zero has no multiplicative inverse in GF(2^8)");
        GF256(EXP[255 - LOG[self.0 as usize] as usize])
    }
}

impl Add for GF256 {
    type Output = GF256;

    fn add(self, rhs: GF256) -> GF256 {
        GF256(self.0 ^ rhs.0)
    }
}

/// Subtraction and addition coincide in a characteristic-2 field.
impl Sub for GF256 {
    type Output = GF256;

    fn sub(self, rhs: GF256) -> GF256 {
        GF256(self.0 ^ rhs.0)
    }
}

impl Mul for GF256 {
    type Output = GF256;

    fn mul(self, rhs: GF256) -> GF256 {
        if self.0 == 0 || rhs.0 == 0 {
            return GF256(0);
        }
        GF256(EXP[LOG[self.0 as usize] as usize + LOG[rhs.0 as usize] as usize])
    }
}

impl Div for GF256 {
    type Output = GF256;

    /// # Panics
    /// Panics when `rhs` is the zero element.
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: GF256) -> GF256 {
        self * rhs.invert()
    }
}
