use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::{Error, FieldBytes};

/// Width of each limb; limb `i` starts at bit `ceil(25.5 * i)`.
const LIMB_BITS: [u32; 10] = [26, 25, 26, 25, 26, 25, 26, 25, 26, 25];

/// Order in which [`FieldElement::carry`] propagates limb overflow.
///
/// Two independent chains (starting at limbs 0 and 4) are interleaved, the
/// carry out of limb 9 wraps around to limb 0 multiplied by 19 and a final
/// carry from limb 0 settles it.
const CARRY_ORDER: [usize; 12] = [0, 4, 1, 5, 2, 6, 3, 7, 4, 8, 9, 0];

/// Element of the prime field modulo `p = 2^255 - 19`.
///
/// Uses 10 signed 32-bit limbs (little-endian) in radix `2^25.5`: even limbs
/// carry 26 bits and odd limbs 25 bits of the value when tight.
///
/// Addition, subtraction and negation work limb-wise without carrying.
/// Multiplication and squaring accept any limbs of magnitude up to `2^27`
/// and return tight limbs (magnitude about `2^25`), so the sum of up to four
/// products can be fed straight into the next multiplication.
#[derive(Clone, Copy, Default)]
pub struct FieldElement(pub(crate) [i32; 10]);

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:x}")
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({self:x})")
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for b in self.to_bytes().iter().rev() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for b in self.to_bytes().iter().rev() {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0i32; 10];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = i32::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Self(limbs)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for FieldElement {}

impl TryFrom<&[u8]> for FieldElement {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = FieldBytes::try_from(bytes).map_err(|_| Error::InvalidLength)?;
        Ok(Self::from_bytes(&bytes))
    }
}

impl From<FieldElement> for FieldBytes {
    fn from(fe: FieldElement) -> Self {
        fe.to_bytes()
    }
}

impl From<&FieldElement> for FieldBytes {
    fn from(fe: &FieldElement) -> Self {
        fe.to_bytes()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for FieldElement {}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        let mut limbs = self.0;
        for (l, r) in limbs.iter_mut().zip(other.0.iter()) {
            *l += r;
        }
        FieldElement(limbs)
    }
}

define_add_variants!(
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);
define_add_assign_variants!(LHS = FieldElement, RHS = FieldElement);

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        let mut limbs = self.0;
        for (l, r) in limbs.iter_mut().zip(other.0.iter()) {
            *l -= r;
        }
        FieldElement(limbs)
    }
}

define_sub_variants!(
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);
define_sub_assign_variants!(LHS = FieldElement, RHS = FieldElement);

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::mul(self, other)
    }
}

define_mul_variants!(
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);
define_mul_assign_variants!(LHS = FieldElement, RHS = FieldElement);

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        let mut limbs = self.0;
        for l in limbs.iter_mut() {
            *l = -*l;
        }
        FieldElement(limbs)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| (acc + x).normalize_weak())
    }
}

impl<'a> Sum<&'a FieldElement> for FieldElement {
    fn sum<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Mul::mul).unwrap_or(Self::ONE)
    }
}

impl<'a> Product<&'a FieldElement> for FieldElement {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    /// `p - 1`
    pub const MINUS_ONE: Self = Self([-1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    /// Edwards curve constant `d = -121665 / 121666`.
    pub const EDWARDS_D: Self = Self([
        56195235, 13857412, 51736253, 6949390, 114729, 24766616, 60832955, 30306712, 48412415,
        21499315,
    ]);
    /// `2^((p - 1) / 4)`, a square root of `-1`.
    pub const SQRT_M1: Self = Self([
        34513072, 25610706, 9377949, 3500415, 12389472, 33281959, 41962654, 31548777, 326685,
        11406482,
    ]);

    /// Creates a field element from a small integer.
    pub const fn from_u64(value: u64) -> Self {
        Self([
            (value & 0x3ff_ffff) as i32,
            ((value >> 26) & 0x1ff_ffff) as i32,
            (value >> 51) as i32,
            0,
            0,
            0,
            0,
            0,
            0,
            0,
        ])
    }

    /// Decodes a little-endian encoding.
    ///
    /// Bit 255 is ignored. Values in `[p, 2^255)` are accepted and reduced,
    /// so this never fails; see [`FieldElement::from_canonical_bytes`] for
    /// the strict variant.
    pub fn from_bytes(bytes: &FieldBytes) -> Self {
        fn load3(b: &[u8]) -> i64 {
            i64::from(b[0]) | (i64::from(b[1]) << 8) | (i64::from(b[2]) << 16)
        }

        fn load4(b: &[u8]) -> i64 {
            load3(b) | (i64::from(b[3]) << 24)
        }

        Self::carry([
            load4(&bytes[0..4]),
            load3(&bytes[4..7]) << 6,
            load3(&bytes[7..10]) << 5,
            load3(&bytes[10..13]) << 3,
            load3(&bytes[13..16]) << 2,
            load4(&bytes[16..20]),
            load3(&bytes[20..23]) << 7,
            load3(&bytes[23..26]) << 5,
            load3(&bytes[26..29]) << 4,
            (load3(&bytes[29..32]) & 0x7f_ffff) << 2,
        ])
    }

    /// Decodes a little-endian encoding, returning `None` unless bit 255 is
    /// clear and the encoded integer is below `p`.
    pub fn from_canonical_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        let fe = Self::from_bytes(bytes);
        let is_canonical = fe.to_bytes()[..].ct_eq(&bytes[..]);
        CtOption::new(fe, is_canonical)
    }

    /// Returns the canonical little-endian encoding of this element.
    ///
    /// The value is fully reduced first, so bit 255 is always clear.
    pub fn to_bytes(&self) -> FieldBytes {
        let limbs = self.normalize().0;

        let mut bytes = [0u8; 32];
        let mut acc = 0u64;
        let mut acc_bits = 0u32;
        let mut pos = 0;
        for (&limb, bits) in limbs.iter().zip(LIMB_BITS) {
            acc |= u64::from(limb.unsigned_abs()) << acc_bits;
            acc_bits += bits;
            while acc_bits >= 8 {
                bytes[pos] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                pos += 1;
            }
        }
        // 255 bits: the last 7 are still in the accumulator
        bytes[pos] = acc as u8;
        bytes
    }

    /// Fully reduces the limbs to the canonical representative of the
    /// value in `[0, p)`.
    pub fn normalize(&self) -> Self {
        let mut h = self.normalize_weak().0.map(i64::from);

        // q = floor(h / p), which is 0 or 1 for tight limbs
        let mut q = (19 * h[9] + (1 << 24)) >> 25;
        for (limb, bits) in h.iter().zip(LIMB_BITS) {
            q = (limb + q) >> bits;
        }

        // h - q * p = h + 19 * q - q * 2^255
        h[0] += 19 * q;
        let mut carry = 0;
        for (limb, bits) in h.iter_mut().zip(LIMB_BITS) {
            *limb += carry;
            carry = *limb >> bits;
            *limb -= carry << bits;
        }
        // the final carry is q * 2^255 and is dropped

        Self(h.map(|limb| limb as i32))
    }

    /// Brings every limb back to about `2^25` in magnitude without fully
    /// reducing the value.
    pub fn normalize_weak(&self) -> Self {
        Self::carry(self.0.map(i64::from))
    }

    /// Propagates carries through wide limbs, folding the overflow above
    /// `2^255` back into the lowest limb as a multiple of 19.
    ///
    /// Limbs may be as large as `2^62` in magnitude.
    fn carry(mut h: [i64; 10]) -> Self {
        for i in CARRY_ORDER {
            let bits = LIMB_BITS[i];
            let carry = (h[i] + (1 << (bits - 1))) >> bits;
            h[i] -= carry << bits;
            if i == 9 {
                h[0] += carry * 19;
            } else {
                h[i + 1] += carry;
            }
        }

        Self(h.map(|limb| limb as i32))
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut h = [0i64; 10];
        for (i, &a) in self.0.iter().enumerate() {
            for (j, &b) in rhs.0.iter().enumerate() {
                let mut t = i64::from(a) * i64::from(b);
                // Two odd limbs overlap by half a bit.
                if i & j & 1 == 1 {
                    t *= 2;
                }
                if i + j < 10 {
                    h[i + j] += t;
                } else {
                    h[i + j - 10] += 19 * t;
                }
            }
        }

        Self::carry(h)
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        let mut h = [0i64; 10];
        for (i, &a) in self.0.iter().enumerate() {
            for (j, &b) in self.0.iter().enumerate().skip(i) {
                let mut t = i64::from(a) * i64::from(b);
                if i != j {
                    t *= 2;
                }
                if i & j & 1 == 1 {
                    t *= 2;
                }
                if i + j < 10 {
                    h[i + j] += t;
                } else {
                    h[i + j - 10] += 19 * t;
                }
            }
        }

        Self::carry(h)
    }

    /// Returns `2 * self`, with limbs bounded like [`Add`] results.
    pub fn double(&self) -> Self {
        self + self
    }

    /// Squares a field element `k` times.
    fn pow2k(&self, k: u32) -> Self {
        let mut x = *self;
        for _ in 0..k {
            x = x.square();
        }
        x
    }

    /// Returns `(self^(2^250 - 1), self^11)`, the shared prefix of the
    /// inversion and square root addition chains.
    fn pow22501(&self) -> (Self, Self) {
        let t0 = self.square(); // 2
        let t1 = t0.pow2k(2); // 8
        let t1 = self * t1; // 9
        let t0 = t0 * t1; // 11
        let t2 = t0.square(); // 22
        let t1 = t1 * t2; // 2^5 - 1
        let t2 = t1.pow2k(5);
        let t1 = t2 * t1; // 2^10 - 1
        let t2 = t1.pow2k(10);
        let t2 = t2 * t1; // 2^20 - 1
        let t3 = t2.pow2k(20);
        let t2 = t3 * t2; // 2^40 - 1
        let t2 = t2.pow2k(10);
        let t1 = t2 * t1; // 2^50 - 1
        let t2 = t1.pow2k(50);
        let t2 = t2 * t1; // 2^100 - 1
        let t3 = t2.pow2k(100);
        let t2 = t3 * t2; // 2^200 - 1
        let t2 = t2.pow2k(50);
        let t1 = t2 * t1; // 2^250 - 1

        (t1, t0)
    }

    /// Inverts a field element by raising it to `p - 2 = 2^255 - 21`.
    ///
    /// Zero has no inverse; it maps to zero and callers must not rely on
    /// that result.
    pub fn invert(&self) -> Self {
        let (t19, t3) = self.pow22501();
        let t20 = t19.pow2k(5); // 2^255 - 2^5
        t20 * t3
    }

    /// Raises `self` to `(p - 5) / 8 = 2^252 - 3`.
    fn pow_p58(&self) -> Self {
        let (t19, _) = self.pow22501();
        let t20 = t19.pow2k(2); // 2^252 - 4
        self * t20
    }

    /// Computes the non-negative square root of `u / v` without inverting
    /// `v`.
    ///
    /// Since `p = 5 mod 8` the candidate `r = u v^3 (u v^7)^((p-5)/8)`
    /// satisfies `v r^2 = ±u` whenever `u / v` is a square; in the `-u` case
    /// it is corrected by [`FieldElement::SQRT_M1`].
    ///
    /// Returns `(Choice(1), sqrt(u/v))` if `u / v` is a square (including
    /// `u = 0`), and `(Choice(0), garbage)` otherwise or when `v = 0` and
    /// `u != 0`.
    pub fn sqrt_ratio_i(u: &Self, v: &Self) -> (Choice, Self) {
        let v3 = v.square() * v;
        let v7 = v3.square() * v;
        let mut r = (u * v3) * (u * v7).pow_p58();
        let check = v * r.square();

        let neg_u = -u;
        let correct_sign_sqrt = check.ct_eq(u);
        let flipped_sign_sqrt = check.ct_eq(&neg_u);
        let flipped_sign_sqrt_i = check.ct_eq(&(neg_u * Self::SQRT_M1));

        let r_prime = Self::SQRT_M1 * r;
        r.conditional_assign(&r_prime, flipped_sign_sqrt | flipped_sign_sqrt_i);

        let r_is_negative = r.is_negative();
        r.conditional_negate(r_is_negative);

        (correct_sign_sqrt | flipped_sign_sqrt, r)
    }

    /// Returns the non-negative square root of `self`, or `None` if `self`
    /// is a quadratic non-residue.
    pub fn sqrt(&self) -> CtOption<Self> {
        let (is_square, root) = Self::sqrt_ratio_i(self, &Self::ONE);
        CtOption::new(root, is_square)
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> Choice {
        self.to_bytes()[..].ct_eq(&[0u8; 32][..])
    }

    /// Least significant bit of the canonical value.
    ///
    /// This is the sign of `x` in a compressed Edwards point.
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }
}
