//! Curve parameter sets.

use crate::edwards::PointBytes;
use crate::field::FieldElement;
use crate::{AffinePoint, EdwardsPoint, Error, Result};
use crypto_bigint::U256;
use subtle::{Choice, ConditionallyNegatable, ConstantTimeEq};

/// Parameters of a twisted Edwards curve `-x^2 + y^2 = 1 + d x^2 y^2` over
/// the field of integers modulo `2^255 - 19`.
///
/// A parameter set is a plain immutable value: construct it once (or use
/// [`TwistedEdwardsCurve::ED25519`] directly) and pass it by reference to
/// every operation that needs it. All methods take `&self` and are pure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TwistedEdwardsCurve {
    /// Human readable curve name.
    pub name: &'static str,
    /// Field modulus `p`.
    pub modulus: U256,
    /// Curve constant `d`.
    pub d: FieldElement,
    /// Order of the prime-order subgroup generated by the base point.
    pub order: U256,
    /// Ratio between the full group order and `order`.
    pub cofactor: u8,
    /// Generator of the prime-order subgroup.
    pub base_point: AffinePoint,
}

impl TwistedEdwardsCurve {
    /// The edwards25519 curve, birationally equivalent to Curve25519.
    pub const ED25519: Self = Self {
        name: "edwards25519",
        modulus: U256::from_be_hex(
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
        ),
        d: FieldElement::EDWARDS_D,
        order: U256::from_be_hex(
            "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed",
        ),
        cofactor: 8,
        base_point: AffinePoint::GENERATOR,
    };

    /// Returns the edwards25519 parameter set.
    pub const fn ed25519() -> Self {
        Self::ED25519
    }

    /// Checks `-x^2 + y^2 == 1 + d x^2 y^2`.
    pub fn is_on_curve(&self, point: &AffinePoint) -> Choice {
        let xx = point.x.square();
        let yy = point.y.square();
        let lhs = yy - xx;
        let rhs = FieldElement::ONE + self.d * xx * yy;

        lhs.ct_eq(&rhs)
    }

    /// Checks the homogenised curve equation `-X^2 + Y^2 == Z^2 + d T^2`
    /// together with the extended coordinate invariant `X Y == Z T`.
    pub fn is_on_curve_extended(&self, point: &EdwardsPoint) -> Choice {
        let XY = point.X * point.Y;
        let ZT = point.Z * point.T;

        let XX = point.X.square();
        let YY = point.Y.square();
        let ZZ = point.Z.square();
        let TT = point.T.square();
        let lhs = YY - XX;
        let rhs = ZZ + self.d * TT;

        XY.ct_eq(&ZT) & lhs.ct_eq(&rhs)
    }

    /// Decodes a compressed point.
    ///
    /// The low 255 bits hold `y` and bit 255 the parity of `x`. `x` is
    /// recovered as the square root of `(y^2 - 1) / (d y^2 + 1)`; its
    /// denominator never vanishes because `d` is not a square.
    ///
    /// # Errors
    ///
    /// - [`Error::NonCanonicalEncoding`] if `y >= p`, or if `x = 0` and the
    ///   sign bit is set. Accepting either would break `encode(decode(b)) == b`.
    /// - [`Error::NotOnCurve`] if `(y^2 - 1) / (d y^2 + 1)` is not a square.
    pub fn decode_point(&self, bytes: &PointBytes) -> Result<AffinePoint> {
        let sign = Choice::from(bytes[31] >> 7);

        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;
        let y = Option::<FieldElement>::from(FieldElement::from_canonical_bytes(&y_bytes))
            .ok_or(Error::NonCanonicalEncoding)?;

        let yy = y.square();
        let numerator = yy - FieldElement::ONE;
        let denominator = self.d * yy + FieldElement::ONE;

        let (is_square, mut x) = FieldElement::sqrt_ratio_i(&numerator, &denominator);
        if !bool::from(is_square) {
            return Err(Error::NotOnCurve);
        }
        if bool::from(x.is_zero() & sign) {
            return Err(Error::NonCanonicalEncoding);
        }

        let is_negative = x.is_negative();
        x.conditional_negate(sign ^ is_negative);

        Ok(AffinePoint { x, y })
    }

    /// Decodes a compressed point from a slice, which must be exactly 32
    /// bytes long.
    pub fn decode_point_slice(&self, bytes: &[u8]) -> Result<AffinePoint> {
        let bytes = PointBytes::try_from(bytes).map_err(|_| Error::InvalidLength)?;
        self.decode_point(&bytes)
    }

    /// Encodes `y` in the low 255 bits and the parity of `x` in bit 255.
    pub fn encode_point(&self, point: &AffinePoint) -> PointBytes {
        let mut bytes = point.y.to_bytes();
        bytes[31] |= point.x.is_negative().unwrap_u8() << 7;
        bytes
    }

    /// Converts extended coordinates to affine ones.
    ///
    /// # Panics
    ///
    /// If `Z = 0`, which no point on the curve has.
    pub fn projective_to_affine(&self, point: &EdwardsPoint) -> AffinePoint {
        point.to_affine()
    }
}

impl Default for TwistedEdwardsCurve {
    fn default() -> Self {
        Self::ED25519
    }
}
