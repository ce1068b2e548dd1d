use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::Neg;

use crate::{
    Error, Result, TwistedEdwardsCurve,
    edwards::{AffinePoint, CompressedEdwardsY},
    field::FieldElement,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Represent points on edwards25519 using Extended Homogenous Projective Co-ordinates
/// (x, y) -> (X/Z, Y/Z, Z, T) with X * Y = Z * T
/// a = -1, d = -121665/121666
#[derive(Copy, Clone, Debug)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl Default for EdwardsPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Display for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {}, Y: {}, Z: {}, T: {} }}",
            self.X, self.Y, self.Z, self.T
        )
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        (XZ.ct_eq(&ZX)) & (YZ.ct_eq(&ZY))
    }
}

impl Eq for EdwardsPoint {}
impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<AffinePoint> for EdwardsPoint {
    fn from(affine: AffinePoint) -> Self {
        affine.to_edwards()
    }
}

impl From<&AffinePoint> for EdwardsPoint {
    fn from(affine: &AffinePoint) -> Self {
        affine.to_edwards()
    }
}

impl Neg for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        self.negate()
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        self.negate()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for EdwardsPoint {}

impl EdwardsPoint {
    /// Generator for the prime subgroup
    pub const GENERATOR: Self = Self {
        X: AffinePoint::GENERATOR.x,
        Y: AffinePoint::GENERATOR.y,
        Z: FieldElement::ONE,
        T: FieldElement([
            28827043, 27438313, 39759291, 244362, 8635006, 11264893, 19351346, 13413597,
            16611511, 27139452,
        ]),
    };
    /// Identity point
    pub const IDENTITY: Self = Self {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ONE,
        T: FieldElement::ZERO,
    };

    /// Creates a point from extended coordinates.
    ///
    /// Fails with [`Error::NotOnCurve`] unless `Z` is nonzero, `X Y = Z T`
    /// and the coordinates satisfy the curve equation.
    pub fn new(X: FieldElement, Y: FieldElement, Z: FieldElement, T: FieldElement) -> Result<Self> {
        let point = Self { X, Y, Z, T };
        if bool::from(!point.Z.is_zero() & point.is_on_curve()) {
            Ok(point)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Check if this point is on the curve
    pub fn is_on_curve(&self) -> Choice {
        TwistedEdwardsCurve::ED25519.is_on_curve_extended(self)
    }

    /// Convert this point to an [`AffinePoint`].
    ///
    /// # Panics
    ///
    /// If `Z = 0`. No point constructed by this crate has a zero `Z`.
    pub fn to_affine(&self) -> AffinePoint {
        assert!(
            !bool::from(self.Z.is_zero()),
            "extended point has Z = 0"
        );
        let INV_Z = self.Z.invert();

        let x = self.X * INV_Z;
        let y = self.Y * INV_Z;

        AffinePoint { x, y }
    }

    /// Compress this point
    pub fn compress(&self) -> CompressedEdwardsY {
        self.to_affine().compress()
    }

    /// Compute the negation of this point's `x`-coordinate.
    pub fn negate(&self) -> Self {
        EdwardsPoint {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }

    /// Check if this is the identity point
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }
}
