use crate::field::FieldElement;
use crate::*;
use core::fmt::{Display, Formatter, LowerHex, Result as FmtResult, UpperHex};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Affine point on edwards25519
#[derive(Copy, Clone, Debug)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    /// The identity point
    pub const IDENTITY: AffinePoint = AffinePoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// The standard base point, with `y = 4/5` and even `x`
    pub const GENERATOR: AffinePoint = AffinePoint {
        x: FieldElement([
            52811034, 25909283, 16144682, 17082669, 27570973, 30858332, 40966398, 8378388,
            20764389, 8758491,
        ]),
        y: FieldElement([
            40265304, 26843545, 13421772, 20132659, 26843545, 6710886, 53687091, 13421772,
            40265318, 26843545,
        ]),
    };

    /// Creates a point from its coordinates, checking that it lies on the
    /// curve.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Self { x, y };
        if bool::from(point.is_on_curve()) {
            Ok(point)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Standard compression; store Y and sign of X
    pub fn compress(&self) -> CompressedEdwardsY {
        CompressedEdwardsY(TwistedEdwardsCurve::ED25519.encode_point(self))
    }

    /// Check if this point is on the curve
    pub fn is_on_curve(&self) -> Choice {
        TwistedEdwardsCurve::ED25519.is_on_curve(self)
    }

    /// Convert to edwards extended point
    pub fn to_edwards(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: self.x,
            Y: self.y,
            Z: FieldElement::ONE,
            T: self.x * self.y,
        }
    }

    /// Negation, `(-x, y)`
    pub fn negate(&self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }

    /// The X coordinate
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// The Y coordinate
    pub fn y(&self) -> FieldElement {
        self.y
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Eq for AffinePoint {}
impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<EdwardsPoint> for AffinePoint {
    fn from(point: EdwardsPoint) -> Self {
        point.to_affine()
    }
}

impl From<&EdwardsPoint> for AffinePoint {
    fn from(point: &EdwardsPoint) -> Self {
        point.to_affine()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for AffinePoint {}

/// The compressed internal representation of a point on the Twisted Edwards Curve
pub type PointBytes = [u8; 32];

/// Represents a point on the Compressed Twisted Edwards Curve
/// in little endian format where the most significant bit is the sign bit
/// and the remaining 255 bits represent the y-coordinate
#[derive(Copy, Clone, Debug, Default)]
pub struct CompressedEdwardsY(pub PointBytes);

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for CompressedEdwardsY {}

impl Display for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self:x}")
    }
}

impl LowerHex for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0[..] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0[..] {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

impl ConditionallySelectable for CompressedEdwardsY {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Self(bytes)
    }
}

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for CompressedEdwardsY {
    fn eq(&self, other: &CompressedEdwardsY) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for CompressedEdwardsY {}

impl AsRef<[u8]> for CompressedEdwardsY {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl AsRef<PointBytes> for CompressedEdwardsY {
    fn as_ref(&self) -> &PointBytes {
        &self.0
    }
}

#[cfg(feature = "alloc")]
impl From<CompressedEdwardsY> for Vec<u8> {
    fn from(value: CompressedEdwardsY) -> Self {
        value.0.to_vec()
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<Vec<u8>> for CompressedEdwardsY {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes = PointBytes::try_from(value).map_err(|_| Error::InvalidLength)?;
        Ok(CompressedEdwardsY(bytes))
    }
}

impl From<CompressedEdwardsY> for PointBytes {
    fn from(value: CompressedEdwardsY) -> Self {
        value.0
    }
}

impl From<&CompressedEdwardsY> for PointBytes {
    fn from(value: &CompressedEdwardsY) -> Self {
        value.0
    }
}

impl From<PointBytes> for CompressedEdwardsY {
    fn from(point: PointBytes) -> Self {
        Self(point)
    }
}

impl From<AffinePoint> for CompressedEdwardsY {
    fn from(point: AffinePoint) -> Self {
        point.compress()
    }
}

impl From<&AffinePoint> for CompressedEdwardsY {
    fn from(point: &AffinePoint) -> Self {
        point.compress()
    }
}

impl TryFrom<CompressedEdwardsY> for AffinePoint {
    type Error = Error;

    fn try_from(value: CompressedEdwardsY) -> Result<Self> {
        value.decompress()
    }
}

impl TryFrom<&CompressedEdwardsY> for AffinePoint {
    type Error = Error;

    fn try_from(value: &CompressedEdwardsY) -> Result<Self> {
        value.decompress()
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for CompressedEdwardsY {
    fn serialize<S: serdect::serde::Serializer>(
        &self,
        s: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serdect::array::serialize_hex_lower_or_bin(&self.0, s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for CompressedEdwardsY {
    fn deserialize<D>(d: D) -> core::result::Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        use serdect::serde::de::Error as _;

        let mut arr = [0u8; 32];
        let len = serdect::array::deserialize_hex_or_bin(&mut arr, d)?.len();
        if len != arr.len() {
            return Err(D::Error::invalid_length(len, &"32 bytes"));
        }
        Ok(CompressedEdwardsY(arr))
    }
}

impl CompressedEdwardsY {
    /// The compressed generator point
    pub const GENERATOR: Self = Self([
        0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66,
    ]);
    /// The compressed identity point
    pub const IDENTITY: Self = Self([
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0,
    ]);

    /// Attempt to decompress to an `AffinePoint`.
    ///
    /// Fails with [`Error::NotOnCurve`] if the input is not the
    /// \\(y\\)-coordinate of a curve point, and with
    /// [`Error::NonCanonicalEncoding`] if it is a non-canonical encoding of
    /// one. Every point returned compresses back to `self`.
    pub fn decompress(&self) -> Result<AffinePoint> {
        TwistedEdwardsCurve::ED25519.decode_point(&self.0)
    }

    /// The sign bit, i.e. the parity of \\(x\\).
    pub fn sign(&self) -> Choice {
        Choice::from(self.0[31] >> 7)
    }

    /// View this `CompressedEdwardsY` as an array of bytes.
    pub const fn as_bytes(&self) -> &PointBytes {
        &self.0
    }

    /// Copy this `CompressedEdwardsY` to an array of bytes.
    pub const fn to_bytes(&self) -> PointBytes {
        self.0
    }
}
