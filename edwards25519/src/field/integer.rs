//! Conversion between field elements, encodings and arbitrary precision
//! integers.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{FieldBytes, FieldElement};
use crate::{Error, Result};

/// Returns the field modulus `p = 2^255 - 19`.
pub fn modulus() -> BigUint {
    (BigUint::one() << 255u32) - 19u32
}

/// Interprets a 32-byte encoding as a little-endian integer in
/// `[0, 2^255)`, clearing bit 255 first.
pub fn bytes_to_integer(bytes: &FieldBytes) -> BigUint {
    let mut bytes = *bytes;
    bytes[31] &= 0x7f;
    BigUint::from_bytes_le(&bytes)
}

/// Encodes an integer as 32 little-endian bytes.
///
/// Returns [`Error::IntegerOutOfRange`] for integers `>= 2^255`, which would
/// collide with the sign bit.
pub fn integer_to_bytes(value: &BigUint) -> Result<FieldBytes> {
    if value.bits() > 255 {
        return Err(Error::IntegerOutOfRange);
    }
    Ok(to_le_array(value))
}

/// Little-endian bytes of a value known to fit in 256 bits.
fn to_le_array(value: &BigUint) -> FieldBytes {
    let mut bytes = FieldBytes::default();
    if !value.is_zero() {
        let le = value.to_bytes_le();
        bytes[..le.len()].copy_from_slice(&le);
    }
    bytes
}

impl FieldElement {
    /// Creates a field element from an integer, reducing it modulo `p`.
    pub fn from_biguint(value: &BigUint) -> Self {
        Self::from_bytes(&to_le_array(&(value % modulus())))
    }

    /// Returns the canonical representative in `[0, p)`.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_bytes())
    }
}

impl From<&BigUint> for FieldElement {
    fn from(value: &BigUint) -> Self {
        Self::from_biguint(value)
    }
}

impl From<BigUint> for FieldElement {
    fn from(value: BigUint) -> Self {
        Self::from_biguint(&value)
    }
}

impl From<&FieldElement> for BigUint {
    fn from(fe: &FieldElement) -> Self {
        fe.to_biguint()
    }
}

impl From<FieldElement> for BigUint {
    fn from(fe: FieldElement) -> Self {
        fe.to_biguint()
    }
}
