mod element;
mod integer;

pub use element::FieldElement;
pub use integer::{bytes_to_integer, integer_to_bytes, modulus};

/// Little-endian encoding of a field element.
///
/// The low 255 bits hold the value; bit 255 is reserved for the sign of `x`
/// in a compressed point and is clear in a bare field element encoding.
pub type FieldBytes = [u8; 32];
