//! Points on edwards25519 in affine, extended and compressed form.

pub(crate) mod affine;
pub(crate) mod extended;

pub use affine::{AffinePoint, CompressedEdwardsY, PointBytes};
pub use extended::EdwardsPoint;
