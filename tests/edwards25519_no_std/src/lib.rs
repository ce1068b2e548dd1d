//! Builds `edwards25519` without `std` to catch accidental `std` usage.

#![no_std]

use edwards25519::{Error, PointBytes, TwistedEdwardsCurve};

/// Decodes and re-encodes a compressed point.
pub fn recompress(bytes: &PointBytes) -> Result<PointBytes, Error> {
    let curve = TwistedEdwardsCurve::ed25519();
    let point = curve.decode_point(bytes)?;
    Ok(curve.encode_point(&point))
}
