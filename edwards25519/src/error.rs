use core::fmt::{self, Display, Formatter};

#[cfg(feature = "std")]
use std::error;

/// Result type with the `edwards25519` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Encoding and decoding errors
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Input is not exactly 32 bytes
    InvalidLength,
    /// Encoding does not correspond to a point on the curve
    NotOnCurve,
    /// Encoding has a coordinate `>= p` or a sign bit set for `x = 0`
    NonCanonicalEncoding,
    /// Integer does not fit in the low 255 bits of an encoding
    IntegerOutOfRange,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength => write!(f, "encoding must be exactly 32 bytes"),
            Error::NotOnCurve => write!(f, "point is not on the curve"),
            Error::NonCanonicalEncoding => write!(f, "point encoding is not canonical"),
            Error::IntegerOutOfRange => {
                write!(f, "integer is out of range for a 255-bit encoding")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}
