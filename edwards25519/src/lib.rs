#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    clippy::mod_module_files,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub use num_bigint;
pub use subtle;

pub(crate) mod curve;
pub(crate) mod edwards;
pub(crate) mod error;
pub(crate) mod field;

pub use curve::TwistedEdwardsCurve;
pub use edwards::{AffinePoint, CompressedEdwardsY, EdwardsPoint, PointBytes};
pub use error::{Error, Result};
pub use field::{FieldBytes, FieldElement, bytes_to_integer, integer_to_bytes, modulus};
