#![no_main]
// Point decoding, encoding and deserialization
use ciborium::{Value, de};
use edwards25519::{CompressedEdwardsY, Error, PointBytes, TwistedEdwardsCurve};
use libfuzzer_sys::fuzz_target;

const CURVE: TwistedEdwardsCurve = TwistedEdwardsCurve::ED25519;

fuzz_target!(|data: &[u8]| {
    // Slices of any length are rejected or decoded, never panic
    match CURVE.decode_point_slice(data) {
        Err(Error::InvalidLength) => assert_ne!(data.len(), 32),
        Ok(_) | Err(Error::NotOnCurve) | Err(Error::NonCanonicalEncoding) => {
            assert_eq!(data.len(), 32)
        }
        Err(Error::IntegerOutOfRange) => unreachable!(),
    }

    if data.len() < 32 {
        return;
    }

    let bytes: PointBytes = data[0..32].try_into().unwrap();
    if let Ok(point) = CURVE.decode_point(&bytes) {
        assert!(bool::from(CURVE.is_on_curve(&point)));
        assert_eq!(CURVE.encode_point(&point), bytes);

        let extended = point.to_edwards();
        assert!(bool::from(CURVE.is_on_curve_extended(&extended)));
        assert_eq!(CURVE.projective_to_affine(&extended), point);
        assert_eq!(
            CURVE.decode_point(&point.negate().compress().to_bytes()),
            Ok(point.negate())
        );
    }

    // Deserialized encodings are exactly 32 bytes and decode strictly
    let input = &data[32..];
    if let Ok(compressed) = de::from_reader::<CompressedEdwardsY, _>(input) {
        if let Ok(Value::Bytes(raw)) = de::from_reader::<Value, _>(input) {
            assert_eq!(raw, compressed.to_bytes());
        }
        if let Ok(point) = compressed.decompress() {
            assert_eq!(point.compress(), compressed);
        }
    }
});
