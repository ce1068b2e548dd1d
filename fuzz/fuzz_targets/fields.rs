#![no_main]
// Field element decoding, integer conversion and arithmetic identities
use edwards25519::{FieldBytes, FieldElement, bytes_to_integer, integer_to_bytes, modulus};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let a_bytes: FieldBytes = data[0..32].try_into().unwrap();
    let b_bytes: FieldBytes = data[32..64].try_into().unwrap();
    let a = FieldElement::from_bytes(&a_bytes);
    let b = FieldElement::from_bytes(&b_bytes);

    // Encoding is canonical and stable
    let encoded = a.to_bytes();
    assert_eq!(encoded[31] & 0x80, 0);
    assert_eq!(FieldElement::from_bytes(&encoded).to_bytes(), encoded);

    // Integer conversion agrees with byte decoding
    let big = bytes_to_integer(&a_bytes);
    assert_eq!(FieldElement::from(&big), a);
    assert_eq!(a.to_biguint(), &big % modulus());
    if big < modulus() {
        assert_eq!(integer_to_bytes(&big).unwrap(), encoded);
    }

    // Arithmetic identities
    assert_eq!(a + b - b, a);
    assert_eq!(a * b, b * a);
    assert_eq!(a.square(), a * a);
    assert_eq!(a + (-a), FieldElement::ZERO);
    if !bool::from(a.is_zero()) {
        assert_eq!(a * a.invert(), FieldElement::ONE);
    }
    if let Some(root) = Option::<FieldElement>::from(a.sqrt()) {
        assert_eq!(root.square(), a);
        assert!(!bool::from(root.is_negative()));
    }
});
