//! Integration tests for the hedged Ed25519 signature scheme

use hedged_ed25519::prelude::*;
use hedged_ed25519_tests::{flip_bit, SCENARIO_MESSAGE};
use rand::rngs::OsRng;

#[test]
fn test_thorough_scenario() {
    let mut rng = OsRng;
    let mut message = SCENARIO_MESSAGE.to_vec();

    let (public_key, secret_key) = HedgedEd25519::keypair(&mut rng).unwrap();

    // The derived public key must match the generated one
    let derived = HedgedEd25519::derive_public_key(&secret_key).unwrap();
    assert_eq!(derived.to_bytes(), public_key.to_bytes());

    // Two signatures over the same message must differ
    let signature1 = HedgedEd25519::sign(&message, &secret_key).unwrap();
    let signature2 = HedgedEd25519::sign(&message, &secret_key).unwrap();
    assert_ne!(signature1.to_bytes(), signature2.to_bytes());

    // Both must verify against the original message
    assert_eq!(HedgedEd25519::verify(&message, &signature1, &public_key), Ok(true));
    assert_eq!(HedgedEd25519::verify(&message, &signature2, &public_key), Ok(true));

    // Mutating the last byte of a signature (the nonce tail) must fail
    let mut sig1_bytes = signature1.to_bytes();
    sig1_bytes[SIGNATURE_SIZE - 1] = sig1_bytes[SIGNATURE_SIZE - 1].wrapping_add(1);
    let tampered = HedgedSignature::from_slice(&sig1_bytes).unwrap();
    assert_eq!(HedgedEd25519::verify(&message, &tampered, &public_key), Ok(false));

    // Mutating the last byte of the message must fail
    let last = message.len() - 1;
    message[last] = message[last].wrapping_add(1);
    assert_eq!(HedgedEd25519::verify(&message, &signature2, &public_key), Ok(false));
}

// The wire layout must stay bit-exact for interoperability: 64 bytes of
// Ed25519 signature over nonce || message, then 32 bytes of nonce. A plain
// ed25519-dalek verifier given the reconstructed payload must accept it.
#[test]
fn test_wire_layout_interop() {
    use ed25519_dalek::{Signature as DalekSignature, VerifyingKey};

    let mut rng = OsRng;
    let message = b"interop across implementations";

    let (public_key, secret_key) = HedgedEd25519::keypair(&mut rng).unwrap();
    let signature = HedgedEd25519::sign(message, &secret_key).unwrap();

    let bytes = signature.to_bytes();
    assert_eq!(bytes.len(), SIGNATURE_SIZE);

    let core = DalekSignature::from_slice(&bytes[..CORE_SIGNATURE_SIZE]).unwrap();
    let verifying_key = VerifyingKey::from_bytes(&public_key.to_bytes()).unwrap();

    let mut payload = bytes[CORE_SIGNATURE_SIZE..].to_vec();
    payload.extend_from_slice(message);
    assert!(verifying_key.verify_strict(&payload, &core).is_ok());
}

#[test]
fn test_verify_rejects_wrong_size_signature_before_verification() {
    for len in [0, CORE_SIGNATURE_SIZE, SIGNATURE_SIZE - 1, SIGNATURE_SIZE + 1] {
        let err = HedgedSignature::from_slice(&vec![0u8; len]).unwrap_err();
        assert!(
            matches!(
                err,
                Error::InvalidLength {
                    expected: SIGNATURE_SIZE,
                    ..
                }
            ),
            "length {} must be rejected as a size mismatch",
            len
        );
    }
}

#[test]
fn test_signature_survives_byte_transport() {
    let mut rng = OsRng;
    let message = b"store and forward";

    let (public_key, secret_key) = HedgedEd25519::keypair(&mut rng).unwrap();
    let signature = HedgedEd25519::sign(message, &secret_key).unwrap();

    // Round-trip through the serialized forms a wire peer would see
    let sig_bytes = HedgedEd25519::serialize_signature(&signature);
    let pk_bytes = HedgedEd25519::serialize_public_key(&public_key);

    let signature = HedgedEd25519::deserialize_signature(&sig_bytes).unwrap();
    let public_key = HedgedEd25519::deserialize_public_key(&pk_bytes).unwrap();
    assert_eq!(HedgedEd25519::verify(message, &signature, &public_key), Ok(true));
}

#[test]
fn test_every_signature_bit_matters_at_the_edges() {
    let mut rng = OsRng;
    let message = b"bit-level tamper checks";

    let (public_key, secret_key) = HedgedEd25519::keypair(&mut rng).unwrap();
    let signature = HedgedEd25519::sign(message, &secret_key).unwrap();

    // First and last bit of the core signature, first and last bit of the
    // nonce; exhaustive flipping is covered by the property tests.
    for bit in [
        0,
        CORE_SIGNATURE_SIZE * 8 - 1,
        CORE_SIGNATURE_SIZE * 8,
        SIGNATURE_SIZE * 8 - 1,
    ] {
        let mut bytes = signature.to_bytes();
        flip_bit(&mut bytes, bit);
        let tampered = HedgedSignature::from_slice(&bytes).unwrap();
        assert_eq!(
            HedgedEd25519::verify(message, &tampered, &public_key),
            Ok(false),
            "flipping bit {} must invalidate the signature",
            bit
        );
    }
}

#[test]
fn test_keypairs_are_independent() {
    let mut rng = OsRng;
    let (pk1, sk1) = HedgedEd25519::keypair(&mut rng).unwrap();
    let (pk2, _) = HedgedEd25519::keypair(&mut rng).unwrap();
    assert_ne!(pk1.to_bytes(), pk2.to_bytes());

    let signature = HedgedEd25519::sign(b"cross-key", &sk1).unwrap();
    assert_eq!(HedgedEd25519::verify(b"cross-key", &signature, &pk1), Ok(true));
    assert_eq!(HedgedEd25519::verify(b"cross-key", &signature, &pk2), Ok(false));
}
