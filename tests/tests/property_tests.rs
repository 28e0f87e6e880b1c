//! Property-based tests for the hedged Ed25519 scheme

use hedged_ed25519::prelude::*;
use hedged_ed25519_tests::flip_bit;
use proptest::prelude::*;
use rand::rngs::OsRng;

proptest! {
    #[test]
    fn roundtrip_validity(message in prop::collection::vec(any::<u8>(), 0..256)) {
        let (public_key, secret_key) = HedgedEd25519::keypair(&mut OsRng).unwrap();
        let signature = HedgedEd25519::sign(&message, &secret_key).unwrap();

        prop_assert_eq!(signature.to_bytes().len(), SIGNATURE_SIZE);
        prop_assert_eq!(
            HedgedEd25519::verify(&message, &signature, &public_key),
            Ok(true)
        );
    }

    #[test]
    fn hedging_nondeterminism(message in prop::collection::vec(any::<u8>(), 0..256)) {
        let (public_key, secret_key) = HedgedEd25519::keypair(&mut OsRng).unwrap();
        let sig1 = HedgedEd25519::sign(&message, &secret_key).unwrap();
        let sig2 = HedgedEd25519::sign(&message, &secret_key).unwrap();

        prop_assert_ne!(sig1.to_bytes(), sig2.to_bytes());
        prop_assert_eq!(HedgedEd25519::verify(&message, &sig1, &public_key), Ok(true));
        prop_assert_eq!(HedgedEd25519::verify(&message, &sig2, &public_key), Ok(true));
    }

    #[test]
    fn any_signature_bit_flip_invalidates(
        message in prop::collection::vec(any::<u8>(), 0..128),
        bit in 0usize..SIGNATURE_SIZE * 8,
    ) {
        let (public_key, secret_key) = HedgedEd25519::keypair(&mut OsRng).unwrap();
        let signature = HedgedEd25519::sign(&message, &secret_key).unwrap();

        let mut bytes = signature.to_bytes();
        flip_bit(&mut bytes, bit);
        let tampered = HedgedSignature::from_slice(&bytes).unwrap();
        prop_assert_eq!(
            HedgedEd25519::verify(&message, &tampered, &public_key),
            Ok(false)
        );
    }

    #[test]
    fn any_message_bit_flip_invalidates(
        message in prop::collection::vec(any::<u8>(), 1..128),
        bit_seed in any::<usize>(),
    ) {
        let (public_key, secret_key) = HedgedEd25519::keypair(&mut OsRng).unwrap();
        let signature = HedgedEd25519::sign(&message, &secret_key).unwrap();

        let mut mutated = message.clone();
        let bit = bit_seed % (mutated.len() * 8);
        flip_bit(&mut mutated, bit);
        prop_assert_eq!(
            HedgedEd25519::verify(&mutated, &signature, &public_key),
            Ok(false)
        );
    }
}
