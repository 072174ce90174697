use fri_proof_wire::{Digest, FieldElement, FieldError, GOLDILOCKS_MODULUS};
use num_bigint::BigUint;
use proptest::prelude::*;

fn reference(limbs: &[u64]) -> BigUint {
    let p = BigUint::from(GOLDILOCKS_MODULUS);
    limbs
        .iter()
        .zip(0u32..)
        .map(|(&limb, i)| BigUint::from(limb) * p.pow(i))
        .sum()
}

fn limb() -> impl Strategy<Value = u64> {
    prop_oneof![
        any::<u64>(),
        // values at and above the modulus
        (GOLDILOCKS_MODULUS..=u64::MAX),
        Just(0u64),
    ]
}

proptest! {
    #[test]
    fn reconstruction_matches_power_sum(limbs in proptest::collection::vec(limb(), 1..=4)) {
        let fe = FieldElement::from_limbs(&limbs).expect("non-empty limbs");
        prop_assert_eq!(fe.value(), &reference(&limbs));

        let again = Digest::from_limbs(&limbs).expect("non-empty limbs");
        prop_assert_eq!(again.element(), &fe);
    }

    #[test]
    fn reduction_agrees_with_modulo(limbs in proptest::collection::vec(limb(), 1..=4)) {
        let fe = FieldElement::from_limbs(&limbs).expect("non-empty limbs");
        let expected = reference(&limbs) % BigUint::from(GOLDILOCKS_MODULUS);
        let reduced = fe.reduce();
        prop_assert_eq!(reduced.value(), &expected);
        prop_assert!(reduced.is_canonical());
    }
}

#[test]
fn zero_limbs_always_fail() {
    assert_eq!(FieldElement::from_limbs(&[]), Err(FieldError::EmptyLimbs));
    assert!(matches!(Digest::from_limbs(&[]), Err(FieldError::EmptyLimbs)));
}
