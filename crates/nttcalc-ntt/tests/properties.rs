//! Property-based tests for the transform engine.

use proptest::prelude::*;

use nttcalc_ntt::{cyclic_convolution, forward, inverse, Modulus};

fn moduli() -> impl Strategy<Value = Modulus> {
    prop_oneof![Just(Modulus::P1), Just(Modulus::P2), Just(Modulus::P3)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// inverse(forward(x)) == x for random arrays and sizes.
    #[test]
    fn transform_involution(
        modulus in moduli(),
        log_n in 0u32..11,
        seed in prop::collection::vec(any::<u64>(), 1..=1024),
    ) {
        let n = 1usize << log_n;
        let original: Vec<u64> = (0..n)
            .map(|i| seed[i % seed.len()] % modulus.prime)
            .collect();
        let mut data = original.clone();
        forward(&mut data, &modulus).unwrap();
        inverse(&mut data, &modulus).unwrap();
        prop_assert_eq!(data, original);
    }

    /// Zero-padded convolution equals the schoolbook product.
    #[test]
    fn convolution_matches_schoolbook(
        a in prop::collection::vec(0u64..100_000, 1..40),
        b in prop::collection::vec(0u64..100_000, 1..40),
    ) {
        let n = (a.len() + b.len()).next_power_of_two();
        let modulus = Modulus::P1;

        let mut expected = vec![0u128; n];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                expected[i + j] += u128::from(x) * u128::from(y);
            }
        }

        let mut fa = a.clone();
        fa.resize(n, 0);
        let mut fb = b.clone();
        fb.resize(n, 0);
        cyclic_convolution(&mut fa, &mut fb, &modulus).unwrap();

        for (got, want) in fa.iter().zip(&expected) {
            prop_assert_eq!(u128::from(*got), want % u128::from(modulus.prime));
        }
    }
}
