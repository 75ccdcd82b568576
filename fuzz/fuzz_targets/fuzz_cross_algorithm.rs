#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use nttcalc_core::options::Options;
use nttcalc_core::registry::{CalculatorFactory, DefaultFactory};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First byte splits the rest into two operands; every byte maps to a digit
    let split = 1 + usize::from(data[0]) % (data.len() - 2);
    let digits: String = data[1..].iter().map(|b| char::from(b'0' + b % 10)).collect();
    let (a, b) = digits.split_at(split);

    let expected = {
        let x = BigUint::parse_bytes(a.as_bytes(), 10).unwrap();
        let y = BigUint::parse_bytes(b.as_bytes(), 10).unwrap();
        (x * y).to_string()
    };

    // Small threshold so short inputs exercise the hybrid path too
    let opts = Options {
        hybrid_threshold: 1 + usize::from(data[0] % 64),
        ..Options::default()
    };
    let factory = DefaultFactory::new();
    for name in factory.available() {
        let calc = factory.get(name).unwrap();
        if let Ok(product) = calc.multiply(a, b, &opts) {
            assert_eq!(product, expected, "{name} disagrees on {a} x {b}");
        }
    }
});
