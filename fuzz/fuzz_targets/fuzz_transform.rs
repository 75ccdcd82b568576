#![no_main]

use libfuzzer_sys::fuzz_target;

use nttcalc_ntt::{forward, inverse, Modulus};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let n = (data.len() / 4).next_power_of_two().min(1 << 12);
    let mut values: Vec<u64> = data
        .chunks_exact(4)
        .map(|c| u64::from(u32::from_le_bytes([c[0], c[1], c[2], c[3]])))
        .collect();
    values.resize(n, 0);

    for modulus in [Modulus::P1, Modulus::P2, Modulus::P3] {
        let original: Vec<u64> = values.iter().map(|v| v % modulus.prime).collect();
        let mut work = original.clone();
        forward(&mut work, &modulus).unwrap();
        inverse(&mut work, &modulus).unwrap();
        assert_eq!(work, original);
    }
});
