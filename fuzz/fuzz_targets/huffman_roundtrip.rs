#![no_main]
use huffcode::{build_code, count_frequencies, decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (input, noise) = data;

    if input.is_empty() {
        return;
    }

    let (tree, table) = build_code(&count_frequencies(&input)).unwrap();
    let bits = encode(&input, &table).unwrap();
    assert_eq!(decode(&tree, &bits).unwrap(), input);

    // Arbitrary bit streams must be rejected cleanly, never panic.
    let noise: Vec<u8> = noise.iter().map(|b| b % 3).collect();
    let _ = decode(&tree, &noise);
});
