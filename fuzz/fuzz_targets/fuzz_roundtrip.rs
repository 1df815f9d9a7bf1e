#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let encoded = z85::encode(data);
    assert_eq!(encoded.len(), z85::encoded_len(data.len()));

    let decoded = z85::decode(&encoded).unwrap();
    assert_eq!(decoded, data);
});
