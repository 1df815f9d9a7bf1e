#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(decoded) = z85::decode(data) {
        let cap = z85::decoded_cap(data.len()).unwrap();
        assert!(decoded.len() <= cap);
        assert!(data.iter().all(|x| z85::ALPHABET.contains(x)));
    }

    let mut buf = vec![0u8; data.len()];
    let _ = z85::decode_to(data, &mut buf);
});
