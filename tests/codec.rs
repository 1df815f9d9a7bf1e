use z85::ErrorKind;

#[test]
fn encode_decode_empty() {
    assert!(z85::encode(b"").is_empty());
    assert!(z85::decode(b"").unwrap().is_empty());
}

#[test]
fn length_grows_by_block_every_four_bytes() {
    let expected = [0, 5, 5, 5, 10, 10, 10, 10, 15, 15];
    for (n, &want) in expected.iter().enumerate() {
        assert_eq!(z85::encode(vec![0xaau8; n]).len(), want, "length {}", n);
    }
}

#[test]
fn reused_buffers_roundtrip() {
    let mut encoded = vec![0u8; z85::encoded_len(32)];
    let mut decoded = vec![0u8; z85::decoded_cap(encoded.len()).unwrap()];
    for n in 0..=32 {
        let plain: Vec<u8> = (0..n as u8).collect();
        let written = z85::encode_to(&plain, &mut encoded).unwrap();
        assert_eq!(written, z85::encoded_len(n));

        let len = z85::decode_to(&encoded[..written], &mut decoded).unwrap();
        assert_eq!(&decoded[..len], &plain[..]);
    }
}

#[test]
fn undersized_destinations() {
    let plain = [0u8, 1, 2, 3, 4];
    let mut encoded = vec![0u8; z85::encoded_len(plain.len()) - 1];
    let err = z85::encode_to(&plain, &mut encoded).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::InsufficientDestinationLength { want: 10, got: 9 }
    );

    let encoded = z85::encode(&plain);
    let mut decoded = vec![0u8; z85::decoded_cap(encoded.len()).unwrap() - 1];
    let err = z85::decode_to(&encoded, &mut decoded).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::InsufficientDestinationLength { want: 8, got: 7 }
    );
}

#[test]
fn corrupted_input_is_rejected() {
    let encoded = z85::encode(b"some binary payload");

    let err = z85::decode(&encoded[..encoded.len() - 1]).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::InvalidEncodedLength(encoded.len() - 1)
    );

    for idx in 0..encoded.len() {
        let mut bad = encoded.clone();
        bad[idx] = b'\n';
        let err = z85::decode(&bad).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::InvalidEncodedByte {
                byte: b'\n',
                offset: idx
            }
        );
    }
}

#[test]
fn foreign_padding_is_rejected() {
    // Standard Z85 of 4 bytes has no marker block
    let err = z85::decode(b"HelloWorld").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidPostfix(_)));
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(z85::decode(b"1").unwrap_err());
    assert_eq!(err.to_string(), "invalid encoded length: 1");
}
