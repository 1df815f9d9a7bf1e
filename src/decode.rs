use crate::{
    alphabet::{DECODE, INVALID},
    decoded_cap, Error, ErrorKind,
};

/// Decodes a 5 symbol block into the big endian word it represents. Values
/// larger than `u32::MAX` wrap.
#[inline]
fn decode_word(block: &[u8], offset: usize) -> Result<u32, Error> {
    debug_assert!(block.len() >= 5);
    let m0 = DECODE[usize::from(block[0])];
    let m1 = DECODE[usize::from(block[1])];
    let m2 = DECODE[usize::from(block[2])];
    let m3 = DECODE[usize::from(block[3])];
    let m4 = DECODE[usize::from(block[4])];

    if (m0 | m1 | m2 | m3 | m4) == INVALID {
        return Err(invalid_byte(block, offset));
    }

    Ok(u32::from(m0)
        .wrapping_mul(52_200_625)
        .wrapping_add(u32::from(m1) * 614_125)
        .wrapping_add(u32::from(m2) * 7_225)
        .wrapping_add(u32::from(m3) * 85)
        .wrapping_add(u32::from(m4)))
}

#[cold]
fn invalid_byte(block: &[u8], offset: usize) -> Error {
    let (idx, &byte) = block[..5]
        .iter()
        .enumerate()
        .find(|&(_, &x)| DECODE[usize::from(x)] == INVALID)
        .unwrap_or((4, &block[4]));

    Error::new(ErrorKind::InvalidEncodedByte {
        byte,
        offset: offset + idx,
    })
}

/// Scans backwards for the terminating `1` byte, skipping zero padding. The
/// position of the marker is the decoded length.
#[inline]
fn strip_marker(decoded: &[u8]) -> Result<usize, Error> {
    for (i, &x) in decoded.iter().enumerate().rev() {
        match x {
            0 => continue,
            1 => return Ok(i),
            x => return Err(Error::new(ErrorKind::InvalidPostfix(x))),
        }
    }

    Err(Error::new(ErrorKind::InvalidPostfix(0)))
}

/// Decodes `encoded` into the start of `plain` and returns the number of
/// bytes that hold decoded data.
///
/// `plain` must be at least [`decoded_cap(encoded.len())`](crate::decoded_cap)
/// bytes long. Up to 4 bytes following the returned length are overwritten
/// with the marker block, and nothing past the capacity is read or written.
///
/// ```
/// let mut buf = [0u8; 8];
/// let len = z85::decode_to(b"Hello0rr91", &mut buf)?;
/// assert_eq!(&buf[..len], &[0x86, 0x4f, 0xd2, 0x6f]);
/// # Ok::<(), z85::Error>(())
/// ```
///
/// # Errors
///
/// - [`ErrorKind::InvalidEncodedLength`] when the input is not a multiple of 5
/// - [`ErrorKind::InsufficientDestinationLength`] when `plain` is too short
/// - [`ErrorKind::InvalidEncodedByte`] when a byte is not part of the alphabet
/// - [`ErrorKind::InvalidPostfix`] when the trailing marker block is malformed
pub fn decode_to(encoded: &[u8], plain: &mut [u8]) -> Result<usize, Error> {
    let cap = decoded_cap(encoded.len())?;
    if cap == 0 {
        return Ok(0);
    }

    if plain.len() < cap {
        return Err(Error::new(ErrorKind::InsufficientDestinationLength {
            want: cap,
            got: plain.len(),
        }));
    }

    let decoded = &mut plain[..cap];
    let blocks = encoded.chunks_exact(5);
    for (i, (block, dst)) in blocks.zip(decoded.chunks_exact_mut(4)).enumerate() {
        let word = decode_word(block, i * 5)?;
        dst.copy_from_slice(&word.to_be_bytes());
    }

    strip_marker(decoded)
}

/// Decodes the data into a newly allocated buffer
///
/// ```
/// assert_eq!(z85::decode(b"Hello0rr91")?, vec![0x86, 0x4f, 0xd2, 0x6f]);
/// assert_eq!(z85::decode(b"")?, Vec::<u8>::new());
/// assert!(z85::decode(b"1").is_err());
/// # Ok::<(), z85::Error>(())
/// ```
///
/// # Errors
///
/// See [`decode_to`](crate::decode_to)
pub fn decode<T: AsRef<[u8]>>(encoded: T) -> Result<Vec<u8>, Error> {
    let encoded = encoded.as_ref();
    let mut plain = vec![0u8; decoded_cap(encoded.len())?];
    let len = decode_to(encoded, &mut plain)?;
    plain.truncate(len);
    Ok(plain)
}

/// Decodes text produced by [`encode_to_string`](crate::encode_to_string)
///
/// ```
/// assert_eq!(z85::decode_str("Hello0rr91")?, vec![0x86, 0x4f, 0xd2, 0x6f]);
/// # Ok::<(), z85::Error>(())
/// ```
///
/// # Errors
///
/// See [`decode_to`](crate::decode_to)
pub fn decode_str(encoded: &str) -> Result<Vec<u8>, Error> {
    decode(encoded.as_bytes())
}
