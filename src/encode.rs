use crate::{
    alphabet::ALPHABET,
    encoded_len,
    util::{be_u32, marker_word},
    Error, ErrorKind,
};

/// Writes the five symbols of a word, most significant digit first
#[inline]
fn encode_word(mut v: u32, out: &mut [u8]) {
    debug_assert!(out.len() >= 5);
    for i in (0..5).rev() {
        out[i] = ALPHABET[(v % 85) as usize];
        v /= 85;
    }
}

/// Encodes `plain` into the start of `encoded`, returning the number of bytes
/// written, which is always [`encoded_len(plain.len())`](crate::encoded_len).
///
/// Bytes in `encoded` past the written length are left untouched, so a
/// buffer can be reused across calls.
///
/// ```
/// let mut buf = [0u8; 16];
/// let written = z85::encode_to(b"\x86\x4f\xd2\x6f", &mut buf)?;
/// assert_eq!(&buf[..written], b"Hello0rr91");
/// # Ok::<(), z85::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`ErrorKind::InsufficientDestinationLength`] if `encoded` is
/// shorter than the encoded length.
pub fn encode_to(plain: &[u8], encoded: &mut [u8]) -> Result<usize, Error> {
    let want = encoded_len(plain.len());
    if want == 0 {
        return Ok(0);
    }

    if encoded.len() < want {
        return Err(Error::new(ErrorKind::InsufficientDestinationLength {
            want,
            got: encoded.len(),
        }));
    }

    let mut chunks = plain.chunks_exact(4);
    let mut out = encoded[..want].chunks_exact_mut(5);
    for (chunk, dst) in (&mut chunks).zip(&mut out) {
        encode_word(be_u32(chunk), dst);
    }

    // encoded_len always leaves exactly one block for the marker
    if let Some(dst) = out.next() {
        encode_word(marker_word(chunks.remainder()), dst);
    }

    Ok(want)
}

/// Encodes the data into a newly allocated buffer
///
/// ```
/// assert_eq!(z85::encode(b""), b"");
/// assert_eq!(z85::encode(b"\x86\x4f\xd2\x6f").len(), 10);
/// ```
pub fn encode<T: AsRef<[u8]>>(plain: T) -> Vec<u8> {
    let plain = plain.as_ref();
    let mut encoded = vec![0u8; encoded_len(plain.len())];
    let written = encode_to(plain, &mut encoded);
    debug_assert_eq!(written, Ok(encoded.len()));
    encoded
}

/// Encodes the data into a string
///
/// ```
/// assert_eq!(z85::encode_to_string(b"\x86\x4f\xd2\x6f"), "Hello0rr91");
/// ```
pub fn encode_to_string<T: AsRef<[u8]>>(plain: T) -> String {
    let encoded = encode(plain);

    // This is safe as every symbol in the alphabet is ascii and ascii is a subset of utf8
    debug_assert!(std::str::from_utf8(&encoded).is_ok());
    unsafe { String::from_utf8_unchecked(encoded) }
}
