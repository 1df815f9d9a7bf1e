use crate::{Error, ErrorKind};

/// Returns the exact number of bytes that encoding `plain_len` bytes produces.
///
/// Non-empty input always reserves room for a trailing marker block, so an
/// input that is already a multiple of 4 still grows by a full block.
///
/// ```
/// assert_eq!(z85::encoded_len(0), 0);
/// assert_eq!(z85::encoded_len(3), 5);
/// assert_eq!(z85::encoded_len(4), 10);
/// ```
#[inline]
pub fn encoded_len(plain_len: usize) -> usize {
    if plain_len == 0 {
        0
    } else {
        (plain_len + 4) / 4 * 5
    }
}

/// Returns a buffer length that is guaranteed to hold the decoded data.
///
/// This is a capacity: the number of bytes [`decode_to`](crate::decode_to)
/// reports may be up to 4 less.
///
/// ```
/// assert_eq!(z85::decoded_cap(0), Ok(0));
/// assert_eq!(z85::decoded_cap(10), Ok(8));
/// assert!(z85::decoded_cap(4).is_err());
/// ```
#[inline]
pub fn decoded_cap(encoded_len: usize) -> Result<usize, Error> {
    if encoded_len % 5 != 0 {
        return Err(Error::new(ErrorKind::InvalidEncodedLength(encoded_len)));
    }

    Ok(encoded_len / 5 * 4)
}
