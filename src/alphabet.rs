//! The 85 symbol table shared by the encoder and decoder.
//!
//! The ordering is part of the wire format: digit `d` is always written as
//! `ALPHABET[d]`. The set excludes whitespace, quotes, backslash, and comma so
//! that encoded data can be embedded in source code, JSON strings, and
//! command line arguments without escaping.

/// The Z85 alphabet, indexed by digit value
pub const ALPHABET: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Marks bytes that are not part of the alphabet in the inverse table. Any
/// valid digit is at most 84 (0b101_0100), so the bitwise OR of five valid
/// digits can never equal this value.
pub(crate) const INVALID: u8 = 0xff;

const fn create_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Maps a byte to its digit value or [`INVALID`]
pub(crate) static DECODE: [u8; 256] = create_decode_table();

/// Returns the symbol for the given digit.
///
/// ```
/// use z85::alphabet::digit_to_symbol;
/// assert_eq!(digit_to_symbol(0), b'0');
/// assert_eq!(digit_to_symbol(84), b'#');
/// ```
///
/// # Panics
///
/// Panics if `digit` is not within `0..85`
#[inline]
pub fn digit_to_symbol(digit: u8) -> u8 {
    ALPHABET[usize::from(digit)]
}

/// Returns the digit that the symbol represents, or `None` if the byte is not
/// part of the alphabet.
///
/// ```
/// use z85::alphabet::symbol_to_digit;
/// assert_eq!(symbol_to_digit(b'a'), Some(10));
/// assert_eq!(symbol_to_digit(b' '), None);
/// ```
#[inline]
pub fn symbol_to_digit(symbol: u8) -> Option<u8> {
    match DECODE[usize::from(symbol)] {
        INVALID => None,
        x => Some(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn alphabet_is_unique_and_printable() {
        let mut seen = [false; 256];
        for &c in ALPHABET.iter() {
            assert!(c.is_ascii_graphic(), "{} is not printable", c);
            assert!(!seen[usize::from(c)], "{} is duplicated", char::from(c));
            seen[usize::from(c)] = true;
        }
    }

    #[test]
    fn alphabet_excludes_escape_prone_characters() {
        for &c in b" \t\r\n\"'\\,;`|~_".iter() {
            assert_eq!(symbol_to_digit(c), None);
        }
    }

    #[test]
    fn inverse_is_left_inverse() {
        for d in 0..85u8 {
            assert_eq!(symbol_to_digit(digit_to_symbol(d)), Some(d));
        }
    }

    #[test]
    fn inverse_image_size() {
        let valid = (0..=255u8).filter_map(symbol_to_digit).count();
        assert_eq!(valid, ALPHABET.len());
    }

    #[quickcheck]
    fn lookup_consistent_with_alphabet(b: u8) -> bool {
        match symbol_to_digit(b) {
            Some(d) => digit_to_symbol(d) == b,
            None => !ALPHABET.contains(&b),
        }
    }
}
