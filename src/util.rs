/// A simplified and const generic version of arrayref
#[inline]
fn take<const N: usize>(data: &[u8]) -> [u8; N] {
    debug_assert!(data.len() >= N);
    unsafe { *(data.as_ptr() as *const [u8; N]) }
}

#[inline]
pub(crate) fn be_u32(data: &[u8]) -> u32 {
    u32::from_be_bytes(take::<4>(data))
}

/// Packs up to 3 trailing bytes with the terminating `1` byte immediately
/// after them and zeros filling the rest of the word.
#[inline]
pub(crate) fn marker_word(remainder: &[u8]) -> u32 {
    debug_assert!(remainder.len() < 4);
    let mut word = [0u8; 4];
    word[..remainder.len()].copy_from_slice(remainder);
    word[remainder.len()] = 1;
    u32::from_be_bytes(word)
}
