/*!

A fast, allocation-aware codec for [Z85](https://rfc.zeromq.org/spec/32/), the
base-85 binary-to-text encoding, extended so that data of any length can be
encoded.

Z85 maps every 4 bytes of input onto 5 printable characters, a 25% size
overhead compared to 33% for base64 and 100% for hex. The alphabet is free of
whitespace, quotes, backslashes, and commas so that the output can be embedded
in source code, JSON, XML, and command lines without escaping.

## Features

- ✔ Lossless: Any byte sequence, including ones that are not a multiple of 4, round trips
- ✔ Fast: Branch light inner loops over 4 byte words
- ✔ Small: Compile with zero dependencies
- ✔ Reusable: Encode and decode into caller owned buffers to avoid allocations
- ✔ Safe: Extensively fuzzed against potential malicious input

## Quick Start

```rust
let data = b"\x86\x4f\xd2\x6f\xb5\x59\xf7\x5b";
let encoded = z85::encode_to_string(data);
assert_eq!(encoded, "HelloWorld0rr91");

let decoded = z85::decode_str(&encoded).unwrap();
assert_eq!(&decoded[..], &data[..]);
```

## Padding

Plain Z85 is only defined for input that is a multiple of 4 bytes. This crate
always appends one extra block that holds the 0 to 3 leftover bytes followed by
a single `1` byte and zero padding. Decoding scans backwards past the padding
to the `1` to recover the exact original length. Consequently encoded output
is always a multiple of 5 and is one block longer than standard Z85 for the
same input, and output is only compatible with encoders that follow the same
convention.

## Reusing Buffers

High throughput callers can size buffers up front with [`encoded_len`] and
[`decoded_cap`] and reuse them across calls.

```rust
let mut encoded = vec![0u8; z85::encoded_len(64)];
let mut decoded = vec![0u8; z85::decoded_cap(encoded.len())?];

for i in 0..4u8 {
    let data = [i; 64];
    let written = z85::encode_to(&data, &mut encoded)?;
    let len = z85::decode_to(&encoded[..written], &mut decoded)?;
    assert_eq!(&decoded[..len], &data[..]);
}
# Ok::<(), z85::Error>(())
```

Note that [`decoded_cap`] is a capacity: the marker block means the decoded
data is always 1 to 4 bytes shorter.

## Errors

All failures are reported through [`Error`], whose [`ErrorKind`] details what
went wrong. None of them are transient: the same input will always fail the
same way.

```rust
use z85::ErrorKind;

let err = z85::decode(b"Hello World").unwrap_err();
assert_eq!(err.kind(), &ErrorKind::InvalidEncodedLength(11));

let err = z85::decode(b"Hel o0rr91").unwrap_err();
assert_eq!(err.kind(), &ErrorKind::InvalidEncodedByte { byte: b' ', offset: 3 });
```

*/

pub mod alphabet;
mod decode;
mod encode;
mod errors;
mod length;
#[cfg(feature = "serde")]
pub mod serde;
pub(crate) mod util;

pub use self::alphabet::ALPHABET;
pub use self::decode::{decode, decode_str, decode_to};
pub use self::encode::{encode, encode_to, encode_to_string};
pub use self::errors::*;
pub use self::length::{decoded_cap, encoded_len};
