//! Decodes Z85 text from stdin into raw bytes on stdout.
//!
//! Trailing whitespace is ignored so that output piped from a shell or
//! `z85-encode` can be decoded directly.

use std::error;
use std::io::{self, Read, Write};

fn main() -> Result<(), Box<dyn error::Error>> {
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data)?;

    let end = data
        .iter()
        .rposition(|x| !x.is_ascii_whitespace())
        .map_or(0, |x| x + 1);

    let decoded = z85::decode(&data[..end])?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(&decoded)?;
    Ok(())
}
