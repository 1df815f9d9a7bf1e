//! Encodes stdin as Z85 text on stdout

use std::error;
use std::io::{self, Read, Write};

fn main() -> Result<(), Box<dyn error::Error>> {
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data)?;

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(&z85::encode(&data))?;
    lock.write_all(b"\n")?;
    Ok(())
}
