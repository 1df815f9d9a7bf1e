use std::error;
use std::io::{self, Read};
use std::time::Instant;

fn main() -> Result<(), Box<dyn error::Error>> {
    let start = Instant::now();
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data)?;
    eprintln!("ingest: {}ms", start.elapsed().as_millis());

    let encode = Instant::now();
    let encoded = z85::encode(&data);
    eprintln!(
        "encode: {}ms ({} -> {} bytes)",
        encode.elapsed().as_millis(),
        data.len(),
        encoded.len()
    );

    let decode = Instant::now();
    match z85::decode(&encoded) {
        Ok(decoded) => {
            eprintln!("decode: {}ms", decode.elapsed().as_millis());
            if decoded != data {
                return Err("decoded data does not match input".into());
            }
        }
        Err(e) => eprintln!("errored with {}", e),
    }

    Ok(())
}
