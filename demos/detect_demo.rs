use std::io::Read;

use charprobe::{Detector, ProbeConfig};

/// Usage: detect_demo [FILE] [CONFIG.toml]
///
/// Reads FILE (or stdin) in 4 KiB chunks and prints the verdict as JSON.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let input = args.next();
    let config = match args.next() {
        Some(path) => ProbeConfig::from_file(path)?,
        None => ProbeConfig::default(),
    };

    let mut reader: Box<dyn Read> = match input.as_deref() {
        Some("-") | None => Box::new(std::io::stdin()),
        Some(path) => Box::new(std::fs::File::open(path)?),
    };

    let mut detector = Detector::with_config(config);
    let mut buf = [0u8; 4096];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 || detector.is_done() {
            break;
        }
        detector.feed(&buf[..n]);
    }

    println!("{}", serde_json::to_string(&detector.close())?);
    Ok(())
}
