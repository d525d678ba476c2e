//! Bit string decoding utility
//! Feeds demodulated bit strings through the registered device decoders
//! and prints decoded records as JSON lines.

use rxdecode_rs::{init_decoders, run_decoders, BitBuffer, JsonLineSink};
use std::env;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <bitstring> [<bitstring>...]", args[0]);
        eprintln!("\nEach argument is one demodulated transmission, MSB first.");
        eprintln!("\nExamples:");
        eprintln!("  {} 000000101           # battery OK, ID 5", args[0]);
        eprintln!("  {} 000011111           # battery low, ID 15", args[0]);
        std::process::exit(1);
    }

    init_decoders();

    let stdout = std::io::stdout().lock();
    let mut sink = JsonLineSink::new(stdout);

    for arg in &args[1..] {
        let bits = BitBuffer::from_bit_string(arg)?;
        let emitted = run_decoders(&bits, &mut sink);
        if emitted == 0 {
            eprintln!("{}: no decoder matched", arg);
        }
    }

    Ok(())
}
