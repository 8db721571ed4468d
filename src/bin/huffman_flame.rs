use clap::Parser;
use huffcode::{build_code, count_frequencies, decode, encode};

/// Repeated build/encode/decode loop for profiling.
#[derive(Debug, Parser)]
#[command(name = "huffman_flame", about = "Huffman codec profiling loop")]
struct Args {
    /// Number of build/encode/decode rounds.
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Input length in symbols.
    #[arg(long, default_value_t = 10_000)]
    len: usize,

    /// Number of distinct symbols in the input.
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u16).range(1..=256))]
    alphabet: u16,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let k = args.alphabet as usize;
    let input: Vec<u8> = (0..args.len).map(|i| (i % (1 + i % k)) as u8).collect();
    let alphabet = count_frequencies(&input);

    tracing::info!(
        iterations = args.iterations,
        len = args.len,
        symbols = alphabet.len(),
        "Starting profiling loop"
    );

    let mut total_bits = 0;
    for _ in 0..args.iterations {
        let (tree, table) = build_code(&alphabet)?;
        let bits = encode(&input, &table)?;
        let decoded = decode(&tree, &bits)?;
        if decoded != input {
            return Err("round trip mismatch".into());
        }
        total_bits = bits.len();
    }

    tracing::info!(
        bits = total_bits,
        ratio = total_bits as f64 / (input.len() * 8).max(1) as f64,
        "Finished"
    );
    Ok(())
}
