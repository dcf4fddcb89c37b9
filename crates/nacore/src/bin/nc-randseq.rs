use clap::Parser;
use anyhow::Result;
use anyhow::bail;
use log::info;
use rand::Rng;

use nc_common::LocalRng;
use nacore::logging::LoggingArguments;

/// Generate random sequences from a given alphabet.
#[derive(Parser, Debug)]
#[command(name = "nc-randseq")]
#[command(author, version, about = "Generate random sequences", long_about = None)]
struct Cli {
    /// Alphabet to choose from, comma-separated (e.g., A,C,G,T)
    #[arg(short, long, default_value = "A,C,G,T")]
    alphabet: String,

    /// Length of each generated sequence
    #[arg(short, long, default_value_t = 50)]
    length: usize,

    /// Number of sequences to generate
    #[arg(short, long, default_value_t = 1)]
    num: usize,

    #[command(flatten)]
    logging: LoggingArguments,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging.init_logging();

    let mode = nc_common::init()?;
    info!("Seeding mode: {} (process seed {:#x})", mode, nc_common::process_seed()?);

    let alphabet: Vec<char> = cli.alphabet
        .split(',')
        .filter_map(|s| s.trim().chars().next())
        .collect();
    if alphabet.is_empty() {
        bail!("Empty alphabet: '{}'", cli.alphabet);
    }

    let mut rng = LocalRng::new();
    for _ in 0..cli.num {
        let seq: String = (0..cli.length)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();
        println!("{}", seq);
    }
    Ok(())
}
