use clap::Parser;
use colored::*;
use anyhow::Result;

use nc_common::REFERENCE_SEQUENCE;
use nc_common::reference_dna;
use nacore::logging::LoggingArguments;

#[derive(Debug, Parser)]
#[command(name = "nc-reference")]
#[command(author, version, about = "Print a prefix of the reference sequence")]
pub struct Cli {
    /// Number of nucleotides (defaults to the full sequence)
    #[arg(short, long)]
    length: Option<usize>,

    /// Print as RNA (T -> U)
    #[arg(long)]
    rna: bool,

    #[command(flatten)]
    logging: LoggingArguments,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging.init_logging();

    let length = cli.length.unwrap_or(REFERENCE_SEQUENCE.len());
    let sequence = reference_dna(length)?;

    println!("{}", format!(">reference_{}", length).yellow());
    if cli.rna {
        println!("{}", sequence.replace('T', "U"));
    } else {
        println!("{}", sequence);
    }
    Ok(())
}
