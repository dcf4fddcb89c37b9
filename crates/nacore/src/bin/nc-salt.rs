use clap::Parser;
use colored::*;
use anyhow::Result;
use log::info;
use serde_json::json;

use nacore::logging::LoggingArguments;
use nacore::salt_parsers::SaltArguments;

#[derive(Debug, Parser)]
#[command(name = "nc-salt")]
#[command(author, version, about = "Salt correction and water molarity for DNA")]
pub struct Cli {
    /// Print conditions and results as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    logging: LoggingArguments,

    #[command(flatten, next_help_heading = "Solution conditions")]
    salt: SaltArguments,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging.init_logging();

    let conditions = cli.salt.build_conditions()?;
    let correction = conditions.correction()?;
    let molarity = conditions.water_molarity();
    info!("{} K, {} M Na+, {} M Mg2+",
        conditions.temperature, conditions.sodium, conditions.magnesium);

    if cli.json {
        let out = json!({
            "conditions": conditions,
            "water_molarity": molarity,
            "salt_correction": correction,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:<16} {}", "water molarity".cyan(), format!("{:>9.4}", molarity).green());
        println!("{:<16} {}", "salt correction".cyan(), format!("{:>9.4}", correction).green());
    }
    Ok(())
}
