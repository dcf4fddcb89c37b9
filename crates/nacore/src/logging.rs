use std::io::Write;
use clap::Args;
use clap::ArgAction;
use env_logger::Builder;

#[derive(Debug, Args)]
pub struct LoggingArguments {
    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl LoggingArguments {
    pub fn init_logging(&self) {
        init_logging(self.verbose)
    }
}

fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init_logging(verbosity: u8) {
    Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbosity)))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}
