// CLI binary entry point for sndtag
//
// This is the main entry point for the sndtag command-line tool.

mod cli;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{command_detect, command_read, Commands, Config, OutputFormatter};

fn main() {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Returns the number of files that could not be handled.
fn run(config: &Config) -> anyhow::Result<usize> {
    let options = config.parse_options()?;
    let formatter = OutputFormatter::new(config.format, config.quiet);

    match &config.command {
        Commands::Read { files, output } => command_read(files, output.as_ref(), &options, &formatter),
        Commands::Detect { files } => command_detect(files, &formatter),
    }
}
