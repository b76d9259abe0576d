//! `gamefold`: turn a game-server log into per-game kill statistics.
//!
//! ```text
//! gamefold --logpath ./qgames.log --output ./result.json
//! ```

use clap::Parser;
use gamefold::sink::JsonFile;
use gamefold::{init_logging, pipeline, Config};
use log::{error, info};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "gamefold",
    version,
    about = "Per-game kill statistics from a game-server log"
)]
struct Cli {
    /// Game log file to read
    #[arg(long, default_value = "./qgames.log")]
    logpath: PathBuf,

    /// Where to write the JSON report
    #[arg(long, short, default_value = "./result.json")]
    output: PathBuf,

    /// Only log at info level and above
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::builder()
        .log_path(cli.logpath)
        .output_path(cli.output)
        .log_debug(!cli.quiet)
        .build();

    if let Err(e) = init_logging(&config) {
        eprintln!("{}: failed to initialize logging: {e}", config.app_name());
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let log_file = File::open(config.log_path())
        .map_err(|e| format!("failed to open {}: {e}", config.log_path().display()))?;

    let mut sink = JsonFile::new(config.output_path());
    let summary = pipeline::run(BufReader::new(log_file), &mut sink)?;

    info!(
        "wrote {} reports to {}",
        summary.reports_written,
        sink.path().display()
    );
    info!("execution time: {:?}", start.elapsed());
    Ok(())
}
