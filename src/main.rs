use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pizzapick::text::{read_problem, write_solution};

/// Order as many pizza slices as possible without exceeding the maximum
#[derive(Debug, Parser)]
#[command(name = "pizzapick", version, about)]
struct Cli {
    /// Input file path
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Print the wanted and achieved slice counts
    #[arg(short, long)]
    log: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> pizzapick::Result<()> {
    let problem = read_problem(&cli.input)?;
    let solution = problem.solve();

    if cli.log {
        info!(
            want = problem.capacity,
            solution = problem.sum_of(&solution),
            "slices"
        );
    }

    write_solution(&cli.output, &solution)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
