//! Times the sieve on fixed indices, giving a per-machine unit for comparing
//! running times of other programs.

#![allow(clippy::print_stdout)]

use std::time::Duration;

use clap::Parser;
use itertools::Itertools;
use log::{info, LevelFilter};
use nthprime_cli::util::init_logger;
use nthprime_cli::CliError;
use nthprime_sieve::timer::{calibrate, DEFAULT_CALIBRATORS};

#[derive(Parser)]
#[command(name = "nthprime-calibrate", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Prime index sieved by one sample. Repeat for several samples.
    #[arg(long = "index")]
    #[arg(default_values_t = DEFAULT_CALIBRATORS)]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    indices: Vec<u64>,

    /// Number of calibration runs.
    #[arg(short = 'N', long)]
    #[arg(default_value_t = 1)]
    iterations: usize,

    /// Running time of another program, in milliseconds, to express in units
    /// of the calibrated time.
    #[arg(long, value_name = "MS")]
    relative_to: Option<u64>,
}

fn main() {
    let args = Cli::parse();

    init_logger(args.log_level);

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return;
    }

    if let Err(err) = run(&args.indices, args.iterations, args.relative_to) {
        exit_with(err);
    }
}

fn run(indices: &[u64], iterations: usize, relative_to: Option<u64>) -> Result<(), CliError> {
    info!("Calibrating with prime no {}", indices.iter().join(", "));
    for i in 0..iterations {
        let calibration = calibrate(indices)?;
        let millis = calibration.mean().as_secs_f64() * 1000.0;
        println!("Base calibrated {i}: {millis:.0}ms");
        if let Some(ms) = relative_to {
            let relative = calibration.relative(Duration::from_millis(ms));
            println!("Relative time {i}: {relative:.3}");
        }
    }
    Ok(())
}

#[allow(clippy::print_stderr)]
fn exit_with(err: CliError) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
