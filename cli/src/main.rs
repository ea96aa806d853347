//! The nthprime CLI tool

#![allow(clippy::print_stdout)]

use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;
use nthprime_cli::util::init_logger;
use nthprime_cli::{parse_index, CliError, InputError};
use nthprime_sieve::nth_prime;

#[derive(Parser)]
#[command(name = "nthprime", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Index of the prime to print, starting at 1 for the prime 2
    #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
    index: Option<String>,
}

fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues => exit_with(InputError::ArgumentCount.into()),
            _ => err.exit(),
        },
    };

    init_logger(args.log_level);

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return;
    }

    if let Err(err) = run(args.index) {
        exit_with(err);
    }
}

fn run(index: Option<String>) -> Result<(), CliError> {
    let index = index.ok_or(InputError::ArgumentCount)?;
    let n = parse_index(&index)?;
    let prime = nth_prime(n)?;
    println!("The prime no {n} is: {prime}");
    Ok(())
}

#[allow(clippy::print_stderr)]
fn exit_with(err: CliError) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
