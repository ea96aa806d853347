//! Shared pieces of the nthprime binaries.

pub mod input;
pub mod util;

use nthprime_sieve::Error as SieveError;

pub use input::{parse_index, InputError};

/// Everything that makes a binary exit with a non-zero status.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("limit = {}\n{0}", .0.limit())]
    Sieve(#[from] SieveError),
}
