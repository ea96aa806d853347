use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Sets up logging to stderr at `level`, refined by `RUST_LOG`.
///
/// Stdout carries nothing but the results.
pub fn init_logger(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
