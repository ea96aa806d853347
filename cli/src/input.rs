//! Validation of the command line index.

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number of arguments")]
    ArgumentCount,
    #[error("Invalid input. Please enter a positive integer.")]
    NotPositive(String),
}

/// Parses a 1-based prime index given in decimal.
pub fn parse_index(arg: &str) -> Result<u64, InputError> {
    arg.parse::<u64>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| InputError::NotPositive(arg.to_string()))
}
