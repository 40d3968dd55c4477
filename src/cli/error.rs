use thiserror::Error;

use crate::storage::StoreError;

/// Problems with what the user typed or passed on the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("age must be a value of integer, got {0:?}")]
    InvalidAge(String),

    #[error("no such option: {0:?}")]
    UnknownOption(String),

    #[error("usage: employee_dms 0 <name> <age> <gender> (got {0} value(s) after 0)")]
    Usage(usize),
}

/// Errors that end the input loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),
}
