use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while turning problem text into a [`Problem`](crate::Problem).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid data length: expected at least 2 lines, found {0}")]
    MissingLines(usize),

    #[error("invalid first line length: expected `M N`, found {0} token(s)")]
    Header(usize),

    #[error("line {line}: `{token}` is not a non-negative integer")]
    Integer { line: usize, token: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("malformed problem in {}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },
}

pub type Result<T> = std::result::Result<T, Error>;
