//! The plain-text contest format.
//!
//! Input is two lines: `M N`, then `N` slice counts. Output is the number of
//! pizza types ordered, then their indices, with no trailing newline.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{Error, ParseError, Result};
use crate::{Problem, Solution};

pub fn parse_problem(text: &str) -> std::result::Result<Problem, ParseError> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return Err(ParseError::MissingLines(lines.len()));
    }

    let header: Vec<&str> = lines[0].split_whitespace().collect();
    if header.len() < 2 {
        return Err(ParseError::Header(header.len()));
    }
    let capacity = parse_integer(1, header[0])?;
    let declared = parse_integer(1, header[1])?;

    let items = lines[1]
        .split_whitespace()
        .map(|token| parse_integer(2, token))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if declared != items.len() as u64 {
        warn!(declared, found = items.len(), "pizza type count disagrees with header");
    }

    Ok(Problem { capacity, items })
}

fn parse_integer(line: usize, token: &str) -> std::result::Result<u64, ParseError> {
    token.parse().map_err(|_| ParseError::Integer {
        line,
        token: token.to_owned(),
    })
}

pub fn format_solution(solution: &Solution) -> String {
    let chosen: Vec<String> = solution.chosen.iter().map(ToString::to_string).collect();
    format!("{}\n{}", solution.count, chosen.join(" "))
}

pub fn read_problem(path: impl AsRef<Path>) -> Result<Problem> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_problem(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_solution(path: impl AsRef<Path>, solution: &Solution) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_solution(solution)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
