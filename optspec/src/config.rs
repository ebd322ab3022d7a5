//! Config-file reading for option expansion.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{Error, Result};
use crate::tokenize;

/// Name of the conventional config option. The engine has no other
/// knowledge of it; callers register `config:` and invoke expansion.
pub const CONFIG_OPTION: &str = "config";

/// Read the file at `path` and split its contents into argv-style
/// tokens. Each line terminator counts only as a token separator, so
/// the file's line structure carries no further meaning.
///
/// Failure to open the file is fatal. An error while reading is noted
/// on stderr and treated as end of input; everything read up to that
/// point is still tokenized.
pub fn read_tokens(path: &str) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|_| Error::ConfigFileNotFound(path.to_string()))?;
    let mut buffer = String::with_capacity(256);
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => {
                buffer.push_str(&line);
                buffer.push(' ');
            }
            Err(err) => {
                eprintln!("{}", err);
                break;
            }
        }
    }
    tokenize::split_arguments(&buffer)
}
