//! Shell-like splitting of a command line into discrete tokens.
//!
//! Whitespace separates tokens. Single and double quotes group
//! whitespace into one token, so a config-file value may contain
//! spaces. A backslash escapes the character after it; inside quotes it
//! is kept literally unless it escapes the closing quote character.

use std::mem;
use std::str::Chars;

use crate::error::{Error, Result};

/// Split `line` into argv-style tokens.
pub fn split_arguments(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(q) if c == '\\' => {
                let escaped = next_escaped(&mut chars)?;
                if escaped != q {
                    current.push('\\');
                }
                current.push(escaped);
            }
            Some(_) => current.push(c),
            None if c.is_ascii_whitespace() => {
                if !current.is_empty() {
                    tokens.push(mem::take(&mut current));
                }
            }
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '\\' => current.push(next_escaped(&mut chars)?),
            None => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

fn next_escaped(chars: &mut Chars<'_>) -> Result<char> {
    chars
        .next()
        .ok_or_else(|| Error::BadQuoting("unterminated backslash escape".to_string()))
}
