//! Command-line and configuration-file option parsing.
//!
//! Options begin with a single `-` character and are declared up front
//! as spec strings: `name` for a flag, `name:` for an option that takes
//! the token following it as its value. Parsing is last-write-wins, the
//! special argument `--` stops option interpretation, and a registered
//! `config:` option names a file whose contents are tokenized with
//! shell-like quoting rules and merged through the same scanner.

pub mod config;
pub mod error;
pub mod options;
pub mod scan;
pub mod spec;
pub mod store;
pub mod tokenize;

pub use error::{fatal, Error, Result};
pub use options::{Number, Options};
pub use spec::{OptionSpec, SpecTable};
pub use store::{ValueStore, FLAG_SENTINEL};
pub use tokenize::split_arguments;
