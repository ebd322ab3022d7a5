//! Parsed options: construction, config expansion and typed accessors.

use std::fmt::Display;
use std::str::FromStr;

use crate::config;
use crate::error::{Error, Result};
use crate::scan;
use crate::spec::SpecTable;
use crate::store::ValueStore;

/// Numeric grammar used by the typed accessors.
pub trait Number: Copy + PartialOrd + Display + FromStr {
    /// Grammar name used in diagnostics ("needs GRAMMAR value").
    const GRAMMAR: &'static str;
}

impl Number for i32 {
    const GRAMMAR: &'static str = "integer";
}

impl Number for i64 {
    const GRAMMAR: &'static str = "long integer";
}

impl Number for f64 {
    const GRAMMAR: &'static str = "float";
}

/// Parser for command-line options. Options begin with a single `-`
/// character.
///
/// An instance is built once from argv, optionally expanded from a
/// config file, and then queried. It is single-use: there is no way
/// back to an unparsed state, and a scan that fails partway leaves the
/// writes of its earlier tokens in place.
#[derive(Debug)]
pub struct Options {
    specs: SpecTable,
    values: ValueStore,
    arguments: Vec<String>,
}

impl Options {
    /// Parse `args` against `specs`, then expand the config file if the
    /// `config` option is present.
    pub fn parse<A, S>(args: &[A], specs: &[S]) -> Result<Options>
    where
        A: AsRef<str>,
        S: AsRef<str>,
    {
        let mut options = Options::new(args, specs)?;
        options.handle_config_option()?;
        Ok(options)
    }

    /// Parse `args` against `specs` without config expansion.
    ///
    /// Each spec string is an option name without the leading `-`;
    /// options that need a value have a `:` appended. The special
    /// argument `--` stops option parsing, all following arguments are
    /// treated as non-option arguments.
    pub fn new<A, S>(args: &[A], specs: &[S]) -> Result<Options>
    where
        A: AsRef<str>,
        S: AsRef<str>,
    {
        let mut options = Options {
            specs: SpecTable::build(specs),
            values: ValueStore::new(),
            arguments: Vec::new(),
        };
        scan::scan(args, &options.specs, &mut options.values, &mut options.arguments)?;
        Ok(options)
    }

    /// Read options from the file named by the `config` option, a no-op
    /// when `config` is absent. Requires that `config` is a registered
    /// value-taking option.
    ///
    /// The file's tokens run through the same scanner as argv against
    /// the same accumulators: values from the file overwrite values from
    /// argv, and the file's non-option arguments append after argv's.
    /// Expansion is single-shot; a `config` value written by the file
    /// itself is not expanded again.
    pub fn handle_config_option(&mut self) -> Result<()> {
        if !self.contains(config::CONFIG_OPTION) {
            return Ok(());
        }
        let path = self.get(config::CONFIG_OPTION);
        let tokens = config::read_tokens(&path)?;
        scan::scan(&tokens, &self.specs, &mut self.values, &mut self.arguments)
    }

    /// Check if option is present.
    pub fn contains(&self, option: &str) -> bool {
        debug_assert!(
            self.specs.is_registered(option),
            "option -{} is not registered",
            option
        );
        self.values.contains(option)
    }

    /// String option value, or the empty string if the option is absent.
    pub fn get(&self, option: &str) -> String {
        self.get_or(option, "")
    }

    /// String option value, or `default` if the option is absent.
    pub fn get_or(&self, option: &str, default: &str) -> String {
        debug_assert!(
            self.specs.is_registered(option),
            "option -{} is not registered",
            option
        );
        match self.values.value(option) {
            Some(value) => value.to_string(),
            None => default.to_string(),
        }
    }

    /// Non-option arguments, in order of appearance. Arguments from a
    /// config file follow the ones from argv.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Check that the number of non-option arguments is zero.
    pub fn check_no_arguments(&self) -> Result<()> {
        if self.arguments.is_empty() {
            Ok(())
        } else {
            Err(Error::UnexpectedArguments)
        }
    }

    /// Numeric option value, or `default` if the option is absent.
    ///
    /// The default is formatted to text and parsed through the same
    /// grammar as a stored value, so it round-trips exactly like input.
    pub fn get_number<T: Number>(&self, option: &str, default: T) -> Result<T> {
        let raw = self.get_or(option, &default.to_string());
        raw.parse().map_err(|_| Error::InvalidNumber {
            option: option.to_string(),
            value: raw,
            grammar: T::GRAMMAR,
        })
    }

    /// Numeric option value with a lower bound. The bound applies to
    /// the default as well as to a stored value.
    pub fn get_number_min<T: Number>(&self, option: &str, default: T, min: T) -> Result<T> {
        let value = self.get_number(option, default)?;
        if value < min {
            return Err(out_of_range(option, value, min, None));
        }
        Ok(value)
    }

    /// Numeric option value checked against an inclusive range.
    pub fn get_number_range<T: Number>(
        &self,
        option: &str,
        default: T,
        min: T,
        max: T,
    ) -> Result<T> {
        let value = self.get_number(option, default)?;
        if value < min || value > max {
            return Err(out_of_range(option, value, min, Some(max)));
        }
        Ok(value)
    }

    /// Integer option value, or `default` if the option is absent.
    pub fn get_integer(&self, option: &str, default: i32) -> Result<i32> {
        self.get_number(option, default)
    }

    /// Integer option value with a lower bound.
    pub fn get_integer_min(&self, option: &str, default: i32, min: i32) -> Result<i32> {
        self.get_number_min(option, default, min)
    }

    /// Integer option value checked against an inclusive range.
    pub fn get_integer_range(
        &self,
        option: &str,
        default: i32,
        min: i32,
        max: i32,
    ) -> Result<i32> {
        self.get_number_range(option, default, min, max)
    }

    /// Long integer option value, or `default` if the option is absent.
    pub fn get_long(&self, option: &str, default: i64) -> Result<i64> {
        self.get_number(option, default)
    }

    /// Double option value, or `default` if the option is absent.
    pub fn get_double(&self, option: &str, default: f64) -> Result<f64> {
        self.get_number(option, default)
    }
}

fn out_of_range<T: Number>(option: &str, value: T, min: T, max: Option<T>) -> Error {
    Error::OutOfRange {
        option: option.to_string(),
        value: value.to_string(),
        min: min.to_string(),
        max: max.map(|m| m.to_string()),
    }
}
