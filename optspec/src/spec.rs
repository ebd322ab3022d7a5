//! Option specification table.
//!
//! Callers declare the allowed options once, as spec strings: a bare
//! `name` declares a flag, `name:` declares an option that consumes the
//! token following it as its value.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A single option declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Canonical option name, without the leading `-` or value marker.
    pub name: String,
    /// Whether the option consumes the token that follows it.
    pub requires_value: bool,
}

impl OptionSpec {
    /// Parse one spec string. Returns `None` for the empty string, which
    /// spec lists may contain and which is skipped.
    fn parse(spec: &str) -> Option<OptionSpec> {
        if spec.is_empty() {
            return None;
        }
        let (name, requires_value) = match spec.strip_suffix(':') {
            Some(name) => (name, true),
            None => (spec, false),
        };
        debug_assert!(
            !name.is_empty() && !name.starts_with('-'),
            "invalid option spec {:?}",
            spec
        );
        Some(OptionSpec {
            name: name.to_string(),
            requires_value,
        })
    }
}

/// Immutable table of registered option specs, keyed by canonical name.
///
/// A later spec overwrites an earlier one with the same name, so a list
/// containing both `name` and `name:` leaves the last declaration in
/// effect.
#[derive(Debug, Clone, Default)]
pub struct SpecTable {
    entries: BTreeMap<String, OptionSpec>,
}

impl SpecTable {
    /// Build a table from spec strings.
    pub fn build<S: AsRef<str>>(specs: &[S]) -> SpecTable {
        let mut entries = BTreeMap::new();
        for spec in specs {
            if let Some(spec) = OptionSpec::parse(spec.as_ref()) {
                entries.insert(spec.name.clone(), spec);
            }
        }
        SpecTable { entries }
    }

    /// Resolve a raw option name (without the leading `-`) to its spec.
    pub fn resolve(&self, raw_name: &str) -> Result<&OptionSpec> {
        self.entries
            .get(raw_name)
            .ok_or_else(|| Error::UnknownOption(raw_name.to_string()))
    }

    /// True if `name` is a registered option.
    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
