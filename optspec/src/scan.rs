//! Token scanner: resolves option tokens against a spec table and
//! collects everything else as positional arguments.

use crate::error::{Error, Result};
use crate::spec::SpecTable;
use crate::store::ValueStore;

/// Disables option interpretation for the rest of one scan. The marker
/// itself is never stored.
const STOP_MARKER: &str = "--";

/// Scan `tokens` left to right, writing resolved options into `values`
/// and appending non-option tokens to `positionals` in order.
///
/// The same function serves the argv pass and the config-file pass, so
/// both merge into the same accumulators with identical semantics. The
/// first error aborts the scan; writes from earlier tokens of the same
/// scan are kept.
pub fn scan<S: AsRef<str>>(
    tokens: &[S],
    specs: &SpecTable,
    values: &mut ValueStore,
    positionals: &mut Vec<String>,
) -> Result<()> {
    let mut stop_parsing = false;
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        let token = token.as_ref();
        if token == STOP_MARKER {
            stop_parsing = true;
            continue;
        }
        if !stop_parsing && token.starts_with('-') {
            let spec = specs.resolve(&token[1..])?;
            if spec.requires_value {
                match iter.next() {
                    Some(value) => values.put(&spec.name, value.as_ref().to_string()),
                    None => return Err(Error::MissingValue(spec.name.clone())),
                }
            } else {
                values.put_flag(&spec.name);
            }
        } else {
            positionals.push(token.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FLAG_SENTINEL;

    fn run(tokens: &[&str], specs: &[&str]) -> (Result<()>, ValueStore, Vec<String>) {
        let table = SpecTable::build(specs);
        let mut values = ValueStore::new();
        let mut positionals = Vec::new();
        let result = scan(tokens, &table, &mut values, &mut positionals);
        (result, values, positionals)
    }

    #[test]
    fn non_option_tokens_pass_through_in_order() {
        let (result, _, positionals) = run(&["a", "b", "c"], &["verbose"]);
        result.unwrap();
        assert_eq!(positionals, vec!["a", "b", "c"]);
    }

    #[test]
    fn flag_records_sentinel() {
        let (result, values, _) = run(&["-f"], &["f"]);
        result.unwrap();
        assert_eq!(values.value("f"), Some(FLAG_SENTINEL));
    }

    #[test]
    fn value_option_takes_next_token_whole() {
        let (result, values, positionals) = run(&["-v", "some value"], &["v:"]);
        result.unwrap();
        assert_eq!(values.value("v"), Some("some value"));
        assert!(positionals.is_empty());
    }

    #[test]
    fn repeated_option_last_write_wins() {
        let (result, values, _) = run(&["-v", "a", "-v", "b"], &["v:"]);
        result.unwrap();
        assert_eq!(values.value("v"), Some("b"));
    }

    #[test]
    fn flag_never_consumes_following_token() {
        let (result, values, positionals) = run(&["-f", "-g"], &["f", "g"]);
        result.unwrap();
        assert_eq!(values.value("f"), Some(FLAG_SENTINEL));
        assert_eq!(values.value("g"), Some(FLAG_SENTINEL));
        assert!(positionals.is_empty());
    }

    #[test]
    fn stop_marker_disables_option_interpretation() {
        let (result, values, positionals) = run(&["-v", "a", "--", "-v", "c"], &["v:"]);
        result.unwrap();
        assert_eq!(values.value("v"), Some("a"));
        assert_eq!(positionals, vec!["-v", "c"]);
    }

    #[test]
    fn stop_marker_is_not_stored() {
        let (result, _, positionals) = run(&["--", "x"], &["v:"]);
        result.unwrap();
        assert_eq!(positionals, vec!["x"]);
    }

    #[test]
    fn unknown_option_fails() {
        let (result, _, _) = run(&["-nosuch"], &["v:"]);
        assert_eq!(result, Err(Error::UnknownOption("nosuch".to_string())));
    }

    #[test]
    fn lone_dash_is_an_unknown_option() {
        let (result, _, _) = run(&["-"], &["v:"]);
        assert_eq!(result, Err(Error::UnknownOption(String::new())));
    }

    #[test]
    fn value_option_at_end_fails() {
        let (result, _, _) = run(&["-v"], &["v:"]);
        assert_eq!(result, Err(Error::MissingValue("v".to_string())));
    }

    #[test]
    fn writes_before_a_failure_are_kept() {
        let (result, values, positionals) = run(&["-v", "a", "x", "-bad"], &["v:"]);
        assert_eq!(result, Err(Error::UnknownOption("bad".to_string())));
        assert_eq!(values.value("v"), Some("a"));
        assert_eq!(positionals, vec!["x"]);
    }
}
