//! Command-line switches as configuration overrides
//!
//! Accepted forms:
//!
//! - `--key=value` and `--key value`
//! - `/key=value` and `/key value`
//! - `key=value`
//!
//! `:` in a key is the hierarchy separator and becomes `.` for the store.
//! Bare tokens without `=` are ignored.

use crate::{Error, Result};

/// Parse `args` into `(key, value)` overrides, in argument order.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Vec<(String, String)>> {
    let mut overrides = Vec::new();
    let mut args = args.iter().map(AsRef::as_ref);

    while let Some(arg) = args.next() {
        let (switch, prefixed) = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('/')) {
            Some(rest) => (rest, true),
            None => (arg, false),
        };

        let (key, value) = match switch.split_once('=') {
            Some((key, value)) => (key, value.to_string()),
            None if prefixed => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::invalid_argument(arg, "switch has no value"))?;
                (switch, value.to_string())
            }
            None => {
                tracing::debug!(argument = arg, "Ignoring command-line token without a key");
                continue;
            }
        };

        if key.is_empty() {
            return Err(Error::invalid_argument(arg, "switch has an empty key"));
        }
        overrides.push((store_key(key), value));
    }

    Ok(overrides)
}

/// Convert a `section:key` path to the store's `section.key` form
pub fn store_key(key: &str) -> String {
    key.replace(':', ".")
}
