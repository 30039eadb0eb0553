//! Environment-backed configuration helpers.
//!
//! Every setting has a development default. A value that is present but fails
//! to parse falls back to that default with a warning instead of aborting startup.

use std::str::FromStr;

/// Read `key` as a string, or `default` when unset.
pub fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse `key`, or `default` when unset or unparseable.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + core::fmt::Debug,
{
    match std::env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + core::fmt::Debug,
{
    match raw.trim().parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(key, value = raw, ?default, "unparseable config value; using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_accepts_valid_values() {
        assert_eq!(parse_or("N", " 12 ", 5u32), 12);
        assert!(parse_or("B", "true", false));
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or("N", "twelve", 5u32), 5);
        assert!(!parse_or("B", "yes please", false));
    }

    #[test]
    fn unset_keys_use_defaults() {
        assert_eq!(env_string("DEALERSHIP_TEST_UNSET_STRING", "fallback"), "fallback");
        assert_eq!(env_parse("DEALERSHIP_TEST_UNSET_NUMBER", 7u32), 7);
    }
}
