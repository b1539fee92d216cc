//! Environment variable utilities
//!
//! Only the handful of variables the converter needs are ever read; there
//! is no snapshot of the whole process environment.

use std::env;

/// Environment variable utilities
#[derive(Debug)]
pub struct EnvUtils;

impl EnvUtils {
    /// Get an environment variable, treating empty and non-unicode values as unset
    pub fn get_non_empty(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_is_none() {
        assert!(EnvUtils::get_non_empty("CMARK2HTML_SURELY_UNSET_VAR").is_none());
    }

    #[test]
    fn test_reads_set_var() {
        // PATH is set wherever the test suite runs
        assert_eq!(
            EnvUtils::get_non_empty("PATH"),
            env::var("PATH").ok().filter(|v| !v.is_empty())
        );
    }
}
