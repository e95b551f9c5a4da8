//! URL exclusion pattern.
//!
//! URLs matching the pattern bypass rewriting entirely, so dynamic endpoints
//! keep hitting the origin server instead of the CDN.

use regex::Regex;
use thiserror::Error;

/// Default pattern: any URL containing `.php` stays on the origin.
pub const DEFAULT_EXCLUDES: &str = r"\.php";

#[derive(Debug, Error)]
pub enum ExcludesError {
    /// The configured pattern is not a valid regular expression.
    #[error("invalid exclusion pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Compiled exclusion pattern consulted before every rewrite.
#[derive(Debug, Clone)]
pub struct ExcludePattern {
    regex: Regex,
}

impl ExcludePattern {
    /// Compile a pattern; user-supplied patterns are validated here so the
    /// rewrite path itself never fails.
    pub fn new(pattern: &str) -> Result<Self, ExcludesError> {
        let regex = Regex::new(pattern).map_err(|source| ExcludesError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Returns true when `url` must bypass rewriting.
    pub fn is_excluded(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for ExcludePattern {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES).expect("default exclusion pattern compiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_excludes_php_endpoints() {
        let excludes = ExcludePattern::default();
        assert!(excludes.is_excluded("https://example.com/wp-content/loader.php"));
        assert!(excludes.is_excluded("https://example.com/index.php?p=1"));
    }

    #[test]
    fn default_pattern_passes_static_assets() {
        let excludes = ExcludePattern::default();
        assert!(!excludes.is_excluded("https://example.com/wp-content/themes/a/style.css"));
        assert!(!excludes.is_excluded("https://example.com/wp-includes/js/jquery.js"));
    }

    #[test]
    fn custom_pattern() {
        let excludes = ExcludePattern::new(r"\.(php|cgi)").unwrap();
        assert!(excludes.is_excluded("https://example.com/run.cgi"));
        assert!(!excludes.is_excluded("https://example.com/logo.png"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = ExcludePattern::new("(unclosed").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid exclusion pattern"), "got: {msg}");
    }
}
