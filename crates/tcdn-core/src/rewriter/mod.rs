//! Constant-driven URL substitution.
//!
//! An origin-pull CDN fetches assets from the origin server on demand, so
//! pointing a page at it is purely textual: swap the configured origin
//! prefix for the CDN prefix in every outbound asset URL, unless the URL
//! matches the exclusion pattern.

use crate::config::CdnConfig;
use crate::excludes::{ExcludePattern, ExcludesError};
use crate::hooks::Phase;

/// One origin → CDN prefix replacement.
#[derive(Debug, Clone)]
pub struct Substitution {
    origin: String,
    cdn: String,
}

impl Substitution {
    pub fn new(origin: impl Into<String>, cdn: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            cdn: cdn.into(),
        }
    }

    /// Replace the origin prefix at most once. Already-rewritten URLs no
    /// longer contain the origin prefix, so re-applying is a no-op.
    fn apply(&self, url: &str) -> String {
        url.replacen(&self.origin, &self.cdn, 1)
    }
}

/// Rewrite rules for one request phase. Phases share the substitutions and
/// differ only in their exclusion pattern.
#[derive(Debug, Clone)]
pub struct RewriteRules {
    pub includes: Option<Substitution>,
    pub content: Option<Substitution>,
    pub excludes: ExcludePattern,
}

impl RewriteRules {
    pub fn for_phase(cfg: &CdnConfig, phase: Phase) -> Result<Self, ExcludesError> {
        let includes = pair(&cfg.includes_origin_url, &cfg.includes_cdn_url);
        let content = pair(&cfg.content_origin_url, &cfg.content_cdn_url);

        let pattern = match phase {
            Phase::Early => cfg.excludes_early.as_deref(),
            Phase::Template => cfg.excludes.as_deref(),
        };
        let excludes = match pattern {
            Some(p) => ExcludePattern::new(p)?,
            None => ExcludePattern::default(),
        };

        Ok(Self {
            includes,
            content,
            excludes,
        })
    }
}

/// A substitution exists only when both ends of the pair are configured.
fn pair(origin: &Option<String>, cdn: &Option<String>) -> Option<Substitution> {
    match (origin, cdn) {
        (Some(origin), Some(cdn)) => Some(Substitution::new(origin, cdn)),
        _ => None,
    }
}

/// Stateless URL rewriter. Immutable after construction, so one instance per
/// phase can be shared freely.
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: RewriteRules,
}

impl Rewriter {
    pub fn new(rules: RewriteRules) -> Self {
        Self { rules }
    }

    pub fn for_phase(cfg: &CdnConfig, phase: Phase) -> Result<Self, ExcludesError> {
        RewriteRules::for_phase(cfg, phase).map(Self::new)
    }

    /// Rewrite both the includes prefix and the content prefix.
    pub fn rewrite(&self, url: &str) -> String {
        if self.rules.excludes.is_excluded(url) {
            return url.to_string();
        }

        let url = self.replace_includes(url);
        self.replace_content(&url)
    }

    /// Rewrite only the content prefix.
    pub fn rewrite_content(&self, url: &str) -> String {
        if self.rules.excludes.is_excluded(url) {
            return url.to_string();
        }

        self.replace_content(url)
    }

    pub fn is_excluded(&self, url: &str) -> bool {
        self.rules.excludes.is_excluded(url)
    }

    fn replace_includes(&self, url: &str) -> String {
        match &self.rules.includes {
            Some(sub) => sub.apply(url),
            None => url.to_string(),
        }
    }

    fn replace_content(&self, url: &str) -> String {
        match &self.rules.content {
            Some(sub) => sub.apply(url),
            None => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> CdnConfig {
        CdnConfig {
            includes_origin_url: Some("https://example.com/wp-includes".to_string()),
            includes_cdn_url: Some("https://cdn.example.com/wp-includes".to_string()),
            content_origin_url: Some("https://example.com/wp-content".to_string()),
            content_cdn_url: Some("https://cdn.example.com/wp-content".to_string()),
            ..CdnConfig::default()
        }
    }

    fn rewriter(cfg: &CdnConfig) -> Rewriter {
        Rewriter::for_phase(cfg, Phase::Template).unwrap()
    }

    #[test]
    fn rewrite_replaces_includes_and_content() {
        let r = rewriter(&full_config());
        assert_eq!(
            r.rewrite("https://example.com/wp-includes/js/jquery.js"),
            "https://cdn.example.com/wp-includes/js/jquery.js"
        );
        assert_eq!(
            r.rewrite("https://example.com/wp-content/themes/a/style.css"),
            "https://cdn.example.com/wp-content/themes/a/style.css"
        );
    }

    #[test]
    fn rewrite_content_leaves_includes_prefix_alone() {
        let r = rewriter(&full_config());
        assert_eq!(
            r.rewrite_content("https://example.com/wp-includes/js/jquery.js"),
            "https://example.com/wp-includes/js/jquery.js"
        );
        assert_eq!(
            r.rewrite_content("https://example.com/wp-content/uploads/a.png"),
            "https://cdn.example.com/wp-content/uploads/a.png"
        );
    }

    #[test]
    fn excluded_urls_are_returned_unchanged() {
        let r = rewriter(&full_config());
        let url = "https://example.com/wp-content/plugins/x/ajax.php";
        assert_eq!(r.rewrite(url), url);
        assert_eq!(r.rewrite_content(url), url);
        assert!(r.is_excluded(url));
    }

    #[test]
    fn missing_cdn_url_disables_that_substitution() {
        let cfg = CdnConfig {
            includes_cdn_url: None,
            ..full_config()
        };
        let r = rewriter(&cfg);
        // Includes pair incomplete: pass-through.
        assert_eq!(
            r.rewrite("https://example.com/wp-includes/js/jquery.js"),
            "https://example.com/wp-includes/js/jquery.js"
        );
        // Content pair still applies.
        assert_eq!(
            r.rewrite("https://example.com/wp-content/uploads/a.png"),
            "https://cdn.example.com/wp-content/uploads/a.png"
        );
    }

    #[test]
    fn unconfigured_rewriter_is_identity() {
        let r = rewriter(&CdnConfig::default());
        let url = "https://example.com/wp-content/uploads/a.png";
        assert_eq!(r.rewrite(url), url);
        assert_eq!(r.rewrite_content(url), url);
    }

    #[test]
    fn prefix_is_replaced_at_most_once() {
        // Relative prefixes exercise the "prefix repeated later in the URL"
        // case; build the rules directly since they are not absolute URLs.
        let rules = RewriteRules {
            includes: None,
            content: Some(Substitution::new("/wp-content", "/cdn-content")),
            excludes: ExcludePattern::default(),
        };
        let r = Rewriter::new(rules);
        assert_eq!(
            r.rewrite_content("/wp-content/uploads/wp-content.png"),
            "/cdn-content/uploads/wp-content.png"
        );
    }

    #[test]
    fn rewrite_is_idempotent() {
        let r = rewriter(&full_config());
        let once = r.rewrite("https://example.com/wp-includes/js/jquery.js");
        let twice = r.rewrite(&once);
        assert_eq!(once, twice);

        let once = r.rewrite_content("https://example.com/wp-content/uploads/a.png");
        let twice = r.rewrite_content(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn early_phase_uses_its_own_excludes() {
        let cfg = CdnConfig {
            excludes_early: Some(r"\.xml".to_string()),
            ..full_config()
        };
        let early = Rewriter::for_phase(&cfg, Phase::Early).unwrap();
        let template = Rewriter::for_phase(&cfg, Phase::Template).unwrap();

        let sitemap = "https://example.com/wp-content/sitemap.xml";
        assert_eq!(early.rewrite_content(sitemap), sitemap);
        assert_eq!(
            template.rewrite_content(sitemap),
            "https://cdn.example.com/wp-content/sitemap.xml"
        );
    }
}
