use crate::excludes::ExcludePattern;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Capability whose holders keep seeing origin URLs (so page editors can
/// check their markup against the origin server).
pub const DEFAULT_CAPABILITY: &str = "edit_pages";

/// Global configuration loaded from `~/.config/tcdn/config.toml`.
///
/// Each origin/CDN pair is independent: a missing CDN URL silently disables
/// that substitution, so a half-configured file degrades to pass-through
/// instead of erroring out mid-render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CdnConfig {
    /// Origin prefix of host core assets (scripts and styles the host ships),
    /// e.g. `https://example.com/wp-includes`.
    #[serde(default)]
    pub includes_origin_url: Option<String>,
    /// CDN replacement for the includes prefix. None disables the includes
    /// substitution.
    #[serde(default)]
    pub includes_cdn_url: Option<String>,
    /// Origin prefix of the content area (uploads, themes, plugin assets),
    /// e.g. `https://example.com/wp-content`.
    #[serde(default)]
    pub content_origin_url: Option<String>,
    /// CDN replacement for the content prefix. None disables the content
    /// substitution.
    #[serde(default)]
    pub content_cdn_url: Option<String>,
    /// Template-phase exclusion regex; defaults to `\.php`.
    #[serde(default)]
    pub excludes: Option<String>,
    /// Early-phase exclusion regex; defaults to `\.php`.
    #[serde(default)]
    pub excludes_early: Option<String>,
    /// Host capability that disables template-phase rewriting for the current
    /// user; defaults to `edit_pages`.
    #[serde(default)]
    pub capability: Option<String>,
    /// Kill switch for the template phase.
    #[serde(default)]
    pub disable: bool,
    /// Kill switch for the early phase.
    #[serde(default)]
    pub disable_early: bool,
}

impl CdnConfig {
    pub fn capability(&self) -> &str {
        self.capability.as_deref().unwrap_or(DEFAULT_CAPABILITY)
    }

    /// Validate URL fields and exclusion patterns up front, before any
    /// transform runs.
    pub fn validate(&self) -> Result<()> {
        let url_fields = [
            ("includes_origin_url", &self.includes_origin_url),
            ("includes_cdn_url", &self.includes_cdn_url),
            ("content_origin_url", &self.content_origin_url),
            ("content_cdn_url", &self.content_cdn_url),
        ];
        for (name, value) in url_fields {
            if let Some(value) = value {
                Url::parse(value)
                    .with_context(|| format!("config {name} is not a valid URL: {value}"))?;
            }
        }

        for (name, pattern) in [
            ("excludes", &self.excludes),
            ("excludes_early", &self.excludes_early),
        ] {
            if let Some(pattern) = pattern {
                ExcludePattern::new(pattern).with_context(|| format!("config {name}"))?;
            }
        }

        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tcdn")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CdnConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CdnConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<CdnConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config at {}", path.display()))?;
    let cfg: CdnConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}
