//! Hook planning for the host dispatcher.
//!
//! This crate does not own the host's filter dispatcher. Instead it plans,
//! per request phase, which filters should be attached and with which
//! callback, and hands the plan back as a [`HookSet`]. The host (or a test
//! standing in for it) then feeds each filter value through
//! [`HookSet::apply`].

mod binding;
mod host;

pub use binding::{Binding, Callback, FilterValue};
pub use host::HostContext;

use crate::config::CdnConfig;
use crate::excludes::ExcludesError;
use crate::rewriter::Rewriter;

/// Request phase in the host lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before template selection. Sitemaps and similar renderers produce
    /// URLs this early.
    Early,
    /// Template rendering of a frontend page.
    Template,
}

/// Registration priority: run after everything else has shaped the URL.
pub const LATE_PRIORITY: u32 = 9999;

/// Filter names forming the contract with the host dispatcher.
pub mod filters {
    /// Early passthrough filter other components may invoke directly.
    pub const CDN_REWRITE_EARLY: &str = "cdn_rewrite_early";
    /// Sitemap image URLs, generated before the template phase.
    pub const SITEMAP_IMAGE_SRC: &str = "sitemap_image_src";

    pub const SCRIPT_SRC: &str = "script_src";
    pub const STYLE_SRC: &str = "style_src";
    pub const PLUGIN_ASSET_URL: &str = "plugin_asset_url";
    pub const THEME_ROOT_URL: &str = "theme_root_url";
    pub const UPLOAD_DIR: &str = "upload_dir";
    pub const POST_CONTENT: &str = "post_content";
    pub const WIDGET_HTML: &str = "widget_html";
    pub const ATTACHMENT_IMAGE: &str = "attachment_image";
    /// Social/opengraph preview image URL from third-party SEO components.
    pub const SOCIAL_PREVIEW_IMAGE: &str = "social_preview_image";
    /// Template-phase passthrough filter for third parties.
    pub const CDN_REWRITE: &str = "cdn_rewrite";
}

/// A planned set of filter bindings for one phase.
#[derive(Debug, Clone)]
pub struct HookSet {
    pub phase: Phase,
    rewriter: Rewriter,
    bindings: Vec<Binding>,
}

impl HookSet {
    /// The registrations the host dispatcher should install.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn rewriter(&self) -> &Rewriter {
        &self.rewriter
    }

    /// Dispatch one filter invocation. Unknown filters, and value kinds the
    /// bound callback cannot handle, pass through unchanged.
    pub fn apply(&self, filter: &str, value: FilterValue) -> FilterValue {
        match self.bindings.iter().find(|b| b.filter == filter) {
            Some(binding) => binding.callback.apply(&self.rewriter, value),
            None => value,
        }
    }
}

/// Plan the hooks for `phase`, or `None` when rewriting is gated off.
pub fn plan(
    cfg: &CdnConfig,
    ctx: &dyn HostContext,
    phase: Phase,
) -> Result<Option<HookSet>, ExcludesError> {
    // Admin screens and debug-asset sessions always see origin URLs.
    if ctx.is_admin() || ctx.script_debug() {
        return Ok(None);
    }

    match phase {
        Phase::Early => {
            if cfg.disable_early {
                return Ok(None);
            }
        }
        Phase::Template => {
            // Users who may edit frontend pages keep seeing origin URLs.
            if cfg.disable || ctx.user_can(cfg.capability()) {
                return Ok(None);
            }
        }
    }

    let rewriter = Rewriter::for_phase(cfg, phase)?;
    let bindings = match phase {
        Phase::Early => vec![
            Binding::new(filters::SITEMAP_IMAGE_SRC, Callback::RewriteContent),
            Binding::new(filters::CDN_REWRITE_EARLY, Callback::RewriteContent),
        ],
        Phase::Template => vec![
            // Content-area URLs.
            Binding::new(filters::PLUGIN_ASSET_URL, Callback::RewriteContent),
            Binding::new(filters::THEME_ROOT_URL, Callback::RewriteContent),
            Binding::new(filters::UPLOAD_DIR, Callback::Uploads),
            // Script and style URLs live under both prefixes.
            Binding::new(filters::SCRIPT_SRC, Callback::Rewrite),
            Binding::new(filters::STYLE_SRC, Callback::Rewrite),
            // Rendered markup.
            Binding::new(filters::POST_CONTENT, Callback::Images),
            Binding::new(filters::WIDGET_HTML, Callback::Images),
            Binding::new(filters::ATTACHMENT_IMAGE, Callback::Thumbnail),
            // Third parties.
            Binding::new(filters::SOCIAL_PREVIEW_IMAGE, Callback::RewriteContent),
            Binding::new(filters::CDN_REWRITE, Callback::RewriteContent),
        ],
    };

    tracing::debug!(?phase, bindings = bindings.len(), "planned cdn hooks");

    Ok(Some(HookSet {
        phase,
        rewriter,
        bindings,
    }))
}
