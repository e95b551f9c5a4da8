//! Filter bindings and the values flowing through them.

use crate::html;
use crate::media::{self, AttachmentImage, UploadDir};
use crate::rewriter::Rewriter;

use super::LATE_PRIORITY;

/// Which transform a filter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    /// Rewrite both the includes and the content prefix of a URL.
    Rewrite,
    /// Rewrite only the content prefix of a URL.
    RewriteContent,
    /// Rewrite editor-inserted `<img>` tags in an HTML fragment.
    Images,
    /// Rewrite the public URLs of an upload directory descriptor.
    Uploads,
    /// Rewrite an attachment image `src`, if any.
    Thumbnail,
}

/// A value passing through a host filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Url(String),
    Html(String),
    Uploads(UploadDir),
    Image(Option<AttachmentImage>),
}

impl Callback {
    /// Apply this callback. A value kind the callback does not handle passes
    /// through unchanged; the host stays in control of what it sends where.
    pub fn apply(self, rewriter: &Rewriter, value: FilterValue) -> FilterValue {
        match (self, value) {
            (Callback::Rewrite, FilterValue::Url(url)) => {
                FilterValue::Url(rewriter.rewrite(&url))
            }
            (Callback::RewriteContent, FilterValue::Url(url)) => {
                FilterValue::Url(rewriter.rewrite_content(&url))
            }
            (Callback::Images, FilterValue::Html(html)) => {
                FilterValue::Html(html::rewrite_images(rewriter, &html))
            }
            (Callback::Uploads, FilterValue::Uploads(uploads)) => {
                FilterValue::Uploads(media::rewrite_upload_dir(rewriter, uploads))
            }
            (Callback::Thumbnail, FilterValue::Image(image)) => {
                FilterValue::Image(media::rewrite_thumbnail(rewriter, image))
            }
            (_, value) => value,
        }
    }
}

/// One filter registration the host dispatcher should install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub filter: &'static str,
    pub callback: Callback,
    pub priority: u32,
}

impl Binding {
    pub fn new(filter: &'static str, callback: Callback) -> Self {
        Self {
            filter,
            callback,
            priority: LATE_PRIORITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CdnConfig;
    use crate::hooks::Phase;

    fn rewriter() -> Rewriter {
        let cfg = CdnConfig {
            includes_origin_url: Some("https://example.com/wp-includes".to_string()),
            includes_cdn_url: Some("https://cdn.example.com/wp-includes".to_string()),
            content_origin_url: Some("https://example.com/wp-content".to_string()),
            content_cdn_url: Some("https://cdn.example.com/wp-content".to_string()),
            ..CdnConfig::default()
        };
        Rewriter::for_phase(&cfg, Phase::Template).unwrap()
    }

    #[test]
    fn rewrite_callback_covers_both_prefixes() {
        let out = Callback::Rewrite.apply(
            &rewriter(),
            FilterValue::Url("https://example.com/wp-includes/js/jquery.js".to_string()),
        );
        assert_eq!(
            out,
            FilterValue::Url("https://cdn.example.com/wp-includes/js/jquery.js".to_string())
        );
    }

    #[test]
    fn content_callback_skips_includes_prefix() {
        let out = Callback::RewriteContent.apply(
            &rewriter(),
            FilterValue::Url("https://example.com/wp-includes/js/jquery.js".to_string()),
        );
        assert_eq!(
            out,
            FilterValue::Url("https://example.com/wp-includes/js/jquery.js".to_string())
        );
    }

    #[test]
    fn mismatched_value_kind_passes_through() {
        let html = FilterValue::Html("<p>no urls here</p>".to_string());
        assert_eq!(Callback::Rewrite.apply(&rewriter(), html.clone()), html);

        let url = FilterValue::Url("https://example.com/wp-content/a.png".to_string());
        assert_eq!(Callback::Images.apply(&rewriter(), url.clone()), url);
    }

    #[test]
    fn binding_defaults_to_late_priority() {
        let binding = Binding::new("script_src", Callback::Rewrite);
        assert_eq!(binding.priority, LATE_PRIORITY);
    }
}
