//! Inline image rewriting for post content and widget markup.

use crate::rewriter::Rewriter;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Only catch images inserted with the editor: a `src` attribute followed by
/// an `alt` attribute on the same tag.
///
/// ```text
///           (        1        )(  2  )(         3          )
/// ```
static IMG_SRC_ALT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<img [^>]*\bsrc=")([^"]+)(" [^>]*\balt="[^"]*")"#)
        .expect("image tag pattern compiles")
});

/// Rewrites the `src` of editor-inserted `<img>` tags through the content
/// substitution. Tags without a trailing `alt` attribute are left alone.
pub fn rewrite_images(rewriter: &Rewriter, html: &str) -> String {
    IMG_SRC_ALT
        .replace_all(html, |caps: &Captures<'_>| {
            let url = rewriter.rewrite_content(&caps[2]);
            format!("{}{}{}", &caps[1], url, &caps[3])
        })
        .into_owned()
}
