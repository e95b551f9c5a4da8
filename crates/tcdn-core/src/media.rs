//! Typed host payloads carrying asset URLs.
//!
//! The host hands structured data through some filters instead of bare URL
//! strings; only the public URL fields inside are rewritten.

use crate::rewriter::Rewriter;
use serde::{Deserialize, Serialize};

/// Upload directory descriptor as handed over by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadDir {
    /// Filesystem path of the current upload dir (not rewritten).
    pub path: String,
    /// Public URL of the current (dated) subdirectory.
    pub url: String,
    /// Date-based subdirectory, e.g. `/2026/08`.
    #[serde(default)]
    pub subdir: String,
    /// Filesystem base directory (not rewritten).
    pub basedir: String,
    /// Public base URL of the uploads area.
    pub baseurl: String,
    /// Host-reported error, passed through untouched.
    #[serde(default)]
    pub error: Option<String>,
}

/// Rewrites the public URLs of an upload directory; filesystem paths stay.
pub fn rewrite_upload_dir(rewriter: &Rewriter, mut uploads: UploadDir) -> UploadDir {
    uploads.url = rewriter.rewrite_content(&uploads.url);
    uploads.baseurl = rewriter.rewrite_content(&uploads.baseurl);
    uploads
}

/// Attachment image data, as returned by thumbnail lookups. The host hands
/// over nothing when the attachment has no image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
    /// True when this is a resized intermediate, not the original file.
    #[serde(default)]
    pub is_intermediate: bool,
}

/// Rewrites the `src` of an attachment image, if there is one.
pub fn rewrite_thumbnail(
    rewriter: &Rewriter,
    image: Option<AttachmentImage>,
) -> Option<AttachmentImage> {
    image.map(|mut image| {
        image.src = rewriter.rewrite_content(&image.src);
        image
    })
}
