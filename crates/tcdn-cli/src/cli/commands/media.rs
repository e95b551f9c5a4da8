//! `tcdn uploads <path>` / `tcdn thumbnail <path>` – rewrite JSON payloads.

use anyhow::{Context, Result};
use std::path::Path;
use tcdn_core::config::CdnConfig;
use tcdn_core::hooks::Phase;
use tcdn_core::media::{self, AttachmentImage, UploadDir};
use tcdn_core::rewriter::Rewriter;

use super::read_input;

pub fn run_uploads(cfg: &CdnConfig, path: &Path) -> Result<()> {
    let input = read_input(path)?;
    let uploads: UploadDir =
        serde_json::from_str(&input).context("invalid upload-dir JSON")?;
    let rewriter = Rewriter::for_phase(cfg, Phase::Template)?;
    let rewritten = media::rewrite_upload_dir(&rewriter, uploads);
    println!("{}", serde_json::to_string_pretty(&rewritten)?);
    Ok(())
}

pub fn run_thumbnail(cfg: &CdnConfig, path: &Path) -> Result<()> {
    let input = read_input(path)?;
    let image: Option<AttachmentImage> =
        serde_json::from_str(&input).context("invalid attachment-image JSON")?;
    let rewriter = Rewriter::for_phase(cfg, Phase::Template)?;
    let rewritten = media::rewrite_thumbnail(&rewriter, image);
    println!("{}", serde_json::to_string_pretty(&rewritten)?);
    Ok(())
}
