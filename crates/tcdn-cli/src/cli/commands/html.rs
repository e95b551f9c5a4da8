//! `tcdn html <path>` – rewrite editor-inserted <img> tags in a fragment.

use anyhow::Result;
use std::path::Path;
use tcdn_core::config::CdnConfig;
use tcdn_core::hooks::Phase;
use tcdn_core::html::rewrite_images;
use tcdn_core::rewriter::Rewriter;

use super::read_input;

pub fn run_html(cfg: &CdnConfig, path: &Path) -> Result<()> {
    let input = read_input(path)?;
    let rewriter = Rewriter::for_phase(cfg, Phase::Template)?;
    print!("{}", rewrite_images(&rewriter, &input));
    Ok(())
}
