//! `tcdn check <url>` – report exclusion status.

use anyhow::Result;
use tcdn_core::config::CdnConfig;
use tcdn_core::hooks::Phase;
use tcdn_core::rewriter::Rewriter;

pub fn run_check(cfg: &CdnConfig, url: &str, phase: Phase) -> Result<()> {
    let rewriter = Rewriter::for_phase(cfg, phase)?;
    if rewriter.is_excluded(url) {
        println!("excluded: {url}");
    } else {
        println!("rewritable: {url} -> {}", rewriter.rewrite(url));
    }
    Ok(())
}
