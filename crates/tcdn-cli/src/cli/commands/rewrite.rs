//! `tcdn rewrite <url>` / `tcdn rewrite-content <url>`.

use anyhow::Result;
use tcdn_core::config::CdnConfig;
use tcdn_core::hooks::Phase;
use tcdn_core::rewriter::Rewriter;

/// Rewrite a single URL and print the result. `full` also applies the
/// includes substitution (the `rewrite` subcommand); otherwise only the
/// content substitution runs (`rewrite-content`).
pub fn run_rewrite(cfg: &CdnConfig, url: &str, phase: Phase, full: bool) -> Result<()> {
    let rewriter = Rewriter::for_phase(cfg, phase)?;
    let rewritten = if full {
        rewriter.rewrite(url)
    } else {
        rewriter.rewrite_content(url)
    };
    println!("{rewritten}");
    Ok(())
}
