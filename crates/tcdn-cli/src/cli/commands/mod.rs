//! CLI command handlers. Each command is in its own file for clarity.

mod check;
mod config_path;
mod html;
mod media;
mod rewrite;

pub use check::run_check;
pub use config_path::run_config_path;
pub use html::run_html;
pub use media::{run_thumbnail, run_uploads};
pub use rewrite::run_rewrite;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a command input from a file, or from stdin when the path is "-".
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}
