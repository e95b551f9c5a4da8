//! `tcdn config-path` – show where configuration lives.

use anyhow::Result;
use tcdn_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
