pub mod config;
pub mod logging;

pub mod excludes;
pub mod hooks;
pub mod html;
pub mod media;
pub mod rewriter;
