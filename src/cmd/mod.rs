//! Command handlers for css-slim CLI
//!
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod init;
pub mod minify;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use minify::{cmd_minify, MinifyArgs};
