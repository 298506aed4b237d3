//! Completions command implementation
//!
//! Handles the `css-slim completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts
///
/// Outputs the completion script for `shell` to `out`. `cmd` is the
/// binary's clap command, built by the caller from its derive parser.
///
/// # Examples
///
/// ```bash
/// # Bash
/// css-slim completions bash > /etc/bash_completion.d/css-slim
///
/// # Zsh
/// css-slim completions zsh > ~/.zfunc/_css-slim
///
/// # Fish
/// css-slim completions fish > ~/.config/fish/completions/css-slim.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
