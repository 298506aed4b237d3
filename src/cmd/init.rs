//! Init command implementation
//!
//! Handles the `css-slim init` command which writes a `.css-slim.toml`
//! with default settings.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::fmt::{CHECKMARK, INFO, ROCKET, WARNING};

/// Create `.css-slim.toml` in the current directory
///
/// Refuses to overwrite an existing file unless `force` is set.
///
/// # Examples
///
/// ```no_run
/// use css_slim::cmd::init::cmd_init;
///
/// cmd_init(false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(force: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    init_in(&project_root, force)
}

/// Write the default config into `project_root`
///
/// An existing file is reported and left untouched unless `force` is set.
pub fn init_in(project_root: &Path, force: bool) -> Result<()> {
    println!(
        "{} {} Initializing css-slim",
        ROCKET,
        style("css-slim init").bold()
    );
    println!();

    if ConfigLoader::exists(project_root) && !force {
        println!(
            "{} Config file already exists: {}",
            WARNING,
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Use --force to overwrite it with defaults.");
        return Ok(());
    }

    let config = ConfigFile::default();
    ConfigLoader::save(&config, project_root)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(config::CONFIG_FILE_NAME).cyan()
    );
    println!("{}  Settings:", INFO);
    println!("   max-chars = {}", style(config.max_chars).green());
    println!("   notifications = {}", style(config.notifications).green());

    Ok(())
}
