//! Stylesheet fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small but realistic stylesheet
pub const SAMPLE_CSS: &str = r#"/*
 * Site theme
 */
:root {
  --accent: #ff003c;
}

html, body {
  margin: 0;
  padding: 0;
  font-family: "Inter", sans-serif;
}

/* Buttons */
.btn {
  display: inline-block;
  padding: 4px 8px ;
  color : var(--accent);
}

@media (max-width: 600px) {
  .btn { display: block; }
}
"#;

/// Expected minified form of [`SAMPLE_CSS`]
pub const SAMPLE_MINIFIED: &str = concat!(
    ":root{--accent:#ff003c}",
    "html,body{margin:0;padding:0;font-family:\"Inter\",sans-serif}",
    ".btn{display:inline-block;padding:4px 8px;color:var(--accent)}",
    "@media (max-width:600px){.btn{display:block}}",
);

/// Create a temp dir containing `name` with `contents`
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the file) - the TempDir must be kept alive
pub fn write_stylesheet(name: &str, contents: &[u8]) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(name);
    fs::write(&path, contents)?;
    Ok((temp_dir, path))
}

/// Write a `.css-slim.toml` into `dir`
pub fn write_config(dir: &TempDir, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.path().join(".css-slim.toml");
    fs::write(&path, contents)?;
    Ok(path)
}
