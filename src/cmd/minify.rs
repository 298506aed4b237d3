//! Minify command implementation
//!
//! Handles the `css-slim minify` command which reads CSS from a file or
//! stdin, minifies it and writes the result to stdout or a file.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{ConfigFile, ConfigLoader};
use crate::error::CssSlimError;
use crate::infra::{read_all, FileSystem, RealFileSystem};
use crate::output::JsonOutput;
use crate::pipeline::{
    ConsoleNotifier, LogDiagnostics, MinifyPipeline, NoOpSink, NotificationSink, ResultFormatter,
};

const STDIN_NAME: &str = "<stdin>";
const UTF8_BOM: &str = "\u{feff}";

/// Options for a single `minify` invocation
#[derive(Debug, Clone, Default)]
pub struct MinifyArgs {
    /// Input file; `None` or `-` reads stdin
    pub input: Option<PathBuf>,
    /// Output file; `None` writes to stdout
    pub output: Option<PathBuf>,
    /// Print a JSON report instead of the human summary
    pub json: bool,
    /// Override the configured length ceiling
    pub max_chars: Option<usize>,
    /// Suppress the summary and notifications
    pub quiet: bool,
}

impl MinifyArgs {
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

/// Minify CSS from a file or stdin
///
/// Loads `.css-slim.toml` from the current directory, then runs the
/// pipeline on the input.
///
/// # Examples
///
/// ```no_run
/// use css_slim::cmd::{cmd_minify, MinifyArgs};
/// use std::path::PathBuf;
///
/// cmd_minify(&MinifyArgs {
///     input: Some(PathBuf::from("style.css")),
///     output: Some(PathBuf::from("style.min.css")),
///     ..Default::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The input file doesn't exist or can't be read
/// - The input is not valid UTF-8
/// - The input is blank
/// - The config file is invalid
pub fn cmd_minify(args: &MinifyArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = ConfigLoader::load(&project_root)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_minify(args, &config, &RealFileSystem, stdin.lock(), &mut stdout)
}

/// Run the minify command against injected I/O
pub fn run_minify<FS: FileSystem>(
    args: &MinifyArgs,
    config: &ConfigFile,
    fs: &FS,
    stdin: impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let pipeline_config = config.pipeline_config(args.max_chars);
    let max_chars = pipeline_config.max_chars;
    if max_chars == 0 {
        return Err(CssSlimError::InvalidConfig {
            reason: "--max-chars must be greater than 0".to_string(),
        }
        .into());
    }

    let source = read_source(args.input_path(), fs, stdin)?;

    let console_notifier = ConsoleNotifier;
    let notifier: &dyn NotificationSink = if args.quiet || args.json || !config.notifications {
        &NoOpSink
    } else {
        &console_notifier
    };
    let pipeline = MinifyPipeline::with_sinks(pipeline_config, notifier, LogDiagnostics);

    let spinner = processing_spinner(args.quiet || args.json);
    let result = pipeline.run(&source);
    spinner.finish_and_clear();
    let outcome = result.map_err(CssSlimError::from)?;

    if let Some(path) = &args.output {
        fs.write(path, &outcome.output).map_err(|e| CssSlimError::Io {
            context: format!("writing {}", path.display()),
            source: e,
        })?;
        log::info!("wrote {}", path.display());
    }

    if args.json {
        let doc = JsonOutput::from_outcome(&outcome, max_chars, args.output.is_none());
        writeln!(out, "{}", doc.to_json()?)?;
        return Ok(());
    }

    if args.output.is_none() {
        writeln!(out, "{}", outcome.output)?;
    }

    if !args.quiet {
        ResultFormatter::print_summary(&outcome, source.chars().count(), max_chars);
    }

    Ok(())
}

/// Read and decode the input, rejecting anything that isn't UTF-8
fn read_source<FS: FileSystem>(path: Option<&Path>, fs: &FS, stdin: impl Read) -> Result<String> {
    let (bytes, name) = match path {
        Some(path) => {
            let bytes = fs.read(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CssSlimError::InputNotFound {
                    path: path.to_path_buf(),
                },
                _ => CssSlimError::Io {
                    context: format!("reading {}", path.display()),
                    source: e,
                },
            })?;
            (bytes, path.display().to_string())
        }
        None => {
            let bytes = read_all(stdin).map_err(|e| CssSlimError::Io {
                context: format!("reading {}", STDIN_NAME),
                source: e,
            })?;
            (bytes, STDIN_NAME.to_string())
        }
    };

    let text = std::str::from_utf8(&bytes).map_err(|e| CssSlimError::InvalidEncoding {
        source_name: name.clone(),
        source: e,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), name);

    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}

fn processing_spinner(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("PROCESSING...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
