use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use css_slim::cmd;
use std::path::PathBuf;
use std::process;

/// Lexical CSS minifier
///
/// css-slim strips comments and redundant whitespace from CSS and reports
/// how many bytes were saved.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Minify CSS from a file or stdin
    Minify {
        /// CSS file to minify (omit or use '-' for stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write minified CSS to this file instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Output a JSON report (for scripts and CI)
        #[arg(long)]
        json: bool,

        /// Maximum input length in characters (overrides .css-slim.toml)
        #[arg(long, value_name = "N")]
        max_chars: Option<usize>,

        /// Suppress the summary and notifications
        #[arg(short, long)]
        quiet: bool,
    },

    /// Initialize css-slim configuration
    Init {
        /// Overwrite an existing .css-slim.toml
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Minify {
            input,
            output,
            json,
            max_chars,
            quiet,
        }) => cmd::cmd_minify(&cmd::MinifyArgs {
            input,
            output,
            json,
            max_chars,
            quiet,
        }),
        Some(Commands::Init { force }) => cmd::cmd_init(force),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell, &mut Cli::command(), &mut std::io::stdout());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("css-slim v{}", env!("CARGO_PKG_VERSION"));
            println!("Lexical CSS minifier\n");
            println!("Usage: css-slim <COMMAND>\n");
            println!("Commands:");
            println!("  minify       Minify CSS from a file or stdin");
            println!("  init         Initialize css-slim configuration");
            println!("  completions  Generate shell completions");
            println!("\nRun 'css-slim <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use css_slim::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
